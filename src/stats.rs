//! Histograms with equal-width bins.

use crate::Error;

/// Bin edges and bar heights of a histogram.
///
/// The bins cover `[min, max]` of the data; every bin is half-open except
/// the last one, which also holds the maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    heights: Vec<f64>,
}

impl Histogram {
    /// Number of bins when none is asked for.
    pub const DEFAULT_BINS: usize = 10;

    /// Count the values of `data` falling in each of `bins` bins.
    pub fn new(data: &[f64], bins: usize) -> Result<Self, Error> {
        if bins == 0 {
            return Err(Error::Shape("a histogram needs at least one bin".into()));
        }
        let (mut lo, mut hi) = data.iter().filter(|x| !x.is_nan()).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &x| (lo.min(x), hi.max(x)));
        if data.is_empty() {
            (lo, hi) = (0., 1.);
        } else if lo == hi {
            (lo, hi) = (lo - 0.5, hi + 0.5);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return Err(Error::Shape(format!(
                "range [{lo}, {hi}] of the data is not finite")));
        }
        let step = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> =
            (0 .. bins).map(|i| lo + i as f64 * step).collect();
        edges.push(hi);

        let mut heights = vec![0.; bins];
        let norm = bins as f64 / (hi - lo);
        for &x in data.iter().filter(|x| !x.is_nan()) {
            let mut i = (((x - lo) * norm) as usize).min(bins - 1);
            // Rounding may put `x` one bin off its edges.
            if i > 0 && x < edges[i] {
                i -= 1;
            } else if i < bins - 1 && x >= edges[i + 1] {
                i += 1;
            }
            heights[i] += 1.;
        }
        Ok(Histogram { edges, heights })
    }

    /// Histogram normalised so that its total area is 1, i.e. an
    /// empirical probability density.
    pub fn density(data: &[f64], bins: usize) -> Result<Self, Error> {
        let mut h = Self::new(data, bins)?;
        let total: f64 = h.heights.iter().sum();
        if total > 0. {
            let widths: Vec<f64> = h.widths().collect();
            for (height, w) in h.heights.iter_mut().zip(widths) {
                *height /= total * w;
            }
        }
        Ok(h)
    }

    pub fn bins(&self) -> usize {
        self.heights.len()
    }

    /// The `bins() + 1` bin edges, increasing.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Left edge of every bin.
    pub fn left_edges(&self) -> &[f64] {
        &self.edges[.. self.bins()]
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.windows(2).map(|w| w[1] - w[0])
    }

    /// Common width of the bins.
    pub fn bin_width(&self) -> f64 {
        (self.edges[self.bins()] - self.edges[0]) / self.bins() as f64
    }

    /// Σ height × width.
    pub fn area(&self) -> f64 {
        self.heights.iter().zip(self.widths()).map(|(h, w)| h * w).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{normal_samples, seeded_rng, SEED};

    #[test]
    fn counts_every_value_once() -> Result<(), Error> {
        let x = normal_samples(&mut seeded_rng(SEED), 500);
        let h = Histogram::new(&x, Histogram::DEFAULT_BINS)?;
        assert_eq!(h.bins(), 10);
        assert_eq!(h.edges().len(), 11);
        assert_eq!(h.heights().iter().sum::<f64>(), 500.);
        Ok(())
    }

    #[test]
    fn last_bin_is_closed() -> Result<(), Error> {
        let h = Histogram::new(&[0., 1., 2., 3., 4.], 4)?;
        assert_eq!(h.edges(), [0., 1., 2., 3., 4.]);
        assert_eq!(h.heights(), [1., 1., 1., 2.]);
        Ok(())
    }

    #[test]
    fn constant_data_is_centered() -> Result<(), Error> {
        let h = Histogram::new(&[2., 2., 2.], 2)?;
        assert_eq!(h.edges(), [1.5, 2., 2.5]);
        assert_eq!(h.heights(), [0., 3.]);
        Ok(())
    }

    #[test]
    fn density_has_unit_area() -> Result<(), Error> {
        let x = normal_samples(&mut seeded_rng(SEED), 500);
        for bins in [1, 7, 25, 100] {
            let h = Histogram::density(&x, bins)?;
            assert!((h.area() - 1.).abs() < 1e-12, "bins = {bins}");
        }
        let skewed: Vec<f64> = (0 .. 50).map(|i| f64::from(i).powi(3)).collect();
        let h = Histogram::density(&skewed, 25)?;
        assert!((h.area() - 1.).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn bad_input() {
        assert!(Histogram::new(&[1.], 0).is_err());
        assert!(Histogram::new(&[1., f64::INFINITY], 3).is_err());
        let empty = Histogram::density(&[], 3).unwrap();
        assert_eq!(empty.heights(), [0., 0., 0.]);
    }
}
