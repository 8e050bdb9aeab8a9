//! Datasets of the gallery: seeded random samples, uniform tables and the
//! fixed values of the errorbar and pie demos.

use polars_core::prelude::{DataFrame, NamedFrom, Series};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::Error;

/// Seed of every random dataset, so that repeated runs draw the same values.
pub const SEED: u64 = 1234;

pub const PIE_LABELS: [&str; 4] = ["Cats", "Dogs", "Frogs", "Others"];
/// Percentages of the pie wedges.
pub const PIE_FRACTIONS: [f64; 4] = [45., 30., 15., 10.];
/// Only "Dogs" is pulled out of the pie.
pub const PIE_EXPLODE: [f64; 4] = [0., 0.05, 0., 0.];

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `n` draws from the standard normal distribution.
pub fn normal_samples(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0 .. n).map(|_| rng.sample(StandardNormal)).collect()
}

/// The errorbar dataset `(x, y, yerr)`: y = x², yerr = x/2 for x = 0..4.
pub fn errorbar_data() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0 .. 5).map(f64::from).collect();
    let y = x.iter().map(|x| x * x).collect();
    let err = x.iter().map(|x| x / 2.).collect();
    (x, y, err)
}

/// A table of named numeric columns of equal length.
#[derive(Debug, Clone)]
pub struct Frame {
    df: DataFrame,
}

impl Frame {
    /// `rows` rows of values uniform in [0, 1), one column per name.
    /// Values are drawn row by row.
    pub fn uniform(
        rng: &mut StdRng, rows: usize, columns: &[&str]
    ) -> Result<Frame, Error> {
        let mut values = vec![Vec::with_capacity(rows); columns.len()];
        for _ in 0 .. rows {
            for col in values.iter_mut() {
                col.push(rng.random::<f64>());
            }
        }
        let series: Vec<Series> = columns.iter().zip(values)
            .map(|(name, v)| Series::new(name, v))
            .collect();
        Ok(Frame { df: DataFrame::new(series)? })
    }

    /// Values of the column `name`.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, Error> {
        let col = self.df.column(name)?.f64()?;
        Ok(col.into_no_null_iter().collect())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.df.get_column_names()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_samples() {
        let a = normal_samples(&mut seeded_rng(SEED), 500);
        let b = normal_samples(&mut seeded_rng(SEED), 500);
        assert_eq!(a.len(), 500);
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
        assert_ne!(a, normal_samples(&mut seeded_rng(SEED + 1), 500));
    }

    #[test]
    fn normal_samples_look_standard() {
        let x = normal_samples(&mut seeded_rng(SEED), 5000);
        let mean = x.iter().sum::<f64>() / x.len() as f64;
        let var = x.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / x.len() as f64;
        assert!(mean.abs() < 0.1, "mean = {mean}");
        assert!((var - 1.).abs() < 0.1, "var = {var}");
    }

    #[test]
    fn errorbar_values() {
        let (x, y, err) = errorbar_data();
        assert_eq!(x, [0., 1., 2., 3., 4.]);
        assert_eq!(y, [0., 1., 4., 9., 16.]);
        assert_eq!(err, [0., 0.5, 1., 1.5, 2.]);
    }

    #[test]
    fn pie_fractions() {
        assert_eq!(PIE_FRACTIONS.iter().sum::<f64>(), 100.);
        let exploded: Vec<_> = PIE_EXPLODE.iter().enumerate()
            .filter(|(_, &e)| e != 0.).collect();
        assert_eq!(exploded, [(1, &0.05)]);
        assert_eq!(PIE_LABELS.len(), PIE_FRACTIONS.len());
    }

    #[test]
    fn uniform_frame() -> Result<(), Error> {
        let mut rng = seeded_rng(SEED);
        let df = Frame::uniform(&mut rng, 10, &["a", "b", "c", "d"])?;
        assert_eq!(df.height(), 10);
        assert_eq!(df.column_names(), ["a", "b", "c", "d"]);
        let a = df.column("a")?;
        assert_eq!(a.len(), 10);
        assert!(a.iter().all(|v| (0. .. 1.).contains(v)));
        // Row-major draws: the first row takes the first four values.
        let mut rng = seeded_rng(SEED);
        let first: Vec<f64> = (0 .. 4).map(|_| rng.random()).collect();
        assert_eq!(first[1], df.column("b")?[0]);
        assert!(df.column("z").is_err());
        Ok(())
    }
}
