//! Linear image filters applied by 2-D correlation, and thresholding.

use ndarray::Array2;

use crate::Error;

/// Side length of the demo kernels.
pub const FILTER_SIZE: usize = 11;
/// Edge responses above this value are kept by [`threshold`].
pub const EDGE_THRESHOLD: f64 = 125.;

/// How pixels outside the image are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoundaryMode {
    /// Reflect about the edge, repeating the edge pixel:
    /// `d c b a | a b c d | d c b a`.
    #[default]
    Reflect,
    /// Reflect about the centre of the edge pixel:
    /// `d c b | a b c d | c b a`.
    Mirror,
    /// Repeat the edge pixel: `a a a | a b c d | d d d`.
    Nearest,
    /// Wrap around to the opposite edge: `b c d | a b c d | a b c`.
    Wrap,
    /// Fill with a constant value.
    Constant(f64),
}

impl BoundaryMode {
    /// Index in `0 .. n` standing for the (possibly outside) index `i`,
    /// `None` for the constant fill.
    fn resolve(self, i: isize, n: usize) -> Option<usize> {
        let n = n as isize;
        if (0 .. n).contains(&i) {
            return Some(i as usize);
        }
        let i = match self {
            BoundaryMode::Reflect => {
                let m = i.rem_euclid(2 * n);
                if m < n { m } else { 2 * n - 1 - m }
            }
            BoundaryMode::Mirror if n == 1 => 0,
            BoundaryMode::Mirror => {
                let m = i.rem_euclid(2 * n - 2);
                if m < n { m } else { 2 * n - 2 - m }
            }
            BoundaryMode::Nearest => i.clamp(0, n - 1),
            BoundaryMode::Wrap => i.rem_euclid(n),
            BoundaryMode::Constant(_) => return None,
        };
        Some(i as usize)
    }

    fn fill(self) -> f64 {
        match self {
            BoundaryMode::Constant(c) => c,
            _ => 0.,
        }
    }
}

/// Uniform averaging kernel of `size`×`size` weights 1/size².
pub fn average_kernel(size: usize) -> Array2<f64> {
    Array2::from_elem((size, size), 1. / (size * size) as f64)
}

/// Horizontal edge detector: three rows of `width` weights, ones on the
/// first row, zeros on the second, minus ones on the third.
pub fn horizontal_edge_kernel(width: usize) -> Array2<f64> {
    Array2::from_shape_fn((3, width), |(r, _)| 1. - r as f64)
}

/// Vertical edge detector, the transpose of [`horizontal_edge_kernel`].
pub fn vertical_edge_kernel(height: usize) -> Array2<f64> {
    horizontal_edge_kernel(height).reversed_axes()
}

/// Correlate `image` with `kernel`: each output pixel is the sum of the
/// products of the kernel weights with the pixels under it, the kernel
/// being centred at `(rows / 2, cols / 2)` on the output pixel.
pub fn correlate(
    image: &Array2<f64>, kernel: &Array2<f64>, mode: BoundaryMode
) -> Result<Array2<f64>, Error> {
    let (kr, kc) = kernel.dim();
    if kr == 0 || kc == 0 {
        return Err(Error::Shape(format!("empty {kr}×{kc} kernel")));
    }
    let (nr, nc) = image.dim();
    let (or, oc) = ((kr / 2) as isize, (kc / 2) as isize);
    // Resolve the neighbour indices once per row and per column.
    let rows: Vec<Vec<Option<usize>>> = (0 .. nr as isize)
        .map(|r| (0 .. kr as isize)
             .map(|a| mode.resolve(r + a - or, nr)).collect())
        .collect();
    let cols: Vec<Vec<Option<usize>>> = (0 .. nc as isize)
        .map(|c| (0 .. kc as isize)
             .map(|b| mode.resolve(c + b - oc, nc)).collect())
        .collect();
    let fill = mode.fill();
    Ok(Array2::from_shape_fn((nr, nc), |(r, c)| {
        let mut acc = 0.;
        for ((a, b), &w) in kernel.indexed_iter() {
            let v = match (rows[r][a], cols[c][b]) {
                (Some(i), Some(j)) => image[[i, j]],
                _ => fill,
            };
            acc += w * v;
        }
        acc
    }))
}

/// Mask of the pixels strictly above `level`.
pub fn threshold(image: &Array2<f64>, level: f64) -> Array2<bool> {
    image.mapv(|v| v > level)
}

/// An image with its filtered versions and their edge masks.
#[derive(Debug, Clone)]
pub struct FilterBank {
    pub original: Array2<f64>,
    pub average: Array2<f64>,
    pub horizontal: Array2<f64>,
    pub vertical: Array2<f64>,
    pub horizontal_mask: Array2<bool>,
    pub vertical_mask: Array2<bool>,
}

impl FilterBank {
    /// Apply the averaging and the two edge kernels of side
    /// [`FILTER_SIZE`] to `image`, and threshold the edges at
    /// [`EDGE_THRESHOLD`].
    pub fn apply(image: Array2<f64>, mode: BoundaryMode)
                 -> Result<Self, Error> {
        let average = correlate(&image, &average_kernel(FILTER_SIZE), mode)?;
        let horizontal =
            correlate(&image, &horizontal_edge_kernel(FILTER_SIZE), mode)?;
        let vertical =
            correlate(&image, &vertical_edge_kernel(FILTER_SIZE), mode)?;
        log::debug!("filtered a {:?} image", image.dim());
        Ok(FilterBank {
            horizontal_mask: threshold(&horizontal, EDGE_THRESHOLD),
            vertical_mask: threshold(&vertical, EDGE_THRESHOLD),
            original: image,
            average,
            horizontal,
            vertical,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, s};

    fn pattern(rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_fn((rows, cols),
                              |(r, c)| ((r * 37 + c * 11 + r * c) % 256) as f64)
    }

    #[test]
    fn kernels() {
        let avg = average_kernel(FILTER_SIZE);
        assert_eq!(avg.dim(), (11, 11));
        assert!((avg.sum() - 1.).abs() < 1e-12);
        let h = horizontal_edge_kernel(FILTER_SIZE);
        assert_eq!(h.dim(), (3, 11));
        assert!(h.row(0).iter().all(|&w| w == 1.));
        assert!(h.row(1).iter().all(|&w| w == 0.));
        assert!(h.row(2).iter().all(|&w| w == -1.));
        assert_eq!(vertical_edge_kernel(FILTER_SIZE), h.t());
    }

    #[test]
    fn boundary_modes() {
        use BoundaryMode::*;
        let r = |m: BoundaryMode, i| m.resolve(i, 4);
        // d c b a | a b c d | d c b a
        assert_eq!([-1, -4, -5, 4, 7, 8].map(|i| r(Reflect, i)),
                   [Some(0), Some(3), Some(3), Some(3), Some(0), Some(0)]);
        // d c b | a b c d | c b a
        assert_eq!([-1, -3, 4, 6].map(|i| r(Mirror, i)),
                   [Some(1), Some(3), Some(2), Some(0)]);
        assert_eq!([-2, 9].map(|i| r(Nearest, i)), [Some(0), Some(3)]);
        assert_eq!([-1, 5].map(|i| r(Wrap, i)), [Some(3), Some(1)]);
        assert_eq!(r(Constant(7.), -1), None);
        assert_eq!(Mirror.resolve(-3, 1), Some(0));
    }

    #[test]
    fn small_correlation_reflect() -> Result<(), Error> {
        let img = array![[1., 2., 3.], [4., 5., 6.]];
        let k = array![[0., 0., 0.], [1., 0., -1.], [0., 0., 0.]];
        // Reflect repeats the edge pixel, so the border differences are
        // one step only.
        let out = correlate(&img, &k, BoundaryMode::Reflect)?;
        assert_eq!(out, array![[-1., -2., -1.], [-1., -2., -1.]]);
        let out = correlate(&img, &k, BoundaryMode::Constant(0.))?;
        assert_eq!(out, array![[-2., -2., 2.], [-5., -2., 5.]]);
        Ok(())
    }

    #[test]
    fn average_is_neighbourhood_mean() -> Result<(), Error> {
        let img = pattern(40, 30);
        let out = correlate(&img, &average_kernel(FILTER_SIZE),
                            BoundaryMode::Reflect)?;
        assert_eq!(out.dim(), img.dim());
        for (r, c) in [(5, 5), (20, 14), (34, 24)] {
            let mean = img.slice(s![r - 5 ..= r + 5, c - 5 ..= c + 5]).mean()
                .unwrap();
            assert!((out[[r, c]] - mean).abs() < 1e-9, "pixel ({r}, {c})");
        }
        Ok(())
    }

    #[test]
    fn edge_filters_commute_with_transpose() -> Result<(), Error> {
        let img = pattern(23, 31);
        let h = correlate(&img, &horizontal_edge_kernel(FILTER_SIZE),
                          BoundaryMode::Reflect)?;
        let v = correlate(&img.t().to_owned(),
                          &vertical_edge_kernel(FILTER_SIZE),
                          BoundaryMode::Reflect)?;
        assert_eq!(h.t(), v);
        Ok(())
    }

    #[test]
    fn empty_kernel_is_rejected() {
        let k = Array2::<f64>::zeros((0, 3));
        assert!(matches!(correlate(&pattern(3, 3), &k, BoundaryMode::Wrap),
                         Err(Error::Shape(_))));
    }

    #[test]
    fn threshold_is_strict() {
        let img = array![[124., 125.], [125.5, 300.]];
        assert_eq!(threshold(&img, EDGE_THRESHOLD),
                   array![[false, false], [true, true]]);
    }

    #[test]
    fn filter_bank() -> Result<(), Error> {
        let img = pattern(32, 32);
        let bank = FilterBank::apply(img.clone(), BoundaryMode::default())?;
        assert_eq!(bank.original, img);
        for out in [&bank.average, &bank.horizontal, &bank.vertical] {
            assert_eq!(out.dim(), (32, 32));
        }
        assert_eq!(bank.horizontal_mask, bank.horizontal.mapv(|v| v > 125.));
        assert_eq!(bank.vertical_mask, bank.vertical.mapv(|v| v > 125.));
        Ok(())
    }
}
