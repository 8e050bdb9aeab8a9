//! Rectangular grids and the surfaces drawn on them in 3-D.

use std::f64::consts::PI;
use ndarray::Array2;

/// Values `start + i * step` lying in `[start, stop)`.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil().max(0.) as usize;
    (0 .. n).map(|i| start + i as f64 * step).collect()
}

/// Coordinate matrices of the grid `x` × `y`: both are `y.len()` rows
/// by `x.len()` columns, `xx[[i, j]] = x[j]` and `yy[[i, j]] = y[i]`.
pub fn meshgrid(x: &[f64], y: &[f64]) -> (Array2<f64>, Array2<f64>) {
    let shape = (y.len(), x.len());
    (Array2::from_shape_fn(shape, |(_, j)| x[j]),
     Array2::from_shape_fn(shape, |(i, _)| y[i]))
}

/// A surface z = f(x, y) sampled on a grid.
#[derive(Debug, Clone)]
pub struct Surface {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    pub z: Array2<f64>,
}

impl Surface {
    /// Sample `f` on the grid `x` × `y`.
    pub fn from_fn(x: &[f64], y: &[f64], f: impl Fn(f64, f64) -> f64)
                   -> Self {
        let (x, y) = meshgrid(x, y);
        let z = Array2::from_shape_fn(x.dim(), |ij| f(x[ij], y[ij]));
        Surface { x, y, z }
    }

    /// Concentric ripples z = sin(√(x² + y²)) on [-5, 5)² with step 0.1.
    pub fn ripple() -> Self {
        let t = arange(-5., 5., 0.1);
        Self::from_fn(&t, &t, |x, y| x.hypot(y).sin())
    }

    /// The test surface of Matplotlib's `axes3d.get_test_data`: the
    /// difference of two Gaussian bumps sampled every `delta` on
    /// [-3, 3)², then scaled by 10 in x and y and by 500 in z.
    pub fn axes3d_test_data(delta: f64) -> Self {
        let t = arange(-3., 3., delta);
        let s = Self::from_fn(&t, &t, |x, y| {
            let z1 = (-(x * x + y * y) / 2.).exp() / (2. * PI);
            let z2 = (-(((x - 1.) / 1.5).powi(2) + ((y - 1.) / 0.5).powi(2))
                      / 2.).exp()
                / (2. * PI * 0.5 * 1.5);
            z2 - z1
        });
        Surface { x: s.x * 10., y: s.y * 10., z: s.z * 500. }
    }

    /// (rows, columns) of the grid.
    pub fn dim(&self) -> (usize, usize) {
        self.z.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arange_excludes_stop() {
        assert_eq!(arange(0., 5., 1.), [0., 1., 2., 3., 4.]);
        assert_eq!(arange(-5., 5., 0.1).len(), 100);
        assert_eq!(arange(-3., 3., 0.05).len(), 120);
        assert!(arange(1., 0., 0.5).is_empty());
    }

    #[test]
    fn meshgrid_layout() {
        let (xx, yy) = meshgrid(&[1., 2., 3.], &[10., 20.]);
        assert_eq!(xx.dim(), (2, 3));
        assert_eq!(xx[[1, 2]], 3.);
        assert_eq!(yy[[1, 2]], 20.);
        assert_eq!(yy[[0, 2]], 10.);
    }

    #[test]
    fn ripple_surface() {
        let s = Surface::ripple();
        assert_eq!(s.dim(), (100, 100));
        assert!(s.z.iter().all(|z| (-1. ..= 1.).contains(z)));
        // (x, y) = (-5, -5) is the first grid point.
        assert!((s.z[[0, 0]] - 50f64.sqrt().sin()).abs() < 1e-12);
        // x = 0 at column 50, y = 0 at row 50.
        assert!(s.z[[50, 50]].abs() < 1e-12);
    }

    #[test]
    fn test_data_extrema() {
        let s = Surface::axes3d_test_data(0.05);
        assert_eq!(s.dim(), (120, 120));
        assert_eq!(s.x[[0, 0]], -30.);
        assert!(s.x[[0, 119]] < 30.);
        // The negative bump is centered at the origin, the positive one
        // at (10, 10).
        let (min, max) = s.z.iter().fold((f64::MAX, f64::MIN),
                                         |(lo, hi), &z| (lo.min(z), hi.max(z)));
        assert!(min < -70. && min > -80., "min = {min}");
        assert!(max > 80. && max < 90., "max = {max}");
    }
}
