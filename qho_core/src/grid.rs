//! # Spatial Grid
//!
//! Describes the square evaluation domain and expands it into coordinate
//! meshes. The default grid is the one the application always plots on:
//! 200 evenly spaced points from -5 to 5 along each axis, in units of the
//! oscillator length.
//!
//! The grid is cheap to sample, so it is regenerated on every evaluation
//! rather than cached; only the quantum numbers vary between triggers.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::errors::{QhoError, QhoResult};

/// Description of one axis of the square evaluation grid.
///
/// Both axes always share the same spec, keeping the domain square and the
/// cell area a single number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Lower bound of the domain (inclusive)
    pub min: f64,
    /// Upper bound of the domain (inclusive)
    pub max: f64,
    /// Number of sample points along each axis
    pub points: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec {
            min: -5.0,
            max: 5.0,
            points: 200,
        }
    }
}

impl GridSpec {
    /// Validate the grid description.
    pub fn validate(&self) -> QhoResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(QhoError::invalid_input(
                "min/max",
                format!("{}..{}", self.min, self.max),
                "Grid bounds must be finite",
            ));
        }
        if self.min >= self.max {
            return Err(QhoError::invalid_input(
                "min/max",
                format!("{}..{}", self.min, self.max),
                "Grid lower bound must be below upper bound",
            ));
        }
        if self.points < 2 {
            return Err(QhoError::invalid_input(
                "points",
                self.points.to_string(),
                "Grid needs at least two samples",
            ));
        }
        Ok(())
    }

    /// Spacing between adjacent samples.
    pub fn step(&self) -> f64 {
        (self.max - self.min) / (self.points - 1) as f64
    }

    /// Area of one grid cell, used when integrating the density numerically.
    pub fn cell_area(&self) -> f64 {
        self.step() * self.step()
    }

    /// Sample the axis: `points` evenly spaced values, endpoints inclusive.
    pub fn sample(&self) -> Array1<f64> {
        let step = self.step();
        Array1::from_iter((0..self.points).map(|i| self.min + step * i as f64))
    }
}

/// Expand two axes into coordinate meshes.
///
/// Follows the outer-product convention: `x` varies along columns of `X`,
/// `y` varies along rows of `Y`, so `(X[i,j], Y[i,j])` enumerates every
/// point of the plane.
pub fn meshgrid(x: &Array1<f64>, y: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let (rows, cols) = (y.len(), x.len());
    let xs = Array2::from_shape_fn((rows, cols), |(_, j)| x[j]);
    let ys = Array2::from_shape_fn((rows, cols), |(i, _)| y[i]);
    (xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let spec = GridSpec::default();
        spec.validate().unwrap();

        let axis = spec.sample();
        assert_eq!(axis.len(), 200);
        assert!((axis[0] - (-5.0)).abs() < 1e-12);
        assert!((axis[199] - 5.0).abs() < 1e-12);

        // 199 intervals across a width of 10
        assert!((spec.step() - 10.0 / 199.0).abs() < 1e-12);
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let spec = GridSpec::default();
        assert_eq!(spec.sample(), spec.sample());
    }

    #[test]
    fn test_meshgrid_convention() {
        let x = Array1::from(vec![0.0, 1.0, 2.0]);
        let y = Array1::from(vec![10.0, 20.0]);
        let (xs, ys) = meshgrid(&x, &y);

        assert_eq!(xs.dim(), (2, 3));
        assert_eq!(ys.dim(), (2, 3));
        // X varies along columns, constant down rows
        assert_eq!(xs[[0, 1]], 1.0);
        assert_eq!(xs[[1, 1]], 1.0);
        // Y varies along rows, constant across columns
        assert_eq!(ys[[0, 2]], 10.0);
        assert_eq!(ys[[1, 0]], 20.0);
    }

    #[test]
    fn test_invalid_specs_rejected() {
        let flipped = GridSpec { min: 5.0, max: -5.0, points: 200 };
        assert_eq!(flipped.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let degenerate = GridSpec { min: -5.0, max: 5.0, points: 1 };
        assert!(degenerate.validate().is_err());

        let nan = GridSpec { min: f64::NAN, max: 5.0, points: 200 };
        assert!(nan.validate().is_err());
    }
}
