use std::fmt;

mod random_points;
mod regular_grid;

pub use random_points::RandomPoints;
pub use random_points::DEFAULT_POINT_COUNT;
pub use regular_grid::Mesh;
pub use regular_grid::RegularGrid;
pub use regular_grid::DEFAULT_STEP_COUNT;

/// Common errors thrown by algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Vertices don't share the same dimension, or have less than two
    /// coordinates.
    InvalidDimension { v1: usize, v2: usize, v3: usize },

    /// A sampling parameter is outside of its accepted range `min..=max`.
    InvalidParameter {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimension { v1, v2, v3 } if v1 == v2 && v1 == v3 => write!(
                f,
                "vertices must have at least 2 coordinates (got {v1})",
            ),
            Error::InvalidDimension { v1, v2, v3 } => write!(
                f,
                "vertices don't have the same dimension (got {v1}, {v2} and {v3})",
            ),
            Error::InvalidParameter {
                name, value, min, ..
            } if value < min => write!(f, "{name} must be at least {min} (got {value})"),
            Error::InvalidParameter {
                name, value, max, ..
            } => write!(f, "{name} must be at most {max} (got {value})"),
        }
    }
}

impl std::error::Error for Error {}

fn check_parameter(
    name: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), Error> {
    if value < min || max < value {
        return Err(Error::InvalidParameter {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}
