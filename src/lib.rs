//! A triangle sampling library, for triangles embedded in any dimension.
//!
//! # Crate Layout
//!
//! Trisample exposes a [`Sample`] trait, which is in turn implemented by
//! algorithms.  Algorithms take a validated [`Triangle`], whose vertices can
//! have any number of coordinates (at least two).
//!
//! For one-shot calls, the [`sample`] function builds the triangle from
//! coordinate slices and runs the algorithm described by [`Sampling`].
//!
//! # Available algorithms
//!
//! - [Regular grid][RegularGrid]: subdivides each edge in equal steps and
//!   returns the grid points along with the small triangles joining them.
//!   The index table is available on its own through [`TriangularLattice`].
//! - [Random points][RandomPoints]: draws points uniformly over the area of
//!   the triangle, optionally including its vertices.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

mod algorithms;
mod geometry;
mod lattice;


pub use crate::algorithms::*;
pub use crate::geometry::{Barycentric, Point2D, Point3D, PointND, Triangle};
pub use crate::lattice::TriangularLattice;
pub use crate::lattice::MAX_STEP_COUNT;

pub use nalgebra;
pub use rand;

/// The `Sample` trait allows for sampling triangles.
///
/// Sampling algorithms implement this trait.
///
/// Algorithms own their parameters, and may hold state across calls, such as
/// a random number generator.
pub trait Sample {
    /// What the algorithm produces, e.g. a point set or a mesh.
    type Output;

    /// Error details, should the algorithm fail to run.
    type Error;

    /// Sample the given triangle.
    fn sample(&mut self, triangle: &Triangle) -> Result<Self::Output, Self::Error>;
}

/// How [`sample`] distributes points over the triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sampling {
    /// See [`RegularGrid`].
    Regular { step_count: usize },

    /// See [`RandomPoints`]. Points are drawn from [`rand::thread_rng`].
    Random {
        point_count: usize,
        include_vertices: bool,
    },
}

impl Sampling {
    pub fn regular(step_count: usize) -> Self {
        Sampling::Regular { step_count }
    }

    /// Random sampling that includes the vertices of the triangle.
    pub fn random(point_count: usize) -> Self {
        Sampling::Random {
            point_count,
            include_vertices: true,
        }
    }
}

impl Default for Sampling {
    fn default() -> Self {
        Sampling::regular(DEFAULT_STEP_COUNT)
    }
}

/// Output of [`sample`].
#[derive(Clone, Debug, PartialEq)]
pub struct Samples {
    pub points: Vec<PointND>,

    /// Small triangles of a regular grid, `None` for random sampling.
    pub triangles: Option<Vec<[usize; 3]>>,
}

impl From<Mesh> for Samples {
    fn from(mesh: Mesh) -> Self {
        Self {
            points: mesh.points,
            triangles: Some(mesh.triangles),
        }
    }
}

/// Sample the triangle `(v1, v2, v3)`.
///
/// Vertices and parameters are all validated before any point is computed.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), trisample::Error> {
/// use trisample::Sampling;
///
/// let grid = trisample::sample([0.0, 0.0], [2.0, 0.0], [0.0, 2.0], Sampling::regular(2))?;
/// assert_eq!(grid.points.len(), 6);
/// assert_eq!(grid.triangles.map(|t| t.len()), Some(4));
///
/// let cloud = trisample::sample([0.0, 0.0], [2.0, 0.0], [0.0, 2.0], Sampling::random(10))?;
/// assert_eq!(cloud.points.len(), 10);
/// assert!(cloud.triangles.is_none());
/// # Ok(())
/// # }
/// ```
pub fn sample<V>(v1: V, v2: V, v3: V, sampling: Sampling) -> Result<Samples, Error>
where
    V: AsRef<[f64]>,
{
    let triangle = Triangle::new(v1, v2, v3)?;
    match sampling {
        Sampling::Regular { step_count } => {
            let mesh = RegularGrid { step_count }.sample(&triangle)?;
            Ok(Samples::from(mesh))
        }
        Sampling::Random {
            point_count,
            include_vertices,
        } => {
            let points = RandomPoints {
                rng: rand::thread_rng(),
                point_count,
                include_vertices,
            }
            .sample(&triangle)?;
            Ok(Samples {
                points,
                triangles: None,
            })
        }
    }
}
