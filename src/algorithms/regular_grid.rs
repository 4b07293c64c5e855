use super::check_parameter;
use super::Error;
use crate::geometry::PointND;
use crate::geometry::Triangle;
use crate::lattice::TriangularLattice;
use crate::lattice::MAX_STEP_COUNT;
use std::num::NonZeroUsize;

/// Step count used by [`RegularGrid::default`].
pub const DEFAULT_STEP_COUNT: usize = 20;

/// Points of a subdivided triangle and the small triangles joining them.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub points: Vec<PointND>,
    /// Indices into `points`, one triple per small triangle.
    pub triangles: Vec<[usize; 3]>,
}

impl Mesh {
    /// Corner points of each small triangle.
    pub fn faces(&self) -> impl Iterator<Item = [&PointND; 3]> + '_ {
        self.triangles
            .iter()
            .map(|[a, b, c]| [&self.points[*a], &self.points[*b], &self.points[*c]])
    }
}

fn regular_grid(triangle: &Triangle, step_count: usize) -> Result<Mesh, Error> {
    check_parameter("step_count", step_count, 2, MAX_STEP_COUNT)?;
    let step_count = NonZeroUsize::new(step_count).ok_or(Error::InvalidParameter {
        name: "step_count",
        value: step_count,
        min: 2,
        max: MAX_STEP_COUNT,
    })?;

    let span = tracing::info_span!(
        "regular_grid",
        step_count = step_count.get(),
        dimension = triangle.dimension()
    );
    let _enter = span.enter();

    let lattice = TriangularLattice::new(step_count);
    let points: Vec<PointND> = lattice
        .positions()
        .map(|position| triangle.point_at(lattice.weights(position)))
        .collect();
    let triangles: Vec<[usize; 3]> = lattice.triangles().collect();

    tracing::debug!(
        point_count = points.len(),
        triangle_count = triangles.len(),
        "sampled regular grid"
    );

    Ok(Mesh { points, triangles })
}

/// Regular subdivision of a triangle.
///
/// Each edge is split in `step_count` segments, which gives
/// `(step_count+1)(step_count+2)/2` points, vertices included, joined by
/// `step_count²` triangles. Points are ordered as in [`TriangularLattice`].
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), trisample::Error> {
/// use trisample::Sample as _;
/// use trisample::Triangle;
///
/// let triangle = Triangle::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])?;
/// let mesh = trisample::RegularGrid { step_count: 4 }.sample(&triangle)?;
///
/// assert_eq!(mesh.points.len(), 15);
/// assert_eq!(mesh.triangles.len(), 16);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RegularGrid {
    /// Number of segments each edge is split into, between 2 and
    /// [`MAX_STEP_COUNT`](crate::MAX_STEP_COUNT).
    pub step_count: usize,
}

impl Default for RegularGrid {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
        }
    }
}

impl crate::Sample for RegularGrid {
    type Output = Mesh;
    type Error = Error;

    fn sample(&mut self, triangle: &Triangle) -> Result<Self::Output, Self::Error> {
        regular_grid(triangle, self.step_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample as _;
    use approx::assert_relative_eq;
    use itertools::Itertools as _;
    use proptest::prelude::*;

    fn unit_triangle() -> Triangle {
        Triangle::new([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]).unwrap()
    }

    #[test]
    fn test_rejects_small_step_count() {
        let triangle = unit_triangle();
        for step_count in [0, 1] {
            let err = RegularGrid { step_count }.sample(&triangle).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidParameter {
                    name: "step_count",
                    value: step_count,
                    min: 2,
                    max: MAX_STEP_COUNT,
                },
            );
        }
    }

    #[test]
    fn test_rejects_huge_step_count() {
        let triangle = unit_triangle();
        for step_count in [MAX_STEP_COUNT + 1, usize::MAX] {
            let err = RegularGrid { step_count }.sample(&triangle).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidParameter {
                    name: "step_count",
                    value: step_count,
                    min: 2,
                    max: MAX_STEP_COUNT,
                },
            );
        }
    }

    #[test]
    fn test_default_step_count() {
        let mesh = RegularGrid::default().sample(&unit_triangle()).unwrap();
        assert_eq!(mesh.points.len(), 231);
        assert_eq!(mesh.triangles.len(), 400);
    }

    #[test]
    fn test_downward_triangle() {
        let triangle = unit_triangle();
        let mesh = RegularGrid { step_count: 2 }.sample(&triangle).unwrap();
        // Only the downward triangle touches none of the parent's vertices.
        let inner: Vec<_> = mesh
            .faces()
            .filter(|corners| {
                corners
                    .iter()
                    .all(|p| !triangle.vertices().contains(*p))
            })
            .collect();
        assert_eq!(inner.len(), 1);
        let [a, b, c] = inner[0];
        assert_eq!(a.as_slice(), &[0.5, 0.0]);
        assert_eq!(b.as_slice(), &[0.5, 0.5]);
        assert_eq!(c.as_slice(), &[0.0, 0.5]);
    }

    #[test]
    fn test_edges_are_shared() {
        let step_count = 7;
        let mesh = RegularGrid { step_count }
            .sample(&unit_triangle())
            .unwrap();
        let edge_counts = mesh
            .triangles
            .iter()
            .flat_map(|&[a, b, c]| [(a, b), (b, c), (c, a)])
            .map(|(a, b)| (a.min(b), a.max(b)))
            .counts();

        let boundary = edge_counts.values().filter(|count| **count == 1).count();
        assert_eq!(boundary, 3 * step_count);
        assert!(edge_counts.values().all(|count| *count == 1 || *count == 2));
    }

    #[test]
    fn test_winding() {
        let mesh = RegularGrid { step_count: 5 }
            .sample(&unit_triangle())
            .unwrap();
        for [a, b, c] in mesh.faces() {
            let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross > 0.0);
        }
    }

    proptest!(
        #[test]
        fn counts_and_bounds(
            step_count in 2..50_usize,
            dimension in 2..6_usize,
        ) {
            let triangle = Triangle::new(
                vec![0.0; dimension],
                (0..dimension).map(|d| d as f64 + 1.0).collect::<Vec<_>>(),
                (0..dimension).map(|d| -(d as f64) * 0.5).collect::<Vec<_>>(),
            ).unwrap();
            let mesh = RegularGrid { step_count }.sample(&triangle).unwrap();

            prop_assert_eq!(mesh.points.len(), (step_count + 1) * (step_count + 2) / 2);
            prop_assert_eq!(mesh.triangles.len(), step_count * step_count);
            prop_assert!(mesh.triangles.iter().flatten().all(|i| *i < mesh.points.len()));
            prop_assert!(mesh.points.iter().all(|p| p.len() == dimension));
        }

        #[test]
        fn covers_parent_area(
            step_count in 2..30_usize,
            coords in prop::collection::vec(-100.0..100.0_f64, 9),
        ) {
            let triangle = Triangle::new(&coords[0..3], &coords[3..6], &coords[6..9]).unwrap();
            prop_assume!(triangle.area() > 100.0);
            let mesh = RegularGrid { step_count }.sample(&triangle).unwrap();

            let sub_area: f64 = mesh
                .faces()
                .map(|[a, b, c]| {
                    Triangle::new(a.as_slice(), b.as_slice(), c.as_slice()).unwrap().area()
                })
                .sum();
            assert_relative_eq!(sub_area, triangle.area(), epsilon = 1e-6, max_relative = 1e-6);
        }
    );
}
