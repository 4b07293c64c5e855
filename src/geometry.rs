//! Points and triangles in N-dimensional space.

use crate::Error;
use nalgebra::DVector;
use nalgebra::SVector;
use nalgebra::Vector2;
use nalgebra::Vector3;

pub type Point2D = Vector2<f64>;
pub type Point3D = Vector3<f64>;

/// A point whose dimension is only known at runtime.
pub type PointND = DVector<f64>;

/// Barycentric weights of a point, in the order of the triangle's vertices.
///
/// Weights are non-negative and sum to one for points inside the triangle.
pub type Barycentric = [f64; 3];

/// A triangle whose three vertices share the same dimension, at least 2.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), trisample::Error> {
/// use trisample::Triangle;
///
/// let triangle = Triangle::new([0.0, 0.0], [2.0, 0.0], [0.0, 2.0])?;
/// assert_eq!(triangle.dimension(), 2);
/// assert_eq!(triangle.area(), 2.0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [PointND; 3],
}

impl Triangle {
    /// Builds a triangle from three coordinate slices.
    ///
    /// Fails with [`Error::InvalidDimension`] if the slices don't have the
    /// same length or if they have less than two coordinates.
    pub fn new<V>(v1: V, v2: V, v3: V) -> Result<Self, Error>
    where
        V: AsRef<[f64]>,
    {
        let (v1, v2, v3) = (v1.as_ref(), v2.as_ref(), v3.as_ref());
        check_dimensions(v1.len(), v2.len(), v3.len())?;
        Ok(Self {
            vertices: [
                PointND::from_column_slice(v1),
                PointND::from_column_slice(v2),
                PointND::from_column_slice(v3),
            ],
        })
    }

    /// Builds a triangle from statically-sized vectors.
    pub fn from_points<const D: usize>(
        v1: &SVector<f64, D>,
        v2: &SVector<f64, D>,
        v3: &SVector<f64, D>,
    ) -> Result<Self, Error> {
        Self::new(v1.as_slice(), v2.as_slice(), v3.as_slice())
    }

    pub fn dimension(&self) -> usize {
        self.vertices[0].len()
    }

    pub fn vertices(&self) -> &[PointND; 3] {
        &self.vertices
    }

    /// The point `w1·V1 + w2·V2 + w3·V3`.
    ///
    /// Vertices are returned verbatim when one weight is 1 and the others
    /// are 0.
    pub fn point_at(&self, weights: Barycentric) -> PointND {
        let [v1, v2, v3] = &self.vertices;
        let [w1, w2, w3] = weights;
        PointND::from_iterator(
            self.dimension(),
            v1.iter()
                .zip(v2.iter())
                .zip(v3.iter())
                .map(|((a, b), c)| w1 * a + w2 * b + w3 * c),
        )
    }

    /// Area of the triangle, computed from the Gram determinant of its edge
    /// vectors so that it is valid in any dimension.
    pub fn area(&self) -> f64 {
        let (e1, e2) = self.edges();
        let gram = e1.dot(&e1) * e2.dot(&e2) - e1.dot(&e2).powi(2);
        0.5 * f64::sqrt(gram.max(0.0))
    }

    /// Barycentric weights of the orthogonal projection of `point` onto the
    /// plane of the triangle.
    ///
    /// Returns `None` if the triangle is degenerate (its vertices are
    /// aligned) or if `point` doesn't have the triangle's dimension.
    pub fn barycentric_of(&self, point: &PointND) -> Option<Barycentric> {
        if point.len() != self.dimension() {
            return None;
        }

        let (e1, e2) = self.edges();
        let d = point - &self.vertices[0];

        let a = e1.dot(&e1);
        let b = e1.dot(&e2);
        let c = e2.dot(&e2);
        if approx::relative_eq!(a * c, b * b, epsilon = 0.0, max_relative = 1e-12) {
            return None;
        }
        let denom = a * c - b * b;

        let d1 = d.dot(&e1);
        let d2 = d.dot(&e2);
        let w2 = (c * d1 - b * d2) / denom;
        let w3 = (a * d2 - b * d1) / denom;
        Some([1.0 - w2 - w3, w2, w3])
    }

    /// Edge vectors V1→V2 and V1→V3.
    fn edges(&self) -> (PointND, PointND) {
        let [v1, v2, v3] = &self.vertices;
        (v2 - v1, v3 - v1)
    }
}

fn check_dimensions(v1: usize, v2: usize, v3: usize) -> Result<(), Error> {
    if v1 != v2 || v1 != v3 || v1 < 2 {
        return Err(Error::InvalidDimension { v1, v2, v3 });
    }
    Ok(())
}
