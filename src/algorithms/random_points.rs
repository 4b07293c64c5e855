use super::check_parameter;
use super::Error;
use crate::geometry::Barycentric;
use crate::geometry::PointND;
use crate::geometry::Triangle;
use rand::Rng;

/// Point count used by [`RandomPoints::default`].
pub const DEFAULT_POINT_COUNT: usize = 200;

/// Draws barycentric weights uniformly distributed over the triangle area.
///
/// Two uniform values are drawn in the unit square, and those falling in
/// the upper half are reflected back into the lower one.
fn random_weights(rng: &mut impl Rng) -> Barycentric {
    let mut r1: f64 = rng.gen();
    let mut r2: f64 = rng.gen();
    if 1.0 < r1 + r2 {
        r1 = 1.0 - r1;
        r2 = 1.0 - r2;
    }
    [f64::max(1.0 - r1 - r2, 0.0), r1, r2]
}

fn random_points(
    triangle: &Triangle,
    rng: &mut impl Rng,
    point_count: usize,
    include_vertices: bool,
) -> Result<Vec<PointND>, Error> {
    let min_point_count = if include_vertices { 3 } else { 1 };
    check_parameter("point_count", point_count, min_point_count, usize::MAX)?;

    let span = tracing::info_span!(
        "random_points",
        point_count,
        include_vertices,
        dimension = triangle.dimension()
    );
    let _enter = span.enter();

    let mut points = Vec::with_capacity(point_count);
    if include_vertices {
        points.extend(triangle.vertices().iter().cloned());
    }
    let random_count = point_count - points.len();
    points.extend((0..random_count).map(|_| triangle.point_at(random_weights(rng))));

    tracing::debug!(random_count, "sampled random points");

    Ok(points)
}

/// Random sampling of a triangle, uniform with respect to its area.
///
/// When `include_vertices` is set, the vertices of the triangle are the
/// first three points of the output, and only `point_count - 3` points are
/// drawn.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), trisample::Error> {
/// use rand::SeedableRng as _;
/// use trisample::Sample as _;
/// use trisample::Triangle;
///
/// let triangle = Triangle::new([0.0, 0.0], [1.0, 0.0], [0.0, 1.0])?;
/// let points = trisample::RandomPoints {
///     rng: rand::rngs::StdRng::seed_from_u64(42),
///     point_count: 50,
///     include_vertices: true,
/// }
/// .sample(&triangle)?;
///
/// assert_eq!(points.len(), 50);
/// assert_eq!(&points[..3], triangle.vertices());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct RandomPoints<R> {
    pub rng: R,
    pub point_count: usize,
    pub include_vertices: bool,
}

impl<R> RandomPoints<R> {
    /// Default parameters, drawing from the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            point_count: DEFAULT_POINT_COUNT,
            include_vertices: true,
        }
    }
}

impl Default for RandomPoints<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl<R> crate::Sample for RandomPoints<R>
where
    R: Rng,
{
    type Output = Vec<PointND>;
    type Error = Error;

    fn sample(&mut self, triangle: &Triangle) -> Result<Self::Output, Self::Error> {
        random_points(
            triangle,
            &mut self.rng,
            self.point_count,
            self.include_vertices,
        )
    }
}
