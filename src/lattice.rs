use crate::geometry::Barycentric;
use std::num::NonZeroUsize;

/// Largest step count whose point and triangle counts fit in a `usize`.
pub const MAX_STEP_COUNT: usize = (1 << (usize::BITS / 2)) - 2;

/// Index table of the regular subdivision of a triangle.
///
/// The lattice of step count `n` holds the positions `(i, j)` where
/// `i + j <= n`. Moving along `i` walks from the first vertex of the triangle
/// toward the second one, moving along `j` walks toward the third one.
///
/// Positions are enumerated row by row: `i` goes from `0` to `n`, and for
/// each row, `j` goes from `0` to `n - i`. The first vertex is thus at index
/// `0`, the third vertex at index `n` and the second one at the last index.
///
/// # Example
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use trisample::TriangularLattice;
///
/// let lattice = TriangularLattice::new(NonZeroUsize::new(2).unwrap());
/// assert_eq!(lattice.len(), 6);
/// assert_eq!(lattice.index_of((1, 1)), 4);
/// assert_eq!(lattice.triangles().count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriangularLattice {
    step_count: NonZeroUsize,
    /// `row_offsets[i]` is the linear index of position `(i, 0)`.
    row_offsets: Vec<usize>,
}

impl TriangularLattice {
    /// # Panics
    ///
    /// Panics if `step_count` is greater than [`MAX_STEP_COUNT`].
    pub fn new(step_count: NonZeroUsize) -> Self {
        let n = usize::from(step_count);
        assert!(
            n <= MAX_STEP_COUNT,
            "step count {n} is greater than {MAX_STEP_COUNT}",
        );
        let row_offsets = (0..=n)
            .scan(0, |offset, i| {
                let row_start = *offset;
                *offset += n + 1 - i;
                Some(row_start)
            })
            .collect();
        Self {
            step_count,
            row_offsets,
        }
    }

    pub fn step_count(&self) -> usize {
        usize::from(self.step_count)
    }

    /// Number of positions, the triangular number `(n+1)(n+2)/2`.
    pub fn len(&self) -> usize {
        let n = self.step_count();
        (n + 1) * (n + 2) / 2
    }

    /// Always false, a lattice has at least three positions.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of small triangles, `n²`.
    pub fn triangle_count(&self) -> usize {
        self.step_count() * self.step_count()
    }

    fn row_len(&self, i: usize) -> usize {
        self.step_count() + 1 - i
    }

    /// Linear index of the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the lattice.
    pub fn index_of(&self, (i, j): (usize, usize)) -> usize {
        assert!(
            i.checked_add(j).map_or(false, |sum| sum <= self.step_count()),
            "position ({i}, {j}) is outside the lattice",
        );
        self.row_offsets[i] + j
    }

    /// Position of the given linear index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        assert!(index < self.len(), "index {index} is out of bounds");
        let i = self.row_offsets.partition_point(|offset| *offset <= index) - 1;
        (i, index - self.row_offsets[i])
    }

    /// Barycentric weights of the given position.
    ///
    /// Weights are computed from integer ratios, hence corners get exact
    /// weights and the first weight is never negative.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the lattice.
    pub fn weights(&self, (i, j): (usize, usize)) -> Barycentric {
        assert!(
            i.checked_add(j).map_or(false, |sum| sum <= self.step_count()),
            "position ({i}, {j}) is outside the lattice",
        );
        let n = self.step_count() as f64;
        [
            (self.step_count() - i - j) as f64 / n,
            i as f64 / n,
            j as f64 / n,
        ]
    }

    /// Positions in enumeration order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..=self.step_count()).flat_map(move |i| (0..self.row_len(i)).map(move |j| (i, j)))
    }

    /// Small triangles of the subdivision, as triples of linear indices.
    ///
    /// Each cell `(i, j)` with `i + j < n` yields an upward triangle, and
    /// all cells but the last of each row also yield a downward triangle.
    /// Both share the winding of the parent triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let n = self.step_count();
        (0..n).flat_map(move |i| {
            (0..n - i).flat_map(move |j| {
                let upward = [
                    self.index_of((i, j)),
                    self.index_of((i + 1, j)),
                    self.index_of((i, j + 1)),
                ];
                let downward = (j + 1 < n - i).then(|| {
                    [
                        self.index_of((i + 1, j)),
                        self.index_of((i + 1, j + 1)),
                        self.index_of((i, j + 1)),
                    ]
                });
                std::iter::once(upward).chain(downward)
            })
        })
    }
}
