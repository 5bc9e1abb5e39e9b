//! 1D squared-distance transform via a lower envelope of parabolas.
//!
//! Reference: Distance Transforms of Sampled Functions
//! (P. Felzenszwalb, D. Huttenlocher), <http://cs.brown.edu/people/pfelzens/dt/>
//!
//! Each finite entry of the input row anchors an upward unit parabola
//! `(x - p)^2 + height[p]`. The pointwise minimum of that family - the
//! lower envelope - is exactly the squared distance to the nearest seed
//! (plus the seed's baseline cost). The envelope is built left to right
//! with a monotonic stack in O(N), then evaluated in a single sweep.
//!
//! # Example
//!
//! ```rust
//! use sdf_edt::transform_row;
//!
//! let mut row = [0.0, f32::INFINITY, f32::INFINITY, f32::INFINITY];
//! transform_row(&mut row);
//! assert_eq!(row, [0.0, 1.0, 4.0, 9.0]);
//! ```

/// Scratch state for one envelope construction.
///
/// Holds the pieces of the envelope: vertex positions, vertex heights, and
/// the break points between adjacent pieces. There are always exactly
/// `pieces - 1` break points; piece 0 has no left neighbor and its left
/// bound is implicitly negative infinity.
///
/// Heights are captured here at build time because evaluation overwrites
/// the row in place, including positions that are vertices of later pieces.
///
/// A single `Envelope` can be reused across many rows (each worker in the
/// 2D pass owns one); [`transform_row`] allocates one per call for
/// convenience.
#[derive(Debug)]
pub struct Envelope {
    /// Source index of each piece's parabola.
    vertices: Vec<usize>,
    /// Input height at each piece's vertex.
    heights: Vec<f32>,
    /// Right bound of each piece except the last.
    breaks: Vec<f32>,
}

impl Envelope {
    /// Creates scratch sized for rows of up to `len` entries.
    ///
    /// The buffers grow on demand, so `len` is a capacity hint: at most
    /// `len` pieces and `len - 1` break points are ever live.
    pub fn new(len: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(len),
            heights: Vec::with_capacity(len),
            breaks: Vec::with_capacity(len.saturating_sub(1)),
        }
    }

    /// Resets to a single piece anchored at `vertex`.
    #[inline]
    fn reset(&mut self, vertex: usize, height: f32) {
        self.vertices.clear();
        self.heights.clear();
        self.breaks.clear();
        self.vertices.push(vertex);
        self.heights.push(height);
    }

    /// Number of live pieces.
    #[inline]
    fn pieces(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex of the rightmost piece.
    #[inline]
    fn last_vertex(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// Left bound of the rightmost piece.
    #[inline]
    fn last_break(&self) -> f32 {
        self.breaks[self.breaks.len() - 1]
    }

    /// Discards the rightmost piece and its left break point.
    #[inline]
    fn pop(&mut self) {
        self.vertices.pop();
        self.heights.pop();
        self.breaks.pop();
    }

    /// Appends a piece with vertex `vertex`, bounded on the left by `brk`.
    #[inline]
    fn push(&mut self, vertex: usize, height: f32, brk: f32) {
        self.breaks.push(brk);
        self.vertices.push(vertex);
        self.heights.push(height);
    }
}

/// X-coordinate where the parabolas rooted at `p` and `q` intersect.
///
/// Derived from equating `(x - p)^2 + h[p] = (x - q)^2 + h[q]`. Well
/// defined whenever `p != q` and both heights are finite.
#[inline]
fn intersect(heights: &[f32], p: usize, q: usize) -> f32 {
    let fp = p as f32;
    let fq = q as f32;
    ((heights[q] - heights[p]) + (fq * fq - fp * fp)) / (2.0 * (fq - fp))
}

/// 1D squared-distance transform, in place.
///
/// On input, `row[p]` is a seed height: `0.0` marks a seed, `INFINITY`
/// marks a non-seed (any finite value acts as a baseline cost). On output,
/// `row[q]` holds `min_p ((q - p)^2 + row[p])` over all finite positions
/// `p`. A row with no finite entry is left unchanged.
///
/// Allocates fresh scratch; use [`transform_row_with`] to reuse an
/// [`Envelope`] across rows.
///
/// # Example
///
/// ```rust
/// use sdf_edt::transform_row;
///
/// let inf = f32::INFINITY;
/// let mut row = [inf, 0.0, inf, inf, 0.0];
/// transform_row(&mut row);
/// assert_eq!(row, [1.0, 0.0, 1.0, 1.0, 0.0]);
/// ```
pub fn transform_row(row: &mut [f32]) {
    let mut env = Envelope::new(row.len());
    transform_row_with(row, &mut env);
}

/// [`transform_row`] with caller-owned scratch.
///
/// The scratch is cleared on entry; its previous contents do not matter.
/// Passing an empty `row` is a contract violation and panics in debug
/// builds.
pub fn transform_row_with(row: &mut [f32], env: &mut Envelope) {
    debug_assert!(!row.is_empty());

    // Skip leading non-seeds. A row with no finite height stays infinite.
    let Some(offset) = row.iter().position(|h| h.is_finite()) else {
        return;
    };
    env.reset(offset, row[offset]);

    // Part 1: build the lower envelope as a monotonic stack of pieces.
    for q in offset + 1..row.len() {
        let h = row[q];
        if !h.is_finite() {
            continue;
        }

        // Intersection of the current last piece's parabola and q's.
        let mut s = intersect(row, env.last_vertex(), q);

        // If the intersection is at or before the last piece's left bound,
        // that piece is hidden everywhere by q's parabola: discard it and
        // retry against its predecessor. Piece 0 is never discarded.
        while env.pieces() > 1 && s <= env.last_break() {
            env.pop();
            s = intersect(row, env.last_vertex(), q);
        }
        env.push(q, h, s);
    }

    // Part 2: evaluate the envelope over every position.
    let mut j = 0;
    for (q, out) in row.iter_mut().enumerate() {
        // Seek the piece whose range contains q.
        while j < env.breaks.len() && env.breaks[j] < q as f32 {
            j += 1;
        }
        let d = q as f32 - env.vertices[j] as f32;
        *out = d * d + env.heights[j];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f32 = f32::INFINITY;

    /// O(N^2) reference: direct minimization over all finite positions.
    fn brute_force(row: &[f32]) -> Vec<f32> {
        row.iter()
            .enumerate()
            .map(|(q, &out)| {
                let mut best = out;
                for (p, &h) in row.iter().enumerate() {
                    if h.is_finite() {
                        let d = q as f32 - p as f32;
                        best = best.min(d * d + h);
                    }
                }
                best
            })
            .collect()
    }

    fn check(input: &[f32], expected: &[f32]) {
        let mut row = input.to_vec();
        transform_row(&mut row);
        assert_eq!(row, expected, "input {input:?}");
    }

    #[test]
    fn test_increasing() {
        // Monotonic heights already form the envelope.
        check(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_randomish() {
        check(&[2.2, 1.0, 3.6, 3.5, 2.7], &[2.0, 1.0, 2.0, 3.5, 2.7]);
    }

    #[test]
    fn test_decreasing() {
        check(&[4.4, 3.3, 2.2, 1.1, 0.0], &[4.3, 3.2, 2.1, 1.0, 0.0]);
    }

    #[test]
    fn test_dominated() {
        // The low vertex at index 2 hides both its neighbors' parabolas.
        check(&[10.0, 10.0, 1.0, 10.0, 10.0], &[5.0, 2.0, 1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_two_seeds() {
        check(&[INF, 0.0, INF, INF, 0.0], &[1.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_single_seed_parabola() {
        check(&[0.0, INF, INF, INF, INF], &[0.0, 1.0, 4.0, 9.0, 16.0]);
    }

    #[test]
    fn test_all_infinite_unchanged() {
        let mut row = [INF; 7];
        transform_row(&mut row);
        assert!(row.iter().all(|h| h.is_infinite()));
    }

    #[test]
    fn test_all_zero_stays_zero() {
        let mut row = [0.0; 6];
        transform_row(&mut row);
        assert_eq!(row, [0.0; 6]);
    }

    #[test]
    fn test_single_element_unchanged() {
        let mut row = [3.5];
        transform_row(&mut row);
        assert_eq!(row, [3.5]);

        let mut row = [INF];
        transform_row(&mut row);
        assert!(row[0].is_infinite());
    }

    #[test]
    fn test_palindrome_symmetry() {
        let mut row = [INF, 0.0, INF, INF, INF, INF, INF, 0.0, INF];
        transform_row(&mut row);
        let n = row.len();
        for q in 0..n {
            assert_eq!(row[q], row[n - 1 - q]);
        }
    }

    #[test]
    fn test_monotone_falloff_from_isolated_seed() {
        let p = 11;
        let mut row = vec![INF; 32];
        row[p] = 0.0;
        transform_row(&mut row);
        for (q, &d) in row.iter().enumerate() {
            let expect = (q as f32 - p as f32) * (q as f32 - p as f32);
            assert_eq!(d, expect);
        }
    }

    #[test]
    fn test_matches_brute_force_mixed() {
        // Mixed finite baselines and infinities, non-monotonic.
        let cases: &[&[f32]] = &[
            &[5.0, INF, 0.25, INF, INF, 1.5, INF, 0.0],
            &[INF, INF, 2.0, 2.0, INF, 0.5],
            &[0.0, 9.0, 0.0, 9.0, 0.0],
            &[7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0, 1.0, 2.0],
        ];
        for &case in cases {
            let mut row = case.to_vec();
            transform_row(&mut row);
            assert_eq!(row, brute_force(case), "input {case:?}");
        }
    }

    #[test]
    fn test_scratch_reuse() {
        let mut env = Envelope::new(5);
        let mut a = [0.0, INF, INF, INF, INF];
        transform_row_with(&mut a, &mut env);
        assert_eq!(a, [0.0, 1.0, 4.0, 9.0, 16.0]);

        // Stale scratch state must not leak into the next row.
        let mut b = [INF, INF, 0.0, INF, INF];
        transform_row_with(&mut b, &mut env);
        assert_eq!(b, [4.0, 1.0, 0.0, 1.0, 4.0]);
    }
}
