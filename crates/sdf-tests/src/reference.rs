//! Brute-force reference transforms.
//!
//! Direct O(N^2) / O(N^2 * M^2) evaluation of the defining minimization.
//! Slow on purpose: these exist to validate the envelope implementation,
//! not to be used.

/// 1D reference: `out[q] = min_p ((q - p)^2 + row[p])` over finite `p`.
pub fn transform_row(row: &[f32]) -> Vec<f32> {
    row.iter()
        .enumerate()
        .map(|(q, &own)| {
            let mut best = own;
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

/// 2D reference: per-pixel minimum over every finite position, then sqrt.
pub fn transform_image(grid: &[f32], width: usize, height: usize) -> Vec<f32> {
    assert_eq!(grid.len(), width * height);
    let mut out = vec![f32::INFINITY; grid.len()];
    for qy in 0..height {
        for qx in 0..width {
            let mut best = f32::INFINITY;
            for py in 0..height {
                for px in 0..width {
                    let h = grid[py * width + px];
                    if h.is_finite() {
                        let dx = qx as f32 - px as f32;
                        let dy = qy as f32 - py as f32;
                        best = best.min(dx * dx + dy * dy + h);
                    }
                }
            }
            out[qy * width + qx] = best.sqrt();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_reference_fixture() {
        let out = transform_row(&[10.0, 10.0, 1.0, 10.0, 10.0]);
        assert_eq!(out, vec![5.0, 2.0, 1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_image_reference_center_seed() {
        let mut grid = vec![f32::INFINITY; 9];
        grid[4] = 0.0;
        let out = transform_image(&grid, 3, 3);
        assert_eq!(out[4], 0.0);
        assert_eq!(out[3], 1.0);
        assert_eq!(out[0], 2.0f32.sqrt());
    }
}
