//! Forward 8×8 block DCT-II
//!
//! Orthonormal JPEG-style transform used by the frequency-domain detector.
//! Only the forward direction is needed; coefficients are inspected
//! statistically and never inverted back to pixels.

use std::f64::consts::PI;

/// Block edge length used for the frequency-domain analysis (JPEG standard)
pub const BLOCK_SIZE: usize = 8;

/// Forward two-dimensional DCT-II over one 8×8 block
///
/// Input and output are in row-major order (`index = row * 8 + col`).
/// Scaling is orthonormal: `alpha(0) = sqrt(1/8)`, `alpha(k) = sqrt(2/8)`,
/// so a constant block of value `v` transforms to a single DC coefficient
/// of `8 * v` with all AC terms zero.
pub fn forward_dct_8x8(block: &[f64; 64]) -> [f64; 64] {
    let n = BLOCK_SIZE as f64;
    let mut out = [0.0f64; 64];

    for u in 0..BLOCK_SIZE {
        for v in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for x in 0..BLOCK_SIZE {
                for y in 0..BLOCK_SIZE {
                    sum += block[x * BLOCK_SIZE + y]
                        * (((2 * x + 1) as f64 * u as f64 * PI) / (2.0 * n)).cos()
                        * (((2 * y + 1) as f64 * v as f64 * PI) / (2.0 * n)).cos();
                }
            }
            let alpha_u = if u == 0 { (1.0 / n).sqrt() } else { (2.0 / n).sqrt() };
            let alpha_v = if v == 0 { (1.0 / n).sqrt() } else { (2.0 / n).sqrt() };
            out[u * BLOCK_SIZE + v] = alpha_u * alpha_v * sum;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_block_has_only_dc() {
        let block = [128.0f64; 64];
        let coeffs = forward_dct_8x8(&block);

        // DC of a constant block is 8 * v for the orthonormal transform
        assert!(
            (coeffs[0] - 1024.0).abs() < 1e-9,
            "DC should be 1024, got {}",
            coeffs[0]
        );
        for (i, &c) in coeffs.iter().enumerate().skip(1) {
            assert!(c.abs() < 1e-9, "AC coefficient {} should be ~0, got {}", i, c);
        }
    }

    #[test]
    fn test_zero_block() {
        let block = [0.0f64; 64];
        let coeffs = forward_dct_8x8(&block);
        assert!(coeffs.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_horizontal_cosine_concentrates_in_one_bin() {
        // A pure horizontal DCT basis function should transform to a single
        // nonzero coefficient at (0, v).
        let n = BLOCK_SIZE as f64;
        let v_target = 3usize;
        let mut block = [0.0f64; 64];
        for x in 0..BLOCK_SIZE {
            for y in 0..BLOCK_SIZE {
                block[x * BLOCK_SIZE + y] =
                    (((2 * y + 1) as f64 * v_target as f64 * PI) / (2.0 * n)).cos();
            }
        }

        let coeffs = forward_dct_8x8(&block);
        for u in 0..BLOCK_SIZE {
            for v in 0..BLOCK_SIZE {
                let c = coeffs[u * BLOCK_SIZE + v];
                if u == 0 && v == v_target {
                    assert!(c.abs() > 1.0, "target bin should carry the energy, got {}", c);
                } else {
                    assert!(c.abs() < 1e-9, "bin ({}, {}) should be ~0, got {}", u, v, c);
                }
            }
        }
    }
}
