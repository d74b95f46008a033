//! Gray code and amplitude level helpers

/// Reflected binary Gray code of `n`
#[inline]
pub fn binary_to_gray(n: usize) -> usize {
    n ^ (n >> 1)
}

/// Odd-integer amplitude for level `i` of `levels`, symmetric about zero
///
/// `levels = 4` gives -3, -1, +1, +3 for `i = 0..4`.
#[inline]
pub fn amplitude_level(i: usize, levels: usize) -> f64 {
    (2 * i) as f64 - levels as f64 + 1.0
}

/// Per-axis amplitude table with `level(b)` stored at position `gray(b)`
pub fn gray_ordered_levels(bits_per_axis: usize) -> Vec<f64> {
    let levels = 1usize << bits_per_axis;
    let mut table = vec![0.0; levels];

    for bin_idx in 0..levels {
        table[binary_to_gray(bin_idx)] = amplitude_level(bin_idx, levels);
    }

    table
}
