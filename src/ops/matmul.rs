//! Matrix multiplication kernel

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Row-major matrix product: `out = a @ b`
///
/// # Arguments
/// * `a` - `m × k`, row-major, contiguous
/// * `b` - `k × n`, row-major, contiguous
/// * `out` - `m × n`, row-major, zero-initialized
///
/// Rows of `out` are independent; with the `rayon` feature they are
/// computed in parallel.
pub fn matmul_kernel(a: &[f64], b: &[f64], out: &mut [f64], m: usize, k: usize, n: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(out.len(), m * n);
    if m == 0 || n == 0 {
        return;
    }

    let row_kernel = |(i, out_row): (usize, &mut [f64])| {
        let a_row = &a[i * k..(i + 1) * k];
        for (p, &a_ip) in a_row.iter().enumerate() {
            let b_row = &b[p * n..(p + 1) * n];
            for (o, &b_pj) in out_row.iter_mut().zip(b_row) {
                *o += a_ip * b_pj;
            }
        }
    };

    #[cfg(feature = "rayon")]
    out.par_chunks_mut(n).enumerate().for_each(row_kernel);

    #[cfg(not(feature = "rayon"))]
    out.chunks_mut(n).enumerate().for_each(row_kernel);
}
