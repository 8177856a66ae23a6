//! Crate-wide numeric tolerance and rendering settings

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Tolerance below which a pivot candidate is treated as zero.
///
/// Used by singularity detection in the LUP engine and by the RREF pivot
/// search. One value for the whole crate.
pub const EPS: f64 = 1e-10;

/// Number of decimal digits used when rendering matrices, unless changed
/// with [`set_print_precision`].
pub const DEFAULT_PRINT_PRECISION: usize = 3;

static PRINT_PRECISION: AtomicUsize = AtomicUsize::new(DEFAULT_PRINT_PRECISION);

/// Current process-wide print precision
#[inline]
pub fn print_precision() -> usize {
    PRINT_PRECISION.load(Ordering::Relaxed)
}

/// Set the process-wide print precision.
///
/// Returns `InvalidArgument` if `precision` is zero.
pub fn set_print_precision(precision: usize) -> Result<()> {
    if precision == 0 {
        return Err(Error::invalid_argument(
            "precision",
            "print precision must be greater than 0",
        ));
    }
    PRINT_PRECISION.store(precision, Ordering::Relaxed);
    Ok(())
}
