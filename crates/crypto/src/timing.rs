//! Constant-time operations for security.

use subtle::ConstantTimeEq;

/// Compare two byte slices in constant time.
///
/// Lengths are checked first and a mismatch returns `false` immediately.
/// Equal-length inputs are compared without revealing where they differ.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
