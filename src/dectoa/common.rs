//! Routines and types that are *shared* between both float implementations.

/// The exponent is represented by an i32 regardless of underlying type; this is sufficiently wide
/// to accomodate the exponent of any floating point format.
pub type Exp = i32;

//

pub const EXP_LOG10_POW2_BOUNDS: core::ops::RangeInclusive<i32> = -112815..=112815;

/// Returns the largest exponent `f` such that `10^f ≤ 2^e`, i.e. the integer part of
/// `log_10(2^e)`.
///
/// Uses an euclidean approximation that is only valid in the range [EXP_LOG10_POW2_BOUNDS]. If
/// `exp` is not in that range, the result is unspecified.
#[inline]
pub const fn exp_log10_pow2(exp: i32) -> i32 {
    debug_assert!(*EXP_LOG10_POW2_BOUNDS.start() <= exp && exp <= *EXP_LOG10_POW2_BOUNDS.end());
    let x = 1292913987i64 * exp as i64;
    (x >> 32) as i32
}

/// Returns `exp - e_0`, where `e_0` is the smallest exponent such that the integer part
/// of `log10(2^e_0)` is equal to the integer part of `log10(2^exp)`.
///
/// Uses an euclidean approximation that is only valid in the range [EXP_LOG10_POW2_BOUNDS]. If
/// `exp` is not in that range, the result is unspecified.
#[inline]
pub const fn exp_log10_pow2_residual(exp: i32) -> u32 {
    debug_assert!(*EXP_LOG10_POW2_BOUNDS.start() <= exp && exp <= *EXP_LOG10_POW2_BOUNDS.end());
    let x = 1292913987i64 * exp as i64;
    x as u32 / 1292913987u32
}

//

/// Per-decade fixed-point multipliers, indexed by `⌊log10(2^exp)⌋` starting at `offset`.
pub struct Multipliers<T, const N: usize> {
    offset: Exp,
    table: [Multiplier<T>; N],
}

/// A two-word fixed-point approximation of a (scaled) power of ten.
pub struct Multiplier<T> {
    pub hi: T,
    pub lo: T,
}

impl<T, const N: usize> Multipliers<T, N> {
    pub const fn new(offset: Exp, table: [Multiplier<T>; N]) -> Self {
        Self { offset, table }
    }

    /// # Safety
    ///
    /// `exp_floor` must be within `offset .. offset + N`.
    pub unsafe fn get(&self, exp_floor: Exp) -> &Multiplier<T> {
        let idx = exp_floor - self.offset;
        debug_assert!(0 <= idx && (idx as usize) < N);
        unsafe { self.table.get_unchecked(idx as usize) }
    }
}

/// Constants for exact divisibility-by-`5^k` tests, indexed by `k`.
pub struct MultInverses<T, const N: usize>([MultInverse<T>; N]);

pub struct MultInverse<T> {
    pub multiplier: T,
    pub bound: T,
}

impl<T, const N: usize> MultInverses<T, N> {
    pub const fn new(table: [MultInverse<T>; N]) -> Self {
        Self(table)
    }

    pub const fn len(&self) -> usize {
        N
    }

    /// # Safety
    ///
    /// `exp_floor` must be within `0 .. N`.
    pub unsafe fn get(&self, exp_floor: Exp) -> &MultInverse<T> {
        debug_assert!(0 <= exp_floor && (exp_floor as usize) < N);
        unsafe { self.0.get_unchecked(exp_floor as usize) }
    }
}
