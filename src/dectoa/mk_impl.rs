macro_rules! mk_impl { (
    float = $f:ident,
    bits = $bits:ident,
    bits_signed = $bits_signed:ident,
    bits_mantissa = $bits_mantissa:literal,
    buffer_len = $buffer_len:literal,
    lut = $lut:ident,
) => {

use crate::dectoa::{common, decimal, fmt};
use crate::dectoa::$lut as lut;

/// The mantissa is represented by an unsigned integer the same size as the float (in this case,
/// $bits for $f).
pub type Mant = $bits;
pub type Exp = common::Exp;

/// The **absolute value** of a finite `$f` decoded into exponent and mantissa.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Binary {
    exp: Exp,
    mant: Mant,
}

/// A decimal representation of the **absolute value** of a finite `$f`.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Decimal {
    exp: Exp,
    mant: Mant,
}

/// The decomposition of a **finite**, **nonzero** `$f` into sign and shortest decimal.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Parts {
    sign: bool,
    decimal: Decimal,
}

/// Calculates the result of `a * mult / 2^(2N)` without overflow, where `N` is the number of bits
/// of `a`, `mult.hi`, `mult.lo`.
#[inline]
const fn multiword_multiply_shift(a: Mant, mult: &common::Multiplier<Mant>) -> Mant {
    let result_hi = mult.hi as u128 * a as u128;
    let result_lo = mult.lo as u128 * a as u128;
    let result = (result_hi + (result_lo >> Mant::BITS)) >> Mant::BITS;
    result as Mant
}

/// Calculates the result of `multiword_multiply_shift(2^k, mult)` without overflow.
#[inline]
const fn multiword_multiply_shift_pow2(k: u32, mult: &common::Multiplier<Mant>) -> Mant {
    let s: Exp = k as Exp - Mant::BITS as Exp;
    if s <= 0 {
        mult.hi >> (-s as u32)
    } else {
        (mult.hi << s as u32) | (mult.lo >> (Mant::BITS - s as u32))
    }
}

/// Returns the lowest `n` bits of `x`.
pub const fn lsb(x: Mant, n: u32) -> Mant {
    x % (1 << n)
}

/// Checks if `n` is an even number, in which case a mantissa of `n` wins the tiebreak against its
/// neighbours (in a "round to nearest, ties to even" rounding rule).
#[inline]
pub const fn is_even(n: Mant) -> bool {
    n % 2 == 0
}

impl Binary {
    /// Number of bits in precision of the mantissa, including the implicit `1.`.
    const BITS_MANTISSA: u32 = $bits_mantissa;

    /// Number of bits of the mantissa that are actually stored.
    const BITS_MANTISSA_EXPLICIT: u32 = Self::BITS_MANTISSA - 1;

    /// The exponent bias, including the implicit factor of `2 ^ Self::BITS_MANTISSA` from treating
    /// the mantissa as a fixed-point decimal.
    const MIN_EXP: Exp = $f::MIN_EXP - Self::BITS_MANTISSA as i32;

    /// The mantissa at the bottom of each binade, i.e. the value of the implicit bit. A normal
    /// float with this mantissa has a closer neighbour below than above.
    const IMPLICIT_BIT: Mant = 1 << Self::BITS_MANTISSA_EXPLICIT;

    /// Decomposes a **finite** `$f` into the binary exponent and mantissa of its absolute
    /// value, i.e. such that `|num| = mant * 2^exp`.
    ///
    /// If `num` is infinite or NaN, returns an unspecified value; this is not checked except in
    /// debug assertions.
    #[inline]
    pub const fn new(num: $f) -> Self {
        debug_assert!(num.is_finite());

        let num = num.abs();
        let mut mant = lsb(num.to_bits(), Self::BITS_MANTISSA_EXPLICIT);
        let mut exp = (num.to_bits() >> Self::BITS_MANTISSA_EXPLICIT) as Exp;

        if exp != 0 {
            exp -= 1;
            mant |= 1 << Self::BITS_MANTISSA_EXPLICIT;
        }

        Binary {
            exp: exp + Self::MIN_EXP,
            mant,
        }
    }

    /// Returns the largest exponent `f` such that `10^f ≤ 2^self.exp`, i.e. the integer part of
    /// `log10(2^self.exp)`.
    #[inline]
    const fn exp_log10_pow2(&self) -> Exp {
        common::exp_log10_pow2(self.exp)
    }

    /// Returns `self.exp - e_0`, where `e_0` is the smallest exponent such that the integer part
    /// of `log10(2^e_0)` is equal to the integer part of `log10(2^self.exp)`.
    #[inline]
    const fn exp_log10_pow2_residual(&self) -> u32 {
        common::exp_log10_pow2_residual(self.exp)
    }

    /// Checks whether `self.mant` is a multiple of `2 ^ self.exp`.
    ///
    /// If not `0 ≤ self.exp < $f::BITS`, this returns an unspecified value.
    #[inline]
    const fn is_multiple_of_pow2(&self) -> bool {
        lsb(self.mant, self.exp as u32) == 0
    }

    /// Checks whether `self` is a "small integer", i.e. in the range of the contiguous integers
    /// representable by an `$f` without rounding.
    #[inline]
    const fn is_small_integer(&self) -> bool {
        // `self.exp` has to be in the interval [0; BITS_MANTISSA[, and `self` must be a clean
        // multiple of a power of 2 (with no information loss).
        let neg_exp = -self.exp;
        0 <= neg_exp && neg_exp < Self::BITS_MANTISSA as Exp
            && Binary { exp: neg_exp, ..*self }.is_multiple_of_pow2()
    }

    /// The core of the conversion: finds the shortest decimal representation of `self` if it
    /// can, or the closest if it must.
    ///
    /// # Safety
    ///
    /// `self` must come from [Binary::new] on a finite float, so that the decade of `self.exp`
    /// stays within the multiplier table.
    #[inline]
    unsafe fn shortest_inner(self) -> Decimal {
        debug_assert!(self.mant != 0);

        let exp_floor = self.exp_log10_pow2();
        let exp_residual = self.exp_log10_pow2_residual();
        // SAFETY: exp_floor is in bounds for any finite input
        let mult = unsafe { lut::MULTIPLIERS.get(exp_floor) };

        // Case 1: centered. The halfway points to both neighbours are half a gap away.
        if self.mant != Self::IMPLICIT_BIT || self.exp == Self::MIN_EXP {
            let mant_a = (2 * self.mant - 1) << exp_residual;
            let mant_b = (2 * self.mant + 1) << exp_residual;
            let a = multiword_multiply_shift(mant_a, mult);
            let b = multiword_multiply_shift(mant_b, mult);
            let decimal_a = Decimal { exp: exp_floor, mant: mant_a };
            let decimal_b = Decimal { exp: exp_floor, mant: mant_b };

            let q = b / 10;
            let s = q * 10;
            if a < s {
                if s < b || is_even(self.mant) || !decimal_b.is_tie() {
                    return Decimal { exp: exp_floor + 1, mant: q }.remove_trailing_zeros();
                }
            } else if s == a && is_even(self.mant) && decimal_a.is_tie() {
                return Decimal { exp: exp_floor + 1, mant: q }.remove_trailing_zeros();
            } else if !is_even(a + b) {
                // The boundaries are symmetric around the value, so the closer of the two
                // candidates can be read off the midpoint directly.
                return Decimal { exp: exp_floor, mant: (a + b) / 2 + 1 };
            }

            let mant_c = (4 * self.mant) << exp_residual;
            let c2 = multiword_multiply_shift(mant_c, mult);
            let c = c2 / 2;

            let round_up = !(is_even(c2) || (is_even(c) && Decimal { exp: -exp_floor, mant: c2 }.is_tie()));
            Decimal { exp: exp_floor, mant: c + (round_up as Mant) }
        }

        // Case 2: uncentered. At the bottom of a binade the gap below is half the gap above,
        // so the boundaries are asymmetric and the midpoint shortcut does not apply.
        else {
            let mant_a = (4 * Self::IMPLICIT_BIT - 1) << exp_residual;
            let mant_b = (2 * Self::IMPLICIT_BIT + 1) << exp_residual;
            let a = multiword_multiply_shift(mant_a, mult) / 2;
            let b = multiword_multiply_shift(mant_b, mult);
            let decimal_a = Decimal { exp: exp_floor, mant: mant_a };
            let decimal_b = Decimal { exp: exp_floor, mant: mant_b };

            if a < b {
                let q = b / 10;
                let s = q * 10;
                if a < s {
                    if s < b || is_even(Self::IMPLICIT_BIT) || !decimal_b.is_tie_uncentered() {
                        return Decimal { exp: exp_floor + 1, mant: q }.remove_trailing_zeros();
                    }
                } else if s == a && is_even(Self::IMPLICIT_BIT) && decimal_a.is_tie_uncentered() {
                    return Decimal { exp: exp_floor + 1, mant: q }.remove_trailing_zeros();
                }

                let log2_mant_c = Self::BITS_MANTISSA + exp_residual + 1;
                let c2 = multiword_multiply_shift_pow2(log2_mant_c, mult);
                let c = c2 / 2;

                let round_up =
                    (c == a && !decimal_a.is_tie_uncentered())
                    ||
                    !(is_even(c2) || (is_even(c) && Decimal { exp: -exp_floor, mant: c2 }.is_tie()));
                Decimal { exp: exp_floor, mant: c + (round_up as Mant) }
            } else if decimal_a.is_tie_uncentered() {
                Decimal { exp: exp_floor, mant: a }.remove_trailing_zeros()
            } else {
                let mant_c = (40 * Self::IMPLICIT_BIT) << exp_residual;
                let c2 = multiword_multiply_shift(mant_c, mult);
                let c = c2 / 2;

                let round_up = !(is_even(c2) || (is_even(c) && Decimal { exp: -exp_floor, mant: c2 }.is_tie()));
                Decimal { exp: exp_floor - 1, mant: c + (round_up as Mant) }
            }
        }
    }

    /// The full conversion: short-circuits the "small integer" case.
    ///
    /// # Safety
    ///
    /// Same contract as [Binary::shortest_inner].
    pub unsafe fn shortest(self) -> Decimal {
        if self.is_small_integer() {
            debug_assert!(self.exp <= 0);
            return Decimal { exp: 0, mant: self.mant >> (-self.exp as u32) }.remove_trailing_zeros();
        }
        unsafe { self.shortest_inner() }
    }
}

impl Decimal {
    /// Checks whether `self` represents an exact halfway point, i.e. whether the scaled
    /// boundary it came from suffered no truncation.
    #[inline]
    fn is_tie(&self) -> bool {
        0 <= self.exp && (self.exp as usize) < lut::MULT_INVERSES.len()
            && self.is_multiple_of_pow5()
    }

    #[inline]
    fn is_tie_uncentered(&self) -> bool {
        self.mant % 5 == 0
            && 0 <= self.exp
            && self.is_multiple_of_pow5()
    }

    /// Checks whether `self.mant` is a "small" multiple of `5 ^ self.exp`.
    #[inline]
    fn is_multiple_of_pow5(&self) -> bool {
        // SAFETY: callers bound self.exp by the table length
        let entry = unsafe { lut::MULT_INVERSES.get(self.exp) };
        self.mant.wrapping_mul(entry.multiplier) <= entry.bound
    }

    /// Shortens `self` by removing trailing zeros from `self.mant` while possible, and
    /// incrementing `self.exp` by the same amount.
    const fn remove_trailing_zeros(mut self) -> Self {
        const M_INV5: Mant = -((Mant::MAX / 5) as $bits_signed) as Mant;
        const BOUND: Mant = Mant::MAX / 10 + 1;
        loop {
            let q = self.mant.wrapping_mul(M_INV5).rotate_right(1);
            if q >= BOUND {
                return self;
            }
            self.exp += 1;
            self.mant = q;
        }
    }
}

impl Parts {
    /// Finds the shortest decimal representation for a **finite** and **nonzero** `num`.
    ///
    /// # Safety
    ///
    /// If `num` is infinite, NaN, or ±0, this is undefined behaviour.
    #[inline]
    pub unsafe fn new(num: $f) -> Self {
        debug_assert!(num.is_finite());
        debug_assert!(num.abs() != 0.0);
        Parts {
            sign: num.is_sign_positive(),
            decimal: unsafe { Binary::new(num).shortest() },
        }
    }

    /// Serialises in the general layout: plain notation while the decimal point lands within
    /// the digit window, scientific notation otherwise.
    ///
    /// # Safety
    ///
    /// `buf` must have room for `$buffer_len` bytes.
    #[inline]
    pub unsafe fn write_general(self, mut buf: *mut u8) -> usize {
        unsafe {
            buf.write(b'-');
            buf = buf.add(!self.sign as usize);

            let mut digits = [0u8; 20];
            let count = fmt::write_digits_backward(self.decimal.mant as u64, &mut digits);
            let start = digits.as_ptr().add(20 - count);
            let point = count as Exp + self.decimal.exp;

            let len = if 0 < point && point <= 7 {
                if self.decimal.exp >= 0 {
                    // 1234e2 -> "123400.0"
                    core::ptr::copy_nonoverlapping(start, buf, count);
                    core::ptr::write_bytes(buf.add(count), b'0', self.decimal.exp as usize);
                    *buf.add(point as usize) = b'.';
                    *buf.add(point as usize + 1) = b'0';
                    point as usize + 2
                } else {
                    // 12345e-2 -> "123.45"
                    core::ptr::copy_nonoverlapping(start, buf, point as usize);
                    *buf.add(point as usize) = b'.';
                    core::ptr::copy_nonoverlapping(
                        start.add(point as usize),
                        buf.add(point as usize + 1),
                        count - point as usize,
                    );
                    count + 1
                }
            } else if -3 < point && point <= 0 {
                // 1234e-6 -> "0.001234"
                *buf = b'0';
                *buf.add(1) = b'.';
                core::ptr::write_bytes(buf.add(2), b'0', -point as usize);
                core::ptr::copy_nonoverlapping(start, buf.add(2 + -point as usize), count);
                count + 2 + -point as usize
            } else {
                write_scientific(start, count, point, buf)
            };

            !self.sign as usize + len
        }
    }

    /// Serialises in scientific notation unconditionally.
    ///
    /// # Safety
    ///
    /// `buf` must have room for `$buffer_len` bytes.
    #[inline]
    pub unsafe fn write_exp(self, mut buf: *mut u8) -> usize {
        unsafe {
            buf.write(b'-');
            buf = buf.add(!self.sign as usize);

            let mut digits = [0u8; 20];
            let count = fmt::write_digits_backward(self.decimal.mant as u64, &mut digits);
            let start = digits.as_ptr().add(20 - count);
            let point = count as Exp + self.decimal.exp;

            !self.sign as usize + write_scientific(start, count, point, buf)
        }
    }
}

/// Writes `d.igitsEexp` with at least one digit after the point, returning the length.
///
/// # Safety
///
/// `start` must point at `count` digit bytes; `buf` must have room for `count + 7` bytes.
unsafe fn write_scientific(start: *const u8, count: usize, point: Exp, buf: *mut u8) -> usize {
    unsafe {
        *buf = *start;
        *buf.add(1) = b'.';
        let frac_len = if count == 1 {
            *buf.add(2) = b'0';
            1
        } else {
            core::ptr::copy_nonoverlapping(start.add(1), buf.add(2), count - 1);
            count - 1
        };
        *buf.add(2 + frac_len) = b'E';
        let exp_len = fmt::write_exp(point - 1, buf.add(3 + frac_len));
        3 + frac_len + exp_len
    }
}

impl crate::dectoa::Sealed for $f {
    type Buffer = [core::mem::MaybeUninit<u8>; $buffer_len];

    const BUFFER_LEN: usize = $buffer_len;

    fn new_buffer() -> Self::Buffer {
        [core::mem::MaybeUninit::uninit(); $buffer_len]
    }

    fn buffer_as_ptr(buf: &mut Self::Buffer) -> *mut u8 {
        buf.as_mut_ptr() as *mut u8
    }

    #[inline]
    fn classify(&self) -> crate::dectoa::FloatType {
        if self.is_finite() {
            crate::dectoa::FloatType::Finite
        } else if self.is_infinite() {
            if self.is_sign_positive() {
                crate::dectoa::FloatType::PosInf
            } else {
                crate::dectoa::FloatType::NegInf
            }
        } else {
            crate::dectoa::FloatType::Nan
        }
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.is_sign_negative()
    }

    unsafe fn write_shortest(self, buf: *mut u8) -> usize {
        debug_assert!(self.is_finite());
        if self == 0.0 {
            return unsafe { write_zero(self.is_sign_negative(), b"0.0", buf) };
        }
        let parts = unsafe { Parts::new(self) };
        unsafe { parts.write_general(buf) }
    }

    unsafe fn write_shortest_exp(self, buf: *mut u8) -> usize {
        debug_assert!(self.is_finite());
        if self == 0.0 {
            return unsafe { write_zero(self.is_sign_negative(), b"0.0E0", buf) };
        }
        let parts = unsafe { Parts::new(self) };
        unsafe { parts.write_exp(buf) }
    }

    fn split_exact(self) -> decimal::ExactDecimal {
        debug_assert!(self.is_finite() && self >= 0.0);
        self.split_exact_abs()
    }

    fn split_exact_abs(self) -> decimal::ExactDecimal {
        debug_assert!(self.is_finite());
        let binary = Binary::new(self);
        if binary.mant == 0 {
            return decimal::ExactDecimal::new(0, 0);
        }
        // SAFETY: finite and nonzero
        let dec = unsafe { binary.shortest() };
        decimal::ExactDecimal::new(dec.mant as u64, dec.exp)
    }

    fn parse_back(text: &str) -> Self {
        text.parse().expect("plain decimal output always reparses")
    }
}

/// Writes an optional sign and a zero literal.
///
/// # Safety
///
/// `buf` must have room for `literal.len() + 1` bytes.
unsafe fn write_zero(negative: bool, literal: &[u8], buf: *mut u8) -> usize {
    unsafe {
        buf.write(b'-');
        let buf = buf.add(negative as usize);
        core::ptr::copy_nonoverlapping(literal.as_ptr(), buf, literal.len());
        negative as usize + literal.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod binary {
        use super::*;

        /// Aux function, assert that `num` is decoded as `binary`; repeat for `-num`.
        fn assert_finite(num: $f, binary: Binary) {
            assert!(num.is_finite());
            assert_eq!(Binary::new(num.abs()), binary);
            assert_eq!(Binary::new(-num.abs()), binary);
        }

        #[test]
        fn extremes() {
            assert_finite(0.0, Binary { exp: Binary::MIN_EXP, mant: 0 });
            assert_finite(<$f>::from_bits(1), Binary { exp: Binary::MIN_EXP, mant: 1 });
            assert_finite($f::MIN_POSITIVE, Binary { exp: Binary::MIN_EXP, mant: Binary::IMPLICIT_BIT });
            assert_finite($f::MAX, Binary {
                exp: $f::MAX_EXP - Binary::BITS_MANTISSA as Exp,
                mant: (1 << Binary::BITS_MANTISSA) - 1,
            });
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100_000))]

            #[test]
            fn float_roundtrip(
                float in any::<$bits>().prop_map($f::from_bits),
            ) {
                prop_assume!(float.is_finite() && float.abs() != 0.0);
                let binary = Binary::new(float);
                let refloat = ((2.0 as $f).powi(binary.exp) * binary.mant as $f).copysign(float);
                assert_eq!(refloat, float);
            }
        }
    }

    mod decimal {
        use super::*;

        const INT_BOUND: $bits_signed = (1 as $bits_signed) << Binary::BITS_MANTISSA;
        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100_000))]

            #[test]
            fn integer_roundtrip(
                int in -INT_BOUND .. INT_BOUND,
            ) {
                prop_assume!(int != 0);
                let float = int as $f;
                assert_eq!(
                    unsafe { Parts::new(float) },
                    Parts {
                        sign: (int >= 0),
                        decimal: Decimal { exp: 0, mant: int.unsigned_abs() }.remove_trailing_zeros(),
                    }
                )
            }
        }
    }

    mod string {
        use super::*;

        /// Parses a decimal string into canonical `(digits, pow10 exponent)` form, ignoring
        /// the sign.
        fn parse_decimal(text: &str) -> (u64, i32) {
            let text = text.strip_prefix('-').unwrap_or(text);
            let (mant, exp) = match text.split_once(['e', 'E']) {
                Some((mant, exp)) => (mant, exp.parse::<i32>().unwrap()),
                None => (text, 0),
            };
            let (int_part, frac_part) = match mant.split_once('.') {
                Some((int_part, frac_part)) => (int_part, frac_part),
                None => (mant, ""),
            };
            let digits: u64 = [int_part, frac_part].concat().parse().unwrap();
            let mut canonical = (digits, exp - frac_part.len() as i32);
            if canonical.0 == 0 {
                return (0, 0);
            }
            while canonical.0 % 10 == 0 {
                canonical = (canonical.0 / 10, canonical.1 + 1);
            }
            canonical
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200_000))]

            #[test]
            fn float_roundtrip_general(
                float in any::<$bits>().prop_map($f::from_bits),
            ) {
                prop_assume!(float.is_finite());
                let mut buf = crate::Buffer::new();
                let text = buf.format(float);
                let refloat: $f = text.parse().unwrap();
                assert_eq!(float.to_bits(), refloat.to_bits())
            }

            #[test]
            fn float_roundtrip_exp(
                float in any::<$bits>().prop_map($f::from_bits),
            ) {
                prop_assume!(float.is_finite());
                let mut buf = crate::Buffer::new();
                let text = buf.format_exp(float);
                let refloat: $f = text.parse().unwrap();
                assert_eq!(float.to_bits(), refloat.to_bits())
            }

            /// The selected decimal must agree with ryu digit for digit: both pick the
            /// shortest representation, the closest such decimal, ties to the even digit.
            #[test]
            fn ryu_agreement(
                float in any::<$bits>().prop_map($f::from_bits),
            ) {
                prop_assume!(float.is_finite() && float != 0.0);
                let ours = parse_decimal(crate::Buffer::new().format(float));
                let ryus = parse_decimal(ryu::Buffer::new().format(float));
                assert_eq!(ours, ryus);
            }
        }
    }
}

}} // mk_impl

pub(crate) use mk_impl;
