//! Conversion of IEEE-754 floating point numbers (`f32` and `f64`) to decimal text: the
//! shortest representation that parses back to the exact same value, and fixed-precision
//! rounding to a caller-chosen number of fractional digits.
//!
//! The shortest path is allocation-free; the fixed-precision path allocates its output
//! string (its length is controlled by the caller) and always produces plain notation.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::string::String;

mod dectoa;
pub use dectoa::Float;
pub use dectoa::decimal::{ExactDecimal, TrailingZeros};

use dectoa::{FloatType, Sealed};

/// Safe API for formatting floating point numbers to text.
///
/// ## Example
///
/// ```
/// let mut buffer = dectoa::Buffer::new();
/// let printed = buffer.format_finite(1.234);
/// assert_eq!(printed, "1.234");
/// ```
#[derive(Clone, Copy)]
pub struct Buffer<F: Float> {
    bytes: F::Buffer,
}

impl<F: Float> Buffer<F> {
    /// This is a cheap operation; you don't need to worry about reusing buffers for efficiency.
    pub fn new() -> Self {
        Buffer { bytes: F::new_buffer() }
    }

    /// Print a floating point `num` into this buffer, and return a reference to its string
    /// representation within the buffer. The number is formatted as a plain decimal if it fits
    /// in a "small" number of characters, or in scientific notation otherwise, always with at
    /// least one fractional digit.
    ///
    /// This function formats NaN as the string `"NaN"`, positive infinity as `"Infinity"`, and
    /// negative infinity as `"-Infinity"`. Zeros format as `"0.0"` and `"-0.0"`.
    ///
    /// If `num` is known to be finite, you may get better performance by calling the
    /// [Self::format_finite] method instead to avoid the checks for special cases.
    pub fn format(&mut self, num: F) -> &str {
        match num.classify() {
            FloatType::Finite => self.format_finite(num),
            FloatType::PosInf => "Infinity",
            FloatType::NegInf => "-Infinity",
            FloatType::Nan => "NaN",
        }
    }

    /// Print a floating point `num` into this buffer, and return a reference to its string
    /// representation within the buffer, **provided that `num.is_finite()`**.
    ///
    /// This function **does not** check that `num` is indeed finite, for performance reasons; in
    /// this case it will print an unspecified (but valid) string.
    pub fn format_finite(&mut self, num: F) -> &str {
        let len = unsafe { num.write_shortest(F::buffer_as_ptr(&mut self.bytes)) };
        debug_assert!(len <= F::BUFFER_LEN);
        let slice = unsafe { core::slice::from_raw_parts(F::buffer_as_ptr(&mut self.bytes), len) };
        unsafe { core::str::from_utf8_unchecked(slice) }
    }

    /// Print a floating point `num` into this buffer in scientific notation, and return a
    /// reference to its string representation within the buffer.
    ///
    /// This function formats NaN as the string `"NaN"`, positive infinity as `"Infinity"`, and
    /// negative infinity as `"-Infinity"`.
    ///
    /// If `num` is known to be finite, you may get better performance by calling the
    /// [Self::format_exp_finite] method instead to avoid the checks for special cases.
    pub fn format_exp(&mut self, num: F) -> &str {
        match num.classify() {
            FloatType::Finite => self.format_exp_finite(num),
            FloatType::PosInf => "Infinity",
            FloatType::NegInf => "-Infinity",
            FloatType::Nan => "NaN",
        }
    }

    /// Print a floating point `num` into this buffer in scientific notation, and return a
    /// reference to its string representation within the buffer, provided that
    /// `num.is_finite()`.
    ///
    /// This function **does not** check that `num` is indeed finite, for performance reasons; in
    /// this case it will print an unspecified (but valid) string.
    pub fn format_exp_finite(&mut self, num: F) -> &str {
        let len = unsafe { num.write_shortest_exp(F::buffer_as_ptr(&mut self.bytes)) };
        debug_assert!(len <= F::BUFFER_LEN);
        let slice = unsafe { core::slice::from_raw_parts(F::buffer_as_ptr(&mut self.bytes), len) };
        unsafe { core::str::from_utf8_unchecked(slice) }
    }
}

/// Splits a **finite**, **nonnegative** `num` (±0 allowed) into its shortest exact decimal
/// record `f · 10^e`.
///
/// Violating the precondition is a programming error: it trips a debug assertion, and the
/// result in release builds is unspecified.
///
/// ## Example
///
/// ```
/// let record = dectoa::split_exact(295.335);
/// assert_eq!(record.significand(), 295335);
/// assert_eq!(record.exponent(), -3);
/// assert_eq!(record.digits(), 6);
/// ```
pub fn split_exact<F: Float>(num: F) -> ExactDecimal {
    num.split_exact()
}

/// Formats `num` as a plain decimal rounded to `precision` fractional digits, with the
/// fractional part padded so its length always equals `precision`
/// ([TrailingZeros::Exact]).
///
/// A negative `precision` returns the default string form of the value unchanged, as does a
/// NaN or infinite `num`. Rounding is half-up on the unsigned magnitude, with the sign
/// reattached afterwards; values that round to zero keep their sign (`-0.01` at one
/// fractional digit formats as `"-0.0"`).
///
/// ## Example
///
/// ```
/// assert_eq!(dectoa::format_precision(295.335, 2), "295.34");
/// assert_eq!(dectoa::format_precision(1.5, 2), "1.50");
/// assert_eq!(dectoa::format_precision(9.99, 1), "10.0");
/// ```
pub fn format_precision<F: Float>(num: F, precision: i32) -> String {
    format_precision_with(num, precision, TrailingZeros::Exact)
}

/// Like [format_precision], with an explicit trailing-zero mode.
pub fn format_precision_with<F: Float>(num: F, precision: i32, trailing: TrailingZeros) -> String {
    match num.classify() {
        FloatType::PosInf => return String::from("Infinity"),
        FloatType::NegInf => return String::from("-Infinity"),
        FloatType::Nan => return String::from("NaN"),
        FloatType::Finite => {}
    }
    if precision < 0 {
        return String::from(Buffer::new().format(num));
    }

    let mut decimal = num.split_exact_abs();
    let p = decimal
        .digits()
        .saturating_add(decimal.exponent())
        .saturating_add(precision);
    decimal.round(p, trailing);

    let capacity = 3usize
        .saturating_add(precision as usize)
        .saturating_add(decimal.digits().unsigned_abs() as usize)
        .saturating_add(decimal.exponent().unsigned_abs() as usize);
    let mut out = String::with_capacity(capacity);
    if num.is_negative() {
        out.push('-');
    }
    decimal.append_plain(precision, trailing, &mut out);
    out
}

/// Rounds `num` to `precision` fractional digits by formatting it with [format_precision]
/// and reparsing the text. Returns `num` unchanged if `precision` is negative or `num` is
/// NaN or infinite.
///
/// ## Example
///
/// ```
/// assert_eq!(dectoa::round_to_precision(295.335, 2), 295.34);
/// assert_eq!(dectoa::round_to_precision(-2.5f32, 0), -3.0);
/// ```
pub fn round_to_precision<F: Float>(num: F, precision: i32) -> F {
    if precision < 0 || !matches!(num.classify(), FloatType::Finite) {
        return num;
    }
    F::parse_back(&format_precision(num, precision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fmt64(num: f64) -> String {
        String::from(Buffer::new().format(num))
    }

    fn fmt32(num: f32) -> String {
        String::from(Buffer::new().format(num))
    }

    #[test]
    fn shortest_plain_and_scientific() {
        assert_eq!(fmt64(123.456), "123.456");
        assert_eq!(fmt64(0.001234), "0.001234");
        assert_eq!(fmt64(0.0001234), "1.234E-4");
        assert_eq!(fmt64(1234567.0), "1234567.0");
        assert_eq!(fmt64(12345678.0), "1.2345678E7");
        assert_eq!(fmt64(1e7), "1.0E7");
        assert_eq!(fmt64(123400.0), "123400.0");
        assert_eq!(fmt64(2e23), "2.0E23");
        assert_eq!(fmt64(core::f64::consts::PI), "3.141592653589793");
        assert_eq!(fmt64(-1.5e-300), "-1.5E-300");
        assert_eq!(fmt64(f64::MAX), "1.7976931348623157E308");
        assert_eq!(fmt64(f64::MIN_POSITIVE), "2.2250738585072014E-308");
        assert_eq!(fmt64(f64::from_bits(1)), "5.0E-324");
    }

    #[test]
    fn shortest_f32() {
        assert_eq!(fmt32(123.456), "123.456");
        assert_eq!(fmt32(0.1), "0.1");
        assert_eq!(fmt32(f32::MAX), "3.4028235E38");
        assert_eq!(fmt32(f32::MIN_POSITIVE), "1.1754944E-38");
        assert_eq!(fmt32(f32::from_bits(1)), "1.0E-45");
        assert_eq!(fmt32(7.0 * f32::from_bits(1)), "1.0E-44");
    }

    #[test]
    fn shortest_specials() {
        assert_eq!(fmt64(0.0), "0.0");
        assert_eq!(fmt64(-0.0), "-0.0");
        assert_eq!(fmt64(f64::INFINITY), "Infinity");
        assert_eq!(fmt64(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(fmt64(f64::NAN), "NaN");
        assert_eq!(fmt32(f32::NAN), "NaN");
        assert_eq!(fmt32(-f32::INFINITY), "-Infinity");
    }

    #[test]
    fn shortest_exp_layout() {
        let mut buf = Buffer::new();
        assert_eq!(buf.format_exp(123.456), "1.23456E2");
        assert_eq!(buf.format_exp(0.001234), "1.234E-3");
        assert_eq!(buf.format_exp(1.0), "1.0E0");
        assert_eq!(buf.format_exp(0.0), "0.0E0");
        assert_eq!(buf.format_exp(-0.0), "-0.0E0");
        assert_eq!(buf.format_exp(f64::INFINITY), "Infinity");
    }

    #[test]
    fn split_exact_records() {
        let record = split_exact(123.456);
        assert_eq!(
            (record.significand(), record.exponent(), record.digits()),
            (123456, -3, 6)
        );
        let record = split_exact(123000123000.0);
        assert_eq!(
            (record.significand(), record.exponent(), record.digits()),
            (123000123, 3, 9)
        );
        let record = split_exact(0.0);
        assert_eq!(
            (record.significand(), record.exponent(), record.digits()),
            (0, 0, 0)
        );
        let record = split_exact(0.1f32);
        assert_eq!((record.significand(), record.exponent()), (1, -1));
    }

    #[test]
    fn precision_exact_mode() {
        assert_eq!(format_precision(0.0, 2), "0.00");
        assert_eq!(format_precision(1.5, 2), "1.50");
        assert_eq!(format_precision(9.99, 1), "10.0");
        assert_eq!(format_precision(295.335, 2), "295.34");
        assert_eq!(format_precision(0.01, 1), "0.0");
        assert_eq!(format_precision(-0.01, 1), "-0.0");
        assert_eq!(format_precision(9223372036854.77, 3), "9223372036854.770");
    }

    #[test]
    fn precision_more_cases() {
        assert_eq!(format_precision(0.5, 0), "1");
        assert_eq!(format_precision(-0.5, 0), "-1");
        assert_eq!(format_precision(295.335, 0), "295");
        assert_eq!(format_precision(-0.0, 2), "-0.00");
        assert_eq!(format_precision(100.0, 2), "100.00");
        assert_eq!(format_precision(1e21, 1), "1000000000000000000000.0");
        assert_eq!(format_precision(5e-324, 3), "0.000");
        assert_eq!(format_precision(0.1, 20), "0.10000000000000000000");
        assert_eq!(format_precision(1.5f32, 2), "1.50");
        assert_eq!(format_precision(9.99f32, 1), "10.0");
    }

    #[test]
    fn precision_minimal_mode() {
        assert_eq!(format_precision_with(9.99, 1, TrailingZeros::Minimal), "10");
        assert_eq!(format_precision_with(1.5, 2, TrailingZeros::Minimal), "1.5");
        assert_eq!(format_precision_with(295.335, 2, TrailingZeros::Minimal), "295.34");
        assert_eq!(format_precision_with(100.0, 2, TrailingZeros::Minimal), "100");
        assert_eq!(format_precision_with(0.0, 2, TrailingZeros::Minimal), "0");
        assert_eq!(format_precision_with(2.95, 1, TrailingZeros::Minimal), "3.0");
    }

    #[test]
    fn precision_no_ops() {
        assert_eq!(format_precision(123.456, -1), "123.456");
        assert_eq!(format_precision(f64::NAN, 2), "NaN");
        assert_eq!(format_precision(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_precision(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(round_to_precision(123.456, -1), 123.456);
        assert!(round_to_precision(f64::NAN, 2).is_nan());
        assert_eq!(round_to_precision(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn round_to_precision_values() {
        assert_eq!(round_to_precision(295.335, 2), 295.34);
        assert_eq!(round_to_precision(9.99, 1), 10.0);
        assert_eq!(round_to_precision(-0.01, 1), -0.0);
        assert!(round_to_precision(-0.01f64, 1).is_sign_negative());
        assert_eq!(round_to_precision(2.5f32, 0), 3.0);
        assert_eq!(round_to_precision(1.0 / 3.0, 4), 0.3333);
    }

    /// Monotonic refinement: re-rounding a higher-precision result at a lower precision
    /// must agree with rounding the original value at that lower precision directly.
    #[test]
    fn precision_refinement() {
        let value = 2.0 / 7.0;
        for precision in 0..17 {
            let finer = round_to_precision(value, precision + 1);
            assert_eq!(
                round_to_precision(value, precision),
                round_to_precision(finer, precision),
            );
        }
    }

    /// Grade-school reference rounding applied to the decimal digit string of the shortest
    /// record; `format_precision` must agree with it exactly.
    fn reference_precision(num: f64, precision: usize) -> String {
        const INT_SLOTS: usize = 400;
        let record = split_exact(num.abs());
        let digits = alloc::format!("{}", record.significand());
        let point = record.digits() + record.exponent();

        // Lay the digits out on a fixed grid around the decimal point; digit `i` sits at
        // power-of-ten position `point - 1 - i`.
        let mut int_part = alloc::vec![b'0'; INT_SLOTS];
        let mut frac_part = alloc::vec![b'0'; 400 + precision];
        if record.significand() != 0 {
            for (i, d) in digits.bytes().enumerate() {
                let position = point - 1 - i as i32;
                if position >= 0 {
                    int_part[INT_SLOTS - 1 - position as usize] = d;
                } else {
                    frac_part[(-position - 1) as usize] = d;
                }
            }
        }

        // Round half-up at `precision` fractional digits.
        let carry = frac_part[precision] >= b'5';
        frac_part.truncate(precision);
        let mut all = int_part;
        all.append(&mut frac_part);
        if carry {
            for d in all.iter_mut().rev() {
                if *d == b'9' {
                    *d = b'0';
                } else {
                    *d += 1;
                    break;
                }
            }
        }

        let (int_part, frac_part) = all.split_at(INT_SLOTS);
        let int_str = core::str::from_utf8(int_part).unwrap().trim_start_matches('0');
        let mut out = String::new();
        if num.is_sign_negative() {
            out.push('-');
        }
        out.push_str(if int_str.is_empty() { "0" } else { int_str });
        if precision > 0 {
            out.push('.');
            out.push_str(core::str::from_utf8(frac_part).unwrap());
        }
        out
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50_000))]

        #[test]
        fn precision_matches_reference(
            float in any::<u64>().prop_map(f64::from_bits),
            precision in 0i32..25,
        ) {
            prop_assume!(float.is_finite());
            let ours = format_precision(float, precision);
            let reference = reference_precision(float, precision as usize);
            assert_eq!(ours, reference);
        }

        #[test]
        fn precision_idempotent(
            float in any::<u64>().prop_map(f64::from_bits),
            precision in 0i32..20,
        ) {
            prop_assume!(float.is_finite());
            let once = format_precision(float, precision);
            let reparsed: f64 = once.parse().unwrap();
            assert_eq!(format_precision(reparsed, precision), once);
        }

        #[test]
        fn precision_output_reparses(
            float in any::<u32>().prop_map(f32::from_bits),
            precision in 0i32..15,
        ) {
            prop_assume!(float.is_finite());
            let text = format_precision(float, precision);
            let _: f32 = text.parse().unwrap();
            if precision > 0 {
                let frac = text.rsplit_once('.').unwrap().1;
                assert_eq!(frac.len(), precision as usize);
            }
        }
    }
}
