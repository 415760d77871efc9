//! Routines for actually formatting the numbers as strings.

const DIGITS_LUT: &[u8; 200] =
    b"00010203040506070809\
      10111213141516171819\
      20212223242526272829\
      30313233343536373839\
      40414243444546474849\
      50515253545556575859\
      60616263646566676869\
      70717273747576777879\
      80818283848586878889\
      90919293949596979899";

/// Powers of ten that fit in an `u64`.
pub const POW10: [u64; 20] = {
    let mut table = [0u64; 20];
    let mut i = 0;
    let mut pow = 1u64;
    while i < 20 {
        table[i] = pow;
        pow = pow.wrapping_mul(10);
        i += 1;
    }
    table
};

/// Number of digits of `x`. Invariant: `x` has at most 17 digits.
pub const fn len_u64(x: u64) -> usize {
    debug_assert!(x < POW10[17]);
    // Hypothesis: the average output length among all `f64`s is 16.38 digits, so high-to-low is
    // likelier to get well predicted.
    if x >= 10000000000000000 {
        17
    } else if x >= 1000000000000000 {
        16
    } else if x >= 100000000000000 {
        15
    } else if x >= 10000000000000 {
        14
    } else if x >= 1000000000000 {
        13
    } else if x >= 100000000000 {
        12
    } else if x >= 10000000000 {
        11
    } else if x >= 1000000000 {
        10
    } else if x >= 100000000 {
        9
    } else if x >= 10000000 {
        8
    } else if x >= 1000000 {
        7
    } else if x >= 100000 {
        6
    } else if x >= 10000 {
        5
    } else if x >= 1000 {
        4
    } else if x >= 100 {
        3
    } else if x >= 10 {
        2
    } else {
        1
    }
}

#[inline]
fn write_pair(out: &mut [u8; 20], at: usize, lo: u64, hi: u64) {
    let d = (lo - hi * 100) as usize * 2;
    out[at] = DIGITS_LUT[d];
    out[at + 1] = DIGITS_LUT[d + 1];
}

/// Writes the decimal digits of `x` right-aligned into `out` and returns the digit count, so
/// that the digits occupy `out[20 - count ..]`. Bytes in front of the digits are clobbered.
/// Invariant: `x` has at most 17 digits.
pub fn write_digits_backward(x: u64, out: &mut [u8; 20]) -> usize {
    debug_assert!(x < POW10[17]);
    if x == 0 {
        out[19] = b'0';
        return 1;
    }

    let top12 = x / 100000000;
    let top4 = x / 10000000000000000;

    let v0 = x - top12 * 100000000;
    let v1 = (v0 * 1374389535) >> 37;
    let v2 = (v0 * 3518437209) >> 45;
    let v3 = (v0 * 1125899907) >> 50;

    write_pair(out, 18, v0, v1);
    write_pair(out, 16, v1, v2);
    write_pair(out, 14, v2, v3);
    write_pair(out, 12, v3, 0);

    let v4 = top12 - top4 * 100000000;
    let v5 = (v4 * 1374389535) >> 37;
    let v6 = (v4 * 3518437209) >> 45;
    let v7 = (v4 * 1125899907) >> 50;

    write_pair(out, 10, v4, v5);
    write_pair(out, 8, v5, v6);
    write_pair(out, 6, v6, v7);
    write_pair(out, 4, v7, 0);

    out[3] = b'0' + top4 as u8;

    len_u64(x)
}

/// Print an exponent, returning the number of bytes written. Negative exponents get a `-` sign,
/// positive ones no sign. Invariant: never more than 3 digits.
///
/// # Safety
///
/// `buf` must have room for 4 bytes.
#[inline]
pub unsafe fn write_exp(x: i32, buf: *mut u8) -> usize {
    debug_assert!(-999 <= x && x <= 999);

    unsafe {
        let sign = x >= 0;
        let x_abs = if sign { x } else { -x };

        *buf = b'-';
        let buf = buf.add(!sign as usize);

        if x_abs >= 100 {
            *buf = b'0' + (x_abs / 100) as u8;
            let d = DIGITS_LUT.as_ptr().add(x_abs as usize % 100 * 2);
            core::ptr::copy_nonoverlapping(d, buf.add(1), 2);
            !sign as usize + 3
        } else if x_abs >= 10 {
            let d = DIGITS_LUT.as_ptr().add(x_abs as usize * 2);
            core::ptr::copy_nonoverlapping(d, buf, 2);
            !sign as usize + 2
        } else {
            *buf = b'0' + x_abs as u8;
            !sign as usize + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_of(x: u64) -> Vec<u8> {
        let mut buf = [0u8; 20];
        let n = write_digits_backward(x, &mut buf);
        buf[20 - n..].to_vec()
    }

    #[test]
    fn test_digits_backward() {
        assert_eq!(digits_of(0), b"0");
        assert_eq!(digits_of(1), b"1");
        assert_eq!(digits_of(9), b"9");
        assert_eq!(digits_of(10), b"10");
        assert_eq!(digits_of(1234), b"1234");
        assert_eq!(digits_of(61295), b"61295");
        assert_eq!(digits_of(99_999_999_999_999_999), b"99999999999999999");
    }

    #[test]
    fn test_write_exp() {
        let mut buf = [0u8; 80];

        for x in -999..=999 {
            let len = unsafe { write_exp(x, buf.as_mut_ptr()) };
            let std = format!("{x}");
            assert_eq!(&buf[..len], std.as_bytes())
        }
    }

    #[test]
    fn test_pow10() {
        for (i, p) in POW10.iter().enumerate() {
            assert_eq!(*p, 10u64.pow(i as u32));
        }
    }

    use proptest::prelude::*;
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100_000))]

        #[test]
        fn proptest_digits_backward(x in 0u64 .. POW10[17]) {
            let std = format!("{x}");
            assert_eq!(digits_of(x), std.as_bytes());
            assert_eq!(len_u64(x), std.len());
        }
    }
}
