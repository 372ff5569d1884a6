// <FILE>src/bits/fnc_exponent.rs</FILE> - <DESC>GET_EXP, POW2, and ADD_EXP exponent-field edits</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! GET_EXP, POW2 and ADD_EXP: exponent-field edits on the raw bit pattern.

use super::{FloatBits, FpClass};

/// Number of leading zero bits of `value` within a field of `width` bits.
#[inline]
fn leading_zeros_in_field(value: u64, width: u32) -> u32 {
    if value == 0 {
        width
    } else {
        value.leading_zeros() - (64 - width)
    }
}

/// Unbiased exponent of `x`, defined so that `2^e <= |x| < 2^(e+1)`.
///
/// For subnormals this is the minimum normal exponent minus the number of
/// leading zeros in the mantissa field, so the magnitude relation above
/// still holds at the reduced precision subnormals carry.
///
/// Only defined for `Normal`/`Subnormal` values; callers are expected to
/// have already excluded zero/infinite/NaN via [`FloatBits::classify`].
pub fn get_exp<T: FloatBits>(x: T) -> i32 {
    match x.classify() {
        FpClass::Normal => x.raw_exp_field() as i32 - T::BIAS,
        FpClass::Subnormal => {
            let lz = leading_zeros_in_field(x.raw_mantissa(), T::MANT_BITS);
            T::EXP_MIN - 1 - lz as i32
        }
        _ => {
            debug_assert!(false, "get_exp is only defined for normal/subnormal values");
            0
        }
    }
}

/// Construct `2^e` as a value of type `T`. `e` must lie within the normal
/// exponent range of `T`.
pub fn pow2<T: FloatBits>(e: i32) -> T {
    debug_assert!(
        e >= T::EXP_MIN && e <= T::EXP_MAX,
        "pow2 exponent out of the normal range"
    );
    let field = (e + T::BIAS).clamp(1, (1 << T::EXP_BITS) - 2) as u64;
    T::from_bits64(field << T::MANT_BITS)
}

fn signed_zero<T: FloatBits>(x: T) -> T {
    let sign_shift = T::MANT_BITS + T::EXP_BITS;
    T::from_bits64((x.to_bits64() >> sign_shift) << sign_shift)
}

fn signed_infinity<T: FloatBits>(x: T) -> T {
    let sign_shift = T::MANT_BITS + T::EXP_BITS;
    let sign_bits = (x.to_bits64() >> sign_shift) << sign_shift;
    T::from_bits64(sign_bits | (T::exp_mask() << T::MANT_BITS))
}

/// Return a value with the same sign and mantissa bit pattern as `x` but
/// with its biased exponent field shifted by `delta`.
///
/// Used to scale a `(-0.5, 0.5)` draw by `2^delta` without going through
/// floating-point multiplication (which would round). Zero and
/// non-finite inputs are left unchanged — this engine never calls
/// `add_exp` on them, since [`crate::inexact`] already excludes those
/// classes before reaching for noise. Exponents that would fall outside
/// the representable range flush to a correctly-signed zero (underflow)
/// or saturate to a correctly-signed infinity (overflow); callers are
/// expected to keep within range for admissible inputs, these are a
/// defensive floor/ceiling rather than the expected path.
pub fn add_exp<T: FloatBits>(x: T, delta: i32) -> T {
    let field = x.raw_exp_field();
    if field == 0 || field == T::exp_mask() {
        return x;
    }

    let new_field = field as i64 + delta as i64;
    if new_field <= 0 {
        return signed_zero(x);
    }
    if new_field >= T::exp_mask() as i64 {
        return signed_infinity(x);
    }

    let exp_shift = T::exp_mask() << T::MANT_BITS;
    let cleared = x.to_bits64() & !exp_shift;
    T::from_bits64(cleared | ((new_field as u64) << T::MANT_BITS))
}


// <FILE>src/bits/fnc_exponent.rs</FILE> - <DESC>GET_EXP, POW2, and ADD_EXP exponent-field edits</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
