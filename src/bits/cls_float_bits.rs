// <FILE>src/bits/cls_float_bits.rs</FILE> - <DESC>FloatBits trait: generic sign/exponent/mantissa layout and classification</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! The [`FloatBits`] trait: a bit-layout view of a native IEEE-754 type.

/// Classification of a floating-point value, matching the IEEE-754
/// categories this engine cares about (no distinction between quiet and
/// signaling NaN is needed here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpClass {
    Zero,
    Subnormal,
    Normal,
    Infinite,
    Nan,
}

/// A bit-level view of an IEEE-754 binary floating-point type.
///
/// All exponent-field edits in this crate go through `to_bits64`/`from_bits64`
/// and masked integer arithmetic rather than through a union or arithmetic
/// on the float itself, so the edits are exact regardless of rounding mode.
pub trait FloatBits: Copy + PartialEq + PartialOrd {
    /// Width of the mantissa field in bits (23 for binary32, 52 for binary64).
    const MANT_BITS: u32;
    /// Width of the exponent field in bits (8 for binary32, 11 for binary64).
    const EXP_BITS: u32;
    /// Exponent bias.
    const BIAS: i32;
    /// Smallest unbiased exponent of a NORMAL value.
    const EXP_MIN: i32 = 1 - Self::BIAS;
    /// Largest unbiased exponent of a NORMAL value.
    const EXP_MAX: i32 = (1 << Self::EXP_BITS) - 2 - Self::BIAS;

    fn to_bits64(self) -> u64;
    fn from_bits64(bits: u64) -> Self;

    fn classify(self) -> FpClass;

    #[inline]
    fn mantissa_mask() -> u64 {
        (1u64 << Self::MANT_BITS) - 1
    }

    #[inline]
    fn exp_mask() -> u64 {
        (1u64 << Self::EXP_BITS) - 1
    }

    /// Raw (biased) exponent field, as stored in the bit pattern.
    #[inline]
    fn raw_exp_field(self) -> u64 {
        (self.to_bits64() >> Self::MANT_BITS) & Self::exp_mask()
    }

    /// Raw mantissa field, as stored in the bit pattern.
    #[inline]
    fn raw_mantissa(self) -> u64 {
        self.to_bits64() & Self::mantissa_mask()
    }

    #[inline]
    fn sign_bit(self) -> bool {
        (self.to_bits64() >> (Self::MANT_BITS + Self::EXP_BITS)) & 1 != 0
    }
}

impl FloatBits for f32 {
    const MANT_BITS: u32 = 23;
    const EXP_BITS: u32 = 8;
    const BIAS: i32 = 127;

    #[inline]
    fn to_bits64(self) -> u64 {
        self.to_bits() as u64
    }

    #[inline]
    fn from_bits64(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    fn classify(self) -> FpClass {
        classify_generic(self)
    }
}

impl FloatBits for f64 {
    const MANT_BITS: u32 = 52;
    const EXP_BITS: u32 = 11;
    const BIAS: i32 = 1023;

    #[inline]
    fn to_bits64(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_bits64(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    fn classify(self) -> FpClass {
        classify_generic(self)
    }
}

fn classify_generic<T: FloatBits>(x: T) -> FpClass {
    let exp_field = x.raw_exp_field();
    let mant = x.raw_mantissa();
    if exp_field == T::exp_mask() {
        if mant == 0 {
            FpClass::Infinite
        } else {
            FpClass::Nan
        }
    } else if exp_field == 0 {
        if mant == 0 {
            FpClass::Zero
        } else {
            FpClass::Subnormal
        }
    } else {
        FpClass::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_f32() {
        assert_eq!(0.0f32.classify(), FpClass::Zero);
        assert_eq!((-0.0f32).classify(), FpClass::Zero);
        assert_eq!(1.0f32.classify(), FpClass::Normal);
        assert_eq!(f32::INFINITY.classify(), FpClass::Infinite);
        assert_eq!(f32::NAN.classify(), FpClass::Nan);
        assert_eq!(f32::from_bits(1).classify(), FpClass::Subnormal);
    }

    #[test]
    fn test_classify_f64() {
        assert_eq!(0.0f64.classify(), FpClass::Zero);
        assert_eq!(1.0f64.classify(), FpClass::Normal);
        assert_eq!(f64::NEG_INFINITY.classify(), FpClass::Infinite);
        assert_eq!(f64::NAN.classify(), FpClass::Nan);
        assert_eq!(f64::from_bits(1).classify(), FpClass::Subnormal);
    }

    #[test]
    fn test_exponent_bounds_match_native_limits() {
        assert_eq!(f64::EXP_MIN, -1022);
        assert_eq!(f64::EXP_MAX, 1023);
        assert_eq!(f32::EXP_MIN, -126);
        assert_eq!(f32::EXP_MAX, 127);
    }

    #[test]
    fn test_sign_bit_roundtrip() {
        assert!((-1.0f64).sign_bit());
        assert!(!(1.0f64).sign_bit());
        assert!((-0.0f32).sign_bit());
    }
}

// <FILE>src/bits/cls_float_bits.rs</FILE> - <DESC>FloatBits trait: generic sign/exponent/mantissa layout and classification</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
