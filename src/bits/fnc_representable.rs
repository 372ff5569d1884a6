// <FILE>src/bits/fnc_representable.rs</FILE> - <DESC>Exact-representability test at a virtual mantissa precision</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation - distinct normal/subnormal kept-bit formulas</CLOG>

//! Representability test: is `x` exactly expressible with `t` significant
//! mantissa bits at its current magnitude?

use super::{FloatBits, FpClass};

/// True iff `x` can be expressed exactly with `t` significant mantissa bits.
///
/// Equivalent to: the low `MANT_BITS - (t - 1)` mantissa bits of `x` are all
/// zero. For subnormals the count is adjusted by the leading-zero run the
/// way [`super::get_exp`] adjusts the exponent, since a subnormal's leading
/// mantissa bits already carry no information. Zero, infinities and NaN are
/// always representable (never noised).
pub fn representable<T: FloatBits>(x: T, t: u32) -> bool {
    match x.classify() {
        FpClass::Zero | FpClass::Infinite | FpClass::Nan => true,
        // Normal: the leading 1 is implicit, so t significant bits means
        // t - 1 stored mantissa bits survive; the rest must be zero.
        FpClass::Normal => is_representable(x.raw_mantissa(), T::MANT_BITS, t.saturating_sub(1)),
        // Subnormal: there is no implicit bit — the leading 1 is itself
        // stored, past a run of `lz` stored zeros. t significant bits means
        // lz + (t - 1) + 1 stored bits (the zero run, the explicit leading
        // one, and t - 1 fraction bits after it) survive.
        FpClass::Subnormal => {
            let lz = leading_zeros_in_field(x.raw_mantissa(), T::MANT_BITS);
            let kept = lz.saturating_add(t.saturating_sub(1)).saturating_add(1);
            is_representable(x.raw_mantissa(), T::MANT_BITS, kept)
        }
    }
}

#[inline]
fn leading_zeros_in_field(value: u64, width: u32) -> u32 {
    if value == 0 {
        width
    } else {
        value.leading_zeros() - (64 - width)
    }
}

/// True iff the low `mant_bits - kept` bits of `mantissa` are all zero.
fn is_representable(mantissa: u64, mant_bits: u32, kept: u32) -> bool {
    let kept = kept.min(mant_bits);
    let drop = mant_bits - kept;
    if drop == 0 {
        return true;
    }
    let drop_mask = (1u64 << drop) - 1;
    mantissa & drop_mask == 0
}


// <FILE>src/bits/fnc_representable.rs</FILE> - <DESC>Exact-representability test at a virtual mantissa precision</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
