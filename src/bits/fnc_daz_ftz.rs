// <FILE>src/bits/fnc_daz_ftz.rs</FILE> - <DESC>Denormals-are-zero and flush-to-zero on the narrow operand type</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! DAZ (denormals-are-zero, input side) and FTZ (flush-to-zero, output side).

use super::{FloatBits, FpClass};

/// If `x` is subnormal, return a signed zero of the same sign; otherwise
/// return `x` unchanged. Applied to operands before they take part in an
/// operation when `ctx.daz` is set.
pub fn daz<T: FloatBits>(x: T) -> T {
    if x.classify() == FpClass::Subnormal {
        signed_zero_like(x)
    } else {
        x
    }
}

/// Same mapping as [`daz`], applied to a result before it is narrowed and
/// returned to the host when `ctx.ftz` is set.
pub fn ftz<T: FloatBits>(x: T) -> T {
    daz(x)
}

fn signed_zero_like<T: FloatBits>(x: T) -> T {
    let sign_shift = T::MANT_BITS + T::EXP_BITS;
    T::from_bits64((x.to_bits64() >> sign_shift) << sign_shift)
}


// <FILE>src/bits/fnc_daz_ftz.rs</FILE> - <DESC>Denormals-are-zero and flush-to-zero on the narrow operand type</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
