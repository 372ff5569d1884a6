// <FILE>src/bits/mod.rs</FILE> - <DESC>IEEE-754 bit-layout primitives shared by binary32 and binary64</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation - generic FloatBits trait and exponent-field helpers</CLOG>

//! IEEE-754 bit-layout primitives.
//!
//! Every operation here works directly on the bit pattern of a binary32
//! or binary64 value rather than through arithmetic, so that exponent-field
//! edits never round. [`FloatBits`] exposes the layout (sign/exponent/mantissa
//! widths, bias, normal exponent range) generically so [`get_exp`], [`pow2`],
//! [`add_exp`], [`daz`], [`ftz`] and [`representable`] are written once and
//! instantiated for `f32` and `f64`.

mod cls_float_bits;
mod fnc_daz_ftz;
mod fnc_exponent;
mod fnc_representable;

pub use cls_float_bits::{FloatBits, FpClass};
pub use fnc_daz_ftz::{daz, ftz};
pub use fnc_exponent::{add_exp, get_exp, pow2};
pub use fnc_representable::representable;

// <FILE>src/bits/mod.rs</FILE> - <DESC>IEEE-754 bit-layout primitives shared by binary32 and binary64</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
