// <FILE>src/wide/mod.rs</FILE> - <DESC>Extended-precision carrier wider than binary64</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! An extended-precision carrier wider than binary64, used as the working
//! type when widening binary64 operands so that the noise step and the
//! narrowing rounding don't interact (see the module docs on [`crate::binop`]).
//!
//! A true binary128 softfloat would give the widest possible headroom; this
//! crate substitutes a double-double pair (`hi`, `lo`, both `f64`) instead,
//! the way a long-double-less target substitutes two summed floats for one
//! wider one. The tradeoff is documented on [`Extended`] itself.

mod cls_extended;

pub use cls_extended::Extended;

// <FILE>src/wide/mod.rs</FILE> - <DESC>Extended-precision carrier wider than binary64</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
