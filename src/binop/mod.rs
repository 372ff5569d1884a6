// <FILE>src/binop/mod.rs</FILE> - <DESC>Operation dispatch for the four arithmetic entry points</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! The binary-op driver: widen, DAZ, pre-noise, compute at working
//! precision, post-noise, FTZ, narrow.

mod fnc_binop;

pub use fnc_binop::{binop_f32, binop_f64, Operation};

// <FILE>src/binop/mod.rs</FILE> - <DESC>Operation dispatch for the four arithmetic entry points</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
