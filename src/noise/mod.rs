// <FILE>src/noise/mod.rs</FILE> - <DESC>Bit-exact scaled noise construction</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! Noise generator: `(u - 0.5) * 2^e` at the working precision, built by
//! editing the exponent field of a `(-0.5, 0.5)` draw directly rather than
//! multiplying by a power of two (which would round).

mod fnc_noise;

pub use fnc_noise::{noise_ext, noise_f64};

// <FILE>src/noise/mod.rs</FILE> - <DESC>Bit-exact scaled noise construction</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
