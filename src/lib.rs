// <FILE>src/lib.rs</FILE> - <DESC>Monte Carlo Arithmetic noise-injection backend</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! # mca-noise
//!
//! A Monte Carlo Arithmetic (MCA) backend: a pluggable replacement for
//! IEEE-754 binary32/binary64 arithmetic that injects calibrated
//! stochastic perturbations into each operation, so a scientific code run
//! many times under different seeds reveals how sensitive its output is
//! to floating-point rounding.
//!
//! ## Core Philosophy: Bit-Exact Noise, Not Approximate Noise
//!
//! Perturbations are built by editing the exponent field of a random
//! `(-0.5, 0.5)` draw directly, at a precision wider than the operands,
//! rather than by multiplying by a power of two. That keeps the injected
//! noise from ever being absorbed or skewed by the rounding it's meant to
//! simulate.
//!
//! ## Modes
//!
//! Four modes compose the perturbation with each operation: `IEEE`
//! (pass-through), `PB` (perturb inputs), `RR` (perturb the result, unless
//! it's already exact at the target precision), `MCA` (both). See
//! [`config::Mode`].
//!
//! ## Quick Start
//!
//! ```rust
//! use mca_noise::prelude::*;
//!
//! let mut ctx = Context::new();
//! ctx.apply_option("mode", "mca").unwrap();
//! ctx.apply_option("seed", "42").unwrap();
//! let backend = Backend::new(ctx);
//!
//! let sum = backend.add_f64(1.0, 1.0 / 3.0);
//! assert!((sum - 4.0 / 3.0).abs() < 1e-6);
//! ```
//!
//! ## Runtime Reconfiguration
//!
//! The `INEXACT` and `SET_PRECISION_*` user-calls let a host perturb a
//! single value or change virtual precision mid-run:
//!
//! ```rust
//! use mca_noise::prelude::*;
//!
//! let backend = Backend::default();
//! backend.user_call(UserCall::SetPrecisionBinary64(40));
//! assert_eq!(backend.context().t64(), 40);
//!
//! let mut x = 1.0f32;
//! backend.user_call(UserCall::InexactF32 { value: &mut x, precision: 0 });
//! ```
pub mod backend;
pub mod binop;
pub mod bits;
pub mod config;
pub mod inexact;
pub mod noise;
pub mod rng;
pub mod wide;

pub mod prelude {
    //! Convenient re-exports for common usage.
    pub use crate::backend::{Backend, FType, UserCall};
    pub use crate::binop::Operation;
    pub use crate::config::{Context, ErrorMode, Mode};
}

// <FILE>src/lib.rs</FILE> - <DESC>Monte Carlo Arithmetic noise-injection backend</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
