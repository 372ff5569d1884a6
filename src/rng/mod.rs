// <FILE>src/rng/mod.rs</FILE> - <DESC>Per-thread deterministic randomness for noise injection</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! Per-thread RNG façade: uniform draws and the sparsity skip test.
//!
//! State is thread-local and lazily seeded on first use, from
//! `(configured seed, thread id)` when a seed is fixed, else from a
//! high-entropy source mixed with the thread id. Once seeded, a thread's
//! generator is never touched by another thread.

mod cls_thread_rng;
mod fnc_seed_mix;
mod fnc_sparsity;

pub use cls_thread_rng::{bipolar_half, uniform01};
pub use fnc_sparsity::skip;

// <FILE>src/rng/mod.rs</FILE> - <DESC>Per-thread deterministic randomness for noise injection</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
