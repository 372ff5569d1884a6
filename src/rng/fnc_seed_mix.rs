// <FILE>src/rng/fnc_seed_mix.rs</FILE> - <DESC>Deterministic seed derivation mixing a base seed with a thread id</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation - adapted from the shared derive_seed helper</CLOG>

//! Deterministic seed derivation for this thread's `ChaCha8Rng`.

use std::hash::{Hash, Hasher};

/// Mix a base seed with a per-thread value into a 32-byte `ChaCha8Rng` seed.
/// The same `(base, input)` pair always produces the same output, which is
/// what `P7` (seed reproducibility) relies on for single-threaded runs.
#[inline]
pub fn derive_seed(base: u64, input: u64) -> [u8; 32] {
    let combined = base.wrapping_add(input).wrapping_mul(0x517cc1b727220a95);
    let mut seed_bytes = [0u8; 32];
    for (i, byte) in seed_bytes.iter_mut().enumerate() {
        *byte = (combined.wrapping_shr((i * 8) as u32) & 0xFF) as u8;
    }
    seed_bytes
}

/// A stable-enough per-thread integer to mix into RNG seeding. `ThreadId`
/// doesn't expose its internal integer on stable Rust, so it's hashed
/// instead; uniqueness across live threads is all that's required here.
pub fn thread_id_u64() -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_seed_deterministic() {
        assert_eq!(derive_seed(42, 100), derive_seed(42, 100));
    }

    #[test]
    fn test_derive_seed_differs_across_inputs() {
        assert_ne!(derive_seed(42, 1), derive_seed(42, 2));
        assert_ne!(derive_seed(1, 100), derive_seed(2, 100));
    }

    #[test]
    fn test_thread_id_u64_is_stable_within_a_thread() {
        assert_eq!(thread_id_u64(), thread_id_u64());
    }

    #[test]
    fn test_thread_id_u64_differs_across_threads() {
        let a = thread_id_u64();
        let b = std::thread::spawn(thread_id_u64).join().unwrap();
        assert_ne!(a, b);
    }
}

// <FILE>src/rng/fnc_seed_mix.rs</FILE> - <DESC>Deterministic seed derivation mixing a base seed with a thread id</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
