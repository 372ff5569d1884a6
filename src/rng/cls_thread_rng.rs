// <FILE>src/rng/cls_thread_rng.rs</FILE> - <DESC>Thread-local lazily-seeded ChaCha8Rng and uniform draws</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! Per-thread uniform draws, lazily seeded on first use.
//!
//! Once a thread's generator is seeded it is owned exclusively by that
//! thread for the thread's lifetime — nothing here ever locks or shares
//! state across threads.

use std::cell::RefCell;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::fnc_seed_mix::{derive_seed, thread_id_u64};

thread_local! {
    static RNG: RefCell<Option<ChaCha8Rng>> = RefCell::new(None);
}

fn with_rng<R>(seed: u64, choose_seed: bool, f: impl FnOnce(&mut ChaCha8Rng) -> R) -> R {
    RNG.with(|cell| {
        let mut slot = cell.borrow_mut();
        let rng = slot.get_or_insert_with(|| {
            // Either path mixes in the thread id: a fixed seed still needs
            // to diverge per thread, and a high-entropy base benefits from
            // the extra diversification if the entropy source is weak.
            let base = if choose_seed {
                seed
            } else {
                rand::thread_rng().gen()
            };
            ChaCha8Rng::from_seed(derive_seed(base, thread_id_u64()))
        });
        f(rng)
    })
}

/// Draw from the open interval `(0, 1)` with full `f64` resolution.
pub fn uniform01(seed: u64, choose_seed: bool) -> f64 {
    with_rng(seed, choose_seed, |rng| {
        let x: f64 = rng.gen();
        if x == 0.0 {
            f64::from_bits(1)
        } else {
            x
        }
    })
}

/// Draw from the open interval `(-0.5, 0.5)`, the raw noise magnitude
/// before it's scaled by a power of two in [`crate::noise`].
pub fn bipolar_half(seed: u64, choose_seed: bool) -> f64 {
    uniform01(seed, choose_seed) - 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform01_stays_in_open_interval() {
        for _ in 0..10_000 {
            let x = uniform01(1, true);
            assert!(x > 0.0 && x < 1.0);
        }
    }

    #[test]
    fn test_sequence_is_a_pure_function_of_seed_and_thread_id() {
        // A fresh thread's draw sequence must match one built directly
        // from derive_seed(seed, that thread's id) — uniform01 doesn't do
        // anything beyond that mixing plus the generator itself.
        let (tid, drawn): (u64, Vec<f64>) = std::thread::spawn(|| {
            (thread_id_u64(), (0..8).map(|_| uniform01(7, true)).collect())
        })
        .join()
        .unwrap();

        let mut expected_rng = ChaCha8Rng::from_seed(derive_seed(7, tid));
        let expected: Vec<f64> = (0..8)
            .map(|_| {
                let x: f64 = expected_rng.gen();
                if x == 0.0 {
                    f64::from_bits(1)
                } else {
                    x
                }
            })
            .collect();

        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_bipolar_half_stays_in_range() {
        for _ in 0..10_000 {
            let x = bipolar_half(2, true);
            assert!(x > -0.5 && x < 0.5);
        }
    }
}

// <FILE>src/rng/cls_thread_rng.rs</FILE> - <DESC>Thread-local lazily-seeded ChaCha8Rng and uniform draws</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
