// <FILE>src/noise/fnc_noise.rs</FILE> - <DESC>Scaled (-0.5, 0.5) noise draws at binary64 and Extended width</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

use crate::bits;
use crate::rng;
use crate::wide::Extended;

/// Noise at binary64 width: used when the working precision for a binary32
/// operation is binary64.
pub fn noise_f64(e: i32, seed: u64, choose_seed: bool) -> f64 {
    bits::add_exp(rng::bipolar_half(seed, choose_seed), e)
}

/// Noise at the binary128-surrogate width: used when the working precision
/// for a binary64 operation is [`Extended`].
pub fn noise_ext(e: i32, seed: u64, choose_seed: bool) -> Extended {
    Extended::from_scaled(rng::bipolar_half(seed, choose_seed), e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_f64_magnitude_bounded_by_exponent() {
        for _ in 0..1000 {
            let n = noise_f64(0, 1, true);
            assert!(n.abs() < 1.0);
        }
    }

    #[test]
    fn test_noise_f64_at_negative_exponent_is_proportionally_smaller() {
        for _ in 0..1000 {
            let n = noise_f64(-10, 1, true);
            assert!(n.abs() < 2f64.powi(-10));
        }
    }

    #[test]
    fn test_noise_ext_widens_without_losing_the_low_limb() {
        let n = noise_ext(-100, 2, true);
        assert!(n.to_f64().abs() < 2f64.powi(-99));
    }
}

// <FILE>src/noise/fnc_noise.rs</FILE> - <DESC>Scaled (-0.5, 0.5) noise draws at binary64 and Extended width</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
