// <FILE>tests/properties.rs</FILE> - <DESC>Testable properties and end-to-end scenario coverage</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! The testable properties and end-to-end scenarios from the design: P1-P8
//! plus six representative end-to-end runs, all against the public API.

use mca_noise::prelude::*;
use proptest::prelude::*;

fn backend_with(mode: &str, error_mode: &str, seed: u64, sparsity: f64) -> Backend {
    let mut b = Backend::default();
    b.apply_option("mode", mode).unwrap();
    b.apply_option("error-mode", error_mode).unwrap();
    b.apply_option("seed", &seed.to_string()).unwrap();
    b.apply_option("sparsity", &sparsity.to_string()).unwrap();
    b
}

// P1: IEEE mode is pass-through, bit-identical to native arithmetic.
proptest! {
    #[test]
    fn test_p1_ieee_mode_is_exact(a in any::<f32>().prop_filter("finite", |x| x.is_finite()),
                             b in any::<f32>().prop_filter("finite", |x| x.is_finite())) {
        let backend = backend_with("ieee", "rel", 1, 1.0);
        let expected = a + b;
        let got = backend.add_f32(a, b);
        prop_assert!(got == expected || (got.is_nan() && expected.is_nan()));
    }
}

// P2: class is preserved across a perturbation (zero/inf/nan stay zero/inf/nan).
#[test]
fn test_p2_special_classes_survive_perturbation() {
    let backend = backend_with("mca", "rel", 1, 1.0);
    assert_eq!(backend.add_f64(0.0, 0.0), 0.0);
    assert!(backend.div_f64(1.0, 0.0).is_infinite());
    assert!(backend.div_f64(0.0, 0.0).is_nan());
}

// P3: RR mode leaves a representable exact result untouched across seeds.
#[test]
fn test_p3_rr_mode_is_exact_on_representable_results() {
    for seed in 0..50u64 {
        let backend = backend_with("rr", "rel", seed, 1.0);
        assert_eq!(backend.add_f32(1.0, 1.0), 2.0);
    }
}

// P4: perturbation magnitude is bounded by 2^(GET_EXP(r) - (t - 1)).
#[test]
fn test_p4_perturbation_magnitude_bound() {
    let backend = backend_with("rr", "rel", 1, 1.0);
    let t = backend.context().t32();
    let a = 1.0f32;
    let b = 1.0f32 + f32::from_bits(1); // nudge off an exact power of two's neighborhood
    let r = a + b;
    let bound = 2f64.powi(mca_noise::bits::get_exp(r) - (t as i32 - 1));
    for _ in 0..2000 {
        let observed = backend.add_f32(a, b);
        assert!(((observed - r) as f64).abs() < bound);
    }
}

// P5: abs error mode perturbs at a fixed exponent regardless of magnitude.
#[test]
fn test_p5_abs_mode_uses_fixed_exponent() {
    let mut backend = backend_with("mca", "abs", 1, 1.0);
    backend.apply_option("max-abs-error-exponent", "-20").unwrap();
    let r = backend.add_f64(1e10, 1e10);
    assert!((r - 2e10).abs() < 2f64.powi(-19));
}

// P6: sparsity frequency matches the configured rate.
#[test]
fn test_p6_sparsity_frequency() {
    let backend = backend_with("mca", "rel", 9, 0.25);
    let r = 1.0f64 / 3.0;
    let perturbed = (0..20_000)
        .filter(|_| backend.div_f64(1.0, 3.0) != r)
        .count();
    let expected = 0.25 * 20_000.0;
    let tolerance = 6.0 * (20_000.0 * 0.25 * 0.75f64).sqrt();
    assert!((perturbed as f64 - expected).abs() < tolerance);
}

// P7: identical seed, identical single-thread sequence => identical output.
#[test]
fn test_p7_seed_reproducibility() {
    fn run() -> Vec<f64> {
        let backend = backend_with("mca", "all", 1234, 1.0);
        (0..30).map(|_| backend.add_f64(1.0, 1.0 / 7.0)).collect()
    }
    let a = std::thread::spawn(run).join().unwrap();
    let b = std::thread::spawn(run).join().unwrap();
    assert_eq!(a, b);
}

// P8: DAZ/FTZ flush subnormal inputs/outputs to zero.
#[test]
fn test_p8_daz_ftz_flush_subnormals() {
    let mut backend = backend_with("ieee", "rel", 1, 1.0);
    backend.apply_option("daz", "").unwrap();
    backend.apply_option("ftz", "").unwrap();
    let subnormal = f32::from_bits(1);
    assert_eq!(backend.add_f32(subnormal, 0.0), 0.0);
    assert_eq!(backend.mul_f32(subnormal, 1.0), 0.0);
}

// End-to-end scenarios (seed=1, sparsity=1, mode=mca, errorMode=rel).

#[test]
fn test_e2e_1_mean_perturbation_on_a_representable_sum() {
    let backend = backend_with("mca", "rel", 1, 1.0);
    let n = 10_000;
    let total: f64 = (0..n).map(|_| (backend.add_f32(1.0, 1.0) - 2.0).abs() as f64).sum();
    assert!(total / n as f64 <= 2f64.powi(-24) * 2.0);
}

#[test]
fn test_e2e_2_division_remains_finite_and_close() {
    let backend = backend_with("mca", "rel", 1, 1.0);
    for _ in 0..1000 {
        let r = backend.div_f64(22.0, 7.0);
        assert!((r - 22.0 / 7.0).abs() < 1e-10);
    }
}

#[test]
fn test_e2e_3_ieee_mode_passthrough_for_large_magnitude() {
    let backend = backend_with("ieee", "rel", 1, 1.0);
    for _ in 0..100 {
        assert_eq!(backend.add_f32(1e20, 1.0), 1e20f32);
    }
}

#[test]
fn test_e2e_4_pb_mode_perturbs_inputs_of_a_multiplication() {
    let backend = backend_with("pb", "rel", 1, 1.0);
    let mut saw_change = false;
    for _ in 0..200 {
        if backend.mul_f64(2.0, 2.0) != 4.0 {
            saw_change = true;
            break;
        }
    }
    assert!(saw_change);
}

#[test]
fn test_e2e_5_rr_mode_only_perturbs_inexact_subtraction() {
    let backend = backend_with("rr", "rel", 1, 1.0);
    // 5.0 - 3.0 = 2.0 is exact.
    assert_eq!(backend.sub_f64(5.0, 3.0), 2.0);
    // 1.0 - 1.0/3.0 is not exactly representable.
    let mut saw_change = false;
    for _ in 0..200 {
        if backend.sub_f64(1.0, 1.0 / 3.0) != 1.0 - 1.0 / 3.0 {
            saw_change = true;
            break;
        }
    }
    assert!(saw_change);
}

#[test]
fn test_e2e_6_runtime_precision_change_takes_effect_immediately() {
    let backend = backend_with("mca", "rel", 1, 1.0);
    backend.user_call(UserCall::SetPrecisionBinary32(53));
    assert_eq!(backend.context().t32(), 53);
    // At full precision the noise floor on a simple exact sum is far
    // smaller than at the default t32=24.
    let mut total = 0.0f64;
    let n = 2000;
    for _ in 0..n {
        total += (backend.add_f32(1.0, 1.0) - 2.0).abs() as f64;
    }
    assert!(total / n as f64 <= 2f64.powi(-53) * 4.0);
}

// <FILE>tests/properties.rs</FILE> - <DESC>Testable properties and end-to-end scenario coverage</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
