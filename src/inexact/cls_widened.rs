// <FILE>src/inexact/cls_widened.rs</FILE> - <DESC>Widened trait unifying binary64 and Extended perturbation</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

//! [`Widened`]: the common surface `inexact` needs from a working-precision
//! operand, implemented once for `f64` (binary32's working type) and once
//! for [`Extended`] (binary64's working type).

use crate::bits::{self, FloatBits, FpClass};
use crate::noise;
use crate::wide::Extended;

pub trait Widened: Copy {
    fn classify(self) -> FpClass;
    fn get_exp(self) -> i32;
    fn representable(self, t: u32) -> bool;
    fn add_noise_rel(self, t: u32, seed: u64, choose_seed: bool) -> Self;
    fn add_noise_abs(self, abs_err_exp: i32, seed: u64, choose_seed: bool) -> Self;
}

impl Widened for f64 {
    fn classify(self) -> FpClass {
        FloatBits::classify(self)
    }

    fn get_exp(self) -> i32 {
        bits::get_exp(self)
    }

    fn representable(self, t: u32) -> bool {
        bits::representable(self, t)
    }

    fn add_noise_rel(self, t: u32, seed: u64, choose_seed: bool) -> f64 {
        let e_a = bits::get_exp(self);
        self + noise::noise_f64(e_a - (t as i32 - 1), seed, choose_seed)
    }

    fn add_noise_abs(self, abs_err_exp: i32, seed: u64, choose_seed: bool) -> f64 {
        self + noise::noise_f64(abs_err_exp, seed, choose_seed)
    }
}

impl Widened for Extended {
    fn classify(self) -> FpClass {
        Extended::classify(self)
    }

    fn get_exp(self) -> i32 {
        Extended::get_exp(self)
    }

    fn representable(self, t: u32) -> bool {
        Extended::representable(self, t)
    }

    fn add_noise_rel(self, t: u32, seed: u64, choose_seed: bool) -> Extended {
        let e_a = Extended::get_exp(self);
        self + noise::noise_ext(e_a - (t as i32 - 1), seed, choose_seed)
    }

    fn add_noise_abs(self, abs_err_exp: i32, seed: u64, choose_seed: bool) -> Extended {
        self + noise::noise_ext(abs_err_exp, seed, choose_seed)
    }
}

// <FILE>src/inexact/cls_widened.rs</FILE> - <DESC>Widened trait unifying binary64 and Extended perturbation</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
