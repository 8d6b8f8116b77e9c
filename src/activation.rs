//! Activation functions a node may apply to its weighted sum.
//!
//! Every function is total over f64, so evaluation can never fail on a domain error. Dispatch
//! goes through a table indexed by the enum discriminant, keeping the hot loop free of matches.

use crate::constants::PHENOME_STEEP_SIGMOID_SLOPE;
use core::{f64::consts::E, fmt};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    #[default]
    Linear,
    Relu,
    Sigmoid,
    SteepSigmoid,
    Tanh,
    Sin,
    Cos,
    Binary,
    Relum,
    Reln,
    Sawtooth,
    Abs,
}

const TABLE: [fn(f64) -> f64; Activation::ALL.len()] = [
    linear,
    relu,
    sigmoid,
    steep_sigmoid,
    f64::tanh,
    f64::sin,
    f64::cos,
    binary,
    relum,
    reln,
    sawtooth,
    f64::abs,
];

impl Activation {
    /// Every activation, in discriminant order
    pub const ALL: [Activation; 12] = [
        Self::Linear,
        Self::Relu,
        Self::Sigmoid,
        Self::SteepSigmoid,
        Self::Tanh,
        Self::Sin,
        Self::Cos,
        Self::Binary,
        Self::Relum,
        Self::Reln,
        Self::Sawtooth,
        Self::Abs,
    ];

    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        TABLE[self as usize](x)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Relu => "relu",
            Self::Sigmoid => "sigmoid",
            Self::SteepSigmoid => "steep_sigmoid",
            Self::Tanh => "tanh",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Binary => "binary",
            Self::Relum => "relum",
            Self::Reln => "reln",
            Self::Sawtooth => "sawtooth",
            Self::Abs => "abs",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn linear(x: f64) -> f64 {
    x
}

pub fn relu(x: f64) -> f64 {
    if x < 0. {
        0.
    } else {
        x
    }
}

pub fn sigmoid(x: f64) -> f64 {
    1. / (1. + (-x).exp())
}

pub fn steep_sigmoid(x: f64) -> f64 {
    1. / (1. + E.powf(-PHENOME_STEEP_SIGMOID_SLOPE * x))
}

pub fn binary(x: f64) -> f64 {
    if x > 0. {
        1.
    } else {
        0.
    }
}

/// relu, capped at 1
pub fn relum(x: f64) -> f64 {
    x.clamp(0., 1.)
}

/// relu with a logarithmic tail
pub fn reln(x: f64) -> f64 {
    if x < 0. {
        0.
    } else {
        (x + 1.).ln()
    }
}

/// fractional part, always in [0, 1)
pub fn sawtooth(x: f64) -> f64 {
    x - x.floor()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_f64_approx;

    #[test]
    fn test_table_matches_discriminants() {
        for (i, a) in Activation::ALL.iter().enumerate() {
            assert_eq!(*a as usize, i, "{a} out of place");
        }
    }

    #[test]
    fn test_known_values() {
        assert_f64_approx!(Activation::Linear.apply(-2.5), -2.5);
        assert_f64_approx!(Activation::Relu.apply(-2.5), 0.);
        assert_f64_approx!(Activation::Relu.apply(2.5), 2.5);
        assert_f64_approx!(Activation::Sigmoid.apply(0.), 0.5);
        assert_f64_approx!(Activation::SteepSigmoid.apply(0.), 0.5);
        assert_f64_approx!(Activation::Tanh.apply(0.), 0.);
        assert_f64_approx!(Activation::Cos.apply(0.), 1.);
        assert_f64_approx!(Activation::Sin.apply(0.), 0.);
        assert_f64_approx!(Activation::Binary.apply(0.), 0.);
        assert_f64_approx!(Activation::Binary.apply(0.1), 1.);
        assert_f64_approx!(Activation::Relum.apply(3.), 1.);
        assert_f64_approx!(Activation::Relum.apply(0.25), 0.25);
        assert_f64_approx!(Activation::Reln.apply(-1.), 0.);
        assert_f64_approx!(Activation::Reln.apply(1.), 2f64.ln());
        assert_f64_approx!(Activation::Abs.apply(-4.), 4.);
    }

    #[test]
    fn test_sigmoid_natural_exp() {
        for x in [-3., -0.5, 0.2, 1., 7.] {
            assert_eq!(sigmoid(x), 1. / (1. + f64::exp(-x)));
        }
    }

    #[test]
    fn test_sawtooth() {
        assert_f64_approx!(sawtooth(1.25), 0.25);
        assert_f64_approx!(sawtooth(-0.25), 0.75);
        assert_f64_approx!(sawtooth(3.), 0.);
    }

    #[test]
    fn test_total() {
        for a in Activation::ALL {
            for x in [f64::MIN, -1e300, -1., 0., 1., 1e300, f64::MAX] {
                assert!(!a.apply(x).is_nan(), "{a}({x}) is NaN");
            }
        }
    }

    #[test]
    fn test_serde_names() {
        for a in Activation::ALL {
            let s = serde_json::to_string(&a).unwrap();
            assert_eq!(s, format!("\"{}\"", a.name()));
            assert_eq!(serde_json::from_str::<Activation>(&s).unwrap(), a);
        }
        assert!(serde_json::from_str::<Activation>("\"softmax\"").is_err());
    }
}
