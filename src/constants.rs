//! Centralized constants for phenome.
//!
//! All tunable parameters are defined here with the `PHENOME_` prefix. Values that vary per
//! node (bias, recurrent default) live on [Node](crate::genome::Node) instead.

// ============================================================================
// Evaluation Parameters
// ============================================================================

/// Value a recurrent link reads before the first evaluation, unless the node configures its own
pub const PHENOME_DEFAULT_RECURRENT_VALUE: f64 = 0.0;

/// Slope of [Activation::SteepSigmoid](crate::Activation::SteepSigmoid), as used by NEAT
pub const PHENOME_STEEP_SIGMOID_SLOPE: f64 = 4.9;

// ============================================================================
// Rendering Parameters
// ============================================================================

/// Default width, in inches, of a rendered plan
pub const PHENOME_DOT_WIDTH: f64 = 8.0;

/// Default height, in inches, of a rendered plan
pub const PHENOME_DOT_HEIGHT: f64 = 5.0;

// ============================================================================
// Random Genome Parameters
// ============================================================================

/// Standard deviation of weights given to random edges
pub const PHENOME_RANDOM_WEIGHT_STD: f64 = 1.0;

/// Random weights are clamped to [-limit, limit]
pub const PHENOME_RANDOM_WEIGHT_LIMIT: f64 = 3.0;
