//! Fuzzy plant-watering engine.
//!
//! Computes a recommended watering speed from three environmental readings
//! (temperature, soil moisture, light intensity PAR) with a Mamdani-style
//! pipeline: trapezoidal fuzzification, a fixed 27-rule min/max inference
//! step, and centroid-of-two-maxima defuzzification.
//!
//! - `membership`: trapezoidal membership functions
//! - `variables`: the four fixed linguistic variables and fuzzification
//! - `rules`: the declarative rule base
//! - `engine`: inference, defuzzification, and the full evaluation cycle

pub mod engine;
pub mod membership;
pub mod rules;
pub mod variables;

// Re-export commonly used types
pub use engine::{
    CrispInputs, EngineError, Evaluation, FuzzifiedInputs, InferenceOutcome, Recommendation,
    WateringEngine, LPM_PER_M3S,
};
pub use membership::Trapezoid;
pub use rules::{Rule, RULE_BASE};
pub use variables::{
    LightLabel, LinguisticVariable, MembershipCurves, MembershipVector, MoistureLabel, SpeedLabel,
    TemperatureLabel, Universe, VariableSet,
};
