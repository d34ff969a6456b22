//! Mamdani inference and defuzzification.
//!
//! One evaluation cycle runs fuzzify ×3 → infer → defuzzify to completion,
//! synchronously and without shared mutable state. The engine owns the fixed
//! variable and rule definitions; everything after construction is read-only,
//! so one engine can serve unlimited concurrent evaluations (the batch entry
//! point does exactly that with Rayon).

use crate::rules::{Rule, RULE_BASE};
use crate::variables::{MembershipVector, SpeedLabel, VariableSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use thiserror::Error;
use tracing::debug;

/// Liters/minute per cubic meter/second (1 m³/s = 1000 L / (1/60) min).
/// The only unit-conversion constant in the system.
pub const LPM_PER_M3S: f64 = 60_000.0;

/// Samples within this distance of the global maximum count as part of the
/// top plateau. The universe grid is built by multiplying the step, so ramp
/// samples can miss the plateau level by float rounding.
const PLATEAU_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Defuzzification was invoked on an output set no rule activated.
    /// Callers must branch on `InferenceOutcome::fired` first.
    #[error("no rule fired: the output fuzzy set is all-zero and has no maxima")]
    NoActivation,
}

/// The three crisp sensor readings of one evaluation cycle. Out-of-domain
/// values are accepted; they fuzzify to zero membership at the boundary
/// labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrispInputs {
    /// Temperature in °C (nominal domain -20 to 50).
    pub temperature: f64,
    /// Soil moisture in % (nominal domain 0 to 100).
    pub soil_moisture: f64,
    /// Light intensity in µmol/m²/s (nominal domain 0 to 1000).
    pub light_intensity: f64,
}

/// Membership vectors for the three inputs, in each variable's canonical
/// label order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzifiedInputs {
    pub temperature: MembershipVector,
    pub soil_moisture: MembershipVector,
    pub light_intensity: MembershipVector,
}

/// Aggregated inference outcome over the watering-speed labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceOutcome {
    /// True iff at least one rule fired with strength > 0. When false the
    /// system recommends not watering and the output set has no maxima to
    /// defuzzify.
    pub fired: bool,
    /// Aggregate degree per watering-speed label (max over contributing
    /// rules; 0 where no rule fired).
    pub watering_speed: MembershipVector,
}

/// Crisp recommendation derived from the aggregated output set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    /// First point of the combined function's top plateau (liters/minute).
    pub max1: f64,
    /// Last point of the top plateau (liters/minute).
    pub max2: f64,
    /// Two-point-average centroid `(max1 + max2) / 2` (liters/minute).
    pub crisp: f64,
    /// `crisp` as a volumetric flow in cubic meters/second.
    pub volumetric: f64,
}

/// Everything one full evaluation cycle produces.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub inputs: CrispInputs,
    pub fuzzified: FuzzifiedInputs,
    pub inference: InferenceOutcome,
    /// Present iff `inference.fired`; absent means "do not water".
    pub recommendation: Option<Recommendation>,
}

/// The fuzzy watering engine. Construct once, share freely: evaluation never
/// mutates the definitions.
#[derive(Debug, Clone)]
pub struct WateringEngine {
    variables: VariableSet,
    rules: &'static [Rule],
}

impl WateringEngine {
    pub fn new() -> Self {
        Self {
            variables: VariableSet::new(),
            rules: &RULE_BASE,
        }
    }

    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    pub fn rules(&self) -> &[Rule] {
        self.rules
    }

    /// Fuzzify the three crisp readings against their variables.
    pub fn fuzzify(&self, inputs: CrispInputs) -> FuzzifiedInputs {
        FuzzifiedInputs {
            temperature: self.variables.temperature.fuzzify(inputs.temperature),
            soil_moisture: self.variables.soil_moisture.fuzzify(inputs.soil_moisture),
            light_intensity: self.variables.light_intensity.fuzzify(inputs.light_intensity),
        }
    }

    /// Evaluate the rule base against the fuzzified inputs: firing strength
    /// is the minimum of a rule's three antecedent degrees, and each output
    /// label aggregates the maximum strength over its rules. Both operations
    /// are commutative and associative, so the result does not depend on
    /// rule order.
    pub fn infer(&self, fuzzified: &FuzzifiedInputs) -> InferenceOutcome {
        aggregate(self.rules, fuzzified)
    }

    /// Collapse the aggregated output set to a crisp watering speed with the
    /// two-point-average centroid: clip each output trapezoid at its
    /// aggregate degree, union the clipped shapes pointwise by max over the
    /// sampled universe, and average the first and last points of the top
    /// plateau. This deliberately approximates the full area centroid; only
    /// the plateau endpoints matter.
    pub fn defuzzify(&self, outcome: &InferenceOutcome) -> Result<Recommendation, EngineError> {
        let aggregates = outcome.watering_speed.as_slice();
        if !outcome.watering_speed.any_active() {
            return Err(EngineError::NoActivation);
        }

        let speed = &self.variables.watering_speed;
        let universe = speed.universe();

        let mut peak = 0.0_f64;
        let mut combined = Vec::with_capacity(universe.point_count());
        for x in universe.points() {
            let mut value = 0.0_f64;
            for ((_, trapezoid), &height) in speed.labels().iter().zip(aggregates) {
                value = value.max(trapezoid.clipped_degree(x, height));
            }
            peak = peak.max(value);
            combined.push(value);
        }

        // peak > 0 here, so at least one sample lies on the plateau.
        let mut max1 = universe.min;
        let mut max2 = universe.min;
        let mut seen = false;
        for (i, &value) in combined.iter().enumerate() {
            if peak - value <= PLATEAU_TOLERANCE {
                let x = universe.point(i);
                if !seen {
                    max1 = x;
                    seen = true;
                }
                max2 = x;
            }
        }

        let crisp = (max1 + max2) / 2.0;
        debug!(max1, max2, crisp, "defuzzified watering speed");
        Ok(Recommendation {
            max1,
            max2,
            crisp,
            volumetric: crisp / LPM_PER_M3S,
        })
    }

    /// One full cycle: fuzzify ×3, infer, and defuzzify when anything fired.
    pub fn evaluate(&self, inputs: CrispInputs) -> Evaluation {
        let fuzzified = self.fuzzify(inputs);
        let inference = self.infer(&fuzzified);
        let recommendation = match self.defuzzify(&inference) {
            Ok(recommendation) => Some(recommendation),
            Err(EngineError::NoActivation) => None,
        };
        Evaluation {
            inputs,
            fuzzified,
            inference,
            recommendation,
        }
    }

    /// Evaluate many independent readings in parallel. Cycles share only the
    /// read-only definitions, so no locking is involved.
    pub fn evaluate_batch(&self, inputs: &[CrispInputs]) -> Vec<Evaluation> {
        inputs.par_iter().map(|&i| self.evaluate(i)).collect()
    }
}

impl Default for WateringEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn aggregate(rules: &[Rule], fuzzified: &FuzzifiedInputs) -> InferenceOutcome {
    let mut aggregates: SmallVec<[f64; 4]> = smallvec![0.0; SpeedLabel::ALL.len()];
    for rule in rules {
        let strength = fuzzified
            .temperature
            .degree(rule.temperature.index())
            .min(fuzzified.soil_moisture.degree(rule.soil_moisture.index()))
            .min(fuzzified.light_intensity.degree(rule.light_intensity.index()));
        let slot = &mut aggregates[rule.watering_speed.index()];
        if strength > *slot {
            *slot = strength;
        }
    }
    let fired = aggregates.iter().any(|&d| d > 0.0);
    debug!(fired, aggregates = ?aggregates.as_slice(), "rule base evaluated");
    InferenceOutcome {
        fired,
        watering_speed: MembershipVector::from_degrees(aggregates),
    }
}
