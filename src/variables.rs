//! Linguistic variables and fuzzification.
//!
//! Four fixed variables cover the system: three sensor inputs (temperature,
//! soil moisture, light intensity) and one output (watering speed). Each
//! variable is a canonical ordered list of labeled trapezoids over its
//! universe of discourse. The label order is part of the external contract:
//! display tables and plots consume membership vectors positionally, so it
//! never changes at runtime.
//!
//! Labels are addressed two ways: positionally through the per-variable
//! label enums (rule evaluation), and by name through the variable's index
//! map (presentation-layer lookups). A test pins the two views to agree.

use crate::membership::Trapezoid;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Temperature labels, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureLabel {
    VeryCold,
    Cold,
    Warm,
    Hot,
}

impl TemperatureLabel {
    pub const ALL: [Self; 4] = [Self::VeryCold, Self::Cold, Self::Warm, Self::Hot];

    pub fn name(self) -> &'static str {
        match self {
            Self::VeryCold => "Very Cold",
            Self::Cold => "Cold",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Soil-moisture labels, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoistureLabel {
    VeryDry,
    Dry,
    Moist,
    VeryMoist,
}

impl MoistureLabel {
    pub const ALL: [Self; 4] = [Self::VeryDry, Self::Dry, Self::Moist, Self::VeryMoist];

    pub fn name(self) -> &'static str {
        match self {
            Self::VeryDry => "Very Dry",
            Self::Dry => "Dry",
            Self::Moist => "Moist",
            Self::VeryMoist => "Very Moist",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Light-intensity labels, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightLabel {
    Weak,
    Medium,
    Strong,
}

impl LightLabel {
    pub const ALL: [Self; 3] = [Self::Weak, Self::Medium, Self::Strong];

    pub fn name(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Watering-speed labels, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedLabel {
    VerySlow,
    Slow,
    Fast,
    VeryFast,
}

impl SpeedLabel {
    pub const ALL: [Self; 4] = [Self::VerySlow, Self::Slow, Self::Fast, Self::VeryFast];

    pub fn name(self) -> &'static str {
        match self {
            Self::VerySlow => "Very Slow",
            Self::Slow => "Slow",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Sampling grid for a variable's universe of discourse: inclusive
/// endpoints at a fixed step (0.01 for every variable in this system).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Universe {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Universe {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Number of sample points, endpoints inclusive.
    pub fn point_count(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    pub fn point(&self, i: usize) -> f64 {
        self.min + i as f64 * self.step
    }

    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.point_count()).map(|i| self.point(i))
    }
}

/// Ordered membership degrees for one variable: one entry per label, in the
/// variable's canonical label order. Recomputed fresh on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipVector {
    degrees: SmallVec<[f64; 4]>,
}

impl MembershipVector {
    pub(crate) fn from_degrees(degrees: SmallVec<[f64; 4]>) -> Self {
        Self { degrees }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.degrees
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Degree at a canonical label index. Panics if the index is out of
    /// range for the vector's variable; the label enums guarantee in-range
    /// indices.
    pub fn degree(&self, index: usize) -> f64 {
        self.degrees[index]
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.degrees.get(index).copied()
    }

    /// True iff any label holds a strictly positive degree.
    pub fn any_active(&self) -> bool {
        self.degrees.iter().any(|&d| d > 0.0)
    }
}

/// A named linguistic variable: canonical ordered labels with their
/// trapezoids, plus a by-name index for presentation-layer lookups.
#[derive(Debug, Clone)]
pub struct LinguisticVariable {
    name: &'static str,
    unit: &'static str,
    universe: Universe,
    labels: Vec<(&'static str, Trapezoid)>,
    index: FxHashMap<&'static str, usize>,
}

impl LinguisticVariable {
    fn new(
        name: &'static str,
        unit: &'static str,
        universe: Universe,
        labels: &[(&'static str, Trapezoid)],
    ) -> Self {
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, (label, _))| (*label, i))
            .collect();
        Self {
            name,
            unit,
            universe,
            labels: labels.to_vec(),
            index,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn unit(&self) -> &'static str {
        self.unit
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    /// Labeled trapezoids in canonical order.
    pub fn labels(&self) -> &[(&'static str, Trapezoid)] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn label_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.labels.iter().map(|(label, _)| *label)
    }

    /// Canonical index of a label name.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Evaluate `x` against every label's trapezoid, in canonical order.
    /// `x` is unconstrained; values outside the universe fuzzify to zero
    /// membership at the boundary labels.
    pub fn fuzzify(&self, x: f64) -> MembershipVector {
        MembershipVector::from_degrees(
            self.labels.iter().map(|(_, t)| t.degree(x)).collect(),
        )
    }

    /// Membership curves sampled over the universe grid, as plain numeric
    /// arrays for a plotting collaborator: the sample points plus one curve
    /// per label in canonical order.
    pub fn sample_curves(&self) -> MembershipCurves {
        let xs: Vec<f64> = self.universe.points().collect();
        let curves = self
            .labels
            .iter()
            .map(|(label, t)| (*label, xs.iter().map(|&x| t.degree(x)).collect()))
            .collect();
        MembershipCurves { xs, curves }
    }
}

/// Sampled membership curves for one variable.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipCurves {
    /// Universe sample points.
    pub xs: Vec<f64>,
    /// One `(label, degrees)` pair per label, aligned with `xs`.
    pub curves: Vec<(&'static str, Vec<f64>)>,
}

/// The four fixed variable definitions. Built once at startup and shared
/// read-only by every evaluation; nothing is mutated after construction.
#[derive(Debug, Clone)]
pub struct VariableSet {
    pub temperature: LinguisticVariable,
    pub soil_moisture: LinguisticVariable,
    pub light_intensity: LinguisticVariable,
    pub watering_speed: LinguisticVariable,
}

impl VariableSet {
    pub fn new() -> Self {
        let temperature = LinguisticVariable::new(
            "Temperature",
            "°C",
            Universe::new(-20.0, 50.0, 0.01),
            &[
                (TemperatureLabel::VeryCold.name(), Trapezoid::new(-20.0, -20.0, 5.0, 10.0)),
                (TemperatureLabel::Cold.name(), Trapezoid::new(5.0, 10.0, 15.0, 20.0)),
                (TemperatureLabel::Warm.name(), Trapezoid::new(15.0, 20.0, 25.0, 30.0)),
                (TemperatureLabel::Hot.name(), Trapezoid::new(25.0, 30.0, 51.0, 51.0)),
            ],
        );
        let soil_moisture = LinguisticVariable::new(
            "Soil Moisture",
            "%",
            Universe::new(0.0, 100.0, 0.01),
            &[
                (MoistureLabel::VeryDry.name(), Trapezoid::new(0.0, 0.0, 25.0, 35.0)),
                (MoistureLabel::Dry.name(), Trapezoid::new(25.0, 35.0, 45.0, 55.0)),
                (MoistureLabel::Moist.name(), Trapezoid::new(45.0, 55.0, 65.0, 75.0)),
                (MoistureLabel::VeryMoist.name(), Trapezoid::new(65.0, 75.0, 101.0, 101.0)),
            ],
        );
        let light_intensity = LinguisticVariable::new(
            "Light Intensity",
            "µmol/m²/s",
            Universe::new(0.0, 1000.0, 0.01),
            &[
                (LightLabel::Weak.name(), Trapezoid::new(0.0, 0.0, 300.0, 400.0)),
                (LightLabel::Medium.name(), Trapezoid::new(300.0, 400.0, 700.0, 800.0)),
                (LightLabel::Strong.name(), Trapezoid::new(700.0, 800.0, 1001.0, 1001.0)),
            ],
        );
        let watering_speed = LinguisticVariable::new(
            "Watering Speed",
            "liters/minute",
            Universe::new(0.0, 12.0, 0.01),
            &[
                (SpeedLabel::VerySlow.name(), Trapezoid::new(0.0, 0.0, 2.0, 3.0)),
                (SpeedLabel::Slow.name(), Trapezoid::new(2.0, 3.0, 5.0, 6.0)),
                (SpeedLabel::Fast.name(), Trapezoid::new(5.0, 6.0, 8.0, 9.0)),
                (SpeedLabel::VeryFast.name(), Trapezoid::new(8.0, 9.0, 12.0, 12.0)),
            ],
        );
        Self {
            temperature,
            soil_moisture,
            light_intensity,
            watering_speed,
        }
    }
}

impl Default for VariableSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vector_length_matches_label_count() {
        let vars = VariableSet::new();
        assert_eq!(vars.temperature.fuzzify(0.0).len(), 4);
        assert_eq!(vars.soil_moisture.fuzzify(0.0).len(), 4);
        assert_eq!(vars.light_intensity.fuzzify(0.0).len(), 3);
        assert_eq!(vars.watering_speed.fuzzify(0.0).len(), 4);
    }

    #[test]
    fn enum_indices_agree_with_canonical_order() {
        let vars = VariableSet::new();
        for label in TemperatureLabel::ALL {
            assert_eq!(vars.temperature.index_of(label.name()), Some(label.index()));
        }
        for label in MoistureLabel::ALL {
            assert_eq!(vars.soil_moisture.index_of(label.name()), Some(label.index()));
        }
        for label in LightLabel::ALL {
            assert_eq!(vars.light_intensity.index_of(label.name()), Some(label.index()));
        }
        for label in SpeedLabel::ALL {
            assert_eq!(vars.watering_speed.index_of(label.name()), Some(label.index()));
        }
        assert_eq!(vars.temperature.index_of("No Such Label"), None);
    }

    #[test]
    fn fuzzify_is_stable_across_calls() {
        let vars = VariableSet::new();
        let first = vars.temperature.fuzzify(17.3);
        let second = vars.temperature.fuzzify(17.3);
        assert_eq!(first, second);
    }

    #[test]
    fn warm_day_is_fully_warm() {
        let vars = VariableSet::new();
        let mv = vars.temperature.fuzzify(20.0);
        assert_eq!(mv.as_slice(), &[0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn breakpoint_input_splits_deterministically() {
        // 25 °C sits on the Warm plateau edge and the Hot ramp foot.
        let vars = VariableSet::new();
        let mv = vars.temperature.fuzzify(25.0);
        assert_relative_eq!(mv.degree(TemperatureLabel::Warm.index()), 1.0);
        assert_relative_eq!(mv.degree(TemperatureLabel::Hot.index()), 0.0);
        for &d in mv.as_slice() {
            assert!(d.is_finite());
        }
    }

    #[test]
    fn midrange_moisture_splits_dry_and_moist() {
        let vars = VariableSet::new();
        let mv = vars.soil_moisture.fuzzify(50.0);
        assert_relative_eq!(mv.degree(MoistureLabel::VeryDry.index()), 0.0);
        assert_relative_eq!(mv.degree(MoistureLabel::Dry.index()), 0.5);
        assert_relative_eq!(mv.degree(MoistureLabel::Moist.index()), 0.5);
        assert_relative_eq!(mv.degree(MoistureLabel::VeryMoist.index()), 0.0);
    }

    #[test]
    fn midrange_light_is_fully_medium() {
        let vars = VariableSet::new();
        let mv = vars.light_intensity.fuzzify(500.0);
        assert_eq!(mv.as_slice(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn out_of_domain_input_degrades_to_zero_membership() {
        let vars = VariableSet::new();
        let mv = vars.temperature.fuzzify(120.0);
        assert!(!mv.any_active());
        for &d in mv.as_slice() {
            assert!(d.is_finite());
        }
    }

    #[test]
    fn universe_grid_matches_reference_resolution() {
        let vars = VariableSet::new();
        let universe = vars.watering_speed.universe();
        assert_eq!(universe.point_count(), 1201);
        assert_relative_eq!(universe.point(0), 0.0);
        assert_relative_eq!(universe.point(1200), 12.0);
    }

    #[test]
    fn sampled_curves_cover_every_label() {
        let vars = VariableSet::new();
        let curves = vars.light_intensity.sample_curves();
        assert_eq!(curves.xs.len(), vars.light_intensity.universe().point_count());
        assert_eq!(curves.curves.len(), vars.light_intensity.label_count());
        for (label, degrees) in &curves.curves {
            assert_eq!(degrees.len(), curves.xs.len(), "curve length for {label}");
            assert!(degrees.iter().all(|d| (0.0..=1.0).contains(d)));
        }
    }
}
