//! The fixed watering rule base.
//!
//! The 27 rules are data, not branching logic: a static ordered table of
//! antecedent/consequent label records evaluated uniformly by the engine.
//! Antecedent combinations absent from the table contribute zero firing
//! strength to every output label.

use crate::variables::{LightLabel, MoistureLabel, SpeedLabel, TemperatureLabel};

/// One inference rule: three antecedent labels combined by fuzzy AND
/// (minimum), one consequent watering-speed label, implicit weight 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub temperature: TemperatureLabel,
    pub soil_moisture: MoistureLabel,
    pub light_intensity: LightLabel,
    pub watering_speed: SpeedLabel,
}

const fn rule(
    temperature: TemperatureLabel,
    soil_moisture: MoistureLabel,
    light_intensity: LightLabel,
    watering_speed: SpeedLabel,
) -> Rule {
    Rule {
        temperature,
        soil_moisture,
        light_intensity,
        watering_speed,
    }
}

use LightLabel::{Medium, Strong, Weak};
use MoistureLabel::{Dry, Moist, VeryDry};
use SpeedLabel::{Fast, Slow, VeryFast, VerySlow};
use TemperatureLabel::{Cold, Hot, VeryCold, Warm};

/// The 27 domain rules. Never mutated at runtime. Very Moist soil appears in
/// no rule, so saturated soil alone never triggers watering; the only Very
/// Cold rule needs strong light.
pub const RULE_BASE: [Rule; 27] = [
    rule(VeryCold, VeryDry, Strong, VerySlow),
    rule(Cold, VeryDry, Weak, Fast),
    rule(Cold, VeryDry, Medium, Fast),
    rule(Cold, VeryDry, Strong, VeryFast),
    rule(Cold, Dry, Weak, Slow),
    rule(Cold, Dry, Medium, Slow),
    rule(Cold, Dry, Strong, Fast),
    rule(Cold, Moist, Medium, VerySlow),
    rule(Cold, Moist, Strong, Slow),
    rule(Warm, VeryDry, Weak, VeryFast),
    rule(Warm, VeryDry, Medium, VeryFast),
    rule(Warm, VeryDry, Strong, VeryFast),
    rule(Warm, Dry, Weak, Fast),
    rule(Warm, Dry, Medium, Fast),
    rule(Warm, Dry, Strong, VeryFast),
    rule(Warm, Moist, Weak, Slow),
    rule(Warm, Moist, Medium, Slow),
    rule(Warm, Moist, Strong, Fast),
    rule(Hot, VeryDry, Weak, VeryFast),
    rule(Hot, VeryDry, Medium, VeryFast),
    rule(Hot, VeryDry, Strong, VeryFast),
    rule(Hot, Dry, Weak, Fast),
    rule(Hot, Dry, Medium, Fast),
    rule(Hot, Dry, Strong, VeryFast),
    rule(Hot, Moist, Weak, Slow),
    rule(Hot, Moist, Medium, Fast),
    rule(Hot, Moist, Strong, Fast),
];
