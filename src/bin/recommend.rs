//! Print a watering recommendation for one set of sensor readings.
//!
//! Usage: recommend <temperature °C> <soil moisture %> <light µmol/m²/s> [--json]
//!
//! Prints the same report the reference front end shows: per-variable
//! fuzzification tables, the inference outcome (including the "should not
//! water" branch), and the defuzzified recommendation with its volumetric
//! equivalent. `--json` emits the whole evaluation as JSON instead.

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;
use watering_engine::{CrispInputs, LinguisticVariable, WateringEngine};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut json = false;
    let mut values = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            values.push(
                arg.parse::<f64>()
                    .with_context(|| format!("not a number: {arg}"))?,
            );
        }
    }
    if values.len() != 3 {
        bail!("usage: recommend <temperature> <soil_moisture> <light_intensity> [--json]");
    }
    let inputs = CrispInputs {
        temperature: values[0],
        soil_moisture: values[1],
        light_intensity: values[2],
    };

    let engine = WateringEngine::new();
    let evaluation = engine.evaluate(inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    let vars = engine.variables();
    println!("Fuzzification");
    print_degrees(&vars.temperature, evaluation.fuzzified.temperature.as_slice());
    print_degrees(&vars.soil_moisture, evaluation.fuzzified.soil_moisture.as_slice());
    print_degrees(&vars.light_intensity, evaluation.fuzzified.light_intensity.as_slice());

    println!("\nFuzzy inference");
    if !evaluation.inference.fired {
        println!("  No rule fired: should not water the plants in this condition.");
        return Ok(());
    }
    print_degrees(&vars.watering_speed, evaluation.inference.watering_speed.as_slice());

    // fired == true, so evaluate produced a recommendation
    if let Some(r) = evaluation.recommendation {
        println!("\nDefuzzification");
        println!("  Top plateau: {:.2} .. {:.2} liters/minute", r.max1, r.max2);
        println!(
            "  ({:.2} + {:.2}) / 2 = {:.2} liters/minute ~ {:.10} m3/s",
            r.max1, r.max2, r.crisp, r.volumetric
        );
    }
    Ok(())
}

fn print_degrees(variable: &LinguisticVariable, degrees: &[f64]) {
    println!("  {} ({}):", variable.name(), variable.unit());
    for (name, degree) in variable.label_names().zip(degrees) {
        println!("    {name:<12} {degree:.4}");
    }
}
