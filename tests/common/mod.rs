#![allow(dead_code)]
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

/// Generation response body with consecutive half-hour intervals from `start`
pub fn generation_body(start: DateTime<Utc>, mixes: &[Vec<(&str, f64)>]) -> Value {
    let data: Vec<Value> = mixes
        .iter()
        .enumerate()
        .map(|(i, mix)| {
            let from = start + Duration::minutes(30 * i as i64);
            json!({
                "from": from.format("%Y-%m-%dT%H:%MZ").to_string(),
                "to": (from + Duration::minutes(30)).format("%Y-%m-%dT%H:%MZ").to_string(),
                "generationmix": mix
                    .iter()
                    .map(|(fuel, perc)| json!({ "fuel": fuel, "perc": perc }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    json!({ "data": data })
}

/// `count` intervals sharing one fixed mix
pub fn uniform(count: usize, mix: &[(&'static str, f64)]) -> Vec<Vec<(&'static str, f64)>> {
    vec![mix.to_vec(); count]
}

/// Clean share `clean` as wind, remainder as gas
pub fn wind_and_gas(clean: f64) -> Vec<(&'static str, f64)> {
    vec![("wind", clean), ("gas", 100.0 - clean)]
}
