//! # Speed, Distance, Time
//!
//! Any two of speed (km/h), distance (km) and time (h) give the third.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{require_positive, round_to, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedDistanceTimeInput {
    #[serde(default)]
    pub speed_kmh: Option<f64>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub time_hours: Option<f64>,
}

impl Validate for SpeedDistanceTimeInput {
    fn validate(&self) -> CalcResult<()> {
        let known = [
            ("speed_kmh", self.speed_kmh),
            ("distance_km", self.distance_km),
            ("time_hours", self.time_hours),
        ];
        let given = known.iter().filter(|(_, v)| v.is_some()).count();
        if given != 2 {
            return Err(CalcError::invalid_input(
                "values",
                given.to_string(),
                "Exactly two of speed, distance and time must be given",
            ));
        }
        for (field, value) in known {
            if let Some(v) = value {
                require_positive(field, v)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedDistanceTimeResult {
    pub speed_kmh: f64,
    pub distance_km: f64,
    pub time_hours: f64,
    /// `h:mm:ss`
    pub time_formatted: String,
    pub formula: String,
}

fn format_hours(hours: f64) -> String {
    let total_seconds = (hours * 3600.0).round() as u64;
    format!(
        "{}:{:02}:{:02}",
        total_seconds / 3600,
        total_seconds % 3600 / 60,
        total_seconds % 60
    )
}

pub fn calculate(input: &SpeedDistanceTimeInput) -> CalcResult<SpeedDistanceTimeResult> {
    input.validate()?;

    let (speed, distance, time, formula) = match (input.speed_kmh, input.distance_km, input.time_hours) {
        (Some(s), Some(d), None) => (s, d, d / s, "t = d / v"),
        (Some(s), None, Some(t)) => (s, s * t, t, "d = v × t"),
        (None, Some(d), Some(t)) => (d / t, d, t, "v = d / t"),
        _ => return Err(CalcError::internal("validated combination not handled")),
    };

    Ok(SpeedDistanceTimeResult {
        speed_kmh: round_to(speed, 3),
        distance_km: round_to(distance, 3),
        time_hours: round_to(time, 4),
        time_formatted: format_hours(time),
        formula: formula.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_time() {
        let input = SpeedDistanceTimeInput { speed_kmh: Some(80.0), distance_km: Some(200.0), time_hours: None };
        let result = calculate(&input).unwrap();
        assert_eq!(result.time_hours, 2.5);
        assert_eq!(result.time_formatted, "2:30:00");
    }

    #[test]
    fn test_solve_speed_and_distance() {
        let speed = SpeedDistanceTimeInput { speed_kmh: None, distance_km: Some(42.195), time_hours: Some(3.0) };
        assert_eq!(calculate(&speed).unwrap().speed_kmh, 14.065);
        let distance = SpeedDistanceTimeInput { speed_kmh: Some(60.0), distance_km: None, time_hours: Some(0.25) };
        assert_eq!(calculate(&distance).unwrap().distance_km, 15.0);
    }

    #[test]
    fn test_needs_exactly_two() {
        let input = SpeedDistanceTimeInput { speed_kmh: Some(60.0), distance_km: None, time_hours: None };
        assert!(calculate(&input).is_err());
    }
}
