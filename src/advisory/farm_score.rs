//! Farm health score for the dashboard gauge.
//!
//! Uses its own cut-offs, separate from the chatbot's crop-health score and
//! from the insight generator.

use serde::Serialize;

use crate::SensorSnapshot;

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Factors {
    pub air_quality: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub water_quality: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FarmScore {
    pub score: u8,
    pub factors: Factors,
}

pub fn score(s: &SensorSnapshot) -> FarmScore {
    // ---
    let air = s.air_quality;
    let t = s.temperature;
    let h = s.humidity;
    let tds = s.water_quality;

    let mut score: i32 = 100;

    if air > 200.0 {
        score -= 20;
    } else if air > 100.0 {
        score -= 10;
    }

    if t < 15.0 || t > 35.0 {
        score -= 15;
    } else if t < 20.0 || t > 30.0 {
        score -= 5;
    }

    if h < 40.0 || h > 80.0 {
        score -= 10;
    } else if h < 50.0 || h > 70.0 {
        score -= 5;
    }

    if tds > 500.0 {
        score -= 15;
    } else if tds > 300.0 {
        score -= 5;
    }

    let factors = Factors {
        air_quality: if air < 100.0 {
            "Good"
        } else if air < 200.0 {
            "Moderate"
        } else {
            "Poor"
        },
        temperature: if (20.0..=30.0).contains(&t) { "Optimal" } else { "Moderate" },
        humidity: if (50.0..=70.0).contains(&h) { "Good" } else { "Moderate" },
        water_quality: if tds < 300.0 {
            "Pure"
        } else if tds < 500.0 {
            "Good"
        } else {
            "Fair"
        },
    };

    FarmScore {
        score: score.clamp(0, 100) as u8,
        factors,
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn snapshot(air: f64, t: f64, h: f64, tds: f64) -> SensorSnapshot {
        SensorSnapshot {
            air_quality: air,
            temperature: t,
            humidity: h,
            water_quality: tds,
            ..SensorSnapshot::default()
        }
    }

    #[test]
    fn test_ideal_readings_score_full() {
        // ---
        let result = score(&snapshot(50.0, 25.0, 60.0, 150.0));

        assert_eq!(result.score, 100);
        assert_eq!(
            result.factors,
            Factors {
                air_quality: "Good",
                temperature: "Optimal",
                humidity: "Good",
                water_quality: "Pure",
            }
        );
    }

    #[test]
    fn test_worst_penalties_add_up() {
        // ---
        let result = score(&snapshot(250.0, 40.0, 90.0, 600.0));

        assert_eq!(result.score, 40);
        assert_eq!(result.factors.air_quality, "Poor");
        assert_eq!(result.factors.water_quality, "Fair");
    }

    #[test]
    fn test_moderate_penalties() {
        // ---
        let result = score(&snapshot(150.0, 32.0, 45.0, 400.0));

        assert_eq!(result.score, 75);
        assert_eq!(result.factors.air_quality, "Moderate");
        assert_eq!(result.factors.temperature, "Moderate");
        assert_eq!(result.factors.humidity, "Moderate");
        assert_eq!(result.factors.water_quality, "Good");
    }

    #[test]
    fn test_wire_shape() {
        // ---
        let json = serde_json::to_value(score(&SensorSnapshot::default())).unwrap();
        assert!(json["score"].is_u64());
        assert!(json["factors"]["humidity"].is_string());
    }
}
