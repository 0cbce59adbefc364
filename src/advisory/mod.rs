//! Structured farming recommendations derived from the latest snapshot.
//!
//! Each advisor is a function of the snapshot alone and carries a fixed
//! confidence value. Only the fertilizer advisor draws random numbers, from
//! the RNG the caller passes in.

use rand::Rng;
use serde::Serialize;

use crate::SensorSnapshot;

pub mod farm_score;
pub mod fertilizer;
pub mod insights;
pub mod irrigation;
pub mod pest;
pub mod weather;

pub use farm_score::FarmScore;
pub use fertilizer::FertilizerAdvice;
pub use insights::Insight;
pub use irrigation::IrrigationAdvice;
pub use pest::PestAdvice;
pub use weather::WeatherAdvice;

// ---

/// JSON body of `GET /api/agriculture/recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    // ---
    pub irrigation: IrrigationAdvice,
    pub fertilizer: FertilizerAdvice,
    pub pest: PestAdvice,
    pub weather: WeatherAdvice,
    pub ai_insights: Vec<Insight>,
}

pub fn recommend<R: Rng + ?Sized>(s: &SensorSnapshot, rng: &mut R) -> Recommendations {
    // ---
    Recommendations {
        irrigation: irrigation::advise(s),
        fertilizer: fertilizer::advise(s, rng),
        pest: pest::advise(s),
        weather: weather::advise(s),
        ai_insights: insights::generate(s),
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_confidences_are_fixed_per_advisor() {
        // ---
        let mut rng = StdRng::seed_from_u64(1);
        for moisture in [10.0, 50.0, 90.0] {
            let s = SensorSnapshot {
                soil_moisture: moisture,
                ..SensorSnapshot::default()
            };
            let r = recommend(&s, &mut rng);
            assert_eq!(r.irrigation.ai_confidence, 92);
            assert_eq!(r.fertilizer.ai_confidence, 88);
            assert_eq!(r.pest.ai_confidence, 85);
            assert_eq!(r.weather.ai_confidence, 78);
            assert!(!r.ai_insights.is_empty());
        }
    }

    #[test]
    fn test_wire_shape() {
        // ---
        let r = recommend(&SensorSnapshot::default(), &mut StdRng::seed_from_u64(9));
        let json = serde_json::to_value(&r).unwrap();

        for key in ["irrigation", "fertilizer", "pest", "weather", "ai_insights"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert!(json["fertilizer"]["nutrients"]["potassium"].is_f64());
        assert!(json["irrigation"]["water_amount"].as_str().unwrap().ends_with(" L/m²"));
    }
}
