//! Fertilizer advisor.
//!
//! There is no soil chemistry sensor, so nutrient levels are simulated from
//! temperature and humidity plus bounded jitter drawn from the caller's RNG.

use rand::Rng;
use serde::Serialize;

use crate::SensorSnapshot;

// ---

pub const CONFIDENCE: u8 = 88;

const DEFICIENT_BELOW: f64 = 60.0;
const DECLINING_BELOW: f64 = 70.0;
const JITTER: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FertilizerStatus {
    ActionNeeded,
    Warning,
    Optimal,
}

/// Simulated N/P/K levels on a 0-100 scale. Reported to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nutrients {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerAdvice {
    // ---
    pub status: FertilizerStatus,
    pub advice: String,
    pub npk_ratio: &'static str,
    pub timing: &'static str,
    pub nutrients: Nutrients,
    pub application_rate: &'static str,
    pub ai_confidence: u8,
}

fn jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(-JITTER..=JITTER)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

impl Nutrients {
    fn rounded(self) -> Self {
        Nutrients {
            nitrogen: round1(self.nitrogen),
            phosphorus: round1(self.phosphorus),
            potassium: round1(self.potassium),
        }
    }
}

pub fn estimate_nutrients<R: Rng + ?Sized>(temp: f64, humidity: f64, rng: &mut R) -> Nutrients {
    // ---
    let base_n = 70.0 + (temp - 25.0) * 2.0;
    let base_p = 65.0 + (humidity - 60.0) * 0.5;
    let base_k = 75.0 + jitter(rng);

    Nutrients {
        nitrogen: (base_n + jitter(rng)).clamp(0.0, 100.0),
        phosphorus: (base_p + jitter(rng)).clamp(0.0, 100.0),
        potassium: base_k.clamp(0.0, 100.0),
    }
}

/// Verdict for a given set of nutrient levels. Cut-offs apply to the
/// unrounded levels; only the reported copy is rounded.
pub fn judge(nutrients: Nutrients) -> FertilizerAdvice {
    // ---
    let named = [
        ("Nitrogen (N)", nutrients.nitrogen),
        ("Phosphorus (P)", nutrients.phosphorus),
        ("Potassium (K)", nutrients.potassium),
    ];
    let deficient: Vec<&str> = named
        .iter()
        .filter(|(_, v)| *v < DEFICIENT_BELOW)
        .map(|(name, _)| *name)
        .collect();

    let (status, advice, npk_ratio, timing) = if !deficient.is_empty() {
        (
            FertilizerStatus::ActionNeeded,
            format!(
                "🌿 DEFICIENCY DETECTED: Low levels of {}. Apply balanced NPK fertilizer immediately.",
                deficient.join(", ")
            ),
            "20-20-20",
            "Now",
        )
    } else if named.iter().any(|(_, v)| *v < DECLINING_BELOW) {
        (
            FertilizerStatus::Warning,
            "📊 MODERATE LEVELS: Nutrient levels declining. Schedule fertilizer application within 1 week."
                .to_string(),
            "10-10-10",
            "1 week",
        )
    } else {
        (
            FertilizerStatus::Optimal,
            "✅ BALANCED: All nutrients in optimal range. Maintain current fertilization schedule."
                .to_string(),
            "5-5-5",
            "2-3 weeks",
        )
    };

    FertilizerAdvice {
        status,
        advice,
        npk_ratio,
        timing,
        nutrients: nutrients.rounded(),
        application_rate: "50-100 kg/hectare",
        ai_confidence: CONFIDENCE,
    }
}

pub fn advise<R: Rng + ?Sized>(s: &SensorSnapshot, rng: &mut R) -> FertilizerAdvice {
    judge(estimate_nutrients(s.temperature, s.humidity, rng))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn npk(n: f64, p: f64, k: f64) -> Nutrients {
        Nutrients {
            nitrogen: n,
            phosphorus: p,
            potassium: k,
        }
    }

    #[test]
    fn test_deficiency_lists_every_low_nutrient() {
        // ---
        let advice = judge(npk(55.0, 80.0, 40.0));

        assert_eq!(advice.status, FertilizerStatus::ActionNeeded);
        assert_eq!(advice.npk_ratio, "20-20-20");
        assert_eq!(advice.timing, "Now");
        assert!(advice
            .advice
            .contains("Low levels of Nitrogen (N), Potassium (K)."));
    }

    #[test]
    fn test_warning_and_optimal_verdicts() {
        // ---
        let warning = judge(npk(65.0, 80.0, 80.0));
        assert_eq!(warning.status, FertilizerStatus::Warning);
        assert_eq!(warning.npk_ratio, "10-10-10");
        assert_eq!(warning.timing, "1 week");

        let optimal = judge(npk(70.0, 70.0, 70.0));
        assert_eq!(optimal.status, FertilizerStatus::Optimal);
        assert_eq!(optimal.npk_ratio, "5-5-5");
        assert_eq!(optimal.ai_confidence, 88);
    }

    #[test]
    fn test_cutoffs_use_unrounded_levels() {
        // ---
        let advice = judge(npk(59.96, 80.0, 80.0));
        assert_eq!(advice.status, FertilizerStatus::ActionNeeded);
        assert_eq!(advice.nutrients.nitrogen, 60.0);
        assert!(advice.advice.contains("Nitrogen (N)"));

        let advice = judge(npk(80.0, 69.96, 80.0));
        assert_eq!(advice.status, FertilizerStatus::Warning);
        assert_eq!(advice.nutrients.phosphorus, 70.0);
    }

    #[test]
    fn test_seeded_level_just_under_cutoff_is_deficient() {
        // ---
        let s = SensorSnapshot {
            temperature: 20.0,
            humidity: 80.0,
            ..SensorSnapshot::default()
        };
        let raw = estimate_nutrients(s.temperature, s.humidity, &mut StdRng::seed_from_u64(22));
        let advice = advise(&s, &mut StdRng::seed_from_u64(22));

        assert!((59.95..DEFICIENT_BELOW).contains(&raw.nitrogen), "{}", raw.nitrogen);
        assert_eq!(advice.nutrients.nitrogen, 60.0);
        assert_eq!(advice.status, FertilizerStatus::ActionNeeded);
    }

    #[test]
    fn test_levels_stay_bounded_and_rounded() {
        // ---
        let mut rng = StdRng::seed_from_u64(7);
        for (t, h) in [(60.0, 60.0), (-40.0, 0.0), (25.0, 200.0), (25.0, 60.0)] {
            let n = judge(estimate_nutrients(t, h, &mut rng)).nutrients;
            for v in [n.nitrogen, n.phosphorus, n.potassium] {
                assert!((0.0..=100.0).contains(&v), "{} out of range", v);
                assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_jitter_is_bounded_around_baseline() {
        // ---
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = estimate_nutrients(25.0, 60.0, &mut rng);
            assert!((65.0..=75.0).contains(&n.nitrogen));
            assert!((60.0..=70.0).contains(&n.phosphorus));
            assert!((70.0..=80.0).contains(&n.potassium));
        }
    }

    #[test]
    fn test_same_seed_same_advice() {
        // ---
        let s = SensorSnapshot::default();
        let a = advise(&s, &mut StdRng::seed_from_u64(3));
        let b = advise(&s, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
