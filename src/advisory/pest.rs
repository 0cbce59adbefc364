//! Pest-risk advisor. Warm, humid air and poor air quality raise the score.

use serde::Serialize;

use crate::SensorSnapshot;

// ---

pub const CONFIDENCE: u8 = 85;

const HIGH_RISK_FROM: u32 = 60;
const MEDIUM_RISK_FROM: u32 = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PestStatus {
    HighRisk,
    MediumRisk,
    LowRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PestRisk {
    pub name: &'static str,
    pub level: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PestAdvice {
    // ---
    pub status: PestStatus,
    pub advice: &'static str,
    pub action: &'static str,
    pub risk_score: u32,
    pub risks: &'static [PestRisk],
    pub inspection_frequency: &'static str,
    pub ai_confidence: u8,
}

const fn risk(name: &'static str, level: &'static str, action: &'static str) -> PestRisk {
    PestRisk { name, level, action }
}

const HIGH_RISKS: [PestRisk; 3] = [
    risk("Aphids", "High", "Spray neem oil solution"),
    risk("Whiteflies", "High", "Use yellow sticky traps"),
    risk("Caterpillars", "Medium", "Manual removal + Bt spray"),
];

const MEDIUM_RISKS: [PestRisk; 3] = [
    risk("Aphids", "Medium", "Monitor closely"),
    risk("Grasshoppers", "Medium", "Check field borders"),
    risk("Mites", "Low", "Routine monitoring"),
];

const LOW_RISKS: [PestRisk; 3] = [
    risk("Aphids", "Low", "Routine monitoring"),
    risk("Caterpillars", "Low", "Weekly inspection"),
    risk("Beetles", "Low", "Visual checks"),
];

/// Additive 0-90 score.
pub fn risk_score(temp: f64, humidity: f64, air_quality: f64, pm25: f64) -> u32 {
    // ---
    let mut score = 0;

    if (25.0..=35.0).contains(&temp) {
        score += 30;
    } else if (20.0..25.0).contains(&temp) || (temp > 35.0 && temp <= 40.0) {
        score += 15;
    }

    if (60.0..=80.0).contains(&humidity) {
        score += 30;
    } else if (50.0..60.0).contains(&humidity) || (humidity > 80.0 && humidity <= 90.0) {
        score += 15;
    }

    if air_quality > 150.0 {
        score += 20;
    } else if air_quality > 100.0 {
        score += 10;
    }

    if pm25 > 35.0 {
        score += 10;
    }

    score
}

pub fn advise(s: &SensorSnapshot) -> PestAdvice {
    // ---
    let score = risk_score(s.temperature, s.humidity, s.air_quality, s.pm25);

    let (status, advice, action, risks, inspection_frequency) = if score >= HIGH_RISK_FROM {
        (
            PestStatus::HighRisk,
            "🚨 HIGH RISK: Environmental conditions favor pest activity. Implement preventive measures immediately.",
            "Apply organic pesticide (neem oil). Inspect crops twice daily. Set up pest traps.",
            &HIGH_RISKS,
            "Twice daily",
        )
    } else if score >= MEDIUM_RISK_FROM {
        (
            PestStatus::MediumRisk,
            "⚠️ MODERATE RISK: Conditions becoming favorable for pests. Increase monitoring frequency.",
            "Daily crop inspection. Prepare preventive treatments. Monitor for early signs.",
            &MEDIUM_RISKS,
            "Daily",
        )
    } else {
        (
            PestStatus::LowRisk,
            "✅ LOW RISK: Environmental conditions not favorable for major pest outbreaks. Continue routine monitoring.",
            "Maintain regular inspection schedule (every 2-3 days). No immediate action needed.",
            &LOW_RISKS,
            "Every 2-3 days",
        )
    };

    PestAdvice {
        status,
        advice,
        action,
        risk_score: score,
        risks,
        inspection_frequency,
        ai_confidence: CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn snapshot(temp: f64, humidity: f64, air: f64, pm25: f64) -> SensorSnapshot {
        SensorSnapshot {
            temperature: temp,
            humidity,
            air_quality: air,
            pm25,
            ..SensorSnapshot::default()
        }
    }

    #[test]
    fn test_score_terms() {
        // ---
        assert_eq!(risk_score(30.0, 70.0, 50.0, 10.0), 60);
        assert_eq!(risk_score(22.0, 55.0, 120.0, 10.0), 40);
        assert_eq!(risk_score(38.0, 85.0, 160.0, 40.0), 60);
        assert_eq!(risk_score(10.0, 30.0, 50.0, 10.0), 0);
        assert_eq!(risk_score(30.0, 70.0, 200.0, 50.0), 90);
    }

    #[test]
    fn test_band_edges_are_inclusive_where_expected() {
        // ---
        assert_eq!(risk_score(25.0, 0.0, 0.0, 0.0), 30);
        assert_eq!(risk_score(35.0, 0.0, 0.0, 0.0), 30);
        assert_eq!(risk_score(40.0, 0.0, 0.0, 0.0), 15);
        assert_eq!(risk_score(40.1, 0.0, 0.0, 0.0), 0);
        assert_eq!(risk_score(0.0, 90.0, 0.0, 0.0), 15);
        assert_eq!(risk_score(0.0, 0.0, 150.0, 35.0), 10);
    }

    #[test]
    fn test_high_risk_advice() {
        // ---
        let advice = advise(&snapshot(30.0, 70.0, 50.0, 10.0));

        assert_eq!(advice.status, PestStatus::HighRisk);
        assert_eq!(advice.inspection_frequency, "Twice daily");
        assert_eq!(advice.risks[1].name, "Whiteflies");
        assert_eq!(advice.ai_confidence, 85);
    }

    #[test]
    fn test_medium_and_low_risk_advice() {
        // ---
        let medium = advise(&snapshot(30.0, 40.0, 120.0, 10.0));
        assert_eq!(medium.risk_score, 40);
        assert_eq!(medium.status, PestStatus::MediumRisk);
        assert_eq!(medium.inspection_frequency, "Daily");

        let low = advise(&snapshot(15.0, 30.0, 50.0, 10.0));
        assert_eq!(low.status, PestStatus::LowRisk);
        assert_eq!(low.risks[2].name, "Beetles");

        let json = serde_json::to_value(&low).unwrap();
        assert_eq!(json["status"], "low_risk");
        assert_eq!(json["risks"][0]["level"], "Low");
    }
}
