//! Irrigation advisor: urgency tier from soil moisture, water amount from
//! the moisture deficit, and a simplified evapotranspiration estimate.

use serde::Serialize;

use crate::SensorSnapshot;

// ---

pub const CONFIDENCE: u8 = 92;

/// Soil moisture the water amount aims for, %.
const TARGET_MOISTURE: f64 = 65.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationStatus {
    Critical,
    ActionNeeded,
    Warning,
    Optimal,
    Saturated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrrigationAdvice {
    // ---
    pub status: IrrigationStatus,
    pub urgency: &'static str,
    pub hours_until: u32,
    pub advice: String,
    pub next_irrigation: &'static str,
    pub water_amount: String,
    pub et_rate: String,
    pub ai_confidence: u8,
}

/// Simplified evapotranspiration, mm/day. Never negative.
pub fn evapotranspiration(temp: f64, humidity: f64) -> f64 {
    // ---
    let base = 0.0023 * (temp + 17.8) * (temp - humidity).abs().sqrt();
    (base * 10.0).max(0.0)
}

/// Water needed to bring the soil to target moisture, L/m². Never negative.
pub fn water_requirement(moisture: f64, temp: f64, humidity: f64) -> f64 {
    // ---
    let deficit = (TARGET_MOISTURE - moisture).max(0.0);
    let temp_factor = 1.0 + (temp - 25.0) * 0.02;
    let humidity_factor = 1.0 - (humidity - 60.0) * 0.01;
    (deficit * 0.5 * temp_factor * humidity_factor).max(0.0)
}

pub fn advise(s: &SensorSnapshot) -> IrrigationAdvice {
    // ---
    let m = s.soil_moisture;
    let et = evapotranspiration(s.temperature, s.humidity);

    let (status, urgency, hours_until, advice) = if m < 30.0 {
        (
            IrrigationStatus::Critical,
            "immediate",
            0,
            format!(
                "🚨 CRITICAL: Soil moisture at {:.1}%. Immediate irrigation required to prevent crop stress.",
                m
            ),
        )
    } else if m < 45.0 {
        (
            IrrigationStatus::ActionNeeded,
            "today",
            4,
            format!(
                "⚠️ LOW MOISTURE: At {:.1}%, irrigation needed within 4 hours. High ET rate ({:.1}mm/day) accelerating water loss.",
                m, et
            ),
        )
    } else if m < 60.0 {
        (
            IrrigationStatus::Warning,
            "tomorrow",
            24,
            format!(
                "📊 MODERATE: Moisture at {:.1}%. Plan irrigation for tomorrow. Current ET rate: {:.1}mm/day.",
                m, et
            ),
        )
    } else if m < 75.0 {
        (
            IrrigationStatus::Optimal,
            "2-3 days",
            48,
            format!(
                "✅ OPTIMAL: Soil moisture at {:.1}% is ideal. Next irrigation in 2-3 days based on {:.1}mm/day ET rate.",
                m, et
            ),
        )
    } else {
        (
            IrrigationStatus::Saturated,
            "4-5 days",
            96,
            format!(
                "💧 SATURATED: Moisture at {:.1}% is high. Delay irrigation 4-5 days to prevent waterlogging and root diseases.",
                m
            ),
        )
    };

    let water = water_requirement(m, s.temperature, s.humidity);

    IrrigationAdvice {
        status,
        urgency,
        hours_until,
        advice,
        next_irrigation: urgency,
        water_amount: format!("{:.1} L/m²", water),
        et_rate: format!("{:.1} mm/day", et),
        ai_confidence: CONFIDENCE,
    }
}
