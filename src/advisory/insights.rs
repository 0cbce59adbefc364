//! Short prioritized observations about the current readings.

use serde::Serialize;

use crate::SensorSnapshot;

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Alert,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    // ---
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: &'static str,
    pub message: String,
    pub priority: Priority,
}

impl Insight {
    fn new(kind: InsightKind, title: &'static str, message: String, priority: Priority) -> Self {
        Insight {
            kind,
            title,
            message,
            priority,
        }
    }
}

/// Never empty: with nothing to flag, a single "Good Conditions" entry.
pub fn generate(s: &SensorSnapshot) -> Vec<Insight> {
    // ---
    use InsightKind::*;

    let m = s.soil_moisture;
    let t = s.temperature;
    let h = s.humidity;
    let air = s.air_quality;
    let tds = s.water_quality;
    let mut out = Vec::new();

    if m < 40.0 {
        out.push(Insight::new(
            Warning,
            "Soil Moisture Critical",
            format!("Moisture at {:.1}% is below optimal. Immediate action required.", m),
            Priority::High,
        ));
    } else if m > 80.0 {
        out.push(Insight::new(
            Warning,
            "Soil Too Wet",
            format!("Moisture at {:.1}% is too high. Risk of waterlogging and root diseases.", m),
            Priority::Medium,
        ));
    }

    if t > 30.0 {
        out.push(Insight::new(
            Alert,
            "Heat Stress Risk",
            format!("Temperature {:.1}°C may cause crop stress. Consider shade or cooling measures.", t),
            Priority::Medium,
        ));
    } else if t < 20.0 {
        out.push(Insight::new(
            Alert,
            "Cold Stress Risk",
            format!("Temperature {:.1}°C is low. Protect sensitive crops from cold damage.", t),
            Priority::Medium,
        ));
    }

    if h > 75.0 {
        out.push(Insight::new(
            Warning,
            "High Humidity Alert",
            format!("Humidity {:.1}% increases fungal disease risk. Improve ventilation.", h),
            Priority::Medium,
        ));
    } else if h < 40.0 {
        out.push(Insight::new(
            Alert,
            "Low Humidity Warning",
            format!("Humidity {:.1}% is low. Plants may experience water stress. Consider misting.", h),
            Priority::Low,
        ));
    }

    if air > 100.0 {
        out.push(Insight::new(
            Alert,
            "Poor Air Quality",
            format!(
                "Air quality {:.0} ppm may affect crop health and photosynthesis. Monitor closely.",
                air
            ),
            Priority::Low,
        ));
    }

    if tds > 400.0 {
        out.push(Insight::new(
            Warning,
            "Water Quality Issue",
            format!(
                "TDS {:.0} ppm is elevated. Consider water filtration for irrigation to prevent salt buildup.",
                tds
            ),
            Priority::Medium,
        ));
    }

    let ideal = (50.0..=75.0).contains(&m)
        && (20.0..=30.0).contains(&t)
        && (45.0..=75.0).contains(&h)
        && air < 100.0
        && tds < 400.0;
    if ideal {
        out.push(Insight::new(
            Success,
            "Optimal Growing Conditions",
            "All parameters in ideal range. Crops should thrive! Continue current management practices."
                .to_string(),
            Priority::Info,
        ));
    }

    if out.is_empty() {
        out.push(Insight::new(
            Success,
            "Good Conditions",
            "Environmental conditions are favorable for crop growth. Continue monitoring.".to_string(),
            Priority::Info,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn snapshot(m: f64, t: f64, h: f64, air: f64, tds: f64) -> SensorSnapshot {
        SensorSnapshot {
            soil_moisture: m,
            temperature: t,
            humidity: h,
            air_quality: air,
            water_quality: tds,
            ..SensorSnapshot::default()
        }
    }

    fn titles(s: &SensorSnapshot) -> Vec<&'static str> {
        generate(s).iter().map(|i| i.title).collect()
    }

    #[test]
    fn test_ideal_conditions() {
        // ---
        let insights = generate(&snapshot(60.0, 25.0, 60.0, 50.0, 150.0));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Optimal Growing Conditions");
        assert_eq!(insights[0].priority, Priority::Info);
    }

    #[test]
    fn test_stressed_field_flags_everything() {
        // ---
        let s = snapshot(25.0, 35.0, 80.0, 180.0, 550.0);

        assert_eq!(
            titles(&s),
            vec![
                "Soil Moisture Critical",
                "Heat Stress Risk",
                "High Humidity Alert",
                "Poor Air Quality",
                "Water Quality Issue",
            ]
        );
        let first = &generate(&s)[0];
        assert_eq!(first.message, "Moisture at 25.0% is below optimal. Immediate action required.");
        assert_eq!(first.priority, Priority::High);
    }

    #[test]
    fn test_fallback_when_nothing_to_flag() {
        // ---
        // Not ideal (moisture 45 < 50) but nothing crosses an alert threshold either.
        assert_eq!(titles(&snapshot(45.0, 25.0, 60.0, 50.0, 150.0)), vec!["Good Conditions"]);
    }

    #[test]
    fn test_cold_and_dry_messages() {
        // ---
        let insights = generate(&snapshot(85.0, 15.0, 30.0, 50.0, 150.0));

        assert_eq!(insights[0].title, "Soil Too Wet");
        assert_eq!(insights[1].message, "Temperature 15.0°C is low. Protect sensitive crops from cold damage.");
        assert_eq!(insights[2].priority, Priority::Low);

        let json = serde_json::to_value(&insights[2]).unwrap();
        assert_eq!(json["type"], "alert");
        assert_eq!(json["priority"], "low");
    }

    #[test]
    fn test_never_empty_across_boundaries() {
        // ---
        let moisture = [0.0, 39.9, 40.0, 50.0, 75.0, 80.0, 80.1, 100.0];
        let temperature = [-10.0, 19.9, 20.0, 25.0, 30.0, 30.1, 50.0];
        let humidity = [0.0, 39.9, 40.0, 45.0, 60.0, 75.0, 75.1, 100.0];
        let air = [0.0, 99.9, 100.0, 100.1, 500.0];
        let tds = [0.0, 399.9, 400.0, 400.1, 1000.0];

        for &m in &moisture {
            for &t in &temperature {
                for &h in &humidity {
                    for &a in &air {
                        for &w in &tds {
                            let found = titles(&snapshot(m, t, h, a, w));
                            assert!(!found.is_empty(), "empty for {m} {t} {h} {a} {w}");
                            let optimal = found
                                .iter()
                                .filter(|title| **title == "Optimal Growing Conditions")
                                .count();
                            assert!(optimal <= 1);
                        }
                    }
                }
            }
        }
    }
}
