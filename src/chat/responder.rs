//! Offline, rule-based answers to farmer questions.
//!
//! `respond` is total: every (topic, snapshot, language) triple renders.
//! Readings and band labels are interpolated; guidance text comes from
//! [`super::guides`].

use super::detect::{Language, Topic};
use super::guides::{self, Guide};
use super::i18n::Term;
use crate::classifier::{self, Band, HealthTier, Issue, Metric};
use crate::SensorSnapshot;

// ---

pub fn respond(topic: Topic, s: &SensorSnapshot, lang: Language) -> String {
    // ---
    match topic {
        Topic::Sensor => sensor_report(s, lang),
        Topic::Health => health_report(s, lang),
        Topic::Water => water_advice(s, lang),
        Topic::Temperature => temperature_advice(s, lang),
        Topic::Soil => soil_advice(s, lang),
        Topic::Weather => weather_advice(s, lang),
        Topic::Fertilizer => catalog(Term::FertilizerTitle, guides::FERTILIZER, lang),
        Topic::Pest => catalog(Term::PestTitle, guides::PEST, lang),
        Topic::Disease => catalog(Term::DiseaseTitle, guides::DISEASE, lang),
        Topic::Planting => catalog(Term::PlantingTitle, guides::PLANTING, lang),
        Topic::Harvest => catalog(Term::HarvestTitle, guides::HARVEST, lang),
        Topic::General => general(s, lang),
    }
}

fn metric_label(metric: Metric) -> Term {
    match metric {
        Metric::Temperature => Term::Temperature,
        Metric::Humidity => Term::Humidity,
        Metric::AirQuality => Term::AirQuality,
        Metric::SoilMoisture => Term::SoilMoisture,
        Metric::WaterQuality => Term::WaterQuality,
    }
}

fn metric_icon(metric: Metric) -> &'static str {
    match metric {
        Metric::Temperature => "🌡️",
        Metric::Humidity => "💧",
        Metric::AirQuality => "🌿",
        Metric::SoilMoisture => "💦",
        Metric::WaterQuality => "🚰",
    }
}

/// Status word shown next to a reading.
fn band_label(metric: Metric, band: Band) -> Term {
    // ---
    use Band::*;

    match (metric, band) {
        (Metric::Temperature, Optimal) => Term::Optimal,
        (Metric::Temperature, CriticalLow | Low) => Term::TooLow,
        (Metric::Temperature, _) => Term::TooHigh,

        (Metric::Humidity, Optimal) => Term::Good,
        (Metric::Humidity, CriticalLow | Low) => Term::Low,
        (Metric::Humidity, _) => Term::High,

        (Metric::AirQuality, Optimal) => Term::Excellent,
        (Metric::AirQuality, Acceptable) => Term::Good,
        (Metric::AirQuality, _) => Term::Poor,

        (Metric::SoilMoisture, Optimal) => Term::Perfect,
        (Metric::SoilMoisture, CriticalLow | Low) => Term::Low,
        (Metric::SoilMoisture, _) => Term::High,

        (Metric::WaterQuality, Optimal) => Term::Pure,
        (Metric::WaterQuality, Acceptable) => Term::Good,
        (Metric::WaterQuality, _) => Term::High,
    }
}

fn issue_names(issues: &[Issue], lang: Language, with_values: bool) -> String {
    // ---
    issues
        .iter()
        .map(|issue| {
            let name = metric_label(issue.metric).text(lang);
            if with_values {
                format!("{} ({}{})", name, issue.value, issue.metric.unit())
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// --- sensor summary

fn sensor_report(s: &SensorSnapshot, lang: Language) -> String {
    // ---
    let mut out = format!("{}\n\n", Term::SensorTitle.text(lang));

    for (i, metric) in Metric::ALL.into_iter().enumerate() {
        let reading = classifier::classify(metric, metric.read(s));
        if i > 0 {
            out.push('\n');
        }
        push_line(
            &mut out,
            &format!(
                "{} {}: {}{} - {}",
                metric_icon(metric),
                metric_label(metric).text(lang),
                reading.value,
                metric.unit(),
                band_label(metric, reading.band).text(lang)
            ),
        );
        for action in reading.actions {
            push_line(&mut out, &format!("   {}", action));
        }
    }

    push_line(&mut out, &format!("\n\n{}", Term::OverallAssessment.text(lang)));
    let issues = classifier::summary_issues(s);
    if issues.is_empty() {
        push_line(&mut out, Term::AllOptimal.text(lang));
        out.push_str(Term::ContinuePractices.text(lang));
    } else {
        push_line(
            &mut out,
            &format!(
                "{} {}",
                Term::AttentionNeeded.text(lang),
                issue_names(&issues, lang, false)
            ),
        );
        out.push_str(Term::TakeCorrectiveActions.text(lang));
    }
    out
}

// --- crop health

fn health_report(s: &SensorSnapshot, lang: Language) -> String {
    // ---
    let health = classifier::crop_health(s);
    let mut out = format!("{} {}/100**\n\n", Term::HealthTitle.text(lang), health.score);

    match health.tier {
        HealthTier::Excellent => {
            push_line(&mut out, &format!("{}\n", Term::ExcellentCondition.text(lang)));
            push_block(&mut out, Term::WhyThriving.text(lang), guides::HEALTH_THRIVING);
            push_block(&mut out, Term::KeepDoing.text(lang), guides::HEALTH_KEEP_DOING);
            push_block(&mut out, Term::ExpectedOutcomes.text(lang), guides::HEALTH_OUTCOMES);
        }
        HealthTier::NeedsAttention => {
            push_line(&mut out, &format!("{}\n", Term::NeedAttention.text(lang)));
            push_line(
                &mut out,
                &format!(
                    "{} {}\n",
                    Term::IssuesDetected.text(lang),
                    issue_names(&health.issues, lang, true)
                ),
            );
            push_line(&mut out, Term::ImmediateActions.text(lang));
            for action in attention_actions(s) {
                push_line(&mut out, action);
            }
            out.push('\n');
            push_block(&mut out, Term::RecoveryPlan.text(lang), guides::HEALTH_RECOVERY_PLAN);
            push_line(&mut out, Term::ExpectedRecovery.text(lang));
        }
        HealthTier::ImmediateCare => {
            push_line(&mut out, &format!("{}\n", Term::ImmediateCare.text(lang)));
            push_line(
                &mut out,
                &format!(
                    "{} {}\n",
                    Term::CriticalIssues.text(lang),
                    issue_names(&health.issues, lang, true)
                ),
            );
            push_line(&mut out, Term::UrgentActions.text(lang));
            for action in urgent_actions(s) {
                push_line(&mut out, action);
            }
            out.push('\n');
            push_block(&mut out, Term::EmergencyCare.text(lang), guides::HEALTH_EMERGENCY_CARE);
            push_line(&mut out, Term::CropLossWarning.text(lang));
        }
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_block(out: &mut String, heading: &str, lines: &[&str]) {
    push_line(out, heading);
    for line in lines {
        push_line(out, line);
    }
    out.push('\n');
}

fn attention_actions(s: &SensorSnapshot) -> Vec<&'static str> {
    // ---
    let rules: [(bool, &'static str); 7] = [
        (s.temperature > 30.0, "🌡️ Temperature: Provide shade, increase watering"),
        (s.temperature < 20.0, "🌡️ Temperature: Use covers, reduce watering"),
        (s.soil_moisture < 40.0, "💧 Moisture: Water immediately, deep watering needed"),
        (s.soil_moisture < 50.0, "💧 Moisture: Water within 6 hours"),
        (s.humidity < 50.0, "💨 Humidity: Mist leaves, use mulch"),
        (s.humidity > 70.0, "💨 Humidity: Improve ventilation, reduce watering"),
        (s.air_quality > 150.0, "🌿 Air Quality: Improve ventilation, check pollution sources"),
    ];
    rules.into_iter().filter(|(hit, _)| *hit).map(|(_, a)| a).collect()
}

fn urgent_actions(s: &SensorSnapshot) -> Vec<&'static str> {
    // ---
    let rules: [(bool, &'static str); 5] = [
        (s.soil_moisture < 30.0, "1. Water immediately - deep watering for 15-20 minutes"),
        (s.temperature > 35.0, "2. Provide immediate shade - use cloth/net"),
        (s.temperature < 15.0, "2. Protect from cold - use covers/tunnels"),
        (s.humidity > 80.0, "3. Improve air circulation - prune dense foliage"),
        (s.air_quality > 200.0, "4. Relocate plants if possible - improve ventilation"),
    ];
    rules.into_iter().filter(|(hit, _)| *hit).map(|(_, a)| a).collect()
}

// --- irrigation

/// Rough daily water loss used only for the chat schedule, in mm/day.
fn et_proxy(s: &SensorSnapshot) -> f64 {
    // ---
    let mut et = 0.5;
    if s.temperature > 30.0 {
        et += 0.3;
    }
    if s.humidity < 50.0 {
        et += 0.2;
    }
    et
}

fn water_advice(s: &SensorSnapshot, lang: Language) -> String {
    // ---
    let et = et_proxy(s);
    let moisture_label = Term::SoilMoisture.text(lang);
    let mut out = format!("{}\n\n", Term::WaterTitle.text(lang));

    if s.soil_moisture < 30.0 {
        push_line(
            &mut out,
            &format!(
                "{} {} {}% - {}\n",
                Term::Urgent.text(lang),
                moisture_label,
                s.soil_moisture,
                Term::WaterNow.text(lang)
            ),
        );
        guides::render(&mut out, guides::WATER_URGENT);
    } else if s.soil_moisture < 50.0 {
        push_line(
            &mut out,
            &format!(
                "⚠️ {} {}% - {}\n",
                moisture_label,
                s.soil_moisture,
                Term::WaterWithinHours.text(lang)
            ),
        );
        guides::render(&mut out, guides::WATER_SCHEDULE);
        push_line(&mut out, "\n**Frequency guide:**");
        push_line(
            &mut out,
            &format!(
                "• {}: {}°C, {}: {}%",
                Term::Temperature.text(lang),
                s.temperature,
                Term::Humidity.text(lang),
                s.humidity
            ),
        );
        push_line(&mut out, &format!("• Estimated ET rate: {:.1}mm/day", et));
        push_line(&mut out, &format!("• Recommended: Water every {} days", (20.0 / et) as u32));
    } else {
        push_line(
            &mut out,
            &format!(
                "✅ {} {}% - {}!\n",
                moisture_label,
                s.soil_moisture,
                Term::Good.text(lang)
            ),
        );
        push_line(&mut out, "**MAINTENANCE SCHEDULE:**");
        push_line(&mut out, "💧 Amount: 10-15mm (1-1.5 liters per sq meter)");
        push_line(&mut out, &format!("⏰ Next watering: In {} days", (30.0 / et) as u32));
        push_line(&mut out, "⏱️ Duration: 8-12 minutes\n");
        guides::render(&mut out, guides::WATER_MAINTENANCE_TAIL);
    }

    push_line(&mut out, &format!("\n{}", Term::EnvironmentalFactors.text(lang)));
    let temp_note = if s.temperature > 30.0 {
        "High (increase watering by 30%)"
    } else if s.temperature < 20.0 {
        "Low (reduce watering by 20%)"
    } else {
        "Optimal (maintain schedule)"
    };
    let humidity_note = if s.humidity < 50.0 {
        "Low (water more frequently)"
    } else if s.humidity > 70.0 {
        "High (reduce watering)"
    } else {
        "Good (maintain schedule)"
    };
    push_line(
        &mut out,
        &format!(
            "🌡️ {}: {}°C - {}",
            Term::Temperature.text(lang),
            s.temperature,
            temp_note
        ),
    );
    push_line(
        &mut out,
        &format!(
            "💨 {}: {}% - {}",
            Term::Humidity.text(lang),
            s.humidity,
            humidity_note
        ),
    );

    out.push('\n');
    guides::render(&mut out, guides::WATER_QUALITY_TIPS);
    out
}

// --- temperature

fn temperature_advice(s: &SensorSnapshot, lang: Language) -> String {
    // ---
    let t = s.temperature;
    let mut out = format!("{}\n\n", Term::TempTitle.text(lang));
    push_line(
        &mut out,
        &format!(
            "{} {}: {}°C",
            Term::Current.text(lang),
            Term::Temperature.text(lang),
            t
        ),
    );
    push_line(&mut out, &format!("{} 20-30°C\n", Term::OptimalRange.text(lang)));

    let guide: Guide = if t > 35.0 {
        guides::TEMP_EXTREME_HEAT
    } else if t > 30.0 {
        guides::TEMP_HIGH
    } else if t < 15.0 {
        guides::TEMP_EXTREME_COLD
    } else if t < 20.0 {
        guides::TEMP_COOL
    } else {
        push_line(
            &mut out,
            &format!(
                "✅ **OPTIMAL TEMPERATURE - {}!**\n",
                Term::Optimal.text(lang)
            ),
        );
        guides::TEMP_OPTIMAL
    };
    guides::render(&mut out, guide);

    out.push('\n');
    guides::render(&mut out, guides::TEMP_MONITORING);
    out
}

// --- soil and weather

fn soil_advice(s: &SensorSnapshot, lang: Language) -> String {
    // ---
    let mut out = format!("{}\n\n", Term::SoilTitle.text(lang));
    push_line(
        &mut out,
        &format!(
            "{} {}: {}%",
            Term::Current.text(lang),
            Term::SoilMoisture.text(lang),
            s.soil_moisture
        ),
    );
    push_line(&mut out, &format!("{} 50-70%\n", Term::OptimalRange.text(lang)));
    push_line(&mut out, "**SOIL HEALTH ESSENTIALS:**\n");
    guides::render(&mut out, guides::SOIL);
    out
}

fn weather_advice(s: &SensorSnapshot, lang: Language) -> String {
    // ---
    let mut out = format!("{}\n\n", Term::WeatherTitle.text(lang));
    push_line(&mut out, Term::CurrentStatus.text(lang));
    push_line(&mut out, &format!("• {}: {}°C", Term::Temperature.text(lang), s.temperature));
    push_line(&mut out, &format!("• {}: {}%\n", Term::Humidity.text(lang), s.humidity));
    push_line(&mut out, "**WEATHER-BASED FARMING GUIDE:**\n");
    guides::render(&mut out, guides::WEATHER);
    out
}

// --- static topics

fn catalog(title: Term, guide: Guide, lang: Language) -> String {
    // ---
    let mut out = format!("{}\n\n", title.text(lang));
    guides::render(&mut out, guide);
    out
}

fn general(s: &SensorSnapshot, lang: Language) -> String {
    // ---
    format!(
        "{}\n\n🌡️ {}°C | 💧 {}% | 💦 {}%\n\n{}\n{}",
        Term::GeneralTitle.text(lang),
        s.temperature,
        s.humidity,
        s.soil_moisture,
        Term::Capabilities.text(lang),
        Term::AskAnyLanguage.text(lang),
    )
}
