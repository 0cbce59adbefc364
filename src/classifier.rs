//! Threshold classifier.
//!
//! Maps one metric value onto a qualitative band using hard-coded,
//! non-overlapping cut points, and attaches the fixed action bullets for
//! that (metric, band) pair. Also home to the two multi-metric roll-ups the
//! chat responder needs: the sensor-summary issue list and the crop health
//! score. Each roll-up carries its own cut-offs; they intentionally do not
//! share thresholds with each other or with `advisory::insights`.

use crate::SensorSnapshot;

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
    AirQuality,
    SoilMoisture,
    WaterQuality,
}

/// Qualitative band of a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    CriticalLow,
    Low,
    Optimal,
    /// Above optimal but still fine (air and water quality only).
    Acceptable,
    High,
    CriticalHigh,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    // ---
    pub metric: Metric,
    pub value: f64,
    pub band: Band,
    pub actions: &'static [&'static str],
}

/// A metric that is outside its range, with the offending value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Issue {
    pub metric: Metric,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTier {
    Excellent,
    NeedsAttention,
    ImmediateCare,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CropHealth {
    // ---
    pub score: u8,
    pub issues: Vec<Issue>,
    pub tier: HealthTier,
}

type Actions = &'static [&'static str];

/// Upper edge of a band. Values strictly below `limit` (or equal to it when
/// `inclusive`) fall in `band`.
struct Cut {
    limit: f64,
    inclusive: bool,
    band: Band,
    actions: Actions,
}

/// Ordered cuts plus the band for everything past the last one.
struct Scale {
    cuts: &'static [Cut],
    top: Cut,
}

/// Every band carries 3 to 6 bullets; checked when the tables are built.
const fn bullets(actions: Actions) -> Actions {
    assert!(actions.len() >= 3 && actions.len() <= 6);
    actions
}

const fn below(limit: f64, band: Band, actions: Actions) -> Cut {
    Cut {
        limit,
        inclusive: false,
        band,
        actions: bullets(actions),
    }
}

const fn up_to(limit: f64, band: Band, actions: Actions) -> Cut {
    Cut {
        limit,
        inclusive: true,
        band,
        actions: bullets(actions),
    }
}

const fn beyond(band: Band, actions: Actions) -> Cut {
    Cut {
        limit: f64::INFINITY,
        inclusive: true,
        band,
        actions: bullets(actions),
    }
}

const TEMPERATURE: Scale = Scale {
    cuts: &[
        below(
            15.0,
            Band::CriticalLow,
            &[
                "❄️ Cold stress risk - protect plants",
                "❄️ Use row covers/plastic tunnels",
                "❄️ Reduce watering frequency",
                "❄️ Protect from frost",
            ],
        ),
        below(
            20.0,
            Band::Low,
            &[
                "⚠️ Slow growth expected",
                "⚠️ Reduce fertilizer application",
                "⚠️ Water in morning only",
            ],
        ),
        up_to(
            30.0,
            Band::Optimal,
            &[
                "✓ Perfect for most crops",
                "✓ Good photosynthesis rate",
                "✓ Optimal enzyme activity",
            ],
        ),
        up_to(
            35.0,
            Band::High,
            &[
                "⚠️ Monitor for heat stress",
                "⚠️ Water early morning/evening",
                "⚠️ Consider shade cloth (30-50%)",
            ],
        ),
    ],
    top: beyond(
        Band::CriticalHigh,
        &[
            "⚠️ Heat stress risk - provide shade",
            "⚠️ Increase watering frequency",
            "⚠️ Mist leaves in extreme heat",
            "⚠️ Mulch to keep roots cool",
        ],
    ),
};

const HUMIDITY: Scale = Scale {
    cuts: &[
        below(
            40.0,
            Band::CriticalLow,
            &[
                "⚠️ Increase watering",
                "⚠️ Mist leaves regularly",
                "⚠️ Use mulch to retain moisture",
                "⚠️ Group plants together",
            ],
        ),
        below(
            50.0,
            Band::Low,
            &[
                "⚠️ Monitor plant stress",
                "⚠️ Water more frequently",
                "⚠️ Consider misting",
            ],
        ),
        up_to(
            70.0,
            Band::Optimal,
            &[
                "✓ Ideal for plant growth",
                "✓ Low disease risk",
                "✓ Good transpiration rate",
            ],
        ),
        up_to(
            80.0,
            Band::High,
            &[
                "⚠️ Monitor for fungal diseases",
                "⚠️ Ensure good ventilation",
                "⚠️ Avoid overhead watering",
            ],
        ),
    ],
    top: beyond(
        Band::CriticalHigh,
        &[
            "⚠️ High fungal disease risk",
            "⚠️ Improve air circulation",
            "⚠️ Reduce watering frequency",
            "⚠️ Apply preventive fungicide",
            "⚠️ Remove dense foliage",
        ],
    ),
};

const AIR_QUALITY: Scale = Scale {
    cuts: &[
        below(
            100.0,
            Band::Optimal,
            &[
                "✓ Clean air, healthy environment",
                "✓ Good for plant respiration",
                "✓ No air pollution stress",
            ],
        ),
        below(
            150.0,
            Band::Acceptable,
            &[
                "✓ Acceptable air quality",
                "✓ Minor impact on plants",
                "⚠️ Monitor sensitive crops",
            ],
        ),
        below(
            200.0,
            Band::High,
            &[
                "⚠️ Moderate pollution",
                "⚠️ May affect sensitive plants",
                "⚠️ Increase ventilation",
                "⚠️ Consider air purifying plants",
            ],
        ),
    ],
    top: beyond(
        Band::CriticalHigh,
        &[
            "🚨 High pollution levels",
            "🚨 Serious plant stress risk",
            "🚨 Improve ventilation urgently",
            "🚨 Use air filters if indoor",
            "🚨 Relocate sensitive plants",
        ],
    ),
};

const SOIL_MOISTURE: Scale = Scale {
    cuts: &[
        below(
            30.0,
            Band::CriticalLow,
            &[
                "🚨 URGENT: Water immediately!",
                "🚨 Deep watering needed (15-20 min)",
                "🚨 Water early morning (6-8 AM)",
                "🚨 Apply 20-25mm water",
                "🚨 Check again in 6 hours",
                "🚨 Mulch to retain moisture",
            ],
        ),
        below(
            50.0,
            Band::Low,
            &[
                "⚠️ Water within 4-6 hours",
                "⚠️ Apply 15-20mm water",
                "⚠️ Water early morning",
                "⚠️ Avoid midday watering",
                "⚠️ Monitor daily",
            ],
        ),
        up_to(
            70.0,
            Band::Optimal,
            &[
                "✓ Optimal moisture level",
                "✓ Good root health",
                "✓ Efficient nutrient uptake",
                "✓ Continue current schedule",
            ],
        ),
        up_to(
            80.0,
            Band::High,
            &[
                "⚠️ Slightly too wet",
                "⚠️ Skip next watering",
                "⚠️ Ensure good drainage",
                "⚠️ Monitor for fungal issues",
            ],
        ),
    ],
    top: beyond(
        Band::CriticalHigh,
        &[
            "⚠️ Overwatering risk",
            "⚠️ Stop watering for 2-3 days",
            "⚠️ Improve drainage",
            "⚠️ Check for root rot",
            "⚠️ Reduce watering frequency",
        ],
    ),
};

const WATER_QUALITY: Scale = Scale {
    cuts: &[
        below(
            300.0,
            Band::Optimal,
            &[
                "✓ Excellent water quality",
                "✓ Safe for all crops",
                "✓ Low salt content",
                "✓ Good for irrigation",
            ],
        ),
        below(
            500.0,
            Band::Acceptable,
            &[
                "✓ Acceptable for most crops",
                "⚠️ Monitor salt-sensitive plants",
                "⚠️ Flush soil occasionally",
            ],
        ),
        below(
            800.0,
            Band::High,
            &[
                "⚠️ High mineral content",
                "⚠️ May affect sensitive crops",
                "⚠️ Flush soil with clean water",
                "⚠️ Consider water treatment",
                "⚠️ Monitor for salt buildup",
            ],
        ),
    ],
    top: beyond(
        Band::CriticalHigh,
        &[
            "🚨 Very high TDS - not suitable",
            "🚨 Use alternative water source",
            "🚨 Install water filter",
            "🚨 Flush soil thoroughly",
            "🚨 May cause nutrient lockout",
        ],
    ),
};

// ---

impl Metric {
    // ---
    pub const ALL: [Metric; 5] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::AirQuality,
        Metric::SoilMoisture,
        Metric::WaterQuality,
    ];

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity | Metric::SoilMoisture => "%",
            Metric::AirQuality => " ppm",
            Metric::WaterQuality => " ppm TDS",
        }
    }

    pub fn read(self, s: &SensorSnapshot) -> f64 {
        match self {
            Metric::Temperature => s.temperature,
            Metric::Humidity => s.humidity,
            Metric::AirQuality => s.air_quality,
            Metric::SoilMoisture => s.soil_moisture,
            Metric::WaterQuality => s.water_quality,
        }
    }

    fn scale(self) -> &'static Scale {
        match self {
            Metric::Temperature => &TEMPERATURE,
            Metric::Humidity => &HUMIDITY,
            Metric::AirQuality => &AIR_QUALITY,
            Metric::SoilMoisture => &SOIL_MOISTURE,
            Metric::WaterQuality => &WATER_QUALITY,
        }
    }
}

impl Band {
    /// 0 = optimal, 3 = critical. Bands of one metric never share a rank
    /// on the same side of optimal.
    pub fn severity(self) -> u8 {
        match self {
            Band::Optimal => 0,
            Band::Acceptable => 1,
            Band::Low | Band::High => 2,
            Band::CriticalLow | Band::CriticalHigh => 3,
        }
    }
}

/// Classify one reading. Total over `f64`: anything past the last cut
/// (including NaN) lands in the top band.
pub fn classify(metric: Metric, value: f64) -> Classification {
    // ---
    let scale = metric.scale();
    let cut = scale
        .cuts
        .iter()
        .find(|cut| {
            if cut.inclusive {
                value <= cut.limit
            } else {
                value < cut.limit
            }
        })
        .unwrap_or(&scale.top);

    Classification {
        metric,
        value,
        band: cut.band,
        actions: cut.actions,
    }
}

// ---

/// Metrics flagged in the sensor-summary "overall assessment".
pub fn summary_issues(s: &SensorSnapshot) -> Vec<Issue> {
    // ---
    let checks = [
        (Metric::Temperature, s.temperature < 20.0 || s.temperature > 30.0),
        (Metric::Humidity, s.humidity < 50.0 || s.humidity > 70.0),
        (Metric::SoilMoisture, s.soil_moisture < 50.0),
        (Metric::AirQuality, s.air_quality > 150.0),
        (Metric::WaterQuality, s.water_quality > 500.0),
    ];
    collect_issues(s, &checks)
}

/// Crop health score: 100 minus fixed penalties per out-of-range metric.
pub fn crop_health(s: &SensorSnapshot) -> CropHealth {
    // ---
    let penalties = [
        (Metric::Temperature, s.temperature < 20.0 || s.temperature > 30.0, 15),
        (Metric::Humidity, s.humidity < 50.0 || s.humidity > 70.0, 10),
        (Metric::SoilMoisture, s.soil_moisture < 50.0, 20),
        (Metric::AirQuality, s.air_quality > 150.0, 10),
    ];

    let mut score: i32 = 100;
    let mut issues = Vec::new();
    for (metric, out_of_range, penalty) in penalties {
        if out_of_range {
            score -= penalty;
            issues.push(Issue {
                metric,
                value: metric.read(s),
            });
        }
    }
    let score = score.clamp(0, 100) as u8;

    let tier = match score {
        80..=100 => HealthTier::Excellent,
        60..=79 => HealthTier::NeedsAttention,
        _ => HealthTier::ImmediateCare,
    };

    CropHealth {
        score,
        issues,
        tier,
    }
}

fn collect_issues(s: &SensorSnapshot, checks: &[(Metric, bool)]) -> Vec<Issue> {
    checks
        .iter()
        .filter(|(_, flagged)| *flagged)
        .map(|(metric, _)| Issue {
            metric: *metric,
            value: metric.read(s),
        })
        .collect()
}
