//! Crop image "analysis".
//!
//! This is a simulation. No image is inspected: one of four fixed diagnosis
//! records is picked at random, and two of them quote the current readings.
//! Responses carry `simulated: true` so clients can tell.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::SensorSnapshot;

// ---

type Steps = &'static [&'static str];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    // ---
    pub name: &'static str,
    pub icon: &'static str,
    pub confidence: u8,
    pub severity: &'static str,
    pub description: &'static str,
    pub detailed_analysis: BTreeMap<&'static str, String>,
    pub recommendations: Steps,
    pub preventive_measures: Steps,
    /// Record-specific step lists, e.g. `treatment_schedule`.
    #[serde(flatten)]
    pub guides: BTreeMap<&'static str, Steps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_estimate: Option<BTreeMap<&'static str, &'static str>>,
}

fn details(pairs: &[(&'static str, String)]) -> BTreeMap<&'static str, String> {
    pairs.iter().cloned().collect()
}

fn healthy() -> Diagnosis {
    // ---
    Diagnosis {
        name: "Healthy Crop",
        icon: "✅",
        confidence: 95,
        severity: "None",
        description: "Your crop appears healthy with no visible signs of disease or pest damage. Leaves show good color and structure.",
        detailed_analysis: details(&[
            ("leaf_health", "Excellent - vibrant green color, no discoloration".into()),
            ("growth_stage", "Vegetative growth - normal development".into()),
            ("stress_indicators", "None detected".into()),
            ("soil_condition", "Good moisture level, adequate nutrients visible".into()),
        ]),
        recommendations: &[
            "Maintain current irrigation schedule",
            "Continue regular nutrient application (NPK 10-10-10)",
            "Monitor for early signs of stress or pest activity",
            "Ensure adequate spacing for air circulation",
        ],
        preventive_measures: &[
            "Weekly inspection of leaves (top and bottom)",
            "Remove any dead or yellowing leaves promptly",
            "Maintain soil pH between 6.0-7.0",
            "Apply organic mulch to retain moisture",
        ],
        guides: BTreeMap::from([(
            "next_steps",
            &[
                "Continue monitoring every 2-3 days",
                "Take photos weekly to track growth progress",
                "Check soil moisture daily",
                "Apply balanced fertilizer in 2 weeks",
            ] as Steps,
        )]),
        cost_estimate: None,
    }
}

fn early_blight(s: &SensorSnapshot) -> Diagnosis {
    // ---
    Diagnosis {
        name: "Early Blight",
        icon: "⚠️",
        confidence: 87,
        severity: "Moderate",
        description: "Early signs of fungal infection detected. Dark spots with concentric rings visible on leaves. This is a common fungal disease affecting tomatoes and potatoes.",
        detailed_analysis: details(&[
            ("leaf_health", "Moderate - dark brown spots with yellow halos present".into()),
            ("growth_stage", "Mid-season - infection spreading from lower leaves".into()),
            ("stress_indicators", "Fungal spores visible, leaf yellowing around spots".into()),
            (
                "soil_condition",
                format!("Moisture: {}% - May be contributing to fungal growth", s.soil_moisture),
            ),
            (
                "environmental_factors",
                format!(
                    "Temp: {}°C, Humidity: {}% - Favorable for fungal development",
                    s.temperature, s.humidity
                ),
            ),
        ]),
        recommendations: &[
            "🚨 IMMEDIATE: Remove and destroy infected leaves (do not compost)",
            "💊 Apply copper-based fungicide (Bordeaux mixture) every 7-10 days",
            "🌬️ Improve air circulation - prune dense foliage, increase plant spacing",
            "💧 Avoid overhead watering - water at soil level in morning",
            "🧹 Clean up fallen leaves and debris around plants",
            "🔄 Rotate crops next season - do not plant in same location",
        ],
        preventive_measures: &[
            "Use disease-resistant varieties in future plantings",
            "Mulch around plants to prevent soil splash",
            "Space plants 60-90cm apart for better airflow",
            "Water early morning (6-8 AM) to allow leaves to dry",
            "Apply preventive fungicide before rainy season",
            "Remove lower leaves touching soil",
        ],
        guides: BTreeMap::from([
            (
                "treatment_schedule",
                &[
                    "Day 1: Remove infected leaves, apply first fungicide treatment",
                    "Day 3: Check for new spots, remove if found",
                    "Day 7: Second fungicide application",
                    "Day 10: Assess improvement, continue treatment if needed",
                    "Day 14: Third fungicide application",
                    "Day 21: Final assessment and preventive measures",
                ] as Steps,
            ),
            (
                "warning_signs",
                &[
                    "🔴 Rapid spread to upper leaves - increase treatment frequency",
                    "🔴 Fruit showing spots - harvest affected fruits immediately",
                    "🔴 Entire leaves turning yellow - may need systemic fungicide",
                    "🔴 Stem lesions appearing - disease progressing, consult expert",
                ] as Steps,
            ),
        ]),
        cost_estimate: Some(BTreeMap::from([
            ("fungicide", "₹200-400 per treatment"),
            ("total_treatment", "₹600-1200 for full course"),
            ("prevention", "₹100-200 per month"),
        ])),
    }
}

fn nutrient_deficiency() -> Diagnosis {
    // ---
    Diagnosis {
        name: "Nutrient Deficiency",
        icon: "🟡",
        confidence: 82,
        severity: "Mild",
        description: "Signs of nitrogen deficiency detected. Older leaves showing yellowing (chlorosis) while veins remain green.",
        detailed_analysis: details(&[
            ("leaf_health", "Mild chlorosis - yellowing from leaf tips and edges".into()),
            ("growth_stage", "Vegetative - growth may be stunted".into()),
            ("stress_indicators", "Pale green to yellow older leaves, slow growth".into()),
            ("soil_condition", "Likely nitrogen-depleted, may need organic matter".into()),
            (
                "deficiency_type",
                "Nitrogen (N) - mobile nutrient, affects older leaves first".into(),
            ),
        ]),
        recommendations: &[
            "🌿 Apply nitrogen-rich fertilizer immediately (Urea 46-0-0 or 20-20-20)",
            "💚 Use organic options: compost, manure, or blood meal",
            "💧 Water thoroughly after fertilizer application",
            "📊 Soil test recommended to confirm nutrient levels",
            "🔄 Apply in split doses - half now, half after 2 weeks",
        ],
        preventive_measures: &[
            "Regular soil testing (every 6 months)",
            "Crop rotation with legumes (fix nitrogen naturally)",
            "Add compost or manure before planting",
            "Use slow-release fertilizers for steady supply",
            "Maintain soil pH 6.0-7.0 for optimal nutrient uptake",
        ],
        guides: BTreeMap::from([
            (
                "fertilizer_guide",
                &[
                    "Urea (46-0-0): 50-100 kg per hectare or 5-10g per plant",
                    "NPK (20-20-20): 100-150 kg per hectare or 10-15g per plant",
                    "Organic compost: 2-3 kg per plant, mix into soil",
                    "Blood meal: 100-200g per plant, high nitrogen content",
                    "Fish emulsion: Dilute 1:10, apply as foliar spray weekly",
                ] as Steps,
            ),
            (
                "application_method",
                &[
                    "Broadcast method: Spread evenly around plant base",
                    "Side dressing: Apply 10-15cm away from stem",
                    "Foliar spray: For quick results, spray on leaves",
                    "Drip irrigation: Mix water-soluble fertilizer",
                    "Timing: Early morning or late evening, avoid hot sun",
                ] as Steps,
            ),
            (
                "recovery_timeline",
                &[
                    "Week 1: New growth shows improved color",
                    "Week 2: Older leaves may not recover (normal)",
                    "Week 3: Overall plant vigor improves",
                    "Week 4: Full recovery, normal growth rate",
                ] as Steps,
            ),
        ]),
        cost_estimate: Some(BTreeMap::from([
            ("chemical_fertilizer", "₹300-600 per application"),
            ("organic_options", "₹200-400 per application"),
            ("soil_test", "₹500-1000 one-time"),
        ])),
    }
}

fn pest_infestation() -> Diagnosis {
    // ---
    Diagnosis {
        name: "Pest Infestation",
        icon: "🐛",
        confidence: 79,
        severity: "Moderate",
        description: "Signs of insect damage detected. Holes in leaves and chewing marks visible. Likely aphids or caterpillars.",
        detailed_analysis: details(&[
            ("leaf_health", "Damaged - irregular holes and chewed edges".into()),
            ("growth_stage", "Active infestation - multiple leaves affected".into()),
            ("stress_indicators", "Visible insects, honeydew residue, curled leaves".into()),
            ("pest_type", "Likely aphids (small green insects) or caterpillars".into()),
            ("infestation_level", "Moderate - 20-40% of leaves affected".into()),
        ]),
        recommendations: &[
            "🔍 INSPECT: Check undersides of leaves for pests and eggs",
            "🚿 Spray with strong water jet to dislodge aphids",
            "🌿 Apply neem oil spray (10ml per liter water)",
            "🧼 Use insecticidal soap for soft-bodied insects",
            "✋ Hand-pick larger pests like caterpillars",
            "🐞 Introduce beneficial insects (ladybugs eat aphids)",
        ],
        preventive_measures: &[
            "Companion planting: Marigolds, basil repel pests",
            "Yellow sticky traps: Catch flying insects",
            "Row covers: Physical barrier against pests",
            "Regular inspection: Check plants 2-3 times weekly",
            "Remove weeds: Eliminate pest hiding places",
            "Encourage birds: Natural pest predators",
        ],
        guides: BTreeMap::from([
            (
                "natural_remedies",
                &[
                    "Neem oil spray: 10ml neem oil + 5ml liquid soap per liter water",
                    "Garlic spray: Crush 10 cloves in 1 liter water, strain, spray",
                    "Chili pepper spray: Blend 5 chilies in water, strain, spray",
                    "Soap water: 5ml dish soap per liter water",
                    "Tobacco water: Soak cigarette butts, strain (use carefully)",
                ] as Steps,
            ),
            (
                "chemical_options",
                &[
                    "Imidacloprid: Systemic insecticide, 0.5ml per liter",
                    "Malathion: Contact insecticide, 2ml per liter",
                    "Spinosad: Organic option, safe for beneficial insects",
                    "Pyrethrin: Natural insecticide from chrysanthemums",
                    "Note: Rotate pesticides to prevent resistance",
                ] as Steps,
            ),
            (
                "treatment_schedule",
                &[
                    "Day 1: Spray neem oil in evening",
                    "Day 3: Hand-pick visible pests, spray again",
                    "Day 5: Check for improvement, repeat if needed",
                    "Day 7: Apply different treatment if no improvement",
                    "Day 10: Assess results, continue monitoring",
                ] as Steps,
            ),
            (
                "beneficial_insects",
                &[
                    "🐞 Ladybugs: Eat aphids, mealybugs (50-100 per plant)",
                    "🦗 Praying mantis: Eat various insects",
                    "🕷️ Spiders: Natural pest control",
                    "🐝 Parasitic wasps: Attack caterpillars and aphids",
                    "💚 Green lacewings: Larvae eat aphids, mites",
                ] as Steps,
            ),
        ]),
        cost_estimate: Some(BTreeMap::from([
            ("neem_oil", "₹100-200 per bottle (multiple uses)"),
            ("insecticidal_soap", "₹150-300"),
            ("chemical_pesticide", "₹200-500 per treatment"),
            ("beneficial_insects", "₹500-1000 (one-time)"),
        ])),
    }
}

/// All four records, in catalog order.
pub fn catalog(s: &SensorSnapshot) -> [Diagnosis; 4] {
    [healthy(), early_blight(s), nutrient_deficiency(), pest_infestation()]
}

/// Pick one record uniformly at random.
pub fn diagnose<R: Rng + ?Sized>(s: &SensorSnapshot, rng: &mut R) -> Diagnosis {
    // ---
    let index = rng.gen_range(0..4);
    let [a, b, c, d] = catalog(s);
    match index {
        0 => a,
        1 => b,
        2 => c,
        _ => d,
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_is_fixed() {
        // ---
        let names: Vec<_> = catalog(&SensorSnapshot::default()).iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec!["Healthy Crop", "Early Blight", "Nutrient Deficiency", "Pest Infestation"]
        );
        let confidences: Vec<_> = catalog(&SensorSnapshot::default())
            .iter()
            .map(|d| d.confidence)
            .collect();
        assert_eq!(confidences, vec![95, 87, 82, 79]);
    }

    #[test]
    fn test_blight_quotes_current_readings() {
        // ---
        let s = SensorSnapshot {
            temperature: 29.5,
            humidity: 82.0,
            soil_moisture: 71.0,
            ..SensorSnapshot::default()
        };
        let blight = early_blight(&s);

        assert_eq!(
            blight.detailed_analysis["environmental_factors"],
            "Temp: 29.5°C, Humidity: 82% - Favorable for fungal development"
        );
        assert!(blight.detailed_analysis["soil_condition"].starts_with("Moisture: 71%"));
    }

    #[test]
    fn test_diagnose_draws_from_catalog() {
        // ---
        let s = SensorSnapshot::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let d = diagnose(&s, &mut rng);
            assert!(catalog(&s).contains(&d));
            seen.insert(d.name);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_optional_sections_on_the_wire() {
        // ---
        let healthy = serde_json::to_value(healthy()).unwrap();
        assert!(healthy.get("cost_estimate").is_none());
        assert_eq!(healthy["next_steps"].as_array().unwrap().len(), 4);

        let pest = serde_json::to_value(pest_infestation()).unwrap();
        assert!(pest["cost_estimate"]["neem_oil"].is_string());
        assert!(pest["beneficial_insects"].is_array());
    }
}
