//! Static advice catalogs used by the offline responder.
//!
//! Authored in English; the responder wraps them with localized titles and
//! labels. Everything here is `'static` data, so topics rendered purely
//! from a guide are idempotent.

// ---

/// A headed block of lines.
pub struct Section {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

pub type Guide = &'static [Section];

/// Append a guide to `out`, one blank line between sections.
pub fn render(out: &mut String, guide: Guide) {
    // ---
    for (i, section) in guide.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !section.heading.is_empty() {
            out.push_str(section.heading);
            out.push('\n');
        }
        for line in section.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
}

// --- crop health narrative

pub const HEALTH_THRIVING: &[&str] = &[
    "✓ Optimal environmental conditions",
    "✓ Good water and nutrient availability",
    "✓ Low stress factors",
    "✓ Healthy root development",
    "✓ Strong disease resistance",
];

pub const HEALTH_KEEP_DOING: &[&str] = &[
    "• Regular monitoring (2-3 times weekly)",
    "• Consistent watering schedule",
    "• Weekly pest inspections",
    "• Balanced fertilizer application",
    "• Remove dead/yellowing leaves",
    "• Maintain good air circulation",
];

pub const HEALTH_OUTCOMES: &[&str] = &[
    "• Vigorous growth",
    "• High yield potential",
    "• Good fruit/flower quality",
    "• Strong pest resistance",
];

pub const HEALTH_RECOVERY_PLAN: &[&str] = &[
    "• Day 1-2: Address immediate issues",
    "• Day 3-5: Monitor improvements",
    "• Day 6-7: Adjust care routine",
    "• Week 2: Reassess health score",
];

pub const HEALTH_EMERGENCY_CARE: &[&str] = &[
    "• Check plants every 4-6 hours",
    "• Document changes with photos",
    "• Be prepared to take drastic measures",
    "• Consider consulting agricultural expert",
    "• Remove severely damaged plants",
];

// --- irrigation

pub const WATER_URGENT: Guide = &[
    Section {
        heading: "**IMMEDIATE WATERING PROTOCOL:**",
        lines: &[
            "💧 Amount: 20-25mm (2-2.5 liters per sq meter)",
            "⏰ Time: NOW - Early morning (6-8 AM) is best",
            "⏱️ Duration: 15-20 minutes deep watering",
            "🔄 Method: Drip irrigation or soil-level watering",
            "📍 Focus: Root zone, avoid leaves",
        ],
    },
    Section {
        heading: "**After watering:**",
        lines: &[
            "• Check soil moisture in 6 hours",
            "• Apply mulch (5-7cm thick)",
            "• Monitor for wilting recovery",
            "• Adjust schedule based on response",
        ],
    },
    Section {
        heading: "**Next 3 days:**",
        lines: &[
            "• Day 1: Water deeply (done)",
            "• Day 2: Check moisture, water if below 40%",
            "• Day 3: Establish regular schedule",
        ],
    },
];

pub const WATER_SCHEDULE: Guide = &[
    Section {
        heading: "**WATERING SCHEDULE:**",
        lines: &[
            "💧 Amount: 15-20mm (1.5-2 liters per sq meter)",
            "⏰ Best time: Early morning (6-8 AM)",
            "⏱️ Duration: 10-15 minutes",
            "🔄 Method: Drip or soil-level watering",
        ],
    },
    Section {
        heading: "**Watering tips:**",
        lines: &[
            "• Water slowly for deep penetration",
            "• Avoid overhead watering (disease risk)",
            "• Water at soil level, not on leaves",
            "• Use mulch to retain moisture",
            "• Check soil 10cm deep before watering",
        ],
    },
];

pub const WATER_MAINTENANCE_TAIL: Guide = &[
    Section {
        heading: "**Monitoring:**",
        lines: &[
            "• Check soil moisture daily",
            "• Water when moisture drops below 50%",
            "• Adjust based on weather changes",
            "• Increase frequency in hot weather",
            "• Reduce frequency in cool/rainy weather",
        ],
    },
    Section {
        heading: "**Signs you need to water:**",
        lines: &[
            "• Soil feels dry 5-10cm deep",
            "• Leaves start to droop slightly",
            "• Soil pulls away from pot edges",
            "• Lighter soil color",
        ],
    },
];

pub const WATER_QUALITY_TIPS: Guide = &[Section {
    heading: "**Water quality tips:**",
    lines: &[
        "• Use room temperature water",
        "• Let tap water sit 24hrs (chlorine evaporation)",
        "• Rainwater is best (if available)",
        "• Avoid hard water (high minerals)",
        "• pH should be 6.0-7.0",
    ],
}];

// --- temperature

pub const TEMP_EXTREME_HEAT: Guide = &[
    Section {
        heading: "🔥 **EXTREME HEAT - EMERGENCY MEASURES:**",
        lines: &[],
    },
    Section {
        heading: "**Immediate actions (next 2 hours):**",
        lines: &[
            "1. Provide shade immediately - use cloth/net (50% shade)",
            "2. Water deeply - soil level, avoid leaves",
            "3. Mist leaves lightly (not in direct sun)",
            "4. Move potted plants to shade",
            "5. Apply thick mulch (7-10cm) around plants",
        ],
    },
    Section {
        heading: "**Daily care during heat wave:**",
        lines: &[
            "• Water twice daily (early morning + evening)",
            "• Mist leaves 2-3 times (avoid midday)",
            "• Check soil moisture every 4-6 hours",
            "• Avoid fertilizing (stresses plants)",
            "• Postpone pruning/transplanting",
        ],
    },
    Section {
        heading: "**Signs of heat stress:**",
        lines: &[
            "⚠️ Wilting during day (recovers at night)",
            "⚠️ Leaf edges turning brown/crispy",
            "⚠️ Flowers dropping",
            "⚠️ Fruit sunscald (white/brown patches)",
        ],
    },
    Section {
        heading: "**Recovery:** 3-7 days after temperature normalizes",
        lines: &[],
    },
];

pub const TEMP_HIGH: Guide = &[
    Section {
        heading: "🔥 **HIGH TEMPERATURE - PROTECTIVE MEASURES:**",
        lines: &[],
    },
    Section {
        heading: "**Actions needed:**",
        lines: &[
            "• Increase watering frequency by 30-50%",
            "• Water early morning (6-7 AM) and evening (6-7 PM)",
            "• Apply mulch 5-7cm thick",
            "• Provide afternoon shade (2-6 PM)",
            "• Mist leaves in evening",
        ],
    },
    Section {
        heading: "**Heat-tolerant crops:**",
        lines: &[
            "✓ Okra, eggplant, peppers, tomatoes",
            "✓ Melons, squash, beans",
            "✓ Amaranth, basil, mint",
        ],
    },
];

pub const TEMP_EXTREME_COLD: Guide = &[
    Section {
        heading: "❄️ **EXTREME COLD - EMERGENCY PROTECTION:**",
        lines: &[],
    },
    Section {
        heading: "**Immediate actions (before nightfall):**",
        lines: &[
            "1. Cover plants with plastic/cloth (don't touch leaves)",
            "2. Use row covers, cloches, or tunnels",
            "3. Mulch heavily around base (10-15cm)",
            "4. Move potted plants indoors/sheltered area",
            "5. Water in morning (wet soil holds heat)",
        ],
    },
    Section {
        heading: "**Cold weather care:**",
        lines: &[
            "• Reduce watering by 50%",
            "• Water only in morning (10-11 AM)",
            "• Stop fertilizing until warm weather",
            "• Don't disturb frozen plants",
        ],
    },
    Section {
        heading: "**Signs of cold damage:**",
        lines: &[
            "⚠️ Blackened, mushy leaves",
            "⚠️ Wilting (despite moist soil)",
            "⚠️ Stem splitting/cracking",
        ],
    },
    Section {
        heading: "**Recovery:** 2-4 weeks, prune damage in spring",
        lines: &[],
    },
];

pub const TEMP_COOL: Guide = &[
    Section {
        heading: "❄️ **COOL TEMPERATURE - PROTECTIVE CARE:**",
        lines: &[],
    },
    Section {
        heading: "**Actions needed:**",
        lines: &[
            "• Use row covers at night",
            "• Reduce watering by 20-30%",
            "• Water in morning only (10 AM-12 PM)",
            "• Apply mulch 5-7cm thick",
            "• Reduce fertilizer application",
        ],
    },
    Section {
        heading: "**Cold-tolerant crops:**",
        lines: &[
            "✓ Lettuce, spinach, kale, cabbage",
            "✓ Peas, broad beans, carrots",
            "✓ Broccoli, cauliflower, radish",
        ],
    },
];

pub const TEMP_OPTIMAL: Guide = &[
    Section {
        heading: "**Why this is perfect:**",
        lines: &[
            "• Maximum photosynthesis rate",
            "• Optimal enzyme activity",
            "• Best nutrient uptake",
            "• Strong root development",
            "• Low disease pressure",
        ],
    },
    Section {
        heading: "**Maintain optimal conditions:**",
        lines: &[
            "• Continue current care routine",
            "• Monitor daily temperature changes",
            "• Keep shade materials ready",
            "• Keep row covers available",
        ],
    },
];

pub const TEMP_MONITORING: Guide = &[Section {
    heading: "**Temperature monitoring tips:**",
    lines: &[
        "• Check temperature 3 times daily (morning, noon, evening)",
        "• Use min-max thermometer (₹200-500)",
        "• Record daily temperatures",
        "• Watch weather forecasts",
        "• Be prepared for sudden changes",
    ],
}];

// --- soil

pub const SOIL: Guide = &[
    Section {
        heading: "**1. pH LEVEL (Most Important)**",
        lines: &[
            "   • Optimal range: 6.0-7.0 (slightly acidic to neutral)",
            "   • Testing: Use pH meter (₹200-500) or test kit (₹100-200)",
            "   • Too low (< 6.0): Add agricultural lime 200-500g per sq meter",
            "   • Too high (> 7.0): Add sulfur 50-100g per sq meter",
        ],
    },
    Section {
        heading: "**2. ORGANIC MATTER (Soil Food)**",
        lines: &[
            "   • Target: 5-10% organic content",
            "   • Compost: 3-5 kg per sq meter annually",
            "   • Vermicompost: 2-3 kg per sq meter",
            "   • Green manure: Grow legumes, till into soil",
        ],
    },
    Section {
        heading: "**3. SOIL TEXTURE & STRUCTURE**",
        lines: &[
            "   • Sandy (drains too fast): Add compost, mulch heavily",
            "   • Clay (drains too slow): Add sand and gypsum, raise beds",
            "   • Loamy (balanced): Add compost annually - this is ideal soil!",
        ],
    },
    Section {
        heading: "**4. DRAINAGE TEST**",
        lines: &[
            "   • Dig hole 30cm deep, fill with water twice, time the second drain",
            "   • 1-2 hours: Perfect drainage",
            "   • < 1 hour: Too fast (sandy) - add compost",
            "   • > 4 hours: Too slow (clay) - add sand, raise beds",
        ],
    },
    Section {
        heading: "**5. CROP ROTATION**",
        lines: &[
            "   • Don't plant same family in same spot",
            "   • Cycle: 3-4 year rotation",
            "   Year 1: Tomatoes (heavy feeders)",
            "   Year 2: Beans (nitrogen fixers)",
            "   Year 3: Carrots (light feeders)",
        ],
    },
    Section {
        heading: "**SOIL IMPROVEMENT TIMELINE:**",
        lines: &[
            "Week 1: Test soil, identify issues",
            "Week 2: Add amendments (lime, sulfur, compost)",
            "Week 3-4: Let amendments work, till lightly",
            "Week 5: Retest pH, plant if optimal",
            "Ongoing: Add compost, mulch, monitor",
        ],
    },
];

// --- weather

pub const WEATHER: Guide = &[
    Section {
        heading: "**1. DAILY WEATHER MONITORING**",
        lines: &[
            "   • Check forecast: Morning and evening",
            "   • Monitor: Temperature, rainfall, wind, humidity",
            "   • Apps: IMD Weather, Mausam, Weather Underground",
        ],
    },
    Section {
        heading: "**2. SEASONAL FARMING CALENDAR:**",
        lines: &[
            "   **SUMMER (March-May)** 30-40°C: Water 2x daily, shade 30-50%, mulch 7-10cm",
            "   • Best crops: Okra, eggplant, peppers, melons, cucumbers",
            "   **MONSOON (June-September)** 25-35°C: Improve drainage, preventive fungicide",
            "   • Best crops: Rice, maize, millets, gourds",
            "   **POST-MONSOON (October-November)** 20-30°C: Clean debris, pest control",
            "   • Best crops: Tomatoes, cauliflower, cabbage, peas",
            "   **WINTER (December-February)** 10-25°C: Frost covers, reduce watering 50%",
            "   • Best crops: Lettuce, spinach, carrots, radish, peas",
        ],
    },
    Section {
        heading: "**3. WEATHER EVENT PREPARATION:**",
        lines: &[
            "   • Before heavy rain: Harvest ripe produce, stake plants, clear drainage",
            "   • Before heatwave: Water deeply, install shade cloth, thick mulch",
            "   • Before frost: Cover plants before sunset, water in morning",
            "   • Before strong winds: Stake securely, secure row covers",
        ],
    },
    Section {
        heading: "**WEATHER WISDOM:**",
        lines: &[
            "• \"Plant by the weather, not the calendar\"",
            "• Monitor local weather patterns",
            "• Learn from experienced local farmers",
        ],
    },
];

// --- fertilizer

pub const FERTILIZER: Guide = &[
    Section {
        heading: "**RECOMMENDED FERTILIZERS:**",
        lines: &[
            "**1. Balanced NPK (10-10-10 or 20-20-20)**",
            "   • Best for: General purpose, all crops",
            "   • Amount: 50-100 kg per hectare OR 5-10g per plant",
            "   • Frequency: Every 4-6 weeks",
            "**2. Nitrogen-Rich (Urea 46-0-0)**",
            "   • Best for: Leafy vegetables, vegetative growth",
            "   • Amount: 50-75 kg per hectare OR 5-7g per plant",
            "   • Warning: Don't over-apply (causes burning)",
            "**3. Phosphorus-Rich (DAP 18-46-0)**",
            "   • Best for: Root development, flowering",
            "   • Amount: 40-60 kg per hectare OR 4-6g per plant",
            "**4. Potassium-Rich (MOP 0-0-60)**",
            "   • Best for: Fruit development, disease resistance",
            "   • Amount: 30-50 kg per hectare OR 3-5g per plant",
        ],
    },
    Section {
        heading: "**ORGANIC OPTIONS:**",
        lines: &[
            "• Compost: 2-3 kg per plant, every 2-3 months",
            "• Vermicompost: 1-2 kg per plant, every 6-8 weeks",
            "• Cow Manure: 3-5 kg per plant (well-rotted), once per season",
        ],
    },
    Section {
        heading: "**APPLICATION METHOD:**",
        lines: &[
            "1. **Broadcasting:** Spread evenly around plant base",
            "2. **Side Dressing:** Apply 10-15cm away from stem",
            "3. **Foliar Spray:** Dilute and spray on leaves (quick results)",
            "4. **Drip Irrigation:** Mix water-soluble fertilizer",
        ],
    },
    Section {
        heading: "**IMPORTANT TIPS:**",
        lines: &[
            "✓ Always water after fertilizer application",
            "✓ Apply to moist soil (never dry soil)",
            "✓ Use split doses (half now, half after 2 weeks)",
            "✗ Don't over-fertilize (causes toxicity)",
            "✗ Don't apply to stressed plants",
        ],
    },
    Section {
        heading: "**SIGNS OF DEFICIENCY:**",
        lines: &[
            "• Nitrogen: Yellow older leaves, slow growth",
            "• Phosphorus: Purple leaves, poor root growth",
            "• Potassium: Brown leaf edges, weak stems",
            "• Magnesium: Yellow between leaf veins",
        ],
    },
];

// --- pests

pub const PEST: Guide = &[
    Section {
        heading: "**COMMON PESTS & IDENTIFICATION:**",
        lines: &[
            "**1. 🦗 Aphids (Chepti/ਚੇਪੀ)** - small green/black insects under leaves; curled leaves, honeydew",
            "**2. 🐛 Caterpillars (Suundi/ਸੂੰਡੀ)** - green/brown worms; large holes in leaves and fruits",
            "**3. 🦟 Whiteflies (Safed Makhi/ਸਫੇਦ ਮੱਖੀ)** - tiny white fliers; yellow leaves, virus spread",
            "**4. 🕷️ Spider Mites (Laal Makdi/ਲਾਲ ਮੱਕੜੀ)** - red dots, fine webbing; stippled leaves",
        ],
    },
    Section {
        heading: "**NATURAL CONTROL METHODS:**",
        lines: &[
            "**1. Neem Oil Spray (Most Effective)**",
            "   Recipe: 10ml neem oil + 5ml liquid soap + 1 liter water",
            "   • Spray every 7-10 days in the evening, especially leaf undersides",
            "**2. Garlic-Chili Spray**",
            "   Recipe: 10 garlic cloves + 5 chilies + 1 liter water, blend and strain",
            "**3. Soap Water Spray**",
            "   Recipe: 5ml dish soap + 1 liter water, every 3-5 days",
            "**4. Manual Removal** - hand-pick in early morning, drop in soapy water",
        ],
    },
    Section {
        heading: "**CHEMICAL OPTIONS (If Natural Methods Fail):**",
        lines: &[
            "• Imidacloprid: 0.5ml per liter, harvest wait 7-14 days",
            "• Malathion: 2ml per liter, harvest wait 7 days",
            "• Spinosad (organic-approved): as per label, harvest wait 1-3 days",
        ],
    },
    Section {
        heading: "**PREVENTION STRATEGIES:**",
        lines: &[
            "✓ Inspect plants 2-3 times weekly",
            "✓ Use yellow sticky traps (₹50-100 per trap)",
            "✓ Companion planting (marigolds, basil repel pests)",
            "✓ Rotate crops annually",
            "✓ Encourage ladybugs and birds (natural predators)",
        ],
    },
    Section {
        heading: "**TREATMENT SCHEDULE:**",
        lines: &[
            "Day 1: Identify pest, apply first treatment",
            "Day 3: Check for improvement, hand-pick remaining pests",
            "Day 5: Second treatment application",
            "Day 7: Assess results, continue if needed",
            "Day 14: Final assessment, switch method if no improvement",
        ],
    },
];

// --- disease

pub const DISEASE: Guide = &[
    Section {
        heading: "**1. FUNGAL DISEASES (Most Common - 70% of diseases)**",
        lines: &[
            "**A. Early Blight** - dark spots with concentric rings; copper fungicide",
            "**B. Powdery Mildew** - white powdery coating; sulfur spray, baking soda",
            "**C. Downy Mildew** - yellow patches, gray fuzz underneath; copper, drainage",
            "**D. Root Rot** - wilting, soft brown roots; improve drainage, water less",
        ],
    },
    Section {
        heading: "**2. BACTERIAL DISEASES (15% of diseases)**",
        lines: &[
            "**A. Bacterial Wilt** - sudden wilting; remove infected plants immediately",
            "**B. Bacterial Leaf Spot** - dark spots with yellow halos; copper spray",
        ],
    },
    Section {
        heading: "**3. VIRAL DISEASES (10% of diseases)**",
        lines: &[
            "**A. Mosaic Virus** - mottled yellow-green leaves; NO CURE, control aphids",
            "**B. Leaf Curl Virus** - curled leaves, stunting; NO CURE, control whiteflies",
        ],
    },
    Section {
        heading: "**Natural Remedies:**",
        lines: &[
            "1. Baking Soda Spray: 5g baking soda + 5ml oil + 1L water",
            "2. Milk Spray: 1 part milk + 9 parts water (powdery mildew)",
            "3. Neem Oil: 10ml + 5ml soap + 1L water",
        ],
    },
    Section {
        heading: "**WHEN TO TAKE ACTION:**",
        lines: &[
            "🟢 Early stage (few spots): Natural remedies, remove affected parts",
            "🟡 Moderate (spreading): Fungicide treatment, increase frequency",
            "🔴 Severe (widespread): Systemic fungicide, consider removing plant",
            "⚫ Critical (entire plant): Remove and destroy, don't compost",
        ],
    },
];

// --- planting

pub const PLANTING: Guide = &[
    Section {
        heading: "📅 **1. PLANTING CALENDAR (Month-wise)**",
        lines: &[
            "• January-February: Tomato, Brinjal, Chilli, Cabbage, Cauliflower",
            "• March-April: Cucumber, Bottle Gourd, Ridge Gourd, Pumpkin, Watermelon",
            "• May-June: Okra, Bitter Gourd, Sponge Gourd, Cowpea",
            "• July-August: Radish, Carrot, Beans, Peas, Spinach",
            "• September-October: Onion, Garlic, Coriander, Fenugreek",
            "• November-December: Potato, Peas, Broad Beans, Lettuce",
        ],
    },
    Section {
        heading: "🌾 **2. SEED PREPARATION**",
        lines: &[
            "• Choose certified, disease-free seeds",
            "• Soak 6-12 hours (beans, peas, corn)",
            "• Mix 2g Thiram per kg seeds against fungal disease",
            "• Germination test: 80 of 100 seeds sprouting means good seed",
        ],
    },
    Section {
        heading: "📏 **3. PLANTING SPECIFICATIONS**",
        lines: &[
            "• Tomato: Depth 1-2cm, Spacing 60×45cm",
            "• Cucumber: Depth 2-3cm, Spacing 100×60cm",
            "• Okra: Depth 2-3cm, Spacing 45×30cm",
            "• Onion: Depth 2cm, Spacing 15×10cm",
            "• Potato: Depth 5-7cm, Spacing 60×20cm",
        ],
    },
    Section {
        heading: "🤝 **4. COMPANION PLANTING**",
        lines: &[
            "• Tomato + Basil: Basil repels aphids and whiteflies",
            "• Carrot + Onion: Onion repels carrot fly",
            "• Cabbage + Marigold: Marigold repels cabbage worms",
            "• Avoid Tomato + Potato: Share same diseases",
        ],
    },
    Section {
        heading: "🌡️ **5. OPTIMAL CONDITIONS**",
        lines: &[
            "• Temperature: 20-30°C for most vegetables",
            "• Soil Moisture: 60-70% field capacity",
            "• Sunlight: 6-8 hours direct sunlight daily",
            "• Humidity: 50-70% for best germination",
        ],
    },
    Section {
        heading: "📞 **Need Help?** Ask me about specific crops, soil types, or planting problems!",
        lines: &[],
    },
];

// --- harvest

pub const HARVEST: Guide = &[
    Section {
        heading: "⏰ **1. HARVEST TIMING (Crop-wise)**",
        lines: &[
            "• Tomato: 60-80 days, when fruits turn red/pink",
            "• Cabbage: 70-90 days, when heads are firm and compact",
            "• Okra: 45-60 days, when pods are 7-10cm long",
            "• Onion: 120-150 days, when tops fall over and dry",
            "• Potato: 90-120 days, when foliage turns yellow",
        ],
    },
    Section {
        heading: "🌅 **2. BEST TIME OF DAY**",
        lines: &[
            "• Morning (6-9 AM): Leafy vegetables, maximum moisture",
            "• Evening (4-6 PM): Fruits, maximum sugar content",
            "• Avoid: Mid-day (11 AM-3 PM) and right after rain",
        ],
    },
    Section {
        heading: "✂️ **3. HARVESTING TECHNIQUES**",
        lines: &[
            "• Hand picking: Tomato, Chilli, Okra, Beans - twist gently",
            "• Cutting: Cabbage, Cauliflower - sharp clean knife",
            "• Pulling: Radish, Carrot, Onion - loosen soil first",
            "• Digging: Potato, Ginger - fork 15cm away from plant",
        ],
    },
    Section {
        heading: "🧊 **4. STORAGE METHODS**",
        lines: &[
            "• Cool (0-5°C): Leafy vegetables 3-7 days, cabbage 2-3 weeks",
            "• Room (15-25°C): Ripe tomato 3-5 days, cucumber 5-7 days",
            "• Cured: Onion 4-6 months, garlic 6-8 months, potato 3-4 months",
        ],
    },
    Section {
        heading: "🔬 **5. FOOD SAFETY**",
        lines: &[
            "• Harvest at least 7 days after pesticide spray",
            "• Use clean containers and tools",
            "• Follow pre-harvest interval (PHI) for chemicals",
        ],
    },
    Section {
        heading: "📞 **Need Help?** Ask me about specific crop harvesting, storage problems, or market preparation!",
        lines: &[],
    },
];

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_render_separates_sections() {
        // ---
        const GUIDE: Guide = &[
            Section {
                heading: "**A**",
                lines: &["• one", "• two"],
            },
            Section {
                heading: "**B**",
                lines: &["• three"],
            },
        ];
        let mut out = String::new();
        render(&mut out, GUIDE);

        assert_eq!(out, "**A**\n• one\n• two\n\n**B**\n• three\n");
    }

    #[test]
    fn test_catalogs_are_not_empty() {
        // ---
        for guide in [FERTILIZER, PEST, DISEASE, PLANTING, HARVEST, SOIL, WEATHER] {
            assert!(guide.len() >= 3);
            assert!(guide.iter().any(|s| !s.lines.is_empty()));
        }
    }
}
