//! Language and topic detection for farmer questions.

use serde::Serialize;

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Punjabi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Sensor,
    Health,
    Water,
    Fertilizer,
    Pest,
    Disease,
    Temperature,
    Soil,
    Weather,
    Planting,
    Harvest,
    General,
}

/// One topic rule. English keywords are matched against the lower-cased
/// message; Hindi and Punjabi keywords against the raw text.
struct TopicRule {
    topic: Topic,
    english: &'static [&'static str],
    hindi: &'static [&'static str],
    punjabi: &'static [&'static str],
}

/// Evaluated in order; first hit wins.
const RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Sensor,
        english: &["sensor", "reading", "current", "data", "show me"],
        hindi: &["सेंसर", "रीडिंग", "डेटा", "दिखाओ"],
        punjabi: &["ਸੈਂਸਰ", "ਰੀਡਿੰਗ", "ਡਾਟਾ", "ਦਿਖਾਓ"],
    },
    TopicRule {
        topic: Topic::Health,
        english: &["health", "crop", "plant", "growing", "condition"],
        hindi: &["स्वास्थ्य", "फसल", "पौधा", "सेहत"],
        punjabi: &["ਸਿਹਤ", "ਫਸਲ", "ਪੌਦਾ"],
    },
    TopicRule {
        topic: Topic::Water,
        english: &["water", "irrigat", "wet", "dry", "moisture", "pani"],
        hindi: &["पानी", "सिंचाई", "नमी", "गीला", "सूखा"],
        punjabi: &["ਪਾਣੀ", "ਸਿੰਚਾਈ", "ਨਮੀ", "ਗਿੱਲਾ", "ਸੁੱਕਾ"],
    },
    TopicRule {
        topic: Topic::Fertilizer,
        english: &["fertiliz", "nutrient", "npk", "feed", "manure", "khad"],
        hindi: &["खाद", "उर्वरक", "पोषक"],
        punjabi: &["ਖਾਦ", "ਉਰਵਰਕ", "ਪੋਸ਼ਕ"],
    },
    TopicRule {
        topic: Topic::Pest,
        english: &["pest", "insect", "bug", "aphid", "keeda", "keet"],
        hindi: &["कीट", "कीड़ा", "कीड़े"],
        punjabi: &["ਕੀੜਾ", "ਕੀਟ", "ਕੀੜੇ"],
    },
    TopicRule {
        topic: Topic::Disease,
        english: &["disease", "sick", "yellow", "spot", "fungus", "bimari", "rog"],
        hindi: &["बीमारी", "रोग", "पीला", "धब्बा"],
        punjabi: &["ਬਿਮਾਰੀ", "ਰੋਗ", "ਪੀਲਾ", "ਧੱਬਾ"],
    },
    TopicRule {
        topic: Topic::Temperature,
        english: &["hot", "cold", "temperature", "heat", "cool", "garmi", "thand"],
        hindi: &["गर्मी", "ठंड", "तापमान"],
        punjabi: &["ਗਰਮੀ", "ਠੰਡ", "ਤਾਪਮਾਨ"],
    },
    TopicRule {
        topic: Topic::Soil,
        english: &["soil", "dirt", "ground", "earth", "mitti", "zameen"],
        hindi: &["मिट्टी", "जमीन", "भूमि"],
        punjabi: &["ਮਿੱਟੀ", "ਜ਼ਮੀਨ", "ਧਰਤੀ"],
    },
    TopicRule {
        topic: Topic::Weather,
        english: &["weather", "rain", "sun", "wind", "mausam", "barish"],
        hindi: &["मौसम", "बारिश", "धूप", "हवा"],
        punjabi: &["ਮੌਸਮ", "ਮੀਂਹ", "ਧੁੱਪ", "ਹਵਾ"],
    },
    TopicRule {
        topic: Topic::Planting,
        english: &["plant", "seed", "sow", "grow", "beej", "bona"],
        hindi: &["बीज", "बोना", "लगाना", "उगाना"],
        punjabi: &["ਬੀਜ", "ਬੀਜਣਾ", "ਲਾਉਣਾ", "ਉਗਾਉਣਾ"],
    },
    TopicRule {
        topic: Topic::Harvest,
        english: &["harvest", "pick", "collect", "ready", "ripe", "kaatna", "fasal"],
        hindi: &["कटाई", "काटना", "तोड़ना", "पकना"],
        punjabi: &["ਵਾਢੀ", "ਕੱਟਣਾ", "ਤੋੜਨਾ", "ਪੱਕਣਾ"],
    },
];

// ---

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Punjabi => "punjabi",
        }
    }
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Sensor => "sensor",
            Topic::Health => "health",
            Topic::Water => "water",
            Topic::Fertilizer => "fertilizer",
            Topic::Pest => "pest",
            Topic::Disease => "disease",
            Topic::Temperature => "temperature",
            Topic::Soil => "soil",
            Topic::Weather => "weather",
            Topic::Planting => "planting",
            Topic::Harvest => "harvest",
            Topic::General => "general",
        }
    }
}

/// Script-based detection: Devanagari beats Gurmukhi beats English.
pub fn detect_language(text: &str) -> Language {
    // ---
    let devanagari = |c: char| ('\u{0900}'..='\u{097F}').contains(&c);
    let gurmukhi = |c: char| ('\u{0A00}'..='\u{0A7F}').contains(&c);

    if text.chars().any(devanagari) {
        Language::Hindi
    } else if text.chars().any(gurmukhi) {
        Language::Punjabi
    } else {
        Language::English
    }
}

pub fn detect_topic(text: &str) -> Topic {
    // ---
    let lowered = text.to_lowercase();

    RULES
        .iter()
        .find(|rule| {
            rule.english.iter().any(|kw| lowered.contains(kw))
                || rule.hindi.iter().any(|kw| text.contains(kw))
                || rule.punjabi.iter().any(|kw| text.contains(kw))
        })
        .map_or(Topic::General, |rule| rule.topic)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_language_by_script() {
        // ---
        assert_eq!(detect_language("How is my crop?"), Language::English);
        assert_eq!(detect_language("मेरी फसल कैसी है?"), Language::Hindi);
        assert_eq!(detect_language("ਮੇਰੀ ਫਸਲ ਕਿਵੇਂ ਹੈ?"), Language::Punjabi);
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn test_devanagari_wins_over_gurmukhi() {
        // ---
        assert_eq!(detect_language("ਪਾਣੀ और पानी"), Language::Hindi);
    }

    #[test]
    fn test_topic_keywords_in_each_script() {
        // ---
        assert_eq!(detect_topic("When should I IRRIGATE?"), Topic::Water);
        assert_eq!(detect_topic("पानी कब दें?"), Topic::Water);
        assert_eq!(detect_topic("ਖਾਦ ਕਿਹੜੀ ਪਾਵਾਂ?"), Topic::Fertilizer);
        assert_eq!(detect_topic("aphids on leaves"), Topic::Pest);
        assert_eq!(detect_topic("hello there"), Topic::General);
    }

    #[test]
    fn test_rule_order_breaks_ties() {
        // ---
        // "plant" appears in both health and planting; health comes first.
        assert_eq!(detect_topic("when to plant seeds"), Topic::Health);
        // sensor outranks water.
        assert_eq!(detect_topic("show me water data"), Topic::Sensor);
        // "sow" alone reaches planting.
        assert_eq!(detect_topic("when to sow seeds"), Topic::Planting);
        // "wheat" hides "heat", so temperature wins before planting.
        assert_eq!(detect_topic("when to sow wheat"), Topic::Temperature);
    }

    #[test]
    fn test_english_matching_is_substring() {
        // ---
        // "dry" inside "laundry" still selects water.
        assert_eq!(detect_topic("laundry"), Topic::Water);
    }

    #[test]
    fn test_wire_names() {
        // ---
        assert_eq!(Language::Punjabi.as_str(), "punjabi");
        assert_eq!(Topic::General.as_str(), "general");
        assert_eq!(
            serde_json::to_value(Topic::Harvest).unwrap(),
            serde_json::json!("harvest")
        );
    }
}
