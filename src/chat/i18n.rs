//! Translation tables for the offline responder.
//!
//! One closed `Term` enum, one exhaustive `match` per language. Adding a
//! term without translating it everywhere does not compile.

use super::detect::Language;

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    // Section titles
    SensorTitle,
    HealthTitle,
    WaterTitle,
    FertilizerTitle,
    PestTitle,
    DiseaseTitle,
    TempTitle,
    SoilTitle,
    WeatherTitle,
    PlantingTitle,
    HarvestTitle,
    GeneralTitle,

    // Metric labels
    Temperature,
    Humidity,
    AirQuality,
    SoilMoisture,
    WaterQuality,

    // Status words
    Optimal,
    Good,
    Excellent,
    Poor,
    Low,
    High,
    TooHigh,
    TooLow,
    Perfect,
    Pure,

    // Headlines
    ExcellentCondition,
    NeedAttention,
    ImmediateCare,
    CurrentStatus,
    Urgent,
    WaterNow,
    WaterWithinHours,

    // Summary and health narrative
    OverallAssessment,
    AllOptimal,
    ContinuePractices,
    AttentionNeeded,
    TakeCorrectiveActions,
    WhyThriving,
    KeepDoing,
    ExpectedOutcomes,
    IssuesDetected,
    ImmediateActions,
    RecoveryPlan,
    ExpectedRecovery,
    CriticalIssues,
    UrgentActions,
    EmergencyCare,
    CropLossWarning,

    // Shared block headings
    Current,
    OptimalRange,
    EnvironmentalFactors,
    Capabilities,
    AskAnyLanguage,
}

impl Term {
    // ---
    pub const ALL: [Term; 55] = [
        Term::SensorTitle,
        Term::HealthTitle,
        Term::WaterTitle,
        Term::FertilizerTitle,
        Term::PestTitle,
        Term::DiseaseTitle,
        Term::TempTitle,
        Term::SoilTitle,
        Term::WeatherTitle,
        Term::PlantingTitle,
        Term::HarvestTitle,
        Term::GeneralTitle,
        Term::Temperature,
        Term::Humidity,
        Term::AirQuality,
        Term::SoilMoisture,
        Term::WaterQuality,
        Term::Optimal,
        Term::Good,
        Term::Excellent,
        Term::Poor,
        Term::Low,
        Term::High,
        Term::TooHigh,
        Term::TooLow,
        Term::Perfect,
        Term::Pure,
        Term::ExcellentCondition,
        Term::NeedAttention,
        Term::ImmediateCare,
        Term::CurrentStatus,
        Term::Urgent,
        Term::WaterNow,
        Term::WaterWithinHours,
        Term::OverallAssessment,
        Term::AllOptimal,
        Term::ContinuePractices,
        Term::AttentionNeeded,
        Term::TakeCorrectiveActions,
        Term::WhyThriving,
        Term::KeepDoing,
        Term::ExpectedOutcomes,
        Term::IssuesDetected,
        Term::ImmediateActions,
        Term::RecoveryPlan,
        Term::ExpectedRecovery,
        Term::CriticalIssues,
        Term::UrgentActions,
        Term::EmergencyCare,
        Term::CropLossWarning,
        Term::Current,
        Term::OptimalRange,
        Term::EnvironmentalFactors,
        Term::Capabilities,
        Term::AskAnyLanguage,
    ];

    pub fn text(self, lang: Language) -> &'static str {
        match lang {
            Language::English => english(self),
            Language::Hindi => hindi(self),
            Language::Punjabi => punjabi(self),
        }
    }
}

fn english(term: Term) -> &'static str {
    // ---
    match term {
        Term::SensorTitle => "📊 **Current Sensor Readings:**",
        Term::HealthTitle => "🌱 **Crop Health Score:",
        Term::WaterTitle => "💧 **Irrigation Advice:**",
        Term::FertilizerTitle => "🌿 **Fertilizer Recommendation:**",
        Term::PestTitle => "🐛 **Pest Control Guide:**",
        Term::DiseaseTitle => "🔬 **Plant Disease Guide:**",
        Term::TempTitle => "🌡️ **Temperature Management:**",
        Term::SoilTitle => "🌍 **Soil Management:**",
        Term::WeatherTitle => "🌤️ **Weather-Based Farming:**",
        Term::PlantingTitle => "🌱 **Planting Guide:**",
        Term::HarvestTitle => "🌾 **Harvesting Guide:**",
        Term::GeneralTitle => "🌾 **Farming Assistant:**",

        Term::Temperature => "Temperature",
        Term::Humidity => "Humidity",
        Term::AirQuality => "Air Quality",
        Term::SoilMoisture => "Soil Moisture",
        Term::WaterQuality => "Water Quality",

        Term::Optimal => "Optimal",
        Term::Good => "Good",
        Term::Excellent => "Excellent",
        Term::Poor => "Poor",
        Term::Low => "Low",
        Term::High => "High",
        Term::TooHigh => "Too high",
        Term::TooLow => "Too low",
        Term::Perfect => "Perfect",
        Term::Pure => "Pure",

        Term::ExcellentCondition => "✅ Your crops are in excellent condition!",
        Term::NeedAttention => "⚠️ Your crops are doing okay but need attention.",
        Term::ImmediateCare => "🚨 Your crops need immediate care!",
        Term::CurrentStatus => "**Current Status:**",
        Term::Urgent => "🚨 **URGENT:**",
        Term::WaterNow => "Water NOW!",
        Term::WaterWithinHours => "Water within 4-6 hours",

        Term::OverallAssessment => "📊 **Overall Assessment:**",
        Term::AllOptimal => "✅ All parameters are optimal! Your crops are in excellent condition.",
        Term::ContinuePractices => "Continue current management practices.",
        Term::AttentionNeeded => "⚠️ Attention needed:",
        Term::TakeCorrectiveActions => "Take corrective actions as recommended above.",
        Term::WhyThriving => "**Why your crops are thriving:**",
        Term::KeepDoing => "**Keep doing:**",
        Term::ExpectedOutcomes => "**Expected outcomes:**",
        Term::IssuesDetected => "**Issues detected:**",
        Term::ImmediateActions => "**Immediate actions:**",
        Term::RecoveryPlan => "**Recovery plan:**",
        Term::ExpectedRecovery => "**Expected recovery:** 7-14 days with proper care",
        Term::CriticalIssues => "**Critical issues:**",
        Term::UrgentActions => "🚨 **URGENT ACTIONS REQUIRED:**",
        Term::EmergencyCare => "**Emergency care:**",
        Term::CropLossWarning => "**Warning:** Without immediate action, crop loss is likely!",

        Term::Current => "**Current:**",
        Term::OptimalRange => "**Optimal range:**",
        Term::EnvironmentalFactors => "**Environmental factors:**",
        Term::Capabilities => {
            "I can help with: Watering, Fertilizers, Pests, Diseases, Temperature, Soil, \
             Weather, Planting, Harvesting"
        }
        Term::AskAnyLanguage => "Ask in English, Hindi, or Punjabi!",
    }
}

fn hindi(term: Term) -> &'static str {
    // ---
    match term {
        Term::SensorTitle => "📊 **वर्तमान सेंसर रीडिंग:**",
        Term::HealthTitle => "🌱 **फसल स्वास्थ्य स्कोर:",
        Term::WaterTitle => "💧 **सिंचाई सलाह:**",
        Term::FertilizerTitle => "🌿 **खाद की सिफारिश:**",
        Term::PestTitle => "🐛 **कीट नियंत्रण गाइड:**",
        Term::DiseaseTitle => "🔬 **पौधों की बीमारी गाइड:**",
        Term::TempTitle => "🌡️ **तापमान प्रबंधन:**",
        Term::SoilTitle => "🌍 **मिट्टी प्रबंधन:**",
        Term::WeatherTitle => "🌤️ **मौसम आधारित खेती:**",
        Term::PlantingTitle => "🌱 **बुवाई गाइड:**",
        Term::HarvestTitle => "🌾 **कटाई गाइड:**",
        Term::GeneralTitle => "🌾 **खेती सहायक:**",

        Term::Temperature => "तापमान",
        Term::Humidity => "नमी",
        Term::AirQuality => "वायु गुणवत्ता",
        Term::SoilMoisture => "मिट्टी की नमी",
        Term::WaterQuality => "पानी की गुणवत्ता",

        Term::Optimal => "उत्तम",
        Term::Good => "अच्छा",
        Term::Excellent => "बेहतरीन",
        Term::Poor => "खराब",
        Term::Low => "कम",
        Term::High => "ज्यादा",
        Term::TooHigh => "बहुत ज्यादा",
        Term::TooLow => "बहुत कम",
        Term::Perfect => "परफेक्ट",
        Term::Pure => "शुद्ध",

        Term::ExcellentCondition => "✅ आपकी फसलें बहुत अच्छी स्थिति में हैं!",
        Term::NeedAttention => "⚠️ आपकी फसलें ठीक हैं लेकिन ध्यान की जरूरत है।",
        Term::ImmediateCare => "🚨 आपकी फसलों को तुरंत देखभाल की जरूरत है!",
        Term::CurrentStatus => "**वर्तमान स्थिति:**",
        Term::Urgent => "🚨 **जरूरी:**",
        Term::WaterNow => "अभी पानी दें!",
        Term::WaterWithinHours => "4-6 घंटे में पानी दें",

        Term::OverallAssessment => "📊 **कुल मूल्यांकन:**",
        Term::AllOptimal => "✅ सभी मापदंड उत्तम हैं! आपकी फसलें बहुत अच्छी स्थिति में हैं।",
        Term::ContinuePractices => "वर्तमान प्रबंधन जारी रखें।",
        Term::AttentionNeeded => "⚠️ ध्यान देने की जरूरत:",
        Term::TakeCorrectiveActions => "ऊपर बताए गए सुधार के कदम उठाएं।",
        Term::WhyThriving => "**आपकी फसलें क्यों अच्छी हैं:**",
        Term::KeepDoing => "**यह जारी रखें:**",
        Term::ExpectedOutcomes => "**अपेक्षित परिणाम:**",
        Term::IssuesDetected => "**पाई गई समस्याएं:**",
        Term::ImmediateActions => "**तुरंत करें:**",
        Term::RecoveryPlan => "**सुधार योजना:**",
        Term::ExpectedRecovery => "**अपेक्षित सुधार:** सही देखभाल से 7-14 दिन",
        Term::CriticalIssues => "**गंभीर समस्याएं:**",
        Term::UrgentActions => "🚨 **तुरंत कार्रवाई जरूरी:**",
        Term::EmergencyCare => "**आपातकालीन देखभाल:**",
        Term::CropLossWarning => "**चेतावनी:** तुरंत कार्रवाई न करने पर फसल नुकसान की संभावना है!",

        Term::Current => "**वर्तमान:**",
        Term::OptimalRange => "**उत्तम सीमा:**",
        Term::EnvironmentalFactors => "**पर्यावरणीय कारक:**",
        Term::Capabilities => {
            "मैं इनमें मदद कर सकता हूँ: सिंचाई, खाद, कीट, बीमारी, तापमान, मिट्टी, मौसम, बुवाई, कटाई"
        }
        Term::AskAnyLanguage => "अंग्रेजी, हिंदी या पंजाबी में पूछें!",
    }
}

fn punjabi(term: Term) -> &'static str {
    // ---
    match term {
        Term::SensorTitle => "📊 **ਮੌਜੂਦਾ ਸੈਂਸਰ ਰੀਡਿੰਗ:**",
        Term::HealthTitle => "🌱 **ਫਸਲ ਸਿਹਤ ਸਕੋਰ:",
        Term::WaterTitle => "💧 **ਸਿੰਚਾਈ ਸਲਾਹ:**",
        Term::FertilizerTitle => "🌿 **ਖਾਦ ਦੀ ਸਿਫਾਰਸ਼:**",
        Term::PestTitle => "🐛 **ਕੀੜੇ ਕੰਟਰੋਲ ਗਾਈਡ:**",
        Term::DiseaseTitle => "🔬 **ਪੌਦਿਆਂ ਦੀ ਬਿਮਾਰੀ ਗਾਈਡ:**",
        Term::TempTitle => "🌡️ **ਤਾਪਮਾਨ ਪ੍ਰਬੰਧਨ:**",
        Term::SoilTitle => "🌍 **ਮਿੱਟੀ ਪ੍ਰਬੰਧਨ:**",
        Term::WeatherTitle => "🌤️ **ਮੌਸਮ ਅਧਾਰਤ ਖੇਤੀ:**",
        Term::PlantingTitle => "🌱 **ਬੀਜਣ ਗਾਈਡ:**",
        Term::HarvestTitle => "🌾 **ਵਾਢੀ ਗਾਈਡ:**",
        Term::GeneralTitle => "🌾 **ਖੇਤੀ ਸਹਾਇਕ:**",

        Term::Temperature => "ਤਾਪਮਾਨ",
        Term::Humidity => "ਨਮੀ",
        Term::AirQuality => "ਹਵਾ ਦੀ ਗੁਣਵੱਤਾ",
        Term::SoilMoisture => "ਮਿੱਟੀ ਦੀ ਨਮੀ",
        Term::WaterQuality => "ਪਾਣੀ ਦੀ ਗੁਣਵੱਤਾ",

        Term::Optimal => "ਸਭ ਤੋਂ ਵਧੀਆ",
        Term::Good => "ਚੰਗਾ",
        Term::Excellent => "ਬਹੁਤ ਵਧੀਆ",
        Term::Poor => "ਮਾੜਾ",
        Term::Low => "ਘੱਟ",
        Term::High => "ਜ਼ਿਆਦਾ",
        Term::TooHigh => "ਬਹੁਤ ਜ਼ਿਆਦਾ",
        Term::TooLow => "ਬਹੁਤ ਘੱਟ",
        Term::Perfect => "ਪਰਫੈਕਟ",
        Term::Pure => "ਸ਼ੁੱਧ",

        Term::ExcellentCondition => "✅ ਤੁਹਾਡੀਆਂ ਫਸਲਾਂ ਬਹੁਤ ਵਧੀਆ ਹਾਲਤ ਵਿੱਚ ਹਨ!",
        Term::NeedAttention => "⚠️ ਤੁਹਾਡੀਆਂ ਫਸਲਾਂ ਠੀਕ ਹਨ ਪਰ ਧਿਆਨ ਦੀ ਲੋੜ ਹੈ।",
        Term::ImmediateCare => "🚨 ਤੁਹਾਡੀਆਂ ਫਸਲਾਂ ਨੂੰ ਤੁਰੰਤ ਦੇਖਭਾਲ ਦੀ ਲੋੜ ਹੈ!",
        Term::CurrentStatus => "**ਮੌਜੂਦਾ ਸਥਿਤੀ:**",
        Term::Urgent => "🚨 **ਜ਼ਰੂਰੀ:**",
        Term::WaterNow => "ਹੁਣੇ ਪਾਣੀ ਦਿਓ!",
        Term::WaterWithinHours => "4-6 ਘੰਟਿਆਂ ਵਿੱਚ ਪਾਣੀ ਦਿਓ",

        Term::OverallAssessment => "📊 **ਕੁੱਲ ਮੁਲਾਂਕਣ:**",
        Term::AllOptimal => "✅ ਸਾਰੇ ਮਾਪਦੰਡ ਸਭ ਤੋਂ ਵਧੀਆ ਹਨ! ਤੁਹਾਡੀਆਂ ਫਸਲਾਂ ਬਹੁਤ ਵਧੀਆ ਹਾਲਤ ਵਿੱਚ ਹਨ।",
        Term::ContinuePractices => "ਮੌਜੂਦਾ ਪ੍ਰਬੰਧਨ ਜਾਰੀ ਰੱਖੋ।",
        Term::AttentionNeeded => "⚠️ ਧਿਆਨ ਦੀ ਲੋੜ:",
        Term::TakeCorrectiveActions => "ਉੱਪਰ ਦੱਸੇ ਸੁਧਾਰ ਦੇ ਕਦਮ ਚੁੱਕੋ।",
        Term::WhyThriving => "**ਤੁਹਾਡੀਆਂ ਫਸਲਾਂ ਕਿਉਂ ਵਧੀਆ ਹਨ:**",
        Term::KeepDoing => "**ਇਹ ਜਾਰੀ ਰੱਖੋ:**",
        Term::ExpectedOutcomes => "**ਉਮੀਦ ਕੀਤੇ ਨਤੀਜੇ:**",
        Term::IssuesDetected => "**ਮਿਲੀਆਂ ਸਮੱਸਿਆਵਾਂ:**",
        Term::ImmediateActions => "**ਤੁਰੰਤ ਕਰੋ:**",
        Term::RecoveryPlan => "**ਸੁਧਾਰ ਯੋਜਨਾ:**",
        Term::ExpectedRecovery => "**ਉਮੀਦ ਕੀਤਾ ਸੁਧਾਰ:** ਸਹੀ ਦੇਖਭਾਲ ਨਾਲ 7-14 ਦਿਨ",
        Term::CriticalIssues => "**ਗੰਭੀਰ ਸਮੱਸਿਆਵਾਂ:**",
        Term::UrgentActions => "🚨 **ਤੁਰੰਤ ਕਾਰਵਾਈ ਜ਼ਰੂਰੀ:**",
        Term::EmergencyCare => "**ਐਮਰਜੈਂਸੀ ਦੇਖਭਾਲ:**",
        Term::CropLossWarning => "**ਚੇਤਾਵਨੀ:** ਤੁਰੰਤ ਕਾਰਵਾਈ ਨਾ ਕਰਨ ਤੇ ਫਸਲ ਦਾ ਨੁਕਸਾਨ ਹੋ ਸਕਦਾ ਹੈ!",

        Term::Current => "**ਮੌਜੂਦਾ:**",
        Term::OptimalRange => "**ਸਭ ਤੋਂ ਵਧੀਆ ਸੀਮਾ:**",
        Term::EnvironmentalFactors => "**ਵਾਤਾਵਰਣੀ ਕਾਰਕ:**",
        Term::Capabilities => {
            "ਮੈਂ ਇਹਨਾਂ ਵਿੱਚ ਮਦਦ ਕਰ ਸਕਦਾ ਹਾਂ: ਸਿੰਚਾਈ, ਖਾਦ, ਕੀੜੇ, ਬਿਮਾਰੀ, ਤਾਪਮਾਨ, ਮਿੱਟੀ, ਮੌਸਮ, ਬੀਜਾਈ, ਵਾਢੀ"
        }
        Term::AskAnyLanguage => "ਅੰਗਰੇਜ਼ੀ, ਹਿੰਦੀ ਜਾਂ ਪੰਜਾਬੀ ਵਿੱਚ ਪੁੱਛੋ!",
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    const LANGUAGES: [Language; 3] = [Language::English, Language::Hindi, Language::Punjabi];

    #[test]
    fn test_every_term_has_text_in_every_language() {
        // ---
        for term in Term::ALL {
            for lang in LANGUAGES {
                assert!(!term.text(lang).trim().is_empty(), "{:?} empty in {:?}", term, lang);
            }
        }
    }

    #[test]
    fn test_localized_titles_differ_from_english() {
        // ---
        let titles = [Term::SensorTitle, Term::WaterTitle, Term::HarvestTitle];
        for term in titles {
            let en = term.text(Language::English);
            assert_ne!(en, term.text(Language::Hindi));
            assert_ne!(en, term.text(Language::Punjabi));
        }
    }

    #[test]
    fn test_known_strings() {
        // ---
        assert_eq!(Term::WaterNow.text(Language::Hindi), "अभी पानी दें!");
        assert_eq!(Term::Pure.text(Language::Punjabi), "ਸ਼ੁੱਧ");
        assert_eq!(Term::TooHigh.text(Language::English), "Too high");
    }
}
