//! Weather advisor. No forecast service is consulted; a three-day outlook is
//! projected from current humidity and temperature.

use serde::Serialize;

use crate::SensorSnapshot;

// ---

pub const CONFIDENCE: u8 = 78;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastDay {
    pub day: &'static str,
    pub icon: &'static str,
    pub temp: f64,
    pub rain: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherAdvice {
    // ---
    pub forecast: [ForecastDay; 3],
    pub advice: &'static str,
    pub actions: [&'static str; 4],
    pub rain_probability: u8,
    pub ai_confidence: u8,
}

/// One outlook row: icon, temperature offset from now, rain chance.
type Outlook = [(&'static str, f64, u8); 3];

struct Regime {
    rain_probability: u8,
    outlook: Outlook,
    advice: &'static str,
    actions: [&'static str; 4],
}

const WET: Regime = Regime {
    rain_probability: 70,
    outlook: [("⛅", 0.0, 30), ("🌧️", -2.0, 70), ("🌧️", -3.0, 60)],
    advice: "🌧️ RAIN EXPECTED: High probability of rain in 24-48 hours. Delay irrigation and fertilizer application. Prepare drainage systems.",
    actions: [
        "Postpone irrigation for 3-4 days",
        "Delay fertilizer application until after rain",
        "Check drainage channels",
        "Harvest ready crops before rain",
    ],
};

const DRY: Regime = Regime {
    rain_probability: 10,
    outlook: [("☀️", 0.0, 5), ("☀️", 1.0, 5), ("☀️", 2.0, 10)],
    advice: "☀️ DRY CONDITIONS: Low humidity and no rain expected. Increase irrigation frequency. Monitor for heat stress.",
    actions: [
        "Increase irrigation frequency by 20%",
        "Apply mulch to retain moisture",
        "Monitor crops for wilting",
        "Consider shade nets for sensitive crops",
    ],
};

const MIXED: Regime = Regime {
    rain_probability: 40,
    outlook: [("⛅", 0.0, 20), ("⛅", -1.0, 30), ("🌤️", 0.0, 25)],
    advice: "🌤️ MIXED CONDITIONS: Variable weather expected. Maintain flexible farming schedule. Monitor forecasts daily.",
    actions: [
        "Follow standard irrigation schedule",
        "Be ready to adjust plans",
        "Monitor weather updates",
        "Prepare for both scenarios",
    ],
};

const DAYS: [&str; 3] = ["Today", "Tomorrow", "Day 3"];

pub fn advise(s: &SensorSnapshot) -> WeatherAdvice {
    // ---
    let regime = if s.humidity > 75.0 {
        &WET
    } else if s.humidity < 40.0 {
        &DRY
    } else {
        &MIXED
    };

    let forecast = std::array::from_fn(|i| {
        let (icon, offset, rain) = regime.outlook[i];
        ForecastDay {
            day: DAYS[i],
            icon,
            temp: s.temperature + offset,
            rain,
        }
    });

    WeatherAdvice {
        forecast,
        advice: regime.advice,
        actions: regime.actions,
        rain_probability: regime.rain_probability,
        ai_confidence: CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn at(temp: f64, humidity: f64) -> WeatherAdvice {
        advise(&SensorSnapshot {
            temperature: temp,
            humidity,
            ..SensorSnapshot::default()
        })
    }

    #[test]
    fn test_humid_air_forecasts_rain() {
        // ---
        let w = at(28.0, 80.0);

        assert_eq!(w.rain_probability, 70);
        assert_eq!(w.forecast[1].day, "Tomorrow");
        assert_eq!(w.forecast[1].temp, 26.0);
        assert_eq!(w.forecast[2].temp, 25.0);
        assert_eq!(w.actions[0], "Postpone irrigation for 3-4 days");
        assert_eq!(w.ai_confidence, 78);
    }

    #[test]
    fn test_dry_air_forecasts_sun() {
        // ---
        let w = at(30.0, 35.0);

        assert_eq!(w.rain_probability, 10);
        assert!(w.forecast.iter().all(|d| d.icon == "☀️"));
        assert_eq!(w.forecast[2].temp, 32.0);
        assert!(w.advice.starts_with("☀️ DRY CONDITIONS"));
    }

    #[test]
    fn test_boundaries_are_mixed() {
        // ---
        assert_eq!(at(25.0, 75.0).rain_probability, 40);
        assert_eq!(at(25.0, 40.0).rain_probability, 40);

        let json = serde_json::to_value(at(25.0, 60.0)).unwrap();
        assert_eq!(json["forecast"][2]["icon"], "🌤️");
        assert_eq!(json["forecast"][1]["rain"], 30);
        assert_eq!(json["actions"].as_array().unwrap().len(), 4);
    }
}
