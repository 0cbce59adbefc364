//! Data models for the farm sensor pipeline.
//!
//! `RawSensorReading` is whatever an edge device (or the chat UI) sent us,
//! parsed leniently; `SensorSnapshot` is the total, immutable reading every
//! other module consumes. On the wire the snapshot keeps the device-grouped
//! layout the dashboard expects (`mq135`, `pms5003`, `dht22`, `fc28`, `tds`).

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---

pub const DEFAULT_AIR_QUALITY: f64 = 100.0;
pub const DEFAULT_PM25: f64 = 15.0;
pub const DEFAULT_PM10: f64 = 25.0;
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_HUMIDITY: f64 = 60.0;
pub const DEFAULT_SOIL_MOISTURE: f64 = 50.0;
pub const DEFAULT_WATER_QUALITY: f64 = 300.0;

/// Where the reporting device sits, as detected by the producer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    // ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, alias = "lat", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "lon", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Raw sensor data as posted by a producer.
///
/// Every field is optional. Numbers may arrive as JSON numbers or numeric
/// strings; anything else is treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSensorReading {
    // ---
    pub mq135: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub fc28: Option<f64>,
    pub tds: Option<f64>,
    pub location: Option<Location>,
}

/// The latest complete set of readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "wire::SnapshotWire", from = "wire::SnapshotWire")]
pub struct SensorSnapshot {
    // ---
    /// MQ-135 air quality, ppm.
    pub air_quality: f64,
    /// PM2.5, µg/m³.
    pub pm25: f64,
    /// PM10, µg/m³.
    pub pm10: f64,
    /// Air temperature, °C.
    pub temperature: f64,
    /// Relative humidity, %.
    pub humidity: f64,
    /// FC-28 soil moisture, %.
    pub soil_moisture: f64,
    /// Total dissolved solids, ppm.
    pub water_quality: f64,
    pub location: Option<Location>,
    pub timestamp: DateTime<Utc>,
}

/// One history row, flattened for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    // ---
    pub timestamp: String,
    pub mq135: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub pm25: f64,
    pub pm10: f64,
    pub fc28: f64,
    pub tds: f64,
}

// ---

impl RawSensorReading {
    // ---
    /// Pull readings out of an arbitrary JSON document.
    ///
    /// Accepts the flat ingestion keys (`mq135`, `fc28`, `tds`, ...), the
    /// camelCase keys the chat UI sends (`airQuality`, `soilMoisture`,
    /// `waterQuality`) and the nested wire layout. Never fails.
    pub fn from_json(value: &Value) -> Self {
        // ---
        RawSensorReading {
            mq135: first_number(
                value,
                &[&["mq135"], &["airQuality"], &["air_quality"], &["mq135", "value"]],
            ),
            pm25: first_number(value, &[&["pm25"], &["pms5003", "pm25"]]),
            pm10: first_number(value, &[&["pm10"], &["pms5003", "pm10"]]),
            temperature: first_number(value, &[&["temperature"], &["dht22", "temperature"]]),
            humidity: first_number(value, &[&["humidity"], &["dht22", "humidity"]]),
            fc28: first_number(
                value,
                &[&["fc28"], &["soilMoisture"], &["soil_moisture"], &["fc28", "value"]],
            ),
            tds: first_number(
                value,
                &[&["tds"], &["waterQuality"], &["water_quality"], &["tds", "value"]],
            ),
            location: value
                .get("location")
                .filter(|v| v.is_object())
                .and_then(|v| serde_json::from_value(v.clone()).ok()),
        }
    }

    /// Fill the gaps with neutral defaults and stamp the reading.
    pub fn to_snapshot(&self, timestamp: DateTime<Utc>) -> SensorSnapshot {
        // ---
        SensorSnapshot {
            air_quality: self.mq135.unwrap_or(DEFAULT_AIR_QUALITY),
            pm25: self.pm25.unwrap_or(DEFAULT_PM25),
            pm10: self.pm10.unwrap_or(DEFAULT_PM10),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            humidity: self.humidity.unwrap_or(DEFAULT_HUMIDITY),
            soil_moisture: self.fc28.unwrap_or(DEFAULT_SOIL_MOISTURE),
            water_quality: self.tds.unwrap_or(DEFAULT_WATER_QUALITY),
            location: self.location.clone(),
            timestamp,
        }
    }
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        RawSensorReading::default().to_snapshot(Utc::now())
    }
}

impl SensorSnapshot {
    // ---
    pub fn timestamp_string(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<&SensorSnapshot> for HistoryEntry {
    fn from(s: &SensorSnapshot) -> Self {
        // ---
        HistoryEntry {
            timestamp: s.timestamp_string(),
            mq135: s.air_quality,
            temperature: s.temperature,
            humidity: s.humidity,
            pm25: s.pm25,
            pm10: s.pm10,
            fc28: s.soil_moisture,
            tds: s.water_quality,
        }
    }
}

// ---

/// First finite number found along any of the key paths.
fn first_number(value: &Value, paths: &[&[&str]]) -> Option<f64> {
    // ---
    paths.iter().find_map(|path| {
        let mut node = value;
        for key in path.iter() {
            node = node.get(*key)?;
        }
        loose_f64(node)
    })
}

fn loose_f64(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|x| x.is_finite())
}

/// Parse RFC 3339, or a zone-less ISO-8601 stamp taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // ---
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

// ---

/// Device-grouped JSON layout shared by the dashboard, the live channel
/// and the persisted history file.
mod wire {
    // ---
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct Gauge {
        #[serde(default)]
        pub value: Option<f64>,
        #[serde(default)]
        pub unit: String,
        #[serde(default)]
        pub name: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct Particulates {
        #[serde(default)]
        pub pm25: Option<f64>,
        #[serde(default)]
        pub pm10: Option<f64>,
        #[serde(default)]
        pub unit: String,
        #[serde(default)]
        pub name: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct Climate {
        #[serde(default)]
        pub temperature: Option<f64>,
        #[serde(default)]
        pub humidity: Option<f64>,
        #[serde(default)]
        pub name: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct SnapshotWire {
        #[serde(default)]
        pub mq135: Gauge,
        #[serde(default)]
        pub pms5003: Particulates,
        #[serde(default)]
        pub dht22: Climate,
        #[serde(default)]
        pub fc28: Gauge,
        #[serde(default)]
        pub tds: Gauge,
        #[serde(default)]
        pub location: Option<Location>,
        #[serde(default)]
        pub timestamp: Option<String>,
    }

    fn gauge(value: f64, unit: &str, name: &str) -> Gauge {
        Gauge {
            value: Some(value),
            unit: unit.to_string(),
            name: name.to_string(),
        }
    }

    impl From<SensorSnapshot> for SnapshotWire {
        fn from(s: SensorSnapshot) -> Self {
            // ---
            let timestamp = Some(s.timestamp_string());
            SnapshotWire {
                mq135: gauge(s.air_quality, "ppm", "Air Quality (MQ-135)"),
                pms5003: Particulates {
                    pm25: Some(s.pm25),
                    pm10: Some(s.pm10),
                    unit: "µg/m³".to_string(),
                    name: "Particulate Matter (PMS5003)".to_string(),
                },
                dht22: Climate {
                    temperature: Some(s.temperature),
                    humidity: Some(s.humidity),
                    name: "Temperature & Humidity (DHT22)".to_string(),
                },
                fc28: gauge(s.soil_moisture, "%", "Soil Moisture (FC-28)"),
                tds: gauge(s.water_quality, "ppm", "Water Quality (TDS Sensor)"),
                location: s.location,
                timestamp,
            }
        }
    }

    impl From<SnapshotWire> for SensorSnapshot {
        fn from(w: SnapshotWire) -> Self {
            // ---
            let timestamp = w
                .timestamp
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or_else(Utc::now);
            SensorSnapshot {
                air_quality: w.mq135.value.unwrap_or(DEFAULT_AIR_QUALITY),
                pm25: w.pms5003.pm25.unwrap_or(DEFAULT_PM25),
                pm10: w.pms5003.pm10.unwrap_or(DEFAULT_PM10),
                temperature: w.dht22.temperature.unwrap_or(DEFAULT_TEMPERATURE),
                humidity: w.dht22.humidity.unwrap_or(DEFAULT_HUMIDITY),
                soil_moisture: w.fc28.value.unwrap_or(DEFAULT_SOIL_MOISTURE),
                water_quality: w.tds.value.unwrap_or(DEFAULT_WATER_QUALITY),
                location: w.location,
                timestamp,
            }
        }
    }
}
