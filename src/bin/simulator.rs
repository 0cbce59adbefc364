//! Sensor simulator.
//!
//! Posts randomized readings to the ingestion endpoint every 7-8 seconds,
//! standing in for the field device during development. Stop with Ctrl-C.
//!
//! # Environment Variables
//! - `SENSOR_API_URL` (optional) – ingestion URL
//!   (default: `http://localhost:5001/api/sensors`)
//! - `SIMULATOR_LOCATE` (optional) – `0` skips the IP geolocation lookup
use std::{env, time::Duration};

use anyhow::Result;
use dotenvy::dotenv;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use krishi_advisor::Location;

// ---

const DEFAULT_SENSOR_API_URL: &str = "http://localhost:5001/api/sensors";
const GEOLOCATION_URL: &str = "https://ipapi.co/json/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Body posted to the ingestion endpoint, flat device keys.
#[derive(Debug, Serialize)]
struct SimulatedReading {
    mq135: f64,
    temperature: f64,
    humidity: f64,
    pm25: f64,
    pm10: f64,
    fc28: f64,
    tds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
}

#[derive(Deserialize)]
struct IpLocation {
    city: Option<String>,
    country_name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `base` plus up to `span`, rounded to two decimals.
fn sample<R: Rng + ?Sized>(rng: &mut R, base: f64, span: f64) -> f64 {
    round_to(base + rng.gen::<f64>() * span, 2)
}

fn generate<R: Rng + ?Sized>(rng: &mut R, location: Option<Location>) -> SimulatedReading {
    // ---
    SimulatedReading {
        mq135: sample(rng, 18.0, 2.0),
        temperature: sample(rng, 28.0, 2.0),
        humidity: sample(rng, 40.0, 40.0),
        pm25: sample(rng, 10.0, 2.0),
        pm10: sample(rng, 10.0, 2.0),
        fc28: sample(rng, 10.0, 2.0),
        tds: round_to(100.0 + rng.gen::<f64>() * 50.0, 0),
        location,
    }
}

async fn locate(client: &reqwest::Client) -> Option<Location> {
    // ---
    let result = async {
        let found: IpLocation = client
            .get(GEOLOCATION_URL)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok::<_, reqwest::Error>(found)
    }
    .await;

    match result {
        Ok(found) => {
            let location = Location {
                city: found.city.or_else(|| Some("Unknown".to_string())),
                country: found.country_name.or_else(|| Some("Unknown".to_string())),
                latitude: found.latitude,
                longitude: found.longitude,
            };
            info!(
                "Location detected: {}, {}",
                location.city.as_deref().unwrap_or_default(),
                location.country.as_deref().unwrap_or_default()
            );
            Some(location)
        }
        Err(e) => {
            warn!("Could not detect location: {}", e);
            None
        }
    }
}

async fn send(client: &reqwest::Client, url: &str, reading: &SimulatedReading) {
    // ---
    debug!("Sending simulated reading: {:?}", reading);
    match client.post(url).json(reading).send().await {
        Ok(resp) if resp.status().is_success() => info!("Reading sent"),
        Ok(resp) => warn!("Server rejected reading: HTTP {}", resp.status()),
        Err(e) if e.is_connect() => warn!("Cannot connect to {}. Is the server running?", url),
        Err(e) => warn!("Failed to send reading: {}", e),
    }
}

async fn run(url: String, geolocate: bool) -> Result<()> {
    // ---
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

    let location = if geolocate { locate(&client).await } else { None };
    let mut rng = StdRng::from_entropy();

    loop {
        let reading = generate(&mut rng, location.clone());
        send(&client, &url, &reading).await;

        let delay = Duration::from_secs_f64(7.0 + rng.gen::<f64>());
        tokio::time::sleep(delay).await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let url = env::var("SENSOR_API_URL").unwrap_or_else(|_| DEFAULT_SENSOR_API_URL.to_string());
    let geolocate = !matches!(env::var("SIMULATOR_LOCATE").as_deref(), Ok("0") | Ok("false"));

    info!("Simulating sensor readings every 7-8 seconds to {}", url);
    info!("Ranges: MQ-135 18-20 ppm, DHT22 28-30 °C / 40-80 %, PMS5003 10-12 µg/m³, FC-28 10-12 %, TDS 100-150 ppm");

    tokio::select! {
        result = run(url, geolocate) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Simulator stopped");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_generated_values_stay_in_range() {
        // ---
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let r = generate(&mut rng, None);
            assert!((18.0..=20.0).contains(&r.mq135));
            assert!((28.0..=30.0).contains(&r.temperature));
            assert!((40.0..=80.0).contains(&r.humidity));
            assert!((10.0..=12.0).contains(&r.pm25));
            assert!((10.0..=12.0).contains(&r.pm10));
            assert!((10.0..=12.0).contains(&r.fc28));
            assert!((100.0..=150.0).contains(&r.tds));
            assert_eq!(r.tds.fract(), 0.0);
        }
    }

    #[test]
    fn test_body_uses_flat_device_keys() {
        // ---
        let body = serde_json::to_value(generate(&mut StdRng::seed_from_u64(1), None)).unwrap();
        for key in ["mq135", "temperature", "humidity", "pm25", "pm10", "fc28", "tds"] {
            assert!(body[key].is_number(), "missing {}", key);
        }
        assert!(body.get("location").is_none());
    }
}
