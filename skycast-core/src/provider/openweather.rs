use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::{LookupError, TransportError};
use crate::icons::icon_url;
use crate::model::WeatherReading;

use super::WeatherProvider;

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeatherMap current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, LookupError> {
        debug!(city, "requesting current weather from OpenWeather");

        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(provider_error(status, &body));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        reading_from(parsed)
    }
}

/// Builds the error for a non-2xx answer.
///
/// The provider reports failures as JSON with a `message` field, which is
/// surfaced verbatim; a body that is not such a document counts as a
/// transport problem, and a document without a message falls back to the
/// HTTP status line.
fn provider_error(status: StatusCode, body: &str) -> LookupError {
    match serde_json::from_str::<OwErrorBody>(body) {
        Ok(err) => LookupError::Provider(err.message.unwrap_or_else(|| status.to_string())),
        Err(e) => TransportError::from(e).into(),
    }
}

/// Maps a decoded provider document onto the canonical reading.
fn reading_from(doc: OwCurrentResponse) -> Result<WeatherReading, LookupError> {
    let condition = doc
        .weather
        .first()
        .ok_or_else(|| TransportError::Decode("no weather conditions present".to_string()))?;

    Ok(WeatherReading {
        location: doc.name,
        // Floor, not round: 22.9 reads as 22 and -3.2 as -4, reproducibly.
        temperature_c: doc.main.temp.floor() as i32,
        humidity_pct: doc.main.humidity,
        wind_speed_kmh: doc.wind.speed,
        icon_url: icon_url(&condition.icon).map(str::to_owned),
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down capture of a real current-weather answer.
    const POKHARA_BODY: &str = r#"{
        "coord": {"lon": 83.9856, "lat": 28.2096},
        "weather": [{"id": 804, "main": "Clouds", "description": "overcast clouds", "icon": "04d"}],
        "base": "stations",
        "main": {"temp": 22.68, "feels_like": 23.02, "pressure": 1012, "humidity": 78},
        "visibility": 10000,
        "wind": {"speed": 1.32, "deg": 288},
        "clouds": {"all": 100},
        "name": "Pokhara",
        "cod": 200
    }"#;

    fn parse(body: &str) -> OwCurrentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn maps_provider_fields_onto_the_reading() {
        let reading = reading_from(parse(POKHARA_BODY)).unwrap();

        assert_eq!(reading.location, "Pokhara");
        assert_eq!(reading.temperature_c, 22);
        assert_eq!(reading.humidity_pct, 78);
        assert_eq!(reading.wind_speed_kmh, 1.32);
        assert_eq!(
            reading.icon_url.as_deref(),
            Some("https://openweathermap.org/img/wn/04d@2x.png")
        );
    }

    #[test]
    fn temperature_is_floored_not_rounded() {
        let body = POKHARA_BODY.replace("22.68", "-3.2");
        let reading = reading_from(parse(&body)).unwrap();

        assert_eq!(reading.temperature_c, -4);
    }

    #[test]
    fn unrecognized_icon_code_yields_a_reading_without_icon() {
        let body = POKHARA_BODY.replace("04d", "77z");
        let reading = reading_from(parse(&body)).unwrap();

        assert_eq!(reading.icon_url, None);
        assert_eq!(reading.location, "Pokhara");
    }

    #[test]
    fn response_without_weather_conditions_is_a_decode_error() {
        let body = POKHARA_BODY.replace(
            r#"[{"id": 804, "main": "Clouds", "description": "overcast clouds", "icon": "04d"}]"#,
            "[]",
        );
        let err = reading_from(parse(&body)).unwrap_err();

        assert!(matches!(
            err,
            LookupError::Transport(TransportError::Decode(_))
        ));
    }

    #[test]
    fn error_body_message_is_surfaced_verbatim() {
        let err = provider_error(
            StatusCode::NOT_FOUND,
            r#"{"cod": "404", "message": "city not found"}"#,
        );

        match err {
            LookupError::Provider(msg) => assert_eq!(msg, "city not found"),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn error_body_without_message_falls_back_to_the_status() {
        let err = provider_error(StatusCode::UNAUTHORIZED, r#"{"cod": 401}"#);

        match err {
            LookupError::Provider(msg) => assert!(msg.contains("401")),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_is_a_transport_error() {
        let err = provider_error(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");

        assert!(matches!(
            err,
            LookupError::Transport(TransportError::Decode(_))
        ));
    }
}
