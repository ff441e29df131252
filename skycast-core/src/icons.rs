//! Fixed mapping from OpenWeather icon codes to image URLs.
//!
//! The table covers the 18 codes the current-weather endpoint is known to
//! send (day/night variants of clear, clouds, rain, thunder, snow, mist).
//! It deliberately has no fallback entry: a code outside the table resolves
//! to `None` and the caller renders no icon.

/// Resolves an OpenWeather icon code to its image URL.
pub fn icon_url(code: &str) -> Option<&'static str> {
    match code {
        "01d" => Some("https://openweathermap.org/img/wn/01d@2x.png"),
        "01n" => Some("https://openweathermap.org/img/wn/01n@2x.png"),
        "02d" => Some("https://openweathermap.org/img/wn/02d@2x.png"),
        "02n" => Some("https://openweathermap.org/img/wn/02n@2x.png"),
        "03d" => Some("https://openweathermap.org/img/wn/03d@2x.png"),
        "03n" => Some("https://openweathermap.org/img/wn/03n@2x.png"),
        "04d" => Some("https://openweathermap.org/img/wn/04d@2x.png"),
        "04n" => Some("https://openweathermap.org/img/wn/04n@2x.png"),
        "09d" => Some("https://openweathermap.org/img/wn/09d@2x.png"),
        "09n" => Some("https://openweathermap.org/img/wn/09n@2x.png"),
        "10d" => Some("https://openweathermap.org/img/wn/10d@2x.png"),
        "10n" => Some("https://openweathermap.org/img/wn/10n@2x.png"),
        "11d" => Some("https://openweathermap.org/img/wn/11d@2x.png"),
        "11n" => Some("https://openweathermap.org/img/wn/11n@2x.png"),
        "13d" => Some("https://openweathermap.org/img/wn/13d@2x.png"),
        "13n" => Some("https://openweathermap.org/img/wn/13n@2x.png"),
        "50d" => Some("https://openweathermap.org/img/wn/50d@2x.png"),
        "50n" => Some("https://openweathermap.org/img/wn/50n@2x.png"),
        _ => None,
    }
}
