//! Plain-text rendering for readings and the recent-searches panel.

use skycast_core::{HistoryEntry, WeatherReading};

/// Prints the weather summary panel.
pub fn print_reading(reading: &WeatherReading) {
    println!("{}  {}°C", reading.location, reading.temperature_c);
    println!("  humidity  {}%", reading.humidity_pct);
    println!("  wind      {} Km/h", reading.wind_speed_kmh);
    if let Some(url) = &reading.icon_url {
        println!("  icon      {url}");
    }
}

/// Prints the recent-searches panel, most recent first.
pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("No recent search");
        return;
    }

    println!("Recent Searches");
    for entry in entries {
        match &entry.icon {
            Some(icon) => println!("  {}  {}°C  {}", entry.city, entry.temperature, icon),
            None => println!("  {}  {}°C", entry.city, entry.temperature),
        }
    }
}
