use serde::{Deserialize, Serialize};

/// Current-weather response for one location, in the shape the remote
/// weather service returns it (metric units).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    /// Resolved location name, which may differ from the searched text.
    pub name: String,

    /// Temperature block.
    pub main: WeatherMain,

    /// Conditions, most significant first.
    pub weather: Vec<WeatherCondition>,

    /// Wind block.
    pub wind: Wind,

    /// Country block.
    pub sys: WeatherSys,
}

impl WeatherReport {
    /// The most significant condition, when the service reports any.
    #[must_use]
    pub fn primary_condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }
}

/// Temperature and humidity readings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherMain {
    /// Temperature in degrees Celsius.
    pub temp: f64,

    /// Perceived temperature in degrees Celsius.
    pub feels_like: f64,

    /// Relative humidity in percent.
    pub humidity: f64,
}

/// One weather condition entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherCondition {
    /// Condition group, e.g. `"Clouds"`.
    pub main: String,

    /// Human-readable description, e.g. `"scattered clouds"`.
    pub description: String,

    /// Icon code understood by the service's image CDN.
    pub icon: String,
}

/// Wind readings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wind {
    /// Wind speed in meters per second.
    pub speed: f64,
}

/// Country metadata for the resolved location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherSys {
    /// ISO country code, e.g. `"GB"`.
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE_RESPONSE: &str = r#"{
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [
            { "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d" }
        ],
        "base": "stations",
        "main": {
            "temp": 18.42,
            "feels_like": 17.9,
            "temp_min": 16.9,
            "temp_max": 19.8,
            "pressure": 1012,
            "humidity": 64
        },
        "wind": { "speed": 4.12, "deg": 240 },
        "sys": { "country": "GB", "sunrise": 1756099200, "sunset": 1756149600 },
        "name": "London",
        "cod": 200
    }"#;

    #[test]
    fn test_report_deserializes_service_response() {
        let report: WeatherReport = serde_json::from_str(SERVICE_RESPONSE).unwrap();

        assert_eq!(report.name, "London");
        assert_eq!(report.sys.country, "GB");
        assert!((report.main.temp - 18.42).abs() < f64::EPSILON);
        assert!((report.main.humidity - 64.0).abs() < f64::EPSILON);
        assert!((report.wind.speed - 4.12).abs() < f64::EPSILON);
    }

    #[test]
    fn test_primary_condition() {
        let report: WeatherReport = serde_json::from_str(SERVICE_RESPONSE).unwrap();
        let condition = report.primary_condition().unwrap();

        assert_eq!(condition.main, "Clouds");
        assert_eq!(condition.description, "scattered clouds");
        assert_eq!(condition.icon, "03d");
    }

    #[test]
    fn test_empty_condition_list() {
        let mut report: WeatherReport = serde_json::from_str(SERVICE_RESPONSE).unwrap();
        report.weather.clear();

        assert_eq!(report.primary_condition(), None);
    }
}
