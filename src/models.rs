use schemars::JsonSchema;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// ============================================================================
// Field helpers
// ============================================================================

/// A scalar JSON field read as text, so `72` and `"72"` both render as `72`.
///
/// `null`, arrays and objects are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(pub String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Text(s)),
            Value::Number(n) => Ok(Text(n.to_string())),
            Value::Bool(b) => Ok(Text(b.to_string())),
            Value::Null => Err(D::Error::custom("expected a value, found null")),
            other => Err(D::Error::custom(format!(
                "expected a scalar value, found {other}"
            ))),
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Text {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads a list field, treating a missing, `null` or non-array value as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AlertResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Deserialize)]
pub struct AlertProperties {
    pub event: Text,
    #[serde(rename = "areaDesc")]
    pub area_desc: Text,
    pub severity: Text,
    pub description: Text,
    #[serde(default)]
    pub instruction: Option<Text>,
}

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub properties: Option<PointsProperties>,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    #[serde(default)]
    pub forecast: Option<String>,
}

impl PointsResponse {
    /// The gridpoint forecast URL, if the point lookup returned one
    pub fn forecast_url(&self) -> Option<&str> {
        self.properties.as_ref()?.forecast.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub properties: Option<ForecastProperties>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    /// Kept raw so only the period actually read has to be well formed
    #[serde(default, deserialize_with = "lenient_list")]
    pub periods: Vec<Value>,
}

impl ForecastResponse {
    /// Decodes the first period, ignoring any that follow
    pub fn first_period(&self) -> Result<Option<ForecastPeriod>, serde_json::Error> {
        match self.properties.as_ref().and_then(|props| props.periods.first()) {
            Some(period) => ForecastPeriod::deserialize(period).map(Some),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ForecastPeriod {
    pub temperature: Text,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: Text,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Text,
    #[serde(rename = "windDirection")]
    pub wind_direction: Text,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: Text,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state code (e.g. CA, NY)
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_temperature_reads_as_text() {
        let period: ForecastPeriod = serde_json::from_value(json!({
            "name": "Tonight",
            "temperature": 72,
            "temperatureUnit": "F",
            "windSpeed": "5 to 10 mph",
            "windDirection": "SW",
            "detailedForecast": "Clear."
        }))
        .unwrap();
        assert_eq!(period.temperature.to_string(), "72");
        assert_eq!(period.wind_speed.to_string(), "5 to 10 mph");
    }

    #[test]
    fn null_required_field_is_rejected() {
        let result = serde_json::from_value::<ForecastPeriod>(json!({
            "temperature": null,
            "temperatureUnit": "F",
            "windSpeed": "5 mph",
            "windDirection": "N",
            "detailedForecast": "Clear."
        }));
        assert!(result.is_err());
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let err = serde_json::from_value::<AlertProperties>(json!({
            "event": "Flood Watch",
            "severity": "Moderate",
            "description": "Rain."
        }))
        .unwrap_err();
        assert!(err.to_string().contains("areaDesc"));
    }

    #[test]
    fn null_instruction_is_none() {
        let props: AlertProperties = serde_json::from_value(json!({
            "event": "Flood Watch",
            "areaDesc": "Kings",
            "severity": "Moderate",
            "description": "Rain.",
            "instruction": null
        }))
        .unwrap();
        assert!(props.instruction.is_none());
    }

    #[test]
    fn features_that_are_not_a_list_read_as_empty() {
        let missing: AlertResponse = serde_json::from_value(json!({})).unwrap();
        let object: AlertResponse = serde_json::from_value(json!({ "features": {} })).unwrap();
        let null: AlertResponse = serde_json::from_value(json!({ "features": null })).unwrap();
        assert!(missing.features.is_empty());
        assert!(object.features.is_empty());
        assert!(null.features.is_empty());
    }

    #[test]
    fn forecast_without_periods_has_no_first_period() {
        let no_properties: ForecastResponse = serde_json::from_value(json!({})).unwrap();
        let no_periods: ForecastResponse =
            serde_json::from_value(json!({ "properties": {} })).unwrap();
        assert!(no_properties.first_period().unwrap().is_none());
        assert!(no_periods.first_period().unwrap().is_none());
    }

    #[test]
    fn malformed_later_periods_are_ignored() {
        let forecast: ForecastResponse = serde_json::from_value(json!({
            "properties": {
                "periods": [
                    {
                        "temperature": 86,
                        "temperatureUnit": "F",
                        "windSpeed": "5 mph",
                        "windDirection": "NW",
                        "detailedForecast": "Sunny."
                    },
                    { "temperature": null }
                ]
            }
        }))
        .unwrap();

        let first = forecast.first_period().unwrap().unwrap();
        assert_eq!(first.temperature.to_string(), "86");
    }

    #[test]
    fn malformed_first_period_is_an_error() {
        let forecast: ForecastResponse = serde_json::from_value(json!({
            "properties": { "periods": [{ "temperature": null }] }
        }))
        .unwrap();

        assert!(forecast.first_period().is_err());
    }

    #[test]
    fn points_forecast_url() {
        let points: PointsResponse = serde_json::from_value(json!({
            "properties": { "forecast": "https://api.weather.gov/gridpoints/LWX/97,71/forecast" }
        }))
        .unwrap();
        assert_eq!(
            points.forecast_url(),
            Some("https://api.weather.gov/gridpoints/LWX/97,71/forecast")
        );

        let null: PointsResponse =
            serde_json::from_value(json!({ "properties": { "forecast": null } })).unwrap();
        assert_eq!(null.forecast_url(), None);
    }
}
