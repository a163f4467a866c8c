use crate::constants::{NO_FORECAST_DATA, NO_INSTRUCTIONS};
use crate::error::{ErrorKind, WeatherError};
use crate::models::{AlertProperties, AlertResponse, ForecastPeriod};

/// Formats the first forecast period as three lines: Forecast, Temperature, Wind
pub fn format_forecast(first_period: Option<&ForecastPeriod>) -> String {
    match first_period {
        Some(period) => format_period(period),
        None => NO_FORECAST_DATA.to_string(),
    }
}

fn format_period(period: &ForecastPeriod) -> String {
    format!(
        "Forecast: {}\nTemperature: {} {}\nWind: {} {}",
        period.detailed_forecast,
        period.temperature,
        period.temperature_unit,
        period.wind_speed,
        period.wind_direction
    )
}

/// Formats weather alerts into one block per alert, in response order
pub fn format_alerts(alerts: &AlertResponse, state: &str) -> String {
    if alerts.features.is_empty() {
        return format!("No active alerts for state: {}", state);
    }

    alerts
        .features
        .iter()
        .map(|feature| format_alert(&feature.properties))
        .collect()
}

fn format_alert(props: &AlertProperties) -> String {
    let instructions = match &props.instruction {
        Some(instruction) if !instruction.is_empty() => instruction.0.as_str(),
        _ => NO_INSTRUCTIONS,
    };

    format!(
        "🔔 Event: {}\n📍 Area: {}\n⚠️ Severity: {}\n📝 Description: {}\n🛡️ Instructions: {}\n\n",
        props.event, props.area_desc, props.severity, props.description, instructions
    )
}

/// Text returned by the forecast tool when a lookup fails
pub fn format_forecast_error(error: &WeatherError) -> String {
    match error.kind() {
        ErrorKind::Transport | ErrorKind::DataShape | ErrorKind::Input => {
            format!("Error fetching weather data: {}", error)
        }
    }
}

/// Text returned by the alerts tool when a lookup fails
pub fn format_alerts_error(error: &WeatherError) -> String {
    match error.kind() {
        ErrorKind::Transport => format!("Error fetching alerts: {}", error),
        ErrorKind::DataShape | ErrorKind::Input => format!("Unexpected error: {}", error),
    }
}
