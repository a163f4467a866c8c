/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!(
    "nws-weather-mcp/",
    env!("CARGO_PKG_VERSION"),
    " (nws-weather-mcp@example.com)"
);

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Media type requested from the NWS API
pub const GEO_JSON: &str = "application/geo+json";

/// Returned when the forecast has no periods
pub const NO_FORECAST_DATA: &str = "No forecast data available.";

/// Substituted when an alert carries no safety instructions
pub const NO_INSTRUCTIONS: &str = "N/A";
