use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::client::NwsClient;
use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::formatters::{format_alerts, format_alerts_error, format_forecast, format_forecast_error};
use crate::models::{AlertResponse, ForecastResponse, GetAlertsRequest, GetForecastRequest, PointsResponse};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: Arc<NwsClient>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = NwsClient::new(&config)?;

        Ok(Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        })
    }

    /// Forecast for the first period at a coordinate. Failures are returned as text.
    pub async fn forecast_by_location(&self, latitude: f64, longitude: f64) -> String {
        match self.fetch_forecast(latitude, longitude).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Forecast lookup for {}, {} failed: {}", latitude, longitude, e);
                format_forecast_error(&e)
            }
        }
    }

    /// Active alerts for a US state code, case-insensitive. Failures are returned as text.
    pub async fn alerts_by_state(&self, state: &str) -> String {
        let state = state.to_uppercase();

        match self.fetch_alerts(&state).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Alert lookup for {} failed: {}", state, e);
                format_alerts_error(&e)
            }
        }
    }

    async fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<String, WeatherError> {
        let points_path = format!("/points/{:.4},{:.4}", latitude, longitude);
        let points = self.client.get_json::<PointsResponse>(&points_path).await?;

        let forecast_url = points
            .forecast_url()
            .ok_or(WeatherError::MissingField("properties.forecast"))?;

        let forecast = self.client.get_json::<ForecastResponse>(forecast_url).await?;

        let first_period = forecast.first_period()?;

        Ok(format_forecast(first_period.as_ref()))
    }

    async fn fetch_alerts(&self, state: &str) -> Result<String, WeatherError> {
        let path = format!("/alerts/active?area={}", state);
        let alerts = self.client.get_json::<AlertResponse>(&path).await?;

        Ok(format_alerts(&alerts, state))
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the National Weather Service API. \
                Provides the current forecast for a US coordinate and active alerts for a US state."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    #[tool(description = "Get weather forecast for a specific latitude/longitude")]
    async fn get_weather_forecast_by_location(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self
            .forecast_by_location(request.latitude, request.longitude)
            .await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get weather alerts for a US state")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let text = self.alerts_by_state(&request.state).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
