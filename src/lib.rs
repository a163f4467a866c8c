//! MCP tools for the National Weather Service API.
//!
//! Two tools are exposed: the forecast for a latitude/longitude and the active
//! alerts for a US state. Both always answer with text, including on failure.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;

pub use config::WeatherConfig;
pub use error::{ErrorKind, WeatherError};
pub use service::Weather;
