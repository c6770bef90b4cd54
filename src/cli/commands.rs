use crate::api::IqAirClient;
use crate::cli::{format_reading, USAGE};
use crate::config::Config;
use crate::error::Result;
use crate::models::Query;
use tracing::{debug, info};

/// CLI application
pub struct App {
    config: Config,
}

impl App {
    /// Create a new CLI application from an already loaded configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run one query and return the text to print on stdout
    pub async fn run(&self, query: &Query) -> Result<String> {
        debug!("Running query: {:?}", query);

        if let Query::Help = query {
            return Ok(USAGE.to_string());
        }

        // Fails before any request when the key is missing
        let client = IqAirClient::from_config(&self.config)?;
        let station = client.fetch(query).await?;

        info!(
            "Received AQI {} for {}",
            station.aqi(),
            station.city_name()
        );

        Ok(format_reading(&station))
    }
}
