//! Builder for creating and configuring Solver instances.

use super::Solver;
use crate::{config::Config, error::Result, transport::Transport};

/// Builder for creating and configuring Solver instances.
#[derive(Default)]
pub struct SolverBuilder {
    config: Option<Config>,
    transport: Option<Box<dyn Transport>>,
}

impl SolverBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    ///
    /// If not specified, the configuration is read from
    /// `$XDG_CONFIG_HOME/elasticroute/config.json`, falling back to defaults.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the transport used to reach the service.
    ///
    /// If not specified and the `http` feature is enabled, an HTTP transport
    /// is created from the configuration.
    pub fn with_transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Builds the configured solver.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::FileSystem` or `RouteError::Configuration` if the
    /// default configuration file cannot be read, and
    /// `RouteError::Configuration` if no transport is available.
    pub fn build(self) -> Result<Solver> {
        let config = match self.config {
            Some(config) => config,
            None => Config::load_default()?,
        };
        let transport = match self.transport {
            Some(transport) => transport,
            None => Self::default_transport(&config)?,
        };
        Ok(Solver::new(config, transport))
    }

    #[cfg(feature = "http")]
    fn default_transport(config: &Config) -> Result<Box<dyn Transport>> {
        Ok(Box::new(crate::transport::HttpTransport::new(config)?))
    }

    #[cfg(not(feature = "http"))]
    fn default_transport(_config: &Config) -> Result<Box<dyn Transport>> {
        Err(crate::error::RouteError::Configuration {
            message: "No transport configured; enable the `http` feature or call with_transport"
                .to_string(),
        })
    }
}
