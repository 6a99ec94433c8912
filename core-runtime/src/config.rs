//! # Core Configuration Module
//!
//! Provides configuration management for the artwork channel core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! holding the media facility and the settings the core needs. It validates
//! eagerly so a host learns about a missing capability at startup rather than
//! on the first channel call.
//!
//! ## Required Dependencies
//!
//! - `RetrieverFactory` - Media metadata facility. When the `desktop-shims`
//!   feature is enabled, the lofty-backed factory from `bridge-desktop` is
//!   injected automatically if none is provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .channel_name("com.example.localplay/artwork")
//!     .retriever_factory(Arc::new(AndroidRetrieverFactory::new(jvm)))
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use bridge_traits::RetrieverFactory;
use std::sync::Arc;

/// Channel name the host runtime binds its method calls to.
pub const DEFAULT_CHANNEL_NAME: &str = "com.example.localplay/artwork";

/// Core configuration for the artwork channel.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Name of the method channel served by the core
    pub channel_name: String,

    /// Media metadata facility (required)
    pub retriever_factory: Arc<dyn RetrieverFactory>,

    /// Logging setup applied by the service bootstrap
    pub logging: LoggingConfig,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("channel_name", &self.channel_name)
            .field("retriever_factory", &"RetrieverFactory { ... }")
            .field("logging", &self.logging)
            .finish()
    }
}

impl CoreConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// The channel name must be non-empty and free of surrounding whitespace;
    /// hosts match it byte for byte.
    pub fn validate(&self) -> Result<()> {
        if self.channel_name.is_empty() {
            return Err(Error::Config("Channel name cannot be empty".to_string()));
        }

        if self.channel_name.trim() != self.channel_name {
            return Err(Error::Config(format!(
                "Channel name '{}' has leading or trailing whitespace",
                self.channel_name
            )));
        }

        Ok(())
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn retriever_factory_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "RetrieverFactory".to_string(),
        message: "A media metadata facility is required to read tags and artwork. \
                 Desktop: enable the 'desktop-shims' feature to use the default LoftyRetrieverFactory. \
                 Android: inject a MediaMetadataRetriever-backed factory. \
                 iOS: inject an AVAsset-backed factory."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_retriever_factory() -> Result<Arc<dyn RetrieverFactory>> {
    use bridge_desktop::LoftyRetrieverFactory;

    let factory: Arc<dyn RetrieverFactory> = Arc::new(LoftyRetrieverFactory::new());
    Ok(factory)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_retriever_factory() -> Result<Arc<dyn RetrieverFactory>> {
    Err(retriever_factory_missing_error())
}

/// Builder for constructing [`CoreConfig`] instances.
#[derive(Default)]
pub struct CoreConfigBuilder {
    channel_name: Option<String>,
    retriever_factory: Option<Arc<dyn RetrieverFactory>>,
    logging: Option<LoggingConfig>,
}

impl CoreConfigBuilder {
    /// Sets the method channel name. Defaults to [`DEFAULT_CHANNEL_NAME`].
    pub fn channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = Some(name.into());
        self
    }

    /// Sets the media metadata facility.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use core_runtime::config::CoreConfig;
    /// use bridge_desktop::LoftyRetrieverFactory;
    /// use std::sync::Arc;
    ///
    /// let config = CoreConfig::builder()
    ///     .retriever_factory(Arc::new(LoftyRetrieverFactory::new()))
    ///     .build()?;
    /// ```
    pub fn retriever_factory(mut self, factory: Arc<dyn RetrieverFactory>) -> Self {
        self.retriever_factory = Some(factory);
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// # Errors
    ///
    /// - [`Error::CapabilityMissing`] when no retriever factory was provided
    ///   and no desktop default is available
    /// - [`Error::Config`] when the channel name is invalid
    pub fn build(self) -> Result<CoreConfig> {
        let retriever_factory = match self.retriever_factory {
            Some(factory) => factory,
            None => provide_default_retriever_factory()?,
        };

        let config = CoreConfig {
            channel_name: self
                .channel_name
                .unwrap_or_else(|| DEFAULT_CHANNEL_NAME.to_string()),
            retriever_factory,
            logging: self.logging.unwrap_or_default(),
        };

        config.validate()?;

        Ok(config)
    }
}
