//! Core service façade and bootstrap helpers.
//!
//! This crate exposes the artwork method channel to host applications. A
//! host builds a [`CoreConfig`] (or relies on the desktop defaults), calls
//! [`bootstrap`], and forwards every incoming call to
//! [`ArtworkChannel::handle`] or [`ArtworkChannel::handle_async`].
//!
//! Desktop apps typically enable the `desktop-shims` feature, which injects
//! the lofty-backed media facility from `bridge-desktop`. Mobile hosts inject
//! their own `RetrieverFactory` through the config builder.
//!
//! ```ignore
//! use core_service::{bootstrap, MethodCall};
//! use core_runtime::config::CoreConfig;
//! use serde_json::json;
//!
//! let channel = bootstrap(CoreConfig::builder().build()?)?;
//! let reply = channel.handle(&MethodCall::new(
//!     "extractMetadata",
//!     json!({ "filePath": "/music/song.mp3" }),
//! ));
//! println!("{}", reply.to_json()?);
//! ```

pub mod channel;
pub mod codec;
pub mod error;

pub use channel::ArtworkChannel;
pub use codec::{MethodCall, MethodResponse, ReplyValue};
pub use core_runtime::config::CoreConfig;
pub use error::{CoreError, Result};

use core_metadata::MetadataAdapter;
use core_runtime::logging::init_logging;
use tracing::{debug, info};

/// Build the artwork channel described by `config`.
///
/// Installs the configured tracing subscriber; if the host already installed
/// one, that subscriber is kept.
pub fn bootstrap(config: CoreConfig) -> Result<ArtworkChannel> {
    config.validate()?;

    match init_logging(config.logging.clone()) {
        Ok(()) => {}
        Err(core_runtime::Error::Logging(reason)) => {
            debug!(%reason, "Keeping existing tracing subscriber");
        }
        Err(e) => {
            return Err(CoreError::InitializationFailed(format!(
                "Logging setup failed: {}",
                e
            )))
        }
    }

    let adapter = MetadataAdapter::new(config.retriever_factory);
    info!(channel = %config.channel_name, "Artwork channel ready");

    Ok(ArtworkChannel::new(config.channel_name, adapter))
}

/// Bootstrap with default configuration.
///
/// Without the `desktop-shims` feature no media facility is available and
/// this fails with [`CoreError::CapabilityMissing`].
pub fn bootstrap_default() -> Result<ArtworkChannel> {
    let config = CoreConfig::builder().build().map_err(|e| match e {
        core_runtime::Error::CapabilityMissing {
            capability,
            message,
        } => CoreError::CapabilityMissing {
            capability,
            message,
        },
        other => CoreError::Runtime(other),
    })?;

    bootstrap(config)
}
