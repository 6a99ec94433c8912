//! Artwork method channel
//!
//! Routes host calls to the [`MetadataAdapter`]. Argument validation is the
//! only place a call can fail loudly; everything the adapter cannot answer
//! comes back as a successful `null`.

use core_metadata::MetadataAdapter;
use tracing::debug;

use crate::codec::{
    MethodCall, MethodResponse, EXTRACT_ARTWORK, EXTRACT_METADATA, FILE_PATH_ARGUMENT,
};
use crate::error::{CoreError, Result};

#[derive(Clone)]
pub struct ArtworkChannel {
    name: String,
    adapter: MetadataAdapter,
}

impl std::fmt::Debug for ArtworkChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtworkChannel")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ArtworkChannel {
    pub fn new(name: impl Into<String>, adapter: MetadataAdapter) -> Self {
        Self {
            name: name.into(),
            adapter,
        }
    }

    /// Channel name the host binds to.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn adapter(&self) -> &MetadataAdapter {
        &self.adapter
    }

    /// Dispatch a call synchronously on the current thread.
    pub fn handle(&self, call: &MethodCall) -> MethodResponse {
        debug!(channel = %self.name, method = %call.method, "Handling method call");

        match call.method.as_str() {
            EXTRACT_ARTWORK => match call.argument_str(FILE_PATH_ARGUMENT) {
                Some(path) => MethodResponse::success(self.adapter.extract_artwork(path)),
                None => MethodResponse::missing_file_path(),
            },
            EXTRACT_METADATA => match call.argument_str(FILE_PATH_ARGUMENT) {
                Some(path) => MethodResponse::success(self.adapter.extract_metadata(path)),
                None => MethodResponse::missing_file_path(),
            },
            other => {
                debug!(channel = %self.name, method = other, "Method not implemented");
                MethodResponse::NotImplemented
            }
        }
    }

    /// Dispatch a call on Tokio's blocking pool.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn handle_async(&self, call: MethodCall) -> Result<MethodResponse> {
        let channel = self.clone();
        tokio::task::spawn_blocking(move || channel.handle(&call))
            .await
            .map_err(|e| CoreError::TaskFailed(e.to_string()))
    }

    /// Decode a JSON call, dispatch it and encode the reply envelope.
    pub fn handle_json(&self, raw: &str) -> Result<String> {
        let call = MethodCall::from_json(raw)?;
        self.handle(&call).to_json()
    }
}
