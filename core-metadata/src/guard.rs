use bridge_traits::{MetadataRetriever, RetrieverFactory};
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// Owns a retriever for the duration of one adapter call.
///
/// Release happens in `Drop`, so it runs exactly once on every exit path,
/// including early returns and `?` propagation. Release failures are logged
/// and dropped; they never reach the caller.
pub(crate) struct RetrieverGuard {
    retriever: Box<dyn MetadataRetriever>,
}

impl RetrieverGuard {
    pub(crate) fn acquire(factory: &dyn RetrieverFactory) -> Self {
        Self {
            retriever: factory.create(),
        }
    }
}

impl Deref for RetrieverGuard {
    type Target = dyn MetadataRetriever;

    fn deref(&self) -> &Self::Target {
        self.retriever.as_ref()
    }
}

impl DerefMut for RetrieverGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.retriever.as_mut()
    }
}

impl Drop for RetrieverGuard {
    fn drop(&mut self) {
        if let Err(e) = self.retriever.release() {
            debug!(error = %e, "Ignoring retriever release failure");
        }
    }
}
