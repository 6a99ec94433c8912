//! Threading bounds shared by the bridge traits.
//!
//! A factory is shared by every call on the channel, while each retriever is
//! created on the calling thread and may be moved onto Tokio's blocking pool
//! for the duration of a single call.

/// Bound for objects shared across calls (factories, log sinks).
pub trait PlatformSendSync: Send + Sync {}

impl<T> PlatformSendSync for T where T: Send + Sync {}

/// Bound for per-call objects that only move between threads.
pub trait PlatformSend: Send {}

impl<T> PlatformSend for T where T: Send {}
