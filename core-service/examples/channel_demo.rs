//! Artwork channel demonstration
//!
//! Feeds JSON method calls for one media file through the channel and prints
//! the reply envelopes, the way a host runtime would see them.
//!
//! Run with:
//! ```bash
//! # Tags and artwork of a file
//! cargo run -p core-service --example channel_demo -- ~/Music/song.mp3
//!
//! # JSON log output
//! cargo run -p core-service --example channel_demo -- ~/Music/song.flac json
//! ```

use bridge_traits::LogLevel;
use core_runtime::logging::{LogFormat, LoggingConfig};
use core_service::{bootstrap, CoreConfig, MethodCall};
use serde_json::json;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let path = args
        .get(1)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("usage: channel_demo <media file> [json|compact|pretty]"))?;

    let format = match args.get(2).map(String::as_str) {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        Some("pretty") => LogFormat::Pretty,
        _ => LogFormat::default(),
    };

    let config = CoreConfig::builder()
        .logging(
            LoggingConfig::default()
                .with_format(format)
                .with_level(LogLevel::Debug),
        )
        .build()?;

    let channel = bootstrap(config)?;
    info!(channel = channel.name(), "=== Artwork Channel Demo ===");

    // Raw JSON path, as a host would deliver it
    let raw = json!({ "method": "extractMetadata", "arguments": { "filePath": path } });
    println!("extractMetadata -> {}", channel.handle_json(&raw.to_string())?);

    // Async dispatch on the blocking pool
    let call = MethodCall::new("extractArtwork", json!({ "filePath": path }));
    let reply = channel.handle_async(call).await?;
    let envelope = reply.to_envelope()?;
    match envelope["result"].as_str() {
        Some(encoded) => println!("extractArtwork -> {} base64 chars", encoded.len()),
        None => println!("extractArtwork -> {}", envelope),
    }

    // Contract violations
    println!(
        "missing filePath -> {}",
        channel.handle_json(r#"{"method":"extractArtwork","arguments":{}}"#)?
    );
    println!(
        "unknown method -> {}",
        channel.handle_json(r#"{"method":"extractLyrics","arguments":{}}"#)?
    );

    info!("=== Demo Complete ===");
    Ok(())
}
