//! Tracing subscriber setup.
//!
//! In the browser events go to the devtools console through `tracing-wasm`;
//! native builds (tests, tooling) use the `tracing-subscriber` fmt layer.

use tracing::Level;

/// Installs the global subscriber. Later calls are no-ops.
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

    let config = WASMLayerConfigBuilder::new().set_max_level(level).build();
    let _ = tracing_subscriber::registry()
        .with(WASMLayer::new(config))
        .try_init();
}

/// Installs the global subscriber. Later calls are no-ops.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
