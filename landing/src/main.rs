// SaaS Platform landing page: WASM entry point.

use leptos::prelude::*;
use saas_landing::{App, LandingError, SiteConfig, mount, telemetry};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::from_location() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    telemetry::init(config.log_level);
    if let Some(err) = config_error {
        tracing::warn!(%err, "ignoring page parameters");
    }

    match mount(config.clone()) {
        Ok(()) => {}
        Err(err @ LandingError::MissingMountPoint(_)) => {
            tracing::warn!(%err, "mounting to <body> instead");
            leptos::mount::mount_to_body(move || view! { <App config=config /> });
        }
        Err(err) => tracing::error!(%err, "landing page not mounted"),
    }
}
