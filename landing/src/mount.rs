//! Attaching the page to the host document.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::app::App;
use crate::config::SiteConfig;
use crate::error::{LandingError, Result};

/// Mounts [`App`] into the element with id `config.mount_id`.
///
/// The page stays mounted for the lifetime of the document.
pub fn mount(config: SiteConfig) -> Result<()> {
    let target = mount_target(config.mount_id)?;
    tracing::info!(mount_id = config.mount_id, "mounting landing page");
    leptos::mount::mount_to(target, move || view! { <App config=config /> }).forget();
    Ok(())
}

fn mount_target(id: &str) -> Result<HtmlElement> {
    let document = web_sys::window()
        .ok_or(LandingError::NoWindow)?
        .document()
        .ok_or(LandingError::NoDocument)?;

    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| LandingError::MissingMountPoint(id.to_string()))
}
