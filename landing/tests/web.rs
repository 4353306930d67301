//! Browser tests: `wasm-pack test --headless --firefox landing`

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use saas_landing::{App, SiteConfig};
use saas_landing::content::FAQS;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use tracing::Level;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mounts a fresh page into its own container so tests do not see each other.
fn mount_page() -> HtmlElement {
    let container = document()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document().body().unwrap().append_child(&container).unwrap();
    leptos::mount::mount_to(container.clone(), || view! { <App /> }).forget();
    container
}

fn faq_headers(page: &HtmlElement) -> Vec<HtmlElement> {
    let nodes = page.query_selector_all(".faq-item > button").unwrap();
    (0..nodes.length())
        .map(|i| nodes.item(i).unwrap().dyn_into::<HtmlElement>().unwrap())
        .collect()
}

fn open_answers(page: &HtmlElement) -> Vec<String> {
    let nodes = page.query_selector_all(".faq-answer").unwrap();
    (0..nodes.length())
        .map(|i| nodes.item(i).unwrap().text_content().unwrap_or_default())
        .collect()
}

#[wasm_bindgen_test]
async fn faq_headers_toggle_a_single_answer() {
    let page = mount_page();
    assert!(open_answers(&page).is_empty());

    let headers = faq_headers(&page);
    assert_eq!(headers.len(), FAQS.len());

    headers[0].click();
    leptos::task::tick().await;
    assert_eq!(open_answers(&page), vec![FAQS[0].answer.to_string()]);

    headers[2].click();
    leptos::task::tick().await;
    assert_eq!(open_answers(&page), vec![FAQS[2].answer.to_string()]);

    headers[2].click();
    leptos::task::tick().await;
    assert!(open_answers(&page).is_empty());
}

#[wasm_bindgen_test]
async fn inert_controls_keep_page_and_state() {
    let page = mount_page();
    let href = web_sys::window().unwrap().location().href().unwrap();

    let controls = page
        .query_selector_all("#hero button, .pricing-card button, .footer-link, .social-link, .newsletter-form button")
        .unwrap();
    assert!(controls.length() > 0);
    for i in 0..controls.length() {
        controls.item(i).unwrap().dyn_into::<HtmlElement>().unwrap().click();
    }
    leptos::task::tick().await;

    assert_eq!(web_sys::window().unwrap().location().href().unwrap(), href);
    assert!(open_answers(&page).is_empty());
}

#[wasm_bindgen_test]
fn query_values_are_percent_decoded() {
    let config = SiteConfig::from_query("?log=%64ebug").unwrap();
    assert_eq!(config.log_level, Level::DEBUG);
}

#[wasm_bindgen_test]
fn first_log_parameter_wins() {
    let config = SiteConfig::from_query("log=warn&utm_source=ad&log=trace").unwrap();
    assert_eq!(config.log_level, Level::WARN);
}

#[wasm_bindgen_test]
fn unknown_parameters_are_ignored() {
    let config = SiteConfig::from_query("?ref=newsletter&theme=dark").unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(SiteConfig::from_query("").unwrap(), SiteConfig::default());
}
