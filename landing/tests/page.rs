//! Whole-page rendering checks.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;
use saas_landing::content::{FAQS, FEATURES, PRICING, TESTIMONIALS};
use saas_landing::{App, SiteConfig};

fn render_page() -> String {
    view! { <App /> }.to_html()
}

#[test]
fn sections_render_in_page_order() {
    let html = render_page();
    let ids = ["id=\"hero\"", "id=\"features\"", "id=\"testimonials\"", "id=\"pricing\"", "id=\"faq\"", "<footer"];
    let positions: Vec<usize> = ids
        .iter()
        .map(|id| html.find(id).unwrap_or_else(|| panic!("{id} missing")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn hero_has_two_inert_calls_to_action() {
    let html = render_page();
    assert!(html.contains("Transform Your Workflow"));
    assert!(html.contains("Watch Demo"));
    assert!(html.contains("alt=\"Dashboard Preview\""));

    let hero_end = html.find("id=\"features\"").unwrap();
    let hero = &html[..hero_end];
    assert_eq!(hero.matches("<button").count(), 2);
    assert!(!hero.contains("href="));
}

#[test]
fn every_literal_reaches_the_page() {
    let html = render_page();
    for feature in FEATURES {
        assert!(html.contains(feature.title));
        assert!(html.contains(feature.description));
    }
    for tier in PRICING {
        assert!(html.contains(tier.name));
        assert!(html.contains(tier.price));
        assert!(html.contains(tier.cta));
        for line in tier.features {
            assert!(html.contains(line), "{line} missing");
        }
    }
    for testimonial in TESTIMONIALS {
        assert!(html.contains(testimonial.content));
        assert!(html.contains(testimonial.image.split('?').next().unwrap()));
    }
    for faq in FAQS {
        assert!(html.contains(faq.question));
    }
}

#[test]
fn page_starts_with_faq_collapsed() {
    let html = render_page();
    for faq in FAQS {
        assert!(!html.contains(faq.answer));
    }
    assert_eq!(html.matches("rotate-180").count(), 0);
}

#[test]
fn footer_uses_configured_brand() {
    let config = SiteConfig {
        brand: "Acme Cloud",
        copyright_year: 2026,
        ..SiteConfig::default()
    };
    let html = view! { <App config=config /> }.to_html();
    assert!(html.contains("2026 Acme Cloud. All rights reserved."));
}
