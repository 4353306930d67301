use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::selection::FaqSelection;
use crate::sections::*;

/// The whole page. Owns the FAQ selection; every other section is static.
#[component]
pub fn App(#[prop(optional)] config: SiteConfig) -> impl IntoView {
    let (faq_selection, set_faq_selection) = signal(FaqSelection::none());

    view! {
        <div class="min-h-screen bg-gradient-to-b from-gray-50 to-white">
            <Hero />
            <Features />
            <Testimonials />
            <Pricing />
            <FaqSection selection=faq_selection on_toggle=faq_toggle(set_faq_selection) />
            <Footer brand=config.brand copyright_year=config.copyright_year />
        </div>
    }
}

/// Handler for FAQ header clicks: applies the toggle to the page's selection.
fn faq_toggle(set_selection: WriteSignal<FaqSelection>) -> impl Fn(usize) + Copy + Send + Sync + 'static {
    move |index: usize| {
        set_selection.update(|selection| {
            let before = *selection;
            selection.toggle(index);
            tracing::debug!(index, %before, after = %selection, "faq toggled");
        });
    }
}
