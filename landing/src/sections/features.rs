use leptos::prelude::*;

use crate::content::{FEATURES, FEATURES_SUBTITLE, FEATURES_TITLE, Feature};
use crate::icons::Icon;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-20 bg-white">
            <div class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <div class="text-center">
                    <h2 class="text-3xl font-bold text-gray-900 sm:text-4xl">{FEATURES_TITLE}</h2>
                    <p class="mt-4 text-lg text-gray-600">{FEATURES_SUBTITLE}</p>
                </div>
                <div class="grid grid-cols-1 gap-8 mt-16 sm:grid-cols-2 lg:grid-cols-4">
                    {FEATURES
                        .iter()
                        .map(|&feature| view! { <FeatureCard feature=feature /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card p-6 bg-gray-50 rounded-xl hover:shadow-lg transition-shadow">
            <Icon icon=feature.icon class="w-12 h-12 text-blue-600" />
            <h3 class="mt-4 text-xl font-semibold text-gray-900">{feature.title}</h3>
            <p class="mt-2 text-gray-600">{feature.description}</p>
        </article>
    }
}
