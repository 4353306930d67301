use leptos::prelude::*;

use crate::content::{PRICE_SUFFIX, PRICING, PRICING_SUBTITLE, PRICING_TITLE, PricingTier};
use crate::icons::{Icon, IconName};

const CARD_CLASS: &str = "pricing-card p-8 rounded-xl bg-gray-50";
const CARD_CLASS_HIGHLIGHTED: &str =
    "pricing-card p-8 rounded-xl bg-blue-600 text-white ring-4 ring-blue-600 ring-opacity-50";
const BUTTON_CLASS: &str =
    "mt-8 w-full py-3 px-6 rounded-lg bg-blue-600 text-white hover:bg-blue-700 transition-colors";
const BUTTON_CLASS_HIGHLIGHTED: &str =
    "mt-8 w-full py-3 px-6 rounded-lg bg-white text-blue-600 hover:bg-gray-100 transition-colors";

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 bg-white">
            <div class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center text-gray-900 sm:text-4xl">{PRICING_TITLE}</h2>
                <p class="mt-4 text-lg text-center text-gray-600">{PRICING_SUBTITLE}</p>
                <div class="grid grid-cols-1 gap-8 mt-16 lg:grid-cols-3">
                    {PRICING.iter().map(|&tier| view! { <TierCard tier=tier /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One plan. Highlighting only swaps colors; the button is equally inert.
#[component]
fn TierCard(tier: PricingTier) -> impl IntoView {
    let (card_class, button_class) = if tier.highlighted {
        (CARD_CLASS_HIGHLIGHTED, BUTTON_CLASS_HIGHLIGHTED)
    } else {
        (CARD_CLASS, BUTTON_CLASS)
    };

    view! {
        <div class=card_class data-tier=tier.name>
            <h3 class="text-2xl font-bold">{tier.name}</h3>
            <p class="mt-4 text-sm">{tier.description}</p>
            <p class="mt-6">
                <span class="text-4xl font-bold">{tier.price}</span>
                <span class="text-sm">{PRICE_SUFFIX}</span>
            </p>
            <ul class="mt-6 space-y-4">
                {tier
                    .features
                    .iter()
                    .map(|&line| {
                        view! {
                            <li class="flex items-center">
                                <Icon icon=IconName::CheckCircle class="w-5 h-5 mr-2" />
                                {line}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <button type="button" class=button_class>
                {tier.cta}
            </button>
        </div>
    }
}
