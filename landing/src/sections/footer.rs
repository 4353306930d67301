use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::content::{FOOTER_BLURB, FOOTER_LINKS, NEWSLETTER_BLURB, NEWSLETTER_TITLE, SOCIAL_LINKS};
use crate::icons::{Icon, IconName};

/// Placeholder links point at `#` but never navigate.
fn inert_click(label: &'static str) -> impl Fn(MouseEvent) + Send + Sync + 'static {
    move |ev: MouseEvent| {
        ev.prevent_default();
        tracing::trace!(link = label, "inert footer link clicked");
    }
}

#[component]
pub fn Footer(brand: &'static str, copyright_year: u16) -> impl IntoView {
    let copyright = format!("\u{a9} {copyright_year} {brand}. All rights reserved.");

    view! {
        <footer class="bg-gray-900 text-white">
            <div class="px-4 py-12 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 gap-8 lg:grid-cols-4">
                    <div>
                        <h3 class="text-xl font-bold">{brand}</h3>
                        <p class="mt-4 text-gray-400">{FOOTER_BLURB}</p>
                        <div class="flex space-x-4 mt-6">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|&(icon, label)| {
                                    view! {
                                        <a
                                            href="#"
                                            class="social-link hover:text-blue-400"
                                            title=label
                                            on:click=inert_click(label)
                                        >
                                            <Icon icon=icon class="w-6 h-6" />
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    {FOOTER_LINKS
                        .iter()
                        .map(|&(heading, links)| view! { <LinkColumn heading=heading links=links /> })
                        .collect::<Vec<_>>()}
                    <Newsletter />
                </div>
                <div class="pt-8 mt-8 border-t border-gray-800 text-center text-gray-400">
                    <p>{copyright}</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(heading: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-semibold">{heading}</h3>
            <ul class="mt-4 space-y-2">
                {links
                    .iter()
                    .map(|&label| {
                        view! {
                            <li>
                                <a
                                    href="#"
                                    class="footer-link text-gray-400 hover:text-white"
                                    on:click=inert_click(label)
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Subscription form without a backend: submitting does nothing.
#[component]
fn Newsletter() -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        tracing::trace!("newsletter submit ignored");
    };

    view! {
        <div>
            <h3 class="text-lg font-semibold">{NEWSLETTER_TITLE}</h3>
            <p class="mt-4 text-gray-400">{NEWSLETTER_BLURB}</p>
            <form class="newsletter-form mt-4" on:submit=on_submit>
                <div class="flex">
                    <input
                        type="email"
                        placeholder="Enter your email"
                        class="px-4 py-2 w-full text-gray-900 rounded-l-lg focus:outline-none"
                    />
                    <button
                        type="submit"
                        class="px-4 py-2 bg-blue-600 rounded-r-lg hover:bg-blue-700 transition-colors"
                    >
                        <Icon icon=IconName::ArrowRight class="w-5 h-5" />
                    </button>
                </div>
            </form>
        </div>
    }
}
