//! FAQ accordion, the only stateful section.
//!
//! The section does not own its state: the page passes the current
//! [`FaqSelection`] and a callback that toggles an entry by index.

use leptos::prelude::*;

use crate::content::{FAQ_TITLE, FAQS, Faq};
use crate::icons::{Icon, IconName};
use crate::selection::FaqSelection;

const CHEVRON_CLASS: &str = "w-5 h-5 transition-transform";
const CHEVRON_CLASS_OPEN: &str = "w-5 h-5 transition-transform transform rotate-180";

#[component]
pub fn FaqSection(
    /// Currently expanded entry
    #[prop(into)]
    selection: Signal<FaqSelection>,
    /// Invoked with the index of the clicked header
    #[prop(into)]
    on_toggle: Callback<usize>,
) -> impl IntoView {
    view! {
        <section id="faq" class="py-20 bg-gray-50">
            <div class="px-4 mx-auto max-w-3xl sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center text-gray-900 sm:text-4xl">{FAQ_TITLE}</h2>
                <div class="mt-12 space-y-4">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, &faq)| {
                            view! {
                                <FaqItem
                                    faq=faq
                                    open=Signal::derive(move || selection.get().is_open(index))
                                    on_click=Callback::new(move |()| on_toggle.run(index))
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqItem(faq: Faq, open: Signal<bool>, on_click: Callback<()>) -> impl IntoView {
    view! {
        <div class="faq-item bg-white rounded-lg shadow">
            <button
                type="button"
                class="flex justify-between w-full px-6 py-4 text-left"
                on:click=move |_| on_click.run(())
            >
                <span class="text-lg font-semibold">{faq.question}</span>
                {move || {
                    let class = if open.get() { CHEVRON_CLASS_OPEN } else { CHEVRON_CLASS };
                    view! { <Icon icon=IconName::ChevronDown class=class /> }
                }}
            </button>
            {move || {
                open.get()
                    .then(|| view! { <div class="faq-answer px-6 pb-4 text-gray-600">{faq.answer}</div> })
            }}
        </div>
    }
}
