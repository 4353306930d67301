use leptos::prelude::*;

use crate::content::{HERO_PREVIEW_IMAGE, HERO_SUBTITLE, HERO_TITLE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="px-4 py-20 mx-auto max-w-7xl sm:px-6 lg:px-8">
            <div class="flex flex-col items-center text-center">
                <h1 class="text-5xl font-bold tracking-tight text-gray-900 sm:text-6xl">
                    {HERO_TITLE}
                </h1>
                <p class="mt-6 text-xl text-gray-600 max-w-2xl">{HERO_SUBTITLE}</p>
                // Both calls to action are placeholders: no handler, no navigation.
                <div class="mt-8 flex gap-4">
                    <button
                        type="button"
                        class="px-8 py-3 text-white bg-blue-600 rounded-lg hover:bg-blue-700 transition-colors"
                    >
                        "Start Free Trial"
                    </button>
                    <button
                        type="button"
                        class="px-8 py-3 text-blue-600 border border-blue-600 rounded-lg hover:bg-blue-50 transition-colors"
                    >
                        "Watch Demo"
                    </button>
                </div>
                <img
                    src=HERO_PREVIEW_IMAGE
                    alt="Dashboard Preview"
                    class="mt-16 rounded-lg shadow-2xl"
                />
            </div>
        </section>
    }
}
