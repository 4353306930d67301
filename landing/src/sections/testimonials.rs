use leptos::prelude::*;

use crate::content::{TESTIMONIALS, TESTIMONIALS_TITLE, Testimonial};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-20 bg-gray-50">
            <div class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center text-gray-900 sm:text-4xl">
                    {TESTIMONIALS_TITLE}
                </h2>
                <div class="grid grid-cols-1 gap-8 mt-16 lg:grid-cols-2">
                    {TESTIMONIALS
                        .iter()
                        .map(|&testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let quote = format!("\"{}\"", testimonial.content);
    view! {
        <figure class="testimonial-card p-8 bg-white rounded-xl shadow-lg">
            <blockquote class="text-lg text-gray-600 italic">{quote}</blockquote>
            <figcaption class="flex items-center mt-6">
                <img src=testimonial.image alt=testimonial.author class="w-12 h-12 rounded-full" />
                <div class="ml-4">
                    <h4 class="text-lg font-semibold text-gray-900">{testimonial.author}</h4>
                    <p class="text-gray-600">{testimonial.role}</p>
                </div>
            </figcaption>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_quotes_with_author_and_avatar() {
        let html = view! { <Testimonials /> }.to_html();
        assert_eq!(html.matches("class=\"testimonial-card ").count(), 2);

        for t in TESTIMONIALS {
            assert!(html.contains(t.author));
            assert!(html.contains(t.role));
            assert!(html.contains(&format!("alt=\"{}\"", t.author)));
        }
        assert!(html.find("Sarah Johnson") < html.find("Michael Chen"));
    }

    #[test]
    fn quote_uses_straight_quotation_marks() {
        let html = view! { <TestimonialCard testimonial=TESTIMONIALS[0] /> }.to_html();
        assert!(html.contains(&format!("\"{}\"", TESTIMONIALS[0].content)));
        assert!(!html.contains('\u{201c}'));
    }
}
