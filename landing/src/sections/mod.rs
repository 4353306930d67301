// Landing page sections, top to bottom.

mod faq;
mod features;
mod footer;
mod hero;
mod pricing;
mod testimonials;

pub use faq::FaqSection;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
