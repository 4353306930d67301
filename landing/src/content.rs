//! Literal page content.
//!
//! Every collection is a `&'static` slice in display order. Nothing here is
//! loaded or validated at runtime: the page is re-derived from these literals
//! on every load.

use crate::icons::IconName;

/// One card of the features grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconName,
    pub title: &'static str,
    pub description: &'static str,
}

/// One column of the pricing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Display text, not a number ("Custom" is a valid price).
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    /// Rendered with inverted colors. Purely visual.
    pub highlighted: bool,
}

/// A customer quote with avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub content: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    /// External avatar URL, resolved by the browser.
    pub image: &'static str,
}

/// A question/answer pair of the FAQ accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Suffix appended to every tier price, including "Custom".
pub const PRICE_SUFFIX: &str = "/month";

pub const HERO_TITLE: &str = "Transform Your Workflow";
pub const HERO_SUBTITLE: &str = "Streamline your business operations with our powerful SaaS platform. \
                                 Built for modern teams who demand excellence.";
pub const HERO_PREVIEW_IMAGE: &str =
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=1200&q=80";

pub const FEATURES_TITLE: &str = "Everything you need to succeed";
pub const FEATURES_SUBTITLE: &str = "Powerful features to help you manage, analyze, and improve.";
pub const TESTIMONIALS_TITLE: &str = "Trusted by industry leaders";
pub const PRICING_TITLE: &str = "Simple, transparent pricing";
pub const PRICING_SUBTITLE: &str = "Choose the plan that's right for your business";
pub const FAQ_TITLE: &str = "Frequently Asked Questions";

pub const FOOTER_BLURB: &str = "Making workflow management simple and efficient for modern teams.";
pub const NEWSLETTER_TITLE: &str = "Stay Updated";
pub const NEWSLETTER_BLURB: &str = "Subscribe to our newsletter for the latest updates.";

/// Footer link columns: heading plus link labels.
pub const FOOTER_LINKS: &[(&str, &[&str])] = &[
    ("Product", &["Features", "Pricing", "Security"]),
    ("Company", &["About", "Blog", "Careers"]),
];

/// Social icons shown under the footer blurb.
pub const SOCIAL_LINKS: &[(IconName, &str)] = &[
    (IconName::Twitter, "Twitter"),
    (IconName::Github, "GitHub"),
    (IconName::Linkedin, "LinkedIn"),
];

pub static FEATURES: &[Feature] = &[
    Feature {
        icon: IconName::Zap,
        title: "Lightning Fast",
        description: "Experience blazing fast performance with our optimized infrastructure",
    },
    Feature {
        icon: IconName::Shield,
        title: "Enterprise Security",
        description: "Bank-grade security to keep your data safe and protected",
    },
    Feature {
        icon: IconName::Globe,
        title: "Global Scale",
        description: "Deploy worldwide with our distributed network architecture",
    },
    Feature {
        icon: IconName::MessageSquare,
        title: "24/7 Support",
        description: "Round-the-clock support from our dedicated team of experts",
    },
];

pub static PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Basic",
        price: "$29",
        description: "Perfect for small teams and startups",
        features: &[
            "Up to 5 team members",
            "10GB storage",
            "Basic analytics",
            "Email support",
        ],
        cta: "Start Free Trial",
        highlighted: false,
    },
    PricingTier {
        name: "Pro",
        price: "$99",
        description: "Ideal for growing businesses",
        features: &[
            "Up to 20 team members",
            "50GB storage",
            "Advanced analytics",
            "Priority support",
            "Custom integrations",
        ],
        cta: "Get Started",
        highlighted: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "Custom",
        description: "For large organizations",
        features: &[
            "Unlimited team members",
            "Unlimited storage",
            "Custom analytics",
            "24/7 phone support",
            "Dedicated account manager",
            "Custom deployment",
        ],
        cta: "Contact Sales",
        highlighted: false,
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        content: "This platform has transformed how we handle our workflow. The efficiency gains are remarkable.",
        author: "Sarah Johnson",
        role: "CTO at TechCorp",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=150&h=150",
    },
    Testimonial {
        content: "The best decision we made was switching to this solution. Our team productivity has increased by 200%.",
        author: "Michael Chen",
        role: "Product Manager at InnovateCo",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&w=150&h=150",
    },
];

pub static FAQS: &[Faq] = &[
    Faq {
        question: "How does the free trial work?",
        answer: "Our 14-day free trial gives you full access to all features. No credit card required.",
    },
    Faq {
        question: "Can I change plans later?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. Changes take effect immediately.",
    },
    Faq {
        question: "What kind of support do you offer?",
        answer: "We offer email support for Basic plans, priority support for Pro plans, and 24/7 phone support for Enterprise customers.",
    },
];
