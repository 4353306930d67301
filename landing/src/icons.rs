//! Inline SVG icon set.
//!
//! Icons are stroke-drawn on a 24x24 grid (Lucide geometry). Each symbol is a
//! variant of [`IconName`], so content can only reference icons that exist.

use leptos::prelude::*;

/// A renderable named symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Zap,
    Shield,
    Globe,
    MessageSquare,
    CheckCircle,
    ChevronDown,
    ArrowRight,
    Twitter,
    Github,
    Linkedin,
}

impl IconName {
    /// SVG path data (`d` attributes), drawn in order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconName::Zap => &[ICON_ZAP],
            IconName::Shield => &[ICON_SHIELD],
            IconName::Globe => &[ICON_CIRCLE, ICON_GLOBE_MERIDIAN, "M2 12h20"],
            IconName::MessageSquare => &[ICON_MESSAGE_SQUARE],
            IconName::CheckCircle => &[ICON_CIRCLE, "m9 12 2 2 4-4"],
            IconName::ChevronDown => &["m6 9 6 6 6-6"],
            IconName::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconName::Twitter => &[ICON_TWITTER],
            IconName::Github => &[ICON_GITHUB, "M9 18c-4.51 2-5-2-7-2"],
            IconName::Linkedin => &[ICON_LINKEDIN, "M2 9h4v12H2z", "M6 4a2 2 0 1 1-4 0 2 2 0 0 1 4 0z"],
        }
    }

    /// Stable kebab-case name, emitted as `data-icon`.
    pub fn as_str(self) -> &'static str {
        match self {
            IconName::Zap => "zap",
            IconName::Shield => "shield",
            IconName::Globe => "globe",
            IconName::MessageSquare => "message-square",
            IconName::CheckCircle => "check-circle",
            IconName::ChevronDown => "chevron-down",
            IconName::ArrowRight => "arrow-right",
            IconName::Twitter => "twitter",
            IconName::Github => "github",
            IconName::Linkedin => "linkedin",
        }
    }
}

/// Renders an inline SVG icon.
///
/// ```rust,ignore
/// view! { <Icon icon=IconName::Zap class="w-12 h-12 text-blue-600" /> }
/// ```
#[component]
pub fn Icon(
    icon: IconName,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-icon=icon.as_str()
            aria-hidden="true"
        >
            {icon.paths().iter().map(|&d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

// =============================================================================
// Path data
// =============================================================================

const ICON_CIRCLE: &str = "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z";

const ICON_ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";

const ICON_SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z";

const ICON_GLOBE_MERIDIAN: &str =
    "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";

const ICON_MESSAGE_SQUARE: &str = "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z";

const ICON_TWITTER: &str = "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z";

const ICON_GITHUB: &str = "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4";

const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z";
