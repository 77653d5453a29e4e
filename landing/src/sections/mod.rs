// Landing page sections

mod benefits;
mod faq;
mod features;
mod footer;
mod hero;
pub mod icons;
mod nav;
mod waitlist;

pub use benefits::Benefits;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use waitlist::WaitlistSection;

/// Anchor id of the waitlist section (scroll target of every CTA)
pub const WAITLIST_ANCHOR: &str = "waitlist";
/// Anchor id of the features section
pub const FEATURES_ANCHOR: &str = "features";
