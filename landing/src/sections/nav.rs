use super::WAITLIST_ANCHOR;
use super::icons::{ICON_LEAF, Icon};
use crate::dom::scroll_to_section;
use econest::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let title = use_context::<SiteConfig>().unwrap_or_default().title;

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <div class="nav-brand">
                    <Icon path=ICON_LEAF class="nav-logo" />
                    <span class="nav-title">{title}</span>
                </div>
                <button
                    class="btn btn-primary nav-cta"
                    on:click=move |_| scroll_to_section(WAITLIST_ANCHOR)
                >
                    "Join Waitlist"
                </button>
            </div>
        </nav>
    }
}
