use super::{FEATURES_ANCHOR, WAITLIST_ANCHOR};
use crate::dom::scroll_to_section;
use econest::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let hero_src = use_context::<SiteConfig>().unwrap_or_default().hero_src();

    view! {
        <section class="hero">
            <div class="hero-blobs" aria-hidden="true">
                <div class="hero-blob hero-blob-top"></div>
                <div class="hero-blob hero-blob-bottom"></div>
            </div>
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            "Compost Without the "
                            <span class="hero-title-accent">"Compromise"</span>
                        </h1>
                        <p class="hero-description">
                            "EcoNest brings the benefits of composting to your apartment. "
                            "Reduce waste, save money, and grow your garden—all from your kitchen."
                        </p>
                        <div class="hero-actions">
                            <button
                                class="btn btn-primary btn-lg"
                                on:click=move |_| scroll_to_section(WAITLIST_ANCHOR)
                            >
                                "Join the Waiting List"
                            </button>
                            <button
                                class="btn btn-outline btn-lg"
                                on:click=move |_| scroll_to_section(FEATURES_ANCHOR)
                            >
                                "Learn More"
                            </button>
                        </div>
                        <p class="hero-perks">
                            "✓ Early-bird pricing (30% off) • ✓ Limited spots available • ✓ Launch Q2 2025"
                        </p>
                    </div>
                    <div class="hero-media">
                        <img
                            class="hero-image"
                            src=hero_src
                            alt="EcoNest Smart Composting System"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
