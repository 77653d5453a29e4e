use super::FEATURES_ANCHOR;
use super::icons::{
    ICON_CHECK_CIRCLE, ICON_CURRENCY_DOLLAR, ICON_DEVICE_MOBILE, ICON_LEAF, ICON_LIGHTNING,
    ICON_WIND, Icon,
};
use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=FEATURES_ANCHOR class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Why Choose EcoNest?"</h2>
                    <p class="section-description">
                        "Designed for modern apartment living, EcoNest combines cutting-edge "
                        "technology with environmental responsibility."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon=ICON_WIND
                        title="Completely Odor-Free"
                        description="Advanced biochar filtration and sealed design eliminate odors entirely. Your neighbors will never know you're composting."
                    />
                    <FeatureCard
                        icon=ICON_LIGHTNING
                        title="Compost in 2-3 Weeks"
                        description="Controlled microbial decomposition accelerates the process. Traditional composting takes months; EcoNest takes weeks."
                    />
                    <FeatureCard
                        icon=ICON_DEVICE_MOBILE
                        title="App-Guided Simplicity"
                        description="The EcoNest app sends reminders, tracks progress, and provides tips. No guesswork required—just follow the guidance."
                    />
                    <FeatureCard
                        icon=ICON_CURRENCY_DOLLAR
                        title="Save Up to 80% on Compost"
                        description="Stop buying expensive compost. EcoNest produces nutrient-rich compost for just $0.50/kg versus $3-5/kg at stores."
                    />
                    <FeatureCard
                        icon=ICON_LEAF
                        title="Fits Anywhere"
                        description="Compact design fits under your kitchen sink or in a closet. Just 12 inches tall and 8 inches wide—smaller than a toaster."
                    />
                    <FeatureCard
                        icon=ICON_CHECK_CIRCLE
                        title="100% Biodegradable"
                        description="Made from recycled plastics and biodegradable components. When it reaches end-of-life, it composts itself."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">
                <Icon path=icon />
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
