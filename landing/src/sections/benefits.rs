use super::icons::{ICON_CHECK_CIRCLE, Icon};
use leptos::prelude::*;

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section class="benefits">
            <div class="container">
                <div class="benefits-grid">
                    <div>
                        <h2 class="section-title">"Perfect for Urban Living"</h2>
                        <ul class="benefits-list">
                            <BenefitItem
                                headline="No outdoor space required"
                                detail="Works indoors in any apartment"
                            />
                            <BenefitItem
                                headline="Minimal maintenance"
                                detail="Just 5 minutes per week"
                            />
                            <BenefitItem
                                headline="Renter-friendly"
                                detail="No permanent installation needed"
                            />
                            <BenefitItem
                                headline="Reduce waste by 30%"
                                detail="Divert organic waste from landfills"
                            />
                        </ul>
                    </div>
                    <div class="stats-panel">
                        <Stat value="30%" caption="Reduction in household waste" />
                        <Stat value="2-3 weeks" caption="Time to get ready-to-use compost" />
                        <Stat value="80%" caption="Savings on compost costs annually" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitItem(headline: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <li class="benefit-item">
            <Icon path=ICON_CHECK_CIRCLE class="benefit-icon" />
            <span class="benefit-text">
                <strong>{headline}</strong>
                " — "
                {detail}
            </span>
        </li>
    }
}

#[component]
fn Stat(value: &'static str, caption: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <p class="stat-value">{value}</p>
            <p class="stat-caption">{caption}</p>
        </div>
    }
}
