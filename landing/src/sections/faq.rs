use super::icons::{ICON_CARET_DOWN, Icon};
use leptos::prelude::*;

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id="faq" class="faq">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                </div>
                <div class="faq-list">
                    <FaqItem
                        question="How does EcoNest work?"
                        answer="EcoNest uses a combination of biochar filtration, controlled microbial decomposition, and smart sensors to break down kitchen waste into nutrient-rich compost in just 2-3 weeks. Simply add your food scraps, and the app guides you through the process."
                    />
                    <FaqItem
                        question="Is it really odor-free?"
                        answer="Yes! EcoNest's sealed design and advanced biochar filtration system completely eliminate odors. It's designed to sit in your kitchen without any unpleasant smells."
                    />
                    <FaqItem
                        question="What can I compost in EcoNest?"
                        answer="You can compost most kitchen scraps: fruit and vegetable peels, coffee grounds, tea bags, eggshells, and more. The app provides a complete list of what's safe to add."
                    />
                    <FaqItem
                        question="When will EcoNest launch?"
                        answer="We're launching in Q2 2025. Early waitlist members will receive 30% off the regular price and exclusive access to pre-order."
                    />
                    <FaqItem
                        question="How much does it cost?"
                        answer="Pricing details will be announced soon. Waitlist members will get early-bird pricing at 30% off. Join now to secure your discount!"
                    />
                </div>
            </div>
        </section>
    }
}

/// Native `<details>` accordion; the browser keeps the open state.
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    view! {
        <details class="faq-item">
            <summary class="faq-question">
                {question}
                <Icon path=ICON_CARET_DOWN size="20" class="faq-caret" />
            </summary>
            <p class="faq-answer">{answer}</p>
        </details>
    }
}
