// Home page - the whole landing
use crate::sections::{Benefits, Faq, Features, Footer, Hero, Nav, WaitlistSection};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Nav />
            <main class="page-main">
                <Hero />
                <Features />
                <Benefits />
                <WaitlistSection />
                <Faq />
            </main>
            <Footer />
        </div>
    }
}
