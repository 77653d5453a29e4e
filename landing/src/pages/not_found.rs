// Catch-all route
use econest::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let home = format!("{}/", use_context::<SiteConfig>().unwrap_or_default().base_path);

    view! {
        <main class="not-found">
            <div class="not-found-card">
                <p class="not-found-code">"404"</p>
                <h1 class="not-found-title">"Page Not Found"</h1>
                <p class="not-found-text">
                    "Sorry, the page you are looking for doesn't exist. It may have been moved or deleted."
                </p>
                <a href=home class="btn btn-primary">"Go Home"</a>
            </div>
        </main>
    }
}
