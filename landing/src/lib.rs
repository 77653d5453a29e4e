//! # econest-landing
//!
//! EcoNest landing page, Leptos 0.8 client-side rendered and served by trunk.
//!
//! ```text
//! App
//! ├── Providers (SiteConfig + Toaster contexts, theme, ToastStack)
//! └── ErrorBoundary
//!     └── Router (base = SiteConfig::base_path)
//!         ├── "/"    -> HomePage (Nav, Hero, Features, Benefits, WaitlistSection, Faq, Footer)
//!         ├── "/404" -> NotFoundPage
//!         └── *      -> NotFoundPage
//! ```
//!
//! All form rules live in the `econest` crate; this crate binds them to signals,
//! browser timers and toasts.

pub mod dom;
pub mod logging;
pub mod pages;
pub mod sections;
pub mod timer;
pub mod toast;

use econest::SiteConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use tracing::{info, warn};

use pages::{HomePage, NotFoundPage};
use toast::{ToastStack, Toaster};

/// Site configuration baked into the bundle.
const SITE_CONFIG: &str = include_str!("../econest.toml");

/// Entry point used by `main`: panic hook, config, logging, mount.
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::from_toml_str(SITE_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    logging::init(&config.log_level);
    if let Some(err) = config_error {
        warn!(error = %err, "falling back to default site config");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_path = %config.base_path,
        "starting EcoNest landing"
    );
    dom::set_document_title(&config.title);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

/// Root component.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let base = config.base_path.clone();

    view! {
        <Providers config=config>
            <ErrorBoundary fallback=|_errors| view! { <ErrorFallback /> }>
                <Router base=base>
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/404") view=NotFoundPage />
                    </Routes>
                </Router>
            </ErrorBoundary>
        </Providers>
    }
}

/// Provides the [`SiteConfig`] and [`Toaster`] contexts, applies the theme and
/// renders the toast stack next to `children`.
#[component]
pub fn Providers(config: SiteConfig, children: Children) -> impl IntoView {
    dom::apply_theme(config.theme);
    let toaster = Toaster::new(config.timings.toast_duration());
    provide_context(config);
    provide_context(toaster);

    view! {
        <ToastStack toaster=toaster />
        {children()}
    }
}

/// Shown instead of the page when rendering fails.
#[component]
fn ErrorFallback() -> impl IntoView {
    view! {
        <div class="error-fallback" role="alert">
            <h2 class="error-title">"An unexpected error occurred."</h2>
            <button class="btn btn-primary" on:click=move |_| dom::reload_page()>
                "Reload Page"
            </button>
        </div>
    }
}
