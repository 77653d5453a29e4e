//! In-browser tests for the landing page.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use econest::{Delay, SiteConfig, Theme, Timings};
use econest_landing::Providers;
use econest_landing::pages::{HomePage, NotFoundPage};
use econest_landing::timer::BrowserDelay;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn quick_config() -> SiteConfig {
    SiteConfig {
        timings: Timings {
            submit_latency_ms: 10,
            success_display_ms: 250,
            toast_duration_ms: 5000,
        },
        ..SiteConfig::default()
    }
}

/// Mounts `HomePage` under its own container so tests don't see each other.
fn mount_home(config: SiteConfig) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&container).unwrap();

    leptos::mount::mount_to(container.clone(), move || {
        view! {
            <Providers config=config>
                <HomePage />
            </Providers>
        }
    })
    .forget();
    container
}

fn text_of(container: &HtmlElement) -> String {
    container.text_content().unwrap_or_default()
}

fn input(container: &HtmlElement, selector: &str) -> HtmlInputElement {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {selector}"))
        .unchecked_into()
}

fn fire(target: &web_sys::Element, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn type_into(container: &HtmlElement, selector: &str, value: &str) {
    let field = input(container, selector);
    field.set_value(value);
    fire(&field, "input");
}

/// Dispatches `submit` directly, skipping the browser's `required` check.
fn submit(container: &HtmlElement) {
    let form = container.query_selector("form.waitlist-form").unwrap().unwrap();
    fire(&form, "submit");
}

async fn settle(millis: u64) {
    BrowserDelay.sleep(Duration::from_millis(millis)).await;
}

#[wasm_bindgen_test]
async fn home_page_renders_every_section() {
    let container = mount_home(quick_config());
    settle(0).await;
    let text = text_of(&container);

    for expected in [
        "Compost Without the Compromise",
        "Join the Waiting List",
        "Learn More",
        "Completely Odor-Free",
        "Compost in 2-3 Weeks",
        "App-Guided Simplicity",
        "Save Up to 80% on Compost",
        "Fits Anywhere",
        "100% Biodegradable",
        "Perfect for Urban Living",
        "2-3 weeks",
        "Ready to Transform Your Waste Into Wealth?",
        "Secure My Spot on the Waiting List",
        "Frequently Asked Questions",
        "When will EcoNest launch?",
        "Privacy Policy",
        "© 2025 EcoNest. All rights reserved.",
    ] {
        assert!(text.contains(expected), "page is missing {expected:?}");
    }

    let image = container.query_selector("img.hero-image").unwrap().unwrap();
    assert_eq!(
        image.get_attribute("alt").as_deref(),
        Some("EcoNest Smart Composting System")
    );
    assert_eq!(container.query_selector_all(".faq-item").unwrap().length(), 5);
}

#[wasm_bindgen_test]
async fn form_starts_empty_with_updates_opted_in() {
    let container = mount_home(quick_config());
    settle(0).await;

    assert_eq!(input(&container, "#firstName").value(), "");
    assert_eq!(input(&container, "#email").value(), "");
    assert!(input(&container, "#updates").checked());
}

#[wasm_bindgen_test]
async fn theme_class_is_applied_to_the_document() {
    let config = SiteConfig {
        theme: Theme::Dark,
        ..quick_config()
    };
    let _container = mount_home(config);
    settle(0).await;

    let root = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap();
    assert!(root.class_list().contains("dark"));
    assert!(!root.class_list().contains("light"));
}

#[wasm_bindgen_test]
async fn missing_first_name_shows_error_toast() {
    let container = mount_home(quick_config());
    settle(0).await;

    type_into(&container, "#email", "jane@x.com");
    submit(&container);
    settle(50).await;

    let toast = container.query_selector(".toast-error").unwrap().unwrap();
    assert!(
        toast
            .text_content()
            .unwrap_or_default()
            .contains("Please fill in all required fields")
    );
    assert!(container.query_selector(".waitlist-success").unwrap().is_none());
    assert_eq!(input(&container, "#email").value(), "jane@x.com");
}

#[wasm_bindgen_test]
async fn valid_signup_shows_success_then_fresh_form() {
    let container = mount_home(quick_config());
    settle(0).await;

    type_into(&container, "#firstName", "Jane");
    type_into(&container, "#email", "jane@x.com");
    submit(&container);
    settle(100).await;

    assert!(text_of(&container).contains("Welcome to EcoNest!"));
    let toast = container.query_selector(".toast-success").unwrap().unwrap();
    assert!(
        toast
            .text_content()
            .unwrap_or_default()
            .contains("You're on the waiting list!")
    );

    settle(400).await;

    assert!(container.query_selector(".waitlist-success").unwrap().is_none());
    assert_eq!(input(&container, "#firstName").value(), "");
    assert_eq!(input(&container, "#email").value(), "");
    assert!(input(&container, "#updates").checked());
}

#[wasm_bindgen_test]
async fn not_found_page_links_home_under_base_path() {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&container).unwrap();

    leptos::mount::mount_to(container.clone(), || {
        view! {
            <Providers config=SiteConfig::default()>
                <NotFoundPage />
            </Providers>
        }
    })
    .forget();
    settle(0).await;

    assert!(text_of(&container).contains("Page Not Found"));
    let link = container.query_selector("a.btn").unwrap().unwrap();
    assert_eq!(link.get_attribute("href").as_deref(), Some("/econest_landing/"));
}
