//! Waitlist signup: the one interactive section.
//!
//! The form state is an [`econest::WaitlistForm`] inside a signal owned by
//! [`WaitlistSection`]. Submitting spawns [`econest::submit_waitlist`] with the
//! simulated submitter and browser timers; if the section is unmounted while the
//! task sleeps, the disposed signal turns the completion into a no-op.

use super::WAITLIST_ANCHOR;
use super::icons::{ICON_CHECK_CIRCLE, ICON_ENVELOPE, Icon};
use crate::timer::BrowserDelay;
use crate::toast::Toaster;
use econest::{
    ApartmentType, FormStore, SimulatedSubmitter, SiteConfig, Timings, WaitlistForm,
    submit_waitlist,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

/// [`FormStore`] over a Leptos signal. Disposed signal means unmounted.
#[derive(Clone, Copy)]
struct SignalStore(RwSignal<WaitlistForm>);

impl FormStore for SignalStore {
    fn with_form<R>(&self, f: impl FnOnce(&mut WaitlistForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

#[component]
pub fn WaitlistSection() -> impl IntoView {
    let timings = use_context::<SiteConfig>().unwrap_or_default().timings;
    let toaster = Toaster::from_context();
    let form = RwSignal::new(WaitlistForm::default());
    let subscribed = move || form.with(WaitlistForm::is_subscribed);

    view! {
        <section id=WAITLIST_ANCHOR class="waitlist">
            <div class="container container-narrow">
                <div class="section-header">
                    <h2 class="section-title">"Ready to Transform Your Waste Into Wealth?"</h2>
                    <p class="section-description">
                        "Join thousands of eco-conscious apartment dwellers who are already on the "
                        "waiting list. Get early-bird pricing (30% off) and exclusive launch updates."
                    </p>
                </div>

                <Show
                    when=subscribed
                    fallback=move || {
                        view! { <SignupForm form=form toaster=toaster timings=timings.clone() /> }
                    }
                >
                    <SuccessPanel />
                </Show>

                <p class="waitlist-proof">
                    <Icon path=ICON_ENVELOPE size="20" class="waitlist-proof-icon" />
                    "Join 5,000+ people waiting for EcoNest"
                </p>
            </div>
        </section>
    }
}

#[component]
fn SuccessPanel() -> impl IntoView {
    view! {
        <div class="waitlist-success" role="status">
            <Icon path=ICON_CHECK_CIRCLE size="48" class="waitlist-success-icon" />
            <h3 class="waitlist-success-title">"Welcome to EcoNest!"</h3>
            <p class="waitlist-success-text">
                "Check your email for a confirmation and exclusive early-bird pricing details. "
                "We'll keep you updated on our launch."
            </p>
        </div>
    }
}

#[component]
fn SignupForm(form: RwSignal<WaitlistForm>, toaster: Toaster, timings: Timings) -> impl IntoView {
    let submitting = move || form.with(WaitlistForm::is_submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let timings = timings.clone();
        spawn_local(async move {
            let store = SignalStore(form);
            let submitter = SimulatedSubmitter::new(BrowserDelay, timings.submit_latency());
            let report = submit_waitlist(&store, &submitter, &BrowserDelay, &toaster, &timings).await;
            debug!(?report, "waitlist submit finished");
        });
    };

    view! {
        <form class="waitlist-form" on:submit=on_submit>
            <div class="form-fields">
                <div class="form-field">
                    <label for="firstName" class="form-label">"First Name *"</label>
                    <input
                        id="firstName"
                        type="text"
                        class="form-input"
                        placeholder="John"
                        required=true
                        prop:value=move || form.with(|f| f.first_name().to_string())
                        prop:disabled=submitting
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_first_name(value));
                        }
                    />
                </div>
                <div class="form-field">
                    <label for="email" class="form-label">"Email Address *"</label>
                    <input
                        id="email"
                        type="email"
                        class="form-input"
                        placeholder="you@example.com"
                        required=true
                        prop:value=move || form.with(|f| f.email().to_string())
                        prop:disabled=submitting
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_email(value));
                        }
                    />
                </div>
                <div class="form-field">
                    <label for="apartment" class="form-label">"Apartment Type (Optional)"</label>
                    <select
                        id="apartment"
                        class="form-select"
                        prop:value=move || {
                            form.with(|f| f.apartment_type().map(|kind| kind.value()).unwrap_or(""))
                        }
                        prop:disabled=submitting
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_apartment_type(ApartmentType::parse_option(&value)));
                        }
                    >
                        <option value="">"Select..."</option>
                        {ApartmentType::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.value()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-checkbox-row">
                    <input
                        id="updates"
                        type="checkbox"
                        class="form-checkbox"
                        prop:checked=move || form.with(WaitlistForm::wants_updates)
                        prop:disabled=submitting
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.set_wants_updates(checked));
                        }
                    />
                    <label for="updates" class="form-checkbox-label">
                        "I want to receive updates about EcoNest"
                    </label>
                </div>
            </div>
            <button type="submit" class="btn btn-primary btn-block" disabled=submitting>
                {move || {
                    if submitting() { "Joining..." } else { "Secure My Spot on the Waiting List" }
                }}
            </button>
            <p class="form-footnote">
                "We'll send you early-bird pricing and exclusive launch updates. "
                "No spam, unsubscribe anytime."
            </p>
        </form>
    }
}
