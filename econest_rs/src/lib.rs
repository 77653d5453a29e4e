//! # econest
//!
//! Platform-independent core of the EcoNest landing page.
//!
//! The page itself is a Leptos CSR app (see the `econest-landing` crate). Everything
//! with state or rules lives here so it can be tested natively:
//!
//! - [`waitlist`] - the waitlist form state machine (`Idle -> Submitting -> Success -> Idle`)
//! - [`controller`] - the asynchronous submit flow, generic over storage, transport,
//!   timers and notifications
//! - [`notify`] - the notification contract the form talks to
//! - [`config`] - site configuration (title, theme, base path, timings)
//!
//! ## Quick Start
//!
//! ```rust
//! use econest::waitlist::{Phase, WaitlistForm};
//!
//! let mut form = WaitlistForm::default();
//! form.set_first_name("Jane");
//! form.set_email("jane@example.com");
//!
//! let submission = form.begin_submit().unwrap();
//! assert_eq!(submission.first_name, "Jane");
//! assert_eq!(form.phase(), Phase::Submitting);
//!
//! let notice = form.finish_submit(Ok(()));
//! assert!(notice.is_success());
//! assert!(form.is_subscribed());
//! assert!(form.email().is_empty());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod notify;
pub mod waitlist;

pub use config::{ConfigError, SiteConfig, Theme, Timings};
pub use controller::{
    Delay, FormStore, SimulatedSubmitter, SubmitError, SubmitReport, Submitter, submit_waitlist,
};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use waitlist::{ApartmentType, Phase, WaitlistError, WaitlistForm, WaitlistSubmission};
