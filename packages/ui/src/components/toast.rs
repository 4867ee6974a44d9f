//! Transient notifications, backed by `dioxus_primitives::toast`.
//!
//! Wrap the app in [`ToastProvider`], then call [`use_toast`] anywhere below
//! it. The primitive owns each toast's dismiss timer; callers pass
//! [`DEFAULT_TOAST_DURATION`] through [`ToastOptions::duration`].

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

/// How long a save notice stays up.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        toast::ToastProvider {
            {children}
        }
    }
}
