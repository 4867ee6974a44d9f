use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::Icon;
use crate::icons::FaIdCard;

const CHROME_CSS: Asset = asset!("/assets/styling/chrome.css");

/// Top bar with the brand and the signed-in user, or a placeholder while the
/// session is being checked.
#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        document::Stylesheet { href: CHROME_CSS }
        header {
            class: "site-header",
            a {
                class: "site-brand",
                href: "/",
                Icon { icon: FaIdCard, width: 18, height: 18 }
                span { "SocialCard" }
            }
            if let Some(label) = state.header_label() {
                span {
                    class: if state.loading { "site-user site-user--pending" } else { "site-user" },
                    title: state.email().unwrap_or_default(),
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        document::Stylesheet { href: CHROME_CSS }
        footer {
            class: "site-footer",
            "© SocialCard. Share who you are in one link."
        }
    }
}
