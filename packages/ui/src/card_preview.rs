use card::{CardRecord, ContactKind};
use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaEnvelope, FaGlobe, FaPhone};
use crate::brand_icons::{FaGithub, FaLinkedin};

const CARD_CSS: Asset = asset!("/assets/styling/card.css");

/// Read-only rendering of a card.
#[component]
pub fn SocialCardPreview(data: CardRecord) -> Element {
    let links = data.contact_links();
    let photo = data.photo_url.trim().to_string();

    rsx! {
        document::Stylesheet { href: CARD_CSS }
        div {
            class: "card-preview",
            div { class: "card-preview-banner" }
            div {
                class: "card-preview-avatar",
                if photo.is_empty() {
                    span { class: "card-preview-initials", "{data.initials()}" }
                } else {
                    img { src: "{photo}", alt: "{data.display_name()}" }
                }
            }
            h2 { class: "card-preview-name", "{data.display_name()}" }

            if data.is_blank() {
                p {
                    class: "card-preview-hint",
                    "Fill in the form to see your card come together."
                }
            }

            ul {
                class: "card-preview-links",
                for link in links {
                    li {
                        key: "{link.href}",
                        a {
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            ContactIcon { kind: link.kind }
                            span { "{link.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactIcon(kind: ContactKind) -> Element {
    match kind {
        ContactKind::Phone => rsx! { Icon { icon: FaPhone, width: 14, height: 14 } },
        ContactKind::Email => rsx! { Icon { icon: FaEnvelope, width: 14, height: 14 } },
        ContactKind::Linkedin => rsx! { Icon { icon: FaLinkedin, width: 14, height: 14 } },
        ContactKind::Github => rsx! { Icon { icon: FaGithub, width: 14, height: 14 } },
        ContactKind::Portfolio => rsx! { Icon { icon: FaGlobe, width: 14, height: 14 } },
    }
}
