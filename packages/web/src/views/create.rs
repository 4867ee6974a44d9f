//! Create page route.

use card::CardRecord;
use dioxus::prelude::*;
use ui::views::CreateView;

#[component]
pub fn Create() -> Element {
    rsx! {
        CreateView {
            on_finalize: move |record: CardRecord| {
                tracing::debug!("Card finalized for {}", record.display_name());
            },
        }
    }
}
