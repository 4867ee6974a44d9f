use dioxus::prelude::*;
use ui::views::CreateView;

#[component]
pub fn Create() -> Element {
    rsx! {
        CreateView {}
    }
}
