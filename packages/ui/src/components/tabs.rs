//! Tabs, backed by `dioxus_primitives::tabs`. The caller owns the selected
//! value.

use dioxus::prelude::*;
use dioxus_primitives::tabs;

#[component]
pub fn Tabs(value: String, on_value_change: EventHandler<String>, children: Element) -> Element {
    rsx! {
        tabs::Tabs {
            class: "tabs",
            default_value: value.clone(),
            value: Some(value),
            on_value_change: move |next: String| on_value_change.call(next),
            horizontal: true,
            {children}
        }
    }
}

#[component]
pub fn TabList(children: Element) -> Element {
    rsx! {
        tabs::TabList {
            class: "tabs-list",
            {children}
        }
    }
}

#[component]
pub fn TabTrigger(value: String, index: usize, children: Element) -> Element {
    rsx! {
        tabs::TabTrigger {
            class: "tabs-trigger",
            value: value,
            index: index,
            {children}
        }
    }
}

#[component]
pub fn TabContent(value: String, index: usize, children: Element) -> Element {
    rsx! {
        tabs::TabContent {
            class: "tabs-content",
            value: value,
            index: index,
            {children}
        }
    }
}
