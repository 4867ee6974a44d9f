use dioxus::prelude::*;

#[component]
pub fn Button(
    #[props(default)] class: String,
    #[props(default)] title: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "button button--primary {class}",
            title: "{title}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
