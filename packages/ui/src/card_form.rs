use card::{CardField, CardRecord};
use dioxus::prelude::*;

use crate::components::{Input, Label};

const CARD_CSS: Asset = asset!("/assets/styling/card.css");

/// One input per card field. Every change reports the full record with that
/// field replaced.
#[component]
pub fn SocialCardForm(
    record: CardRecord,
    on_update: EventHandler<CardRecord>,
    /// Prefix for element ids, so two forms can share a page.
    #[props(default = "card".to_string())]
    id_prefix: String,
) -> Element {
    rsx! {
        document::Stylesheet { href: CARD_CSS }
        div {
            class: "card-form",
            for field in CardField::ALL {
                CardFormField {
                    key: "{field.key()}",
                    field: field,
                    record: record.clone(),
                    id_prefix: id_prefix.clone(),
                    on_update: on_update,
                }
            }
        }
    }
}

#[component]
fn CardFormField(
    field: CardField,
    record: CardRecord,
    id_prefix: String,
    on_update: EventHandler<CardRecord>,
) -> Element {
    let id = format!("{id_prefix}-{}", field.key());
    let value = field.get(&record).to_string();

    rsx! {
        div {
            class: "card-form-field",
            Label { html_for: "{id}", "{field.label()}" }
            Input {
                id: "{id}",
                r#type: "{field.input_type()}",
                placeholder: "{field.placeholder()}",
                value: value,
                oninput: move |evt: FormEvent| {
                    on_update.call(record.with_field(field, evt.value()));
                },
            }
        }
    }
}
