use card::{CardPage, CardRecord, Layout, SocialCardConfig, ViewMode};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{
    use_toast, Button, TabContent, TabList, TabTrigger, Tabs, ToastOptions,
    DEFAULT_TOAST_DURATION,
};
use crate::{Footer, Header, SocialCardForm, SocialCardPreview};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Mode for a tab value reported by the tab list. Unknown values keep the
/// current mode.
fn view_mode_for_tab(value: &str, current: ViewMode) -> ViewMode {
    value.parse().unwrap_or_else(|e| {
        tracing::warn!("Ignoring tab change: {}", e);
        current
    })
}

/// Shared create page.
///
/// Owns the card being edited and the narrow-screen tab. Renders the tabbed
/// and the two-column layouts side by side; the stylesheet shows one of them
/// depending on viewport width. Reads [`SocialCardConfig`] from context when a
/// platform provides one.
#[component]
pub fn CreateView(
    /// Called with the card after the save notification is shown.
    #[props(default)]
    on_finalize: EventHandler<CardRecord>,
) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let config = try_use_context::<SocialCardConfig>().unwrap_or_default();
    let mut page = use_signal(CardPage::new);

    // Re-runs only when the identity changes
    use_effect(move || {
        let email = auth().email().map(str::to_string);
        let next = page.peek().with_identity(email.as_deref());
        if let Some(next) = next {
            page.set(next);
        }
    });

    let on_update = move |record: CardRecord| {
        tracing::debug!("Card updated from form");
        page.write().update(record);
    };

    let save_messages = config.save.clone();
    let handle_save = use_callback(move |_: MouseEvent| {
        let current = page.read().clone();
        let notice = current.save(&save_messages);
        tracing::info!("Card saved");
        toast.success(
            notice.title,
            ToastOptions::new()
                .description(notice.description)
                .duration(DEFAULT_TOAST_DURATION),
        );
        on_finalize.call(current.record().clone());
    });

    let state = page();
    let tabbed = state.visible_panels(Layout::Tabbed);
    let wide = state.visible_panels(Layout::TwoColumn);
    let record = state.record().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "create-page",
            Header {}

            main {
                class: "create-main",
                div {
                    class: "create-intro",
                    h1 { "{config.page.title}" }
                    p { "{config.page.subtitle}" }
                }

                // Narrow screens
                div {
                    class: "create-tabbed",
                    Tabs {
                        value: state.view_mode().to_string(),
                        on_value_change: move |value: String| {
                            let current = page.peek().view_mode();
                            page.write().set_view_mode(view_mode_for_tab(&value, current));
                        },
                        TabList {
                            for (index, mode) in ViewMode::ALL.into_iter().enumerate() {
                                TabTrigger {
                                    key: "{mode}",
                                    value: mode.to_string(),
                                    index: index,
                                    "{mode.label()}"
                                }
                            }
                        }
                        TabContent {
                            value: ViewMode::Edit.to_string(),
                            index: 0usize,
                            if tabbed.form {
                                SocialCardForm {
                                    record: record.clone(),
                                    on_update: on_update,
                                    id_prefix: "tabbed",
                                }
                                div {
                                    class: "create-actions create-actions--center",
                                    Button { onclick: handle_save, "Save Card" }
                                }
                            }
                        }
                        TabContent {
                            value: ViewMode::Preview.to_string(),
                            index: 1usize,
                            if tabbed.preview {
                                SocialCardPreview { data: record.clone() }
                            }
                        }
                    }
                }

                // Wide screens
                div {
                    class: "create-two-column",
                    if wide.form {
                        div {
                            SocialCardForm {
                                record: record.clone(),
                                on_update: on_update,
                                id_prefix: "wide",
                            }
                            div {
                                class: "create-actions",
                                Button { onclick: handle_save, "Save Card" }
                            }
                        }
                    }
                    if wide.preview {
                        div {
                            SocialCardPreview { data: record.clone() }
                        }
                    }
                }
            }

            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_for_tab_parses_known_values() {
        assert_eq!(view_mode_for_tab("preview", ViewMode::Edit), ViewMode::Preview);
        assert_eq!(view_mode_for_tab("edit", ViewMode::Preview), ViewMode::Edit);
    }

    #[test]
    fn test_view_mode_for_tab_keeps_current_on_unknown_value() {
        assert_eq!(view_mode_for_tab("share", ViewMode::Preview), ViewMode::Preview);
        assert_eq!(view_mode_for_tab("", ViewMode::Edit), ViewMode::Edit);
    }
}
