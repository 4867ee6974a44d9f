use dioxus::prelude::*;
use views::Create;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/create")]
    Create {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Server the desktop app talks to, overridable at build time.
const SERVER_URL: &str = match option_env!("SOCIALCARD_SERVER_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

fn main() {
    dioxus::fullstack::set_server_url(SERVER_URL);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ui::bundled_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::COMPONENTS_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::AuthProvider {
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Create {});
    rsx! {}
}
