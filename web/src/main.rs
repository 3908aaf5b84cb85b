use dioxus::prelude::*;

use ui::{apply_theme, load_theme_from_storage, Navbar, SessionProvider, ThemeSignal};
use views::{Home, Login, MyPosts, Profile, Settings, Signup};

mod views;

/// Backend the client talks to; override at build time with
/// `WHISPER_API_URL`.
const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/myposts")]
    MyPosts {},
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let api_url = option_env!("WHISPER_API_URL").unwrap_or(DEFAULT_API_URL);

    // Theme is resolved before the first paint and shared app-wide; the
    // effect re-applies (and persists) it on every toggle.
    let theme: ThemeSignal = use_context_provider(|| Signal::new(load_theme_from_storage()));
    use_effect(move || {
        apply_theme(theme().as_deref());
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            base_url: api_url.to_string(),
            Router::<Route> {}
        }
    }
}

/// Every route renders under the navigation bar.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}

/// Unknown paths fall back to the home feed.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("unknown route /{}", segments.join("/"));
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
