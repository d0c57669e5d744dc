use dioxus::prelude::*;
use tracing::Level;

use api::ApiConfig;
use ui::components::ToastProvider;
use ui::AuthProvider;
use views::{Athletes, FirstLogin, Home, Login, NotFound, Protected, RecoveryPassword, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/recovery-password")]
    RecoveryPassword {},
    #[route("/first-login")]
    FirstLogin {},
    #[layout(Protected)]
        #[route("/")]
        Home {},
        #[route("/athletes?:open_create")]
        Athletes { open_create: bool },
        #[route("/users?:open_create")]
        Users { open_create: bool },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logging: {e}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ApiConfig::from_env();
        tracing::info!(base_url = %config.base_url, "Starting ARU CRM");
        config
    });

    rsx! {
        // Global app resources
        document::Title { "ARU CRM" }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            AuthProvider {
                config,
                Router::<Route> {}
            }
        }
    }
}
