use dioxus::prelude::*;
use ui::views::RecoveryView;

use crate::Route;

/// Reads `?userId=…&secureCode=…` itself, so the route carries no query fields.
#[component]
pub fn RecoveryPassword() -> Element {
    let nav = use_navigator();
    rsx! {
        RecoveryView {
            on_navigate_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
