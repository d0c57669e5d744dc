use dioxus::prelude::*;
use ui::views::{AppLayout, Section};
use ui::RequireAuth;

use crate::Route;

fn section_of(route: &Route) -> Section {
    match route {
        Route::Athletes { .. } => Section::Athletes,
        Route::Users { .. } => Section::Users,
        _ => Section::Dashboard,
    }
}

fn route_of(section: Section) -> Route {
    match section {
        Section::Dashboard => Route::Home {},
        Section::Athletes => Route::Athletes { open_create: false },
        Section::Users => Route::Users { open_create: false },
    }
}

/// Layout for every signed-in page: session gate plus sidebar.
#[component]
pub fn Protected() -> Element {
    let nav = use_navigator();
    let active = section_of(&use_route::<Route>());

    rsx! {
        RequireAuth {
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
            AppLayout {
                active,
                on_navigate: move |section| {
                    nav.push(route_of(section));
                },
                Outlet::<Route> {}
            }
        }
    }
}

/// Unknown paths go back to the dashboard.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Home {});
    });
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_round_trip_through_routes() {
        for section in Section::ALL {
            assert_eq!(section_of(&route_of(section)), section);
        }
        assert_eq!(
            section_of(&Route::Athletes { open_create: true }),
            Section::Athletes
        );
        assert_eq!(section_of(&Route::Login {}), Section::Dashboard);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::RecoveryPassword {}.to_string(), "/recovery-password");
        assert_eq!(
            "/athletes?open_create=true".parse::<Route>().ok(),
            Some(Route::Athletes { open_create: true })
        );
    }
}
