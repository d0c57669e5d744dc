use api::DashboardData;
use dioxus::prelude::*;

use crate::auth::use_session;

pub const LOAD_ERROR: &str = "Erro ao carregar dados do dashboard";

/// Aggregate counts for the home screen, fetched once per mount.
pub fn use_dashboard() -> Resource<Result<DashboardData, String>> {
    let api = use_session();
    use_resource(move || {
        let api = api.clone();
        async move {
            api.client().dashboard().await.map_err(|e| {
                tracing::error!("Failed to load dashboard: {}", e);
                LOAD_ERROR.to_string()
            })
        }
    })
}
