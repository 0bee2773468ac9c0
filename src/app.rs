use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::infra::memory::preferences::MemoryPreferenceStore;
use crate::ui::routes::Route;
use crate::ui::state::app_state::AppState;
use crate::ui::state::sources::Sources;
use crate::usecase::ports::preferences::PreferenceStore;
use crate::usecase::services::preference_service::PreferenceService;

#[cfg(not(target_arch = "wasm32"))]
fn preference_store() -> Arc<dyn PreferenceStore> {
    use crate::config::default_db_path;
    use crate::infra::sqlite::preferences::SqlitePreferenceStore;
    use crate::usecase::ports::preferences::StoreError;

    let store = default_db_path()
        .map_err(|err| StoreError::Message(err.to_string()))
        .and_then(SqlitePreferenceStore::open);
    match store {
        Ok(store) => Arc::new(store),
        Err(err) => {
            tracing::warn!(error = %err, "preference database unavailable, keeping preferences in memory");
            Arc::new(MemoryPreferenceStore::default())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn preference_store() -> Arc<dyn PreferenceStore> {
    Arc::new(MemoryPreferenceStore::default())
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::from_env);
    let service = use_hook(|| PreferenceService::new(preference_store()));
    let preferences = use_hook({
        let service = service.clone();
        move || service.load()
    });

    let state = AppState::new(config.session(), preferences);
    use_context_provider(|| state);
    use_context_provider({
        let config = config.clone();
        move || config
    });
    use_context_provider(|| service);
    use_context_provider(|| Sources::from_config(&config));

    rsx! {
        Router::<Route> {}
    }
}
