use std::rc::Rc;

use leptos::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::state::browser::WebBrowser;
use crate::state::dashboard::Dashboard;
use crate::state::view_state::ViewState;

pub type WebDashboard = Dashboard<ApiClient, WebBrowser>;

/// Dashboard store shared through Leptos context
#[derive(Clone, Copy)]
pub struct DashboardContext {
    store: StoredValue<Rc<WebDashboard>>,
    state: RwSignal<ViewState>,
    config: StoredValue<AppConfig>,
}

impl DashboardContext {
    pub fn new(config: AppConfig) -> Self {
        let store = Dashboard::new(ApiClient::new(&config), WebBrowser)
            .with_reload_delay(config.reload_delay_ms);

        Self {
            state: store.state(),
            store: store_value(Rc::new(store)),
            config: store_value(config),
        }
    }

    /// Reactive read of the view state
    pub fn with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.state.with(f)
    }

    pub fn dashboard(&self) -> Rc<WebDashboard> {
        self.store.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

/// Create the store and provide it to the component tree
pub fn provide_dashboard_context(config: AppConfig) -> DashboardContext {
    let context = DashboardContext::new(config);
    provide_context(context);
    context
}

/// Hook to access the dashboard store
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>()
        .expect("DashboardContext must be provided by a parent component")
}
