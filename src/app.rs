use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::BillTools;
use crate::components::Dashboard;
use crate::config::AppConfig;
use crate::state::reminder::today_local;
use crate::state::{provide_dashboard_context, LocalStore, Reminder};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::debug!("Using API base '{}'", config.api_url);
    let dashboard = provide_dashboard_context(config);

    // Once per page load, after the entry form is mounted so it can take focus
    request_animation_frame(move || {
        let reminder = Reminder::new(LocalStore, &dashboard.config().reminder_key);
        let outcome = dashboard.dashboard().run_reminder(&reminder, &today_local());
        log::debug!("Daily reminder: {:?}", outcome);
    });

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path="dashboard" view=Dashboard />
                    <Route path="bills" view=BillTools />
                </Route>
            </Routes>
        </Router>
    }
}
