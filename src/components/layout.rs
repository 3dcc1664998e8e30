use leptos::*;
use leptos_router::*;

/// Layout component with navbar and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Navbar with page tabs
#[component]
fn Navbar() -> impl IntoView {
    let location = use_location();

    // Check if a path is active
    let is_active = move |path: &str| location.pathname.get().starts_with(path);

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"WaterWise"</h1>
                <div class="navbar-tabs">
                    <A
                        href="/dashboard"
                        class=move || if is_active("/dashboard") { "tab active" } else { "tab" }
                    >
                        "Dashboard"
                    </A>
                    <A
                        href="/bills"
                        class=move || if is_active("/bills") { "tab active" } else { "tab" }
                    >
                        "Bills"
                    </A>
                </div>
            </div>
        </nav>
    }
}
