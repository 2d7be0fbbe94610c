use crate::utils::time::today_local;
use chrono::Datelike;
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header-inner">
                <h1 class="app-title">"HRMS Lite"</h1>
                <nav class="app-nav">
                    <a href="/" class="nav-link">"Employees"</a>
                    <a href="/attendance" class="nav-link">"Attendance"</a>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let year = today_local().year();
    view! {
        <div class="app-shell">
            <Header />
            <main class="app-main">{children()}</main>
            <footer class="app-footer">
                {format!("© {} HRMS Lite", year)}
            </footer>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-live="polite">
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert-error" role="alert">
            <p>{message}</p>
        </div>
    }
}

/// Renders the banner only while `error` holds a message.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <ErrorMessage message=message /> })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_navigation_and_children() {
        let html = render_to_string(move || {
            view! {
                <Layout>
                    <p>"Body"</p>
                </Layout>
            }
        });
        assert!(html.contains("HRMS Lite"));
        assert!(html.contains("Employees"));
        assert!(html.contains("href=\"/attendance\""));
        assert!(html.contains("Body"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="Invalid email address" />
                </div>
            }
        });
        assert!(html.contains("Loading..."));
        assert!(html.contains("Invalid email address"));
    }

    #[test]
    fn error_banner_follows_signal() {
        let html = render_to_string(move || {
            let error = create_rw_signal(None::<String>);
            view! { <ErrorBanner error=error /> }
        });
        assert!(!html.contains("role=\"alert\""));

        let html = render_to_string(move || {
            let error = create_rw_signal(Some("All fields are required".to_string()));
            view! { <ErrorBanner error=error /> }
        });
        assert!(html.contains("All fields are required"));
    }
}
