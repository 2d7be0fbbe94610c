use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::layout::Layout,
    pages::{AttendancePage, EmployeesPage},
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Title text="HRMS Lite" />
        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=EmployeesPage />
                    <Route path="/attendance" view=AttendancePage />
                </Routes>
            </Layout>
        </Router>
    }
}
