use crate::layout::portal_context::PortalConfig;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Portal mode and read-only flag are resolved once at mount and passed
    // down as immutable configuration.
    provide_context(PortalConfig::from_location());

    // Provide ToastService for transient notifications
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
