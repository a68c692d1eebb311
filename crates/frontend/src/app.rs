use crate::layout::global_context::AppGlobalContext;
use crate::masters::provide_master_data;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::shared::permissions::{PermissionSet, Permissions};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("API base: {}", config.api_base());

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new(config.notifications.dismiss_after_ms));
    provide_context(Permissions::new(PermissionSet::new(
        config.permissions.granted.clone(),
    )));

    // Master collections are fetched once here; every select reads the cache.
    provide_master_data(config.api_base()).load();

    provide_context(config);

    view! {
        <AppRoutes />
        <NotificationHost />
    }
}
