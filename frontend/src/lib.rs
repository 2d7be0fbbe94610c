use log::info;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs the panic hook and logger, starts the
/// runtime config lookup, then mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    info!("Starting HRMS frontend");

    leptos::spawn_local(async move {
        config::init().await;
        info!("Runtime config initialized");
    });

    router::mount_app();
}
