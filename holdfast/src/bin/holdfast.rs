#[cfg(target_os = "macos")]
use holdfast_core::Manager;
#[cfg(target_os = "macos")]
use macos_display_server::{permission, EventTap, MacosDisplayServer, MacosWindowHandle};
#[cfg(target_os = "macos")]
use std::time::Duration;

#[cfg(target_os = "macos")]
const PERMISSION_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[cfg(target_os = "macos")]
fn main() {
    if let Err(err) = holdfast::utils::log::setup_logging() {
        eprintln!("Couldn't set up logging: {err}");
    }
    tracing::info!("holdfast booting...");

    let preferences = holdfast::load();
    tracing::info!(
        "Hold {} and drag to move, add Shift to resize",
        holdfast_core::Config::modifier_key(&preferences)
    );
    if let Err(err) = holdfast::utils::reload::spawn_reload_thread(preferences.clone()) {
        tracing::warn!("Preferences won't reload on SIGHUP: {:#}", err);
    }

    wait_for_permission();

    let manager =
        Manager::<MacosWindowHandle, holdfast::Preferences, MacosDisplayServer>::new(
            preferences,
            MacosDisplayServer::new(),
        );

    match EventTap::run(manager) {
        Ok(()) => tracing::info!("Completed"),
        Err(err) => {
            tracing::error!("Event tap failed: {}", err);
            eprintln!("holdfast: {err}");
            std::process::exit(1);
        }
    }
}

/// Blocks until the user grants the accessibility permission.
#[cfg(target_os = "macos")]
fn wait_for_permission() {
    if permission::request_if_needed() {
        return;
    }
    tracing::warn!("Waiting for the accessibility permission to be granted...");
    while !permission::is_trusted() {
        std::thread::sleep(PERMISSION_POLL_INTERVAL);
    }
    tracing::info!("Accessibility permission granted");
}

#[cfg(not(target_os = "macos"))]
fn main() {
    eprintln!("holdfast only runs on macOS");
    std::process::exit(1);
}
