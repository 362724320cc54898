//! Picks up edits to the preferences file while running.
use crate::Preferences;
use anyhow::Result;
use signal_hook::consts::SIGHUP;
use signal_hook::iterator::Signals;
use std::thread::{self, JoinHandle};

/// Reloads `preferences` every time the process receives `SIGHUP`.
///
/// # Errors
///
/// Fails if the signal handler can't be registered or the thread can't be spawned.
pub fn spawn_reload_thread(preferences: Preferences) -> Result<JoinHandle<()>> {
    let mut signals = Signals::new([SIGHUP])?;
    let handle = thread::Builder::new()
        .name("holdfast-reload".into())
        .spawn(move || {
            for signal in signals.forever() {
                tracing::debug!("Received signal {}, reloading preferences", signal);
                if let Err(err) = preferences.reload() {
                    tracing::warn!("Keeping previous preferences: {:#}", err);
                }
            }
        })?;
    Ok(handle)
}
