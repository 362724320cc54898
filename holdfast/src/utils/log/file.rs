use std::path::Path;
use std::sync::OnceLock;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

const LOG_DIR: &str = "~/Library/Logs/holdfast";
const LOG_FILE_NAME: &str = "holdfast.log";

/// Keeps the background writer flushing for the life of the process.
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let dir = shellexpand::tilde(LOG_DIR);
    let layer = match prepare_path(Path::new(dir.as_ref())) {
        Ok(()) => Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(get_log_writer(&dir)),
        ),
        Err(err) => {
            eprintln!("Couldn't create log directory {dir}: {err}");
            None
        }
    };

    subscriber.with(layer)
}

fn prepare_path(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

fn get_log_writer(dir: &str) -> NonBlocking {
    let writer = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(writer);
    // Only the first subscriber built gets to keep its writer alive.
    let _ = GUARD.set(guard);
    non_blocking
}
