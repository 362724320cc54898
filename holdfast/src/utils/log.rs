use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "file-log")]
pub mod file;

/// Environment variable holding the log filter, e.g. `holdfast_core=trace`.
pub const LOG_ENV: &str = "HOLDFAST_LOG";

/// Builds the subscriber for `level_regex`, falling back to `info` if it doesn't parse.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::default().add_directive(LevelFilter::INFO.into())
        });
    (get_subscribers(filter), parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "file-log")]
    let subscriber = file::add_layer(subscriber);

    subscriber
}

/// Installs the global subscriber, filtered by `HOLDFAST_LOG`.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn setup_logging() -> anyhow::Result<()> {
    let level = std::env::var(LOG_ENV).unwrap_or_default();
    let (subscriber, parse_err) = parse_log_level(&level);
    tracing::subscriber::set_global_default(subscriber)?;
    if let Some(err) = parse_err {
        tracing::warn!("Ignoring invalid {}: {}", LOG_ENV, err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_level_is_accepted() {
        let (_, err) = parse_log_level("");
        assert!(err.is_none());
    }

    #[test]
    fn module_directives_are_accepted() {
        let (_, err) = parse_log_level("holdfast_core=trace,info");
        assert!(err.is_none());
    }

    #[test]
    fn garbage_is_reported() {
        let (_, err) = parse_log_level("holdfast_core=loud");
        assert!(err.is_some());
    }
}
