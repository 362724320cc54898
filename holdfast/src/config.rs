//! Holdfast preferences
use anyhow::{Context, Result};
use holdfast_core::config::DEFAULT_MIN_WINDOW_SIZE;
use holdfast_core::ModifierKey;
use ron::ser::{to_string_pretty, PrettyConfig};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::prelude::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use xdg::BaseDirectories;

const CONFIG_PREFIX: &str = "holdfast";
const CONFIG_FILE_NAME: &str = "preferences.ron";

const COMMENT_HEADER: &str = "// Holdfast preferences
//
// modifier_key: the key to hold while dragging. 0 = Option, 1 = Control, 2 = Command.
// min_window_size: smallest width and height a resize can shrink a window to.
//
// Send SIGHUP to a running holdfast to pick up changes.

";

/// The contents of `preferences.ron`.
///
/// ```ron
/// (
///     modifier_key: 0,
///     min_window_size: 50.0,
/// )
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub modifier_key: ModifierKey,
    pub min_window_size: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modifier_key: ModifierKey::default(),
            min_window_size: DEFAULT_MIN_WINDOW_SIZE,
        }
    }
}

impl Config {
    /// Parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read or isn't valid RON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let config: Self = ron::from_str(&contents)
            .with_context(|| format!("Could not parse {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Writes the file at `path`, comment header included.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be created or written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let pretty = PrettyConfig::new().depth_limit(2);
        let ron = to_string_pretty(self, pretty)?;
        let mut file = File::create(path)
            .with_context(|| format!("Could not create {}", path.display()))?;
        file.write_all((COMMENT_HEADER.to_owned() + &ron + "\n").as_bytes())?;
        Ok(())
    }

    fn sanitized(mut self) -> Self {
        if !self.min_window_size.is_finite() || self.min_window_size < 1.0 {
            tracing::warn!(
                "min_window_size {} is not usable, falling back to {}",
                self.min_window_size,
                DEFAULT_MIN_WINDOW_SIZE
            );
            self.min_window_size = DEFAULT_MIN_WINDOW_SIZE;
        }
        self
    }
}

/// Live preferences shared between the event tap and the reload thread.
///
/// Clones share the same values. Reads are lock-free so the input callback never waits.
#[derive(Clone, Debug)]
pub struct Preferences {
    path: PathBuf,
    modifier_key: Arc<AtomicU8>,
    min_window_size: Arc<AtomicU64>,
}

/// Loads the preferences file, creating it with defaults on first launch.
///
/// Problems are reported and the defaults are used.
#[must_use]
pub fn load() -> Preferences {
    config_path()
        .and_then(|path| Preferences::load_from(&path))
        .unwrap_or_else(|err| {
            eprintln!("ERROR LOADING PREFERENCES: {err:?}");
            Preferences::detached(&Config::default())
        })
}

/// # Errors
///
/// Fails when no XDG config directory can be resolved or created.
pub fn config_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix(CONFIG_PREFIX)?;
    let file = path.place_config_file(CONFIG_FILE_NAME)?;
    Ok(file)
}

impl Preferences {
    /// # Errors
    ///
    /// Fails if an existing file can't be read or parsed, or a missing one can't be written.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            tracing::debug!("Preferences file '{}' found.", path.to_string_lossy());
            Config::from_file(path)?
        } else {
            tracing::debug!("Preferences file not found. Writing defaults.");
            let config = Config::default();
            config.write_to(path)?;
            config
        };
        Ok(Self::new(path.to_path_buf(), &config))
    }

    fn new(path: PathBuf, config: &Config) -> Self {
        Self {
            path,
            modifier_key: Arc::new(AtomicU8::new(config.modifier_key.code())),
            min_window_size: Arc::new(AtomicU64::new(config.min_window_size.to_bits())),
        }
    }

    /// Preferences that live only in memory, used when the file is unusable.
    fn detached(config: &Config) -> Self {
        Self::new(PathBuf::new(), config)
    }

    pub fn snapshot(&self) -> Config {
        Config {
            modifier_key: self.current_modifier_key(),
            min_window_size: self.current_min_window_size(),
        }
    }

    /// Re-reads the file. On error the current values stay in place.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read or parsed.
    pub fn reload(&self) -> Result<()> {
        let config = Config::from_file(&self.path)?;
        self.publish(&config);
        tracing::info!(
            "Preferences reloaded, modifier key is {}",
            config.modifier_key
        );
        Ok(())
    }

    /// Changes the arming key and persists it.
    ///
    /// The new key takes effect for the next gesture even when writing the file fails.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be written.
    pub fn set_modifier_key(&self, key: ModifierKey) -> Result<()> {
        self.modifier_key.store(key.code(), Ordering::Relaxed);
        tracing::info!("Modifier key set to {}", key);
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }
        self.snapshot().write_to(&self.path)
    }

    fn publish(&self, config: &Config) {
        self.modifier_key
            .store(config.modifier_key.code(), Ordering::Relaxed);
        self.min_window_size
            .store(config.min_window_size.to_bits(), Ordering::Relaxed);
    }

    fn current_modifier_key(&self) -> ModifierKey {
        ModifierKey::from_code(u64::from(self.modifier_key.load(Ordering::Relaxed)))
    }

    fn current_min_window_size(&self) -> f64 {
        f64::from_bits(self.min_window_size.load(Ordering::Relaxed))
    }
}

impl holdfast_core::Config for Preferences {
    fn modifier_key(&self) -> ModifierKey {
        self.current_modifier_key()
    }

    fn min_window_size(&self) -> f64 {
        self.current_min_window_size()
    }
}
