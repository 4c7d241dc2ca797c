//! CSS theme loading and hot reload.
//!
//! The default theme is embedded in the binary and written to
//! `~/.config/duration-input/theme.css` on first run. Edits to that file are
//! picked up while the app is running.

use dioxus::prelude::*;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

const LOG_TARGET: &str = "duration_input::theme";

/// Quiet period before a burst of file events triggers a reload
const DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to access theme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to watch theme file: {0}")]
    Watch(#[from] notify_debouncer_mini::notify::Error),
}

/// Embedded default theme
pub const DEFAULT_CSS: &str = include_str!("../assets/default_theme.css");

/// Read the theme at `path`, writing the default theme there first if missing.
///
/// # Errors
///
/// Returns an error if the file or its directory cannot be created or read.
pub fn ensure_theme(path: &Path) -> Result<String, ThemeError> {
    if path.exists() {
        info!(target: LOG_TARGET, "Loading theme from {:?}", path);
        return Ok(fs::read_to_string(path)?);
    }

    info!(target: LOG_TARGET, "Creating default theme at {:?}", path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CSS)?;
    Ok(DEFAULT_CSS.to_string())
}

/// Whether a debounced event batch touched the theme file itself
fn touches_theme(paths: impl IntoIterator<Item = PathBuf>, theme: &Path) -> bool {
    paths
        .into_iter()
        .any(|path| path.file_name().is_some() && path.file_name() == theme.file_name())
}

/// Watch `theme` and send a notification for every change until cancelled.
async fn watch_theme(
    theme: PathBuf,
    changed: mpsc::Sender<()>,
    cancel_token: CancellationToken,
) -> Result<(), ThemeError> {
    let theme_for_events = theme.clone();
    let mut debouncer = new_debouncer(DEBOUNCE, move |res: DebounceEventResult| match res {
        Ok(events) => {
            if touches_theme(events.into_iter().map(|e| e.path), &theme_for_events) {
                let _ = changed.blocking_send(());
            }
        }
        Err(e) => warn!(target: LOG_TARGET, "Theme watcher error: {}", e),
    })?;

    // Editors often replace the file, so watch the directory rather than the file
    let dir = theme.parent().map_or_else(|| theme.clone(), Path::to_path_buf);
    debouncer.watcher().watch(&dir, RecursiveMode::NonRecursive)?;
    info!(target: LOG_TARGET, "Watching {:?} for theme changes", theme);

    cancel_token.cancelled().await;
    info!(target: LOG_TARGET, "Theme watcher shutting down");
    Ok(())
}

/// Hook providing the current theme CSS, reloaded whenever the theme file changes.
#[must_use]
pub fn use_theme(cancel_token: CancellationToken) -> Signal<String> {
    let mut css = use_signal(|| {
        ensure_theme(&duration_input_core::theme_path()).unwrap_or_else(|e| {
            error!(target: LOG_TARGET, "Falling back to embedded theme: {}", e);
            DEFAULT_CSS.to_string()
        })
    });

    use_future(move || {
        let cancel_token = cancel_token.clone();
        async move {
            let theme = duration_input_core::theme_path();
            let (tx, mut rx) = mpsc::channel::<()>(16);

            let watcher = spawn(watch_theme_logged(theme.clone(), tx, cancel_token));

            while rx.recv().await.is_some() {
                match fs::read_to_string(&theme) {
                    Ok(content) => {
                        info!(target: LOG_TARGET, "Theme changed, reloading");
                        css.set(content);
                    }
                    Err(e) => warn!(target: LOG_TARGET, "Failed to reload theme: {}", e),
                }
            }

            watcher.cancel();
        }
    });

    css
}

async fn watch_theme_logged(
    theme: PathBuf,
    changed: mpsc::Sender<()>,
    cancel_token: CancellationToken,
) {
    if let Err(e) = watch_theme(theme, changed, cancel_token).await {
        error!(target: LOG_TARGET, "{}", e);
    }
}
