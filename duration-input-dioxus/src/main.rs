#![cfg_attr(feature = "bundle", windows_subsystem = "windows")]
mod app;
mod bridge;
mod components;
mod dialogs;
mod state;
mod theme_watcher;

use crate::app::App;
use crate::bridge::use_change_bus_bridge;
use crate::state::DemoState;
use crate::theme_watcher::use_theme;
use dioxus::desktop::{LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use duration_input_core::{AppConfig, ChangeBus, DurationError, InputConfig, UnitTable};
use std::fs::File;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_NAME: &str = "Duration Input";

fn main() {
    // Logging comes first so config errors are recorded
    let file_logging_enabled = check_file_logging_enabled();
    init_tracing(file_logging_enabled);

    let config_path = AppConfig::config_path();
    let config = match AppConfig::load_or_create() {
        Ok(config) => config,
        Err(DurationError::ConfigNotFound { path }) => {
            dialogs::show_new_config_dialog(&path);
            std::process::exit(0);
        }
        Err(DurationError::ConfigParseError(parse_error)) => {
            error!("Failed to parse config: {parse_error}");
            dialogs::show_config_parse_error_dialog(&parse_error, &config_path);
            std::process::exit(1);
        }
        Err(DurationError::ConfigInvalid { message }) => {
            error!("Invalid config: {message}");
            dialogs::show_config_invalid_dialog(&message, &config_path);
            std::process::exit(1);
        }
        Err(e) => {
            error!("{e}");
            dialogs::show_generic_error_dialog(&e.to_string());
            std::process::exit(1);
        }
    };

    let units = config.unit_table();
    info!(
        "Starting with {}s in [{}, {}] and {} unit(s)",
        config.input.value,
        config.input.min,
        config.input.max,
        units.entries().len()
    );

    // Shared cancellation token for graceful shutdown
    let cancel_token = CancellationToken::new();

    let ctrlc_token = cancel_token.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received Ctrl+C, shutting down gracefully...");
        ctrlc_token.cancel();
    }) {
        error!("Failed to set Ctrl+C handler: {}", e);
    }

    let window = WindowBuilder::new()
        .with_title(APP_NAME)
        .with_resizable(true)
        .with_maximizable(false)
        .with_always_on_top(config.window.always_on_top)
        .with_inner_size(LogicalSize::new(
            f64::from(config.window.width),
            f64::from(config.window.height),
        ));

    let dioxus_config = dioxus::desktop::Config::default()
        .with_window(window)
        .with_disable_context_menu(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(dioxus_config)
        .with_context(ChangeBus::new())
        .with_context(config.input)
        .with_context(units)
        .with_context(cancel_token)
        .launch(app);
}

/// Root component that sets up context and renders the app
fn app() -> Element {
    let input: InputConfig = use_context();
    let state = use_context_provider(|| DemoState::new(input.value));

    let bus: ChangeBus = use_context();
    let units: UnitTable = use_context();
    let cancel_token: CancellationToken = use_context();

    use_change_bus_bridge(&bus, units, state);
    use_close_on_cancel(cancel_token.clone());
    let css = use_theme(cancel_token);

    rsx! {
        document::Title { "{APP_NAME}" }
        style { "{css}" }
        App {}
    }
}

/// Close the window once the shared cancellation token fires
fn use_close_on_cancel(cancel_token: CancellationToken) {
    use_future(move || {
        let cancel_token = cancel_token.clone();
        async move {
            cancel_token.cancelled().await;
            info!("Closing window");
            dioxus::desktop::window().close();
        }
    });
}

/// Check if file logging is enabled by reading the config file.
/// This is done before full config loading to set up tracing first.
/// Returns `false` if config doesn't exist or can't be parsed.
fn check_file_logging_enabled() -> bool {
    #[derive(serde::Deserialize)]
    struct PartialConfig {
        #[serde(default)]
        logging: PartialLoggingConfig,
    }
    #[derive(serde::Deserialize, Default)]
    struct PartialLoggingConfig {
        #[serde(default)]
        enabled: bool,
    }

    let Ok(content) = std::fs::read_to_string(AppConfig::config_path()) else {
        return false;
    };

    toml::from_str::<PartialConfig>(&content)
        .map(|c| c.logging.enabled)
        .unwrap_or(false)
}

/// Initialize tracing with console output and optional file logging
fn init_tracing(file_logging_enabled: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer();

    if file_logging_enabled {
        let log_path = duration_input_core::log_file_path();

        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match File::create(&log_path) {
            Ok(file) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .with(file_layer)
                    .init();

                return;
            }
            Err(e) => {
                eprintln!("Failed to create log file at {}: {e}", log_path.display());
            }
        }
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
