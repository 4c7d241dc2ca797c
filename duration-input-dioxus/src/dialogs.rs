//! Native dialogs shown when the config file cannot be used.

use duration_input_core::{TomlParseError, CONFIG_TEMPLATE};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::fs;
use std::path::Path;
use tracing::error;

const OPEN_CONFIG: &str = "Open Config";
const RESET_CONFIG: &str = "Reset Config";

fn open_config(config_path: &Path) {
    if let Err(e) = open::that(config_path) {
        error!("Failed to open config file: {e}");
    }
}

/// Show dialog when config is newly created
pub fn show_new_config_dialog(config_path: &Path) {
    let message = format!(
        "A configuration file has been created at:\n{}\n\n\
        Edit it to set the initial value, bounds and button label, then restart.",
        config_path.display()
    );

    let result = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Duration Input - Configuration Created")
        .set_description(&message)
        .set_buttons(MessageButtons::OkCancelCustom(
            OPEN_CONFIG.into(),
            "Exit".into(),
        ))
        .show();

    if matches!(result, MessageDialogResult::Custom(ref s) if s == OPEN_CONFIG) {
        open_config(config_path);
    }
}

/// Show dialog when config file has TOML syntax or unit table errors
pub fn show_config_parse_error_dialog(parse_error: &TomlParseError, config_path: &Path) {
    let message = format!(
        "Your configuration file cannot be loaded.\n\n\
        Error: {parse_error}\n\n\
        You can either:\n\
        \u{2022} Open the config file and fix the error\n\
        \u{2022} Reset to a fresh configuration template"
    );

    let result = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Duration Input - Configuration Error")
        .set_description(&message)
        .set_buttons(MessageButtons::OkCancelCustom(
            OPEN_CONFIG.into(),
            RESET_CONFIG.into(),
        ))
        .show();

    match result {
        MessageDialogResult::Custom(button) if button == OPEN_CONFIG => open_config(config_path),
        MessageDialogResult::Custom(button) if button == RESET_CONFIG => {
            if let Err(e) = fs::write(config_path, CONFIG_TEMPLATE) {
                error!("Failed to reset config file: {e}");
                show_generic_error_dialog(&format!("Failed to reset configuration:\n{e}"));
            } else {
                open_config(config_path);
            }
        }
        _ => {}
    }
}

/// Show dialog for config values that parse but make no sense (e.g. min > max)
pub fn show_config_invalid_dialog(message: &str, config_path: &Path) {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Duration Input - Invalid Configuration")
        .set_description(format!(
            "{message}\n\nPlease fix the configuration file and restart."
        ))
        .set_buttons(MessageButtons::OkCancelCustom(
            OPEN_CONFIG.into(),
            "Exit".into(),
        ))
        .show();

    if matches!(result, MessageDialogResult::Custom(ref s) if s == OPEN_CONFIG) {
        open_config(config_path);
    }
}

/// Show a generic error dialog for unexpected errors
pub fn show_generic_error_dialog(error_message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Duration Input - Error")
        .set_description(format!("An unexpected error occurred:\n\n{error_message}"))
        .set_buttons(MessageButtons::Ok)
        .show();
}
