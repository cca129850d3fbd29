use thiserror::Error;

/// Errors raised while loading startup configuration
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Missing required setting: {setting_name}")]
    MissingSetting { setting_name: String },

    #[error("Invalid setting {setting_name}: {reason}")]
    InvalidSetting { setting_name: String, reason: String },
}
