// Config layer - Startup configuration and logging
pub mod env_provider;
pub mod errors;
pub mod logging;
pub mod settings;

pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::init_logging;
pub use settings::BootstrapSettings;
