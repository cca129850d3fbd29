use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;
use std::fmt;
use std::sync::Arc;

/// Bootstrap settings for infrastructure configuration
///
/// Read once at process start; everything here is immutable afterwards.
/// The admin password is the single shared credential of the service and
/// is kept out of Debug output.
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    admin_password: String,
    upload_dir: String,
}

impl BootstrapSettings {
    /// Load bootstrap settings from environment variables
    ///
    /// `DATABASE_URL` has no default: without a store connection string the
    /// process cannot do anything useful, so startup fails.
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let database_url = env_provider
            .get_var("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApplicationError::MissingSetting {
                setting_name: "DATABASE_URL".to_string(),
            })?;

        let server_host = env_provider
            .get_var("HOST")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port_value = env_provider
            .get_var("PORT")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "8000".to_string());
        let server_port =
            port_value
                .parse::<u16>()
                .map_err(|_| ApplicationError::InvalidSetting {
                    setting_name: "PORT".to_string(),
                    reason: format!("Expected port number between 1 and 65535, got: {}", port_value),
                })?;
        if server_port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: "PORT".to_string(),
                reason: "Port 0 is outside valid range".to_string(),
            });
        }

        let admin_password = env_provider
            .get_var("ADMIN_PASSWORD")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "password".to_string());

        let upload_dir = env_provider
            .get_var("UPLOAD_DIR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "uploads".to_string());

        Ok(Self {
            database_url,
            server_host,
            server_port,
            admin_password,
            upload_dir,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    pub fn upload_dir(&self) -> &str {
        &self.upload_dir
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("admin_password", &"<redacted>")
            .field("upload_dir", &self.upload_dir)
            .finish()
    }
}
