use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, env_bool, server::ServerConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Start with the three demo users (`SEED_DEMO_USERS`, default on)
    pub seed_demo_users: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let cors = CorsConfig::from_env()?;
        let seed_demo_users = env_bool("SEED_DEMO_USERS", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            seed_demo_users,
        })
    }
}
