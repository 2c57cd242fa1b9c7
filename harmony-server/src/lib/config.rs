use std::env;
use std::fs;
use std::io;
use std::path::Path;

use auth::SecretString;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Signing secret. Leave empty to use `secret_file`.
    #[serde(default)]
    pub secret: SecretString,
    pub secret_file: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub memory_cost_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (HARMONY_DATABASE__URL, HARMONY_SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: HARMONY_JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::with_prefix("HARMONY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        configuration.try_deserialize()
    }
}

/// Error for signing secret resolution failures
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Failed to read secret file {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Failed to write secret file {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error("Secret file {0} is empty")]
    Empty(String),
}

const GENERATED_SECRET_BYTES: usize = 32;

/// Resolve the token signing secret.
///
/// An explicit secret wins. Otherwise the secret is read from `secret_file`,
/// and when that file does not exist a random one is generated and persisted
/// there (mode 0600 on unix) so issued tokens survive restarts.
///
/// # Errors
/// * `Read` - Secret file exists but cannot be read
/// * `Write` - Generated secret cannot be persisted
/// * `Empty` - Secret file exists but holds no secret
pub fn resolve_jwt_secret(jwt: &JwtConfig) -> Result<SecretString, SecretError> {
    if !jwt.secret.is_empty() {
        return Ok(jwt.secret.clone());
    }

    let path = Path::new(&jwt.secret_file);
    match fs::read_to_string(path) {
        Ok(contents) => {
            let secret = contents.trim();
            if secret.is_empty() {
                return Err(SecretError::Empty(jwt.secret_file.clone()));
            }
            tracing::info!(path = %jwt.secret_file, "Loaded signing secret from file");
            Ok(SecretString::from(secret))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let secret = generate_secret();
            write_secret_file(path, &secret).map_err(|source| SecretError::Write {
                path: jwt.secret_file.clone(),
                source,
            })?;
            tracing::info!(path = %jwt.secret_file, "Generated new signing secret");
            Ok(secret)
        }
        Err(source) => Err(SecretError::Read {
            path: jwt.secret_file.clone(),
            source,
        }),
    }
}

fn generate_secret() -> SecretString {
    let mut bytes = [0u8; GENERATED_SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    SecretString::new(hex::encode(bytes))
}

#[cfg(unix)]
fn write_secret_file(path: &Path, secret: &SecretString) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    create_parent_dir(path)?;
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(secret.expose_secret().as_bytes())
}

#[cfg(not(unix))]
fn write_secret_file(path: &Path, secret: &SecretString) -> io::Result<()> {
    create_parent_dir(path)?;
    fs::write(path, secret.expose_secret())
}

fn create_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use uuid::Uuid;

    use super::*;

    fn temp_secret_path() -> PathBuf {
        env::temp_dir()
            .join(format!("harmony-test-{}", Uuid::new_v4()))
            .join("jwt_secret")
    }

    fn jwt_config(secret: &str, secret_file: &Path) -> JwtConfig {
        JwtConfig {
            secret: SecretString::from(secret),
            secret_file: secret_file.to_string_lossy().into_owned(),
            access_ttl_minutes: 15,
            refresh_ttl_hours: 168,
        }
    }

    #[test]
    fn test_explicit_secret_wins() {
        let path = temp_secret_path();
        let secret = resolve_jwt_secret(&jwt_config("configured-secret", &path)).unwrap();

        assert_eq!(secret.expose_secret(), "configured-secret");
        assert!(!path.exists());
    }

    #[test]
    fn test_generated_secret_is_persisted_and_reused() {
        let path = temp_secret_path();
        let config = jwt_config("", &path);

        let first = resolve_jwt_secret(&config).unwrap();
        assert_eq!(first.expose_secret().len(), GENERATED_SECRET_BYTES * 2);
        assert!(path.exists());

        let second = resolve_jwt_secret(&config).unwrap();
        assert_eq!(first, second);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_empty_secret_file_is_rejected() {
        let path = temp_secret_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "  \n").unwrap();

        let result = resolve_jwt_secret(&jwt_config("", &path));
        assert!(matches!(result, Err(SecretError::Empty(_))));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
