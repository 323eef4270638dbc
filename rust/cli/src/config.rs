use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// JSONL file receiving shuffle audit events
    pub audit_log: Option<PathBuf>,
    /// Table the CLI shuffles for; a random id is used when unset
    pub table_id: Option<Uuid>,
    pub bench_iterations: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub audit_log: ValueSource,
    pub table_id: ValueSource,
    pub bench_iterations: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            audit_log: ValueSource::Default,
            table_id: ValueSource::Default,
            bench_iterations: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audit_log: None,
            table_id: None,
            bench_iterations: 10_000,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration: defaults, then the TOML file named by
/// `FAIRDEAL_CONFIG`, then individual `FAIRDEAL_*` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FAIRDEAL_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.audit_log {
            cfg.audit_log = Some(v);
            sources.audit_log = ValueSource::File;
        }
        if let Some(v) = f.table_id {
            cfg.table_id = Some(parse_table_id(&v)?);
            sources.table_id = ValueSource::File;
        }
        if let Some(v) = f.bench_iterations {
            cfg.bench_iterations = v;
            sources.bench_iterations = ValueSource::File;
        }
    }

    if let Ok(path) = std::env::var("FAIRDEAL_AUDIT_LOG")
        && !path.is_empty()
    {
        cfg.audit_log = Some(PathBuf::from(path));
        sources.audit_log = ValueSource::Env;
    }
    if let Ok(id) = std::env::var("FAIRDEAL_TABLE_ID")
        && !id.is_empty()
    {
        cfg.table_id = Some(parse_table_id(&id)?);
        sources.table_id = ValueSource::Env;
    }
    if let Ok(n) = std::env::var("FAIRDEAL_BENCH_ITERATIONS")
        && !n.is_empty()
    {
        cfg.bench_iterations = n
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bench_iterations".into()))?;
        sources.bench_iterations = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    audit_log: Option<PathBuf>,
    #[serde(default)]
    table_id: Option<String>,
    #[serde(default)]
    bench_iterations: Option<u32>,
}

fn parse_table_id(s: &str) -> Result<Uuid, ConfigError> {
    Uuid::parse_str(s.trim())
        .map_err(|_| ConfigError::Invalid(format!("Invalid table_id '{}': expected a UUID", s)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.bench_iterations == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: bench_iterations must be >0".into(),
        ));
    }
    Ok(())
}
