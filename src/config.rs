// src/config.rs
use clap::ValueEnum;

/// Environment variable selecting the runtime profile.
pub const PROFILE_ENV_VAR: &str = "RESUME_EXTRACTOR_ENV";

/// Runtime profile. Only affects the default log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Development,
    Production,
}

impl Profile {
    /// Reads the profile from `RESUME_EXTRACTOR_ENV`, defaulting to development.
    pub fn from_env() -> Self {
        Self::parse(std::env::var(PROFILE_ENV_VAR).ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "production" => Profile::Production,
            _ => Profile::Development,
        }
    }

    pub fn default_log_level(self) -> &'static str {
        match self {
            Profile::Development => "debug",
            Profile::Production => "info",
        }
    }
}

/// Level used when `RUST_LOG` is unset. `--verbose` always wins.
pub fn log_level(verbose: bool, profile: Profile) -> &'static str {
    if verbose {
        "debug"
    } else {
        profile.default_log_level()
    }
}

/// Which output files a run produces.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Both,
}

impl OutputFormat {
    pub fn writes_csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }

    pub fn writes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}
