use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_NUMBER: u64 = 100;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub(crate) version: u32,

    /// Numbers are chosen from `1..max_number`.
    #[serde(default = "default_max_number")]
    pub max_number: u64,

    /// Stop at this round instead of listing every solution.
    #[serde(default)]
    pub target_round: Option<usize>,

    #[serde(default)]
    pub json: bool,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_max_number() -> u64 {
    DEFAULT_MAX_NUMBER
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: 1,
            max_number: DEFAULT_MAX_NUMBER,
            target_round: None,
            json: false,
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    MaxNumberTooSmall(u64),
    TargetRoundZero,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "could not read settings: {}", err),
            SettingsError::Parse(err) => write!(f, "invalid settings file: {}", err),
            SettingsError::MaxNumberTooSmall(n) => {
                write!(f, "max number must be an integer > 1, got {}", n)
            }
            SettingsError::TargetRoundZero => write!(f, "target round must be an integer > 0"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        let mut settings = serde_json::from_str::<Settings>(&contents)?;
        settings.migrate();
        trace!(target: "settings", "Loaded {:?} from {}", settings, path.display());
        Ok(settings)
    }

    /// Layers command-line flags over these settings. `json` can only switch JSON on.
    pub fn with_overrides(
        mut self,
        max_number: Option<u64>,
        target_round: Option<usize>,
        json: bool,
    ) -> Self {
        if let Some(max_number) = max_number {
            self.max_number = max_number;
        }
        if let Some(target_round) = target_round {
            self.target_round = Some(target_round);
        }
        self.json |= json;
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_number < 2 {
            return Err(SettingsError::MaxNumberTooSmall(self.max_number));
        }
        if self.target_round == Some(0) {
            return Err(SettingsError::TargetRoundZero);
        }
        Ok(())
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    /// With `DEBUG=1`, text reports also list rounds nobody could solve.
    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }
}
