use std::env;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use sirenlink_api::identity::DeviceId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

/// Cellular uplink settings for the coordinator's modem bridge.
///
/// Read by the transport collaborator; the wire contract itself never looks
/// at this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cellular {
    pub enabled: bool,
    pub apn: Option<String>,
}

/// One flag per fleet role, exactly one of which must be set.
///
/// The deployed fleet used a mutually exclusive build define per image;
/// this is the same scheme as startup configuration, validated by
/// `Identity::from_selection` before the node starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleSelection {
    #[serde(default)]
    pub siren1: bool,
    #[serde(default)]
    pub siren2: bool,
    #[serde(default)]
    pub siren3: bool,
    #[serde(default)]
    pub siren5: bool,
    #[serde(default)]
    pub siren8: bool,
    #[serde(default)]
    pub handheld1: bool,
    #[serde(default)]
    pub coordinator: bool,
}

impl RoleSelection {
    /// Returns every selected role
    pub fn selected(&self) -> Vec<DeviceId> {
        let flags = [
            (self.siren1, DeviceId::Siren1),
            (self.siren2, DeviceId::Siren2),
            (self.siren3, DeviceId::Siren3),
            (self.siren5, DeviceId::Siren5),
            (self.siren8, DeviceId::Siren8),
            (self.handheld1, DeviceId::Handheld1),
            (self.coordinator, DeviceId::Coordinator),
        ];

        flags
            .into_iter()
            .filter_map(|(set, device)| set.then_some(device))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub identity: RoleSelection,
    pub cellular: Option<Cellular>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::default().separator("_"))
            .build()?
            .try_deserialize()
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
