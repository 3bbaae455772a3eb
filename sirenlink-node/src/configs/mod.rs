mod settings;

pub use settings::{Cellular, Logger, RoleSelection, Settings};
