//! hashcode command line
//!
//! A console menu that hashes two configured contacts with one of three
//! strategies and reports when both hash codes are equal:
//!
//! 1. [`ManualContact`]: explicit [`HashCombiner`](hashcode::HashCombiner) calls
//! 2. [`ReflectiveContact`]: every derived field descriptor
//! 3. [`SelectorContact`]: an explicit field selector list

pub mod contact;
pub mod demo;
pub mod error;
pub mod menu;

use std::path::Path;

use hashcode::DemoConfig;

pub use contact::{ManualContact, ReflectiveContact, SelectorContact};
pub use demo::{run_demo, DemoOutcome, Strategy};
pub use error::CliError;
pub use menu::{
    Key, KeySource, MenuCommand, MenuController, MenuState, ScriptedKeys, TerminalKeys,
};

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "hashcode.toml";

/// Loads the configuration for a run.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is used
/// when present and the built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<DemoConfig, CliError> {
    match path {
        Some(path) => Ok(DemoConfig::load(path)?),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Ok(DemoConfig::load(DEFAULT_CONFIG_PATH)?)
        }
        None => Ok(DemoConfig::default()),
    }
}
