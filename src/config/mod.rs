//! Configuration module.
//!
//! Settings resolve through the precedence chain
//! Defaults -> Config File -> Env Vars -> CLI Args.

pub mod loader;

pub use loader::{
    ConfigError, ConfigFile, ResolvedConfig, apply_cli_overrides, apply_env_overrides,
    default_config_path, default_log_path, load_config_with_precedence, merge_config,
};
