//! Widget configuration management.
//!
//! # Sub-modules
//!
//! - [`config_struct`]: `Config` and `ReplyConfig` plus their `Default` impls
//! - [`env_vars`]: Environment-variable allowlist and `${VAR}` substitution
//! - [`persistence`]: `impl Config` methods for load/save and path resolution
//! - [`validation`]: `impl Config` semantic checks run after parsing

pub mod config_struct;
pub mod env_vars;
pub mod persistence;
pub mod validation;

pub use config_struct::{Config, ReplyConfig};
pub use env_vars::{
    ALLOWED_ENV_VARS, is_env_var_allowed, substitute_variables, substitute_variables_with_allowlist,
};
pub use validation::validate_endpoint;
