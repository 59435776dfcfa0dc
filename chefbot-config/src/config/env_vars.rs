//! Environment variable allowlist and substitution for config file processing.
//!
//! Only allowlisted variables (and `CHEFBOT_*` prefixed ones) are resolved by
//! default, so a shared config file cannot pull arbitrary secrets into the
//! query endpoint URL.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `${VAR_NAME}` or `${VAR_NAME:-default_value}`.
static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-((?:[^}\\]|\\.)*))?}")
        .expect("env-var substitution regex is a compile-time constant and must be valid")
});

/// Matches a top-level `allow_all_env_vars: true` line.
static ALLOW_ALL_ENV_VARS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^allow_all_env_vars:\s*true\s*$")
        .expect("allow_all_env_vars pre-scan regex is a compile-time constant and must be valid")
});

/// Environment variables that are safe to substitute in config files.
pub const ALLOWED_ENV_VARS: &[&str] = &[
    "HOME",
    "USER",
    "USERNAME",
    "LOGNAME",
    "USERPROFILE",
    "HOSTNAME",
    "HOST",
    "LANG",
    "XDG_CONFIG_HOME",
    "XDG_DATA_HOME",
    "XDG_STATE_HOME",
    "XDG_CACHE_HOME",
    "TMPDIR",
    "TEMP",
    "TMP",
    "APPDATA",
    "LOCALAPPDATA",
];

/// Check whether a variable name is on the substitution allowlist.
///
/// A variable is allowed if it appears in [`ALLOWED_ENV_VARS`] or starts with
/// `CHEFBOT_`.
pub fn is_env_var_allowed(var_name: &str) -> bool {
    ALLOWED_ENV_VARS.contains(&var_name) || var_name.starts_with("CHEFBOT_")
}

/// Substitute `${VAR_NAME}` patterns with environment variable values.
///
/// - `${VAR}` is replaced with the value of `VAR`; unset variables are left as-is.
/// - `${VAR:-default}` falls back to `default` when `VAR` is unset.
/// - `$${VAR}` is an escape and produces the literal `${VAR}`.
///
/// Non-allowlisted variables are left untouched and a warning is logged.
pub fn substitute_variables(input: &str) -> String {
    substitute_variables_with_allowlist(input, false)
}

/// Substitute variables, resolving every variable when `allow_all` is set.
pub fn substitute_variables_with_allowlist(input: &str, allow_all: bool) -> String {
    let escaped_placeholder = "\x00ESC_DOLLAR\x00";
    let working = input.replace("$${", escaped_placeholder);

    let result = ENV_VAR_PATTERN.replace_all(&working, |caps: &regex::Captures| {
        let var_name = &caps[1];

        if !allow_all && !is_env_var_allowed(var_name) {
            log::warn!(
                "Config references non-allowlisted environment variable ${{{var_name}}}; skipped. \
                 Set `allow_all_env_vars: true` to resolve it."
            );
            return caps[0].to_string();
        }

        match std::env::var(var_name) {
            Ok(val) => val,
            Err(_) => caps
                .get(2)
                .map(|m| m.as_str().replace("\\}", "}"))
                .unwrap_or_else(|| caps[0].to_string()),
        }
    });

    result.replace(escaped_placeholder, "${")
}

/// Look for `allow_all_env_vars: true` before the YAML is parsed, since
/// substitution has to run on the raw text.
pub(crate) fn pre_scan_allow_all_env_vars(raw_yaml: &str) -> bool {
    ALLOW_ALL_ENV_VARS_PATTERN.is_match(raw_yaml)
}
