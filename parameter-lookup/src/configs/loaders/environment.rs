use std::env;

pub fn optional_env(env_name: &str) -> Option<String> {
    env::var(env_name).ok()
}

/// Falls back to `default` only when the variable is absent. A set value that
/// is not valid UTF-8 is kept, lossily converted.
pub fn env_or(env_name: &str, default: &str) -> String {
    env::var_os(env_name)
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_else(|| default.to_string())
}

/// Value of the first variable in `env_names` that is set.
pub fn first_env(env_names: &[&str]) -> Option<String> {
    env_names.iter().find_map(|name| optional_env(name))
}
