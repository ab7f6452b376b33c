use std::env;

/// Retrieves an environment variable as a port number, with a default.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `default`: The value used when the variable is unset or unparseable.
///
/// # Returns
/// - `u16`
pub fn get_env_var_as_u16(var: &str, default: u16) -> u16 {
    env::var(var)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(get_env_var_as_u16("WIREWATCH_TEST_UNSET_PORT", 8080), 8080);
    }

    #[test]
    fn test_value_parsed_when_set() {
        std::env::set_var("WIREWATCH_TEST_PORT", "9100");
        assert_eq!(get_env_var_as_u16("WIREWATCH_TEST_PORT", 8080), 9100);
        std::env::remove_var("WIREWATCH_TEST_PORT");
    }
}
