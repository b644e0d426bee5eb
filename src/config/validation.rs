use std::env;

/// Expand environment variables in a string using ${VAR_NAME} syntax.
/// Unknown variables are left as written.
pub fn expand_env_var_in_string(value: &str) -> String {
    let Ok(re) = regex::Regex::new(r"\$\{([^}]+)\}") else {
        return value.to_string();
    };

    re.replace_all(value, |cap: &regex::Captures| {
        env::var(&cap[1]).unwrap_or_else(|_| cap[0].to_string())
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_known_variable() {
        env::set_var("CC_TEST_EXPAND_HOST", "api.internal");
        assert_eq!(
            expand_env_var_in_string("https://${CC_TEST_EXPAND_HOST}:8000"),
            "https://api.internal:8000"
        );
    }

    #[test]
    fn test_unknown_variable_left_alone() {
        assert_eq!(
            expand_env_var_in_string("${CC_TEST_DEFINITELY_UNSET}/x"),
            "${CC_TEST_DEFINITELY_UNSET}/x"
        );
    }

    #[test]
    fn test_plain_string_unchanged() {
        assert_eq!(expand_env_var_in_string("http://localhost"), "http://localhost");
    }
}
