use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref label) = config.result_label {
        if label.trim().is_empty() {
            errors.push("result_label: must not be empty".to_string());
        } else if label.chars().any(char::is_whitespace) {
            errors.push(format!(
                "result_label: '{}' must be a single word with no spaces",
                label
            ));
        }
    }

    if let Some(ref path) = config.transcript {
        if path.as_os_str().is_empty() {
            errors.push("transcript: path must not be empty".to_string());
        }
    }

    if let Some(ref path) = config.players {
        if path.as_os_str().is_empty() {
            errors.push("players: path must not be empty".to_string());
        } else if path.as_os_str() == "-" {
            errors.push("players: must be a file, stdin is only supported for the transcript".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
