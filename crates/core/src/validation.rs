//! Field validators shared by the HTTP handlers.

/// Validate a project or task name: required, non-empty after trim.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_name() {
        assert!(validate_name("Buy milk").is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert!(validate_name("").is_err());
    }

    #[test]
    fn rejects_whitespace_only_name() {
        assert!(validate_name("   ").is_err());
    }
}
