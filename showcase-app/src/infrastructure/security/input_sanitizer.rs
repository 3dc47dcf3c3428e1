use showcase_errors::AppError;

const MAX_URL_LENGTH: usize = 2048;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

pub struct InputSanitizer;

impl InputSanitizer {
    pub fn validate_url(url: &str) -> Result<String, AppError> {
        let url = url.trim();

        if url.is_empty() {
            return Err(AppError::InvalidUrl("URL must not be empty".to_string()));
        }

        if url.len() > MAX_URL_LENGTH {
            return Err(AppError::InvalidUrl("URL is too long".to_string()));
        }

        let parsed = url::Url::parse(url)
            .map_err(|_| AppError::InvalidUrl(format!("cannot parse '{}'", url)))?;

        let scheme = parsed.scheme().to_lowercase();
        if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
            return Err(AppError::InvalidUrl(
                "only HTTP and HTTPS are allowed".to_string(),
            ));
        }

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(AppError::InvalidUrl("URL must have a host".to_string()));
        }

        Ok(parsed.to_string())
    }

    /// Rejects blank form text; no other validation is applied.
    pub fn require_text(field: &str, value: &str) -> Result<String, AppError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
        }
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url() {
        assert!(InputSanitizer::validate_url("https://www.vellum.ai").is_ok());
        assert!(InputSanitizer::validate_url("http://example.com/path").is_ok());
        assert!(InputSanitizer::validate_url("http://127.0.0.1:8080/docs").is_ok());
        assert_eq!(
            InputSanitizer::validate_url("  https://example.com  ").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_invalid_url() {
        assert!(InputSanitizer::validate_url("").is_err());
        assert!(InputSanitizer::validate_url("not-a-url").is_err());
        assert!(InputSanitizer::validate_url("ftp://example.com").is_err());
        assert!(InputSanitizer::validate_url("mailto:team@example.com").is_err());
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(InputSanitizer::validate_url(&long).is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(InputSanitizer::require_text("topic", "  AI  ").unwrap(), "AI");
        assert_eq!(
            InputSanitizer::require_text("topic", " \n").unwrap_err(),
            AppError::InvalidInput("topic must not be empty".to_string())
        );
    }
}
