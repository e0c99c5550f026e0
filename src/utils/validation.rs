use crate::utils::error::{Result, SoccerError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SoccerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SoccerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SoccerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SoccerError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SoccerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(SoccerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SoccerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("notifier.endpoint", "https://example.com/hook").is_ok());
        assert!(validate_url("notifier.endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("notifier.endpoint", "").is_err());
        assert!(validate_url("notifier.endpoint", "invalid-url").is_err());
        assert!(validate_url("notifier.endpoint", "smtp://mail.example.com").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("notifier.kind", "log", &["log", "webhook"]).is_ok());
        let err = validate_one_of("notifier.kind", "email", &["log", "webhook"]).unwrap_err();
        assert!(err.to_string().contains("log, webhook"));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("notifier.timeout_seconds", 5u64, 1, 60).is_ok());
        assert!(validate_range("notifier.timeout_seconds", 0u64, 1, 60).is_err());
        assert!(validate_range("notifier.timeout_seconds", 61u64, 1, 60).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("x".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("a", &present).unwrap(), "x");
        assert!(matches!(
            validate_required_field("a", &missing),
            Err(SoccerError::MissingConfigError { .. })
        ));
        assert!(validate_non_empty_string("a", "  ").is_err());
    }
}
