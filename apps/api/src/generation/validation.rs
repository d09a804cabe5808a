use url::Url;

use crate::errors::AppError;

/// Checks an article URL before any network call is made.
pub fn validate_url(url: &str) -> Result<&str, AppError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("Please enter a valid URL".to_string()));
    }
    if Url::parse(url).is_err() {
        return Err(AppError::Validation(
            "Please enter a valid URL format".to_string(),
        ));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<&str, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_url() {
        assert_eq!(message(validate_url("   ")), "Please enter a valid URL");
    }

    #[test]
    fn test_malformed_url() {
        assert_eq!(message(validate_url("hbr.org/article")), "Please enter a valid URL format");
    }

    #[test]
    fn test_valid_url_is_trimmed() {
        assert_eq!(
            validate_url(" https://hbr.org/a ").unwrap(),
            "https://hbr.org/a"
        );
    }
}
