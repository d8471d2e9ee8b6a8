use crate::models::error::AppError;
use crate::models::records::CredentialInfo;
use crate::services::api::BackendClient;
use crate::services::cache;
use serde_json::Value;

/// Fetches the header values the scraping integration currently uses.
pub async fn credential() -> Result<CredentialInfo, AppError> {
    let client = BackendClient::new()?;
    client.get_json(&client.config().credential_url()).await
}

/// Updates the scraping credential from a topup-platform URL. The credential
/// cache key is revalidated on success and on failure.
pub async fn set_credential_from_url(url: &str) -> Result<(), AppError> {
    validate_credential_url(url)?;

    let client = BackendClient::new()?;
    let result: Result<Value, AppError> = client
        .post_json(&client.config().credential_url(), url)
        .await;

    cache::invalidate(cache::keys::CREDENTIAL);
    result.map(|_| ())
}

/// Rejects blank input before any network call.
pub fn validate_credential_url(url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::InvalidParameter(
            "Enter a valid URL to update the credential".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_is_rejected() {
        assert_eq!(
            validate_credential_url("").unwrap_err().kind(),
            "invalid_parameter"
        );
        assert_eq!(
            validate_credential_url("   ").unwrap_err().kind(),
            "invalid_parameter"
        );
    }

    #[test]
    fn test_plausible_url_is_accepted() {
        assert!(validate_credential_url("https://topup.example.edu/pay?token=abc").is_ok());
    }
}
