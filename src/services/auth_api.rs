use crate::models::error::AppError;
use crate::models::records::MeInfo;
use crate::services::api::BackendClient;
use crate::services::cache;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct LoginCredentials<'a> {
    name: &'a str,
    password: &'a str,
}

/// Logs into a role. The session identity key is revalidated on success and
/// on failure, so the displayed state always reflects the latest server
/// truth after any attempted login.
pub async fn login(name: &str, password: &str) -> Result<(), AppError> {
    let client = BackendClient::new()?;
    let credentials = LoginCredentials { name, password };

    let result: Result<Value, AppError> = client
        .post_json(&client.config().login_url(), &credentials)
        .await;

    cache::invalidate(cache::keys::ME);
    result.map(|_| ())
}

/// Logs the current role out; revalidates session identity either way.
pub async fn logout() -> Result<(), AppError> {
    let client = BackendClient::new()?;

    let result: Result<Value, AppError> = client.get_json(&client.config().logout_url()).await;

    cache::invalidate(cache::keys::ME);
    result.map(|_| ())
}

/// Current session role name, or `None` when not logged in. An anonymous
/// session is a regular outcome, not an error.
pub async fn me() -> Result<Option<String>, AppError> {
    let client = BackendClient::new()?;

    match client.get_json::<MeInfo>(&client.config().me_url()).await {
        Ok(info) => Ok(Some(info.role_name)),
        Err(AppError::Server { ref name, .. }) if name == "token_required" => Ok(None),
        Err(e) => Err(e),
    }
}
