//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    /// Bearer token to present on authenticated requests
    pub token: String,
}

/// Login Handler
///
/// Verifies credentials and issues a fresh API token.
#[endpoint(
    tags("users"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid email or password"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let user = state
        .app
        .users
        .verify_credentials(&request.email, &request.password)
        .await
        .map_err(into_status_error)?;

    let issued = state
        .app
        .auth
        .issue_api_token(user.id)
        .await
        .map_err(|source| {
            error!("failed to issue api token: {source}");

            StatusError::internal_server_error()
        })?;

    Ok(Json(LoginResponse {
        token: issued.token,
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use storefront_app::{
        auth::{
            MockAuthService,
            models::{ApiToken, ApiTokenId, IssuedApiToken},
        },
        domain::users::{MockUsersService, UsersServiceError, models::UserId},
    };
    use testresult::TestResult;

    use crate::test_helpers::{login_service, make_user};

    use super::*;

    fn payload() -> serde_json::Value {
        json!({ "email": "ada@example.com", "password": "hunter2hunter2" })
    }

    fn issued_token(user: i64) -> IssuedApiToken {
        IssuedApiToken {
            token: format!("sf_{}", "0".repeat(64)),
            metadata: ApiToken {
                id: ApiTokenId::from_i64(1),
                user_id: UserId::from_i64(user),
                created_at: Timestamp::UNIX_EPOCH,
            },
        }
    }

    fn make_service(users: MockUsersService, auth: MockAuthService) -> Service {
        login_service(users, auth, Router::with_path("users/login").post(handler))
    }

    #[tokio::test]
    async fn test_login_success_returns_token() -> TestResult {
        let mut users = MockUsersService::new();
        let mut auth = MockAuthService::new();

        users
            .expect_verify_credentials()
            .once()
            .withf(|email, password| email == "ada@example.com" && password == "hunter2hunter2")
            .return_once(|_, _| Ok(make_user(11)));

        users.expect_register_user().never();
        users.expect_get_user().never();

        auth.expect_issue_api_token()
            .once()
            .withf(|user| user.into_i64() == 11)
            .return_once(|_| Ok(issued_token(11)));

        auth.expect_authenticate_bearer().never();

        let mut res = TestClient::post("http://example.com/users/login")
            .json(&payload())
            .send(&make_service(users, auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: LoginResponse = res.take_json().await?;

        assert!(body.token.starts_with("sf_"));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_bad_credentials_returns_401() -> TestResult {
        let mut users = MockUsersService::new();
        let mut auth = MockAuthService::new();

        users
            .expect_verify_credentials()
            .once()
            .return_once(|_, _| Err(UsersServiceError::InvalidCredentials));

        users.expect_register_user().never();
        users.expect_get_user().never();

        auth.expect_issue_api_token().never();
        auth.expect_authenticate_bearer().never();

        let res = TestClient::post("http://example.com/users/login")
            .json(&payload())
            .send(&make_service(users, auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_missing_fields_returns_400() -> TestResult {
        let mut users = MockUsersService::new();
        let mut auth = MockAuthService::new();

        users.expect_verify_credentials().never();
        users.expect_register_user().never();
        users.expect_get_user().never();

        auth.expect_issue_api_token().never();
        auth.expect_authenticate_bearer().never();

        let res = TestClient::post("http://example.com/users/login")
            .json(&json!({ "email": "ada@example.com" }))
            .send(&make_service(users, auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
