// Authentication endpoints
//
// Bearer-token auth only: login yields an opaque token plus the user
// profile; the token is stored and replayed, never inspected. There is
// no refresh flow — an expired token surfaces as Error::Authentication
// and the caller re-logs-in.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;

use crate::Error;
use crate::client::ApiClient;
use crate::types::LoginResponse;

impl ApiClient {
    /// `POST /api/auth/login`
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<LoginResponse, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        debug!(email, "logging in");
        self.post(
            "api/auth/login",
            &[],
            &Body {
                email,
                password: password.expose_secret(),
            },
        )
        .await
    }

    /// `POST /api/auth/logout`
    ///
    /// Best-effort server-side invalidation; local session state is
    /// cleared regardless of the outcome.
    pub async fn logout(&self) -> Result<(), Error> {
        self.post_no_response("api/auth/logout", &[], &serde_json::json!({}))
            .await
    }
}
