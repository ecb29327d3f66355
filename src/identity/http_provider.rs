//! HTTP client for the remote identity provider.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::models::{AuthToken, Credential, NewProfile, Profile, ProfileUpdate, SignUpMetadata};
use super::provider::IdentityProvider;
use crate::session::AuthError;

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    metadata: SignUpMetadata,
}

#[derive(Deserialize)]
struct UsernameTakenResponse {
    taken: bool,
}

/// HTTP implementation of [`IdentityProvider`].
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIdentityProvider {
    /// Create a new provider client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the identity service (e.g., "https://auth.example.com")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create HTTP client")?;

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Get the base URL of the identity service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a non-success response status onto the error taxonomy.
    fn error_for_status(status: StatusCode, context: &str) -> AuthError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AuthError::Authentication(format!("{} rejected by the provider", context))
            }
            StatusCode::CONFLICT => AuthError::Conflict(context.to_string()),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AuthError::Validation(format!("{} rejected as invalid", context))
            }
            other => AuthError::Remote(format!("{} failed with status {}", context, other)),
        }
    }

    fn remote(context: &str, err: reqwest::Error) -> AuthError {
        AuthError::Remote(format!("{}: {}", context, err))
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, AuthError> {
        if !response.status().is_success() {
            return Err(Self::error_for_status(response.status(), context));
        }
        response
            .json()
            .await
            .map_err(|err| Self::remote(context, err))
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Credential, AuthError> {
        let response = self
            .client
            .post(self.url("/auth/sign-in"))
            .json(&SignInRequest { email, password })
            .send()
            .await
            .map_err(|err| Self::remote("sign-in", err))?;
        Self::parse_json(response, "sign-in").await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignUpMetadata,
    ) -> Result<Credential, AuthError> {
        let response = self
            .client
            .post(self.url("/auth/sign-up"))
            .json(&SignUpRequest {
                email,
                password,
                metadata,
            })
            .send()
            .await
            .map_err(|err| Self::remote("sign-up", err))?;
        Self::parse_json(response, "sign-up").await
    }

    async fn sign_out(&self, token: &AuthToken) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.url("/auth/sign-out"))
            .bearer_auth(&token.0)
            .send()
            .await
            .map_err(|err| Self::remote("sign-out", err))?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response.status(), "sign-out"));
        }
        Ok(())
    }

    async fn get_profile(&self, identity_id: &str) -> Result<Profile, AuthError> {
        let response = self
            .client
            .get(self.url(&format!("/profiles/{}", identity_id)))
            .send()
            .await
            .map_err(|err| Self::remote("profile fetch", err))?;
        Self::parse_json(response, "profile fetch").await
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, AuthError> {
        let response = self
            .client
            .post(self.url("/profiles"))
            .json(&profile)
            .send()
            .await
            .map_err(|err| Self::remote("profile creation", err))?;
        Self::parse_json(response, "profile creation").await
    }

    async fn update_profile(
        &self,
        identity_id: &str,
        update: ProfileUpdate,
    ) -> Result<Profile, AuthError> {
        let response = self
            .client
            .patch(self.url(&format!("/profiles/{}", identity_id)))
            .json(&update)
            .send()
            .await
            .map_err(|err| Self::remote("profile update", err))?;
        Self::parse_json(response, "profile update").await
    }

    async fn is_username_taken(&self, username: &str) -> Result<bool, AuthError> {
        let response = self
            .client
            .get(self.url("/profiles/username-taken"))
            .query(&[("username", username)])
            .send()
            .await
            .map_err(|err| Self::remote("username check", err))?;
        let parsed: UsernameTakenResponse = Self::parse_json(response, "username check").await?;
        Ok(parsed.taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let provider =
            HttpIdentityProvider::new("https://auth.example.com".to_string(), 10).unwrap();
        assert_eq!(provider.base_url(), "https://auth.example.com");
    }

    #[test]
    fn test_trailing_slash_removal() {
        let provider =
            HttpIdentityProvider::new("https://auth.example.com/".to_string(), 10).unwrap();
        assert_eq!(provider.base_url(), "https://auth.example.com");
        assert_eq!(
            provider.url("/auth/sign-in"),
            "https://auth.example.com/auth/sign-in"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            HttpIdentityProvider::error_for_status(StatusCode::UNAUTHORIZED, "sign-in"),
            AuthError::Authentication(_)
        ));
        assert!(matches!(
            HttpIdentityProvider::error_for_status(StatusCode::CONFLICT, "sign-up"),
            AuthError::Conflict(_)
        ));
        assert!(matches!(
            HttpIdentityProvider::error_for_status(StatusCode::UNPROCESSABLE_ENTITY, "sign-up"),
            AuthError::Validation(_)
        ));
        assert!(matches!(
            HttpIdentityProvider::error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "sign-in"),
            AuthError::Remote(_)
        ));
    }
}
