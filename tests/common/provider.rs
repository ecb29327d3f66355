//! In-memory identity provider with scriptable failures.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use ummah_client::identity::{
    AuthToken, Credential, IdentityProvider, NewProfile, Profile, ProfileUpdate, SignUpMetadata,
    UserRole,
};
use ummah_client::session::AuthError;

struct Account {
    password: String,
    identity_id: String,
    verified: bool,
}

#[derive(Default)]
struct State {
    accounts: HashMap<String, Account>,
    profiles: HashMap<String, Profile>,
    fail_sign_out: bool,
    reject_tokens: bool,
    sign_out_calls: u32,
}

pub struct FakeIdentityProvider {
    state: Mutex<State>,
}

impl FakeIdentityProvider {
    pub fn empty() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    /// Provider seeded with one regular user and one admin.
    pub fn with_seeded_users() -> Self {
        use super::constants::*;

        let provider = Self::empty();
        provider.seed_user(
            USER_ID,
            USER_EMAIL,
            USER_PASSWORD,
            USER_NAME,
            USER_USERNAME,
            UserRole::User,
        );
        provider.seed_user(
            ADMIN_ID,
            ADMIN_EMAIL,
            ADMIN_PASSWORD,
            "İmam Hatip",
            ADMIN_USERNAME,
            UserRole::Admin,
        );
        provider
    }

    pub fn seed_user(
        &self,
        id: &str,
        email: &str,
        password: &str,
        name: &str,
        username: &str,
        role: UserRole,
    ) {
        let mut state = self.state.lock().unwrap();
        state.accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                identity_id: id.to_string(),
                verified: true,
            },
        );
        state.profiles.insert(
            id.to_string(),
            Profile {
                id: id.to_string(),
                email: email.to_string(),
                name: name.to_string(),
                username: username.to_string(),
                avatar_url: None,
                bio: None,
                location: None,
                website: None,
                verified: true,
                role,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        );
    }

    /// Makes every subsequent sign-out call fail.
    pub fn fail_sign_out(&self) {
        self.state.lock().unwrap().fail_sign_out = true;
    }

    /// Makes every subsequent profile fetch fail, as a provider does
    /// for a revoked token.
    pub fn reject_tokens(&self) {
        self.state.lock().unwrap().reject_tokens = true;
    }

    pub fn sign_out_calls(&self) -> u32 {
        self.state.lock().unwrap().sign_out_calls
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Credential, AuthError> {
        let state = self.state.lock().unwrap();
        match state.accounts.get(email) {
            Some(account) if account.password == password => Ok(Credential {
                identity_id: account.identity_id.clone(),
                token: AuthToken(format!("token-{}", account.identity_id)),
                verified: account.verified,
            }),
            _ => Err(AuthError::Authentication(
                "Invalid email or password".to_string(),
            )),
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: SignUpMetadata,
    ) -> Result<Credential, AuthError> {
        let mut state = self.state.lock().unwrap();
        if state.accounts.contains_key(email) {
            return Err(AuthError::Conflict(format!("email {}", email)));
        }
        let identity_id = format!("id-{}", metadata.username);
        state.accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                identity_id: identity_id.clone(),
                verified: false,
            },
        );
        Ok(Credential {
            identity_id: identity_id.clone(),
            token: AuthToken(format!("token-{}", identity_id)),
            verified: false,
        })
    }

    async fn sign_out(&self, _token: &AuthToken) -> Result<(), AuthError> {
        let mut state = self.state.lock().unwrap();
        state.sign_out_calls += 1;
        if state.fail_sign_out {
            return Err(AuthError::Remote("sign-out endpoint unavailable".to_string()));
        }
        Ok(())
    }

    async fn get_profile(&self, identity_id: &str) -> Result<Profile, AuthError> {
        let state = self.state.lock().unwrap();
        if state.reject_tokens {
            return Err(AuthError::Authentication("token revoked".to_string()));
        }
        state
            .profiles
            .get(identity_id)
            .cloned()
            .ok_or_else(|| AuthError::Authentication("unknown identity".to_string()))
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, AuthError> {
        let mut state = self.state.lock().unwrap();
        let verified = state
            .accounts
            .get(&profile.email)
            .map(|account| account.verified)
            .unwrap_or(false);
        let record = Profile {
            id: profile.id.clone(),
            email: profile.email,
            name: profile.name,
            username: profile.username,
            avatar_url: None,
            bio: None,
            location: None,
            website: None,
            verified,
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        state.profiles.insert(profile.id, record.clone());
        Ok(record)
    }

    async fn update_profile(
        &self,
        identity_id: &str,
        update: ProfileUpdate,
    ) -> Result<Profile, AuthError> {
        let mut state = self.state.lock().unwrap();
        let profile = state
            .profiles
            .get_mut(identity_id)
            .ok_or(AuthError::NotAuthenticated)?;
        if let Some(name) = update.name {
            profile.name = name;
        }
        if let Some(avatar_url) = update.avatar_url {
            profile.avatar_url = Some(avatar_url);
        }
        if let Some(bio) = update.bio {
            profile.bio = Some(bio);
        }
        if let Some(location) = update.location {
            profile.location = Some(location);
        }
        if let Some(website) = update.website {
            profile.website = Some(website);
        }
        profile.updated_at = Utc::now();
        Ok(profile.clone())
    }

    async fn is_username_taken(&self, username: &str) -> Result<bool, AuthError> {
        let state = self.state.lock().unwrap();
        Ok(state.profiles.values().any(|p| p.username == username))
    }
}
