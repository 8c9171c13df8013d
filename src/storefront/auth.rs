//! Sign-in and sign-up.
//!
//! There is no account backend. [`MockAuthenticator`] stands in for one and
//! accepts a single fixed account; nothing is stored or hashed. Code that
//! needs authentication should depend on the [`Authenticator`] trait.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

pub const DEMO_EMAIL: &str = "admin@test.com";
pub const DEMO_PASSWORD: &str = "123456";
pub const MIN_PASSWORD_LEN: usize = 6;

/// Result of an auth attempt. A rejection is an outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

impl AuthOutcome {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, identifier: &str, password: &str) -> AuthOutcome;

    async fn register(&self, identifier: &str, password: &str) -> AuthOutcome;
}

#[derive(Debug, Clone, Default)]
pub struct MockAuthenticator {
    latency: Duration,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn login(&self, identifier: &str, password: &str) -> AuthOutcome {
        self.round_trip().await;
        if identifier == DEMO_EMAIL && password == DEMO_PASSWORD {
            AuthOutcome::accepted("Login successful!")
        } else {
            AuthOutcome::rejected("Invalid email or password")
        }
    }

    async fn register(&self, identifier: &str, password: &str) -> AuthOutcome {
        self.round_trip().await;
        if !identifier.is_empty() && password.chars().count() >= MIN_PASSWORD_LEN {
            AuthOutcome::accepted("Register successful!")
        } else {
            AuthOutcome::rejected("Password must be at least 6 characters")
        }
    }
}
