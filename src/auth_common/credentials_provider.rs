//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use chrono::{DateTime, Duration, Utc};
use std::fmt::Debug;

use crate::error::RdsError;

/// A set of credentials used to sign requests.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
    expiration: Option<DateTime<Utc>>,
}

impl Credentials {
    /// Long-term credentials (an access key id and secret).
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Credentials {
        Credentials {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            session_token: None,
            expiration: None,
        }
    }

    /// Temporary credentials that include a session token.
    pub fn new_temporary(
        access_key_id: &str,
        secret_access_key: &str,
        session_token: &str,
        expiration: Option<DateTime<Utc>>,
    ) -> Credentials {
        Credentials {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            session_token: if session_token.is_empty() {
                None
            } else {
                Some(session_token.to_string())
            },
            expiration,
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        self.expiration
    }

    /// True if the credentials expire within `window` from now.
    pub fn expires_within(&self, window: Duration) -> bool {
        match self.expiration {
            Some(exp) => exp - window <= Utc::now(),
            None => false,
        }
    }
}

// Keep the secret and token out of logs.
impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// Trait defining a source of [`Credentials`].
pub trait CredentialsProvider: Send + Sync + Debug + CredentialsProviderClone {
    /// Returns the current credentials of this provider.
    fn credentials(&self) -> Result<Credentials, RdsError>;
    /// Returns the region-id associated with this provider, or an empty string.
    fn region_id(&self) -> &str {
        ""
    }
}

// This allows users of this library to clone a Box<dyn CredentialsProvider>
pub trait CredentialsProviderClone {
    fn clone_box(&self) -> Box<dyn CredentialsProvider>;
}

impl<T> CredentialsProviderClone for T
where
    T: 'static + CredentialsProvider + Clone,
{
    fn clone_box(&self) -> Box<dyn CredentialsProvider> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn CredentialsProvider> {
    fn clone(&self) -> Box<dyn CredentialsProvider> {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_window() {
        let c = Credentials::new("AKID", "secret");
        assert!(!c.expires_within(Duration::minutes(5)));
        let c = Credentials::new_temporary("AKID", "secret", "tok", Some(Utc::now() + Duration::minutes(3)));
        assert!(c.expires_within(Duration::minutes(5)));
        assert!(!c.expires_within(Duration::minutes(1)));
        assert_eq!(c.session_token(), Some("tok"));
        assert!(Credentials::new_temporary("a", "b", "", None).session_token().is_none());
    }

    #[test]
    fn debug_redacts_secrets() {
        let c = Credentials::new_temporary("AKID", "very-secret", "token-value", None);
        let s = format!("{:?}", c);
        assert!(s.contains("AKID"));
        assert!(!s.contains("very-secret"));
        assert!(!s.contains("token-value"));
    }
}
