//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::env;

use crate::auth_common::credentials_provider::{Credentials, CredentialsProvider};
use crate::error::{RdsError, RdsErrorCode};

const ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
const SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
const SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Credentials read from the `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and
/// (optional) `AWS_SESSION_TOKEN` environment variables.
///
/// The variables are read once, when the provider is created.
#[derive(Debug, Clone)]
pub struct EnvironmentCredentialsProvider {
    credentials: Credentials,
}

impl EnvironmentCredentialsProvider {
    pub fn new() -> Result<Self, RdsError> {
        Self::from_lookup(|k| env::var(k).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, RdsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).filter(|v| !v.is_empty());
        let (key, secret) = match (get(ACCESS_KEY_ID), get(SECRET_ACCESS_KEY)) {
            (Some(k), Some(s)) => (k, s),
            _ => {
                return Err(RdsError::new(
                    RdsErrorCode::CredentialsError,
                    &format!(
                        "{} and {} must both be set in the environment",
                        ACCESS_KEY_ID, SECRET_ACCESS_KEY
                    ),
                ))
            }
        };
        let credentials = match get(SESSION_TOKEN) {
            Some(tok) => Credentials::new_temporary(&key, &secret, &tok, None),
            None => Credentials::new(&key, &secret),
        };
        tracing::debug!("using credentials from environment, access key {}", key);
        Ok(EnvironmentCredentialsProvider { credentials })
    }
}

impl CredentialsProvider for EnvironmentCredentialsProvider {
    fn credentials(&self) -> Result<Credentials, RdsError> {
        Ok(self.credentials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let m: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| m.get(k).cloned()
    }

    #[test]
    fn reads_keys_and_token() {
        let p = EnvironmentCredentialsProvider::from_lookup(lookup(&[
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_ACCESS_KEY", "SECRET"),
            ("AWS_SESSION_TOKEN", "TOKEN"),
        ]))
        .unwrap();
        let c = p.credentials().unwrap();
        assert_eq!(c.access_key_id(), "AKID");
        assert_eq!(c.secret_access_key(), "SECRET");
        assert_eq!(c.session_token(), Some("TOKEN"));
    }

    #[test]
    fn missing_secret_is_an_error() {
        let e = EnvironmentCredentialsProvider::from_lookup(lookup(&[("AWS_ACCESS_KEY_ID", "AKID")]))
            .unwrap_err();
        assert_eq!(e.code, RdsErrorCode::CredentialsError);
        let e = EnvironmentCredentialsProvider::from_lookup(lookup(&[
            ("AWS_ACCESS_KEY_ID", ""),
            ("AWS_SECRET_ACCESS_KEY", "SECRET"),
        ]));
        assert!(e.is_err());
    }
}
