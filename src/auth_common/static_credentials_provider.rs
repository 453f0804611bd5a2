//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::auth_common::credentials_provider::{Credentials, CredentialsProvider};
use crate::error::RdsError;

/// A credentials provider that holds a fixed set of credentials and an optional region.
/// This is an ideal provider to be used if credentials are not read from a file or the environment.
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: Credentials,
    region_id: String,
}

impl StaticCredentialsProvider {
    /// Creates a new StaticCredentialsProvider using the values passed in the arguments.
    ///
    /// # Arguments
    ///
    /// * `credentials`: The credentials returned by this provider
    /// * `region_id`: The region-id to associate with this provider (may be empty)
    ///
    pub fn new(credentials: Credentials, region_id: &str) -> Self {
        StaticCredentialsProvider {
            credentials,
            region_id: region_id.to_string(),
        }
    }
}

impl CredentialsProvider for StaticCredentialsProvider {
    fn credentials(&self) -> Result<Credentials, RdsError> {
        Ok(self.credentials.clone())
    }
    fn region_id(&self) -> &str {
        &self.region_id
    }
}
