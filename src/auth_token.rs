//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! IAM database authentication tokens.
//!
//! A token is a presigned `connect` url for the database endpoint, used as
//! the password when connecting with a database user that has IAM
//! authentication enabled. Tokens are valid for 15 minutes.
//!
//! ```no_run
//! use rds_rust_sdk::{AuthTokenGenerator, Client};
//! # async fn run(client: &Client) -> Result<(), rds_rust_sdk::RdsError> {
//! let gen = AuthTokenGenerator::new(client);
//! let password = gen
//!     .generate("mydb.abc123.us-east-1.rds.amazonaws.com", 5432, "iam_user")
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::auth_common::credentials_provider::Credentials;
use crate::auth_common::signer;
use crate::client::Client;
use crate::error::{ia_err, RdsError};
use crate::region::{string_to_region, Region};

use chrono::{DateTime, Utc};
use reqwest::Method;
use std::result::Result;
use std::time::Duration;
use url::Url;

const AUTH_TOKEN_SERVICE: &str = "rds-db";
const AUTH_TOKEN_EXPIRY: Duration = Duration::from_secs(900);

/// Generates IAM database authentication tokens with the credentials of a
/// [`Client`].
#[derive(Debug, Clone)]
pub struct AuthTokenGenerator {
    client: Client,
    region: Region,
}

impl AuthTokenGenerator {
    /// Create a generator signing for the region of `client`.
    pub fn new(client: &Client) -> AuthTokenGenerator {
        AuthTokenGenerator {
            client: client.clone(),
            region: client.region().clone(),
        }
    }

    /// Sign tokens for a database in a region other than the client's.
    pub fn region(mut self, region: &str) -> Result<Self, RdsError> {
        self.region = string_to_region(region)?;
        Ok(self)
    }

    /// Generate a token for `db_user` on the database at `hostname:port`.
    ///
    /// The returned string has no scheme: `host:port/?Action=connect&DBUser=..&X-Amz-..`.
    pub async fn generate(
        &self,
        hostname: &str,
        port: u16,
        db_user: &str,
    ) -> Result<String, RdsError> {
        let creds = self.client.current_credentials().await?;
        generate_token(&creds, &self.region, hostname, port, db_user, Utc::now())
    }
}

fn generate_token(
    creds: &Credentials,
    region: &Region,
    hostname: &str,
    port: u16,
    db_user: &str,
    now: DateTime<Utc>,
) -> Result<String, RdsError> {
    if hostname.is_empty() || db_user.is_empty() {
        return ia_err!("hostname and database user must not be empty");
    }
    // a non-special scheme keeps the port in the signed host even when it is 443
    let mut url = Url::parse(&format!("rds-db://{}:{}/", hostname, port))?;
    url.query_pairs_mut()
        .append_pair("Action", "connect")
        .append_pair("DBUser", db_user);
    let signed = signer::presign_url(
        &Method::GET,
        &url,
        creds,
        region.id(),
        AUTH_TOKEN_SERVICE,
        AUTH_TOKEN_EXPIRY,
        now,
    )?;
    let query = signed.query().unwrap_or_default();
    Ok(format!("{}:{}/?{}", hostname, port, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn token_layout() {
        let creds = Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY");
        let region = string_to_region("us-west-2").unwrap();
        let now = Utc.with_ymd_and_hms(2016, 6, 1, 12, 0, 0).unwrap();
        let token = generate_token(&creds, &region, "prod.abc.us-west-2.rds.amazonaws.com", 3306, "mysqlUser", now)
            .unwrap();
        assert!(token.starts_with("prod.abc.us-west-2.rds.amazonaws.com:3306/?Action=connect&DBUser=mysqlUser&"));
        assert!(!token.contains("https://"));
        assert!(token.contains("X-Amz-Credential=AKIDEXAMPLE%2F20160601%2Fus-west-2%2Frds-db%2Faws4_request"));
        assert!(token.contains("X-Amz-Expires=900"));
        assert!(token.contains("X-Amz-Date=20160601T120000Z"));

        // same inputs, same signature
        let again = generate_token(&creds, &region, "prod.abc.us-west-2.rds.amazonaws.com", 3306, "mysqlUser", now)
            .unwrap();
        assert_eq!(token, again);
    }

    #[test]
    fn default_https_port_is_kept() {
        let creds = Credentials::new("AKID", "SECRET");
        let region = string_to_region("eu-west-1").unwrap();
        let token = generate_token(&creds, &region, "db.example.com", 443, "u", Utc::now()).unwrap();
        assert!(token.starts_with("db.example.com:443/?"));
    }

    #[test]
    fn empty_inputs_rejected() {
        let creds = Credentials::new("AKID", "SECRET");
        let region = string_to_region("eu-west-1").unwrap();
        assert!(generate_token(&creds, &region, "", 5432, "u", Utc::now()).is_err());
        assert!(generate_token(&creds, &region, "db.example.com", 5432, "", Utc::now()).is_err());
    }
}
