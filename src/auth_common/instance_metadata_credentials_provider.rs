//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde_derive::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, trace};

use crate::auth_common::credentials_provider::{Credentials, CredentialsProvider};
use crate::error::{RdsError, RdsErrorCode};

static METADATA_URL_BASE: &str = "http://169.254.169.254";
static TOKEN_PATH: &str = "/latest/api/token";
static ROLE_PATH: &str = "/latest/meta-data/iam/security-credentials/";
static REGION_PATH: &str = "/latest/meta-data/placement/region";
static TOKEN_TTL_HEADER: &str = "x-aws-ec2-metadata-token-ttl-seconds";
static TOKEN_HEADER: &str = "x-aws-ec2-metadata-token";

/// Credentials of the IAM role attached to the compute instance, read from the
/// instance metadata service (IMDSv2).
///
/// The credentials are temporary; the client refreshes them by creating a new
/// provider when they are about to expire or when the service reports them as expired.
#[derive(Debug, Clone)]
pub struct InstanceMetadataCredentialsProvider {
    credentials: Credentials,
    region: String,
}

#[derive(Debug, Deserialize)]
struct MetadataCredentials {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "AccessKeyId")]
    access_key_id: String,
    #[serde(rename = "SecretAccessKey")]
    secret_access_key: String,
    #[serde(rename = "Token")]
    token: String,
    #[serde(rename = "Expiration")]
    expiration: Option<DateTime<Utc>>,
}

impl CredentialsProvider for InstanceMetadataCredentialsProvider {
    fn credentials(&self) -> Result<Credentials, RdsError> {
        Ok(self.credentials.clone())
    }
    fn region_id(&self) -> &str {
        &self.region
    }
}

impl InstanceMetadataCredentialsProvider {
    pub async fn new() -> Result<InstanceMetadataCredentialsProvider, RdsError> {
        InstanceMetadataCredentialsProvider::new_with_client(&reqwest::Client::builder().build()?)
            .await
    }

    /// Fetch credentials using the given client. The metadata endpoint can be
    /// overridden with `AWS_EC2_METADATA_SERVICE_ENDPOINT`.
    pub async fn new_with_client(
        client: &reqwest::Client,
    ) -> Result<InstanceMetadataCredentialsProvider, RdsError> {
        let base = std::env::var("AWS_EC2_METADATA_SERVICE_ENDPOINT")
            .unwrap_or_else(|_| METADATA_URL_BASE.to_string());
        Self::new_with_endpoint(client, &base).await
    }

    #[instrument(skip(client))]
    pub(crate) async fn new_with_endpoint(
        client: &reqwest::Client,
        base: &str,
    ) -> Result<InstanceMetadataCredentialsProvider, RdsError> {
        let base = base.trim_end_matches('/');

        let token_url = format!("{}{}", base, TOKEN_PATH);
        debug!("Getting metadata session token from {}", token_url);
        let token = client
            .put(&token_url)
            .header(TOKEN_TTL_HEADER, "21600")
            .timeout(Duration::new(5, 0))
            .send()
            .await?;
        if !token.status().is_success() {
            return Err(metadata_error(format!(
                "metadata token request returned status {}",
                token.status()
            )));
        }
        let token = token.text().await?;

        let mut auth_headers = HeaderMap::new();
        auth_headers.insert(TOKEN_HEADER, token.trim().parse()?);

        let role_url = format!("{}{}", base, ROLE_PATH);
        let roles = get_instance_metadata(client, &role_url, &auth_headers).await?;
        let role = match roles.lines().map(str::trim).find(|l| !l.is_empty()) {
            Some(r) => r.to_string(),
            None => return Err(metadata_error("no IAM role attached to instance".to_string())),
        };
        trace!("Instance role: {}", role);

        let creds_url = format!("{}{}{}", base, ROLE_PATH, role);
        let body = get_instance_metadata(client, &creds_url, &auth_headers).await?;
        let mc: MetadataCredentials = serde_json::from_str(&body)?;
        if mc.code != "Success" {
            return Err(metadata_error(format!(
                "instance metadata returned code '{}' for role {}",
                mc.code, role
            )));
        }

        let region_url = format!("{}{}", base, REGION_PATH);
        let region = get_instance_metadata(client, &region_url, &auth_headers)
            .await
            .map(|r| r.trim().to_lowercase())
            .unwrap_or_default();

        debug!(
            "Got instance credentials for role {}, expiring {:?}",
            role, mc.expiration
        );
        Ok(InstanceMetadataCredentialsProvider {
            credentials: Credentials::new_temporary(
                &mc.access_key_id,
                &mc.secret_access_key,
                &mc.token,
                mc.expiration,
            ),
            region,
        })
    }
}

fn metadata_error(msg: String) -> RdsError {
    RdsError::new(RdsErrorCode::CredentialsError, &msg)
}

async fn get_instance_metadata(
    client: &reqwest::Client,
    url: &str,
    auth_headers: &HeaderMap,
) -> Result<String, RdsError> {
    let response = client
        .get(url)
        .headers(auth_headers.clone())
        .timeout(Duration::new(5, 0))
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(metadata_error(format!(
            "instance metadata request to {} returned status {}",
            url,
            response.status()
        )));
    }
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap as AxumHeaders, StatusCode};
    use axum::routing::{get, put};
    use axum::Router;

    const CREDS_JSON: &str = r#"{
  "Code" : "Success",
  "LastUpdated" : "2024-05-01T10:00:00Z",
  "Type" : "AWS-HMAC",
  "AccessKeyId" : "ASIAEXAMPLE",
  "SecretAccessKey" : "secretexample",
  "Token" : "tokenexample",
  "Expiration" : "2024-05-01T16:00:00Z"
}"#;

    fn has_token(h: &AxumHeaders) -> bool {
        h.get(TOKEN_HEADER).and_then(|v| v.to_str().ok()) == Some("session-token")
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{}/", addr)
    }

    fn metadata_app(role_status: StatusCode) -> Router {
        Router::new()
            .route(
                TOKEN_PATH,
                put(|h: AxumHeaders| async move {
                    if h.get(TOKEN_TTL_HEADER).is_some() {
                        (StatusCode::OK, "session-token")
                    } else {
                        (StatusCode::BAD_REQUEST, "")
                    }
                }),
            )
            .route(
                ROLE_PATH,
                get(move |h: AxumHeaders| async move {
                    if !has_token(&h) {
                        return (StatusCode::UNAUTHORIZED, "");
                    }
                    (role_status, "rds-app-role\n")
                }),
            )
            .route(
                "/latest/meta-data/iam/security-credentials/rds-app-role",
                get(|h: AxumHeaders| async move {
                    if has_token(&h) {
                        (StatusCode::OK, CREDS_JSON)
                    } else {
                        (StatusCode::UNAUTHORIZED, "")
                    }
                }),
            )
            .route(REGION_PATH, get(|| async { "EU-WEST-1" }))
    }

    #[tokio::test]
    async fn role_credentials_from_metadata() {
        let base = serve(metadata_app(StatusCode::OK)).await;
        let p = InstanceMetadataCredentialsProvider::new_with_endpoint(&reqwest::Client::new(), &base)
            .await
            .unwrap();
        let c = p.credentials().unwrap();
        assert_eq!(c.access_key_id(), "ASIAEXAMPLE");
        assert_eq!(c.secret_access_key(), "secretexample");
        assert_eq!(c.session_token(), Some("tokenexample"));
        assert_eq!(c.expiration().unwrap().to_rfc3339(), "2024-05-01T16:00:00+00:00");
        assert_eq!(p.region_id(), "eu-west-1");
    }

    #[tokio::test]
    async fn missing_role_is_credentials_error() {
        let base = serve(metadata_app(StatusCode::NOT_FOUND)).await;
        let e = InstanceMetadataCredentialsProvider::new_with_endpoint(&reqwest::Client::new(), &base)
            .await
            .unwrap_err();
        assert_eq!(e.code, RdsErrorCode::CredentialsError);
        assert!(e.message.contains("404"));
    }
}
