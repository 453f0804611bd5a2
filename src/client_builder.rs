//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Builder for creating an [`RDS Client`](crate::Client)
//!

use std::default::Default;
use std::env;
use std::result::Result;
use std::sync::Arc;
use std::time::Duration;

use crate::auth_common::credentials_provider::{Credentials, CredentialsProvider};
use crate::auth_common::environment_credentials_provider::EnvironmentCredentialsProvider;
use crate::auth_common::file_utils::file_to_string;
use crate::auth_common::instance_metadata_credentials_provider::InstanceMetadataCredentialsProvider;
use crate::auth_common::profile_credentials_provider::{
    region_from_config_file, ProfileCredentialsProvider, DEFAULT_CONFIG_FILE_PATH,
    DEFAULT_CREDENTIALS_FILE_PATH, DEFAULT_PROFILE,
};
use crate::auth_common::static_credentials_provider::StaticCredentialsProvider;
use crate::client::Client;
use crate::error::{ia_err, RdsError};
use crate::region::{string_to_region, Region};
use reqwest::Certificate;
use tracing::{debug, trace};
use url::Url;

// Instance credentials are refreshed this long before they expire.
const REFRESH_WINDOW_SECS: i64 = 300;

/// Builder used to set all the parameters to create an [`RDS Client`](crate::Client).
///
/// See [Configuring the SDK](index.html#configuring-the-sdk) for a description of
/// the ways credentials and regions can be supplied.
///
#[derive(Default, Debug, Clone)]
pub struct ClientBuilder {
    pub(crate) endpoint: String,
    pub(crate) timeout: Option<Duration>,
    pub(crate) max_retries: Option<u32>,
    pub(crate) region: Option<Region>,
    pub(crate) add_cert: Option<Certificate>,
    pub(crate) client: Option<reqwest::Client>,
    pub(crate) accept_invalid_certs: bool,
    pub(crate) user_agent_suffix: String,
    pub(crate) auth_type: AuthType,
    // auth uses a tokio Mutex because we occasionally hold a lock across awaits
    pub(crate) auth: Arc<tokio::sync::Mutex<AuthConfig>>,
    // instance metadata service base url, if not the link-local default
    pub(crate) metadata_endpoint: Option<String>,
    // For error messaging
    pub(crate) from_environment: bool,
}

#[derive(Default, Debug)]
pub(crate) struct AuthConfig {
    pub(crate) provider: AuthProvider,
}

#[derive(Default, Debug)]
pub(crate) enum AuthProvider {
    Static {
        provider: Box<dyn CredentialsProvider>,
    },
    Environment {
        provider: Box<dyn CredentialsProvider>,
    },
    Profile {
        provider: Box<dyn CredentialsProvider>,
    },
    Instance {
        provider: Box<dyn CredentialsProvider>,
    },
    External {
        provider: Box<dyn CredentialsProvider>,
    },
    #[default]
    None,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub(crate) enum AuthType {
    Static,
    Environment,
    Profile,
    Instance,
    External,
    #[default]
    None,
}

impl ClientBuilder {
    /// Create a new ClientBuilder struct.
    ///
    /// The default ClientBuilder does not set any credentials or region. Consider calling
    /// [`from_environment()`](ClientBuilder::from_environment()) to collect all parameters from
    /// the local environment by default.
    pub fn new() -> Self {
        ClientBuilder {
            ..Default::default()
        }
    }
    /// Build a new [`Client`].
    ///
    /// Note: Internally, if the [`ClientBuilder`] contains
    /// a reference to an existing [`reqwest::Client`], it will clone and
    /// use that. Otherwise, it will create a new [`reqwest::Client`] for its
    /// own internal use. See [`reqwest_client()`](ClientBuilder::reqwest_client()).
    pub async fn build(self) -> Result<Client, RdsError> {
        Client::new(&self).await
    }
    /// Gather configuration settings from the current environment.
    ///
    /// This method will scan the process [`standard environment`](std::env::Vars) to collect and
    /// set the configuration parameters. The values can be overridden in code if this method is
    /// called first and other methods are called afterwards, for example:
    ///```no_run
    /// # use rds_rust_sdk::Client;
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    ///   let builder = Client::builder()
    ///       .from_environment()?
    ///       .region("eu-west-1")?;
    /// # Ok(())
    /// # }
    ///```
    /// The following environment variables are used:
    ///
    /// | variable | description |
    /// | -------- | ----------- |
    /// | `AWS_REGION`, `AWS_DEFAULT_REGION` | The region identifier. See [`ClientBuilder::region()`]. |
    /// | `AWS_ENDPOINT_URL_RDS`, `AWS_ENDPOINT_URL` | The URL endpoint to use. See [`ClientBuilder::endpoint()`]. |
    /// | `AWS_CA_BUNDLE` | Path to a certificate file in `pem` format (see [`ClientBuilder::add_cert_from_pemfile()`]). |
    /// | `AWS_MAX_ATTEMPTS` | Total attempts per request, including the first one. |
    /// | `AWS_EC2_METADATA_SERVICE_ENDPOINT` | Base URL of the instance metadata service. |
    /// | `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_SESSION_TOKEN` | Credentials (see [`ClientBuilder::auth_from_environment()`]). |
    /// | `AWS_SHARED_CREDENTIALS_FILE`, `AWS_CONFIG_FILE`, `AWS_PROFILE` | Shared credentials file, config file and profile. |
    ///
    /// Credentials are resolved in order from the environment variables, the shared
    /// credentials file, and finally the instance metadata service (at build time).
    /// Unless a region is set, the `region` of the profile in the config file is used
    /// whichever source supplies the credentials.
    pub fn from_environment(self) -> Result<Self, RdsError> {
        self.from_lookup(|k| env::var(k).ok())
    }

    pub(crate) fn from_lookup<F>(mut self, lookup: F) -> Result<Self, RdsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.from_environment = true;
        let get = |k: &str| lookup(k).filter(|v| !v.is_empty());
        if let Some(val) = get("AWS_ENDPOINT_URL_RDS").or_else(|| get("AWS_ENDPOINT_URL")) {
            self = self.endpoint(&val)?;
        }
        if let Some(val) = get("AWS_REGION").or_else(|| get("AWS_DEFAULT_REGION")) {
            self = self.region(&val)?;
        }
        if let Some(val) = get("AWS_CA_BUNDLE") {
            self = self.add_cert_from_pemfile(&val)?;
        }
        if let Some(val) = get("AWS_EC2_METADATA_SERVICE_ENDPOINT") {
            self.metadata_endpoint = Some(val);
        }
        if let Some(val) = get("AWS_MAX_ATTEMPTS") {
            match val.parse::<u32>() {
                Ok(n) if n > 0 => self = self.max_retries(n - 1)?,
                _ => return ia_err!("invalid value '{}' for AWS_MAX_ATTEMPTS", val),
            }
        }

        let profile = get("AWS_PROFILE").unwrap_or_else(|| DEFAULT_PROFILE.to_string());
        let creds_file = get("AWS_SHARED_CREDENTIALS_FILE")
            .unwrap_or_else(|| DEFAULT_CREDENTIALS_FILE_PATH.to_string());
        let config_file =
            get("AWS_CONFIG_FILE").unwrap_or_else(|| DEFAULT_CONFIG_FILE_PATH.to_string());

        // default credential chain: environment, shared file, instance metadata
        if let Ok(p) = EnvironmentCredentialsProvider::from_lookup(&lookup) {
            self.set_provider(AuthType::Environment, Box::new(p));
        } else {
            match ProfileCredentialsProvider::new_from_files(
                &creds_file,
                Some(&config_file),
                &profile,
            ) {
                Ok(p) => {
                    self = self.use_profile_provider(p)?;
                }
                Err(e) => {
                    trace!("no usable shared credentials ({}), using instance metadata", e);
                    self.auth_type = AuthType::Instance;
                }
            }
        }

        // the profile region applies whichever source supplied the credentials
        if self.region.is_none() {
            let region = region_from_config_file(&config_file, &profile);
            if !region.is_empty() {
                debug!("using region {} from config file {}", region, config_file);
                self = self.region(&region)?;
            }
        }
        Ok(self)
    }
    /// Set a specific endpoint connection to use.
    ///
    /// This overrides the endpoint derived from the region, and can be used to
    /// reach a VPC endpoint, a FIPS endpoint, or a local test server. A url without
    /// a scheme is assumed to be `https`.
    ///
    /// Examples:
    /// ```text
    ///     https://rds.us-east-1.amazonaws.com
    ///     https://rds-fips.us-gov-west-1.amazonaws.com
    ///     http://localhost:4566
    /// ```
    pub fn endpoint(mut self, endpoint: &str) -> Result<Self, RdsError> {
        let ep = if endpoint.starts_with("https://") || endpoint.starts_with("http://") {
            endpoint.to_string()
        } else {
            format!("https://{}", endpoint)
        };
        if let Err(e) = Url::parse(&ep) {
            return ia_err!("invalid endpoint '{}': {}", endpoint, e);
        }
        self.endpoint = ep;
        Ok(self)
    }
    /// Specify a region identifier, such as `us-east-1`.
    ///
    /// The region is used to sign requests and, unless [`endpoint()`](ClientBuilder::endpoint())
    /// is given, to determine the service endpoint (`https://rds.<region>.amazonaws.com`).
    /// The identifier is validated against the regions known to this SDK.
    pub fn region(mut self, region: &str) -> Result<Self, RdsError> {
        self.region = Some(string_to_region(region)?);
        Ok(self)
    }
    /// Use a fixed access key id, secret access key and optional session token.
    pub fn credentials(
        mut self,
        access_key_id: &str,
        secret_access_key: &str,
        session_token: Option<&str>,
    ) -> Result<Self, RdsError> {
        if access_key_id.is_empty() || secret_access_key.is_empty() {
            return ia_err!("access key id and secret access key must not be empty");
        }
        let c = match session_token {
            Some(t) => Credentials::new_temporary(access_key_id, secret_access_key, t, None),
            None => Credentials::new(access_key_id, secret_access_key),
        };
        let region = self.region.as_ref().map(|r| r.id().to_string()).unwrap_or_default();
        self.set_provider(
            AuthType::Static,
            Box::new(StaticCredentialsProvider::new(c, &region)),
        );
        Ok(self)
    }
    /// Use credentials from the `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and
    /// `AWS_SESSION_TOKEN` environment variables.
    pub fn auth_from_environment(mut self) -> Result<Self, RdsError> {
        let p = EnvironmentCredentialsProvider::new()?;
        self.set_provider(AuthType::Environment, Box::new(p));
        Ok(self)
    }
    /// Specify a shared credentials file to use.
    ///
    /// This method allows the use of a file other than the default `~/.aws/credentials` file.
    /// This method assumes the use of the `default` profile.
    pub fn auth_from_profile(self, credentials_file: &str) -> Result<Self, RdsError> {
        self.auth_from_profile_with_name(credentials_file, DEFAULT_PROFILE)
    }
    /// Specify a shared credentials file and profile to use.
    ///
    /// If the profile has a `region` and no region has been set yet, it is used.
    pub fn auth_from_profile_with_name(
        self,
        credentials_file: &str,
        profile: &str,
    ) -> Result<Self, RdsError> {
        let p = ProfileCredentialsProvider::new_from_file(credentials_file, profile)?;
        self.use_profile_provider(p)
    }
    fn use_profile_provider(mut self, p: ProfileCredentialsProvider) -> Result<Self, RdsError> {
        if self.region.is_none() && !p.region_id().is_empty() {
            self = self.region(p.region_id())?;
        }
        self.set_provider(AuthType::Profile, Box::new(p));
        Ok(self)
    }
    /// Use the credentials of the IAM role attached to the compute instance.
    ///
    /// The credentials are fetched from the instance metadata service when the
    /// client is built, and refreshed automatically before they expire.
    pub fn auth_from_instance(mut self) -> Result<Self, RdsError> {
        self.auth_type = AuthType::Instance;
        Ok(self)
    }
    /// Use a custom [`CredentialsProvider`].
    pub fn auth_provider(
        mut self,
        provider: Box<dyn CredentialsProvider>,
    ) -> Result<Self, RdsError> {
        if self.region.is_none() && !provider.region_id().is_empty() {
            self = self.region(provider.region_id())?;
        }
        self.set_provider(AuthType::External, provider);
        Ok(self)
    }
    fn set_provider(&mut self, auth_type: AuthType, provider: Box<dyn CredentialsProvider>) {
        let ap = match auth_type {
            AuthType::Static => AuthProvider::Static { provider },
            AuthType::Environment => AuthProvider::Environment { provider },
            AuthType::Profile => AuthProvider::Profile { provider },
            AuthType::Instance => AuthProvider::Instance { provider },
            _ => AuthProvider::External { provider },
        };
        self.auth = Arc::new(tokio::sync::Mutex::new(AuthConfig { provider: ap }));
        self.auth_type = auth_type;
    }
    /// Add a certificate to use for https connections from a file.
    ///
    /// The file must contain an x509 certificate in `PEM` file format.
    pub fn add_cert_from_pemfile(self, pemfile: &str) -> Result<Self, RdsError> {
        let buf = file_to_string(pemfile)?.into_bytes();
        match reqwest::Certificate::from_pem(&buf) {
            Ok(cert) => self.add_cert(cert),
            Err(e) => ia_err!("error getting certificate from pemfile {}: {}", pemfile, e),
        }
    }

    /// Add a certificate to use for https connections.
    pub fn add_cert(mut self, cert: Certificate) -> Result<Self, RdsError> {
        self.add_cert = Some(cert);
        Ok(self)
    }
    // see https://docs.rs/reqwest/latest/reqwest/struct.ClientBuilder.html#method.danger_accept_invalid_certs
    /// Allow https connection without validating certificates.
    ///
    /// **Warning:** This is only recommended for local testing purposes. Its use is insecure. See [`reqwest::ClientBuilder::danger_accept_invalid_certs()`] for details.
    ///
    pub fn danger_accept_invalid_certs(
        mut self,
        accept_invalid_certs: bool,
    ) -> Result<Self, RdsError> {
        self.accept_invalid_certs = accept_invalid_certs;
        Ok(self)
    }
    /// Specify a [`reqwest::Client`] to use for all http/s connections.
    ///
    /// By default, the [`RDS Client`](crate::Client) creates an internal [`reqwest::Client`] to use for
    /// all communications. If your application already has a reqwest Client, you can pass that
    /// into the ClientBuilder to avoid creating multiple connection pools.
    pub fn reqwest_client(mut self, client: &reqwest::Client) -> Result<Self, RdsError> {
        self.client = Some(client.clone());
        Ok(self)
    }
    /// Specify the timeout used for operations.
    ///
    /// This is used for both connection and request timeouts.
    ///
    /// The default timeout is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Result<Self, RdsError> {
        if timeout.is_zero() {
            return ia_err!("timeout must be greater than zero");
        }
        self.timeout = Some(timeout);
        Ok(self)
    }
    /// Specify the maximum number of retries of a failed request.
    ///
    /// Transport errors, throttling and server errors are retried with exponential
    /// backoff and jitter. The default is 3 retries; 0 disables retries.
    pub fn max_retries(mut self, retries: u32) -> Result<Self, RdsError> {
        self.max_retries = Some(retries);
        Ok(self)
    }
    /// Append a string to the http User-Agent sent with every request.
    pub fn user_agent_suffix(mut self, suffix: &str) -> Result<Self, RdsError> {
        self.user_agent_suffix = suffix.to_string();
        Ok(self)
    }

    // Return the current credentials, refreshing instance credentials that are
    // about to expire.
    pub(crate) async fn current_credentials(
        &self,
        client: &reqwest::Client,
    ) -> Result<Credentials, RdsError> {
        // It is safe to keep this mutex lock across await because we're using tokio::sync::Mutex
        let mut pguard = self.auth.lock().await;
        match &pguard.provider {
            AuthProvider::Instance { provider } => {
                let c = provider.credentials()?;
                if !c.expires_within(chrono::Duration::seconds(REFRESH_WINDOW_SECS)) {
                    return Ok(c);
                }
                debug!("instance credentials expire at {:?}, refreshing", c.expiration());
                let ifp = self.instance_provider(client).await?;
                let c = ifp.credentials()?;
                pguard.provider = AuthProvider::Instance {
                    provider: Box::new(ifp),
                };
                Ok(c)
            }
            AuthProvider::Static { provider }
            | AuthProvider::Environment { provider }
            | AuthProvider::Profile { provider }
            | AuthProvider::External { provider } => provider.credentials(),
            AuthProvider::None => ia_err!("no credentials configured"),
        }
    }

    pub(crate) async fn instance_provider(
        &self,
        client: &reqwest::Client,
    ) -> Result<InstanceMetadataCredentialsProvider, RdsError> {
        match &self.metadata_endpoint {
            Some(base) => {
                InstanceMetadataCredentialsProvider::new_with_endpoint(client, base).await
            }
            None => InstanceMetadataCredentialsProvider::new_with_client(client).await,
        }
    }

    // Return true if the auth has been updated/refreshed.
    // Return false if there are no errors, but nothing was refreshed.
    pub(crate) async fn refresh_auth(&self, client: &reqwest::Client) -> Result<bool, RdsError> {
        let mut pguard = self.auth.lock().await;
        if let AuthProvider::Instance { provider: _ } = &pguard.provider {
            // instance credentials cannot refresh themselves, so fetch a new set
            let ifp = self.instance_provider(client).await?;
            pguard.provider = AuthProvider::Instance {
                provider: Box::new(ifp),
            };
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
        let m: HashMap<&'static str, String> = vars.into_iter().collect();
        move |k| m.get(k).cloned()
    }

    #[test]
    fn environment_sets_region_endpoint_and_credentials() {
        let b = ClientBuilder::new()
            .from_lookup(lookup(vec![
                ("AWS_REGION", "eu-central-1".to_string()),
                ("AWS_ENDPOINT_URL_RDS", "http://localhost:4566".to_string()),
                ("AWS_ACCESS_KEY_ID", "AKID".to_string()),
                ("AWS_SECRET_ACCESS_KEY", "SECRET".to_string()),
                ("AWS_MAX_ATTEMPTS", "5".to_string()),
            ]))
            .unwrap();
        assert_eq!(b.region.as_ref().unwrap().id(), "eu-central-1");
        assert_eq!(b.endpoint, "http://localhost:4566");
        assert_eq!(b.auth_type, AuthType::Environment);
        assert_eq!(b.max_retries, Some(4));
        assert!(b.from_environment);
    }

    #[test]
    fn environment_falls_back_to_profile_then_instance() {
        let dir = tempfile::tempdir().expect("Error creating temp dir");
        let path = dir.path().join("credentials");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"[ci]\naws_access_key_id = AKID\naws_secret_access_key = S\nregion = sa-east-1\n")
            .unwrap();
        let b = ClientBuilder::new()
            .from_lookup(lookup(vec![
                ("AWS_SHARED_CREDENTIALS_FILE", path.to_str().unwrap().to_string()),
                ("AWS_CONFIG_FILE", "/nonexistent/config".to_string()),
                ("AWS_PROFILE", "ci".to_string()),
            ]))
            .unwrap();
        assert_eq!(b.auth_type, AuthType::Profile);
        assert_eq!(b.region.as_ref().unwrap().id(), "sa-east-1");

        let b = ClientBuilder::new()
            .from_lookup(lookup(vec![
                ("AWS_SHARED_CREDENTIALS_FILE", "/nonexistent/credentials".to_string()),
                ("AWS_CONFIG_FILE", "/nonexistent/config".to_string()),
            ]))
            .unwrap();
        assert_eq!(b.auth_type, AuthType::Instance);
    }

    #[test]
    fn config_file_region_with_any_credentials_source() {
        let dir = tempfile::tempdir().expect("Error creating temp dir");
        let config = dir.path().join("config");
        std::fs::write(
            &config,
            "[default]\nregion = eu-west-1\n\n[profile dev]\nregion = ap-northeast-1\n",
        )
        .unwrap();
        let config = config.to_str().unwrap().to_string();

        // environment credentials
        let b = ClientBuilder::new()
            .from_lookup(lookup(vec![
                ("AWS_ACCESS_KEY_ID", "AKID".to_string()),
                ("AWS_SECRET_ACCESS_KEY", "SECRET".to_string()),
                ("AWS_CONFIG_FILE", config.clone()),
            ]))
            .unwrap();
        assert_eq!(b.auth_type, AuthType::Environment);
        assert_eq!(b.region.as_ref().unwrap().id(), "eu-west-1");

        // no credentials file: instance credentials, named profile
        let b = ClientBuilder::new()
            .from_lookup(lookup(vec![
                ("AWS_SHARED_CREDENTIALS_FILE", "/nonexistent/credentials".to_string()),
                ("AWS_CONFIG_FILE", config.clone()),
                ("AWS_PROFILE", "dev".to_string()),
                ("AWS_EC2_METADATA_SERVICE_ENDPOINT", "http://127.0.0.1:1338".to_string()),
            ]))
            .unwrap();
        assert_eq!(b.auth_type, AuthType::Instance);
        assert_eq!(b.region.as_ref().unwrap().id(), "ap-northeast-1");
        assert_eq!(b.metadata_endpoint.as_deref(), Some("http://127.0.0.1:1338"));

        // AWS_REGION takes precedence
        let b = ClientBuilder::new()
            .from_lookup(lookup(vec![
                ("AWS_REGION", "us-east-2".to_string()),
                ("AWS_ACCESS_KEY_ID", "AKID".to_string()),
                ("AWS_SECRET_ACCESS_KEY", "SECRET".to_string()),
                ("AWS_CONFIG_FILE", config),
            ]))
            .unwrap();
        assert_eq!(b.region.as_ref().unwrap().id(), "us-east-2");
    }

    #[test]
    fn explicit_region_wins_over_profile() {
        let dir = tempfile::tempdir().expect("Error creating temp dir");
        let path = dir.path().join("credentials");
        std::fs::write(
            &path,
            "[default]\naws_access_key_id = AKID\naws_secret_access_key = S\nregion = sa-east-1\n",
        )
        .unwrap();
        let b = ClientBuilder::new()
            .region("us-west-1")
            .unwrap()
            .auth_from_profile(path.to_str().unwrap())
            .unwrap();
        assert_eq!(b.region.as_ref().unwrap().id(), "us-west-1");
        assert_eq!(b.auth_type, AuthType::Profile);
    }

    #[test]
    fn invalid_settings() {
        assert!(ClientBuilder::new().region("nowhere-1").is_err());
        assert!(ClientBuilder::new().credentials("", "x", None).is_err());
        assert!(ClientBuilder::new().timeout(Duration::ZERO).is_err());
        assert!(ClientBuilder::new().endpoint("http://[bad").is_err());
        assert!(ClientBuilder::new()
            .from_lookup(lookup(vec![("AWS_MAX_ATTEMPTS", "zero".to_string())]))
            .is_err());
    }

    #[test]
    fn endpoint_defaults_to_https() {
        let b = ClientBuilder::new().endpoint("rds.us-east-1.amazonaws.com").unwrap();
        assert_eq!(b.endpoint, "https://rds.us-east-1.amazonaws.com");
    }

    #[tokio::test]
    async fn static_credentials() {
        let b = ClientBuilder::new()
            .credentials("AKID", "SECRET", Some("TOKEN"))
            .unwrap();
        let c = b.current_credentials(&reqwest::Client::new()).await.unwrap();
        assert_eq!(c.access_key_id(), "AKID");
        assert_eq!(c.session_token(), Some("TOKEN"));
        assert!(!b.refresh_auth(&reqwest::Client::new()).await.unwrap());
    }
}
