//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::auth_common::credentials_provider::{Credentials, CredentialsProvider};
use crate::auth_common::signer;
use crate::client_builder::{AuthConfig, AuthProvider, AuthType, ClientBuilder};
use crate::error::{ia_err, user_agent, RdsError};
use crate::error_registry::ErrorRegistry;
use crate::operations::{Paginated, RdsOperation};
use crate::query::{QueryWriter, ToQuery};
use crate::region::{region_from_endpoint, string_to_region, Region};
use crate::xml::{parse_response, ResponseMetadata};

use chrono::Utc;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use std::result::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};
use url::Url;

/// The Query API version implemented by this crate.
pub const API_VERSION: &str = "2014-10-31";
pub(crate) const SERVICE_NAME: &str = "rds";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";
const PRESIGNED_URL_EXPIRY: Duration = Duration::from_secs(3600);

/// **The RDS client**.
///
/// This should be created once and used
/// throughout the application lifetime, across all threads.
///
/// Note: there is no need to enclose this struct in an `Rc` or [`Arc`], as it uses an
/// [`Arc`] internally, so calling `.clone()` on this struct will always return the
/// same underlying client (connection pool, credentials, error registry and
/// cached response metadata).
#[derive(Clone, Debug)]
pub struct Client {
    // Use an inner Arc so cloning keeps the same contents
    pub(crate) inner: Arc<ClientRef>,
}

#[derive(Debug)]
pub(crate) struct ClientRef {
    pub(crate) client: reqwest::Client,
    pub(crate) endpoint: Url,
    pub(crate) region: Region,
    pub(crate) builder: ClientBuilder,
    pub(crate) registry: ErrorRegistry,
    retry: RetryPolicy,
    user_agent: String,
    // metadata doesn't require a tokio Mutex because it's never held across awaits
    metadata: std::sync::Mutex<Option<ResponseMetadata>>,
    request_count: AtomicUsize,
    timeout: Duration,
}

/// Exponential backoff with full jitter.
#[derive(Debug, Clone)]
pub(crate) struct RetryPolicy {
    pub(crate) max_retries: u32,
    base: Duration,
    cap: Duration,
}

impl RetryPolicy {
    pub(crate) fn new(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            base: Duration::from_millis(100),
            cap: Duration::from_secs(20),
        }
    }

    // Upper bound of the delay before retry number `attempt` (0-based).
    pub(crate) fn max_delay(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt.min(31)).unwrap_or(u32::MAX);
        self.base.saturating_mul(factor).min(self.cap)
    }

    pub(crate) fn backoff(&self, attempt: u32) -> Duration {
        let max = self.max_delay(attempt).as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(0..=max))
    }
}

impl Client {
    /// Create a new [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    // Create the new Client based on builder configuration
    pub(crate) async fn new(b: &ClientBuilder) -> Result<Client, RdsError> {
        if b.auth_type == AuthType::None {
            if b.from_environment {
                return ia_err!("cannot build client: no credentials found in the environment, the shared credentials file or instance metadata");
            }
            return ia_err!("cannot build client: no credentials specified");
        }

        let mut builder = b.clone();
        // default timeout to 30 seconds
        let timeout = builder.timeout.unwrap_or(Duration::new(30, 0));
        let c = {
            if let Some(c) = &builder.client {
                c.clone()
            } else {
                let mut cb = reqwest::Client::builder()
                    .timeout(timeout)
                    .connect_timeout(timeout);
                if let Some(cert) = &builder.add_cert {
                    cb = cb.add_root_certificate(cert.clone());
                }
                if builder.accept_invalid_certs {
                    cb = cb.danger_accept_invalid_certs(true);
                }
                cb.build()?
            }
        };
        // create instance credentials if not already created
        if builder.auth_type == AuthType::Instance {
            let needs_provider = matches!(builder.auth.lock().await.provider, AuthProvider::None);
            if needs_provider {
                let ifp = builder.instance_provider(&c).await?;
                if builder.region.is_none() && !ifp.region_id().is_empty() {
                    builder = builder.region(ifp.region_id())?;
                }
                let ap = AuthProvider::Instance {
                    provider: Box::new(ifp),
                };
                builder.auth = Arc::new(tokio::sync::Mutex::new(AuthConfig { provider: ap }));
            }
        }

        let endpoint = if builder.endpoint.is_empty() {
            match &builder.region {
                Some(r) => Url::parse(&r.rds_endpoint())?,
                None => {
                    if builder.from_environment {
                        return ia_err!("can't determine RDS endpoint: set AWS_REGION or AWS_ENDPOINT_URL_RDS");
                    }
                    return ia_err!("can't determine RDS endpoint: call ClientBuilder::endpoint() or ClientBuilder::region()");
                }
            }
        } else {
            Url::parse(&builder.endpoint)?
        };
        // the signing region of a custom endpoint is taken from its host name if
        // it was not given explicitly
        let region = match &builder.region {
            Some(r) => r.clone(),
            None => match region_from_endpoint(&endpoint) {
                Some(r) => r,
                None => {
                    return ia_err!(
                        "can't determine signing region for endpoint {}: call ClientBuilder::region()",
                        endpoint
                    )
                }
            },
        };

        let mut ua = user_agent().to_string();
        if !builder.user_agent_suffix.is_empty() {
            ua.push(' ');
            ua.push_str(&builder.user_agent_suffix);
        }
        let retry = RetryPolicy::new(builder.max_retries.unwrap_or(3));
        debug!(
            "Creating new Client: endpoint={}, region={}, auth={:?}, max_retries={}",
            endpoint, region, builder.auth_type, retry.max_retries
        );
        Ok(Client {
            inner: Arc::new(ClientRef {
                client: c,
                endpoint,
                region,
                builder,
                registry: ErrorRegistry::new(),
                retry,
                user_agent: ua,
                metadata: std::sync::Mutex::new(None),
                request_count: AtomicUsize::new(0),
                timeout,
            }),
        })
    }

    /// The region requests are signed for.
    pub fn region(&self) -> &Region {
        &self.inner.region
    }

    /// The service endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// The registry used to map service error codes to [`RdsErrorCode`](crate::RdsErrorCode)s.
    pub fn error_registry(&self) -> &ErrorRegistry {
        &self.inner.registry
    }

    /// Return the response metadata of the most recent successful request made
    /// through this client (or any of its clones).
    ///
    /// The metadata is mainly useful for diagnostics: the request id identifies
    /// the request when contacting support. Returns `None` before the first
    /// successful request.
    pub fn get_cached_response_metadata(&self) -> Option<ResponseMetadata> {
        match self.inner.metadata.lock() {
            Ok(g) => g.clone(),
            Err(_) => None,
        }
    }

    /// Execute a single operation and return its unmarshalled result.
    ///
    /// This is the path used by every facade method and by the `execute()`
    /// method of every request.
    pub async fn send<R: RdsOperation>(&self, request: &R) -> Result<R::Output, RdsError> {
        let mut w = QueryWriter::new(R::ACTION, API_VERSION);
        request.to_query(&mut w, "");
        if let Some(src) = request.source_region() {
            self.add_pre_signed_url(&mut w, src).await?;
        }
        let body = w.to_body();
        let text = self.invoke(R::ACTION, &body).await?;
        let (output, metadata) = parse_response::<R::Output>(&text, R::ACTION)?;
        trace!("{} completed, request id {}", R::ACTION, metadata.request_id);
        if let Ok(mut g) = self.inner.metadata.lock() {
            *g = Some(metadata);
        }
        Ok(output)
    }

    /// Execute a `Describe*` operation repeatedly, following the returned `Marker`,
    /// and return the items of all pages.
    ///
    /// The `marker` set on `request` (if any) is used for the first page.
    pub async fn fetch_all_pages<R: Paginated>(
        &self,
        request: &R,
    ) -> Result<Vec<R::Item>, RdsError> {
        let mut req = request.clone();
        let mut items = Vec::new();
        loop {
            let out = self.send(&req).await?;
            let marker = R::next_marker(&out).map(|m| m.to_string());
            items.extend(R::items(out));
            match marker {
                Some(m) if !m.is_empty() => {
                    trace!("{}: fetching next page, marker={}", R::ACTION, m);
                    req.set_marker(Some(m));
                }
                _ => return Ok(items),
            }
        }
    }

    // Presign the same request against the source region, so the service in the
    // destination region can call the source region on behalf of the caller.
    async fn add_pre_signed_url(
        &self,
        w: &mut QueryWriter,
        source_region: &str,
    ) -> Result<(), RdsError> {
        let source = string_to_region(source_region)?;
        w.write_param("DestinationRegion", self.inner.region.id());
        let mut url = Url::parse(&source.rds_endpoint())?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in w.params() {
                pairs.append_pair(k, v);
            }
        }
        let creds = self.current_credentials().await?;
        let signed = signer::presign_url(
            &Method::GET,
            &url,
            &creds,
            source.id(),
            SERVICE_NAME,
            PRESIGNED_URL_EXPIRY,
            Utc::now(),
        )?;
        trace!("presigned url for source region {}", source);
        w.write_param("PreSignedUrl", signed.as_str());
        Ok(())
    }

    pub(crate) async fn current_credentials(&self) -> Result<Credentials, RdsError> {
        self.inner
            .builder
            .current_credentials(&self.inner.client)
            .await
    }

    // Send a request body, retrying transient failures and refreshing
    // credentials once on authentication errors. Returns the response body.
    pub(crate) async fn invoke(&self, action: &str, body: &str) -> Result<String, RdsError> {
        let mut retries: u32 = 0;
        let mut refreshed = false;
        loop {
            let err = match self.invoke_once(body).await {
                Ok(text) => return Ok(text),
                Err(e) => e,
            };
            if err.is_auth_error() && !refreshed {
                refreshed = true;
                let r = self
                    .inner
                    .builder
                    .refresh_auth(&self.inner.client)
                    .await
                    .map_err(|e| {
                        RdsError {
                            message: format!(
                                "{}; error trying to refresh credentials: {}",
                                err.message, e
                            ),
                            ..err.clone()
                        }
                    })?;
                if r {
                    trace!("Refreshed credentials: retrying {}", action);
                    continue;
                }
                trace!("attempt to refresh generated no error but did not refresh credentials");
            }
            if err.is_retryable() && retries < self.inner.retry.max_retries {
                let delay = self.inner.retry.backoff(retries);
                retries += 1;
                warn!(
                    "{} failed ({}), retry {} of {} in {:?}",
                    action, err, retries, self.inner.retry.max_retries, delay
                );
                tokio::time::sleep(delay).await;
                continue;
            }
            return Err(err);
        }
    }

    async fn invoke_once(&self, body: &str) -> Result<String, RdsError> {
        let count = self.inner.request_count.fetch_add(1, Ordering::Relaxed);
        let creds = self.current_credentials().await?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        trace!("Adding required headers");
        headers = signer::get_required_headers(
            Method::POST,
            body,
            headers,
            &self.inner.endpoint,
            &creds,
            self.inner.region.id(),
            SERVICE_NAME,
            Utc::now(),
        )?;
        // Set User-Agent
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.inner.user_agent)?);

        trace!("sending request {} to {}", count, self.inner.endpoint);
        let resp = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .body(body.to_string())
            .timeout(self.inner.timeout)
            .headers(headers)
            .send()
            .await?;
        let status = resp.status();
        let header_request_id = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let content = resp.text().await?;
        if !status.is_success() {
            let err = self
                .inner
                .registry
                .to_error(status.as_u16(), &content, header_request_id.as_deref());
            debug!("request {} failed: {}", count, err);
            return Err(err);
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::{HeaderMap as AxumHeaders, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post, put};
    use axum::Router;

    // An instance metadata service and an RDS endpoint on one server. Each
    // credentials fetch issues a new key, ASIA1, ASIA2, ...
    struct Instance {
        lifetime_mins: i64,
        // number of requests answered with ExpiredToken
        expired_calls: usize,
        fetches: AtomicUsize,
        signed_with: std::sync::Mutex<Vec<String>>,
    }

    impl Instance {
        fn new(lifetime_mins: i64, expired_calls: usize) -> Arc<Instance> {
            Arc::new(Instance {
                lifetime_mins,
                expired_calls,
                fetches: AtomicUsize::new(0),
                signed_with: std::sync::Mutex::new(Vec::new()),
            })
        }
        fn keys(&self) -> Vec<String> {
            self.signed_with.lock().unwrap().clone()
        }
    }

    async fn role_credentials(State(m): State<Arc<Instance>>) -> String {
        let n = m.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        let exp = Utc::now() + chrono::Duration::minutes(m.lifetime_mins);
        format!(
            r#"{{"Code":"Success","AccessKeyId":"ASIA{n}","SecretAccessKey":"secret{n}","Token":"token{n}","Expiration":"{}"}}"#,
            exp.to_rfc3339()
        )
    }

    async fn rds(State(m): State<Arc<Instance>>, h: AxumHeaders) -> Response {
        let auth = h
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        let key = auth
            .trim_start_matches("AWS4-HMAC-SHA256 Credential=")
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string();
        let calls = {
            let mut g = m.signed_with.lock().unwrap();
            g.push(key);
            g.len()
        };
        if calls <= m.expired_calls {
            let body = "<ErrorResponse><Error><Type>Sender</Type><Code>ExpiredToken</Code>\
                        <Message>The security token included in the request is expired</Message>\
                        </Error><RequestId>req-1</RequestId></ErrorResponse>";
            return (StatusCode::FORBIDDEN, body).into_response();
        }
        (StatusCode::OK, "<DescribeAccountAttributesResponse/>").into_response()
    }

    async fn instance_client(m: Arc<Instance>) -> Client {
        let app = Router::new()
            .route("/latest/api/token", put(|| async { "session-token" }))
            .route("/latest/meta-data/iam/security-credentials/", get(|| async { "app-role" }))
            .route(
                "/latest/meta-data/iam/security-credentials/app-role",
                get(role_credentials),
            )
            .route("/latest/meta-data/placement/region", get(|| async { "us-east-1" }))
            .route("/", post(rds))
            .with_state(m);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        let mut b = Client::builder()
            .endpoint(&base)
            .unwrap()
            .region("us-east-1")
            .unwrap()
            .max_retries(0)
            .unwrap()
            .auth_from_instance()
            .unwrap();
        b.metadata_endpoint = Some(base);
        b.build().await.unwrap()
    }

    const BODY: &str = "Action=DescribeAccountAttributes&Version=2014-10-31";

    #[test]
    fn backoff_is_capped_and_jittered() {
        let p = RetryPolicy::new(3);
        assert_eq!(p.max_delay(0), Duration::from_millis(100));
        assert_eq!(p.max_delay(1), Duration::from_millis(200));
        assert_eq!(p.max_delay(4), Duration::from_millis(1600));
        assert_eq!(p.max_delay(20), Duration::from_secs(20));
        assert_eq!(p.max_delay(100), Duration::from_secs(20));
        for attempt in 0..10 {
            assert!(p.backoff(attempt) <= p.max_delay(attempt));
        }
    }

    #[tokio::test]
    async fn build_requires_credentials() {
        let r = Client::builder().region("us-east-1").unwrap().build().await;
        assert!(r.unwrap_err().message.contains("no credentials"));
    }

    #[tokio::test]
    async fn build_requires_endpoint_or_region() {
        let r = Client::builder()
            .credentials("AKID", "SECRET", None)
            .unwrap()
            .build()
            .await;
        assert!(r.unwrap_err().message.contains("can't determine RDS endpoint"));
    }

    #[tokio::test]
    async fn endpoint_from_region() {
        let c = Client::builder()
            .region("cn-north-1")
            .unwrap()
            .credentials("AKID", "SECRET", None)
            .unwrap()
            .build()
            .await
            .unwrap();
        assert_eq!(c.endpoint().as_str(), "https://rds.cn-north-1.amazonaws.com.cn/");
        assert_eq!(c.region().id(), "cn-north-1");
        assert!(c.get_cached_response_metadata().is_none());
        assert!(c.error_registry().len() > 100);
    }

    #[tokio::test]
    async fn region_from_custom_endpoint() {
        let c = Client::builder()
            .endpoint("https://rds-fips.us-west-2.amazonaws.com")
            .unwrap()
            .credentials("AKID", "SECRET", None)
            .unwrap()
            .build()
            .await
            .unwrap();
        assert_eq!(c.region().id(), "us-west-2");

        let r = Client::builder()
            .endpoint("http://localhost:4566")
            .unwrap()
            .credentials("AKID", "SECRET", None)
            .unwrap()
            .build()
            .await;
        assert!(r.unwrap_err().message.contains("signing region"));
    }

    #[tokio::test]
    async fn pre_signed_url_targets_source_region() {
        let c = Client::builder()
            .region("us-west-2")
            .unwrap()
            .credentials("AKID", "SECRET", Some("TOKEN"))
            .unwrap()
            .build()
            .await
            .unwrap();
        let mut w = QueryWriter::new("CopyDBSnapshot", API_VERSION);
        w.write_param("SourceDBSnapshotIdentifier", "arn:aws:rds:us-east-1:123456789012:snapshot:s1");
        w.write_param("TargetDBSnapshotIdentifier", "s1-copy");
        c.add_pre_signed_url(&mut w, "us-east-1").await.unwrap();
        assert_eq!(w.get("DestinationRegion"), Some("us-west-2"));
        let url = Url::parse(w.get("PreSignedUrl").unwrap()).unwrap();
        assert_eq!(url.host_str(), Some("rds.us-east-1.amazonaws.com"));
        let q: std::collections::HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(q.get("Action").map(|s| s.as_str()), Some("CopyDBSnapshot"));
        assert_eq!(q.get("DestinationRegion").map(|s| s.as_str()), Some("us-west-2"));
        assert_eq!(q.get("X-Amz-Expires").map(|s| s.as_str()), Some("3600"));
        assert_eq!(q.get("X-Amz-Security-Token").map(|s| s.as_str()), Some("TOKEN"));
        assert!(q.get("X-Amz-Credential").unwrap().contains("/us-east-1/rds/aws4_request"));
        assert!(q.contains_key("X-Amz-Signature"));

        assert!(c.add_pre_signed_url(&mut w, "nowhere-7").await.is_err());
    }

    #[tokio::test]
    async fn expired_token_refreshes_instance_credentials() {
        let m = Instance::new(60, 1);
        let c = instance_client(m.clone()).await;
        assert_eq!(m.fetches.load(Ordering::SeqCst), 1);
        c.invoke("DescribeAccountAttributes", BODY).await.unwrap();
        assert_eq!(m.keys(), vec!["ASIA1", "ASIA2"]);
        assert_eq!(m.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(c.current_credentials().await.unwrap().access_key_id(), "ASIA2");
    }

    #[tokio::test]
    async fn expired_token_is_returned_after_one_refresh() {
        let m = Instance::new(60, usize::MAX);
        let c = instance_client(m.clone()).await;
        let e = c.invoke("DescribeAccountAttributes", BODY).await.unwrap_err();
        assert_eq!(e.code, crate::error::RdsErrorCode::ExpiredToken);
        assert_eq!(m.keys(), vec!["ASIA1", "ASIA2"]);
        assert_eq!(m.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn instance_credentials_refresh_before_expiry() {
        let m = Instance::new(60, 0);
        let c = instance_client(m.clone()).await;
        assert_eq!(c.current_credentials().await.unwrap().access_key_id(), "ASIA1");
        c.invoke("DescribeAccountAttributes", BODY).await.unwrap();
        assert_eq!(m.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(m.keys(), vec!["ASIA1"]);

        // credentials within five minutes of expiry are replaced before signing
        let m = Instance::new(2, 0);
        let c = instance_client(m.clone()).await;
        assert_eq!(m.fetches.load(Ordering::SeqCst), 1);
        c.invoke("DescribeAccountAttributes", BODY).await.unwrap();
        assert_eq!(m.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(m.keys(), vec!["ASIA2"]);
    }
}
