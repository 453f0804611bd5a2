//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Signature Version 4 request signing and presigning.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::trace;
use url::Url;

use crate::auth_common::credentials_provider::Credentials;
use crate::error::{ia_err, ia_error, RdsError};

type HmacSha256 = Hmac<Sha256>;

static ALGORITHM: &str = "AWS4-HMAC-SHA256";
static DATE_HEADER: &str = "x-amz-date";
static HOST_HEADER: &str = "host";
static SECURITY_TOKEN_HEADER: &str = "x-amz-security-token";
static CONTENT_SHA256_HEADER: &str = "x-amz-content-sha256";
static AUTHORIZATION_HEADER: &str = "authorization";
static TERMINATOR: &str = "aws4_request";

// RFC 3986 unreserved characters are left as-is, everything else is encoded.
const SIGV4_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query key or value the way SigV4 canonicalization requires.
pub(crate) fn uri_encode(input: &str) -> String {
    utf8_percent_encode(input, SIGV4_ENCODE_SET).to_string()
}

pub(crate) fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, RdsError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| ia_error!("invalid signing key: {}", e))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

// kSigning = HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")
fn signing_key(secret: &str, date: &str, region: &str, service: &str) -> Result<Vec<u8>, RdsError> {
    let k_date = hmac_sha256(format!("AWS4{}", secret).as_bytes(), date.as_bytes())?;
    let k_region = hmac_sha256(&k_date, region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, service.as_bytes())?;
    hmac_sha256(&k_service, TERMINATOR.as_bytes())
}

fn host_value(url: &Url) -> Result<String, RdsError> {
    let host = match url.host_str() {
        Some(h) => h,
        None => return ia_err!("no host in url {}", url),
    };
    Ok(match url.port() {
        Some(p) => format!("{}:{}", host, p),
        None => host.to_string(),
    })
}

fn canonical_uri(url: &Url) -> &str {
    match url.path() {
        "" => "/",
        p => p,
    }
}

fn canonical_query(pairs: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (uri_encode(k), uri_encode(v)))
        .collect();
    encoded.sort();
    encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<String>>()
        .join("&")
}

fn url_query_pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn scope(date: &str, region: &str, service: &str) -> String {
    format!("{}/{}/{}/{}", date, region, service, TERMINATOR)
}

fn string_to_sign(amz_date: &str, scope: &str, canonical_request: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        sha256_hex(canonical_request.as_bytes())
    )
}

/// Add the `host`, `x-amz-date`, `x-amz-security-token` (for temporary credentials),
/// `x-amz-content-sha256` (for requests with a body) and `authorization` headers
/// to `original_headers`.
///
/// All headers present in the map when this is called are signed.
#[allow(clippy::too_many_arguments)]
pub(crate) fn get_required_headers(
    method: Method,
    payload: &str,
    original_headers: HeaderMap,
    url_data: &Url,
    credentials: &Credentials,
    region: &str,
    service: &str,
    now: DateTime<Utc>,
) -> Result<HeaderMap, RdsError> {
    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let date = now.format("%Y%m%d").to_string();
    let payload_hash = sha256_hex(payload.as_bytes());

    let mut new_headers = original_headers;
    if !new_headers.contains_key(HOST_HEADER) {
        new_headers.insert(HOST_HEADER, HeaderValue::from_str(&host_value(url_data)?)?);
    }
    new_headers.insert(DATE_HEADER, HeaderValue::from_str(&amz_date)?);
    if let Some(tok) = credentials.session_token() {
        new_headers.insert(SECURITY_TOKEN_HEADER, HeaderValue::from_str(tok)?);
    }
    if method != Method::GET && !new_headers.contains_key(CONTENT_SHA256_HEADER) {
        new_headers.insert(CONTENT_SHA256_HEADER, HeaderValue::from_str(&payload_hash)?);
    }

    // header names in a HeaderMap are already lowercase
    let mut headers_to_sign: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in new_headers.iter() {
        let v = value.to_str()?;
        let v = v.split_whitespace().collect::<Vec<&str>>().join(" ");
        headers_to_sign
            .entry(name.as_str().to_string())
            .or_default()
            .push(v);
    }
    let canonical_headers: String = headers_to_sign
        .iter()
        .map(|(k, v)| format!("{}:{}\n", k, v.join(",")))
        .collect();
    let signed_headers = headers_to_sign
        .keys()
        .map(|k| k.as_str())
        .collect::<Vec<&str>>()
        .join(";");

    let canonical_request = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        method.as_str(),
        canonical_uri(url_data),
        canonical_query(&url_query_pairs(url_data)),
        canonical_headers,
        signed_headers,
        payload_hash
    );
    trace!("canonical request:\n{}", canonical_request);

    let scope = scope(&date, region, service);
    let sts = string_to_sign(&amz_date, &scope, &canonical_request);
    let key = signing_key(credentials.secret_access_key(), &date, region, service)?;
    let signature = hex::encode(hmac_sha256(&key, sts.as_bytes())?);

    let authorization_header = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM,
        credentials.access_key_id(),
        scope,
        signed_headers,
        signature
    );
    trace!("inserting auth header: {}", authorization_header);
    new_headers.insert(
        HeaderName::from_static(AUTHORIZATION_HEADER),
        HeaderValue::from_str(&authorization_header)?,
    );
    Ok(new_headers)
}

/// Create a presigned url: the signature and credential scope are carried in the
/// query string, and only the `host` header is signed.
pub(crate) fn presign_url(
    method: &Method,
    url: &Url,
    credentials: &Credentials,
    region: &str,
    service: &str,
    expires: Duration,
    now: DateTime<Utc>,
) -> Result<Url, RdsError> {
    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let date = now.format("%Y%m%d").to_string();
    let scope = scope(&date, region, service);
    let host = host_value(url)?;

    let mut pairs = url_query_pairs(url);
    pairs.push(("X-Amz-Algorithm".to_string(), ALGORITHM.to_string()));
    pairs.push((
        "X-Amz-Credential".to_string(),
        format!("{}/{}", credentials.access_key_id(), scope),
    ));
    pairs.push(("X-Amz-Date".to_string(), amz_date.clone()));
    pairs.push(("X-Amz-Expires".to_string(), expires.as_secs().to_string()));
    if let Some(tok) = credentials.session_token() {
        pairs.push(("X-Amz-Security-Token".to_string(), tok.to_string()));
    }
    pairs.push(("X-Amz-SignedHeaders".to_string(), HOST_HEADER.to_string()));
    let query = canonical_query(&pairs);

    let canonical_request = format!(
        "{}\n{}\n{}\nhost:{}\n\n{}\n{}",
        method.as_str(),
        canonical_uri(url),
        query,
        host,
        HOST_HEADER,
        sha256_hex(b"")
    );
    trace!("canonical presign request:\n{}", canonical_request);
    let sts = string_to_sign(&amz_date, &scope, &canonical_request);
    let key = signing_key(credentials.secret_access_key(), &date, region, service)?;
    let signature = hex::encode(hmac_sha256(&key, sts.as_bytes())?);

    let mut signed = url.clone();
    signed.set_query(Some(&format!("{}&X-Amz-Signature={}", query, signature)));
    Ok(signed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn example_credentials() -> Credentials {
        Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
    }

    fn example_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap()
    }

    #[test]
    fn empty_payload_hash() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn encoding() {
        assert_eq!(uri_encode("abcABC123-_.~"), "abcABC123-_.~");
        assert_eq!(uri_encode("a b/c=d+e"), "a%20b%2Fc%3Dd%2Be");
        assert_eq!(uri_encode("é"), "%C3%A9");
    }

    // "get-vanilla" from the published SigV4 test suite.
    #[test]
    fn sigv4_test_suite_get_vanilla() {
        let url = Url::parse("https://example.amazonaws.com/").unwrap();
        let headers = get_required_headers(
            Method::GET,
            "",
            HeaderMap::new(),
            &url,
            &example_credentials(),
            "us-east-1",
            "service",
            example_time(),
        )
        .unwrap();
        assert_eq!(headers.get("x-amz-date").unwrap(), "20150830T123600Z");
        assert_eq!(headers.get("host").unwrap(), "example.amazonaws.com");
        assert_eq!(
            headers.get("authorization").unwrap(),
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
    }

    #[test]
    fn post_signs_body_and_token() {
        let url = Url::parse("https://rds.us-east-1.amazonaws.com/").unwrap();
        let mut h = HeaderMap::new();
        h.insert(
            "content-type",
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=utf-8"),
        );
        let creds = Credentials::new_temporary("ASIA", "secret", "session-token", None);
        let body = "Action=DescribeDBInstances&Version=2014-10-31";
        let headers = get_required_headers(
            Method::POST,
            body,
            h,
            &url,
            &creds,
            "us-east-1",
            "rds",
            example_time(),
        )
        .unwrap();
        assert_eq!(headers.get("x-amz-security-token").unwrap(), "session-token");
        assert_eq!(
            headers.get("x-amz-content-sha256").unwrap().to_str().unwrap(),
            sha256_hex(body.as_bytes())
        );
        let auth = headers.get("authorization").unwrap().to_str().unwrap();
        assert!(auth.contains("Credential=ASIA/20150830/us-east-1/rds/aws4_request"));
        assert!(auth.contains(
            "SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date;x-amz-security-token"
        ));
    }

    #[test]
    fn signature_is_deterministic_and_key_dependent() {
        let url = Url::parse("https://rds.us-east-1.amazonaws.com/").unwrap();
        let sign = |c: &Credentials| {
            get_required_headers(
                Method::POST,
                "Action=X",
                HeaderMap::new(),
                &url,
                c,
                "us-east-1",
                "rds",
                example_time(),
            )
            .unwrap()
            .get("authorization")
            .unwrap()
            .clone()
        };
        let a = sign(&example_credentials());
        assert_eq!(a, sign(&example_credentials()));
        assert_ne!(a, sign(&Credentials::new("AKIDEXAMPLE", "other")));
    }

    #[test]
    fn presigned_url_layout() {
        let url = Url::parse("https://db.example.com:5432/?Action=connect&DBUser=admin").unwrap();
        let creds = Credentials::new_temporary("ASIA", "secret", "tok/en", None);
        let signed = presign_url(
            &Method::GET,
            &url,
            &creds,
            "us-west-2",
            "rds-db",
            Duration::from_secs(900),
            example_time(),
        )
        .unwrap();
        let q = signed.query().unwrap();
        assert!(q.starts_with("Action=connect&DBUser=admin&X-Amz-Algorithm=AWS4-HMAC-SHA256"));
        assert!(q.contains("X-Amz-Credential=ASIA%2F20150830%2Fus-west-2%2Frds-db%2Faws4_request"));
        assert!(q.contains("X-Amz-Date=20150830T123600Z"));
        assert!(q.contains("X-Amz-Expires=900"));
        assert!(q.contains("X-Amz-Security-Token=tok%2Fen"));
        assert!(q.contains("X-Amz-SignedHeaders=host"));
        let sig = q.rsplit("X-Amz-Signature=").next().unwrap();
        assert_eq!(sig.len(), 64);
        assert_eq!(signed.port(), Some(5432));
    }
}
