//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::auth_common::credentials_provider::{Credentials, CredentialsProvider};
use crate::auth_common::file_utils::expand_user_home;
use crate::error::{RdsError, RdsErrorCode};
use ini::Ini;

pub(crate) const DEFAULT_CREDENTIALS_FILE_PATH: &str = "~/.aws/credentials";
pub(crate) const DEFAULT_CONFIG_FILE_PATH: &str = "~/.aws/config";
pub(crate) const DEFAULT_PROFILE: &str = "default";
const ACCESS_KEY_ID: &str = "aws_access_key_id";
const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
const SESSION_TOKEN: &str = "aws_session_token";
const REGION: &str = "region";

/// A credentials provider that reads credentials from a shared credentials file
/// (by default `~/.aws/credentials`).
///
/// The file uses the ini format, one section per profile:
/// ```ini
/// [default]
/// aws_access_key_id = AKIDEXAMPLE
/// aws_secret_access_key = wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY
/// # optional
/// aws_session_token = ...
/// region = us-east-1
/// ```
/// If the profile has no `region`, the `region` of the same profile in the
/// config file (`~/.aws/config`, section `[profile <name>]` or `[default]`) is used.
#[derive(Debug, Clone)]
pub struct ProfileCredentialsProvider {
    credentials: Credentials,
    region_id: String,
}

fn credentials_error(msg: String) -> RdsError {
    RdsError::new(RdsErrorCode::CredentialsError, &msg)
}

fn get_section_variable(
    file: &str,
    props: &ini::Properties,
    var: &str,
) -> Result<String, RdsError> {
    match props.get(var) {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(credentials_error(format!(
            "error reading credentials file '{}': missing field '{}'",
            file, var
        ))),
    }
}

impl ProfileCredentialsProvider {
    /// Creates a new ProfileCredentialsProvider using the file from the path provided using the profile name provided.
    ///
    /// # Arguments
    ///
    /// * `credentials_file_path` : The path of the shared credentials file to use
    /// * `profile_name`: The name of the profile to use
    ///
    pub fn new_from_file(
        credentials_file_path: &str,
        profile_name: &str,
    ) -> Result<Self, RdsError> {
        Self::new_from_files(
            credentials_file_path,
            Some(DEFAULT_CONFIG_FILE_PATH),
            profile_name,
        )
    }

    /// Creates a new ProfileCredentialsProvider from the default credentials file
    /// (`AWS_SHARED_CREDENTIALS_FILE`, or `~/.aws/credentials`) using the profile
    /// name provided.
    pub fn new(profile_name: &str) -> Result<Self, RdsError> {
        let creds = std::env::var("AWS_SHARED_CREDENTIALS_FILE")
            .unwrap_or_else(|_| DEFAULT_CREDENTIALS_FILE_PATH.to_string());
        let config = std::env::var("AWS_CONFIG_FILE")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE_PATH.to_string());
        Self::new_from_files(&creds, Some(&config), profile_name)
    }

    pub(crate) fn new_from_files(
        credentials_file_path: &str,
        config_file_path: Option<&str>,
        profile_name: &str,
    ) -> Result<Self, RdsError> {
        tracing::debug!(
            "Creating a ProfileCredentialsProvider from file {} and profile {}",
            credentials_file_path,
            profile_name
        );
        let file_path = expand_user_home(credentials_file_path);
        let config = Ini::load_from_file(&file_path).map_err(|e| {
            credentials_error(format!(
                "error reading credentials file '{}': {}",
                file_path, e
            ))
        })?;
        let profile_data = config.section(Some(profile_name)).ok_or_else(|| {
            credentials_error(format!(
                "error reading credentials file '{}': missing profile '{}'",
                file_path, profile_name
            ))
        })?;

        let key = get_section_variable(&file_path, profile_data, ACCESS_KEY_ID)?;
        let secret = get_section_variable(&file_path, profile_data, SECRET_ACCESS_KEY)?;
        let credentials = match profile_data.get(SESSION_TOKEN) {
            Some(tok) => Credentials::new_temporary(&key, &secret, tok.trim(), None),
            None => Credentials::new(&key, &secret),
        };

        let mut region_id = get_section_variable(&file_path, profile_data, REGION)
            .unwrap_or_default();
        if region_id.is_empty() {
            if let Some(cfg) = config_file_path {
                region_id = region_from_config_file(cfg, profile_name);
            }
        }
        if region_id.is_empty() {
            tracing::debug!("no '{}' specified for profile {}", REGION, profile_name);
        }

        Ok(ProfileCredentialsProvider {
            credentials,
            region_id,
        })
    }
}

// Reads `region` for the profile from the config file; missing files or
// sections yield an empty string.
pub(crate) fn region_from_config_file(config_file_path: &str, profile_name: &str) -> String {
    let path = expand_user_home(config_file_path);
    let config = match Ini::load_from_file(&path) {
        Ok(c) => c,
        Err(_) => return String::new(),
    };
    let section = if profile_name == DEFAULT_PROFILE {
        DEFAULT_PROFILE.to_string()
    } else {
        format!("profile {}", profile_name)
    };
    config
        .section(Some(section.as_str()))
        .and_then(|p| p.get(REGION))
        .map(|r| r.trim().to_string())
        .unwrap_or_default()
}

impl CredentialsProvider for ProfileCredentialsProvider {
    fn credentials(&self) -> Result<Credentials, RdsError> {
        Ok(self.credentials.clone())
    }
    fn region_id(&self) -> &str {
        &self.region_id
    }
}
