//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use dirs;
use std::path::PathBuf;

use crate::error::{ia_err, RdsError};

/// Generates the absolute file path of the path provided based on the underlying platform
///
/// # Arguments
///
/// * `file_path`: The file path that needs to be corrected
///
/// # Returns
///
/// The absolute file path to be used based on the platform being used. If the
/// home directory cannot be determined the path is returned unchanged.
///
pub(crate) fn expand_user_home(file_path: &str) -> String {
    if file_path.starts_with("~/") || file_path.starts_with("~\\") {
        if let Some(home_dir) = dirs::home_dir() {
            let full_path = home_dir.join(PathBuf::from(correct_path(&file_path[2..])));
            return format!("{}", full_path.display());
        }
        tracing::debug!("unable to determine home directory for {}", file_path);
    }
    String::from(file_path)
}

// Corrects path separators for the platform.
fn correct_path(file_path: &str) -> String {
    if cfg!(target_os = "windows") {
        file_path.replace('/', "\\")
    } else {
        String::from(file_path)
    }
}

/// Read a whole file (after `~` expansion) into a String.
pub(crate) fn file_to_string(file_path: &str) -> Result<String, RdsError> {
    let path = expand_user_home(file_path);
    match std::fs::read_to_string(&path) {
        Ok(s) => Ok(s),
        Err(e) => ia_err!("error reading file '{}': {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_home() {
        let p = expand_user_home("~/.aws/credentials");
        if dirs::home_dir().is_some() {
            assert!(!p.starts_with('~'));
            assert!(p.ends_with("credentials"));
        }
        assert_eq!(expand_user_home("/etc/hosts"), "/etc/hosts");
    }

    #[test]
    fn missing_file() {
        assert!(file_to_string("/definitely/not/a/real/file").is_err());
    }
}
