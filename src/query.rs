//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;

use crate::auth_common::signer::uri_encode;

// QueryWriter collects the flattened parameters of a Query protocol request.
// Nested shapes are written as `Prefix.Field`, lists as `Prefix.member.N` with
// 1-based indexes. Parameters are kept sorted so the encoded body is
// deterministic.
#[derive(Debug, Clone, Default)]
pub struct QueryWriter {
    params: BTreeMap<String, String>,
}

impl QueryWriter {
    /// Create a writer with the `Action` and `Version` parameters already set.
    pub fn new(action: &str, version: &str) -> QueryWriter {
        let mut w = QueryWriter::default();
        w.write_param("Action", action);
        w.write_param("Version", version);
        w
    }

    pub fn write_param(&mut self, key: &str, value: impl Into<String>) {
        self.params.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|s| s.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The `application/x-www-form-urlencoded` request body.
    pub fn to_body(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(v)))
            .collect::<Vec<String>>()
            .join("&")
    }
}

/// Marshalling of a request (or nested input shape) into Query parameters.
///
/// Implemented by `#[derive(ToQuery)]`.
pub trait ToQuery {
    fn to_query(&self, w: &mut QueryWriter, prefix: &str);
}

/// A value that can be written under a single parameter key.
///
/// `member` is the element name used for each entry when the value is a list.
pub trait QueryValue {
    fn write_value(&self, w: &mut QueryWriter, key: &str, member: &str);
}

#[doc(hidden)]
pub fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

impl QueryValue for String {
    fn write_value(&self, w: &mut QueryWriter, key: &str, _member: &str) {
        // empty strings are treated as unset
        if !self.is_empty() {
            w.write_param(key, self.as_str());
        }
    }
}

impl QueryValue for bool {
    fn write_value(&self, w: &mut QueryWriter, key: &str, _member: &str) {
        w.write_param(key, if *self { "true" } else { "false" });
    }
}

impl QueryValue for i32 {
    fn write_value(&self, w: &mut QueryWriter, key: &str, _member: &str) {
        w.write_param(key, self.to_string());
    }
}

impl QueryValue for i64 {
    fn write_value(&self, w: &mut QueryWriter, key: &str, _member: &str) {
        w.write_param(key, self.to_string());
    }
}

impl QueryValue for f64 {
    fn write_value(&self, w: &mut QueryWriter, key: &str, _member: &str) {
        w.write_param(key, self.to_string());
    }
}

impl QueryValue for DateTime<Utc> {
    fn write_value(&self, w: &mut QueryWriter, key: &str, _member: &str) {
        w.write_param(key, self.to_rfc3339_opts(SecondsFormat::Millis, true));
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn write_value(&self, w: &mut QueryWriter, key: &str, member: &str) {
        if let Some(v) = self {
            v.write_value(w, key, member);
        }
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn write_value(&self, w: &mut QueryWriter, key: &str, member: &str) {
        for (i, v) in self.iter().enumerate() {
            let k = format!("{}.{}.{}", key, member, i + 1);
            // nested lists use the default member name
            v.write_value(w, &k, "member");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn scalars_and_optionals() {
        let mut w = QueryWriter::new("DescribeDBInstances", "2014-10-31");
        String::from("mydb").write_value(&mut w, "DBInstanceIdentifier", "member");
        String::new().write_value(&mut w, "Marker", "member");
        Some(20i32).write_value(&mut w, "MaxRecords", "member");
        None::<bool>.write_value(&mut w, "MultiAZ", "member");
        true.write_value(&mut w, "ApplyImmediately", "member");
        assert_eq!(w.get("DBInstanceIdentifier"), Some("mydb"));
        assert_eq!(w.get("MaxRecords"), Some("20"));
        assert_eq!(w.get("ApplyImmediately"), Some("true"));
        assert!(!w.contains("Marker"));
        assert!(!w.contains("MultiAZ"));
        assert_eq!(w.len(), 5);
    }

    #[test]
    fn lists_are_one_based() {
        let mut w = QueryWriter::default();
        let ids = vec!["sg-1".to_string(), "sg-2".to_string()];
        ids.write_value(&mut w, "VpcSecurityGroupIds", "VpcSecurityGroupId");
        assert_eq!(w.get("VpcSecurityGroupIds.VpcSecurityGroupId.1"), Some("sg-1"));
        assert_eq!(w.get("VpcSecurityGroupIds.VpcSecurityGroupId.2"), Some("sg-2"));
        assert!(!w.contains("VpcSecurityGroupIds.VpcSecurityGroupId.0"));

        let empty: Vec<String> = Vec::new();
        empty.write_value(&mut w, "Empty", "member");
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn timestamps_use_millis_utc() {
        let mut w = QueryWriter::default();
        let t = Utc.with_ymd_and_hms(2020, 5, 11, 20, 16, 22).unwrap();
        t.write_value(&mut w, "RestoreTime", "member");
        assert_eq!(w.get("RestoreTime"), Some("2020-05-11T20:16:22.000Z"));
    }

    #[test]
    fn body_is_sorted_and_encoded() {
        let mut w = QueryWriter::new("CreateDBSnapshot", "2014-10-31");
        w.write_param("Tags.Tag.1.Value", "a b/c=d");
        w.write_param("DBSnapshotIdentifier", "snap-1");
        assert_eq!(
            w.to_body(),
            "Action=CreateDBSnapshot&DBSnapshotIdentifier=snap-1&Tags.Tag.1.Value=a%20b%2Fc%3Dd&Version=2014-10-31"
        );
    }

    #[test]
    fn join_keys() {
        assert_eq!(join_key("", "Key"), "Key");
        assert_eq!(join_key("Tags.Tag.1", "Key"), "Tags.Tag.1.Key");
    }
}
