//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Shapes shared by several resource families.

use rds_rust_sdk_derive::{FromXml, ToQuery};

/// A metadata tag attached to a resource.
///
/// Sent as `Tags.Tag.N.Key` / `Tags.Tag.N.Value`.
#[derive(Debug, Clone, Default, PartialEq, ToQuery, FromXml)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: &str, value: &str) -> Tag {
        Tag {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// A filter of a `Describe*` operation: `Filters.Filter.N.Name` and
/// `Filters.Filter.N.Values.Value.M`.
#[derive(Debug, Clone, Default, PartialEq, ToQuery)]
pub struct Filter {
    pub name: String,
    #[rds(member = "Value")]
    pub values: Vec<String>,
}

impl Filter {
    pub fn new(name: &str, values: &[&str]) -> Filter {
        Filter {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// The connection endpoint of a DB instance.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct Endpoint {
    pub address: String,
    pub port: i32,
    pub hosted_zone_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct AvailabilityZone {
    pub name: String,
}

/// A processor feature (`coreCount`, `threadsPerCore`) of an instance class.
#[derive(Debug, Clone, Default, PartialEq, ToQuery, FromXml)]
pub struct ProcessorFeature {
    pub name: String,
    pub value: String,
}

impl ProcessorFeature {
    pub fn new(name: &str, value: &str) -> ProcessorFeature {
        ProcessorFeature {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct VpcSecurityGroupMembership {
    pub vpc_security_group_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBSecurityGroupMembership {
    pub db_security_group_name: String,
    pub status: String,
}

/// Active Directory domain membership of an instance or cluster.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DomainMembership {
    pub domain: String,
    pub status: String,
    #[rds(rename = "FQDN")]
    pub fqdn: String,
    pub iam_role_name: String,
}

/// Log types to start or stop exporting to CloudWatch Logs.
#[derive(Debug, Clone, Default, PartialEq, ToQuery)]
pub struct CloudwatchLogsExportConfiguration {
    pub enable_log_types: Vec<String>,
    pub disable_log_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct PendingCloudwatchLogsExports {
    pub log_types_to_enable: Vec<String>,
    pub log_types_to_disable: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct Range {
    pub from: i32,
    pub to: i32,
    pub step: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DoubleRange {
    pub from: f64,
    pub to: f64,
}
