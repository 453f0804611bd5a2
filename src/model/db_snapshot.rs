//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Manual and automated snapshots of DB instances and DB clusters, and their
//! sharing attributes.

use chrono::{DateTime, Utc};
use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{Filter, ProcessorFeature, Tag};

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBSnapshot {
    pub db_snapshot_identifier: String,
    pub db_instance_identifier: String,
    pub snapshot_create_time: Option<DateTime<Utc>>,
    pub engine: String,
    pub allocated_storage: i32,
    /// `creating`, `available`, ...
    pub status: String,
    pub port: i32,
    pub availability_zone: String,
    pub vpc_id: String,
    pub instance_create_time: Option<DateTime<Utc>>,
    pub master_username: String,
    pub engine_version: String,
    pub license_model: String,
    pub snapshot_type: String,
    pub iops: Option<i32>,
    pub option_group_name: String,
    pub percent_progress: i32,
    pub source_region: String,
    pub source_db_snapshot_identifier: String,
    pub storage_type: String,
    pub tde_credential_arn: String,
    pub encrypted: bool,
    pub kms_key_id: String,
    pub db_snapshot_arn: String,
    pub timezone: String,
    pub iam_database_authentication_enabled: bool,
    pub processor_features: Vec<ProcessorFeature>,
    pub dbi_resource_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterSnapshot {
    pub availability_zones: Vec<String>,
    pub db_cluster_snapshot_identifier: String,
    pub db_cluster_identifier: String,
    pub snapshot_create_time: Option<DateTime<Utc>>,
    pub engine: String,
    pub allocated_storage: i32,
    pub status: String,
    pub port: i32,
    pub vpc_id: String,
    pub cluster_create_time: Option<DateTime<Utc>>,
    pub master_username: String,
    pub engine_version: String,
    pub license_model: String,
    pub snapshot_type: String,
    pub percent_progress: i32,
    pub storage_encrypted: bool,
    pub kms_key_id: String,
    pub db_cluster_snapshot_arn: String,
    pub source_db_cluster_snapshot_arn: String,
    pub iam_database_authentication_enabled: bool,
}

/// A snapshot attribute. The `restore` attribute lists the AWS accounts the
/// snapshot is shared with (`all` for a public snapshot).
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBSnapshotAttribute {
    pub attribute_name: String,
    pub attribute_values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBSnapshotAttributesResult {
    pub db_snapshot_identifier: String,
    pub db_snapshot_attributes: Vec<DBSnapshotAttribute>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterSnapshotAttribute {
    pub attribute_name: String,
    pub attribute_values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterSnapshotAttributesResult {
    pub db_cluster_snapshot_identifier: String,
    pub db_cluster_snapshot_attributes: Vec<DBClusterSnapshotAttribute>,
}

// Requests

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBSnapshotRequest {
    pub db_snapshot_identifier: String,
    pub db_instance_identifier: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CreateDBSnapshotRequest {
    pub fn new(db_snapshot_identifier: &str, db_instance_identifier: &str) -> Self {
        CreateDBSnapshotRequest {
            db_snapshot_identifier: db_snapshot_identifier.to_string(),
            db_instance_identifier: db_instance_identifier.to_string(),
            ..Default::default()
        }
    }
}

/// Copy a DB snapshot.
///
/// To copy from another region, issue the request in the destination region
/// with the source snapshot ARN and set
/// [`source_region`](CopyDBSnapshotRequest::source_region); `PreSignedUrl` and
/// `DestinationRegion` are then generated by the client.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct CopyDBSnapshotRequest {
    pub source_db_snapshot_identifier: String,
    pub target_db_snapshot_identifier: String,
    pub kms_key_id: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
    pub copy_tags: Option<bool>,
    pub pre_signed_url: Option<String>,
    pub option_group_name: String,
    #[rds(skip)]
    pub source_region: Option<String>,
}

impl CopyDBSnapshotRequest {
    pub fn new(source_db_snapshot_identifier: &str, target_db_snapshot_identifier: &str) -> Self {
        CopyDBSnapshotRequest {
            source_db_snapshot_identifier: source_db_snapshot_identifier.to_string(),
            target_db_snapshot_identifier: target_db_snapshot_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBSnapshotRequest {
    pub db_snapshot_identifier: String,
}

impl DeleteDBSnapshotRequest {
    pub fn new(db_snapshot_identifier: &str) -> Self {
        DeleteDBSnapshotRequest {
            db_snapshot_identifier: db_snapshot_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBSnapshotsRequest {
    pub db_instance_identifier: String,
    pub db_snapshot_identifier: String,
    /// `automated`, `manual`, `shared`, `public` or `awsbackup`.
    pub snapshot_type: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
    pub include_shared: Option<bool>,
    pub include_public: Option<bool>,
    pub dbi_resource_id: String,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBSnapshotRequest {
    pub db_snapshot_identifier: String,
    pub engine_version: String,
    pub option_group_name: String,
}

impl ModifyDBSnapshotRequest {
    pub fn new(db_snapshot_identifier: &str) -> Self {
        ModifyDBSnapshotRequest {
            db_snapshot_identifier: db_snapshot_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBSnapshotAttributesRequest {
    pub db_snapshot_identifier: String,
}

impl DescribeDBSnapshotAttributesRequest {
    pub fn new(db_snapshot_identifier: &str) -> Self {
        DescribeDBSnapshotAttributesRequest {
            db_snapshot_identifier: db_snapshot_identifier.to_string(),
        }
    }
}

/// Share a manual snapshot with other accounts (or make it public) by adding
/// account ids to the `restore` attribute.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBSnapshotAttributeRequest {
    pub db_snapshot_identifier: String,
    pub attribute_name: String,
    #[rds(member = "AttributeValue")]
    pub values_to_add: Vec<String>,
    #[rds(member = "AttributeValue")]
    pub values_to_remove: Vec<String>,
}

impl ModifyDBSnapshotAttributeRequest {
    pub fn new(db_snapshot_identifier: &str, attribute_name: &str) -> Self {
        ModifyDBSnapshotAttributeRequest {
            db_snapshot_identifier: db_snapshot_identifier.to_string(),
            attribute_name: attribute_name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBClusterSnapshotRequest {
    pub db_cluster_snapshot_identifier: String,
    pub db_cluster_identifier: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CreateDBClusterSnapshotRequest {
    pub fn new(db_cluster_snapshot_identifier: &str, db_cluster_identifier: &str) -> Self {
        CreateDBClusterSnapshotRequest {
            db_cluster_snapshot_identifier: db_cluster_snapshot_identifier.to_string(),
            db_cluster_identifier: db_cluster_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CopyDBClusterSnapshotRequest {
    pub source_db_cluster_snapshot_identifier: String,
    pub target_db_cluster_snapshot_identifier: String,
    pub kms_key_id: String,
    pub pre_signed_url: Option<String>,
    pub copy_tags: Option<bool>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
    /// The region of the source snapshot, for cross-region copies.
    #[rds(skip)]
    pub source_region: Option<String>,
}

impl CopyDBClusterSnapshotRequest {
    pub fn new(
        source_db_cluster_snapshot_identifier: &str,
        target_db_cluster_snapshot_identifier: &str,
    ) -> Self {
        CopyDBClusterSnapshotRequest {
            source_db_cluster_snapshot_identifier: source_db_cluster_snapshot_identifier
                .to_string(),
            target_db_cluster_snapshot_identifier: target_db_cluster_snapshot_identifier
                .to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBClusterSnapshotRequest {
    pub db_cluster_snapshot_identifier: String,
}

impl DeleteDBClusterSnapshotRequest {
    pub fn new(db_cluster_snapshot_identifier: &str) -> Self {
        DeleteDBClusterSnapshotRequest {
            db_cluster_snapshot_identifier: db_cluster_snapshot_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBClusterSnapshotsRequest {
    pub db_cluster_identifier: String,
    pub db_cluster_snapshot_identifier: String,
    pub snapshot_type: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
    pub include_shared: Option<bool>,
    pub include_public: Option<bool>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBClusterSnapshotAttributesRequest {
    pub db_cluster_snapshot_identifier: String,
}

impl DescribeDBClusterSnapshotAttributesRequest {
    pub fn new(db_cluster_snapshot_identifier: &str) -> Self {
        DescribeDBClusterSnapshotAttributesRequest {
            db_cluster_snapshot_identifier: db_cluster_snapshot_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBClusterSnapshotAttributeRequest {
    pub db_cluster_snapshot_identifier: String,
    pub attribute_name: String,
    #[rds(member = "AttributeValue")]
    pub values_to_add: Vec<String>,
    #[rds(member = "AttributeValue")]
    pub values_to_remove: Vec<String>,
}

impl ModifyDBClusterSnapshotAttributeRequest {
    pub fn new(db_cluster_snapshot_identifier: &str, attribute_name: &str) -> Self {
        ModifyDBClusterSnapshotAttributeRequest {
            db_cluster_snapshot_identifier: db_cluster_snapshot_identifier.to_string(),
            attribute_name: attribute_name.to_string(),
            ..Default::default()
        }
    }
}

// Results

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBSnapshotResult {
    pub db_snapshot: Option<DBSnapshot>,
}

pub type CreateDBSnapshotResult = DBSnapshotResult;
pub type CopyDBSnapshotResult = DBSnapshotResult;
pub type DeleteDBSnapshotResult = DBSnapshotResult;
pub type ModifyDBSnapshotResult = DBSnapshotResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBSnapshotsResult {
    pub marker: Option<String>,
    pub db_snapshots: Vec<DBSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBSnapshotAttributesResultWrapper {
    pub db_snapshot_attributes_result: Option<DBSnapshotAttributesResult>,
}

pub type DescribeDBSnapshotAttributesResult = DBSnapshotAttributesResultWrapper;
pub type ModifyDBSnapshotAttributeResult = DBSnapshotAttributesResultWrapper;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterSnapshotResult {
    pub db_cluster_snapshot: Option<DBClusterSnapshot>,
}

pub type CreateDBClusterSnapshotResult = DBClusterSnapshotResult;
pub type CopyDBClusterSnapshotResult = DBClusterSnapshotResult;
pub type DeleteDBClusterSnapshotResult = DBClusterSnapshotResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBClusterSnapshotsResult {
    pub marker: Option<String>,
    pub db_cluster_snapshots: Vec<DBClusterSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterSnapshotAttributesResultWrapper {
    pub db_cluster_snapshot_attributes_result: Option<DBClusterSnapshotAttributesResult>,
}

pub type DescribeDBClusterSnapshotAttributesResult = DBClusterSnapshotAttributesResultWrapper;
pub type ModifyDBClusterSnapshotAttributeResult = DBClusterSnapshotAttributesResultWrapper;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryWriter, ToQuery};
    use crate::xml::{FromXml, XmlNode};

    #[test]
    fn share_snapshot_attribute_values() {
        let req = ModifyDBSnapshotAttributeRequest::new("snap", "restore")
            .values_to_add(vec!["123456789012".to_string(), "all".to_string()]);
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        assert_eq!(w.get("AttributeName"), Some("restore"));
        assert_eq!(w.get("ValuesToAdd.AttributeValue.1"), Some("123456789012"));
        assert_eq!(w.get("ValuesToAdd.AttributeValue.2"), Some("all"));
        assert!(!w.contains("ValuesToRemove.AttributeValue.1"));
    }

    #[test]
    fn snapshot_attributes_from_xml() {
        let xml = r#"<ModifyDBSnapshotAttributeResult>
            <DBSnapshotAttributesResult>
              <DBSnapshotIdentifier>snap</DBSnapshotIdentifier>
              <DBSnapshotAttributes>
                <DBSnapshotAttribute>
                  <AttributeName>restore</AttributeName>
                  <AttributeValues><AttributeValue>123456789012</AttributeValue></AttributeValues>
                </DBSnapshotAttribute>
              </DBSnapshotAttributes>
            </DBSnapshotAttributesResult>
          </ModifyDBSnapshotAttributeResult>"#;
        let r = ModifyDBSnapshotAttributeResult::from_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        let a = r.db_snapshot_attributes_result.unwrap();
        assert_eq!(a.db_snapshot_identifier, "snap");
        assert_eq!(a.db_snapshot_attributes[0].attribute_values, vec!["123456789012"]);
    }
}
