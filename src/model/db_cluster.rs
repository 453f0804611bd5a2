//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Aurora DB clusters, their custom endpoints, backtracks and activity streams.

use chrono::{DateTime, Utc};
use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{
    CloudwatchLogsExportConfiguration, DomainMembership, Filter, Tag, VpcSecurityGroupMembership,
};

/// A DB cluster, as returned by `DescribeDBClusters` and the cluster lifecycle
/// operations.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBCluster {
    pub allocated_storage: Option<i32>,
    pub availability_zones: Vec<String>,
    pub backup_retention_period: Option<i32>,
    pub character_set_name: String,
    pub database_name: String,
    pub db_cluster_identifier: String,
    pub db_cluster_parameter_group: String,
    pub db_subnet_group: String,
    /// The current state, such as `available`, `creating` or `backtracking`.
    pub status: String,
    pub percent_progress: String,
    pub earliest_restorable_time: Option<DateTime<Utc>>,
    /// The writer endpoint of the cluster.
    pub endpoint: String,
    pub reader_endpoint: String,
    pub custom_endpoints: Vec<String>,
    pub multi_az: bool,
    pub engine: String,
    pub engine_version: String,
    pub latest_restorable_time: Option<DateTime<Utc>>,
    pub port: Option<i32>,
    pub master_username: String,
    pub db_cluster_option_group_memberships: Vec<DBClusterOptionGroupStatus>,
    pub preferred_backup_window: String,
    pub preferred_maintenance_window: String,
    pub replication_source_identifier: String,
    pub read_replica_identifiers: Vec<String>,
    pub db_cluster_members: Vec<DBClusterMember>,
    pub vpc_security_groups: Vec<VpcSecurityGroupMembership>,
    pub hosted_zone_id: String,
    pub storage_encrypted: bool,
    pub kms_key_id: String,
    #[rds(rename = "DbClusterResourceId")]
    pub db_cluster_resource_id: String,
    pub db_cluster_arn: String,
    pub associated_roles: Vec<DBClusterRole>,
    pub iam_database_authentication_enabled: bool,
    pub clone_group_id: String,
    pub cluster_create_time: Option<DateTime<Utc>>,
    pub earliest_backtrack_time: Option<DateTime<Utc>>,
    pub backtrack_window: Option<i64>,
    pub backtrack_consumed_change_records: Option<i64>,
    pub enabled_cloudwatch_logs_exports: Vec<String>,
    pub capacity: Option<i32>,
    pub engine_mode: String,
    pub scaling_configuration_info: Option<ScalingConfigurationInfo>,
    pub deletion_protection: bool,
    pub http_endpoint_enabled: bool,
    pub activity_stream_mode: String,
    pub activity_stream_status: String,
    pub activity_stream_kms_key_id: String,
    pub activity_stream_kinesis_stream_name: String,
    pub copy_tags_to_snapshot: bool,
    pub cross_account_clone: bool,
    pub domain_memberships: Vec<DomainMembership>,
    pub global_write_forwarding_status: String,
    pub global_write_forwarding_requested: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterMember {
    pub db_instance_identifier: String,
    pub is_cluster_writer: bool,
    pub db_cluster_parameter_group_status: String,
    pub promotion_tier: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterOptionGroupStatus {
    pub db_cluster_option_group_name: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterRole {
    pub role_arn: String,
    pub status: String,
    pub feature_name: String,
}

/// Scaling properties of an Aurora Serverless cluster.
#[derive(Debug, Clone, Default, PartialEq, ToQuery)]
pub struct ScalingConfiguration {
    pub min_capacity: Option<i32>,
    pub max_capacity: Option<i32>,
    pub auto_pause: Option<bool>,
    pub seconds_until_auto_pause: Option<i32>,
    /// `ForceApplyCapacityChange` or `RollbackCapacityChange`.
    pub timeout_action: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ScalingConfigurationInfo {
    pub min_capacity: Option<i32>,
    pub max_capacity: Option<i32>,
    pub auto_pause: Option<bool>,
    pub seconds_until_auto_pause: Option<i32>,
    pub timeout_action: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterBacktrack {
    pub db_cluster_identifier: String,
    pub backtrack_identifier: String,
    pub backtrack_to: Option<DateTime<Utc>>,
    pub backtracked_from: Option<DateTime<Utc>>,
    pub backtrack_request_creation_time: Option<DateTime<Utc>>,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterEndpoint {
    pub db_cluster_endpoint_identifier: String,
    pub db_cluster_identifier: String,
    pub db_cluster_endpoint_resource_identifier: String,
    pub endpoint: String,
    pub status: String,
    pub endpoint_type: String,
    pub custom_endpoint_type: String,
    pub static_members: Vec<String>,
    pub excluded_members: Vec<String>,
    pub db_cluster_endpoint_arn: String,
}

// Requests

/// Create a DB cluster.
///
/// For a cross-region read replica cluster, set `replication_source_identifier`
/// to the source cluster ARN and [`source_region`](CreateDBClusterRequest::source_region)
/// to its region.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBClusterRequest {
    #[rds(member = "AvailabilityZone")]
    pub availability_zones: Vec<String>,
    pub backup_retention_period: Option<i32>,
    pub character_set_name: String,
    pub database_name: String,
    pub db_cluster_identifier: String,
    pub db_cluster_parameter_group_name: String,
    #[rds(member = "VpcSecurityGroupId")]
    pub vpc_security_group_ids: Vec<String>,
    pub db_subnet_group_name: String,
    pub engine: String,
    pub engine_version: String,
    pub port: Option<i32>,
    pub master_username: String,
    pub master_user_password: String,
    pub option_group_name: String,
    pub preferred_backup_window: String,
    pub preferred_maintenance_window: String,
    pub replication_source_identifier: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
    pub storage_encrypted: Option<bool>,
    pub kms_key_id: String,
    pub pre_signed_url: Option<String>,
    pub enable_iam_database_authentication: Option<bool>,
    pub backtrack_window: Option<i64>,
    pub enable_cloudwatch_logs_exports: Vec<String>,
    pub engine_mode: String,
    pub scaling_configuration: Option<ScalingConfiguration>,
    pub deletion_protection: Option<bool>,
    pub global_cluster_identifier: String,
    pub enable_http_endpoint: Option<bool>,
    pub copy_tags_to_snapshot: Option<bool>,
    pub domain: String,
    pub domain_iam_role_name: String,
    /// The region of the replication source cluster.
    #[rds(skip)]
    pub source_region: Option<String>,
}

impl CreateDBClusterRequest {
    pub fn new(db_cluster_identifier: &str, engine: &str) -> CreateDBClusterRequest {
        CreateDBClusterRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            engine: engine.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBClusterRequest {
    pub db_cluster_identifier: String,
    pub skip_final_snapshot: Option<bool>,
    pub final_db_snapshot_identifier: String,
}

impl DeleteDBClusterRequest {
    pub fn new(db_cluster_identifier: &str) -> DeleteDBClusterRequest {
        DeleteDBClusterRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBClustersRequest {
    pub db_cluster_identifier: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
    pub include_shared: Option<bool>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBClusterRequest {
    pub db_cluster_identifier: String,
    pub new_db_cluster_identifier: String,
    pub apply_immediately: Option<bool>,
    pub backup_retention_period: Option<i32>,
    pub db_cluster_parameter_group_name: String,
    #[rds(member = "VpcSecurityGroupId")]
    pub vpc_security_group_ids: Vec<String>,
    pub port: Option<i32>,
    pub master_user_password: String,
    pub option_group_name: String,
    pub preferred_backup_window: String,
    pub preferred_maintenance_window: String,
    pub enable_iam_database_authentication: Option<bool>,
    pub backtrack_window: Option<i64>,
    pub cloudwatch_logs_export_configuration: Option<CloudwatchLogsExportConfiguration>,
    pub engine_version: String,
    pub allow_major_version_upgrade: Option<bool>,
    pub db_instance_parameter_group_name: String,
    pub domain: String,
    pub domain_iam_role_name: String,
    pub scaling_configuration: Option<ScalingConfiguration>,
    pub deletion_protection: Option<bool>,
    pub enable_http_endpoint: Option<bool>,
    pub copy_tags_to_snapshot: Option<bool>,
}

impl ModifyDBClusterRequest {
    pub fn new(db_cluster_identifier: &str) -> ModifyDBClusterRequest {
        ModifyDBClusterRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct StartDBClusterRequest {
    pub db_cluster_identifier: String,
}

impl StartDBClusterRequest {
    pub fn new(db_cluster_identifier: &str) -> StartDBClusterRequest {
        StartDBClusterRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct StopDBClusterRequest {
    pub db_cluster_identifier: String,
}

impl StopDBClusterRequest {
    pub fn new(db_cluster_identifier: &str) -> StopDBClusterRequest {
        StopDBClusterRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct FailoverDBClusterRequest {
    pub db_cluster_identifier: String,
    /// The replica to promote; the service picks one if unset.
    pub target_db_instance_identifier: String,
}

impl FailoverDBClusterRequest {
    pub fn new(db_cluster_identifier: &str) -> FailoverDBClusterRequest {
        FailoverDBClusterRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct BacktrackDBClusterRequest {
    pub db_cluster_identifier: String,
    pub backtrack_to: Option<DateTime<Utc>>,
    pub force: Option<bool>,
    pub use_earliest_time_on_point_in_time_unavailable: Option<bool>,
}

impl BacktrackDBClusterRequest {
    pub fn new(db_cluster_identifier: &str, backtrack_to: DateTime<Utc>) -> Self {
        BacktrackDBClusterRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            backtrack_to: Some(backtrack_to),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBClusterBacktracksRequest {
    pub db_cluster_identifier: String,
    pub backtrack_identifier: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

impl DescribeDBClusterBacktracksRequest {
    pub fn new(db_cluster_identifier: &str) -> Self {
        DescribeDBClusterBacktracksRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct PromoteReadReplicaDBClusterRequest {
    pub db_cluster_identifier: String,
}

impl PromoteReadReplicaDBClusterRequest {
    pub fn new(db_cluster_identifier: &str) -> Self {
        PromoteReadReplicaDBClusterRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct RestoreDBClusterFromSnapshotRequest {
    #[rds(member = "AvailabilityZone")]
    pub availability_zones: Vec<String>,
    pub db_cluster_identifier: String,
    pub snapshot_identifier: String,
    pub engine: String,
    pub engine_version: String,
    pub port: Option<i32>,
    pub db_subnet_group_name: String,
    pub database_name: String,
    pub option_group_name: String,
    #[rds(member = "VpcSecurityGroupId")]
    pub vpc_security_group_ids: Vec<String>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
    pub kms_key_id: String,
    pub enable_iam_database_authentication: Option<bool>,
    pub backtrack_window: Option<i64>,
    pub enable_cloudwatch_logs_exports: Vec<String>,
    pub engine_mode: String,
    pub scaling_configuration: Option<ScalingConfiguration>,
    pub db_cluster_parameter_group_name: String,
    pub deletion_protection: Option<bool>,
    pub copy_tags_to_snapshot: Option<bool>,
    pub domain: String,
    pub domain_iam_role_name: String,
}

impl RestoreDBClusterFromSnapshotRequest {
    pub fn new(db_cluster_identifier: &str, snapshot_identifier: &str, engine: &str) -> Self {
        RestoreDBClusterFromSnapshotRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            snapshot_identifier: snapshot_identifier.to_string(),
            engine: engine.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct RestoreDBClusterToPointInTimeRequest {
    pub db_cluster_identifier: String,
    /// `full-copy` (default) or `copy-on-write`.
    pub restore_type: String,
    pub source_db_cluster_identifier: String,
    pub restore_to_time: Option<DateTime<Utc>>,
    pub use_latest_restorable_time: Option<bool>,
    pub port: Option<i32>,
    pub db_subnet_group_name: String,
    pub option_group_name: String,
    #[rds(member = "VpcSecurityGroupId")]
    pub vpc_security_group_ids: Vec<String>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
    pub kms_key_id: String,
    pub enable_iam_database_authentication: Option<bool>,
    pub backtrack_window: Option<i64>,
    pub enable_cloudwatch_logs_exports: Vec<String>,
    pub db_cluster_parameter_group_name: String,
    pub deletion_protection: Option<bool>,
    pub copy_tags_to_snapshot: Option<bool>,
    pub domain: String,
    pub domain_iam_role_name: String,
}

impl RestoreDBClusterToPointInTimeRequest {
    pub fn new(db_cluster_identifier: &str, source_db_cluster_identifier: &str) -> Self {
        RestoreDBClusterToPointInTimeRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            source_db_cluster_identifier: source_db_cluster_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct AddRoleToDBClusterRequest {
    pub db_cluster_identifier: String,
    pub role_arn: String,
    pub feature_name: String,
}

impl AddRoleToDBClusterRequest {
    pub fn new(db_cluster_identifier: &str, role_arn: &str) -> Self {
        AddRoleToDBClusterRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            role_arn: role_arn.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct RemoveRoleFromDBClusterRequest {
    pub db_cluster_identifier: String,
    pub role_arn: String,
    pub feature_name: String,
}

impl RemoveRoleFromDBClusterRequest {
    pub fn new(db_cluster_identifier: &str, role_arn: &str) -> Self {
        RemoveRoleFromDBClusterRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            role_arn: role_arn.to_string(),
            ..Default::default()
        }
    }
}

/// Set the capacity of an Aurora Serverless cluster.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyCurrentDBClusterCapacityRequest {
    pub db_cluster_identifier: String,
    pub capacity: Option<i32>,
    pub seconds_before_timeout: Option<i32>,
    pub timeout_action: String,
}

impl ModifyCurrentDBClusterCapacityRequest {
    pub fn new(db_cluster_identifier: &str) -> Self {
        ModifyCurrentDBClusterCapacityRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBClusterEndpointRequest {
    pub db_cluster_identifier: String,
    pub db_cluster_endpoint_identifier: String,
    /// `READER`, `WRITER` or `ANY`.
    pub endpoint_type: String,
    pub static_members: Vec<String>,
    pub excluded_members: Vec<String>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CreateDBClusterEndpointRequest {
    pub fn new(
        db_cluster_identifier: &str,
        db_cluster_endpoint_identifier: &str,
        endpoint_type: &str,
    ) -> Self {
        CreateDBClusterEndpointRequest {
            db_cluster_identifier: db_cluster_identifier.to_string(),
            db_cluster_endpoint_identifier: db_cluster_endpoint_identifier.to_string(),
            endpoint_type: endpoint_type.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBClusterEndpointRequest {
    pub db_cluster_endpoint_identifier: String,
}

impl DeleteDBClusterEndpointRequest {
    pub fn new(db_cluster_endpoint_identifier: &str) -> Self {
        DeleteDBClusterEndpointRequest {
            db_cluster_endpoint_identifier: db_cluster_endpoint_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBClusterEndpointsRequest {
    pub db_cluster_identifier: String,
    pub db_cluster_endpoint_identifier: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBClusterEndpointRequest {
    pub db_cluster_endpoint_identifier: String,
    pub endpoint_type: String,
    pub static_members: Vec<String>,
    pub excluded_members: Vec<String>,
}

impl ModifyDBClusterEndpointRequest {
    pub fn new(db_cluster_endpoint_identifier: &str) -> Self {
        ModifyDBClusterEndpointRequest {
            db_cluster_endpoint_identifier: db_cluster_endpoint_identifier.to_string(),
            ..Default::default()
        }
    }
}

/// Start a database activity stream for a cluster, streaming to Kinesis.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct StartActivityStreamRequest {
    pub resource_arn: String,
    /// `sync` or `async`.
    pub mode: String,
    pub kms_key_id: String,
    pub apply_immediately: Option<bool>,
}

impl StartActivityStreamRequest {
    pub fn new(resource_arn: &str, mode: &str, kms_key_id: &str) -> Self {
        StartActivityStreamRequest {
            resource_arn: resource_arn.to_string(),
            mode: mode.to_string(),
            kms_key_id: kms_key_id.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct StopActivityStreamRequest {
    pub resource_arn: String,
    pub apply_immediately: Option<bool>,
}

impl StopActivityStreamRequest {
    pub fn new(resource_arn: &str) -> Self {
        StopActivityStreamRequest {
            resource_arn: resource_arn.to_string(),
            ..Default::default()
        }
    }
}

// Results

/// Result of every operation returning a single `DBCluster` element.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterResult {
    pub db_cluster: Option<DBCluster>,
}

pub type CreateDBClusterResult = DBClusterResult;
pub type DeleteDBClusterResult = DBClusterResult;
pub type ModifyDBClusterResult = DBClusterResult;
pub type StartDBClusterResult = DBClusterResult;
pub type StopDBClusterResult = DBClusterResult;
pub type FailoverDBClusterResult = DBClusterResult;
pub type PromoteReadReplicaDBClusterResult = DBClusterResult;
pub type RestoreDBClusterFromSnapshotResult = DBClusterResult;
pub type RestoreDBClusterToPointInTimeResult = DBClusterResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBClustersResult {
    pub marker: Option<String>,
    pub db_clusters: Vec<DBCluster>,
}

/// The backtrack is returned inline in `BacktrackDBClusterResult`.
pub type BacktrackDBClusterResult = DBClusterBacktrack;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBClusterBacktracksResult {
    pub marker: Option<String>,
    pub db_cluster_backtracks: Vec<DBClusterBacktrack>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ModifyCurrentDBClusterCapacityResult {
    pub db_cluster_identifier: String,
    pub pending_capacity: Option<i32>,
    pub current_capacity: Option<i32>,
    pub seconds_before_timeout: Option<i32>,
    pub timeout_action: String,
}

pub type CreateDBClusterEndpointResult = DBClusterEndpoint;
pub type DeleteDBClusterEndpointResult = DBClusterEndpoint;
pub type ModifyDBClusterEndpointResult = DBClusterEndpoint;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBClusterEndpointsResult {
    pub marker: Option<String>,
    pub db_cluster_endpoints: Vec<DBClusterEndpoint>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct StartActivityStreamResult {
    pub kms_key_id: String,
    pub kinesis_stream_name: String,
    pub status: String,
    pub mode: String,
    pub apply_immediately: bool,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct StopActivityStreamResult {
    pub kms_key_id: String,
    pub kinesis_stream_name: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryWriter, ToQuery};
    use crate::xml::{FromXml, XmlNode};

    #[test]
    fn create_cluster_with_scaling_configuration() {
        let req = CreateDBClusterRequest::new("c1", "aurora-postgresql")
            .engine_mode("serverless")
            .availability_zones(vec!["us-east-1a".to_string(), "us-east-1b".to_string()])
            .scaling_configuration(ScalingConfiguration {
                min_capacity: Some(2),
                max_capacity: Some(8),
                auto_pause: Some(true),
                ..Default::default()
            })
            .backtrack_window(3600i64);
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        assert_eq!(w.get("DBClusterIdentifier"), Some("c1"));
        assert_eq!(w.get("AvailabilityZones.AvailabilityZone.2"), Some("us-east-1b"));
        assert_eq!(w.get("ScalingConfiguration.MinCapacity"), Some("2"));
        assert_eq!(w.get("ScalingConfiguration.AutoPause"), Some("true"));
        assert!(!w.contains("ScalingConfiguration.TimeoutAction"));
        assert_eq!(w.get("BacktrackWindow"), Some("3600"));
    }

    #[test]
    fn backtrack_time_is_sent_in_utc_millis() {
        use chrono::TimeZone;
        let t = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        let mut w = QueryWriter::default();
        BacktrackDBClusterRequest::new("c1", t).to_query(&mut w, "");
        assert_eq!(w.get("BacktrackTo"), Some("2021-03-04T05:06:07.000Z"));
    }

    #[test]
    fn cluster_members_from_xml() {
        let xml = r#"<DBCluster>
            <DBClusterIdentifier>c1</DBClusterIdentifier>
            <Status>available</Status>
            <DbClusterResourceId>cluster-ABC</DbClusterResourceId>
            <DBClusterMembers>
              <DBClusterMember><DBInstanceIdentifier>i1</DBInstanceIdentifier><IsClusterWriter>true</IsClusterWriter></DBClusterMember>
              <DBClusterMember><DBInstanceIdentifier>i2</DBInstanceIdentifier><IsClusterWriter>false</IsClusterWriter><PromotionTier>1</PromotionTier></DBClusterMember>
            </DBClusterMembers>
            <ScalingConfigurationInfo><MinCapacity>2</MinCapacity><TimeoutAction>RollbackCapacityChange</TimeoutAction></ScalingConfigurationInfo>
          </DBCluster>"#;
        let c = DBCluster::from_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        assert_eq!(c.status, "available");
        assert_eq!(c.db_cluster_resource_id, "cluster-ABC");
        assert_eq!(c.db_cluster_members.len(), 2);
        assert!(c.db_cluster_members[0].is_cluster_writer);
        assert_eq!(c.db_cluster_members[1].promotion_tier, Some(1));
        let s = c.scaling_configuration_info.unwrap();
        assert_eq!(s.min_capacity, Some(2));
        assert_eq!(s.timeout_action, "RollbackCapacityChange");
    }
}
