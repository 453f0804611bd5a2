//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! DB instances, their automated backups, log files and the engine catalog.

use chrono::{DateTime, Utc};
use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{
    AvailabilityZone, CloudwatchLogsExportConfiguration, DBSecurityGroupMembership,
    DomainMembership, DoubleRange, Endpoint, Filter, PendingCloudwatchLogsExports,
    ProcessorFeature, Range, Tag, VpcSecurityGroupMembership,
};
use crate::model::subnet_group::DBSubnetGroup;

/// A DB instance, as returned by `DescribeDBInstances` and the instance
/// lifecycle operations.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBInstance {
    pub db_instance_identifier: String,
    pub db_instance_class: String,
    pub engine: String,
    /// The current state, such as `available`, `creating`, `deleting` or `stopped`.
    pub db_instance_status: String,
    pub master_username: String,
    pub db_name: String,
    pub endpoint: Option<Endpoint>,
    pub allocated_storage: i32,
    pub instance_create_time: Option<DateTime<Utc>>,
    pub preferred_backup_window: String,
    pub backup_retention_period: i32,
    pub db_security_groups: Vec<DBSecurityGroupMembership>,
    pub vpc_security_groups: Vec<VpcSecurityGroupMembership>,
    pub db_parameter_groups: Vec<DBParameterGroupStatus>,
    pub availability_zone: String,
    pub db_subnet_group: Option<DBSubnetGroup>,
    pub preferred_maintenance_window: String,
    pub pending_modified_values: Option<PendingModifiedValues>,
    pub latest_restorable_time: Option<DateTime<Utc>>,
    pub multi_az: bool,
    pub engine_version: String,
    pub auto_minor_version_upgrade: bool,
    pub read_replica_source_db_instance_identifier: String,
    pub read_replica_db_instance_identifiers: Vec<String>,
    pub read_replica_db_cluster_identifiers: Vec<String>,
    pub license_model: String,
    pub iops: Option<i32>,
    pub option_group_memberships: Vec<OptionGroupMembership>,
    pub character_set_name: String,
    pub secondary_availability_zone: String,
    pub publicly_accessible: bool,
    pub status_infos: Vec<DBInstanceStatusInfo>,
    pub storage_type: String,
    pub tde_credential_arn: String,
    #[rds(rename = "DbInstancePort")]
    pub db_instance_port: i32,
    pub db_cluster_identifier: String,
    pub storage_encrypted: bool,
    pub kms_key_id: String,
    pub dbi_resource_id: String,
    pub ca_certificate_identifier: String,
    pub domain_memberships: Vec<DomainMembership>,
    pub copy_tags_to_snapshot: bool,
    pub monitoring_interval: Option<i32>,
    pub enhanced_monitoring_resource_arn: String,
    pub monitoring_role_arn: String,
    pub promotion_tier: Option<i32>,
    pub db_instance_arn: String,
    pub timezone: String,
    pub iam_database_authentication_enabled: bool,
    pub performance_insights_enabled: Option<bool>,
    #[rds(rename = "PerformanceInsightsKMSKeyId")]
    pub performance_insights_kms_key_id: String,
    pub performance_insights_retention_period: Option<i32>,
    pub enabled_cloudwatch_logs_exports: Vec<String>,
    pub processor_features: Vec<ProcessorFeature>,
    pub deletion_protection: bool,
    pub associated_roles: Vec<DBInstanceRole>,
    pub listener_endpoint: Option<Endpoint>,
    pub max_allocated_storage: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBParameterGroupStatus {
    pub db_parameter_group_name: String,
    pub parameter_apply_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct OptionGroupMembership {
    pub option_group_name: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBInstanceStatusInfo {
    pub status_type: String,
    pub normal: bool,
    pub status: String,
    pub message: String,
}

/// An IAM role associated with a DB instance for a feature such as `s3Import`.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBInstanceRole {
    pub role_arn: String,
    pub feature_name: String,
    pub status: String,
}

/// Changes that are pending and will be applied in the next maintenance window.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct PendingModifiedValues {
    pub db_instance_class: Option<String>,
    pub allocated_storage: Option<i32>,
    pub master_user_password: Option<String>,
    pub port: Option<i32>,
    pub backup_retention_period: Option<i32>,
    pub multi_az: Option<bool>,
    pub engine_version: Option<String>,
    pub license_model: Option<String>,
    pub iops: Option<i32>,
    pub db_instance_identifier: Option<String>,
    pub storage_type: Option<String>,
    pub ca_certificate_identifier: Option<String>,
    pub db_subnet_group_name: Option<String>,
    pub pending_cloudwatch_logs_exports: Option<PendingCloudwatchLogsExports>,
    pub processor_features: Vec<ProcessorFeature>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct RestoreWindow {
    pub earliest_time: Option<DateTime<Utc>>,
    pub latest_time: Option<DateTime<Utc>>,
}

/// The retained automated backups of an instance, kept after the instance is deleted.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBInstanceAutomatedBackup {
    pub db_instance_arn: String,
    pub dbi_resource_id: String,
    pub region: String,
    pub db_instance_identifier: String,
    pub restore_window: Option<RestoreWindow>,
    pub allocated_storage: i32,
    pub status: String,
    pub port: i32,
    pub availability_zone: String,
    pub vpc_id: String,
    pub instance_create_time: Option<DateTime<Utc>>,
    pub master_username: String,
    pub engine: String,
    pub engine_version: String,
    pub license_model: String,
    pub iops: Option<i32>,
    pub option_group_name: String,
    pub tde_credential_arn: String,
    pub encrypted: bool,
    pub storage_type: String,
    pub kms_key_id: String,
    pub timezone: String,
    pub iam_database_authentication_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBLogFilesDetails {
    pub log_file_name: String,
    pub last_written: i64,
    pub size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct AvailableProcessorFeature {
    pub name: String,
    pub default_value: String,
    pub allowed_values: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ValidStorageOptions {
    pub storage_type: String,
    pub storage_size: Vec<Range>,
    pub provisioned_iops: Vec<Range>,
    pub iops_to_storage_ratio: Vec<DoubleRange>,
    pub supports_storage_autoscaling: bool,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ValidDBInstanceModificationsMessage {
    pub storage: Vec<ValidStorageOptions>,
    pub valid_processor_features: Vec<AvailableProcessorFeature>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct OrderableDBInstanceOption {
    pub engine: String,
    pub engine_version: String,
    pub db_instance_class: String,
    pub license_model: String,
    pub availability_zones: Vec<AvailabilityZone>,
    pub multi_az_capable: bool,
    pub read_replica_capable: bool,
    pub vpc: bool,
    pub supports_storage_encryption: bool,
    pub storage_type: String,
    pub supports_iops: bool,
    pub supports_enhanced_monitoring: bool,
    pub supports_iam_database_authentication: bool,
    pub supports_performance_insights: bool,
    pub min_storage_size: Option<i32>,
    pub max_storage_size: Option<i32>,
    #[rds(rename = "MinIopsPerDbInstance")]
    pub min_iops_per_db_instance: Option<i32>,
    #[rds(rename = "MaxIopsPerDbInstance")]
    pub max_iops_per_db_instance: Option<i32>,
    pub min_iops_per_gib: Option<f64>,
    pub max_iops_per_gib: Option<f64>,
    pub available_processor_features: Vec<AvailableProcessorFeature>,
    pub supported_engine_modes: Vec<String>,
    pub supports_storage_autoscaling: bool,
    pub supports_kerberos_authentication: bool,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct CharacterSet {
    pub character_set_name: String,
    pub character_set_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct UpgradeTarget {
    pub engine: String,
    pub engine_version: String,
    pub description: String,
    pub auto_upgrade: bool,
    pub is_major_version_upgrade: bool,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct Timezone {
    pub timezone_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBEngineVersion {
    pub engine: String,
    pub engine_version: String,
    pub db_parameter_group_family: String,
    pub db_engine_description: String,
    pub db_engine_version_description: String,
    pub default_character_set: Option<CharacterSet>,
    pub supported_character_sets: Vec<CharacterSet>,
    pub valid_upgrade_target: Vec<UpgradeTarget>,
    pub supported_timezones: Vec<Timezone>,
    pub exportable_log_types: Vec<String>,
    pub supports_log_exports_to_cloudwatch_logs: bool,
    pub supports_read_replica: bool,
    pub supported_engine_modes: Vec<String>,
    pub supported_feature_names: Vec<String>,
    pub status: String,
}

// Requests

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBInstanceRequest {
    pub db_name: String,
    pub db_instance_identifier: String,
    pub allocated_storage: Option<i32>,
    pub db_instance_class: String,
    pub engine: String,
    pub master_username: String,
    pub master_user_password: String,
    #[rds(member = "DBSecurityGroupName")]
    pub db_security_groups: Vec<String>,
    #[rds(member = "VpcSecurityGroupId")]
    pub vpc_security_group_ids: Vec<String>,
    pub availability_zone: String,
    pub db_subnet_group_name: String,
    pub preferred_maintenance_window: String,
    pub db_parameter_group_name: String,
    pub backup_retention_period: Option<i32>,
    pub preferred_backup_window: String,
    pub port: Option<i32>,
    pub multi_az: Option<bool>,
    pub engine_version: String,
    pub auto_minor_version_upgrade: Option<bool>,
    pub license_model: String,
    pub iops: Option<i32>,
    pub option_group_name: String,
    pub character_set_name: String,
    pub publicly_accessible: Option<bool>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
    pub db_cluster_identifier: String,
    pub storage_type: String,
    pub tde_credential_arn: String,
    pub tde_credential_password: String,
    pub storage_encrypted: Option<bool>,
    pub kms_key_id: String,
    pub domain: String,
    pub copy_tags_to_snapshot: Option<bool>,
    pub monitoring_interval: Option<i32>,
    pub monitoring_role_arn: String,
    pub domain_iam_role_name: String,
    pub promotion_tier: Option<i32>,
    pub timezone: String,
    pub enable_iam_database_authentication: Option<bool>,
    pub enable_performance_insights: Option<bool>,
    #[rds(rename = "PerformanceInsightsKMSKeyId")]
    pub performance_insights_kms_key_id: String,
    pub performance_insights_retention_period: Option<i32>,
    pub enable_cloudwatch_logs_exports: Vec<String>,
    #[rds(member = "ProcessorFeature")]
    pub processor_features: Vec<ProcessorFeature>,
    pub deletion_protection: Option<bool>,
    pub max_allocated_storage: Option<i32>,
}

impl CreateDBInstanceRequest {
    pub fn new(
        db_instance_identifier: &str,
        db_instance_class: &str,
        engine: &str,
    ) -> CreateDBInstanceRequest {
        CreateDBInstanceRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            db_instance_class: db_instance_class.to_string(),
            engine: engine.to_string(),
            ..Default::default()
        }
    }
}

/// Create a read replica of a source instance.
///
/// To create the replica in another region, issue the request against the
/// destination region with the source instance ARN and set
/// [`source_region`](CreateDBInstanceReadReplicaRequest::source_region): the
/// client then generates `PreSignedUrl` and `DestinationRegion`.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBInstanceReadReplicaRequest {
    pub db_instance_identifier: String,
    pub source_db_instance_identifier: String,
    pub db_instance_class: String,
    pub availability_zone: String,
    pub port: Option<i32>,
    pub multi_az: Option<bool>,
    pub auto_minor_version_upgrade: Option<bool>,
    pub iops: Option<i32>,
    pub option_group_name: String,
    pub db_parameter_group_name: String,
    pub publicly_accessible: Option<bool>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
    pub db_subnet_group_name: String,
    #[rds(member = "VpcSecurityGroupId")]
    pub vpc_security_group_ids: Vec<String>,
    pub storage_type: String,
    pub copy_tags_to_snapshot: Option<bool>,
    pub monitoring_interval: Option<i32>,
    pub monitoring_role_arn: String,
    pub kms_key_id: String,
    pub pre_signed_url: Option<String>,
    pub enable_iam_database_authentication: Option<bool>,
    pub enable_performance_insights: Option<bool>,
    #[rds(rename = "PerformanceInsightsKMSKeyId")]
    pub performance_insights_kms_key_id: String,
    pub performance_insights_retention_period: Option<i32>,
    pub enable_cloudwatch_logs_exports: Vec<String>,
    #[rds(member = "ProcessorFeature")]
    pub processor_features: Vec<ProcessorFeature>,
    pub use_default_processor_features: Option<bool>,
    pub deletion_protection: Option<bool>,
    pub domain: String,
    pub domain_iam_role_name: String,
    /// The region of the source instance.
    #[rds(skip)]
    pub source_region: Option<String>,
}

impl CreateDBInstanceReadReplicaRequest {
    pub fn new(
        db_instance_identifier: &str,
        source_db_instance_identifier: &str,
    ) -> CreateDBInstanceReadReplicaRequest {
        CreateDBInstanceReadReplicaRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            source_db_instance_identifier: source_db_instance_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBInstanceRequest {
    pub db_instance_identifier: String,
    pub skip_final_snapshot: Option<bool>,
    pub final_db_snapshot_identifier: String,
    pub delete_automated_backups: Option<bool>,
}

impl DeleteDBInstanceRequest {
    pub fn new(db_instance_identifier: &str) -> DeleteDBInstanceRequest {
        DeleteDBInstanceRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBInstancesRequest {
    pub db_instance_identifier: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

impl DescribeDBInstancesRequest {
    pub fn new() -> DescribeDBInstancesRequest {
        DescribeDBInstancesRequest::default()
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBInstanceRequest {
    pub db_instance_identifier: String,
    pub allocated_storage: Option<i32>,
    pub db_instance_class: String,
    pub db_subnet_group_name: String,
    #[rds(member = "DBSecurityGroupName")]
    pub db_security_groups: Vec<String>,
    #[rds(member = "VpcSecurityGroupId")]
    pub vpc_security_group_ids: Vec<String>,
    pub apply_immediately: Option<bool>,
    pub master_user_password: String,
    pub db_parameter_group_name: String,
    pub backup_retention_period: Option<i32>,
    pub preferred_backup_window: String,
    pub preferred_maintenance_window: String,
    pub multi_az: Option<bool>,
    pub engine_version: String,
    pub allow_major_version_upgrade: Option<bool>,
    pub auto_minor_version_upgrade: Option<bool>,
    pub license_model: String,
    pub iops: Option<i32>,
    pub option_group_name: String,
    pub new_db_instance_identifier: String,
    pub storage_type: String,
    pub tde_credential_arn: String,
    pub tde_credential_password: String,
    pub ca_certificate_identifier: String,
    pub domain: String,
    pub copy_tags_to_snapshot: Option<bool>,
    pub monitoring_interval: Option<i32>,
    pub db_port_number: Option<i32>,
    pub publicly_accessible: Option<bool>,
    pub monitoring_role_arn: String,
    pub domain_iam_role_name: String,
    pub promotion_tier: Option<i32>,
    pub enable_iam_database_authentication: Option<bool>,
    pub enable_performance_insights: Option<bool>,
    #[rds(rename = "PerformanceInsightsKMSKeyId")]
    pub performance_insights_kms_key_id: String,
    pub performance_insights_retention_period: Option<i32>,
    pub cloudwatch_logs_export_configuration: Option<CloudwatchLogsExportConfiguration>,
    #[rds(member = "ProcessorFeature")]
    pub processor_features: Vec<ProcessorFeature>,
    pub use_default_processor_features: Option<bool>,
    pub deletion_protection: Option<bool>,
    pub max_allocated_storage: Option<i32>,
    pub certificate_rotation_restart: Option<bool>,
}

impl ModifyDBInstanceRequest {
    pub fn new(db_instance_identifier: &str) -> ModifyDBInstanceRequest {
        ModifyDBInstanceRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct RebootDBInstanceRequest {
    pub db_instance_identifier: String,
    pub force_failover: Option<bool>,
}

impl RebootDBInstanceRequest {
    pub fn new(db_instance_identifier: &str) -> RebootDBInstanceRequest {
        RebootDBInstanceRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct StartDBInstanceRequest {
    pub db_instance_identifier: String,
}

impl StartDBInstanceRequest {
    pub fn new(db_instance_identifier: &str) -> StartDBInstanceRequest {
        StartDBInstanceRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct StopDBInstanceRequest {
    pub db_instance_identifier: String,
    /// Take a snapshot with this identifier before stopping.
    pub db_snapshot_identifier: String,
}

impl StopDBInstanceRequest {
    pub fn new(db_instance_identifier: &str) -> StopDBInstanceRequest {
        StopDBInstanceRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct PromoteReadReplicaRequest {
    pub db_instance_identifier: String,
    pub backup_retention_period: Option<i32>,
    pub preferred_backup_window: String,
}

impl PromoteReadReplicaRequest {
    pub fn new(db_instance_identifier: &str) -> PromoteReadReplicaRequest {
        PromoteReadReplicaRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct RestoreDBInstanceFromDBSnapshotRequest {
    pub db_instance_identifier: String,
    pub db_snapshot_identifier: String,
    pub db_instance_class: String,
    pub port: Option<i32>,
    pub availability_zone: String,
    pub db_subnet_group_name: String,
    pub multi_az: Option<bool>,
    pub publicly_accessible: Option<bool>,
    pub auto_minor_version_upgrade: Option<bool>,
    pub license_model: String,
    pub db_name: String,
    pub engine: String,
    pub iops: Option<i32>,
    pub option_group_name: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
    pub storage_type: String,
    pub tde_credential_arn: String,
    pub tde_credential_password: String,
    #[rds(member = "VpcSecurityGroupId")]
    pub vpc_security_group_ids: Vec<String>,
    pub domain: String,
    pub copy_tags_to_snapshot: Option<bool>,
    pub domain_iam_role_name: String,
    pub enable_iam_database_authentication: Option<bool>,
    pub enable_cloudwatch_logs_exports: Vec<String>,
    #[rds(member = "ProcessorFeature")]
    pub processor_features: Vec<ProcessorFeature>,
    pub use_default_processor_features: Option<bool>,
    pub db_parameter_group_name: String,
    pub deletion_protection: Option<bool>,
}

impl RestoreDBInstanceFromDBSnapshotRequest {
    pub fn new(
        db_instance_identifier: &str,
        db_snapshot_identifier: &str,
    ) -> RestoreDBInstanceFromDBSnapshotRequest {
        RestoreDBInstanceFromDBSnapshotRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            db_snapshot_identifier: db_snapshot_identifier.to_string(),
            ..Default::default()
        }
    }
}

/// Restore an instance to a point in time, given either as
/// [`restore_time`](RestoreDBInstanceToPointInTimeRequest::restore_time) or with
/// [`use_latest_restorable_time`](RestoreDBInstanceToPointInTimeRequest::use_latest_restorable_time).
#[derive(Debug, Clone, Default, ToQuery)]
pub struct RestoreDBInstanceToPointInTimeRequest {
    pub source_db_instance_identifier: String,
    pub target_db_instance_identifier: String,
    pub restore_time: Option<DateTime<Utc>>,
    pub use_latest_restorable_time: Option<bool>,
    pub db_instance_class: String,
    pub port: Option<i32>,
    pub availability_zone: String,
    pub db_subnet_group_name: String,
    pub multi_az: Option<bool>,
    pub publicly_accessible: Option<bool>,
    pub auto_minor_version_upgrade: Option<bool>,
    pub license_model: String,
    pub db_name: String,
    pub engine: String,
    pub iops: Option<i32>,
    pub option_group_name: String,
    pub copy_tags_to_snapshot: Option<bool>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
    pub storage_type: String,
    pub tde_credential_arn: String,
    pub tde_credential_password: String,
    #[rds(member = "VpcSecurityGroupId")]
    pub vpc_security_group_ids: Vec<String>,
    pub domain: String,
    pub domain_iam_role_name: String,
    pub enable_iam_database_authentication: Option<bool>,
    pub enable_cloudwatch_logs_exports: Vec<String>,
    #[rds(member = "ProcessorFeature")]
    pub processor_features: Vec<ProcessorFeature>,
    pub use_default_processor_features: Option<bool>,
    pub db_parameter_group_name: String,
    pub deletion_protection: Option<bool>,
    pub source_dbi_resource_id: String,
    pub max_allocated_storage: Option<i32>,
}

impl RestoreDBInstanceToPointInTimeRequest {
    pub fn new(target_db_instance_identifier: &str) -> RestoreDBInstanceToPointInTimeRequest {
        RestoreDBInstanceToPointInTimeRequest {
            target_db_instance_identifier: target_db_instance_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct AddRoleToDBInstanceRequest {
    pub db_instance_identifier: String,
    pub role_arn: String,
    pub feature_name: String,
}

impl AddRoleToDBInstanceRequest {
    pub fn new(db_instance_identifier: &str, role_arn: &str, feature_name: &str) -> Self {
        AddRoleToDBInstanceRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            role_arn: role_arn.to_string(),
            feature_name: feature_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct RemoveRoleFromDBInstanceRequest {
    pub db_instance_identifier: String,
    pub role_arn: String,
    pub feature_name: String,
}

impl RemoveRoleFromDBInstanceRequest {
    pub fn new(db_instance_identifier: &str, role_arn: &str, feature_name: &str) -> Self {
        RemoveRoleFromDBInstanceRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            role_arn: role_arn.to_string(),
            feature_name: feature_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeValidDBInstanceModificationsRequest {
    pub db_instance_identifier: String,
}

impl DescribeValidDBInstanceModificationsRequest {
    pub fn new(db_instance_identifier: &str) -> Self {
        DescribeValidDBInstanceModificationsRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBInstanceAutomatedBackupsRequest {
    pub dbi_resource_id: String,
    pub db_instance_identifier: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBInstanceAutomatedBackupRequest {
    pub dbi_resource_id: String,
}

impl DeleteDBInstanceAutomatedBackupRequest {
    pub fn new(dbi_resource_id: &str) -> Self {
        DeleteDBInstanceAutomatedBackupRequest {
            dbi_resource_id: dbi_resource_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBLogFilesRequest {
    pub db_instance_identifier: String,
    pub filename_contains: String,
    /// Only files written since this POSIX timestamp, in milliseconds.
    pub file_last_written: Option<i64>,
    pub file_size: Option<i64>,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

impl DescribeDBLogFilesRequest {
    pub fn new(db_instance_identifier: &str) -> Self {
        DescribeDBLogFilesRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            ..Default::default()
        }
    }
}

/// Download a portion of a log file. Pass the returned `marker` to continue
/// while `additional_data_pending` is set.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct DownloadDBLogFilePortionRequest {
    pub db_instance_identifier: String,
    pub log_file_name: String,
    pub marker: Option<String>,
    pub number_of_lines: Option<i32>,
}

impl DownloadDBLogFilePortionRequest {
    pub fn new(db_instance_identifier: &str, log_file_name: &str) -> Self {
        DownloadDBLogFilePortionRequest {
            db_instance_identifier: db_instance_identifier.to_string(),
            log_file_name: log_file_name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeOrderableDBInstanceOptionsRequest {
    pub engine: String,
    pub engine_version: String,
    pub db_instance_class: String,
    pub license_model: String,
    pub availability_zone_group: String,
    pub vpc: Option<bool>,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

impl DescribeOrderableDBInstanceOptionsRequest {
    pub fn new(engine: &str) -> Self {
        DescribeOrderableDBInstanceOptionsRequest {
            engine: engine.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBEngineVersionsRequest {
    pub engine: String,
    pub engine_version: String,
    pub db_parameter_group_family: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
    pub default_only: Option<bool>,
    pub list_supported_character_sets: Option<bool>,
    pub list_supported_timezones: Option<bool>,
    pub include_all: Option<bool>,
}

// Results

/// Result of every operation returning a single `DBInstance` element.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBInstanceResult {
    pub db_instance: Option<DBInstance>,
}

pub type CreateDBInstanceResult = DBInstanceResult;
pub type CreateDBInstanceReadReplicaResult = DBInstanceResult;
pub type DeleteDBInstanceResult = DBInstanceResult;
pub type ModifyDBInstanceResult = DBInstanceResult;
pub type RebootDBInstanceResult = DBInstanceResult;
pub type StartDBInstanceResult = DBInstanceResult;
pub type StopDBInstanceResult = DBInstanceResult;
pub type PromoteReadReplicaResult = DBInstanceResult;
pub type RestoreDBInstanceFromDBSnapshotResult = DBInstanceResult;
pub type RestoreDBInstanceToPointInTimeResult = DBInstanceResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBInstancesResult {
    pub marker: Option<String>,
    pub db_instances: Vec<DBInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeValidDBInstanceModificationsResult {
    pub valid_db_instance_modifications_message: Option<ValidDBInstanceModificationsMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBInstanceAutomatedBackupsResult {
    pub marker: Option<String>,
    pub db_instance_automated_backups: Vec<DBInstanceAutomatedBackup>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DeleteDBInstanceAutomatedBackupResult {
    pub db_instance_automated_backup: Option<DBInstanceAutomatedBackup>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBLogFilesResult {
    pub describe_db_log_files: Vec<DescribeDBLogFilesDetails>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DownloadDBLogFilePortionResult {
    pub log_file_data: String,
    pub marker: Option<String>,
    pub additional_data_pending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeOrderableDBInstanceOptionsResult {
    pub orderable_db_instance_options: Vec<OrderableDBInstanceOption>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBEngineVersionsResult {
    pub marker: Option<String>,
    pub db_engine_versions: Vec<DBEngineVersion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryWriter, ToQuery};
    use crate::xml::{FromXml, XmlNode};

    #[test]
    fn create_instance_wire_names() {
        let req = CreateDBInstanceRequest::new("mydb", "db.t3.micro", "postgres")
            .allocated_storage(20)
            .multi_az(true)
            .master_username("admin")
            .vpc_security_group_ids(vec!["sg-1".to_string()])
            .enable_iam_database_authentication(true)
            .performance_insights_kms_key_id("key")
            .tags(vec![Tag::new("env", "dev")]);
        let mut w = QueryWriter::new("CreateDBInstance", "2014-10-31");
        req.to_query(&mut w, "");
        assert_eq!(w.get("DBInstanceIdentifier"), Some("mydb"));
        assert_eq!(w.get("DBInstanceClass"), Some("db.t3.micro"));
        assert_eq!(w.get("AllocatedStorage"), Some("20"));
        assert_eq!(w.get("MultiAZ"), Some("true"));
        assert_eq!(w.get("VpcSecurityGroupIds.VpcSecurityGroupId.1"), Some("sg-1"));
        assert_eq!(w.get("EnableIAMDatabaseAuthentication"), Some("true"));
        assert_eq!(w.get("PerformanceInsightsKMSKeyId"), Some("key"));
        assert_eq!(w.get("Tags.Tag.1.Key"), Some("env"));
        // unset fields are not sent
        assert!(!w.contains("DBName"));
        assert!(!w.contains("Port"));
        assert_eq!(w.len(), 13);
    }

    #[test]
    fn modify_instance_nested_configuration() {
        let req = ModifyDBInstanceRequest::new("mydb")
            .apply_immediately(true)
            .cloudwatch_logs_export_configuration(CloudwatchLogsExportConfiguration {
                enable_log_types: vec!["error".to_string()],
                disable_log_types: vec![],
            });
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        assert_eq!(
            w.get("CloudwatchLogsExportConfiguration.EnableLogTypes.member.1"),
            Some("error")
        );
        assert!(!w.contains("CloudwatchLogsExportConfiguration.DisableLogTypes.member.1"));
    }

    #[test]
    fn read_replica_source_region_is_not_sent() {
        let req = CreateDBInstanceReadReplicaRequest::new("replica", "arn:aws:rds:us-east-1:1:db:src")
            .source_region("us-east-1");
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        assert!(!w.contains("SourceRegion"));
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn db_instance_from_xml() {
        let xml = r#"<DBInstance>
            <DBInstanceIdentifier>mydb</DBInstanceIdentifier>
            <DBInstanceStatus>available</DBInstanceStatus>
            <Endpoint><Address>mydb.abc.us-east-1.rds.amazonaws.com</Address><Port>3306</Port></Endpoint>
            <AllocatedStorage>20</AllocatedStorage>
            <InstanceCreateTime>2020-01-02T03:04:05.678Z</InstanceCreateTime>
            <MultiAZ>false</MultiAZ>
            <DbInstancePort>0</DbInstancePort>
            <VpcSecurityGroups>
              <VpcSecurityGroupMembership><VpcSecurityGroupId>sg-1</VpcSecurityGroupId><Status>active</Status></VpcSecurityGroupMembership>
            </VpcSecurityGroups>
            <ReadReplicaDBInstanceIdentifiers>
              <ReadReplicaDBInstanceIdentifier>r1</ReadReplicaDBInstanceIdentifier>
              <ReadReplicaDBInstanceIdentifier>r2</ReadReplicaDBInstanceIdentifier>
            </ReadReplicaDBInstanceIdentifiers>
            <PendingModifiedValues><DBInstanceClass>db.m5.large</DBInstanceClass></PendingModifiedValues>
            <IAMDatabaseAuthenticationEnabled>true</IAMDatabaseAuthenticationEnabled>
          </DBInstance>"#;
        let i = DBInstance::from_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        assert_eq!(i.db_instance_identifier, "mydb");
        assert_eq!(i.db_instance_status, "available");
        assert_eq!(i.endpoint.as_ref().unwrap().port, 3306);
        assert_eq!(i.allocated_storage, 20);
        assert_eq!(
            i.instance_create_time.unwrap().to_rfc3339(),
            "2020-01-02T03:04:05.678+00:00"
        );
        assert_eq!(i.vpc_security_groups[0].vpc_security_group_id, "sg-1");
        assert_eq!(i.read_replica_db_instance_identifiers, vec!["r1", "r2"]);
        assert_eq!(
            i.pending_modified_values.unwrap().db_instance_class.as_deref(),
            Some("db.m5.large")
        );
        assert!(i.iam_database_authentication_enabled);
        assert!(i.iops.is_none());
    }
}
