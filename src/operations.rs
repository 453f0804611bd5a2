//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! The operation catalog.
//!
//! Every RDS action is one line of the table below, pairing the request
//! marshaller with its result unmarshaller (`()` for operations without a
//! result). Each line yields:
//! - an [`RdsOperation`] impl carrying the action name and output type,
//! - an `execute(&client)` method on the request,
//! - a snake-case facade method on [`Client`].
//!
//! ```no_run
//! use rds_rust_sdk::{Client, DescribeDBInstancesRequest, Filter};
//! # async fn run(client: &Client) -> Result<(), rds_rust_sdk::RdsError> {
//! let req = DescribeDBInstancesRequest::new()
//!     .filters(vec![Filter::new("engine", &["postgres"])])
//!     .max_records(20);
//! // these two are equivalent
//! let res = client.describe_db_instances(&req).await?;
//! let res = req.execute(client).await?;
//! for db in res.db_instances {
//!     println!("{} {}", db.db_instance_identifier, db.db_instance_status);
//! }
//! # Ok(())
//! # }
//! ```

use crate::client::Client;
use crate::error::RdsError;
use crate::model::*;
use crate::query::ToQuery;
use crate::xml::FromXml;
use std::result::Result;

/// A request that can be sent to the service.
pub trait RdsOperation: ToQuery + Sync {
    /// The unmarshalled result of the operation.
    type Output: FromXml + Default + Send;

    /// The `Action` parameter of the operation.
    const ACTION: &'static str;

    /// Region to generate a cross-region `PreSignedUrl` for, if any.
    fn source_region(&self) -> Option<&str> {
        None
    }
}

/// A `Describe*` request that returns its items in pages linked by `Marker`.
///
/// Used by [`Client::fetch_all_pages`].
pub trait Paginated: RdsOperation + Clone {
    type Item;

    fn set_marker(&mut self, marker: Option<String>);
    fn next_marker(output: &Self::Output) -> Option<&str>;
    fn items(output: Self::Output) -> Vec<Self::Item>;
}

macro_rules! rds_operations {
    // Copy operations presign against `source_region` unless the caller
    // already supplied a `PreSignedUrl`.
    (@presign) => {
        fn source_region(&self) -> Option<&str> {
            if self.pre_signed_url.is_some() {
                None
            } else {
                self.source_region.as_deref()
            }
        }
    };
    ($($method:ident => $action:literal, $req:ident, $out:ty $(, $flag:ident)?;)*) => {
        $(
            impl RdsOperation for $req {
                type Output = $out;
                const ACTION: &'static str = $action;
                $(rds_operations!(@$flag);)?
            }

            impl $req {
                #[doc = concat!("Execute the `", $action, "` request.")]
                pub async fn execute(&self, client: &Client) -> Result<$out, RdsError> {
                    client.send(self).await
                }
            }
        )*

        impl Client {
            $(
                #[doc = concat!("Call the `", $action, "` operation.")]
                pub async fn $method(&self, request: &$req) -> Result<$out, RdsError> {
                    self.send(request).await
                }
            )*
        }

        /// The action names of all operations, in catalog order.
        pub const OPERATIONS: &[&str] = &[$($action),*];
    };
}

rds_operations! {
    // instances
    create_db_instance => "CreateDBInstance", CreateDBInstanceRequest, CreateDBInstanceResult;
    create_db_instance_read_replica => "CreateDBInstanceReadReplica", CreateDBInstanceReadReplicaRequest, CreateDBInstanceReadReplicaResult, presign;
    delete_db_instance => "DeleteDBInstance", DeleteDBInstanceRequest, DeleteDBInstanceResult;
    describe_db_instances => "DescribeDBInstances", DescribeDBInstancesRequest, DescribeDBInstancesResult;
    modify_db_instance => "ModifyDBInstance", ModifyDBInstanceRequest, ModifyDBInstanceResult;
    reboot_db_instance => "RebootDBInstance", RebootDBInstanceRequest, RebootDBInstanceResult;
    start_db_instance => "StartDBInstance", StartDBInstanceRequest, StartDBInstanceResult;
    stop_db_instance => "StopDBInstance", StopDBInstanceRequest, StopDBInstanceResult;
    promote_read_replica => "PromoteReadReplica", PromoteReadReplicaRequest, PromoteReadReplicaResult;
    restore_db_instance_from_db_snapshot => "RestoreDBInstanceFromDBSnapshot", RestoreDBInstanceFromDBSnapshotRequest, RestoreDBInstanceFromDBSnapshotResult;
    restore_db_instance_to_point_in_time => "RestoreDBInstanceToPointInTime", RestoreDBInstanceToPointInTimeRequest, RestoreDBInstanceToPointInTimeResult;
    add_role_to_db_instance => "AddRoleToDBInstance", AddRoleToDBInstanceRequest, ();
    remove_role_from_db_instance => "RemoveRoleFromDBInstance", RemoveRoleFromDBInstanceRequest, ();
    describe_valid_db_instance_modifications => "DescribeValidDBInstanceModifications", DescribeValidDBInstanceModificationsRequest, DescribeValidDBInstanceModificationsResult;
    describe_db_instance_automated_backups => "DescribeDBInstanceAutomatedBackups", DescribeDBInstanceAutomatedBackupsRequest, DescribeDBInstanceAutomatedBackupsResult;
    delete_db_instance_automated_backup => "DeleteDBInstanceAutomatedBackup", DeleteDBInstanceAutomatedBackupRequest, DeleteDBInstanceAutomatedBackupResult;
    describe_db_log_files => "DescribeDBLogFiles", DescribeDBLogFilesRequest, DescribeDBLogFilesResult;
    download_db_log_file_portion => "DownloadDBLogFilePortion", DownloadDBLogFilePortionRequest, DownloadDBLogFilePortionResult;
    describe_orderable_db_instance_options => "DescribeOrderableDBInstanceOptions", DescribeOrderableDBInstanceOptionsRequest, DescribeOrderableDBInstanceOptionsResult;
    describe_db_engine_versions => "DescribeDBEngineVersions", DescribeDBEngineVersionsRequest, DescribeDBEngineVersionsResult;

    // clusters
    create_db_cluster => "CreateDBCluster", CreateDBClusterRequest, CreateDBClusterResult, presign;
    delete_db_cluster => "DeleteDBCluster", DeleteDBClusterRequest, DeleteDBClusterResult;
    describe_db_clusters => "DescribeDBClusters", DescribeDBClustersRequest, DescribeDBClustersResult;
    modify_db_cluster => "ModifyDBCluster", ModifyDBClusterRequest, ModifyDBClusterResult;
    start_db_cluster => "StartDBCluster", StartDBClusterRequest, StartDBClusterResult;
    stop_db_cluster => "StopDBCluster", StopDBClusterRequest, StopDBClusterResult;
    failover_db_cluster => "FailoverDBCluster", FailoverDBClusterRequest, FailoverDBClusterResult;
    backtrack_db_cluster => "BacktrackDBCluster", BacktrackDBClusterRequest, BacktrackDBClusterResult;
    describe_db_cluster_backtracks => "DescribeDBClusterBacktracks", DescribeDBClusterBacktracksRequest, DescribeDBClusterBacktracksResult;
    promote_read_replica_db_cluster => "PromoteReadReplicaDBCluster", PromoteReadReplicaDBClusterRequest, PromoteReadReplicaDBClusterResult;
    restore_db_cluster_from_snapshot => "RestoreDBClusterFromSnapshot", RestoreDBClusterFromSnapshotRequest, RestoreDBClusterFromSnapshotResult;
    restore_db_cluster_to_point_in_time => "RestoreDBClusterToPointInTime", RestoreDBClusterToPointInTimeRequest, RestoreDBClusterToPointInTimeResult;
    add_role_to_db_cluster => "AddRoleToDBCluster", AddRoleToDBClusterRequest, ();
    remove_role_from_db_cluster => "RemoveRoleFromDBCluster", RemoveRoleFromDBClusterRequest, ();
    modify_current_db_cluster_capacity => "ModifyCurrentDBClusterCapacity", ModifyCurrentDBClusterCapacityRequest, ModifyCurrentDBClusterCapacityResult;
    create_db_cluster_endpoint => "CreateDBClusterEndpoint", CreateDBClusterEndpointRequest, CreateDBClusterEndpointResult;
    delete_db_cluster_endpoint => "DeleteDBClusterEndpoint", DeleteDBClusterEndpointRequest, DeleteDBClusterEndpointResult;
    describe_db_cluster_endpoints => "DescribeDBClusterEndpoints", DescribeDBClusterEndpointsRequest, DescribeDBClusterEndpointsResult;
    modify_db_cluster_endpoint => "ModifyDBClusterEndpoint", ModifyDBClusterEndpointRequest, ModifyDBClusterEndpointResult;
    start_activity_stream => "StartActivityStream", StartActivityStreamRequest, StartActivityStreamResult;
    stop_activity_stream => "StopActivityStream", StopActivityStreamRequest, StopActivityStreamResult;

    // global clusters
    create_global_cluster => "CreateGlobalCluster", CreateGlobalClusterRequest, CreateGlobalClusterResult;
    delete_global_cluster => "DeleteGlobalCluster", DeleteGlobalClusterRequest, DeleteGlobalClusterResult;
    describe_global_clusters => "DescribeGlobalClusters", DescribeGlobalClustersRequest, DescribeGlobalClustersResult;
    modify_global_cluster => "ModifyGlobalCluster", ModifyGlobalClusterRequest, ModifyGlobalClusterResult;
    remove_from_global_cluster => "RemoveFromGlobalCluster", RemoveFromGlobalClusterRequest, RemoveFromGlobalClusterResult;

    // snapshots
    create_db_snapshot => "CreateDBSnapshot", CreateDBSnapshotRequest, CreateDBSnapshotResult;
    copy_db_snapshot => "CopyDBSnapshot", CopyDBSnapshotRequest, CopyDBSnapshotResult, presign;
    delete_db_snapshot => "DeleteDBSnapshot", DeleteDBSnapshotRequest, DeleteDBSnapshotResult;
    describe_db_snapshots => "DescribeDBSnapshots", DescribeDBSnapshotsRequest, DescribeDBSnapshotsResult;
    modify_db_snapshot => "ModifyDBSnapshot", ModifyDBSnapshotRequest, ModifyDBSnapshotResult;
    describe_db_snapshot_attributes => "DescribeDBSnapshotAttributes", DescribeDBSnapshotAttributesRequest, DescribeDBSnapshotAttributesResult;
    modify_db_snapshot_attribute => "ModifyDBSnapshotAttribute", ModifyDBSnapshotAttributeRequest, ModifyDBSnapshotAttributeResult;
    create_db_cluster_snapshot => "CreateDBClusterSnapshot", CreateDBClusterSnapshotRequest, CreateDBClusterSnapshotResult;
    copy_db_cluster_snapshot => "CopyDBClusterSnapshot", CopyDBClusterSnapshotRequest, CopyDBClusterSnapshotResult, presign;
    delete_db_cluster_snapshot => "DeleteDBClusterSnapshot", DeleteDBClusterSnapshotRequest, DeleteDBClusterSnapshotResult;
    describe_db_cluster_snapshots => "DescribeDBClusterSnapshots", DescribeDBClusterSnapshotsRequest, DescribeDBClusterSnapshotsResult;
    describe_db_cluster_snapshot_attributes => "DescribeDBClusterSnapshotAttributes", DescribeDBClusterSnapshotAttributesRequest, DescribeDBClusterSnapshotAttributesResult;
    modify_db_cluster_snapshot_attribute => "ModifyDBClusterSnapshotAttribute", ModifyDBClusterSnapshotAttributeRequest, ModifyDBClusterSnapshotAttributeResult;

    // parameter groups
    create_db_parameter_group => "CreateDBParameterGroup", CreateDBParameterGroupRequest, CreateDBParameterGroupResult;
    copy_db_parameter_group => "CopyDBParameterGroup", CopyDBParameterGroupRequest, CopyDBParameterGroupResult;
    delete_db_parameter_group => "DeleteDBParameterGroup", DeleteDBParameterGroupRequest, ();
    describe_db_parameter_groups => "DescribeDBParameterGroups", DescribeDBParameterGroupsRequest, DescribeDBParameterGroupsResult;
    describe_db_parameters => "DescribeDBParameters", DescribeDBParametersRequest, DescribeDBParametersResult;
    modify_db_parameter_group => "ModifyDBParameterGroup", ModifyDBParameterGroupRequest, ModifyDBParameterGroupResult;
    reset_db_parameter_group => "ResetDBParameterGroup", ResetDBParameterGroupRequest, ResetDBParameterGroupResult;
    describe_engine_default_parameters => "DescribeEngineDefaultParameters", DescribeEngineDefaultParametersRequest, DescribeEngineDefaultParametersResult;
    create_db_cluster_parameter_group => "CreateDBClusterParameterGroup", CreateDBClusterParameterGroupRequest, CreateDBClusterParameterGroupResult;
    copy_db_cluster_parameter_group => "CopyDBClusterParameterGroup", CopyDBClusterParameterGroupRequest, CopyDBClusterParameterGroupResult;
    delete_db_cluster_parameter_group => "DeleteDBClusterParameterGroup", DeleteDBClusterParameterGroupRequest, ();
    describe_db_cluster_parameter_groups => "DescribeDBClusterParameterGroups", DescribeDBClusterParameterGroupsRequest, DescribeDBClusterParameterGroupsResult;
    describe_db_cluster_parameters => "DescribeDBClusterParameters", DescribeDBClusterParametersRequest, DescribeDBClusterParametersResult;
    modify_db_cluster_parameter_group => "ModifyDBClusterParameterGroup", ModifyDBClusterParameterGroupRequest, ModifyDBClusterParameterGroupResult;
    reset_db_cluster_parameter_group => "ResetDBClusterParameterGroup", ResetDBClusterParameterGroupRequest, ResetDBClusterParameterGroupResult;
    describe_engine_default_cluster_parameters => "DescribeEngineDefaultClusterParameters", DescribeEngineDefaultClusterParametersRequest, DescribeEngineDefaultClusterParametersResult;

    // security groups
    create_db_security_group => "CreateDBSecurityGroup", CreateDBSecurityGroupRequest, CreateDBSecurityGroupResult;
    delete_db_security_group => "DeleteDBSecurityGroup", DeleteDBSecurityGroupRequest, ();
    describe_db_security_groups => "DescribeDBSecurityGroups", DescribeDBSecurityGroupsRequest, DescribeDBSecurityGroupsResult;
    authorize_db_security_group_ingress => "AuthorizeDBSecurityGroupIngress", AuthorizeDBSecurityGroupIngressRequest, AuthorizeDBSecurityGroupIngressResult;
    revoke_db_security_group_ingress => "RevokeDBSecurityGroupIngress", RevokeDBSecurityGroupIngressRequest, RevokeDBSecurityGroupIngressResult;

    // subnet groups
    create_db_subnet_group => "CreateDBSubnetGroup", CreateDBSubnetGroupRequest, CreateDBSubnetGroupResult;
    delete_db_subnet_group => "DeleteDBSubnetGroup", DeleteDBSubnetGroupRequest, ();
    describe_db_subnet_groups => "DescribeDBSubnetGroups", DescribeDBSubnetGroupsRequest, DescribeDBSubnetGroupsResult;
    modify_db_subnet_group => "ModifyDBSubnetGroup", ModifyDBSubnetGroupRequest, ModifyDBSubnetGroupResult;

    // option groups
    create_option_group => "CreateOptionGroup", CreateOptionGroupRequest, CreateOptionGroupResult;
    copy_option_group => "CopyOptionGroup", CopyOptionGroupRequest, CopyOptionGroupResult;
    delete_option_group => "DeleteOptionGroup", DeleteOptionGroupRequest, ();
    describe_option_groups => "DescribeOptionGroups", DescribeOptionGroupsRequest, DescribeOptionGroupsResult;
    modify_option_group => "ModifyOptionGroup", ModifyOptionGroupRequest, ModifyOptionGroupResult;
    describe_option_group_options => "DescribeOptionGroupOptions", DescribeOptionGroupOptionsRequest, DescribeOptionGroupOptionsResult;

    // events
    describe_events => "DescribeEvents", DescribeEventsRequest, DescribeEventsResult;
    describe_event_categories => "DescribeEventCategories", DescribeEventCategoriesRequest, DescribeEventCategoriesResult;
    create_event_subscription => "CreateEventSubscription", CreateEventSubscriptionRequest, CreateEventSubscriptionResult;
    delete_event_subscription => "DeleteEventSubscription", DeleteEventSubscriptionRequest, DeleteEventSubscriptionResult;
    describe_event_subscriptions => "DescribeEventSubscriptions", DescribeEventSubscriptionsRequest, DescribeEventSubscriptionsResult;
    modify_event_subscription => "ModifyEventSubscription", ModifyEventSubscriptionRequest, ModifyEventSubscriptionResult;
    add_source_identifier_to_subscription => "AddSourceIdentifierToSubscription", AddSourceIdentifierToSubscriptionRequest, AddSourceIdentifierToSubscriptionResult;
    remove_source_identifier_from_subscription => "RemoveSourceIdentifierFromSubscription", RemoveSourceIdentifierFromSubscriptionRequest, RemoveSourceIdentifierFromSubscriptionResult;

    // proxies
    create_db_proxy => "CreateDBProxy", CreateDBProxyRequest, CreateDBProxyResult;
    delete_db_proxy => "DeleteDBProxy", DeleteDBProxyRequest, DeleteDBProxyResult;
    describe_db_proxies => "DescribeDBProxies", DescribeDBProxiesRequest, DescribeDBProxiesResult;
    modify_db_proxy => "ModifyDBProxy", ModifyDBProxyRequest, ModifyDBProxyResult;
    describe_db_proxy_target_groups => "DescribeDBProxyTargetGroups", DescribeDBProxyTargetGroupsRequest, DescribeDBProxyTargetGroupsResult;
    describe_db_proxy_targets => "DescribeDBProxyTargets", DescribeDBProxyTargetsRequest, DescribeDBProxyTargetsResult;
    modify_db_proxy_target_group => "ModifyDBProxyTargetGroup", ModifyDBProxyTargetGroupRequest, ModifyDBProxyTargetGroupResult;
    register_db_proxy_targets => "RegisterDBProxyTargets", RegisterDBProxyTargetsRequest, RegisterDBProxyTargetsResult;
    deregister_db_proxy_targets => "DeregisterDBProxyTargets", DeregisterDBProxyTargetsRequest, ();

    // export tasks
    start_export_task => "StartExportTask", StartExportTaskRequest, StartExportTaskResult;
    cancel_export_task => "CancelExportTask", CancelExportTaskRequest, CancelExportTaskResult;
    describe_export_tasks => "DescribeExportTasks", DescribeExportTasksRequest, DescribeExportTasksResult;

    // tags
    add_tags_to_resource => "AddTagsToResource", AddTagsToResourceRequest, ();
    remove_tags_from_resource => "RemoveTagsFromResource", RemoveTagsFromResourceRequest, ();
    list_tags_for_resource => "ListTagsForResource", ListTagsForResourceRequest, ListTagsForResourceResult;

    // account and catalog
    describe_account_attributes => "DescribeAccountAttributes", DescribeAccountAttributesRequest, DescribeAccountAttributesResult;
    describe_certificates => "DescribeCertificates", DescribeCertificatesRequest, DescribeCertificatesResult;
    modify_certificates => "ModifyCertificates", ModifyCertificatesRequest, ModifyCertificatesResult;
    describe_source_regions => "DescribeSourceRegions", DescribeSourceRegionsRequest, DescribeSourceRegionsResult;
    describe_pending_maintenance_actions => "DescribePendingMaintenanceActions", DescribePendingMaintenanceActionsRequest, DescribePendingMaintenanceActionsResult;
    apply_pending_maintenance_action => "ApplyPendingMaintenanceAction", ApplyPendingMaintenanceActionRequest, ApplyPendingMaintenanceActionResult;
    describe_reserved_db_instances => "DescribeReservedDBInstances", DescribeReservedDBInstancesRequest, DescribeReservedDBInstancesResult;
    describe_reserved_db_instances_offerings => "DescribeReservedDBInstancesOfferings", DescribeReservedDBInstancesOfferingsRequest, DescribeReservedDBInstancesOfferingsResult;
    purchase_reserved_db_instances_offering => "PurchaseReservedDBInstancesOffering", PurchaseReservedDBInstancesOfferingRequest, PurchaseReservedDBInstancesOfferingResult;

    // on-premises resources
    create_custom_availability_zone => "CreateCustomAvailabilityZone", CreateCustomAvailabilityZoneRequest, CreateCustomAvailabilityZoneResult;
    delete_custom_availability_zone => "DeleteCustomAvailabilityZone", DeleteCustomAvailabilityZoneRequest, DeleteCustomAvailabilityZoneResult;
    describe_custom_availability_zones => "DescribeCustomAvailabilityZones", DescribeCustomAvailabilityZonesRequest, DescribeCustomAvailabilityZonesResult;
    import_installation_media => "ImportInstallationMedia", ImportInstallationMediaRequest, ImportInstallationMediaResult;
    delete_installation_media => "DeleteInstallationMedia", DeleteInstallationMediaRequest, DeleteInstallationMediaResult;
    describe_installation_media => "DescribeInstallationMedia", DescribeInstallationMediaRequest, DescribeInstallationMediaResult;
}

macro_rules! paginated {
    ($($req:ident => $field:ident: $item:ty;)*) => {
        $(
            impl Paginated for $req {
                type Item = $item;

                fn set_marker(&mut self, marker: Option<String>) {
                    self.marker = marker;
                }

                fn next_marker(output: &Self::Output) -> Option<&str> {
                    output.marker.as_deref()
                }

                fn items(output: Self::Output) -> Vec<$item> {
                    output.$field
                }
            }
        )*
    };
}

paginated! {
    DescribeDBInstancesRequest => db_instances: DBInstance;
    DescribeDBInstanceAutomatedBackupsRequest => db_instance_automated_backups: DBInstanceAutomatedBackup;
    DescribeDBLogFilesRequest => describe_db_log_files: DescribeDBLogFilesDetails;
    DescribeOrderableDBInstanceOptionsRequest => orderable_db_instance_options: OrderableDBInstanceOption;
    DescribeDBEngineVersionsRequest => db_engine_versions: DBEngineVersion;
    DescribeDBClustersRequest => db_clusters: DBCluster;
    DescribeDBClusterBacktracksRequest => db_cluster_backtracks: DBClusterBacktrack;
    DescribeDBClusterEndpointsRequest => db_cluster_endpoints: DBClusterEndpoint;
    DescribeGlobalClustersRequest => global_clusters: GlobalCluster;
    DescribeDBSnapshotsRequest => db_snapshots: DBSnapshot;
    DescribeDBClusterSnapshotsRequest => db_cluster_snapshots: DBClusterSnapshot;
    DescribeDBParameterGroupsRequest => db_parameter_groups: DBParameterGroup;
    DescribeDBParametersRequest => parameters: Parameter;
    DescribeDBClusterParameterGroupsRequest => db_cluster_parameter_groups: DBClusterParameterGroup;
    DescribeDBClusterParametersRequest => parameters: Parameter;
    DescribeDBSecurityGroupsRequest => db_security_groups: DBSecurityGroup;
    DescribeDBSubnetGroupsRequest => db_subnet_groups: DBSubnetGroup;
    DescribeOptionGroupsRequest => option_groups_list: OptionGroup;
    DescribeOptionGroupOptionsRequest => option_group_options: OptionGroupOption;
    DescribeEventsRequest => events: Event;
    DescribeEventSubscriptionsRequest => event_subscriptions_list: EventSubscription;
    DescribeDBProxiesRequest => db_proxies: DBProxy;
    DescribeDBProxyTargetGroupsRequest => target_groups: DBProxyTargetGroup;
    DescribeDBProxyTargetsRequest => targets: DBProxyTarget;
    DescribeExportTasksRequest => export_tasks: ExportTask;
    DescribeCertificatesRequest => certificates: Certificate;
    DescribeSourceRegionsRequest => source_regions: SourceRegion;
    DescribePendingMaintenanceActionsRequest => pending_maintenance_actions: ResourcePendingMaintenanceActions;
    DescribeReservedDBInstancesRequest => reserved_db_instances: ReservedDBInstance;
    DescribeReservedDBInstancesOfferingsRequest => reserved_db_instances_offerings: ReservedDBInstancesOffering;
    DescribeCustomAvailabilityZonesRequest => custom_availability_zones: CustomAvailabilityZone;
    DescribeInstallationMediaRequest => installation_media: InstallationMedia;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_complete() {
        assert_eq!(OPERATIONS.len(), 128);
        let unique: HashSet<&&str> = OPERATIONS.iter().collect();
        assert_eq!(unique.len(), OPERATIONS.len());
        assert_eq!(OPERATIONS[0], "CreateDBInstance");
        assert!(OPERATIONS.contains(&"DescribeInstallationMedia"));
    }

    #[test]
    fn actions_match_requests() {
        assert_eq!(DescribeDBInstancesRequest::ACTION, "DescribeDBInstances");
        assert_eq!(CopyDBClusterSnapshotRequest::ACTION, "CopyDBClusterSnapshot");
        assert_eq!(ListTagsForResourceRequest::ACTION, "ListTagsForResource");
        assert_eq!(
            RestoreDBInstanceFromDBSnapshotRequest::ACTION,
            "RestoreDBInstanceFromDBSnapshot"
        );
    }

    #[test]
    fn presign_only_when_no_url_given() {
        let req = CopyDBSnapshotRequest::new(
            "arn:aws:rds:us-west-2:123456789012:snapshot:snap",
            "snap-copy",
        )
        .source_region("us-west-2");
        assert_eq!(RdsOperation::source_region(&req), Some("us-west-2"));

        let req = req.pre_signed_url("https://rds.us-west-2.amazonaws.com/?Action=CopyDBSnapshot");
        assert_eq!(RdsOperation::source_region(&req), None);

        // operations without cross-region support never presign
        let req = CreateDBSnapshotRequest::new("snap", "mydb");
        assert_eq!(RdsOperation::source_region(&req), None);
    }

    #[test]
    fn pagination_accessors() {
        let mut req = DescribeDBSnapshotsRequest::default();
        req.set_marker(Some("m1".to_string()));
        assert_eq!(req.marker.as_deref(), Some("m1"));

        let out = DescribeDBSnapshotsResult {
            marker: Some("m2".to_string()),
            db_snapshots: vec![DBSnapshot::default(), DBSnapshot::default()],
        };
        assert_eq!(DescribeDBSnapshotsRequest::next_marker(&out), Some("m2"));
        assert_eq!(DescribeDBSnapshotsRequest::items(out).len(), 2);
    }
}
