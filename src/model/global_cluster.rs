//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::Filter;

/// An Aurora global database spanning several regions.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct GlobalCluster {
    pub global_cluster_identifier: String,
    pub global_cluster_resource_id: String,
    pub global_cluster_arn: String,
    pub status: String,
    pub engine: String,
    pub engine_version: String,
    pub database_name: String,
    pub storage_encrypted: bool,
    pub deletion_protection: bool,
    pub global_cluster_members: Vec<GlobalClusterMember>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct GlobalClusterMember {
    pub db_cluster_arn: String,
    pub readers: Vec<String>,
    pub is_writer: bool,
    pub global_write_forwarding_status: String,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateGlobalClusterRequest {
    pub global_cluster_identifier: String,
    pub source_db_cluster_identifier: String,
    pub engine: String,
    pub engine_version: String,
    pub deletion_protection: Option<bool>,
    pub database_name: String,
    pub storage_encrypted: Option<bool>,
}

impl CreateGlobalClusterRequest {
    pub fn new(global_cluster_identifier: &str) -> Self {
        CreateGlobalClusterRequest {
            global_cluster_identifier: global_cluster_identifier.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteGlobalClusterRequest {
    pub global_cluster_identifier: String,
}

impl DeleteGlobalClusterRequest {
    pub fn new(global_cluster_identifier: &str) -> Self {
        DeleteGlobalClusterRequest {
            global_cluster_identifier: global_cluster_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeGlobalClustersRequest {
    pub global_cluster_identifier: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyGlobalClusterRequest {
    pub global_cluster_identifier: String,
    pub new_global_cluster_identifier: String,
    pub deletion_protection: Option<bool>,
}

impl ModifyGlobalClusterRequest {
    pub fn new(global_cluster_identifier: &str) -> Self {
        ModifyGlobalClusterRequest {
            global_cluster_identifier: global_cluster_identifier.to_string(),
            ..Default::default()
        }
    }
}

/// Detach a secondary cluster from a global database; it becomes a standalone
/// cluster with read-write capability.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct RemoveFromGlobalClusterRequest {
    pub global_cluster_identifier: String,
    /// The ARN of the cluster to detach.
    pub db_cluster_identifier: String,
}

impl RemoveFromGlobalClusterRequest {
    pub fn new(global_cluster_identifier: &str, db_cluster_identifier: &str) -> Self {
        RemoveFromGlobalClusterRequest {
            global_cluster_identifier: global_cluster_identifier.to_string(),
            db_cluster_identifier: db_cluster_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct GlobalClusterResult {
    pub global_cluster: Option<GlobalCluster>,
}

pub type CreateGlobalClusterResult = GlobalClusterResult;
pub type DeleteGlobalClusterResult = GlobalClusterResult;
pub type ModifyGlobalClusterResult = GlobalClusterResult;
pub type RemoveFromGlobalClusterResult = GlobalClusterResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeGlobalClustersResult {
    pub marker: Option<String>,
    pub global_clusters: Vec<GlobalCluster>,
}
