//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! DB parameter groups and DB cluster parameter groups.

use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{Filter, Tag};

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBParameterGroup {
    pub db_parameter_group_name: String,
    pub db_parameter_group_family: String,
    pub description: String,
    pub db_parameter_group_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterParameterGroup {
    pub db_cluster_parameter_group_name: String,
    pub db_parameter_group_family: String,
    pub description: String,
    pub db_cluster_parameter_group_arn: String,
}

/// An engine parameter. Returned by the `Describe*Parameters` operations and
/// sent (name, value and apply method) by the modify and reset operations.
#[derive(Debug, Clone, Default, PartialEq, ToQuery, FromXml)]
pub struct Parameter {
    pub parameter_name: String,
    pub parameter_value: String,
    pub description: String,
    pub source: String,
    pub apply_type: String,
    pub data_type: String,
    pub allowed_values: String,
    pub is_modifiable: Option<bool>,
    pub minimum_engine_version: String,
    /// `immediate` or `pending-reboot`.
    pub apply_method: String,
    pub supported_engine_modes: Vec<String>,
}

impl Parameter {
    pub fn new(parameter_name: &str, parameter_value: &str, apply_method: &str) -> Parameter {
        Parameter {
            parameter_name: parameter_name.to_string(),
            parameter_value: parameter_value.to_string(),
            apply_method: apply_method.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct EngineDefaults {
    pub db_parameter_group_family: String,
    pub marker: Option<String>,
    pub parameters: Vec<Parameter>,
}

// Requests

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBParameterGroupRequest {
    pub db_parameter_group_name: String,
    pub db_parameter_group_family: String,
    pub description: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CreateDBParameterGroupRequest {
    pub fn new(name: &str, family: &str, description: &str) -> Self {
        CreateDBParameterGroupRequest {
            db_parameter_group_name: name.to_string(),
            db_parameter_group_family: family.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CopyDBParameterGroupRequest {
    pub source_db_parameter_group_identifier: String,
    pub target_db_parameter_group_identifier: String,
    pub target_db_parameter_group_description: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CopyDBParameterGroupRequest {
    pub fn new(source: &str, target: &str, description: &str) -> Self {
        CopyDBParameterGroupRequest {
            source_db_parameter_group_identifier: source.to_string(),
            target_db_parameter_group_identifier: target.to_string(),
            target_db_parameter_group_description: description.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBParameterGroupRequest {
    pub db_parameter_group_name: String,
}

impl DeleteDBParameterGroupRequest {
    pub fn new(name: &str) -> Self {
        DeleteDBParameterGroupRequest {
            db_parameter_group_name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBParameterGroupsRequest {
    pub db_parameter_group_name: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBParametersRequest {
    pub db_parameter_group_name: String,
    /// `user`, `system` or `engine-default`.
    pub source: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

impl DescribeDBParametersRequest {
    pub fn new(name: &str) -> Self {
        DescribeDBParametersRequest {
            db_parameter_group_name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBParameterGroupRequest {
    pub db_parameter_group_name: String,
    #[rds(member = "Parameter")]
    pub parameters: Vec<Parameter>,
}

impl ModifyDBParameterGroupRequest {
    pub fn new(name: &str, parameters: Vec<Parameter>) -> Self {
        ModifyDBParameterGroupRequest {
            db_parameter_group_name: name.to_string(),
            parameters,
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ResetDBParameterGroupRequest {
    pub db_parameter_group_name: String,
    pub reset_all_parameters: Option<bool>,
    #[rds(member = "Parameter")]
    pub parameters: Vec<Parameter>,
}

impl ResetDBParameterGroupRequest {
    pub fn new(name: &str) -> Self {
        ResetDBParameterGroupRequest {
            db_parameter_group_name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeEngineDefaultParametersRequest {
    pub db_parameter_group_family: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

impl DescribeEngineDefaultParametersRequest {
    pub fn new(family: &str) -> Self {
        DescribeEngineDefaultParametersRequest {
            db_parameter_group_family: family.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBClusterParameterGroupRequest {
    pub db_cluster_parameter_group_name: String,
    pub db_parameter_group_family: String,
    pub description: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CreateDBClusterParameterGroupRequest {
    pub fn new(name: &str, family: &str, description: &str) -> Self {
        CreateDBClusterParameterGroupRequest {
            db_cluster_parameter_group_name: name.to_string(),
            db_parameter_group_family: family.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CopyDBClusterParameterGroupRequest {
    pub source_db_cluster_parameter_group_identifier: String,
    pub target_db_cluster_parameter_group_identifier: String,
    pub target_db_cluster_parameter_group_description: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CopyDBClusterParameterGroupRequest {
    pub fn new(source: &str, target: &str, description: &str) -> Self {
        CopyDBClusterParameterGroupRequest {
            source_db_cluster_parameter_group_identifier: source.to_string(),
            target_db_cluster_parameter_group_identifier: target.to_string(),
            target_db_cluster_parameter_group_description: description.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBClusterParameterGroupRequest {
    pub db_cluster_parameter_group_name: String,
}

impl DeleteDBClusterParameterGroupRequest {
    pub fn new(name: &str) -> Self {
        DeleteDBClusterParameterGroupRequest {
            db_cluster_parameter_group_name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBClusterParameterGroupsRequest {
    pub db_cluster_parameter_group_name: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBClusterParametersRequest {
    pub db_cluster_parameter_group_name: String,
    pub source: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

impl DescribeDBClusterParametersRequest {
    pub fn new(name: &str) -> Self {
        DescribeDBClusterParametersRequest {
            db_cluster_parameter_group_name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBClusterParameterGroupRequest {
    pub db_cluster_parameter_group_name: String,
    #[rds(member = "Parameter")]
    pub parameters: Vec<Parameter>,
}

impl ModifyDBClusterParameterGroupRequest {
    pub fn new(name: &str, parameters: Vec<Parameter>) -> Self {
        ModifyDBClusterParameterGroupRequest {
            db_cluster_parameter_group_name: name.to_string(),
            parameters,
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ResetDBClusterParameterGroupRequest {
    pub db_cluster_parameter_group_name: String,
    pub reset_all_parameters: Option<bool>,
    #[rds(member = "Parameter")]
    pub parameters: Vec<Parameter>,
}

impl ResetDBClusterParameterGroupRequest {
    pub fn new(name: &str) -> Self {
        ResetDBClusterParameterGroupRequest {
            db_cluster_parameter_group_name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeEngineDefaultClusterParametersRequest {
    pub db_parameter_group_family: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

impl DescribeEngineDefaultClusterParametersRequest {
    pub fn new(family: &str) -> Self {
        DescribeEngineDefaultClusterParametersRequest {
            db_parameter_group_family: family.to_string(),
            ..Default::default()
        }
    }
}

// Results

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBParameterGroupResult {
    pub db_parameter_group: Option<DBParameterGroup>,
}

pub type CreateDBParameterGroupResult = DBParameterGroupResult;
pub type CopyDBParameterGroupResult = DBParameterGroupResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBParameterGroupsResult {
    pub marker: Option<String>,
    pub db_parameter_groups: Vec<DBParameterGroup>,
}

/// Result of the `Describe*Parameters` operations.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ParametersResult {
    pub parameters: Vec<Parameter>,
    pub marker: Option<String>,
}

pub type DescribeDBParametersResult = ParametersResult;
pub type DescribeDBClusterParametersResult = ParametersResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBParameterGroupNameResult {
    pub db_parameter_group_name: String,
}

pub type ModifyDBParameterGroupResult = DBParameterGroupNameResult;
pub type ResetDBParameterGroupResult = DBParameterGroupNameResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct EngineDefaultsResult {
    pub engine_defaults: Option<EngineDefaults>,
}

pub type DescribeEngineDefaultParametersResult = EngineDefaultsResult;
pub type DescribeEngineDefaultClusterParametersResult = EngineDefaultsResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterParameterGroupResult {
    pub db_cluster_parameter_group: Option<DBClusterParameterGroup>,
}

pub type CreateDBClusterParameterGroupResult = DBClusterParameterGroupResult;
pub type CopyDBClusterParameterGroupResult = DBClusterParameterGroupResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBClusterParameterGroupsResult {
    pub marker: Option<String>,
    pub db_cluster_parameter_groups: Vec<DBClusterParameterGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBClusterParameterGroupNameResult {
    pub db_cluster_parameter_group_name: String,
}

pub type ModifyDBClusterParameterGroupResult = DBClusterParameterGroupNameResult;
pub type ResetDBClusterParameterGroupResult = DBClusterParameterGroupNameResult;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryWriter, ToQuery};

    #[test]
    fn modify_parameters_flatten() {
        let req = ModifyDBParameterGroupRequest::new(
            "pg1",
            vec![
                Parameter::new("max_connections", "200", "pending-reboot"),
                Parameter::new("log_min_duration_statement", "500", "immediate"),
            ],
        );
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        assert_eq!(w.get("DBParameterGroupName"), Some("pg1"));
        assert_eq!(w.get("Parameters.Parameter.1.ParameterName"), Some("max_connections"));
        assert_eq!(w.get("Parameters.Parameter.1.ApplyMethod"), Some("pending-reboot"));
        assert_eq!(w.get("Parameters.Parameter.2.ParameterValue"), Some("500"));
        // only set fields of each parameter are sent
        assert!(!w.contains("Parameters.Parameter.1.IsModifiable"));
        assert_eq!(w.len(), 7);
    }
}
