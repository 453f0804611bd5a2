//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Option groups and the catalog of engine options.

use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{DBSecurityGroupMembership, Filter, Tag, VpcSecurityGroupMembership};

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct OptionGroup {
    pub option_group_name: String,
    pub option_group_description: String,
    pub engine_name: String,
    pub major_engine_version: String,
    pub options: Vec<ConfiguredOption>,
    pub allows_vpc_and_non_vpc_instance_memberships: bool,
    pub vpc_id: String,
    pub option_group_arn: String,
}

/// An option enabled in an option group (`Option` element on the wire).
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ConfiguredOption {
    pub option_name: String,
    pub option_description: String,
    pub persistent: bool,
    pub permanent: bool,
    pub port: Option<i32>,
    pub option_version: String,
    pub option_settings: Vec<OptionSetting>,
    pub db_security_group_memberships: Vec<DBSecurityGroupMembership>,
    pub vpc_security_group_memberships: Vec<VpcSecurityGroupMembership>,
}

#[derive(Debug, Clone, Default, PartialEq, ToQuery, FromXml)]
pub struct OptionSetting {
    pub name: String,
    pub value: String,
    pub default_value: String,
    pub description: String,
    pub apply_type: String,
    pub data_type: String,
    pub allowed_values: String,
    pub is_modifiable: Option<bool>,
    pub is_collection: Option<bool>,
}

impl OptionSetting {
    pub fn new(name: &str, value: &str) -> OptionSetting {
        OptionSetting {
            name: name.to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }
}

/// An option to add to (or update in) an option group.
#[derive(Debug, Clone, Default, PartialEq, ToQuery)]
pub struct OptionConfiguration {
    pub option_name: String,
    pub port: Option<i32>,
    pub option_version: String,
    #[rds(member = "DBSecurityGroupName")]
    pub db_security_group_memberships: Vec<String>,
    #[rds(member = "VpcSecurityGroupId")]
    pub vpc_security_group_memberships: Vec<String>,
    #[rds(member = "OptionSetting")]
    pub option_settings: Vec<OptionSetting>,
}

impl OptionConfiguration {
    pub fn new(option_name: &str) -> OptionConfiguration {
        OptionConfiguration {
            option_name: option_name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct OptionGroupOptionSetting {
    pub setting_name: String,
    pub setting_description: String,
    pub default_value: String,
    pub apply_type: String,
    pub allowed_values: String,
    pub is_modifiable: bool,
    pub is_required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct OptionVersion {
    pub version: String,
    pub is_default: bool,
}

/// An option available for an engine version.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct OptionGroupOption {
    pub name: String,
    pub description: String,
    pub engine_name: String,
    pub major_engine_version: String,
    pub minimum_required_minor_engine_version: String,
    pub port_required: bool,
    pub default_port: Option<i32>,
    pub options_depended_on: Vec<String>,
    pub options_conflicts_with: Vec<String>,
    pub persistent: bool,
    pub permanent: bool,
    pub requires_auto_minor_engine_version_upgrade: bool,
    pub vpc_only: bool,
    pub supports_option_version_downgrade: Option<bool>,
    pub option_group_option_settings: Vec<OptionGroupOptionSetting>,
    pub option_group_option_versions: Vec<OptionVersion>,
}

// Requests

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateOptionGroupRequest {
    pub option_group_name: String,
    pub engine_name: String,
    pub major_engine_version: String,
    pub option_group_description: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CreateOptionGroupRequest {
    pub fn new(name: &str, engine_name: &str, major_engine_version: &str, description: &str) -> Self {
        CreateOptionGroupRequest {
            option_group_name: name.to_string(),
            engine_name: engine_name.to_string(),
            major_engine_version: major_engine_version.to_string(),
            option_group_description: description.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CopyOptionGroupRequest {
    pub source_option_group_identifier: String,
    pub target_option_group_identifier: String,
    pub target_option_group_description: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CopyOptionGroupRequest {
    pub fn new(source: &str, target: &str, description: &str) -> Self {
        CopyOptionGroupRequest {
            source_option_group_identifier: source.to_string(),
            target_option_group_identifier: target.to_string(),
            target_option_group_description: description.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteOptionGroupRequest {
    pub option_group_name: String,
}

impl DeleteOptionGroupRequest {
    pub fn new(name: &str) -> Self {
        DeleteOptionGroupRequest {
            option_group_name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeOptionGroupsRequest {
    pub option_group_name: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub marker: Option<String>,
    pub max_records: Option<i32>,
    pub engine_name: String,
    pub major_engine_version: String,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyOptionGroupRequest {
    pub option_group_name: String,
    #[rds(member = "OptionConfiguration")]
    pub options_to_include: Vec<OptionConfiguration>,
    pub options_to_remove: Vec<String>,
    pub apply_immediately: Option<bool>,
}

impl ModifyOptionGroupRequest {
    pub fn new(name: &str) -> Self {
        ModifyOptionGroupRequest {
            option_group_name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeOptionGroupOptionsRequest {
    pub engine_name: String,
    pub major_engine_version: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

impl DescribeOptionGroupOptionsRequest {
    pub fn new(engine_name: &str) -> Self {
        DescribeOptionGroupOptionsRequest {
            engine_name: engine_name.to_string(),
            ..Default::default()
        }
    }
}

// Results

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct OptionGroupResult {
    pub option_group: Option<OptionGroup>,
}

pub type CreateOptionGroupResult = OptionGroupResult;
pub type CopyOptionGroupResult = OptionGroupResult;
pub type ModifyOptionGroupResult = OptionGroupResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeOptionGroupsResult {
    pub option_groups_list: Vec<OptionGroup>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeOptionGroupOptionsResult {
    pub option_group_options: Vec<OptionGroupOption>,
    pub marker: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryWriter, ToQuery};

    #[test]
    fn options_to_include_nest_settings() {
        let mut opt = OptionConfiguration::new("MEMCACHED").port(11211);
        opt.option_settings = vec![OptionSetting::new("CHUNK_SIZE", "32")];
        opt.vpc_security_group_memberships = vec!["sg-1".to_string()];
        let req = ModifyOptionGroupRequest::new("og1")
            .options_to_include(vec![opt])
            .options_to_remove(vec!["OEM".to_string()])
            .apply_immediately(true);
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        let p = "OptionsToInclude.OptionConfiguration.1";
        assert_eq!(w.get(&format!("{}.OptionName", p)), Some("MEMCACHED"));
        assert_eq!(w.get(&format!("{}.Port", p)), Some("11211"));
        assert_eq!(
            w.get(&format!("{}.OptionSettings.OptionSetting.1.Name", p)),
            Some("CHUNK_SIZE")
        );
        assert_eq!(
            w.get(&format!("{}.VpcSecurityGroupMemberships.VpcSecurityGroupId.1", p)),
            Some("sg-1")
        );
        assert_eq!(w.get("OptionsToRemove.member.1"), Some("OEM"));
    }
}
