//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{AvailabilityZone, Filter, Tag};

/// A set of VPC subnets DB instances can be placed in.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBSubnetGroup {
    pub db_subnet_group_name: String,
    pub db_subnet_group_description: String,
    pub vpc_id: String,
    pub subnet_group_status: String,
    pub subnets: Vec<Subnet>,
    pub db_subnet_group_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct Subnet {
    pub subnet_identifier: String,
    pub subnet_availability_zone: Option<AvailabilityZone>,
    pub subnet_status: String,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBSubnetGroupRequest {
    pub db_subnet_group_name: String,
    pub db_subnet_group_description: String,
    #[rds(member = "SubnetIdentifier")]
    pub subnet_ids: Vec<String>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CreateDBSubnetGroupRequest {
    pub fn new(name: &str, description: &str, subnet_ids: &[&str]) -> Self {
        CreateDBSubnetGroupRequest {
            db_subnet_group_name: name.to_string(),
            db_subnet_group_description: description.to_string(),
            subnet_ids: subnet_ids.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBSubnetGroupRequest {
    pub db_subnet_group_name: String,
}

impl DeleteDBSubnetGroupRequest {
    pub fn new(name: &str) -> Self {
        DeleteDBSubnetGroupRequest {
            db_subnet_group_name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBSubnetGroupsRequest {
    pub db_subnet_group_name: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBSubnetGroupRequest {
    pub db_subnet_group_name: String,
    pub db_subnet_group_description: String,
    #[rds(member = "SubnetIdentifier")]
    pub subnet_ids: Vec<String>,
}

impl ModifyDBSubnetGroupRequest {
    pub fn new(name: &str, subnet_ids: &[&str]) -> Self {
        ModifyDBSubnetGroupRequest {
            db_subnet_group_name: name.to_string(),
            subnet_ids: subnet_ids.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBSubnetGroupResult {
    pub db_subnet_group: Option<DBSubnetGroup>,
}

pub type CreateDBSubnetGroupResult = DBSubnetGroupResult;
pub type ModifyDBSubnetGroupResult = DBSubnetGroupResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBSubnetGroupsResult {
    pub marker: Option<String>,
    pub db_subnet_groups: Vec<DBSubnetGroup>,
}
