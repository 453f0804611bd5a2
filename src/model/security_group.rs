//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! DB security groups (EC2-Classic network access control).

use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{Filter, Tag};

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBSecurityGroup {
    pub owner_id: String,
    pub db_security_group_name: String,
    pub db_security_group_description: String,
    pub vpc_id: String,
    pub ec2_security_groups: Vec<EC2SecurityGroup>,
    #[rds(rename = "IPRanges")]
    pub ip_ranges: Vec<IPRange>,
    pub db_security_group_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct EC2SecurityGroup {
    pub status: String,
    pub ec2_security_group_name: String,
    pub ec2_security_group_id: String,
    pub ec2_security_group_owner_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct IPRange {
    pub status: String,
    pub cidrip: String,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBSecurityGroupRequest {
    pub db_security_group_name: String,
    pub db_security_group_description: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CreateDBSecurityGroupRequest {
    pub fn new(name: &str, description: &str) -> Self {
        CreateDBSecurityGroupRequest {
            db_security_group_name: name.to_string(),
            db_security_group_description: description.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBSecurityGroupRequest {
    pub db_security_group_name: String,
}

impl DeleteDBSecurityGroupRequest {
    pub fn new(name: &str) -> Self {
        DeleteDBSecurityGroupRequest {
            db_security_group_name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBSecurityGroupsRequest {
    pub db_security_group_name: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

/// Allow access from a CIDR range or from an EC2 security group.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct AuthorizeDBSecurityGroupIngressRequest {
    pub db_security_group_name: String,
    pub cidrip: String,
    pub ec2_security_group_name: String,
    pub ec2_security_group_id: String,
    pub ec2_security_group_owner_id: String,
}

impl AuthorizeDBSecurityGroupIngressRequest {
    pub fn new(name: &str) -> Self {
        AuthorizeDBSecurityGroupIngressRequest {
            db_security_group_name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct RevokeDBSecurityGroupIngressRequest {
    pub db_security_group_name: String,
    pub cidrip: String,
    pub ec2_security_group_name: String,
    pub ec2_security_group_id: String,
    pub ec2_security_group_owner_id: String,
}

impl RevokeDBSecurityGroupIngressRequest {
    pub fn new(name: &str) -> Self {
        RevokeDBSecurityGroupIngressRequest {
            db_security_group_name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBSecurityGroupResult {
    pub db_security_group: Option<DBSecurityGroup>,
}

pub type CreateDBSecurityGroupResult = DBSecurityGroupResult;
pub type AuthorizeDBSecurityGroupIngressResult = DBSecurityGroupResult;
pub type RevokeDBSecurityGroupIngressResult = DBSecurityGroupResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBSecurityGroupsResult {
    pub marker: Option<String>,
    pub db_security_groups: Vec<DBSecurityGroup>,
}
