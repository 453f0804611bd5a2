//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! RDS Proxy: proxies, their target groups and registered targets.

use chrono::{DateTime, Utc};
use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{Filter, Tag};

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBProxy {
    pub db_proxy_name: String,
    pub db_proxy_arn: String,
    /// One of `available`, `modifying`, `incompatible-network`,
    /// `insufficient-resource-limits`, `creating` or `deleting`.
    pub status: String,
    pub engine_family: String,
    pub vpc_security_group_ids: Vec<String>,
    pub vpc_subnet_ids: Vec<String>,
    pub auth: Vec<UserAuthConfigInfo>,
    pub role_arn: String,
    pub endpoint: String,
    #[rds(rename = "RequireTLS")]
    pub require_tls: bool,
    pub idle_client_timeout: i32,
    pub debug_logging: bool,
    pub created_date: Option<DateTime<Utc>>,
    pub updated_date: Option<DateTime<Utc>>,
}

/// How a proxy authenticates to the database.
#[derive(Debug, Clone, Default, PartialEq, ToQuery)]
pub struct UserAuthConfig {
    pub description: String,
    pub user_name: String,
    /// Only `SECRETS` is supported by the service.
    pub auth_scheme: String,
    pub secret_arn: String,
    /// `DISABLED` or `REQUIRED`.
    pub iam_auth: String,
}

impl UserAuthConfig {
    pub fn new(secret_arn: &str) -> UserAuthConfig {
        UserAuthConfig {
            auth_scheme: "SECRETS".to_string(),
            secret_arn: secret_arn.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct UserAuthConfigInfo {
    pub description: String,
    pub user_name: String,
    pub auth_scheme: String,
    pub secret_arn: String,
    pub iam_auth: String,
}

#[derive(Debug, Clone, Default, PartialEq, ToQuery)]
pub struct ConnectionPoolConfiguration {
    pub max_connections_percent: Option<i32>,
    pub max_idle_connections_percent: Option<i32>,
    /// Seconds to wait for a free connection before returning an error.
    pub connection_borrow_timeout: Option<i32>,
    pub session_pinning_filters: Vec<String>,
    pub init_query: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ConnectionPoolConfigurationInfo {
    pub max_connections_percent: i32,
    pub max_idle_connections_percent: i32,
    pub connection_borrow_timeout: i32,
    pub session_pinning_filters: Vec<String>,
    pub init_query: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBProxyTargetGroup {
    pub db_proxy_name: String,
    pub target_group_name: String,
    pub target_group_arn: String,
    pub is_default: bool,
    pub status: String,
    pub connection_pool_config: Option<ConnectionPoolConfigurationInfo>,
    pub created_date: Option<DateTime<Utc>>,
    pub updated_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBProxyTarget {
    pub target_arn: String,
    pub endpoint: String,
    pub tracked_cluster_id: String,
    pub rds_resource_id: String,
    pub port: i32,
    /// `RDS_INSTANCE`, `RDS_SERVERLESS_ENDPOINT` or `TRACKED_CLUSTER`.
    #[rds(rename = "Type")]
    pub target_type: String,
}

// Requests

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateDBProxyRequest {
    pub db_proxy_name: String,
    /// `MYSQL` or `POSTGRESQL`.
    pub engine_family: String,
    pub auth: Vec<UserAuthConfig>,
    pub role_arn: String,
    pub vpc_subnet_ids: Vec<String>,
    pub vpc_security_group_ids: Vec<String>,
    #[rds(rename = "RequireTLS")]
    pub require_tls: Option<bool>,
    pub idle_client_timeout: Option<i32>,
    pub debug_logging: Option<bool>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CreateDBProxyRequest {
    pub fn new(
        db_proxy_name: &str,
        engine_family: &str,
        auth: Vec<UserAuthConfig>,
        role_arn: &str,
        vpc_subnet_ids: &[&str],
    ) -> Self {
        CreateDBProxyRequest {
            db_proxy_name: db_proxy_name.to_string(),
            engine_family: engine_family.to_string(),
            auth,
            role_arn: role_arn.to_string(),
            vpc_subnet_ids: vpc_subnet_ids.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteDBProxyRequest {
    pub db_proxy_name: String,
}

impl DeleteDBProxyRequest {
    pub fn new(db_proxy_name: &str) -> Self {
        DeleteDBProxyRequest {
            db_proxy_name: db_proxy_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBProxiesRequest {
    pub db_proxy_name: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub marker: Option<String>,
    pub max_records: Option<i32>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBProxyRequest {
    pub db_proxy_name: String,
    pub new_db_proxy_name: String,
    pub auth: Vec<UserAuthConfig>,
    #[rds(rename = "RequireTLS")]
    pub require_tls: Option<bool>,
    pub idle_client_timeout: Option<i32>,
    pub debug_logging: Option<bool>,
    pub role_arn: String,
    pub security_groups: Vec<String>,
}

impl ModifyDBProxyRequest {
    pub fn new(db_proxy_name: &str) -> Self {
        ModifyDBProxyRequest {
            db_proxy_name: db_proxy_name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBProxyTargetGroupsRequest {
    pub db_proxy_name: String,
    pub target_group_name: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub marker: Option<String>,
    pub max_records: Option<i32>,
}

impl DescribeDBProxyTargetGroupsRequest {
    pub fn new(db_proxy_name: &str) -> Self {
        DescribeDBProxyTargetGroupsRequest {
            db_proxy_name: db_proxy_name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeDBProxyTargetsRequest {
    pub db_proxy_name: String,
    pub target_group_name: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub marker: Option<String>,
    pub max_records: Option<i32>,
}

impl DescribeDBProxyTargetsRequest {
    pub fn new(db_proxy_name: &str) -> Self {
        DescribeDBProxyTargetsRequest {
            db_proxy_name: db_proxy_name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyDBProxyTargetGroupRequest {
    pub target_group_name: String,
    pub db_proxy_name: String,
    pub connection_pool_config: Option<ConnectionPoolConfiguration>,
    pub new_name: String,
}

impl ModifyDBProxyTargetGroupRequest {
    pub fn new(target_group_name: &str, db_proxy_name: &str) -> Self {
        ModifyDBProxyTargetGroupRequest {
            target_group_name: target_group_name.to_string(),
            db_proxy_name: db_proxy_name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct RegisterDBProxyTargetsRequest {
    pub db_proxy_name: String,
    pub target_group_name: String,
    pub db_instance_identifiers: Vec<String>,
    pub db_cluster_identifiers: Vec<String>,
}

impl RegisterDBProxyTargetsRequest {
    pub fn new(db_proxy_name: &str) -> Self {
        RegisterDBProxyTargetsRequest {
            db_proxy_name: db_proxy_name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeregisterDBProxyTargetsRequest {
    pub db_proxy_name: String,
    pub target_group_name: String,
    pub db_instance_identifiers: Vec<String>,
    pub db_cluster_identifiers: Vec<String>,
}

impl DeregisterDBProxyTargetsRequest {
    pub fn new(db_proxy_name: &str) -> Self {
        DeregisterDBProxyTargetsRequest {
            db_proxy_name: db_proxy_name.to_string(),
            ..Default::default()
        }
    }
}

// Results

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DBProxyResult {
    pub db_proxy: Option<DBProxy>,
}

pub type CreateDBProxyResult = DBProxyResult;
pub type DeleteDBProxyResult = DBProxyResult;
pub type ModifyDBProxyResult = DBProxyResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBProxiesResult {
    pub db_proxies: Vec<DBProxy>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBProxyTargetGroupsResult {
    pub target_groups: Vec<DBProxyTargetGroup>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeDBProxyTargetsResult {
    pub targets: Vec<DBProxyTarget>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ModifyDBProxyTargetGroupResult {
    pub db_proxy_target_group: Option<DBProxyTargetGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct RegisterDBProxyTargetsResult {
    pub db_proxy_targets: Vec<DBProxyTarget>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryWriter, ToQuery};
    use crate::xml::{FromXml, XmlNode};

    #[test]
    fn create_proxy_auth_list() {
        let auth = UserAuthConfig::new("arn:aws:secretsmanager:us-east-1:1:secret:s").iam_auth("REQUIRED");
        let req = CreateDBProxyRequest::new(
            "proxy1",
            "MYSQL",
            vec![auth],
            "arn:aws:iam::1:role/proxy",
            &["subnet-1", "subnet-2"],
        )
        .require_tls(true);
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        assert_eq!(w.get("Auth.member.1.AuthScheme"), Some("SECRETS"));
        assert_eq!(w.get("Auth.member.1.IAMAuth"), Some("REQUIRED"));
        assert_eq!(w.get("VpcSubnetIds.member.2"), Some("subnet-2"));
        assert_eq!(w.get("RequireTLS"), Some("true"));
    }

    #[test]
    fn target_group_pool_config() {
        let pool = ConnectionPoolConfiguration::default()
            .max_connections_percent(90)
            .session_pinning_filters(vec!["EXCLUDE_VARIABLE_SETS".to_string()]);
        let req = ModifyDBProxyTargetGroupRequest::new("default", "proxy1").connection_pool_config(pool);
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        assert_eq!(w.get("ConnectionPoolConfig.MaxConnectionsPercent"), Some("90"));
        assert_eq!(
            w.get("ConnectionPoolConfig.SessionPinningFilters.member.1"),
            Some("EXCLUDE_VARIABLE_SETS")
        );
    }

    #[test]
    fn targets_from_xml() {
        let xml = r#"<DescribeDBProxyTargetsResult><Targets><member>
              <Endpoint>db1.abc.us-east-1.rds.amazonaws.com</Endpoint>
              <Port>3306</Port><Type>RDS_INSTANCE</Type><RdsResourceId>db1</RdsResourceId>
            </member></Targets></DescribeDBProxyTargetsResult>"#;
        let r = DescribeDBProxyTargetsResult::from_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        assert_eq!(r.targets[0].target_type, "RDS_INSTANCE");
        assert_eq!(r.targets[0].port, 3306);
        assert!(r.marker.is_none());
    }
}
