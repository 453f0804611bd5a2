//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Account-level catalog operations: quotas, CA certificates, source regions,
//! pending maintenance and reserved instances.

use chrono::{DateTime, Utc};
use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{Filter, Tag};

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct AccountQuota {
    pub account_quota_name: String,
    pub used: i64,
    pub max: i64,
}

/// A CA certificate usable for SSL connections to DB instances.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct Certificate {
    pub certificate_identifier: String,
    pub certificate_type: String,
    pub thumbprint: String,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_till: Option<DateTime<Utc>>,
    pub certificate_arn: String,
    pub customer_override: Option<bool>,
    pub customer_override_valid_till: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct SourceRegion {
    pub region_name: String,
    pub endpoint: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct PendingMaintenanceAction {
    pub action: String,
    pub auto_applied_after_date: Option<DateTime<Utc>>,
    pub forced_apply_date: Option<DateTime<Utc>>,
    pub opt_in_status: String,
    pub current_apply_date: Option<DateTime<Utc>>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ResourcePendingMaintenanceActions {
    pub resource_identifier: String,
    pub pending_maintenance_action_details: Vec<PendingMaintenanceAction>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct RecurringCharge {
    pub recurring_charge_amount: f64,
    pub recurring_charge_frequency: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ReservedDBInstance {
    pub reserved_db_instance_id: String,
    pub reserved_db_instances_offering_id: String,
    pub db_instance_class: String,
    pub start_time: Option<DateTime<Utc>>,
    /// Term in seconds.
    pub duration: i32,
    pub fixed_price: f64,
    pub usage_price: f64,
    pub currency_code: String,
    pub db_instance_count: i32,
    pub product_description: String,
    pub offering_type: String,
    pub multi_az: bool,
    pub state: String,
    pub recurring_charges: Vec<RecurringCharge>,
    pub reserved_db_instance_arn: String,
    pub lease_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ReservedDBInstancesOffering {
    pub reserved_db_instances_offering_id: String,
    pub db_instance_class: String,
    pub duration: i32,
    pub fixed_price: f64,
    pub usage_price: f64,
    pub currency_code: String,
    pub product_description: String,
    pub offering_type: String,
    pub multi_az: bool,
    pub recurring_charges: Vec<RecurringCharge>,
}

// Requests

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeAccountAttributesRequest {}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeCertificatesRequest {
    pub certificate_identifier: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

/// Override (or clear the override of) the default CA certificate for new
/// DB instances.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyCertificatesRequest {
    pub certificate_identifier: String,
    pub remove_customer_override: Option<bool>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeSourceRegionsRequest {
    pub region_name: String,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribePendingMaintenanceActionsRequest {
    pub resource_identifier: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub marker: Option<String>,
    pub max_records: Option<i32>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ApplyPendingMaintenanceActionRequest {
    pub resource_identifier: String,
    pub apply_action: String,
    /// `immediate`, `next-maintenance` or `undo-opt-in`.
    pub opt_in_type: String,
}

impl ApplyPendingMaintenanceActionRequest {
    pub fn new(resource_identifier: &str, apply_action: &str, opt_in_type: &str) -> Self {
        ApplyPendingMaintenanceActionRequest {
            resource_identifier: resource_identifier.to_string(),
            apply_action: apply_action.to_string(),
            opt_in_type: opt_in_type.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeReservedDBInstancesRequest {
    pub reserved_db_instance_id: String,
    pub reserved_db_instances_offering_id: String,
    pub db_instance_class: String,
    pub duration: String,
    pub product_description: String,
    pub offering_type: String,
    pub multi_az: Option<bool>,
    pub lease_id: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeReservedDBInstancesOfferingsRequest {
    pub reserved_db_instances_offering_id: String,
    pub db_instance_class: String,
    pub duration: String,
    pub product_description: String,
    pub offering_type: String,
    pub multi_az: Option<bool>,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct PurchaseReservedDBInstancesOfferingRequest {
    pub reserved_db_instances_offering_id: String,
    pub reserved_db_instance_id: String,
    pub db_instance_count: Option<i32>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl PurchaseReservedDBInstancesOfferingRequest {
    pub fn new(offering_id: &str) -> Self {
        PurchaseReservedDBInstancesOfferingRequest {
            reserved_db_instances_offering_id: offering_id.to_string(),
            ..Default::default()
        }
    }
}

// Results

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeAccountAttributesResult {
    pub account_quotas: Vec<AccountQuota>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeCertificatesResult {
    pub certificates: Vec<Certificate>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ModifyCertificatesResult {
    pub certificate: Option<Certificate>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeSourceRegionsResult {
    pub marker: Option<String>,
    pub source_regions: Vec<SourceRegion>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribePendingMaintenanceActionsResult {
    pub pending_maintenance_actions: Vec<ResourcePendingMaintenanceActions>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ApplyPendingMaintenanceActionResult {
    pub resource_pending_maintenance_actions: Option<ResourcePendingMaintenanceActions>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeReservedDBInstancesResult {
    pub marker: Option<String>,
    pub reserved_db_instances: Vec<ReservedDBInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeReservedDBInstancesOfferingsResult {
    pub marker: Option<String>,
    pub reserved_db_instances_offerings: Vec<ReservedDBInstancesOffering>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct PurchaseReservedDBInstancesOfferingResult {
    pub reserved_db_instance: Option<ReservedDBInstance>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryWriter, ToQuery};
    use crate::xml::{FromXml, XmlNode};

    #[test]
    fn account_quotas_from_xml() {
        let xml = r#"<DescribeAccountAttributesResult>
              <AccountQuotas>
                <AccountQuota><Used>7</Used><AccountQuotaName>DBInstances</AccountQuotaName><Max>40</Max></AccountQuota>
                <AccountQuota><Used>0</Used><AccountQuotaName>ReservedDBInstances</AccountQuotaName><Max>40</Max></AccountQuota>
              </AccountQuotas>
            </DescribeAccountAttributesResult>"#;
        let r = DescribeAccountAttributesResult::from_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        assert_eq!(r.account_quotas.len(), 2);
        assert_eq!(r.account_quotas[0].account_quota_name, "DBInstances");
        assert_eq!(r.account_quotas[0].used, 7);
        assert_eq!(r.account_quotas[1].max, 40);
    }

    #[test]
    fn reserved_offerings_request() {
        let req = DescribeReservedDBInstancesOfferingsRequest::default()
            .db_instance_class("db.r5.large")
            .duration("31536000")
            .multi_az(false);
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        assert_eq!(w.get("DBInstanceClass"), Some("db.r5.large"));
        assert_eq!(w.get("Duration"), Some("31536000"));
        assert_eq!(w.get("MultiAZ"), Some("false"));
        assert_eq!(w.len(), 3);
    }

    #[test]
    fn empty_request_writes_nothing() {
        let mut w = QueryWriter::default();
        DescribeAccountAttributesRequest::default().to_query(&mut w, "");
        assert!(w.is_empty());
    }

    #[test]
    fn maintenance_actions_from_xml() {
        let xml = r#"<ApplyPendingMaintenanceActionResult>
              <ResourcePendingMaintenanceActions>
                <ResourceIdentifier>arn:aws:rds:us-east-1:1:db:mydb</ResourceIdentifier>
                <PendingMaintenanceActionDetails>
                  <PendingMaintenanceAction>
                    <Action>system-update</Action>
                    <OptInStatus>immediate</OptInStatus>
                    <CurrentApplyDate>2014-10-31T22:18:26.111Z</CurrentApplyDate>
                  </PendingMaintenanceAction>
                </PendingMaintenanceActionDetails>
              </ResourcePendingMaintenanceActions>
            </ApplyPendingMaintenanceActionResult>"#;
        let r = ApplyPendingMaintenanceActionResult::from_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        let a = r.resource_pending_maintenance_actions.unwrap();
        assert_eq!(a.pending_maintenance_action_details[0].action, "system-update");
        assert!(a.pending_maintenance_action_details[0].current_apply_date.is_some());
        assert!(a.pending_maintenance_action_details[0].forced_apply_date.is_none());
    }
}
