//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! On-premises (VMware) custom availability zones and installation media.

use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::Filter;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct CustomAvailabilityZone {
    pub custom_availability_zone_id: String,
    pub custom_availability_zone_name: String,
    pub custom_availability_zone_status: String,
    pub vpn_details: Option<VpnDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct VpnDetails {
    pub vpn_id: String,
    #[rds(rename = "VpnTunnelOriginatorIP")]
    pub vpn_tunnel_originator_ip: String,
    pub vpn_gateway_ip: String,
    #[rds(rename = "VpnPSK")]
    pub vpn_psk: String,
    pub vpn_name: String,
    pub vpn_state: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct InstallationMediaFailureCause {
    pub message: String,
}

/// Engine and OS installation media imported for a custom AZ.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct InstallationMedia {
    pub installation_media_id: String,
    pub custom_availability_zone_id: String,
    pub engine: String,
    pub engine_version: String,
    pub engine_installation_media_path: String,
    pub os_installation_media_path: String,
    pub status: String,
    pub failure_cause: Option<InstallationMediaFailureCause>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateCustomAvailabilityZoneRequest {
    pub custom_availability_zone_name: String,
    pub existing_vpn_id: String,
    pub new_vpn_tunnel_name: String,
    #[rds(rename = "VpnTunnelOriginatorIP")]
    pub vpn_tunnel_originator_ip: String,
}

impl CreateCustomAvailabilityZoneRequest {
    pub fn new(name: &str) -> Self {
        CreateCustomAvailabilityZoneRequest {
            custom_availability_zone_name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteCustomAvailabilityZoneRequest {
    pub custom_availability_zone_id: String,
}

impl DeleteCustomAvailabilityZoneRequest {
    pub fn new(id: &str) -> Self {
        DeleteCustomAvailabilityZoneRequest {
            custom_availability_zone_id: id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeCustomAvailabilityZonesRequest {
    pub custom_availability_zone_id: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ImportInstallationMediaRequest {
    pub custom_availability_zone_id: String,
    pub engine: String,
    pub engine_version: String,
    pub engine_installation_media_path: String,
    pub os_installation_media_path: String,
}

impl ImportInstallationMediaRequest {
    pub fn new(
        custom_availability_zone_id: &str,
        engine: &str,
        engine_version: &str,
        engine_installation_media_path: &str,
        os_installation_media_path: &str,
    ) -> Self {
        ImportInstallationMediaRequest {
            custom_availability_zone_id: custom_availability_zone_id.to_string(),
            engine: engine.to_string(),
            engine_version: engine_version.to_string(),
            engine_installation_media_path: engine_installation_media_path.to_string(),
            os_installation_media_path: os_installation_media_path.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteInstallationMediaRequest {
    pub installation_media_id: String,
}

impl DeleteInstallationMediaRequest {
    pub fn new(installation_media_id: &str) -> Self {
        DeleteInstallationMediaRequest {
            installation_media_id: installation_media_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeInstallationMediaRequest {
    pub installation_media_id: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct CustomAvailabilityZoneResult {
    pub custom_availability_zone: Option<CustomAvailabilityZone>,
}

pub type CreateCustomAvailabilityZoneResult = CustomAvailabilityZoneResult;
pub type DeleteCustomAvailabilityZoneResult = CustomAvailabilityZoneResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeCustomAvailabilityZonesResult {
    pub marker: Option<String>,
    pub custom_availability_zones: Vec<CustomAvailabilityZone>,
}

pub type ImportInstallationMediaResult = InstallationMedia;
pub type DeleteInstallationMediaResult = InstallationMedia;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeInstallationMediaResult {
    pub marker: Option<String>,
    pub installation_media: Vec<InstallationMedia>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryWriter, ToQuery};
    use crate::xml::{FromXml, XmlNode};

    #[test]
    fn custom_az_vpn_wire_names() {
        let req = CreateCustomAvailabilityZoneRequest::new("onprem-1")
            .new_vpn_tunnel_name("tunnel")
            .vpn_tunnel_originator_ip("203.0.113.10");
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        assert_eq!(w.get("VpnTunnelOriginatorIP"), Some("203.0.113.10"));
        assert_eq!(w.get("NewVpnTunnelName"), Some("tunnel"));
        assert!(!w.contains("ExistingVpnId"));

        let xml = "<CreateCustomAvailabilityZoneResult><CustomAvailabilityZone>\
                   <CustomAvailabilityZoneId>rds-caz-1</CustomAvailabilityZoneId>\
                   <VpnDetails><VpnPSK>secret</VpnPSK><VpnState>UP</VpnState></VpnDetails>\
                   </CustomAvailabilityZone></CreateCustomAvailabilityZoneResult>";
        let r = CreateCustomAvailabilityZoneResult::from_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        let vpn = r.custom_availability_zone.unwrap().vpn_details.unwrap();
        assert_eq!(vpn.vpn_psk, "secret");
        assert_eq!(vpn.vpn_state, "UP");
    }
}
