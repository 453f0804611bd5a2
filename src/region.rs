//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::{ia_err, RdsError};
use url::Url;

// Regions where the RDS service is available.
const KNOWN_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "af-south-1",
    "ap-east-1",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ca-central-1",
    "ca-west-1",
    "eu-central-1",
    "eu-central-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-south-1",
    "eu-south-2",
    "eu-north-1",
    "il-central-1",
    "me-south-1",
    "me-central-1",
    "sa-east-1",
    "us-gov-east-1",
    "us-gov-west-1",
    "cn-north-1",
    "cn-northwest-1",
];

/// A cloud region, such as `us-east-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: String,
}

impl Region {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The partition the region belongs to: `aws`, `aws-cn` or `aws-us-gov`.
    pub fn partition(&self) -> &str {
        if self.id.starts_with("cn-") {
            "aws-cn"
        } else if self.id.starts_with("us-gov-") {
            "aws-us-gov"
        } else {
            "aws"
        }
    }

    pub fn dns_suffix(&self) -> &str {
        if self.id.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        }
    }

    /// The RDS endpoint of this region, e.g. `https://rds.us-east-1.amazonaws.com`.
    pub fn rds_endpoint(&self) -> String {
        format!("https://rds.{}.{}", self.id, self.dns_suffix())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Validate a region identifier against the known regions.
pub(crate) fn string_to_region(id: &str) -> Result<Region, RdsError> {
    let lid = id.trim().to_lowercase();
    if KNOWN_REGIONS.contains(&lid.as_str()) {
        return Ok(Region { id: lid });
    }
    ia_err!(
        "unknown region '{}': use ClientBuilder::endpoint() to connect to a region not known to this SDK",
        id
    )
}

// Recovers the region from an endpoint of the form `rds.<region>.amazonaws.com[.cn]`
// (also `rds-fips.<region>...`). The region is not validated.
pub(crate) fn region_from_endpoint(url: &Url) -> Option<Region> {
    let host = url.host_str()?;
    let mut parts = host.split('.');
    let service = parts.next()?;
    if !service.starts_with("rds") {
        return None;
    }
    let id = parts.next()?;
    if parts.next()? != "amazonaws" {
        return None;
    }
    Some(Region { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_regions() {
        let r = string_to_region("us-west-2").unwrap();
        assert_eq!(r.id(), "us-west-2");
        assert_eq!(r.partition(), "aws");
        assert_eq!(r.rds_endpoint(), "https://rds.us-west-2.amazonaws.com");

        let r = string_to_region("CN-NORTH-1").unwrap();
        assert_eq!(r.partition(), "aws-cn");
        assert_eq!(r.rds_endpoint(), "https://rds.cn-north-1.amazonaws.com.cn");

        assert_eq!(string_to_region("us-gov-west-1").unwrap().partition(), "aws-us-gov");
    }

    #[test]
    fn unknown_region() {
        let e = string_to_region("mars-north-1").unwrap_err();
        assert_eq!(e.code, crate::RdsErrorCode::IllegalArgument);
    }

    #[test]
    fn region_from_endpoints() {
        let u = Url::parse("https://rds.eu-west-1.amazonaws.com").unwrap();
        assert_eq!(region_from_endpoint(&u).unwrap().id(), "eu-west-1");
        let u = Url::parse("https://rds.cn-northwest-1.amazonaws.com.cn/").unwrap();
        assert_eq!(region_from_endpoint(&u).unwrap().id(), "cn-northwest-1");
        let u = Url::parse("http://localhost:8080").unwrap();
        assert!(region_from_endpoint(&u).is_none());
    }
}
