//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Lookup of service error codes to [`RdsErrorCode`] values.

use std::collections::HashMap;

use crate::error::{RdsError, RdsErrorCode};
use crate::xml::ServiceErrorBody;
use tracing::trace;

use RdsErrorCode::*;

/// Error codes returned by the RDS service, as they appear in the `Code`
/// element of an error response.
pub(crate) const SERVICE_ERROR_CODES: &[(&str, RdsErrorCode)] = &[
    ("AuthorizationAlreadyExists", AuthorizationAlreadyExists),
    ("AuthorizationNotFound", AuthorizationNotFound),
    ("AuthorizationQuotaExceeded", AuthorizationQuotaExceeded),
    ("BackupPolicyNotFoundFault", BackupPolicyNotFound),
    ("CertificateNotFound", CertificateNotFound),
    ("CustomAvailabilityZoneAlreadyExists", CustomAvailabilityZoneAlreadyExists),
    ("CustomAvailabilityZoneNotFound", CustomAvailabilityZoneNotFound),
    ("CustomAvailabilityZoneQuotaExceeded", CustomAvailabilityZoneQuotaExceeded),
    ("DBClusterAlreadyExistsFault", DBClusterAlreadyExists),
    ("DBClusterBacktrackNotFoundFault", DBClusterBacktrackNotFound),
    ("DBClusterEndpointAlreadyExistsFault", DBClusterEndpointAlreadyExists),
    ("DBClusterEndpointNotFoundFault", DBClusterEndpointNotFound),
    ("DBClusterEndpointQuotaExceededFault", DBClusterEndpointQuotaExceeded),
    ("DBClusterNotFoundFault", DBClusterNotFound),
    ("DBClusterParameterGroupNotFound", DBClusterParameterGroupNotFound),
    ("DBClusterQuotaExceededFault", DBClusterQuotaExceeded),
    ("DBClusterRoleAlreadyExists", DBClusterRoleAlreadyExists),
    ("DBClusterRoleNotFound", DBClusterRoleNotFound),
    ("DBClusterRoleQuotaExceeded", DBClusterRoleQuotaExceeded),
    ("DBClusterSnapshotAlreadyExistsFault", DBClusterSnapshotAlreadyExists),
    ("DBClusterSnapshotNotFoundFault", DBClusterSnapshotNotFound),
    ("DBInstanceAlreadyExists", DBInstanceAlreadyExists),
    ("DBInstanceAutomatedBackupNotFound", DBInstanceAutomatedBackupNotFound),
    ("DBInstanceAutomatedBackupQuotaExceeded", DBInstanceAutomatedBackupQuotaExceeded),
    ("DBInstanceNotFound", DBInstanceNotFound),
    ("DBInstanceRoleAlreadyExists", DBInstanceRoleAlreadyExists),
    ("DBInstanceRoleNotFound", DBInstanceRoleNotFound),
    ("DBInstanceRoleQuotaExceeded", DBInstanceRoleQuotaExceeded),
    ("DBLogFileNotFoundFault", DBLogFileNotFound),
    ("DBParameterGroupAlreadyExists", DBParameterGroupAlreadyExists),
    ("DBParameterGroupNotFound", DBParameterGroupNotFound),
    ("DBParameterGroupQuotaExceeded", DBParameterGroupQuotaExceeded),
    ("DBProxyAlreadyExistsFault", DBProxyAlreadyExists),
    ("DBProxyNotFoundFault", DBProxyNotFound),
    ("DBProxyQuotaExceededFault", DBProxyQuotaExceeded),
    ("DBProxyTargetAlreadyRegisteredFault", DBProxyTargetAlreadyRegistered),
    ("DBProxyTargetGroupNotFoundFault", DBProxyTargetGroupNotFound),
    ("DBProxyTargetNotFoundFault", DBProxyTargetNotFound),
    ("DBSecurityGroupAlreadyExists", DBSecurityGroupAlreadyExists),
    ("DBSecurityGroupNotFound", DBSecurityGroupNotFound),
    ("DBSecurityGroupNotSupported", DBSecurityGroupNotSupported),
    ("QuotaExceeded.DBSecurityGroup", DBSecurityGroupQuotaExceeded),
    ("DBSnapshotAlreadyExists", DBSnapshotAlreadyExists),
    ("DBSnapshotNotFound", DBSnapshotNotFound),
    ("DBSubnetGroupAlreadyExists", DBSubnetGroupAlreadyExists),
    ("DBSubnetGroupDoesNotCoverEnoughAZs", DBSubnetGroupDoesNotCoverEnoughAZs),
    ("DBSubnetGroupNotAllowedFault", DBSubnetGroupNotAllowed),
    ("DBSubnetGroupNotFoundFault", DBSubnetGroupNotFound),
    ("DBSubnetGroupQuotaExceeded", DBSubnetGroupQuotaExceeded),
    ("DBSubnetQuotaExceededFault", DBSubnetQuotaExceeded),
    ("DBUpgradeDependencyFailure", DBUpgradeDependencyFailure),
    ("DomainNotFoundFault", DomainNotFound),
    ("EventSubscriptionQuotaExceeded", EventSubscriptionQuotaExceeded),
    ("ExportTaskAlreadyExists", ExportTaskAlreadyExists),
    ("ExportTaskNotFound", ExportTaskNotFound),
    ("GlobalClusterAlreadyExistsFault", GlobalClusterAlreadyExists),
    ("GlobalClusterNotFoundFault", GlobalClusterNotFound),
    ("GlobalClusterQuotaExceededFault", GlobalClusterQuotaExceeded),
    ("IamRoleMissingPermissions", IamRoleMissingPermissions),
    ("IamRoleNotFound", IamRoleNotFound),
    ("InstallationMediaAlreadyExists", InstallationMediaAlreadyExists),
    ("InstallationMediaNotFound", InstallationMediaNotFound),
    ("InstanceQuotaExceeded", InstanceQuotaExceeded),
    ("InsufficientAvailableIPsInSubnetFault", InsufficientAvailableIPsInSubnet),
    ("InsufficientDBClusterCapacityFault", InsufficientDBClusterCapacity),
    ("InsufficientDBInstanceCapacity", InsufficientDBInstanceCapacity),
    ("InsufficientStorageClusterCapacity", InsufficientStorageClusterCapacity),
    ("InvalidDBClusterCapacityFault", InvalidDBClusterCapacity),
    ("InvalidDBClusterEndpointStateFault", InvalidDBClusterEndpointState),
    ("InvalidDBClusterSnapshotStateFault", InvalidDBClusterSnapshotState),
    ("InvalidDBClusterStateFault", InvalidDBClusterState),
    ("InvalidDBInstanceAutomatedBackupState", InvalidDBInstanceAutomatedBackupState),
    ("InvalidDBInstanceState", InvalidDBInstanceState),
    ("InvalidDBParameterGroupState", InvalidDBParameterGroupState),
    ("InvalidDBProxyStateFault", InvalidDBProxyState),
    ("InvalidDBSecurityGroupState", InvalidDBSecurityGroupState),
    ("InvalidDBSnapshotState", InvalidDBSnapshotState),
    ("InvalidDBSubnetGroupFault", InvalidDBSubnetGroup),
    ("InvalidDBSubnetGroupStateFault", InvalidDBSubnetGroupState),
    ("InvalidDBSubnetStateFault", InvalidDBSubnetState),
    ("InvalidEventSubscriptionState", InvalidEventSubscriptionState),
    ("InvalidExportOnly", InvalidExportOnly),
    ("InvalidExportSourceState", InvalidExportSourceState),
    ("InvalidExportTaskStateFault", InvalidExportTaskState),
    ("InvalidGlobalClusterStateFault", InvalidGlobalClusterState),
    ("InvalidOptionGroupStateFault", InvalidOptionGroupState),
    ("InvalidRestoreFault", InvalidRestore),
    ("InvalidS3BucketFault", InvalidS3Bucket),
    ("InvalidSubnet", InvalidSubnet),
    ("InvalidVPCNetworkStateFault", InvalidVPCNetworkState),
    ("KMSKeyNotAccessibleFault", KMSKeyNotAccessible),
    ("OptionGroupAlreadyExistsFault", OptionGroupAlreadyExists),
    ("OptionGroupNotFoundFault", OptionGroupNotFound),
    ("OptionGroupQuotaExceededFault", OptionGroupQuotaExceeded),
    ("PointInTimeRestoreNotEnabled", PointInTimeRestoreNotEnabled),
    ("ProvisionedIopsNotAvailableInAZFault", ProvisionedIopsNotAvailableInAZ),
    ("ReservedDBInstanceAlreadyExists", ReservedDBInstanceAlreadyExists),
    ("ReservedDBInstanceNotFound", ReservedDBInstanceNotFound),
    ("ReservedDBInstanceQuotaExceeded", ReservedDBInstanceQuotaExceeded),
    ("ReservedDBInstancesOfferingNotFound", ReservedDBInstancesOfferingNotFound),
    ("ResourceNotFoundFault", ResourceNotFound),
    ("SNSInvalidTopic", SNSInvalidTopic),
    ("SNSNoAuthorization", SNSNoAuthorization),
    ("SNSTopicArnNotFound", SNSTopicArnNotFound),
    ("SharedSnapshotQuotaExceeded", SharedSnapshotQuotaExceeded),
    ("SnapshotQuotaExceeded", SnapshotQuotaExceeded),
    ("SourceNotFound", SourceNotFound),
    ("StorageQuotaExceeded", StorageQuotaExceeded),
    ("StorageTypeNotSupported", StorageTypeNotSupported),
    ("SubnetAlreadyInUse", SubnetAlreadyInUse),
    ("SubscriptionAlreadyExist", SubscriptionAlreadyExist),
    ("SubscriptionCategoryNotFound", SubscriptionCategoryNotFound),
    ("SubscriptionNotFound", SubscriptionNotFound),
];

// Codes shared by all Query protocol services.
const COMMON_ERROR_CODES: &[(&str, RdsErrorCode)] = &[
    ("Throttling", Throttling),
    ("ThrottlingException", Throttling),
    ("ThrottledException", Throttling),
    ("RequestThrottled", Throttling),
    ("RequestThrottledException", Throttling),
    ("RequestLimitExceeded", Throttling),
    ("TooManyRequestsException", Throttling),
    ("InvalidParameterValue", InvalidParameter),
    ("InvalidParameterCombination", InvalidParameter),
    ("InvalidParameter", InvalidParameter),
    ("MissingParameter", InvalidParameter),
    ("MissingAction", InvalidParameter),
    ("InvalidAction", InvalidParameter),
    ("InvalidQueryParameter", InvalidParameter),
    ("MalformedQueryString", InvalidParameter),
    ("ValidationError", InvalidParameter),
    ("AuthFailure", AuthFailure),
    ("InvalidClientTokenId", AuthFailure),
    ("SignatureDoesNotMatch", AuthFailure),
    ("IncompleteSignature", AuthFailure),
    ("MissingAuthenticationToken", AuthFailure),
    ("UnrecognizedClientException", AuthFailure),
    ("AccessDenied", AccessDenied),
    ("AccessDeniedException", AccessDenied),
    ("NotAuthorized", AccessDenied),
    ("OptInRequired", AccessDenied),
    ("ExpiredToken", ExpiredToken),
    ("ExpiredTokenException", ExpiredToken),
    ("RequestExpired", ExpiredToken),
    ("InternalFailure", ServerError),
    ("InternalError", ServerError),
    ("ServiceUnavailable", ServiceUnavailable),
    ("ServiceUnavailableException", ServiceUnavailable),
];

/// The lookup table from service error codes to [`RdsErrorCode`].
///
/// Built once when a [`Client`](crate::Client) is created and shared by all of
/// its clones. Codes not found in the table map to [`RdsErrorCode::ServiceError`].
#[derive(Debug)]
pub struct ErrorRegistry {
    codes: HashMap<&'static str, RdsErrorCode>,
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorRegistry {
    pub fn new() -> ErrorRegistry {
        let mut codes =
            HashMap::with_capacity(SERVICE_ERROR_CODES.len() + COMMON_ERROR_CODES.len());
        for (k, v) in COMMON_ERROR_CODES.iter().chain(SERVICE_ERROR_CODES.iter()) {
            codes.insert(*k, *v);
        }
        ErrorRegistry { codes }
    }

    /// Number of codes in the registry.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Map a service error code to its [`RdsErrorCode`].
    ///
    /// Codes are matched exactly first. Some faults are reported both with and
    /// without a trailing `Fault`, so the other form is tried next.
    pub fn lookup(&self, code: &str) -> RdsErrorCode {
        if let Some(c) = self.codes.get(code) {
            return *c;
        }
        let alt = match code.strip_suffix("Fault") {
            Some(base) => base.to_string(),
            None => format!("{}Fault", code),
        };
        self.codes
            .get(alt.as_str())
            .copied()
            .unwrap_or(RdsErrorCode::ServiceError)
    }

    /// Build the error for a failed http response.
    ///
    /// When the body is not a service error document, a generic
    /// [`RdsErrorCode::ServiceError`] is returned carrying the status and the raw body.
    pub(crate) fn to_error(
        &self,
        status: u16,
        body: &str,
        header_request_id: Option<&str>,
    ) -> RdsError {
        let mut err = match ServiceErrorBody::parse(body) {
            Some(eb) => {
                let code = if eb.code.is_empty() {
                    status_code(status)
                } else {
                    self.lookup(&eb.code)
                };
                trace!("service error {} mapped to {:?}", eb.code, code);
                let mut e = RdsError::new(code, &eb.message);
                e.service_code = eb.code;
                e.error_type = eb.error_type;
                e.request_id = eb.request_id;
                e
            }
            None => RdsError::new(
                status_code(status),
                &format!("unexpected http status {}: {}", status, body),
            ),
        };
        err.status = status;
        if err.request_id.is_none() {
            err.request_id = header_request_id.map(|s| s.to_string());
        }
        err
    }
}

// Error kind to use when the body gives no usable code.
fn status_code(status: u16) -> RdsErrorCode {
    match status {
        429 => Throttling,
        503 => ServiceUnavailable,
        s if s >= 500 => ServerError,
        _ => ServiceError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_every_service_code() {
        let reg = ErrorRegistry::new();
        for (code, kind) in SERVICE_ERROR_CODES {
            assert_eq!(reg.lookup(code), *kind, "code {}", code);
        }
        assert!(SERVICE_ERROR_CODES.len() >= 110);
        assert!(reg.len() >= SERVICE_ERROR_CODES.len());
    }

    #[test]
    fn lookup_tolerates_fault_suffix() {
        let reg = ErrorRegistry::new();
        assert_eq!(reg.lookup("DBClusterNotFound"), DBClusterNotFound);
        assert_eq!(reg.lookup("DBInstanceNotFoundFault"), DBInstanceNotFound);
        assert_eq!(reg.lookup("SomethingNew"), ServiceError);
        assert_eq!(reg.lookup("Throttling"), Throttling);
    }

    #[test]
    fn error_from_service_body() {
        let body = r#"<ErrorResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <Error>
    <Type>Sender</Type>
    <Code>DBInstanceNotFound</Code>
    <Message>DBInstance mydb not found.</Message>
  </Error>
  <RequestId>9f8e6b22-0000-4a5c-8c1d-12ab34cd56ef</RequestId>
</ErrorResponse>"#;
        let e = ErrorRegistry::new().to_error(404, body, None);
        assert_eq!(e.code, DBInstanceNotFound);
        assert_eq!(e.service_code, "DBInstanceNotFound");
        assert_eq!(e.error_type, "Sender");
        assert_eq!(e.message, "DBInstance mydb not found.");
        assert_eq!(e.status, 404);
        assert_eq!(
            e.request_id.as_deref(),
            Some("9f8e6b22-0000-4a5c-8c1d-12ab34cd56ef")
        );
    }

    #[test]
    fn unknown_code_keeps_raw_code() {
        let body = "<ErrorResponse><Error><Type>Sender</Type><Code>BrandNewFault</Code>\
                    <Message>m</Message></Error><RequestId>r1</RequestId></ErrorResponse>";
        let e = ErrorRegistry::new().to_error(400, body, None);
        assert_eq!(e.code, ServiceError);
        assert_eq!(e.service_code, "BrandNewFault");
    }

    #[test]
    fn non_xml_body() {
        let e = ErrorRegistry::new().to_error(502, "Bad Gateway", Some("hdr-rid"));
        assert_eq!(e.code, ServerError);
        assert!(e.message.contains("Bad Gateway"));
        assert_eq!(e.request_id.as_deref(), Some("hdr-rid"));
        assert!(e.is_retryable());
    }
}
