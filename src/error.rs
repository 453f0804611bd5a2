//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
include!(concat!(env!("OUT_DIR"), "/ua.rs"));

pub(crate) fn sdk_version() -> &'static str {
    SDK_VERSION
}

pub(crate) fn user_agent() -> &'static str {
    USER_AGENT
}

/// The error returned by every fallible operation in this library.
///
/// Errors raised by the service carry the raw service error `Code` in
/// [`service_code`](RdsError::service_code), the fault type (`Sender` or `Receiver`),
/// the http status and the request id. Client-side errors leave those empty.
#[derive(Debug, Clone)]
pub struct RdsError {
    pub code: RdsErrorCode,
    pub message: String,
    /// The error code string as returned by the service.
    pub service_code: String,
    /// `Sender` or `Receiver`, as returned by the service.
    pub error_type: String,
    /// The http status of the failed response, or 0 for client-side errors.
    pub status: u16,
    pub request_id: Option<String>,
}

impl std::error::Error for RdsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl std::fmt::Display for RdsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "code={:?} message=\"{}\"", self.code, self.message)?;
        if !self.service_code.is_empty() {
            write!(f, " service_code={}", self.service_code)?;
        }
        if self.status != 0 {
            write!(f, " status={}", self.status)?;
        }
        if let Some(rid) = &self.request_id {
            write!(f, " request_id={}", rid)?;
        }
        Ok(())
    }
}

impl RdsError {
    pub fn new(code: RdsErrorCode, msg: &str) -> RdsError {
        RdsError {
            code,
            message: msg.to_string(),
            service_code: String::new(),
            error_type: String::new(),
            status: 0,
            request_id: None,
        }
    }

    /// Returns true if the error was returned by the remote service (as opposed
    /// to being raised in the client).
    pub fn is_service_error(&self) -> bool {
        self.status != 0 || !self.service_code.is_empty()
    }

    /// Returns true if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self.code {
            RdsErrorCode::Throttling
            | RdsErrorCode::ServerError
            | RdsErrorCode::ServiceUnavailable
            | RdsErrorCode::RequestTimeout
            | RdsErrorCode::ConnectionError => true,
            _ => self.status == 429 || self.status >= 500,
        }
    }

    /// Returns true if refreshing credentials may fix the error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.code,
            RdsErrorCode::ExpiredToken | RdsErrorCode::AuthFailure
        )
    }
}

macro_rules! ia_error {
    ($($t:tt)*) => {{
        let m = format!($($t)*);
        crate::error::RdsError::new(
            crate::error::RdsErrorCode::IllegalArgument,
            &format!("{} ({})", m, crate::error::sdk_version()),
        )
    }};
}

pub(crate) use ia_error;

macro_rules! ia_err {
    ($($t:tt)*) => {{
        Err(crate::error::ia_error!($($t)*))
    }};
}

pub(crate) use ia_err;

impl From<reqwest::Error> for RdsError {
    fn from(e: reqwest::Error) -> Self {
        let code = if e.is_timeout() {
            RdsErrorCode::RequestTimeout
        } else if e.is_connect() || e.is_request() || e.is_body() {
            RdsErrorCode::ConnectionError
        } else {
            RdsErrorCode::ServerError
        };
        RdsError::new(
            code,
            &format!("reqwest error: {} ({})", e, crate::error::sdk_version()),
        )
    }
}

impl From<reqwest::header::InvalidHeaderValue> for RdsError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        ia_error!("invalid header value: {}", e)
    }
}

impl From<reqwest::header::ToStrError> for RdsError {
    fn from(e: reqwest::header::ToStrError) -> Self {
        ia_error!("header value is not a valid string: {}", e)
    }
}

impl From<url::ParseError> for RdsError {
    fn from(e: url::ParseError) -> Self {
        ia_error!("error parsing url: {}", e)
    }
}

impl From<chrono::ParseError> for RdsError {
    fn from(e: chrono::ParseError) -> Self {
        RdsError::new(
            RdsErrorCode::Unmarshall,
            &format!("invalid datetime value: {}", e),
        )
    }
}

impl From<quick_xml::Error> for RdsError {
    fn from(e: quick_xml::Error) -> Self {
        RdsError::new(RdsErrorCode::Unmarshall, &format!("invalid xml: {}", e))
    }
}

impl From<serde_json::Error> for RdsError {
    fn from(e: serde_json::Error) -> Self {
        RdsError::new(
            RdsErrorCode::CredentialsError,
            &format!("invalid json document: {}", e),
        )
    }
}

impl From<std::io::Error> for RdsError {
    fn from(e: std::io::Error) -> Self {
        ia_error!("i/o error: {}", e)
    }
}

impl From<Box<dyn std::error::Error>> for RdsError {
    fn from(e: Box<dyn std::error::Error>) -> Self {
        ia_error!("{}", e)
    }
}

/// RdsErrorCode represents the kind of an [`RdsError`].
///
/// The first group are raised inside the client. The second group are the
/// common error codes any AWS Query service may return. The rest map one to one
/// to the error codes of the RDS service; see
/// [`ErrorRegistry`](crate::ErrorRegistry) for the wire code of each.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum RdsErrorCode {
    /// IllegalArgument error represents the application provided an illegal
    /// argument for the operation, or the client configuration is incomplete.
    IllegalArgument,

    /// RequestTimeout error represents the request did not complete in time,
    /// or a waiter expired before the resource reached the desired state.
    RequestTimeout,

    /// ConnectionError represents a transport failure before a response was
    /// received. It is retryable.
    ConnectionError,

    /// Unmarshall represents a response body that could not be parsed.
    Unmarshall,

    /// CredentialsError represents a failure resolving or refreshing credentials.
    CredentialsError,

    /// ServiceError is returned for service error codes that are not known to
    /// this SDK. The raw code is kept in [`RdsError::service_code`].
    ServiceError,

    /// The request was throttled by the service. It is retryable.
    Throttling,

    /// A parameter was missing, malformed or not valid in combination with others.
    InvalidParameter,

    /// The request signature or credentials were rejected.
    AuthFailure,

    /// The caller is not authorized to perform the action.
    AccessDenied,

    /// The security token included in the request has expired.
    ExpiredToken,

    /// ServerError represents an internal failure of the service.
    /// The operation that leads to this error may be retried.
    ServerError,

    /// ServiceUnavailable error represents the service is temporarily unavailable.
    ServiceUnavailable,

    // Service error codes.
    AuthorizationAlreadyExists,
    AuthorizationNotFound,
    AuthorizationQuotaExceeded,
    BackupPolicyNotFound,
    CertificateNotFound,
    CustomAvailabilityZoneAlreadyExists,
    CustomAvailabilityZoneNotFound,
    CustomAvailabilityZoneQuotaExceeded,
    DBClusterAlreadyExists,
    DBClusterBacktrackNotFound,
    DBClusterEndpointAlreadyExists,
    DBClusterEndpointNotFound,
    DBClusterEndpointQuotaExceeded,
    DBClusterNotFound,
    DBClusterParameterGroupNotFound,
    DBClusterQuotaExceeded,
    DBClusterRoleAlreadyExists,
    DBClusterRoleNotFound,
    DBClusterRoleQuotaExceeded,
    DBClusterSnapshotAlreadyExists,
    DBClusterSnapshotNotFound,
    DBInstanceAlreadyExists,
    DBInstanceAutomatedBackupNotFound,
    DBInstanceAutomatedBackupQuotaExceeded,
    DBInstanceNotFound,
    DBInstanceRoleAlreadyExists,
    DBInstanceRoleNotFound,
    DBInstanceRoleQuotaExceeded,
    DBLogFileNotFound,
    DBParameterGroupAlreadyExists,
    DBParameterGroupNotFound,
    DBParameterGroupQuotaExceeded,
    DBProxyAlreadyExists,
    DBProxyNotFound,
    DBProxyQuotaExceeded,
    DBProxyTargetAlreadyRegistered,
    DBProxyTargetGroupNotFound,
    DBProxyTargetNotFound,
    DBSecurityGroupAlreadyExists,
    DBSecurityGroupNotFound,
    DBSecurityGroupNotSupported,
    DBSecurityGroupQuotaExceeded,
    DBSnapshotAlreadyExists,
    DBSnapshotNotFound,
    DBSubnetGroupAlreadyExists,
    DBSubnetGroupDoesNotCoverEnoughAZs,
    DBSubnetGroupNotAllowed,
    DBSubnetGroupNotFound,
    DBSubnetGroupQuotaExceeded,
    DBSubnetQuotaExceeded,
    DBUpgradeDependencyFailure,
    DomainNotFound,
    EventSubscriptionQuotaExceeded,
    ExportTaskAlreadyExists,
    ExportTaskNotFound,
    GlobalClusterAlreadyExists,
    GlobalClusterNotFound,
    GlobalClusterQuotaExceeded,
    IamRoleMissingPermissions,
    IamRoleNotFound,
    InstallationMediaAlreadyExists,
    InstallationMediaNotFound,
    InstanceQuotaExceeded,
    InsufficientAvailableIPsInSubnet,
    InsufficientDBClusterCapacity,
    InsufficientDBInstanceCapacity,
    InsufficientStorageClusterCapacity,
    InvalidDBClusterCapacity,
    InvalidDBClusterEndpointState,
    InvalidDBClusterSnapshotState,
    InvalidDBClusterState,
    InvalidDBInstanceAutomatedBackupState,
    InvalidDBInstanceState,
    InvalidDBParameterGroupState,
    InvalidDBProxyState,
    InvalidDBSecurityGroupState,
    InvalidDBSnapshotState,
    InvalidDBSubnetGroup,
    InvalidDBSubnetGroupState,
    InvalidDBSubnetState,
    InvalidEventSubscriptionState,
    InvalidExportOnly,
    InvalidExportSourceState,
    InvalidExportTaskState,
    InvalidGlobalClusterState,
    InvalidOptionGroupState,
    InvalidRestore,
    InvalidS3Bucket,
    InvalidSubnet,
    InvalidVPCNetworkState,
    KMSKeyNotAccessible,
    OptionGroupAlreadyExists,
    OptionGroupNotFound,
    OptionGroupQuotaExceeded,
    PointInTimeRestoreNotEnabled,
    ProvisionedIopsNotAvailableInAZ,
    ReservedDBInstanceAlreadyExists,
    ReservedDBInstanceNotFound,
    ReservedDBInstanceQuotaExceeded,
    ReservedDBInstancesOfferingNotFound,
    ResourceNotFound,
    SNSInvalidTopic,
    SNSNoAuthorization,
    SNSTopicArnNotFound,
    SharedSnapshotQuotaExceeded,
    SnapshotQuotaExceeded,
    SourceNotFound,
    StorageQuotaExceeded,
    StorageTypeNotSupported,
    SubnetAlreadyInUse,
    SubscriptionAlreadyExist,
    SubscriptionCategoryNotFound,
    SubscriptionNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ia_macros_append_version() {
        let e = ia_error!("bad value {}", 5);
        assert_eq!(e.code, RdsErrorCode::IllegalArgument);
        assert!(e.message.starts_with("bad value 5 ("));
        assert!(e.message.ends_with(&format!("({})", sdk_version())));
        assert!(!e.is_service_error());

        let r: Result<(), RdsError> = ia_err!("missing {}", "thing");
        assert!(r.is_err());
    }

    #[test]
    fn retryable_and_auth() {
        let mut e = RdsError::new(RdsErrorCode::DBInstanceNotFound, "nope");
        assert!(!e.is_retryable());
        e.status = 503;
        assert!(e.is_retryable());
        assert!(RdsError::new(RdsErrorCode::Throttling, "").is_retryable());
        assert!(RdsError::new(RdsErrorCode::ExpiredToken, "").is_auth_error());
        assert!(!RdsError::new(RdsErrorCode::InvalidParameter, "").is_auth_error());
    }

    #[test]
    fn display_includes_service_fields() {
        let mut e = RdsError::new(RdsErrorCode::DBSnapshotNotFound, "snapshot x not found");
        e.service_code = "DBSnapshotNotFound".to_string();
        e.status = 404;
        e.request_id = Some("abc-123".to_string());
        let s = e.to_string();
        assert!(s.contains("code=DBSnapshotNotFound"));
        assert!(s.contains("status=404"));
        assert!(s.contains("request_id=abc-123"));
    }
}
