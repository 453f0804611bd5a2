//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Polling helpers that wait for a resource to reach a state.
//!
//! Operations like `CreateDBInstance` return as soon as the service accepted
//! the request; the resource then goes through intermediate states
//! (`creating`, `backing-up`, ...) for minutes. The `wait_for_*` methods poll
//! the matching `Describe*` operation every `delay` until the resource reaches
//! the desired state, fails, or `wait` has elapsed:
//!
//! ```no_run
//! use rds_rust_sdk::{Client, CreateDBInstanceRequest};
//! use std::time::Duration;
//! # async fn run(client: &Client) -> Result<(), rds_rust_sdk::RdsError> {
//! let req = CreateDBInstanceRequest::new("mydb", "db.t3.micro", "postgres")
//!     .allocated_storage(20)
//!     .master_username("admin")
//!     .master_user_password("change-me-please");
//! client.create_db_instance(&req).await?;
//! client
//!     .wait_for_db_instance_available("mydb", Duration::from_secs(1800), Duration::from_secs(30))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::client::Client;
use crate::error::{ia_err, RdsError, RdsErrorCode};
use crate::model::{
    DescribeDBClustersRequest, DescribeDBInstancesRequest, DescribeDBSnapshotsRequest,
};
use std::result::Result;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::trace;

// States from which a resource never becomes available without user action.
const FAILED_STATES: &[&str] = &[
    "deleted",
    "deleting",
    "failed",
    "incompatible-restore",
    "incompatible-parameters",
];

// States in which an instance is not going away.
const NOT_DELETING_STATES: &[&str] = &[
    "creating",
    "modifying",
    "rebooting",
    "resetting-master-credentials",
];

#[derive(Debug, Clone, Copy)]
enum Target<'a> {
    InstanceAvailable(&'a str),
    InstanceDeleted(&'a str),
    SnapshotAvailable(&'a str),
    ClusterAvailable(&'a str),
}

#[derive(Debug)]
enum Progress {
    Done,
    Pending(String),
    Failed(RdsError),
}

impl Client {
    /// Wait for a DB instance to become `available`.
    ///
    /// Fails with [`RdsErrorCode::InvalidDBInstanceState`] if the instance
    /// enters a state it can't become available from (`failed`, `deleting`, ...),
    /// and with [`RdsErrorCode::RequestTimeout`] if `wait` elapses first.
    pub async fn wait_for_db_instance_available(
        &self,
        db_instance_identifier: &str,
        wait: Duration,
        delay: Duration,
    ) -> Result<(), RdsError> {
        self.wait_until(Target::InstanceAvailable(db_instance_identifier), wait, delay)
            .await
    }

    /// Wait for a DB instance to be deleted.
    ///
    /// Returns when the service reports the instance as not found (or `deleted`).
    pub async fn wait_for_db_instance_deleted(
        &self,
        db_instance_identifier: &str,
        wait: Duration,
        delay: Duration,
    ) -> Result<(), RdsError> {
        self.wait_until(Target::InstanceDeleted(db_instance_identifier), wait, delay)
            .await
    }

    /// Wait for a DB snapshot to become `available`.
    pub async fn wait_for_db_snapshot_available(
        &self,
        db_snapshot_identifier: &str,
        wait: Duration,
        delay: Duration,
    ) -> Result<(), RdsError> {
        self.wait_until(Target::SnapshotAvailable(db_snapshot_identifier), wait, delay)
            .await
    }

    /// Wait for a DB cluster to become `available`.
    pub async fn wait_for_db_cluster_available(
        &self,
        db_cluster_identifier: &str,
        wait: Duration,
        delay: Duration,
    ) -> Result<(), RdsError> {
        self.wait_until(Target::ClusterAvailable(db_cluster_identifier), wait, delay)
            .await
    }

    async fn wait_until(
        &self,
        target: Target<'_>,
        wait: Duration,
        delay: Duration,
    ) -> Result<(), RdsError> {
        if wait < delay {
            return ia_err!("wait duration must be greater than delay duration");
        }

        let deadline = Instant::now() + wait;
        loop {
            match self.poll_state(target).await? {
                Progress::Done => return Ok(()),
                Progress::Failed(e) => return Err(e),
                Progress::Pending(state) => {
                    trace!("waiting for {:?}: state={}", target, state);
                }
            }
            let now = Instant::now();
            if now >= deadline {
                return Err(RdsError::new(
                    RdsErrorCode::RequestTimeout,
                    &format!("{:?} not reached in expected time", target),
                ));
            }
            // the last sleep ends at the deadline, followed by one final poll
            sleep(delay.min(deadline - now)).await;
        }
    }

    async fn poll_state(&self, target: Target<'_>) -> Result<Progress, RdsError> {
        match target {
            Target::InstanceAvailable(id) => {
                let req = DescribeDBInstancesRequest::new().db_instance_identifier(id);
                let res = self.describe_db_instances(&req).await?;
                let status = res
                    .db_instances
                    .first()
                    .map(|i| i.db_instance_status.clone())
                    .unwrap_or_default();
                Ok(available_or_failed(
                    status,
                    RdsErrorCode::InvalidDBInstanceState,
                    "DB instance",
                    id,
                ))
            }
            Target::InstanceDeleted(id) => {
                let req = DescribeDBInstancesRequest::new().db_instance_identifier(id);
                let res = match self.describe_db_instances(&req).await {
                    Ok(r) => r,
                    Err(e) if e.code == RdsErrorCode::DBInstanceNotFound => {
                        return Ok(Progress::Done)
                    }
                    Err(e) => return Err(e),
                };
                let status = match res.db_instances.first() {
                    Some(i) => i.db_instance_status.clone(),
                    None => return Ok(Progress::Done),
                };
                if status == "deleted" {
                    Ok(Progress::Done)
                } else if NOT_DELETING_STATES.contains(&status.as_str()) {
                    Ok(Progress::Failed(RdsError::new(
                        RdsErrorCode::InvalidDBInstanceState,
                        &format!(
                            "DB instance {} entered state {} while waiting for deletion",
                            id, status
                        ),
                    )))
                } else {
                    Ok(Progress::Pending(status))
                }
            }
            Target::SnapshotAvailable(id) => {
                let req = DescribeDBSnapshotsRequest::default().db_snapshot_identifier(id);
                let res = self.describe_db_snapshots(&req).await?;
                let status = res
                    .db_snapshots
                    .first()
                    .map(|s| s.status.clone())
                    .unwrap_or_default();
                Ok(available_or_failed(
                    status,
                    RdsErrorCode::InvalidDBSnapshotState,
                    "DB snapshot",
                    id,
                ))
            }
            Target::ClusterAvailable(id) => {
                let req = DescribeDBClustersRequest::default().db_cluster_identifier(id);
                let res = self.describe_db_clusters(&req).await?;
                let status = res
                    .db_clusters
                    .first()
                    .map(|c| c.status.clone())
                    .unwrap_or_default();
                Ok(available_or_failed(
                    status,
                    RdsErrorCode::InvalidDBClusterState,
                    "DB cluster",
                    id,
                ))
            }
        }
    }
}

fn available_or_failed(status: String, code: RdsErrorCode, kind: &str, id: &str) -> Progress {
    if status == "available" {
        Progress::Done
    } else if FAILED_STATES.contains(&status.as_str()) {
        Progress::Failed(RdsError::new(
            code,
            &format!("{} {} entered state {} while waiting for available", kind, id, status),
        ))
    } else {
        Progress::Pending(status)
    }
}
