//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Amazon RDS Rust SDK
//!
//! This is a Rust SDK for the Amazon Relational Database Service (RDS)
//! management API. It covers all 128 operations of the RDS Query API,
//! version `2014-10-31`: DB instances, Aurora clusters and global clusters,
//! snapshots, parameter/option/subnet/security groups, event subscriptions,
//! RDS Proxy, snapshot exports, tagging, reserved instances and the
//! on-premises (VMware) resources.
//!
//! This SDK supplies and uses Rust `async` methods throughout, using the [tokio](https://crates.io/crates/tokio) runtime. There is currently no blocking support.
//!
//! The general flow for an application using the SDK is:
//! - Create a [`ClientBuilder`] with all needed parameters
//! - Create a [`Client`] from the [`ClientBuilder`] that will be used throughout the application, across all threads
//! - Call operations using the [`Client`] facade methods (such as [`Client::describe_db_instances`])
//!   or the `execute()` method of the request structs (such as [`DescribeDBInstancesRequest::execute`])
//!
//! ## Simple Example
//! The following code creates a [`Client`] from values in the current environment and
//! lists the DB instances of the account.
//! ```no_run
//! use rds_rust_sdk::{Client, DescribeDBInstancesRequest};
//! use std::error::Error;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn Error>> {
//!     let client = Client::builder()
//!         .from_environment()?
//!         .build().await?;
//!     let instances = client
//!         .fetch_all_pages(&DescribeDBInstancesRequest::new())
//!         .await?;
//!     for db in instances {
//!         println!("{}: {} ({})", db.db_instance_identifier, db.engine, db.db_instance_status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuring the SDK
//!
//! ### Endpoint and region
//!
//! Requests are signed for a region, and sent to the RDS endpoint of that region
//! (`https://rds.<region>.amazonaws.com`, `.amazonaws.com.cn` for the China regions).
//! Use [`ClientBuilder::region()`] to set it. A custom endpoint (a VPC endpoint,
//! a FIPS endpoint, or a local mock) can be given with [`ClientBuilder::endpoint()`];
//! if no region is set the signing region is taken from the endpoint host.
//!
//! ### Credentials
//!
//! There are several ways of specifying the credentials to use:
//!
//! - Fixed keys: [`ClientBuilder::credentials()`], with an optional session token for temporary credentials.
//! - Environment: [`ClientBuilder::auth_from_environment()`] reads `AWS_ACCESS_KEY_ID`,
//!   `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`.
//! - Shared credentials file: [`ClientBuilder::auth_from_profile()`] and
//!   [`ClientBuilder::auth_from_profile_with_name()`] read a profile of an
//!   `~/.aws/credentials` style file. A `region` in the profile is used when no region was set.
//! - Instance metadata: [`ClientBuilder::auth_from_instance()`] uses the role credentials of
//!   the EC2 instance the application runs on (IMDSv2). These are refreshed automatically
//!   before they expire.
//! - Any other source: [`ClientBuilder::auth_provider()`] with a custom [`CredentialsProvider`].
//!
//! ### Configuring from the environment
//!
//! [`ClientBuilder::from_environment()`] reads the standard variables:
//!
//! | variable | use |
//! |---|---|
//! | `AWS_REGION`, `AWS_DEFAULT_REGION` | signing region |
//! | `AWS_ENDPOINT_URL_RDS`, `AWS_ENDPOINT_URL` | custom endpoint |
//! | `AWS_CA_BUNDLE` | additional root certificate (PEM) |
//! | `AWS_MAX_ATTEMPTS` | total attempts per request |
//!
//! and resolves credentials from the environment, then the shared credentials file
//! (`AWS_SHARED_CREDENTIALS_FILE`, profile `AWS_PROFILE`), then instance metadata.
//!
//! ### Retries and timeouts
//!
//! Transport failures, throttling and server-side errors are retried up to
//! [`ClientBuilder::max_retries()`] times (3 by default) with exponential
//! backoff and jitter. Each http request is bounded by [`ClientBuilder::timeout()`]
//! (30 seconds by default).
//!
//! ## Errors
//!
//! Every operation returns `Result<_, RdsError>`. Errors returned by the service are
//! mapped from their error code to an [`RdsErrorCode`] by the [`ErrorRegistry`]; codes
//! unknown to this SDK map to [`RdsErrorCode::ServiceError`] and keep the raw code in
//! [`RdsError::service_code`].
//!
//! ```no_run
//! use rds_rust_sdk::{Client, DeleteDBSnapshotRequest, RdsErrorCode};
//! # async fn run(client: &Client) -> Result<(), rds_rust_sdk::RdsError> {
//! match client.delete_db_snapshot(&DeleteDBSnapshotRequest::new("old-snap")).await {
//!     Ok(_) => println!("deleted"),
//!     Err(e) if e.code == RdsErrorCode::DBSnapshotNotFound => println!("already gone"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The SDK logs with [tracing](https://crates.io/crates/tracing): client creation and
//! failed requests at `debug`, retries at `warn`, and request details (canonical requests,
//! markers, request ids) at `trace`.
//!
//! ## License
//!
//! Copyright (C) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//!
//! This SDK is licensed under the Universal Permissive License 1.0.
//!

pub(crate) mod client_builder;
pub use crate::client_builder::ClientBuilder;

pub(crate) mod client;
pub use crate::client::{Client, API_VERSION};

pub(crate) mod auth_common;
pub use crate::auth_common::credentials_provider::{Credentials, CredentialsProvider};
pub use crate::auth_common::environment_credentials_provider::EnvironmentCredentialsProvider;
pub use crate::auth_common::instance_metadata_credentials_provider::InstanceMetadataCredentialsProvider;
pub use crate::auth_common::profile_credentials_provider::ProfileCredentialsProvider;
pub use crate::auth_common::static_credentials_provider::StaticCredentialsProvider;

pub(crate) mod auth_token;
pub use crate::auth_token::AuthTokenGenerator;

pub(crate) mod error;
pub use crate::error::{RdsError, RdsErrorCode};

pub(crate) mod error_registry;
pub use crate::error_registry::ErrorRegistry;

pub mod model;
pub use crate::model::*;

pub(crate) mod operations;
pub use crate::operations::{Paginated, RdsOperation, OPERATIONS};

pub mod query;

pub(crate) mod region;
pub use crate::region::Region;


pub(crate) mod waiters;

pub mod xml;
pub use crate::xml::ResponseMetadata;
