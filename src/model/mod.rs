//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Request, result and data shapes of every RDS operation.
//!
//! Requests implement [`ToQuery`](crate::query::ToQuery) and carry a fluent
//! setter per field; results and data shapes implement
//! [`FromXml`](crate::xml::FromXml). Results shared by several operations are
//! exposed under a per-operation alias (for example
//! [`StartDBInstanceResult`] is a [`DBInstanceResult`]).

pub mod account;
pub mod common;
pub mod custom_az;
pub mod db_cluster;
pub mod db_instance;
pub mod db_snapshot;
pub mod event;
pub mod export_task;
pub mod global_cluster;
pub mod option_group;
pub mod parameter_group;
pub mod proxy;
pub mod security_group;
pub mod subnet_group;
pub mod tags;

pub use self::account::*;
pub use self::common::*;
pub use self::custom_az::*;
pub use self::db_cluster::*;
pub use self::db_instance::*;
pub use self::db_snapshot::*;
pub use self::event::*;
pub use self::export_task::*;
pub use self::global_cluster::*;
pub use self::option_group::*;
pub use self::parameter_group::*;
pub use self::proxy::*;
pub use self::security_group::*;
pub use self::subnet_group::*;
pub use self::tags::*;
