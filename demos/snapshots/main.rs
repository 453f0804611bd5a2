//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//

// This is an example program showing the typical snapshot workflow: list the
// DB instances of the account, take a manual snapshot of one of them, wait for
// the snapshot to become available, look at its tags and delete it again.

// To run this example:
//    cargo run --example snapshots -- <db-instance-identifier>
//
// for extra output:
//    RUST_LOG=debug cargo run --example snapshots -- mydb
//
// or, for a LOT of tracing output:
//    RUST_LOG=trace cargo run --example snapshots -- mydb

use rds_rust_sdk::{
    Client, CreateDBSnapshotRequest, DeleteDBSnapshotRequest, DescribeDBInstancesRequest,
    ListTagsForResourceRequest, RdsError, Tag,
};
use std::error::Error;
use std::time::Duration;
use tracing::info;

async fn get_client() -> Result<Client, RdsError> {
    // Note: later methods called on this builder override earlier methods.
    Client::builder()
        // For a fixed region:
        // .region("us-east-1")?
        //
        // For a local mock or a VPC endpoint:
        // .endpoint("http://localhost:4566")?
        //
        // Credentials from a named profile:
        // .auth_from_profile_with_name("~/.aws/credentials", "dev")?
        //
        // Read region, endpoint and credentials from the environment
        .from_environment()?
        // Optional: set a different default timeout (default is 30 seconds)
        .timeout(Duration::from_secs(15))?
        .build()
        .await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Set up a tracing subscriber to see output based on RUST_LOG environment setting
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .compact()
        .init();

    let db_id = match std::env::args().nth(1) {
        Some(id) => id,
        None => return Err("usage: snapshots <db-instance-identifier>".into()),
    };

    info!("Creating new client...");
    let client = get_client().await?;

    for db in client
        .fetch_all_pages(&DescribeDBInstancesRequest::new())
        .await?
    {
        println!("{:<30} {:<12} {}", db.db_instance_identifier, db.engine, db.db_instance_status);
    }

    let snap_id = format!("{}-demo-{}", db_id, chrono::Utc::now().format("%Y%m%d%H%M%S"));
    let res = CreateDBSnapshotRequest::new(&snap_id, &db_id)
        .tags(vec![Tag::new("created-by", "rds-rust-sdk demo")])
        .execute(&client)
        .await?;
    println!("CreateDBSnapshot={:?}", res);
    if let Some(md) = client.get_cached_response_metadata() {
        info!("request id {}", md.request_id);
    }

    // snapshots of small instances take a few minutes
    client
        .wait_for_db_snapshot_available(&snap_id, Duration::from_secs(1800), Duration::from_secs(15))
        .await?;

    if let Some(arn) = res.db_snapshot.map(|s| s.db_snapshot_arn) {
        let tags = client
            .list_tags_for_resource(&ListTagsForResourceRequest::new(&arn))
            .await?;
        for t in tags.tag_list {
            println!("tag {}={}", t.key, t.value);
        }
    }

    let res = DeleteDBSnapshotRequest::new(&snap_id).execute(&client).await?;
    println!(
        "deleted {} (status {})",
        snap_id,
        res.db_snapshot.map(|s| s.status).unwrap_or_default()
    );
    Ok(())
}
