//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
// End-to-end tests of the client against an in-process mock of the RDS
// Query endpoint.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;

use rds_rust_sdk::{
    Client, DeleteDBSnapshotRequest, DeleteDBSubnetGroupRequest, DescribeDBInstancesRequest,
    DescribeDBSnapshotsRequest, DescribeEventsRequest, RdsErrorCode,
};

use std::collections::HashMap;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct Mock {
    snapshot_calls: AtomicUsize,
    wait_calls: AtomicUsize,
    actions: Mutex<Vec<String>>,
    unsigned: AtomicUsize,
}

fn ok(action: &str, result: &str, request_id: &str) -> Response {
    let body = format!(
        "<{a}Response xmlns=\"http://rds.amazonaws.com/doc/2014-10-31/\">\
         {result}<ResponseMetadata><RequestId>{id}</RequestId></ResponseMetadata></{a}Response>",
        a = action,
        result = result,
        id = request_id
    );
    (StatusCode::OK, [("content-type", "text/xml")], body).into_response()
}

fn fault(status: StatusCode, code: &str, message: &str, request_id: &str) -> Response {
    let body = format!(
        "<ErrorResponse xmlns=\"http://rds.amazonaws.com/doc/2014-10-31/\">\
         <Error><Type>Sender</Type><Code>{}</Code><Message>{}</Message></Error>\
         <RequestId>{}</RequestId></ErrorResponse>",
        code, message, request_id
    );
    (status, [("content-type", "text/xml")], body).into_response()
}

fn instance(id: &str, status: &str) -> String {
    format!(
        "<DBInstance><DBInstanceIdentifier>{}</DBInstanceIdentifier>\
         <Engine>postgres</Engine><DBInstanceStatus>{}</DBInstanceStatus></DBInstance>",
        id, status
    )
}

async fn handle(State(mock): State<Arc<Mock>>, headers: HeaderMap, body: String) -> Response {
    let params: HashMap<String, String> = url::form_urlencoded::parse(body.as_bytes()).into_owned().collect();
    let action = params.get("Action").cloned().unwrap_or_default();
    mock.actions.lock().unwrap().push(action.clone());
    let signed = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("AWS4-HMAC-SHA256 Credential=AKID/"))
        .unwrap_or(false);
    if !signed || params.get("Version").map(String::as_str) != Some("2014-10-31") {
        mock.unsigned.fetch_add(1, Ordering::SeqCst);
        return fault(StatusCode::FORBIDDEN, "IncompleteSignature", "bad request", "req-sig");
    }

    match action.as_str() {
        "DescribeDBInstances" => {
            let id = params.get("DBInstanceIdentifier").map(String::as_str);
            match id {
                Some("missing") => fault(
                    StatusCode::NOT_FOUND,
                    "DBInstanceNotFound",
                    "DBInstance missing not found.",
                    "req-missing",
                ),
                Some("waitdb") => {
                    let n = mock.wait_calls.fetch_add(1, Ordering::SeqCst);
                    let status = if n < 2 { "creating" } else { "available" };
                    let res = format!(
                        "<DescribeDBInstancesResult><DBInstances>{}</DBInstances></DescribeDBInstancesResult>",
                        instance("waitdb", status)
                    );
                    ok(&action, &res, "req-wait")
                }
                Some("broken") => {
                    let res = format!(
                        "<DescribeDBInstancesResult><DBInstances>{}</DBInstances></DescribeDBInstancesResult>",
                        instance("broken", "incompatible-parameters")
                    );
                    ok(&action, &res, "req-broken")
                }
                _ => match params.get("Marker").map(String::as_str) {
                    None => {
                        let res = format!(
                            "<DescribeDBInstancesResult><DBInstances>{}{}</DBInstances>\
                             <Marker>page-2</Marker></DescribeDBInstancesResult>",
                            instance("db-a", "available"),
                            instance("db-b", "stopped")
                        );
                        ok(&action, &res, "req-page-1")
                    }
                    Some("page-2") => {
                        let res = format!(
                            "<DescribeDBInstancesResult><DBInstances>{}</DBInstances></DescribeDBInstancesResult>",
                            instance("db-c", "available")
                        );
                        ok(&action, &res, "req-page-2")
                    }
                    Some(m) => fault(StatusCode::BAD_REQUEST, "InvalidParameterValue", m, "req-bad-marker"),
                },
            }
        }
        "DescribeDBSnapshots" => match mock.snapshot_calls.fetch_add(1, Ordering::SeqCst) {
            0 => fault(StatusCode::INTERNAL_SERVER_ERROR, "InternalFailure", "oops", "req-500"),
            1 => fault(StatusCode::BAD_REQUEST, "Throttling", "Rate exceeded", "req-throttle"),
            _ => ok(
                &action,
                "<DescribeDBSnapshotsResult><DBSnapshots><DBSnapshot>\
                 <DBSnapshotIdentifier>snap-1</DBSnapshotIdentifier><Status>available</Status>\
                 </DBSnapshot></DBSnapshots></DescribeDBSnapshotsResult>",
                "req-snapshots",
            ),
        },
        "DeleteDBSnapshot" => fault(
            StatusCode::NOT_FOUND,
            "DBSnapshotNotFound",
            "DBSnapshot old-snap not found.",
            "req-snap-gone",
        ),
        "DeleteDBSubnetGroup" => ok(&action, "", "req-void"),
        "DescribeEvents" => (
            StatusCode::SERVICE_UNAVAILABLE,
            [("x-amzn-requestid", "req-503")],
            "upstream unavailable",
        )
            .into_response(),
        _ => fault(StatusCode::BAD_REQUEST, "InvalidAction", "unknown action", "req-unknown"),
    }
}

async fn start_mock() -> Result<(String, Arc<Mock>), Box<dyn Error>> {
    let mock = Arc::new(Mock::default());
    let app = Router::new().route("/", post(handle)).with_state(mock.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{}", addr), mock))
}

async fn get_client(endpoint: &str, retries: u32) -> Result<Client, Box<dyn Error>> {
    Ok(Client::builder()
        .endpoint(endpoint)?
        .region("us-east-1")?
        .credentials("AKID", "SECRET", None)?
        .timeout(Duration::from_secs(5))?
        .max_retries(retries)?
        .build()
        .await?)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn success_and_response_metadata() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .compact()
        .try_init();

    let (endpoint, mock) = start_mock().await?;
    let client = get_client(&endpoint, 0).await?;
    assert!(client.get_cached_response_metadata().is_none());

    let res = client.describe_db_instances(&DescribeDBInstancesRequest::new()).await?;
    assert_eq!(res.db_instances.len(), 2);
    assert_eq!(res.db_instances[0].db_instance_identifier, "db-a");
    assert_eq!(res.db_instances[1].db_instance_status, "stopped");
    assert_eq!(res.marker.as_deref(), Some("page-2"));
    let md = client.get_cached_response_metadata().ok_or("no metadata")?;
    assert_eq!(md.request_id, "req-page-1");

    // execute() goes through the same path
    let res = DescribeDBInstancesRequest::new()
        .marker("page-2")
        .execute(&client)
        .await?;
    assert_eq!(res.db_instances[0].db_instance_identifier, "db-c");
    assert!(res.marker.is_none());
    assert_eq!(client.get_cached_response_metadata().ok_or("no metadata")?.request_id, "req-page-2");
    assert_eq!(mock.unsigned.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn all_pages_are_fetched() -> Result<(), Box<dyn Error>> {
    let (endpoint, mock) = start_mock().await?;
    let client = get_client(&endpoint, 0).await?;
    let all = client.fetch_all_pages(&DescribeDBInstancesRequest::new()).await?;
    let ids: Vec<&str> = all.iter().map(|i| i.db_instance_identifier.as_str()).collect();
    assert_eq!(ids, vec!["db-a", "db-b", "db-c"]);
    assert_eq!(mock.actions.lock().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn void_operation() -> Result<(), Box<dyn Error>> {
    let (endpoint, _mock) = start_mock().await?;
    let client = get_client(&endpoint, 0).await?;
    client
        .delete_db_subnet_group(&DeleteDBSubnetGroupRequest::new("old-group"))
        .await?;
    assert_eq!(client.get_cached_response_metadata().ok_or("no metadata")?.request_id, "req-void");
    Ok(())
}

#[tokio::test]
async fn service_errors_are_mapped() -> Result<(), Box<dyn Error>> {
    let (endpoint, mock) = start_mock().await?;
    let client = get_client(&endpoint, 3).await?;

    let err = client
        .delete_db_snapshot(&DeleteDBSnapshotRequest::new("old-snap"))
        .await
        .unwrap_err();
    assert_eq!(err.code, RdsErrorCode::DBSnapshotNotFound);
    assert_eq!(err.service_code, "DBSnapshotNotFound");
    assert_eq!(err.message, "DBSnapshot old-snap not found.");
    assert_eq!(err.status, 404);
    assert_eq!(err.request_id.as_deref(), Some("req-snap-gone"));
    assert!(err.is_service_error());
    assert!(!err.is_retryable());

    let err = client
        .describe_db_instances(&DescribeDBInstancesRequest::new().db_instance_identifier("missing"))
        .await
        .unwrap_err();
    assert_eq!(err.code, RdsErrorCode::DBInstanceNotFound);

    // not retried: one call each
    let actions = mock.actions.lock().unwrap().clone();
    assert_eq!(actions, vec!["DeleteDBSnapshot", "DescribeDBInstances"]);
    Ok(())
}

#[tokio::test]
async fn non_xml_error_body() -> Result<(), Box<dyn Error>> {
    let (endpoint, mock) = start_mock().await?;
    let client = get_client(&endpoint, 0).await?;
    let err = client
        .describe_events(&DescribeEventsRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, RdsErrorCode::ServiceUnavailable);
    assert_eq!(err.status, 503);
    assert!(err.message.contains("upstream unavailable"));
    assert_eq!(err.request_id.as_deref(), Some("req-503"));
    assert_eq!(mock.actions.lock().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn transient_errors_are_retried() -> Result<(), Box<dyn Error>> {
    let (endpoint, mock) = start_mock().await?;
    let client = get_client(&endpoint, 3).await?;
    let res = client
        .describe_db_snapshots(&DescribeDBSnapshotsRequest::default())
        .await?;
    assert_eq!(res.db_snapshots.len(), 1);
    assert_eq!(res.db_snapshots[0].db_snapshot_identifier, "snap-1");
    assert_eq!(mock.snapshot_calls.load(Ordering::SeqCst), 3);
    Ok(())
}

#[tokio::test]
async fn retries_are_bounded() -> Result<(), Box<dyn Error>> {
    let (endpoint, mock) = start_mock().await?;
    let client = get_client(&endpoint, 1).await?;
    let err = client
        .describe_db_snapshots(&DescribeDBSnapshotsRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, RdsErrorCode::Throttling);
    assert_eq!(mock.snapshot_calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn waiter_polls_until_available() -> Result<(), Box<dyn Error>> {
    let (endpoint, mock) = start_mock().await?;
    let client = get_client(&endpoint, 0).await?;
    client
        .wait_for_db_instance_available("waitdb", Duration::from_secs(10), Duration::from_millis(20))
        .await?;
    assert_eq!(mock.wait_calls.load(Ordering::SeqCst), 3);

    let err = client
        .wait_for_db_instance_available("broken", Duration::from_secs(10), Duration::from_millis(20))
        .await
        .unwrap_err();
    assert_eq!(err.code, RdsErrorCode::InvalidDBInstanceState);

    client
        .wait_for_db_instance_deleted("missing", Duration::from_secs(10), Duration::from_millis(20))
        .await?;
    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint() -> Result<(), Box<dyn Error>> {
    // nothing listens on the port once the listener is dropped
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    let client = get_client(&format!("http://{}", addr), 0).await?;
    let err = client
        .describe_db_instances(&DescribeDBInstancesRequest::new())
        .await
        .unwrap_err();
    assert_eq!(err.code, RdsErrorCode::ConnectionError);
    assert!(!err.is_service_error());
    Ok(())
}
