//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use chrono::{DateTime, Utc};
use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::Filter;

/// Export of a snapshot to Amazon S3.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ExportTask {
    pub export_task_identifier: String,
    pub source_arn: String,
    pub export_only: Vec<String>,
    pub snapshot_time: Option<DateTime<Utc>>,
    pub task_start_time: Option<DateTime<Utc>>,
    pub task_end_time: Option<DateTime<Utc>>,
    pub s3_bucket: String,
    pub s3_prefix: String,
    #[rds(rename = "IamRoleArn")]
    pub iam_role_arn: String,
    pub kms_key_id: String,
    pub status: String,
    pub percent_progress: i32,
    pub total_extracted_data_in_gb: i32,
    pub failure_cause: String,
    pub warning_message: String,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct StartExportTaskRequest {
    pub export_task_identifier: String,
    pub source_arn: String,
    pub s3_bucket_name: String,
    #[rds(rename = "IamRoleArn")]
    pub iam_role_arn: String,
    pub kms_key_id: String,
    pub s3_prefix: String,
    pub export_only: Vec<String>,
}

impl StartExportTaskRequest {
    pub fn new(
        export_task_identifier: &str,
        source_arn: &str,
        s3_bucket_name: &str,
        iam_role_arn: &str,
        kms_key_id: &str,
    ) -> Self {
        StartExportTaskRequest {
            export_task_identifier: export_task_identifier.to_string(),
            source_arn: source_arn.to_string(),
            s3_bucket_name: s3_bucket_name.to_string(),
            iam_role_arn: iam_role_arn.to_string(),
            kms_key_id: kms_key_id.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CancelExportTaskRequest {
    pub export_task_identifier: String,
}

impl CancelExportTaskRequest {
    pub fn new(export_task_identifier: &str) -> Self {
        CancelExportTaskRequest {
            export_task_identifier: export_task_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeExportTasksRequest {
    pub export_task_identifier: String,
    pub source_arn: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub marker: Option<String>,
    pub max_records: Option<i32>,
}

// Start and cancel return the task itself as the result element.
pub type StartExportTaskResult = ExportTask;
pub type CancelExportTaskResult = ExportTask;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeExportTasksResult {
    pub marker: Option<String>,
    pub export_tasks: Vec<ExportTask>,
}
