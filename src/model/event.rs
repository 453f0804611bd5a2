//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use chrono::{DateTime, Utc};
use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{Filter, Tag};

/// A service event about an instance, cluster, snapshot or group.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct Event {
    pub source_identifier: String,
    pub source_type: String,
    pub message: String,
    pub event_categories: Vec<String>,
    pub date: Option<DateTime<Utc>>,
    pub source_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct EventCategoriesMap {
    pub source_type: String,
    pub event_categories: Vec<String>,
}

/// SNS notification subscription for service events.
#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct EventSubscription {
    pub customer_aws_id: String,
    pub cust_subscription_id: String,
    pub sns_topic_arn: String,
    pub status: String,
    pub subscription_creation_time: String,
    pub source_type: String,
    pub source_ids_list: Vec<String>,
    pub event_categories_list: Vec<String>,
    pub enabled: bool,
    pub event_subscription_arn: String,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeEventsRequest {
    pub source_identifier: String,
    pub source_type: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Number of minutes of events to return.
    pub duration: Option<i32>,
    #[rds(member = "EventCategory")]
    pub event_categories: Vec<String>,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeEventCategoriesRequest {
    pub source_type: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct CreateEventSubscriptionRequest {
    pub subscription_name: String,
    pub sns_topic_arn: String,
    pub source_type: String,
    #[rds(member = "EventCategory")]
    pub event_categories: Vec<String>,
    #[rds(member = "SourceId")]
    pub source_ids: Vec<String>,
    pub enabled: Option<bool>,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl CreateEventSubscriptionRequest {
    pub fn new(subscription_name: &str, sns_topic_arn: &str) -> Self {
        CreateEventSubscriptionRequest {
            subscription_name: subscription_name.to_string(),
            sns_topic_arn: sns_topic_arn.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DeleteEventSubscriptionRequest {
    pub subscription_name: String,
}

impl DeleteEventSubscriptionRequest {
    pub fn new(subscription_name: &str) -> Self {
        DeleteEventSubscriptionRequest {
            subscription_name: subscription_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct DescribeEventSubscriptionsRequest {
    pub subscription_name: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
    pub max_records: Option<i32>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ModifyEventSubscriptionRequest {
    pub subscription_name: String,
    pub sns_topic_arn: String,
    pub source_type: String,
    #[rds(member = "EventCategory")]
    pub event_categories: Vec<String>,
    pub enabled: Option<bool>,
}

impl ModifyEventSubscriptionRequest {
    pub fn new(subscription_name: &str) -> Self {
        ModifyEventSubscriptionRequest {
            subscription_name: subscription_name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct AddSourceIdentifierToSubscriptionRequest {
    pub subscription_name: String,
    pub source_identifier: String,
}

impl AddSourceIdentifierToSubscriptionRequest {
    pub fn new(subscription_name: &str, source_identifier: &str) -> Self {
        AddSourceIdentifierToSubscriptionRequest {
            subscription_name: subscription_name.to_string(),
            source_identifier: source_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct RemoveSourceIdentifierFromSubscriptionRequest {
    pub subscription_name: String,
    pub source_identifier: String,
}

impl RemoveSourceIdentifierFromSubscriptionRequest {
    pub fn new(subscription_name: &str, source_identifier: &str) -> Self {
        RemoveSourceIdentifierFromSubscriptionRequest {
            subscription_name: subscription_name.to_string(),
            source_identifier: source_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeEventsResult {
    pub marker: Option<String>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeEventCategoriesResult {
    pub event_categories_map_list: Vec<EventCategoriesMap>,
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct EventSubscriptionResult {
    pub event_subscription: Option<EventSubscription>,
}

pub type CreateEventSubscriptionResult = EventSubscriptionResult;
pub type DeleteEventSubscriptionResult = EventSubscriptionResult;
pub type ModifyEventSubscriptionResult = EventSubscriptionResult;
pub type AddSourceIdentifierToSubscriptionResult = EventSubscriptionResult;
pub type RemoveSourceIdentifierFromSubscriptionResult = EventSubscriptionResult;

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct DescribeEventSubscriptionsResult {
    pub marker: Option<String>,
    pub event_subscriptions_list: Vec<EventSubscription>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryWriter, ToQuery};
    use crate::xml::{FromXml, XmlNode};

    #[test]
    fn subscription_lists_use_member_names() {
        let req = CreateEventSubscriptionRequest::new("sub1", "arn:aws:sns:us-east-1:1:topic")
            .source_type("db-instance")
            .event_categories(vec!["failover".to_string(), "backup".to_string()])
            .source_ids(vec!["db1".to_string()])
            .enabled(true);
        let mut w = QueryWriter::default();
        req.to_query(&mut w, "");
        assert_eq!(w.get("EventCategories.EventCategory.2"), Some("backup"));
        assert_eq!(w.get("SourceIds.SourceId.1"), Some("db1"));
        assert_eq!(w.get("SnsTopicArn"), Some("arn:aws:sns:us-east-1:1:topic"));
        assert_eq!(w.get("Enabled"), Some("true"));
    }

    #[test]
    fn events_from_xml() {
        let xml = r#"<DescribeEventsResult>
              <Events>
                <Event>
                  <Message>Backing up DB instance</Message>
                  <SourceType>db-instance</SourceType>
                  <EventCategories><EventCategory>backup</EventCategory></EventCategories>
                  <Date>2014-01-12T19:15:09.111Z</Date>
                  <SourceIdentifier>mydb</SourceIdentifier>
                </Event>
              </Events>
              <Marker>abc</Marker>
            </DescribeEventsResult>"#;
        let node = XmlNode::parse(xml).unwrap();
        let res = DescribeEventsResult::from_xml(&node).unwrap();
        assert_eq!(res.marker.as_deref(), Some("abc"));
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].event_categories, vec!["backup".to_string()]);
        assert!(res.events[0].date.is_some());
    }
}
