//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use rds_rust_sdk_derive::{FromXml, ToQuery};

use crate::model::common::{Filter, Tag};

/// Add tags to a resource identified by its ARN. Existing keys are overwritten.
#[derive(Debug, Clone, Default, ToQuery)]
pub struct AddTagsToResourceRequest {
    pub resource_name: String,
    #[rds(member = "Tag")]
    pub tags: Vec<Tag>,
}

impl AddTagsToResourceRequest {
    pub fn new(resource_name: &str, tags: Vec<Tag>) -> Self {
        AddTagsToResourceRequest {
            resource_name: resource_name.to_string(),
            tags,
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct RemoveTagsFromResourceRequest {
    pub resource_name: String,
    pub tag_keys: Vec<String>,
}

impl RemoveTagsFromResourceRequest {
    pub fn new(resource_name: &str, tag_keys: &[&str]) -> Self {
        RemoveTagsFromResourceRequest {
            resource_name: resource_name.to_string(),
            tag_keys: tag_keys.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, ToQuery)]
pub struct ListTagsForResourceRequest {
    pub resource_name: String,
    #[rds(member = "Filter")]
    pub filters: Vec<Filter>,
}

impl ListTagsForResourceRequest {
    pub fn new(resource_name: &str) -> Self {
        ListTagsForResourceRequest {
            resource_name: resource_name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, FromXml)]
pub struct ListTagsForResourceResult {
    pub tag_list: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryWriter, ToQuery};
    use crate::xml::{FromXml, XmlNode};

    #[test]
    fn tag_requests() {
        let arn = "arn:aws:rds:us-west-2:1:db:mydb";
        let mut w = QueryWriter::default();
        AddTagsToResourceRequest::new(arn, vec![Tag::new("env", "prod"), Tag::new("team", "db")])
            .to_query(&mut w, "");
        assert_eq!(w.get("ResourceName"), Some(arn));
        assert_eq!(w.get("Tags.Tag.2.Key"), Some("team"));
        assert_eq!(w.get("Tags.Tag.2.Value"), Some("db"));

        let mut w = QueryWriter::default();
        RemoveTagsFromResourceRequest::new(arn, &["env"]).to_query(&mut w, "");
        assert_eq!(w.get("TagKeys.member.1"), Some("env"));
    }

    #[test]
    fn tag_list_from_xml() {
        let xml = "<ListTagsForResourceResult><TagList>\
                   <Tag><Key>env</Key><Value>prod</Value></Tag>\
                   <Tag><Key>empty</Key></Tag>\
                   </TagList></ListTagsForResourceResult>";
        let r = ListTagsForResourceResult::from_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        assert_eq!(r.tag_list, vec![Tag::new("env", "prod"), Tag::new("empty", "")]);
    }
}
