//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::result::Result;

use crate::error::{RdsError, RdsErrorCode};

// XmlNode is a minimal element tree of a service response. Attributes and
// namespaces are dropped; element names are local names.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct XmlNode {
    name: String,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parse a document and return its root element.
    pub fn parse(xml: &str) -> Result<XmlNode, RdsError> {
        // text is kept as sent; log file portions and parameter values
        // carry significant leading and trailing whitespace
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;
        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    stack.push(XmlNode {
                        name: local_name(e.local_name().as_ref()),
                        ..Default::default()
                    });
                }
                Event::Empty(e) => {
                    let node = XmlNode {
                        name: local_name(e.local_name().as_ref()),
                        ..Default::default()
                    };
                    attach(&mut stack, &mut root, node);
                }
                Event::Text(t) => {
                    if let Some(cur) = stack.last_mut() {
                        cur.text.push_str(&t.unescape()?);
                    }
                }
                Event::CData(c) => {
                    if let Some(cur) = stack.last_mut() {
                        cur.text.push_str(&String::from_utf8_lossy(&c));
                    }
                }
                Event::End(_) => match stack.pop() {
                    Some(mut node) => {
                        // only leaf elements carry values
                        if !node.children.is_empty() {
                            node.text.clear();
                        }
                        attach(&mut stack, &mut root, node)
                    }
                    None => return Err(unmarshall_error("unbalanced end tag")),
                },
                Event::Eof => break,
                _ => {}
            }
        }
        if !stack.is_empty() {
            return Err(unmarshall_error("unexpected end of document"));
        }
        root.ok_or_else(|| unmarshall_error("document has no root element"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> std::slice::Iter<'_, XmlNode> {
        self.children.iter()
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }

    /// First descendant (depth first, including self) with the given name.
    pub fn find(&self, name: &str) -> Option<&XmlNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }
}

fn attach(stack: &mut Vec<XmlNode>, root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

pub(crate) fn unmarshall_error(msg: &str) -> RdsError {
    RdsError::new(RdsErrorCode::Unmarshall, msg)
}

/// Unmarshalling of a response shape from an XML element.
///
/// Implemented by `#[derive(FromXml)]` for result and data shapes.
pub trait FromXml: Sized {
    fn from_xml(node: &XmlNode) -> Result<Self, RdsError>;
}

impl FromXml for String {
    fn from_xml(node: &XmlNode) -> Result<Self, RdsError> {
        Ok(node.text.clone())
    }
}

impl FromXml for bool {
    fn from_xml(node: &XmlNode) -> Result<Self, RdsError> {
        let text = node.text.trim();
        if text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(unmarshall_error(&format!(
                "invalid boolean '{}' in element {}",
                node.text, node.name
            )))
        }
    }
}

macro_rules! from_xml_number {
    ($($t:ty),*) => {
        $(
            impl FromXml for $t {
                fn from_xml(node: &XmlNode) -> Result<Self, RdsError> {
                    node.text.trim().parse::<$t>().map_err(|e| {
                        unmarshall_error(&format!(
                            "invalid number '{}' in element {}: {}",
                            node.text, node.name, e
                        ))
                    })
                }
            }
        )*
    };
}

from_xml_number!(i32, i64, f64);

impl FromXml for DateTime<Utc> {
    fn from_xml(node: &XmlNode) -> Result<Self, RdsError> {
        Ok(DateTime::parse_from_rfc3339(node.text.trim())?.with_timezone(&Utc))
    }
}

impl<T: FromXml> FromXml for Option<T> {
    fn from_xml(node: &XmlNode) -> Result<Self, RdsError> {
        Ok(Some(T::from_xml(node)?))
    }
}

// Lists are a wrapper element with one child per entry, whatever the entry
// element is called.
impl<T: FromXml> FromXml for Vec<T> {
    fn from_xml(node: &XmlNode) -> Result<Self, RdsError> {
        node.children.iter().map(T::from_xml).collect()
    }
}

impl FromXml for () {
    fn from_xml(_node: &XmlNode) -> Result<Self, RdsError> {
        Ok(())
    }
}

/// Metadata returned with every successful response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMetadata {
    pub request_id: String,
}

/// Unmarshal a successful `<ActionResponse>` document.
///
/// The output is read from `<ActionResult>`; a response without it yields the
/// output's default (void operations never have one).
pub(crate) fn parse_response<T: FromXml + Default>(
    body: &str,
    action: &str,
) -> Result<(T, ResponseMetadata), RdsError> {
    let root = XmlNode::parse(body)?;
    let result_name = format!("{}Result", action);
    let output = match root.child(&result_name) {
        Some(r) => T::from_xml(r)?,
        None => T::default(),
    };
    let request_id = root
        .child("ResponseMetadata")
        .and_then(|m| m.child_text("RequestId"))
        .unwrap_or_default()
        .to_string();
    Ok((output, ResponseMetadata { request_id }))
}

// The `<ErrorResponse>` document of a failed request.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct ServiceErrorBody {
    pub(crate) error_type: String,
    pub(crate) code: String,
    pub(crate) message: String,
    pub(crate) request_id: Option<String>,
}

impl ServiceErrorBody {
    pub(crate) fn parse(body: &str) -> Option<ServiceErrorBody> {
        let root = XmlNode::parse(body).ok()?;
        let err = root.find("Error")?;
        let text = |n: &XmlNode, name: &str| n.child_text(name).unwrap_or_default().to_string();
        let request_id = root
            .find("RequestId")
            .or_else(|| root.find("RequestID"))
            .map(|n| n.text.clone())
            .filter(|s| !s.is_empty());
        Some(ServiceErrorBody {
            error_type: text(err, "Type"),
            code: text(err, "Code"),
            message: text(err, "Message"),
            request_id,
        })
    }
}
