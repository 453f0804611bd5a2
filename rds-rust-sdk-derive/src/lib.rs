//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
extern crate proc_macro;
extern crate proc_macro2;
extern crate syn;
#[macro_use]
extern crate quote;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{
    parse_macro_input, Data, DeriveInput, Fields, GenericArgument, LitStr, PathArguments, Type,
};

/// Derive macro generating the Query-protocol marshaller for a request or input shape.
///
/// Every named field is written under its wire name, which is derived from the field
/// name (`db_instance_identifier` becomes `DBInstanceIdentifier`) unless overridden
/// with `#[rds(rename = "...")]`. List fields use `#[rds(member = "...")]` to name the
/// element of each entry (default `member`), and `#[rds(skip)]` keeps SDK-only fields
/// off the wire.
///
/// A fluent setter is also generated for every field, so requests can be built as
/// `CreateDBSnapshotRequest::new("snap", "db").tags(vec![tag])`.
#[proc_macro_derive(ToQuery, attributes(rds))]
pub fn to_query(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match impl_to_query(&input) {
        Ok(ts) => TokenStream::from(ts),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

/// Derive macro generating the XML unmarshaller for a result or data shape.
///
/// Child elements are matched against the wire name of each field (same naming rules
/// as [`ToQuery`](derive@ToQuery)); unknown elements are ignored and missing ones
/// leave the field at its `Default` value.
#[proc_macro_derive(FromXml, attributes(rds))]
pub fn from_xml(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match impl_from_xml(&input) {
        Ok(ts) => TokenStream::from(ts),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

#[derive(Debug)]
struct FieldSpec {
    ident: syn::Ident,
    ty: Type,
    wire: String,
    member: String,
    skip: bool,
}

fn collect_fields(input: &DeriveInput, derive: &str) -> syn::Result<Vec<FieldSpec>> {
    let ds = match &input.data {
        Data::Struct(d) => d,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("{} only supports Struct datatypes", derive),
            ))
        }
    };
    let named = match &ds.fields {
        Fields::Named(n) => n,
        Fields::Unit => return Ok(Vec::new()),
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("{} requires named fields", derive),
            ))
        }
    };

    let mut specs = Vec::new();
    for field in &named.named {
        let ident = match &field.ident {
            Some(i) => i.clone(),
            None => return Err(syn::Error::new_spanned(field, "field is missing ident")),
        };
        let mut wire: Option<String> = None;
        let mut member = String::from("member");
        let mut skip = false;
        for attr in &field.attrs {
            if !attr.path().is_ident("rds") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let s: LitStr = meta.value()?.parse()?;
                    wire = Some(s.value());
                    Ok(())
                } else if meta.path.is_ident("member") {
                    let s: LitStr = meta.value()?.parse()?;
                    member = s.value();
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported rds attribute"))
                }
            })?;
        }
        let fname = ident.to_string();
        let fname = fname.trim_start_matches("r#");
        specs.push(FieldSpec {
            wire: wire.unwrap_or_else(|| wire_name(fname)),
            ident,
            ty: field.ty.clone(),
            member,
            skip,
        });
    }
    Ok(specs)
}

fn impl_to_query(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = collect_fields(input, "ToQuery")?;

    let mut body = TokenStream2::default();
    let mut setters = TokenStream2::default();
    for f in &fields {
        let ident = &f.ident;
        let ty = &f.ty;
        let doc = if f.skip {
            format!("Set `{}`. This value is used by the SDK and is not sent as-is.", ident)
        } else {
            body.extend({
                let wire = &f.wire;
                let member = &f.member;
                quote! {
                    crate::query::QueryValue::write_value(
                        &self.#ident,
                        w,
                        &crate::query::join_key(prefix, #wire),
                        #member,
                    );
                }
            });
            format!("Set the `{}` parameter.", f.wire)
        };
        if let Some(inner) = option_inner(ty) {
            setters.extend(quote! {
                #[doc = #doc]
                pub fn #ident(mut self, value: impl Into<#inner>) -> Self {
                    self.#ident = Some(value.into());
                    self
                }
            });
        } else {
            setters.extend(quote! {
                #[doc = #doc]
                pub fn #ident(mut self, value: impl Into<#ty>) -> Self {
                    self.#ident = value.into();
                    self
                }
            });
        }
    }

    Ok(quote! {
        impl crate::query::ToQuery for #name {
            #[allow(unused_variables)]
            fn to_query(&self, w: &mut crate::query::QueryWriter, prefix: &str) {
                #body
            }
        }

        impl crate::query::QueryValue for #name {
            fn write_value(&self, w: &mut crate::query::QueryWriter, key: &str, _member: &str) {
                crate::query::ToQuery::to_query(self, w, key);
            }
        }

        impl #name {
            #setters
        }
    })
}

fn impl_from_xml(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = collect_fields(input, "FromXml")?;

    let mut arms = TokenStream2::default();
    for f in fields.iter().filter(|f| !f.skip) {
        let ident = &f.ident;
        let wire = &f.wire;
        arms.extend(quote! {
            #wire => value.#ident = crate::xml::FromXml::from_xml(child)?,
        });
    }

    Ok(quote! {
        impl crate::xml::FromXml for #name {
            #[allow(unused_mut)]
            fn from_xml(node: &crate::xml::XmlNode) -> std::result::Result<Self, crate::error::RdsError> {
                let mut value = Self::default();
                for child in node.children() {
                    match child.name() {
                        #arms
                        _ => {}
                    }
                }
                Ok(value)
            }
        }
    })
}

// Returns the `T` of an `Option<T>` field type.
fn option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(p) = ty {
        if p.qself.is_some() {
            return None;
        }
        let seg = p.path.segments.last()?;
        if seg.ident != "Option" {
            return None;
        }
        if let PathArguments::AngleBracketed(args) = &seg.arguments {
            if let Some(GenericArgument::Type(inner)) = args.args.first() {
                return Some(inner);
            }
        }
    }
    None
}

// snake_case field name to the service's PascalCase wire name.
fn wire_name(field: &str) -> String {
    field
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| match w {
            "db" => "DB".to_string(),
            "az" => "AZ".to_string(),
            "iam" => "IAM".to_string(),
            "ca" => "CA".to_string(),
            "ec2" => "EC2".to_string(),
            "s3" => "S3".to_string(),
            "cidrip" => "CIDRIP".to_string(),
            _ => {
                let mut c = w.chars();
                match c.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + c.as_str(),
                    None => String::new(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::wire_name;

    #[test]
    fn wire_names() {
        assert_eq!(wire_name("db_instance_identifier"), "DBInstanceIdentifier");
        assert_eq!(wire_name("multi_az"), "MultiAZ");
        assert_eq!(wire_name("enable_iam_database_authentication"), "EnableIAMDatabaseAuthentication");
        assert_eq!(wire_name("ca_certificate_identifier"), "CACertificateIdentifier");
        assert_eq!(wire_name("ec2_security_group_owner_id"), "EC2SecurityGroupOwnerId");
        assert_eq!(wire_name("s3_bucket_name"), "S3BucketName");
        assert_eq!(wire_name("cidrip"), "CIDRIP");
        assert_eq!(wire_name("kms_key_id"), "KmsKeyId");
        assert_eq!(wire_name("dbi_resource_id"), "DbiResourceId");
        assert_eq!(wire_name("marker"), "Marker");
    }
}
