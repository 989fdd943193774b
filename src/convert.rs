// This file is part of the terraform-provider-nios project
//
// Copyright (C) ANEO, 2026-2026. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scalar conversions between Terraform values and WAPI fields.
//!
//! Expansion turns a Terraform value into the optional wire field, where
//! null and unknown both become absent. Flattening goes the other way and
//! turns an absent field into null.

use std::borrow::Cow;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use tf_provider::value::{Value, ValueList, ValueNumber, ValueString};
use tf_provider::{AttributePath, Diagnostics};

pub(crate) fn expand_string(value: &ValueString<'_>) -> Option<String> {
    match value {
        Value::Value(text) => Some(text.clone().into_owned()),
        Value::Null | Value::Unknown => None,
    }
}

pub(crate) fn flatten_string<'a>(field: Option<&str>) -> ValueString<'a> {
    match field {
        Some(text) => Value::Value(Cow::Owned(text.to_owned())),
        None => Value::Null,
    }
}

pub(crate) fn expand_bool(value: &Value<bool>) -> Option<bool> {
    match value {
        Value::Value(flag) => Some(*flag),
        Value::Null | Value::Unknown => None,
    }
}

pub(crate) fn flatten_bool(field: Option<bool>) -> Value<bool> {
    match field {
        Some(flag) => Value::Value(flag),
        None => Value::Null,
    }
}

pub(crate) fn expand_i64(value: &ValueNumber) -> Option<i64> {
    match value {
        Value::Value(number) => Some(*number),
        Value::Null | Value::Unknown => None,
    }
}

pub(crate) fn flatten_i64(field: Option<i64>) -> ValueNumber {
    match field {
        Some(number) => Value::Value(number),
        None => Value::Null,
    }
}

pub(crate) fn expand_string_list(value: &ValueList<ValueString<'_>>) -> Option<Vec<String>> {
    match value {
        Value::Value(items) => Some(items.iter().filter_map(expand_string).collect()),
        Value::Null | Value::Unknown => None,
    }
}

pub(crate) fn flatten_string_list<'a>(field: Option<&[String]>) -> ValueList<ValueString<'a>> {
    match field {
        Some(items) => Value::Value(
            items
                .iter()
                .map(|item| Value::Value(Cow::Owned(item.clone())))
                .collect(),
        ),
        None => Value::Null,
    }
}

/// Parse an RFC 3339 timestamp attribute into the epoch seconds the WAPI
/// stores. An unparsable value is reported on `attr_path` and expands to
/// absent.
pub(crate) fn expand_time_to_unix(
    value: &ValueString<'_>,
    diags: &mut Diagnostics,
    attr_path: AttributePath,
) -> Option<i64> {
    let Value::Value(text) = value else {
        return None;
    };
    match OffsetDateTime::parse(text.as_ref(), &Rfc3339) {
        Ok(timestamp) => Some(timestamp.unix_timestamp()),
        Err(err) => {
            diags.error(
                "Invalid timestamp",
                format!("Expected an RFC 3339 timestamp, got {text:?}: {err}"),
                attr_path,
            );
            None
        }
    }
}

/// Render epoch seconds from the WAPI as an RFC 3339 timestamp in UTC.
/// Timestamps outside the representable range flatten to null.
pub(crate) fn flatten_unix_time<'a>(field: Option<i64>) -> ValueString<'a> {
    let Some(seconds) = field else {
        return Value::Null;
    };
    OffsetDateTime::from_unix_timestamp(seconds)
        .ok()
        .and_then(|timestamp| timestamp.format(&Rfc3339).ok())
        .map_or(Value::Null, |text| Value::Value(Cow::Owned(text)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn null_and_unknown_expand_to_absent() {
        assert_eq!(expand_string(&ValueString::Null), None);
        assert_eq!(expand_string(&ValueString::Unknown), None);
        assert_eq!(expand_bool(&Value::Null), None);
        assert_eq!(expand_bool(&Value::Unknown), None);
        assert_eq!(expand_i64(&ValueNumber::Null), None);
        assert_eq!(expand_i64(&ValueNumber::Unknown), None);
        assert_eq!(expand_string_list(&ValueList::Null), None);
        assert_eq!(expand_string_list(&ValueList::Unknown), None);
    }

    #[test]
    fn absent_flattens_to_null() {
        assert_eq!(flatten_string(None), ValueString::Null);
        assert_eq!(flatten_bool(None), Value::Null);
        assert_eq!(flatten_i64(None), ValueNumber::Null);
        assert_eq!(flatten_string_list(None), ValueList::Null);
    }

    #[test]
    fn present_scalars_round_trip() {
        assert_eq!(
            expand_string(&flatten_string(Some("infoblox.localdomain"))),
            Some("infoblox.localdomain".to_owned()),
        );
        assert_eq!(expand_bool(&flatten_bool(Some(true))), Some(true));
        assert_eq!(expand_i64(&flatten_i64(Some(42))), Some(42));
        assert_eq!(
            expand_string_list(&flatten_string_list(Some(&[
                "one".to_owned(),
                "two".to_owned(),
            ]))),
            Some(vec!["one".to_owned(), "two".to_owned()]),
        );
    }

    #[test]
    fn rfc3339_expands_to_epoch_seconds() {
        let mut diags = Diagnostics::default();
        let value = ValueString::Value("2024-06-15T10:30:00Z".into());
        assert_eq!(
            expand_time_to_unix(&value, &mut diags, AttributePath::new("upgrade_time")),
            Some(1718447400),
        );
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn epoch_seconds_flatten_to_rfc3339() {
        assert_eq!(
            flatten_unix_time(Some(1718447400)),
            ValueString::Value("2024-06-15T10:30:00Z".into()),
        );
        assert_eq!(flatten_unix_time(None), ValueString::Null);
    }

    #[test]
    fn unparsable_timestamp_is_reported() {
        let mut diags = Diagnostics::default();
        let value = ValueString::Value("next tuesday".into());
        assert_eq!(
            expand_time_to_unix(&value, &mut diags, AttributePath::new("upgrade_time")),
            None,
        );
        assert_eq!(diags.errors.len(), 1);
    }

    #[test]
    fn null_timestamp_expands_without_diagnostics() {
        let mut diags = Diagnostics::default();
        assert_eq!(
            expand_time_to_unix(
                &ValueString::Null,
                &mut diags,
                AttributePath::new("upgrade_time"),
            ),
            None,
        );
        assert_eq!(
            expand_time_to_unix(
                &ValueString::Unknown,
                &mut diags,
                AttributePath::new("upgrade_time"),
            ),
            None,
        );
        assert!(diags.errors.is_empty());
    }
}
