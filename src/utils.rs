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

use std::cell::RefCell;

use tf_provider::value::{Value, ValueList, ValueString};
use tf_provider::schema::Schema;
use tf_provider::{AttributePath, Diagnostics};

pub(crate) trait WithSchema {
    fn schema() -> Schema;
}

pub(crate) trait WithValidate {
    fn validate(&self, diags: &mut Diagnostics);
}

/// Conversion from a Terraform model into its WAPI wire form.
///
/// Server-owned fields are left absent so a write never sends them back.
pub(crate) trait Expand {
    type Dto;
    fn expand(&self, diags: &mut Diagnostics) -> Option<Self::Dto>;
}

/// A null or unknown model expands to an absent field.
impl<T: Expand> Expand for Value<T> {
    type Dto = T::Dto;
    fn expand(&self, diags: &mut Diagnostics) -> Option<Self::Dto> {
        match self {
            Value::Value(model) => model.expand(diags),
            Value::Null | Value::Unknown => None,
        }
    }
}

/// Conversion from a WAPI wire form back into the Terraform model.
pub(crate) trait Flatten<Dto>: Sized {
    fn flatten(dto: &Dto) -> Self;
}

/// An absent nested field flattens to a null model.
pub(crate) fn flatten_nested<M, D>(field: Option<&D>) -> Value<M>
where
    M: Flatten<D>,
{
    match field {
        Some(dto) => Value::Value(M::flatten(dto)),
        None => Value::Null,
    }
}

pub(crate) fn expand_list<M, D>(
    value: &ValueList<Value<M>>,
    diags: &mut Diagnostics,
) -> Option<Vec<D>>
where
    M: Expand<Dto = D>,
{
    match value {
        Value::Value(items) => Some(
            items
                .iter()
                .filter_map(|item| item.expand(diags))
                .collect(),
        ),
        Value::Null | Value::Unknown => None,
    }
}

pub(crate) fn flatten_list<M, D>(field: Option<&[D]>) -> ValueList<Value<M>>
where
    M: Flatten<D>,
{
    match field {
        Some(dtos) => Value::Value(
            dtos.iter()
                .map(|dto| Value::Value(M::flatten(dto)))
                .collect(),
        ),
        None => Value::Null,
    }
}

/// Carry the prior state of a computed attribute through the plan when the
/// configuration leaves it unset. Without this, a computed value would churn
/// to unknown on every update.
pub(crate) fn use_state_for_unknown<T: Clone>(
    config: &Value<T>,
    plan: Value<T>,
    state: &Value<T>,
) -> Value<T> {
    if plan.is_unknown() && config.is_null() && matches!(state, Value::Value(_)) {
        state.clone()
    } else {
        plan
    }
}

/// Reject lists shorter than `min`. Null and unknown lists pass, absence is
/// checked elsewhere when the attribute is required.
pub(crate) fn validate_min_size<T>(
    value: &ValueList<T>,
    min: usize,
    diags: &mut Diagnostics,
    attr_path: AttributePath,
) {
    if let Value::Value(items) = value {
        if items.len() < min {
            diags.error(
                "Invalid list length",
                format!(
                    "The list must contain at least {min} element(s), got {}",
                    items.len(),
                ),
                attr_path,
            );
        }
    }
}

pub(crate) fn validate_one_of(
    value: &ValueString<'_>,
    allowed: &[&str],
    diags: &mut Diagnostics,
    attr_path: AttributePath,
) {
    if let Value::Value(text) = value {
        if !allowed.contains(&text.as_ref()) {
            diags.error(
                "Invalid attribute value",
                format!(
                    "Value must be one of {}, got {text:?}",
                    allowed.iter().join_with(", "),
                ),
                attr_path,
            );
        }
    }
}

pub struct DisplayJoiner<'a, T, I>
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    iter: RefCell<T>,
    sep: &'a str,
}

pub trait DisplayJoinable {
    type Joiner<'a>;
    fn join_with(self, sep: &str) -> Self::Joiner<'_>;
}

impl<T, I> DisplayJoinable for T
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    type Joiner<'a> = DisplayJoiner<'a, T, I>;

    fn join_with(self, sep: &str) -> Self::Joiner<'_> {
        DisplayJoiner {
            iter: RefCell::new(self),
            sep,
        }
    }
}

impl<'a, T, I> std::fmt::Display for DisplayJoiner<'a, T, I>
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        let mut iter = self.iter.try_borrow_mut().or(Err(std::fmt::Error))?;
        for elt in iter.by_ref() {
            f.write_str(sep)?;
            f.write_fmt(format_args!("{elt}"))?;
            sep = self.sep;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Tag<'a> {
        label: ValueString<'a>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TagDto {
        label: Option<String>,
    }

    impl Expand for Tag<'_> {
        type Dto = TagDto;
        fn expand(&self, _diags: &mut Diagnostics) -> Option<TagDto> {
            Some(TagDto {
                label: crate::convert::expand_string(&self.label),
            })
        }
    }

    impl Flatten<TagDto> for Tag<'_> {
        fn flatten(dto: &TagDto) -> Self {
            Self {
                label: crate::convert::flatten_string(dto.label.as_deref()),
            }
        }
    }

    #[test]
    fn null_and_unknown_models_expand_to_absent() {
        let mut diags = Diagnostics::default();
        assert_eq!(Value::<Tag>::Null.expand(&mut diags), None);
        assert_eq!(Value::<Tag>::Unknown.expand(&mut diags), None);
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn absent_nested_field_flattens_to_null() {
        assert_eq!(flatten_nested::<Tag, TagDto>(None), Value::Null);
        let dto = TagDto {
            label: Some("lan".to_owned()),
        };
        assert_eq!(
            flatten_nested::<Tag, TagDto>(Some(&dto)),
            Value::Value(Tag {
                label: ValueString::Value("lan".into()),
            }),
        );
    }

    #[test]
    fn list_expansion_skips_null_elements() {
        let mut diags = Diagnostics::default();
        let list: ValueList<Value<Tag>> = Value::Value(vec![
            Value::Value(Tag {
                label: ValueString::Value("a".into()),
            }),
            Value::Null,
            Value::Value(Tag {
                label: ValueString::Value("b".into()),
            }),
        ]);
        let expanded = expand_list(&list, &mut diags);
        assert_eq!(
            expanded,
            Some(vec![
                TagDto {
                    label: Some("a".to_owned()),
                },
                TagDto {
                    label: Some("b".to_owned()),
                },
            ]),
        );
        assert_eq!(expand_list::<Tag, TagDto>(&Value::Null, &mut diags), None);
        assert_eq!(
            expand_list::<Tag, TagDto>(&Value::Unknown, &mut diags),
            None,
        );
    }

    #[test]
    fn state_replaces_unknown_plan_when_config_is_null() {
        let state = Value::Value(42);
        assert_eq!(
            use_state_for_unknown(&Value::Null, Value::Unknown, &state),
            Value::Value(42),
        );
    }

    #[test]
    fn known_plan_values_are_kept() {
        let state = Value::Value(42);
        assert_eq!(
            use_state_for_unknown(&Value::Value(7), Value::Value(7), &state),
            Value::Value(7),
        );
        assert_eq!(
            use_state_for_unknown(&Value::Null, Value::Value(7), &state),
            Value::Value(7),
        );
    }

    #[test]
    fn unknown_plan_stays_unknown_without_state() {
        assert_eq!(
            use_state_for_unknown::<i64>(&Value::Null, Value::Unknown, &Value::Null),
            Value::Unknown,
        );
        assert_eq!(
            use_state_for_unknown(&Value::Value(7), Value::Unknown, &Value::Value(42)),
            Value::Unknown,
        );
    }

    #[test]
    fn applying_state_twice_is_idempotent() {
        fn check<T: Clone + std::fmt::Debug + PartialEq>(state: Value<T>) {
            let once = use_state_for_unknown(&Value::Null, Value::Unknown, &state);
            let twice = use_state_for_unknown(&Value::Null, once.clone(), &state);
            assert_eq!(once, twice);
            assert_eq!(once, state);
        }
        check(Value::Value(42));
        check(Value::Value(true));
        check(ValueString::Value("gmcgroup/b25l:g1".into()));
        check(Value::Value(vec![ValueString::Value("a".into())]));
    }

    #[test]
    fn short_lists_are_rejected() {
        let mut diags = Diagnostics::default();
        let empty: ValueList<ValueString> = Value::Value(vec![]);
        validate_min_size(&empty, 1, &mut diags, AttributePath::new("files"));
        assert_eq!(diags.errors.len(), 1);
    }

    #[test]
    fn null_and_unknown_lists_pass_size_validation() {
        let mut diags = Diagnostics::default();
        validate_min_size(
            &ValueList::<ValueString>::Null,
            1,
            &mut diags,
            AttributePath::new("files"),
        );
        validate_min_size(
            &ValueList::<ValueString>::Unknown,
            1,
            &mut diags,
            AttributePath::new("files"),
        );
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn enum_validation_accepts_allowed_values_and_null() {
        let mut diags = Diagnostics::default();
        validate_one_of(
            &ValueString::Value("SEQUENTIAL".into()),
            &["SIMULTANEOUS", "SEQUENTIAL"],
            &mut diags,
            AttributePath::new("gmc_promotion_policy"),
        );
        validate_one_of(
            &ValueString::Null,
            &["SIMULTANEOUS", "SEQUENTIAL"],
            &mut diags,
            AttributePath::new("gmc_promotion_policy"),
        );
        assert!(diags.errors.is_empty());

        validate_one_of(
            &ValueString::Value("BOTH".into()),
            &["SIMULTANEOUS", "SEQUENTIAL"],
            &mut diags,
            AttributePath::new("gmc_promotion_policy"),
        );
        assert_eq!(diags.errors.len(), 1);
    }
}
