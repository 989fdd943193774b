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

use serde::{Deserialize, Serialize};

use tf_provider::value::{ValueList, ValueString};
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::{map, Diagnostics};

use crate::api::dto;
use crate::convert::{expand_string_list, flatten_string, flatten_string_list};
use crate::utils::{Expand, Flatten, WithSchema, WithValidate};

/// Fields requested back from the server on every restart order call.
pub(crate) const READABLE_ATTRIBUTES: &str = "groups";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicerestartGroupOrderModel<'a> {
    #[serde(borrow = "'a", rename = "ref")]
    pub object_ref: ValueString<'a>,
    pub groups: ValueList<ValueString<'a>>,
}

impl WithSchema for ServicerestartGroupOrderModel<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain(
                    "Order in which the service restart groups are restarted.",
                ),
                attributes: map! {
                    "ref" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Reference of the restart order object, assigned by the server.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "groups" => Attribute {
                        attr_type: AttributeType::List(AttributeType::String.into()),
                        description: Description::plain(
                            "References of the service restart groups, in restart order.",
                        ),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                },
                ..Default::default()
            },
        }
    }
}

impl WithValidate for ServicerestartGroupOrderModel<'_> {
    fn validate(&self, _diags: &mut Diagnostics) {}
}

impl Expand for ServicerestartGroupOrderModel<'_> {
    type Dto = dto::ServicerestartGroupOrder;

    fn expand(&self, _diags: &mut Diagnostics) -> Option<dto::ServicerestartGroupOrder> {
        Some(dto::ServicerestartGroupOrder {
            // ref is owned by the server
            object_ref: None,
            groups: expand_string_list(&self.groups),
        })
    }
}

impl<'a> Flatten<dto::ServicerestartGroupOrder> for ServicerestartGroupOrderModel<'a> {
    fn flatten(dto: &dto::ServicerestartGroupOrder) -> Self {
        Self {
            object_ref: flatten_string(dto.object_ref.as_deref()),
            groups: flatten_string_list(dto.groups.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use tf_provider::value::Value;

    use super::*;

    #[test]
    fn expand_keeps_the_group_order() {
        let mut diags = Diagnostics::default();
        let model = ServicerestartGroupOrderModel {
            object_ref: ValueString::Value("grid:servicerestart:group:order/b25l:order".into()),
            groups: Value::Value(vec![
                ValueString::Value("grid:servicerestart:group/one:dns".into()),
                ValueString::Value("grid:servicerestart:group/two:dhcp".into()),
            ]),
        };
        let dto = model.expand(&mut diags).unwrap();
        assert_eq!(dto.object_ref, None);
        assert_eq!(
            dto.groups,
            Some(vec![
                "grid:servicerestart:group/one:dns".to_owned(),
                "grid:servicerestart:group/two:dhcp".to_owned(),
            ]),
        );
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn flatten_round_trips_through_the_wire_shape() {
        let dto = dto::ServicerestartGroupOrder {
            object_ref: Some("grid:servicerestart:group:order/b25l:order".to_owned()),
            groups: Some(vec!["grid:servicerestart:group/one:dns".to_owned()]),
        };
        let model = ServicerestartGroupOrderModel::flatten(&dto);
        assert_eq!(
            model.object_ref,
            ValueString::Value("grid:servicerestart:group:order/b25l:order".into()),
        );
        assert_eq!(
            model.groups,
            Value::Value(vec![ValueString::Value(
                "grid:servicerestart:group/one:dns".into(),
            )]),
        );
    }
}
