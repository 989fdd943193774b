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

use tf_provider::value::{Value, ValueList, ValueNumber, ValueString};
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::{map, AttributePath, Diagnostics};

use crate::api::dto;
use crate::convert::{
    expand_bool, expand_i64, expand_string, expand_time_to_unix, flatten_bool, flatten_i64,
    flatten_string, flatten_unix_time,
};
use crate::utils::{flatten_list, Expand, Flatten, WithSchema, WithValidate};

/// Fields requested back from the server on every distributionschedule call.
pub(crate) const READABLE_ATTRIBUTES: &str = "active,start_time,time_zone,upgrade_groups";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionscheduleModel<'a> {
    #[serde(borrow = "'a", rename = "ref")]
    pub object_ref: ValueString<'a>,
    pub active: Value<bool>,
    pub start_time: ValueString<'a>,
    pub time_zone: ValueString<'a>,
    pub upgrade_groups: ValueList<Value<UpgradegroupScheduleModel<'a>>>,
}

/// Distribution slot of one upgrade group inside the schedule. Unlike the
/// upgradegroup resource, the schedule carries its times as raw epoch
/// seconds.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradegroupScheduleModel<'a> {
    #[serde(borrow = "'a")]
    pub name: ValueString<'a>,
    pub distribution_dependent_group: ValueString<'a>,
    pub distribution_time: ValueNumber,
    pub upgrade_dependent_group: ValueString<'a>,
    pub upgrade_time: ValueNumber,
    pub time_zone: ValueString<'a>,
}

impl WithSchema for DistributionscheduleModel<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain(
                    "Manages the software distribution schedule of the Grid.",
                ),
                attributes: map! {
                    "ref" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Reference of the distributionschedule object, assigned by the server.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "active" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain(
                            "Whether the distribution schedule is active.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "start_time" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "RFC 3339 time at which the distribution starts.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "time_zone" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Time zone of the schedule."),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "upgrade_groups" => Attribute {
                        attr_type: AttributeType::List(
                            AttributeType::Object(map! {
                                "name" => AttributeType::String,
                                "distribution_dependent_group" => AttributeType::String,
                                "distribution_time" => AttributeType::Number,
                                "upgrade_dependent_group" => AttributeType::String,
                                "upgrade_time" => AttributeType::Number,
                                "time_zone" => AttributeType::String,
                            })
                            .into(),
                        ),
                        description: Description::plain(
                            "Distribution slots of the upgrade groups, in distribution order.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                ..Default::default()
            },
        }
    }
}

impl WithValidate for DistributionscheduleModel<'_> {
    fn validate(&self, _diags: &mut Diagnostics) {}
}

impl UpgradegroupScheduleModel<'_> {
    /// Expand one schedule slot, or report why it cannot be sent.
    ///
    /// A slot without a name or without a distribution time would be
    /// silently discarded by the server, so it is dropped here with an
    /// error instead. The dependent groups are optional and an empty
    /// string means unset. A missing upgrade time is sent as 0, which the
    /// server reads as "with the distribution".
    fn expand_checked(
        &self,
        diags: &mut Diagnostics,
        attr_path: AttributePath,
    ) -> Option<dto::UpgradegroupSchedule> {
        let name = expand_string(&self.name).unwrap_or_default();
        if name.is_empty() {
            diags.error(
                "Invalid upgrade group schedule",
                "The upgrade group must have a non-empty name",
                attr_path.attribute("name"),
            );
            return None;
        }
        let distribution_time = expand_i64(&self.distribution_time).unwrap_or(0);
        if distribution_time == 0 {
            diags.error(
                "Invalid upgrade group schedule",
                format!("The upgrade group {name:?} must have a non-zero distribution_time"),
                attr_path.attribute("distribution_time"),
            );
            return None;
        }
        Some(dto::UpgradegroupSchedule {
            name: Some(name),
            distribution_dependent_group: expand_string(&self.distribution_dependent_group)
                .filter(|group| !group.is_empty()),
            distribution_time: Some(distribution_time),
            upgrade_dependent_group: expand_string(&self.upgrade_dependent_group)
                .filter(|group| !group.is_empty()),
            upgrade_time: Some(expand_i64(&self.upgrade_time).unwrap_or(0)),
            time_zone: None,
        })
    }
}

impl Expand for DistributionscheduleModel<'_> {
    type Dto = dto::Distributionschedule;

    fn expand(&self, diags: &mut Diagnostics) -> Option<dto::Distributionschedule> {
        let upgrade_groups = match &self.upgrade_groups {
            Value::Value(groups) => Some(
                groups
                    .iter()
                    .enumerate()
                    .filter_map(|(index, group)| {
                        let Value::Value(group) = group else {
                            return None;
                        };
                        group.expand_checked(
                            diags,
                            AttributePath::new("upgrade_groups").index(index as i64),
                        )
                    })
                    .collect(),
            ),
            Value::Null | Value::Unknown => None,
        };
        Some(dto::Distributionschedule {
            object_ref: None,
            time_zone: None,
            active: expand_bool(&self.active),
            start_time: expand_time_to_unix(
                &self.start_time,
                diags,
                AttributePath::new("start_time"),
            ),
            upgrade_groups,
        })
    }
}

impl<'a> Flatten<dto::Distributionschedule> for DistributionscheduleModel<'a> {
    fn flatten(dto: &dto::Distributionschedule) -> Self {
        Self {
            object_ref: flatten_string(dto.object_ref.as_deref()),
            active: flatten_bool(dto.active),
            start_time: flatten_unix_time(dto.start_time),
            time_zone: flatten_string(dto.time_zone.as_deref()),
            upgrade_groups: flatten_list(dto.upgrade_groups.as_deref()),
        }
    }
}

impl<'a> Flatten<dto::UpgradegroupSchedule> for UpgradegroupScheduleModel<'a> {
    fn flatten(dto: &dto::UpgradegroupSchedule) -> Self {
        Self {
            name: flatten_string(dto.name.as_deref()),
            distribution_dependent_group: flatten_string(
                dto.distribution_dependent_group.as_deref(),
            ),
            distribution_time: flatten_i64(dto.distribution_time),
            upgrade_dependent_group: flatten_string(dto.upgrade_dependent_group.as_deref()),
            upgrade_time: flatten_i64(dto.upgrade_time),
            time_zone: flatten_string(dto.time_zone.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn slot(name: &'static str, distribution_time: i64) -> Value<UpgradegroupScheduleModel<'static>> {
        Value::Value(UpgradegroupScheduleModel {
            name: ValueString::Value(name.into()),
            distribution_time: ValueNumber::Value(distribution_time),
            ..Default::default()
        })
    }

    #[test]
    fn invalid_slots_are_dropped_and_reported() {
        let mut diags = Diagnostics::default();
        let model = DistributionscheduleModel {
            upgrade_groups: Value::Value(vec![
                slot("ug1", 1718447400),
                slot("", 1718447400),
                slot("ug3", 0),
            ]),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        let groups = dto.upgrade_groups.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name.as_deref(), Some("ug1"));
        assert_eq!(diags.errors.len(), 2);
    }

    #[test]
    fn empty_dependent_groups_are_not_sent() {
        let mut diags = Diagnostics::default();
        let model = DistributionscheduleModel {
            upgrade_groups: Value::Value(vec![Value::Value(UpgradegroupScheduleModel {
                name: ValueString::Value("ug1".into()),
                distribution_dependent_group: ValueString::Value("".into()),
                distribution_time: ValueNumber::Value(1718447400),
                ..Default::default()
            })]),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        let groups = dto.upgrade_groups.unwrap();
        assert_eq!(groups[0].distribution_dependent_group, None);
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn missing_upgrade_time_is_sent_as_zero() {
        let mut diags = Diagnostics::default();
        let model = DistributionscheduleModel {
            upgrade_groups: Value::Value(vec![slot("ug1", 1718447400)]),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        assert_eq!(dto.upgrade_groups.unwrap()[0].upgrade_time, Some(0));
    }

    #[test]
    fn start_time_expands_to_epoch_seconds() {
        let mut diags = Diagnostics::default();
        let model = DistributionscheduleModel {
            start_time: ValueString::Value("2024-06-15T10:30:00Z".into()),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        assert_eq!(dto.start_time, Some(1718447400));
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn flatten_keeps_slot_times_as_numbers() {
        let dto = dto::Distributionschedule {
            object_ref: Some("distributionschedule/b25lLmNsdXN0ZXIkMA:Infoblox".to_owned()),
            active: Some(true),
            start_time: Some(1718447400),
            time_zone: Some("(UTC) Coordinated Universal Time".to_owned()),
            upgrade_groups: Some(vec![dto::UpgradegroupSchedule {
                name: Some("ug1".to_owned()),
                distribution_time: Some(1718447400),
                upgrade_time: Some(0),
                ..Default::default()
            }]),
        };
        let model = DistributionscheduleModel::flatten(&dto);
        assert_eq!(
            model.start_time,
            ValueString::Value("2024-06-15T10:30:00Z".into()),
        );
        let Value::Value(groups) = &model.upgrade_groups else {
            panic!("upgrade_groups should be a list");
        };
        let Value::Value(first) = &groups[0] else {
            panic!("first slot should be a value");
        };
        assert_eq!(first.distribution_time, ValueNumber::Value(1718447400));
        assert_eq!(first.upgrade_time, ValueNumber::Value(0));
    }
}
