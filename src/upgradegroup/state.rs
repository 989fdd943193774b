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

use tf_provider::value::{Value, ValueList, ValueString};
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::{map, AttributePath, Diagnostics};

use crate::api::dto;
use crate::convert::{
    expand_string, expand_time_to_unix, flatten_string, flatten_unix_time,
};
use crate::utils::{
    expand_list, flatten_list, validate_one_of, Expand, Flatten, WithSchema, WithValidate,
};

/// Fields requested back from the server on every upgradegroup call.
pub(crate) const READABLE_ATTRIBUTES: &str = "comment,distribution_dependent_group,\
    distribution_policy,distribution_time,members,name,time_zone,\
    upgrade_dependent_group,upgrade_policy,upgrade_time";

const GROUP_POLICIES: &[&str] = &["SIMULTANEOUSLY", "SEQUENTIALLY"];

/// The WAPI stores the distribution and upgrade times as epoch seconds, the
/// model exposes them as RFC 3339 timestamps.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradegroupModel<'a> {
    #[serde(borrow = "'a", rename = "ref")]
    pub object_ref: ValueString<'a>,
    pub name: ValueString<'a>,
    pub comment: ValueString<'a>,
    pub distribution_dependent_group: ValueString<'a>,
    pub distribution_policy: ValueString<'a>,
    pub distribution_time: ValueString<'a>,
    pub upgrade_dependent_group: ValueString<'a>,
    pub upgrade_policy: ValueString<'a>,
    pub upgrade_time: ValueString<'a>,
    pub time_zone: ValueString<'a>,
    pub members: ValueList<Value<UpgradegroupMemberModel<'a>>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradegroupMemberModel<'a> {
    #[serde(borrow = "'a")]
    pub member: ValueString<'a>,
}

impl WithSchema for UpgradegroupModel<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain(
                    "Manages an upgrade group and its software distribution settings.",
                ),
                attributes: map! {
                    "ref" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Reference of the upgradegroup object, assigned by the server.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Name of the upgrade group."),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "comment" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Comment for the upgrade group."),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "distribution_dependent_group" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Upgrade group that must finish distribution before this one starts.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "distribution_policy" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Distribution scheduling policy, SIMULTANEOUSLY or SEQUENTIALLY.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "distribution_time" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "RFC 3339 time at which the software distribution starts.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "upgrade_dependent_group" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Upgrade group that must finish upgrading before this one starts.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "upgrade_policy" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Upgrade scheduling policy, SIMULTANEOUSLY or SEQUENTIALLY.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "upgrade_time" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "RFC 3339 time at which the software upgrade starts.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "time_zone" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Time zone of the upgrade group."),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "members" => Attribute {
                        attr_type: AttributeType::List(
                            AttributeType::Object(map! {
                                "member" => AttributeType::String,
                            })
                            .into(),
                        ),
                        description: Description::plain(
                            "Grid members assigned to the upgrade group.",
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

impl WithValidate for UpgradegroupModel<'_> {
    fn validate(&self, diags: &mut Diagnostics) {
        validate_one_of(
            &self.distribution_policy,
            GROUP_POLICIES,
            diags,
            AttributePath::new("distribution_policy"),
        );
        validate_one_of(
            &self.upgrade_policy,
            GROUP_POLICIES,
            diags,
            AttributePath::new("upgrade_policy"),
        );
    }
}

impl Expand for UpgradegroupModel<'_> {
    type Dto = dto::Upgradegroup;

    fn expand(&self, diags: &mut Diagnostics) -> Option<dto::Upgradegroup> {
        Some(dto::Upgradegroup {
            object_ref: None,
            time_zone: None,
            name: expand_string(&self.name),
            comment: expand_string(&self.comment),
            distribution_dependent_group: expand_string(&self.distribution_dependent_group),
            distribution_policy: expand_string(&self.distribution_policy),
            distribution_time: expand_time_to_unix(
                &self.distribution_time,
                diags,
                AttributePath::new("distribution_time"),
            ),
            upgrade_dependent_group: expand_string(&self.upgrade_dependent_group),
            upgrade_policy: expand_string(&self.upgrade_policy),
            upgrade_time: expand_time_to_unix(
                &self.upgrade_time,
                diags,
                AttributePath::new("upgrade_time"),
            ),
            members: expand_list(&self.members, diags),
        })
    }
}

impl<'a> Flatten<dto::Upgradegroup> for UpgradegroupModel<'a> {
    fn flatten(dto: &dto::Upgradegroup) -> Self {
        Self {
            object_ref: flatten_string(dto.object_ref.as_deref()),
            name: flatten_string(dto.name.as_deref()),
            comment: flatten_string(dto.comment.as_deref()),
            distribution_dependent_group: flatten_string(
                dto.distribution_dependent_group.as_deref(),
            ),
            distribution_policy: flatten_string(dto.distribution_policy.as_deref()),
            distribution_time: flatten_unix_time(dto.distribution_time),
            upgrade_dependent_group: flatten_string(dto.upgrade_dependent_group.as_deref()),
            upgrade_policy: flatten_string(dto.upgrade_policy.as_deref()),
            upgrade_time: flatten_unix_time(dto.upgrade_time),
            time_zone: flatten_string(dto.time_zone.as_deref()),
            members: flatten_list(dto.members.as_deref()),
        }
    }
}

impl Expand for UpgradegroupMemberModel<'_> {
    type Dto = dto::UpgradegroupMember;

    fn expand(&self, _diags: &mut Diagnostics) -> Option<dto::UpgradegroupMember> {
        Some(dto::UpgradegroupMember {
            member: expand_string(&self.member),
        })
    }
}

impl<'a> Flatten<dto::UpgradegroupMember> for UpgradegroupMemberModel<'a> {
    fn flatten(dto: &dto::UpgradegroupMember) -> Self {
        Self {
            member: flatten_string(dto.member.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn times_expand_to_epoch_seconds() {
        let mut diags = Diagnostics::default();
        let model = UpgradegroupModel {
            name: ValueString::Value("ug1".into()),
            distribution_time: ValueString::Value("2024-06-15T10:30:00Z".into()),
            upgrade_time: ValueString::Value("2024-06-16T02:00:00Z".into()),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        assert_eq!(dto.distribution_time, Some(1718447400));
        assert_eq!(dto.upgrade_time, Some(1718503200));
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn times_flatten_back_to_rfc3339() {
        let dto = dto::Upgradegroup {
            name: Some("ug1".to_owned()),
            distribution_time: Some(1718447400),
            upgrade_time: None,
            ..Default::default()
        };
        let model = UpgradegroupModel::flatten(&dto);
        assert_eq!(
            model.distribution_time,
            ValueString::Value("2024-06-15T10:30:00Z".into()),
        );
        assert_eq!(model.upgrade_time, ValueString::Null);
    }

    #[test]
    fn unparsable_time_reports_on_its_attribute() {
        let mut diags = Diagnostics::default();
        let model = UpgradegroupModel {
            name: ValueString::Value("ug1".into()),
            upgrade_time: ValueString::Value("tomorrow".into()),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        assert_eq!(dto.upgrade_time, None);
        assert_eq!(diags.errors.len(), 1);
    }

    #[test]
    fn validate_rejects_unknown_policies() {
        let mut diags = Diagnostics::default();
        let model = UpgradegroupModel {
            distribution_policy: ValueString::Value("WHENEVER".into()),
            upgrade_policy: ValueString::Value("SEQUENTIALLY".into()),
            ..Default::default()
        };
        model.validate(&mut diags);
        assert_eq!(diags.errors.len(), 1);
    }
}
