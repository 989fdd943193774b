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
use crate::convert::{expand_string, flatten_string};
use crate::utils::{
    expand_list, flatten_list, validate_one_of, Expand, Flatten, WithSchema, WithValidate,
};

/// Fields requested back from the server on every gmcgroup call.
pub(crate) const READABLE_ATTRIBUTES: &str = "comment,gmc_promotion_policy,members,name,time_zone";

const PROMOTION_POLICIES: &[&str] = &["SIMULTANEOUS", "SEQUENTIAL"];

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GmcgroupModel<'a> {
    #[serde(borrow = "'a", rename = "ref")]
    pub object_ref: ValueString<'a>,
    pub name: ValueString<'a>,
    pub comment: ValueString<'a>,
    pub gmc_promotion_policy: ValueString<'a>,
    pub time_zone: ValueString<'a>,
    pub members: ValueList<Value<GmcgroupMemberModel<'a>>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GmcgroupMemberModel<'a> {
    #[serde(borrow = "'a")]
    pub member: ValueString<'a>,
}

impl WithSchema for GmcgroupModel<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain(
                    "Group of Grid members eligible for promotion to Grid Master Candidate.",
                ),
                attributes: map! {
                    "ref" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Reference of the gmcgroup object, assigned by the server.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Name of the GMC group."),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "comment" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Comment for the GMC group."),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "gmc_promotion_policy" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Promotion policy of the group, either SIMULTANEOUS or SEQUENTIAL.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "time_zone" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Time zone of the GMC group."),
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
                            "Grid members assigned to the GMC group.",
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

impl WithValidate for GmcgroupModel<'_> {
    fn validate(&self, diags: &mut Diagnostics) {
        validate_one_of(
            &self.gmc_promotion_policy,
            PROMOTION_POLICIES,
            diags,
            AttributePath::new("gmc_promotion_policy"),
        );
    }
}

impl Expand for GmcgroupModel<'_> {
    type Dto = dto::Gmcgroup;

    fn expand(&self, diags: &mut Diagnostics) -> Option<dto::Gmcgroup> {
        Some(dto::Gmcgroup {
            // ref and time_zone are owned by the server
            object_ref: None,
            time_zone: None,
            name: expand_string(&self.name),
            comment: expand_string(&self.comment),
            gmc_promotion_policy: expand_string(&self.gmc_promotion_policy),
            members: expand_list(&self.members, diags),
        })
    }
}

impl<'a> Flatten<dto::Gmcgroup> for GmcgroupModel<'a> {
    fn flatten(dto: &dto::Gmcgroup) -> Self {
        Self {
            object_ref: flatten_string(dto.object_ref.as_deref()),
            name: flatten_string(dto.name.as_deref()),
            comment: flatten_string(dto.comment.as_deref()),
            gmc_promotion_policy: flatten_string(dto.gmc_promotion_policy.as_deref()),
            time_zone: flatten_string(dto.time_zone.as_deref()),
            members: flatten_list(dto.members.as_deref()),
        }
    }
}

impl Expand for GmcgroupMemberModel<'_> {
    type Dto = dto::GmcgroupMember;

    fn expand(&self, _diags: &mut Diagnostics) -> Option<dto::GmcgroupMember> {
        Some(dto::GmcgroupMember {
            member: expand_string(&self.member),
        })
    }
}

impl<'a> Flatten<dto::GmcgroupMember> for GmcgroupMemberModel<'a> {
    fn flatten(dto: &dto::GmcgroupMember) -> Self {
        Self {
            member: flatten_string(dto.member.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_model() -> GmcgroupModel<'static> {
        GmcgroupModel {
            object_ref: ValueString::Value("gmcgroup/b25lLmNsdXN0ZXIkMA:gmc1".into()),
            name: ValueString::Value("gmc1".into()),
            comment: ValueString::Null,
            gmc_promotion_policy: ValueString::Value("SIMULTANEOUS".into()),
            time_zone: ValueString::Value("(UTC) Coordinated Universal Time".into()),
            members: Value::Value(vec![Value::Value(GmcgroupMemberModel {
                member: ValueString::Value("infoblox.localdomain".into()),
            })]),
        }
    }

    #[test]
    fn expand_never_sends_server_owned_fields() {
        let mut diags = Diagnostics::default();
        let dto = sample_model().expand(&mut diags).unwrap();
        assert_eq!(dto.object_ref, None);
        assert_eq!(dto.time_zone, None);
        assert_eq!(dto.name.as_deref(), Some("gmc1"));
        assert_eq!(dto.comment, None);
        assert_eq!(
            dto.members,
            Some(vec![dto::GmcgroupMember {
                member: Some("infoblox.localdomain".to_owned()),
            }]),
        );
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn flatten_fills_every_attribute() {
        let dto = dto::Gmcgroup {
            object_ref: Some("gmcgroup/b25lLmNsdXN0ZXIkMA:gmc1".to_owned()),
            name: Some("gmc1".to_owned()),
            comment: None,
            gmc_promotion_policy: Some("SIMULTANEOUS".to_owned()),
            time_zone: Some("(UTC) Coordinated Universal Time".to_owned()),
            members: Some(vec![dto::GmcgroupMember {
                member: Some("infoblox.localdomain".to_owned()),
            }]),
        };
        assert_eq!(GmcgroupModel::flatten(&dto), sample_model());
    }

    #[test]
    fn validate_rejects_unknown_policy() {
        let mut diags = Diagnostics::default();
        let model = GmcgroupModel {
            gmc_promotion_policy: ValueString::Value("EVENTUALLY".into()),
            ..Default::default()
        };
        model.validate(&mut diags);
        assert_eq!(diags.errors.len(), 1);
    }
}
