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

use tf_provider::value::{Value, ValueNumber, ValueString};
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::{map, Diagnostics};

use crate::api::dto;
use crate::convert::{expand_bool, expand_i64, expand_string, flatten_bool, flatten_i64, flatten_string};
use crate::utils::{flatten_nested, Expand, Flatten, WithSchema, WithValidate};

/// Fields requested back from the server on every member call.
pub(crate) const READABLE_ATTRIBUTES: &str =
    "comment,config_addr_type,host_name,master_candidate,platform,router_id,time_zone,vip_setting";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberModel<'a> {
    #[serde(borrow = "'a", rename = "ref")]
    pub object_ref: ValueString<'a>,
    pub host_name: ValueString<'a>,
    pub platform: ValueString<'a>,
    pub comment: ValueString<'a>,
    pub config_addr_type: ValueString<'a>,
    pub time_zone: ValueString<'a>,
    pub router_id: ValueNumber,
    pub master_candidate: Value<bool>,
    pub vip_setting: Value<MemberVipSettingModel<'a>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberVipSettingModel<'a> {
    #[serde(borrow = "'a")]
    pub address: ValueString<'a>,
    pub subnet_mask: ValueString<'a>,
    pub gateway: ValueString<'a>,
}

pub(crate) fn vip_setting_type() -> AttributeType {
    AttributeType::Object(map! {
        "address" => AttributeType::String,
        "subnet_mask" => AttributeType::String,
        "gateway" => AttributeType::String,
    })
}

impl WithSchema for MemberModel<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain("Manages a Grid member appliance."),
                attributes: map! {
                    "ref" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Reference of the member object, assigned by the server.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "host_name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Fully qualified host name of the member."),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "platform" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Hardware platform of the member."),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "comment" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Comment for the member."),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "config_addr_type" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Address configuration type of the member, IPV4, IPV6 or BOTH.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "time_zone" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Time zone of the member."),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "router_id" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain(
                            "Virtual router identifier used for the HA pair.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "master_candidate" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain(
                            "Whether the member can be promoted to Grid Master.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "vip_setting" => Attribute {
                        attr_type: vip_setting_type(),
                        description: Description::plain(
                            "Network settings of the member VIP interface.",
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

impl WithValidate for MemberModel<'_> {
    fn validate(&self, _diags: &mut Diagnostics) {}
}

impl Expand for MemberModel<'_> {
    type Dto = dto::Member;

    fn expand(&self, diags: &mut Diagnostics) -> Option<dto::Member> {
        Some(dto::Member {
            object_ref: None,
            host_name: expand_string(&self.host_name),
            platform: expand_string(&self.platform),
            comment: expand_string(&self.comment),
            config_addr_type: expand_string(&self.config_addr_type),
            time_zone: expand_string(&self.time_zone),
            router_id: expand_i64(&self.router_id),
            master_candidate: expand_bool(&self.master_candidate),
            vip_setting: self.vip_setting.expand(diags),
        })
    }
}

impl<'a> Flatten<dto::Member> for MemberModel<'a> {
    fn flatten(dto: &dto::Member) -> Self {
        Self {
            object_ref: flatten_string(dto.object_ref.as_deref()),
            host_name: flatten_string(dto.host_name.as_deref()),
            platform: flatten_string(dto.platform.as_deref()),
            comment: flatten_string(dto.comment.as_deref()),
            config_addr_type: flatten_string(dto.config_addr_type.as_deref()),
            time_zone: flatten_string(dto.time_zone.as_deref()),
            router_id: flatten_i64(dto.router_id),
            master_candidate: flatten_bool(dto.master_candidate),
            vip_setting: flatten_nested(dto.vip_setting.as_ref()),
        }
    }
}

impl Expand for MemberVipSettingModel<'_> {
    type Dto = dto::MemberVipSetting;

    fn expand(&self, _diags: &mut Diagnostics) -> Option<dto::MemberVipSetting> {
        Some(dto::MemberVipSetting {
            address: expand_string(&self.address),
            subnet_mask: expand_string(&self.subnet_mask),
            gateway: expand_string(&self.gateway),
        })
    }
}

impl<'a> Flatten<dto::MemberVipSetting> for MemberVipSettingModel<'a> {
    fn flatten(dto: &dto::MemberVipSetting) -> Self {
        Self {
            address: flatten_string(dto.address.as_deref()),
            subnet_mask: flatten_string(dto.subnet_mask.as_deref()),
            gateway: flatten_string(dto.gateway.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn null_vip_setting_expands_to_absent() {
        let mut diags = Diagnostics::default();
        let model = MemberModel {
            host_name: ValueString::Value("infoblox.localdomain".into()),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        assert_eq!(dto.vip_setting, None);
        assert_eq!(dto.host_name.as_deref(), Some("infoblox.localdomain"));
    }

    #[test]
    fn vip_setting_round_trips_through_the_wire_form() {
        let mut diags = Diagnostics::default();
        let model = MemberModel {
            host_name: ValueString::Value("infoblox.localdomain".into()),
            vip_setting: Value::Value(MemberVipSettingModel {
                address: ValueString::Value("192.168.1.2".into()),
                subnet_mask: ValueString::Value("255.255.255.0".into()),
                gateway: ValueString::Value("192.168.1.1".into()),
            }),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        let flattened = MemberModel::flatten(&dto);
        assert_eq!(flattened.vip_setting, model.vip_setting);
    }

    #[test]
    fn absent_vip_setting_flattens_to_null() {
        let dto = dto::Member {
            host_name: Some("infoblox.localdomain".to_owned()),
            ..Default::default()
        };
        let model = MemberModel::flatten(&dto);
        assert_eq!(model.vip_setting, Value::Null);
        assert_eq!(model.router_id, ValueNumber::Null);
    }
}
