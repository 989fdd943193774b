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

use async_trait::async_trait;

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::{map, AttributePath, DataSource, Diagnostics};

use crate::api::dto::Member;
use crate::api::ClientHandle;
use crate::utils::Flatten;

use super::state::{vip_setting_type, MemberModel, READABLE_ATTRIBUTES};

fn computed_string(description: &str) -> Attribute {
    Attribute {
        attr_type: AttributeType::String,
        description: Description::plain(description),
        constraint: AttributeConstraint::Computed,
        ..Default::default()
    }
}

/// Looks up a `member` object by host name.
#[derive(Debug, Default)]
pub struct MemberDataSource {
    api: ClientHandle,
}

impl MemberDataSource {
    pub fn new(api: ClientHandle) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DataSource for MemberDataSource {
    type State<'a> = MemberModel<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain("Reads a Grid member by host name."),
                attributes: map! {
                    "ref" => computed_string(
                        "Reference of the member object, assigned by the server.",
                    ),
                    "host_name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Fully qualified host name of the member to look up.",
                        ),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "platform" => computed_string("Hardware platform of the member."),
                    "comment" => computed_string("Comment for the member."),
                    "config_addr_type" => computed_string(
                        "Address configuration type of the member.",
                    ),
                    "time_zone" => computed_string("Time zone of the member."),
                    "router_id" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain(
                            "Virtual router identifier used for the HA pair.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "master_candidate" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain(
                            "Whether the member can be promoted to Grid Master.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "vip_setting" => Attribute {
                        attr_type: vip_setting_type(),
                        description: Description::plain(
                            "Network settings of the member VIP interface.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                },
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, _config: Self::State<'a>) -> Option<()> {
        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let api = self.api.get(diags).await?;
        let Value::Value(host_name) = &config.host_name else {
            diags.error(
                "Missing host name",
                "The host_name attribute is required to look up a member",
                AttributePath::default(),
            );
            return None;
        };
        match api
            .search::<Member>()
            .filter("host_name", host_name.as_ref())
            .max_results(1)
            .return_fields_plus(READABLE_ATTRIBUTES)
            .return_as_object()
            .execute()
            .await
        {
            Ok(members) => match members.first() {
                Some(dto) => Some(MemberModel::flatten(dto)),
                None => {
                    diags.error(
                        "Member not found",
                        format!("No member with host name {host_name:?} exists on the Grid"),
                        AttributePath::default(),
                    );
                    None
                }
            },
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to search members, got error: {err}"),
                    AttributePath::default(),
                );
                None
            }
        }
    }
}
