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

use tf_provider::value::ValueEmpty;
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::{map, AttributePath, DataSource, Diagnostics};

use crate::api::dto::Grid;
use crate::api::ClientHandle;
use crate::utils::Flatten;

use super::state::{csp_api_config_type, scheduled_backup_type, GridModel, READABLE_ATTRIBUTES};

fn computed(attr_type: AttributeType, description: &str) -> Attribute {
    Attribute {
        attr_type,
        description: Description::plain(description),
        constraint: AttributeConstraint::Computed,
        ..Default::default()
    }
}

/// Reads the `grid` singleton object.
#[derive(Debug, Default)]
pub struct GridDataSource {
    api: ClientHandle,
}

impl GridDataSource {
    pub fn new(api: ClientHandle) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DataSource for GridDataSource {
    type State<'a> = GridModel<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain("Reads the properties of the Grid."),
                attributes: map! {
                    "ref" => computed(
                        AttributeType::String,
                        "Reference of the grid object, assigned by the server.",
                    ),
                    "name" => computed(AttributeType::String, "Name of the Grid."),
                    "allow_recursive_deletion" => computed(
                        AttributeType::Bool,
                        "Whether deleting a network also deletes the objects inside it.",
                    ),
                    "audit_log_format" => computed(
                        AttributeType::String,
                        "Format of the audit log.",
                    ),
                    "audit_to_syslog_enable" => computed(
                        AttributeType::Bool,
                        "Whether audit log messages are copied to syslog.",
                    ),
                    "enable_gui_api_for_lan_vip" => computed(
                        AttributeType::Bool,
                        "Whether the GUI and API are reachable over both LAN1 and VIP.",
                    ),
                    "enable_recycle_bin" => computed(
                        AttributeType::Bool,
                        "Whether deleted objects are kept in the recycle bin.",
                    ),
                    "time_zone" => computed(
                        AttributeType::String,
                        "Default time zone of the Grid.",
                    ),
                    "csp_api_config" => Attribute {
                        attr_type: csp_api_config_type(),
                        description: Description::plain(
                            "Credentials used to reach the Cloud Services Portal.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        sensitive: true,
                        ..Default::default()
                    },
                    "scheduled_backup" => computed(
                        scheduled_backup_type(),
                        "Scheduled backup settings of the Grid.",
                    ),
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
        _config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let api = self.api.get(diags).await?;
        match api
            .search::<Grid>()
            .max_results(1)
            .return_fields_plus(READABLE_ATTRIBUTES)
            .return_as_object()
            .execute()
            .await
        {
            Ok(grids) => match grids.first() {
                Some(dto) => Some(GridModel::flatten(dto)),
                None => {
                    diags.error(
                        "Grid not found",
                        "The WAPI did not return any grid object",
                        AttributePath::default(),
                    );
                    None
                }
            },
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to read grid, got error: {err}"),
                    AttributePath::default(),
                );
                None
            }
        }
    }
}
