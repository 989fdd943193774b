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

/// Fields requested back from the server on every grid call.
pub(crate) const READABLE_ATTRIBUTES: &str = "allow_recursive_deletion,audit_log_format,\
    audit_to_syslog_enable,csp_api_config,enable_gui_api_for_lan_vip,enable_recycle_bin,\
    name,scheduled_backup,time_zone";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridModel<'a> {
    #[serde(borrow = "'a", rename = "ref")]
    pub object_ref: ValueString<'a>,
    pub name: ValueString<'a>,
    pub allow_recursive_deletion: Value<bool>,
    pub audit_log_format: ValueString<'a>,
    pub audit_to_syslog_enable: Value<bool>,
    pub enable_gui_api_for_lan_vip: Value<bool>,
    pub enable_recycle_bin: Value<bool>,
    pub time_zone: ValueString<'a>,
    pub csp_api_config: Value<GridCspApiConfigModel<'a>>,
    pub scheduled_backup: Value<GridScheduledBackupModel<'a>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCspApiConfigModel<'a> {
    #[serde(borrow = "'a")]
    pub url: ValueString<'a>,
    pub username: ValueString<'a>,
    pub password: ValueString<'a>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridScheduledBackupModel<'a> {
    #[serde(borrow = "'a")]
    pub status: ValueString<'a>,
    pub backup_type: ValueString<'a>,
    pub keep_local_copy: Value<bool>,
    pub hour_of_transfer: ValueNumber,
    pub minutes_past_hour: ValueNumber,
}

pub(crate) fn csp_api_config_type() -> AttributeType {
    AttributeType::Object(map! {
        "url" => AttributeType::String,
        "username" => AttributeType::String,
        "password" => AttributeType::String,
    })
}

pub(crate) fn scheduled_backup_type() -> AttributeType {
    AttributeType::Object(map! {
        "status" => AttributeType::String,
        "backup_type" => AttributeType::String,
        "keep_local_copy" => AttributeType::Bool,
        "hour_of_transfer" => AttributeType::Number,
        "minutes_past_hour" => AttributeType::Number,
    })
}

fn optional_computed_bool(description: &str) -> Attribute {
    Attribute {
        attr_type: AttributeType::Bool,
        description: Description::plain(description),
        constraint: AttributeConstraint::OptionalComputed,
        ..Default::default()
    }
}

impl WithSchema for GridModel<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain("Manages the properties of the Grid."),
                attributes: map! {
                    "ref" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Reference of the grid object, assigned by the server.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Name of the Grid."),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "allow_recursive_deletion" => optional_computed_bool(
                        "Whether deleting a network also deletes the objects inside it.",
                    ),
                    "audit_log_format" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Format of the audit log."),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "audit_to_syslog_enable" => optional_computed_bool(
                        "Whether audit log messages are copied to syslog.",
                    ),
                    "enable_gui_api_for_lan_vip" => optional_computed_bool(
                        "Whether the GUI and API are reachable over both LAN1 and VIP.",
                    ),
                    "enable_recycle_bin" => optional_computed_bool(
                        "Whether deleted objects are kept in the recycle bin.",
                    ),
                    "time_zone" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Default time zone of the Grid."),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "csp_api_config" => Attribute {
                        attr_type: csp_api_config_type(),
                        description: Description::plain(
                            "Credentials used to reach the Cloud Services Portal. \
                             The url is assigned by the server.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        sensitive: true,
                        ..Default::default()
                    },
                    "scheduled_backup" => Attribute {
                        attr_type: scheduled_backup_type(),
                        description: Description::plain(
                            "Scheduled backup settings of the Grid. \
                             The status is assigned by the server.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                },
                ..Default::default()
            },
        }
    }
}

impl WithValidate for GridModel<'_> {
    fn validate(&self, _diags: &mut Diagnostics) {}
}

impl Expand for GridModel<'_> {
    type Dto = dto::Grid;

    fn expand(&self, diags: &mut Diagnostics) -> Option<dto::Grid> {
        Some(dto::Grid {
            object_ref: None,
            name: expand_string(&self.name),
            allow_recursive_deletion: expand_bool(&self.allow_recursive_deletion),
            audit_log_format: expand_string(&self.audit_log_format),
            audit_to_syslog_enable: expand_bool(&self.audit_to_syslog_enable),
            enable_gui_api_for_lan_vip: expand_bool(&self.enable_gui_api_for_lan_vip),
            enable_recycle_bin: expand_bool(&self.enable_recycle_bin),
            time_zone: expand_string(&self.time_zone),
            csp_api_config: self.csp_api_config.expand(diags),
            scheduled_backup: self.scheduled_backup.expand(diags),
        })
    }
}

impl<'a> Flatten<dto::Grid> for GridModel<'a> {
    fn flatten(dto: &dto::Grid) -> Self {
        Self {
            object_ref: flatten_string(dto.object_ref.as_deref()),
            name: flatten_string(dto.name.as_deref()),
            allow_recursive_deletion: flatten_bool(dto.allow_recursive_deletion),
            audit_log_format: flatten_string(dto.audit_log_format.as_deref()),
            audit_to_syslog_enable: flatten_bool(dto.audit_to_syslog_enable),
            enable_gui_api_for_lan_vip: flatten_bool(dto.enable_gui_api_for_lan_vip),
            enable_recycle_bin: flatten_bool(dto.enable_recycle_bin),
            time_zone: flatten_string(dto.time_zone.as_deref()),
            csp_api_config: flatten_nested(dto.csp_api_config.as_ref()),
            scheduled_backup: flatten_nested(dto.scheduled_backup.as_ref()),
        }
    }
}

impl Expand for GridCspApiConfigModel<'_> {
    type Dto = dto::GridCspApiConfig;

    fn expand(&self, _diags: &mut Diagnostics) -> Option<dto::GridCspApiConfig> {
        Some(dto::GridCspApiConfig {
            // The portal URL is assigned by the server
            url: None,
            username: expand_string(&self.username),
            password: expand_string(&self.password),
        })
    }
}

impl<'a> Flatten<dto::GridCspApiConfig> for GridCspApiConfigModel<'a> {
    fn flatten(dto: &dto::GridCspApiConfig) -> Self {
        Self {
            url: flatten_string(dto.url.as_deref()),
            username: flatten_string(dto.username.as_deref()),
            password: flatten_string(dto.password.as_deref()),
        }
    }
}

impl Expand for GridScheduledBackupModel<'_> {
    type Dto = dto::GridScheduledBackup;

    fn expand(&self, _diags: &mut Diagnostics) -> Option<dto::GridScheduledBackup> {
        Some(dto::GridScheduledBackup {
            // The backup status is reported by the server
            status: None,
            backup_type: expand_string(&self.backup_type),
            keep_local_copy: expand_bool(&self.keep_local_copy),
            hour_of_transfer: expand_i64(&self.hour_of_transfer),
            minutes_past_hour: expand_i64(&self.minutes_past_hour),
        })
    }
}

impl<'a> Flatten<dto::GridScheduledBackup> for GridScheduledBackupModel<'a> {
    fn flatten(dto: &dto::GridScheduledBackup) -> Self {
        Self {
            status: flatten_string(dto.status.as_deref()),
            backup_type: flatten_string(dto.backup_type.as_deref()),
            keep_local_copy: flatten_bool(dto.keep_local_copy),
            hour_of_transfer: flatten_i64(dto.hour_of_transfer),
            minutes_past_hour: flatten_i64(dto.minutes_past_hour),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn csp_api_config_expands_without_the_url() {
        let mut diags = Diagnostics::default();
        let model = GridModel {
            name: ValueString::Value("Infoblox".into()),
            csp_api_config: Value::Value(GridCspApiConfigModel {
                url: ValueString::Value("https://csp.infoblox.com".into()),
                username: ValueString::Value("svc-csp".into()),
                password: ValueString::Value("hunter2".into()),
            }),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        let csp = dto.csp_api_config.unwrap();
        assert_eq!(csp.url, None);
        assert_eq!(csp.username.as_deref(), Some("svc-csp"));
        assert_eq!(csp.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn scheduled_backup_expands_without_the_status() {
        let mut diags = Diagnostics::default();
        let model = GridModel {
            scheduled_backup: Value::Value(GridScheduledBackupModel {
                status: ValueString::Value("COMPLETED".into()),
                backup_type: ValueString::Value("LOCAL".into()),
                keep_local_copy: Value::Value(true),
                hour_of_transfer: ValueNumber::Value(3),
                minutes_past_hour: ValueNumber::Value(30),
            }),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        let backup = dto.scheduled_backup.unwrap();
        assert_eq!(backup.status, None);
        assert_eq!(backup.backup_type.as_deref(), Some("LOCAL"));
        assert_eq!(backup.hour_of_transfer, Some(3));
    }

    #[test]
    fn absent_nested_objects_flatten_to_null() {
        let dto = dto::Grid {
            object_ref: Some("grid/b25lLmNsdXN0ZXIkMA:Infoblox".to_owned()),
            name: Some("Infoblox".to_owned()),
            ..Default::default()
        };
        let model = GridModel::flatten(&dto);
        assert_eq!(model.csp_api_config, Value::Null);
        assert_eq!(model.scheduled_backup, Value::Null);
        assert_eq!(model.name, ValueString::Value("Infoblox".into()));
    }

    #[test]
    fn null_nested_objects_expand_to_absent() {
        let mut diags = Diagnostics::default();
        let dto = GridModel::default().expand(&mut diags).unwrap();
        assert_eq!(dto.csp_api_config, None);
        assert_eq!(dto.scheduled_backup, None);
        assert!(diags.errors.is_empty());
    }
}
