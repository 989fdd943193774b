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
use crate::convert::{expand_bool, expand_i64, expand_string, flatten_bool, flatten_i64, flatten_string};
use crate::utils::{
    expand_list, flatten_list, validate_min_size, Expand, Flatten, WithSchema, WithValidate,
};

/// Fields requested back from the server on every captiveportal call.
pub(crate) const READABLE_ATTRIBUTES: &str = "authn_server_group,company_name,enable,\
    encryption,files,name,network_view,port,syslog_auth_failure,syslog_auth_success";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptiveportalModel<'a> {
    #[serde(borrow = "'a", rename = "ref")]
    pub object_ref: ValueString<'a>,
    pub name: ValueString<'a>,
    pub authn_server_group: ValueString<'a>,
    pub company_name: ValueString<'a>,
    pub enable: Value<bool>,
    pub encryption: ValueString<'a>,
    pub network_view: ValueString<'a>,
    pub port: ValueNumber,
    pub syslog_auth_success: Value<bool>,
    pub syslog_auth_failure: Value<bool>,
    pub files: ValueList<Value<CaptiveportalFileModel<'a>>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptiveportalFileModel<'a> {
    #[serde(borrow = "'a")]
    pub name: ValueString<'a>,
    #[serde(rename = "type")]
    pub file_type: ValueString<'a>,
}

impl WithSchema for CaptiveportalModel<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain(
                    "Manages the captive portal properties of a Grid member.",
                ),
                attributes: map! {
                    "ref" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Reference of the captiveportal object, assigned by the server.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Host name of the Grid member running the captive portal.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "authn_server_group" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Authentication server group used to authenticate portal users.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "company_name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Company name displayed on the portal page.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "enable" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain("Whether the captive portal is running."),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "encryption" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Encryption used by portal clients, NONE or SSL.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "network_view" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Network view the captive portal operates in.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "port" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("TCP port the portal listens on."),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "syslog_auth_success" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain(
                            "Whether successful authentications are logged to syslog.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "syslog_auth_failure" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain(
                            "Whether failed authentications are logged to syslog.",
                        ),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "files" => Attribute {
                        attr_type: AttributeType::List(
                            AttributeType::Object(map! {
                                "name" => AttributeType::String,
                                "type" => AttributeType::String,
                            })
                            .into(),
                        ),
                        description: Description::plain(
                            "Files uploaded to the portal, at least one when set.",
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

impl WithValidate for CaptiveportalModel<'_> {
    fn validate(&self, diags: &mut Diagnostics) {
        validate_min_size(&self.files, 1, diags, AttributePath::new("files"));
    }
}

impl Expand for CaptiveportalModel<'_> {
    type Dto = dto::Captiveportal;

    fn expand(&self, diags: &mut Diagnostics) -> Option<dto::Captiveportal> {
        Some(dto::Captiveportal {
            object_ref: None,
            name: expand_string(&self.name),
            authn_server_group: expand_string(&self.authn_server_group),
            company_name: expand_string(&self.company_name),
            enable: expand_bool(&self.enable),
            encryption: expand_string(&self.encryption),
            network_view: expand_string(&self.network_view),
            port: expand_i64(&self.port),
            syslog_auth_success: expand_bool(&self.syslog_auth_success),
            syslog_auth_failure: expand_bool(&self.syslog_auth_failure),
            files: expand_list(&self.files, diags),
        })
    }
}

impl<'a> Flatten<dto::Captiveportal> for CaptiveportalModel<'a> {
    fn flatten(dto: &dto::Captiveportal) -> Self {
        Self {
            object_ref: flatten_string(dto.object_ref.as_deref()),
            name: flatten_string(dto.name.as_deref()),
            authn_server_group: flatten_string(dto.authn_server_group.as_deref()),
            company_name: flatten_string(dto.company_name.as_deref()),
            enable: flatten_bool(dto.enable),
            encryption: flatten_string(dto.encryption.as_deref()),
            network_view: flatten_string(dto.network_view.as_deref()),
            port: flatten_i64(dto.port),
            syslog_auth_success: flatten_bool(dto.syslog_auth_success),
            syslog_auth_failure: flatten_bool(dto.syslog_auth_failure),
            files: flatten_list(dto.files.as_deref()),
        }
    }
}

impl Expand for CaptiveportalFileModel<'_> {
    type Dto = dto::CaptiveportalFile;

    fn expand(&self, _diags: &mut Diagnostics) -> Option<dto::CaptiveportalFile> {
        Some(dto::CaptiveportalFile {
            name: expand_string(&self.name),
            file_type: expand_string(&self.file_type),
        })
    }
}

impl<'a> Flatten<dto::CaptiveportalFile> for CaptiveportalFileModel<'a> {
    fn flatten(dto: &dto::CaptiveportalFile) -> Self {
        Self {
            name: flatten_string(dto.name.as_deref()),
            file_type: flatten_string(dto.file_type.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_files_list_is_rejected() {
        let mut diags = Diagnostics::default();
        let model = CaptiveportalModel {
            files: Value::Value(vec![]),
            ..Default::default()
        };
        model.validate(&mut diags);
        assert_eq!(diags.errors.len(), 1);
    }

    #[test]
    fn null_and_unknown_files_lists_are_accepted() {
        let mut diags = Diagnostics::default();
        CaptiveportalModel::default().validate(&mut diags);
        CaptiveportalModel {
            files: ValueList::Unknown,
            ..Default::default()
        }
        .validate(&mut diags);
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn files_round_trip_through_the_wire_form() {
        let mut diags = Diagnostics::default();
        let model = CaptiveportalModel {
            name: ValueString::Value("portal.localdomain".into()),
            port: ValueNumber::Value(4433),
            files: Value::Value(vec![Value::Value(CaptiveportalFileModel {
                name: ValueString::Value("logo.png".into()),
                file_type: ValueString::Value("IMG_LOGO".into()),
            })]),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        assert_eq!(
            dto.files,
            Some(vec![dto::CaptiveportalFile {
                name: Some("logo.png".to_owned()),
                file_type: Some("IMG_LOGO".to_owned()),
            }]),
        );
        let flattened = CaptiveportalModel::flatten(&dto);
        assert_eq!(flattened.files, model.files);
        assert_eq!(flattened.port, model.port);
    }
}
