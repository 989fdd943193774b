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

use tf_provider::value::{Value, ValueString};
use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::{map, Diagnostics};

use crate::api::dto;
use crate::convert::{expand_bool, expand_string, flatten_bool, flatten_string};
use crate::utils::{Expand, Flatten, WithSchema, WithValidate};

/// Fields requested back from the server on every member:filedistribution call.
pub(crate) const READABLE_ATTRIBUTES: &str = "allow_uploads,comment,enable_ftp,\
    enable_ftp_filelist,enable_ftp_passive,enable_http,enable_http_acl,enable_tftp,\
    host_name,status";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberFiledistributionModel<'a> {
    #[serde(borrow = "'a", rename = "ref")]
    pub object_ref: ValueString<'a>,
    pub host_name: ValueString<'a>,
    pub comment: ValueString<'a>,
    pub status: ValueString<'a>,
    pub allow_uploads: Value<bool>,
    pub enable_ftp: Value<bool>,
    pub enable_ftp_filelist: Value<bool>,
    pub enable_ftp_passive: Value<bool>,
    pub enable_http: Value<bool>,
    pub enable_http_acl: Value<bool>,
    pub enable_tftp: Value<bool>,
}

fn optional_computed_bool(description: &str) -> Attribute {
    Attribute {
        attr_type: AttributeType::Bool,
        description: Description::plain(description),
        constraint: AttributeConstraint::OptionalComputed,
        ..Default::default()
    }
}

impl WithSchema for MemberFiledistributionModel<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain(
                    "Manages the file distribution settings of a Grid member.",
                ),
                attributes: map! {
                    "ref" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Reference of the member:filedistribution object, assigned by the server.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "host_name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Host name of the Grid member these settings belong to.",
                        ),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "comment" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Comment of the member, taken from the member object.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "status" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "File distribution status of the member.",
                        ),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "allow_uploads" => optional_computed_bool(
                        "Whether uploads to the member are allowed.",
                    ),
                    "enable_ftp" => optional_computed_bool(
                        "Whether file distribution over FTP is enabled.",
                    ),
                    "enable_ftp_filelist" => optional_computed_bool(
                        "Whether FTP clients may list the distribution directory.",
                    ),
                    "enable_ftp_passive" => optional_computed_bool(
                        "Whether passive mode FTP transfers are enabled.",
                    ),
                    "enable_http" => optional_computed_bool(
                        "Whether file distribution over HTTP is enabled.",
                    ),
                    "enable_http_acl" => optional_computed_bool(
                        "Whether the HTTP access control list is enforced.",
                    ),
                    "enable_tftp" => optional_computed_bool(
                        "Whether file distribution over TFTP is enabled.",
                    ),
                },
                ..Default::default()
            },
        }
    }
}

impl WithValidate for MemberFiledistributionModel<'_> {
    fn validate(&self, _diags: &mut Diagnostics) {}
}

impl Expand for MemberFiledistributionModel<'_> {
    type Dto = dto::MemberFiledistribution;

    fn expand(&self, _diags: &mut Diagnostics) -> Option<dto::MemberFiledistribution> {
        Some(dto::MemberFiledistribution {
            // ref, comment and status are owned by the server
            object_ref: None,
            comment: None,
            status: None,
            host_name: expand_string(&self.host_name),
            allow_uploads: expand_bool(&self.allow_uploads),
            enable_ftp: expand_bool(&self.enable_ftp),
            enable_ftp_filelist: expand_bool(&self.enable_ftp_filelist),
            enable_ftp_passive: expand_bool(&self.enable_ftp_passive),
            enable_http: expand_bool(&self.enable_http),
            enable_http_acl: expand_bool(&self.enable_http_acl),
            enable_tftp: expand_bool(&self.enable_tftp),
        })
    }
}

impl<'a> Flatten<dto::MemberFiledistribution> for MemberFiledistributionModel<'a> {
    fn flatten(dto: &dto::MemberFiledistribution) -> Self {
        Self {
            object_ref: flatten_string(dto.object_ref.as_deref()),
            host_name: flatten_string(dto.host_name.as_deref()),
            comment: flatten_string(dto.comment.as_deref()),
            status: flatten_string(dto.status.as_deref()),
            allow_uploads: flatten_bool(dto.allow_uploads),
            enable_ftp: flatten_bool(dto.enable_ftp),
            enable_ftp_filelist: flatten_bool(dto.enable_ftp_filelist),
            enable_ftp_passive: flatten_bool(dto.enable_ftp_passive),
            enable_http: flatten_bool(dto.enable_http),
            enable_http_acl: flatten_bool(dto.enable_http_acl),
            enable_tftp: flatten_bool(dto.enable_tftp),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn expand_never_sends_the_member_comment() {
        let mut diags = Diagnostics::default();
        let model = MemberFiledistributionModel {
            host_name: ValueString::Value("infoblox.localdomain".into()),
            comment: ValueString::Value("set by the member".into()),
            status: ValueString::Value("ENABLED".into()),
            enable_tftp: Value::Value(true),
            ..Default::default()
        };
        let dto = model.expand(&mut diags).unwrap();
        assert_eq!(dto.comment, None);
        assert_eq!(dto.status, None);
        assert_eq!(dto.enable_tftp, Some(true));
        assert_eq!(dto.host_name.as_deref(), Some("infoblox.localdomain"));
    }

    #[test]
    fn flatten_keeps_server_reported_status() {
        let dto = dto::MemberFiledistribution {
            object_ref: Some(
                "member:filedistribution/b25lLm1lbWJlcl9maWxl:infoblox.localdomain".to_owned(),
            ),
            host_name: Some("infoblox.localdomain".to_owned()),
            status: Some("DISABLED".to_owned()),
            allow_uploads: Some(false),
            ..Default::default()
        };
        let model = MemberFiledistributionModel::flatten(&dto);
        assert_eq!(model.status, ValueString::Value("DISABLED".into()));
        assert_eq!(model.allow_uploads, Value::Value(false));
        assert_eq!(model.comment, ValueString::Null);
    }
}
