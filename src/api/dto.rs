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

//! Wire representation of the WAPI objects managed by this provider.
//!
//! Every field is optional: the WAPI only returns the fields that were
//! requested, and only the fields present in a write body are modified.
//! `None` therefore means "absent", never "set to empty".

use serde::{Deserialize, Serialize};

use super::WapiObject;

/// The Grid singleton object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    #[serde(rename = "_ref", skip_serializing_if = "Option::is_none")]
    pub object_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_recursive_deletion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_log_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_to_syslog_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_gui_api_for_lan_vip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_recycle_bin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csp_api_config: Option<GridCspApiConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_backup: Option<GridScheduledBackup>,
}

impl WapiObject for Grid {
    const OBJECT_TYPE: &'static str = "grid";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridCspApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridScheduledBackup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_local_copy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_of_transfer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_past_hour: Option<i64>,
}

/// A Grid member appliance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_ref", skip_serializing_if = "Option::is_none")]
    pub object_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_addr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_candidate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_setting: Option<MemberVipSetting>,
}

impl WapiObject for Member {
    const OBJECT_TYPE: &'static str = "member";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberVipSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_mask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

/// File distribution settings of a Grid member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberFiledistribution {
    #[serde(rename = "_ref", skip_serializing_if = "Option::is_none")]
    pub object_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_uploads: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ftp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ftp_filelist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ftp_passive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http_acl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_tftp: Option<bool>,
}

impl WapiObject for MemberFiledistribution {
    const OBJECT_TYPE: &'static str = "member:filedistribution";
}

/// A Grid Master Candidate promotion group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gmcgroup {
    #[serde(rename = "_ref", skip_serializing_if = "Option::is_none")]
    pub object_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmc_promotion_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<GmcgroupMember>>,
}

impl WapiObject for Gmcgroup {
    const OBJECT_TYPE: &'static str = "gmcgroup";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GmcgroupMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
}

/// An upgrade group and its distribution settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Upgradegroup {
    #[serde(rename = "_ref", skip_serializing_if = "Option::is_none")]
    pub object_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_dependent_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_dependent_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<UpgradegroupMember>>,
}

impl WapiObject for Upgradegroup {
    const OBJECT_TYPE: &'static str = "upgradegroup";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradegroupMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
}

/// The software distribution schedule of the Grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distributionschedule {
    #[serde(rename = "_ref", skip_serializing_if = "Option::is_none")]
    pub object_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_groups: Option<Vec<UpgradegroupSchedule>>,
}

impl WapiObject for Distributionschedule {
    const OBJECT_TYPE: &'static str = "distributionschedule";
}

/// Per-group schedule entry nested in [`Distributionschedule`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradegroupSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_dependent_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_dependent_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Restart order of the service restart groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicerestartGroupOrder {
    #[serde(rename = "_ref", skip_serializing_if = "Option::is_none")]
    pub object_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
}

impl WapiObject for ServicerestartGroupOrder {
    const OBJECT_TYPE: &'static str = "grid:servicerestart:group:order";
}

/// Captive portal properties of a Grid member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Captiveportal {
    #[serde(rename = "_ref", skip_serializing_if = "Option::is_none")]
    pub object_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authn_server_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_auth_success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_auth_failure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<CaptiveportalFile>>,
}

impl WapiObject for Captiveportal {
    const OBJECT_TYPE: &'static str = "captiveportal";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptiveportalFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_fields_are_not_serialized() {
        let group = Gmcgroup {
            name: Some("gmc1".into()),
            members: Some(vec![GmcgroupMember {
                member: Some("infoblox.localdomain".into()),
            }]),
            ..Default::default()
        };
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(
            value,
            json!({"name": "gmc1", "members": [{"member": "infoblox.localdomain"}]}),
        );
    }

    #[test]
    fn ref_field_uses_wapi_name() {
        let body = json!({
            "_ref": "gmcgroup/b25lLmNsdXN0ZXIkMA:gmc1",
            "name": "gmc1",
            "comment": null,
        });
        let group: Gmcgroup = serde_json::from_value(body).unwrap();
        assert_eq!(
            group.object_ref.as_deref(),
            Some("gmcgroup/b25lLmNsdXN0ZXIkMA:gmc1"),
        );
        assert_eq!(group.comment, None);
    }

    #[test]
    fn captiveportal_file_type_round_trips() {
        let file: CaptiveportalFile =
            serde_json::from_value(json!({"name": "logo.png", "type": "IMG_LOGO"}))
                .unwrap();
        assert_eq!(file.file_type.as_deref(), Some("IMG_LOGO"));
        assert_eq!(
            serde_json::to_value(&file).unwrap(),
            json!({"name": "logo.png", "type": "IMG_LOGO"}),
        );
    }
}
