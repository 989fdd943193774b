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

// Data source tests against a mocked WAPI.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tf_provider::value::{Value, ValueString};
use tf_provider::{DataSource, Diagnostics};

use terraform_provider_nios::api::{ClientHandle, WapiClient, WapiConfig};
use terraform_provider_nios::grid::{GridDataSource, GridScheduledBackupModel};
use terraform_provider_nios::member::{MemberDataSource, MemberModel, MemberVipSettingModel};

async fn setup() -> (MockServer, ClientHandle) {
    let server = MockServer::start().await;
    let client = WapiClient::new(&WapiConfig {
        server_url: server.uri(),
        username: "admin".to_owned(),
        password: "infoblox".to_owned(),
        ..Default::default()
    })
    .unwrap();
    let api = ClientHandle::default();
    api.replace(client).await;
    (server, api)
}

#[tokio::test]
async fn member_is_looked_up_by_host_name() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wapi/v2.13.1/member"))
        .and(query_param("host_name", "infoblox.localdomain"))
        .and(query_param("_max_results", "1"))
        .and(query_param("_return_as_object", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{
                "_ref": "member/b25lLnZpcnR1YWxfbm9kZSQw:infoblox.localdomain",
                "host_name": "infoblox.localdomain",
                "platform": "IB-VM",
                "config_addr_type": "IPV4",
                "time_zone": "(UTC) Coordinated Universal Time",
                "master_candidate": false,
                "vip_setting": {
                    "address": "192.168.1.2",
                    "subnet_mask": "255.255.255.0",
                    "gateway": "192.168.1.1",
                },
            }]
        })))
        .mount(&server)
        .await;

    let data_source = MemberDataSource::new(api);
    let mut diags = Diagnostics::default();
    let config = MemberModel {
        host_name: ValueString::Value("infoblox.localdomain".into()),
        ..Default::default()
    };
    let state = data_source
        .read(&mut diags, config, Default::default())
        .await
        .unwrap();

    assert!(diags.errors.is_empty());
    assert_eq!(
        state.object_ref,
        ValueString::Value("member/b25lLnZpcnR1YWxfbm9kZSQw:infoblox.localdomain".into()),
    );
    assert_eq!(state.platform, ValueString::Value("IB-VM".into()));
    assert_eq!(state.master_candidate, Value::Value(false));
    assert_eq!(
        state.vip_setting,
        Value::Value(MemberVipSettingModel {
            address: ValueString::Value("192.168.1.2".into()),
            subnet_mask: ValueString::Value("255.255.255.0".into()),
            gateway: ValueString::Value("192.168.1.1".into()),
        }),
    );
}

#[tokio::test]
async fn missing_member_is_an_error() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wapi/v2.13.1/member"))
        .and(query_param("host_name", "ghost.localdomain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
        .mount(&server)
        .await;

    let data_source = MemberDataSource::new(api);
    let mut diags = Diagnostics::default();
    let config = MemberModel {
        host_name: ValueString::Value("ghost.localdomain".into()),
        ..Default::default()
    };
    let result = data_source
        .read(&mut diags, config, Default::default())
        .await;

    assert_eq!(result, None);
    assert_eq!(diags.errors.len(), 1);
}

#[tokio::test]
async fn grid_is_read_as_a_singleton() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wapi/v2.13.1/grid"))
        .and(query_param("_max_results", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{
                "_ref": "grid/b25lLmNsdXN0ZXIkMA:Infoblox",
                "name": "Infoblox",
                "enable_recycle_bin": true,
                "time_zone": "(UTC) Coordinated Universal Time",
                "scheduled_backup": {
                    "status": "NORMAL",
                    "backup_type": "LOCAL",
                    "keep_local_copy": true,
                    "hour_of_transfer": 3,
                    "minutes_past_hour": 30,
                },
            }]
        })))
        .mount(&server)
        .await;

    let data_source = GridDataSource::new(api);
    let mut diags = Diagnostics::default();
    let state = data_source
        .read(&mut diags, Default::default(), Default::default())
        .await
        .unwrap();

    assert!(diags.errors.is_empty());
    assert_eq!(state.name, ValueString::Value("Infoblox".into()));
    assert_eq!(state.enable_recycle_bin, Value::Value(true));
    assert_eq!(state.csp_api_config, Value::Null);
    assert_eq!(
        state.scheduled_backup,
        Value::Value(GridScheduledBackupModel {
            status: ValueString::Value("NORMAL".into()),
            backup_type: ValueString::Value("LOCAL".into()),
            keep_local_copy: Value::Value(true),
            hour_of_transfer: Value::Value(3),
            minutes_past_hour: Value::Value(30),
        }),
    );
}
