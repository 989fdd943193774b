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

// Resource lifecycle tests against a mocked WAPI.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tf_provider::value::{Value, ValueString};
use tf_provider::{Diagnostics, Resource};

use terraform_provider_nios::api::{ClientHandle, WapiClient, WapiConfig};
use terraform_provider_nios::gmcgroup::{GmcgroupMemberModel, GmcgroupModel, GmcgroupResource};
use terraform_provider_nios::servicerestart::{
    ServicerestartGroupOrderModel, ServicerestartGroupOrderResource,
};

const GMC_REF: &str = "gmcgroup/b25lLmNsdXN0ZXIkMA:g1";
const ORDER_REF: &str = "grid:servicerestart:group:order/b25l:order";

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

fn not_found_body() -> serde_json::Value {
    json!({
        "Error": "AdmConDataNotFoundError: gmcgroup not found",
        "code": "Client.Ibap.Data.NotFound",
        "text": "gmcgroup not found",
    })
}

#[tokio::test]
async fn create_sends_only_the_set_fields_and_keeps_the_server_answer() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/wapi/v2.13.1/gmcgroup"))
        .and(query_param(
            "_return_fields+",
            "comment,gmc_promotion_policy,members,name,time_zone",
        ))
        .and(query_param("_return_as_object", "1"))
        .and(body_json(json!({
            "name": "g1",
            "gmc_promotion_policy": "SIMULTANEOUS",
            "members": [{"member": "m1"}],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "result": {
                "_ref": GMC_REF,
                "name": "g1",
                "gmc_promotion_policy": "SIMULTANEOUS",
                "time_zone": "(UTC) Coordinated Universal Time",
                "members": [{"member": "m1"}],
            }
        })))
        .mount(&server)
        .await;

    let resource = GmcgroupResource::new(api);
    let mut diags = Diagnostics::default();
    // The plan leaves the computed attributes unknown
    let planned = GmcgroupModel {
        object_ref: ValueString::Unknown,
        name: ValueString::Value("g1".into()),
        gmc_promotion_policy: ValueString::Value("SIMULTANEOUS".into()),
        time_zone: ValueString::Unknown,
        members: Value::Value(vec![Value::Value(GmcgroupMemberModel {
            member: ValueString::Value("m1".into()),
        })]),
        ..Default::default()
    };
    let (state, _private) = resource
        .create(
            &mut diags,
            planned.clone(),
            planned,
            Default::default(),
            Default::default(),
        )
        .await
        .unwrap();

    assert!(diags.errors.is_empty());
    assert_eq!(state.object_ref, ValueString::Value(GMC_REF.into()));
    assert_eq!(state.name, ValueString::Value("g1".into()));
    assert_eq!(
        state.time_zone,
        ValueString::Value("(UTC) Coordinated Universal Time".into()),
    );
}

#[tokio::test]
async fn read_of_a_deleted_object_removes_it_without_an_error() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/wapi/v2.13.1/{GMC_REF}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .mount(&server)
        .await;

    let resource = GmcgroupResource::new(api);
    let mut diags = Diagnostics::default();
    let state = GmcgroupModel {
        object_ref: ValueString::Value(GMC_REF.into()),
        ..Default::default()
    };
    let result = resource
        .read(&mut diags, state, Default::default(), Default::default())
        .await;

    assert_eq!(result, None);
    assert!(diags.errors.is_empty());
}

#[tokio::test]
async fn update_reaches_the_object_through_the_stored_ref() {
    let (server, api) = setup().await;

    Mock::given(method("PUT"))
        .and(path(format!("/wapi/v2.13.1/{GMC_REF}")))
        .and(body_json(json!({
            "name": "g1",
            "comment": "updated",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "_ref": GMC_REF,
                "name": "g1",
                "comment": "updated",
                "time_zone": "(UTC) Coordinated Universal Time",
            }
        })))
        .mount(&server)
        .await;

    let resource = GmcgroupResource::new(api);
    let mut diags = Diagnostics::default();
    let prior = GmcgroupModel {
        object_ref: ValueString::Value(GMC_REF.into()),
        name: ValueString::Value("g1".into()),
        ..Default::default()
    };
    // The planned ref is unknown, the one stored in the state must be used
    let planned = GmcgroupModel {
        object_ref: ValueString::Unknown,
        name: ValueString::Value("g1".into()),
        comment: ValueString::Value("updated".into()),
        ..Default::default()
    };
    let (state, _private) = resource
        .update(
            &mut diags,
            prior,
            planned.clone(),
            planned,
            Default::default(),
            Default::default(),
        )
        .await
        .unwrap();

    assert!(diags.errors.is_empty());
    assert_eq!(state.comment, ValueString::Value("updated".into()));
}

#[tokio::test]
async fn destroy_deletes_the_object() {
    let (server, api) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/wapi/v2.13.1/{GMC_REF}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(GMC_REF)))
        .mount(&server)
        .await;

    let resource = GmcgroupResource::new(api);
    let mut diags = Diagnostics::default();
    let state = GmcgroupModel {
        object_ref: ValueString::Value(GMC_REF.into()),
        ..Default::default()
    };
    let result = resource
        .destroy(&mut diags, state, Default::default(), Default::default())
        .await;

    assert_eq!(result, Some(()));
    assert!(diags.errors.is_empty());
}

#[tokio::test]
async fn destroy_succeeds_when_the_object_is_already_gone() {
    let (server, api) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/wapi/v2.13.1/{GMC_REF}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .mount(&server)
        .await;

    let resource = GmcgroupResource::new(api);
    let mut diags = Diagnostics::default();
    let state = GmcgroupModel {
        object_ref: ValueString::Value(GMC_REF.into()),
        ..Default::default()
    };
    let result = resource
        .destroy(&mut diags, state, Default::default(), Default::default())
        .await;

    assert_eq!(result, Some(()));
    assert!(diags.errors.is_empty());
}

#[tokio::test]
async fn a_wapi_error_surfaces_in_the_diagnostics() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/wapi/v2.13.1/gmcgroup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "Error": "AdmConDataError: None (IBDataConflictError: IB.Data.Conflict)",
            "code": "Client.Ibap.Data.Conflict",
            "text": "The record already exists",
        })))
        .mount(&server)
        .await;

    let resource = GmcgroupResource::new(api);
    let mut diags = Diagnostics::default();
    let planned = GmcgroupModel {
        name: ValueString::Value("g1".into()),
        ..Default::default()
    };
    let result = resource
        .create(
            &mut diags,
            planned.clone(),
            planned,
            Default::default(),
            Default::default(),
        )
        .await;

    assert_eq!(result, None);
    assert_eq!(diags.errors.len(), 1);
}

#[tokio::test]
async fn operations_fail_cleanly_before_the_provider_is_configured() {
    let resource = GmcgroupResource::new(ClientHandle::default());
    let mut diags = Diagnostics::default();
    let state = GmcgroupModel {
        object_ref: ValueString::Value(GMC_REF.into()),
        ..Default::default()
    };
    let result = resource
        .read(&mut diags, state, Default::default(), Default::default())
        .await;

    assert_eq!(result, None);
    assert_eq!(diags.errors.len(), 1);
}

#[tokio::test]
async fn restart_order_update_reaches_the_colon_separated_path() {
    let (server, api) = setup().await;

    Mock::given(method("PUT"))
        .and(path(format!("/wapi/v2.13.1/{ORDER_REF}")))
        .and(body_json(json!({
            "groups": [
                "grid:servicerestart:group/one:dns",
                "grid:servicerestart:group/two:dhcp",
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "_ref": ORDER_REF,
                "groups": [
                    "grid:servicerestart:group/one:dns",
                    "grid:servicerestart:group/two:dhcp",
                ],
            }
        })))
        .mount(&server)
        .await;

    let resource = ServicerestartGroupOrderResource::new(api);
    let mut diags = Diagnostics::default();
    let prior = ServicerestartGroupOrderModel {
        object_ref: ValueString::Value(ORDER_REF.into()),
        groups: Value::Value(vec![ValueString::Value(
            "grid:servicerestart:group/one:dns".into(),
        )]),
    };
    let planned = ServicerestartGroupOrderModel {
        object_ref: ValueString::Unknown,
        groups: Value::Value(vec![
            ValueString::Value("grid:servicerestart:group/one:dns".into()),
            ValueString::Value("grid:servicerestart:group/two:dhcp".into()),
        ]),
    };
    let (state, _private) = resource
        .update(
            &mut diags,
            prior,
            planned.clone(),
            planned,
            Default::default(),
            Default::default(),
        )
        .await
        .unwrap();

    assert!(diags.errors.is_empty());
    assert_eq!(state.object_ref, ValueString::Value(ORDER_REF.into()));
}

#[tokio::test]
async fn restart_order_destroy_never_reaches_the_server() {
    let (server, api) = setup().await;

    let resource = ServicerestartGroupOrderResource::new(api);
    let mut diags = Diagnostics::default();
    let state = ServicerestartGroupOrderModel {
        object_ref: ValueString::Value(ORDER_REF.into()),
        groups: Value::Value(vec![ValueString::Value(
            "grid:servicerestart:group/one:dns".into(),
        )]),
    };
    let result = resource
        .destroy(&mut diags, state, Default::default(), Default::default())
        .await;

    assert_eq!(result, Some(()));
    assert!(diags.errors.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}
