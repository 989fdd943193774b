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

use tf_provider::value::{Value, ValueEmpty, ValueString};
use tf_provider::schema::Schema;
use tf_provider::{AttributePath, Diagnostics, Resource};

use crate::api::dto::Grid;
use crate::api::ClientHandle;
use crate::utils::{use_state_for_unknown, Expand, Flatten, WithSchema, WithValidate};

use super::state::{GridCspApiConfigModel, GridModel, GridScheduledBackupModel, READABLE_ATTRIBUTES};

/// Manages the `grid` singleton object.
#[derive(Debug, Default)]
pub struct GridResource {
    api: ClientHandle,
}

impl GridResource {
    pub fn new(api: ClientHandle) -> Self {
        Self { api }
    }
}

const NULL_STRING: &ValueString<'static> = &Value::Null;

fn csp_url<'s, 'a>(value: &'s Value<GridCspApiConfigModel<'a>>) -> &'s ValueString<'a> {
    match value {
        Value::Value(csp) => &csp.url,
        _ => NULL_STRING,
    }
}

fn backup_status<'s, 'a>(value: &'s Value<GridScheduledBackupModel<'a>>) -> &'s ValueString<'a> {
    match value {
        Value::Value(backup) => &backup.status,
        _ => NULL_STRING,
    }
}

#[async_trait]
impl Resource for GridResource {
    type State<'a> = GridModel<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(GridModel::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        config.validate(diags);

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let api = self.api.get(diags).await?;
        let Value::Value(object_ref) = &state.object_ref else {
            diags.error(
                "Missing object reference",
                "The state does not contain the reference of the grid object",
                AttributePath::default(),
            );
            return None;
        };
        match api
            .read::<Grid>(object_ref)
            .return_fields_plus(READABLE_ATTRIBUTES)
            .return_as_object()
            .execute()
            .await
        {
            Ok(dto) => Some((GridModel::flatten(&dto), private_state)),
            Err(err) if err.is_not_found() => None,
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

    async fn plan_create<'a>(
        &self,
        _diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = proposed_state;
        state.object_ref = ValueString::Unknown;
        if state.name.is_null() {
            state.name = ValueString::Unknown;
        }
        if state.audit_log_format.is_null() {
            state.audit_log_format = ValueString::Unknown;
        }
        if state.time_zone.is_null() {
            state.time_zone = ValueString::Unknown;
        }
        for flag in [
            &mut state.allow_recursive_deletion,
            &mut state.audit_to_syslog_enable,
            &mut state.enable_gui_api_for_lan_vip,
            &mut state.enable_recycle_bin,
        ] {
            if flag.is_null() {
                *flag = Value::Unknown;
            }
        }
        // Nested server-owned fields become known once the server answers
        if let Value::Value(csp) = &mut state.csp_api_config {
            if csp.url.is_null() {
                csp.url = ValueString::Unknown;
            }
        }
        if let Value::Value(backup) = &mut state.scheduled_backup {
            if backup.status.is_null() {
                backup.status = ValueString::Unknown;
            }
        }
        Some((state, Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        _diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(
        Self::State<'a>,
        Self::PrivateState<'a>,
        Vec<AttributePath>,
    )> {
        let mut state = proposed_state;
        state.object_ref = use_state_for_unknown(
            &config_state.object_ref,
            state.object_ref,
            &prior_state.object_ref,
        );
        state.name =
            use_state_for_unknown(&config_state.name, state.name, &prior_state.name);
        state.allow_recursive_deletion = use_state_for_unknown(
            &config_state.allow_recursive_deletion,
            state.allow_recursive_deletion,
            &prior_state.allow_recursive_deletion,
        );
        state.audit_log_format = use_state_for_unknown(
            &config_state.audit_log_format,
            state.audit_log_format,
            &prior_state.audit_log_format,
        );
        state.audit_to_syslog_enable = use_state_for_unknown(
            &config_state.audit_to_syslog_enable,
            state.audit_to_syslog_enable,
            &prior_state.audit_to_syslog_enable,
        );
        state.enable_gui_api_for_lan_vip = use_state_for_unknown(
            &config_state.enable_gui_api_for_lan_vip,
            state.enable_gui_api_for_lan_vip,
            &prior_state.enable_gui_api_for_lan_vip,
        );
        state.enable_recycle_bin = use_state_for_unknown(
            &config_state.enable_recycle_bin,
            state.enable_recycle_bin,
            &prior_state.enable_recycle_bin,
        );
        state.time_zone = use_state_for_unknown(
            &config_state.time_zone,
            state.time_zone,
            &prior_state.time_zone,
        );
        if let Value::Value(csp) = &mut state.csp_api_config {
            csp.url = use_state_for_unknown(
                csp_url(&config_state.csp_api_config),
                csp.url.clone(),
                csp_url(&prior_state.csp_api_config),
            );
        }
        if let Value::Value(backup) = &mut state.scheduled_backup {
            backup.status = use_state_for_unknown(
                backup_status(&config_state.scheduled_backup),
                backup.status.clone(),
                backup_status(&prior_state.scheduled_backup),
            );
        }
        Some((state, prior_private_state, vec![]))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        Some(prior_private_state)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let api = self.api.get(diags).await?;
        let dto = planned_state.expand(diags)?;
        if !diags.errors.is_empty() {
            return None;
        }
        match api
            .create(&dto)
            .return_fields_plus(READABLE_ATTRIBUTES)
            .return_as_object()
            .execute()
            .await
        {
            Ok(created) => Some((GridModel::flatten(&created), private_state)),
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to create grid, got error: {err}"),
                    AttributePath::default(),
                );
                None
            }
        }
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let api = self.api.get(diags).await?;
        let object_ref = match (&planned_state.object_ref, &prior_state.object_ref) {
            (Value::Value(object_ref), _) | (_, Value::Value(object_ref)) => object_ref.clone(),
            _ => {
                diags.error(
                    "Missing object reference",
                    "The state does not contain the reference of the grid object",
                    AttributePath::default(),
                );
                return None;
            }
        };
        let dto = planned_state.expand(diags)?;
        if !diags.errors.is_empty() {
            return None;
        }
        match api
            .update(object_ref.as_ref(), &dto)
            .return_fields_plus(READABLE_ATTRIBUTES)
            .return_as_object()
            .execute()
            .await
        {
            Ok(updated) => Some((GridModel::flatten(&updated), private_state)),
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to update grid, got error: {err}"),
                    AttributePath::default(),
                );
                None
            }
        }
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        let api = self.api.get(diags).await?;
        let Value::Value(object_ref) = &state.object_ref else {
            return Some(());
        };
        match api.delete(object_ref).execute().await {
            Ok(_) => Some(()),
            Err(err) if err.is_not_found() => Some(()),
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to delete grid, got error: {err}"),
                    AttributePath::default(),
                );
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        _diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let state = GridModel {
            object_ref: ValueString::Value(id.into()),
            ..Default::default()
        };
        Some((state, Default::default()))
    }
}
