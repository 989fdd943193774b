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

use crate::api::dto::Captiveportal;
use crate::api::ClientHandle;
use crate::utils::{use_state_for_unknown, Expand, Flatten, WithSchema, WithValidate};

use super::state::{CaptiveportalModel, READABLE_ATTRIBUTES};

/// Manages a `captiveportal` object.
#[derive(Debug, Default)]
pub struct CaptiveportalResource {
    api: ClientHandle,
}

impl CaptiveportalResource {
    pub fn new(api: ClientHandle) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Resource for CaptiveportalResource {
    type State<'a> = CaptiveportalModel<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(CaptiveportalModel::schema())
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
                "The state does not contain the reference of the captiveportal object",
                AttributePath::default(),
            );
            return None;
        };
        match api
            .read::<Captiveportal>(object_ref)
            .return_fields_plus(READABLE_ATTRIBUTES)
            .return_as_object()
            .execute()
            .await
        {
            Ok(dto) => Some((CaptiveportalModel::flatten(&dto), private_state)),
            Err(err) if err.is_not_found() => None,
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to read captiveportal, got error: {err}"),
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
        if state.encryption.is_null() {
            state.encryption = ValueString::Unknown;
        }
        if state.network_view.is_null() {
            state.network_view = ValueString::Unknown;
        }
        if state.port.is_null() {
            state.port = Value::Unknown;
        }
        for flag in [
            &mut state.enable,
            &mut state.syslog_auth_success,
            &mut state.syslog_auth_failure,
        ] {
            if flag.is_null() {
                *flag = Value::Unknown;
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
        state.enable =
            use_state_for_unknown(&config_state.enable, state.enable, &prior_state.enable);
        state.encryption = use_state_for_unknown(
            &config_state.encryption,
            state.encryption,
            &prior_state.encryption,
        );
        state.network_view = use_state_for_unknown(
            &config_state.network_view,
            state.network_view,
            &prior_state.network_view,
        );
        state.port =
            use_state_for_unknown(&config_state.port, state.port, &prior_state.port);
        state.syslog_auth_success = use_state_for_unknown(
            &config_state.syslog_auth_success,
            state.syslog_auth_success,
            &prior_state.syslog_auth_success,
        );
        state.syslog_auth_failure = use_state_for_unknown(
            &config_state.syslog_auth_failure,
            state.syslog_auth_failure,
            &prior_state.syslog_auth_failure,
        );
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
            Ok(created) => Some((CaptiveportalModel::flatten(&created), private_state)),
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to create captiveportal, got error: {err}"),
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
                    "The state does not contain the reference of the captiveportal object",
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
            Ok(updated) => Some((CaptiveportalModel::flatten(&updated), private_state)),
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to update captiveportal, got error: {err}"),
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
                    format!("Unable to delete captiveportal, got error: {err}"),
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
        let state = CaptiveportalModel {
            object_ref: ValueString::Value(id.into()),
            ..Default::default()
        };
        Some((state, Default::default()))
    }
}
