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

use tf_provider::value::{Value, ValueEmpty, ValueList, ValueString};
use tf_provider::schema::Schema;
use tf_provider::{AttributePath, Diagnostics, Resource};

use crate::api::dto::Distributionschedule;
use crate::api::ClientHandle;
use crate::utils::{use_state_for_unknown, Expand, Flatten, WithSchema, WithValidate};

use super::state::{DistributionscheduleModel, UpgradegroupScheduleModel, READABLE_ATTRIBUTES};

/// Manages the `distributionschedule` object of the Grid.
#[derive(Debug, Default)]
pub struct DistributionscheduleResource {
    api: ClientHandle,
}

impl DistributionscheduleResource {
    pub fn new(api: ClientHandle) -> Self {
        Self { api }
    }
}

fn slot_time_zone<'s, 'a>(
    groups: &'s ValueList<Value<UpgradegroupScheduleModel<'a>>>,
    index: usize,
) -> &'s ValueString<'a> {
    const NULL: &ValueString<'static> = &Value::Null;
    match groups {
        Value::Value(groups) => match groups.get(index) {
            Some(Value::Value(group)) => &group.time_zone,
            _ => NULL,
        },
        _ => NULL,
    }
}

#[async_trait]
impl Resource for DistributionscheduleResource {
    type State<'a> = DistributionscheduleModel<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(DistributionscheduleModel::schema())
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
                "The state does not contain the reference of the distributionschedule object",
                AttributePath::default(),
            );
            return None;
        };
        match api
            .read::<Distributionschedule>(object_ref)
            .return_fields_plus(READABLE_ATTRIBUTES)
            .return_as_object()
            .execute()
            .await
        {
            Ok(dto) => Some((DistributionscheduleModel::flatten(&dto), private_state)),
            Err(err) if err.is_not_found() => None,
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to read distributionschedule, got error: {err}"),
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
        state.time_zone = ValueString::Unknown;
        if state.active.is_null() {
            state.active = Value::Unknown;
        }
        if state.start_time.is_null() {
            state.start_time = ValueString::Unknown;
        }
        if let Value::Value(groups) = &mut state.upgrade_groups {
            for group in groups.iter_mut() {
                let Value::Value(group) = group else {
                    continue;
                };
                if group.time_zone.is_null() {
                    group.time_zone = ValueString::Unknown;
                }
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
        state.time_zone = use_state_for_unknown(
            &config_state.time_zone,
            state.time_zone,
            &prior_state.time_zone,
        );
        state.active =
            use_state_for_unknown(&config_state.active, state.active, &prior_state.active);
        state.start_time = use_state_for_unknown(
            &config_state.start_time,
            state.start_time,
            &prior_state.start_time,
        );
        if let Value::Value(groups) = &mut state.upgrade_groups {
            for (index, group) in groups.iter_mut().enumerate() {
                let Value::Value(group) = group else {
                    continue;
                };
                group.time_zone = use_state_for_unknown(
                    slot_time_zone(&config_state.upgrade_groups, index),
                    group.time_zone.clone(),
                    slot_time_zone(&prior_state.upgrade_groups, index),
                );
            }
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
            Ok(created) => Some((
                DistributionscheduleModel::flatten(&created),
                private_state,
            )),
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to create distributionschedule, got error: {err}"),
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
                    "The state does not contain the reference of the distributionschedule object",
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
            Ok(updated) => Some((
                DistributionscheduleModel::flatten(&updated),
                private_state,
            )),
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to update distributionschedule, got error: {err}"),
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
                    format!("Unable to delete distributionschedule, got error: {err}"),
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
        let state = DistributionscheduleModel {
            object_ref: ValueString::Value(id.into()),
            ..Default::default()
        };
        Some((state, Default::default()))
    }
}
