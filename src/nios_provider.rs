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

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use tf_provider::schema::{
    Attribute, AttributeConstraint, AttributeType, Block, Description, Schema,
};
use tf_provider::value::{Value, ValueEmpty, ValueNumber, ValueString};
use tf_provider::{map, AttributePath, Diagnostics, Provider};

use crate::api::{ClientHandle, WapiClient, WapiConfig};
use crate::captiveportal::CaptiveportalResource;
use crate::convert::{expand_bool, expand_i64, expand_string};
use crate::distributionschedule::DistributionscheduleResource;
use crate::filedistribution::MemberFiledistributionResource;
use crate::gmcgroup::GmcgroupResource;
use crate::grid::{GridDataSource, GridResource};
use crate::member::{MemberDataSource, MemberResource};
use crate::servicerestart::ServicerestartGroupOrderResource;
use crate::upgradegroup::UpgradegroupResource;

/// Connection settings of the `nios` provider block.
///
/// Every attribute is optional in the block; the server URL and the
/// credentials fall back to the `NIOS_HOST_URL`, `NIOS_USERNAME` and
/// `NIOS_PASSWORD` environment variables.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiosProviderConfig<'a> {
    #[serde(borrow = "'a")]
    pub server_url: ValueString<'a>,
    pub username: ValueString<'a>,
    pub password: ValueString<'a>,
    pub wapi_version: ValueString<'a>,
    pub ssl_verify: Value<bool>,
    pub timeout_seconds: ValueNumber,
}

#[derive(Debug, Default, Clone)]
pub struct NiosProvider {
    api: ClientHandle,
}

fn required_setting(
    diags: &mut Diagnostics,
    value: &ValueString<'_>,
    name: &'static str,
    env_var: &str,
) -> Option<String> {
    let setting = expand_string(value).or_else(|| std::env::var(env_var).ok());
    if setting.is_none() {
        diags.error(
            format!("Missing {name}"),
            format!(
                "Set the {name} attribute of the provider block or the {env_var} environment variable"
            ),
            AttributePath::new(name),
        );
    }
    setting
}

#[async_trait]
impl Provider for NiosProvider {
    type Config<'a> = NiosProviderConfig<'a>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut tf_provider::Diagnostics) -> Option<tf_provider::schema::Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                description: Description::plain("Infoblox NIOS Grid"),
                attributes: map! {
                    "server_url" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "URL of the Grid Master, e.g. `https://gm.example.com`. Defaults to `NIOS_HOST_URL`.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "username" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "User name for the WAPI. Defaults to `NIOS_USERNAME`.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "password" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "Password for the WAPI. Defaults to `NIOS_PASSWORD`.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    },
                    "wapi_version" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "WAPI version spoken to the Grid Master.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "ssl_verify" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain(
                            "Whether the TLS certificate of the Grid Master is verified.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "timeout_seconds" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain(
                            "Timeout of a single WAPI call, in seconds.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(
        &self,
        diags: &mut tf_provider::Diagnostics,
        config: Self::Config<'a>,
    ) -> Option<()> {
        if let Value::Value(server_url) = &config.server_url {
            if let Err(err) = Url::parse(server_url) {
                diags.error(
                    "Invalid server URL",
                    format!("Unable to parse {server_url:?}: {err}"),
                    AttributePath::new("server_url"),
                );
            }
        }
        if let Value::Value(seconds) = &config.timeout_seconds {
            if *seconds <= 0 {
                diags.error(
                    "Invalid timeout",
                    format!("The timeout must be at least one second, got {seconds}"),
                    AttributePath::new("timeout_seconds"),
                );
            }
        }

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn configure<'a>(
        &self,
        diags: &mut tf_provider::Diagnostics,
        _terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let server_url = required_setting(diags, &config.server_url, "server_url", "NIOS_HOST_URL");
        let username = required_setting(diags, &config.username, "username", "NIOS_USERNAME");
        let password = required_setting(diags, &config.password, "password", "NIOS_PASSWORD");
        let (Some(server_url), Some(username), Some(password)) = (server_url, username, password)
        else {
            return None;
        };

        let defaults = WapiConfig::default();
        let wapi_config = WapiConfig {
            server_url,
            username,
            password,
            wapi_version: expand_string(&config.wapi_version).unwrap_or(defaults.wapi_version),
            ssl_verify: expand_bool(&config.ssl_verify).unwrap_or(defaults.ssl_verify),
            timeout: expand_i64(&config.timeout_seconds)
                .map_or(defaults.timeout, |seconds| {
                    Duration::from_secs(seconds.max(0) as u64)
                }),
        };
        match WapiClient::new(&wapi_config) {
            Ok(client) => {
                self.api.replace(client).await;
                info!(
                    server_url = %wapi_config.server_url,
                    wapi_version = %wapi_config.wapi_version,
                    "WAPI client configured"
                );
                Some(())
            }
            Err(err) => {
                diags.error(
                    "Client error",
                    format!("Unable to create the WAPI client, got error: {err}"),
                    AttributePath::default(),
                );
                None
            }
        }
    }

    fn get_resources(
        &self,
        _diags: &mut tf_provider::Diagnostics,
    ) -> Option<std::collections::HashMap<String, Box<dyn tf_provider::DynamicResource>>> {
        Some(map! {
            "grid" => GridResource::new(self.api.clone()),
            "member" => MemberResource::new(self.api.clone()),
            "member_filedistribution" => MemberFiledistributionResource::new(self.api.clone()),
            "gmcgroup" => GmcgroupResource::new(self.api.clone()),
            "upgradegroup" => UpgradegroupResource::new(self.api.clone()),
            "distributionschedule" => DistributionscheduleResource::new(self.api.clone()),
            "grid_servicerestart_group_order" => ServicerestartGroupOrderResource::new(self.api.clone()),
            "captiveportal" => CaptiveportalResource::new(self.api.clone()),
        })
    }

    fn get_data_sources(
        &self,
        _diags: &mut tf_provider::Diagnostics,
    ) -> Option<std::collections::HashMap<String, Box<dyn tf_provider::DynamicDataSource>>> {
        Some(map! {
            "grid" => GridDataSource::new(self.api.clone()),
            "member" => MemberDataSource::new(self.api.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn validate_rejects_a_bad_server_url() {
        let provider = NiosProvider::default();
        let mut diags = Diagnostics::default();
        let config = NiosProviderConfig {
            server_url: ValueString::Value("not a url".into()),
            ..Default::default()
        };
        assert_eq!(provider.validate(&mut diags, config).await, None);
        assert_eq!(diags.errors.len(), 1);
    }

    #[tokio::test]
    async fn validate_rejects_a_non_positive_timeout() {
        let provider = NiosProvider::default();
        let mut diags = Diagnostics::default();
        let config = NiosProviderConfig {
            timeout_seconds: ValueNumber::Value(0),
            ..Default::default()
        };
        assert_eq!(provider.validate(&mut diags, config).await, None);
        assert_eq!(diags.errors.len(), 1);
    }

    #[tokio::test]
    async fn configure_reports_every_missing_setting() {
        let provider = NiosProvider::default();
        let mut diags = Diagnostics::default();
        let config = NiosProviderConfig {
            server_url: ValueString::Value("https://gm.example.com".into()),
            ..Default::default()
        };
        // The fallback variables must not be set here
        std::env::remove_var("NIOS_USERNAME");
        std::env::remove_var("NIOS_PASSWORD");
        assert_eq!(
            provider
                .configure(&mut diags, "1.6.0".to_owned(), config)
                .await,
            None,
        );
        assert_eq!(diags.errors.len(), 2);
    }

    #[tokio::test]
    async fn configure_builds_the_client() {
        let provider = NiosProvider::default();
        let mut diags = Diagnostics::default();
        let config = NiosProviderConfig {
            server_url: ValueString::Value("https://gm.example.com".into()),
            username: ValueString::Value("admin".into()),
            password: ValueString::Value("infoblox".into()),
            ssl_verify: Value::Value(false),
            timeout_seconds: ValueNumber::Value(5),
            ..Default::default()
        };
        assert_eq!(
            provider
                .configure(&mut diags, "1.6.0".to_owned(), config)
                .await,
            Some(()),
        );
        assert!(diags.errors.is_empty());
        let mut diags = Diagnostics::default();
        assert!(provider.api.get(&mut diags).await.is_some());
    }
}
