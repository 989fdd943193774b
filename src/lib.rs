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

//! Terraform provider for Infoblox NIOS Grid management.
//!
//! Each resource module pairs a Terraform model with the WAPI object it
//! manages: the model expands into the JSON body sent to the Grid Master and
//! the response flattens back into Terraform state.

pub mod api;
pub mod captiveportal;
pub mod distributionschedule;
pub mod filedistribution;
pub mod gmcgroup;
pub mod grid;
pub mod member;
pub mod nios_provider;
pub mod servicerestart;
pub mod upgradegroup;

mod convert;
mod utils;

pub use nios_provider::NiosProvider;
