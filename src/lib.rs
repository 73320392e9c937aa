// Copyright 2024-2025 Golem Cloud
//
// Licensed under the Apache License, Version 2.0 (the "License");
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

//! protoc plugin generating TanStack Query bindings for gRPC services:
//! each unary RPC becomes a query, infinite query or mutation hook wired to
//! a Connect promise client, with cache invalidation grouped by resource.

pub use error::GeneratorError;
pub use generator::generate;

pub mod error;
pub mod generator;
pub mod known_types;
pub mod model;
pub mod naming;
pub mod pagination;
pub mod render;
pub mod resolve;

#[cfg(test)]
test_r::enable!();
