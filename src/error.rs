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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to build descriptor pool from the code generator request: {0}")]
    InvalidDescriptorSet(#[from] prost_reflect::DescriptorError),

    #[error("file {file} was requested for generation but is not part of the descriptor set")]
    UnknownFile { file: String },

    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}
