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

use minijinja::context;
use prost_reflect::{DescriptorPool, ServiceDescriptor};
use prost_types::compiler::{code_generator_response, CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::FileDescriptorSet;
use tracing::{debug, info};

use crate::error::GeneratorError;
use crate::model::ServiceBindings;
use crate::naming::proto_file_dir;
use crate::render;

/// Generates the TanStack Query bindings for the first service found in the
/// requested files.
///
/// A request without any service succeeds with an empty file list; a request
/// naming a file that is not part of the descriptor set is a caller contract
/// violation and fails. All four outputs are rendered before the response is
/// assembled, so a template failure emits nothing.
pub fn generate(request: CodeGeneratorRequest) -> Result<CodeGeneratorResponse, GeneratorError> {
    let pool = DescriptorPool::from_file_descriptor_set(FileDescriptorSet {
        file: request.proto_file.clone(),
    })?;

    let mut response = CodeGeneratorResponse {
        supported_features: Some(code_generator_response::Feature::Proto3Optional as u64),
        ..Default::default()
    };

    let Some(service) = first_service(&pool, &request)? else {
        debug!("no service in the requested files, emitting no output");
        return Ok(response);
    };

    info!(
        service = service.full_name(),
        file = service.parent_file().name(),
        "generating react-query bindings"
    );

    let bindings = ServiceBindings::from_service(&service);
    let env = render::environment()?;
    let dir = proto_file_dir(&bindings.source_file);

    let outputs = [
        (
            output_path(dir, "client.ts"),
            render::render(&env, render::CLIENT_TEMPLATE, &bindings)?,
        ),
        (
            output_path(dir, "api.ts"),
            render::render(&env, render::API_TEMPLATE, &bindings)?,
        ),
        (
            output_path(dir, "index.ts"),
            render::render(&env, render::INDEX_TEMPLATE, &bindings)?,
        ),
        (
            "index.ts".to_string(),
            render::render(&env, render::INDEX_TEMPLATE, &context! {})?,
        ),
    ];

    for (name, content) in outputs {
        debug!(file = %name, "rendered output");
        response.file.push(code_generator_response::File {
            name: Some(name),
            content: Some(content),
            ..Default::default()
        });
    }

    Ok(response)
}

/// The first service across the files requested for generation, in request
/// order. Files are resolved through the pool built from the full descriptor
/// set, so dependencies that are not themselves generated stay reachable.
fn first_service(
    pool: &DescriptorPool,
    request: &CodeGeneratorRequest,
) -> Result<Option<ServiceDescriptor>, GeneratorError> {
    for file_name in &request.file_to_generate {
        let file = pool
            .get_file_by_name(file_name)
            .ok_or_else(|| GeneratorError::UnknownFile {
                file: file_name.clone(),
            })?;
        if let Some(service) = file.services().next() {
            return Ok(Some(service));
        };
    }
    Ok(None)
}

fn output_path(dir: &str, file: &str) -> String {
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
