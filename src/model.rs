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

use prost_reflect::{FileDescriptor, MethodDescriptor, ServiceDescriptor};
use serde::Serialize;

use crate::naming::{
    derive_resource, is_mutation_name, lower_first, proto_file_stem, HOOK_PREFIX,
    PB_MODULE_SUFFIX, QUERY_MODULE_SUFFIX, QUERY_NAME_SUFFIX,
};
use crate::pagination::is_paginated;
use crate::resolve::{resolve_type, ImportAccumulator};

/// How one RPC is exposed to the generated client: as a plain query, an
/// infinite query or a mutation that invalidates its resource's queries.
#[derive(Debug, Clone, Serialize)]
pub struct MethodBinding {
    pub function_name: String,
    pub hook_name: String,
    pub query_name: String,
    pub resource: String,
    pub input_type: String,
    pub output_type: String,
    pub is_query: bool,
    pub is_paginated: bool,
}

impl MethodBinding {
    /// Classifies one method, resolving its input and output types through
    /// the accumulator shared across the whole service.
    ///
    /// Streaming methods still get a binding (names and types resolve as
    /// usual) but are never queries or paginated; the templates render them
    /// through the mutation branch.
    pub fn classify(
        method: &MethodDescriptor,
        owning_file: &FileDescriptor,
        imports: &mut ImportAccumulator,
    ) -> MethodBinding {
        let name = method.name();
        let function_name = lower_first(name);

        let is_unary = !method.is_client_streaming() && !method.is_server_streaming();
        let is_mutation = is_mutation_name(name);
        let is_query = is_unary && !is_mutation;
        let is_paginated = is_query && is_paginated(&method.input());

        MethodBinding {
            hook_name: format!("{HOOK_PREFIX}{name}"),
            query_name: format!("{function_name}{QUERY_NAME_SUFFIX}"),
            resource: derive_resource(name),
            input_type: resolve_type(&method.input(), owning_file, imports),
            output_type: resolve_type(&method.output(), owning_file, imports),
            function_name,
            is_query,
            is_paginated,
        }
    }
}

/// One cross-file import group: the type names needed from one computed
/// relative import path.
#[derive(Debug, Clone, Serialize)]
pub struct PathImport {
    pub path: String,
    pub names: Vec<String>,
}

/// The full view model for one service, handed to every template.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceBindings {
    pub service_name: String,
    pub source_file: String,
    pub pb_module: String,
    pub query_module: String,
    pub methods: Vec<MethodBinding>,
    pub wkt_imports: Vec<String>,
    pub local_imports: Vec<String>,
    pub path_imports: Vec<PathImport>,
}

impl ServiceBindings {
    /// Builds the view model for one service: classifies every method in
    /// declaration order, then flattens the import buckets into the stable
    /// sequences the templates iterate.
    pub fn from_service(service: &ServiceDescriptor) -> ServiceBindings {
        let owning_file = service.parent_file();
        let stem = proto_file_stem(owning_file.name()).to_string();

        let mut imports = ImportAccumulator::new();
        let methods: Vec<MethodBinding> = service
            .methods()
            .map(|method| MethodBinding::classify(&method, &owning_file, &mut imports))
            .collect();

        ServiceBindings {
            service_name: service.name().to_string(),
            source_file: owning_file.name().to_string(),
            pb_module: format!("{stem}{PB_MODULE_SUFFIX}"),
            query_module: format!("{stem}{QUERY_MODULE_SUFFIX}"),
            methods,
            wkt_imports: imports.well_known_imports(),
            local_imports: imports.local_imports(),
            path_imports: imports
                .path_imports()
                .into_iter()
                .map(|(path, names)| PathImport { path, names })
                .collect(),
        }
    }
}
