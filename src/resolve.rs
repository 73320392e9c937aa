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

use indexmap::{IndexMap, IndexSet};
use prost_reflect::{FileDescriptor, MessageDescriptor};

use crate::known_types::well_known_import;
use crate::naming::{proto_file_dir, proto_file_stem};

/// Root under which the generated modules of every proto file live, mirroring
/// the proto directory tree. Cross-file import paths are relative walks from
/// the service file's directory joined under this root.
pub static GENERATED_ROOT: &str = ".";

/// Import bookkeeping for one service: which well-known runtime types, which
/// same-file types and which cross-file types (keyed by computed import path)
/// the generated code needs.
///
/// All buckets are index collections so iteration follows first-seen order,
/// which keeps the rendered import blocks reproducible.
#[derive(Debug, Default)]
pub struct ImportAccumulator {
    well_known: IndexSet<String>,
    local: IndexSet<String>,
    by_path: IndexMap<String, IndexSet<String>>,
}

impl ImportAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn well_known_imports(&self) -> Vec<String> {
        self.well_known.iter().cloned().collect()
    }

    pub fn local_imports(&self) -> Vec<String> {
        self.local.iter().cloned().collect()
    }

    pub fn path_imports(&self) -> Vec<(String, Vec<String>)> {
        self.by_path
            .iter()
            .map(|(path, names)| (path.clone(), names.iter().cloned().collect()))
            .collect()
    }
}

/// Resolves a referenced message type against the file owning the service
/// under generation, records the import it requires and returns the name the
/// generated code refers to it by.
///
/// Well-known types map to their runtime import name; types defined in the
/// owning file itself are imported from the sibling protobuf module; anything
/// else is imported from the generated module of its defining file, reached
/// by a relative path from the owning file's directory.
///
/// Resolving the same type twice is idempotent: the buckets are sets.
pub fn resolve_type(
    message: &MessageDescriptor,
    owning_file: &FileDescriptor,
    imports: &mut ImportAccumulator,
) -> String {
    if let Some(import) = well_known_import(message.full_name()) {
        imports.well_known.insert(import.to_string());
        return import.to_string();
    }

    let defining_file = message.parent_file();
    let name = message.name().to_string();

    if defining_file.name() == owning_file.name() {
        imports.local.insert(name.clone());
    } else {
        let path = relative_import_path(owning_file.name(), defining_file.name());
        imports.by_path.entry(path).or_default().insert(name.clone());
    }
    name
}

/// Computes the import path of the generated module for `defining_file`,
/// relative to the directory of `owning_file` and joined under
/// [`GENERATED_ROOT`]. Proto file names are `/`-separated by definition, so
/// this works on path components directly.
fn relative_import_path(owning_file: &str, defining_file: &str) -> String {
    let from: Vec<&str> = components(proto_file_dir(owning_file));
    let to: Vec<&str> = components(proto_file_dir(defining_file));

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![GENERATED_ROOT];
    parts.extend(std::iter::repeat("..").take(from.len() - common));
    parts.extend(&to[common..]);
    parts.push(proto_file_stem(defining_file));
    parts.join("/")
}

fn components(dir: &str) -> Vec<&str> {
    dir.split('/').filter(|part| !part.is_empty()).collect()
}
