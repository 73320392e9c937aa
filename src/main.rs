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

use prost::Message;
use prost_types::compiler::CodeGeneratorRequest;
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

/// protoc plugin entry point: a `CodeGeneratorRequest` arrives on stdin, the
/// `CodeGeneratorResponse` leaves on stdout. Diagnostics go to stderr, since
/// protoc owns stdout.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;
    let request = CodeGeneratorRequest::decode(input.as_slice())?;

    let response = protoc_gen_react_query::generate(request)?;

    std::io::stdout().write_all(&response.encode_to_vec())?;
    Ok(())
}
