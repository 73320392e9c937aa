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

use minijinja::Environment;
use serde::Serialize;

pub static CLIENT_TEMPLATE: &str = "client";
pub static API_TEMPLATE: &str = "api";
pub static METHOD_TEMPLATE: &str = "method";
pub static INDEX_TEMPLATE: &str = "index";

/// Template sources compiled into the binary. The `api` template reaches the
/// `method` sub-template with `{% include "method" %}`, so both must live in
/// the same environment.
static TEMPLATES: &[(&str, &str)] = &[
    ("client", include_str!("../templates/client.ts.jinja")),
    ("api", include_str!("../templates/api.ts.jinja")),
    ("method", include_str!("../templates/method.ts.jinja")),
    ("index", include_str!("../templates/index.ts.jinja")),
];

/// Builds a fresh environment with all named templates registered.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

pub fn render<C: Serialize>(
    env: &Environment,
    template: &str,
    ctx: &C,
) -> Result<String, minijinja::Error> {
    env.get_template(template)?.render(ctx)
}
