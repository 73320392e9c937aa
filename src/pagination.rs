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

use prost_reflect::{Kind, MessageDescriptor};
use std::collections::HashSet;

/// Field names that mark a request message as page-driven. Matched against
/// the lower-cased JSON name of the field, so `page_size` matches via
/// `pageSize`.
pub static PAGINATION_FIELDS: &[&str] = &["page", "offset", "cursor", "limit", "pagesize", "pagenumber"];

/// Returns true if the message, or any message reachable through its fields,
/// carries a pagination field.
///
/// Message graphs may be cyclic; a type already seen on the current path is
/// not inspected again. A cycle back into the entry message can therefore
/// hide a pagination field behind it, which is accepted.
pub fn is_paginated(message: &MessageDescriptor) -> bool {
    let mut visited = HashSet::new();
    is_paginated_inner(message, &mut visited)
}

fn is_paginated_inner(message: &MessageDescriptor, visited: &mut HashSet<String>) -> bool {
    if !visited.insert(message.full_name().to_string()) {
        return false;
    }
    for field in message.fields() {
        let name = field.json_name().to_lowercase();
        if PAGINATION_FIELDS.contains(&name.as_str()) {
            return true;
        }
        if let Kind::Message(inner) = field.kind() {
            if is_paginated_inner(&inner, visited) {
                return true;
            }
        }
    }
    false
}
