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

pub static HOOK_PREFIX: &str = "use";
pub static QUERY_NAME_SUFFIX: &str = "Query";

pub static PB_MODULE_SUFFIX: &str = "_pb";
pub static QUERY_MODULE_SUFFIX: &str = "_query";

pub static PROTO_FILE_EXTENSION: &str = ".proto";

/// Method name prefixes treated as cache-mutating verbs. Methods starting
/// with one of these become mutations and invalidate their resource's queries.
pub static MUTATION_VERBS: &[&str] = &[
    "Create", "Update", "Delete", "Remove", "Patch", "Post", "Set", "Add",
];

pub static LIST_ALL_PREFIX: &str = "ListAll";

pub fn is_mutation_name(method_name: &str) -> bool {
    MUTATION_VERBS
        .iter()
        .any(|verb| method_name.starts_with(verb))
}

/// Derives the cache-invalidation grouping key for a method by stripping a
/// recognized mutating verb from its name.
///
/// The verb list is scanned in full without short-circuiting and a match
/// removes every occurrence of the verb substring, not just the leading one;
/// `ListAll` is applied after the verb scan and overrides it. Changing any
/// of this changes previously generated cache keys, so the tests pin the
/// behavior exactly.
pub fn derive_resource(method_name: &str) -> String {
    let mut resource = method_name.to_string();
    for verb in MUTATION_VERBS {
        if method_name.starts_with(verb) {
            resource = method_name.replace(verb, "");
        }
    }
    if method_name.starts_with(LIST_ALL_PREFIX) {
        resource = method_name.replace(LIST_ALL_PREFIX, "");
    }
    resource
}

/// Lowers only the first character, keeping the rest of the name untouched
/// (`GetHTTPStatus` stays `getHTTPStatus`).
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

pub fn proto_file_stem(file_name: &str) -> &str {
    let base = file_name
        .rsplit_once('/')
        .map(|(_, base)| base)
        .unwrap_or(file_name);
    base.strip_suffix(PROTO_FILE_EXTENSION).unwrap_or(base)
}

pub fn proto_file_dir(file_name: &str) -> &str {
    file_name
        .rsplit_once('/')
        .map(|(dir, _)| dir)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use test_r::test;

    use super::*;

    #[test]
    fn strips_mutating_verb_prefixes() {
        assert_eq!(derive_resource("CreateTicket"), "Ticket");
        assert_eq!(derive_resource("UpdateTicketStatus"), "TicketStatus");
        assert_eq!(derive_resource("DeleteTicket"), "Ticket");
        assert_eq!(derive_resource("AddComment"), "Comment");
    }

    #[test]
    fn keeps_unrecognized_names_unchanged() {
        assert_eq!(derive_resource("GetTicket"), "GetTicket");
        assert_eq!(derive_resource("ListTickets"), "ListTickets");
        assert_eq!(derive_resource(""), "");
    }

    #[test]
    fn list_all_rule_applies_after_the_verb_scan() {
        assert_eq!(derive_resource("ListAllTickets"), "Tickets");
    }

    #[test]
    fn verb_removal_strips_every_occurrence() {
        // Documented quirk: the verb is removed everywhere in the name once
        // it matched as a prefix, not only at the front.
        assert_eq!(derive_resource("CreateCreated"), "d");
        assert_eq!(derive_resource("UpdateAutoUpdatePolicy"), "AutoPolicy");
    }

    #[test]
    fn verb_prefix_matching_is_not_word_aware() {
        // "Settings" starts with the verb "Set"; the heuristic accepts that.
        assert!(is_mutation_name("Settings"));
        assert_eq!(derive_resource("Settings"), "tings");
    }

    #[test]
    fn classifies_mutation_names() {
        assert!(is_mutation_name("CreateTicket"));
        assert!(is_mutation_name("PatchTicket"));
        assert!(!is_mutation_name("GetTicket"));
        assert!(!is_mutation_name("ListAllTickets"));
    }

    #[test]
    fn lowers_only_the_first_character() {
        assert_eq!(lower_first("CreateTicket"), "createTicket");
        assert_eq!(lower_first("GetHTTPStatus"), "getHTTPStatus");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn derives_file_stems_and_directories() {
        assert_eq!(proto_file_stem("tickets/v1/tickets.proto"), "tickets");
        assert_eq!(proto_file_stem("tickets.proto"), "tickets");
        assert_eq!(proto_file_stem("tickets"), "tickets");
        assert_eq!(proto_file_dir("tickets/v1/tickets.proto"), "tickets/v1");
        assert_eq!(proto_file_dir("tickets.proto"), "");
    }
}
