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

/// Well-known `google.protobuf` types mapped to the identifiers exported by
/// the protobuf runtime the generated code imports them from.
pub static WELL_KNOWN_TYPES: &[(&str, &str)] = &[
    ("google.protobuf.Any", "Any"),
    ("google.protobuf.BoolValue", "BoolValue"),
    ("google.protobuf.BytesValue", "BytesValue"),
    ("google.protobuf.DoubleValue", "DoubleValue"),
    ("google.protobuf.Duration", "Duration"),
    ("google.protobuf.Empty", "Empty"),
    ("google.protobuf.FieldMask", "FieldMask"),
    ("google.protobuf.FloatValue", "FloatValue"),
    ("google.protobuf.Int32Value", "Int32Value"),
    ("google.protobuf.Int64Value", "Int64Value"),
    ("google.protobuf.ListValue", "ListValue"),
    ("google.protobuf.StringValue", "StringValue"),
    ("google.protobuf.Struct", "Struct"),
    ("google.protobuf.Timestamp", "Timestamp"),
    ("google.protobuf.UInt32Value", "UInt32Value"),
    ("google.protobuf.UInt64Value", "UInt64Value"),
    ("google.protobuf.Value", "Value"),
];

pub fn well_known_import(full_name: &str) -> Option<&'static str> {
    WELL_KNOWN_TYPES
        .iter()
        .find(|(name, _)| *name == full_name)
        .map(|(_, import)| *import)
}

#[cfg(test)]
mod tests {
    use test_r::test;

    use super::*;

    #[test]
    fn maps_well_known_types() {
        assert_eq!(well_known_import("google.protobuf.Empty"), Some("Empty"));
        assert_eq!(
            well_known_import("google.protobuf.Timestamp"),
            Some("Timestamp")
        );
    }

    #[test]
    fn rejects_user_types_and_unqualified_names() {
        assert_eq!(well_known_import("tickets.v1.Ticket"), None);
        assert_eq!(well_known_import("Empty"), None);
        assert_eq!(well_known_import(".google.protobuf.Empty"), None);
    }
}
