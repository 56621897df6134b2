#![allow(missing_docs)]

use logidoc::logix::{AtomicKind, AtomicValue, Member, Radix, StructureType};
use serde_json::json;

#[test]
fn atomic_values_serialize_tagged_by_kind() {
	assert_eq!(serde_json::to_value(AtomicValue::Dint(5)).unwrap(), json!({ "Dint": 5 }));
	assert_eq!(serde_json::to_value(AtomicValue::Bool(true)).unwrap(), json!({ "Bool": true }));
}

#[test]
fn members_serialize_with_their_wire_attributes() {
	let member = Member::atomic("Speed", AtomicKind::Dint).with_radix(Radix::Hex);
	let value = serde_json::to_value(&member).unwrap();
	assert_eq!(value["name"], "Speed");
	assert_eq!(value["radix"], "Hex");
	assert_eq!(value["data_type"], json!({ "Atomic": "Dint" }));
}

#[test]
fn structure_types_serialize_members_in_order() {
	let text = StructureType::string_type("Str4", 4);
	let value = serde_json::to_value(&text).unwrap();
	assert_eq!(value["members"][0]["name"], "LEN");
	assert_eq!(value["members"][1]["name"], "DATA");
}
