// Tue Jan 13 2026 - Alex

use crate::structure::{AggregateReport, DescriptionReport, LayoutMode, Placement};
use serde::Serialize;

#[derive(Serialize)]
pub struct SerializableReport {
    name: String,
    kind: &'static str,
    size: usize,
    alignment: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    members: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    layouts: Vec<SerializableLayout>,
}

#[derive(Serialize)]
pub struct SerializableLayout {
    mode: LayoutMode,
    size: usize,
    wasted: usize,
    tail_padding: usize,
    placements: Vec<Placement>,
}

impl SerializableReport {
    fn aggregate(kind: &'static str, report: &AggregateReport) -> Self {
        let size = report
            .mode(LayoutMode::Unpacked)
            .map(|block| block.size.as_usize())
            .unwrap_or_default();

        Self {
            name: report.name.clone(),
            kind,
            size,
            alignment: report.alignment.as_usize(),
            members: report.members.clone(),
            layouts: report.modes.iter().map(|block| SerializableLayout {
                mode: block.mode,
                size: block.size.as_usize(),
                wasted: block.wasted.as_usize(),
                tail_padding: block.tail_padding.as_usize(),
                placements: block.placements.clone(),
            }).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&DescriptionReport> for SerializableReport {
    fn from(report: &DescriptionReport) -> Self {
        match report {
            DescriptionReport::Atomic(atomic) => Self {
                name: atomic.name.clone(),
                kind: "atomic",
                size: atomic.size.as_usize(),
                alignment: atomic.alignment.as_usize(),
                members: Vec::new(),
                layouts: Vec::new(),
            },
            DescriptionReport::Struct(aggregate) => Self::aggregate("struct", aggregate),
            DescriptionReport::Union(aggregate) => Self::aggregate("union", aggregate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::TypeRegistry;

    #[test]
    fn test_struct_json_shape() {
        let mut registry = TypeRegistry::new();
        registry.define_atomic("char", 1, 1).unwrap();
        registry.define_atomic("int", 4, 4).unwrap();
        registry.define_struct("Pair", &["char", "int"]).unwrap();

        let report = registry.describe("Pair").unwrap();
        let json = SerializableReport::from(&report).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["kind"], "struct");
        assert_eq!(value["size"], 8);
        assert_eq!(value["alignment"], 4);
        assert_eq!(value["layouts"][0]["mode"], "unpacked");
        assert_eq!(value["layouts"][0]["wasted"], 3);
        assert_eq!(value["layouts"][1]["size"], 5);
        assert_eq!(value["layouts"][0]["placements"][1]["offset"], 4);
        assert_eq!(value["layouts"][0]["placements"][1]["padding_before"], 3);
    }

    #[test]
    fn test_atomic_json_omits_layouts() {
        let mut registry = TypeRegistry::new();
        registry.define_atomic("long", 8, 8).unwrap();

        let json = SerializableReport::from(&registry.describe("long").unwrap()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["kind"], "atomic");
        assert_eq!(value["size"], 8);
        assert!(value.get("layouts").is_none());
    }
}
