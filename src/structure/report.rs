// Wed Jan 14 2026 - Alex

use crate::structure::{Alignment, DataType, LayoutMode, PlacedLayout, Placement, Size};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionReport {
    Atomic(AtomicReport),
    Struct(AggregateReport),
    Union(AggregateReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicReport {
    pub name: String,
    pub size: Size,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    pub name: String,
    pub alignment: Alignment,
    pub members: Vec<String>,
    pub modes: Vec<ModeReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeReport {
    pub mode: LayoutMode,
    pub size: Size,
    pub wasted: Size,
    pub placements: Vec<Placement>,
    pub tail_padding: Size,
}

impl DescriptionReport {
    /// Reads the metrics and placements cached on the type; nothing is
    /// recomputed.
    pub fn from_type(data_type: &DataType) -> Self {
        match data_type {
            DataType::Atomic(atomic) => Self::Atomic(AtomicReport {
                name: atomic.name().to_string(),
                size: atomic.size(),
                alignment: atomic.alignment(),
            }),
            DataType::Struct(structure) => {
                let modes = LayoutMode::ALL
                    .iter()
                    .map(|&mode| {
                        let metrics = structure.metrics(mode);
                        ModeReport::new(mode, metrics.size, metrics.wasted, structure.placements(mode))
                    })
                    .collect();

                Self::Struct(AggregateReport {
                    name: structure.name().to_string(),
                    alignment: structure.alignment(),
                    members: member_names(structure.members()),
                    modes,
                })
            }
            DataType::Union(union) => {
                let modes = LayoutMode::ALL
                    .iter()
                    .map(|&mode| {
                        let metrics = union.metrics(mode);
                        ModeReport::new(mode, metrics.size, metrics.wasted, union.placements())
                    })
                    .collect();

                Self::Union(AggregateReport {
                    name: union.name().to_string(),
                    alignment: union.alignment(),
                    members: member_names(union.members()),
                    modes,
                })
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Atomic(report) => &report.name,
            Self::Struct(report) | Self::Union(report) => &report.name,
        }
    }
}

impl AggregateReport {
    pub fn mode(&self, mode: LayoutMode) -> Option<&ModeReport> {
        self.modes.iter().find(|block| block.mode == mode)
    }
}

impl ModeReport {
    fn new(mode: LayoutMode, size: Size, wasted: Size, placed: &PlacedLayout) -> Self {
        Self {
            mode,
            size,
            wasted,
            placements: placed.placements.clone(),
            tail_padding: placed.tail_padding,
        }
    }
}

fn member_names(members: &[Arc<DataType>]) -> Vec<String> {
    members.iter().map(|m| m.name().to_string()).collect()
}

/// Renders reports in the interpreter's text format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    detailed: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    pub fn render(&self, report: &DescriptionReport) -> String {
        match report {
            DescriptionReport::Atomic(atomic) => {
                let mut output = String::new();
                output.push_str(&format!("Tipo Atómico: {}\n", atomic.name));
                output.push_str(&format!("Tamaño: {} bytes\n", atomic.size));
                output.push_str(&format!("Alineación: {} bytes\n", atomic.alignment));
                output
            }
            DescriptionReport::Struct(aggregate) => self.render_aggregate("Struct", aggregate),
            DescriptionReport::Union(aggregate) => self.render_aggregate("Union", aggregate),
        }
    }

    fn render_aggregate(&self, label: &str, report: &AggregateReport) -> String {
        let mut output = format!("{}: {}\n", label, report.name);
        if self.detailed {
            output.push_str(&format!("  Alineación: {} bytes\n", report.alignment));
        }

        for block in &report.modes {
            output.push_str(&format!("  {}:\n", block.mode));
            output.push_str(&format!("    Tamaño: {} bytes\n", block.size));
            output.push_str(&format!("    Bytes desperdiciados: {} bytes\n", block.wasted));

            if self.detailed {
                for placement in &block.placements {
                    output.push_str(&format!(
                        "      {:>6} {} ({} bytes, relleno previo {})\n",
                        placement.offset.to_string(),
                        placement.name,
                        placement.size,
                        placement.padding_before
                    ));
                }
                if block.tail_padding.as_usize() > 0 {
                    output.push_str(&format!("      relleno final: {} bytes\n", block.tail_padding));
                }
            }
        }
        output
    }
}
