// Wed Jan 15 2026 - Alex

pub mod alignment;
pub mod data_type;
pub mod error;
pub mod layout;
pub mod offset;
pub mod registry;
pub mod report;
pub mod serializer;
pub mod size;

pub use alignment::Alignment;
pub use data_type::{AtomicType, DataType, StructType, UnionType};
pub use error::{LayoutError, LayoutResult};
pub use layout::{
    LayoutCalculator, LayoutMetrics, LayoutMode, PlacedLayout, Placement, StructLayout,
};
pub use offset::Offset;
pub use registry::{SharedRegistry, TypeRegistry};
pub use report::{AggregateReport, AtomicReport, DescriptionReport, ModeReport, ReportFormatter};
pub use serializer::SerializableReport;
pub use size::Size;
