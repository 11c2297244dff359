// Tue Jan 13 2026 - Alex

use crate::structure::{
    Alignment, LayoutCalculator, LayoutError, LayoutMetrics, LayoutMode, LayoutResult,
    PlacedLayout, Size, StructLayout,
};
use std::fmt;
use std::sync::Arc;

/// A registered type. Immutable once built; aggregates share their members
/// through `Arc` handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Atomic(AtomicType),
    Struct(StructType),
    Union(UnionType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicType {
    name: String,
    size: Size,
    alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    name: String,
    members: Vec<Arc<DataType>>,
    layout: StructLayout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    name: String,
    members: Vec<Arc<DataType>>,
    layout: PlacedLayout,
}

impl DataType {
    pub fn atomic(name: impl Into<String>, size: Size, alignment: Alignment) -> Self {
        Self::Atomic(AtomicType {
            name: name.into(),
            size,
            alignment,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Atomic(atomic) => &atomic.name,
            Self::Struct(structure) => &structure.name,
            Self::Union(union) => &union.name,
        }
    }

    /// Size this type occupies when used as a member: the natural layout for
    /// aggregates.
    pub fn size(&self) -> Size {
        match self {
            Self::Atomic(atomic) => atomic.size,
            Self::Struct(structure) => structure.layout.unpacked.size,
            Self::Union(union) => union.layout.size,
        }
    }

    pub fn alignment(&self) -> Alignment {
        match self {
            Self::Atomic(atomic) => atomic.alignment,
            Self::Struct(structure) => structure.layout.alignment,
            Self::Union(union) => union.layout.alignment,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Atomic(_) => "atomic",
            Self::Struct(_) => "struct",
            Self::Union(_) => "union",
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Self::Atomic(_))
    }

    pub fn is_aggregate(&self) -> bool {
        !self.is_atomic()
    }
}

impl AtomicType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

impl StructType {
    pub fn new(name: impl Into<String>, members: Vec<Arc<DataType>>) -> LayoutResult<Self> {
        let name = name.into();
        if members.is_empty() {
            return Err(LayoutError::EmptyAggregate(name));
        }
        let layout = LayoutCalculator::struct_layout(&members)?;

        Ok(Self {
            name,
            members,
            layout,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Arc<DataType>] {
        &self.members
    }

    pub fn alignment(&self) -> Alignment {
        self.layout.alignment
    }

    pub fn metrics(&self, mode: LayoutMode) -> LayoutMetrics {
        self.layout.metrics(mode)
    }

    pub fn size_unpacked(&self) -> Size {
        self.layout.unpacked.size
    }

    pub fn wasted_unpacked(&self) -> Size {
        self.metrics(LayoutMode::Unpacked).wasted
    }

    pub fn size_packed(&self) -> Size {
        self.layout.packed.size
    }

    pub fn size_optimized(&self) -> Size {
        self.layout.optimized.size
    }

    pub fn wasted_optimized(&self) -> Size {
        self.metrics(LayoutMode::Optimized).wasted
    }

    /// Member offsets for `mode`, as computed at construction.
    pub fn placements(&self, mode: LayoutMode) -> &PlacedLayout {
        self.layout.placed(mode)
    }
}

impl UnionType {
    pub fn new(name: impl Into<String>, members: Vec<Arc<DataType>>) -> LayoutResult<Self> {
        let name = name.into();
        if members.is_empty() {
            return Err(LayoutError::EmptyAggregate(name));
        }
        let layout = LayoutCalculator::union_layout(&members)?;

        Ok(Self {
            name,
            members,
            layout,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Arc<DataType>] {
        &self.members
    }

    pub fn alignment(&self) -> Alignment {
        self.layout.alignment
    }

    pub fn size(&self) -> Size {
        self.layout.size
    }

    pub fn wasted(&self) -> Size {
        self.layout.metrics().wasted
    }

    /// Members overlap, so every mode reports the same numbers.
    pub fn metrics(&self, _mode: LayoutMode) -> LayoutMetrics {
        self.layout.metrics()
    }

    pub fn placements(&self) -> &PlacedLayout {
        &self.layout
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic(atomic) => write!(
                f,
                "{} (size {}, align {})",
                atomic.name, atomic.size, atomic.alignment
            ),
            Self::Struct(structure) => {
                write!(f, "struct {} {{ ", structure.name)?;
                for (i, member) in structure.members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", member.name())?;
                }
                write!(f, " }}")
            }
            Self::Union(union) => {
                write!(f, "union {} {{ ", union.name)?;
                for (i, member) in union.members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", member.name())?;
                }
                write!(f, " }}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atomic(name: &str, size: usize, align: usize) -> Arc<DataType> {
        Arc::new(DataType::atomic(name, Size::new(size), Alignment::new(align).unwrap()))
    }

    #[test]
    fn test_struct_requires_members() {
        let err = StructType::new("Empty", Vec::new()).unwrap_err();
        assert_eq!(err, LayoutError::EmptyAggregate("Empty".to_string()));

        let err = UnionType::new("Nada", Vec::new()).unwrap_err();
        assert_eq!(err, LayoutError::EmptyAggregate("Nada".to_string()));
    }

    #[test]
    fn test_nested_struct_uses_unpacked_size() {
        let inner = StructType::new("Inner", vec![atomic("char", 1, 1), atomic("int", 4, 4)]).unwrap();
        let inner = Arc::new(DataType::Struct(inner));
        assert_eq!(inner.size().as_usize(), 8);
        assert_eq!(inner.alignment().as_usize(), 4);

        let outer = StructType::new("Outer", vec![atomic("char", 1, 1), inner.clone()]).unwrap();
        assert_eq!(outer.size_unpacked().as_usize(), 12);
        assert_eq!(outer.size_packed().as_usize(), 9);
        assert_eq!(outer.size_optimized().as_usize(), 12);
        assert!(Arc::ptr_eq(&outer.members()[1], &inner));
    }

    #[test]
    fn test_packed_placements_have_no_gaps() {
        let s = StructType::new(
            "S1",
            vec![atomic("char", 1, 1), atomic("int", 4, 4), atomic("double", 8, 8)],
        )
        .unwrap();
        let packed = s.placements(LayoutMode::Packed);
        let offsets: Vec<usize> = packed.placements.iter().map(|p| p.offset.as_usize()).collect();

        assert_eq!(offsets, vec![0, 1, 5]);
        assert_eq!(packed.size.as_usize(), 13);
        assert_eq!(packed.tail_padding, Size::zero());
    }

    #[test]
    fn test_union_metrics_identical_across_modes() {
        let u = UnionType::new("U", vec![atomic("char", 1, 1), atomic("short", 6, 2)]).unwrap();
        let sizes: Vec<usize> = LayoutMode::ALL
            .iter()
            .map(|mode| u.metrics(*mode).size.as_usize())
            .collect();

        assert_eq!(sizes, vec![6, 6, 6]);
        assert_eq!(u.wasted(), Size::zero());
    }

    #[test]
    fn test_display() {
        let s = DataType::Struct(
            StructType::new("Pair", vec![atomic("int", 4, 4), atomic("char", 1, 1)]).unwrap(),
        );
        assert_eq!(format!("{}", s), "struct Pair { int, char }");
        assert_eq!(s.kind(), "struct");
        assert!(s.is_aggregate());
    }
}
