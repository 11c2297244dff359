// Tue Jan 13 2026 - Alex

use crate::structure::{Alignment, DataType, LayoutError, LayoutResult, Offset, Size};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Unpacked,
    Packed,
    Optimized,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [Self::Unpacked, Self::Packed, Self::Optimized];

    pub fn label(self) -> &'static str {
        match self {
            Self::Unpacked => "Sin empaquetar",
            Self::Packed => "Empaquetado",
            Self::Optimized => "Optimizado",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Size and padding of one layout of an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutMetrics {
    pub size: Size,
    pub wasted: Size,
}

/// Where a single member lands inside a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub name: String,
    pub offset: Offset,
    pub size: Size,
    pub padding_before: Size,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLayout {
    pub placements: Vec<Placement>,
    pub tail_padding: Size,
    pub size: Size,
    pub alignment: Alignment,
    pub payload: Size,
}

impl PlacedLayout {
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            size: self.size,
            wasted: self.size.saturating_sub(self.payload),
        }
    }
}

/// The three placed layouts of a struct, computed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLayout {
    pub alignment: Alignment,
    pub unpacked: PlacedLayout,
    pub packed: PlacedLayout,
    pub optimized: PlacedLayout,
}

impl StructLayout {
    pub fn placed(&self, mode: LayoutMode) -> &PlacedLayout {
        match mode {
            LayoutMode::Unpacked => &self.unpacked,
            LayoutMode::Packed => &self.packed,
            LayoutMode::Optimized => &self.optimized,
        }
    }

    /// Packed waste is zero by definition, never derived from the size.
    pub fn metrics(&self, mode: LayoutMode) -> LayoutMetrics {
        match mode {
            LayoutMode::Packed => LayoutMetrics {
                size: self.packed.size,
                wasted: Size::zero(),
            },
            _ => self.placed(mode).metrics(),
        }
    }
}

pub struct LayoutCalculator;

impl LayoutCalculator {
    pub fn struct_layout(members: &[Arc<DataType>]) -> LayoutResult<StructLayout> {
        let unpacked = Self::unpacked(members)?;
        Ok(StructLayout {
            alignment: unpacked.alignment,
            packed: Self::packed(members)?,
            optimized: Self::optimized(members)?,
            unpacked,
        })
    }

    /// Natural layout in declared order.
    pub fn unpacked(members: &[Arc<DataType>]) -> LayoutResult<PlacedLayout> {
        Self::place(members.iter().map(Arc::as_ref))
    }

    /// Members back to back in declared order, no padding anywhere.
    pub fn packed(members: &[Arc<DataType>]) -> LayoutResult<PlacedLayout> {
        let alignment = Self::max_alignment(members)?;
        let mut offset = Size::zero();
        let mut placements = Vec::with_capacity(members.len());

        for member in members {
            placements.push(Placement {
                name: member.name().to_string(),
                offset: Offset::new(offset.as_usize()),
                size: member.size(),
                padding_before: Size::zero(),
            });
            offset = offset.checked_add(member.size())?;
        }

        Ok(PlacedLayout {
            placements,
            tail_padding: Size::zero(),
            size: offset,
            alignment,
            payload: offset,
        })
    }

    pub fn optimized(members: &[Arc<DataType>]) -> LayoutResult<PlacedLayout> {
        Self::place(Self::optimized_order(members))
    }

    /// Descending alignment; equal alignments keep their declared order.
    pub fn optimized_order(members: &[Arc<DataType>]) -> impl Iterator<Item = &DataType> {
        members
            .iter()
            .map(Arc::as_ref)
            .sorted_by_key(|member| Reverse(member.alignment()))
    }

    /// Every member at offset zero; the size is the largest member rounded
    /// up to the strictest alignment.
    pub fn union_layout(members: &[Arc<DataType>]) -> LayoutResult<PlacedLayout> {
        let largest = members.iter().map(|m| m.size()).max().unwrap_or_default();
        let alignment = Self::max_alignment(members)?;
        let size = Size::new(alignment.align(largest.as_usize())?);

        let placements = members
            .iter()
            .map(|member| Placement {
                name: member.name().to_string(),
                offset: Offset::zero(),
                size: member.size(),
                padding_before: Size::zero(),
            })
            .collect();

        Ok(PlacedLayout {
            placements,
            tail_padding: size.saturating_sub(largest),
            size,
            alignment,
            payload: largest,
        })
    }

    pub fn payload(members: &[Arc<DataType>]) -> LayoutResult<Size> {
        members
            .iter()
            .try_fold(Size::zero(), |total, member| total.checked_add(member.size()))
    }

    pub fn max_alignment(members: &[Arc<DataType>]) -> LayoutResult<Alignment> {
        members
            .iter()
            .map(|m| m.alignment())
            .max()
            .ok_or_else(Self::empty)
    }

    fn place<'a, I>(members: I) -> LayoutResult<PlacedLayout>
    where
        I: IntoIterator<Item = &'a DataType>,
    {
        let mut offset = 0usize;
        let mut payload = Size::zero();
        let mut max_alignment: Option<Alignment> = None;
        let mut placements = Vec::new();

        for member in members {
            let alignment = member.alignment();
            let start = alignment.align(offset)?;
            placements.push(Placement {
                name: member.name().to_string(),
                offset: Offset::new(start),
                size: member.size(),
                padding_before: Size::new(start - offset),
            });

            offset = start
                .checked_add(member.size().as_usize())
                .ok_or_else(|| LayoutError::overflow("el desplazamiento"))?;
            payload = payload.checked_add(member.size())?;
            max_alignment = max_alignment.max(Some(alignment));
        }

        let alignment = max_alignment.ok_or_else(Self::empty)?;
        let size = alignment.align(offset)?;

        Ok(PlacedLayout {
            placements,
            tail_padding: Size::new(size - offset),
            size: Size::new(size),
            alignment,
            payload,
        })
    }

    fn empty() -> LayoutError {
        LayoutError::InvalidArgument("la lista de miembros está vacía".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atomic(name: &str, size: usize, align: usize) -> Arc<DataType> {
        Arc::new(DataType::atomic(name, Size::new(size), Alignment::new(align).unwrap()))
    }

    fn char_int_double() -> Vec<Arc<DataType>> {
        vec![atomic("char", 1, 1), atomic("int", 4, 4), atomic("double", 8, 8)]
    }

    fn sizes(layout: &StructLayout) -> Vec<(usize, usize)> {
        LayoutMode::ALL
            .iter()
            .map(|&mode| {
                let metrics = layout.metrics(mode);
                (metrics.size.as_usize(), metrics.wasted.as_usize())
            })
            .collect()
    }

    #[test]
    fn test_worked_example_struct() {
        let layout = LayoutCalculator::struct_layout(&char_int_double()).unwrap();

        assert_eq!(layout.alignment.as_usize(), 8);
        assert_eq!(sizes(&layout), vec![(16, 3), (13, 0), (16, 3)]);
    }

    #[test]
    fn test_worked_example_union() {
        let layout = LayoutCalculator::union_layout(&char_int_double()).unwrap();

        assert_eq!(layout.alignment.as_usize(), 8);
        assert_eq!(layout.metrics().size.as_usize(), 8);
        assert_eq!(layout.metrics().wasted.as_usize(), 0);
        assert!(layout.placements.iter().all(|p| p.offset == Offset::zero()));
    }

    #[test]
    fn test_optimized_beats_bad_declared_order() {
        let members = vec![
            atomic("char", 1, 1),
            atomic("double", 8, 8),
            atomic("short", 2, 2),
            atomic("int", 4, 4),
        ];
        let layout = LayoutCalculator::struct_layout(&members).unwrap();

        // 0:char, 8:double, 16:short, 20:int -> 24
        // 0:double, 8:int, 12:short, 14:char -> 15 -> 16
        assert_eq!(sizes(&layout), vec![(24, 9), (15, 0), (16, 1)]);
    }

    #[test]
    fn test_descending_order_is_already_optimal() {
        let members = vec![atomic("double", 8, 8), atomic("int", 4, 4), atomic("char", 1, 1)];
        let layout = LayoutCalculator::struct_layout(&members).unwrap();

        assert_eq!(layout.unpacked, layout.optimized);
    }

    #[test]
    fn test_single_member_gets_tail_padding() {
        let members = vec![atomic("odd", 3, 4)];
        let layout = LayoutCalculator::struct_layout(&members).unwrap();

        assert_eq!(sizes(&layout), vec![(4, 1), (3, 0), (4, 1)]);
        assert_eq!(layout.unpacked.tail_padding.as_usize(), 1);
    }

    #[test]
    fn test_optimized_order_is_stable() {
        let members = vec![
            atomic("a", 1, 1),
            atomic("b", 4, 4),
            atomic("c", 2, 1),
            atomic("d", 8, 4),
        ];
        let order: Vec<&str> = LayoutCalculator::optimized_order(&members)
            .map(|m| m.name())
            .collect();

        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_placements_track_padding() {
        let placed = LayoutCalculator::unpacked(&char_int_double()).unwrap();
        let offsets: Vec<usize> = placed.placements.iter().map(|p| p.offset.as_usize()).collect();
        let padding: Vec<usize> = placed
            .placements
            .iter()
            .map(|p| p.padding_before.as_usize())
            .collect();

        assert_eq!(offsets, vec![0, 4, 8]);
        assert_eq!(padding, vec![0, 3, 0]);
        assert_eq!(placed.tail_padding.as_usize(), 0);

        let optimized = LayoutCalculator::optimized(&char_int_double()).unwrap();
        assert_eq!(optimized.placements[2].offset.as_usize(), 12);
        assert_eq!(optimized.tail_padding.as_usize(), 3);
    }

    #[test]
    fn test_packed_placements_have_no_gaps() {
        let packed = LayoutCalculator::packed(&char_int_double()).unwrap();
        let offsets: Vec<usize> = packed.placements.iter().map(|p| p.offset.as_usize()).collect();

        assert_eq!(offsets, vec![0, 1, 5]);
        assert_eq!(packed.size.as_usize(), 13);
        assert_eq!(packed.tail_padding, Size::zero());
    }

    #[test]
    fn test_invariants_hold_for_every_declared_order() {
        // Sizes are multiples of their alignment, so sorting by alignment
        // leaves no interior padding and can never lose to declared order.
        let pool = vec![
            atomic("char", 1, 1),
            atomic("short", 2, 2),
            atomic("int", 4, 4),
            atomic("vec3", 12, 4),
            atomic("double", 8, 8),
        ];

        for len in 1..=pool.len() {
            for members in pool.iter().cloned().permutations(len) {
                let names: Vec<&str> = members.iter().map(|m| m.name()).collect();
                let s = LayoutCalculator::struct_layout(&members).unwrap();
                let align = s.alignment.as_usize();
                let unpacked = s.metrics(LayoutMode::Unpacked);
                let packed = s.metrics(LayoutMode::Packed);
                let optimized = s.metrics(LayoutMode::Optimized);

                assert_eq!(unpacked.size.as_usize() % align, 0, "{:?}", names);
                assert_eq!(optimized.size.as_usize() % align, 0, "{:?}", names);
                assert!(optimized.size <= unpacked.size, "{:?}", names);
                assert_eq!(packed.size, LayoutCalculator::payload(&members).unwrap());
                assert_eq!(packed.wasted, Size::zero());

                let descending = members
                    .iter()
                    .tuple_windows()
                    .all(|(a, b)| a.alignment() >= b.alignment());
                if descending {
                    assert_eq!(s.unpacked, s.optimized, "{:?}", names);
                }

                let u = LayoutCalculator::union_layout(&members).unwrap();
                assert_eq!(u.size.as_usize() % u.alignment.as_usize(), 0);
            }
        }
    }

    #[test]
    fn test_union_rounds_up_to_alignment() {
        let members = vec![atomic("buf", 5, 1), atomic("int", 4, 4)];
        let layout = LayoutCalculator::union_layout(&members).unwrap();

        assert_eq!(layout.metrics().size.as_usize(), 8);
        assert_eq!(layout.metrics().wasted.as_usize(), 3);
        assert_eq!(layout.tail_padding.as_usize(), 3);
    }

    #[test]
    fn test_empty_members_fail() {
        assert!(LayoutCalculator::struct_layout(&[]).is_err());
        assert!(LayoutCalculator::union_layout(&[]).is_err());
        assert!(LayoutCalculator::packed(&[]).is_err());
    }

    #[test]
    fn test_overflow_fails_instead_of_wrapping() {
        let members = vec![atomic("huge", usize::MAX - 1, 1), atomic("int", 4, 4)];
        assert!(LayoutCalculator::struct_layout(&members).is_err());

        let members = vec![atomic("huge", usize::MAX, 1), atomic("byte", 1, 1)];
        assert!(LayoutCalculator::packed(&members).is_err());
    }
}
