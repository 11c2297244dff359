// Tue Jan 13 2026 - Alex

use crate::structure::{
    Alignment, DataType, DescriptionReport, LayoutError, LayoutResult, Size, StructType, UnionType,
};
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// Name to type map. Names are unique for the lifetime of the registry and
/// entries are never replaced or removed.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, Arc<DataType>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    pub fn define_atomic(&mut self, name: &str, size: i64, alignment: i64) -> LayoutResult<Arc<DataType>> {
        self.ensure_available(name)?;
        let size = Size::from_signed(size).map_err(|e| self.rejected(name, e))?;
        let alignment = Alignment::from_signed(alignment).map_err(|e| self.rejected(name, e))?;

        self.insert(DataType::atomic(name, size, alignment))
    }

    pub fn define_struct<S: AsRef<str>>(&mut self, name: &str, member_names: &[S]) -> LayoutResult<Arc<DataType>> {
        self.ensure_available(name)?;
        let members = self.resolve(name, member_names)?;
        let structure = StructType::new(name, members).map_err(|e| self.rejected(name, e))?;

        self.insert(DataType::Struct(structure))
    }

    pub fn define_union<S: AsRef<str>>(&mut self, name: &str, member_names: &[S]) -> LayoutResult<Arc<DataType>> {
        self.ensure_available(name)?;
        let members = self.resolve(name, member_names)?;
        let union = UnionType::new(name, members).map_err(|e| self.rejected(name, e))?;

        self.insert(DataType::Union(union))
    }

    pub fn describe(&self, name: &str) -> LayoutResult<DescriptionReport> {
        let data_type = self
            .get(name)
            .ok_or_else(|| LayoutError::UndefinedType(name.to_string()))?;
        Ok(DescriptionReport::from_type(data_type))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<DataType>> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn ensure_available(&self, name: &str) -> LayoutResult<()> {
        if self.contains(name) {
            return Err(self.rejected(name, LayoutError::DuplicateName(name.to_string())));
        }
        Ok(())
    }

    fn resolve<S: AsRef<str>>(&self, name: &str, member_names: &[S]) -> LayoutResult<Vec<Arc<DataType>>> {
        if member_names.is_empty() {
            return Err(self.rejected(name, LayoutError::EmptyAggregate(name.to_string())));
        }

        member_names
            .iter()
            .map(|member| {
                let member = member.as_ref();
                self.get(member)
                    .cloned()
                    .ok_or_else(|| self.rejected(name, LayoutError::UndefinedType(member.to_string())))
            })
            .collect()
    }

    fn insert(&mut self, data_type: DataType) -> LayoutResult<Arc<DataType>> {
        let data_type = Arc::new(data_type);
        log::debug!(
            "Defined {} {} (size {}, align {})",
            data_type.kind(),
            data_type.name(),
            data_type.size(),
            data_type.alignment()
        );
        self.types.insert(data_type.name().to_string(), data_type.clone());
        Ok(data_type)
    }

    /// Rejections are reported to the caller; the log only traces them.
    fn rejected(&self, name: &str, error: LayoutError) -> LayoutError {
        log::debug!("Rejected definition of {}: {}", name, error);
        error
    }
}

/// A `TypeRegistry` behind one exclusive lock, for hosts that share it
/// across threads. Every operation holds the lock for its whole duration.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<TypeRegistry>>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_atomic(&self, name: &str, size: i64, alignment: i64) -> LayoutResult<Arc<DataType>> {
        self.inner.lock().define_atomic(name, size, alignment)
    }

    pub fn define_struct<S: AsRef<str>>(&self, name: &str, member_names: &[S]) -> LayoutResult<Arc<DataType>> {
        self.inner.lock().define_struct(name, member_names)
    }

    pub fn define_union<S: AsRef<str>>(&self, name: &str, member_names: &[S]) -> LayoutResult<Arc<DataType>> {
        self.inner.lock().define_union(name, member_names)
    }

    pub fn describe(&self, name: &str) -> LayoutResult<DescriptionReport> {
        self.inner.lock().describe(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<DataType>> {
        self.inner.lock().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl From<TypeRegistry> for SharedRegistry {
    fn from(registry: TypeRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}
