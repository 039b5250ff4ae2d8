//! Generated schema descriptors.
//!
//! A descriptor bundles everything a persistence layer needs to emit storage
//! statements for one entity: table names, the logical-to-column field map,
//! the ordered field keys, and the create guard. All of it is derived from a
//! single [`EntitySpec`], so field names are never repeated by hand.

use std::collections::HashSet;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use idconsole_core::{DomainError, DomainResult};

use crate::foundations::EntitySpec;
use crate::guard::Guard;

/// Ordered mapping from logical field name to storage column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(&'static str, &'static str)>,
}

impl FieldMap {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, column)| *column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, column) in &self.entries {
            map.serialize_entry(name, column)?;
        }
        map.end()
    }
}

/// Immutable descriptor of a persisted entity with creation input `T`.
///
/// Built once (see the `static` items in [`crate::db_entries`]); there is no
/// mutable access afterwards.
pub struct GeneratedSchema<T> {
    table: &'static str,
    table_singular: &'static str,
    fields: FieldMap,
    field_keys: Vec<&'static str>,
    create_guard: Guard<T>,
}

impl<T> GeneratedSchema<T> {
    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn table_singular(&self) -> &'static str {
        self.table_singular
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn field_keys(&self) -> &[&'static str] {
        &self.field_keys
    }

    pub fn create_guard(&self) -> &Guard<T> {
        &self.create_guard
    }

    /// Storage column for a logical field name.
    pub fn column(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field)
    }
}

impl<T> core::fmt::Debug for GeneratedSchema<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GeneratedSchema")
            .field("table", &self.table)
            .field("table_singular", &self.table_singular)
            .field("fields", &self.fields)
            .field("field_keys", &self.field_keys)
            .finish_non_exhaustive()
    }
}

impl<T> Serialize for GeneratedSchema<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("GeneratedSchema", 4)?;
        s.serialize_field("table", self.table)?;
        s.serialize_field("tableSingular", self.table_singular)?;
        s.serialize_field("fields", &self.fields)?;
        s.serialize_field("fieldKeys", &self.field_keys)?;
        s.end()
    }
}

/// Build a descriptor from an entity definition.
///
/// Fails with [`DomainError::InvariantViolation`] when the definition itself is
/// broken (no fields, duplicate field names, duplicate columns). Shipped
/// definitions are fixed, so this only surfaces during development.
pub fn build_descriptor<T>(spec: &EntitySpec) -> DomainResult<GeneratedSchema<T>> {
    if spec.table.is_empty() || spec.table_singular.is_empty() {
        return Err(DomainError::invariant("entity table names must not be empty"));
    }
    if spec.fields.is_empty() {
        return Err(DomainError::invariant(format!(
            "entity `{}` declares no fields",
            spec.table
        )));
    }

    let mut names = HashSet::with_capacity(spec.fields.len());
    let mut columns = HashSet::with_capacity(spec.fields.len());
    for field in spec.fields {
        if !names.insert(field.name) {
            return Err(DomainError::invariant(format!(
                "entity `{}` declares field `{}` twice",
                spec.table, field.name
            )));
        }
        if !columns.insert(field.column) {
            return Err(DomainError::invariant(format!(
                "entity `{}` maps two fields to column `{}`",
                spec.table, field.column
            )));
        }
    }

    let fields = FieldMap {
        entries: spec.fields.iter().map(|f| (f.name, f.column)).collect(),
    };
    let field_keys = spec.fields.iter().map(|f| f.name).collect();

    tracing::trace!(table = spec.table, fields = spec.fields.len(), "descriptor built");

    Ok(GeneratedSchema {
        table: spec.table,
        table_singular: spec.table_singular,
        fields,
        field_keys,
        create_guard: Guard::from_spec(spec),
    })
}
