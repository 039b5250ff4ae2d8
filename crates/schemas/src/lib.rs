//! `idconsole-schemas` — storage descriptors for persisted entities.
//!
//! Each db entry is declared once as an [`EntitySpec`]; the creation input
//! type, the field-to-column map and the create guard are all derived from it.

pub mod db_entries;
pub mod descriptor;
pub mod error;
pub mod foundations;
pub mod guard;

pub use db_entries::{CreateLog, CreateSetting, Log, Setting, LOGS, SETTINGS};
pub use descriptor::{build_descriptor, FieldMap, GeneratedSchema};
pub use error::{FieldIssue, IssueKind, ValidationError};
pub use foundations::{
    ArbitraryObject, EntitySpec, FieldDefault, FieldKind, FieldSpec, Presence, UnknownKeys,
};
pub use guard::{validate_create_input, validate_create_input_at, Guard};
