//! Generated db entries: one module per persisted entity.

pub mod log;
pub mod setting;

pub use log::{CreateLog, Log, LOGS};
pub use setting::{CreateSetting, Setting, SETTINGS};

use crate::descriptor::{build_descriptor, GeneratedSchema};
use crate::foundations::EntitySpec;

/// Build the descriptor behind a db entry `static`.
///
/// Entry definitions are constants covered by this crate's tests, so a failure
/// here is a definition defect rather than a runtime condition.
fn generated<T>(spec: &EntitySpec) -> GeneratedSchema<T> {
    match build_descriptor(spec) {
        Ok(schema) => schema,
        Err(err) => panic!("malformed db entry `{}`: {err}", spec.table),
    }
}
