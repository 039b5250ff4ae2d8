use crate::config::ConsoleConfig;

use super::{get_started_metadata, GetStartedInputs, GetStartedMetadata};

/// Caches the last derived checklist; re-derives only when an input changed.
#[derive(Debug, Clone)]
pub struct GetStartedMemo {
    config: ConsoleConfig,
    cached: Option<(GetStartedInputs, GetStartedMetadata)>,
    derivations: u64,
}

impl GetStartedMemo {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config,
            cached: None,
            derivations: 0,
        }
    }

    pub fn get(&mut self, inputs: &GetStartedInputs) -> &GetStartedMetadata {
        let entry = match self.cached.take() {
            Some((cached, metadata)) if cached == *inputs => (cached, metadata),
            _ => {
                self.derivations += 1;
                (inputs.clone(), get_started_metadata(inputs, &self.config))
            }
        };

        &self.cached.insert(entry).1
    }

    /// How many times the checklist has been derived.
    pub fn derivations(&self) -> u64 {
        self.derivations
    }
}
