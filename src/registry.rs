//! Part registry: normalized part id -> [TraitRecord].

use std::{collections::HashMap, fs::File, io::BufReader, io::Read, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    errors::{DecodeError, DictionaryError},
    model::{PartType, TraitRecord},
};

/// Normalized registry key for a trait name, e.g. `ears-nut-cracker`.
///
/// The name is lower-cased, spaces become hyphens, and periods and
/// apostrophes are removed.
pub fn part_id(part_type: PartType, name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | '\''))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect();

    format!("{part_type}-{slug}")
}

/// Read-only part registry, in the shape of the `parts.json` asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartRegistry {
    parts: HashMap<String, TraitRecord>,
}

impl PartRegistry {
    pub fn new(parts: HashMap<String, TraitRecord>) -> Self {
        PartRegistry { parts }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let registry: PartRegistry = serde_json::from_str(json)?;
        info!(parts = registry.len(), "part registry loaded");
        Ok(registry)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DictionaryError> {
        let registry: PartRegistry = serde_json::from_reader(reader)?;
        info!(parts = registry.len(), "part registry loaded");
        Ok(registry)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Registers a record under its own id.
    pub fn insert(&mut self, record: TraitRecord) -> &mut Self {
        self.parts.insert(record.id.clone(), record);
        self
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Full record of the trait called `name` on a `part_type` part.
    pub fn resolve(&self, part_type: PartType, name: &str) -> Result<TraitRecord, DecodeError> {
        let id = part_id(part_type, name);
        match self.parts.get(&id) {
            Some(record) => Ok(record.clone()),
            None => Err(DecodeError::PartRegistryMiss(id)),
        }
    }
}
