//! Trait name dictionary: class -> part type -> trait code -> skin -> name.

use std::{collections::HashMap, fs::File, io::BufReader, io::Read, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    errors::{DecodeError, DictionaryError},
    model::{Class, PartSkin, PartType},
};

/// Skin key -> trait name for one trait code.
pub type SkinNames = HashMap<String, String>;

/// Read-only trait name dictionary, in the shape of the `traits.json` asset.
///
/// Skin keys are kept as strings so unknown skins in the data do not prevent
/// loading; lookups use [PartSkin::as_str].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitDictionary {
    entries: HashMap<Class, HashMap<PartType, HashMap<String, SkinNames>>>,
}

impl TraitDictionary {
    pub fn new(entries: HashMap<Class, HashMap<PartType, HashMap<String, SkinNames>>>) -> Self {
        TraitDictionary { entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let dictionary: TraitDictionary = serde_json::from_str(json)?;
        dictionary.log_loaded();
        Ok(dictionary)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DictionaryError> {
        let dictionary: TraitDictionary = serde_json::from_reader(reader)?;
        dictionary.log_loaded();
        Ok(dictionary)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    fn log_loaded(&self) {
        info!(traits = self.len(), "trait dictionary loaded");
    }

    /// Number of (class, part type, trait code) entries.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .flat_map(HashMap::values)
            .map(HashMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds or replaces one name. Intended for building dictionaries before they are shared.
    pub fn insert(
        &mut self,
        class: Class,
        part_type: PartType,
        code: impl Into<String>,
        skin: PartSkin,
        name: impl Into<String>,
    ) -> &mut Self {
        self.entries
            .entry(class)
            .or_default()
            .entry(part_type)
            .or_default()
            .entry(code.into())
            .or_default()
            .insert(skin.as_str().to_string(), name.into());
        self
    }

    /// Canonical trait name for `skin`, falling back to the global name.
    pub fn resolve(
        &self,
        class: Class,
        part_type: PartType,
        code: &str,
        skin: PartSkin,
    ) -> Result<&str, DecodeError> {
        let names = self
            .entries
            .get(&class)
            .and_then(|parts| parts.get(&part_type))
            .and_then(|codes| codes.get(code));

        names
            .and_then(|names| {
                names
                    .get(skin.as_str())
                    .or_else(|| names.get(PartSkin::Global.as_str()))
            })
            .map(String::as_str)
            .ok_or_else(|| DecodeError::TraitNotFound {
                class,
                part_type,
                code: code.to_string(),
                skin,
            })
    }
}
