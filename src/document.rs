//! Document models for both structure schemas.
//!
//! The legacy CompactMachines3 ("CM3") side is deserialize-only; the
//! Machinery Assembler ("MA") side is serialize-only. Converting between
//! them lives in [`convert`](crate::convert).

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// Legacy base symbol table in document order: single character -> block.
pub type BaseSymbolTable = IndexMap<String, BlockRef>;

/// Legacy NBT variant table in document order: `"base:suffix"` -> payload.
pub type NbtVariantTable = IndexMap<String, NbtVariant>;

/// Legacy placement pattern indexed `[layer][row][column]`, one symbol
/// string per cell.
pub type Cm3Shape = Vec<Vec<Vec<String>>>;

/// MA placement pattern indexed `[layer][row]`, one character per column.
pub type MaShape = Vec<Vec<String>>;

/// A CM3 structure definition, as read from disk.
///
/// Unknown fields are ignored; every field except `name` is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Cm3Structure {
    /// Structure identifier, optionally namespaced ("compactmachines:small").
    #[serde(default = "default_name")]
    pub name: String,

    /// Disabled structures are still converted, but flagged so MA skips
    /// registering them as items.
    #[serde(default)]
    pub disabled: bool,

    /// Base symbol table.
    #[serde(default, rename = "input-types")]
    pub input_types: Option<BaseSymbolTable>,

    /// NBT variant table.
    #[serde(default, rename = "input-nbt")]
    pub input_nbt: Option<NbtVariantTable>,

    /// Placement pattern.
    #[serde(default)]
    pub shape: Option<Cm3Shape>,
}

fn default_name() -> String {
    "unknown".to_string()
}

/// A CM3 block reference: identifier plus metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockRef {
    /// Block identifier, e.g. "minecraft:stone".
    #[serde(default)]
    pub id: String,

    /// Block metadata. 0 is the default and is elided when encoding.
    #[serde(default)]
    pub meta: i32,
}

impl BlockRef {
    /// Encode as an MA block descriptor: `"id@meta"`, or just `"id"` when
    /// the metadata is 0.
    pub fn encode(&self) -> String {
        if self.meta != 0 {
            format!("{}@{}", self.id, self.meta)
        } else {
            self.id.clone()
        }
    }
}

/// An NBT-tagged refinement of a base symbol.
///
/// The payload is carried through to the output verbatim; the converter
/// never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NbtVariant {
    #[serde(default)]
    pub nbt: String,
}

/// A value in the MA `inputs` table: either a plain block descriptor or a
/// descriptor paired with an NBT payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InputValue {
    /// `"id"` or `"id@meta"`.
    Plain(String),
    /// `{"id": …, "nbt": …}`, used for NBT variants.
    Nbt { id: String, nbt: String },
}

/// The MA `inputs` table: assigned symbol -> input value.
///
/// Assignment order is observable: it decides collision outcomes during
/// remapping and the key order of the serialized output. Entries are kept
/// in an explicit ordered list, with a separate set for key lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTable {
    entries: Vec<(String, InputValue)>,
    used: HashSet<String>,
}

impl InputTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a symbol is already assigned.
    pub fn contains_key(&self, symbol: &str) -> bool {
        self.used.contains(symbol)
    }

    /// Look up the value assigned to a symbol.
    pub fn get(&self, symbol: &str) -> Option<&InputValue> {
        self.entries.iter().find(|(k, _)| k == symbol).map(|(_, v)| v)
    }

    /// Assign a symbol. A repeated symbol replaces the existing value in
    /// place, keeping its original position.
    pub fn insert(&mut self, symbol: String, value: InputValue) {
        if self.used.contains(&symbol) {
            if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == symbol) {
                entry.1 = value;
            }
            return;
        }
        self.used.insert(symbol.clone());
        self.entries.push((symbol, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for InputTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (symbol, value) in &self.entries {
            map.serialize_entry(symbol, value)?;
        }
        map.end()
    }
}

/// A converted MA structure definition, ready to serialize.
///
/// Field declaration order here is the output field order: `id`,
/// `register-as-item`, `inputs`, `shape`.
#[derive(Debug, Clone, Serialize)]
pub struct MaStructure {
    /// Identifier with any namespace prefix stripped.
    pub id: String,

    /// Present (and `false`) only for structures the input marked disabled.
    #[serde(rename = "register-as-item", skip_serializing_if = "Option::is_none")]
    pub register_as_item: Option<bool>,

    /// New symbol table; present iff the input had `input-types`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<InputTable>,

    /// Re-encoded pattern; present iff the input had a shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<MaShape>,
}
