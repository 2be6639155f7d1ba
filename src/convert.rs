//! Whole-record conversion from a CM3 structure to an MA structure.

use crate::diagnostics::Diagnostics;
use crate::document::{Cm3Structure, MaStructure};
use crate::remap::{remap, TranslationMap};
use crate::shape::reencode;

/// Convert one parsed CM3 structure into its MA counterpart.
///
/// The output id is the CM3 name with any namespace stripped. Disabled
/// structures are kept but marked `"register-as-item": false`; enabled
/// ones omit the field. Missing sections stay missing: no `input-types`
/// means no `inputs`, no `shape` means no `shape`. Anything surprising
/// found along the way lands in `diagnostics`.
pub fn convert_structure(cm3: &Cm3Structure, diagnostics: &mut Diagnostics) -> MaStructure {
    let mut translation = TranslationMap::new();

    let inputs = cm3.input_types.as_ref().map(|base| {
        let (table, map) = remap(base, cm3.input_nbt.as_ref(), diagnostics);
        translation = map;
        table
    });
    if cm3.input_types.is_none() && cm3.input_nbt.is_some() {
        diagnostics.warn("input-nbt present without input-types, variants ignored".to_string());
    }

    let shape = cm3
        .shape
        .as_ref()
        .map(|shape| reencode(shape, &translation, diagnostics));

    let register_as_item = if cm3.disabled { Some(false) } else { None };

    MaStructure {
        id: extract_id(&cm3.name).to_string(),
        register_as_item,
        inputs,
        shape,
    }
}

/// Strip the namespace from a CM3 structure name.
///
/// Everything up to and including the last `:` goes; a name without one
/// is returned whole.
pub fn extract_id(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, id)) => id,
        None => name,
    }
}
