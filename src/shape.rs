//! Shape re-encoding from CM3 cell grids to MA row strings.
//!
//! A CM3 shape is a layer/row/cell nesting where each cell is its own
//! string, usually one character but a composite `"base:suffix"` key for
//! NBT variants. MA flattens each row into a single string, one character
//! per block position, so every cell has to collapse to exactly one
//! symbol here.

use crate::diagnostics::Diagnostics;
use crate::document::{Cm3Shape, MaShape};
use crate::remap::TranslationMap;

/// Re-encode a CM3 shape into MA layers of row strings.
///
/// Cells translate in a fixed order: a composite key assigned by the
/// remapper becomes its MA symbol, a single-character cell passes
/// through, an untranslated `"X:Y"` composite degrades to its suffix
/// character, and anything else is emitted verbatim. Every degraded or
/// verbatim emission is recorded in `diagnostics`; the geometry of the
/// grid is never altered.
pub fn reencode(
    shape: &Cm3Shape,
    translation: &TranslationMap,
    diagnostics: &mut Diagnostics,
) -> MaShape {
    shape
        .iter()
        .map(|layer| {
            layer
                .iter()
                .map(|row| {
                    let mut encoded = String::with_capacity(row.len());
                    for cell in row {
                        emit_cell(cell, translation, &mut encoded, diagnostics);
                    }
                    encoded
                })
                .collect()
        })
        .collect()
}

/// Append the MA encoding of one cell to `row`.
fn emit_cell(
    cell: &str,
    translation: &TranslationMap,
    row: &mut String,
    diagnostics: &mut Diagnostics,
) {
    if let Some(symbol) = translation.get(cell) {
        if symbol.chars().count() != 1 {
            diagnostics.warn(format!(
                "cell '{}' maps to multi-character symbol '{}', row positions will shift",
                cell, symbol
            ));
        }
        row.push_str(symbol);
        return;
    }

    let chars: Vec<char> = cell.chars().collect();
    match chars.as_slice() {
        [only] => row.push(*only),
        [_, ':', suffix] => {
            diagnostics.warn(format!(
                "cell '{}' is an untranslated variant reference, emitting '{}' (may not be defined in inputs)",
                cell, suffix
            ));
            row.push(*suffix);
        }
        [] => {
            diagnostics.warn("empty shape cell, emitting '?'".to_string());
            row.push('?');
        }
        _ => {
            diagnostics.warn(format!(
                "cell '{}' has an unrecognized format, emitting it verbatim",
                cell
            ));
            row.push_str(cell);
        }
    }
}
