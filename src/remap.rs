//! Symbol remapping from CM3 composite keys to MA symbols.
//!
//! CM3 refers to NBT variants through composite `"base:suffix"` keys in a
//! dedicated `input-nbt` table; MA folds every variant into the `inputs`
//! table under its own symbol. The remapper assigns those symbols (the
//! suffix character when free, numbered fallbacks `"A1"`, `"A2"`, … when
//! taken) and records each assignment so the shape re-encoder can rewrite
//! the matching cells.

use crate::diagnostics::Diagnostics;
use crate::document::{BaseSymbolTable, InputTable, InputValue, NbtVariantTable};
use std::collections::HashMap;

/// Lookup from CM3 composite key to its assigned MA symbol.
///
/// Built once per conversion and consumed only by the shape re-encoder;
/// never serialized. Injective by construction: two distinct composite
/// keys never resolve to the same symbol.
pub type TranslationMap = HashMap<String, String>;

/// Build the MA `inputs` table and the composite-key translation map.
///
/// Base entries are processed first, in document order, under their
/// unchanged single-character keys. Variants follow, also in document
/// order; each is assigned the first free symbol counting up from its
/// suffix character. Malformed entries are skipped with a diagnostic
/// instead of failing the conversion, and fallback assignments are
/// recorded the same way. The result is always returned, partial if
/// need be.
pub fn remap(
    base: &BaseSymbolTable,
    variants: Option<&NbtVariantTable>,
    diagnostics: &mut Diagnostics,
) -> (InputTable, TranslationMap) {
    let mut table = InputTable::new();
    let mut translation = TranslationMap::new();

    for (symbol, block) in base {
        if symbol.chars().count() != 1 {
            diagnostics.warn(format!(
                "input symbol '{}' is not a single character, skipping",
                symbol
            ));
            continue;
        }
        table.insert(symbol.clone(), InputValue::Plain(block.encode()));
    }

    let Some(variants) = variants else {
        return (table, translation);
    };

    for (composite, variant) in variants {
        let Some((base_symbol, raw_suffix)) = composite.split_once(':') else {
            diagnostics.warn(format!(
                "variant key '{}' has no ':' separator, skipping",
                composite
            ));
            continue;
        };

        let suffix = normalize_suffix(composite, raw_suffix, diagnostics);

        let Some(block) = base.get(base_symbol) else {
            diagnostics.warn(format!(
                "variant key '{}' references unknown base symbol '{}', skipping",
                composite, base_symbol
            ));
            continue;
        };

        let resolved = resolve_collision(&suffix, &table);
        table.insert(
            resolved.clone(),
            InputValue::Nbt {
                id: block.encode(),
                nbt: variant.nbt.clone(),
            },
        );
        translation.insert(composite.clone(), resolved);
    }

    (table, translation)
}

/// Reduce a variant suffix to a single character: the suffix itself when
/// already one character, otherwise its first character, or the
/// placeholder `X` when empty.
fn normalize_suffix(composite: &str, raw: &str, diagnostics: &mut Diagnostics) -> String {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(only), None) => only.to_string(),
        (Some(first), Some(_)) => {
            diagnostics.warn(format!(
                "variant key '{}' has multi-character suffix '{}', using '{}'",
                composite, raw, first
            ));
            first.to_string()
        }
        (None, _) => {
            diagnostics.warn(format!(
                "variant key '{}' has an empty suffix, using placeholder 'X'",
                composite
            ));
            "X".to_string()
        }
    }
}

/// Find the first free symbol for a variant: the suffix itself when
/// unassigned, otherwise `suffix1`, `suffix2`, … until a gap is found.
/// Checking against every occupied key keeps assignments injective and
/// stops a variant from clobbering an earlier entry.
fn resolve_collision(suffix: &str, table: &InputTable) -> String {
    let mut candidate = suffix.to_string();
    let mut disambiguator = 1u32;
    while table.contains_key(&candidate) {
        candidate = format!("{}{}", suffix, disambiguator);
        disambiguator += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BlockRef, NbtVariant};
    use std::collections::HashSet;

    fn base_table(entries: &[(&str, &str, i32)]) -> BaseSymbolTable {
        entries
            .iter()
            .map(|(symbol, id, meta)| {
                (
                    symbol.to_string(),
                    BlockRef {
                        id: id.to_string(),
                        meta: *meta,
                    },
                )
            })
            .collect()
    }

    fn variant_table(entries: &[(&str, &str)]) -> NbtVariantTable {
        entries
            .iter()
            .map(|(key, nbt)| {
                (
                    key.to_string(),
                    NbtVariant {
                        nbt: nbt.to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_base_symbols_keep_their_keys() {
        let base = base_table(&[("a", "mod:stone", 0), ("b", "mod:glass", 2)]);
        let mut diagnostics = Diagnostics::new();

        let (table, translation) = remap(&base, None, &mut diagnostics);

        assert!(diagnostics.is_empty());
        assert!(translation.is_empty());
        assert_eq!(table.get("a"), Some(&InputValue::Plain("mod:stone".to_string())));
        assert_eq!(table.get("b"), Some(&InputValue::Plain("mod:glass@2".to_string())));
        let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_multi_character_base_key_skipped() {
        let base = base_table(&[("ab", "mod:stone", 0), ("c", "mod:glass", 0)]);
        let mut diagnostics = Diagnostics::new();

        let (table, _) = remap(&base, None, &mut diagnostics);

        assert_eq!(table.len(), 1);
        assert!(table.contains_key("c"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.iter().next().unwrap().contains("'ab'"));
    }

    #[test]
    fn test_variant_assigned_suffix_character() {
        let base = base_table(&[("a", "mod:chest", 0)]);
        let variants = variant_table(&[("a:A", "{Items:[]}")]);
        let mut diagnostics = Diagnostics::new();

        let (table, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert!(diagnostics.is_empty());
        assert_eq!(
            table.get("A"),
            Some(&InputValue::Nbt {
                id: "mod:chest".to_string(),
                nbt: "{Items:[]}".to_string(),
            })
        );
        assert_eq!(translation.get("a:A"), Some(&"A".to_string()));
    }

    #[test]
    fn test_variant_encodes_base_meta() {
        let base = base_table(&[("a", "mod:tank", 4)]);
        let variants = variant_table(&[("a:T", "{Fluid:\"lava\"}")]);
        let mut diagnostics = Diagnostics::new();

        let (table, _) = remap(&base, Some(&variants), &mut diagnostics);

        assert_eq!(
            table.get("T"),
            Some(&InputValue::Nbt {
                id: "mod:tank@4".to_string(),
                nbt: "{Fluid:\"lava\"}".to_string(),
            })
        );
    }

    #[test]
    fn test_colliding_suffixes_get_disambiguated() {
        let base = base_table(&[("a", "mod:a", 0), ("b", "mod:b", 0)]);
        let variants = variant_table(&[("a:A", "{X:1}"), ("b:A", "{X:2}")]);
        let mut diagnostics = Diagnostics::new();

        let (table, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert_eq!(translation.get("a:A"), Some(&"A".to_string()));
        assert_eq!(translation.get("b:A"), Some(&"A1".to_string()));
        assert_eq!(
            table.get("A"),
            Some(&InputValue::Nbt {
                id: "mod:a".to_string(),
                nbt: "{X:1}".to_string(),
            })
        );
        assert_eq!(
            table.get("A1"),
            Some(&InputValue::Nbt {
                id: "mod:b".to_string(),
                nbt: "{X:2}".to_string(),
            })
        );
    }

    #[test]
    fn test_suffix_colliding_with_base_symbol_never_overwrites() {
        let base = base_table(&[("a", "mod:a", 0), ("B", "mod:b", 0)]);
        let variants = variant_table(&[("a:B", "{X:1}")]);
        let mut diagnostics = Diagnostics::new();

        let (table, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert_eq!(table.get("B"), Some(&InputValue::Plain("mod:b".to_string())));
        assert_eq!(translation.get("a:B"), Some(&"B1".to_string()));
    }

    #[test]
    fn test_disambiguator_skips_occupied_fallbacks() {
        // The second "A" variant takes "A1", so the third has to count
        // past it to "A2".
        let base = base_table(&[("a", "mod:a", 0), ("b", "mod:b", 0), ("c", "mod:c", 0)]);
        let variants = variant_table(&[("a:A", "{X:1}"), ("b:A", "{X:2}"), ("c:A", "{X:3}")]);
        let mut diagnostics = Diagnostics::new();

        let (_, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert_eq!(translation.get("a:A"), Some(&"A".to_string()));
        assert_eq!(translation.get("b:A"), Some(&"A1".to_string()));
        assert_eq!(translation.get("c:A"), Some(&"A2".to_string()));
    }

    #[test]
    fn test_translation_map_is_injective() {
        let base = base_table(&[("a", "mod:a", 0), ("b", "mod:b", 0), ("c", "mod:c", 0)]);
        let variants = variant_table(&[
            ("a:A", "{X:1}"),
            ("b:A", "{X:2}"),
            ("c:A", "{X:3}"),
            ("a:b", "{X:4}"),
        ]);
        let mut diagnostics = Diagnostics::new();

        let (_, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert_eq!(translation.len(), 4);
        let assigned: HashSet<_> = translation.values().collect();
        assert_eq!(assigned.len(), translation.len());
    }

    #[test]
    fn test_variant_without_separator_skipped() {
        let base = base_table(&[("a", "mod:a", 0)]);
        let variants = variant_table(&[("aA", "{X:1}")]);
        let mut diagnostics = Diagnostics::new();

        let (table, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert_eq!(table.len(), 1);
        assert!(translation.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.iter().next().unwrap().contains("'aA'"));
    }

    #[test]
    fn test_variant_with_unknown_base_skipped() {
        let base = base_table(&[("a", "mod:a", 0)]);
        let variants = variant_table(&[("z:A", "{X:1}")]);
        let mut diagnostics = Diagnostics::new();

        let (table, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert_eq!(table.len(), 1);
        assert!(translation.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.iter().next().unwrap().contains("unknown base symbol 'z'"));
    }

    #[test]
    fn test_skipped_base_key_still_resolves_variants() {
        // A base entry rejected for key length stays in the legacy table,
        // so variants referencing it still convert.
        let base = base_table(&[("ab", "mod:ab", 0), ("c", "mod:c", 0)]);
        let variants = variant_table(&[("ab:A", "{X:1}")]);
        let mut diagnostics = Diagnostics::new();

        let (table, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1); // only the base-key skip
        assert_eq!(translation.get("ab:A"), Some(&"A".to_string()));
        assert_eq!(
            table.get("A"),
            Some(&InputValue::Nbt {
                id: "mod:ab".to_string(),
                nbt: "{X:1}".to_string(),
            })
        );
    }

    #[test]
    fn test_multi_character_suffix_uses_first_character() {
        let base = base_table(&[("a", "mod:a", 0)]);
        let variants = variant_table(&[("a:ABC", "{X:1}")]);
        let mut diagnostics = Diagnostics::new();

        let (_, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert_eq!(translation.get("a:ABC"), Some(&"A".to_string()));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.iter().next().unwrap().contains("multi-character suffix"));
    }

    #[test]
    fn test_empty_suffix_uses_placeholder() {
        let base = base_table(&[("a", "mod:a", 0)]);
        let variants = variant_table(&[("a:", "{X:1}")]);
        let mut diagnostics = Diagnostics::new();

        let (table, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert_eq!(translation.get("a:"), Some(&"X".to_string()));
        assert!(table.contains_key("X"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.iter().next().unwrap().contains("empty suffix"));
    }

    #[test]
    fn test_suffix_diagnostic_precedes_unknown_base_skip() {
        // A bad suffix is reported even when the variant is then dropped
        // for its unknown base.
        let base = base_table(&[("a", "mod:a", 0)]);
        let variants = variant_table(&[("z:ABC", "{X:1}")]);
        let mut diagnostics = Diagnostics::new();

        let (_, translation) = remap(&base, Some(&variants), &mut diagnostics);

        assert!(translation.is_empty());
        let messages: Vec<_> = diagnostics.iter().collect();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("multi-character suffix"));
        assert!(messages[1].contains("unknown base symbol"));
    }

    #[test]
    fn test_deterministic_for_same_input_order() {
        let base = base_table(&[("a", "mod:a", 0), ("b", "mod:b", 0)]);
        let variants = variant_table(&[("a:A", "{X:1}"), ("b:A", "{X:2}")]);

        let mut first_diag = Diagnostics::new();
        let first = remap(&base, Some(&variants), &mut first_diag);
        let mut second_diag = Diagnostics::new();
        let second = remap(&base, Some(&variants), &mut second_diag);

        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }
}
