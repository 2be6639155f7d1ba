//! # MA Converter
//!
//! A Rust library for converting CompactMachines3 structure definitions
//! to the Machinery Assembler format.
//!
//! ## Overview
//!
//! This library takes a legacy CM3 structure JSON document and produces
//! an MA structure document. The `input-types` / `input-nbt` table pair
//! collapses into a single `inputs` table with a symbol per NBT variant,
//! and the per-cell shape grid is re-encoded to match, one string per
//! row. Anything lossy or surprising along the way is collected as a
//! diagnostic instead of failing the conversion.
//!
//! ## Quick Start
//!
//! ```
//! use ma_converter::convert_json_str;
//!
//! let (ma, diagnostics) = convert_json_str(
//!     r#"{
//!         "name": "compactmachines3:mini",
//!         "input-types": {"a": {"id": "minecraft:iron_block"}},
//!         "shape": [[["a", "a"], ["a", "a"]]]
//!     }"#,
//! )?;
//!
//! assert_eq!(ma.id, "mini");
//! assert!(diagnostics.is_empty());
//! assert_eq!(serde_json::to_string(&ma.shape)?, r#"[["aa","aa"]]"#);
//! # Ok::<(), ma_converter::ConvertError>(())
//! ```
//!
//! ## Converting files
//!
//! The [`files`] module mirrors the command-line workflow, converting
//! single documents or whole directories in one call:
//!
//! ```ignore
//! use ma_converter::{run, ConvertConfig};
//!
//! run(&ConvertConfig {
//!     input: "recipes/".into(),
//!     output: None,
//!     dry_run: false,
//! })?;
//! ```

pub mod error;
pub mod diagnostics;
pub mod document;
pub mod remap;
pub mod shape;
pub mod convert;
pub mod files;

// Re-export main types for convenience
pub use convert::{convert_structure, extract_id};
pub use diagnostics::Diagnostics;
pub use document::{BlockRef, Cm3Structure, InputTable, InputValue, MaStructure, NbtVariant};
pub use error::{ConvertError, Result};
pub use files::{convert_directory, convert_file, run, BatchSummary, ConvertConfig};
pub use remap::{remap, TranslationMap};
pub use shape::reencode;

/// Convert a CM3 JSON document string into its MA counterpart.
///
/// Returns the converted structure together with the diagnostics
/// collected while converting it.
pub fn convert_json_str(json: &str) -> Result<(MaStructure, Diagnostics)> {
    let cm3: Cm3Structure = serde_json::from_str(json)?;
    let mut diagnostics = Diagnostics::new();
    let ma = convert_structure(&cm3, &mut diagnostics);
    Ok((ma, diagnostics))
}
