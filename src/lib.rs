//! # genecraft
//!
//! Decodes packed, hex-encoded creature gene codes into resolved trait records.
//!
//! A gene is an unsigned integer of up to 256 bits ([layout::Layout::Compact]) or
//! 512 bits ([layout::Layout::Extended]). It is zero-padded to its layout's width,
//! sliced into named fixed-width fields, and each field is resolved:
//! scalar fields through code tables, body parts through the trait name
//! dictionary and the part registry. A quality score summarizes how many
//! traits belong to the creature's own class.
//!
//! ## Example
//!
//! ```no_run
//! use genecraft::{GeneDecoder, PartRegistry, TraitDictionary};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let decoder = GeneDecoder::new(
//!         TraitDictionary::from_path("traits.json")?,
//!         PartRegistry::from_path("parts.json")?,
//!     );
//!
//!     let gene = decoder.decode("0x11c642400a028ca14a428c20cc011080c61180a0820180604233082")?;
//!     println!("{} {} {}", gene.class, gene.eyes.d.name, gene.quality_score);
//!     Ok(())
//! }
//! ```

pub mod bits;
pub mod code;
pub mod decoder;
pub mod errors;
pub mod field;
pub mod fragment;
pub mod hex;
pub mod layout;
pub mod model;
pub mod part;
pub mod quality;
pub mod registry;
pub mod scalar;
pub mod table;
pub mod traits;

pub use decoder::GeneDecoder;
pub use errors::{DecodeError, DictionaryError, ReadError};
pub use layout::{DecodedFields, Layout, LayoutChoice, parse_gene};
pub use model::{
    BodySkin, Class, Color, GeneRecord, Part, PartSkin, PartType, Pattern, Region, Tag,
    TraitRecord,
};
pub use registry::PartRegistry;
pub use traits::TraitDictionary;
