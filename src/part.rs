//! Body part decoding: skin context plus the dominant / recessive triplet.

use std::fmt;

use tracing::trace;

use crate::{
    code::Code,
    errors::DecodeError,
    field::FieldName,
    layout::{DecodedFields, LayoutSpec, SlotSpec},
    model::{Part, PartSkin, PartType, Region, TraitRecord},
    registry::PartRegistry,
    scalar::{self, PART_CLASS_CODES, XMAS_MARKER},
    traits::TraitDictionary,
};

/// Position inside a part that a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Skin,
    Dominant,
    Recessive1,
    Recessive2,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Skin => f.write_str("skin"),
            Slot::Dominant => f.write_str("d"),
            Slot::Recessive1 => f.write_str("r1"),
            Slot::Recessive2 => f.write_str("r2"),
        }
    }
}

/// Meaning of a part's skin selector bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinSelector {
    /// Use the gene-wide skin: seasonal if marked, otherwise the region's.
    Ambient,
    Variant(PartSkin),
}

/// Gene-wide inputs to skin resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinContext {
    pub region: Region,
    /// Seasonal marker holds the reserved constant.
    pub seasonal: bool,
}

impl SkinContext {
    pub fn from_fields(fields: &DecodedFields) -> Result<Self, DecodeError> {
        let marker = fields.get(FieldName::Xmas);
        Ok(SkinContext {
            region: scalar::region(fields)?,
            seasonal: marker.width() == 12 && marker.value() == XMAS_MARKER,
        })
    }

    pub fn ambient(&self) -> PartSkin {
        if self.seasonal {
            return PartSkin::Xmas1;
        }

        match self.region {
            Region::Global => PartSkin::Global,
            Region::Japan => PartSkin::Japan,
        }
    }

    pub fn resolve(&self, selector: SkinSelector) -> PartSkin {
        match selector {
            SkinSelector::Ambient => self.ambient(),
            SkinSelector::Variant(skin) => skin,
        }
    }
}

fn in_slot(part: PartType, slot: Slot) -> impl FnOnce(DecodeError) -> DecodeError {
    move |source| DecodeError::Part {
        part,
        slot,
        source: Box::new(source),
    }
}

/// Decodes one part field.
///
/// Only the dominant slot carries a skin selector; both recessive slots are
/// resolved with the ambient skin.
pub fn decode_part(
    spec: &LayoutSpec,
    part_type: PartType,
    code: Code,
    context: SkinContext,
    traits: &TraitDictionary,
    registry: &PartRegistry,
) -> Result<Part, DecodeError> {
    let selector = spec
        .skin_selectors
        .lookup(spec.part.skin.extract(code))
        .map_err(in_slot(part_type, Slot::Skin))?;

    let skin = context.resolve(selector);
    let ambient = context.ambient();

    let resolve = |slot: Slot, slot_spec: &SlotSpec, skin: PartSkin| {
        resolve_slot(slot_spec, part_type, code, skin, traits, registry)
            .map_err(in_slot(part_type, slot))
    };

    let d = resolve(Slot::Dominant, &spec.part.dominant, skin)?;
    let r1 = resolve(Slot::Recessive1, &spec.part.recessive1, ambient)?;
    let r2 = resolve(Slot::Recessive2, &spec.part.recessive2, ambient)?;

    trace!(part = %part_type, %skin, d = %d.id, r1 = %r1.id, r2 = %r2.id, "part decoded");

    Ok(Part {
        d,
        r1,
        r2,
        mystic: skin == PartSkin::Mystic,
    })
}

fn resolve_slot(
    slot_spec: &SlotSpec,
    part_type: PartType,
    code: Code,
    skin: PartSkin,
    traits: &TraitDictionary,
    registry: &PartRegistry,
) -> Result<TraitRecord, DecodeError> {
    let class = PART_CLASS_CODES.lookup(slot_spec.class.extract(code))?;
    let trait_code = slot_spec.trait_code.extract(code).to_string();
    let name = traits.resolve(class, part_type, &trait_code, skin)?;
    registry.resolve(part_type, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layout::Layout,
        model::{Class, Region},
    };

    fn fixtures() -> (TraitDictionary, PartRegistry) {
        (
            TraitDictionary::from_json_str(include_str!("../tests/fixtures/traits.json")).unwrap(),
            PartRegistry::from_json_str(include_str!("../tests/fixtures/parts.json")).unwrap(),
        )
    }

    const GLOBAL: SkinContext = SkinContext {
        region: Region::Global,
        seasonal: false,
    };

    fn decode_compact(part_type: PartType, digits: &str, context: SkinContext) -> Result<Part, DecodeError> {
        let (traits, registry) = fixtures();
        decode_part(
            Layout::Compact.spec(),
            part_type,
            Code::from_binary(digits).unwrap(),
            context,
            &traits,
            &registry,
        )
    }

    #[test]
    fn test_ambient_skin() {
        assert_eq!(GLOBAL.ambient(), PartSkin::Global);
        let japan = SkinContext {
            region: Region::Japan,
            seasonal: false,
        };
        assert_eq!(japan.ambient(), PartSkin::Japan);
        let xmas = SkinContext {
            region: Region::Japan,
            seasonal: true,
        };
        assert_eq!(xmas.ambient(), PartSkin::Xmas1);
        assert_eq!(xmas.resolve(SkinSelector::Variant(PartSkin::Mystic)), PartSkin::Mystic);
    }

    #[test]
    fn test_decode_part() {
        let part = decode_compact(PartType::Eyes, "00000000101000000010100011001010", GLOBAL).unwrap();
        assert_eq!(part.d.id, "eyes-chubby");
        assert_eq!(part.d.class, Class::Beast);
        assert_eq!(part.r1.id, "eyes-chubby");
        assert_eq!(part.r2.id, "eyes-blossom");
        assert_eq!(part.r2.class, Class::Plant);
        assert!(!part.mystic);
    }

    #[test]
    fn test_decode_part_unknown_trait() {
        // Dusk eyes 001010 is not in the dictionary.
        let err =
            decode_compact(PartType::Eyes, "00101000101000000101100011001010", GLOBAL).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Part {
                part: PartType::Eyes,
                slot: Slot::Dominant,
                source: Box::new(DecodeError::TraitNotFound {
                    class: Class::Dusk,
                    part_type: PartType::Eyes,
                    code: "001010".to_string(),
                    skin: PartSkin::Global,
                }),
            }
        );
    }

    #[test]
    fn test_decode_part_unknown_recessive_class() {
        let err =
            decode_compact(PartType::Eyes, "00000000101011110010100011001010", GLOBAL).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Part {
                slot: Slot::Recessive1,
                ..
            }
        ));
        assert_eq!(
            *err.root_cause(),
            DecodeError::UnknownValue {
                field: "part class",
                code: "1111".to_string()
            }
        );
    }

    #[test]
    fn test_mystic_dominant_keeps_ambient_recessives() {
        let part = decode_compact(PartType::Eyes, "11000000101000000010100000001010", GLOBAL).unwrap();
        assert!(part.mystic);
        assert_eq!(part.d.name, "Chubby Mystic");
        assert_eq!(part.d.special_genes, "mystic");
        assert_eq!(part.r1.name, "Chubby");
        assert_eq!(part.r2.name, "Chubby");
    }

    #[test]
    fn test_seasonal_variants() {
        let xmas2 = decode_compact(PartType::Eyes, "10000000101000000010100000001010", GLOBAL).unwrap();
        assert_eq!(xmas2.d.name, "Jingle Chubby");
        assert!(!xmas2.mystic);

        let seasonal = SkinContext {
            region: Region::Global,
            seasonal: true,
        };
        let xmas1 = decode_compact(PartType::Eyes, "00000000101000000010100000001010", seasonal).unwrap();
        assert_eq!(xmas1.d.name, "Frosty Chubby");
        assert_eq!(xmas1.r1.name, "Frosty Chubby");
    }

    #[test]
    fn test_japan_region_with_global_fallback() {
        let japan = SkinContext {
            region: Region::Japan,
            seasonal: false,
        };
        // Beast eyes 001010 has a japan name; plant eyes 001010 only a global one.
        let part = decode_compact(PartType::Eyes, "00000000101000110010100000001010", japan).unwrap();
        assert_eq!(part.d.name, "Kotaro");
        assert_eq!(part.r1.name, "Blossom");
        assert_eq!(part.r2.name, "Kotaro");
    }

    #[test]
    fn test_compact_bionic_selector() {
        let part = decode_compact(PartType::Eyes, "01000000101000000010100000001010", GLOBAL).unwrap();
        assert_eq!(part.d.name, "Chubby Bionic");
        assert!(!part.mystic);
    }

    #[test]
    fn test_extended_unknown_skin_selector() {
        let (traits, registry) = fixtures();
        let code = Code::new(0b0100 << 60, 64);
        let err = decode_part(
            Layout::Extended.spec(),
            PartType::Tail,
            code,
            GLOBAL,
            &traits,
            &registry,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::Part {
                part: PartType::Tail,
                slot: Slot::Skin,
                source: Box::new(DecodeError::UnknownValue {
                    field: "part skin",
                    code: "0100".to_string()
                }),
            }
        );
    }

    #[test]
    fn test_registry_miss_is_attributed_to_slot() {
        let (traits, _) = fixtures();
        let err = decode_part(
            Layout::Compact.spec(),
            PartType::Eyes,
            Code::from_binary("00000000101000000010100000001010").unwrap(),
            GLOBAL,
            &traits,
            &PartRegistry::default(),
        )
        .unwrap_err();
        assert_eq!(
            *err.root_cause(),
            DecodeError::PartRegistryMiss("eyes-chubby".to_string())
        );
    }
}
