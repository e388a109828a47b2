//! The two gene bit layouts and the extraction of named fields from a hex gene.
//!
//! Both layouts are described by one [LayoutSpec] shape (field offsets, part
//! sub-offsets and the code tables that differ between them) so a single
//! decoding algorithm serves both.

use std::fmt;

use tracing::debug;

use crate::{
    bits,
    code::Code,
    errors::{DecodeError, ReadError},
    field::{Field, FieldName},
    fragment::Fragment,
    hex,
    model::{Class, PartSkin, Tag},
    part::SkinSelector,
    scalar,
    table::CodeTable,
};

/// Which bit layout a gene is encoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// 256-bit encoding.
    Compact,
    /// 512-bit encoding.
    Extended,
}

/// How the layout of an input is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutChoice {
    /// Smallest layout the parsed integer fits.
    #[default]
    Auto,
    Compact,
    Extended,
}

impl Layout {
    pub fn spec(self) -> &'static LayoutSpec {
        match self {
            Layout::Compact => &COMPACT,
            Layout::Extended => &EXTENDED,
        }
    }

    pub fn total_bits(self) -> usize {
        self.spec().total_bits
    }

    /// Smallest layout that holds a value of `bits` significant bits.
    pub fn for_bit_length(bits: usize) -> Result<Layout, DecodeError> {
        [Layout::Compact, Layout::Extended]
            .into_iter()
            .find(|layout| bits <= layout.total_bits())
            .ok_or(DecodeError::Layout {
                layout: Layout::Extended,
                bits,
                width: Layout::Extended.total_bits(),
            })
    }

    /// Slices an already padded, MSB-first gene buffer into named fields.
    pub fn parse(self, data: &[u8]) -> Result<DecodedFields, ReadError> {
        let spec = self.spec();
        if data.len() * 8 < spec.total_bits {
            return Err(ReadError::PacketTooShort {
                bits: data.len() * 8,
            });
        }

        let mut codes = [Code::default(); FieldName::COUNT];
        for field in &spec.fields {
            codes[field.name.index()] = field.fragment.read(data)?;
        }

        Ok(DecodedFields {
            layout: self,
            codes,
        })
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Compact => f.write_str("compact"),
            Layout::Extended => f.write_str("extended"),
        }
    }
}

/// Parses a hex gene, pads it to the chosen layout's width and extracts its fields.
pub fn parse_gene(input: &str, choice: LayoutChoice) -> Result<DecodedFields, DecodeError> {
    let bytes = hex::parse_hex(input)?;
    let bits = bits::bit_length(&bytes);

    let layout = match choice {
        LayoutChoice::Auto => Layout::for_bit_length(bits)?,
        LayoutChoice::Compact => Layout::Compact,
        LayoutChoice::Extended => Layout::Extended,
    };

    let width = layout.total_bits();
    let padded = bits::left_pad(&bytes, width).ok_or(DecodeError::Layout {
        layout,
        bits,
        width,
    })?;

    debug!(%layout, bits, ?choice, "layout selected");

    Ok(layout.parse(&padded)?)
}

/// Immutable result of slicing one gene: every named field as an exact-width [Code].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFields {
    layout: Layout,
    codes: [Code; FieldName::COUNT],
}

impl DecodedFields {
    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn get(&self, name: FieldName) -> Code {
        self.codes[name.index()]
    }
}

/// Class code and trait code of one part slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotSpec {
    pub class: Fragment,
    pub trait_code: Fragment,
}

/// Sub-offsets inside a part field. Only the dominant slot has a skin selector.
#[derive(Debug, Clone, Copy)]
pub struct PartSpec {
    pub skin: Fragment,
    pub dominant: SlotSpec,
    pub recessive1: SlotSpec,
    pub recessive2: SlotSpec,
}

/// Everything that differs between the two layouts.
#[derive(Debug)]
pub struct LayoutSpec {
    pub total_bits: usize,
    pub fields: [Field; FieldName::COUNT],
    pub part: PartSpec,
    pub class_codes: CodeTable<Class>,
    pub tag_codes: CodeTable<Tag>,
    pub skin_selectors: CodeTable<SkinSelector>,
    /// Zero tag bits plus a bionic part skin yield [Tag::Agamogenesis].
    pub infers_latent_tag: bool,
}

const fn slot(class_offset: usize, trait_offset: usize) -> SlotSpec {
    SlotSpec {
        class: Fragment::new(class_offset, 4),
        trait_code: Fragment::new(trait_offset, 6),
    }
}

static COMPACT: LayoutSpec = LayoutSpec {
    total_bits: 256,
    // 4..8 is reserved.
    fields: [
        Field::new(FieldName::Class, 0, 4),
        Field::new(FieldName::Region, 8, 5),
        Field::new(FieldName::Tag, 13, 5),
        Field::new(FieldName::BodySkin, 18, 4),
        Field::new(FieldName::Xmas, 22, 12),
        Field::new(FieldName::Pattern, 34, 18),
        Field::new(FieldName::Color, 52, 12),
        Field::new(FieldName::Eyes, 64, 32),
        Field::new(FieldName::Mouth, 96, 32),
        Field::new(FieldName::Ears, 128, 32),
        Field::new(FieldName::Horn, 160, 32),
        Field::new(FieldName::Back, 192, 32),
        Field::new(FieldName::Tail, 224, 32),
    ],
    part: PartSpec {
        skin: Fragment::new(0, 2),
        dominant: slot(2, 6),
        recessive1: slot(12, 16),
        recessive2: slot(22, 26),
    },
    class_codes: CodeTable::new("class", 4, scalar::CLASS_ENTRIES),
    tag_codes: CodeTable::new(
        "tag",
        5,
        &[
            (0b00000, Tag::None),
            (0b00001, Tag::Origin),
            (0b00011, Tag::Meo1),
            (0b00100, Tag::Meo2),
        ],
    ),
    skin_selectors: CodeTable::new(
        "part skin",
        2,
        &[
            (0b00, SkinSelector::Ambient),
            (0b01, SkinSelector::Variant(PartSkin::Bionic)),
            (0b10, SkinSelector::Variant(PartSkin::Xmas2)),
            (0b11, SkinSelector::Variant(PartSkin::Mystic)),
        ],
    ),
    infers_latent_tag: false,
};

static EXTENDED: LayoutSpec = LayoutSpec {
    total_bits: 512,
    // 5..13 and 94..128 are reserved.
    fields: [
        Field::new(FieldName::Class, 0, 5),
        Field::new(FieldName::Region, 13, 5),
        Field::new(FieldName::Tag, 18, 15),
        Field::new(FieldName::BodySkin, 33, 4),
        Field::new(FieldName::Xmas, 37, 12),
        Field::new(FieldName::Pattern, 49, 27),
        Field::new(FieldName::Color, 76, 18),
        Field::new(FieldName::Eyes, 128, 64),
        Field::new(FieldName::Mouth, 192, 64),
        Field::new(FieldName::Ears, 256, 64),
        Field::new(FieldName::Horn, 320, 64),
        Field::new(FieldName::Back, 384, 64),
        Field::new(FieldName::Tail, 448, 64),
    ],
    part: PartSpec {
        skin: Fragment::new(0, 4),
        dominant: slot(8, 14),
        recessive1: slot(24, 30),
        recessive2: slot(40, 46),
    },
    // Same values as the 4-bit codes, one bit wider.
    class_codes: CodeTable::new("class", 5, scalar::CLASS_ENTRIES),
    tag_codes: CodeTable::new(
        "tag",
        15,
        &[
            (0, Tag::None),
            (1, Tag::Origin),
            (2, Tag::Meo1),
            (3, Tag::Meo2),
        ],
    ),
    skin_selectors: CodeTable::new(
        "part skin",
        4,
        &[
            (0b0000, SkinSelector::Ambient),
            (0b0001, SkinSelector::Variant(PartSkin::Bionic)),
            (0b0010, SkinSelector::Variant(PartSkin::Xmas2)),
            (0b0011, SkinSelector::Variant(PartSkin::Mystic)),
        ],
    ),
    infers_latent_tag: true,
};
