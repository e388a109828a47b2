//! Resolvers for the scalar fields: class, region, tag, body skin, pattern and color.

use crate::{
    code::Code,
    errors::DecodeError,
    field::FieldName,
    layout::DecodedFields,
    model::{BodySkin, Class, Color, PartSkin, PartType, Pattern, Region, Tag},
    part::SkinSelector,
    table::CodeTable,
};

/// Class codes, shared by the creature class (4 or 5 bits wide) and part slot classes.
pub const CLASS_ENTRIES: &[(u64, Class)] = &[
    (0b0000, Class::Beast),
    (0b0001, Class::Bug),
    (0b0010, Class::Bird),
    (0b0011, Class::Plant),
    (0b0100, Class::Aquatic),
    (0b0101, Class::Reptile),
    (0b1000, Class::Mech),
    (0b1010, Class::Dusk),
    (0b1001, Class::Dawn),
];

pub const PART_CLASS_CODES: CodeTable<Class> = CodeTable::new("part class", 4, CLASS_ENTRIES);

pub const REGION_CODES: CodeTable<Region> =
    CodeTable::new("region", 5, &[(0b00000, Region::Global), (0b00001, Region::Japan)]);

pub const BODY_SKIN_CODES: CodeTable<BodySkin> =
    CodeTable::new("body skin", 4, &[(0b0000, BodySkin::None), (0b0001, BodySkin::Frosty)]);

/// Seasonal marker value that turns ambient part skins into [PartSkin::Xmas1].
pub const XMAS_MARKER: u64 = 0b0101_0101_0101;

const WHITE: &str = "ffffff";
const SILVER: &str = "D9D9D9";

static BEAST_COLORS: CodeTable<&str> = CodeTable::new(
    "color",
    4,
    &[
        (0b0000, WHITE),
        (0b0010, "ffec51"),
        (0b0011, "ffa12a"),
        (0b0100, "f0c66e"),
        (0b0110, "60afce"),
    ],
);

static BUG_COLORS: CodeTable<&str> = CodeTable::new(
    "color",
    4,
    &[
        (0b0000, WHITE),
        (0b0010, "ff7183"),
        (0b0011, "ff6d61"),
        (0b0100, "f74e4e"),
    ],
);

static BIRD_COLORS: CodeTable<&str> = CodeTable::new(
    "color",
    4,
    &[
        (0b0000, WHITE),
        (0b0010, "ff9ab8"),
        (0b0011, "ffb4bb"),
        (0b0100, "ff778e"),
    ],
);

static PLANT_COLORS: CodeTable<&str> = CodeTable::new(
    "color",
    4,
    &[
        (0b0000, WHITE),
        (0b0010, "ccef5e"),
        (0b0011, "efd636"),
        (0b0100, "c5ffd9"),
    ],
);

static AQUATIC_COLORS: CodeTable<&str> = CodeTable::new(
    "color",
    4,
    &[
        (0b0000, WHITE),
        (0b0010, "4cffdf"),
        (0b0011, "2de8f2"),
        (0b0100, "759edb"),
        (0b0110, "ff5a71"),
    ],
);

static REPTILE_COLORS: CodeTable<&str> = CodeTable::new(
    "color",
    4,
    &[
        (0b0000, WHITE),
        (0b0010, "fdbcff"),
        (0b0011, "ef93ff"),
        (0b0100, "f5e1ff"),
        (0b0110, "43e27d"),
    ],
);

// Mech, dusk and dawn share one silver swatch.
static SILVER_COLORS: CodeTable<&str> = CodeTable::new(
    "color",
    4,
    &[
        (0b0000, WHITE),
        (0b0010, SILVER),
        (0b0011, SILVER),
        (0b0100, SILVER),
        (0b0110, SILVER),
    ],
);

/// Color swatch table of a class, keyed by the low 4 bits of a color code.
pub fn color_table(class: Class) -> &'static CodeTable<&'static str> {
    match class {
        Class::Beast => &BEAST_COLORS,
        Class::Bug => &BUG_COLORS,
        Class::Bird => &BIRD_COLORS,
        Class::Plant => &PLANT_COLORS,
        Class::Aquatic => &AQUATIC_COLORS,
        Class::Reptile => &REPTILE_COLORS,
        Class::Mech | Class::Dusk | Class::Dawn => &SILVER_COLORS,
    }
}

pub fn class(fields: &DecodedFields) -> Result<Class, DecodeError> {
    fields
        .layout()
        .spec()
        .class_codes
        .lookup(fields.get(FieldName::Class))
}

pub fn region(fields: &DecodedFields) -> Result<Region, DecodeError> {
    REGION_CODES.lookup(fields.get(FieldName::Region))
}

pub fn body_skin(fields: &DecodedFields) -> Result<BodySkin, DecodeError> {
    BODY_SKIN_CODES.lookup(fields.get(FieldName::BodySkin))
}

/// Resolves the tag.
///
/// In layouts that infer the latent tag, all-zero tag bits combined with any
/// part whose skin selector is bionic yield [Tag::Agamogenesis].
pub fn tag(fields: &DecodedFields) -> Result<Tag, DecodeError> {
    let spec = fields.layout().spec();
    let code = fields.get(FieldName::Tag);

    if spec.infers_latent_tag && code.is_zero() && has_bionic_part(fields) {
        return Ok(Tag::Agamogenesis);
    }

    spec.tag_codes.lookup(code)
}

/// Unassigned selectors count as not bionic; the part decoder reports them.
fn has_bionic_part(fields: &DecodedFields) -> bool {
    let spec = fields.layout().spec();

    PartType::ALL.into_iter().any(|part_type| {
        let skin = spec.part.skin.extract(fields.get(part_type.into()));
        spec.skin_selectors.lookup(skin) == Ok(SkinSelector::Variant(PartSkin::Bionic))
    })
}

pub fn pattern(fields: &DecodedFields) -> Pattern {
    let [d, r1, r2] = fields.get(FieldName::Pattern).thirds();
    Pattern {
        d: d.to_string(),
        r1: r1.to_string(),
        r2: r2.to_string(),
    }
}

pub fn color(fields: &DecodedFields, class: Class) -> Result<Color, DecodeError> {
    let table = color_table(class);
    let swatch = |code: Code| table.lookup(code.low(4)).map(str::to_string);

    let [d, r1, r2] = fields.get(FieldName::Color).thirds();
    Ok(Color {
        d: swatch(d)?,
        r1: swatch(r1)?,
        r2: swatch(r2)?,
    })
}
