//! Domain types produced by decoding: classes, regions, skins, parts and the final [GeneRecord].

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the nine species classes. Applies both to a creature and to each of its traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    Beast,
    Bug,
    Bird,
    Plant,
    Aquatic,
    Reptile,
    Mech,
    Dusk,
    Dawn,
}

impl Class {
    pub const ALL: [Class; 9] = [
        Class::Beast,
        Class::Bug,
        Class::Bird,
        Class::Plant,
        Class::Aquatic,
        Class::Reptile,
        Class::Mech,
        Class::Dusk,
        Class::Dawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Class::Beast => "beast",
            Class::Bug => "bug",
            Class::Bird => "bird",
            Class::Plant => "plant",
            Class::Aquatic => "aquatic",
            Class::Reptile => "reptile",
            Class::Mech => "mech",
            Class::Dusk => "dusk",
            Class::Dawn => "dawn",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Region of origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Global,
    Japan,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Global => "global",
            Region::Japan => "japan",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title attached to special creatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    None,
    Origin,
    Meo1,
    Meo2,
    /// Latent-trait tag. No tag bits encode it; it is inferred from bionic part skins.
    Agamogenesis,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::None => "none",
            Tag::Origin => "origin",
            Tag::Meo1 => "meo1",
            Tag::Meo2 => "meo2",
            Tag::Agamogenesis => "agamogenesis",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Special skin of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySkin {
    None,
    Frosty,
}

impl fmt::Display for BodySkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodySkin::None => f.write_str("none"),
            BodySkin::Frosty => f.write_str("frosty"),
        }
    }
}

/// Skin variant a trait name can be overridden for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartSkin {
    Global,
    Japan,
    Xmas1,
    Xmas2,
    Mystic,
    Bionic,
}

impl PartSkin {
    /// Key of this skin in the trait dictionary.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartSkin::Global => "global",
            PartSkin::Japan => "japan",
            PartSkin::Xmas1 => "xmas1",
            PartSkin::Xmas2 => "xmas2",
            PartSkin::Mystic => "mystic",
            PartSkin::Bionic => "bionic",
        }
    }
}

impl fmt::Display for PartSkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six body locations carrying a [Part].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Eyes,
    Ears,
    Mouth,
    Horn,
    Back,
    Tail,
}

impl PartType {
    pub const ALL: [PartType; 6] = [
        PartType::Eyes,
        PartType::Ears,
        PartType::Horn,
        PartType::Mouth,
        PartType::Back,
        PartType::Tail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Eyes => "eyes",
            PartType::Ears => "ears",
            PartType::Mouth => "mouth",
            PartType::Horn => "horn",
            PartType::Back => "back",
            PartType::Tail => "tail",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved identity of one expressed or latent trait, as stored in the part registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitRecord {
    #[serde(rename = "partId")]
    pub id: String,
    pub class: Class,
    #[serde(default)]
    pub special_genes: String,
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub name: String,
}

/// One body location: dominant and two recessive traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub d: TraitRecord,
    pub r1: TraitRecord,
    pub r2: TraitRecord,
    /// True when the dominant skin resolves to [PartSkin::Mystic].
    pub mystic: bool,
}

/// Pattern genes as raw binary codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub d: String,
    pub r1: String,
    pub r2: String,
}

/// Color genes as lowercase hex RGB strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub d: String,
    pub r1: String,
    pub r2: String,
}

/// Fully decoded gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneRecord {
    pub class: Class,
    pub region: Region,
    pub tag: Tag,
    pub body_skin: BodySkin,
    pub pattern: Pattern,
    pub color: Color,
    pub eyes: Part,
    pub ears: Part,
    pub horn: Part,
    pub mouth: Part,
    pub back: Part,
    pub tail: Part,
    pub quality_score: f64,
}

impl GeneRecord {
    pub fn part(&self, part_type: PartType) -> &Part {
        match part_type {
            PartType::Eyes => &self.eyes,
            PartType::Ears => &self.ears,
            PartType::Mouth => &self.mouth,
            PartType::Horn => &self.horn,
            PartType::Back => &self.back,
            PartType::Tail => &self.tail,
        }
    }

    /// The six parts in [PartType::ALL] order.
    pub fn parts(&self) -> impl Iterator<Item = (PartType, &Part)> {
        PartType::ALL.into_iter().map(|t| (t, self.part(t)))
    }
}
