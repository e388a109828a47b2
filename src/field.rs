//! Named top-level fields of a gene layout.

use std::fmt;

use crate::{fragment::Fragment, model::PartType};

/// Every named sub-field a layout slices out of the padded gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Class,
    Region,
    Tag,
    BodySkin,
    /// Seasonal marker; selects the first seasonal skin when it holds the reserved constant.
    Xmas,
    Pattern,
    Color,
    Eyes,
    Mouth,
    Ears,
    Horn,
    Back,
    Tail,
}

impl FieldName {
    pub const COUNT: usize = 13;

    pub const ALL: [FieldName; FieldName::COUNT] = [
        FieldName::Class,
        FieldName::Region,
        FieldName::Tag,
        FieldName::BodySkin,
        FieldName::Xmas,
        FieldName::Pattern,
        FieldName::Color,
        FieldName::Eyes,
        FieldName::Mouth,
        FieldName::Ears,
        FieldName::Horn,
        FieldName::Back,
        FieldName::Tail,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Class => "class",
            FieldName::Region => "region",
            FieldName::Tag => "tag",
            FieldName::BodySkin => "bodySkin",
            FieldName::Xmas => "xmas",
            FieldName::Pattern => "pattern",
            FieldName::Color => "color",
            FieldName::Eyes => "eyes",
            FieldName::Mouth => "mouth",
            FieldName::Ears => "ears",
            FieldName::Horn => "horn",
            FieldName::Back => "back",
            FieldName::Tail => "tail",
        }
    }
}

impl From<PartType> for FieldName {
    fn from(value: PartType) -> Self {
        match value {
            PartType::Eyes => FieldName::Eyes,
            PartType::Ears => FieldName::Ears,
            PartType::Mouth => FieldName::Mouth,
            PartType::Horn => FieldName::Horn,
            PartType::Back => FieldName::Back,
            PartType::Tail => FieldName::Tail,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named field: one contiguous bit range of the padded gene.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: FieldName,
    pub fragment: Fragment,
}

impl Field {
    pub const fn new(name: FieldName, offset_bits: usize, len_bits: usize) -> Self {
        Field {
            name,
            fragment: Fragment::new(offset_bits, len_bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_follows_all_order() {
        for (i, name) in FieldName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }

    #[test]
    fn test_part_fields() {
        for part_type in PartType::ALL {
            assert_eq!(FieldName::from(part_type).as_str(), part_type.as_str());
        }
    }
}
