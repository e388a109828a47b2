//! Gene quality: how many of a creature's traits belong to its own class.

use crate::model::{Class, GeneRecord, Part};

/// Weight of a dominant trait; six of them make up 76 of the 100 points.
pub const DOMINANT_WEIGHT: f64 = 76.0 / 6.0;
pub const RECESSIVE1_WEIGHT: f64 = 3.0;
pub const RECESSIVE2_WEIGHT: f64 = 1.0;

/// Contribution of one part to the score, unrounded.
pub fn part_quality(class: Class, part: &Part) -> f64 {
    let mut quality = 0.0;

    if part.d.class == class {
        quality += DOMINANT_WEIGHT;
    }
    if part.r1.class == class {
        quality += RECESSIVE1_WEIGHT;
    }
    if part.r2.class == class {
        quality += RECESSIVE2_WEIGHT;
    }

    quality
}

/// Score in `[0, 100]`, rounded half away from zero to two decimals.
///
/// Pattern and color are not scored; `record.quality_score` is ignored.
pub fn quality_score(record: &GeneRecord) -> f64 {
    let total: f64 = record
        .parts()
        .map(|(_, part)| part_quality(record.class, part))
        .sum();

    round2(total)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BodySkin, Color, PartType, Pattern, Region, Tag, TraitRecord};

    fn record(class: Class) -> TraitRecord {
        TraitRecord {
            id: format!("eyes-{class}"),
            class,
            special_genes: String::new(),
            part_type: PartType::Eyes,
            name: class.to_string(),
        }
    }

    fn part(d: Class, r1: Class, r2: Class) -> Part {
        Part {
            d: record(d),
            r1: record(r1),
            r2: record(r2),
            mystic: false,
        }
    }

    fn gene(class: Class, parts: [Part; 6]) -> GeneRecord {
        let [eyes, ears, horn, mouth, back, tail] = parts;
        GeneRecord {
            class,
            region: Region::Global,
            tag: Tag::None,
            body_skin: BodySkin::None,
            pattern: Pattern {
                d: "000001".to_string(),
                r1: "000001".to_string(),
                r2: "000001".to_string(),
            },
            color: Color {
                d: "ffffff".to_string(),
                r1: "ffffff".to_string(),
                r2: "ffffff".to_string(),
            },
            eyes,
            ears,
            horn,
            mouth,
            back,
            tail,
            quality_score: 0.0,
        }
    }

    #[test]
    fn test_pure_gene_scores_100() {
        for class in Class::ALL {
            let parts = std::array::from_fn(|_| part(class, class, class));
            assert_eq!(quality_score(&gene(class, parts)), 100.0);
        }
    }

    #[test]
    fn test_foreign_gene_scores_0() {
        let parts = std::array::from_fn(|_| part(Class::Bird, Class::Bug, Class::Plant));
        assert_eq!(quality_score(&gene(Class::Beast, parts)), 0.0);
    }

    #[test]
    fn test_mixed_gene() {
        use Class::*;
        let parts = [
            part(Beast, Beast, Plant),
            part(Plant, Beast, Aquatic),
            part(Plant, Bug, Beast),
            part(Reptile, Aquatic, Plant),
            part(Bird, Beast, Beast),
            part(Bug, Plant, Bird),
        ];
        assert_eq!(quality_score(&gene(Beast, parts)), 23.67);
    }

    #[test]
    fn test_recessives_only() {
        let parts = std::array::from_fn(|_| part(Class::Mech, Class::Dawn, Class::Dawn));
        assert_eq!(quality_score(&gene(Class::Dawn, parts)), 24.0);
    }

    #[test]
    fn test_part_quality() {
        assert_eq!(part_quality(Class::Bug, &part(Class::Bug, Class::Bird, Class::Bug)), DOMINANT_WEIGHT + 1.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round2(12.345_000_1), 12.35);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(15.666_666), 15.67);
    }
}
