//! The decoding pipeline: hex -> [DecodedFields] -> [GeneRecord].

use tracing::debug;

use crate::{
    errors::DecodeError,
    layout::{DecodedFields, LayoutChoice, parse_gene},
    model::{GeneRecord, PartType},
    part::{SkinContext, decode_part},
    quality::quality_score,
    registry::PartRegistry,
    scalar,
    traits::TraitDictionary,
};

/// Decodes gene codes against a frozen trait dictionary and part registry.
///
/// Decoding only reads the dictionaries, so one decoder can be shared between
/// threads (e.g. behind an `Arc`) without locking.
#[derive(Debug, Clone)]
pub struct GeneDecoder {
    traits: TraitDictionary,
    registry: PartRegistry,
}

impl GeneDecoder {
    pub fn new(traits: TraitDictionary, registry: PartRegistry) -> Self {
        GeneDecoder { traits, registry }
    }

    pub fn registry(&self) -> &PartRegistry {
        &self.registry
    }

    /// Decodes a hex gene, choosing the layout from its bit length.
    pub fn decode(&self, hex: &str) -> Result<GeneRecord, DecodeError> {
        self.decode_with(hex, LayoutChoice::Auto)
    }

    pub fn decode_with(&self, hex: &str, choice: LayoutChoice) -> Result<GeneRecord, DecodeError> {
        let fields = parse_gene(hex, choice)?;
        self.decode_fields(&fields)
    }

    /// Resolves already extracted fields. Stops at the first failing field.
    pub fn decode_fields(&self, fields: &DecodedFields) -> Result<GeneRecord, DecodeError> {
        let class = scalar::class(fields)?;
        let region = scalar::region(fields)?;
        let tag = scalar::tag(fields)?;
        let body_skin = scalar::body_skin(fields)?;
        let pattern = scalar::pattern(fields);
        let color = scalar::color(fields, class)?;

        let context = SkinContext::from_fields(fields)?;
        let spec = fields.layout().spec();
        let part = |part_type: PartType| {
            decode_part(
                spec,
                part_type,
                fields.get(part_type.into()),
                context,
                &self.traits,
                &self.registry,
            )
        };

        let mut record = GeneRecord {
            class,
            region,
            tag,
            body_skin,
            pattern,
            color,
            eyes: part(PartType::Eyes)?,
            ears: part(PartType::Ears)?,
            horn: part(PartType::Horn)?,
            mouth: part(PartType::Mouth)?,
            back: part(PartType::Back)?,
            tail: part(PartType::Tail)?,
            quality_score: 0.0,
        };
        record.quality_score = quality_score(&record);

        debug!(
            layout = %fields.layout(),
            %class,
            %tag,
            quality = record.quality_score,
            "gene decoded"
        );

        Ok(record)
    }
}
