use super::{ClassifyError, RecordId, Resolution, VcvClassifier};
use crate::vcv::date::DateParser;
use crate::vcv::element::Element;
use crate::vcv::matcher::SignificanceMatcher;
use crate::vcv::tags;

impl<D: DateParser, M: SignificanceMatcher> VcvClassifier<'_, D, M> {
    /// Resolve a legacy `InterpretedRecord` or pre-2.5 `IncludedRecord`.
    ///
    /// Unlike the classified path, the significance list is always present,
    /// possibly empty.
    pub(super) fn resolve_interpretations(
        &self,
        id: RecordId<'_>,
        variant: &Element,
    ) -> Result<Resolution, ClassifyError> {
        let mut significance = Vec::new();

        let interpretations = variant
            .child(tags::INTERPRETATIONS)
            .into_iter()
            .flat_map(|container| container.elements())
            .filter(|i| i.attribute(tags::TYPE) == Some(tags::CLINICAL_SIGNIFICANCE));

        for interpretation in interpretations {
            let description = interpretation
                .child_text(tags::DESCRIPTION)
                .map(str::to_lowercase);
            let explanation = interpretation
                .child_text(tags::EXPLANATION)
                .map(str::to_lowercase);
            if description.is_none() && explanation.is_none() {
                continue;
            }

            significance.extend(self.matched_terms(
                id,
                description.as_deref(),
                explanation.as_deref(),
            )?);
        }

        let raw_status = variant
            .child_text(tags::REVIEW_STATUS)
            .ok_or_else(|| id.missing_review_status())?;
        let review_status = self.lookup_review_status(id, raw_status)?;

        Ok(Resolution {
            review_status,
            significance: Some(significance),
        })
    }
}
