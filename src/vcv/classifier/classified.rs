use super::{ClassifyError, RecordId, Resolution, VcvClassifier};
use crate::vcv::date::DateParser;
use crate::vcv::element::Element;
use crate::vcv::matcher::SignificanceMatcher;
use crate::vcv::models::{ClassificationEntry, ClassificationKind};
use crate::vcv::review_status::ReviewStatus;
use crate::vcv::tags;

impl<D: DateParser, M: SignificanceMatcher> VcvClassifier<'_, D, M> {
    /// Resolve the `Classifications` container of a `ClassifiedRecord` or a
    /// transitional `IncludedRecord`.
    pub(super) fn resolve_classifications(
        &self,
        id: RecordId<'_>,
        variant: &Element,
    ) -> Result<Resolution, ClassifyError> {
        let classifications = variant
            .child(tags::CLASSIFICATIONS)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| id.missing_classifications())?;

        let typed: Vec<ClassificationEntry<'_>> = ClassificationKind::TYPED
            .iter()
            .filter_map(|&kind| {
                classifications
                    .child(kind.tag())
                    .filter(|e| !e.is_empty())
                    .map(|e| ClassificationEntry::from_element(kind, e))
            })
            .collect();

        match typed.as_slice() {
            [] => {
                let entry = classifications
                    .child(tags::NO_CLASSIFICATION)
                    .filter(|e| !e.is_empty())
                    .map(|e| ClassificationEntry::from_element(ClassificationKind::NoClassification, e))
                    .ok_or_else(|| id.unrecognized_type())?;
                self.resolve_single(id, &entry)
            }
            [entry] => self.resolve_single(id, entry),
            entries => self.resolve_multiple(id, entries),
        }
    }

    fn resolve_single(
        &self,
        id: RecordId<'_>,
        entry: &ClassificationEntry<'_>,
    ) -> Result<Resolution, ClassifyError> {
        let review_status = self.entry_review_status(id, entry)?;
        let significance = self.entry_significance(id, entry.description)?;
        Ok(Resolution {
            review_status,
            significance,
        })
    }

    /// Highest review status across kinds; terms concatenated in kind order
    fn resolve_multiple(
        &self,
        id: RecordId<'_>,
        entries: &[ClassificationEntry<'_>],
    ) -> Result<Resolution, ClassifyError> {
        let mut statuses = Vec::with_capacity(entries.len());
        let mut terms = Vec::new();

        for entry in entries {
            statuses.push(self.entry_review_status(id, entry)?);
            if let Some(found) = self.entry_significance(id, entry.description)? {
                terms.extend(found);
            }
        }

        Ok(Resolution {
            review_status: ReviewStatus::highest(statuses),
            significance: if terms.is_empty() { None } else { Some(terms) },
        })
    }

    fn entry_review_status(
        &self,
        id: RecordId<'_>,
        entry: &ClassificationEntry<'_>,
    ) -> Result<ReviewStatus, ClassifyError> {
        let raw = entry.review_status.ok_or_else(|| {
            ClassifyError::MissingClassificationReviewStatus {
                accession: id.accession.to_string(),
                version: id.version.to_string(),
                kind: entry.kind,
            }
        })?;
        self.lookup_review_status(id, raw)
    }

    /// Significance of one entry; `None` means the entry offered no opinion
    pub(super) fn entry_significance(
        &self,
        id: RecordId<'_>,
        description: Option<&str>,
    ) -> Result<Option<Vec<String>>, ClassifyError> {
        let description = match description {
            Some(text) if !text.trim().is_empty() => text.to_lowercase(),
            _ => return Ok(None),
        };

        let terms = self.matched_terms(id, Some(&description), None)?;
        Ok(if terms.is_empty() { None } else { Some(terms) })
    }
}
