//! Integration tests for vcv-digest
//!
//! These tests run whole release documents through the streamer, the
//! classifier and the JSON Lines converter.

use std::fs;
use std::io::{BufReader, Cursor};

use tempfile::tempdir;
use vcv_digest::vcv::{
    ClassifyError, ConversionError, ReviewStatus, VcvClassifier, VcvConverter, VcvItem, VcvItems,
    VcvStreamer, Vocabulary,
};

/// 2024-01-31T00:00:00Z
const DATE_MILLIS: i64 = 1_706_659_200_000;

/// One record of every shape, plus an empty placeholder
const RELEASE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ClinVarVariationRelease xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" ReleaseDate="2024-02-01">
  <VariationArchive VariationID="1" Accession="VCV000000001" Version="4" DateLastUpdated="2024-01-31" RecordType="classified">
    <ClassifiedRecord>
      <SimpleAllele AlleleID="15040" VariationID="1">
        <GeneList>
          <Gene Symbol="BRCA1"/>
        </GeneList>
      </SimpleAllele>
      <Classifications>
        <GermlineClassification DateLastEvaluated="2023-11-02">
          <ReviewStatus>criteria provided, single submitter</ReviewStatus>
          <Description>Pathogenic</Description>
        </GermlineClassification>
        <SomaticClinicalImpact>
          <ReviewStatus>reviewed by expert panel</ReviewStatus>
          <Description>Tier I - Strong</Description>
        </SomaticClinicalImpact>
      </Classifications>
    </ClassifiedRecord>
  </VariationArchive>
  <VariationArchive VariationID="2" Accession="VCV000000002" Version="1" DateLastUpdated="2024-01-31" RecordType="classified"/>
  <VariationArchive VariationID="3" Accession="VCV000000003" Version="2" DateLastUpdated="2024-01-31">
    <InterpretedRecord>
      <ReviewStatus>criteria provided, conflicting interpretations</ReviewStatus>
      <Interpretations>
        <Interpretation Type="Clinical significance" DateLastEvaluated="2022-06-30">
          <Description>Conflicting interpretations of pathogenicity</Description>
          <Explanation DataSource="ClinVar" Type="public">Pathogenic(1); Uncertain significance(2)</Explanation>
        </Interpretation>
      </Interpretations>
    </InterpretedRecord>
  </VariationArchive>
  <VariationArchive VariationID="4" Accession="VCV000000004" Version="1" DateLastUpdated="2024-01-31" RecordType="included">
    <IncludedRecord>
      <ReviewStatus>no classification provided</ReviewStatus>
      <Interpretations>
        <Interpretation Type="Clinical significance">
          <Description>not provided</Description>
        </Interpretation>
      </Interpretations>
    </IncludedRecord>
  </VariationArchive>
  <VariationArchive VariationID="5" Accession="VCV000000005" Version="3" DateLastUpdated="2024-01-31" RecordType="included">
    <IncludedRecord>
      <Classifications>
        <NoClassification>
          <ReviewStatus>no classifications from unflagged records</ReviewStatus>
          <Description>No classifications from unflagged records</Description>
        </NoClassification>
      </Classifications>
    </IncludedRecord>
  </VariationArchive>
</ClinVarVariationRelease>
"#;

fn streamer(xml: &str) -> VcvStreamer<BufReader<Cursor<Vec<u8>>>> {
    VcvStreamer::new(BufReader::new(Cursor::new(xml.as_bytes().to_vec())))
}

fn classify_all(xml: &str) -> Vec<VcvItem> {
    let vocabulary = Vocabulary::builtin();
    let classifier = VcvClassifier::new(&vocabulary);
    VcvItems::new(streamer(xml), &classifier)
        .collect::<Result<_, _>>()
        .unwrap()
}

fn terms(item: &VcvItem) -> Option<Vec<&str>> {
    item.significance()
        .map(|terms| terms.iter().map(String::as_str).collect())
}

#[test]
fn test_every_record_shape() {
    let items = classify_all(RELEASE);
    let accessions: Vec<&str> = items.iter().map(VcvItem::accession).collect();
    assert_eq!(
        accessions,
        vec!["VCV000000001", "VCV000000003", "VCV000000004", "VCV000000005"]
    );
    assert!(items.iter().all(|i| i.date() == DATE_MILLIS));

    // Germline plus somatic: highest status, terms in kind order
    assert_eq!(items[0].version(), "4");
    assert_eq!(items[0].review_status(), ReviewStatus::ExpertPanel);
    assert_eq!(terms(&items[0]), Some(vec!["pathogenic", "tier_i_strong"]));

    // Conflicting legacy record expands its explanation
    assert_eq!(items[1].review_status(), ReviewStatus::ConflictingInterpretations);
    assert_eq!(
        terms(&items[1]),
        Some(vec![
            "conflicting_interpretations",
            "pathogenic",
            "uncertain_significance"
        ])
    );

    // Included record without Classifications uses the legacy path
    assert_eq!(items[2].review_status(), ReviewStatus::NoAssertion);
    assert_eq!(terms(&items[2]), Some(vec!["not_provided"]));

    // Transitional included record with only NoClassification
    assert_eq!(items[3].review_status(), ReviewStatus::NoAssertion);
    assert_eq!(terms(&items[3]), Some(vec!["not_provided"]));
}

#[test]
fn test_single_populated_record_and_placeholder() {
    let xml = r#"<ClinVarVariationRelease>
  <VariationArchive Accession="VCV000000010" Version="1" DateLastUpdated="2024-01-31">
    <ClassifiedRecord>
      <Classifications>
        <GermlineClassification>
          <ReviewStatus>criteria provided, multiple submitters, no conflicts</ReviewStatus>
          <Description>Likely benign</Description>
        </GermlineClassification>
      </Classifications>
    </ClassifiedRecord>
  </VariationArchive>
  <VariationArchive Accession="VCV000000011" Version="1" DateLastUpdated="2024-01-31"></VariationArchive>
</ClinVarVariationRelease>"#;

    let items = classify_all(xml);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].accession(), "VCV000000010");
    assert_eq!(items[0].review_status(), ReviewStatus::MultipleSubmittersNoConflict);
    assert_eq!(terms(&items[0]), Some(vec!["likely_benign"]));
}

#[test]
fn test_convert_file_to_json_lines() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("release.xml");
    let output = dir.path().join("release.jsonl");
    fs::write(&input, RELEASE).unwrap();

    let vocabulary = Vocabulary::builtin();
    let stats = VcvConverter::new(&vocabulary).convert(&input, &output).unwrap();

    assert_eq!(stats.records_read, 5);
    assert_eq!(stats.items_written, 4);
    assert_eq!(stats.empty_records, 1);
    assert_eq!(stats.source_file_size, RELEASE.len() as u64);
    assert_eq!(stats.review_status_counts[&ReviewStatus::NoAssertion], 2);

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["accession"], "VCV000000001");
    assert_eq!(lines[0]["date"], DATE_MILLIS);
    assert_eq!(lines[0]["review_status"], "expert_panel");
    assert_eq!(
        lines[0]["significance"],
        serde_json::json!(["pathogenic", "tier_i_strong"])
    );
    assert_eq!(lines[1]["review_status"], "conflicting_interpretations");
}

#[cfg(feature = "gzip")]
#[test]
fn test_convert_gzip_release() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = tempdir().unwrap();
    let input = dir.path().join("release.xml.gz");
    let output = dir.path().join("release.jsonl");

    let mut encoder = GzEncoder::new(fs::File::create(&input).unwrap(), Compression::default());
    encoder.write_all(RELEASE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let vocabulary = Vocabulary::builtin();
    let stats = VcvConverter::new(&vocabulary).convert(&input, &output).unwrap();
    assert_eq!(stats.items_written, 4);
    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 4);
}

#[test]
fn test_unmapped_status_aborts_conversion() {
    let xml = RELEASE.replace("reviewed by expert panel", "reviewed by a committee");
    let dir = tempdir().unwrap();
    let input = dir.path().join("release.xml");
    let output = dir.path().join("release.jsonl");
    fs::write(&input, xml).unwrap();

    let vocabulary = Vocabulary::builtin();
    let err = VcvConverter::new(&vocabulary)
        .convert(&input, &output)
        .unwrap_err();
    match err {
        ConversionError::ClassifyError(ClassifyError::UnmappedReviewStatus {
            accession,
            status,
            ..
        }) => {
            assert_eq!(accession, "VCV000000001");
            assert_eq!(status, "reviewed by a committee");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_vocabulary_rejects_unknown_term() {
    let vocabulary = Vocabulary::from_toml_str(
        r#"
            significance_terms = ["pathogenic"]

            [review_statuses]
            "criteria provided, single submitter" = "single_submitter"
            "reviewed by expert panel" = "expert_panel"
        "#,
    )
    .unwrap();
    let classifier = VcvClassifier::new(&vocabulary);

    let results: Vec<_> = VcvItems::new(streamer(RELEASE), &classifier).collect();
    assert_eq!(results.len(), 1);
    match &results[0] {
        Err(ConversionError::ClassifyError(ClassifyError::InvalidSignificance { term, .. })) => {
            // No alias table, so the tier phrase is only snake-cased
            assert_eq!(term, "tier_i_-_strong");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_malformed_xml_is_reported() {
    let xml = r#"<ClinVarVariationRelease>
  <VariationArchive Accession="VCV1" Version="1" DateLastUpdated="2024-01-31">
    <ClassifiedRecord></InterpretedRecord>
  </VariationArchive>
</ClinVarVariationRelease>"#;

    let vocabulary = Vocabulary::builtin();
    let classifier = VcvClassifier::new(&vocabulary);
    let results: Vec<_> = VcvItems::new(streamer(xml), &classifier).collect();
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(ConversionError::StreamError(_))));
}
