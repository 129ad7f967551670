//! Labeled dataset support
//!
//! Parses the acute inflammations dataset (one row per examined patient:
//! temperature, five yes/no symptoms, two yes/no diagnosis labels) and
//! computes the summary statistics used for exploratory reporting:
//! - Diagnosis category breakdown (bladder only / nephritis only / both / healthy)
//! - Temperature spread
//! - Per-symptom frequency among positive vs negative cases per condition
//! - Agreement of the heuristic scorer with the ground-truth labels

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::observation::{parse_yes_no, PatientObservation, Symptom};
use crate::scorer::{score, LIKELY_THRESHOLD};

/// Expected CSV header, in column order.
pub const DATASET_COLUMNS: [&str; 8] = [
    "temperature",
    "nausea",
    "lumbar_pain",
    "urine_pushing",
    "micturition_pains",
    "burning_urethra",
    "bladder_inflammation",
    "nephritis",
];

/// One of the two labeled target conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetCondition {
    BladderInflammation,
    Nephritis,
}

impl TargetCondition {
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetCondition::BladderInflammation => "Bladder Inflammation",
            TargetCondition::Nephritis => "Nephritis",
        }
    }
}

impl std::fmt::Display for TargetCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Derived per-record diagnosis category (combination of the two labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisCategory {
    BladderOnly,
    NephritisOnly,
    Both,
    Healthy,
}

impl DiagnosisCategory {
    pub const ALL: [DiagnosisCategory; 4] = [
        DiagnosisCategory::BladderOnly,
        DiagnosisCategory::NephritisOnly,
        DiagnosisCategory::Both,
        DiagnosisCategory::Healthy,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DiagnosisCategory::BladderOnly => "Bladder Inflammation Only",
            DiagnosisCategory::NephritisOnly => "Nephritis Only",
            DiagnosisCategory::Both => "Both Diseases",
            DiagnosisCategory::Healthy => "Healthy",
        }
    }
}

impl std::fmt::Display for DiagnosisCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One labeled dataset row: the observation plus both ground-truth labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub observation: PatientObservation,
    pub bladder_inflammation: bool,
    pub nephritis: bool,
}

impl DatasetRecord {
    /// Combined diagnosis category of this record.
    pub fn category(&self) -> DiagnosisCategory {
        match (self.bladder_inflammation, self.nephritis) {
            (true, false) => DiagnosisCategory::BladderOnly,
            (false, true) => DiagnosisCategory::NephritisOnly,
            (true, true) => DiagnosisCategory::Both,
            (false, false) => DiagnosisCategory::Healthy,
        }
    }

    /// Ground-truth label for one target condition.
    pub fn label(&self, condition: TargetCondition) -> bool {
        match condition {
            TargetCondition::BladderInflammation => self.bladder_inflammation,
            TargetCondition::Nephritis => self.nephritis,
        }
    }
}

/// Errors from parsing the dataset CSV.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset is empty")]
    Empty,

    #[error("Unexpected header: expected {expected:?}, got {found:?}")]
    BadHeader { expected: String, found: String },

    #[error("Line {line}: expected {expected} columns, got {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid temperature {value:?}")]
    BadTemperature { line: usize, value: String },

    #[error("Line {line}, column {column}: {source}")]
    BadFlag {
        line: usize,
        column: &'static str,
        source: crate::observation::ParseError,
    },
}

/// Parse the full dataset from CSV text.
///
/// First line must be the exact header (`DATASET_COLUMNS`); every following
/// non-empty line is one record. Errors carry 1-based line numbers.
pub fn parse_dataset(text: &str) -> Result<Vec<DatasetRecord>, DatasetError> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines.next().ok_or(DatasetError::Empty)?;
    let expected = DATASET_COLUMNS.join(",");
    if header.trim() != expected {
        return Err(DatasetError::BadHeader {
            expected,
            found: header.trim().to_string(),
        });
    }

    let mut records = Vec::new();
    for (idx, raw_line) in lines {
        let line = idx + 1; // 1-based for error reporting
        if raw_line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw_line.split(',').map(str::trim).collect();
        if fields.len() != DATASET_COLUMNS.len() {
            return Err(DatasetError::ColumnCount {
                line,
                expected: DATASET_COLUMNS.len(),
                found: fields.len(),
            });
        }

        let temperature: f64 = fields[0].parse().map_err(|_| DatasetError::BadTemperature {
            line,
            value: fields[0].to_string(),
        })?;

        let flag = |column_idx: usize| -> Result<bool, DatasetError> {
            parse_yes_no(fields[column_idx]).map_err(|source| DatasetError::BadFlag {
                line,
                column: DATASET_COLUMNS[column_idx],
                source,
            })
        };

        records.push(DatasetRecord {
            observation: PatientObservation {
                temperature,
                nausea: flag(1)?,
                lumbar_pain: flag(2)?,
                urine_pushing: flag(3)?,
                micturition_pains: flag(4)?,
                burning_urethra: flag(5)?,
            },
            bladder_inflammation: flag(6)?,
            nephritis: flag(7)?,
        });
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    debug!("parsed {} dataset records", records.len());
    Ok(records)
}

// =============================================================================
// Summary Statistics
// =============================================================================

/// Temperature spread across the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Record count for one diagnosis category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: DiagnosisCategory,
    pub count: usize,
}

/// Frequency of one symptom among positive vs negative cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomFrequency {
    pub symptom: Symptom,
    /// Percent of positive cases showing the symptom
    pub with_condition_pct: f64,
    /// Percent of negative cases showing the symptom
    pub without_condition_pct: f64,
}

/// Per-condition symptom frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionFrequencies {
    pub condition: TargetCondition,
    pub positive_cases: usize,
    pub negative_cases: usize,
    pub symptoms: Vec<SymptomFrequency>,
}

/// Summary statistics over a parsed dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub temperature: TemperatureStats,
    pub categories: Vec<CategoryCount>,
    pub frequencies: Vec<ConditionFrequencies>,
}

impl DatasetSummary {
    /// Compute summary statistics for a non-empty record set.
    pub fn compute(records: &[DatasetRecord]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for record in records {
            let t = record.observation.temperature;
            min = min.min(t);
            max = max.max(t);
            sum += t;
        }
        let mean = if records.is_empty() {
            0.0
        } else {
            sum / records.len() as f64
        };

        let categories = DiagnosisCategory::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: records.iter().filter(|r| r.category() == category).count(),
            })
            .collect();

        let frequencies = [
            TargetCondition::BladderInflammation,
            TargetCondition::Nephritis,
        ]
        .iter()
        .map(|&condition| condition_frequencies(records, condition))
        .collect();

        DatasetSummary {
            record_count: records.len(),
            temperature: TemperatureStats { min, mean, max },
            categories,
            frequencies,
        }
    }
}

/// Percent of `records` matching `present` that show `symptom`.
fn symptom_pct(records: &[&DatasetRecord], symptom: Symptom) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let showing = records
        .iter()
        .filter(|r| r.observation.symptom(symptom))
        .count();
    showing as f64 / records.len() as f64 * 100.0
}

fn condition_frequencies(records: &[DatasetRecord], condition: TargetCondition) -> ConditionFrequencies {
    let positives: Vec<&DatasetRecord> = records.iter().filter(|r| r.label(condition)).collect();
    let negatives: Vec<&DatasetRecord> = records.iter().filter(|r| !r.label(condition)).collect();

    let symptoms = Symptom::ALL
        .iter()
        .map(|&symptom| SymptomFrequency {
            symptom,
            with_condition_pct: symptom_pct(&positives, symptom),
            without_condition_pct: symptom_pct(&negatives, symptom),
        })
        .collect();

    ConditionFrequencies {
        condition,
        positive_cases: positives.len(),
        negative_cases: negatives.len(),
        symptoms,
    }
}

// =============================================================================
// Scorer Evaluation
// =============================================================================

/// Agreement of the heuristic scorer with the dataset labels.
///
/// A probability at or above `LIKELY_THRESHOLD` counts as a positive call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub record_count: usize,
    pub bladder_correct: usize,
    pub nephritis_correct: usize,
}

impl Evaluation {
    pub fn bladder_accuracy_pct(&self) -> f64 {
        accuracy_pct(self.bladder_correct, self.record_count)
    }

    pub fn nephritis_accuracy_pct(&self) -> f64 {
        accuracy_pct(self.nephritis_correct, self.record_count)
    }
}

fn accuracy_pct(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

/// Score every record and count agreement with the ground-truth labels.
pub fn evaluate(records: &[DatasetRecord]) -> Evaluation {
    let mut bladder_correct = 0;
    let mut nephritis_correct = 0;

    for record in records {
        let result = score(&record.observation);
        if (result.bladder_probability >= LIKELY_THRESHOLD) == record.bladder_inflammation {
            bladder_correct += 1;
        }
        if (result.nephritis_probability >= LIKELY_THRESHOLD) == record.nephritis {
            nephritis_correct += 1;
        }
    }

    Evaluation {
        record_count: records.len(),
        bladder_correct,
        nephritis_correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
temperature,nausea,lumbar_pain,urine_pushing,micturition_pains,burning_urethra,bladder_inflammation,nephritis
35.9,no,no,yes,yes,yes,yes,no
40.0,yes,yes,no,no,no,no,yes
41.5,yes,yes,yes,yes,no,yes,yes
36.6,no,no,no,no,no,no,no
";

    #[test]
    fn test_parse_dataset() {
        let records = parse_dataset(SAMPLE).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].observation.temperature, 35.9);
        assert!(records[0].observation.urine_pushing);
        assert!(records[0].bladder_inflammation);
        assert!(!records[0].nephritis);
    }

    #[test]
    fn test_categories() {
        let records = parse_dataset(SAMPLE).unwrap();
        assert_eq!(records[0].category(), DiagnosisCategory::BladderOnly);
        assert_eq!(records[1].category(), DiagnosisCategory::NephritisOnly);
        assert_eq!(records[2].category(), DiagnosisCategory::Both);
        assert_eq!(records[3].category(), DiagnosisCategory::Healthy);
    }

    #[test]
    fn test_parse_rejects_bad_header() {
        let err = parse_dataset("a,b,c\n1,2,3\n").unwrap_err();
        assert!(matches!(err, DatasetError::BadHeader { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_flag_with_line_number() {
        let text = "\
temperature,nausea,lumbar_pain,urine_pushing,micturition_pains,burning_urethra,bladder_inflammation,nephritis
36.6,no,no,maybe,no,no,no,no
";
        let err = parse_dataset(text).unwrap_err();
        match err {
            DatasetError::BadFlag { line, column, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, "urine_pushing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_temperature() {
        let text = "\
temperature,nausea,lumbar_pain,urine_pushing,micturition_pains,burning_urethra,bladder_inflammation,nephritis
cold,no,no,no,no,no,no,no
";
        assert!(matches!(
            parse_dataset(text).unwrap_err(),
            DatasetError::BadTemperature { line: 2, .. }
        ));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_dataset("").unwrap_err(), DatasetError::Empty));
        let header_only =
            "temperature,nausea,lumbar_pain,urine_pushing,micturition_pains,burning_urethra,bladder_inflammation,nephritis\n";
        assert!(matches!(
            parse_dataset(header_only).unwrap_err(),
            DatasetError::Empty
        ));
    }

    #[test]
    fn test_summary_statistics() {
        let records = parse_dataset(SAMPLE).unwrap();
        let summary = DatasetSummary::compute(&records);

        assert_eq!(summary.record_count, 4);
        assert_eq!(summary.temperature.min, 35.9);
        assert_eq!(summary.temperature.max, 41.5);
        assert!((summary.temperature.mean - 38.5).abs() < 1e-9);

        // One record per category in the sample
        for count in &summary.categories {
            assert_eq!(count.count, 1, "category {:?}", count.category);
        }

        // Bladder positives: rows 1 and 3. Both have urine_pushing -> 100%
        let bladder = &summary.frequencies[0];
        assert_eq!(bladder.condition, TargetCondition::BladderInflammation);
        assert_eq!(bladder.positive_cases, 2);
        assert_eq!(bladder.negative_cases, 2);
        let pushing = bladder
            .symptoms
            .iter()
            .find(|f| f.symptom == Symptom::UrinePushing)
            .unwrap();
        assert_eq!(pushing.with_condition_pct, 100.0);
        assert_eq!(pushing.without_condition_pct, 0.0);
    }

    #[test]
    fn test_evaluation_counts_agreement() {
        let records = parse_dataset(SAMPLE).unwrap();
        let eval = evaluate(&records);

        // Row 1: bladder raw 5.5 -> 100 >= 70, label yes -> correct;
        //        nephritis raw 0 -> 0 < 70, label no -> correct
        // Row 2: bladder raw 0 -> correct (label no);
        //        nephritis raw 5 -> 100, label yes -> correct
        // Row 3: bladder raw 3.5 -> 63 < 70 but label yes -> miss;
        //        nephritis raw 5 -> 100, label yes -> correct
        // Row 4: bladder raw 1 -> 18, label no -> correct;
        //        nephritis 0, label no -> correct
        assert_eq!(eval.record_count, 4);
        assert_eq!(eval.bladder_correct, 3);
        assert_eq!(eval.nephritis_correct, 4);
        assert_eq!(eval.nephritis_accuracy_pct(), 100.0);
        assert_eq!(eval.bladder_accuracy_pct(), 75.0);
    }
}
