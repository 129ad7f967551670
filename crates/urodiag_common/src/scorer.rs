//! Diagnostic scoring
//!
//! Deterministic rule-based scoring of a single patient observation against
//! two conditions: acute bladder inflammation and acute nephritis.
//! No model inference, no state: a fixed weight table per condition, a
//! truncating percentage normalization, and an ordered decision list for the
//! summary verdict.
//!
//! The weights are illustrative constants derived from exploratory analysis
//! of the acute inflammations dataset. This is NOT a validated clinical
//! model and must not be used for medical decisions.

use serde::{Deserialize, Serialize};

use crate::observation::{PatientObservation, Symptom};

// =============================================================================
// Rule Weights
// =============================================================================

/// Temperature split between the two conditions' fever rules (°C).
///
/// The two rules are complementary: below the split contributes to the
/// bladder score, at or above it to the nephritis score. Exactly one fires
/// for any temperature.
pub const FEVER_SPLIT_C: f64 = 38.5;

/// Bladder inflammation weights, evaluated in this order.
const BLADDER_W_LOW_TEMP: f64 = 1.0;
const BLADDER_W_URINE_PUSHING: f64 = 2.0;
const BLADDER_W_MICTURITION_PAINS: f64 = 1.5;
const BLADDER_W_BURNING_URETHRA: f64 = 1.0;

/// Maximum attainable bladder raw score (all four rules firing).
const BLADDER_MAX_RAW: f64 =
    BLADDER_W_LOW_TEMP + BLADDER_W_URINE_PUSHING + BLADDER_W_MICTURITION_PAINS + BLADDER_W_BURNING_URETHRA;

/// Nephritis weights, evaluated in this order.
const NEPHRITIS_W_HIGH_TEMP: f64 = 2.0;
const NEPHRITIS_W_LUMBAR_PAIN: f64 = 2.0;
const NEPHRITIS_W_NAUSEA: f64 = 1.0;

/// Maximum attainable nephritis raw score (all three rules firing).
const NEPHRITIS_MAX_RAW: f64 = NEPHRITIS_W_HIGH_TEMP + NEPHRITIS_W_LUMBAR_PAIN + NEPHRITIS_W_NAUSEA;

/// Probability at or above which a condition is called "likely".
pub const LIKELY_THRESHOLD: u8 = 70;

/// Probability at or above which a condition is worth flagging at all.
pub const POSSIBLE_THRESHOLD: u8 = 40;

// =============================================================================
// Result Types
// =============================================================================

/// Coarse display classification of body temperature.
///
/// Purely presentational; the band never feeds back into the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    Normal,
    ModerateFever,
    HighFever,
}

impl TemperatureBand {
    /// Classify a temperature in °C.
    pub fn classify(temperature: f64) -> Self {
        if temperature < 38.0 {
            TemperatureBand::Normal
        } else if temperature < 39.0 {
            TemperatureBand::ModerateFever
        } else {
            TemperatureBand::HighFever
        }
    }

    /// Human-readable description for reports.
    pub fn description(&self) -> &'static str {
        match self {
            TemperatureBand::Normal => "normal to slightly elevated",
            TemperatureBand::ModerateFever => "moderately elevated - fever",
            TemperatureBand::HighFever => "significantly elevated - high fever",
        }
    }
}

impl std::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Single categorical verdict over both probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLabel {
    BothLikely,
    BladderLikely,
    NephritisLikely,
    PossibleCondition,
    Unlikely,
}

impl SummaryLabel {
    /// Verdict text matching the report wording.
    pub fn description(&self) -> &'static str {
        match self {
            SummaryLabel::BothLikely => "Likely both Bladder Inflammation and Nephritis",
            SummaryLabel::BladderLikely => "Likely Bladder Inflammation",
            SummaryLabel::NephritisLikely => "Likely Nephritis",
            SummaryLabel::PossibleCondition => {
                "Possible urinary system condition - further tests recommended"
            }
            SummaryLabel::Unlikely => "Unlikely to have either condition",
        }
    }
}

impl std::fmt::Display for SummaryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of scoring one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// Bladder inflammation likelihood, 0-100
    pub bladder_probability: u8,
    /// Nephritis likelihood, 0-100
    pub nephritis_probability: u8,
    /// Display band for the input temperature
    pub temperature_band: TemperatureBand,
    /// Categorical verdict over both probabilities
    pub summary_label: SummaryLabel,
    /// Symptoms that were present, in canonical order
    pub observed_symptoms: Vec<Symptom>,
}

// =============================================================================
// Scoring
// =============================================================================

/// Score an observation against both conditions.
///
/// Total over all inputs: no failure path, no side effects, identical inputs
/// always produce field-by-field identical results. Temperatures outside the
/// documented [35.0, 42.0] intake range are scored mechanically, without
/// validation; callers that need the range enforced validate before calling.
pub fn score(obs: &PatientObservation) -> DiagnosisResult {
    let bladder_raw = bladder_raw_score(obs);
    let nephritis_raw = nephritis_raw_score(obs);

    let bladder_probability = normalize(bladder_raw, BLADDER_MAX_RAW);
    let nephritis_probability = normalize(nephritis_raw, NEPHRITIS_MAX_RAW);

    DiagnosisResult {
        bladder_probability,
        nephritis_probability,
        temperature_band: TemperatureBand::classify(obs.temperature),
        summary_label: summarize(bladder_probability, nephritis_probability),
        observed_symptoms: obs.observed_symptoms(),
    }
}

/// Raw bladder inflammation score (0.0 to 5.5).
fn bladder_raw_score(obs: &PatientObservation) -> f64 {
    let mut raw = 0.0;
    if obs.temperature < FEVER_SPLIT_C {
        raw += BLADDER_W_LOW_TEMP;
    }
    if obs.urine_pushing {
        raw += BLADDER_W_URINE_PUSHING;
    }
    if obs.micturition_pains {
        raw += BLADDER_W_MICTURITION_PAINS;
    }
    if obs.burning_urethra {
        raw += BLADDER_W_BURNING_URETHRA;
    }
    raw
}

/// Raw nephritis score (0.0 to 5.0).
fn nephritis_raw_score(obs: &PatientObservation) -> f64 {
    let mut raw = 0.0;
    if obs.temperature >= FEVER_SPLIT_C {
        raw += NEPHRITIS_W_HIGH_TEMP;
    }
    if obs.lumbar_pain {
        raw += NEPHRITIS_W_LUMBAR_PAIN;
    }
    if obs.nausea {
        raw += NEPHRITIS_W_NAUSEA;
    }
    raw
}

/// Normalize a raw score to a 0-100 percentage.
///
/// Truncation toward zero, not rounding: raw 4.5 out of 5.5 is 81, never 82.
fn normalize(raw: f64, max_raw: f64) -> u8 {
    let pct = (raw / max_raw * 100.0) as u8;
    pct.min(100)
}

/// Ordered decision list over the two probabilities; first match wins.
///
/// Nothing but the two probabilities influences the verdict.
fn summarize(bladder: u8, nephritis: u8) -> SummaryLabel {
    if bladder >= LIKELY_THRESHOLD && nephritis >= LIKELY_THRESHOLD {
        SummaryLabel::BothLikely
    } else if bladder >= LIKELY_THRESHOLD {
        SummaryLabel::BladderLikely
    } else if nephritis >= LIKELY_THRESHOLD {
        SummaryLabel::NephritisLikely
    } else if bladder >= POSSIBLE_THRESHOLD || nephritis >= POSSIBLE_THRESHOLD {
        SummaryLabel::PossibleCondition
    } else {
        SummaryLabel::Unlikely
    }
}
