//! Patient observation input model
//!
//! The six inputs the scorer works from:
//! - Body temperature in degrees Celsius
//! - Five yes/no symptoms, in a fixed canonical order
//!
//! The dataset encodes booleans as the literal strings "yes"/"no", so
//! parsing helpers for that encoding live here too.

use serde::{Deserialize, Serialize};

/// Documented temperature input range in °C (the intake widget range).
///
/// The scorer itself does not enforce this; callers that accept free-form
/// input are expected to validate against it first.
pub const TEMPERATURE_MIN_C: f64 = 35.0;
pub const TEMPERATURE_MAX_C: f64 = 42.0;

/// One of the five binary symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Nausea,
    LumbarPain,
    UrinePushing,
    MicturitionPains,
    BurningUrethra,
}

impl Symptom {
    /// All symptoms in canonical display order.
    ///
    /// This order is fixed and load-bearing: `observed_symptoms` lists are
    /// always emitted in it, regardless of how the observation was built.
    pub const ALL: [Symptom; 5] = [
        Symptom::Nausea,
        Symptom::LumbarPain,
        Symptom::UrinePushing,
        Symptom::MicturitionPains,
        Symptom::BurningUrethra,
    ];

    /// Human-readable label, matching the dataset column naming.
    pub fn display_name(&self) -> &'static str {
        match self {
            Symptom::Nausea => "Nausea",
            Symptom::LumbarPain => "Lumbar Pain",
            Symptom::UrinePushing => "Urine Pushing",
            Symptom::MicturitionPains => "Micturition Pains",
            Symptom::BurningUrethra => "Burning Urethra",
        }
    }

    /// Dataset column name for this symptom.
    pub fn column_name(&self) -> &'static str {
        match self {
            Symptom::Nausea => "nausea",
            Symptom::LumbarPain => "lumbar_pain",
            Symptom::UrinePushing => "urine_pushing",
            Symptom::MicturitionPains => "micturition_pains",
            Symptom::BurningUrethra => "burning_urethra",
        }
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single patient intake, constructed per scoring call and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientObservation {
    /// Body temperature in °C
    pub temperature: f64,
    /// Nausea present
    pub nausea: bool,
    /// Lumbar pain present
    pub lumbar_pain: bool,
    /// Urine pushing (continuous need to urinate) present
    pub urine_pushing: bool,
    /// Micturition pains present
    pub micturition_pains: bool,
    /// Burning of urethra, itch, swelling of urethra outlet present
    pub burning_urethra: bool,
}

impl PatientObservation {
    /// Whether a given symptom is present.
    pub fn symptom(&self, symptom: Symptom) -> bool {
        match symptom {
            Symptom::Nausea => self.nausea,
            Symptom::LumbarPain => self.lumbar_pain,
            Symptom::UrinePushing => self.urine_pushing,
            Symptom::MicturitionPains => self.micturition_pains,
            Symptom::BurningUrethra => self.burning_urethra,
        }
    }

    /// Symptoms that are present, in canonical order.
    ///
    /// Temperature is never listed here; it only feeds the scores and the
    /// temperature band.
    pub fn observed_symptoms(&self) -> Vec<Symptom> {
        Symptom::ALL
            .iter()
            .copied()
            .filter(|s| self.symptom(*s))
            .collect()
    }

    /// Whether the temperature lies in the documented intake range.
    pub fn temperature_in_range(&self) -> bool {
        (TEMPERATURE_MIN_C..=TEMPERATURE_MAX_C).contains(&self.temperature)
    }
}

/// Errors from parsing the yes/no boolean encoding.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("Expected \"yes\" or \"no\", got: {0:?}")]
    InvalidYesNo(String),
}

/// Parse the dataset's "yes"/"no" boolean encoding.
///
/// Case-insensitive and whitespace-trimmed; anything else is an error.
pub fn parse_yes_no(value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(ParseError::InvalidYesNo(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("yes").unwrap(), true);
        assert_eq!(parse_yes_no("no").unwrap(), false);
        assert_eq!(parse_yes_no(" Yes ").unwrap(), true);
        assert_eq!(parse_yes_no("NO").unwrap(), false);
        assert!(parse_yes_no("maybe").is_err());
        assert!(parse_yes_no("").is_err());
    }

    #[test]
    fn test_observed_symptoms_canonical_order() {
        let obs = PatientObservation {
            temperature: 37.0,
            nausea: false,
            lumbar_pain: true,
            urine_pushing: false,
            micturition_pains: true,
            burning_urethra: true,
        };

        // Always canonical order, independent of field values
        assert_eq!(
            obs.observed_symptoms(),
            vec![
                Symptom::LumbarPain,
                Symptom::MicturitionPains,
                Symptom::BurningUrethra
            ]
        );
    }

    #[test]
    fn test_observed_symptoms_empty() {
        let obs = PatientObservation {
            temperature: 38.5,
            nausea: false,
            lumbar_pain: false,
            urine_pushing: false,
            micturition_pains: false,
            burning_urethra: false,
        };
        assert!(obs.observed_symptoms().is_empty());
    }

    #[test]
    fn test_temperature_range_check() {
        let mut obs = PatientObservation {
            temperature: 38.5,
            nausea: false,
            lumbar_pain: false,
            urine_pushing: false,
            micturition_pains: false,
            burning_urethra: false,
        };
        assert!(obs.temperature_in_range());

        obs.temperature = 34.9;
        assert!(!obs.temperature_in_range());

        obs.temperature = 42.0;
        assert!(obs.temperature_in_range());
    }

    #[test]
    fn test_symptom_display_names() {
        assert_eq!(Symptom::LumbarPain.display_name(), "Lumbar Pain");
        assert_eq!(Symptom::BurningUrethra.to_string(), "Burning Urethra");
        assert_eq!(Symptom::UrinePushing.column_name(), "urine_pushing");
    }
}
