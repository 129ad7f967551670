//! Command handlers for urodiagctl.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use urodiag_common::{
    evaluate, parse_dataset, score, DatasetRecord, DatasetSummary, PatientObservation,
    TEMPERATURE_MAX_C, TEMPERATURE_MIN_C,
};

use crate::config::Config;
use crate::display;

/// Handle the score command.
///
/// The scorer itself accepts any temperature; the intake range is enforced
/// here at the boundary.
#[allow(clippy::too_many_arguments)]
pub fn score_command(
    temperature: f64,
    nausea: bool,
    lumbar_pain: bool,
    urine_pushing: bool,
    micturition_pains: bool,
    burning_urethra: bool,
    json: bool,
    config: &Config,
) -> Result<()> {
    if !(TEMPERATURE_MIN_C..=TEMPERATURE_MAX_C).contains(&temperature) {
        bail!(
            "temperature {temperature} C is outside the supported range \
             [{TEMPERATURE_MIN_C}, {TEMPERATURE_MAX_C}]"
        );
    }

    let obs = PatientObservation {
        temperature,
        nausea,
        lumbar_pain,
        urine_pushing,
        micturition_pains,
        burning_urethra,
    };
    let result = score(&obs);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display::print_diagnosis(&obs, &result, config.color);
    }
    Ok(())
}

/// Handle the summary command.
pub fn summary_command(file: Option<PathBuf>, json: bool, config: &Config) -> Result<()> {
    let records = load_dataset(file, config)?;
    let summary = DatasetSummary::compute(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        display::print_summary(&summary, config.color);
    }
    Ok(())
}

/// Handle the evaluate command.
pub fn evaluate_command(file: Option<PathBuf>, json: bool, config: &Config) -> Result<()> {
    let records = load_dataset(file, config)?;
    let evaluation = evaluate(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        display::print_evaluation(&evaluation, config.color);
    }
    Ok(())
}

/// Resolve the dataset path (argument, then config) and parse it.
fn load_dataset(file: Option<PathBuf>, config: &Config) -> Result<Vec<DatasetRecord>> {
    let path = match file.or_else(|| config.data_file.clone()) {
        Some(path) => path,
        None => bail!("no dataset file given and no data_file configured"),
    };

    info!("loading dataset from {}", path.display());
    let text = fs::read_to_string(&path)
        .with_context(|| format!("cannot read dataset {}", path.display()))?;
    let records = parse_dataset(&text)
        .with_context(|| format!("cannot parse dataset {}", path.display()))?;
    info!("loaded {} records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_rejects_out_of_range_temperature() {
        let config = Config::default();
        let result = score_command(34.0, false, false, false, false, false, true, &config);
        assert!(result.is_err());

        let result = score_command(42.5, false, false, false, false, false, true, &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_score_accepts_range_edges() {
        let config = Config::default();
        assert!(score_command(35.0, false, false, false, false, false, true, &config).is_ok());
        assert!(score_command(42.0, true, true, true, true, true, true, &config).is_ok());
    }

    #[test]
    fn test_load_dataset_requires_a_path() {
        let config = Config::default();
        assert!(load_dataset(None, &config).is_err());
    }

    #[test]
    fn test_load_dataset_from_config_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagnosis.csv");
        fs::write(
            &path,
            "temperature,nausea,lumbar_pain,urine_pushing,micturition_pains,burning_urethra,bladder_inflammation,nephritis\n\
             36.6,no,no,no,no,no,no,no\n",
        )
        .unwrap();

        let config = Config {
            color: false,
            data_file: Some(path),
        };
        let records = load_dataset(None, &config).unwrap();
        assert_eq!(records.len(), 1);
    }
}
