//! Terminal output formatting - clean, ASCII-only
//!
//! Color scheme: bladder = blue, nephritis = yellow, both = red,
//! possible = magenta, healthy/unlikely = green.

use owo_colors::{OwoColorize, Style};

use urodiag_common::{
    ConditionFrequencies, DatasetSummary, DiagnosisResult, Evaluation, PatientObservation,
    SummaryLabel, TemperatureBand, LIKELY_THRESHOLD, POSSIBLE_THRESHOLD,
};

const KEY_WIDTH: usize = 18;

fn print_kv(key: &str, value: &str) {
    println!("{:width$} {}", key, value, width = KEY_WIDTH);
}

/// Style for a summary verdict.
fn label_style(label: SummaryLabel, color: bool) -> Style {
    if !color {
        return Style::new();
    }
    match label {
        SummaryLabel::BothLikely => Style::new().bright_red().bold(),
        SummaryLabel::BladderLikely => Style::new().bright_blue().bold(),
        SummaryLabel::NephritisLikely => Style::new().bright_yellow().bold(),
        SummaryLabel::PossibleCondition => Style::new().bright_magenta().bold(),
        SummaryLabel::Unlikely => Style::new().bright_green().bold(),
    }
}

/// Style for a temperature band.
fn band_style(band: TemperatureBand, color: bool) -> Style {
    if !color {
        return Style::new();
    }
    match band {
        TemperatureBand::Normal => Style::new().bright_green(),
        TemperatureBand::ModerateFever => Style::new().bright_yellow(),
        TemperatureBand::HighFever => Style::new().bright_red(),
    }
}

/// Style for a 0-100 probability, by the verdict thresholds.
fn probability_style(probability: u8, color: bool) -> Style {
    if !color {
        return Style::new();
    }
    if probability >= LIKELY_THRESHOLD {
        Style::new().bright_red()
    } else if probability >= POSSIBLE_THRESHOLD {
        Style::new().bright_yellow()
    } else {
        Style::new().bright_green()
    }
}

/// Print a single scoring result.
pub fn print_diagnosis(obs: &PatientObservation, result: &DiagnosisResult, color: bool) {
    println!();
    println!("[DIAGNOSIS]");
    print_kv(
        "temperature",
        &format!(
            "{:.1} C ({})",
            obs.temperature,
            result
                .temperature_band
                .description()
                .style(band_style(result.temperature_band, color))
        ),
    );
    print_kv(
        "bladder",
        &format!(
            "{}%",
            result
                .bladder_probability
                .style(probability_style(result.bladder_probability, color))
        ),
    );
    print_kv(
        "nephritis",
        &format!(
            "{}%",
            result
                .nephritis_probability
                .style(probability_style(result.nephritis_probability, color))
        ),
    );
    println!();
    print_kv(
        "summary",
        &result
            .summary_label
            .description()
            .style(label_style(result.summary_label, color))
            .to_string(),
    );

    let symptoms = if result.observed_symptoms.is_empty() {
        "none".to_string()
    } else {
        result
            .observed_symptoms
            .iter()
            .map(|s| s.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    print_kv("symptoms", &symptoms);
    println!();
    println!(
        "{}",
        "Illustrative heuristic - not medical advice".dimmed()
    );
    println!();
}

/// Print dataset summary statistics.
pub fn print_summary(summary: &DatasetSummary, color: bool) {
    println!();
    println!("[DATASET] {} records", summary.record_count);
    print_kv(
        "temperature",
        &format!(
            "{:.1} C min / {:.1} C mean / {:.1} C max",
            summary.temperature.min, summary.temperature.mean, summary.temperature.max
        ),
    );

    println!();
    println!("[CATEGORIES]");
    for count in &summary.categories {
        let pct = if summary.record_count == 0 {
            0.0
        } else {
            count.count as f64 / summary.record_count as f64 * 100.0
        };
        println!(
            "  {:26} {:4} ({:.1}%)",
            count.category.display_name(),
            count.count,
            pct
        );
    }

    for table in &summary.frequencies {
        print_frequency_table(table, color);
    }
    println!();
}

fn print_frequency_table(table: &ConditionFrequencies, color: bool) {
    println!();
    let heading = format!(
        "[SYMPTOM FREQUENCY] {} ({} positive / {} negative)",
        table.condition.display_name(),
        table.positive_cases,
        table.negative_cases
    );
    if color {
        println!("{}", heading.bold());
    } else {
        println!("{}", heading);
    }
    for row in &table.symptoms {
        println!(
            "  {:20} {:6.1}% with   {:6.1}% without",
            row.symptom.display_name(),
            row.with_condition_pct,
            row.without_condition_pct
        );
    }
}

/// Print scorer-vs-labels agreement.
pub fn print_evaluation(eval: &Evaluation, color: bool) {
    println!();
    println!(
        "[EVALUATION] {} records, positive call at >= {}%",
        eval.record_count, LIKELY_THRESHOLD
    );
    print_agreement_row(
        "Bladder Inflammation",
        eval.bladder_correct,
        eval.record_count,
        eval.bladder_accuracy_pct(),
        color,
    );
    print_agreement_row(
        "Nephritis",
        eval.nephritis_correct,
        eval.record_count,
        eval.nephritis_accuracy_pct(),
        color,
    );
    println!();
}

fn print_agreement_row(name: &str, correct: usize, total: usize, pct: f64, color: bool) {
    let style = if !color {
        Style::new()
    } else if pct >= 90.0 {
        Style::new().bright_green()
    } else if pct >= 70.0 {
        Style::new().bright_yellow()
    } else {
        Style::new().bright_red()
    };
    println!(
        "  {:22} {}/{} correct ({})",
        name,
        correct,
        total,
        format!("{:.1}%", pct).style(style)
    );
}
