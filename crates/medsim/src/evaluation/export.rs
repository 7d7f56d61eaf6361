use super::result::EvaluationResult;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct MetricRow<'a> {
    case: &'a str,
    domain: &'a str,
    metric_id: &'a str,
    description: &'a str,
    earned: i64,
    max_score: u32,
}

/// Write the per-metric breakdown as CSV, one row per catalog metric.
pub fn write_metric_csv<W: Write>(result: &EvaluationResult, writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    for domain in &result.domains {
        for metric in &domain.metrics {
            writer.serialize(MetricRow {
                case: result.case_name,
                domain: domain.label,
                metric_id: metric.id,
                description: metric.description,
                earned: metric.earned,
                max_score: metric.max_score,
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}
