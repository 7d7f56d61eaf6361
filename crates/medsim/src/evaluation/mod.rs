//! Metric catalog and score aggregation for simulated patient cases.
//!
//! Scoring is a pure reduction: resolve the case, walk the four domains in
//! declaration order, sum earned and maximum points, then rank domains by
//! earned total.

pub mod catalog;
mod domain;
mod export;
mod input;
mod result;
mod scores;

pub use catalog::{lookup, CaseSummary, DomainSummary, Metric};
pub use domain::{Case, Domain};
pub use export::write_metric_csv;
pub use input::{EvaluationInput, InputError};
pub use result::{
    percentage, DomainResult, EvaluationResult, EvaluationResultBuilder, MetricResult, ScoreTotal,
};
pub use scores::MetricScores;

use tracing::debug;

/// Score `scores` against the catalog entry for the named case.
///
/// Unrecognised case names score against [`Case::Unknown`], which has no
/// metrics and therefore yields all-zero domains.
pub fn evaluate(case: &str, scores: &MetricScores) -> EvaluationResult {
    evaluate_case(Case::resolve(case), scores)
}

pub fn evaluate_case(case: Case, scores: &MetricScores) -> EvaluationResult {
    let result = Domain::ordered()
        .into_iter()
        .map(|domain| {
            let metrics = lookup(case, domain)
                .iter()
                .map(|metric| MetricResult {
                    id: metric.id,
                    description: metric.description,
                    earned: scores.earned(domain, metric.id),
                    max_score: metric.max_score,
                })
                .collect();
            DomainResult::from_metrics(domain, metrics)
        })
        .fold(EvaluationResultBuilder::new(case), EvaluationResultBuilder::domain)
        .build();

    debug!(
        case = %case,
        earned = result.total.earned,
        max = result.total.max,
        highest = %result.highest_domain,
        lowest = %result.lowest_domain,
        "scored evaluation"
    );

    result
}

impl EvaluationInput {
    pub fn evaluate(&self) -> EvaluationResult {
        evaluate_case(self.resolved_case(), &self.evaluation_metric_scores)
    }
}
