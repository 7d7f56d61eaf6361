use super::domain::{Case, Domain};
use serde::Serialize;

/// Earned score for a single catalog metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricResult {
    pub id: &'static str,
    pub description: &'static str,
    pub earned: i64,
    pub max_score: u32,
}

/// Derived totals for one domain. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResult {
    pub domain: Domain,
    pub label: &'static str,
    pub earned: i64,
    pub max: i64,
    pub percentage: i64,
    pub metrics: Vec<MetricResult>,
}

impl DomainResult {
    pub fn empty(domain: Domain) -> Self {
        Self::from_metrics(domain, Vec::new())
    }

    pub fn from_metrics(domain: Domain, metrics: Vec<MetricResult>) -> Self {
        // Earned points are caller-supplied and unbounded; saturate rather than
        // overflow.
        let earned = metrics
            .iter()
            .fold(0i64, |acc, metric| acc.saturating_add(metric.earned));
        let max = metrics
            .iter()
            .fold(0i64, |acc, metric| acc.saturating_add(i64::from(metric.max_score)));

        Self {
            domain,
            label: domain.label(),
            earned,
            max,
            percentage: percentage(earned, max),
            metrics,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreTotal {
    pub earned: i64,
    pub max: i64,
}

/// View model handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub case: Case,
    pub case_name: &'static str,
    pub domains: Vec<DomainResult>,
    pub total: ScoreTotal,
    pub highest_domain: Domain,
    pub lowest_domain: Domain,
}

impl EvaluationResult {
    pub fn domain(&self, domain: Domain) -> &DomainResult {
        // The builder always materialises all four domains.
        &self.domains[domain_index(domain)]
    }

    pub fn highest(&self) -> &DomainResult {
        self.domain(self.highest_domain)
    }

    pub fn lowest(&self) -> &DomainResult {
        self.domain(self.lowest_domain)
    }
}

/// Assembles an [`EvaluationResult`], filling any domain not supplied with an
/// empty zero-max entry.
#[derive(Debug)]
pub struct EvaluationResultBuilder {
    case: Case,
    domains: [DomainResult; 4],
}

impl EvaluationResultBuilder {
    pub fn new(case: Case) -> Self {
        Self {
            case,
            domains: Domain::ordered().map(DomainResult::empty),
        }
    }

    pub fn domain(mut self, result: DomainResult) -> Self {
        let index = domain_index(result.domain);
        self.domains[index] = result;
        self
    }

    pub fn build(self) -> EvaluationResult {
        let domains = Vec::from(self.domains);

        let total = domains.iter().fold(ScoreTotal::default(), |acc, entry| ScoreTotal {
            earned: acc.earned.saturating_add(entry.earned),
            max: acc.max.saturating_add(entry.max),
        });

        // Stable sort: among equal totals the earlier domain ranks first, so it
        // wins "highest" and the later one ends up "lowest".
        let mut ranked: Vec<&DomainResult> = domains.iter().collect();
        ranked.sort_by(|a, b| b.earned.cmp(&a.earned));
        let highest_domain = ranked[0].domain;
        let lowest_domain = ranked[ranked.len() - 1].domain;

        EvaluationResult {
            case: self.case,
            case_name: self.case.name(),
            domains,
            total,
            highest_domain,
            lowest_domain,
        }
    }
}

fn domain_index(domain: Domain) -> usize {
    match domain {
        Domain::CommunicationSkills => 0,
        Domain::GeneralHistoryTaking => 1,
        Domain::DiseaseSpecificHistory => 2,
        Domain::Diagnosis => 3,
    }
}

/// Whole-number percentage, rounding halves upwards. Zero when `max` is zero.
pub fn percentage(earned: i64, max: i64) -> i64 {
    if max == 0 {
        return 0;
    }
    let ratio = earned as f64 / max as f64 * 100.0;
    (ratio + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(id: &'static str, earned: i64, max_score: u32) -> MetricResult {
        MetricResult {
            id,
            description: "",
            earned,
            max_score,
        }
    }

    #[test]
    fn percentage_rounds_half_up_and_guards_zero_max() {
        assert_eq!(percentage(9, 33), 27);
        assert_eq!(percentage(9, 27), 33);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 0), 0);
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(40, 20), 200);
    }

    #[test]
    fn builder_fills_missing_domains_with_zeroes() {
        let result = EvaluationResultBuilder::new(Case::FoodPoisoning)
            .domain(DomainResult::from_metrics(
                Domain::Diagnosis,
                vec![metric("4.1", 20, 20)],
            ))
            .build();

        assert_eq!(result.domains.len(), 4);
        assert_eq!(result.domain(Domain::CommunicationSkills).max, 0);
        assert_eq!(result.total, ScoreTotal { earned: 20, max: 20 });
        assert_eq!(result.highest_domain, Domain::Diagnosis);
        assert_eq!(result.lowest_domain, Domain::DiseaseSpecificHistory);
    }

    #[test]
    fn extreme_scores_saturate_instead_of_overflowing() {
        let domain = DomainResult::from_metrics(
            Domain::CommunicationSkills,
            vec![metric("1.1", i64::MAX, 4), metric("1.2", 1, 4)],
        );
        assert_eq!(domain.earned, i64::MAX);
        assert_eq!(domain.max, 8);

        let result = EvaluationResultBuilder::new(Case::FoodPoisoning)
            .domain(domain)
            .domain(DomainResult::from_metrics(
                Domain::Diagnosis,
                vec![metric("4.1", 5, 20)],
            ))
            .build();
        assert_eq!(result.total.earned, i64::MAX);
        assert_eq!(result.total.max, 28);
        assert_eq!(result.highest_domain, Domain::CommunicationSkills);

        let floor = DomainResult::from_metrics(
            Domain::Diagnosis,
            vec![metric("4.1", i64::MIN, 20), metric("4.2", -1, 20)],
        );
        assert_eq!(floor.earned, i64::MIN);
    }

    #[test]
    fn ties_keep_declaration_order() {
        let result = EvaluationResultBuilder::new(Case::Unknown).build();
        assert_eq!(result.highest_domain, Domain::CommunicationSkills);
        assert_eq!(result.lowest_domain, Domain::Diagnosis);

        let result = EvaluationResultBuilder::new(Case::PepticUlcerDisease)
            .domain(DomainResult::from_metrics(
                Domain::GeneralHistoryTaking,
                vec![metric("2.1", 3, 3)],
            ))
            .domain(DomainResult::from_metrics(
                Domain::Diagnosis,
                vec![metric("4.1", 3, 20)],
            ))
            .build();
        assert_eq!(result.highest_domain, Domain::GeneralHistoryTaking);
        assert_eq!(result.lowest_domain, Domain::DiseaseSpecificHistory);
    }
}
