use medsim::evaluation::{
    evaluate, evaluate_case, lookup, Case, Domain, EvaluationInput, MetricScores,
};

fn full_marks(case: Case) -> MetricScores {
    let mut scores = MetricScores::new();
    for domain in Domain::ordered() {
        for metric in lookup(case, domain) {
            scores.record(domain, metric.id, i64::from(metric.max_score));
        }
    }
    scores
}

#[test]
fn domain_maxima_sum_to_catalog_total() {
    for case in Case::known() {
        let catalog_total: i64 = Domain::ordered()
            .into_iter()
            .flat_map(|domain| lookup(case, domain))
            .map(|metric| i64::from(metric.max_score))
            .sum();

        let result = evaluate_case(case, &MetricScores::new());
        let domain_total: i64 = result.domains.iter().map(|domain| domain.max).sum();

        assert_eq!(domain_total, catalog_total, "{case}");
        assert_eq!(result.total.max, catalog_total, "{case}");
    }
}

#[test]
fn full_marks_score_one_hundred_percent_everywhere() {
    for case in Case::known() {
        let result = evaluate_case(case, &full_marks(case));

        assert_eq!(result.total.earned, result.total.max, "{case}");
        for domain in &result.domains {
            assert_eq!(domain.percentage, 100, "{case} / {}", domain.label);
        }
    }
}

#[test]
fn empty_scores_earn_nothing() {
    for case in Case::known().into_iter().chain([Case::Unknown]) {
        let result = evaluate_case(case, &MetricScores::new());
        assert!(result.domains.iter().all(|domain| domain.earned == 0));
        assert_eq!(result.total.earned, 0);
        assert_eq!(result.highest_domain, Domain::CommunicationSkills);
        assert_eq!(result.lowest_domain, Domain::Diagnosis);
    }
}

#[test]
fn unrecognized_case_scores_all_zero() {
    let scores = MetricScores::new()
        .with(Domain::CommunicationSkills, "1.1", 4)
        .with(Domain::Diagnosis, "4.1", 20);

    let result = evaluate("Appendicitis", &scores);

    assert_eq!(result.case, Case::Unknown);
    assert_eq!(result.case_name, "Unknown Case");
    for domain in &result.domains {
        assert_eq!(domain.earned, 0);
        assert_eq!(domain.max, 0);
        assert_eq!(domain.percentage, 0);
        assert!(domain.metrics.is_empty());
    }
    assert_eq!(result.total.max, 0);
}

#[test]
fn tie_break_is_reproducible() {
    let scores = MetricScores::new()
        .with(Domain::CommunicationSkills, "1.4", 6)
        .with(Domain::DiseaseSpecificHistory, "3.3", 6)
        .with(Domain::GeneralHistoryTaking, "2.1", 1)
        .with(Domain::Diagnosis, "4.1", 1);

    let first = evaluate("Acute pancreatitis", &scores);
    for _ in 0..10 {
        let again = evaluate("Acute pancreatitis", &scores);
        assert_eq!(again, first);
    }
    assert_eq!(first.highest_domain, Domain::CommunicationSkills);
    assert_eq!(first.lowest_domain, Domain::Diagnosis);
}

#[test]
fn kidney_stone_disease_history_example() {
    let input = EvaluationInput::from_json(
        r#"{ "case": "Renal stone", "evaluationMetricScores": { "domain3": { "3.1": 6, "3.2": 3 } } }"#,
    )
    .expect("valid input");

    let result = input.evaluate();
    let history = result.domain(Domain::DiseaseSpecificHistory);

    assert_eq!(history.earned, 9);
    assert_eq!(history.max, 6 + 6 + 6 + 6 + 3 + 3 + 3);
    assert_eq!(history.percentage, 27);
    assert_eq!(result.domain(Domain::CommunicationSkills).earned, 0);
    assert_eq!(result.domain(Domain::GeneralHistoryTaking).earned, 0);
    assert_eq!(result.domain(Domain::Diagnosis).earned, 0);
    assert_eq!(result.total.earned, 9);
    assert_eq!(result.total.max, 81);
}

#[test]
fn result_serializes_for_presentation_layer() {
    let scores = MetricScores::new().with(Domain::Diagnosis, "4.1", 10);
    let result = evaluate("Peptic ulcer disease", &scores);
    let json = serde_json::to_value(&result).expect("serializes");

    assert_eq!(json["case"], "peptic_ulcer_disease");
    assert_eq!(json["case_name"], "Peptic ulcer disease");
    assert_eq!(json["highest_domain"], "domain4");
    assert_eq!(json["domains"][3]["percentage"], 50);
    assert_eq!(json["total"]["max"], 100);
}
