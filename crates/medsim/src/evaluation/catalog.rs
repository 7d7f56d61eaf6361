use super::domain::{Case, Domain};
use serde::Serialize;

/// Individually scored checklist item within a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub id: &'static str,
    pub description: &'static str,
    pub max_score: u32,
}

const fn metric(id: &'static str, description: &'static str, max_score: u32) -> Metric {
    Metric {
        id,
        description,
        max_score,
    }
}

const COMMUNICATION_SKILLS: &[Metric] = &[
    metric("1.1", "แนะนำตัว แจ้งชื่อ-สกุล ผู้ซักประวัติ", 4),
    metric("1.2", "ถามชื่อ-สกุลของผู้ป่วย", 4),
    metric("1.3", "ขออนุญาตและแจ้งวัตถุประสงค์", 4),
    metric(
        "1.4",
        "ใช้คำถามมีความต่อเนื่อง เชื่อมโยง และมีจังหวะการรับฟังเหมาะสม",
        6,
    ),
    metric("1.5", "เปิดโอกาสให้ผู้ป่วยซักถาม", 2),
];

const ABDOMINAL_PAIN_HISTORY: &[Metric] = &[
    metric("2.1", "ตำแหน่งที่มีอาการปวดท้อง", 3),
    metric("2.2", "ปวดทันทีหรือค่อยๆมากขึ้น", 3),
    metric("2.3", "ลักษณะการปวดท้อง (ปวดบีบ/จุกแน่น/ปวดตื้อๆ)", 2),
    metric("2.4", "ปวดร้าวไปที่ใด", 2),
    metric("2.5", "ปวดตลอดเวลาหรือมีอาการปวดเป็นพักๆ", 2),
    metric("2.6", "ปัจจัยที่ทำให้อาการปวดดีขึ้นหรือแย่ลง", 2),
    metric("2.7", "ขณะมีอาการปวดท้องกำลังทำอะไรอยู่", 2),
    metric("2.8", "อาการปวดท้องในอดีตที่มีลักษณะคล้ายกัน", 2),
    metric("2.9", "ประวัติเคยผ่าตัดช่องท้อง", 2),
    metric("2.10", "โรคประจำตัวและยาที่ใช้เป็นประจำ", 2),
    metric("2.11", "ประวัติการสูบบุหรี่", 2),
    metric("2.12", "ประวัติดื่มสุรา/การใช้ยาประจำ", 2),
    metric("2.13", "ประวัติการรักษาก่อนมาพบแพทย์", 2),
    metric("2.14", "ประวัติอุบัติเหตุก่อนมีอาการหรือไม่", 2),
];

// The kidney stone case only grades the first three general history items.
const FLANK_PAIN_HISTORY: &[Metric] = &[
    metric("2.1", "ตำแหน่งที่มีอาการปวดท้อง", 3),
    metric("2.2", "ปวดทันทีหรือค่อยๆมากขึ้น", 3),
    metric("2.3", "ลักษณะการปวดท้อง (ปวดบีบ/จุกแน่น/ปวดตื้อๆ)", 2),
];

const PEPTIC_ULCER_HISTORY: &[Metric] = &[
    metric("3.1", "Episodic burning epigastric pain", 6),
    metric(
        "3.2",
        "Symptoms worse after eating, on an empty stomach and nighttime awakening",
        6,
    ),
    metric("3.3", "Symptoms relieved with food and antacids", 6),
    metric("3.4", "Melena or hematemesis", 6),
    metric(
        "3.5",
        "Less common symptoms: nausea, vomiting, loss of appetite, bloating",
        6,
    ),
];

const PANCREATITIS_HISTORY: &[Metric] = &[
    metric("3.1", "severe epigastric and RUQ pain", 6),
    metric("3.2", "Pain from gallstones: sudden onset", 6),
    metric(
        "3.3",
        "Pain from anything related to ethanol or alcohol: more gradual onset",
        6,
    ),
    metric("3.4", "Characteristics include acute and constant pain", 6),
    metric("3.5", "Radiation to the back", 6),
];

const FOOD_POISONING_HISTORY: &[Metric] = &[
    metric(
        "3.1",
        "Characteristic of stool (watery, mucous, bloody), frequency of stool and amount of stool",
        6,
    ),
    metric("3.2", "Characteristic of vomitus, Frequency of vomit", 6),
    metric("3.3", "nausea, vomiting, loss of appetite, bloating", 6),
    metric(
        "3.4",
        "History of food exposure (raw, cooked, spoiled food)",
        6,
    ),
    metric("3.5", "People in the house who have the same symptoms", 6),
];

const KIDNEY_STONE_HISTORY: &[Metric] = &[
    metric("3.1", "Pain starts rapidly and waxes and wanes", 6),
    metric(
        "3.2",
        "Flank pain (commonly radiating into lower abdomen and genitals as the stone passes down the ureter)",
        6,
    ),
    metric("3.3", "Hematuria (gross or microscopic)", 6),
    metric("3.4", "Recurrent UTIs", 6),
    metric(
        "3.5",
        "Bladder dysfunction (if the stone is lodged at the junction between the ureter and bladder)",
        3,
    ),
    metric("3.6", "Personal history of: DM, Obesity", 3),
    metric(
        "3.7",
        "Medication use, including Calcium containing supplements, Vitamin D",
        3,
    ),
];

const PEPTIC_ULCER_DIAGNOSIS: &[Metric] = &[metric("4.1", "Diagnosis: Peptic ulcer disease", 20)];
const PANCREATITIS_DIAGNOSIS: &[Metric] = &[metric("4.1", "Diagnosis: Acute pancreatitis", 20)];
const FOOD_POISONING_DIAGNOSIS: &[Metric] = &[metric("4.1", "Diagnosis: Food poisoning", 20)];
const KIDNEY_STONE_DIAGNOSIS: &[Metric] = &[metric("4.1", "Diagnosis: Kidney stones", 20)];

/// Ordered metrics graded for `case` within `domain`. Empty for
/// [`Case::Unknown`].
pub fn lookup(case: Case, domain: Domain) -> &'static [Metric] {
    match (case, domain) {
        (Case::Unknown, _) => &[],
        (_, Domain::CommunicationSkills) => COMMUNICATION_SKILLS,
        (Case::KidneyStones, Domain::GeneralHistoryTaking) => FLANK_PAIN_HISTORY,
        (_, Domain::GeneralHistoryTaking) => ABDOMINAL_PAIN_HISTORY,
        (Case::PepticUlcerDisease, Domain::DiseaseSpecificHistory) => PEPTIC_ULCER_HISTORY,
        (Case::AcutePancreatitis, Domain::DiseaseSpecificHistory) => PANCREATITIS_HISTORY,
        (Case::FoodPoisoning, Domain::DiseaseSpecificHistory) => FOOD_POISONING_HISTORY,
        (Case::KidneyStones, Domain::DiseaseSpecificHistory) => KIDNEY_STONE_HISTORY,
        (Case::PepticUlcerDisease, Domain::Diagnosis) => PEPTIC_ULCER_DIAGNOSIS,
        (Case::AcutePancreatitis, Domain::Diagnosis) => PANCREATITIS_DIAGNOSIS,
        (Case::FoodPoisoning, Domain::Diagnosis) => FOOD_POISONING_DIAGNOSIS,
        (Case::KidneyStones, Domain::Diagnosis) => KIDNEY_STONE_DIAGNOSIS,
    }
}

/// Sum of `max_score` across one domain of a case.
pub fn domain_max(case: Case, domain: Domain) -> i64 {
    lookup(case, domain)
        .iter()
        .map(|metric| i64::from(metric.max_score))
        .sum()
}

/// Catalog overview for one case, used by listings.
#[derive(Debug, Clone, Serialize)]
pub struct CaseSummary {
    pub case: Case,
    pub name: &'static str,
    pub domains: Vec<DomainSummary>,
    pub max_total: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainSummary {
    pub domain: Domain,
    pub label: &'static str,
    pub metric_count: usize,
    pub max_total: i64,
}

impl CaseSummary {
    pub fn for_case(case: Case) -> Self {
        let domains: Vec<DomainSummary> = Domain::ordered()
            .into_iter()
            .map(|domain| DomainSummary {
                domain,
                label: domain.label(),
                metric_count: lookup(case, domain).len(),
                max_total: domain_max(case, domain),
            })
            .collect();
        let max_total = domains.iter().map(|entry| entry.max_total).sum();

        Self {
            case,
            name: case.name(),
            domains,
            max_total,
        }
    }
}

/// Summaries for every scored case in catalog order.
pub fn summaries() -> Vec<CaseSummary> {
    Case::known().into_iter().map(CaseSummary::for_case).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unknown_case_has_no_metrics() {
        for domain in Domain::ordered() {
            assert!(lookup(Case::Unknown, domain).is_empty());
        }
    }

    #[test]
    fn metric_ids_are_unique_within_each_domain() {
        for case in Case::known() {
            for domain in Domain::ordered() {
                let metrics = lookup(case, domain);
                let ids: HashSet<_> = metrics.iter().map(|metric| metric.id).collect();
                assert_eq!(ids.len(), metrics.len(), "{case} / {domain}");
                assert!(metrics.iter().all(|metric| metric.max_score > 0));
            }
        }
    }

    #[test]
    fn kidney_stone_catalog_matches_expected_shape() {
        assert_eq!(lookup(Case::KidneyStones, Domain::GeneralHistoryTaking).len(), 3);
        assert_eq!(domain_max(Case::KidneyStones, Domain::DiseaseSpecificHistory), 33);
        assert_eq!(domain_max(Case::KidneyStones, Domain::Diagnosis), 20);
    }

    #[test]
    fn summaries_cover_every_known_case() {
        let summaries = summaries();
        assert_eq!(summaries.len(), 4);
        let peptic = &summaries[0];
        assert_eq!(peptic.name, "Peptic ulcer disease");
        assert_eq!(peptic.domains[0].max_total, 20);
        assert_eq!(peptic.domains[1].max_total, 30);
        assert_eq!(peptic.domains[2].max_total, 30);
        assert_eq!(peptic.max_total, 100);
    }
}
