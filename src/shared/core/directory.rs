// Reference data the clock ledger and reports consult but never mutate.
//
// Companies, workers and pause types are managed by an external collaborator
// (CRUD, soft delete, the "kind is frozen once referenced" rule). The core only
// reads them through the Directory port.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// National id (DNI/NIE) printed on inspection reports.
    pub id_number: String,
    pub company_ids: Vec<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl Worker {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            "Unknown Worker".to_string()
        } else {
            name.to_string()
        }
    }

    pub fn belongs_to(&self, company_id: &str) -> bool {
        self.company_ids.iter().any(|id| id == company_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseKind {
    /// Break counted as work time.
    InsideShift,
    /// Pause deducted from worked time.
    OutsideShift,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseType {
    pub id: String,
    pub name: String,
    pub kind: PauseKind,
    pub company_ids: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl PauseType {
    pub fn counts_as_work(&self) -> bool {
        self.kind == PauseKind::InsideShift
    }

    pub fn applies_to(&self, company_id: &str) -> bool {
        !self.deleted && self.company_ids.iter().any(|id| id == company_id)
    }
}

#[cfg(test)]
mod directory_records_tests {
    use super::*;
    use rstest::rstest;

    fn pause_type(kind: PauseKind, deleted: bool) -> PauseType {
        PauseType {
            id: "pt-1".into(),
            name: "Lunch".into(),
            kind,
            company_ids: vec!["c-1".into()],
            description: None,
            deleted,
        }
    }

    #[rstest]
    #[case(PauseKind::InsideShift, true)]
    #[case(PauseKind::OutsideShift, false)]
    fn it_should_derive_counts_as_work_from_kind(#[case] kind: PauseKind, #[case] expected: bool) {
        assert_eq!(pause_type(kind, false).counts_as_work(), expected);
    }

    #[rstest]
    fn it_should_only_apply_to_listed_companies_when_not_deleted() {
        assert!(pause_type(PauseKind::OutsideShift, false).applies_to("c-1"));
        assert!(!pause_type(PauseKind::OutsideShift, false).applies_to("c-2"));
        assert!(!pause_type(PauseKind::OutsideShift, true).applies_to("c-1"));
    }

    #[rstest]
    fn it_should_build_the_full_name_with_a_fallback() {
        let mut worker = Worker {
            id: "w-1".into(),
            first_name: "Ana".into(),
            last_name: "García".into(),
            id_number: "12345678Z".into(),
            company_ids: vec!["c-1".into()],
            deleted: false,
        };
        assert_eq!(worker.full_name(), "Ana García");
        assert!(worker.belongs_to("c-1"));
        worker.first_name.clear();
        worker.last_name.clear();
        assert_eq!(worker.full_name(), "Unknown Worker");
    }

    #[rstest]
    fn it_should_deserialize_kind_in_snake_case() {
        let json = r#"{"id":"pt-1","name":"Lunch","kind":"outside_shift","company_ids":["c-1"]}"#;
        let parsed: PauseType = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, PauseKind::OutsideShift);
        assert!(!parsed.deleted);
    }
}
