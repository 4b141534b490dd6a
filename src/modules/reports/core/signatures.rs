// Monthly signatures: a worker's write-once consent to one month of records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use crate::modules::reports::core::period::ReportPeriod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySignature {
    pub id: Uuid,
    pub worker_id: String,
    pub company_id: String,
    pub year: i32,
    pub month: u32,
    pub signed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureStatus {
    Pending,
    Signed,
}

impl SignatureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureStatus::Pending => "pending",
            SignatureStatus::Signed => "signed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSignatureState {
    pub year: i32,
    pub month: u32,
    pub status: SignatureStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignatureOverview {
    pub pending: Vec<MonthSignatureState>,
    pub signed: Vec<MonthSignatureState>,
}

/// The twelve calendar months before `current`, newest first.
pub fn candidate_months(current: (i32, u32)) -> Vec<(i32, u32)> {
    std::iter::successors(Some(current), |&(year, month)| {
        Some(ReportPeriod::previous_month(year, month))
    })
    .skip(1)
    .take(12)
    .collect()
}

/// Signed months come from the signatures, pending ones are months with
/// records but no signature. Months with neither are left out.
pub fn overview(
    months: &[(i32, u32)],
    signatures: &[MonthlySignature],
    months_with_records: &BTreeSet<(i32, u32)>,
) -> SignatureOverview {
    let signed_at: HashMap<(i32, u32), DateTime<Utc>> = signatures
        .iter()
        .map(|signature| ((signature.year, signature.month), signature.signed_at))
        .collect();

    months
        .iter()
        .fold(SignatureOverview::default(), |mut acc, &(year, month)| {
            if let Some(at) = signed_at.get(&(year, month)) {
                acc.signed.push(MonthSignatureState {
                    year,
                    month,
                    status: SignatureStatus::Signed,
                    signed_at: Some(*at),
                });
            } else if months_with_records.contains(&(year, month)) {
                acc.pending.push(MonthSignatureState {
                    year,
                    month,
                    status: SignatureStatus::Pending,
                    signed_at: None,
                });
            }
            acc
        })
}

#[cfg(test)]
mod signature_overview_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn signature(year: i32, month: u32) -> MonthlySignature {
        MonthlySignature {
            id: Uuid::now_v7(),
            worker_id: "w-1".into(),
            company_id: "c-1".into(),
            year,
            month,
            signed_at: Utc.with_ymd_and_hms(year, month, 28, 9, 0, 0).unwrap(),
        }
    }

    #[rstest]
    fn it_should_list_the_twelve_previous_months_across_the_year_boundary() {
        let months = candidate_months((2025, 3));
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], (2025, 2));
        assert_eq!(months[2], (2024, 12));
        assert_eq!(months[11], (2024, 3));
    }

    #[rstest]
    fn it_should_split_signed_and_pending_months() {
        let months = candidate_months((2025, 3));
        let records = BTreeSet::from([(2025, 1), (2025, 2), (2023, 12)]);
        let result = overview(&months, &[signature(2025, 1), signature(2024, 6)], &records);

        let pending: Vec<_> = result.pending.iter().map(|m| (m.year, m.month)).collect();
        let signed: Vec<_> = result.signed.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(pending, vec![(2025, 2)]);
        assert_eq!(signed, vec![(2025, 1), (2024, 6)]);
        assert!(result.signed.iter().all(|m| m.signed_at.is_some()));
    }

    #[rstest]
    fn it_should_serialize_status_in_snake_case() {
        let json = serde_json::to_value(MonthSignatureState {
            year: 2025,
            month: 2,
            status: SignatureStatus::Pending,
            signed_at: None,
        })
        .unwrap();
        assert_eq!(json["status"], "pending");
        assert!(json.get("signed_at").is_none());
    }
}
