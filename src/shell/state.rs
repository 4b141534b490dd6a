use std::sync::Arc;

use crate::modules::reports::core::policy::ReportPolicy;
use crate::modules::reports::use_cases::export_report::handler::ExportReportHandler;
use crate::modules::reports::use_cases::monthly_summary::handler::MonthlySummaryHandler;
use crate::modules::reports::use_cases::overtime_report::handler::OvertimeReportHandler;
use crate::modules::reports::use_cases::sign_month::handler::SignMonthHandler;
use crate::modules::reports::use_cases::signature_status::handler::SignatureStatusHandler;
use crate::modules::time_records::core::events::ClockEvent;
use crate::modules::time_records::use_cases::apply_change::handler::ApplyChangeHandler;
use crate::modules::time_records::use_cases::current_status::handler::CurrentStatusHandler;
use crate::modules::time_records::use_cases::effective_minutes::handler::EffectiveMinutesHandler;
use crate::modules::time_records::use_cases::list_records::handler::ListRecordsHandler;
use crate::modules::time_records::use_cases::submit_clock_action::handler::SubmitClockActionHandler;
use crate::modules::time_records::use_cases::validate_change::handler::ValidateChangeHandler;
use crate::modules::time_records::use_cases::verify_integrity::handler::VerifyIntegrityHandler;
use crate::shared::infrastructure::directory::in_memory::InMemoryDirectory;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::signature_store::in_memory::InMemorySignatureStore;

pub type ClockStore = InMemoryEventStore<ClockEvent>;

#[derive(Clone)]
pub struct AppState {
    pub submit_clock_action: Arc<SubmitClockActionHandler<ClockStore, InMemoryDirectory>>,
    pub effective_minutes: Arc<EffectiveMinutesHandler<ClockStore>>,
    pub current_status: Arc<CurrentStatusHandler<ClockStore, InMemoryDirectory>>,
    pub list_records: Arc<ListRecordsHandler<ClockStore>>,
    pub validate_change: Arc<ValidateChangeHandler<ClockStore>>,
    pub apply_change: Arc<ApplyChangeHandler<ClockStore>>,
    pub verify_integrity: Arc<VerifyIntegrityHandler<ClockStore>>,
    pub monthly_summary:
        Arc<MonthlySummaryHandler<ClockStore, InMemoryDirectory, InMemorySignatureStore>>,
    pub overtime_report:
        Arc<OvertimeReportHandler<ClockStore, InMemoryDirectory, InMemorySignatureStore>>,
    pub sign_month: Arc<SignMonthHandler<InMemoryDirectory, InMemorySignatureStore>>,
    pub signature_status: Arc<SignatureStatusHandler<ClockStore, InMemorySignatureStore>>,
    pub export_report:
        Arc<ExportReportHandler<ClockStore, InMemoryDirectory, InMemorySignatureStore>>,
}

impl AppState {
    pub fn new(
        event_store: Arc<ClockStore>,
        directory: Arc<InMemoryDirectory>,
        signatures: Arc<InMemorySignatureStore>,
        policy: ReportPolicy,
        replay_pause_edits: bool,
    ) -> Self {
        let max_records = policy.max_records_per_month;
        let monthly_summary = Arc::new(MonthlySummaryHandler::new(
            event_store.clone(),
            directory.clone(),
            signatures.clone(),
            policy,
        ));
        let overtime_report = Arc::new(OvertimeReportHandler::new(monthly_summary.clone()));

        Self {
            submit_clock_action: Arc::new(SubmitClockActionHandler::new(
                event_store.clone(),
                directory.clone(),
            )),
            effective_minutes: Arc::new(EffectiveMinutesHandler::new(event_store.clone())),
            current_status: Arc::new(CurrentStatusHandler::new(
                event_store.clone(),
                directory.clone(),
            )),
            list_records: Arc::new(ListRecordsHandler::new(event_store.clone(), max_records)),
            validate_change: Arc::new(ValidateChangeHandler::new(
                event_store.clone(),
                replay_pause_edits,
            )),
            apply_change: Arc::new(ApplyChangeHandler::new(
                event_store.clone(),
                replay_pause_edits,
            )),
            verify_integrity: Arc::new(VerifyIntegrityHandler::new(event_store.clone())),
            export_report: Arc::new(ExportReportHandler::new(
                monthly_summary.clone(),
                overtime_report.clone(),
            )),
            monthly_summary,
            overtime_report,
            sign_month: Arc::new(SignMonthHandler::new(directory, signatures.clone())),
            signature_status: Arc::new(SignatureStatusHandler::new(event_store, signatures)),
        }
    }
}
