// Report endpoints
//
// Every `Report*` operation returns raw comma-separated text. Most take a
// date window plus a timezone offset and a handful of filter id lists;
// the window is shared via `ReportWindow`, the filters are positional.

use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::FeneroClient;
use crate::error::Error;
use crate::operation::Operation;

/// Date format used by [`DateRange::from_dates`] and [`ReportWindow::from_dates`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive start/end dates, sent as `startDate` / `endDate`.
///
/// Values are passed through verbatim, so any format the server accepts
/// works; [`from_dates`](Self::from_dates) produces ISO dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        )
    }

    pub(crate) fn apply(&self, op: Operation) -> Operation {
        op.param("startDate", &self.start_date)
            .param("endDate", &self.end_date)
    }
}

/// Date range plus timezone offset shared by the windowed reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportWindow {
    #[serde(flatten)]
    pub range: DateRange,
    /// Offset from UTC as the server expects it, e.g. `-5`.
    pub tz_offset: String,
}

impl ReportWindow {
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        tz_offset: impl Display,
    ) -> Self {
        Self {
            range: DateRange::new(start_date, end_date),
            tz_offset: tz_offset.to_string(),
        }
    }

    pub fn from_dates(start: NaiveDate, end: NaiveDate, tz_offset: impl Display) -> Self {
        Self {
            range: DateRange::from_dates(start, end),
            tz_offset: tz_offset.to_string(),
        }
    }

    /// Start a report operation: `startDate`, `endDate` first, filters
    /// follow, `tzOffset` is appended by [`FeneroClient::run_report`].
    fn operation(&self, name: &'static str) -> Operation {
        self.range.apply(Operation::new(name))
    }
}

impl FeneroClient {
    /// Close a windowed report operation with its `tzOffset` and run it.
    async fn run_report(&self, window: &ReportWindow, op: Operation) -> Result<String, Error> {
        let op = op.param("tzOffset", &window.tz_offset);
        self.perform_text(&op).await
    }

    // ── Agent reports ────────────────────────────────────────────────

    /// `GET /MobileApi/ReportAgentActivitySummary`
    pub async fn report_agent_activity_summary(
        &self,
        window: &ReportWindow,
        users: impl IntoIterator<Item = impl Display>,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportAgentActivitySummary")
            .param_list("users", users)
            .param_list("campaignIds", campaign_ids);
        self.run_report(window, op).await
    }

    /// `GET /MobileApi/ReportAgentAuxDetail`
    pub async fn report_agent_aux_detail(
        &self,
        window: &ReportWindow,
        report_type: impl Display,
        users: impl IntoIterator<Item = impl Display>,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportAgentAuxDetail")
            .param("reportType", report_type)
            .param_list("users", users)
            .param_list("campaignIds", campaign_ids);
        self.run_report(window, op).await
    }

    /// `GET /MobileApi/ReportAgentPerformanceDetail`
    pub async fn report_agent_performance_detail(
        &self,
        window: &ReportWindow,
        report_type: impl Display,
        users: impl IntoIterator<Item = impl Display>,
        campaign_ids: impl IntoIterator<Item = impl Display>,
        queue_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportAgentPerformanceDetail")
            .param("reportType", report_type)
            .param_list("users", users)
            .param_list("campaignIds", campaign_ids)
            .param_list("queueIds", queue_ids);
        self.run_report(window, op).await
    }

    /// `GET /MobileApi/ReportAgentLog`
    pub async fn report_agent_log(
        &self,
        window: &ReportWindow,
        users: impl IntoIterator<Item = impl Display>,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportAgentLog")
            .param_list("users", users)
            .param_list("campaignIds", campaign_ids);
        self.run_report(window, op).await
    }

    /// `GET /MobileApi/ReportAgentStaffTime`
    pub async fn report_agent_staff_time(
        &self,
        window: &ReportWindow,
        users: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportAgentStaffTime")
            .param_list("users", users);
        self.run_report(window, op).await
    }

    /// `GET /MobileApi/ReportAgentDisposition`
    pub async fn report_agent_disposition(
        &self,
        window: &ReportWindow,
        users: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportAgentDisposition")
            .param_list("users", users);
        self.run_report(window, op).await
    }

    // ── Campaign reports ─────────────────────────────────────────────

    /// Do-not-call entries for the given campaigns. Not date-bound.
    ///
    /// `GET /MobileApi/ReportCampaignDNC`
    pub async fn report_campaign_dnc(
        &self,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = Operation::new("ReportCampaignDNC").param_list("campaignIds", campaign_ids);
        self.perform_text(&op).await
    }

    // ── Call detail records ──────────────────────────────────────────

    /// Source of all inbound call billing activity.
    ///
    /// `GET /MobileApi/ReportCallDetailRecordsInbound`
    pub async fn report_call_detail_records_inbound(
        &self,
        window: &ReportWindow,
    ) -> Result<String, Error> {
        let op = window.operation("ReportCallDetailRecordsInbound");
        self.run_report(window, op).await
    }

    /// Source of all outbound call billing activity.
    ///
    /// `GET /MobileApi/ReportCallDetailRecordsOutbound`
    pub async fn report_call_detail_records_outbound(
        &self,
        window: &ReportWindow,
    ) -> Result<String, Error> {
        let op = window.operation("ReportCallDetailRecordsOutbound");
        self.run_report(window, op).await
    }

    /// Inbound and outbound billing activity together.
    ///
    /// `GET /MobileApi/ReportCallDetailRecordsCombined`
    pub async fn report_call_detail_records_combined(
        &self,
        window: &ReportWindow,
    ) -> Result<String, Error> {
        let op = window.operation("ReportCallDetailRecordsCombined");
        self.run_report(window, op).await
    }

    /// Summarised view of the combined call detail records.
    ///
    /// `GET /MobileApi/ReportCallDetailUsage`
    pub async fn report_call_detail_usage(
        &self,
        window: &ReportWindow,
        report_type: impl Display,
        users: impl IntoIterator<Item = impl Display>,
        campaign_ids: impl IntoIterator<Item = impl Display>,
        queue_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportCallDetailUsage")
            .param("reportType", report_type)
            .param_list("users", users)
            .param_list("campaignIds", campaign_ids)
            .param_list("queueIds", queue_ids);
        self.run_report(window, op).await
    }

    // ── Interaction reports ──────────────────────────────────────────

    /// `GET /MobileApi/ReportLiveChatLog`
    pub async fn report_live_chat_log(
        &self,
        window: &ReportWindow,
        chat_queue_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportLiveChatLog")
            .param_list("chatQueueIds", chat_queue_ids);
        self.run_report(window, op).await
    }

    /// `GET /MobileApi/ReportInteractionDetail`
    pub async fn report_interaction_detail(
        &self,
        window: &ReportWindow,
        list_ids: impl IntoIterator<Item = impl Display>,
        disposition_ids: impl IntoIterator<Item = impl Display>,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportInteractionDetail")
            .param_list("listIds", list_ids)
            .param_list("dispositionIds", disposition_ids)
            .param_list("campaignIds", campaign_ids);
        self.run_report(window, op).await
    }

    /// `GET /MobileApi/ReportInteractionDetailLog`
    pub async fn report_interaction_detail_log(
        &self,
        window: &ReportWindow,
        list_ids: impl IntoIterator<Item = impl Display>,
        disposition_ids: impl IntoIterator<Item = impl Display>,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportInteractionDetailLog")
            .param_list("listIds", list_ids)
            .param_list("dispositionIds", disposition_ids)
            .param_list("campaignIds", campaign_ids);
        self.run_report(window, op).await
    }

    /// `GET /MobileApi/ReportSystemCallLog`
    pub async fn report_system_call_log(
        &self,
        window: &ReportWindow,
        queue_ids: impl IntoIterator<Item = impl Display>,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportSystemCallLog")
            .param_list("queueIds", queue_ids)
            .param_list("campaignIds", campaign_ids);
        self.run_report(window, op).await
    }

    // ── List reports ─────────────────────────────────────────────────

    /// `GET /MobileApi/ReportLeadDetail`
    pub async fn report_lead_detail(
        &self,
        window: &ReportWindow,
        list_ids: impl IntoIterator<Item = impl Display>,
        queue_ids: impl IntoIterator<Item = impl Display>,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportLeadDetail")
            .param_list("listIds", list_ids)
            .param_list("queueIds", queue_ids)
            .param_list("campaignIds", campaign_ids);
        self.run_report(window, op).await
    }

    /// `GET /MobileApi/ReportDispositionSummary`
    pub async fn report_disposition_summary(
        &self,
        window: &ReportWindow,
        list_ids: impl IntoIterator<Item = impl Display>,
        queue_ids: impl IntoIterator<Item = impl Display>,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportDispositionSummary")
            .param_list("listIds", list_ids)
            .param_list("queueIds", queue_ids)
            .param_list("campaignIds", campaign_ids);
        self.run_report(window, op).await
    }

    /// Outbound-only flash summary.
    ///
    /// `GET /MobileApi/ReportFlashSummary`
    pub async fn report_flash_summary(
        &self,
        window: &ReportWindow,
        list_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<String, Error> {
        let op = window
            .operation("ReportFlashSummary")
            .param_list("listIds", list_ids);
        self.run_report(window, op).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn window_from_dates_uses_iso_format() {
        let w = ReportWindow::from_dates(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            -5,
        );
        assert_eq!(w.range.start_date, "2024-03-01");
        assert_eq!(w.range.end_date, "2024-03-31");
        assert_eq!(w.tz_offset, "-5");
    }

    #[test]
    fn window_operation_leads_with_dates() {
        let w = ReportWindow::new("01/01/2024", "01/31/2024", "0");
        let op = w.operation("ReportFlashSummary");
        assert_eq!(
            op.params(),
            &[
                ("startDate", "01/01/2024".to_string()),
                ("endDate", "01/31/2024".to_string()),
            ]
        );
    }

    #[test]
    fn window_serializes_flat() {
        let w = ReportWindow::new("a", "b", "-7");
        let v = serde_json::to_value(&w).unwrap();
        assert_eq!(
            v,
            serde_json::json!({ "startDate": "a", "endDate": "b", "tzOffset": "-7" })
        );
    }
}
