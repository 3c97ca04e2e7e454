#![allow(clippy::unwrap_used)]
// Integration tests for `FeneroClient` using wiremock.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fenero_api::{
    Credentials, DateRange, Error, FeneroClient, NewList, Operation, Payload, ReportWindow,
    SessionTarget,
};

// ── Helpers ─────────────────────────────────────────────────────────

const ACCOUNT: &str = "acct-1001";
const TOKEN: &str = "tok-abcdef";

async fn setup() -> (MockServer, FeneroClient) {
    let server = MockServer::start().await;
    let creds = Credentials::new(ACCOUNT, SecretString::from(TOKEN.to_string()));
    let client = FeneroClient::with_client(
        reqwest::Client::new(),
        &format!("{}/MobileApi/", server.uri()),
        creds,
    )
    .unwrap();
    (server, client)
}

fn api_path(op: &str) -> String {
    format!("/MobileApi/{op}")
}

/// Mock `op` with credential matchers so a request lacking either
/// credential falls through to wiremock's default 404.
fn authed(op: &str) -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path(api_path(op)))
        .and(query_param("userId", ACCOUNT))
        .and(query_param("appTokenId", TOKEN))
}

/// All `(key, value)` pairs of the single request the server received.
async fn sent_query(server: &MockServer) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn window() -> ReportWindow {
    ReportWindow::new("2024-05-01", "2024-05-31", "-5")
}

// ── Generic perform ─────────────────────────────────────────────────

#[tokio::test]
async fn test_perform_decodes_json() {
    let (server, client) = setup().await;

    authed("GetDIDs")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "dids": ["8005550100"] })))
        .mount(&server)
        .await;

    let payload = client.perform(&Operation::new("GetDIDs")).await.unwrap();

    assert_eq!(payload, Payload::Json(json!({ "dids": ["8005550100"] })));
}

#[tokio::test]
async fn test_perform_falls_back_to_text() {
    let (server, client) = setup().await;

    let csv = "Date,Calls\n2024-05-01,17\n";
    authed("ReportFlashSummary")
        .respond_with(ResponseTemplate::new(200).set_body_string(csv))
        .mount(&server)
        .await;

    let payload = client
        .perform(&Operation::new("ReportFlashSummary"))
        .await
        .unwrap();

    assert_eq!(payload, Payload::Text(csv.to_string()));
}

#[tokio::test]
async fn test_perform_non_200_is_request_failed() {
    let (server, client) = setup().await;

    for status in [201, 400, 401, 404, 500] {
        server.reset().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .mount(&server)
            .await;

        let result = client.perform(&Operation::new("GetUsers")).await;

        match result {
            Err(Error::RequestFailed {
                operation,
                status: got,
                body,
            }) => {
                assert_eq!(operation, "GetUsers");
                assert_eq!(got, status);
                assert_eq!(body, "nope");
            }
            other => panic!("expected RequestFailed for {status}, got: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_lookup_rejects_text_body() {
    let (server, client) = setup().await;

    authed("GetDispositions")
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client.get_dispositions().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => assert!(body.contains("maintenance")),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_error_hides_access_token() {
    // Nothing listens on port 1, so the connection is refused.
    let creds = Credentials::new(ACCOUNT, SecretString::from(TOKEN.to_string()));
    let client =
        FeneroClient::with_client(reqwest::Client::new(), "http://127.0.0.1:1/MobileApi/", creds)
            .unwrap();

    let err = client.get_users().await.unwrap_err();

    let Error::Transport(ref inner) = err else {
        panic!("expected a transport error, got {err:?}");
    };
    assert_eq!(err.status(), None);
    assert!(err.is_transient());
    let url = inner.url().unwrap();
    assert_eq!(url.path(), "/MobileApi/GetUsers");
    assert_eq!(url.query(), None);

    let mut shown = format!("{err} {err:?}");
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        shown.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    assert!(!shown.contains(TOKEN), "token leaked: {shown}");
    assert!(!shown.contains("appTokenId"), "query leaked: {shown}");
}

// ── Lookups ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_users_returns_array_unchanged() {
    let (server, client) = setup().await;

    let users = json!([
        { "userId": 7, "userName": "alice", "active": true },
        { "userId": 9, "userName": "bob", "active": false }
    ]);

    authed("GetUsers")
        .respond_with(ResponseTemplate::new(200).set_body_json(&users))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.get_users().await.unwrap();

    assert_eq!(result, users);
}

#[tokio::test]
async fn test_every_lookup_sends_credentials() {
    let (server, client) = setup().await;

    for op in [
        "GetCampaignsAndQueues",
        "GetLiveChatQueues",
        "GetDIDs",
        "GetDispositions",
        "GetUsers",
    ] {
        authed(op)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([op])))
            .expect(1)
            .mount(&server)
            .await;
    }

    assert_eq!(
        client.get_campaigns_and_queues().await.unwrap(),
        json!(["GetCampaignsAndQueues"])
    );
    assert_eq!(
        client.get_live_chat_queues().await.unwrap(),
        json!(["GetLiveChatQueues"])
    );
    assert_eq!(client.get_dids().await.unwrap(), json!(["GetDIDs"]));
    assert_eq!(
        client.get_dispositions().await.unwrap(),
        json!(["GetDispositions"])
    );
    assert_eq!(client.get_users().await.unwrap(), json!(["GetUsers"]));
}

// ── Live monitoring ─────────────────────────────────────────────────

#[tokio::test]
async fn test_realtime_stats_repeats_list_keys() {
    let (server, client) = setup().await;

    authed("GetRealtimeStats")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "agents": [] })))
        .mount(&server)
        .await;

    client
        .get_realtime_stats([11, 12], ["g1"])
        .await
        .unwrap();

    let query = sent_query(&server).await;
    assert_eq!(
        query,
        vec![
            ("userId".to_string(), ACCOUNT.to_string()),
            ("appTokenId".to_string(), TOKEN.to_string()),
            ("campaignIds".to_string(), "11".to_string()),
            ("campaignIds".to_string(), "12".to_string()),
            ("groupIds".to_string(), "g1".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_monitor_and_barge_send_session_target() {
    let (server, client) = setup().await;

    let target = SessionTarget {
        session_id: "S-42".into(),
        server_ip: "10.1.2.3".into(),
        user_phone: "5550001".into(),
        agent_id: "A-9".into(),
    };

    for op in ["Monitor", "Barge"] {
        authed(op)
            .and(query_param("sessionId", "S-42"))
            .and(query_param("serverIP", "10.1.2.3"))
            .and(query_param("userPhone", "5550001"))
            .and(query_param("agentID", "A-9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": op })))
            .expect(1)
            .mount(&server)
            .await;
    }

    assert_eq!(
        client.monitor(&target).await.unwrap(),
        json!({ "result": "Monitor" })
    );
    assert_eq!(
        client.barge(&target).await.unwrap(),
        json!({ "result": "Barge" })
    );
}

// ── Lists ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_list() {
    let (server, client) = setup().await;

    authed("CreateList")
        .and(query_param("name", "Spring Leads"))
        .and(query_param("description", "Q2 outbound"))
        .and(query_param("callerId", "8005550199"))
        .and(query_param("campaignId", "301"))
        .and(query_param("resetTimes", "2"))
        .and(query_param("active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "listId": 88 })))
        .expect(1)
        .mount(&server)
        .await;

    let list = NewList {
        name: "Spring Leads".into(),
        description: "Q2 outbound".into(),
        caller_id: "8005550199".into(),
        campaign_id: "301".into(),
        reset_times: 2,
        active: true,
    };

    assert_eq!(
        client.create_list(&list).await.unwrap(),
        json!({ "listId": 88 })
    );
}

#[tokio::test]
async fn test_copy_custom_fields_and_get_lists() {
    let (server, client) = setup().await;

    authed("CopyCustomFields")
        .and(query_param("sourceListId", "10"))
        .and(query_param("destinationListId", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "copied": 4 })))
        .expect(1)
        .mount(&server)
        .await;
    authed("GetLists")
        .and(query_param("campaignIds", "301"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "listId": 10 }])))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(
        client.copy_custom_fields(10, 20).await.unwrap(),
        json!({ "copied": 4 })
    );
    assert_eq!(
        client.get_lists(["301"]).await.unwrap(),
        json!([{ "listId": 10 }])
    );
}

#[tokio::test]
async fn test_stop_list() {
    let (server, client) = setup().await;

    authed("StopList")
        .and(query_param("listId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "stopped" })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(
        client.stop_list(42).await.unwrap(),
        json!({ "status": "stopped" })
    );
}

#[tokio::test]
async fn test_start_list_forbidden() {
    let (server, client) = setup().await;

    authed("StartList")
        .and(query_param("listId", "42"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.start_list(42).await.unwrap_err();

    assert!(
        matches!(err, Error::RequestFailed { status: 403, .. }),
        "expected RequestFailed, got: {err:?}"
    );
    assert_eq!(err.status(), Some(403));
    assert!(err.is_auth_failure());

    // `expect(1)` is verified on drop; double-check nothing else went out.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

// ── Reports ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_report_agent_log_returns_exact_text() {
    let (server, client) = setup().await;

    let csv = "Agent,Login,Logout\r\nalice,08:00,16:30\r\nbob,09:00,17:00\r\n";
    authed("ReportAgentLog")
        .and(query_param("startDate", "2024-05-01"))
        .and(query_param("endDate", "2024-05-31"))
        .and(query_param("users", "alice"))
        .and(query_param("users", "bob"))
        .and(query_param("campaignIds", "301"))
        .and(query_param("tzOffset", "-5"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/csv")
                .set_body_string(csv),
        )
        .expect(1)
        .mount(&server)
        .await;

    let text = client
        .report_agent_log(&window(), ["alice", "bob"], [301])
        .await
        .unwrap();

    assert_eq!(text, csv);
}

#[tokio::test]
async fn test_report_body_is_never_reparsed() {
    let (server, client) = setup().await;

    authed("ReportCampaignDNC")
        .and(query_param("campaignIds", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .mount(&server)
        .await;

    let text = client.report_campaign_dnc([5]).await.unwrap();

    assert_eq!(text, "42");
    let keys: Vec<String> = sent_query(&server).await.into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["userId", "appTokenId", "campaignIds"]);
}

#[tokio::test]
async fn test_report_failure_is_request_failed() {
    let (server, client) = setup().await;

    authed("ReportLeadDetail")
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client
        .report_lead_detail(&window(), [1], [2], [3])
        .await;

    assert!(
        matches!(result, Err(Error::RequestFailed { status: 500, .. })),
        "expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_call_detail_outbound_uses_its_own_operation() {
    let (server, client) = setup().await;

    authed("ReportCallDetailRecordsOutbound")
        .and(query_param("tzOffset", "-5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("out"))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(
        client
            .report_call_detail_records_outbound(&window())
            .await
            .unwrap(),
        "out"
    );
}

#[tokio::test]
async fn test_call_detail_usage_sends_queue_ids() {
    let (server, client) = setup().await;

    authed("ReportCallDetailUsage")
        .respond_with(ResponseTemplate::new(200).set_body_string("usage"))
        .mount(&server)
        .await;

    client
        .report_call_detail_usage(&window(), "daily", ["alice"], [301], [77])
        .await
        .unwrap();

    let query = sent_query(&server).await;
    let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        [
            "userId",
            "appTokenId",
            "startDate",
            "endDate",
            "reportType",
            "users",
            "campaignIds",
            "queueIds",
            "tzOffset",
        ]
    );
}

#[tokio::test]
async fn test_every_report_sends_credentials() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(query_param("userId", ACCOUNT))
        .and(query_param("appTokenId", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let w = window();
    let none: [u32; 0] = [];
    let results = [
        client.report_agent_activity_summary(&w, none, none).await,
        client.report_agent_aux_detail(&w, "summary", none, none).await,
        client
            .report_agent_performance_detail(&w, "summary", none, none, none)
            .await,
        client.report_agent_log(&w, none, none).await,
        client.report_agent_staff_time(&w, none).await,
        client.report_agent_disposition(&w, none).await,
        client.report_campaign_dnc(none).await,
        client.report_call_detail_records_inbound(&w).await,
        client.report_call_detail_records_outbound(&w).await,
        client.report_call_detail_records_combined(&w).await,
        client
            .report_call_detail_usage(&w, "summary", none, none, none)
            .await,
        client.report_live_chat_log(&w, none).await,
        client.report_interaction_detail(&w, none, none, none).await,
        client
            .report_interaction_detail_log(&w, none, none, none)
            .await,
        client.report_system_call_log(&w, none, none).await,
        client.report_lead_detail(&w, none, none, none).await,
        client.report_disposition_summary(&w, none, none, none).await,
        client.report_flash_summary(&w, none).await,
    ];

    for result in results {
        assert_eq!(result.unwrap(), "ok");
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 18);
}

// ── Recordings ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_recordings() {
    let (server, client) = setup().await;

    let body = json!([{ "recordingId": "r-1", "duration": 63 }]);
    authed("GetRecordings")
        .and(query_param("startDate", "2024-05-01"))
        .and(query_param("endDate", "2024-05-02"))
        .and(query_param("campaignIds", "301"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let range = DateRange::new("2024-05-01", "2024-05-02");
    assert_eq!(client.get_recordings(&range, [301]).await.unwrap(), body);
}

#[tokio::test]
async fn test_stream_recording_writes_whole_body() {
    let (server, client) = setup().await;

    let audio: Vec<u8> = (0..=255u8).cycle().take(64 * 1024 + 17).collect();
    authed("StreamRecording")
        .and(query_param("recordingId", "rec-77.wav"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/wav")
                .set_body_bytes(audio.clone()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let saved = client
        .stream_recording("rec-77.wav", dir.path())
        .await
        .unwrap();

    assert_eq!(saved, dir.path().join("rec-77.wav"));
    assert_eq!(std::fs::read(&saved).unwrap(), audio);
}

#[tokio::test]
async fn test_stream_recording_to_writer() {
    let (server, client) = setup().await;

    authed("StreamRecording")
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"RIFF....WAVE".to_vec()))
        .mount(&server)
        .await;

    let mut sink: Vec<u8> = Vec::new();
    let n = client.stream_recording_to("r-1", &mut sink).await.unwrap();

    assert_eq!(n, 12);
    assert_eq!(sink, b"RIFF....WAVE");
}

#[tokio::test]
async fn test_stream_recording_failure_creates_no_file() {
    let (server, client) = setup().await;

    authed("StreamRecording")
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let result = client.stream_recording("missing.wav", dir.path()).await;

    assert!(
        matches!(result, Err(Error::RequestFailed { status: 404, .. })),
        "expected RequestFailed, got: {result:?}"
    );
    assert!(!dir.path().join("missing.wav").exists());
}

#[tokio::test]
async fn test_stream_recording_rejects_path_ids() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let result = client.stream_recording("../escape.wav", dir.path()).await;

    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}
