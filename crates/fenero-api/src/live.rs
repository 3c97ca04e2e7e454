// Real-time monitoring endpoints
//
// `GetRealtimeStats` reports live sessions; `Monitor` and `Barge` attach a
// supervisor phone to one of those sessions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::client::FeneroClient;
use crate::error::Error;
use crate::operation::Operation;

/// Identifies a live agent session and the phone that should join it.
///
/// `session_id`, `server_ip` and `agent_id` come from a
/// `GetRealtimeStats` agent row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTarget {
    pub session_id: String,
    #[serde(rename = "serverIP")]
    pub server_ip: String,
    pub user_phone: String,
    #[serde(rename = "agentID")]
    pub agent_id: String,
}

impl SessionTarget {
    fn operation(&self, name: &'static str) -> Operation {
        Operation::new(name)
            .param("sessionId", &self.session_id)
            .param("serverIP", &self.server_ip)
            .param("userPhone", &self.user_phone)
            .param("agentID", &self.agent_id)
    }
}

impl FeneroClient {
    /// Real-time call, agent and time statistics for the given campaigns
    /// and ACD groups.
    ///
    /// `GET /MobileApi/GetRealtimeStats`
    pub async fn get_realtime_stats(
        &self,
        campaign_ids: impl IntoIterator<Item = impl Display>,
        group_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<Value, Error> {
        let op = Operation::new("GetRealtimeStats")
            .param_list("campaignIds", campaign_ids)
            .param_list("groupIds", group_ids);
        self.perform_json(&op).await
    }

    /// Blind-monitor an agent session: `user_phone` hears the call without
    /// being heard.
    ///
    /// `GET /MobileApi/Monitor`
    pub async fn monitor(&self, target: &SessionTarget) -> Result<Value, Error> {
        debug!(session = %target.session_id, agent = %target.agent_id, "monitoring session");
        self.perform_json(&target.operation("Monitor")).await
    }

    /// Barge into an agent session: `user_phone` joins the call and is heard
    /// by both parties.
    ///
    /// `GET /MobileApi/Barge`
    pub async fn barge(&self, target: &SessionTarget) -> Result<Value, Error> {
        debug!(session = %target.session_id, agent = %target.agent_id, "barging into session");
        self.perform_json(&target.operation("Barge")).await
    }
}
