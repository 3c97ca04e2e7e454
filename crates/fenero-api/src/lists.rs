// Dialing list management
//
// `StartList` / `StopList` change dialer state on the server; nothing here
// is idempotent from the caller's point of view.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::client::FeneroClient;
use crate::error::Error;
use crate::operation::Operation;

/// Definition of a dialing list for `CreateList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewList {
    pub name: String,
    pub description: String,
    /// Outbound caller ID presented when dialing this list.
    pub caller_id: String,
    pub campaign_id: String,
    /// How many times records may be recycled.
    pub reset_times: u32,
    pub active: bool,
}

impl FeneroClient {
    /// Dialing lists attached to the given campaigns.
    ///
    /// `GET /MobileApi/GetLists`
    pub async fn get_lists(
        &self,
        campaign_ids: impl IntoIterator<Item = impl Display>,
    ) -> Result<Value, Error> {
        let op = Operation::new("GetLists").param_list("campaignIds", campaign_ids);
        self.perform_json(&op).await
    }

    /// Create a new dialing list.
    ///
    /// `GET /MobileApi/CreateList`
    pub async fn create_list(&self, list: &NewList) -> Result<Value, Error> {
        debug!(name = %list.name, campaign = %list.campaign_id, "creating list");
        let op = Operation::new("CreateList")
            .param("name", &list.name)
            .param("description", &list.description)
            .param("callerId", &list.caller_id)
            .param("campaignId", &list.campaign_id)
            .param("resetTimes", list.reset_times)
            .param("active", list.active);
        self.perform_json(&op).await
    }

    /// Copy custom field definitions from one list to another.
    ///
    /// `GET /MobileApi/CopyCustomFields`
    pub async fn copy_custom_fields(
        &self,
        source_list_id: impl Display,
        destination_list_id: impl Display,
    ) -> Result<Value, Error> {
        let op = Operation::new("CopyCustomFields")
            .param("sourceListId", source_list_id)
            .param("destinationListId", destination_list_id);
        self.perform_json(&op).await
    }

    /// Activate a list. Dialing begins once leads are dialable and campaign
    /// rules (hours, recycling, available agents) allow it.
    ///
    /// `GET /MobileApi/StartList`
    pub async fn start_list(&self, list_id: impl Display) -> Result<Value, Error> {
        let list_id = list_id.to_string();
        debug!(list = %list_id, "starting list");
        let op = Operation::new("StartList").param("listId", list_id);
        self.perform_json(&op).await
    }

    /// Deactivate a list. Dialing stops immediately; calls already in
    /// progress continue.
    ///
    /// `GET /MobileApi/StopList`
    pub async fn stop_list(&self, list_id: impl Display) -> Result<Value, Error> {
        let list_id = list_id.to_string();
        debug!(list = %list_id, "stopping list");
        let op = Operation::new("StopList").param("listId", list_id);
        self.perform_json(&op).await
    }
}
