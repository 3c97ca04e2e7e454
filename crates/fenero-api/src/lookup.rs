// Reference-data lookups
//
// Parameterless (beyond credentials) endpoints returning JSON collections.
// Shapes vary by account configuration, so results stay loosely typed.

use serde_json::Value;

use crate::client::FeneroClient;
use crate::error::Error;
use crate::operation::Operation;

impl FeneroClient {
    /// List all campaigns and ACD queues.
    ///
    /// `GET /MobileApi/GetCampaignsAndQueues`
    pub async fn get_campaigns_and_queues(&self) -> Result<Value, Error> {
        self.perform_json(&Operation::new("GetCampaignsAndQueues"))
            .await
    }

    /// List all live chat queues.
    ///
    /// `GET /MobileApi/GetLiveChatQueues`
    pub async fn get_live_chat_queues(&self) -> Result<Value, Error> {
        self.perform_json(&Operation::new("GetLiveChatQueues")).await
    }

    /// List all local and toll-free DIDs.
    ///
    /// `GET /MobileApi/GetDIDs`
    pub async fn get_dids(&self) -> Result<Value, Error> {
        self.perform_json(&Operation::new("GetDIDs")).await
    }

    /// `GET /MobileApi/GetDispositions`
    pub async fn get_dispositions(&self) -> Result<Value, Error> {
        self.perform_json(&Operation::new("GetDispositions")).await
    }

    /// `GET /MobileApi/GetUsers`
    pub async fn get_users(&self) -> Result<Value, Error> {
        self.perform_json(&Operation::new("GetUsers")).await
    }
}
