use secrecy::{ExposeSecret, SecretString};

/// Account credentials sent with every MobileApi request.
///
/// The account identifier travels as `userId` and the token as
/// `appTokenId`. Both are fixed for the lifetime of a client.
#[derive(Debug, Clone)]
pub struct Credentials {
    account_id: String,
    access_token: SecretString,
}

impl Credentials {
    pub fn new(account_id: impl Into<String>, access_token: SecretString) -> Self {
        Self {
            account_id: account_id.into(),
            access_token,
        }
    }

    /// The account identifier (`userId` on the wire).
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The access token (`appTokenId` on the wire).
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    /// Query pairs that every request carries.
    pub(crate) fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("userId", self.account_id.clone()),
            ("appTokenId", self.access_token.expose_secret().to_owned()),
        ]
    }
}
