// Request and response shapes shared by every MobileApi endpoint.

use std::borrow::Cow;
use std::fmt::Display;

use serde::Serialize;

/// One named MobileApi call and its query parameters.
///
/// Parameters keep insertion order. Sequence values are encoded as one
/// pair per element (`users=7&users=9`); an empty sequence adds nothing.
/// Credentials are not stored here -- the client adds them when sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    name: Cow<'static, str>,
    params: Vec<(&'static str, String)>,
}

impl Operation {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a scalar parameter.
    pub fn param(mut self, key: &'static str, value: impl Display) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Append one pair per element of `values`.
    pub fn param_list<I>(mut self, key: &'static str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.params
            .extend(values.into_iter().map(|v| (key, v.to_string())));
        self
    }

    /// Remote endpoint name, e.g. `GetUsers`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }
}

/// Successful response body.
///
/// The MobileApi mixes JSON endpoints with CSV report endpoints, so the
/// body is classified by attempting a JSON parse rather than by trusting
/// the `Content-Type` header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Json(serde_json::Value),
    Text(String),
}

impl Payload {
    /// Classify a raw body.
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Json(_) => None,
        }
    }
}
