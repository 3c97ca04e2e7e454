// fenero-api: Async Rust client for the Fenero contact-center MobileApi
//
// One `FeneroClient` method per remote operation. Every request is a GET
// against `{base}/MobileApi/{Operation}` carrying the account credentials
// as query parameters.

pub mod auth;
pub mod client;
pub mod error;
pub mod operation;
pub mod transport;

mod lists;
mod live;
mod lookup;
mod recordings;
mod reports;

pub use auth::Credentials;
pub use client::{DEFAULT_BASE_URL, FeneroClient};
pub use error::Error;
pub use lists::NewList;
pub use live::SessionTarget;
pub use operation::{Operation, Payload};
pub use reports::{DATE_FORMAT, DateRange, ReportWindow};
pub use transport::{TlsMode, TransportConfig};
