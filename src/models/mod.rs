//! Data models for foiadraft.

mod agency;
mod jurisdiction;
mod organization;
mod request;

pub use agency::{Agency, AgencyStatus};
pub use jurisdiction::{Jurisdiction, JurisdictionLevel, FEDERAL_ABBREV};
pub use organization::{Organization, User};
pub use request::{FoiaRequest, NewFoiaRequest, RequestStatus};
