pub mod admin;
pub mod analytics;
pub mod envelope;
pub mod lost_found;
pub mod maintenance;
pub mod organization;
pub mod policy;
pub mod quote;
pub mod reservation;
pub mod storage;

use serde::{Deserialize, Serialize};

/// `data` of every create endpoint.
#[derive(Debug, Deserialize)]
pub struct CreatedRow<I> {
    pub id: I,
}

#[derive(Debug, Serialize)]
pub struct IdBody<I> {
    pub id: I,
}
