use async_trait::async_trait;
use serde_json::Value;
use shared::error::AppResult;

use crate::model::legacy::{
    LegacyApplication, LegacyPolicy, LegacyPolicyUpdate, LegacyReservations, LegacyReview,
};

/// PHP endpoints. An HTTP error body is handed back as if it were the normal
/// payload; only a missing or undecodable response is an `Err`.
#[async_trait]
pub trait LegacyRepository: Send + Sync {
    async fn fetch_policy(&self) -> AppResult<LegacyPolicy>;
    async fn fetch_reservations(&self) -> AppResult<LegacyReservations>;
    async fn post_application(&self, application: LegacyApplication) -> AppResult<Value>;
    async fn review(&self, review: LegacyReview) -> AppResult<Value>;
    async fn update_policy(&self, update: LegacyPolicyUpdate) -> AppResult<Value>;
}
