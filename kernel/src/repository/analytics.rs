use async_trait::async_trait;

use crate::model::{
    analytics::{DailyCount, OverviewStats, ReasonWeight, RoomUsage, WeekdayCount},
    envelope::ApiResponse,
};

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn overview(&self) -> ApiResponse<OverviewStats>;
    // one bucket per day, most recent `days` days
    async fn daily(&self, days: u32) -> ApiResponse<Vec<DailyCount>>;
    async fn weekly(&self) -> ApiResponse<Vec<WeekdayCount>>;
    async fn room_usage(&self) -> ApiResponse<Vec<RoomUsage>>;
    // word weights for the reason cloud
    async fn reason_words(&self) -> ApiResponse<Vec<ReasonWeight>>;
}
