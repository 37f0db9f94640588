use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    analytics::{DailyCount, OverviewStats, ReasonWeight, RoomUsage, WeekdayCount},
    envelope::ApiResponse,
};
use kernel::repository::analytics::AnalyticsRepository;

use crate::gateway::{
    model::analytics::{DailyRow, OverviewRow, ReasonRow, RoomUsageRow, WeekdayRow},
    GatewayClient,
};

#[derive(new)]
pub struct AnalyticsRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl AnalyticsRepository for AnalyticsRepositoryImpl {
    async fn overview(&self) -> ApiResponse<OverviewStats> {
        self.gateway
            .get::<OverviewRow>("/analytics/overview", &[])
            .await
            .map(OverviewStats::from)
    }

    async fn daily(&self, days: u32) -> ApiResponse<Vec<DailyCount>> {
        self.gateway
            .get::<Vec<DailyRow>>("/analytics/daily", &[("days", days.to_string())])
            .await
            .map(|rows| rows.into_iter().map(DailyCount::from).collect())
    }

    async fn weekly(&self) -> ApiResponse<Vec<WeekdayCount>> {
        self.gateway
            .get::<Vec<WeekdayRow>>("/analytics/weekly", &[])
            .await
            .map(|rows| rows.into_iter().map(WeekdayCount::from).collect())
    }

    async fn room_usage(&self) -> ApiResponse<Vec<RoomUsage>> {
        self.gateway
            .get::<Vec<RoomUsageRow>>("/analytics/rooms", &[])
            .await
            .map(|rows| rows.into_iter().map(RoomUsage::from).collect())
    }

    async fn reason_words(&self) -> ApiResponse<Vec<ReasonWeight>> {
        self.gateway
            .get::<Vec<ReasonRow>>("/analytics/reasons", &[])
            .await
            .map(|rows| rows.into_iter().map(ReasonWeight::from).collect())
    }
}
