use async_trait::async_trait;

use crate::model::{
    envelope::ApiResponse,
    id::ReservationId,
    reservation::{
        event::{CreateReservation, ReservationListQuery, ReservationQuery, ReviewReservation},
        Reservation,
    },
};

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // submit a new application
    async fn create(&self, event: CreateReservation) -> ApiResponse<ReservationId>;
    // look up a requester's own reservations
    async fn search(&self, query: ReservationQuery) -> ApiResponse<Vec<Reservation>>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> ApiResponse<Reservation>;
    // admin listing, filtered by status and campus
    async fn list(&self, query: ReservationListQuery) -> ApiResponse<Vec<Reservation>>;
    // approve or reject as a logged-in admin
    async fn review(&self, event: ReviewReservation) -> ApiResponse<()>;
    async fn delete(&self, reservation_id: ReservationId) -> ApiResponse<()>;
}
