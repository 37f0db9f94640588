use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    envelope::ApiResponse,
    id::ReservationId,
    reservation::{
        event::{
            CreateReservation, ReservationListQuery, ReservationQuery, ReviewDecision,
            ReviewReservation,
        },
        Reservation,
    },
};
use kernel::repository::reservation::ReservationRepository;

use crate::gateway::{
    model::{
        reservation::{CreateReservationBody, RejectBody, ReservationRow},
        CreatedRow, IdBody,
    },
    GatewayClient,
};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> ApiResponse<ReservationId> {
        let body = CreateReservationBody::from(event);
        self.gateway
            .post_json::<_, CreatedRow<ReservationId>>("/reservation/create", &body)
            .await
            .map(|row| row.id)
    }

    async fn search(&self, query: ReservationQuery) -> ApiResponse<Vec<Reservation>> {
        let mut pairs = Vec::new();
        if let Some(student_id) = query.student_id.filter(|s| !s.is_empty()) {
            pairs.push(("studentId", student_id));
        }
        if let Some(email) = query.email.filter(|s| !s.is_empty()) {
            pairs.push(("email", email));
        }
        if let Some(status) = query.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(page) = query.page {
            pairs.push(("page", page.to_string()));
        }
        self.gateway
            .get::<Vec<ReservationRow>>("/reservation/search", &pairs)
            .await
            .map(into_reservations)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> ApiResponse<Reservation> {
        self.gateway
            .get::<ReservationRow>("/reservation/get", &[("id", reservation_id.to_string())])
            .await
            .map(Reservation::from)
    }

    async fn list(&self, query: ReservationListQuery) -> ApiResponse<Vec<Reservation>> {
        let mut pairs = Vec::new();
        if let Some(status) = query.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(campus_id) = query.campus_id {
            pairs.push(("campusId", campus_id.to_string()));
        }
        if let Some(page) = query.page {
            pairs.push(("page", page.to_string()));
        }
        self.gateway
            .get::<Vec<ReservationRow>>("/reservation/list", &pairs)
            .await
            .map(into_reservations)
    }

    async fn review(&self, event: ReviewReservation) -> ApiResponse<()> {
        let ReviewReservation {
            reservation_id,
            decision,
        } = event;
        match &decision {
            ReviewDecision::Approve => {
                self.gateway
                    .post_json_unit("/reservation/approve", &IdBody { id: reservation_id })
                    .await
            }
            ReviewDecision::Reject { .. } => {
                let body = RejectBody {
                    id: reservation_id,
                    reason: decision.reason(),
                };
                self.gateway
                    .post_json_unit("/reservation/reject", &body)
                    .await
            }
        }
    }

    async fn delete(&self, reservation_id: ReservationId) -> ApiResponse<()> {
        self.gateway
            .post_json_unit("/reservation/delete", &IdBody { id: reservation_id })
            .await
    }
}

fn into_reservations(rows: Vec<ReservationRow>) -> Vec<Reservation> {
    rows.into_iter().map(Reservation::from).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, RawQuery, State},
        routing::{get, post},
        Json, Router,
    };
    use kernel::model::{
        id::RoomId,
        reservation::{event::ApplicationForm, ReservationStatus},
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::gateway::testing::{client_for, unreachable_client};

    type Seen = Arc<Mutex<Vec<Value>>>;

    fn row(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "name": "Lin Yue",
            "studentId": "20230117",
            "email": "lin.yue@example.edu",
            "startTime": 1_710_495_000,
            "endTime": 1_710_500_400,
            "roomId": 301,
            "roomName": "A-301",
            "campusId": 2,
            "campusName": "North",
            "reason": "club rehearsal",
            "status": status,
            "createdAt": 1_710_400_000
        })
    }

    fn router(seen: Seen) -> Router {
        Router::new()
            .route(
                "/reservation/create",
                post(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(body);
                    Json(json!({"success": true, "data": {"id": 88}}))
                }),
            )
            .route(
                "/reservation/search",
                get(|RawQuery(q): RawQuery| async move {
                    Json(json!({"success": true, "data": [row(1, "pending")], "message": q}))
                }),
            )
            .route(
                "/reservation/get",
                get(|Query(q): Query<std::collections::HashMap<String, String>>| async move {
                    let id: i64 = q["id"].parse().unwrap();
                    Json(json!({"success": true, "data": row(id, "approved")}))
                }),
            )
            .route(
                "/reservation/reject",
                post(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(body);
                    Json(json!({"success": true, "data": null}))
                }),
            )
            .with_state(seen)
    }

    #[tokio::test]
    async fn create_posts_once_with_epoch_seconds() -> anyhow::Result<()> {
        let seen = Seen::default();
        let repo = ReservationRepositoryImpl::new(client_for(router(seen.clone())).await);

        let form = ApplicationForm {
            student_name: "Lin Yue".into(),
            selected_room: Some(RoomId::new(301)),
            student_id: "20230117".into(),
            email: "lin.yue@example.edu".into(),
            date: "2024-03-15".into(),
            start_time: "09:30".into(),
            end_time: "11:00".into(),
            reason: "club rehearsal".into(),
            turnstile_token: None,
        };
        let res = repo.create(form.into_event_in(&chrono::Utc)?).await;

        assert!(res.success);
        assert_eq!(res.data, Some(ReservationId::new(88)));
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0]["startTime"], json!(1_710_495_000));
        assert_eq!(seen[0]["endTime"], json!(1_710_500_400));
        assert_eq!(seen[0]["roomId"], json!(301));
        assert_eq!(seen[0]["studentId"], json!("20230117"));
        assert!(seen[0].get("turnstileToken").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn search_omits_empty_filters() -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(client_for(router(Seen::default())).await);

        let res = repo
            .search(ReservationQuery {
                student_id: Some("20230117".into()),
                email: Some(String::new()),
                status: Some(ReservationStatus::Pending),
                page: None,
            })
            .await;

        assert!(res.success);
        // the fixture echoes the raw query string back as the message
        assert_eq!(
            res.message.as_deref(),
            Some("studentId=20230117&status=pending")
        );
        let found = res.data.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].requester.name, "Lin Yue");
        assert_eq!(found[0].room.campus_name.as_deref(), Some("North"));
        assert_eq!(found[0].start_time.timestamp(), 1_710_495_000);
        Ok(())
    }

    #[tokio::test]
    async fn find_by_id_maps_row() -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(client_for(router(Seen::default())).await);

        let res = repo.find_by_id(ReservationId::new(5)).await;

        let reservation = res.data.unwrap();
        assert_eq!(reservation.id, ReservationId::new(5));
        assert_eq!(reservation.status, ReservationStatus::Approved);
        assert!(reservation.approved_by.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn reject_sends_reason() -> anyhow::Result<()> {
        let seen = Seen::default();
        let repo = ReservationRepositoryImpl::new(client_for(router(seen.clone())).await);

        let res = repo
            .review(ReviewReservation::new(
                ReservationId::new(5),
                ReviewDecision::Reject {
                    reason: Some("room under repair".into()),
                },
            ))
            .await;

        assert!(res.success);
        assert_eq!(
            seen.lock().unwrap()[0],
            json!({"id": 5, "reason": "room under repair"})
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_and_lost_server_are_failures() -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(client_for(router(Seen::default())).await);
        assert!(!repo.delete(ReservationId::new(1)).await.success);

        let repo = ReservationRepositoryImpl::new(unreachable_client());
        assert!(!repo.list(ReservationListQuery::default()).await.success);
        Ok(())
    }
}
