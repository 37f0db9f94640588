use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    legacy::{
        LegacyApplication, LegacyPolicy, LegacyPolicyUpdate, LegacyReservations, LegacyReview,
    },
    time::legacy_time_range,
};
use kernel::repository::legacy::LegacyRepository;
use reqwest::multipart::Form;
use serde_json::{json, Value};
use shared::error::AppResult;

use crate::gateway::GatewayClient;

#[derive(new)]
pub struct LegacyRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl LegacyRepository for LegacyRepositoryImpl {
    async fn fetch_policy(&self) -> AppResult<LegacyPolicy> {
        let path = "/fetchPolicy.php";
        let request = self.gateway.inner_ref().get(self.gateway.legacy_url(path));
        self.gateway.send_legacy(path, request).await
    }

    async fn fetch_reservations(&self) -> AppResult<LegacyReservations> {
        let path = "/getresv.php";
        let request = self.gateway.inner_ref().get(self.gateway.legacy_url(path));
        self.gateway.send_legacy(path, request).await
    }

    async fn post_application(&self, application: LegacyApplication) -> AppResult<Value> {
        let path = "/addres.php";
        let LegacyApplication {
            room,
            email,
            name,
            reason,
            sid,
            start,
            end,
        } = application;
        let body = json!({
            "room": room,
            "email": email,
            "time": legacy_time_range(start, end),
            "name": name,
            "reason": reason,
            "sid": sid,
        });
        let request = self
            .gateway
            .inner_ref()
            .post(self.gateway.legacy_url(path))
            .json(&body);
        self.gateway.send_legacy(path, request).await
    }

    async fn review(&self, review: LegacyReview) -> AppResult<Value> {
        let path = "/approve.php";
        let form = Form::new()
            .text("token", review.token)
            .text("Id", review.id.to_string())
            .text("Reason", review.reason);
        let request = self
            .gateway
            .inner_ref()
            .post(self.gateway.legacy_url(path))
            .multipart(form);
        self.gateway.send_legacy(path, request).await
    }

    async fn update_policy(&self, update: LegacyPolicyUpdate) -> AppResult<Value> {
        let path = "/updatePolicy.php";
        let LegacyPolicyUpdate {
            classroom,
            days,
            start_time,
            end_time,
        } = update;
        let form = days
            .into_iter()
            .fold(Form::new().text("classroom", classroom), |form, day| {
                form.text("days[]", day)
            })
            .text("start_time", start_time)
            .text("end_time", end_time);
        let request = self
            .gateway
            .inner_ref()
            .post(self.gateway.legacy_url(path))
            .multipart(form);
        self.gateway.send_legacy(path, request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Multipart, State},
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use chrono::{TimeZone, Utc};
    use kernel::model::id::{ReservationId, RoomId};
    use shared::error::AppError;

    use super::*;
    use crate::gateway::testing::{client_for, unreachable_client};

    type Seen = Arc<Mutex<Vec<(String, String)>>>;

    async fn capture(State(seen): State<Seen>, mut multipart: Multipart) -> Json<Value> {
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            let value = field.text().await.unwrap();
            seen.lock().unwrap().push((name, value));
        }
        Json(json!({"success": true}))
    }

    fn router(seen: Seen) -> Router {
        Router::new()
            .route(
                "/api/fetchPolicy.php",
                get(|| async {
                    Json(json!({"policy": [{
                        "classroom": "301", "days": "1,2,3",
                        "start_time": "08:00", "end_time": "22:00"
                    }]}))
                }),
            )
            .route(
                "/api/getresv.php",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"success": false, "error": "db down"})),
                    )
                }),
            )
            .route(
                "/api/addres.php",
                post(|Json(body): Json<Value>| async move { Json(json!({"echo": body})) }),
            )
            .route("/api/approve.php", post(capture))
            .route("/api/updatePolicy.php", post(capture))
            .route("/api/broken.php", get(|| async { "Fatal error" }))
            .with_state(seen)
    }

    #[tokio::test]
    async fn policy_is_read_from_legacy_base() -> anyhow::Result<()> {
        let repo = LegacyRepositoryImpl::new(client_for(router(Seen::default())).await);
        let policy = repo.fetch_policy().await?;
        assert_eq!(policy.policy[0].classroom, "301");
        Ok(())
    }

    #[tokio::test]
    async fn error_status_body_is_handed_back() -> anyhow::Result<()> {
        let repo = LegacyRepositoryImpl::new(client_for(router(Seen::default())).await);
        let reservations = repo.fetch_reservations().await?;
        assert!(!reservations.success);
        assert!(reservations.data.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn application_carries_millisecond_window() -> anyhow::Result<()> {
        let repo = LegacyRepositoryImpl::new(client_for(router(Seen::default())).await);
        let echoed = repo
            .post_application(LegacyApplication {
                room: RoomId::new(301),
                email: "lin@example.edu".into(),
                name: "Lin".into(),
                reason: "rehearsal".into(),
                sid: "20230117".into(),
                start: Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2024, 3, 15, 11, 0, 0).unwrap(),
            })
            .await?;
        assert_eq!(echoed["echo"]["time"], json!("1710495000000-1710500400000"));
        assert_eq!(echoed["echo"]["room"], json!(301));
        assert_eq!(echoed["echo"]["sid"], json!("20230117"));
        Ok(())
    }

    #[tokio::test]
    async fn multipart_fields_keep_php_names() -> anyhow::Result<()> {
        let seen = Seen::default();
        let repo = LegacyRepositoryImpl::new(client_for(router(seen.clone())).await);

        repo.review(LegacyReview {
            token: "tok".into(),
            id: ReservationId::new(9),
            reason: String::new(),
        })
        .await?;
        repo.update_policy(LegacyPolicyUpdate {
            classroom: "301".into(),
            days: vec!["1".into(), "3".into()],
            start_time: "08:00".into(),
            end_time: "20:00".into(),
        })
        .await?;

        let seen = seen.lock().unwrap();
        let names: Vec<&str> = seen.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            ["token", "Id", "Reason", "classroom", "days[]", "days[]", "start_time", "end_time"]
        );
        assert_eq!(seen[1].1, "9");
        assert_eq!(seen[5].1, "3");
        Ok(())
    }

    #[tokio::test]
    async fn undecodable_or_lost_response_is_an_error() -> anyhow::Result<()> {
        let gateway = client_for(router(Seen::default())).await;
        let path = "/broken.php";
        let request = gateway.inner_ref().get(gateway.legacy_url(path));
        let res: AppResult<Value> = gateway.send_legacy(path, request).await;
        assert!(matches!(res, Err(AppError::Json(_))));

        let repo = LegacyRepositoryImpl::new(unreachable_client());
        assert!(matches!(
            repo.fetch_policy().await,
            Err(AppError::HttpRequestError(_))
        ));
        Ok(())
    }
}
