use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    envelope::ApiResponse,
    id::{PolicyId, RoomId},
    policy::{CreatePolicy, RoomPolicy, UpdatePolicy},
};
use kernel::repository::policy::PolicyRepository;

use crate::gateway::{
    model::{
        policy::{CreatePolicyBody, PolicyRow, TogglePolicyBody, UpdatePolicyBody},
        CreatedRow, IdBody,
    },
    GatewayClient,
};

#[derive(new)]
pub struct PolicyRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl PolicyRepository for PolicyRepositoryImpl {
    async fn list(&self, room_id: Option<RoomId>) -> ApiResponse<Vec<RoomPolicy>> {
        let query: Vec<_> = room_id
            .map(|id| ("roomId", id.to_string()))
            .into_iter()
            .collect();
        self.gateway
            .get::<Vec<PolicyRow>>("/policy/list", &query)
            .await
            .map(|rows| rows.into_iter().map(RoomPolicy::from).collect())
    }

    async fn create(&self, event: CreatePolicy) -> ApiResponse<PolicyId> {
        self.gateway
            .post_json::<_, CreatedRow<PolicyId>>("/policy/create", &CreatePolicyBody::from(event))
            .await
            .map(|row| row.id)
    }

    async fn update(&self, event: UpdatePolicy) -> ApiResponse<()> {
        self.gateway
            .post_json_unit("/policy/update", &UpdatePolicyBody::from(event))
            .await
    }

    async fn set_enabled(&self, policy_id: PolicyId, enabled: bool) -> ApiResponse<()> {
        let body = TogglePolicyBody {
            id: policy_id,
            enabled,
        };
        self.gateway.post_json_unit("/policy/toggle", &body).await
    }

    async fn delete(&self, policy_id: PolicyId) -> ApiResponse<()> {
        self.gateway
            .post_json_unit("/policy/delete", &IdBody { id: policy_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        routing::{get, post},
        Json, Router,
    };
    use chrono::{NaiveTime, Weekday};
    use serde_json::{json, Value};

    use super::*;
    use crate::gateway::testing::client_for;

    type Seen = Arc<Mutex<Vec<Value>>>;

    async fn record(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
        seen.lock().unwrap().push(body);
        Json(json!({"success": true, "data": {"id": 21}}))
    }

    fn router(seen: Seen) -> Router {
        Router::new()
            .route(
                "/policy/list",
                get(|| async {
                    Json(json!({"success": true, "data": [{
                        "id": 21, "roomId": 6, "days": [1, 2, 3, 4, 5],
                        "startTime": "08:00", "endTime": "22:00", "enabled": false
                    }]}))
                }),
            )
            .route("/policy/create", post(record))
            .route("/policy/toggle", post(record))
            .with_state(seen)
    }

    #[tokio::test]
    async fn list_decodes_weekdays_and_times() -> anyhow::Result<()> {
        let repo = PolicyRepositoryImpl::new(client_for(router(Seen::default())).await);

        let policies = repo.list(Some(RoomId::new(6))).await.data.unwrap();
        assert_eq!(policies[0].days.first(), Some(&Weekday::Mon));
        assert_eq!(policies[0].days.len(), 5);
        assert_eq!(policies[0].end_time, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert!(!policies[0].enabled);
        Ok(())
    }

    #[tokio::test]
    async fn create_and_toggle_bodies() -> anyhow::Result<()> {
        let seen = Seen::default();
        let repo = PolicyRepositoryImpl::new(client_for(router(seen.clone())).await);

        let id = repo
            .create(CreatePolicy {
                room_id: RoomId::new(6),
                days: vec![Weekday::Sat, Weekday::Sun],
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
                enabled: true,
            })
            .await
            .data
            .unwrap();
        assert!(repo.set_enabled(id, false).await.success);

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen[0],
            json!({
                "roomId": 6, "days": [0, 6],
                "startTime": "09:00", "endTime": "17:30", "enabled": true
            })
        );
        assert_eq!(seen[1], json!({"id": 21, "enabled": false}));
        Ok(())
    }
}
