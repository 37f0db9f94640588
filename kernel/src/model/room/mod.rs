use crate::model::id::{CampusId, RoomId};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub campus_id: CampusId,
    pub capacity: Option<i32>,
}
