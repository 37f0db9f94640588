//! Campuses, rooms and classes: the directory the rest of the backend hangs off.

use kernel::model::{
    campus::{Campus, UpdateCampus},
    class::{Class, CreateClass},
    id::{CampusId, ClassId, RoomId},
    room::{
        event::{CreateRoom, UpdateRoom},
        Room,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CampusRow {
    pub id: CampusId,
    pub name: String,
}

impl From<CampusRow> for Campus {
    fn from(value: CampusRow) -> Self {
        Campus {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateCampusBody<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateCampusBody {
    pub id: CampusId,
    pub name: String,
}

impl From<UpdateCampus> for UpdateCampusBody {
    fn from(value: UpdateCampus) -> Self {
        Self {
            id: value.campus_id,
            name: value.name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRow {
    pub id: RoomId,
    pub name: String,
    pub campus_id: CampusId,
    #[serde(default)]
    pub capacity: Option<i32>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            id,
            name,
            campus_id,
            capacity,
        } = value;
        Room {
            id,
            name,
            campus_id,
            capacity,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomBody {
    pub name: String,
    pub campus_id: CampusId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

impl From<CreateRoom> for CreateRoomBody {
    fn from(value: CreateRoom) -> Self {
        let CreateRoom {
            name,
            campus_id,
            capacity,
        } = value;
        Self {
            name,
            campus_id,
            capacity,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomBody {
    pub id: RoomId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_id: Option<CampusId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

impl From<UpdateRoom> for UpdateRoomBody {
    fn from(value: UpdateRoom) -> Self {
        let UpdateRoom {
            room_id,
            name,
            campus_id,
            capacity,
        } = value;
        Self {
            id: room_id,
            name,
            campus_id,
            capacity,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRow {
    pub id: ClassId,
    pub name: String,
    pub campus_id: CampusId,
}

impl From<ClassRow> for Class {
    fn from(value: ClassRow) -> Self {
        Class {
            id: value.id,
            name: value.name,
            campus_id: value.campus_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassBody {
    pub name: String,
    pub campus_id: CampusId,
}

impl From<CreateClass> for CreateClassBody {
    fn from(value: CreateClass) -> Self {
        Self {
            name: value.name,
            campus_id: value.campus_id,
        }
    }
}
