use derive_new::new;

use crate::model::id::CampusId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campus {
    pub id: CampusId,
    pub name: String,
}

#[derive(new, Debug, Clone)]
pub struct UpdateCampus {
    pub campus_id: CampusId,
    pub name: String,
}
