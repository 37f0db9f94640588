use derive_new::new;

use crate::model::id::{CampusId, ClassId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
    pub campus_id: CampusId,
}

#[derive(new, Debug, Clone)]
pub struct CreateClass {
    pub name: String,
    pub campus_id: CampusId,
}
