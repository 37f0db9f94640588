pub mod admin;
pub mod analytics;
pub mod campus;
pub mod class;
pub mod envelope;
pub mod export;
pub mod id;
pub mod legacy;
pub mod lost_found;
pub mod maintenance;
pub mod policy;
pub mod quote;
pub mod reservation;
pub mod room;
pub mod storage;
pub mod time;
