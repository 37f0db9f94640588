pub mod admin;
pub mod analytics;
pub mod approver;
pub mod campus;
pub mod class;
pub mod export;
pub mod legacy;
pub mod lost_found;
pub mod maintenance;
pub mod navigator;
pub mod policy;
pub mod quote;
pub mod reservation;
pub mod room;
pub mod storage;
