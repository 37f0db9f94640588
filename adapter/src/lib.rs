pub mod gateway;
pub mod navigator;
pub mod repository;
