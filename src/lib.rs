pub mod configuration;
pub mod domain;
pub mod factory;
pub mod id_pool;
pub mod telemetry;
