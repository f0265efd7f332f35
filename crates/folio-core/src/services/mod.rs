pub mod configurator_service;

pub use configurator_service::{ConfiguratorService, Snapshot};
