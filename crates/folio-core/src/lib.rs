pub mod catalog;
pub mod domain;
pub mod errors;
pub mod order;
pub mod ports;
pub mod pricing;
pub mod services;
pub mod transition;
pub mod validation;

pub use catalog::{Catalog, Money};
pub use domain::AlbumSelection;
pub use errors::CoreError;
pub use order::OrderPayload;
pub use pricing::{PriceBreakdown, price};
pub use services::{ConfiguratorService, Snapshot};
pub use transition::{Outcome, SelectionEvent, apply};
pub use validation::{Verdict, is_complete, validate};
