pub mod exporter;

pub use exporter::{ExportError, MemoryExporter, OrderExporter};
