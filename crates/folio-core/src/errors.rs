// crates/folio-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Folio.
///
/// El motor de precios y validación es total y nunca falla; este error sólo
/// aparece en los bordes (catálogo inconsistente, exportación del pedido).
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("catalog error: {0}")]
  Catalog(String),

  #[error("export error: {0}")]
  Export(String),
}
