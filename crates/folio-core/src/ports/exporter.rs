use std::cell::RefCell;

use crate::order::OrderPayload;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
  #[error("io error: {0}")]
  Io(String),

  #[error("encode error: {0}")]
  Encode(String),
}

/// Port de salida para la acción "copiar selección".
///
/// Es un efecto de tipo dispara-y-olvida: el núcleo no consume nada de lo
/// que devuelva salvo el posible error. Implementaciones posibles:
/// - fichero de intercambio (ver backend)
/// - portapapeles del sistema vía la capa de UI
/// - un endpoint de pedidos, más adelante
pub trait OrderExporter {
  fn export(&self, payload: &OrderPayload) -> Result<(), ExportError>;
}

/// Exportador en memoria: guarda el JSON de cada exportación.
///
/// Útil en tests y como portapapeles de sesión cuando la UI lee de aquí.
#[derive(Debug, Default)]
pub struct MemoryExporter {
  exported: RefCell<Vec<String>>,
}

impl MemoryExporter {
  pub fn new() -> Self {
    Self::default()
  }

  /// Último payload exportado, si lo hay.
  pub fn last(&self) -> Option<String> {
    self.exported.borrow().last().cloned()
  }

  pub fn count(&self) -> usize {
    self.exported.borrow().len()
  }
}

impl OrderExporter for MemoryExporter {
  fn export(&self, payload: &OrderPayload) -> Result<(), ExportError> {
    let json = payload.to_json().map_err(|e| ExportError::Encode(e.to_string()))?;
    self.exported.borrow_mut().push(json);
    Ok(())
  }
}
