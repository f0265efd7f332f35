use serde::Serialize;
use tracing::{info, instrument};

use crate::catalog::Catalog;
use crate::domain::AlbumSelection;
use crate::errors::CoreError;
use crate::order::{OrderPayload, to_order_payload};
use crate::ports::OrderExporter;
use crate::pricing::{PriceBreakdown, price};
use crate::transition::{Outcome, SelectionEvent, apply};
use crate::validation::{ImprintOffer, Verdict, imprint_offer, validate};

/// Lo que la UI necesita pintar tras cada interacción.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
  pub price: PriceBreakdown,
  pub verdict: Verdict,
  pub checkout_ready: bool,
  pub imprint_offer: ImprintOffer,
}

/// Sesión del configurador.
///
/// Dueño único de la selección: la UI le pasa eventos y lee resultados.
/// Precio y validación se recalculan enteros en cada consulta, nunca se
/// parchean de forma incremental.
pub struct ConfiguratorService<E>
where
  E: OrderExporter,
{
  catalog: Catalog,
  selection: AlbumSelection,
  exporter: E,
}

impl<E> ConfiguratorService<E>
where
  E: OrderExporter,
{
  pub fn new(catalog: Catalog, exporter: E) -> Self {
    let selection = AlbumSelection::new(&catalog);
    Self { catalog, selection, exporter }
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn selection(&self) -> &AlbumSelection {
    &self.selection
  }

  pub fn exporter(&self) -> &E {
    &self.exporter
  }

  // -------- COMMAND (write) --------

  #[instrument(skip(self), level = "debug")]
  pub fn dispatch(&mut self, event: SelectionEvent) -> Outcome {
    apply(&mut self.selection, &event, &self.catalog)
  }

  /// Vuelve a la selección inicial de la sesión.
  pub fn reset(&mut self) {
    self.selection = AlbumSelection::new(&self.catalog);
  }

  // -------- QUERY (read) --------

  pub fn quote(&self) -> PriceBreakdown {
    price(&self.selection, &self.catalog)
  }

  pub fn verdict(&self) -> Verdict {
    validate(&self.selection, &self.catalog)
  }

  pub fn imprint_offer(&self) -> ImprintOffer {
    imprint_offer(&self.selection.cover, &self.catalog)
  }

  pub fn snapshot(&self) -> Snapshot {
    let verdict = self.verdict();
    Snapshot {
      price: self.quote(),
      checkout_ready: verdict.is_complete(),
      verdict,
      imprint_offer: self.imprint_offer(),
    }
  }

  pub fn order_payload(&self) -> OrderPayload {
    to_order_payload(&self.selection, &self.quote(), &self.verdict(), &self.catalog)
  }

  // -------- EXPORT --------

  /// Acción "copiar selección": construye el pedido y lo entrega al exportador.
  ///
  /// Se permite también con la selección incompleta; el pedido lo indica en
  /// `checkout_ready`.
  #[instrument(skip(self))]
  pub fn copy_selections(&self) -> Result<OrderPayload, CoreError> {
    let payload = self.order_payload();
    self.exporter.export(&payload).map_err(|e| CoreError::Export(e.to_string()))?;

    info!(total = %payload.price.total, ready = payload.checkout_ready, "selection copied");
    Ok(payload)
  }
}
