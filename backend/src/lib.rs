mod config;
mod infrastructure;

use anyhow::Context;
use folio_config::PATHS;
use folio_core::{Catalog, ConfiguratorService};
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

pub use crate::config::{ExportConfig, PricingConfig};
pub use infrastructure::exporter::ClipboardFileExporter;

/// Type alias to simplify the generic signature of the Service.
pub type ConcreteConfigurator = ConfiguratorService<ClipboardFileExporter>;

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG`; falls back to `info` when unset or invalid. Calling it
/// twice is harmless, the second registration is ignored.
pub fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .try_init();
}

/// Published catalog with the store's price overrides applied on top.
pub fn build_catalog(pricing: &PricingConfig) -> anyhow::Result<Catalog> {
  let mut catalog = Catalog::builtin();
  pricing.apply_to(&mut catalog);
  catalog.check().context("invalid [pricing] section")?;
  Ok(catalog)
}

/// Wires config, catalog and the hand-off exporter into a ready session.
pub fn start() -> anyhow::Result<ConcreteConfigurator> {
  init_logging();

  // 1. Config sections (written back with defaults on first run)
  let pricing = PricingConfig::load().context("loading [pricing]")?;
  let export = ExportConfig::load().context("loading [export]")?;

  // 2. Catalog
  let catalog = build_catalog(&pricing)?;

  // 3. Output port adapter
  let exporter = ClipboardFileExporter::new(export.handoff_path(&PATHS.data_dir));
  info!(handoff = %exporter.path().display(), "configurator session ready");

  Ok(ConfiguratorService::new(catalog, exporter))
}

#[cfg(test)]
mod tests {
  use super::*;
  use folio_core::Money;
  use folio_core::catalog::ParentTier;

  #[test]
  fn test_build_catalog_with_defaults_matches_builtin() {
    let catalog = build_catalog(&PricingConfig::default()).unwrap();

    assert_eq!(catalog, Catalog::builtin());
  }

  #[test]
  fn test_build_catalog_rejects_pair_above_two_singles() {
    let mut pricing = PricingConfig::default();
    pricing.parent_tiers[0].pair = Money::dollars(700);

    assert!(build_catalog(&pricing).is_err());
  }

  #[test]
  fn test_build_catalog_rejects_missing_parent_tier() {
    let mut pricing = PricingConfig::default();
    pricing.parent_tiers.retain(|t| t.tier == ParentTier::Large);

    let err = build_catalog(&pricing).unwrap_err();

    assert!(format!("{err:#}").contains("missing price for Small parent albums"));
  }

  #[test]
  fn test_build_catalog_applies_coupon_override() {
    let mut pricing = PricingConfig::default();
    pricing.coupons[0].amount = Money::dollars(250);

    let catalog = build_catalog(&pricing).unwrap();

    assert_eq!(catalog.coupon("prepaid400").map(|c| c.amount), Some(Money::dollars(250)));
  }
}
