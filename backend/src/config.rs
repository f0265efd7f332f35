use folio_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};
use folio_core::Catalog;
use folio_core::catalog::{Coupon, FlatPrices, PageThicknessPrice, ParentTierPrice};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const PRICING_SECTION: &str = "pricing";
const EXPORT_SECTION: &str = "export";

/// Precios editables por la tienda, sección `[pricing]` de `folio.toml`.
///
/// Lo que falte en el fichero se rellena con los precios publicados.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PricingConfig {
  pub prices: FlatPrices,
  pub parent_tiers: Vec<ParentTierPrice>,
  pub page_thickness: Vec<PageThicknessPrice>,
  pub coupons: Vec<Coupon>,
}

impl Default for PricingConfig {
  fn default() -> Self {
    let builtin = Catalog::builtin();
    PricingConfig {
      prices: builtin.prices,
      parent_tiers: builtin.parent_tiers,
      page_thickness: builtin.page_thickness,
      coupons: builtin.coupons,
    }
  }
}

impl PricingConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  /// Carga la sección y la vuelve a escribir para que el usuario vea todas las claves.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default(PRICING_SECTION)?;
    cfg.save_to(backend)?;
    Ok(cfg)
  }

  pub fn save_to(&self, backend: &TomlConfigBackend) -> Result<(), ConfigError> {
    backend.save_section(PRICING_SECTION, self)
  }

  pub fn apply_to(&self, catalog: &mut Catalog) {
    catalog.prices = self.prices.clone();
    catalog.parent_tiers = self.parent_tiers.clone();
    catalog.page_thickness = self.page_thickness.clone();
    catalog.coupons = self.coupons.clone();
  }
}

/// Sección `[export]`: a dónde va la acción "copiar selección".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExportConfig {
  /// Nombre del fichero de traspaso, relativo al directorio de datos.
  #[serde(default = "default_handoff_file")]
  pub handoff_file: String,
}

fn default_handoff_file() -> String {
  "selection.json".into()
}

impl Default for ExportConfig {
  fn default() -> Self {
    ExportConfig { handoff_file: default_handoff_file() }
  }
}

impl ExportConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default(EXPORT_SECTION)?;
    cfg.save_to(backend)?;
    Ok(cfg)
  }

  pub fn save_to(&self, backend: &TomlConfigBackend) -> Result<(), ConfigError> {
    backend.save_section(EXPORT_SECTION, self)
  }

  pub fn handoff_path(&self, data_dir: &Path) -> PathBuf {
    data_dir.join(&self.handoff_file)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use folio_config::FolioPaths;
  use folio_core::Money;
  use folio_core::catalog::ParentTier;
  use std::fs;
  use tempfile::tempdir;

  fn backend_in(dir: &Path) -> TomlConfigBackend {
    TomlConfigBackend::new(FolioPaths::portable(dir).unwrap())
  }

  #[test]
  fn test_missing_section_uses_published_prices_and_writes_them() {
    let dir = tempdir().unwrap();
    let backend = backend_in(dir.path());

    let cfg = PricingConfig::load_from(&backend).unwrap();

    assert_eq!(cfg, PricingConfig::default());
    let written = fs::read_to_string(backend.config_file()).unwrap();
    assert!(written.contains("[pricing"));
  }

  #[test]
  fn test_partial_section_keeps_defaults_for_missing_keys() {
    let dir = tempdir().unwrap();
    let backend = backend_in(dir.path());
    fs::write(
      backend.config_file(),
      r#"
[pricing]
coupons = [{ code = "SPRING100", amount = 100 }]
"#,
    )
    .unwrap();

    let cfg = PricingConfig::load_from(&backend).unwrap();

    assert_eq!(cfg.coupons, vec![Coupon { code: "SPRING100".into(), amount: Money::dollars(100) }]);
    assert_eq!(cfg.prices, Catalog::builtin().prices);
  }

  #[test]
  fn test_partial_prices_table_keeps_published_values() {
    let dir = tempdir().unwrap();
    let backend = backend_in(dir.path());
    fs::write(backend.config_file(), "[pricing.prices]\ngilding = 175\n").unwrap();

    let cfg = PricingConfig::load_from(&backend).unwrap();

    assert_eq!(cfg.prices.gilding, Money::dollars(175));
    assert_eq!(cfg.prices.photo_cover, Money::dollars(150));
    assert_eq!(cfg.prices.metal_acrylic_cover, Money::dollars(250));
    assert_eq!(cfg.parent_tiers, Catalog::builtin().parent_tiers);
  }

  #[test]
  fn test_saved_pricing_reloads_unchanged() {
    let dir = tempdir().unwrap();
    let backend = backend_in(dir.path());
    let mut cfg = PricingConfig::default();
    cfg.coupons.push(Coupon { code: "SPRING100".into(), amount: Money::dollars(100) });
    cfg.page_thickness[2].price = Money::dollars(120);

    cfg.save_to(&backend).unwrap();

    assert_eq!(PricingConfig::load_from(&backend).unwrap(), cfg);
  }

  #[test]
  fn test_saved_export_config_keeps_other_sections() {
    let dir = tempdir().unwrap();
    let backend = backend_in(dir.path());
    fs::write(backend.config_file(), "# tienda\n[pricing.prices]\ngilding = 175\n").unwrap();

    ExportConfig { handoff_file: "orders/current.json".into() }.save_to(&backend).unwrap();

    let written = fs::read_to_string(backend.config_file()).unwrap();
    assert!(written.contains("# tienda"));
    assert!(written.contains("gilding = 175"));
    let cfg = ExportConfig::load_from(&backend).unwrap();
    assert_eq!(cfg.handoff_file, "orders/current.json");
  }

  #[test]
  fn test_apply_to_overrides_catalog_prices() {
    let mut cfg = PricingConfig::default();
    cfg.prices.gilding = Money::dollars(175);
    cfg.parent_tiers[1].each = Money::dollars(450);

    let mut catalog = Catalog::builtin();
    cfg.apply_to(&mut catalog);

    assert_eq!(catalog.prices.gilding, Money::dollars(175));
    assert_eq!(catalog.tier(ParentTier::Large).map(|t| t.each), Some(Money::dollars(450)));
    assert_eq!(catalog.album_types, Catalog::builtin().album_types);
  }

  #[test]
  fn test_export_config_resolves_under_data_dir() {
    let dir = tempdir().unwrap();
    let backend = backend_in(dir.path());

    let cfg = ExportConfig::load_from(&backend).unwrap();

    assert_eq!(cfg.handoff_file, "selection.json");
    assert_eq!(cfg.handoff_path(Path::new("/data")), PathBuf::from("/data/selection.json"));
  }
}
