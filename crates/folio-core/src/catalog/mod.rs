//! Catálogo de producto: tablas de precios, muestrarios y reglas de
//! elegibilidad.
//!
//! Se construye una sola vez al arrancar (ver [`Catalog::builtin`]) y después
//! sólo se lee. Las capas superiores pueden sobreescribir precios desde la
//! configuración antes de entregarlo al servicio.

mod album_type;
mod builtin;
mod imprint_policy;
mod material;
mod money;
mod prices;

pub use album_type::{AlbumType, AlbumTypeParseError};
pub use builtin::BLIND_DEBOSS;
pub use imprint_policy::{
  ColorRestriction, ImprintMethod, ImprintOptions, ImprintPolicy, ImprintRule, MethodOptions,
};
pub use material::{MaterialCategory, MaterialSpec, MetalAcrylicKind, MetalAcrylicSpec, PhotoSubstrate};
pub use money::Money;
pub use prices::{Coupon, FlatPrices, PageThickness, PageThicknessPrice, ParentTier, ParentTierPrice};

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Tamaño de álbum con su precio base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSize {
  /// Clave estable (`"10x10"`), la que se guarda en la selección.
  pub key: String,
  pub label: String,
  pub price: Money,
}

/// Todo lo que depende de la línea de producto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumTypeSpec {
  pub album_type: AlbumType,
  pub sizes: Vec<AlbumSize>,
  /// Categorías de material base, en orden de presentación.
  pub cover_categories: Vec<MaterialCategory>,
  pub allows_metal_acrylic: bool,
  pub allows_gilding: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
  pub album_types: Vec<AlbumTypeSpec>,
  pub materials: Vec<MaterialSpec>,
  /// Lomo y trasera de las portadas metal/acrílico.
  pub binding_categories: Vec<MaterialCategory>,
  /// Materiales admitidos en álbumes de padres.
  pub parent_categories: Vec<MaterialCategory>,
  pub photo_substrates: Vec<PhotoSubstrate>,
  pub metal_acrylic: Vec<MetalAcrylicSpec>,
  pub prices: FlatPrices,
  pub parent_tiers: Vec<ParentTierPrice>,
  pub page_thickness: Vec<PageThicknessPrice>,
  pub coupons: Vec<Coupon>,
  pub imprint: ImprintOptions,
}

impl Default for Catalog {
  fn default() -> Self {
    Catalog::builtin()
  }
}

impl Catalog {
  pub fn album(&self, album_type: AlbumType) -> Option<&AlbumTypeSpec> {
    self.album_types.iter().find(|a| a.album_type == album_type)
  }

  pub fn size(&self, album_type: AlbumType, key: &str) -> Option<&AlbumSize> {
    self.album(album_type)?.sizes.iter().find(|s| s.key == key)
  }

  pub fn first_size(&self, album_type: AlbumType) -> Option<&AlbumSize> {
    self.album(album_type)?.sizes.first()
  }

  pub fn cover_categories(&self, album_type: AlbumType) -> &[MaterialCategory] {
    self.album(album_type).map(|a| a.cover_categories.as_slice()).unwrap_or(&[])
  }

  /// Primera categoría de la línea; `StandardLeather` si la línea no tiene ninguna.
  pub fn first_cover_category(&self, album_type: AlbumType) -> MaterialCategory {
    self.cover_categories(album_type).first().copied().unwrap_or(MaterialCategory::StandardLeather)
  }

  pub fn allows_metal_acrylic(&self, album_type: AlbumType) -> bool {
    self.album(album_type).is_some_and(|a| a.allows_metal_acrylic)
  }

  pub fn allows_gilding(&self, album_type: AlbumType) -> bool {
    self.album(album_type).is_some_and(|a| a.allows_gilding)
  }

  pub fn swatches(&self, category: MaterialCategory) -> &[String] {
    self.materials.iter().find(|m| m.category == category).map(|m| m.swatches.as_slice()).unwrap_or(&[])
  }

  pub fn has_swatch(&self, category: MaterialCategory, swatch: &str) -> bool {
    self.swatches(category).iter().any(|s| s == swatch)
  }

  pub fn finishes(&self, kind: MetalAcrylicKind) -> &[String] {
    self.metal_acrylic.iter().find(|m| m.kind == kind).map(|m| m.finishes.as_slice()).unwrap_or(&[])
  }

  pub fn first_photo_substrate(&self) -> PhotoSubstrate {
    self.photo_substrates.first().copied().unwrap_or(PhotoSubstrate::Matte)
  }

  pub fn tier(&self, tier: ParentTier) -> Option<&ParentTierPrice> {
    self.parent_tiers.iter().find(|t| t.tier == tier)
  }

  /// Precio de la opción de grosor; una opción sin fila cuesta cero.
  pub fn page_thickness_price(&self, option: PageThickness) -> Money {
    self.page_thickness.iter().find(|p| p.option == option).map(|p| p.price).unwrap_or(Money::ZERO)
  }

  pub fn coupon(&self, input: &str) -> Option<&Coupon> {
    self.coupons.iter().find(|c| c.matches(input))
  }

  /// Comprueba la coherencia interna del catálogo.
  ///
  /// Se llama tras aplicar overrides de configuración: un catálogo que no
  /// pasa esta comprobación dejaría secciones imposibles de completar.
  pub fn check(&self) -> Result<(), CoreError> {
    for album_type in AlbumType::ALL {
      let spec = self
        .album(album_type)
        .ok_or_else(|| CoreError::Catalog(format!("missing album type {album_type}")))?;

      if spec.sizes.is_empty() {
        return Err(CoreError::Catalog(format!("album type {album_type} has no sizes")));
      }
      if spec.cover_categories.is_empty() {
        return Err(CoreError::Catalog(format!("album type {album_type} has no cover categories")));
      }
    }

    let categories = self
      .album_types
      .iter()
      .flat_map(|a| a.cover_categories.iter())
      .chain(self.binding_categories.iter())
      .chain(self.parent_categories.iter());

    for category in categories {
      if self.swatches(*category).is_empty() {
        return Err(CoreError::Catalog(format!("category {category} has no swatches")));
      }
    }

    for tier in ParentTier::ALL {
      if self.tier(tier).is_none() {
        return Err(CoreError::Catalog(format!("missing price for {tier} parent albums")));
      }
    }

    if let Some(tier) = self.parent_tiers.iter().find(|t| t.pair > t.each.times(2)) {
      return Err(CoreError::Catalog(format!("{} tier pair price exceeds two singles", tier.tier)));
    }

    if self.coupons.iter().any(|c| c.code.trim().is_empty()) {
      return Err(CoreError::Catalog("coupon with empty code".into()));
    }

    Ok(())
  }
}
