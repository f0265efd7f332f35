use serde::{Deserialize, Serialize};

use super::cover::{Cover, MaterialPick, ParentCover, ParentCoverVariant};
use super::imprint::Imprint;
use crate::catalog::{AlbumType, Catalog, PageThickness, ParentTier};

/// Álbumes de padres: copias reducidas del álbum principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentAlbums {
  pub tier: ParentTier,
  pub quantity: u32,
  pub cover: ParentCover,
}

impl ParentAlbums {
  pub fn new(catalog: &Catalog) -> Self {
    Self {
      tier: ParentTier::Small,
      quantity: 0,
      cover: ParentCover::fresh(ParentCoverVariant::BaseMaterial, catalog),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrades {
  /// Dorado de cantos.
  pub gilding: bool,
  pub page_thickness: PageThickness,
}

/// La selección completa del comprador.
///
/// Hay una sola por sesión; se crea con [`AlbumSelection::new`] y se
/// modifica exclusivamente a través de [`crate::transition::apply`], que es
/// quien aplica los reseteos en cascada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSelection {
  pub album_type: AlbumType,
  /// Clave del tamaño dentro de la línea (`"10x10"`).
  pub album_size: String,
  pub cover: Cover,
  pub imprint: Option<Imprint>,
  pub parent_albums: ParentAlbums,
  pub upgrades: Upgrades,
  /// Texto tal cual lo escribió el comprador.
  pub coupon_code: String,
}

impl AlbumSelection {
  /// Selección inicial de una sesión: línea Signature, primer tamaño, primera
  /// categoría sin color, sin extras.
  pub fn new(catalog: &Catalog) -> Self {
    Self::for_type(AlbumType::Signature, catalog)
  }

  /// Selección por defecto de una línea concreta.
  pub fn for_type(album_type: AlbumType, catalog: &Catalog) -> Self {
    Self {
      album_type,
      album_size: catalog.first_size(album_type).map(|s| s.key.clone()).unwrap_or_default(),
      cover: Cover::BaseMaterial(MaterialPick::new(catalog.first_cover_category(album_type))),
      imprint: None,
      parent_albums: ParentAlbums::new(catalog),
      upgrades: Upgrades::default(),
      coupon_code: String::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::MaterialCategory;

  #[test]
  fn test_new_selection_defaults() {
    let catalog = Catalog::builtin();

    let sel = AlbumSelection::new(&catalog);

    assert_eq!(sel.album_type, AlbumType::Signature);
    assert_eq!(sel.album_size, "8x8");
    assert_eq!(sel.cover, Cover::BaseMaterial(MaterialPick::new(MaterialCategory::StandardLeather)));
    assert_eq!(sel.imprint, None);
    assert_eq!(sel.parent_albums.quantity, 0);
    assert!(!sel.upgrades.gilding);
    assert!(sel.coupon_code.is_empty());
  }

  #[test]
  fn test_artisan_defaults_use_artisan_catalog() {
    let catalog = Catalog::builtin();

    let sel = AlbumSelection::for_type(AlbumType::Artisan, &catalog);

    assert_eq!(sel.cover.base_category(), Some(MaterialCategory::Linen));
  }
}
