use serde::{Deserialize, Serialize};
use std::fmt;

use super::text::ImageRef;
use crate::catalog::{Catalog, MaterialCategory, MetalAcrylicKind, PhotoSubstrate};

/// Material base elegido: categoría y, si ya se eligió, el color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialPick {
  pub category: MaterialCategory,
  pub swatch: Option<String>,
}

impl MaterialPick {
  /// Categoría sin color elegido.
  pub fn new(category: MaterialCategory) -> Self {
    Self { category, swatch: None }
  }

  pub fn with_swatch(category: MaterialCategory, swatch: impl Into<String>) -> Self {
    Self { category, swatch: Some(swatch.into()) }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoCover {
  pub substrate: PhotoSubstrate,
  pub image_refs: Vec<ImageRef>,
}

impl PhotoCover {
  pub fn new(substrate: PhotoSubstrate) -> Self {
    Self { substrate, image_refs: Vec::new() }
  }
}

/// Portada de metal o acrílico.
///
/// Lomo y trasera van en piel o lino: por eso lleva su propia elección de
/// material (`binding`), obligatoria para poder pedir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetalAcrylicCover {
  pub kind: MetalAcrylicKind,
  pub finish: String,
  pub binding: MaterialPick,
  pub image_refs: Vec<ImageRef>,
  pub design_text: Vec<String>,
}

/// Portada del álbum principal. Sólo una variante está activa; cambiar de
/// variante descarta los campos de la anterior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum Cover {
  BaseMaterial(MaterialPick),
  Photo(PhotoCover),
  MetalAcrylic(MetalAcrylicCover),
}

/// Etiqueta de la variante de [`Cover`], sin datos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverVariant {
  BaseMaterial,
  Photo,
  MetalAcrylic,
}

impl fmt::Display for CoverVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CoverVariant::BaseMaterial => write!(f, "Leather / Linen"),
      CoverVariant::Photo => write!(f, "Photo"),
      CoverVariant::MetalAcrylic => write!(f, "Metal / Acrylic"),
    }
  }
}

impl Cover {
  /// Portada recién abierta en la variante `variant`, con los valores por
  /// defecto del catálogo.
  pub fn fresh(variant: CoverVariant, category: MaterialCategory, catalog: &Catalog) -> Self {
    match variant {
      CoverVariant::BaseMaterial => Cover::BaseMaterial(MaterialPick::new(category)),
      CoverVariant::Photo => Cover::Photo(PhotoCover::new(catalog.first_photo_substrate())),
      CoverVariant::MetalAcrylic => {
        let kind = catalog.metal_acrylic.first().map(|m| m.kind).unwrap_or(MetalAcrylicKind::Metal);
        let binding =
          catalog.binding_categories.first().copied().unwrap_or(MaterialCategory::StandardLeather);

        Cover::MetalAcrylic(MetalAcrylicCover {
          kind,
          finish: catalog.finishes(kind).first().cloned().unwrap_or_default(),
          binding: MaterialPick::new(binding),
          image_refs: Vec::new(),
          design_text: Vec::new(),
        })
      }
    }
  }

  pub fn variant(&self) -> CoverVariant {
    match self {
      Cover::BaseMaterial(_) => CoverVariant::BaseMaterial,
      Cover::Photo(_) => CoverVariant::Photo,
      Cover::MetalAcrylic(_) => CoverVariant::MetalAcrylic,
    }
  }

  /// Categoría de material base, sólo si la portada es de piel/lino.
  pub fn base_category(&self) -> Option<MaterialCategory> {
    match self {
      Cover::BaseMaterial(pick) => Some(pick.category),
      _ => None,
    }
  }

  pub fn image_refs(&self) -> &[ImageRef] {
    match self {
      Cover::BaseMaterial(_) => &[],
      Cover::Photo(photo) => &photo.image_refs,
      Cover::MetalAcrylic(ma) => &ma.image_refs,
    }
  }
}

/// Portada de un álbum de padres: material base o foto, nunca metal/acrílico.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum ParentCover {
  BaseMaterial(MaterialPick),
  Photo(PhotoCover),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentCoverVariant {
  BaseMaterial,
  Photo,
}

impl ParentCover {
  pub fn fresh(variant: ParentCoverVariant, catalog: &Catalog) -> Self {
    match variant {
      ParentCoverVariant::BaseMaterial => {
        let category =
          catalog.parent_categories.first().copied().unwrap_or(MaterialCategory::StandardLeather);
        ParentCover::BaseMaterial(MaterialPick::new(category))
      }
      ParentCoverVariant::Photo => ParentCover::Photo(PhotoCover::new(catalog.first_photo_substrate())),
    }
  }

  pub fn variant(&self) -> ParentCoverVariant {
    match self {
      ParentCover::BaseMaterial(_) => ParentCoverVariant::BaseMaterial,
      ParentCover::Photo(_) => ParentCoverVariant::Photo,
    }
  }
}
