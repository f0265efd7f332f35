//! Transiciones de la selección.
//!
//! Cada interacción del comprador es un [`SelectionEvent`]. [`apply`] es la
//! tabla de transiciones: para cada par (evento, variante activa) decide el
//! nuevo estado y qué campos se resetean en cascada. Las entradas inválidas
//! no son errores: se ignoran y se devuelve el motivo en [`Outcome::Ignored`].

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{
  AlbumType, Catalog, ImprintMethod, MaterialCategory, MetalAcrylicKind, PageThickness, ParentTier,
  PhotoSubstrate,
};
use crate::domain::text::{self, DESIGN_LINE_CHARS, ImageRef, MAX_DESIGN_LINES};
use crate::domain::{AlbumSelection, Cover, CoverVariant, Imprint, ParentCover, ParentCoverVariant};
use crate::validation::imprint_offer;

/// Una interacción del comprador con el formulario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
  SetAlbumType(AlbumType),
  SetAlbumSize(String),

  SetCoverVariant(CoverVariant),
  SetCoverCategory(MaterialCategory),
  SetCoverSwatch(String),
  SetPhotoSubstrate(PhotoSubstrate),
  SetCoverImages(Vec<ImageRef>),
  SetMetalAcrylicKind(MetalAcrylicKind),
  SetMetalAcrylicFinish(String),
  SetBindingCategory(MaterialCategory),
  SetBindingSwatch(String),
  SetDesignText { index: usize, text: String },

  /// `None` desactiva la personalización.
  SetImprintMethod(Option<ImprintMethod>),
  SetImprintFont(String),
  SetImprintColor(String),
  SetImprintPosition(String),
  SetImprintLine { index: usize, text: String },

  SetParentTier(ParentTier),
  SetParentQuantity(u32),
  /// Texto crudo del campo de cantidad.
  SetParentQuantityInput(String),
  SetParentCoverVariant(ParentCoverVariant),
  SetParentCategory(MaterialCategory),
  SetParentSwatch(String),
  SetParentSubstrate(PhotoSubstrate),
  SetParentImages(Vec<ImageRef>),

  SetGilding(bool),
  SetPageThickness(PageThickness),
  SetCouponCode(String),
}

/// Campos que una transición ha devuelto a su valor por defecto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionField {
  AlbumSize,
  Cover,
  CoverSwatch,
  MetalAcrylicFinish,
  BindingSwatch,
  Imprint,
  ImprintColor,
  Upgrades,
  ParentCover,
  ParentSwatch,
}

/// Motivo por el que una entrada no se aplicó.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IgnoreReason {
  #[error("value unchanged")]
  Unchanged,
  #[error("unknown size {0:?}")]
  UnknownSize(String),
  #[error("cover variant {0} not offered for this album")]
  VariantNotOffered(CoverVariant),
  #[error("event does not apply to the active cover variant")]
  WrongCoverVariant,
  #[error("category {0} not offered here")]
  CategoryNotOffered(MaterialCategory),
  #[error("unknown swatch {0:?}")]
  UnknownSwatch(String),
  #[error("unknown option {0:?}")]
  UnknownOption(String),
  #[error("photo substrate {0} not offered")]
  SubstrateNotOffered(PhotoSubstrate),
  #[error("imprinting is not enabled")]
  NoImprint,
  #[error("{0} not offered on this cover")]
  ImprintNotOffered(ImprintMethod),
  #[error("color {0:?} not offered on this cover")]
  ColorNotOffered(String),
  #[error("line {0} out of range")]
  LineOutOfRange(usize),
  #[error("text contains characters that cannot be foil stamped")]
  CharacterNotAllowed,
  #[error("gilding not offered for this album")]
  GildingNotOffered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Applied { cleared: Vec<SelectionField> },
  Ignored(IgnoreReason),
}

impl Outcome {
  fn applied() -> Self {
    Outcome::Applied { cleared: Vec::new() }
  }

  fn cleared(fields: Vec<SelectionField>) -> Self {
    Outcome::Applied { cleared: fields }
  }

  pub fn is_applied(&self) -> bool {
    matches!(self, Outcome::Applied { .. })
  }

  /// Campos reseteados en cascada; vacío si no se aplicó.
  pub fn cleared_fields(&self) -> &[SelectionField] {
    match self {
      Outcome::Applied { cleared } => cleared,
      Outcome::Ignored(_) => &[],
    }
  }
}

fn ignore(reason: IgnoreReason) -> Outcome {
  Outcome::Ignored(reason)
}

/// Aplica `event` sobre `selection`.
pub fn apply(selection: &mut AlbumSelection, event: &SelectionEvent, catalog: &Catalog) -> Outcome {
  let outcome = transition(selection, event, catalog);

  match &outcome {
    Outcome::Ignored(reason) => debug!(?event, %reason, "selection input ignored"),
    Outcome::Applied { cleared } if !cleared.is_empty() => debug!(?event, ?cleared, "cascade reset"),
    Outcome::Applied { .. } => {}
  }

  outcome
}

fn transition(selection: &mut AlbumSelection, event: &SelectionEvent, catalog: &Catalog) -> Outcome {
  use SelectionEvent::*;

  match event {
    SetAlbumType(next) => set_album_type(selection, *next, catalog),
    SetAlbumSize(key) => {
      if catalog.size(selection.album_type, key).is_none() {
        return ignore(IgnoreReason::UnknownSize(key.clone()));
      }
      selection.album_size = key.clone();
      Outcome::applied()
    }

    SetCoverVariant(variant) => set_cover_variant(selection, *variant, catalog),
    SetCoverCategory(category) => set_cover_category(selection, *category, catalog),
    SetCoverSwatch(_) | SetPhotoSubstrate(_) | SetCoverImages(_) => {
      cover_transition(selection, event, catalog)
    }
    SetMetalAcrylicKind(_)
    | SetMetalAcrylicFinish(_)
    | SetBindingCategory(_)
    | SetBindingSwatch(_)
    | SetDesignText { .. } => metal_acrylic_transition(selection, event, catalog),

    SetImprintMethod(method) => set_imprint_method(selection, *method, catalog),
    SetImprintFont(_) | SetImprintColor(_) | SetImprintPosition(_) | SetImprintLine { .. } => {
      imprint_transition(selection, event, catalog)
    }

    SetParentTier(tier) => {
      if catalog.tier(*tier).is_none() {
        return ignore(IgnoreReason::UnknownOption(tier.to_string()));
      }
      selection.parent_albums.tier = *tier;
      Outcome::applied()
    }
    SetParentQuantity(n) => {
      selection.parent_albums.quantity = *n;
      Outcome::applied()
    }
    SetParentQuantityInput(raw) => {
      selection.parent_albums.quantity = parse_quantity(raw);
      Outcome::applied()
    }
    SetParentCoverVariant(_)
    | SetParentCategory(_)
    | SetParentSwatch(_)
    | SetParentSubstrate(_)
    | SetParentImages(_) => parent_cover_transition(selection, event, catalog),

    SetGilding(on) => {
      if *on && !catalog.allows_gilding(selection.album_type) {
        return ignore(IgnoreReason::GildingNotOffered);
      }
      selection.upgrades.gilding = *on;
      Outcome::applied()
    }
    SetPageThickness(option) => {
      selection.upgrades.page_thickness = *option;
      Outcome::applied()
    }
    SetCouponCode(code) => {
      selection.coupon_code = code.clone();
      Outcome::applied()
    }
  }
}

/// Cambiar de línea invalida todo lo que depende de ella: tamaño, portada,
/// personalización y mejoras. Los álbumes de padres y el cupón se conservan.
fn set_album_type(selection: &mut AlbumSelection, next: AlbumType, catalog: &Catalog) -> Outcome {
  if selection.album_type == next {
    return ignore(IgnoreReason::Unchanged);
  }

  let fresh = AlbumSelection::for_type(next, catalog);
  selection.album_type = next;
  selection.album_size = fresh.album_size;
  selection.cover = fresh.cover;
  selection.imprint = None;
  selection.upgrades = fresh.upgrades;

  Outcome::cleared(vec![
    SelectionField::AlbumSize,
    SelectionField::Cover,
    SelectionField::Imprint,
    SelectionField::Upgrades,
  ])
}

fn cover_transition(selection: &mut AlbumSelection, event: &SelectionEvent, catalog: &Catalog) -> Outcome {
  use SelectionEvent::*;

  match (event, &mut selection.cover) {
    (SetCoverSwatch(swatch), Cover::BaseMaterial(pick)) => {
      if !catalog.has_swatch(pick.category, swatch) {
        return ignore(IgnoreReason::UnknownSwatch(swatch.clone()));
      }
      pick.swatch = Some(swatch.clone());
      Outcome::applied()
    }
    (SetPhotoSubstrate(substrate), Cover::Photo(photo)) => {
      if !catalog.photo_substrates.contains(substrate) {
        return ignore(IgnoreReason::SubstrateNotOffered(*substrate));
      }
      photo.substrate = *substrate;
      Outcome::applied()
    }
    (SetCoverImages(refs), Cover::Photo(photo)) => {
      photo.image_refs = text::clamp_images(refs.clone());
      Outcome::applied()
    }
    (SetCoverImages(refs), Cover::MetalAcrylic(ma)) => {
      ma.image_refs = text::clamp_images(refs.clone());
      Outcome::applied()
    }

    _ => ignore(IgnoreReason::WrongCoverVariant),
  }
}

fn set_cover_variant(selection: &mut AlbumSelection, variant: CoverVariant, catalog: &Catalog) -> Outcome {
  let album_type = selection.album_type;

  if selection.cover.variant() == variant {
    return ignore(IgnoreReason::Unchanged);
  }
  if variant == CoverVariant::MetalAcrylic && !catalog.allows_metal_acrylic(album_type) {
    return ignore(IgnoreReason::VariantNotOffered(variant));
  }

  // La variante anterior se descarta entera: nada de arrastrar colores.
  selection.cover = Cover::fresh(variant, catalog.first_cover_category(album_type), catalog);

  let mut cleared = vec![SelectionField::Cover];
  if variant != CoverVariant::BaseMaterial && selection.imprint.take().is_some() {
    cleared.push(SelectionField::Imprint);
  }
  Outcome::cleared(cleared)
}

fn set_cover_category(
  selection: &mut AlbumSelection,
  category: MaterialCategory,
  catalog: &Catalog,
) -> Outcome {
  if !catalog.cover_categories(selection.album_type).contains(&category) {
    return ignore(IgnoreReason::CategoryNotOffered(category));
  }
  let Cover::BaseMaterial(pick) = &mut selection.cover else {
    return ignore(IgnoreReason::WrongCoverVariant);
  };
  if pick.category == category {
    return ignore(IgnoreReason::Unchanged);
  }
  pick.category = category;
  pick.swatch = None;

  let mut cleared = vec![SelectionField::CoverSwatch];
  if normalize_imprint_color(selection, catalog) {
    cleared.push(SelectionField::ImprintColor);
  }
  Outcome::cleared(cleared)
}

fn metal_acrylic_transition(
  selection: &mut AlbumSelection,
  event: &SelectionEvent,
  catalog: &Catalog,
) -> Outcome {
  use SelectionEvent::*;

  let Cover::MetalAcrylic(ma) = &mut selection.cover else {
    return ignore(IgnoreReason::WrongCoverVariant);
  };

  match event {
    SetMetalAcrylicKind(kind) => {
      if ma.kind == *kind {
        return ignore(IgnoreReason::Unchanged);
      }
      let Some(first) = catalog.finishes(*kind).first() else {
        return ignore(IgnoreReason::UnknownOption(kind.to_string()));
      };
      ma.kind = *kind;
      ma.finish = first.clone();
      Outcome::cleared(vec![SelectionField::MetalAcrylicFinish])
    }
    SetMetalAcrylicFinish(finish) => {
      if !catalog.finishes(ma.kind).contains(finish) {
        return ignore(IgnoreReason::UnknownOption(finish.clone()));
      }
      ma.finish = finish.clone();
      Outcome::applied()
    }
    SetBindingCategory(category) => {
      if !catalog.binding_categories.contains(category) {
        return ignore(IgnoreReason::CategoryNotOffered(*category));
      }
      if ma.binding.category == *category {
        return ignore(IgnoreReason::Unchanged);
      }
      ma.binding.category = *category;
      ma.binding.swatch = None;
      Outcome::cleared(vec![SelectionField::BindingSwatch])
    }
    SetBindingSwatch(swatch) => {
      if !catalog.has_swatch(ma.binding.category, swatch) {
        return ignore(IgnoreReason::UnknownSwatch(swatch.clone()));
      }
      ma.binding.swatch = Some(swatch.clone());
      Outcome::applied()
    }
    SetDesignText { index, text: line } => {
      if *index >= MAX_DESIGN_LINES {
        return ignore(IgnoreReason::LineOutOfRange(*index));
      }
      if ma.design_text.len() <= *index {
        ma.design_text.resize(index + 1, String::new());
      }
      ma.design_text[*index] = text::clamp_chars(line, DESIGN_LINE_CHARS);
      Outcome::applied()
    }
    _ => ignore(IgnoreReason::WrongCoverVariant),
  }
}

fn set_imprint_method(
  selection: &mut AlbumSelection,
  method: Option<ImprintMethod>,
  catalog: &Catalog,
) -> Outcome {
  let Some(method) = method else {
    return match selection.imprint.take() {
      Some(_) => Outcome::cleared(vec![SelectionField::Imprint]),
      None => ignore(IgnoreReason::Unchanged),
    };
  };

  let offer = imprint_offer(&selection.cover, catalog);
  let Some(method_offer) = offer.method(method) else {
    return ignore(IgnoreReason::ImprintNotOffered(method));
  };

  if selection.imprint.as_ref().is_some_and(|i| i.method() == method) {
    return ignore(IgnoreReason::Unchanged);
  }

  // Cambiar de técnica descarta tipografía, color y textos de la anterior.
  let previous = selection.imprint.replace(Imprint::fresh(method, &catalog.imprint, &method_offer.colors));

  match previous {
    Some(_) => Outcome::cleared(vec![SelectionField::Imprint]),
    None => Outcome::applied(),
  }
}

fn imprint_transition(selection: &mut AlbumSelection, event: &SelectionEvent, catalog: &Catalog) -> Outcome {
  use SelectionEvent::*;

  let offer = imprint_offer(&selection.cover, catalog);
  let Some(imprint) = selection.imprint.as_mut() else {
    return ignore(IgnoreReason::NoImprint);
  };
  let Some(method_offer) = offer.method(imprint.method()) else {
    return ignore(IgnoreReason::ImprintNotOffered(imprint.method()));
  };
  let limits = &catalog.imprint;

  match event {
    SetImprintFont(font) => {
      if !method_offer.fonts.contains(font) {
        return ignore(IgnoreReason::UnknownOption(font.clone()));
      }
      *imprint.font_mut() = font.clone();
      Outcome::applied()
    }
    SetImprintColor(color) => {
      if !method_offer.colors.contains(color) {
        return ignore(IgnoreReason::ColorNotOffered(color.clone()));
      }
      *imprint.color_mut() = color.clone();
      Outcome::applied()
    }
    SetImprintPosition(position) => match imprint {
      Imprint::FoilStamping(foil) if method_offer.positions.contains(position) => {
        foil.position = position.clone();
        Outcome::applied()
      }
      _ => ignore(IgnoreReason::UnknownOption(position.clone())),
    },
    SetImprintLine { index, text: line } => {
      if *index >= limits.max_lines {
        return ignore(IgnoreReason::LineOutOfRange(*index));
      }
      let clamped = text::clamp_chars(line, limits.max_chars);
      if imprint.method() == ImprintMethod::FoilStamping && !text::is_foil_safe(&clamped) {
        return ignore(IgnoreReason::CharacterNotAllowed);
      }

      let lines = imprint.lines_mut();
      if lines.len() <= *index {
        lines.resize(index + 1, String::new());
      }
      lines[*index] = clamped;
      Outcome::applied()
    }
    _ => ignore(IgnoreReason::NoImprint),
  }
}

/// Tras cambiar la categoría de la portada, el color de la personalización
/// puede dejar de estar permitido (p. ej. bajorrelieve sobre piel envejecida).
/// En ese caso vuelve al primer color permitido. Devuelve si hubo cambio.
fn normalize_imprint_color(selection: &mut AlbumSelection, catalog: &Catalog) -> bool {
  let offer = imprint_offer(&selection.cover, catalog);
  let Some(imprint) = selection.imprint.as_mut() else {
    return false;
  };
  let Some(method_offer) = offer.method(imprint.method()) else {
    return false;
  };
  if method_offer.colors.iter().any(|c| c == imprint.color()) {
    return false;
  }

  match method_offer.colors.first() {
    Some(first) => {
      *imprint.color_mut() = first.clone();
      true
    }
    None => false,
  }
}

fn parent_cover_transition(
  selection: &mut AlbumSelection,
  event: &SelectionEvent,
  catalog: &Catalog,
) -> Outcome {
  use SelectionEvent::*;

  match (event, &mut selection.parent_albums.cover) {
    (SetParentCoverVariant(variant), cover) => {
      if cover.variant() == *variant {
        return ignore(IgnoreReason::Unchanged);
      }
      *cover = ParentCover::fresh(*variant, catalog);
      Outcome::cleared(vec![SelectionField::ParentCover])
    }
    (SetParentCategory(category), ParentCover::BaseMaterial(pick)) => {
      if !catalog.parent_categories.contains(category) {
        return ignore(IgnoreReason::CategoryNotOffered(*category));
      }
      if pick.category == *category {
        return ignore(IgnoreReason::Unchanged);
      }
      pick.category = *category;
      pick.swatch = None;
      Outcome::cleared(vec![SelectionField::ParentSwatch])
    }
    (SetParentSwatch(swatch), ParentCover::BaseMaterial(pick)) => {
      if !catalog.has_swatch(pick.category, swatch) {
        return ignore(IgnoreReason::UnknownSwatch(swatch.clone()));
      }
      pick.swatch = Some(swatch.clone());
      Outcome::applied()
    }
    (SetParentSubstrate(substrate), ParentCover::Photo(photo)) => {
      if !catalog.photo_substrates.contains(substrate) {
        return ignore(IgnoreReason::SubstrateNotOffered(*substrate));
      }
      photo.substrate = *substrate;
      Outcome::applied()
    }
    (SetParentImages(refs), ParentCover::Photo(photo)) => {
      photo.image_refs = text::clamp_images(refs.clone());
      Outcome::applied()
    }
    _ => ignore(IgnoreReason::WrongCoverVariant),
  }
}

/// Interpreta el campo de cantidad de álbumes de padres.
///
/// Cualquier texto que no sea un número no negativo cuenta como 0; los
/// decimales se truncan.
pub fn parse_quantity(raw: &str) -> u32 {
  let raw = raw.trim();
  if let Ok(n) = raw.parse::<u32>() {
    return n;
  }

  match raw.parse::<f64>() {
    Ok(n) if n.is_finite() && n >= 0.0 => n.trunc().min(f64::from(u32::MAX)) as u32,
    _ => 0,
  }
}
