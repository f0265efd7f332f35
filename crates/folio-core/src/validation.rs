//! Motor de validación: decide si la selección puede pasar a checkout.
//!
//! Es un predicado puro. Nunca falla ni hace panic, también con una
//! selección recién creada (que simplemente no está completa). Las
//! combinaciones que el catálogo no admite se tratan como incompletas en vez
//! de confiar en que la interfaz nunca las produzca.

use serde::Serialize;
use std::fmt;

use crate::catalog::{Catalog, ImprintMethod, MaterialCategory};
use crate::domain::{AlbumSelection, Cover, Imprint, MaterialPick, ParentCover, text};

/// Secciones del formulario, en orden de presentación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
  Size,
  Cover,
  ParentCover,
  Imprint,
}

impl fmt::Display for Section {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Section::Size => write!(f, "Album size"),
      Section::Cover => write!(f, "Cover"),
      Section::ParentCover => write!(f, "Parent albums"),
      Section::Imprint => write!(f, "Imprinting"),
    }
  }
}

/// Qué falta (o qué sobra) en una sección incompleta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
  UnknownSize,
  CoverNotOffered,
  CategoryNotOffered,
  ChooseSwatch,
  UnknownSwatch,
  UnknownFinish,
  ChooseBindingSwatch,
  ChooseParentSwatch,
  ImprintNotOffered,
  ImprintColorNotOffered,
  ImprintOptionUnknown,
  ImprintTextRejected,
}

impl fmt::Display for Hint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      Hint::UnknownSize => "Please choose an album size.",
      Hint::CoverNotOffered => "This cover type is not available for the selected album.",
      Hint::CategoryNotOffered => "This material is not available here.",
      Hint::ChooseSwatch => "Please select a cover color to continue.",
      Hint::UnknownSwatch => "The selected color is no longer available.",
      Hint::UnknownFinish => "Please choose a finish.",
      Hint::ChooseBindingSwatch => "Please select a binding & back swatch to continue.",
      Hint::ChooseParentSwatch => "Please select a parent album cover color to continue.",
      Hint::ImprintNotOffered => "This imprinting method is not available on the selected cover.",
      Hint::ImprintColorNotOffered => "This imprinting color is not available on the selected cover.",
      Hint::ImprintOptionUnknown => "Please review the imprinting font and position.",
      Hint::ImprintTextRejected => "Imprinting text contains unsupported characters or is too long.",
    };
    f.write_str(text)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "hint", rename_all = "snake_case")]
pub enum SectionState {
  Complete,
  Incomplete(Hint),
}

impl SectionState {
  pub fn is_complete(&self) -> bool {
    matches!(self, SectionState::Complete)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionStatus {
  pub section: Section,
  pub state: SectionState,
}

/// Resultado de validar una selección: un estado por sección.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
  pub sections: Vec<SectionStatus>,
}

impl Verdict {
  /// Apto para checkout: todas las secciones completas.
  pub fn is_complete(&self) -> bool {
    self.sections.iter().all(|s| s.state.is_complete())
  }

  pub fn state(&self, section: Section) -> SectionState {
    self.sections.iter().find(|s| s.section == section).map(|s| s.state).unwrap_or(SectionState::Complete)
  }

  /// Primera sección incompleta, para la pista junto al botón de checkout.
  pub fn first_incomplete(&self) -> Option<(Section, Hint)> {
    self.sections.iter().find_map(|s| match s.state {
      SectionState::Incomplete(hint) => Some((s.section, hint)),
      SectionState::Complete => None,
    })
  }
}

pub fn validate(selection: &AlbumSelection, catalog: &Catalog) -> Verdict {
  let sections = vec![
    SectionStatus { section: Section::Size, state: check_size(selection, catalog) },
    SectionStatus { section: Section::Cover, state: check_cover(selection, catalog) },
    SectionStatus { section: Section::ParentCover, state: check_parent_cover(selection, catalog) },
    SectionStatus { section: Section::Imprint, state: check_imprint(selection, catalog) },
  ];

  Verdict { sections }
}

pub fn is_complete(selection: &AlbumSelection, catalog: &Catalog) -> bool {
  validate(selection, catalog).is_complete()
}

fn check_size(selection: &AlbumSelection, catalog: &Catalog) -> SectionState {
  match catalog.size(selection.album_type, &selection.album_size) {
    Some(_) => SectionState::Complete,
    None => SectionState::Incomplete(Hint::UnknownSize),
  }
}

/// Estado de una elección de material contra las categorías admitidas.
fn check_pick(
  pick: &MaterialPick,
  allowed: &[MaterialCategory],
  missing: Hint,
  catalog: &Catalog,
) -> SectionState {
  if !allowed.contains(&pick.category) {
    return SectionState::Incomplete(Hint::CategoryNotOffered);
  }

  match &pick.swatch {
    None => SectionState::Incomplete(missing),
    Some(swatch) if !catalog.has_swatch(pick.category, swatch) => {
      SectionState::Incomplete(Hint::UnknownSwatch)
    }
    Some(_) => SectionState::Complete,
  }
}

fn check_cover(selection: &AlbumSelection, catalog: &Catalog) -> SectionState {
  match &selection.cover {
    Cover::BaseMaterial(pick) => {
      check_pick(pick, catalog.cover_categories(selection.album_type), Hint::ChooseSwatch, catalog)
    }
    Cover::Photo(_) => SectionState::Complete,
    Cover::MetalAcrylic(ma) => {
      if !catalog.allows_metal_acrylic(selection.album_type) {
        return SectionState::Incomplete(Hint::CoverNotOffered);
      }
      if !catalog.finishes(ma.kind).contains(&ma.finish) {
        return SectionState::Incomplete(Hint::UnknownFinish);
      }
      check_pick(&ma.binding, &catalog.binding_categories, Hint::ChooseBindingSwatch, catalog)
    }
  }
}

fn check_parent_cover(selection: &AlbumSelection, catalog: &Catalog) -> SectionState {
  let parents = &selection.parent_albums;
  if parents.quantity == 0 {
    return SectionState::Complete;
  }

  match &parents.cover {
    ParentCover::BaseMaterial(pick) => {
      check_pick(pick, &catalog.parent_categories, Hint::ChooseParentSwatch, catalog)
    }
    ParentCover::Photo(_) => SectionState::Complete,
  }
}

fn check_imprint(selection: &AlbumSelection, catalog: &Catalog) -> SectionState {
  let Some(imprint) = &selection.imprint else {
    return SectionState::Complete;
  };

  let offer = imprint_offer(&selection.cover, catalog);
  let Some(method) = offer.method(imprint.method()) else {
    return SectionState::Incomplete(Hint::ImprintNotOffered);
  };

  if !method.colors.iter().any(|c| c == imprint.color()) {
    return SectionState::Incomplete(Hint::ImprintColorNotOffered);
  }
  if !method.fonts.iter().any(|f| f == imprint.font()) {
    return SectionState::Incomplete(Hint::ImprintOptionUnknown);
  }
  if let Imprint::FoilStamping(foil) = imprint {
    if !method.positions.contains(&foil.position) {
      return SectionState::Incomplete(Hint::ImprintOptionUnknown);
    }
  }
  if !imprint_text_ok(imprint, catalog) {
    return SectionState::Incomplete(Hint::ImprintTextRejected);
  }

  SectionState::Complete
}

fn imprint_text_ok(imprint: &Imprint, catalog: &Catalog) -> bool {
  let limits = &catalog.imprint;
  let lines = imprint.lines();

  lines.len() <= limits.max_lines
    && lines.iter().all(|l| l.chars().count() <= limits.max_chars)
    && (imprint.method() != ImprintMethod::FoilStamping || lines.iter().all(|l| text::is_foil_safe(l)))
}

/// Lo que la interfaz puede ofrecer para una técnica concreta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodOffer {
  pub method: ImprintMethod,
  pub fonts: Vec<String>,
  /// Ya recortada por las restricciones de color de la categoría.
  pub colors: Vec<String>,
  /// Vacío cuando la posición es fija.
  pub positions: Vec<String>,
}

/// Técnicas de personalización disponibles para una portada.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImprintOffer {
  pub methods: Vec<MethodOffer>,
}

impl ImprintOffer {
  pub fn method(&self, method: ImprintMethod) -> Option<&MethodOffer> {
    self.methods.iter().find(|m| m.method == method)
  }

  pub fn is_empty(&self) -> bool {
    self.methods.is_empty()
  }
}

/// Oferta de personalización según el material de la portada principal.
///
/// Depende sólo de la categoría de material base, esté o no activada la
/// personalización. Las portadas con imagen (foto, metal/acrílico) nunca la
/// admiten.
pub fn imprint_offer(cover: &Cover, catalog: &Catalog) -> ImprintOffer {
  let Some(category) = cover.base_category() else {
    return ImprintOffer::default();
  };

  let options = &catalog.imprint;
  let methods = ImprintMethod::ALL
    .into_iter()
    .filter(|m| options.policy.allows(*m, category))
    .map(|method| {
      let base = options.for_method(method);
      MethodOffer {
        method,
        fonts: base.fonts.clone(),
        colors: options.policy.colors_for(method, category, &base.colors).to_vec(),
        positions: base.positions.clone(),
      }
    })
    .collect();

  ImprintOffer { methods }
}
