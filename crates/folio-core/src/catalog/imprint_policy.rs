use serde::{Deserialize, Serialize};
use std::fmt;

use super::material::MaterialCategory;

/// Técnica de personalización de texto sobre la portada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprintMethod {
  /// Estampado con lámina metálica (foil).
  FoilStamping,
  /// Bajorrelieve estándar, con o sin color.
  StandardDebossing,
}

impl ImprintMethod {
  pub const ALL: [ImprintMethod; 2] = [ImprintMethod::FoilStamping, ImprintMethod::StandardDebossing];
}

impl fmt::Display for ImprintMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ImprintMethod::FoilStamping => write!(f, "Foil Stamping"),
      ImprintMethod::StandardDebossing => write!(f, "Standard Debossing"),
    }
  }
}

/// Opciones de una técnica: tipografías, colores y posiciones.
///
/// `positions` vacío significa posición fija (ver [`ImprintOptions::fixed_position`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodOptions {
  pub fonts: Vec<String>,
  pub colors: Vec<String>,
  /// Color preseleccionado; si falta se usa el primero de la lista.
  #[serde(default)]
  pub default_color: Option<String>,
  #[serde(default)]
  pub positions: Vec<String>,
}

/// Una técnica se ofrece sobre estas categorías de material base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprintRule {
  pub method: ImprintMethod,
  pub categories: Vec<MaterialCategory>,
}

/// Sustituye la lista de colores de una técnica sobre una categoría concreta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRestriction {
  pub method: ImprintMethod,
  pub category: MaterialCategory,
  pub colors: Vec<String>,
}

/// Tabla de elegibilidad de personalización.
///
/// Es política de producto y cambia a menudo, por eso vive como datos y no
/// como lógica: cualquier ajuste se hace editando la tabla.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprintPolicy {
  pub rules: Vec<ImprintRule>,
  #[serde(default)]
  pub color_restrictions: Vec<ColorRestriction>,
}

impl ImprintPolicy {
  /// ¿Se ofrece `method` sobre una portada de material `category`?
  pub fn allows(&self, method: ImprintMethod, category: MaterialCategory) -> bool {
    self.rules.iter().any(|r| r.method == method && r.categories.contains(&category))
  }

  /// Lista de colores efectiva: la restricción, si existe, sustituye a `base`
  /// (no sólo cambia el valor por defecto).
  pub fn colors_for<'a>(
    &'a self,
    method: ImprintMethod,
    category: MaterialCategory,
    base: &'a [String],
  ) -> &'a [String] {
    self
      .color_restrictions
      .iter()
      .find(|r| r.method == method && r.category == category)
      .map(|r| r.colors.as_slice())
      .unwrap_or(base)
  }
}

/// Catálogo completo de personalización.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprintOptions {
  pub foil: MethodOptions,
  pub deboss: MethodOptions,
  /// Posición única del bajorrelieve.
  pub fixed_position: String,
  pub max_lines: usize,
  pub max_chars: usize,
  pub policy: ImprintPolicy,
}

impl ImprintOptions {
  pub fn for_method(&self, method: ImprintMethod) -> &MethodOptions {
    match method {
      ImprintMethod::FoilStamping => &self.foil,
      ImprintMethod::StandardDebossing => &self.deboss,
    }
  }
}
