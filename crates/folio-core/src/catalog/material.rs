use serde::{Deserialize, Serialize};
use std::fmt;

/// Categoría de material base (piel o lino) de una portada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
  StandardLeather,
  DistressedLeather,
  VeganLeather,
  Linen,
}

impl fmt::Display for MaterialCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      MaterialCategory::StandardLeather => "Standard Leather",
      MaterialCategory::DistressedLeather => "Distressed Leather",
      MaterialCategory::VeganLeather => "Vegan Leather",
      MaterialCategory::Linen => "Linen",
    };
    write!(f, "{text}")
  }
}

/// Sustrato de impresión para portadas fotográficas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoSubstrate {
  Matte,
  Lustre,
  Satin,
}

impl fmt::Display for PhotoSubstrate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PhotoSubstrate::Matte => write!(f, "Matte"),
      PhotoSubstrate::Lustre => write!(f, "Lustre"),
      PhotoSubstrate::Satin => write!(f, "Satin"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetalAcrylicKind {
  Metal,
  Acrylic,
}

impl fmt::Display for MetalAcrylicKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      MetalAcrylicKind::Metal => write!(f, "Metal"),
      MetalAcrylicKind::Acrylic => write!(f, "Acrylic"),
    }
  }
}

/// Muestrario de una categoría: sus colores, en el orden en que se presentan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSpec {
  pub category: MaterialCategory,
  pub swatches: Vec<String>,
}

/// Acabados disponibles para un tipo de portada metal/acrílico.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetalAcrylicSpec {
  pub kind: MetalAcrylicKind,
  pub finishes: Vec<String>,
}
