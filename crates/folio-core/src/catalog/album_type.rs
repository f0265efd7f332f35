use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Línea de producto del álbum.
///
/// Determina qué tamaños, qué categorías de portada y qué mejoras están
/// disponibles. Cambiarla invalida todo lo elegido después.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
  /// Línea alta: admite portadas de metal/acrílico y dorado de cantos.
  Signature,
  /// Línea artesanal, catálogo de materiales más corto.
  Artisan,
}

impl AlbumType {
  pub const ALL: [AlbumType; 2] = [AlbumType::Signature, AlbumType::Artisan];
}

impl fmt::Display for AlbumType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AlbumType::Signature => write!(f, "Signature"),
      AlbumType::Artisan => write!(f, "Artisan"),
    }
  }
}

/// Error producido cuando una cadena no corresponde a ningún [`AlbumType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid album type: {input}")]
pub struct AlbumTypeParseError {
  pub input: String,
}

impl FromStr for AlbumType {
  type Err = AlbumTypeParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "signature" | "signature album" => Ok(AlbumType::Signature),
      "artisan" | "artisan album" => Ok(AlbumType::Artisan),
      _ => Err(AlbumTypeParseError { input: s.to_string() }),
    }
  }
}
