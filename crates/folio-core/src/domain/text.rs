use serde::{Deserialize, Serialize};
use std::fmt;

/// Máximo de imágenes en una portada (fotográfica o metal/acrílico).
pub const MAX_IMAGE_REFS: usize = 4;

/// Líneas de texto de diseño en portadas metal/acrílico.
pub const MAX_DESIGN_LINES: usize = 2;

/// Caracteres por línea de texto de diseño.
pub const DESIGN_LINE_CHARS: usize = 28;

/// Referencia opaca a una imagen subida por el cliente.
///
/// El motor no gestiona ficheros: sólo conserva el identificador para que
/// llegue intacto al pedido.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
  pub fn new(reference: impl Into<String>) -> Self {
    ImageRef(reference.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for ImageRef {
  fn from(s: &str) -> Self {
    ImageRef(s.to_string())
  }
}

impl fmt::Display for ImageRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Recorta `text` a `max` caracteres (no bytes).
pub fn clamp_chars(text: &str, max: usize) -> String {
  text.chars().take(max).collect()
}

/// Juego de caracteres admitido por el estampado foil: letras y dígitos
/// ASCII, espacio y `. , - & ' /`.
pub fn is_foil_safe(text: &str) -> bool {
  text.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | ',' | '-' | '&' | '\'' | '/'))
}

/// Limita la lista de imágenes a [`MAX_IMAGE_REFS`], conservando el orden.
pub fn clamp_images(mut refs: Vec<ImageRef>) -> Vec<ImageRef> {
  refs.truncate(MAX_IMAGE_REFS);
  refs
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_clamp_counts_chars_not_bytes() {
    assert_eq!(clamp_chars("Café Olé", 4), "Café");
    assert_eq!(clamp_chars("short", 28), "short");
  }

  #[test]
  fn test_foil_safe_charset() {
    assert!(is_foil_safe("Elizabeth & Michael"));
    assert!(is_foil_safe("06/21/2025, St. John's - NY"));
    assert!(is_foil_safe(""));
    assert!(!is_foil_safe("Zoë"));
    assert!(!is_foil_safe("love!"));
    assert!(!is_foil_safe("a\tb"));
  }

  #[test]
  fn test_clamp_images_keeps_first_four() {
    let refs: Vec<ImageRef> = ["a", "b", "c", "d", "e"].into_iter().map(ImageRef::from).collect();

    let clamped = clamp_images(refs);

    assert_eq!(clamped.len(), MAX_IMAGE_REFS);
    assert_eq!(clamped[3].as_str(), "d");
  }
}
