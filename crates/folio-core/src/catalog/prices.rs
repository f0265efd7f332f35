use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Recargos planos del catálogo.
///
/// Las claves ausentes al deserializar toman el precio publicado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatPrices {
  /// Portada fotográfica del álbum principal (una vez por álbum).
  pub photo_cover: Money,
  /// Portada de metal o acrílico (sólo en líneas que la admiten).
  pub metal_acrylic_cover: Money,
  /// Portada fotográfica de álbum de padres, por unidad.
  pub parent_photo_cover: Money,
  pub gilding: Money,
  /// Personalización de texto; hoy incluida en el precio.
  pub imprint: Money,
}

/// Tamaño de álbum de padres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentTier {
  Small,
  Large,
}

impl ParentTier {
  pub const ALL: [ParentTier; 2] = [ParentTier::Small, ParentTier::Large];
}

impl fmt::Display for ParentTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParentTier::Small => write!(f, "Small"),
      ParentTier::Large => write!(f, "Large"),
    }
  }
}

/// Precio por unidad y precio por pareja de un [`ParentTier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentTierPrice {
  pub tier: ParentTier,
  pub each: Money,
  pub pair: Money,
}

impl ParentTierPrice {
  /// Precio por lotes: cada pareja al precio de pareja, la unidad suelta al
  /// precio unitario.
  pub fn bundle(&self, quantity: u32) -> Money {
    self.pair.times(quantity / 2) + self.each.times(quantity % 2)
  }
}

/// Grosor de las páginas interiores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageThickness {
  #[default]
  Standard,
  Thick,
  Rigid,
}

impl fmt::Display for PageThickness {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PageThickness::Standard => write!(f, "Standard"),
      PageThickness::Thick => write!(f, "Thick"),
      PageThickness::Rigid => write!(f, "Rigid"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageThicknessPrice {
  pub option: PageThickness,
  pub price: Money,
}

/// Cupón de descuento fijo con tope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
  pub code: String,
  pub amount: Money,
}

impl Coupon {
  /// Comparación sin distinguir mayúsculas y sin espacios en los extremos.
  pub fn matches(&self, input: &str) -> bool {
    let input = input.trim();
    !input.is_empty() && self.code.trim().eq_ignore_ascii_case(input)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bundle_small_tier() {
    let small =
      ParentTierPrice { tier: ParentTier::Small, each: Money::dollars(325), pair: Money::dollars(600) };

    let prices: Vec<u64> = (0..=4).map(|q| small.bundle(q).as_dollars()).collect();

    assert_eq!(prices, vec![0, 325, 600, 925, 1200]);
  }

  #[test]
  fn test_coupon_matches_trimmed_any_case() {
    let coupon = Coupon { code: "PREPAID400".into(), amount: Money::dollars(400) };

    assert!(coupon.matches("prepaid400"));
    assert!(coupon.matches("  PrePaid400\t"));
    assert!(!coupon.matches("PREPAID40"));
    assert!(!coupon.matches("   "));
  }
}
