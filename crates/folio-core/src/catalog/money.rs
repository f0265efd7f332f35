use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Importe en dólares enteros.
///
/// Todos los precios de la tienda son enteros no negativos, así que no hay
/// aritmética en coma flotante en ningún punto del cálculo. Las operaciones
/// saturan en vez de desbordar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
  pub const ZERO: Money = Money(0);

  pub const fn dollars(amount: u64) -> Self {
    Money(amount)
  }

  pub const fn as_dollars(&self) -> u64 {
    self.0
  }

  pub fn is_zero(&self) -> bool {
    self.0 == 0
  }

  /// Multiplica por una cantidad de unidades.
  pub fn times(self, units: u32) -> Self {
    Money(self.0.saturating_mul(u64::from(units)))
  }

  /// Resta que nunca baja de cero.
  pub fn saturating_sub(self, other: Money) -> Self {
    Money(self.0.saturating_sub(other.0))
  }
}

impl Add for Money {
  type Output = Money;

  fn add(self, rhs: Money) -> Money {
    Money(self.0.saturating_add(rhs.0))
  }
}

impl Sum for Money {
  fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
    iter.fold(Money::ZERO, Add::add)
  }
}

impl fmt::Display for Money {
  /// Formato de escaparate: `$1,200`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = self.0.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
      if i > 0 && (digits.len() - i) % 3 == 0 {
        grouped.push(',');
      }
      grouped.push(ch);
    }

    write!(f, "${grouped}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display_groups_thousands() {
    assert_eq!(Money::dollars(0).to_string(), "$0");
    assert_eq!(Money::dollars(325).to_string(), "$325");
    assert_eq!(Money::dollars(1200).to_string(), "$1,200");
    assert_eq!(Money::dollars(1_234_567).to_string(), "$1,234,567");
  }

  #[test]
  fn test_arithmetic_saturates() {
    assert_eq!(Money::dollars(100).saturating_sub(Money::dollars(400)), Money::ZERO);
    assert_eq!(Money::dollars(u64::MAX) + Money::dollars(1), Money::dollars(u64::MAX));
    assert_eq!(Money::dollars(u64::MAX).times(2), Money::dollars(u64::MAX));
  }

  #[test]
  fn test_sum() {
    let total: Money = [1, 2, 3].into_iter().map(Money::dollars).sum();
    assert_eq!(total, Money::dollars(6));
  }
}
