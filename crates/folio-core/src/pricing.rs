//! Motor de precios.
//!
//! [`price`] es una función pura: se puede llamar en cualquier momento,
//! esté o no completa la selección, y siempre devuelve un desglose con
//! `total >= 0`.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Money};
use crate::domain::{AlbumSelection, Cover, ParentCover};

/// Desglose del precio, línea a línea, tal y como se muestra al comprador.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
  pub base_album: Money,
  pub cover_upcharge: Money,
  pub imprint_upcharge: Money,
  pub parent_albums: Money,
  pub parent_cover_upcharge: Money,
  pub gilding_upcharge: Money,
  pub page_thickness_upcharge: Money,
  pub subtotal: Money,
  pub discount: Money,
  pub total: Money,
}

pub fn price(selection: &AlbumSelection, catalog: &Catalog) -> PriceBreakdown {
  let album_type = selection.album_type;

  let base_album = catalog.size(album_type, &selection.album_size).map(|s| s.price).unwrap_or(Money::ZERO);

  let cover_upcharge = match &selection.cover {
    Cover::BaseMaterial(_) => Money::ZERO,
    Cover::Photo(_) => catalog.prices.photo_cover,
    // No se cobra una portada que la línea no admite.
    Cover::MetalAcrylic(_) if catalog.allows_metal_acrylic(album_type) => catalog.prices.metal_acrylic_cover,
    Cover::MetalAcrylic(_) => Money::ZERO,
  };

  let imprint_upcharge = match &selection.imprint {
    Some(_) => catalog.prices.imprint,
    None => Money::ZERO,
  };

  let parents = &selection.parent_albums;
  let parent_albums = catalog.tier(parents.tier).map(|t| t.bundle(parents.quantity)).unwrap_or(Money::ZERO);

  let parent_cover_upcharge = match parents.cover {
    ParentCover::Photo(_) => catalog.prices.parent_photo_cover.times(parents.quantity),
    ParentCover::BaseMaterial(_) => Money::ZERO,
  };

  let gilding_upcharge = if selection.upgrades.gilding && catalog.allows_gilding(album_type) {
    catalog.prices.gilding
  } else {
    Money::ZERO
  };

  let page_thickness_upcharge = catalog.page_thickness_price(selection.upgrades.page_thickness);

  let subtotal = [
    base_album,
    cover_upcharge,
    imprint_upcharge,
    parent_albums,
    parent_cover_upcharge,
    gilding_upcharge,
    page_thickness_upcharge,
  ]
  .into_iter()
  .sum::<Money>();

  let discount = discount_for(&selection.coupon_code, subtotal, catalog);
  let total = subtotal.saturating_sub(discount);

  PriceBreakdown {
    base_album,
    cover_upcharge,
    imprint_upcharge,
    parent_albums,
    parent_cover_upcharge,
    gilding_upcharge,
    page_thickness_upcharge,
    subtotal,
    discount,
    total,
  }
}

/// Descuento de cupón: nunca supera el importe del cupón ni el subtotal.
/// Un código desconocido no descuenta nada.
pub fn discount_for(code: &str, subtotal: Money, catalog: &Catalog) -> Money {
  catalog.coupon(code).map(|c| c.amount.min(subtotal)).unwrap_or(Money::ZERO)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{AlbumType, MaterialCategory, PageThickness, ParentTier, PhotoSubstrate};
  use crate::domain::{CoverVariant, Imprint, MaterialPick, PhotoCover};
  use proptest::prelude::*;

  fn catalog() -> Catalog {
    Catalog::builtin()
  }

  #[test]
  fn test_default_selection_prices_base_only() {
    let catalog = catalog();
    let sel = AlbumSelection::new(&catalog);

    let p = price(&sel, &catalog);

    assert_eq!(p.base_album, Money::dollars(895));
    assert_eq!(p.subtotal, Money::dollars(895));
    assert_eq!(p.total, Money::dollars(895));
  }

  #[test]
  fn test_invalid_size_prices_zero_base() {
    let catalog = catalog();
    let mut sel = AlbumSelection::new(&catalog);
    sel.album_size = "20x20".into();

    assert_eq!(price(&sel, &catalog).base_album, Money::ZERO);
  }

  #[test]
  fn test_cover_upcharges() {
    let catalog = catalog();
    let mut sel = AlbumSelection::new(&catalog);

    sel.cover = Cover::BaseMaterial(MaterialPick::with_swatch(MaterialCategory::Linen, "Flax"));
    assert_eq!(price(&sel, &catalog).cover_upcharge, Money::ZERO);

    sel.cover = Cover::Photo(PhotoCover::new(PhotoSubstrate::Satin));
    assert_eq!(price(&sel, &catalog).cover_upcharge, Money::dollars(150));

    sel.cover = Cover::fresh(CoverVariant::MetalAcrylic, MaterialCategory::StandardLeather, &catalog);
    assert_eq!(price(&sel, &catalog).cover_upcharge, Money::dollars(250));
  }

  #[test]
  fn test_metal_acrylic_on_artisan_is_not_charged() {
    let catalog = catalog();
    let mut sel = AlbumSelection::for_type(AlbumType::Artisan, &catalog);
    sel.cover = Cover::fresh(CoverVariant::MetalAcrylic, MaterialCategory::Linen, &catalog);

    assert_eq!(price(&sel, &catalog).cover_upcharge, Money::ZERO);
  }

  #[test]
  fn test_imprint_is_included() {
    let catalog = catalog();
    let mut sel = AlbumSelection::new(&catalog);
    sel.imprint = Some(Imprint::fresh(
      crate::catalog::ImprintMethod::StandardDebossing,
      &catalog.imprint,
      &catalog.imprint.deboss.colors,
    ));

    let p = price(&sel, &catalog);

    assert_eq!(p.imprint_upcharge, Money::ZERO);
    assert_eq!(p.total, Money::dollars(895));
  }

  #[test]
  fn test_parent_bundle_small_tier() {
    let catalog = catalog();
    let mut sel = AlbumSelection::new(&catalog);
    sel.parent_albums.tier = ParentTier::Small;

    let mut got = Vec::new();
    for q in 0..=4 {
      sel.parent_albums.quantity = q;
      got.push(price(&sel, &catalog).parent_albums.as_dollars());
    }

    assert_eq!(got, vec![0, 325, 600, 925, 1200]);
  }

  #[test]
  fn test_parent_photo_is_charged_per_unit() {
    let catalog = catalog();
    let mut sel = AlbumSelection::new(&catalog);
    sel.parent_albums.quantity = 3;
    sel.parent_albums.cover = ParentCover::Photo(PhotoCover::new(PhotoSubstrate::Matte));

    assert_eq!(price(&sel, &catalog).parent_cover_upcharge, Money::dollars(150));

    sel.parent_albums.quantity = 0;
    assert_eq!(price(&sel, &catalog).parent_cover_upcharge, Money::ZERO);
  }

  #[test]
  fn test_gilding_and_page_thickness() {
    let catalog = catalog();
    let mut sel = AlbumSelection::new(&catalog);
    sel.upgrades.gilding = true;
    sel.upgrades.page_thickness = PageThickness::Thick;

    let p = price(&sel, &catalog);
    assert_eq!(p.gilding_upcharge, Money::dollars(150));
    assert_eq!(p.page_thickness_upcharge, Money::dollars(75));
    assert_eq!(p.subtotal, Money::dollars(895 + 150 + 75));

    sel.upgrades.page_thickness = PageThickness::Rigid;
    assert_eq!(price(&sel, &catalog).page_thickness_upcharge, Money::ZERO);
  }

  #[test]
  fn test_gilding_not_charged_where_not_offered() {
    let catalog = catalog();
    let mut sel = AlbumSelection::for_type(AlbumType::Artisan, &catalog);
    sel.upgrades.gilding = true;

    assert_eq!(price(&sel, &catalog).gilding_upcharge, Money::ZERO);
  }

  #[test]
  fn test_discount_is_capped_by_subtotal() {
    let catalog = catalog();

    assert_eq!(discount_for("PREPAID400", Money::dollars(300), &catalog), Money::dollars(300));
    assert_eq!(discount_for(" prepaid400 ", Money::dollars(1200), &catalog), Money::dollars(400));
    assert_eq!(discount_for("SPRING10", Money::dollars(1200), &catalog), Money::ZERO);
    assert_eq!(discount_for("", Money::dollars(1200), &catalog), Money::ZERO);
  }

  #[test]
  fn test_coupon_applies_to_total() {
    let catalog = catalog();
    let mut sel = AlbumSelection::new(&catalog);
    sel.album_size = "11x14".into();
    sel.coupon_code = "Prepaid400".into();

    let p = price(&sel, &catalog);

    assert_eq!(p.subtotal, Money::dollars(1395));
    assert_eq!(p.discount, Money::dollars(400));
    assert_eq!(p.total, Money::dollars(995));
  }

  #[test]
  fn test_discount_never_makes_total_negative() {
    let mut catalog = catalog();
    catalog.album_types[0].sizes[0].price = Money::dollars(300);
    let mut sel = AlbumSelection::new(&catalog);
    sel.coupon_code = "PREPAID400".into();

    let p = price(&sel, &catalog);

    assert_eq!(p.subtotal, Money::dollars(300));
    assert_eq!(p.discount, Money::dollars(300));
    assert_eq!(p.total, Money::ZERO);
  }

  proptest! {
    #[test]
    fn prop_parent_bundle_formula(q in 0u32..10_000, large in any::<bool>()) {
      let catalog = catalog();
      let tier = if large { ParentTier::Large } else { ParentTier::Small };
      let row = catalog.tier(tier).unwrap();
      let mut sel = AlbumSelection::new(&catalog);
      sel.parent_albums.tier = tier;
      sel.parent_albums.quantity = q;

      let expected = u64::from(q / 2) * row.pair.as_dollars() + u64::from(q % 2) * row.each.as_dollars();

      prop_assert_eq!(price(&sel, &catalog).parent_albums.as_dollars(), expected);
    }

    #[test]
    fn prop_total_is_subtotal_minus_capped_discount(
      size_idx in 0usize..4,
      q in 0u32..50,
      photo in any::<bool>(),
      gilding in any::<bool>(),
      coupon in prop::sample::select(vec!["", "PREPAID400", "prepaid400 ", "BOGUS"]),
    ) {
      let catalog = catalog();
      let mut sel = AlbumSelection::new(&catalog);
      sel.album_size = catalog.album_types[0].sizes[size_idx].key.clone();
      sel.parent_albums.quantity = q;
      if photo {
        sel.parent_albums.cover = ParentCover::Photo(PhotoCover::new(PhotoSubstrate::Matte));
      }
      sel.upgrades.gilding = gilding;
      sel.coupon_code = coupon.to_string();

      let p = price(&sel, &catalog);

      prop_assert!(p.discount <= Money::dollars(400));
      prop_assert!(p.discount <= p.subtotal);
      prop_assert_eq!(p.total, p.subtotal.saturating_sub(p.discount));
      prop_assert_eq!(p.total.as_dollars(), p.subtotal.as_dollars() - p.discount.as_dollars());
    }
  }
}
