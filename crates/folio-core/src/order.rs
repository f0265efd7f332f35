//! Proyección de la selección a un pedido plano, listo para copiar al
//! portapapeles o enviar a un endpoint de pedidos.
//!
//! Los campos de variantes inactivas se omiten (no se serializan como
//! `null`): el pedido describe sólo lo que el comprador eligió de verdad.

use serde::Serialize;

use crate::catalog::{
  AlbumType, Catalog, ImprintMethod, MaterialCategory, MetalAcrylicKind, PageThickness, ParentTier,
  PhotoSubstrate,
};
use crate::domain::{AlbumSelection, Cover, CoverVariant, ImageRef, ParentCover, ParentCoverVariant};
use crate::pricing::PriceBreakdown;
use crate::validation::Verdict;

/// Etiqueta de build que acompaña a cada pedido.
pub const BUILD_TAG: &str = concat!("folio-core/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
  pub build: String,

  pub album_type: AlbumType,
  pub album_size: String,

  pub cover_type: CoverVariant,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cover_category: Option<MaterialCategory>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cover_swatch: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub photo_substrate: Option<PhotoSubstrate>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cover_images: Option<Vec<ImageRef>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub metal_acrylic_type: Option<MetalAcrylicKind>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub metal_acrylic_finish: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub binding_category: Option<MaterialCategory>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub binding_swatch: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub design_text: Option<Vec<String>>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub imprint_method: Option<ImprintMethod>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub imprint_font: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub imprint_color: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub imprint_position: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub imprint_lines: Option<Vec<String>>,

  pub parent_tier: ParentTier,
  pub parent_quantity: u32,
  pub parent_cover_type: ParentCoverVariant,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent_cover_category: Option<MaterialCategory>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent_cover_swatch: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent_photo_substrate: Option<PhotoSubstrate>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent_cover_images: Option<Vec<ImageRef>>,

  pub gilding: bool,
  pub page_thickness: PageThickness,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub coupon_code: Option<String>,

  #[serde(flatten)]
  pub price: PriceBreakdown,
  pub checkout_ready: bool,
}

impl OrderPayload {
  /// JSON legible, el formato que se copia al portapapeles.
  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(self)
  }
}

/// Construye el pedido a partir de la selección y de lo ya calculado.
pub fn to_order_payload(
  selection: &AlbumSelection,
  price: &PriceBreakdown,
  verdict: &Verdict,
  catalog: &Catalog,
) -> OrderPayload {
  let mut payload = OrderPayload {
    build: BUILD_TAG.to_string(),
    album_type: selection.album_type,
    album_size: selection.album_size.clone(),
    cover_type: selection.cover.variant(),
    cover_category: None,
    cover_swatch: None,
    photo_substrate: None,
    cover_images: None,
    metal_acrylic_type: None,
    metal_acrylic_finish: None,
    binding_category: None,
    binding_swatch: None,
    design_text: None,
    imprint_method: None,
    imprint_font: None,
    imprint_color: None,
    imprint_position: None,
    imprint_lines: None,
    parent_tier: selection.parent_albums.tier,
    parent_quantity: selection.parent_albums.quantity,
    parent_cover_type: selection.parent_albums.cover.variant(),
    parent_cover_category: None,
    parent_cover_swatch: None,
    parent_photo_substrate: None,
    parent_cover_images: None,
    gilding: selection.upgrades.gilding,
    page_thickness: selection.upgrades.page_thickness,
    coupon_code: Some(selection.coupon_code.trim().to_string()).filter(|c| !c.is_empty()),
    price: price.clone(),
    checkout_ready: verdict.is_complete(),
  };

  match &selection.cover {
    Cover::BaseMaterial(pick) => {
      payload.cover_category = Some(pick.category);
      payload.cover_swatch = pick.swatch.clone();
    }
    Cover::Photo(photo) => {
      payload.photo_substrate = Some(photo.substrate);
      payload.cover_images = Some(photo.image_refs.clone());
    }
    Cover::MetalAcrylic(ma) => {
      payload.metal_acrylic_type = Some(ma.kind);
      payload.metal_acrylic_finish = Some(ma.finish.clone());
      payload.binding_category = Some(ma.binding.category);
      payload.binding_swatch = ma.binding.swatch.clone();
      payload.cover_images = Some(ma.image_refs.clone());
      payload.design_text = Some(ma.design_text.clone());
    }
  }

  if let Some(imprint) = &selection.imprint {
    payload.imprint_method = Some(imprint.method());
    payload.imprint_font = Some(imprint.font().to_string());
    payload.imprint_color = Some(imprint.color().to_string());
    payload.imprint_position = Some(imprint.placement(&catalog.imprint).to_string());
    payload.imprint_lines = Some(imprint.lines().to_vec());
  }

  match &selection.parent_albums.cover {
    ParentCover::BaseMaterial(pick) => {
      payload.parent_cover_category = Some(pick.category);
      payload.parent_cover_swatch = pick.swatch.clone();
    }
    ParentCover::Photo(photo) => {
      payload.parent_photo_substrate = Some(photo.substrate);
      payload.parent_cover_images = Some(photo.image_refs.clone());
    }
  }

  payload
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::MaterialPick;
  use crate::pricing::price;
  use crate::transition::{SelectionEvent::*, apply};
  use crate::validation::validate;
  use pretty_assertions::assert_eq;
  use serde_json::{Value, json};

  fn payload_for(selection: &AlbumSelection, catalog: &Catalog) -> OrderPayload {
    let breakdown = price(selection, catalog);
    let verdict = validate(selection, catalog);
    to_order_payload(selection, &breakdown, &verdict, catalog)
  }

  fn as_json(payload: &OrderPayload) -> Value {
    serde_json::from_str(&payload.to_json().unwrap()).unwrap()
  }

  #[test]
  fn test_base_material_payload() {
    let catalog = Catalog::builtin();
    let mut sel = AlbumSelection::new(&catalog);
    sel.cover = Cover::BaseMaterial(MaterialPick::with_swatch(MaterialCategory::StandardLeather, "Walnut"));
    sel.coupon_code = "  prepaid400 ".into();

    let json = as_json(&payload_for(&sel, &catalog));

    assert_eq!(
      json,
      json!({
        "build": BUILD_TAG,
        "album_type": "signature",
        "album_size": "8x8",
        "cover_type": "base_material",
        "cover_category": "standard_leather",
        "cover_swatch": "Walnut",
        "parent_tier": "small",
        "parent_quantity": 0,
        "parent_cover_type": "base_material",
        "parent_cover_category": "standard_leather",
        "gilding": false,
        "page_thickness": "standard",
        "coupon_code": "prepaid400",
        "base_album": 895,
        "cover_upcharge": 0,
        "imprint_upcharge": 0,
        "parent_albums": 0,
        "parent_cover_upcharge": 0,
        "gilding_upcharge": 0,
        "page_thickness_upcharge": 0,
        "subtotal": 895,
        "discount": 400,
        "total": 495,
        "checkout_ready": true
      })
    );
  }

  #[test]
  fn test_inactive_variant_fields_are_omitted() {
    let catalog = Catalog::builtin();
    let mut sel = AlbumSelection::new(&catalog);
    for event in [
      SetCoverSwatch("Walnut".into()),
      SetCoverVariant(CoverVariant::Photo),
      SetCoverImages(vec!["upload-1".into(), "upload-2".into()]),
    ] {
      apply(&mut sel, &event, &catalog);
    }

    let json = as_json(&payload_for(&sel, &catalog));
    let obj = json.as_object().unwrap();

    assert_eq!(obj["cover_type"], "photo");
    assert_eq!(obj["photo_substrate"], "matte");
    assert_eq!(obj["cover_images"], json!(["upload-1", "upload-2"]));
    assert!(!obj.contains_key("cover_swatch"));
    assert!(!obj.contains_key("cover_category"));
    assert!(!obj.contains_key("binding_swatch"));
    assert!(!obj.contains_key("imprint_method"));
    assert!(!obj.contains_key("coupon_code"));
    assert_eq!(obj["cover_upcharge"], 150);
  }

  #[test]
  fn test_imprint_and_parent_photo_fields() {
    let catalog = Catalog::builtin();
    let mut sel = AlbumSelection::new(&catalog);
    for event in [
      SetCoverSwatch("Walnut".into()),
      SetImprintMethod(Some(ImprintMethod::StandardDebossing)),
      SetImprintLine { index: 0, text: "The Andersons".into() },
      SetParentQuantity(3),
      SetParentCoverVariant(ParentCoverVariant::Photo),
    ] {
      apply(&mut sel, &event, &catalog);
    }

    let payload = payload_for(&sel, &catalog);

    assert_eq!(payload.imprint_method, Some(ImprintMethod::StandardDebossing));
    assert_eq!(payload.imprint_position.as_deref(), Some("Front — Center"));
    assert_eq!(payload.imprint_lines, Some(vec!["The Andersons".to_string(), String::new(), String::new()]));
    assert_eq!(payload.parent_photo_substrate, Some(PhotoSubstrate::Matte));
    assert_eq!(payload.parent_cover_swatch, None);
    assert_eq!(payload.price.parent_albums.as_dollars(), 925);
    assert_eq!(payload.price.parent_cover_upcharge.as_dollars(), 150);
    assert!(payload.checkout_ready);
  }

  #[test]
  fn test_metal_acrylic_payload_carries_binding() {
    let catalog = Catalog::builtin();
    let mut sel = AlbumSelection::new(&catalog);
    let events =
      [SetCoverVariant(CoverVariant::MetalAcrylic), SetDesignText { index: 0, text: "Ever After".into() }];
    for event in events {
      apply(&mut sel, &event, &catalog);
    }

    let payload = payload_for(&sel, &catalog);

    assert_eq!(payload.metal_acrylic_type, Some(MetalAcrylicKind::Metal));
    assert_eq!(payload.metal_acrylic_finish.as_deref(), Some("Brushed"));
    assert_eq!(payload.binding_category, Some(MaterialCategory::StandardLeather));
    assert_eq!(payload.binding_swatch, None);
    assert_eq!(payload.design_text, Some(vec!["Ever After".to_string()]));
    assert_eq!(payload.cover_swatch, None);
    assert!(!payload.checkout_ready);
  }
}
