use super::*;

fn names(list: &[&str]) -> Vec<String> {
  list.iter().map(|s| s.to_string()).collect()
}

fn size(key: &str, price: u64) -> AlbumSize {
  AlbumSize { key: key.to_string(), label: format!("{key} in"), price: Money::dollars(price) }
}

const STANDARD_LEATHER: &[&str] = &[
  "Ash",
  "Black Olive",
  "Blush",
  "Buttercream",
  "Cardinal",
  "Flamingo",
  "Lavender",
  "Maroon",
  "Mist",
  "Monsoon",
  "Mystique",
  "Nightfall",
  "Northern Lights",
  "Peppercorn",
  "Pink Coral",
  "Pink Quartz",
  "Polar",
  "Powder Blue",
  "Saddle",
  "Seafoam",
  "Soft Gray",
  "Walnut",
];

const DISTRESSED_LEATHER: &[&str] = &["Chestnut", "Cognac", "Espresso", "Smoke", "Tobacco"];

const VEGAN_LEATHER: &[&str] = &["Charcoal", "Dove", "Ivory", "Midnight", "Oat", "Sage"];

const LINEN: &[&str] = &["Flax", "Graphite", "Natural", "Navy", "Oyster", "Rose", "Slate"];

const FOIL_FONTS: &[&str] = &["Alana Pro", "Garage Gothic"];
const FOIL_COLORS: &[&str] =
  &["Black", "Copper", "Gold", "Matte Gold", "Granite", "Silver", "Matte Silver", "White"];
const FOIL_POSITIONS: &[&str] =
  &["Front — Lower Center", "Front — Lower Right", "Inside Back — Lower Center", "Inside Back — Lower Right"];

const DEBOSS_FONTS: &[&str] = &["Baskerville", "Coco Gothic", "Dessau Pro", "Eye Catching", "Garage Gothic"];

/// Color del bajorrelieve sin tinta.
pub const BLIND_DEBOSS: &str = "Blind (no color)";

const DEBOSS_COLORS: &[&str] =
  &[BLIND_DEBOSS, "Black", "Copper", "Gold", "Granite", "Matte Gold", "Matte Silver", "Silver", "White"];

impl Default for FlatPrices {
  fn default() -> Self {
    FlatPrices {
      photo_cover: Money::dollars(150),
      metal_acrylic_cover: Money::dollars(250),
      parent_photo_cover: Money::dollars(50),
      gilding: Money::dollars(150),
      imprint: Money::ZERO,
    }
  }
}

impl Catalog {
  /// Catálogo de la tienda tal y como se publica.
  pub fn builtin() -> Self {
    use MaterialCategory::*;

    Catalog {
      album_types: vec![
        AlbumTypeSpec {
          album_type: AlbumType::Signature,
          sizes: vec![size("8x8", 895), size("10x10", 1095), size("12x12", 1295), size("11x14", 1395)],
          cover_categories: vec![StandardLeather, DistressedLeather, VeganLeather, Linen],
          allows_metal_acrylic: true,
          allows_gilding: true,
        },
        AlbumTypeSpec {
          album_type: AlbumType::Artisan,
          sizes: vec![size("8x8", 695), size("10x10", 845), size("12x12", 995)],
          cover_categories: vec![Linen, StandardLeather],
          allows_metal_acrylic: false,
          allows_gilding: false,
        },
      ],
      materials: vec![
        MaterialSpec { category: StandardLeather, swatches: names(STANDARD_LEATHER) },
        MaterialSpec { category: DistressedLeather, swatches: names(DISTRESSED_LEATHER) },
        MaterialSpec { category: VeganLeather, swatches: names(VEGAN_LEATHER) },
        MaterialSpec { category: Linen, swatches: names(LINEN) },
      ],
      binding_categories: vec![StandardLeather, DistressedLeather, Linen],
      parent_categories: vec![StandardLeather, Linen],
      photo_substrates: vec![PhotoSubstrate::Matte, PhotoSubstrate::Lustre, PhotoSubstrate::Satin],
      metal_acrylic: vec![
        MetalAcrylicSpec { kind: MetalAcrylicKind::Metal, finishes: names(&["Brushed", "Gloss"]) },
        MetalAcrylicSpec { kind: MetalAcrylicKind::Acrylic, finishes: names(&["Clear", "Frosted"]) },
      ],
      prices: FlatPrices::default(),
      parent_tiers: vec![
        ParentTierPrice { tier: ParentTier::Small, each: Money::dollars(325), pair: Money::dollars(600) },
        ParentTierPrice { tier: ParentTier::Large, each: Money::dollars(425), pair: Money::dollars(800) },
      ],
      page_thickness: vec![
        PageThicknessPrice { option: PageThickness::Standard, price: Money::ZERO },
        PageThicknessPrice { option: PageThickness::Thick, price: Money::dollars(75) },
        // TODO: la página rígida sale a $0 hasta que encuadernación confirme su precio.
        PageThicknessPrice { option: PageThickness::Rigid, price: Money::ZERO },
      ],
      coupons: vec![Coupon { code: "PREPAID400".into(), amount: Money::dollars(400) }],
      imprint: ImprintOptions {
        foil: MethodOptions {
          fonts: names(FOIL_FONTS),
          colors: names(FOIL_COLORS),
          default_color: Some("Gold".into()),
          positions: names(FOIL_POSITIONS),
        },
        deboss: MethodOptions {
          fonts: names(DEBOSS_FONTS),
          colors: names(DEBOSS_COLORS),
          default_color: None,
          positions: Vec::new(),
        },
        fixed_position: "Front — Center".into(),
        max_lines: 3,
        max_chars: 28,
        policy: ImprintPolicy {
          rules: vec![
            ImprintRule {
              method: ImprintMethod::FoilStamping,
              categories: vec![StandardLeather, VeganLeather],
            },
            ImprintRule {
              method: ImprintMethod::StandardDebossing,
              categories: vec![StandardLeather, VeganLeather, Linen, DistressedLeather],
            },
          ],
          color_restrictions: vec![ColorRestriction {
            method: ImprintMethod::StandardDebossing,
            category: DistressedLeather,
            colors: names(&[BLIND_DEBOSS]),
          }],
        },
      },
    }
  }
}
