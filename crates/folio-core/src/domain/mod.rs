pub mod cover;
pub mod imprint;
pub mod selection;
pub mod text;

pub use cover::{
  Cover, CoverVariant, MaterialPick, MetalAcrylicCover, ParentCover, ParentCoverVariant, PhotoCover,
};
pub use imprint::{Debossing, FoilStamping, Imprint};
pub use selection::{AlbumSelection, ParentAlbums, Upgrades};
pub use text::ImageRef;
