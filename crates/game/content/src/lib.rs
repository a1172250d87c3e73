//! Level content and loaders.
//!
//! Levels are plain ASCII `.map` files, one row per line, named after their
//! file stem. A `world.txt` file next to them names the starting level and
//! lists the portals that link levels together. [`ContentFactory`] reads a
//! whole directory and hands back a ready-to-run [`rpg_core::World`].

pub mod loaders;

pub use loaders::{
    ContentFactory, ContentIds, LoadResult, MapLoader, ParsedLevel, PortalLink, WorldLinks,
    WorldLoader,
};
