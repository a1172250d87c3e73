//! Static catalogues: the bestiary, the item catalogue and the default player.
//!
//! Content loaders map map-file glyphs onto these templates; the engine itself
//! never looks glyphs up.
mod actors;
mod items;
mod npc;

pub use actors::PlayerTemplate;
pub use items::ItemArchetype;
pub use npc::{MonsterKind, MonsterTemplate};
