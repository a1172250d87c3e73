//! Snapshot presentation: a serializable summary and a plain-text view.
use std::fmt::Write as _;

use serde::Serialize;

use rpg_core::{Item, Position, Snapshot};

/// What a headless observer reports about one snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SnapshotSummary {
    pub turn: u64,
    pub level: String,
    pub status: String,
    pub last_event: Option<String>,
    pub player: PlayerSummary,
    /// Items lying on the player's tile.
    pub ground: Vec<ItemSummary>,
    /// Monsters standing on visible tiles, ordered by id.
    pub monsters: Vec<MonsterSummary>,
    /// Event log, oldest first.
    pub events: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub position: [i32; 2],
    pub hitpoints: i32,
    pub strength: i32,
    pub inventory: Vec<ItemSummary>,
    pub weapon: Option<ItemSummary>,
    pub helmet: Option<ItemSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemSummary {
    pub id: u32,
    pub name: String,
    pub kind: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonsterSummary {
    pub id: u32,
    pub name: String,
    pub position: [i32; 2],
    pub hitpoints: i32,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.0,
            name: item.name.clone(),
            kind: item.kind.into(),
        }
    }
}

fn coords(position: Position) -> [i32; 2] {
    [position.x, position.y]
}

impl From<&Snapshot> for SnapshotSummary {
    fn from(snapshot: &Snapshot) -> Self {
        let character = &snapshot.player.character;
        let level = &snapshot.level;

        let mut monsters: Vec<MonsterSummary> = level
            .monsters
            .iter()
            .filter(|(position, _)| level.grid.get(**position).is_some_and(|tile| tile.is_visible()))
            .map(|(position, monster)| MonsterSummary {
                id: monster.id.0,
                name: monster.character.name.clone(),
                position: coords(*position),
                hitpoints: monster.character.hitpoints,
            })
            .collect();
        monsters.sort_by_key(|monster| monster.id);

        Self {
            turn: snapshot.turn,
            level: snapshot.level_name.clone(),
            status: snapshot.status.to_string(),
            last_event: level.last_event.map(|kind| kind.to_string()),
            player: PlayerSummary {
                name: character.name.clone(),
                position: coords(character.position),
                hitpoints: character.hitpoints,
                strength: character.strength,
                inventory: character.inventory.iter().map(ItemSummary::from).collect(),
                weapon: character.equipment.weapon.as_ref().map(ItemSummary::from),
                helmet: character.equipment.helmet.as_ref().map(ItemSummary::from),
            },
            ground: level
                .items_at(character.position)
                .iter()
                .map(ItemSummary::from)
                .collect(),
            monsters,
            events: level.events.iter().map(str::to_string).collect(),
        }
    }
}

/// Draws the level as the player knows it.
///
/// Visible tiles show their occupants, remembered tiles show terrain only,
/// and unseen tiles stay blank.
pub fn render_map(snapshot: &Snapshot) -> String {
    let level = &snapshot.level;
    let player = snapshot.player.character.position;
    let mut out = String::new();

    for (y, row) in level.grid.rows().iter().enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(x, tile)| {
                let position = Position::new(x as i32, y as i32);
                if tile.is_visible() {
                    if position == player {
                        snapshot.player.character.glyph
                    } else if let Some(monster) = level.monster_at(position) {
                        monster.character.glyph
                    } else if let Some(item) = level.items_at(position).last() {
                        item.glyph
                    } else {
                        tile.glyph()
                    }
                } else if tile.is_seen() {
                    tile.glyph()
                } else {
                    ' '
                }
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Map, status line, player belongings and event log.
pub fn render_text(snapshot: &Snapshot) -> String {
    let summary = SnapshotSummary::from(snapshot);
    let mut out = render_map(snapshot);

    let _ = writeln!(
        out,
        "[turn {}] {} | {} hp {} str {} | {}",
        summary.turn,
        summary.level,
        summary.player.name,
        summary.player.hitpoints,
        summary.player.strength,
        summary.status
    );

    let equipped: Vec<String> = [&summary.player.weapon, &summary.player.helmet]
        .into_iter()
        .flatten()
        .map(|item| format!("{} #{}", item.name, item.id))
        .collect();
    if !equipped.is_empty() {
        let _ = writeln!(out, "equipped: {}", equipped.join(", "));
    }
    if !summary.player.inventory.is_empty() {
        let _ = writeln!(out, "carrying: {}", describe(&summary.player.inventory));
    }
    if !summary.ground.is_empty() {
        let _ = writeln!(out, "here: {}", describe(&summary.ground));
    }
    for entry in &summary.events {
        let _ = writeln!(out, "  {entry}");
    }
    out
}

fn describe(items: &[ItemSummary]) -> String {
    items
        .iter()
        .map(|item| format!("{} #{}", item.name, item.id))
        .collect::<Vec<_>>()
        .join(", ")
}
