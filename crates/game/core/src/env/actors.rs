use crate::state::{Character, Player, Position};

/// Starting stats for the player.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerTemplate {
    pub name: String,
    pub glyph: char,
    pub hitpoints: i32,
    pub strength: i32,
    pub speed: f64,
    pub sight_range: i32,
}

impl PlayerTemplate {
    pub fn builder() -> PlayerTemplateBuilder {
        PlayerTemplateBuilder::default()
    }

    pub fn to_player(&self, position: Position) -> Player {
        Player::new(
            Character::new(self.name.clone(), self.glyph, position)
                .with_hitpoints(self.hitpoints)
                .with_strength(self.strength)
                .with_speed(self.speed)
                .with_sight_range(self.sight_range),
        )
    }
}

impl Default for PlayerTemplate {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            glyph: '@',
            hitpoints: 20,
            strength: 5,
            speed: 1.0,
            sight_range: 7,
        }
    }
}

/// Builder for [`PlayerTemplate`]; unset fields keep the default player's values.
#[derive(Default)]
pub struct PlayerTemplateBuilder {
    template: PlayerTemplate,
}

impl PlayerTemplateBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.template.name = name.into();
        self
    }

    pub fn hitpoints(mut self, hitpoints: i32) -> Self {
        self.template.hitpoints = hitpoints;
        self
    }

    pub fn strength(mut self, strength: i32) -> Self {
        self.template.strength = strength;
        self
    }

    pub fn sight_range(mut self, sight_range: i32) -> Self {
        self.template.sight_range = sight_range;
        self
    }

    pub fn build(self) -> PlayerTemplate {
        self.template
    }
}
