//! Pokemon state with partial-knowledge semantics

use super::moves::Move;
use super::pokemon_type::Type;

/// Number of move slots per Pokemon
pub const MOVE_SLOTS: usize = 4;

/// Legal stat range (applies to max HP, attack, defense and speed)
pub const STAT_MIN: u32 = 1;
pub const STAT_MAX: u32 = 255;

/// Default assumed for a stat nothing has been observed about
pub const STAT_MIDPOINT: u32 = 128;

/// One Pokemon, either fully known (own side, canonical state) or
/// partially observed (opponent side of a belief view). `None` fields
/// are "not yet observed"; `current_hp` is always tracked because HP is
/// public once the Pokemon has been seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    /// Name, unique within its team
    pub name: Option<String>,

    /// Typing, drives STAB and effectiveness
    pub typing: Option<Type>,

    pub max_hp: Option<u32>,
    pub atk: Option<u32>,
    pub def: Option<u32>,
    pub speed: Option<u32>,

    /// Current HP; 0 for a fainted or never-seen Pokemon
    pub current_hp: u32,

    /// Fixed, ordered move slots
    pub moves: [Move; MOVE_SLOTS],
}

impl Pokemon {
    /// Fully-known Pokemon at full HP
    pub fn new(
        name: impl Into<String>,
        typing: Type,
        max_hp: u32,
        atk: u32,
        def: u32,
        speed: u32,
        moves: [Move; MOVE_SLOTS],
    ) -> Self {
        Self {
            name: Some(name.into()),
            typing: Some(typing),
            max_hp: Some(max_hp),
            atk: Some(atk),
            def: Some(def),
            speed: Some(speed),
            current_hp: max_hp,
            moves,
        }
    }

    /// A team slot nothing has been observed about yet
    pub fn unrevealed() -> Self {
        Self {
            name: None,
            typing: None,
            max_hp: None,
            atk: None,
            def: None,
            speed: None,
            current_hp: 0,
            moves: std::array::from_fn(|_| Move::unknown()),
        }
    }

    /// Whether this slot has been seen at all
    pub fn is_unrevealed(&self) -> bool {
        self.name.is_none()
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Display name, or a placeholder for a never-seen slot
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("???")
    }

    /// Find a known move by name
    pub fn find_move(&self, name: &str) -> Option<&Move> {
        self.moves
            .iter()
            .find(|m| m.name.as_deref() == Some(name))
    }

    /// Names of the moves observed so far, in slot order
    pub fn known_move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().filter_map(|m| m.name.as_deref())
    }

    /// Record an observed move into the first still-unknown slot.
    /// No-op if the move is already known or every slot is filled.
    pub fn record_move(&mut self, observed: &Move) -> Option<usize> {
        if let Some(name) = observed.name.as_deref() {
            if let Some(slot) = self
                .moves
                .iter()
                .position(|m| m.name.as_deref() == Some(name))
            {
                return Some(slot);
            }
        }
        let slot = self.moves.iter().position(|m| !m.is_known())?;
        self.moves[slot] = observed.clone();
        Some(slot)
    }

    /// Apply damage, saturating at 0 HP
    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vaporeon() -> Pokemon {
        Pokemon::new(
            "Vaporeon",
            Type::Water,
            130,
            65,
            60,
            65,
            [
                Move::new("Surf", Type::Water, 90),
                Move::new("Bite", Type::Dark, 60),
                Move::unknown(),
                Move::unknown(),
            ],
        )
    }

    #[test]
    fn test_new_is_full_hp() {
        let p = vaporeon();
        assert_eq!(p.current_hp, 130);
        assert!(p.is_alive());
        assert!(!p.is_unrevealed());
    }

    #[test]
    fn test_unrevealed() {
        let p = Pokemon::unrevealed();
        assert!(p.is_unrevealed());
        assert!(!p.is_alive());
        assert_eq!(p.name(), "???");
        assert!(p.moves.iter().all(|m| !m.is_known()));
    }

    #[test]
    fn test_take_damage_saturates() {
        let mut p = vaporeon();
        p.take_damage(100);
        assert_eq!(p.current_hp, 30);
        p.take_damage(100);
        assert_eq!(p.current_hp, 0);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_find_move() {
        let p = vaporeon();
        assert!(p.find_move("Surf").is_some());
        assert!(p.find_move("Ember").is_none());
        assert_eq!(p.known_move_names().count(), 2);
    }

    #[test]
    fn test_record_move_fills_first_unknown_slot() {
        let mut p = vaporeon();
        let slot = p.record_move(&Move::new("Ice Beam", Type::Ice, 90));
        assert_eq!(slot, Some(2));
        assert_eq!(p.moves[2].name(), "Ice Beam");

        // Re-recording a known move does not consume a slot
        let slot = p.record_move(&Move::new("Surf", Type::Water, 90));
        assert_eq!(slot, Some(0));
        assert!(!p.moves[3].is_known());
    }
}
