//! Move data with partial-knowledge semantics

use super::pokemon_type::Type;

/// Minimum base power a damaging move can have
pub const POWER_MIN: u32 = 40;

/// A damaging move. Every field is optional: `None` means "not yet
/// observed" from the viewer's side of the battle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Move {
    /// Move name (unique within its Pokemon's moveset)
    pub name: Option<String>,

    /// Move type, drives STAB and effectiveness
    pub typing: Option<Type>,

    /// Base power
    pub power: Option<u32>,
}

impl Move {
    /// Fully-known move
    pub fn new(name: impl Into<String>, typing: Type, power: u32) -> Self {
        Self {
            name: Some(name.into()),
            typing: Some(typing),
            power: Some(power),
        }
    }

    /// The not-yet-observed sentinel
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Generic neutral filler move assumed for unobserved move slots
    pub fn filler() -> Self {
        Self::new("Tackle", Type::Normal, POWER_MIN)
    }

    /// Minimum-power move of the given type (the presumed STAB option)
    pub fn stab_filler(typing: Type) -> Self {
        Self::new(format!("{} Strike", typing.as_str()), typing, POWER_MIN)
    }

    /// Whether anything about this move has been observed yet
    pub fn is_known(&self) -> bool {
        self.name.is_some()
    }

    /// Display name, or a placeholder if unobserved
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("???")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sentinel() {
        let m = Move::unknown();
        assert!(!m.is_known());
        assert_eq!(m.name(), "???");
        assert_eq!(m, Move::default());
    }

    #[test]
    fn test_structural_equality() {
        let a = Move::new("Ember", Type::Fire, 40);
        let b = Move::new("Ember", Type::Fire, 40);
        let c = Move::new("Ember", Type::Fire, 60);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_fillers() {
        let f = Move::filler();
        assert_eq!(f.typing, Some(Type::Normal));
        assert_eq!(f.power, Some(POWER_MIN));

        let s = Move::stab_filler(Type::Water);
        assert_eq!(s.typing, Some(Type::Water));
        assert_eq!(s.name(), "Water Strike");
    }
}
