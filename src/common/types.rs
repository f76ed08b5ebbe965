use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which host collection an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Component, Reflect)]
#[reflect(Component, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EEntityKind {
    DynamicObject,
    Mobile,
    PermanentObject,
    Panel,
    Player,
}

impl FromStr for EEntityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dynamic_object" | "DynamicObject" => Ok(EEntityKind::DynamicObject),
            "mobile" | "Mobile" => Ok(EEntityKind::Mobile),
            "permanent_object" | "PermanentObject" => Ok(EEntityKind::PermanentObject),
            "panel" | "Panel" => Ok(EEntityKind::Panel),
            "player" | "Player" => Ok(EEntityKind::Player),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snake_and_pascal_case() {
        assert_eq!("mobile".parse(), Ok(EEntityKind::Mobile));
        assert_eq!("PermanentObject".parse(), Ok(EEntityKind::PermanentObject));
        assert_eq!("chest".parse::<EEntityKind>(), Err(()));
    }
}
