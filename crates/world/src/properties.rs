//! Block properties - hardness, mining behavior, solidity

use serde::{Deserialize, Serialize};

/// Tool types relevant to breaking blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolType {
    /// Pickaxe - mines stone, ores
    Pickaxe,
    /// Axe - chops wood
    Axe,
    /// Shovel - digs dirt, sand, gravel
    Shovel,
}

/// Properties of a block type
#[derive(Debug, Clone, PartialEq)]
pub struct BlockProperties {
    /// How long it takes to mine (base time in seconds)
    pub hardness: f32,

    /// The best tool type for this block
    pub best_tool: Option<ToolType>,

    /// Whether this block can be instantly broken
    pub instant_break: bool,

    /// Whether this block is solid (affects collision)
    pub is_solid: bool,
}

impl Default for BlockProperties {
    fn default() -> Self {
        Self {
            hardness: 1.0,
            best_tool: None,
            instant_break: false,
            is_solid: true,
        }
    }
}

impl BlockProperties {
    /// Breaking behavior shared by every wooden stair variant.
    pub fn wood_stairs() -> Self {
        Self {
            hardness: 2.0,
            best_tool: Some(ToolType::Axe),
            instant_break: false,
            is_solid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wood_stairs_break_with_an_axe() {
        let props = BlockProperties::wood_stairs();
        assert_eq!(props.hardness, 2.0);
        assert_eq!(props.best_tool, Some(ToolType::Axe));
        assert!(!props.instant_break);
        assert!(props.is_solid);
    }
}
