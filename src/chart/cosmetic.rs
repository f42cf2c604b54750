// Cosmetic item record (note skins, backgrounds, titles unlocked by players)

use serde::{Deserialize, Serialize};

/// Rarity tier of a cosmetic item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// A cosmetic item record
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CosmeticItem {
    pub name: String,
    pub description: String,
    pub rarity: Rarity,

    /// Price in soft currency (0 = not purchasable)
    pub price: u32,

    /// Icon asset path
    pub icon: String,
}

impl CosmeticItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_purchasable(&self) -> bool {
        self.price > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosmetic_defaults() {
        let item = CosmeticItem::new("Neon Trail");
        assert_eq!(item.name, "Neon Trail");
        assert_eq!(item.rarity, Rarity::Common);
        assert!(!item.is_purchasable());
    }
}
