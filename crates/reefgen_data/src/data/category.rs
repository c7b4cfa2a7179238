use serde::{Deserialize, Serialize};

/// Number of distinct cell categories, including the artefact overlay.
pub const CATEGORY_COUNT: usize = 5;

/// Categories that automaton rules may grow, carve or convert.
pub const TERRAIN_CATEGORIES: [Category; 4] = [
    Category::Water,
    Category::Seaweed,
    Category::YellowCoral,
    Category::RedCoral,
];

/// Category of a single reef cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Category {
    /// Open water.
    #[default]
    Water = 0,
    /// Seaweed bed, easy to hide in.
    Seaweed = 1,
    /// Yellow coral.
    YellowCoral = 2,
    /// Red coral, the hardest footing on the reef.
    RedCoral = 3,
    /// Collectible marker. Overlays the terrain and is never counted or grown.
    Artefact = 4,
}

impl Category {
    /// All categories in tally-slot order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Water,
        Category::Seaweed,
        Category::YellowCoral,
        Category::RedCoral,
        Category::Artefact,
    ];

    /// Slot of this category in a tally vector.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Category::index`].
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Category::Water),
            1 => Some(Category::Seaweed),
            2 => Some(Category::YellowCoral),
            3 => Some(Category::RedCoral),
            4 => Some(Category::Artefact),
            _ => None,
        }
    }

    pub const fn is_coral(self) -> bool {
        matches!(self, Category::YellowCoral | Category::RedCoral)
    }

    pub const fn is_artefact(self) -> bool {
        matches!(self, Category::Artefact)
    }

    /// Single-character symbol used by text exports.
    pub const fn symbol(self) -> char {
        match self {
            Category::Water => '~',
            Category::Seaweed => '"',
            Category::YellowCoral => 'y',
            Category::RedCoral => 'R',
            Category::Artefact => '*',
        }
    }

    /// Flat tile colour as an RGB tuple.
    pub const fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Category::Water => (0, 0, 255),
            Category::Seaweed => (0, 255, 0),
            Category::YellowCoral => (255, 235, 4),
            Category::RedCoral => (255, 0, 0),
            Category::Artefact => (0, 0, 0),
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Category::from_index(value as usize).ok_or(value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Water => "water",
            Category::Seaweed => "seaweed",
            Category::YellowCoral => "yellow coral",
            Category::RedCoral => "red coral",
            Category::Artefact => "artefact",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_for_every_category() {
        for (slot, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), slot);
            assert_eq!(Category::from_index(slot), Some(*category));
        }
        assert_eq!(Category::from_index(CATEGORY_COUNT), None);
    }

    #[test]
    fn test_try_from_rejects_unknown_bytes() {
        assert_eq!(Category::try_from(3u8), Ok(Category::RedCoral));
        assert_eq!(Category::try_from(255u8), Err(255));
    }

    #[test]
    fn test_terrain_categories_exclude_artefact() {
        assert!(!TERRAIN_CATEGORIES.contains(&Category::Artefact));
        assert_eq!(TERRAIN_CATEGORIES.len(), CATEGORY_COUNT - 1);
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&Category::YellowCoral).unwrap();
        assert_eq!(json, "\"YellowCoral\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::YellowCoral);
    }
}
