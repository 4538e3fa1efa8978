use serde::{Deserialize, Serialize};

use crate::tree::ids::ItemId;

/// The hidden outcome class the player tries to isolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Big,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    Smooth,
    Rough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One dataset item. Items never change after the dataset is loaded.
pub struct Item {
    id: ItemId,
    color: Color,
    size: Size,
    texture: Texture,
    weight: u32,
}

impl Item {
    /// Create a new Item instance
    pub fn new(id: ItemId, color: Color, size: Size, texture: Texture, weight: u32) -> Self {
        Item {
            id,
            color,
            size,
            texture,
            weight,
        }
    }

    /// Return the stable id of this item
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Return the outcome class of this item
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn texture(&self) -> Texture {
        self.texture
    }

    /// Return the weight in kilograms
    pub fn weight(&self) -> u32 {
        self.weight
    }
}
