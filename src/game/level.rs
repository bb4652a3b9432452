//! Level Geometry
//!
//! Static rectangles the entity collides against. Items are immutable
//! once built; only `blocking` ones take part in collision, the rest are
//! carried for the renderer.

use serde::{Serialize, Deserialize};

use crate::core::rect::Rect;
use crate::error::ConfigError;

/// RGBA color, passed through to the renderer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Backdrop
    pub const DARK_GRAY: Self = Self::rgb(80, 80, 80);
    /// Walls and floors
    pub const GRAY: Self = Self::rgb(130, 130, 130);
    /// Arena block
    pub const RED: Self = Self::rgb(230, 41, 55);
    /// Arena ledge
    pub const GREEN: Self = Self::rgb(0, 228, 48);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A static piece of level geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// World-space bounds
    pub hitbox: Rect,
    /// Draw color
    #[serde(default)]
    pub color: Color,
    /// Whether the entity collides with it
    pub blocking: bool,
}

impl Item {
    /// Create an item.
    pub const fn new(hitbox: Rect, color: Color, blocking: bool) -> Self {
        Self { hitbox, color, blocking }
    }

    /// Blocking item with the default wall color.
    pub const fn solid(hitbox: Rect) -> Self {
        Self::new(hitbox, Color::GRAY, true)
    }

    /// Non-blocking backdrop.
    pub const fn decoration(hitbox: Rect, color: Color) -> Self {
        Self::new(hitbox, color, false)
    }
}

/// Ordered list of level items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    items: Vec<Item>,
}

impl Level {
    /// Create from items, keeping their order.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Walled room of `width` x `height` with `wall` thick borders, a
    /// backdrop, a large block and a ledge.
    pub fn arena(width: f32, height: f32, wall: f32) -> Self {
        Self::new(vec![
            Item::decoration(Rect::new(0.0, 0.0, width, height), Color::DARK_GRAY),
            // Ceiling
            Item::solid(Rect::new(0.0, 0.0, width, wall)),
            // Floor
            Item::solid(Rect::new(0.0, height - wall, width, wall)),
            // Left wall
            Item::solid(Rect::new(0.0, wall, wall, height - wall * 2.0)),
            // Right wall
            Item::solid(Rect::new(width - wall, wall, wall, height - wall * 2.0)),
            Item::new(Rect::new(300.0, 300.0, 300.0, 300.0), Color::RED, true),
            Item::new(Rect::new(1100.0, 600.0, 300.0, 100.0), Color::GREEN, true),
        ])
    }

    /// Load from a JSON document (`{ "items": [...] }`).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// All items in order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_layout() {
        let level = Level::arena(1600.0, 900.0, 100.0);
        assert_eq!(level.items().len(), 7);
        // Backdrop is the only non-blocking item
        assert_eq!(level.items().iter().filter(|item| item.blocking).count(), 6);
        assert!(!level.items()[0].blocking);
        assert_eq!(level.items()[2].hitbox, Rect::new(0.0, 800.0, 1600.0, 100.0));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "items": [
                { "hitbox": { "x": 0.0, "y": 500.0, "width": 800.0, "height": 50.0 }, "blocking": true },
                { "hitbox": { "x": 0.0, "y": 0.0, "width": 800.0, "height": 600.0 }, "blocking": false,
                  "color": { "r": 1, "g": 2, "b": 3, "a": 255 } }
            ]
        }"#;

        let level = Level::from_json(json).unwrap();
        assert_eq!(level.items().len(), 2);
        assert_eq!(level.items()[0].color, Color::default());
        assert_eq!(level.items()[1].color, Color::rgb(1, 2, 3));
        assert!(level.items()[0].blocking);
        assert!(!level.items()[1].blocking);
    }
}
