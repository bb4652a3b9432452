//! Collision Resolution
//!
//! For each blocking item, four thin probe rectangles hug its edges and
//! reach outward by the entity's displacement for this frame:
//!
//! ```text
//!              top probe (height = vy * dt)
//!            ┌──────────────────────┐
//!   left ┌──┐├──────────────────────┤┌──┐ right
//!  probe │  ││        item          ││  │ probe
//!        └──┘├──────────────────────┤└──┘
//!            └──────────────────────┘
//!              bottom probe (height = -vy * dt)
//! ```
//!
//! Extents stay signed. A falling entity is caught by the top probe up
//! to one frame's travel above the surface, so it cannot tunnel through
//! platforms thinner than that travel. Side probes are inset by `clip`
//! at both ends so standing on a floor does not count as a wall hit.
//!
//! Items are processed in order and corrections are applied as soon as
//! they are found; a later item may override an earlier correction.

use tracing::debug;
#[cfg(feature = "debug-tracing")]
use tracing::trace;

use crate::core::rect::Rect;
use crate::game::entity::PhysicsEntity;
use crate::game::hooks::EntityHooks;
use crate::game::level::Item;

/// Probe rectangles around one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probes {
    /// Above the item, catches landings
    pub top: Rect,
    /// Below the item, catches head bumps
    pub bottom: Rect,
    /// Left of the item
    pub left: Rect,
    /// Right of the item
    pub right: Rect,
}

impl Probes {
    /// Build probes around `hitbox` for the given displacements.
    ///
    /// `delta_ver` is signed (positive while falling), `delta_hor` is a
    /// magnitude.
    pub fn around(hitbox: &Rect, delta_hor: f32, delta_ver: f32, clip: f32) -> Self {
        let side_height = hitbox.height - clip * 2.0;

        Self {
            top: Rect::new(hitbox.x, hitbox.y - delta_ver, hitbox.width, delta_ver),
            // Head bumps happen while rising, so the sign flips
            bottom: Rect::new(hitbox.x, hitbox.bottom(), hitbox.width, -delta_ver),
            left: Rect::new(hitbox.x - delta_hor, hitbox.y + clip, delta_hor, side_height),
            right: Rect::new(hitbox.right(), hitbox.y + clip, delta_hor, side_height),
        }
    }
}

/// Sides of level geometry touched during one resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Landed on top of something
    pub top: bool,
    /// Bumped into the underside of something
    pub bottom: bool,
    /// Pushed out to the left of something
    pub left: bool,
    /// Pushed out to the right of something
    pub right: bool,
}

impl CollisionReport {
    /// Whether anything was hit.
    #[inline]
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    /// Hit a wall on either side.
    #[inline]
    pub fn walls(&self) -> bool {
        self.left || self.right
    }
}

impl<H: EntityHooks> PhysicsEntity<H> {
    /// Refresh the grounded flag and push the entity out of `items`.
    ///
    /// Call once per frame, before [`update`](Self::update). Non-blocking
    /// items are ignored.
    pub fn resolve_collisions(&mut self, items: &[Item], dt: f32) -> CollisionReport {
        self.grounded = false;
        let mut report = CollisionReport::default();

        // Shallow resting penetration keeps the grounded flag stable
        // and stops a snap down after walking off a ledge.
        let clip = self.config.clip;

        for item in items.iter().filter(|item| item.blocking) {
            let delta_ver = self.velocity.y * dt;
            let delta_hor = self.velocity.x.abs() * dt;
            let probes = Probes::around(&item.hitbox, delta_hor, delta_ver, clip);
            let hitbox = &item.hitbox;

            if self.hitbox().overlaps(&probes.left) {
                self.velocity.x = 0.0;
                self.position.x = hitbox.x - self.width() / 2.0;
                report.left = true;
                #[cfg(feature = "debug-tracing")]
                trace!(item = ?hitbox, "left probe hit");
            }

            if self.hitbox().overlaps(&probes.right) {
                self.velocity.x = 0.0;
                self.position.x = hitbox.right() + self.width() / 2.0;
                report.right = true;
                #[cfg(feature = "debug-tracing")]
                trace!(item = ?hitbox, "right probe hit");
            }

            if self.hitbox().overlaps(&probes.top) {
                self.grounded = true;
                self.position.y = hitbox.y - self.height() / 2.0 + clip;
                report.top = true;
                #[cfg(feature = "debug-tracing")]
                trace!(item = ?hitbox, "top probe hit");
            }

            if self.hitbox().overlaps(&probes.bottom) {
                self.velocity.y = 0.0;
                report.bottom = true;
                #[cfg(feature = "debug-tracing")]
                trace!(item = ?hitbox, "bottom probe hit");
            }
        }

        if report.any() {
            debug!(?report, position = %self.position, "collisions resolved");
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::core::time::FrameTime;
    use crate::game::level::Color;

    const DT: f32 = 1.0 / 60.0;

    fn floor() -> Item {
        Item::solid(Rect::new(0.0, 500.0, 1000.0, 100.0))
    }

    fn entity_at(x: f32, y: f32) -> PhysicsEntity {
        PhysicsEntity::new(Vec2::new(x, y), 20.0, 40.0).unwrap()
    }

    #[test]
    fn test_probe_shapes() {
        let item = Rect::new(10.0, 20.0, 100.0, 50.0);
        let probes = Probes::around(&item, 5.0, 8.0, 1.0);

        assert_eq!(probes.top, Rect::new(10.0, 12.0, 100.0, 8.0));
        assert_eq!(probes.bottom, Rect::new(10.0, 70.0, 100.0, -8.0));
        assert_eq!(probes.left, Rect::new(5.0, 21.0, 5.0, 48.0));
        assert_eq!(probes.right, Rect::new(110.0, 21.0, 5.0, 48.0));
    }

    #[test]
    fn test_resting_on_floor_stays_grounded() {
        // Bottom edge sits `clip` below the floor surface
        let mut e = entity_at(500.0, 500.0 - 20.0 + 1.0);

        for frame in 0..10 {
            let report = e.resolve_collisions(&[floor()], DT);
            assert!(report.top);
            assert!(!report.walls());
            e.update(FrameTime::fixed(frame, DT, 1.0));
            assert!(e.is_grounded());
            assert_eq!(e.position().y, 481.0);
        }
    }

    #[test]
    fn test_hovering_with_no_speed_is_not_grounded() {
        let mut e = entity_at(500.0, 470.0);
        let report = e.resolve_collisions(&[floor()], DT);
        assert!(!report.any());
        assert!(!e.is_grounded());
    }

    #[test]
    fn test_falling_entity_snaps_to_surface() {
        // Bottom edge 5 units above the floor, falling 10 units this frame
        let mut e = entity_at(500.0, 475.0);
        e.velocity.y = 10.0 / DT;

        e.resolve_collisions(&[floor()], DT);
        assert!(e.is_grounded());
        assert_eq!(e.position().y, 500.0 - 20.0 + 1.0);

        e.update(FrameTime::new(DT, 1.0));
        assert_eq!(e.speed().y, 0.0);
        assert_eq!(e.position().y, 481.0);
    }

    #[test]
    fn test_no_tunneling_through_thin_platform() {
        let platform = Item::solid(Rect::new(0.0, 300.0, 200.0, 4.0));
        // Bottom edge 10 above the platform, travelling 30 per frame
        let mut e = entity_at(100.0, 270.0);
        e.velocity.y = 30.0 / DT;
        assert!(e.velocity.y * DT > platform.hitbox.height);

        e.resolve_collisions(&[platform], DT);
        assert!(e.is_grounded());
        assert_eq!(e.hitbox().bottom(), 301.0);
    }

    #[test]
    fn test_wall_push_out_left() {
        let wall = Item::solid(Rect::new(300.0, 0.0, 50.0, 600.0));
        // Walked 4 units into the wall's left face
        let mut e = entity_at(294.0, 200.0);

        let report = e.resolve_collisions(&[wall], DT);
        assert!(report.left);
        assert_eq!(e.position().x, 290.0);
        assert_eq!(e.hitbox().right(), 300.0);
    }

    #[test]
    fn test_side_probes_skip_bottom_clip_band() {
        let block = Item::solid(Rect::new(300.0, 0.0, 100.0, 100.0));

        // Top edge 0.5 above the block's underside: within `clip`, no wall hit
        let mut grazing = entity_at(294.0, 119.5);
        let report = grazing.resolve_collisions(&[block], DT);
        assert!(!report.left);
        assert!(report.bottom);
        assert_eq!(grazing.position().x, 294.0);

        // 1.5 above it: past the inset, pushed out
        let mut inside = entity_at(294.0, 118.5);
        let report = inside.resolve_collisions(&[block], DT);
        assert!(report.left);
        assert_eq!(inside.position().x, 290.0);
    }

    #[test]
    fn test_wall_push_out_right_stops_dash() {
        let wall = Item::solid(Rect::new(300.0, 0.0, 50.0, 600.0));
        let mut e = entity_at(365.0, 200.0);
        e.velocity.x = -2000.0;

        let report = e.resolve_collisions(&[wall], DT);
        assert!(report.right);
        assert_eq!(e.speed().x, 0.0);
        assert_eq!(e.position().x, 360.0);
    }

    #[test]
    fn test_head_bump_stops_rising() {
        let ceiling = Item::solid(Rect::new(0.0, 0.0, 1000.0, 100.0));
        // Top edge 5 below the ceiling, rising 10 this frame
        let mut e = entity_at(500.0, 125.0);
        e.velocity.y = -10.0 / DT;

        let report = e.resolve_collisions(&[ceiling], DT);
        assert!(report.bottom);
        assert!(!report.top);
        assert_eq!(e.speed().y, 0.0);
        assert!(!e.is_grounded());
    }

    #[test]
    fn test_non_blocking_items_ignored() {
        let backdrop = Item::decoration(Rect::new(0.0, 0.0, 1000.0, 1000.0), Color::DARK_GRAY);
        let mut e = entity_at(500.0, 500.0);
        e.velocity.y = 100.0;

        let report = e.resolve_collisions(&[backdrop], DT);
        assert!(!report.any());
        assert_eq!(e.position(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_grounded_resets_each_pass() {
        let mut e = entity_at(500.0, 481.0);
        e.resolve_collisions(&[floor()], DT);
        assert!(e.is_grounded());

        e.resolve_collisions(&[], DT);
        assert!(!e.is_grounded());
    }

    #[test]
    fn test_floor_and_wall_in_one_pass() {
        let wall = Item::solid(Rect::new(600.0, 0.0, 50.0, 600.0));
        // Resting on the floor and 3 units into the wall
        let mut e = entity_at(593.0, 481.0);

        let report = e.resolve_collisions(&[floor(), wall], DT);
        assert!(report.top);
        assert!(report.left);
        assert!(e.is_grounded());
        assert_eq!(e.position(), Vec2::new(590.0, 481.0));
    }

    #[test]
    fn test_later_item_wins() {
        let low = Item::solid(Rect::new(0.0, 500.0, 1000.0, 100.0));
        let high = Item::solid(Rect::new(0.0, 498.0, 1000.0, 100.0));
        let mut e = entity_at(500.0, 481.0);

        e.resolve_collisions(&[low, high], DT);
        assert!(e.is_grounded());
        assert_eq!(e.position().y, 498.0 - 20.0 + 1.0);
    }
}
