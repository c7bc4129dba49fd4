//! Per-tick movement and collision resolution.
//!
//! Axis-separated: move on X and resolve, then move on Y and resolve, then apply
//! gravity. Overlap against solids is non-destructive. Overlap against weak entities
//! consumes them: their ids are reported in `StepReport::consumed` and the caller
//! despawns them after the tick. A consumed entity is ignored by the later pass, so
//! each weak entity takes effect exactly once.

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::kind::EntityKind;
use crate::components::motion::Axis;
use crate::core::scene::Scene;

use super::Player;

/// What happened to the player during one `update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Weak entities the player overlapped. The caller must despawn them.
    pub consumed: Vec<EntityId>,
    /// Coin pickups, including ones a full wallet swallowed.
    pub coins_picked: u32,
    pub snow_hits: u32,
}

impl Player {
    /// Advance the player one tick against the scene's solid and weak groups.
    pub fn update(&mut self, scene: &Scene) -> StepReport {
        let mut report = StepReport::default();
        self.save_flag = false;

        self.body.pos.x += self.body.vel.x;
        self.resolve_axis(scene, Axis::X, &mut report);

        self.body.pos.y += self.body.vel.y;
        self.resolve_axis(scene, Axis::Y, &mut report);

        if !self.plain_level {
            self.fall();
        }

        report
    }

    fn resolve_axis(&mut self, scene: &Scene, axis: Axis, report: &mut StepReport) {
        let solid_hits: Vec<&Entity> = scene.solid().filter(|e| self.body.overlaps(e)).collect();

        let weak_hits: Vec<&Entity> = scene
            .weak()
            .filter(|e| !report.consumed.contains(&e.id) && self.body.overlaps(e))
            .collect();
        report.consumed.extend(weak_hits.iter().map(|e| e.id));

        for body in solid_hits {
            match body.kind {
                EntityKind::Floor => self.block_on(body, axis),
                EntityKind::Hole => self.push_from_hole(body, axis),
                EntityKind::SavePoint => {
                    if self.body.center_distance(body) < body.size().x / 2.0 {
                        self.save_flag = true;
                    }
                }
                _ => {}
            }
        }

        for body in weak_hits {
            match body.kind {
                EntityKind::Snow => {
                    self.life = self.life.saturating_sub(1);
                    report.snow_hits += 1;
                }
                EntityKind::Coin => {
                    self.add_coin();
                    report.coins_picked += 1;
                }
                _ => {}
            }
        }
    }

    /// Snap flush against a floor tile along the axis of motion.
    fn block_on(&mut self, floor: &Entity, axis: Axis) {
        let size = self.body.size();
        match axis {
            Axis::X => {
                if self.body.vel.x > 0.0 {
                    self.body.pos.x = floor.left() - size.x;
                } else if self.body.vel.x < 0.0 {
                    self.body.pos.x = floor.right();
                }
            }
            Axis::Y => {
                if self.body.vel.y > 0.0 {
                    self.stop_fall();
                    self.body.pos.y = floor.top() - size.y;
                } else if self.body.vel.y < 0.0 {
                    self.body.pos.y = floor.bottom();
                    self.body.vel.y = 0.0;
                }
            }
        }
    }

    /// Holes repel instead of blocking: inside 3/4 of the hole's width from its
    /// center the player is nudged away along the current axis.
    fn push_from_hole(&mut self, hole: &Entity, axis: Axis) {
        if self.body.center_distance(hole) >= 0.75 * hole.size().x {
            return;
        }

        let nudge = self.tuning.hole_nudge;
        let (mine, theirs) = match axis {
            Axis::X => (self.body.center().x, hole.center().x),
            Axis::Y => (self.body.center().y, hole.center().y),
        };
        let step = if mine < theirs { -nudge } else { nudge };
        match axis {
            Axis::X => self.body.pos.x += step,
            Axis::Y => self.body.pos.y += step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::GameConfig;
    use glam::Vec2;

    const CELL: f32 = 50.0;

    fn tile(scene: &mut Scene, kind: EntityKind, x: f32, y: f32) -> EntityId {
        let id = scene.next_id();
        scene.spawn(Entity::new(id, kind, Vec2::splat(CELL)).with_pos(Vec2::new(x, y)))
    }

    fn small(scene: &mut Scene, kind: EntityKind, x: f32, y: f32, size: f32) -> EntityId {
        let id = scene.next_id();
        scene.spawn(Entity::new(id, kind, Vec2::splat(size)).with_pos(Vec2::new(x, y)))
    }

    /// A player with no velocity and gravity disabled.
    fn still_player(x: f32, y: f32) -> Player {
        let mut p = Player::new(&GameConfig::default()).with_pos(Vec2::new(x, y));
        p.plain_level = true;
        p.body.vel = Vec2::ZERO;
        p
    }

    #[test]
    fn walking_right_into_floor_snaps_to_its_left_edge() {
        let mut scene = Scene::new();
        tile(&mut scene, EntityKind::Floor, 100.0, 0.0);
        let mut p = still_player(68.0, 5.0);
        p.go_right();
        p.update(&scene);
        assert_eq!(p.pos().x, 70.0);
        assert_eq!(p.vel().x, 3.0, "horizontal velocity is kept");
    }

    #[test]
    fn walking_left_into_floor_snaps_to_its_right_edge() {
        let mut scene = Scene::new();
        tile(&mut scene, EntityKind::Floor, 0.0, 0.0);
        let mut p = still_player(52.0, 5.0);
        p.go_left();
        p.update(&scene);
        assert_eq!(p.pos().x, 50.0);
    }

    #[test]
    fn landing_stops_fall_and_clears_jumping() {
        let mut scene = Scene::new();
        tile(&mut scene, EntityKind::Floor, 0.0, 100.0);
        let mut p = still_player(10.0, 58.0);
        p.jumping = true;
        p.body.vel.y = 5.0;
        p.update(&scene);
        assert_eq!(p.pos().y, 60.0);
        assert_eq!(p.vel().y, 0.0);
        assert!(!p.jumping);
    }

    #[test]
    fn ceiling_stops_rise_but_keeps_jumping() {
        let mut scene = Scene::new();
        tile(&mut scene, EntityKind::Floor, 0.0, 0.0);
        let mut p = still_player(10.0, 55.0);
        p.jump();
        p.update(&scene);
        assert_eq!(p.pos().y, 50.0);
        assert_eq!(p.vel().y, 0.0);
        assert!(p.jumping);
    }

    #[test]
    fn resting_on_floor_does_not_jitter_under_gravity() {
        let mut scene = Scene::new();
        tile(&mut scene, EntityKind::Floor, 0.0, 100.0);
        let mut p = Player::new(&GameConfig::default()).with_pos(Vec2::new(10.0, 60.0));
        p.body.vel = Vec2::ZERO;
        for _ in 0..50 {
            p.update(&scene);
            assert_eq!(p.pos(), Vec2::new(10.0, 60.0));
        }
    }

    #[test]
    fn gravity_only_on_gravity_levels() {
        let scene = Scene::new();
        let mut p = still_player(0.0, 0.0);
        p.update(&scene);
        assert_eq!(p.vel().y, 0.0);

        p.plain_level = false;
        p.update(&scene);
        assert!((p.vel().y - 0.35).abs() < 1e-6);
    }

    #[test]
    fn coin_is_consumed_once_and_counted() {
        let mut scene = Scene::new();
        let coin = small(&mut scene, EntityKind::Coin, 30.0, 10.0, 32.0);
        let mut p = still_player(0.0, 0.0);
        p.go_right();
        p.body.vel.y = 1.0;
        let report = p.update(&scene);
        assert_eq!(report.consumed, vec![coin]);
        assert_eq!(report.coins_picked, 1);
        assert_eq!(p.coins, 1);
    }

    #[test]
    fn full_wallet_still_consumes_coin() {
        let mut scene = Scene::new();
        let coin = small(&mut scene, EntityKind::Coin, 5.0, 5.0, 32.0);
        let mut p = still_player(0.0, 0.0);
        p.max_wallet = 3;
        p.coins = 3;
        let report = p.update(&scene);
        assert_eq!(report.consumed, vec![coin]);
        assert_eq!(p.coins, 3);
    }

    #[test]
    fn snow_costs_one_life() {
        let mut scene = Scene::new();
        small(&mut scene, EntityKind::Snow, 10.0, 10.0, 2.0);
        small(&mut scene, EntityKind::Snow, 20.0, 20.0, 2.0);
        let mut p = still_player(0.0, 0.0);
        let report = p.update(&scene);
        assert_eq!(report.snow_hits, 2);
        assert_eq!(p.life, 98);
        assert_eq!(report.consumed.len(), 2);
    }

    #[test]
    fn snow_at_minimum_life_does_not_underflow() {
        let mut scene = Scene::new();
        small(&mut scene, EntityKind::Snow, 10.0, 10.0, 2.0);
        let mut p = still_player(0.0, 0.0);
        p.life = i32::MIN;
        let report = p.update(&scene);
        assert_eq!(report.snow_hits, 1);
        assert_eq!(p.life, i32::MIN);
    }

    #[test]
    fn save_point_sets_flag_only_near_center() {
        let mut scene = Scene::new();
        tile(&mut scene, EntityKind::SavePoint, 100.0, 100.0);

        // Centers 10 apart: inside the 25-unit radius.
        let mut p = still_player(100.0 + 25.0 - 15.0 + 10.0, 100.0 + 25.0 - 20.0);
        p.update(&scene);
        assert!(p.save_flag);
        let before = p.pos();
        p.update(&scene);
        assert_eq!(p.pos(), before, "save points never move the player");

        // Overlapping, but centers 35 apart.
        let mut far = still_player(100.0 + 25.0 - 15.0 + 35.0, 100.0 + 25.0 - 20.0);
        far.update(&scene);
        assert!(!far.save_flag);
    }

    #[test]
    fn save_flag_is_cleared_each_tick() {
        let scene = Scene::new();
        let mut p = still_player(0.0, 0.0);
        p.save_flag = true;
        p.update(&scene);
        assert!(!p.save_flag);
    }

    #[test]
    fn hole_pushes_player_away_from_center() {
        let mut scene = Scene::new();
        tile(&mut scene, EntityKind::Hole, 100.0, 100.0);
        // Player center at (115, 120), hole center at (125, 125).
        let mut p = still_player(100.0, 100.0);
        p.update(&scene);
        // Nudged left on the X pass, up on the Y pass.
        assert_eq!(p.pos(), Vec2::new(98.0, 98.0));
    }

    #[test]
    fn hole_outside_radius_is_ignored() {
        let mut scene = Scene::new();
        tile(&mut scene, EntityKind::Hole, 100.0, 100.0);
        // Overlaps the corner, centers ~53 apart > 37.5.
        let mut p = still_player(75.0, 65.0);
        p.update(&scene);
        assert_eq!(p.pos(), Vec2::new(75.0, 65.0));
    }

    #[test]
    fn lava_and_platform_do_not_block() {
        let mut scene = Scene::new();
        tile(&mut scene, EntityKind::Lava, 0.0, 40.0);
        tile(&mut scene, EntityKind::Platform, 50.0, 40.0);
        let mut p = still_player(10.0, 0.0);
        p.body.vel.y = 5.0;
        p.update(&scene);
        assert_eq!(p.pos().y, 5.0);
    }

    #[test]
    fn horizontal_pass_runs_before_vertical() {
        // Moving diagonally into a floor's top-left corner: the X pass sees no
        // overlap, the Y pass lands the player on top.
        let mut scene = Scene::new();
        tile(&mut scene, EntityKind::Floor, 100.0, 100.0);
        let mut p = still_player(68.0, 58.0);
        p.body.vel = Vec2::new(3.0, 3.0);
        p.update(&scene);
        assert_eq!(p.pos(), Vec2::new(71.0, 60.0));
        assert_eq!(p.vel().y, 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn blocked_horizontal_move_keeps_y(
                y in 0.0f32..10.0,
                gap in 0.0f32..3.0,
                right in any::<bool>(),
            ) {
                let mut scene = Scene::new();
                let mut p;
                if right {
                    tile(&mut scene, EntityKind::Floor, 100.0, 0.0);
                    p = still_player(70.0 - gap, y);
                    p.go_right();
                } else {
                    tile(&mut scene, EntityKind::Floor, 0.0, 0.0);
                    p = still_player(50.0 + gap, y);
                    p.go_left();
                }
                p.update(&scene);
                prop_assert_eq!(p.pos().y, y);
            }

            #[test]
            fn wallet_never_exceeds_cap(
                coins in 0usize..30,
                wallet in 0u32..20,
            ) {
                let mut scene = Scene::new();
                for i in 0..coins {
                    small(&mut scene, EntityKind::Coin, (i % 5) as f32 * 4.0, (i / 5) as f32 * 4.0, 8.0);
                }
                let mut p = still_player(0.0, 0.0);
                p.max_wallet = wallet;
                let report = p.update(&scene);
                prop_assert!(p.coins <= wallet);
                prop_assert_eq!(report.consumed.len(), coins);
                let mut unique = report.consumed.clone();
                unique.sort();
                unique.dedup();
                prop_assert_eq!(unique.len(), coins);
            }

            #[test]
            fn hole_push_is_mirrored(offset in 1.0f32..30.0) {
                let mut scene = Scene::new();
                tile(&mut scene, EntityKind::Hole, 100.0, 100.0);
                // Player center y == hole center y; x centers at 125 -/+ offset.
                let y = 125.0 - 20.0;
                let mut left = still_player(125.0 - offset - 15.0, y);
                let mut right = still_player(125.0 + offset - 15.0, y);
                left.update(&scene);
                right.update(&scene);
                let dl = left.pos().x - (125.0 - offset - 15.0);
                let dr = right.pos().x - (125.0 + offset - 15.0);
                prop_assert!((dl + 2.0).abs() < 1e-3, "left nudge was {}", dl);
                prop_assert!((dr - 2.0).abs() < 1e-3, "right nudge was {}", dr);
            }

            #[test]
            fn gravity_saturates_at_max(extra in 0usize..50) {
                let scene = Scene::new();
                let mut p = still_player(0.0, -10_000.0);
                p.plain_level = false;
                let n = (10.0f32 / 0.35).ceil() as usize + extra;
                for _ in 0..n {
                    p.update(&scene);
                }
                prop_assert_eq!(p.vel().y, 10.0);
            }

            #[test]
            fn landing_keeps_x(
                x in 5.0f32..15.0,
                vx in prop_oneof![-3.0f32..-0.5, 0.5f32..3.0],
                gap in 0.0f32..5.0,
                depth in 0.5f32..5.0,
            ) {
                let mut scene = Scene::new();
                tile(&mut scene, EntityKind::Floor, 0.0, 100.0);
                let mut p = still_player(x, 60.0 - gap);
                p.body.vel = Vec2::new(vx, gap + depth);
                p.update(&scene);
                prop_assert_eq!(p.pos().x, x + vx);
                prop_assert_eq!(p.pos().y, 60.0);
                prop_assert_eq!(p.vel().y, 0.0);
            }

            #[test]
            fn ceiling_hit_keeps_x(
                x in 5.0f32..15.0,
                vx in prop_oneof![-3.0f32..-0.5, 0.5f32..3.0],
                gap in 0.0f32..5.0,
                depth in 0.5f32..5.0,
            ) {
                let mut scene = Scene::new();
                tile(&mut scene, EntityKind::Floor, 0.0, 0.0);
                let mut p = still_player(x, 50.0 + gap);
                p.body.vel = Vec2::new(vx, -(gap + depth));
                p.update(&scene);
                prop_assert_eq!(p.pos().x, x + vx);
                prop_assert_eq!(p.pos().y, 50.0);
                prop_assert_eq!(p.vel().y, 0.0);
            }
        }
    }
}
