//! Player/entity overlap tests and collision resolution
//!
//! Both shapes are treated as centered on their position. The configured
//! `HitTest` is used for every check in a session.

use glam::Vec2;

use super::state::{EntityKind, GameState, Player};
use crate::tuning::HitTest;

/// Outcome of resolving collisions for one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Beneficial entities collected: kind, points, position
    pub collected: Vec<(EntityKind, u64, Vec2)>,
    /// First harmful entity hit, if any
    pub hit: Option<(EntityKind, Vec2)>,
}

/// Centered-box overlap with each box shrunk by `padding` on every side
#[inline]
pub fn rects_overlap(a: Vec2, a_size: f32, b: Vec2, b_size: f32, padding: f32) -> bool {
    let reach = (a_size + b_size) / 2.0 - 2.0 * padding;
    if reach <= 0.0 {
        return false;
    }
    (a.x - b.x).abs() < reach && (a.y - b.y).abs() < reach
}

/// Center distance below the combined size scaled down by `divisor`
#[inline]
pub fn circles_overlap(a: Vec2, a_size: f32, b: Vec2, b_size: f32, divisor: f32) -> bool {
    a.distance(b) < (a_size + b_size) / divisor
}

pub fn overlaps(policy: HitTest, player: &Player, pos: Vec2, size: f32) -> bool {
    match policy {
        HitTest::Rect { padding } => rects_overlap(player.pos, player.size, pos, size, padding),
        HitTest::Circle { divisor } => circles_overlap(player.pos, player.size, pos, size, divisor),
    }
}

/// Test the player against every active entity.
///
/// A harmful overlap wins the tick: the first one in slot order is reported and
/// nothing is collected, so the round ends on the score it had before the tick.
/// Otherwise every touched beneficial entity is removed and its points added.
/// Each entity resolves at most once because it leaves the pool when it does.
pub fn resolve(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();
    let policy = state.tuning.hit_test;

    let touching: Vec<_> = state
        .entities
        .iter()
        .filter(|(_, e)| overlaps(policy, &state.player, e.pos, e.size))
        .map(|(handle, e)| (handle, e.kind, e.pos, e.harmful))
        .collect();

    if let Some(&(_, kind, pos, _)) = touching.iter().find(|(_, _, _, harmful)| *harmful) {
        report.hit = Some((kind, pos));
        return report;
    }

    for (handle, ..) in touching {
        if let Some(e) = state.entities.release(handle) {
            state.score += e.points;
            report.collected.push((e.kind, e.points, e.pos));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Entity;
    use crate::tuning::Tuning;

    fn playing_state(hit_test: HitTest) -> GameState {
        let tuning = Tuning {
            hit_test,
            ..Tuning::default()
        };
        let mut state = GameState::new(1, tuning, 16);
        state.start().unwrap();
        state
    }

    #[test]
    fn test_rect_overlap_with_padding() {
        // Combined half-extent 35, minus 2 * 5 padding = 25
        let a = Vec2::new(100.0, 100.0);
        assert!(rects_overlap(a, 40.0, Vec2::new(124.0, 100.0), 30.0, 5.0));
        assert!(!rects_overlap(a, 40.0, Vec2::new(126.0, 100.0), 30.0, 5.0));
        assert!(!rects_overlap(a, 40.0, Vec2::new(100.0, 130.0), 30.0, 5.0));
        // Without padding the same offset touches
        assert!(rects_overlap(a, 40.0, Vec2::new(126.0, 100.0), 30.0, 0.0));
    }

    #[test]
    fn test_circle_overlap_with_divisor() {
        let a = Vec2::new(0.0, 0.0);
        // (40 + 30) / 2.5 = 28
        assert!(circles_overlap(a, 40.0, Vec2::new(27.0, 0.0), 30.0, 2.5));
        assert!(!circles_overlap(a, 40.0, Vec2::new(20.0, 20.0), 30.0, 2.5));
    }

    #[test]
    fn test_collect_star_on_player() {
        let mut state = playing_state(HitTest::default());
        let pos = state.player.pos;
        let handle = state
            .entities
            .acquire(Entity::new(EntityKind::Star, pos, 2.0, 0.0))
            .unwrap();

        let report = resolve(&mut state);
        assert_eq!(state.score, 50);
        assert!(state.entities.get(handle).is_none());
        assert_eq!(report.collected.len(), 1);
        assert!(report.hit.is_none());

        // Already resolved, nothing left to collect
        let report = resolve(&mut state);
        assert!(report.collected.is_empty());
        assert_eq!(state.score, 50);
    }

    #[test]
    fn test_first_harmful_hit_stops_scan() {
        let mut state = playing_state(HitTest::Circle { divisor: 2.5 });
        let pos = state.player.pos;
        state
            .entities
            .acquire(Entity::new(EntityKind::Bomb, pos, 2.0, 0.0));
        state
            .entities
            .acquire(Entity::new(EntityKind::Star, pos, 2.0, 0.0));

        let report = resolve(&mut state);
        assert_eq!(report.hit.map(|(k, _)| k), Some(EntityKind::Bomb));
        assert!(report.collected.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.entities.len(), 2);
    }

    #[test]
    fn test_star_before_harmful_in_slot_order_not_scored() {
        let mut state = playing_state(HitTest::default());
        let pos = state.player.pos;
        let star = state
            .entities
            .acquire(Entity::new(EntityKind::Star, pos, 2.0, 0.0))
            .unwrap();
        state
            .entities
            .acquire(Entity::new(EntityKind::Meteor, pos, 2.0, 0.0));

        let report = resolve(&mut state);
        assert_eq!(report.hit.map(|(k, _)| k), Some(EntityKind::Meteor));
        assert!(report.collected.is_empty());
        assert_eq!(state.score, 0);
        assert!(state.entities.get(star).is_some());
    }

    #[test]
    fn test_far_entities_ignored() {
        let mut state = playing_state(HitTest::default());
        state
            .entities
            .acquire(Entity::new(EntityKind::Meteor, Vec2::new(20.0, 20.0), 2.0, 0.0));
        let report = resolve(&mut state);
        assert_eq!(report, CollisionReport::default());
    }
}
