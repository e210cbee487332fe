//! Unit tests for tm-motion.

use tm_core::{GeoPoint, RouteId, VehicleId, VehicleRng};
use tm_routes::Route;

use crate::{MotionState, MotionStrategy, SegmentTraversal, Step, TargetSeeking, Vehicle};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Two waypoints one degree of longitude apart on the equator (~111 km).
fn two_point_route() -> Route {
    Route::new("pair", vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)]).unwrap()
}

/// Five waypoints ~550 m apart heading south-east, like an urban line.
fn city_route() -> Route {
    Route::new(
        "city",
        vec![
            GeoPoint::new(12.142, -86.270),
            GeoPoint::new(12.137, -86.255),
            GeoPoint::new(12.130, -86.245),
            GeoPoint::new(12.125, -86.236),
            GeoPoint::new(12.120, -86.228),
        ],
    )
    .unwrap()
}

fn segment_vehicle(route: &Route, index: usize, speed_ms: f64) -> Vehicle {
    Vehicle {
        id:       VehicleId(0),
        route:    RouteId(0),
        position: route.path()[index],
        speed_ms,
        heading:  None,
        motion:   MotionState::Segment { index },
        rng:      VehicleRng::new(1, VehicleId(0)),
    }
}

// ── Easing and Animation ──────────────────────────────────────────────────────

#[cfg(test)]
mod animation {
    use crate::{Animation, ease_out_cubic};
    use tm_core::GeoPoint;

    #[test]
    fn ease_out_cubic_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        // Clamped outside [0, 1].
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn holding_is_finished() {
        let p = GeoPoint::new(1.0, 2.0);
        let a = Animation::holding(p, 1_000.0);
        assert!(a.is_finished());
        assert_eq!(a.position(), p);
    }

    #[test]
    fn step_clamps_to_one() {
        let mut a = Animation::towards(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0), 100.0);
        a.step(60.0);
        assert!((a.t - 0.6).abs() < 1e-12);
        a.step(60.0);
        assert_eq!(a.t, 1.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut a = Animation::towards(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0), 0.0);
        a.step(16.0);
        assert!(a.is_finished());
    }
}

// ── SegmentTraversal ──────────────────────────────────────────────────────────

#[cfg(test)]
mod segment {
    use super::*;
    use crate::{MotionError, SegmentConfig, WrapPolicy};

    #[test]
    fn exact_segment_length_arrives_at_b() {
        let route = two_point_route();
        let dist = route.path()[0].distance_m(route.path()[1]);
        let mut v = segment_vehicle(&route, 0, dist);

        let step = SegmentTraversal::default().advance(&mut v, &route, 1.0).unwrap();

        assert_eq!(step, Step::Arrived { segment: 1 });
        assert_eq!(v.position, route.path()[1]);
        assert_eq!(v.segment_index(), Some(1));
    }

    #[test]
    fn closed_loop_drives_back_to_start() {
        let route = two_point_route();
        let dist = route.path()[0].distance_m(route.path()[1]);
        let mut v = segment_vehicle(&route, 1, dist);

        let step = SegmentTraversal::default().advance(&mut v, &route, 1.0).unwrap();

        assert_eq!(step, Step::Arrived { segment: 0 });
        assert_eq!(v.position, route.path()[0]);
    }

    #[test]
    fn restart_policy_teleports_to_first_waypoint() {
        let route = city_route();
        let strategy = SegmentTraversal::new(SegmentConfig {
            wrap: WrapPolicy::Restart,
            ..SegmentConfig::default()
        });
        let mut v = segment_vehicle(&route, 3, 10.0);

        let step = strategy.advance(&mut v, &route, 3_600.0).unwrap();

        assert_eq!(step, Step::Arrived { segment: 0 });
        assert_eq!(v.position, route.path()[0]);
    }

    #[test]
    fn wrap_policy_indices() {
        assert_eq!(WrapPolicy::Closed.next_index(3, 5), 4);
        assert_eq!(WrapPolicy::Closed.next_index(4, 5), 0);
        assert_eq!(WrapPolicy::Restart.next_index(2, 5), 3);
        assert_eq!(WrapPolicy::Restart.next_index(3, 5), 0);
        assert_eq!(WrapPolicy::Restart.next_index(0, 2), 0);
    }

    #[test]
    fn small_step_moves_by_speed_times_dt() {
        let route = city_route();
        let start = route.path()[0];
        let mut v = segment_vehicle(&route, 0, 10.0);

        let step = SegmentTraversal::default().advance(&mut v, &route, 1.0).unwrap();

        assert_eq!(step, Step::Moved);
        let moved = start.distance_m(v.position);
        assert!((moved - 10.0).abs() < 0.1, "moved {moved} m");
    }

    #[test]
    fn never_overshoots_segment_end() {
        let route = city_route();
        let strategy = SegmentTraversal::default();
        let mut v = segment_vehicle(&route, 0, 11.0);

        for _ in 0..2_000 {
            let index = v.segment_index().unwrap();
            let (a, b) = route.segment(index).unwrap();
            let limit = a.distance_m(b) + strategy.config.arrival_tolerance_m;

            let step = strategy.advance(&mut v, &route, 0.7).unwrap();
            if step == Step::Moved {
                assert!(a.distance_m(v.position) <= limit);
                assert!(v.position.distance_m(b) >= strategy.config.arrival_tolerance_m);
            }
        }
    }

    #[test]
    fn huge_dt_is_clamped_to_one_segment() {
        let route = city_route();
        let mut v = segment_vehicle(&route, 1, 12.0);

        let step = SegmentTraversal::default().advance(&mut v, &route, 1e9).unwrap();

        assert_eq!(step, Step::Arrived { segment: 2 });
        assert_eq!(v.position, route.path()[2]);
    }

    #[test]
    fn zero_speed_stays_put() {
        let route = city_route();
        let mut v = segment_vehicle(&route, 2, 0.0);
        let before = v.position;

        let step = SegmentTraversal::default().advance(&mut v, &route, 1.0).unwrap();

        assert_eq!(step, Step::Moved);
        assert_eq!(v.position, before);
    }

    #[test]
    fn out_of_range_segment_errors() {
        let route = two_point_route();
        let mut v = segment_vehicle(&route, 0, 1.0);
        v.motion = MotionState::Segment { index: 7 };

        let result = SegmentTraversal::default().advance(&mut v, &route, 1.0);

        assert!(matches!(result, Err(MotionError::SegmentOutOfRange { index: 7, len: 2, .. })));
    }

    #[test]
    fn target_state_is_rejected() {
        let route = two_point_route();
        let mut v = TargetSeeking::default().spawn(VehicleId(0), RouteId(0), &route, VehicleRng::new(1, VehicleId(0)));

        let result = SegmentTraversal::default().advance(&mut v, &route, 1.0);

        assert!(matches!(result, Err(MotionError::WrongState { expected: "segment", .. })));
    }

    #[test]
    fn spawn_within_configured_ranges() {
        let route = city_route();
        let strategy = SegmentTraversal::default();
        for i in 0..50 {
            let id = VehicleId(i);
            let v = strategy.spawn(id, RouteId(0), &route, VehicleRng::new(9, id));
            let index = v.segment_index().unwrap();
            assert!(index < route.waypoint_count() - 1);
            assert_eq!(v.position, route.path()[index]);
            assert!((8.0..12.0).contains(&v.speed_ms));
            assert!(v.heading.is_none());
        }
    }

    #[test]
    fn spawn_is_deterministic() {
        let route = city_route();
        let strategy = SegmentTraversal::default();
        let a = strategy.spawn(VehicleId(3), RouteId(0), &route, VehicleRng::new(5, VehicleId(3)));
        let b = strategy.spawn(VehicleId(3), RouteId(0), &route, VehicleRng::new(5, VehicleId(3)));
        assert_eq!(a.position, b.position);
        assert_eq!(a.speed_ms, b.speed_ms);
    }
}

// ── TargetSeeking ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod target {
    use super::*;
    use crate::{EtaFormat, MotionError};

    fn spawned(route: &Route) -> (TargetSeeking, Vehicle) {
        let strategy = TargetSeeking::default();
        let v = strategy.spawn(VehicleId(4), RouteId(0), route, VehicleRng::new(11, VehicleId(4)));
        (strategy, v)
    }

    fn near_some_waypoint(route: &Route, p: GeoPoint, half: f64) -> bool {
        route.path().iter().any(|w| p.within_bbox(*w, half + 1e-12))
    }

    #[test]
    fn spawns_holding_at_first_target() {
        let route = city_route();
        let (_, v) = spawned(&route);
        let anim = v.animation().unwrap();
        assert!(anim.is_finished());
        assert_eq!(anim.to, v.position);
        assert!(near_some_waypoint(&route, v.position, 0.00075));
        assert!(v.heading.is_some());
    }

    #[test]
    fn advance_at_endpoint_is_idempotent() {
        let route = city_route();
        let (strategy, mut v) = spawned(&route);
        let before = v.position;
        for _ in 0..10 {
            assert_eq!(strategy.advance(&mut v, &route, 0.016).unwrap(), Step::Holding);
        }
        assert_eq!(v.position, before);
    }

    #[test]
    fn reassign_starts_new_animation_from_current_position() {
        let route = city_route();
        let (strategy, mut v) = spawned(&route);
        let before = v.position;

        strategy.reassign(&mut v, &route);

        let anim = *v.animation().unwrap();
        assert_eq!(anim.from, before);
        assert_eq!(anim.t, 0.0);
        assert_eq!(anim.duration_ms, 1_200.0);
        assert!(near_some_waypoint(&route, anim.to, 0.00075));
    }

    #[test]
    fn reaches_target_after_duration() {
        let route = city_route();
        let (strategy, mut v) = spawned(&route);
        strategy.reassign(&mut v, &route);
        let to = v.animation().unwrap().to;

        let mut frames = 0;
        while strategy.advance(&mut v, &route, 0.016).unwrap() == Step::Moved {
            frames += 1;
            assert!(frames <= 100, "animation never finished");
        }

        // 1200 ms / 16 ms = 75 frames, give or take float accumulation.
        assert!((75..=76).contains(&frames), "took {frames} frames");
        assert!(v.position.distance_m(to) < 1e-6);

        let settled = v.position;
        for _ in 0..5 {
            strategy.advance(&mut v, &route, 0.016).unwrap();
        }
        assert_eq!(v.position, settled);
    }

    #[test]
    fn eased_motion_front_loads_progress() {
        let route = city_route();
        let (strategy, mut v) = spawned(&route);
        strategy.reassign(&mut v, &route);
        let anim = *v.animation().unwrap();
        let total = anim.from.distance_m(anim.to);

        // Half the duration covers 87.5 % of the distance.
        strategy.advance(&mut v, &route, 0.6).unwrap();
        let covered = anim.from.distance_m(v.position);
        assert!(total == 0.0 || (covered / total - 0.875).abs() < 0.01);
    }

    #[test]
    fn reassigned_speed_is_whole_kmh_in_range() {
        let route = city_route();
        let (strategy, mut v) = spawned(&route);
        for _ in 0..30 {
            strategy.reassign(&mut v, &route);
            let kmh = v.speed_kmh();
            assert!((20.0..=45.0).contains(&kmh.round()), "{kmh} km/h");
            assert!((kmh - kmh.round()).abs() < 1e-9);
            let heading = v.heading.unwrap();
            assert!((0.0..360.0).contains(&heading));
        }
    }

    #[test]
    fn segment_state_is_rejected() {
        let route = city_route();
        let mut v = segment_vehicle(&route, 0, 10.0);
        let result = TargetSeeking::default().advance(&mut v, &route, 0.016);
        assert!(matches!(result, Err(MotionError::WrongState { expected: "target", .. })));
    }

    #[test]
    fn strategy_traits() {
        assert!(TargetSeeking::default().uses_reassignment());
        assert_eq!(TargetSeeking::default().eta_format(), EtaFormat::MinutesSeconds);
        assert!(!SegmentTraversal::default().uses_reassignment());
        assert_eq!(SegmentTraversal::default().eta_format(), EtaFormat::Minutes);
    }
}
