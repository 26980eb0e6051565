use flappy_bird::collision::*;
use flappy_bird::config::{GameConfig, SatPolicy};
use flappy_bird::entities::*;
use flappy_bird::geometry::{OrientedBox, Vector2};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const POLICIES: [SatPolicy; 2] = [SatPolicy::Textbook, SatPolicy::Legacy];

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Box of the given half-extents centred on `center`.
fn centered(center: Vector2, half: Vector2, angle: f64) -> OrientedBox {
    OrientedBox::from_rect(center - half, half * 2.0, angle)
}

fn square_config() -> GameConfig {
    GameConfig {
        bird_width: 40.0,
        bird_height: 40.0,
        pipe_width: 40.0,
        pipe_height: 40.0,
        ..GameConfig::default()
    }
}

/// Bird and pipe with 20×20 half-extents, centred on the given points.
fn bird_and_pipe(bird_center: Vector2, pipe_center: Vector2) -> (Bird, Pipe) {
    let config = square_config();
    let half = Vector2::new(20.0, 20.0);
    let mut bird = Bird::spawn(&config);
    bird.position = bird_center - half;
    let pipe = Pipe::new(PipeKind::Bottom, pipe_center - half, &config);
    (bird, pipe)
}

// ── Reference scenarios ───────────────────────────────────────────────────────

#[test]
fn boxes_eighty_apart_do_not_overlap() {
    let (bird, pipe) = bird_and_pipe(Vector2::new(100.0, 100.0), Vector2::new(200.0, 100.0));
    for policy in POLICIES {
        assert!(!overlaps(&bird, &pipe, policy));
    }
}

#[test]
fn boxes_thirty_apart_overlap() {
    let (bird, pipe) = bird_and_pipe(Vector2::new(100.0, 100.0), Vector2::new(130.0, 100.0));
    for policy in POLICIES {
        assert!(overlaps(&bird, &pipe, policy));
    }
}

#[test]
fn touching_edges_count_as_overlap() {
    let a = centered(Vector2::new(100.0, 100.0), Vector2::new(20.0, 20.0), 0.0);
    let b = centered(Vector2::new(140.0, 100.0), Vector2::new(20.0, 20.0), 0.0);
    for policy in POLICIES {
        assert!(boxes_overlap(&a, &b, policy));
    }
}

#[test]
fn vertical_separation_is_detected() {
    let (bird, pipe) = bird_and_pipe(Vector2::new(100.0, 100.0), Vector2::new(110.0, 150.0));
    for policy in POLICIES {
        assert!(!overlaps(&bird, &pipe, policy));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[test]
fn overlap_is_symmetric() {
    let mut rng = seeded_rng();
    for _ in 0..2_000 {
        let a = centered(
            Vector2::new(rng.gen_range(0.0..300.0), rng.gen_range(0.0..300.0)),
            Vector2::new(rng.gen_range(1.0..60.0), rng.gen_range(1.0..60.0)),
            rng.gen_range(-90.0..90.0),
        );
        let b = centered(
            Vector2::new(rng.gen_range(0.0..300.0), rng.gen_range(0.0..300.0)),
            Vector2::new(rng.gen_range(1.0..60.0), rng.gen_range(1.0..60.0)),
            if rng.gen_bool(0.5) { 0.0 } else { 180.0 },
        );
        for policy in POLICIES {
            assert_eq!(
                boxes_overlap(&a, &b, policy),
                boxes_overlap(&b, &a, policy),
                "{a:?} vs {b:?} under {policy:?}"
            );
        }
    }
}

#[test]
fn unrotated_boxes_agree_with_plain_aabb_test() {
    let mut rng = seeded_rng();
    let mut hits = 0;
    for _ in 0..2_000 {
        let ca = Vector2::new(rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0));
        let ha = Vector2::new(rng.gen_range(1.0..50.0), rng.gen_range(1.0..50.0));
        let cb = Vector2::new(rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0));
        let hb = Vector2::new(rng.gen_range(1.0..50.0), rng.gen_range(1.0..50.0));

        let aabb = (ca.x - cb.x).abs() <= ha.x + hb.x && (ca.y - cb.y).abs() <= ha.y + hb.y;
        if aabb {
            hits += 1;
        }

        let a = centered(ca, ha, 0.0);
        let b = centered(cb, hb, 0.0);
        for policy in POLICIES {
            assert_eq!(boxes_overlap(&a, &b, policy), aabb, "{a:?} vs {b:?}");
        }
    }
    // Make sure both outcomes were actually exercised.
    assert!(hits > 100 && hits < 1_900, "hits = {hits}");
}

#[test]
fn inverted_pipe_collides_like_an_upright_one() {
    let config = square_config();
    let (bird, _) = bird_and_pipe(Vector2::new(100.0, 100.0), Vector2::ZERO);
    for (x, expected) in [(130.0, true), (200.0, false)] {
        let top = Pipe::new(PipeKind::Top, Vector2::new(x - 20.0, 80.0), &config);
        assert_eq!(overlaps(&bird, &top, SatPolicy::Textbook), expected);
    }
}

// ── Policy differences ────────────────────────────────────────────────────────

#[test]
fn legacy_projection_misses_a_tilted_corner() {
    // A square tilted 45° reaches 20√2 ≈ 28.3 to either side of its center.
    // The box on its right starts 10 units from that center, so they overlap.
    let diamond = centered(Vector2::new(0.0, 0.0), Vector2::new(20.0, 20.0), 45.0);
    let block = centered(Vector2::new(30.0, 0.0), Vector2::new(20.0, 20.0), 0.0);

    assert!(boxes_overlap(&diamond, &block, SatPolicy::Textbook));
    assert!(!boxes_overlap(&diamond, &block, SatPolicy::Legacy));
}

#[test]
fn tilted_bird_clips_a_pipe_a_level_bird_would_miss() {
    let config = GameConfig::default();
    let mut bird = Bird::spawn(&config);
    // Level bird spans y 215..255; pipe top edge sits just below it.
    let pipe = Pipe::new(PipeKind::Bottom, Vector2::new(420.0, 258.0), &config);
    assert!(!overlaps(&bird, &pipe, SatPolicy::Textbook));

    bird.rotation_angle = 30.0;
    assert!(overlaps(&bird, &pipe, SatPolicy::Textbook));
}

// ── first_hit ─────────────────────────────────────────────────────────────────

#[test]
fn first_hit_reports_the_overlapping_pipe() {
    let config = square_config();
    let (bird, _) = bird_and_pipe(Vector2::new(100.0, 100.0), Vector2::ZERO);
    let pipes = vec![
        Pipe::new(PipeKind::Bottom, Vector2::new(300.0, 80.0), &config),
        Pipe::new(PipeKind::Top, Vector2::new(110.0, 80.0), &config),
    ];
    assert_eq!(first_hit(&bird, &pipes, SatPolicy::Textbook), Some(1));
    assert_eq!(first_hit(&bird, &pipes[..1], SatPolicy::Textbook), None);
    assert_eq!(first_hit(&bird, &[], SatPolicy::Textbook), None);
}
