use pulse_viz::particles::ParticleField;
use pulse_viz::{Frame, Sketch, SketchConfig, Viewport};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const VIEW: Viewport = Viewport::new(640.0, 480.0);

#[test]
fn particle_count_never_shrinks() {
    let mut sketch = Sketch::new(SketchConfig::default(), 11).unwrap();
    let mut frame = Frame::new();
    let mut last = 0;
    for _ in 0..500 {
        sketch.tick(VIEW, &mut frame);
        let len = sketch.particles().len();
        assert!(len >= last);
        assert!(len <= last + 1, "at most one spawn per frame");
        assert_eq!(frame.dots().count(), len);
        last = len;
    }
    // 0.2 spawn chance over 500 frames
    assert!(last > 50 && last < 150, "spawned {last}");
}

#[test]
fn spawns_inside_centred_viewport() {
    let mut field = ParticleField::new(1.0, 0.0);
    let mut rng = SmallRng::seed_from_u64(5);
    let mut frame = Frame::new();
    for _ in 0..200 {
        field.update(VIEW, &mut rng, &mut frame);
    }
    assert_eq!(field.len(), 200);
    for p in field.positions() {
        assert!(p.x >= -320.0 && p.x < 320.0);
        assert!(p.y >= -240.0 && p.y < 240.0);
    }
}

#[test]
fn zero_chance_never_spawns() {
    let mut field = ParticleField::new(0.0, 5.0);
    let mut rng = SmallRng::seed_from_u64(5);
    let mut frame = Frame::new();
    for _ in 0..100 {
        field.update(VIEW, &mut rng, &mut frame);
    }
    assert!(field.is_empty());
    assert_eq!(frame.dots().count(), 0);
}

#[test]
fn jitter_is_bounded_per_frame() {
    let mut field = ParticleField::new(1.0, 5.0);
    let mut rng = SmallRng::seed_from_u64(9);
    let mut frame = Frame::new();
    field.update(VIEW, &mut rng, &mut frame);
    let dot = *frame.dots().next().map(|(_, at)| at).unwrap();
    let moved = field.positions()[0];
    assert!((moved.x - dot.x).abs() <= 5.0);
    assert!((moved.y - dot.y).abs() <= 5.0);
}

#[test]
fn dots_use_fixed_alpha() {
    let mut field = ParticleField::new(1.0, 5.0);
    let mut rng = SmallRng::seed_from_u64(2);
    let mut frame = Frame::new();
    for _ in 0..10 {
        frame.clear();
        field.update(VIEW, &mut rng, &mut frame);
    }
    for (stroke, _) in frame.dots() {
        assert_eq!(stroke.a, 150.0);
        assert!(stroke.r >= 0.0 && stroke.r < 255.0);
    }
}

#[test]
fn empty_viewport_does_not_panic() {
    let mut field = ParticleField::new(1.0, 0.0);
    let mut rng = SmallRng::seed_from_u64(2);
    let mut frame = Frame::new();
    field.update(Viewport::new(0.0, 0.0), &mut rng, &mut frame);
    assert_eq!(field.positions()[0].x, 0.0);
}
