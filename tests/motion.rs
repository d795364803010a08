use pulse_viz::{ConfigError, DrawCommand, Frame, Point, Sketch, SketchConfig, Viewport};

const VIEW: Viewport = Viewport::new(1000.0, 500.0);

#[test]
fn direction_flips_every_interval() {
    let mut sketch = Sketch::new(SketchConfig::default(), 3).unwrap();
    let mut frame = Frame::new();
    let mut flips = Vec::new();
    let mut last = sketch.state().move_direction;

    for n in 1..=900u64 {
        sketch.tick(VIEW, &mut frame);
        let dir = sketch.state().move_direction;
        if dir != last {
            flips.push(n);
        }
        last = dir;
    }
    assert_eq!(flips, vec![180, 360, 540, 720, 900]);
}

#[test]
fn custom_flip_interval_is_honoured() {
    let config = SketchConfig {
        flip_interval: 7,
        ..SketchConfig::default()
    };
    let mut sketch = Sketch::new(config, 3).unwrap();
    let mut frame = Frame::new();
    for _ in 0..6 {
        sketch.tick(VIEW, &mut frame);
    }
    assert_eq!(sketch.state().move_direction, 1.0);
    sketch.tick(VIEW, &mut frame);
    assert_eq!(sketch.state().move_direction, -1.0);
}

#[test]
fn toggling_shape_twice_restores_mode() {
    let mut sketch = Sketch::new(SketchConfig::default(), 3).unwrap();
    let before = sketch.state().shape_changed;
    sketch.toggle_shape();
    assert_ne!(sketch.state().shape_changed, before);
    sketch.toggle_shape();
    assert_eq!(sketch.state().shape_changed, before);
}

#[test]
fn drift_trails_the_drawing_and_never_moves_the_origin() {
    let mut sketch = Sketch::new(SketchConfig::default(), 3).unwrap();
    let mut frame = Frame::new();

    for n in 1..=200 {
        sketch.tick(VIEW, &mut frame);
        let cmds = frame.commands();
        assert_eq!(cmds[1], DrawCommand::Translate(Point::new(500.0, 250.0)), "frame {n}");
        assert_eq!(
            cmds.last(),
            Some(&DrawCommand::Translate(sketch.state().drift)),
            "frame {n}"
        );
        // nothing but the origin and the trailing drift moves the transform
        let translates = cmds.iter().filter(|c| matches!(c, DrawCommand::Translate(_))).count();
        assert_eq!(translates, 2);
    }
}

#[test]
fn drift_follows_time_and_direction() {
    let mut sketch = Sketch::new(SketchConfig::default(), 3).unwrap();
    let mut frame = Frame::new();

    // time is 0.02 after the first frame, orbit rate 0.5, reach 100
    sketch.tick(VIEW, &mut frame);
    let drift = sketch.state().drift;
    assert!((drift.x - 0.01f64.sin() * 100.0).abs() < 1e-9);
    assert!((drift.y - 0.01f64.cos() * 100.0).abs() < 1e-9);

    // after frame 180 the direction is negative, so frame 181 uses rate 0.7, reach 200
    for _ in 0..180 {
        sketch.tick(VIEW, &mut frame);
    }
    let t = sketch.state().time;
    let drift = sketch.state().drift;
    assert!((drift.x - (t * 0.7).sin() * 200.0).abs() < 1e-9);
    assert!((drift.y - (t * 0.7).cos() * 200.0).abs() < 1e-9);
}

#[test]
fn zero_flip_interval_is_rejected_up_front() {
    let config = SketchConfig {
        flip_interval: 0,
        ..SketchConfig::default()
    };
    assert!(matches!(
        Sketch::new(config, 1),
        Err(ConfigError::OutOfRange { key: "flip", .. })
    ));
}

#[test]
fn zero_vertex_step_is_rejected_up_front() {
    let config = SketchConfig {
        vertex_step: 0.0,
        ..SketchConfig::default()
    };
    assert!(Sketch::new(config, 1).is_err());
}

#[test]
fn time_advances_by_speed() {
    let mut sketch = Sketch::new(SketchConfig::default(), 3).unwrap();
    let mut frame = Frame::new();
    for _ in 0..10 {
        sketch.tick(VIEW, &mut frame);
    }
    assert!((sketch.state().time - 0.2).abs() < 1e-9);
    assert_eq!(sketch.state().frame_count, 10);
}
