use pulse_viz::{Frame, Sketch, SketchConfig, Viewport};

const VIEW: Viewport = Viewport::new(800.0, 600.0);

#[test]
fn burst_eases_up_and_ends_past_threshold() {
    let mut sketch = Sketch::new(SketchConfig::default(), 1).unwrap();
    let mut frame = Frame::new();
    sketch.start_reset();

    let mut last = sketch.state().wave_expansion;
    let mut ticks = 0;
    while sketch.state().click_effect {
        sketch.tick(VIEW, &mut frame);
        ticks += 1;
        let e = sketch.state().wave_expansion;
        assert!(e > last, "expansion must keep growing during a burst");
        assert!(e < 1.5);
        if sketch.state().click_effect {
            assert!(e <= 1.4);
        } else {
            assert!(e > 1.4);
        }
        last = e;
        assert!(ticks < 100);
    }
}

#[test]
fn expansion_settles_back_toward_one() {
    let mut sketch = Sketch::new(SketchConfig::default(), 1).unwrap();
    let mut frame = Frame::new();
    sketch.start_reset();
    while sketch.state().click_effect {
        sketch.tick(VIEW, &mut frame);
    }

    let mut last = sketch.state().wave_expansion;
    for _ in 0..200 {
        sketch.tick(VIEW, &mut frame);
        let e = sketch.state().wave_expansion;
        assert!(e < last && e > 1.0);
        last = e;
    }
    assert!((last - 1.0).abs() < 1e-3);
}

#[test]
fn idle_expansion_grows_from_zero() {
    let mut sketch = Sketch::new(SketchConfig::default(), 1).unwrap();
    let mut frame = Frame::new();
    assert_eq!(sketch.state().wave_expansion, 0.0);
    sketch.tick(VIEW, &mut frame);
    assert!((sketch.state().wave_expansion - 0.05).abs() < 1e-12);
}
