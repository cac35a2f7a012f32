use springy::{ErrorKind, ItemIndex, Point, SpringModel, SpringParams};

fn spring(damping: f64, frequency: f64) -> SpringModel {
    let params = SpringParams::new().with_damping(damping).with_frequency(frequency);
    SpringModel::new(ItemIndex::from(0), Point::new(0.0, 0.0), params).unwrap()
}

#[test]
fn starts_at_rest_on_anchor() {
    let s = spring(0.8, 1.0);
    assert_eq!(s.position(), Point::new(0.0, 0.0));
    assert_eq!(s.velocity(), Point::new(0.0, 0.0));
    assert_eq!(s.rest_length(), 0.0);
    assert!(s.is_settled(1e-9, 1e-9));
}

#[test]
fn critically_damped_converges() {
    let mut s = spring(1.0, 4.0);
    s.set_target(Point::new(0.0, 10.0));
    for _ in 0..1000 {
        s.step(1.0 / 60.0);
    }
    assert!((s.position().y - 10.0).abs() < 0.001);
}

#[test]
fn critically_damped_no_overshoot() {
    let mut s = spring(1.0, 4.0);
    s.set_target(Point::new(0.0, 10.0));
    for _ in 0..1000 {
        s.step(1.0 / 60.0);
        assert!(s.position().y <= 10.001, "Overshoot detected: {}", s.position().y);
    }
}

#[test]
fn underdamped_oscillates() {
    let mut s = spring(0.2, 4.0);
    s.set_target(Point::new(0.0, 10.0));
    let mut crossed = false;
    for _ in 0..1000 {
        s.step(1.0 / 60.0);
        if s.position().y > 10.0 {
            crossed = true;
            break;
        }
    }
    assert!(crossed, "Underdamped spring should overshoot target");
}

#[test]
fn default_params_settle_on_new_anchor() {
    let mut s = SpringModel::new(ItemIndex::new(2, 3), Point::new(150.0, 85.0), SpringParams::default()).unwrap();
    s.set_target(Point::new(150.0, 185.0));
    assert_eq!(s.position(), Point::new(150.0, 85.0), "set_target must not move the item");
    assert!(!s.is_settled(0.01, 0.01));
    for _ in 0..1200 {
        s.step(1.0 / 60.0);
    }
    assert!(s.is_settled(0.01, 0.01));
    assert!((s.position().x - 150.0).abs() < 1e-6);
}

#[test]
fn displace_keeps_anchor_and_springs_back() {
    let mut s = spring(1.0, 2.0);
    s.displace(Point::new(0.0, -40.0));
    assert_eq!(s.anchor(), Point::new(0.0, 0.0));
    assert_eq!(s.position(), Point::new(0.0, -40.0));
    for _ in 0..600 {
        s.step(1.0 / 60.0);
    }
    assert!(s.position().y.abs() < 0.001);
}

#[test]
fn non_positive_dt_no_change() {
    let mut s = spring(0.5, 3.0);
    s.set_target(Point::new(5.0, 5.0));
    let before = s.position();
    s.step(0.0);
    s.step(-1.0);
    s.step(f64::NAN);
    assert_eq!(s.position(), before);
    assert_eq!(s.velocity(), Point::new(0.0, 0.0));
}

#[test]
fn non_finite_dt_no_change() {
    let mut s = spring(0.8, 1.0);
    s.step(f64::INFINITY);
    assert_eq!(s.position(), Point::new(0.0, 0.0));

    s.set_target(Point::new(0.0, 50.0));
    s.step(1.0 / 60.0);
    let (position, velocity) = (s.position(), s.velocity());
    s.step(f64::INFINITY);
    s.step(f64::NEG_INFINITY);
    assert_eq!(s.position(), position);
    assert_eq!(s.velocity(), velocity);

    for _ in 0..1200 {
        s.step(1.0 / 60.0);
    }
    assert!((s.position().y - 50.0).abs() < 0.01);
}

#[test]
fn large_step_lands_on_anchor() {
    let mut s = spring(1.0, 1.0);
    s.set_target(Point::new(0.0, 100.0));
    s.step(60.0);
    assert!((s.position().y - 100.0).abs() < 1e-6);
}

#[test]
fn snap_to_anchor_clears_motion() {
    let mut s = spring(0.3, 2.0);
    s.set_target(Point::new(10.0, 0.0));
    s.step(0.05);
    assert!(s.velocity().length() > 0.0);
    s.snap_to_anchor();
    assert_eq!(s.position(), Point::new(10.0, 0.0));
    assert_eq!(s.velocity(), Point::new(0.0, 0.0));
}

#[test]
fn rejects_out_of_range_params() {
    let anchor = Point::new(0.0, 0.0);
    let bad = [
        SpringParams::new().with_damping(0.0),
        SpringParams::new().with_damping(1.5),
        SpringParams::new().with_damping(f64::NAN),
        SpringParams::new().with_frequency(0.0),
        SpringParams::new().with_frequency(-2.0),
        SpringParams::new().with_frequency(f64::INFINITY),
    ];
    for params in bad {
        let err = SpringModel::new(ItemIndex::from(0), anchor, params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter, "{:?}", params);
    }
}

#[test]
fn accepts_critical_damping_boundary() {
    assert!(SpringModel::new(ItemIndex::from(0), Point::new(0.0, 0.0), SpringParams::new().with_damping(1.0)).is_ok());
}
