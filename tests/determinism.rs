use springy::{GridConfig, ItemIndex, Point, SpringyLayout};

fn run() -> Vec<Point> {
    let config = GridConfig::new().with_available_width(700.0);
    let mut layout = SpringyLayout::new();
    layout.prepare((0..24).map(ItemIndex::from), config).unwrap();

    let mut origin = 0.0;
    for frame in 0..240 {
        if frame < 60 {
            let next = origin + 6.0;
            layout.on_bounds_change(origin, next, Point::new(200.0, 300.0 + origin));
            origin = next;
        }
        layout.advance(1.0 / 60.0);
    }
    layout.engine().unwrap().springs().map(|s| s.position()).collect()
}

#[test]
fn layout_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run()).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
