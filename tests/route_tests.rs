use carming::{
    order::{
        MAX_PATH_SEGMENTS, RoutePlanner, StraightLinePlanner, parse_path_token, path_token,
    },
    shared::geo::{Coordinate, Distance},
};

#[test]
fn straight_line_endpoints_test() {
    let from = Coordinate::new(37.5665, 126.978);
    let to = Coordinate::new(37.5547, 126.9706);
    let path = StraightLinePlanner::new(Distance::from_meters(100.0))
        .plan(from, to)
        .unwrap();

    let tokens: Vec<&str> = path.iter().collect();
    assert_eq!(tokens.first(), Some(&"37.566500,126.978000"));
    assert_eq!(tokens.last(), Some(&"37.554700,126.970600"));
    // About 1.5 km at 100 m steps.
    assert!((15..=17).contains(&(tokens.len() - 1)), "{}", tokens.len());
}

#[test]
fn straight_line_steps_are_bounded_test() {
    let step = Distance::from_meters(250.0);
    let from = Coordinate::new(37.50, 127.00);
    let to = Coordinate::new(37.52, 127.03);
    let points: Vec<Coordinate> = StraightLinePlanner::new(step)
        .plan(from, to)
        .unwrap()
        .iter()
        .map(|token| parse_path_token(token).unwrap())
        .collect();

    for pair in points.windows(2) {
        assert!(pair[0].distance_to(&pair[1]).as_meters() <= step.as_meters() + 1.0);
    }
}

#[test]
fn straight_line_same_point_test() {
    let here = Coordinate::new(37.5, 127.0);
    let path = StraightLinePlanner::default().plan(here, here).unwrap();
    assert_eq!(path.len(), 2);
}

#[test]
fn straight_line_invalid_step_test() {
    let planner = StraightLinePlanner::new(Distance::from_meters(0.0));
    assert!(
        planner
            .plan(Coordinate::new(37.5, 127.0), Coordinate::new(37.6, 127.0))
            .is_err()
    );
}

#[test]
fn path_token_test() {
    let coordinate = Coordinate::new(37.5, 127.0);
    assert_eq!(path_token(&coordinate), "37.500000,127.000000");
    assert_eq!(parse_path_token("37.5, 127"), Some(coordinate));
    assert_eq!(parse_path_token("nope"), None);
}

#[test]
fn straight_line_across_antimeridian_test() {
    let step = Distance::from_meters(100.0);
    let from = Coordinate::new(-17.0, 179.9);
    let to = Coordinate::new(-17.0, -179.9);
    let points: Vec<Coordinate> = StraightLinePlanner::new(step)
        .plan(from, to)
        .unwrap()
        .iter()
        .map(|token| parse_path_token(token).unwrap())
        .collect();

    assert!(points.len() > 200, "{}", points.len());
    for point in points.iter() {
        assert!(point.is_valid(), "{point}");
        assert!(point.longitude.abs() >= 179.89, "{point}");
    }
    for pair in points.windows(2) {
        let gap = pair[0].distance_to(&pair[1]);
        assert!(gap.as_meters() <= step.as_meters() + 1.0, "{gap}");
    }
    assert_eq!(path_token(points.last().unwrap()), "-17.000000,-179.900000");
}

#[test]
fn straight_line_caps_segments_test() {
    let from = Coordinate::new(37.5, 127.0);
    let antipode = Coordinate::new(-37.5, -53.0);
    let path = StraightLinePlanner::default().plan(from, antipode).unwrap();
    assert_eq!(path.len(), MAX_PATH_SEGMENTS + 1);
    assert_eq!(path.iter().next(), Some("37.500000,127.000000"));
    assert_eq!(path.iter().last(), Some("-37.500000,-53.000000"));
}

#[test]
fn straight_line_tiny_step_is_capped_test() {
    let planner = StraightLinePlanner::new(Distance::from_meters(1e-9));
    let path = planner
        .plan(Coordinate::new(37.5, 127.0), Coordinate::new(37.6, 127.1))
        .unwrap();
    assert_eq!(path.len(), MAX_PATH_SEGMENTS + 1);
}
