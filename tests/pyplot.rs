//! The shared session is process-wide, so everything runs in one test.

use spirographicals::prelude::*;
use spirographicals::pyplot as plt;

#[test]
fn shared_session_state_machine() {
    let capture = Capture::new();
    plt::set_renderer(Box::new(capture.clone()));

    assert_eq!(plt::show().unwrap(), Outcome::NoActiveFigure);
    assert_eq!(
        plt::savefig("nothing.json", SaveOptions::default()).unwrap(),
        Outcome::NoActiveFigure
    );
    assert!(capture.is_empty());

    let axes = plt::plot(&[0.0, 1.0], &[0.0, 1.0], LineOptions::default()).unwrap();
    let again = plt::plot_y(&[3.0, 2.0, 1.0], LineOptions::new().color("orange")).unwrap();
    assert_eq!(axes, again);
    plt::ylabel("y", TextOptions::default()).unwrap();
    plt::ylim(-1.0, 1.0).unwrap();

    assert_eq!(plt::show().unwrap(), Outcome::Delivered);
    let (_, scene) = capture.last().unwrap();
    assert_eq!(scene.axes[0].id, axes);
    assert_eq!(scene.axes[0].artists.len(), 2);
    assert_eq!(scene.axes[0].y_limits, Some(Limits::new(-1.0, 1.0)));

    let (figure, fresh) = plt::subplots(FigureOptions::new().figsize(2.0, 1.0)).unwrap();
    assert_ne!(fresh, axes);
    assert_eq!(plt::show().unwrap(), Outcome::Delivered);
    let (_, scene) = capture.last().unwrap();
    assert_eq!(scene.figure, figure);
    assert_eq!(scene.size_pixels, (200, 100));
    assert!(scene.axes[0].artists.is_empty());

    let bare = plt::figure(FigureOptions::default()).unwrap();
    let err = plt::show().unwrap_err();
    assert_eq!(err.current_context(), &PlotError::NoAxes);
    plt::with_session(|s| assert_eq!(s.current_figure().map(|f| f.id()), Some(bare)));
}
