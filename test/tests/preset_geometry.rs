//! Rendered geometry of the layout presets.
//!
//! These tests look at the laid-out views rather than the selected preset:
//! - the image is drawn at 100 units in portrait and 200 units in landscape
//! - three 100x100 boxes stack vertically in portrait and sit in a row in landscape
//! - the landscape side pane takes a fifth of the row, the main pane the rest

use adaptive_layouts_test::prelude::*;
use serial_test::serial;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 0.5,
        "{what} should be {expected}, got {actual}"
    );
}

fn assert_square(app: &AppFixture, key: WidgetKey, edge: f64) {
    let rect = app.rect(key);
    assert_close(rect.width(), edge, &format!("{key} width"));
    assert_close(rect.height(), edge, &format!("{key} height"));
}

#[test]
#[serial]
fn test_portrait_image_is_100() {
    let app = AppFixture::new(300.0, 900.0);
    assert_eq!(app.layout_key(), (SizeClass::Small, Orientation::Portrait));

    assert_square(&app, IMAGE_KEY, 100.0);
}

#[test]
#[serial]
fn test_landscape_image_is_200() {
    let app = AppFixture::new(900.0, 600.0);
    assert_eq!(app.layout_key(), (SizeClass::Medium, Orientation::Landscape));

    assert_square(&app, IMAGE_KEY, 200.0);
}

#[test]
#[serial]
fn test_portrait_boxes_form_a_column() {
    let app = AppFixture::new(300.0, 900.0);

    let rects = BOX_KEYS.map(|key| app.rect(key));
    for key in BOX_KEYS {
        assert_square(&app, key, BOX_EDGE);
    }
    for pair in rects.windows(2) {
        assert_close(pair[1].x0, pair[0].x0, "box column x");
        assert!(
            pair[1].y0 >= pair[0].y1 - 0.5,
            "boxes should be stacked top to bottom: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
#[serial]
fn test_landscape_boxes_form_a_row() {
    let app = AppFixture::new(900.0, 600.0);

    let rects = BOX_KEYS.map(|key| app.rect(key));
    for key in BOX_KEYS {
        assert_square(&app, key, BOX_EDGE);
    }
    for pair in rects.windows(2) {
        assert_close(pair[1].y0, pair[0].y0, "box row y");
        assert!(
            pair[1].x0 >= pair[0].x1 - 0.5,
            "boxes should run left to right: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }

    // the row sits beside the image
    assert!(app.rect(BOX_GROUP_KEY).x0 >= app.rect(IMAGE_KEY).x1 - 0.5);
}

#[test]
#[serial]
fn test_side_pane_takes_a_fifth_of_the_row() {
    for (width, height, class) in [
        (900.0, 600.0, SizeClass::Medium),
        (1300.0, 1100.0, SizeClass::Large),
    ] {
        let app = AppFixture::new(width, height);
        assert_eq!(app.layout_key(), (class, Orientation::Landscape));

        let inner = app.rect(SPLIT_ROW_KEY).width() - 2.0 * PresetStyle::for_class(class).padding;
        let side = app.rect(SIDE_PANE_KEY).width();
        let main = app.rect(MAIN_PANE_KEY).width();

        assert!(
            (side + main - inner).abs() < 1.0,
            "panes should fill the row: {side} + {main} vs {inner}"
        );
        let share = side / (side + main);
        assert!(
            (share - 0.2).abs() < 0.02,
            "side pane share at {width}x{height} should be about 0.2, got {share}"
        );
        assert!(app.rect(SIDE_PANE_KEY).x1 <= app.rect(MAIN_PANE_KEY).x0 + 0.5);
    }
}

#[test]
#[serial]
fn test_portrait_has_no_side_pane() {
    let app = AppFixture::new(300.0, 900.0);

    assert_eq!(app.view(SIDE_PANE_KEY), None);
    assert_eq!(app.view(MAIN_PANE_KEY), None);
}

#[test]
#[serial]
fn test_rotation_rebuilds_geometry() {
    let mut app = AppFixture::new(300.0, 900.0);
    assert_square(&app, IMAGE_KEY, 100.0);

    app.resize(900.0, 300.0);
    assert_eq!(app.layout_key(), (SizeClass::Small, Orientation::Landscape));
    assert_square(&app, IMAGE_KEY, 200.0);
    assert!(app.view(SIDE_PANE_KEY).is_some());

    app.resize(300.0, 900.0);
    assert_square(&app, IMAGE_KEY, 100.0);
    assert_eq!(
        app.view(SIDE_PANE_KEY),
        None,
        "panes from the landscape preset should be forgotten"
    );
}
