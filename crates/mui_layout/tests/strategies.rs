//! Layout strategies applied to plain rect containers

use mui_layout::{ColumnLayout, GridLayout, Layout, Point, Rect, RowLayout, Size};

fn children() -> Vec<Rect> {
    vec![
        Rect::new(50.0, 50.0, 10.0, 20.0),
        Rect::new(50.0, 50.0, 30.0, 10.0),
        Rect::new(50.0, 50.0, 20.0, 40.0),
    ]
}

#[test]
fn test_row_layout_places_children_with_spacing() {
    let mut rects = children();
    let extent = Layout::Row(RowLayout::default()).layout(&mut rects);

    let origins: Vec<Point> = rects.iter().map(|r| r.origin).collect();
    assert_eq!(
        origins,
        vec![
            Point::new(0.0, 0.0),
            Point::new(13.0, 0.0),
            Point::new(46.0, 0.0),
        ]
    );
    assert_eq!(extent, Size::new(66.0, 40.0));
    // Sizes are untouched
    assert_eq!(rects[1].size, Size::new(30.0, 10.0));
}

#[test]
fn test_row_layout_custom_spacing() {
    let mut rects = children();
    let extent = RowLayout::new(0.0).layout(&mut rects);
    assert_eq!(rects[2].origin, Point::new(40.0, 0.0));
    assert_eq!(extent.width, 60.0);
}

#[test]
fn test_column_layout_stacks_vertically() {
    let mut rects = children();
    let extent = Layout::from(ColumnLayout::new(5.0)).layout(&mut rects);

    assert_eq!(rects[0].origin, Point::new(0.0, 0.0));
    assert_eq!(rects[1].origin, Point::new(0.0, 25.0));
    assert_eq!(rects[2].origin, Point::new(0.0, 40.0));
    assert_eq!(extent, Size::new(30.0, 80.0));
}

#[test]
fn test_grid_layout_uses_widest_column_and_tallest_row() {
    let mut rects = children();
    rects.push(Rect::new(0.0, 0.0, 5.0, 5.0));
    let extent = Layout::Grid(GridLayout::new(2, 1.0)).layout(&mut rects);

    assert_eq!(rects[0].origin, Point::new(0.0, 0.0));
    assert_eq!(rects[1].origin, Point::new(21.0, 0.0));
    assert_eq!(rects[2].origin, Point::new(0.0, 21.0));
    assert_eq!(rects[3].origin, Point::new(21.0, 21.0));
    assert_eq!(extent, Size::new(51.0, 61.0));
}

#[test]
fn test_grid_with_zero_columns_behaves_as_single_column() {
    let mut rects = children();
    GridLayout::new(0, 0.0).layout(&mut rects);
    assert_eq!(rects[1].origin, Point::new(0.0, 20.0));
    assert_eq!(rects[2].origin, Point::new(0.0, 30.0));
}

#[test]
fn test_empty_container_has_zero_extent() {
    let mut rects: Vec<Rect> = Vec::new();
    for layout in [
        Layout::Row(RowLayout::default()),
        Layout::Column(ColumnLayout::default()),
        Layout::Grid(GridLayout::default()),
    ] {
        assert_eq!(layout.layout(&mut rects), Size::ZERO);
    }
}

#[test]
fn test_slice_container() {
    let mut rects = children();
    RowLayout::new(1.0).layout(rects.as_mut_slice());
    assert_eq!(rects[1].origin.x, 11.0);
}
