use scaleboard::layout::{calculate_scale, fit_rect_into_frame};
use scaleboard::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn frame_scenarios() {
    init_logger();
    let mut frame = ReferenceFrame::with_reference_size(Size(400, 300)).unwrap();
    let a = frame.add_item(Rect::from_xywh(10, 10, 50, 50)).unwrap();
    let b = frame.add_item(Rect::from_xywh(0, 0, 50, 50)).unwrap();

    let geoms = frame.layout(Rect::from_xywh(0, 0, 800, 600)).unwrap();
    assert_eq!(geoms[&a], Rect::from_xywh(20, 20, 100, 100));
    assert_eq!(geoms[&b], Rect::from_xywh(0, 0, 100, 100));

    let geoms = frame.layout(Rect::from_xywh(0, 0, 800, 300)).unwrap();
    assert_eq!(geoms[&b], Rect::from_xywh(200, 0, 50, 50));
    assert_eq!(frame.current_scale(), Ok(1.0));
}

#[test]
fn errors() {
    init_logger();
    let mut frame = ReferenceFrame::new();
    assert_eq!(
        frame.register_item(ItemId::new(1), Rect::ZERO),
        Err(Error::NotInitialized)
    );
    assert_eq!(
        frame.set_reference_size(Size(0, 300)),
        Err(Error::InvalidSize(Size(0, 300)))
    );
    let err = calculate_scale(Size(0, 1), Size(1, 1)).unwrap_err();
    assert_eq!(err, Error::InvalidRectangle(Size(0, 1)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn hit_test_notice_on_scaled_board() {
    init_logger();
    let image = ScaledImage::new().with_source(Size(400, 300));
    let mut board = NoticeBoard::new(Size(100, 100)).unwrap();
    let _ = board.set_background(&image).unwrap();
    let id = board.add_notice(Rect::from_xywh(100, 100, 40, 20)).unwrap();

    let widget = Size(200, 400);
    let geoms = board.layout(Rect::from_size(widget)).unwrap();
    let shown = geoms[&id];
    assert_eq!(shown, Rect::from_xywh(50, 175, 20, 10));

    // A click on the notice as displayed maps back into its reference geometry
    let click = shown.pos + Offset(5, 5);
    let reference = board.widget_to_reference(click, widget).unwrap();
    assert_eq!(reference, Coord(110, 110));
    assert!(board.reference_geometry(id).unwrap().contains(reference));

    // The background image displayed by the same widget agrees
    let mut background = image.clone();
    background.resize(widget);
    assert_eq!(background.current_rect(widget), geoms[&board.background()]);
    assert_eq!(background.map_widget_to_source(click, widget), Some(reference));
}

#[test]
fn keyboard_editing_round_trip() {
    init_logger();
    let mut board = NoticeBoard::new(Size(400, 300)).unwrap();
    let id = board.add_notice(Rect::from_xywh(10, 10, 50, 50)).unwrap();
    let _ = board.layout(Rect::from_xywh(0, 0, 800, 600)).unwrap();

    let mut action = Action::empty();
    action |= board.handle_key(id, NavKey::Right, Modifiers::empty()).unwrap();
    action |= board.handle_key(id, NavKey::Left, Modifiers::empty()).unwrap();
    assert!(action.needs_layout());
    let geoms = board.relayout().unwrap().unwrap();
    assert_eq!(geoms[&id], Rect::from_xywh(20, 20, 100, 100));
}

#[test]
fn fit_matches_frame() {
    let source = Rect::from_size(Size(400, 300));
    for outer in [Size(1000, 500), Size(333, 777), Size(401, 301)] {
        let fit = fit_rect_into_frame(source, Rect::from_size(outer)).unwrap();
        let mut frame = ReferenceFrame::with_reference_size(source.size).unwrap();
        let _ = frame.layout(Rect::from_size(outer)).unwrap();
        assert_eq!(frame.current_rect().unwrap().size, fit.size);
    }
}
