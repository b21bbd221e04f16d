use super::*;
use crate::draw::{BLACK, Color, DrawSurface, RED, StrokeStyle, WHITE};
use crate::input::{
    ColorDialog, ColorRequest, ColorTarget, DialogRequest, Mode, TextDialog, TextRequest,
    forward_requests,
    stroke::{ColorChoice, ThicknessChoice},
};
use crate::util::{Point, Rect};
use std::cell::RefCell;
use std::rc::Rc;

/// Primitive calls observed by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear(Color),
    Segment(Point, Point, StrokeStyle),
    Triangle(Point, Point, Point, StrokeStyle),
    Dot(Point, u32, Color),
    Text(Point, String, Color),
}

/// Surface double that records primitives instead of touching pixels.
struct RecordingSurface {
    width: i32,
    height: i32,
    calls: Vec<Call>,
    dirty: Vec<Rect>,
}

impl RecordingSurface {
    fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            dirty: Vec::new(),
        }
    }

    fn touch(&mut self, at: Point) {
        self.dirty.extend(Rect::new(at.x, at.y, 1, 1));
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn clear(&mut self, background: Color) {
        self.calls.push(Call::Clear(background));
        self.dirty.extend(Rect::new(0, 0, self.width, self.height));
    }

    fn draw_segment(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.calls.push(Call::Segment(from, to, style));
        self.touch(from);
    }

    fn draw_triangle(&mut self, a: Point, b: Point, c: Point, style: StrokeStyle) {
        self.calls.push(Call::Triangle(a, b, c, style));
        self.touch(a);
    }

    fn stamp_dot(&mut self, at: Point, diameter: u32, color: Color) {
        self.calls.push(Call::Dot(at, diameter, color));
        self.touch(at);
    }

    fn draw_text(&mut self, at: Point, text: &str, color: Color) {
        self.calls.push(Call::Text(at, text.to_string(), color));
        self.touch(at);
    }

    fn take_dirty_regions(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.dirty)
    }
}

/// Records primitives but keeps the trait's own triangle decomposition.
struct SegmentOnlySurface(RecordingSurface);

impl DrawSurface for SegmentOnlySurface {
    fn size(&self) -> (i32, i32) {
        self.0.size()
    }

    fn clear(&mut self, background: Color) {
        self.0.clear(background);
    }

    fn draw_segment(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.0.draw_segment(from, to, style);
    }

    fn stamp_dot(&mut self, at: Point, diameter: u32, color: Color) {
        self.0.stamp_dot(at, diameter, color);
    }

    fn draw_text(&mut self, at: Point, text: &str, color: Color) {
        self.0.draw_text(at, text, color);
    }

    fn take_dirty_regions(&mut self) -> Vec<Rect> {
        self.0.take_dirty_regions()
    }
}

fn create_test_controller() -> CanvasController<RecordingSurface> {
    let mut controller = CanvasController::new(RecordingSurface::new(200, 100), WHITE);
    controller.surface_mut().calls.clear();
    controller.take_dirty_regions();
    controller
}

fn calls(controller: &CanvasController<RecordingSurface>) -> &[Call] {
    &controller.surface().calls
}

fn segment_count(controller: &CanvasController<RecordingSurface>) -> usize {
    calls(controller)
        .iter()
        .filter(|call| matches!(call, Call::Segment(..)))
        .count()
}

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[test]
fn new_controller_clears_surface_to_background() {
    let controller = CanvasController::new(RecordingSurface::new(10, 10), RED);
    assert_eq!(calls(&controller), &[Call::Clear(RED)]);
    assert_eq!(controller.mode(), Mode::Pen);
    assert_eq!(controller.stroke().color(), BLACK);
    assert_eq!(controller.stroke().thickness(), 3);
}

// ----------------------------------------------------------------------------
// Pen
// ----------------------------------------------------------------------------

#[test]
fn pen_press_stamps_dot_and_first_drag_draws_nothing() {
    let mut controller = create_test_controller();
    controller.pointer_down((0, 0));
    controller.pointer_drag((5, 5));

    assert_eq!(calls(&controller), &[Call::Dot(p(0, 0), 2, BLACK)]);
    assert_eq!(segment_count(&controller), 0);
}

#[test]
fn pen_draws_one_segment_per_drag_after_the_first() {
    let mut controller = create_test_controller();
    controller.pointer_down((10, 10));

    let drags = 12;
    for i in 0..drags {
        controller.pointer_drag((10 + i, 20 + i));
    }

    assert_eq!(segment_count(&controller), (drags - 1) as usize);
    assert_eq!(
        calls(&controller)[2],
        Call::Segment(p(11, 21), p(12, 22), controller.stroke().style())
    );
}

#[test]
fn pen_press_resets_points_between_strokes() {
    let mut controller = create_test_controller();
    controller.pointer_down((0, 0));
    controller.pointer_drag((1, 1));
    controller.pointer_drag((2, 2));
    controller.pointer_up((2, 2));

    controller.pointer_down((50, 50));
    controller.pointer_drag((51, 51));

    // The second stroke must not join (2,2) to (51,51).
    assert_eq!(segment_count(&controller), 1);
    assert!(controller.pointer().last().is_none());
}

#[test]
fn pen_release_is_a_no_op() {
    let mut controller = create_test_controller();
    controller.pointer_down((0, 0));
    controller.pointer_drag((1, 1));
    controller.pointer_drag((2, 2));
    let before = calls(&controller).len();
    let pointer = *controller.pointer();

    controller.pointer_up((9, 9));
    assert_eq!(calls(&controller).len(), before);
    assert_eq!(*controller.pointer(), pointer);
}

#[test]
fn pen_segments_use_current_style() {
    let mut controller = create_test_controller();
    controller.set_stroke_color_named("Red");
    controller.set_stroke_thickness(ThicknessChoice::Thick);

    controller.pointer_down((0, 0));
    controller.pointer_drag((1, 0));
    controller.pointer_drag((2, 0));

    let expected = StrokeStyle::new(RED, 5).unwrap();
    assert_eq!(calls(&controller)[0], Call::Dot(p(0, 0), 2, RED));
    assert_eq!(calls(&controller)[1], Call::Segment(p(1, 0), p(2, 0), expected));
}

// ----------------------------------------------------------------------------
// Rainbow
// ----------------------------------------------------------------------------

#[test]
fn rainbow_hue_advances_once_per_pen_segment() {
    let mut controller = create_test_controller();
    controller.set_stroke_color(ColorChoice::Rainbow);
    controller.pointer_down((0, 0));
    controller.pointer_drag((0, 1));

    let segments = 37;
    for i in 0..segments {
        controller.pointer_drag((i + 1, 1));
    }

    assert_eq!(segment_count(&controller), segments as usize);
    let hue = controller.stroke().hue().unwrap();
    assert!((hue - 0.37).abs() < 1e-9, "hue was {hue}");
}

#[test]
fn rainbow_segment_uses_color_before_advancing() {
    let mut controller = create_test_controller();
    controller.set_stroke_color(ColorChoice::Rainbow);
    controller.pointer_drag((0, 0));
    controller.pointer_drag((1, 1));

    match &calls(&controller)[0] {
        Call::Segment(_, _, style) => {
            assert_eq!(style.color, RED);
            assert!(style.rainbow);
        }
        other => panic!("expected segment, got {other:?}"),
    }
    assert_ne!(controller.stroke().color(), RED);
}

#[test]
fn eraser_never_advances_rainbow() {
    let mut controller = create_test_controller();
    controller.set_stroke_color(ColorChoice::Rainbow);
    controller.set_mode(Mode::Eraser);

    controller.pointer_down((0, 0));
    for i in 1..10 {
        controller.pointer_drag((i, i));
    }

    assert_eq!(controller.stroke().hue(), Some(0.0));
}

#[test]
fn shapes_never_advance_rainbow() {
    let mut controller = create_test_controller();
    controller.set_stroke_color(ColorChoice::Rainbow);
    controller.set_mode(Mode::Line);
    controller.pointer_up((0, 0));
    controller.pointer_up((10, 0));

    assert_eq!(segment_count(&controller), 1);
    assert_eq!(controller.stroke().hue(), Some(0.0));
}

// ----------------------------------------------------------------------------
// Eraser
// ----------------------------------------------------------------------------

#[test]
fn eraser_paints_background_color() {
    let mut controller = create_test_controller();
    controller.set_stroke_color_named("blue");
    controller.set_stroke_thickness(ThicknessChoice::Pixels(7));
    controller.set_mode(Mode::Eraser);

    controller.pointer_down((3, 3));
    controller.pointer_drag((4, 4));
    controller.pointer_drag((5, 5));

    let erase = StrokeStyle::new(WHITE, 7).unwrap();
    assert_eq!(
        calls(&controller),
        &[
            Call::Dot(p(3, 3), 2, WHITE),
            Call::Segment(p(4, 4), p(5, 5), erase),
        ]
    );
}

#[test]
fn eraser_follows_background_changes() {
    let mut controller = create_test_controller();
    controller.set_background_color(Color::new(1, 2, 3));
    controller.set_mode(Mode::Eraser);
    controller.pointer_down((3, 3));

    assert_eq!(calls(&controller), &[Call::Dot(p(3, 3), 2, Color::new(1, 2, 3))]);
}

// ----------------------------------------------------------------------------
// Line
// ----------------------------------------------------------------------------

#[test]
fn line_needs_two_releases() {
    let mut controller = create_test_controller();
    controller.set_mode(Mode::Line);

    controller.pointer_up((10, 10));
    assert!(calls(&controller).is_empty());
    assert_eq!(controller.pointer().current(), Some(p(10, 10)));

    controller.pointer_up((50, 10));
    assert_eq!(
        calls(&controller),
        &[Call::Segment(p(10, 10), p(50, 10), controller.stroke().style())]
    );
    assert!(controller.pointer().is_empty());
}

#[test]
fn line_ignores_press_and_drag() {
    let mut controller = create_test_controller();
    controller.set_mode(Mode::Line);

    controller.pointer_down((10, 10));
    controller.pointer_drag((20, 20));
    controller.pointer_drag((30, 30));

    assert!(calls(&controller).is_empty());
    assert!(controller.pointer().is_empty());
}

// ----------------------------------------------------------------------------
// Triangle
// ----------------------------------------------------------------------------

#[test]
fn triangle_closes_on_third_release() {
    let mut controller = create_test_controller();
    controller.set_mode(Mode::Triangle);

    controller.pointer_up((10, 10));
    controller.pointer_up((60, 10));
    assert!(calls(&controller).is_empty());

    controller.pointer_up((30, 50));
    assert_eq!(
        calls(&controller),
        &[Call::Triangle(
            p(10, 10),
            p(60, 10),
            p(30, 50),
            controller.stroke().style()
        )]
    );
    assert!(controller.pointer().is_empty());

    // A fourth release starts a new triangle from scratch.
    controller.pointer_up((90, 90));
    assert_eq!(calls(&controller).len(), 1);
    assert_eq!(controller.pointer().current(), Some(p(90, 90)));
    assert_eq!(controller.pointer().last(), None);
}

#[test]
fn default_triangle_draws_edges_in_order() {
    let mut controller =
        CanvasController::new(SegmentOnlySurface(RecordingSurface::new(200, 100)), WHITE);
    controller.surface_mut().0.calls.clear();
    controller.set_mode(Mode::Triangle);

    controller.pointer_up((10, 10));
    controller.pointer_up((60, 10));
    controller.pointer_up((30, 50));

    let style = controller.stroke().style();
    assert_eq!(
        controller.surface().0.calls,
        vec![
            Call::Segment(p(10, 10), p(60, 10), style),
            Call::Segment(p(60, 10), p(30, 50), style),
            Call::Segment(p(30, 50), p(10, 10), style),
        ]
    );
}

// ----------------------------------------------------------------------------
// Mode switching
// ----------------------------------------------------------------------------

#[test]
fn set_mode_always_clears_pointer_state() {
    let mut controller = create_test_controller();
    for mode in Mode::ALL {
        controller.set_mode(Mode::Triangle);
        controller.pointer_up((1, 1));
        controller.pointer_up((2, 2));
        assert!(controller.pointer().pair().is_some());

        controller.set_mode(mode);
        assert!(controller.pointer().is_empty(), "switching to {mode}");
    }
}

#[test]
fn partial_line_does_not_survive_mode_round_trip() {
    let mut controller = create_test_controller();
    controller.set_mode(Mode::Line);
    controller.pointer_up((10, 10));

    controller.set_mode(Mode::Triangle);
    controller.set_mode(Mode::Line);
    controller.pointer_up((50, 10));

    assert!(calls(&controller).is_empty());
    assert_eq!(controller.pointer().current(), Some(p(50, 10)));
}

#[test]
fn unknown_mode_is_ignored() {
    let mut controller = create_test_controller();
    controller.set_mode(Mode::Line);
    controller.pointer_up((10, 10));

    assert!(!controller.set_mode_named("spiral"));
    assert!(!controller.set_mode_index(9));
    assert_eq!(controller.mode(), Mode::Line);
    assert_eq!(controller.pointer().current(), Some(p(10, 10)));

    assert!(controller.set_mode_index(2));
    assert_eq!(controller.mode(), Mode::Triangle);
    assert!(controller.pointer().is_empty());
}

// ----------------------------------------------------------------------------
// Style fallbacks and clamping
// ----------------------------------------------------------------------------

#[test]
fn negative_thickness_keeps_previous_value() {
    let mut controller = create_test_controller();
    assert!(controller.set_stroke_thickness(ThicknessChoice::Pixels(5)));
    assert!(!controller.set_stroke_thickness(ThicknessChoice::Pixels(-1)));
    assert_eq!(controller.stroke().thickness(), 5);
}

#[test]
fn unknown_names_use_documented_defaults() {
    let mut controller = create_test_controller();
    controller.set_stroke_color_named("Green");
    controller.set_stroke_thickness(ThicknessChoice::Thin);

    controller.set_stroke_color_named("mauve");
    assert!(controller.set_stroke_thickness_named("enormous"));

    assert_eq!(controller.stroke().color(), BLACK);
    assert_eq!(controller.stroke().thickness(), 3);
}

#[test]
fn rainbow_step_rejects_values_outside_unit_interval() {
    let mut controller = create_test_controller();
    controller.set_rainbow_step(0.05);
    controller.set_rainbow_step(f64::NAN);
    controller.set_rainbow_step(1.0);
    controller.set_rainbow_step(0.0);
    assert_eq!(controller.rainbow_step(), 0.05);
}

#[test]
fn pointer_positions_are_clamped_to_canvas() {
    let mut controller = create_test_controller();
    controller.set_mode(Mode::Line);
    controller.pointer_up((-20, 40));
    controller.pointer_up((500, 500));

    assert_eq!(
        calls(&controller),
        &[Call::Segment(p(0, 40), p(199, 99), controller.stroke().style())]
    );
}

// ----------------------------------------------------------------------------
// Buffer signal
// ----------------------------------------------------------------------------

#[test]
fn clear_twice_matches_clear_once() {
    let mut controller = create_test_controller();
    controller.pointer_down((5, 5));
    controller.clear();
    controller.clear();

    let full = Rect::new(0, 0, 200, 100).unwrap();
    assert_eq!(
        &calls(&controller)[1..],
        &[Call::Clear(WHITE), Call::Clear(WHITE)]
    );
    assert!(controller.take_dirty_regions().contains(&full));
}

#[test]
fn style_and_mode_changes_leave_buffer_untouched() {
    let mut controller = create_test_controller();
    controller.needs_redraw = false;

    controller.set_mode(Mode::Triangle);
    controller.set_stroke_color(ColorChoice::Rainbow);
    controller.set_stroke_thickness(ThicknessChoice::Thick);
    controller.set_background_color(BLACK);

    assert!(calls(&controller).is_empty());
    assert!(controller.take_dirty_regions().is_empty());
    assert!(!controller.needs_redraw);
}

#[test]
fn listener_receives_regions_as_they_happen() {
    let mut controller = create_test_controller();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    controller.on_buffer_changed(move |rect| sink.borrow_mut().push(rect));

    controller.pointer_down((7, 8));
    assert_eq!(seen.borrow().as_slice(), &[Rect::new(7, 8, 1, 1).unwrap()]);
    assert!(controller.take_dirty_regions().is_empty());
    assert!(controller.needs_redraw);
}

#[test]
fn listener_gets_damage_accumulated_before_registration() {
    let mut controller = create_test_controller();
    controller.pointer_down((1, 2));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    controller.on_buffer_changed(move |rect| sink.borrow_mut().push(rect));

    assert_eq!(seen.borrow().len(), 1);
}

// ----------------------------------------------------------------------------
// Dialog requests
// ----------------------------------------------------------------------------

#[test]
fn text_release_queues_request_without_drawing() {
    let mut controller = create_test_controller();
    controller.set_mode(Mode::TextInsert);
    controller.pointer_up((20, 30));

    assert!(calls(&controller).is_empty());
    assert!(controller.pointer().is_empty());
    assert_eq!(
        controller.take_pending_requests(),
        vec![DialogRequest::Text(TextRequest { anchor: p(20, 30) })]
    );
    assert!(controller.take_pending_requests().is_empty());
}

#[test]
fn committed_text_is_drawn_in_stroke_color() {
    let mut controller = create_test_controller();
    controller.set_mode(Mode::TextInsert);
    controller.pointer_up((20, 30));
    let request = TextRequest { anchor: p(20, 30) };

    controller.set_stroke_color_named("red");
    controller.complete_text(request, Some("hello".to_string()));

    assert_eq!(
        calls(&controller),
        &[Call::Text(p(20, 30), "hello".to_string(), RED)]
    );
}

#[test]
fn cancelled_or_empty_text_draws_nothing() {
    let mut controller = create_test_controller();
    let request = TextRequest { anchor: p(5, 5) };

    controller.complete_text(request, None);
    controller.complete_text(request, Some(String::new()));

    assert!(calls(&controller).is_empty());
}

#[test]
fn text_completion_is_independent_of_current_mode() {
    let mut controller = create_test_controller();
    controller.set_mode(Mode::TextInsert);
    controller.pointer_up((20, 30));
    let requests = controller.take_pending_requests();

    controller.set_mode(Mode::Pen);
    if let DialogRequest::Text(request) = requests[0] {
        controller.complete_text(request, Some("late".to_string()));
    }

    assert_eq!(calls(&controller).len(), 1);
    assert_eq!(controller.mode(), Mode::Pen);
}

#[test]
fn color_completion_applies_to_requested_target() {
    let mut controller = create_test_controller();
    controller.set_stroke_color(ColorChoice::Rainbow);

    controller.request_color(ColorTarget::Stroke);
    controller.request_color(ColorTarget::Background);
    let requests = controller.take_pending_requests();
    assert_eq!(requests.len(), 2);

    let stroke = ColorRequest {
        target: ColorTarget::Stroke,
    };
    let background = ColorRequest {
        target: ColorTarget::Background,
    };
    controller.complete_color(stroke, Some(Color::new(9, 9, 9)));
    controller.complete_color(background, Some(Color::new(200, 100, 0)));

    assert_eq!(controller.stroke().color(), Color::new(9, 9, 9));
    assert!(!controller.stroke().rainbow_enabled());
    assert_eq!(controller.background(), Color::new(200, 100, 0));
    assert!(calls(&controller).is_empty());
}

#[test]
fn cancelled_color_changes_nothing() {
    let mut controller = create_test_controller();
    controller.set_stroke_color_named("green");
    let request = ColorRequest {
        target: ColorTarget::Stroke,
    };

    controller.complete_color(request, None);
    assert_eq!(controller.stroke().color(), crate::draw::GREEN);
}

#[derive(Default)]
struct CapturingDialogs {
    texts: Vec<TextRequest>,
    colors: Vec<ColorRequest>,
}

impl TextDialog for CapturingDialogs {
    fn open_text(&mut self, request: TextRequest) {
        self.texts.push(request);
    }
}

impl ColorDialog for CapturingDialogs {
    fn open_color(&mut self, request: ColorRequest) {
        self.colors.push(request);
    }
}

#[test]
fn forward_requests_routes_each_kind_to_its_dialog() {
    let mut controller = create_test_controller();
    controller.set_mode(Mode::TextInsert);
    controller.pointer_up((1, 1));
    controller.request_color(ColorTarget::Background);
    controller.pointer_up((2, 2));

    let mut texts = CapturingDialogs::default();
    let mut colors = CapturingDialogs::default();
    let forwarded = forward_requests(&mut controller, &mut texts, &mut colors);

    assert_eq!(forwarded, 3);
    assert_eq!(texts.texts.len(), 2);
    assert_eq!(texts.texts[1].anchor, p(2, 2));
    assert_eq!(colors.colors.len(), 1);
    assert!(controller.take_pending_requests().is_empty());
}
