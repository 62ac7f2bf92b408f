/// Connect-screen view: input handling, tick-driven color pulse, and
/// scene rendering coordination.

use std::cell::Cell;
use std::rc::Rc;

use crate::connect::animation::{lerp_color, Animation};
use crate::connect::connect_layout::ConnectLayout;
use crate::connect::connect_state::ConnectState;
use crate::connect::tick_timer::TickTimer;
use crate::core::config;
use crate::core::types::{Color, ConnectGeometry, MouseEvent, Vec2};
use crate::platform::renderer::Renderer;

pub struct ConnectView {
    state: ConnectState,
    layout: ConnectLayout,
    geometry: ConnectGeometry,
    container: Vec2,

    // Tick-driven label pulse
    timer: TickTimer,
    fade: Animation,
    label_from: Color,
    label_to: Color,

    // Redraw scheduling
    dirty: Rc<Cell<bool>>,
    torn_down: bool,
}

impl ConnectView {
    pub fn new(width: f64, height: f64) -> Self {
        let layout = ConnectLayout::new();
        let geometry = layout.compute(width, height);

        // State mutations raise the shared dirty flag so the frame loop
        // schedules a repaint.
        let dirty = Rc::new(Cell::new(true));
        let mut state = ConnectState::new();
        let flag = dirty.clone();
        state.subscribe(move || flag.set(true));

        let mut timer = TickTimer::new(config::TICK_INTERVAL_MS);
        timer.start();

        let base = Color::from_hex(config::LABEL_BASE, 1.0);
        Self {
            state,
            layout,
            geometry,
            container: Vec2::new(width, height),
            timer,
            fade: Animation::new(),
            label_from: base,
            label_to: base,
            dirty,
            torn_down: false,
        }
    }

    /// Pushes a new container size. Geometry is recomputed only when the
    /// size actually changed.
    pub fn set_container_size(&mut self, width: f64, height: f64) {
        let size = Vec2::new(width, height);
        if self.container == size {
            return;
        }
        self.container = size;
        self.geometry = self.layout.compute(width, height);
        self.dirty.set(true);
    }

    pub fn handle_mouse(&mut self, e: &MouseEvent) {
        if e.button == 1 && e.pressed && self.hit_diamond(Vec2::new(e.x, e.y)) {
            self.trigger_connect();
        }
    }

    /// The Connect activation. Logs intent on every call; the state moves
    /// Idle -> Connecting only on the first.
    pub fn trigger_connect(&mut self) {
        log::info!("Connect triggered");
        self.state.begin_connecting();
    }

    /// Advances the label fade and the tick source by one frame's elapsed
    /// time. Does nothing after teardown.
    pub fn update(&mut self, dt_ms: f64) {
        if self.torn_down {
            return;
        }
        self.fade.update(dt_ms);
        let ticks = self.timer.advance(dt_ms);
        for _ in 0..ticks {
            self.on_tick();
        }
    }

    /// Walks the scene geometry as a flat list of draw calls.
    pub fn render(&self, renderer: &dyn Renderer) {
        let geo = &self.geometry;
        renderer.fill_polygon(
            &geo.diamond.points,
            Color::from_hex(config::DIAMOND_FILL, 1.0),
        );

        let ornament = Color::from_hex(config::ORNAMENT_STROKE, 1.0);
        for seg in &geo.border_segments {
            renderer.stroke_polyline(
                &seg.points,
                seg.closed,
                ornament,
                config::BORDER_STROKE_WIDTH,
            );
        }
        for tri in &geo.corner_triangles {
            renderer.stroke_polyline(
                &tri.points,
                tri.closed,
                ornament,
                config::TRIANGLE_STROKE_WIDTH,
            );
        }
        for path in &geo.arrow_ticks {
            renderer.stroke_polyline(
                &path.points,
                path.closed,
                ornament,
                config::ARROW_STROKE_WIDTH,
            );
        }

        let label_w = renderer.text_width(config::LABEL_TEXT, config::LABEL_FONT_SIZE);
        renderer.draw_text(
            geo.center.x - label_w / 2.0,
            geo.center.y - config::LABEL_FONT_SIZE / 2.0,
            config::LABEL_TEXT,
            config::LABEL_FONT_SIZE,
            self.label_color(),
        );

        self.dirty.set(false);
    }

    /// Whether the next frame needs painting: a state or size mutation was
    /// observed, or the label fade is still moving.
    pub fn should_draw(&self) -> bool {
        self.dirty.get() || self.fade.is_active()
    }

    /// Schedules a repaint without a state change (window expose).
    pub fn request_redraw(&self) {
        self.dirty.set(true);
    }

    /// Stops the tick source. Safe to call repeatedly; also runs on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.timer.stop();
        log::debug!("connect view torn down, tick timer stopped");
    }

    /// Current label color, mid-fade blends included.
    pub fn label_color(&self) -> Color {
        lerp_color(self.label_from, self.label_to, self.fade.progress())
    }

    // ===== Private helpers =====

    /// Diamond hit test: taxicab distance from the center within the half
    /// diagonal.
    fn hit_diamond(&self, p: Vec2) -> bool {
        let center = self.geometry.center;
        (p.x - center.x).abs() + (p.y - center.y).abs() <= self.geometry.box_half
    }

    fn on_tick(&mut self) {
        if !self.state.toggle_color() {
            return;
        }
        // Sample the on-screen color before restarting the fade so the
        // pulse stays continuous even when ticks and fades coincide.
        self.label_from = self.label_color();
        self.label_to = if self.state.color_toggle() {
            Color::from_hex(config::LABEL_PULSE, 1.0)
        } else {
            Color::from_hex(config::LABEL_BASE, 1.0)
        };
        self.fade.start(config::COLOR_FADE_MS);
    }
}

impl Drop for ConnectView {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingRenderer {
        fills: Cell<usize>,
        strokes: Cell<usize>,
        texts: Cell<usize>,
    }

    impl CountingRenderer {
        fn new() -> Self {
            Self {
                fills: Cell::new(0),
                strokes: Cell::new(0),
                texts: Cell::new(0),
            }
        }
    }

    impl Renderer for CountingRenderer {
        fn begin_frame(&mut self, _width: i32, _height: i32) {}
        fn end_frame(&mut self) {}
        fn fill_rect(&self, _x: f64, _y: f64, _w: f64, _h: f64, _color: Color) {}
        fn fill_polygon(&self, _points: &[Vec2], _color: Color) {
            self.fills.set(self.fills.get() + 1);
        }
        fn stroke_polyline(&self, _points: &[Vec2], _closed: bool, _color: Color, _width: f64) {
            self.strokes.set(self.strokes.get() + 1);
        }
        fn draw_text(&self, _x: f64, _y: f64, _text: &str, _size: f64, _color: Color) {
            self.texts.set(self.texts.get() + 1);
        }
        fn text_width(&self, text: &str, size: f64) -> f64 {
            text.len() as f64 * size * 0.6
        }
    }

    fn press_at(x: f64, y: f64) -> MouseEvent {
        MouseEvent {
            x,
            y,
            button: 1,
            pressed: true,
        }
    }

    #[test]
    fn test_starts_idle_with_running_timer() {
        let view = ConnectView::new(300.0, 300.0);
        assert!(!view.state.is_connecting());
        assert!(!view.state.color_toggle());
        assert!(view.timer.is_running());
        assert!(view.should_draw(), "first frame must paint");
    }

    #[test]
    fn test_click_inside_diamond_triggers_connect() {
        let mut view = ConnectView::new(300.0, 300.0);
        view.handle_mouse(&press_at(150.0, 150.0));
        assert!(view.state.is_connecting());
    }

    #[test]
    fn test_click_outside_diamond_is_ignored() {
        let mut view = ConnectView::new(300.0, 300.0);
        // inside the bounding box but outside the taxicab ball
        view.handle_mouse(&press_at(210.0, 100.0));
        assert!(!view.state.is_connecting());
        // release events never trigger
        let mut release = press_at(150.0, 150.0);
        release.pressed = false;
        view.handle_mouse(&release);
        assert!(!view.state.is_connecting());
    }

    #[test]
    fn test_ticks_are_noops_while_idle() {
        let mut view = ConnectView::new(300.0, 300.0);
        view.update(3500.0);
        assert!(!view.state.color_toggle());
        assert!(!view.fade.is_active());
    }

    #[test]
    fn test_three_ticks_flip_toggle_three_times() {
        let mut view = ConnectView::new(300.0, 300.0);
        view.trigger_connect();
        for _ in 0..3 {
            view.update(1000.0);
        }
        // initial false, three flips: true, false, true
        assert!(view.state.color_toggle());
    }

    #[test]
    fn test_repeat_trigger_keeps_tick_phase() {
        let mut view = ConnectView::new(300.0, 300.0);
        view.trigger_connect();
        view.update(900.0);
        view.trigger_connect();
        assert!(view.state.is_connecting());
        assert!(view.timer.is_running());
        view.update(100.0);
        assert!(
            view.state.color_toggle(),
            "pending tick must still fire on schedule after a repeat trigger"
        );
    }

    #[test]
    fn test_no_mutations_after_teardown() {
        let mut view = ConnectView::new(300.0, 300.0);
        view.trigger_connect();
        view.update(1000.0);
        let toggled = view.state.color_toggle();

        view.teardown();
        view.update(10_000.0);
        assert_eq!(view.state.color_toggle(), toggled);
        assert!(!view.timer.is_running());

        view.teardown();
        view.update(1000.0);
        assert_eq!(view.state.color_toggle(), toggled);
    }

    #[test]
    fn test_resize_recomputes_geometry() {
        let mut view = ConnectView::new(300.0, 300.0);
        assert_eq!(view.geometry.center, Vec2::new(150.0, 150.0));
        view.set_container_size(400.0, 200.0);
        assert_eq!(view.geometry.center, Vec2::new(200.0, 100.0));
        assert_eq!(view.geometry.box_half, 100.0);
        // clicks land against the new geometry
        view.handle_mouse(&press_at(200.0, 100.0));
        assert!(view.state.is_connecting());
    }

    #[test]
    fn test_mutations_request_redraw() {
        let mut view = ConnectView::new(300.0, 300.0);
        view.dirty.set(false);
        view.trigger_connect();
        assert!(view.should_draw(), "state mutation must schedule a frame");
        view.dirty.set(false);
        view.update(1000.0);
        assert!(view.should_draw(), "an active fade keeps frames coming");
    }

    #[test]
    fn test_label_color_pulses_between_palette_colors() {
        let base = Color::from_hex(config::LABEL_BASE, 1.0);
        let pulse = Color::from_hex(config::LABEL_PULSE, 1.0);
        let mut view = ConnectView::new(300.0, 300.0);
        assert_eq!(view.label_color(), base);

        view.trigger_connect();
        view.update(1000.0);
        view.update(500.0);
        let mid = view.label_color();
        assert!(mid.r > base.r && mid.r < pulse.r, "mid-fade color must blend");

        // fade completes exactly as the next tick flips back toward base
        view.update(500.0);
        assert!(view.fade.is_active());
        assert_eq!(view.label_from, pulse);
        assert_eq!(view.label_to, base);
    }

    #[test]
    fn test_render_walks_full_scene() {
        let view = ConnectView::new(300.0, 300.0);
        let renderer = CountingRenderer::new();
        view.render(&renderer);
        assert_eq!(renderer.fills.get(), 1);
        assert_eq!(renderer.strokes.get(), 8 + 4 + 16);
        assert_eq!(renderer.texts.get(), 1);
        assert!(!view.should_draw(), "painting clears the dirty flag");
    }
}
