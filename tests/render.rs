use webtheme::color::Rgba8Srgb;
use webtheme::geom::{Coord, Rect, Size};
use webtheme::soft::{Pixels, PixmapSurface};
use webtheme::{Config, ControlState, ControlType, StateColors, Surface, ThemeControl, marker_pixel};

/// Background colour no control ever draws with
const SENTINEL: Rgba8Srgb = Rgba8Srgb::rgb(1, 2, 3);

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pixels(size: Size) -> Pixels {
    let mut px = Pixels::new(size);
    px.clear(SENTINEL);
    px
}

fn render<S: Surface>(surface: &mut S, bounds: Rect, ty: ControlType, state: ControlState) {
    ThemeControl::new(surface, bounds, ty, state).render();
}

/// Assert that no pixel outside `bounds` changed
fn assert_untouched_outside(px: &Pixels, bounds: Rect, what: &str) {
    let size = px.size();
    for y in 0..size.1 {
        for x in 0..size.0 {
            if !bounds.contains(Coord(x, y)) {
                assert_eq!(px.pixel(x, y), Some(SENTINEL), "{what}: wrote ({x}, {y})");
            }
        }
    }
}

#[test]
fn checked_box_pressed() {
    init();
    let mut px = pixels(Size(16, 16));
    let bounds = Rect::from_ltrb(0, 0, 16, 16);
    render(&mut px, bounds, ControlType::CheckedBox, ControlState::Pressed);

    // marker
    assert_eq!(px.pixel(0, 0), Some(Rgba8Srgb::rgb(0xff, 0, 0)));
    // rounded border
    assert_eq!(px.pixel(8, 0), Some(Rgba8Srgb::BLACK));
    assert_eq!(px.pixel(0, 8), Some(Rgba8Srgb::BLACK));
    // background
    assert_eq!(px.pixel(12, 12), Some(Rgba8Srgb::rgb(0xa9, 0xff, 0x12)));
    // check mark
    assert_eq!(px.pixel(4, 8), Some(Rgba8Srgb::BLACK));
    assert_eq!(px.pixel(8, 11), Some(Rgba8Srgb::BLACK));
    assert_eq!(px.pixel(11, 4), Some(Rgba8Srgb::BLACK));
    // the corner beyond the rounding is not painted
    assert_eq!(px.pixel(15, 0), Some(SENTINEL));
}

#[test]
fn deterministic() {
    init();
    let bounds = Rect::from_ltrb(2, 3, 30, 21);
    for ty in ControlType::ALL {
        for state in ControlState::ALL {
            let mut a = pixels(Size(32, 24));
            let mut b = pixels(Size(32, 24));
            render(&mut a, bounds, *ty, *state);
            render(&mut b, bounds, *ty, *state);
            render(&mut b, bounds, *ty, *state);
            assert_eq!(a, b, "{ty} / {state}");

            let mut a = PixmapSurface::new(Size(32, 24)).unwrap();
            let mut b = PixmapSurface::new(Size(32, 24)).unwrap();
            render(&mut a, bounds, *ty, *state);
            render(&mut b, bounds, *ty, *state);
            assert_eq!(a.pixmap().data(), b.pixmap().data(), "{ty} / {state}");
        }
    }
}

#[test]
fn states_are_distinguishable() {
    init();
    let sizes = [Size(1, 1), Size(3, 2), Size(16, 16), Size(40, 12), Size(9, 33)];
    for size in sizes {
        let bounds = Rect::new(Coord(5, 4), size);
        let at = marker_pixel(bounds).unwrap();
        for ty in ControlType::ALL {
            for state in ControlState::ALL {
                let mut px = pixels(Size(48, 40));
                render(&mut px, bounds, *ty, *state);
                let col = px.pixel(at.0, at.1).unwrap();
                assert_eq!(
                    StateColors::MARKER.decode(col),
                    Some(*state),
                    "{ty} / {state} at {size:?}"
                );

                let mut surface = PixmapSurface::new(Size(48, 40)).unwrap();
                render(&mut surface, bounds, *ty, *state);
                let col = surface.pixel(at.0, at.1).unwrap();
                assert_eq!(StateColors::MARKER.decode(col), Some(*state));
            }
        }
    }
}

#[test]
fn drawing_stays_within_bounds() {
    init();
    let bounds = Rect::from_ltrb(8, 6, 28, 20);
    for ty in ControlType::ALL {
        for state in ControlState::ALL {
            let mut px = pixels(Size(40, 30));
            render(&mut px, bounds, *ty, *state);
            assert_untouched_outside(&px, bounds, &format!("{ty} / {state}"));
        }
    }

    let mut px = pixels(Size(40, 30));
    let mut control =
        ThemeControl::new(&mut px, bounds, ControlType::TextField, ControlState::Focused);
    control.render_text_field(true, true, Rgba8Srgb::WHITE);
    control.render_progress_bar(Rect::from_ltrb(-10, -10, 50, 50));
    assert_untouched_outside(&px, bounds, "text field / progress bar");
}

#[test]
fn pixmap_stays_within_bounds() {
    init();
    let bounds = Rect::from_ltrb(8, 6, 28, 20);
    let sentinel = SENTINEL;
    for ty in ControlType::ALL {
        let mut surface = PixmapSurface::new(Size(40, 30)).unwrap();
        surface.clear(sentinel);
        render(&mut surface, bounds, *ty, ControlState::Hover);
        for y in 0..30 {
            for x in 0..40 {
                if !bounds.contains(Coord(x, y)) {
                    assert_eq!(surface.pixel(x, y), Some(sentinel), "{ty}: ({x}, {y})");
                }
            }
        }
    }
}

#[test]
fn unknown_always_paints() {
    init();
    let bounds = Rect::from_ltrb(0, 0, 12, 12);
    for (ty, state) in [
        (ControlType::Unknown, ControlState::Normal),
        (ControlType::PushButton, ControlState::Unknown),
        (ControlType::Unknown, ControlState::Unknown),
        (ControlType::from_raw(999), ControlState::from_raw(999)),
    ] {
        let mut px = pixels(Size(12, 12));
        render(&mut px, bounds, ty, state);
        assert!(px.data().iter().any(|c| *c != SENTINEL), "{ty} / {state}");
    }
}

#[test]
fn empty_bounds_are_ignored() {
    init();
    let mut px = pixels(Size(10, 10));
    for bounds in [Rect::from_ltrb(2, 2, 2, 8), Rect::new(Coord(2, 2), Size(5, -3))] {
        render(&mut px, bounds, ControlType::PushButton, ControlState::Normal);
        let mut control =
            ThemeControl::new(&mut px, bounds, ControlType::TextField, ControlState::Normal);
        control.render_text_field(true, true, Rgba8Srgb::WHITE);
        control.render_progress_bar(Rect::from_ltrb(0, 0, 10, 10));
    }
    assert!(px.data().iter().all(|c| *c == SENTINEL));
}

#[test]
fn text_field_options() {
    init();
    let bounds = Rect::from_ltrb(2, 2, 30, 14);
    let white = Rgba8Srgb::WHITE;
    let field = |draw_edges: bool, fill: bool| {
        let mut px = pixels(Size(32, 16));
        ThemeControl::new(&mut px, bounds, ControlType::TextField, ControlState::Normal)
            .render_text_field(draw_edges, fill, white);
        px
    };

    let px = field(true, true);
    assert_eq!(px.pixel(2, 2), Some(Rgba8Srgb::BLACK));
    assert_eq!(px.pixel(29, 13), Some(Rgba8Srgb::BLACK));
    assert_eq!(px.pixel(15, 8), Some(white));

    let px = field(true, false);
    assert_eq!(px.pixel(2, 8), Some(Rgba8Srgb::BLACK));
    let inner = bounds.shrink(1);
    for y in 0..16 {
        for x in 0..32 {
            let expected = if inner.contains(Coord(x, y)) || !bounds.contains(Coord(x, y)) {
                SENTINEL
            } else {
                Rgba8Srgb::BLACK
            };
            assert_eq!(px.pixel(x, y), Some(expected), "({x}, {y})");
        }
    }

    let px = field(false, true);
    for y in 2..14 {
        for x in 2..30 {
            assert_eq!(px.pixel(x, y), Some(white));
        }
    }

    let px = field(false, false);
    assert!(px.data().iter().all(|c| *c == SENTINEL));
}

#[test]
fn progress_bar_fill_is_clipped() {
    init();
    let mut px = pixels(Size(160, 30));
    let bounds = Rect::from_ltrb(0, 0, 100, 20);
    ThemeControl::new(&mut px, bounds, ControlType::ProgressBar, ControlState::Normal)
        .render_progress_bar(Rect::from_ltrb(0, 0, 150, 20));

    assert_eq!(px.pixel(50, 10), Some(Rgba8Srgb::BLACK));
    assert_eq!(px.pixel(99, 10), Some(Rgba8Srgb::BLACK));
    assert_untouched_outside(&px, bounds, "progress bar");
}

#[test]
fn progress_bar_partial() {
    init();
    let mut px = pixels(Size(100, 20));
    let bounds = Rect::from_ltrb(0, 0, 100, 20);
    ThemeControl::new(&mut px, bounds, ControlType::ProgressBar, ControlState::Normal)
        .render_progress_bar(Rect::from_ltrb(0, 0, 40, 20));

    let bg = StateColors::BACKGROUND.normal;
    assert_eq!(px.pixel(20, 10), Some(Rgba8Srgb::BLACK));
    assert_eq!(px.pixel(70, 10), Some(bg));
    // track frame
    assert_eq!(px.pixel(70, 0), Some(Rgba8Srgb::BLACK));
}

#[test]
fn custom_config() {
    init();
    let mut config = Config::DEFAULT;
    config.colors.marker.hover = Rgba8Srgb::rgb(0x12, 0x34, 0x56);
    config.colors.background.hover = Rgba8Srgb::rgb(0xfe, 0xdc, 0xba);
    config.dims.marker_length = 1;
    config.validate().unwrap();

    let mut px = pixels(Size(20, 20));
    let bounds = Rect::from_ltrb(0, 0, 20, 20);
    ThemeControl::with_config(
        &mut px,
        bounds,
        ControlType::HorizontalScrollTrackBack,
        ControlState::Hover,
        &config,
    )
    .render();

    assert_eq!(px.pixel(0, 0), Some(config.colors.marker.hover));
    assert_eq!(config.colors.marker.decode(px.pixel(0, 0).unwrap()), Some(ControlState::Hover));
    // a longer marker would have covered (1, 1)
    assert_eq!(px.pixel(1, 1), Some(config.colors.background.hover));
    assert_eq!(px.pixel(0, 5), Some(Rgba8Srgb::BLACK));
    assert_eq!(px.pixel(10, 10), Some(config.colors.background.hover));
}

#[test]
fn radio_and_arrow_shapes() {
    init();
    let bounds = Rect::from_ltrb(0, 0, 16, 16);

    let mut px = pixels(Size(16, 16));
    render(&mut px, bounds, ControlType::CheckedRadio, ControlState::Normal);
    // outside the circle
    assert_eq!(px.pixel(15, 15), Some(SENTINEL));
    // ring
    assert_eq!(px.pixel(0, 8), Some(Rgba8Srgb::BLACK));
    // between ring and dot
    assert_eq!(px.pixel(2, 8), Some(StateColors::BACKGROUND.normal));
    // dot
    assert_eq!(px.pixel(8, 8), Some(Rgba8Srgb::BLACK));

    let mut px = pixels(Size(16, 16));
    render(&mut px, bounds, ControlType::RightArrow, ControlState::Normal);
    // apex on the right, base on the left
    assert_eq!(px.pixel(15, 7), Some(Rgba8Srgb::BLACK));
    assert_eq!(px.pixel(0, 14), Some(Rgba8Srgb::BLACK));
    assert_eq!(px.pixel(15, 1), Some(SENTINEL));
}

#[test]
fn valid_configs_keep_markers_decodable() {
    init();
    let bounds = Rect::from_ltrb(0, 0, 16, 16);

    let mut config = Config::DEFAULT;
    config.colors.marker.hover = Rgba8Srgb::rgba(0, 0, 255, 128);
    assert!(config.validate().is_err());

    config.colors.marker.hover = Rgba8Srgb::rgb(0, 0, 128);
    config.validate().unwrap();
    for ty in ControlType::ALL {
        let mut px = pixels(Size(16, 16));
        ThemeControl::with_config(&mut px, bounds, *ty, ControlState::Hover, &config).render();
        let col = px.pixel(0, 0).unwrap();
        assert_eq!(config.colors.marker.decode(col), Some(ControlState::Hover), "{ty}");
    }
}
