//! The clock application.
//!
//! One scheduler pass per polling quantum: the pass advances the redraw
//! cadence with the measured frame delta, and only when the cadence fires
//! (or the viewport changed) does it sample the wall clock and rebuild the
//! draw list. Every pass re-presents the current list, so resize feedback is
//! immediate while the expensive work stays at one rebuild per second.

use anyhow::{Context, Result};

use quarz_engine::coords::Vec2;
use quarz_engine::core::{App, AppControl, FrameCtx};
use quarz_engine::render::shapes::{CircleRenderer, PolygonRenderer, TextRenderer};
use quarz_engine::paint::Stroke;
use quarz_engine::scene::shapes::TextAnchor;
use quarz_engine::scene::{DrawList, ZIndex};
use quarz_engine::text::{FontId, FontSystem};
use quarz_engine::time::TickCadence;

use crate::audio::TickChannel;
use crate::dial::{
    Dial, format_digital_time, hand_polygon, hour_angle, minute_angle, numeral_position,
    second_angle,
};
use crate::font;
use crate::sample::{SampleFeed, SystemClock, TimeSample};
use crate::theme::ClockTheme;

// Z layers, back to front. Hands share one layer; insertion order
// (hour, minute, second) settles who is on top.
const Z_FACE: ZIndex = ZIndex::new(0);
const Z_CAP: ZIndex = ZIndex::new(1);
const Z_NUMERALS: ZIndex = ZIndex::new(2);
const Z_HANDS: ZIndex = ZIndex::new(3);
const Z_READOUT: ZIndex = ZIndex::new(4);

pub struct ClockApp {
    theme: ClockTheme,
    feed: SampleFeed<SystemClock>,
    cadence: TickCadence,

    font_system: FontSystem,
    font: FontId,

    draw_list: DrawList,
    circle_renderer: CircleRenderer,
    polygon_renderer: PolygonRenderer,
    text_renderer: TextRenderer,

    tick_audio: Option<TickChannel>,

    last_viewport: (f32, f32),
    scene_stale: bool,
}

impl ClockApp {
    /// Loads startup resources (font, audio device). Failure here is fatal;
    /// the binary reports it and exits non-zero.
    pub fn new(theme: ClockTheme) -> Result<Self> {
        let bytes = font::load_system_font_bytes().context("clock font unavailable")?;

        let mut font_system = FontSystem::new();
        let font = font_system
            .load_font(&bytes)
            .map_err(anyhow::Error::new)
            .context("failed to parse clock font")?;

        let tick_audio = if theme.tick_sound {
            Some(TickChannel::new().context("tick sound unavailable")?)
        } else {
            None
        };

        let mut feed = SampleFeed::new(SystemClock);
        feed.refresh();

        Ok(Self {
            theme,
            feed,
            cadence: TickCadence::per_second(),
            font_system,
            font,
            draw_list: DrawList::new(),
            circle_renderer: CircleRenderer::new(),
            polygon_renderer: PolygonRenderer::new(),
            text_renderer: TextRenderer::new(),
            tick_audio,
            last_viewport: (0.0, 0.0),
            scene_stale: true,
        })
    }
}

impl App for ClockApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let fired = self.cadence.advance(ctx.time.dt);
        let viewport = ctx.window.logical_size();
        let resized = viewport != self.last_viewport;

        if fired > 0 {
            // One sample per redraw cycle, so all hands agree. A backlog
            // collapse loses nothing: the sample is absolute.
            self.feed.refresh();
            if let Some(audio) = &self.tick_audio {
                audio.trigger();
            }
        }

        if fired > 0 || resized || self.scene_stale {
            self.last_viewport = viewport;
            build_scene(
                &mut self.draw_list,
                &self.theme,
                self.font,
                self.feed.last(),
                viewport,
            );
            self.scene_stale = false;
        }

        let Self {
            theme,
            draw_list,
            circle_renderer,
            polygon_renderer,
            text_renderer,
            font_system,
            ..
        } = self;

        // Pass order is circles, numerals, hands: hands overlap the numeral
        // ring and must paint over it, as on a physical clock.
        ctx.render(theme.background, |rctx, target| {
            circle_renderer.render(rctx, target, draw_list);
            text_renderer.render(rctx, target, draw_list, font_system);
            polygon_renderer.render(rctx, target, draw_list);
        })
    }
}

/// Rebuilds the full draw list for one time sample and viewport.
fn build_scene(
    list: &mut DrawList,
    theme: &ClockTheme,
    font: FontId,
    t: TimeSample,
    (viewport_w, viewport_h): (f32, f32),
) {
    let dial = Dial::fit(viewport_w, viewport_h, theme.margin);

    list.clear();

    list.push_circle_outline(
        Z_FACE,
        dial.center,
        dial.radius,
        Stroke::new(theme.ring_width, theme.ring_color),
    );
    list.push_solid_circle(Z_CAP, dial.center, theme.center_cap_radius, theme.center_cap_color);

    for index in 1..=12 {
        list.push_text(
            Z_NUMERALS,
            index.to_string(),
            font,
            theme.numeral_size,
            theme.numeral_color,
            numeral_position(index, dial.center, dial.radius, theme.numeral_inset),
            TextAnchor::Center,
        );
    }

    for (style, angle) in [
        (theme.hour, hour_angle(t)),
        (theme.minute, minute_angle(t)),
        (theme.second, second_angle(t)),
    ] {
        let vertices = hand_polygon(
            dial.center,
            angle,
            style.length_frac * dial.radius,
            style.base_width,
            style.tip_width,
        );
        list.push_polygon(Z_HANDS, vertices, style.color);
    }

    if theme.digital_readout {
        list.push_text(
            Z_READOUT,
            format_digital_time(t),
            font,
            theme.digital_size,
            theme.digital_color,
            Vec2::new(viewport_w * 0.5, theme.digital_size),
            TextAnchor::Center,
        );
    }
}

#[cfg(test)]
mod tests {
    use quarz_engine::scene::{DrawCmd, DrawList};
    use quarz_engine::text::FontId;

    use super::build_scene;
    use crate::sample::TimeSample;
    use crate::theme::ClockTheme;

    fn built_scene(theme: &ClockTheme) -> DrawList {
        let mut list = DrawList::new();
        build_scene(&mut list, theme, FontId(0), TimeSample::new(14, 30, 45), (800.0, 800.0));
        list
    }

    fn count(list: &mut DrawList, pred: fn(&DrawCmd) -> bool) -> usize {
        list.iter_in_paint_order().filter(|item| pred(&item.cmd)).count()
    }

    #[test]
    fn scene_contains_all_dial_elements() {
        let mut list = built_scene(&ClockTheme::default());

        // Ring + center cap.
        assert_eq!(count(&mut list, |c| matches!(c, DrawCmd::Circle(_))), 2);
        // Three hands.
        assert_eq!(count(&mut list, |c| matches!(c, DrawCmd::Polygon(_))), 3);
        // Twelve numerals + digital readout.
        assert_eq!(count(&mut list, |c| matches!(c, DrawCmd::Text(_))), 13);
    }

    #[test]
    fn disabling_the_readout_drops_one_text_command() {
        let theme = ClockTheme {
            digital_readout: false,
            ..ClockTheme::default()
        };
        let mut list = built_scene(&theme);
        assert_eq!(count(&mut list, |c| matches!(c, DrawCmd::Text(_))), 12);
    }

    #[test]
    fn hands_paint_hour_then_minute_then_second() {
        let theme = ClockTheme::default();
        let mut list = built_scene(&theme);

        let hand_colors: Vec<_> = list
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Polygon(p) => Some(p.fill),
                _ => None,
            })
            .collect();

        assert_eq!(
            hand_colors,
            vec![theme.hour.color, theme.minute.color, theme.second.color]
        );
    }

    #[test]
    fn rebuild_replaces_rather_than_appends() {
        let theme = ClockTheme::default();
        let mut list = built_scene(&theme);
        build_scene(&mut list, &theme, FontId(0), TimeSample::new(15, 0, 0), (800.0, 800.0));
        assert_eq!(list.iter_in_paint_order().count(), 18);
    }
}
