//! In-code theme configuration.

use quarz_engine::paint::Color;

/// Appearance of one clock hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    /// Hand length as a fraction of the dial radius.
    pub length_frac: f32,
    /// Width at the pivot, logical pixels.
    pub base_width: f32,
    /// Width at the tip, logical pixels. Zero is a triangular point.
    pub tip_width: f32,
    pub color: Color,
}

/// Full clock appearance. Optional capabilities (digital readout, tick
/// sound) are toggles here rather than separate program variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockTheme {
    /// Window clear color.
    pub background: Color,

    /// Outer dial ring.
    pub ring_color: Color,
    pub ring_width: f32,

    /// Small disc at the hand pivot, drawn under the hands.
    pub center_cap_radius: f32,
    pub center_cap_color: Color,

    pub hour: HandStyle,
    pub minute: HandStyle,
    pub second: HandStyle,

    /// Distance from the ring to the numeral centers, logical pixels.
    pub numeral_inset: f32,
    pub numeral_size: f32,
    pub numeral_color: Color,

    pub digital_readout: bool,
    pub digital_size: f32,
    pub digital_color: Color,

    pub tick_sound: bool,

    /// Space between the dial and the nearest window edge.
    pub margin: f32,
}

impl Default for ClockTheme {
    fn default() -> Self {
        Self {
            background: Color::BLACK,

            ring_color: Color::WHITE,
            ring_width: 2.0,

            center_cap_radius: 10.0,
            center_cap_color: Color::WHITE,

            hour: HandStyle {
                length_frac: 0.50,
                base_width: 16.0,
                tip_width: 3.0,
                color: Color::RED,
            },
            minute: HandStyle {
                length_frac: 0.65,
                base_width: 12.0,
                tip_width: 2.0,
                color: Color::GREEN,
            },
            second: HandStyle {
                length_frac: 0.90,
                base_width: 8.0,
                tip_width: 1.0,
                color: Color::WHITE,
            },

            numeral_inset: 25.0,
            numeral_size: 30.0,
            numeral_color: Color::WHITE,

            digital_readout: true,
            digital_size: 24.0,
            digital_color: Color::WHITE,

            tick_sound: true,

            margin: 150.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClockTheme;

    #[test]
    fn default_hand_lengths_are_ordered() {
        let t = ClockTheme::default();
        assert!(t.hour.length_frac < t.minute.length_frac);
        assert!(t.minute.length_frac < t.second.length_frac);
        assert!(t.second.length_frac <= 1.0);
    }

    #[test]
    fn default_hands_taper_toward_the_tip() {
        let t = ClockTheme::default();
        for h in [t.hour, t.minute, t.second] {
            assert!(h.tip_width <= h.base_width);
            assert!(h.tip_width >= 0.0);
        }
    }
}
