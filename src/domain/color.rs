use super::policy::ColorPolicy;

/// Bodies per red->blue gradient cycle
pub const GRADIENT_PERIOD: usize = 64;
/// Speed mapped to full red in `ColorPolicy::Speed`
pub const SPEED_FOR_FULL_RED: f32 = 1000.0;

pub const RED: Color = Color { r: 255, g: 0, b: 0 };
pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

/// Packed RGB, 3 bytes per body in the color buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Linear blend, t clamped to [0, 1]
    pub fn lerp(a: Color, b: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
        Color {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
        }
    }
}

impl ColorPolicy {
    pub fn color_for(self, index: usize, speed: f32) -> Color {
        match self {
            ColorPolicy::IndexGradient => {
                let t = (index % GRADIENT_PERIOD) as f32 / (GRADIENT_PERIOD - 1) as f32;
                Color::lerp(RED, BLUE, t)
            }
            ColorPolicy::Speed => Color::lerp(BLUE, RED, speed / SPEED_FOR_FULL_RED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_starts_red_and_ends_blue() {
        assert_eq!(ColorPolicy::IndexGradient.color_for(0, 0.0), RED);
        assert_eq!(ColorPolicy::IndexGradient.color_for(GRADIENT_PERIOD - 1, 0.0), BLUE);
        assert_eq!(ColorPolicy::IndexGradient.color_for(GRADIENT_PERIOD, 0.0), RED);
    }

    #[test]
    fn speed_policy_saturates() {
        assert_eq!(ColorPolicy::Speed.color_for(3, 0.0), BLUE);
        assert_eq!(ColorPolicy::Speed.color_for(3, 5000.0), RED);
    }
}
