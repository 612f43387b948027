use super::blend::*;

use serde::{Serialize, Deserialize};

///
/// Representation of a colour
///
/// Components are in the range 0-1
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    Rgba(f32, f32, f32, f32)
}

impl Color {
    ///
    /// The fully transparent colour
    ///
    pub fn transparent() -> Color {
        Color::Rgba(0.0, 0.0, 0.0, 0.0)
    }

    ///
    /// Creates a colour from a packed 0xAARRGGBB value
    ///
    pub fn from_argb(argb: u32) -> Color {
        let a = ((argb >> 24) & 0xff) as f32;
        let r = ((argb >> 16) & 0xff) as f32;
        let g = ((argb >> 8) & 0xff) as f32;
        let b = (argb & 0xff) as f32;

        Color::Rgba(r / 255.0, g / 255.0, b / 255.0, a / 255.0)
    }

    ///
    /// Packs this colour into a 0xAARRGGBB value
    ///
    pub fn to_argb(&self) -> u32 {
        let (r, g, b, a) = self.to_rgba();
        let to_byte      = |component: f32| (component.max(0.0).min(1.0) * 255.0).round() as u32;

        (to_byte(a) << 24) | (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
    }

    ///
    /// Returns this colour as RGBA components
    ///
    pub fn to_rgba(&self) -> (f32, f32, f32, f32) {
        match self {
            &Color::Rgba(r, g, b, a) => (r, g, b, a)
        }
    }

    ///
    /// Returns a new colour that's the same as this one except with a different alpha value
    ///
    pub fn with_alpha(&self, new_alpha: f32) -> Color {
        match self {
            &Color::Rgba(r, g, b, _) => Color::Rgba(r, g, b, new_alpha)
        }
    }
}

///
/// Blends a colour component in premultiplied space, then divides the alpha back out
///
#[inline]
fn blend_component(from: f32, to: f32, from_alpha: f32, to_alpha: f32, blended_alpha: f32, progress: f32) -> f32 {
    let from_premultiplied  = from * from_alpha;
    let to_premultiplied    = to * to_alpha;
    let blended             = from_premultiplied + (to_premultiplied - from_premultiplied) * progress;

    (blended / blended_alpha).max(0.0).min(1.0)
}

impl Blend for Color {
    fn blend(&self, from: &Color, progress: f64) -> Color {
        let progress            = progress as f32;
        let (fr, fg, fb, fa)    = from.to_rgba();
        let (tr, tg, tb, ta)    = self.to_rgba();

        let blended_alpha       = fa + (ta - fa) * progress;
        if blended_alpha <= 0.0 {
            return Color::transparent();
        }
        let blended_alpha       = blended_alpha.min(1.0);

        Color::Rgba(
            blend_component(fr, tr, fa, ta, blended_alpha, progress),
            blend_component(fg, tg, fa, ta, blended_alpha, progress),
            blend_component(fb, tb, fa, ta, blended_alpha, progress),
            blended_alpha
        )
    }
}
