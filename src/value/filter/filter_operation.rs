use super::super::blend::*;
use super::super::color::*;

use serde::{Serialize, Deserialize};

use std::mem;

///
/// A single filter effect that can be applied to a rendered layer
///
/// Amounts follow the CSS filter functions: for example `Grayscale(1.0)` is fully grey, and
/// `Opacity(0.5)` is half transparent. Angles are in degrees and lengths are in pixels.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum FilterOperation {
    Grayscale(f64),
    Sepia(f64),
    Saturate(f64),
    HueRotate(f64),
    Invert(f64),
    Brightness(f64),
    Contrast(f64),
    Opacity(f64),

    /// Gaussian blur with the specified standard deviation
    Blur(f64),

    /// A shadow of the layer's alpha channel, offset and blurred
    DropShadow { offset: (f64, f64), blur: f64, color: Color },

    /// Magnifies the layer by `amount`, with the magnification fading out over `inset` pixels at the edges
    Zoom { amount: f64, inset: f64 },

    /// Brightness that adds to each colour channel rather than scaling it
    SaturatingBrightness(f64)
}

impl FilterOperation {
    ///
    /// Returns the operation of the same kind as this one that has no effect
    ///
    pub fn no_op(&self) -> FilterOperation {
        use self::FilterOperation::*;

        match self {
            Grayscale(_)            => Grayscale(0.0),
            Sepia(_)                => Sepia(0.0),
            Saturate(_)             => Saturate(1.0),
            HueRotate(_)            => HueRotate(0.0),
            Invert(_)               => Invert(0.0),
            Brightness(_)           => Brightness(1.0),
            Contrast(_)             => Contrast(1.0),
            Opacity(_)              => Opacity(1.0),
            Blur(_)                 => Blur(0.0),
            DropShadow { .. }       => DropShadow { offset: (0.0, 0.0), blur: 0.0, color: Color::transparent() },
            Zoom { .. }             => Zoom { amount: 1.0, inset: 0.0 },
            SaturatingBrightness(_) => SaturatingBrightness(0.0)
        }
    }

    ///
    /// True if this operation is of the same kind as another one (regardless of the amount)
    ///
    pub fn is_same_kind(&self, other: &FilterOperation) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    ///
    /// True if this operation can change where pixels are drawn (and so can make the layer larger)
    ///
    pub fn moves_pixels(&self) -> bool {
        use self::FilterOperation::*;

        match self {
            Blur(_) | DropShadow { .. } | Zoom { .. }   => true,
            _                                           => false
        }
    }

    ///
    /// True if this operation can change the transparency of the layer
    ///
    pub fn affects_opacity(&self) -> bool {
        use self::FilterOperation::*;

        match self {
            Opacity(_) | Blur(_) | DropShadow { .. } | Zoom { .. }  => true,
            _                                                       => false
        }
    }

    ///
    /// Clamps the amounts in this operation to the range that's valid for its kind
    ///
    fn clamped(self) -> FilterOperation {
        use self::FilterOperation::*;

        let unit = |amount: f64| amount.max(0.0).min(1.0);

        match self {
            Grayscale(amount)       => Grayscale(unit(amount)),
            Sepia(amount)           => Sepia(unit(amount)),
            Invert(amount)          => Invert(unit(amount)),
            Opacity(amount)         => Opacity(unit(amount)),

            Saturate(amount)                => Saturate(amount.max(0.0)),
            Brightness(amount)              => Brightness(amount.max(0.0)),
            SaturatingBrightness(amount)    => SaturatingBrightness(amount.max(0.0)),
            Contrast(amount)                => Contrast(amount.max(0.0)),
            Blur(amount)                    => Blur(amount.max(0.0)),

            DropShadow { offset, blur, color }  => DropShadow { offset, blur: blur.max(0.0), color },
            Zoom { amount, inset }              => Zoom { amount: amount.max(1.0), inset: inset.max(0.0) },

            HueRotate(_)            => self
        }
    }

    ///
    /// Blends two filter operations of the same kind
    ///
    /// A missing operation is treated as the no-op of the other one's kind. Returns None if both operations are
    /// missing or if they are of different kinds.
    ///
    pub fn blend_operations(from: Option<&FilterOperation>, to: Option<&FilterOperation>, progress: f64) -> Option<FilterOperation> {
        use self::FilterOperation::*;

        let (from, to) = match (from, to) {
            (None, None)            => return None,
            (Some(from), Some(to))  => (*from, *to),
            (Some(from), None)      => (*from, from.no_op()),
            (None, Some(to))        => (to.no_op(), *to)
        };

        let blended = match (from, to) {
            (Grayscale(a), Grayscale(b))                        => Grayscale(b.blend(&a, progress)),
            (Sepia(a), Sepia(b))                                => Sepia(b.blend(&a, progress)),
            (Saturate(a), Saturate(b))                          => Saturate(b.blend(&a, progress)),
            (HueRotate(a), HueRotate(b))                        => HueRotate(b.blend(&a, progress)),
            (Invert(a), Invert(b))                              => Invert(b.blend(&a, progress)),
            (Brightness(a), Brightness(b))                      => Brightness(b.blend(&a, progress)),
            (Contrast(a), Contrast(b))                          => Contrast(b.blend(&a, progress)),
            (Opacity(a), Opacity(b))                            => Opacity(b.blend(&a, progress)),
            (Blur(a), Blur(b))                                  => Blur(b.blend(&a, progress)),
            (SaturatingBrightness(a), SaturatingBrightness(b))  => SaturatingBrightness(b.blend(&a, progress)),

            (DropShadow { offset: from_offset, blur: from_blur, color: from_color }, DropShadow { offset: to_offset, blur: to_blur, color: to_color }) => {
                DropShadow {
                    offset: (to_offset.0.blend(&from_offset.0, progress), to_offset.1.blend(&from_offset.1, progress)),
                    blur:   to_blur.blend(&from_blur, progress),
                    color:  to_color.blend(&from_color, progress)
                }
            }

            (Zoom { amount: from_amount, inset: from_inset }, Zoom { amount: to_amount, inset: to_inset }) => {
                Zoom {
                    amount: to_amount.blend(&from_amount, progress),
                    inset:  to_inset.blend(&from_inset, progress)
                }
            }

            _ => return None
        };

        Some(blended.clamped())
    }
}
