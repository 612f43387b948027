///
/// Trait implemented by values that can be interpolated between two keyframes
///
/// The blend runs from `from` to `self`: a progress of 0 produces `from` and a progress of 1
/// produces `self`. Progress may lie outside of the 0-1 range when a timing function overshoots.
/// Not every type blends commutatively (transform lists are blended through matrix decomposition,
/// for instance), so the direction matters.
///
pub trait Blend : Sized {
    ///
    /// Blends from another value towards this one
    ///
    fn blend(&self, from: &Self, progress: f64) -> Self;
}

impl Blend for f64 {
    #[inline]
    fn blend(&self, from: &f64, progress: f64) -> f64 {
        from + (self - from) * progress
    }
}
