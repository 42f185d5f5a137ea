//! Value capabilities required by grid interpolation.

/// A grid value that supports weighted accumulation.
///
/// Multilinear interpolation evaluates `sum_i w_i * v_i` over the corner
/// values of the cell containing the query point. Starting from
/// `Self::default()` (the additive identity), each corner contributes via
/// [`add_scaled`](Self::add_scaled).
///
/// Implemented for `f32`, `f64`, and fixed-size vectors of either with up
/// to four components.
pub trait Interpolable: Clone + Default {
    /// Accumulate `other * weight` into `self`.
    fn add_scaled(&mut self, other: &Self, weight: f64);
}

impl Interpolable for f64 {
    #[inline]
    fn add_scaled(&mut self, other: &Self, weight: f64) {
        *self += other * weight;
    }
}

impl Interpolable for f32 {
    #[inline]
    fn add_scaled(&mut self, other: &Self, weight: f64) {
        *self += (f64::from(*other) * weight) as f32;
    }
}

macro_rules! impl_interpolable_array {
    ($($n:literal),*) => {
        $(
            impl<T: Interpolable + Copy> Interpolable for [T; $n]
            where
                [T; $n]: Default,
            {
                #[inline]
                fn add_scaled(&mut self, other: &Self, weight: f64) {
                    for (acc, v) in self.iter_mut().zip(other.iter()) {
                        acc.add_scaled(v, weight);
                    }
                }
            }
        )*
    };
}

impl_interpolable_array!(1, 2, 3, 4);
