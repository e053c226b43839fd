//! Typed fixed-length vectors and the small numeric toolbox behind scoring.
//!
//! Accumulated contributions are integral and live in one of three wrapper
//! types, each indexed by its enumeration ([`EffectKind`], [`Category`],
//! [`Taste`]) so a dimension can never be addressed with a bare integer
//! from the wrong axis. Scoring math happens on `[f64; N]` views produced
//! by [`StrengthVector::to_f64`] and friends, using the free functions at
//! the bottom of this module.

use std::ops::{Index, IndexMut};

use strum::{EnumCount, IntoEnumIterator};

use crate::kinds::{Category, EffectKind, Taste};

macro_rules! enum_vector {
    ($(#[$doc:meta])* $name:ident, $key:ty, $count:expr, $pairs:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(from = $pairs, into = $pairs))]
        pub struct $name([i32; $count]);

        impl $name {
            /// The all-zero vector.
            pub const ZERO: Self = Self([0; $count]);

            /// Number of dimensions.
            pub const LEN: usize = $count;

            /// Sum of `self` and `other`, dimension by dimension.
            pub fn add(&self, other: &Self) -> Self {
                let mut out = *self;
                for i in 0..$count {
                    out.0[i] += other.0[i];
                }
                out
            }

            /// Float view for scoring math.
            pub fn to_f64(&self) -> [f64; $count] {
                let mut out = [0.0; $count];
                for i in 0..$count {
                    out[i] = self.0[i] as f64;
                }
                out
            }

            /// Iterate `(dimension, amount)` pairs in canonical order.
            pub fn entries(&self) -> impl Iterator<Item = ($key, i32)> + '_ {
                <$key>::iter().map(move |k| (k, self[k]))
            }

            /// True when every dimension is zero.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|&v| v == 0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl Index<$key> for $name {
            type Output = i32;

            fn index(&self, key: $key) -> &i32 {
                &self.0[key as usize]
            }
        }

        impl IndexMut<$key> for $name {
            fn index_mut(&mut self, key: $key) -> &mut i32 {
                &mut self.0[key as usize]
            }
        }

        impl From<Vec<($key, i32)>> for $name {
            fn from(entries: Vec<($key, i32)>) -> Self {
                let mut out = Self::ZERO;
                for (key, amount) in entries {
                    out[key] += amount;
                }
                out
            }
        }

        impl From<$name> for Vec<($key, i32)> {
            fn from(vector: $name) -> Self {
                vector.entries().filter(|&(_, v)| v != 0).collect()
            }
        }

        impl FromIterator<($key, i32)> for $name {
            fn from_iter<I: IntoIterator<Item = ($key, i32)>>(iter: I) -> Self {
                let mut out = Self::ZERO;
                for (key, amount) in iter {
                    out[key] += amount;
                }
                out
            }
        }
    };
}

enum_vector!(
    /// Per-kind effect strength contributions (10 dimensions).
    StrengthVector,
    EffectKind,
    EffectKind::COUNT,
    "Vec<(EffectKind, i32)>"
);

enum_vector!(
    /// Per-category contributions (18 dimensions).
    CategoryVector,
    Category,
    Category::COUNT,
    "Vec<(Category, i32)>"
);

enum_vector!(
    /// Per-taste contributions (5 dimensions).
    TasteVector,
    Taste,
    Taste::COUNT,
    "Vec<(Taste, i32)>"
);

// ============================================================================
// Float math utilities
// ============================================================================

/// Dot product of two equal-length float vectors.
pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    let mut sum = 0.0;
    for i in 0..N {
        sum += a[i] * b[i];
    }
    sum
}

/// Euclidean norm.
pub fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    dot(v, v).sqrt()
}

/// `a - b`, dimension by dimension.
pub fn diff<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    let mut out = [0.0; N];
    for i in 0..N {
        out[i] = a[i] - b[i];
    }
    out
}

/// Keeps positive components, zeroes the rest.
pub fn positive_part<const N: usize>(v: &[f64; N]) -> [f64; N] {
    let mut out = [0.0; N];
    for i in 0..N {
        out[i] = v[i].max(0.0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_enum_driven() {
        let mut v = StrengthVector::ZERO;
        v[EffectKind::Lure] = 12;
        assert_eq!(v[EffectKind::Lure], 12);
        assert_eq!(v[EffectKind::Brood], 0);
        assert!(!v.is_zero());
    }

    #[test]
    fn add_accumulates_per_dimension() {
        let a: CategoryVector = [(Category::Fire, 60)].into_iter().collect();
        let b: CategoryVector = [(Category::Fire, 30), (Category::Dragon, 20)]
            .into_iter()
            .collect();
        let sum = a.add(&b);
        assert_eq!(sum[Category::Fire], 90);
        assert_eq!(sum[Category::Dragon], 20);
    }

    #[test]
    fn sparse_entries_round_trip() {
        let v: TasteVector = [(Taste::Salty, 10), (Taste::Spicy, 10)].into_iter().collect();
        let pairs: Vec<(Taste, i32)> = v.into();
        assert_eq!(pairs, vec![(Taste::Salty, 10), (Taste::Spicy, 10)]);
        let back: TasteVector = pairs.into();
        assert_eq!(back, v);
    }

    #[test]
    fn norm_and_dot_basics() {
        let a = [3.0, 4.0];
        assert_eq!(norm(&a), 5.0);
        let b = [1.0, 0.0];
        assert_eq!(dot(&a, &b), 3.0);
        assert_eq!(diff(&a, &b), [2.0, 4.0]);
        assert_eq!(positive_part(&[-1.0, 2.0]), [0.0, 2.0]);
    }
}
