use core::{
    cmp::Ordering,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::error::Error;

/// An integer confined to an inclusive range, wrapping like an odometer
/// wheel.
///
/// A `Digit` always satisfies `min <= value <= max`. Arithmetic that
/// would push the value outside the range instead wraps it back in and
/// records a signed [cycle count](Digit::cycle_count): the number of full
/// times the digit went around. A negative cycle count means the digit
/// wrapped below its minimum, a positive one that it wrapped above its
/// maximum.
///
/// Wrapping is mandatory, never optional. There is no way to observe an
/// out-of-range value, and no magnitude of delta is an error. A single
/// [`Digit::plus`] call with a delta many multiples of the range computes
/// the multi-cycle wrap directly rather than looping.
///
/// # Immutability
///
/// A `Digit` is an immutable value type. Every arithmetic operation
/// returns a new `Digit` with the same range and a freshly computed value
/// and cycle count:
///
/// ```
/// use odo::Digit;
///
/// let months = Digit::spanning(1, 12)?;
/// let april = months.plus(3);
/// assert_eq!(months.value(), 1);
/// assert_eq!(april.value(), 4);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// For the mutable, unit-tagged variant used inside a
/// [`Moment`](crate::Moment), see [`Wheel`](crate::Wheel).
///
/// # Global limits
///
/// The range bounds themselves are confined to
/// [`Digit::MIN`]`..=`[`Digit::MAX`], which covers half of the `i64`
/// range on each side of zero. This guarantees that `max - min` can never
/// overflow, no matter which bounds are chosen.
///
/// # Equality
///
/// Two digits are equal when their values *and* ranges are equal. The
/// cycle count is a report about the most recent operation, not part of
/// the digit's identity, so it is ignored by `==` and by hashing.
#[derive(Clone, Copy, Debug)]
pub struct Digit {
    value: i64,
    min: i64,
    max: i64,
    cycles: i64,
}

impl Digit {
    /// The smallest allowed minimum value of a digit. (inclusive)
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// assert_eq!(Digit::MIN, (i64::MIN + 1) / 2);
    /// assert_eq!(Digit::MIN, -Digit::MAX);
    /// ```
    pub const MIN: i64 = (i64::MIN + 1) / 2;

    /// The largest allowed maximum value of a digit. (inclusive)
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// assert_eq!(Digit::MAX, (i64::MAX - 1) / 2);
    /// ```
    pub const MAX: i64 = (i64::MAX - 1) / 2;

    /// Creates a new digit spanning the entire global
    /// [`Digit::MIN`]`..=`[`Digit::MAX`] range, holding the given value.
    ///
    /// A value outside the global limits wraps like any other
    /// out-of-range value.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// let d = Digit::new(9);
    /// assert_eq!(d.value(), 9);
    /// assert_eq!(d.min(), Digit::MIN);
    /// assert_eq!(d.max(), Digit::MAX);
    ///
    /// // The global range is symmetric, so its edges wrap into each
    /// // other.
    /// let d = Digit::new(Digit::MAX).increment();
    /// assert_eq!(d.value(), Digit::MIN);
    /// assert_eq!(d.cycle_count(), 1);
    /// ```
    pub fn new(value: i64) -> Digit {
        Digit::new_ranged(i128::from(value), Digit::MIN, Digit::MAX)
    }

    /// Creates a new digit spanning the entire global range, holding `0`.
    pub fn zero() -> Digit {
        Digit::new(0)
    }

    /// Creates a new digit with the range `min..=max`, holding the given
    /// value.
    ///
    /// A value outside the range wraps, and the wrap is visible in the
    /// new digit's cycle count:
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// let d = Digit::ranged(0, 1, 12)?;
    /// assert_eq!(d.value(), 12);
    /// assert_eq!(d.cycle_count(), -1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// This returns an error when `min > max`, when `min` is less than
    /// [`Digit::MIN`] or when `max` is greater than [`Digit::MAX`].
    pub fn ranged(value: i64, min: i64, max: i64) -> Result<Digit, Error> {
        if min < Digit::MIN {
            return Err(Error::range("minimum", min, Digit::MIN, Digit::MAX));
        }
        if max > Digit::MAX {
            return Err(Error::range("maximum", max, Digit::MIN, Digit::MAX));
        }
        if min > max {
            return Err(Error::range("minimum", min, Digit::MIN, max));
        }
        Ok(Digit::new_ranged(i128::from(value), min, max))
    }

    /// Creates a new digit with the range `min..=max`, holding `min`.
    ///
    /// # Errors
    ///
    /// This returns an error whenever [`Digit::ranged`] would.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// let d = Digit::spanning(1, 12)?;
    /// assert_eq!(d.value(), 1);
    /// assert_eq!(d.range(), 12);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn spanning(min: i64, max: i64) -> Result<Digit, Error> {
        Digit::ranged(min, min, max)
    }

    /// Creates a new digit without validating the bounds.
    ///
    /// The caller must guarantee `Digit::MIN <= min <= max <= Digit::MAX`.
    /// The value is still wrapped into the range.
    pub(crate) fn new_ranged(raw: i128, min: i64, max: i64) -> Digit {
        debug_assert!(Digit::MIN <= min && min <= max && max <= Digit::MAX);
        let (value, cycles) = wrap(raw, min, max);
        Digit { value, min, max, cycles }
    }

    /// Returns the value of this digit.
    ///
    /// The value is guaranteed to be in the range `min..=max`.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns the number of times this digit wrapped during the
    /// operation that produced it.
    ///
    /// A freshly constructed in-range digit reports `0`. A negative count
    /// means the digit wrapped below its minimum, a positive one that it
    /// wrapped above its maximum.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// let seconds = Digit::ranged(50, 0, 59)?;
    /// // One wrap forward...
    /// assert_eq!(seconds.plus(15).cycle_count(), 1);
    /// // ...two wraps forward in a single operation...
    /// assert_eq!(seconds.plus(90).cycle_count(), 2);
    /// // ...and one wrap backward.
    /// assert_eq!(seconds.minus(51).cycle_count(), -1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn cycle_count(&self) -> i64 {
        self.cycles
    }

    /// Returns the minimum value of this digit's range. (inclusive)
    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Returns the maximum value of this digit's range. (inclusive)
    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Returns the size of this digit's range, that is,
    /// `max - min + 1`.
    ///
    /// The range is always at least `1`.
    #[inline]
    pub fn range(&self) -> i64 {
        // Global limits guarantee this cannot overflow.
        self.max - self.min + 1
    }

    /// Returns true when the given value lies within this digit's range.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// let months = Digit::spanning(1, 12)?;
    /// assert!(months.contains(1));
    /// assert!(months.contains(12));
    /// assert!(!months.contains(0));
    /// assert!(!months.contains(13));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns a new digit with this digit's value incremented by `1`.
    ///
    /// Incrementing past the maximum wraps to the minimum:
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// let d = Digit::ranged(12, 1, 12)?.increment();
    /// assert_eq!(d.value(), 1);
    /// assert_eq!(d.cycle_count(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn increment(self) -> Digit {
        self.plus(1)
    }

    /// Returns a new digit with this digit's value decremented by `1`.
    ///
    /// Decrementing past the minimum wraps to the maximum:
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// let d = Digit::ranged(1, 1, 12)?.decrement();
    /// assert_eq!(d.value(), 12);
    /// assert_eq!(d.cycle_count(), -1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn decrement(self) -> Digit {
        self.minus(1)
    }

    /// Returns a new digit with the given delta added to this digit's
    /// value.
    ///
    /// This never fails, for any delta. A delta bigger than the range
    /// wraps multiple times in one step, with the number of wraps
    /// reported by the result's cycle count:
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// let minutes = Digit::ranged(50, 0, 59)?;
    /// let later = minutes.plus(90);
    /// assert_eq!(later.value(), 20);
    /// assert_eq!(later.cycle_count(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn plus(self, delta: i64) -> Digit {
        let raw = i128::from(self.value) + i128::from(delta);
        Digit::new_ranged(raw, self.min, self.max)
    }

    /// Returns a new digit with the given delta subtracted from this
    /// digit's value.
    ///
    /// Like [`Digit::plus`], this never fails. Subtracting an exact
    /// multiple of the range reports the matching backward cycle count:
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// let d = Digit::ranged(2, 2, 4)?.minus(3);
    /// assert_eq!(d.value(), 2);
    /// assert_eq!(d.cycle_count(), -1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn minus(self, delta: i64) -> Digit {
        let raw = i128::from(self.value) - i128::from(delta);
        Digit::new_ranged(raw, self.min, self.max)
    }

    /// Compares the values of two digits with identical ranges.
    ///
    /// # Errors
    ///
    /// This returns an error when the ranges of the two digits differ.
    /// Digits of different radii measure different things, so ordering
    /// them by raw value would be meaningless and is never silently
    /// coerced.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use odo::Digit;
    ///
    /// let d1 = Digit::ranged(3, 1, 12)?;
    /// let d2 = Digit::ranged(9, 1, 12)?;
    /// assert_eq!(d1.compare(&d2)?, Ordering::Less);
    ///
    /// let d3 = Digit::ranged(3, 0, 59)?;
    /// assert!(d1.compare(&d3).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn compare(&self, other: &Digit) -> Result<Ordering, Error> {
        if self.min != other.min || self.max != other.max {
            return Err(Error::incompatible(
                self.min, self.max, other.min, other.max,
            ));
        }
        Ok(self.value.cmp(&other.value))
    }
}

/// Wraps `raw` into `min..=max` and reports the signed cycle count.
///
/// The mapping is an odometer convention, not plain modular arithmetic:
/// the first step past `max` lands on `min` and the first step below
/// `min` lands on `max`. Two quirks of the convention are deliberate and
/// pinned by tests:
///
/// * The backward multi-cycle value reduces `range % interval` (with
/// `interval > range` this is always `range`, so every backward
/// multi-cycle lands on `min`).
/// * The forward multi-cycle count divides the *raw* value by the range,
/// while the backward count divides the interval. These disagree in
/// general, e.g. for ranges that don't start near zero.
fn wrap(raw: i128, min: i64, max: i64) -> (i64, i64) {
    let lo = i128::from(min);
    let hi = i128::from(max);
    let range = hi - lo + 1;
    if lo <= raw && raw <= hi {
        return (raw as i64, 0);
    }
    if raw < lo {
        let interval = lo - raw;
        if interval < range {
            ((hi - interval + 1) as i64, -1)
        } else if interval == range {
            (min, -1)
        } else {
            (((hi + 1) - range % interval) as i64, clamp(-(interval / range)))
        }
    } else {
        let interval = raw - hi;
        if interval < range {
            ((lo + interval - 1) as i64, 1)
        } else if interval == range {
            (min, 1)
        } else {
            // A whole multiple of the range past `max` lands back on
            // `min`, completing the pattern the exact-cycle branch
            // starts. Every other interval offsets from `min`.
            let value = match interval % range {
                0 => min,
                rem => (lo + rem - 1) as i64,
            };
            (value, clamp(raw / range))
        }
    }
}

/// Converts a cycle count to `i64`, saturating at the edges.
///
/// Only reachable for degenerate `range == 1` digits hit with a huge
/// delta, where the cycle count equals the raw value itself.
fn clamp(cycles: i128) -> i64 {
    i64::try_from(cycles).unwrap_or_else(|_| {
        if cycles < 0 {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

impl Eq for Digit {}

impl PartialEq for Digit {
    fn eq(&self, other: &Digit) -> bool {
        self.value == other.value
            && self.min == other.min
            && self.max == other.max
    }
}

impl core::hash::Hash for Digit {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.min.hash(state);
        self.max.hash(state);
    }
}

impl core::fmt::Display for Digit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.value, f)
    }
}

impl Add<i64> for Digit {
    type Output = Digit;

    #[inline]
    fn add(self, rhs: i64) -> Digit {
        self.plus(rhs)
    }
}

impl AddAssign<i64> for Digit {
    #[inline]
    fn add_assign(&mut self, rhs: i64) {
        *self = self.plus(rhs);
    }
}

impl Sub<i64> for Digit {
    type Output = Digit;

    #[inline]
    fn sub(self, rhs: i64) -> Digit {
        self.minus(rhs)
    }
}

impl SubAssign<i64> for Digit {
    #[inline]
    fn sub_assign(&mut self, rhs: i64) {
        *self = self.minus(rhs);
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Digit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Digit {
        let a = i64::arbitrary(g).clamp(Digit::MIN, Digit::MAX);
        let b = i64::arbitrary(g).clamp(Digit::MIN, Digit::MAX);
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Digit::ranged(i64::arbitrary(g), min, max).unwrap()
    }
}
