use crate::unit::Unit;

/// A plain quantity of one time [`Unit`], with no bounds and no
/// wrapping.
///
/// A `Duration` is the free-magnitude counterpart of a
/// [`Wheel`](crate::Wheel): where a wheel confines its value to the
/// unit's range, a duration holds any `i64` at all. `90.minutes()` is a
/// perfectly good duration; feeding it to a moment is what turns the
/// excess into carries:
///
/// ```
/// use odo::{Moment, ToDuration};
///
/// let t = Moment::new(2024, 5, 6, 14, 50, 0, 0);
/// assert_eq!(t + 90.minutes(), Moment::new(2024, 5, 6, 16, 20, 0, 0));
/// ```
///
/// Durations can be built with the per-unit constructors
/// ([`Duration::years`] and friends), with [`Duration::new`], or most
/// conveniently with the [`ToDuration`] extension trait on the integer
/// types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Duration {
    unit: Unit,
    value: i64,
}

impl Duration {
    /// Creates a new duration of the given unit and value.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::{Duration, Unit};
    ///
    /// let d = Duration::new(Unit::Hour, 22);
    /// assert_eq!(d, Duration::hours(22));
    /// ```
    pub fn new(unit: Unit, value: i64) -> Duration {
        Duration { unit, value }
    }

    /// Creates a new duration in units of milliseconds.
    pub fn milliseconds(value: i64) -> Duration {
        Duration::new(Unit::Millisecond, value)
    }

    /// Creates a new duration in units of seconds.
    pub fn seconds(value: i64) -> Duration {
        Duration::new(Unit::Second, value)
    }

    /// Creates a new duration in units of minutes.
    pub fn minutes(value: i64) -> Duration {
        Duration::new(Unit::Minute, value)
    }

    /// Creates a new duration in units of hours.
    pub fn hours(value: i64) -> Duration {
        Duration::new(Unit::Hour, value)
    }

    /// Creates a new duration in units of days.
    pub fn days(value: i64) -> Duration {
        Duration::new(Unit::Day, value)
    }

    /// Creates a new duration in units of months.
    pub fn months(value: i64) -> Duration {
        Duration::new(Unit::Month, value)
    }

    /// Creates a new duration in units of years.
    pub fn years(value: i64) -> Duration {
        Duration::new(Unit::Year, value)
    }

    /// Returns the unit of this duration.
    #[inline]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the value of this duration.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns a new duration of the same unit with the given value
    /// added.
    ///
    /// The addition saturates at the edges of `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Duration;
    ///
    /// let d = Duration::years(22).plus(3);
    /// assert_eq!(d, Duration::years(25));
    /// ```
    pub fn plus(self, value: i64) -> Duration {
        Duration::new(self.unit, self.value.saturating_add(value))
    }

    /// Returns a new duration of the same unit with the given value
    /// subtracted.
    ///
    /// The subtraction saturates at the edges of `i64`.
    pub fn minus(self, value: i64) -> Duration {
        Duration::new(self.unit, self.value.saturating_sub(value))
    }

    /// Returns this duration with its sign flipped.
    ///
    /// Saturates at the edges of `i64`.
    pub fn negated(self) -> Duration {
        Duration::new(self.unit, self.value.saturating_neg())
    }
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let suffix = match self.unit {
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Month => "mo",
            Unit::Year => "y",
        };
        write!(f, "{}{}", self.value, suffix)
    }
}

impl core::ops::Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        self.negated()
    }
}

/// A trait for building a [`Duration`] from an integer literal.
///
/// The trait is implemented for every integer type that losslessly
/// converts to `i64`.
///
/// # Example
///
/// ```
/// use odo::{Duration, ToDuration};
///
/// assert_eq!(3.hours(), Duration::hours(3));
/// assert_eq!((-45).minutes(), Duration::minutes(-45));
/// ```
pub trait ToDuration: Sized {
    /// Create a new duration from this integer in units of milliseconds.
    fn milliseconds(self) -> Duration;

    /// Create a new duration from this integer in units of seconds.
    fn seconds(self) -> Duration;

    /// Create a new duration from this integer in units of minutes.
    fn minutes(self) -> Duration;

    /// Create a new duration from this integer in units of hours.
    fn hours(self) -> Duration;

    /// Create a new duration from this integer in units of days.
    fn days(self) -> Duration;

    /// Create a new duration from this integer in units of months.
    fn months(self) -> Duration;

    /// Create a new duration from this integer in units of years.
    fn years(self) -> Duration;
}

macro_rules! impl_to_duration {
    ($($ty:ty),*) => {
        $(
            impl ToDuration for $ty {
                fn milliseconds(self) -> Duration {
                    Duration::milliseconds(i64::from(self))
                }
                fn seconds(self) -> Duration {
                    Duration::seconds(i64::from(self))
                }
                fn minutes(self) -> Duration {
                    Duration::minutes(i64::from(self))
                }
                fn hours(self) -> Duration {
                    Duration::hours(i64::from(self))
                }
                fn days(self) -> Duration {
                    Duration::days(i64::from(self))
                }
                fn months(self) -> Duration {
                    Duration::months(i64::from(self))
                }
                fn years(self) -> Duration {
                    Duration::years(i64::from(self))
                }
            }
        )*
    }
}

impl_to_duration!(i8, i16, i32, i64, u8, u16, u32);

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn creation() {
        let d = Duration::seconds(-1);
        assert_eq!(d.value(), -1);
        assert_eq!(d.unit(), Unit::Second);

        let d = Duration::new(Unit::Hour, 22);
        assert_eq!(d.value(), 22);
        assert_eq!(d, Duration::hours(22));

        // Same value, different unit: not equal.
        assert_ne!(Duration::hours(22), Duration::years(22));
    }

    #[test]
    fn plus_minus_keep_the_unit() {
        let d = Duration::years(22);
        let d2 = d.plus(3);
        assert_eq!(d2.value(), 25);
        assert_eq!(d2.unit(), Unit::Year);

        let d3 = d.minus(3);
        assert_eq!(d3.value(), 19);
        assert_eq!(d3.unit(), Unit::Year);
    }

    #[test]
    fn to_duration() {
        assert_eq!(3.hours(), Duration::hours(3));
        assert_eq!(3i8.days(), Duration::days(3));
        assert_eq!(3u32.years(), Duration::years(3));
        assert_eq!((-1).seconds(), Duration::seconds(-1));
    }

    #[test]
    fn display() {
        assert_eq!(Duration::years(22).to_string(), "22y");
        assert_eq!(Duration::milliseconds(-7).to_string(), "-7ms");
        assert_eq!(Duration::months(3).to_string(), "3mo");
    }

    #[test]
    fn negated() {
        assert_eq!(-Duration::hours(2), Duration::hours(-2));
        assert_eq!(Duration::hours(i64::MIN).negated().value(), i64::MAX);
    }
}
