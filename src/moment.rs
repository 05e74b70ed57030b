use core::{
    cmp::Ordering,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::{duration::Duration, unit::Unit, wheel::Wheel};

/// A calendar-like value built from seven chained [`Wheel`]s.
///
/// A `Moment` holds one wheel per [`Unit`], millisecond through year,
/// wired innermost to outermost like the wheels of an odometer. Shifting
/// any wheel wraps it within its own range and feeds the signed carry to
/// the next larger wheel, which may wrap in turn, until some wheel
/// absorbs the remainder or the carry falls off the year wheel:
///
/// ```
/// use odo::{Moment, Unit};
///
/// let mut t = Moment::new(2024, 12, 30, 23, 59, 59, 999);
/// t.increment(Unit::Millisecond);
/// assert_eq!(t, Moment::new(2025, 1, 1, 0, 0, 0, 0));
/// ```
///
/// # A simplified calendar
///
/// The day wheel is always `1..=30`: every month is 30 days long and
/// there are no leap years. This is a closed convention that keeps every
/// wheel's radix fixed; it is not, and does not try to be, the Gregorian
/// calendar. Use the `chrono` conversions to cross between this calendar
/// and real wall-clock datetimes.
///
/// # Mutability
///
/// The wheel-level operations ([`Moment::shift`], [`Moment::increment`],
/// [`Moment::decrement`]) mutate the moment in place, the way turning a
/// physical wheel does. The moment-level combinators ([`Moment::plus`],
/// [`Moment::between`], [`Moment::with`]) never touch their operands and
/// return a freshly built value.
///
/// # Comparisons
///
/// Moments are totally ordered, lexicographically from the year wheel
/// down to the millisecond wheel. Equality compares the same way and, as
/// with [`Digit`](crate::Digit), ignores cycle counts.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Moment {
    /// Indexed by `Unit as usize`: millisecond first, year last.
    wheels: [Wheel; 7],
}

impl Moment {
    /// Creates a new moment from its seven field values.
    ///
    /// Each value wraps *within its own wheel* if it is out of range; no
    /// carry is exchanged between wheels during construction. If you want
    /// the cascading behavior, build an in-range moment and then
    /// [`shift`](Moment::shift) it.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Moment;
    ///
    /// let t = Moment::new(2024, 5, 6, 14, 50, 0, 0);
    /// assert_eq!(t.year(), 2024);
    /// assert_eq!(t.hour(), 14);
    ///
    /// // Out-of-range fields wrap in place: month 50 is month 2, and
    /// // the year is left alone.
    /// let t = Moment::new(2024, 50, 1, 0, 0, 0, 0);
    /// assert_eq!(t.month(), 2);
    /// assert_eq!(t.year(), 2024);
    /// ```
    pub fn new(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> Moment {
        Moment::from_values([
            millisecond,
            second,
            minute,
            hour,
            day,
            month,
            year,
        ])
    }

    /// Creates a new moment at the start of the given day.
    ///
    /// The clock fields are all zero.
    pub fn from_ymd(year: i64, month: i64, day: i64) -> Moment {
        Moment::new(year, month, day, 0, 0, 0, 0)
    }

    /// Creates a new moment at the start of the given year.
    ///
    /// The month and day are `1` and the clock fields are all zero.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Moment;
    ///
    /// let t = Moment::from_year(1881);
    /// assert_eq!((t.year(), t.month(), t.day()), (1881, 1, 1));
    /// assert_eq!((t.hour(), t.minute(), t.second(), t.millisecond()), (0, 0, 0, 0));
    /// ```
    pub fn from_year(year: i64) -> Moment {
        Moment::new(year, 1, 1, 0, 0, 0, 0)
    }

    /// Builds a moment from values indexed innermost first.
    fn from_values(values: [i64; 7]) -> Moment {
        Moment { wheels: Unit::ALL.map(|unit| Wheel::new(unit, values[unit as usize])) }
    }

    /// The current field values, indexed innermost first.
    fn values(&self) -> [i64; 7] {
        self.wheels.map(|wheel| wheel.value())
    }

    /// Rebuilds this moment from its field values alone.
    ///
    /// Equivalent for every observable purpose except that the wheels'
    /// cycle counts are reset to zero.
    fn rebuilt(&self) -> Moment {
        Moment::from_values(self.values())
    }

    /// Returns the wheel for the given unit.
    ///
    /// The returned reference is read-only. To move a wheel, go through
    /// [`Moment::shift`] so that carries cascade properly.
    #[inline]
    pub fn wheel(&self, unit: Unit) -> &Wheel {
        &self.wheels[unit as usize]
    }

    /// Returns the value of the given unit's wheel.
    #[inline]
    pub fn value_of(&self, unit: Unit) -> i64 {
        self.wheel(unit).value()
    }

    /// Returns the year.
    #[inline]
    pub fn year(&self) -> i64 {
        self.value_of(Unit::Year)
    }

    /// Returns the month, in `1..=12`.
    #[inline]
    pub fn month(&self) -> i64 {
        self.value_of(Unit::Month)
    }

    /// Returns the day, in `1..=30`.
    #[inline]
    pub fn day(&self) -> i64 {
        self.value_of(Unit::Day)
    }

    /// Returns the hour, in `0..=23`.
    #[inline]
    pub fn hour(&self) -> i64 {
        self.value_of(Unit::Hour)
    }

    /// Returns the minute, in `0..=59`.
    #[inline]
    pub fn minute(&self) -> i64 {
        self.value_of(Unit::Minute)
    }

    /// Returns the second, in `0..=59`.
    #[inline]
    pub fn second(&self) -> i64 {
        self.value_of(Unit::Second)
    }

    /// Returns the millisecond, in `0..=999`.
    #[inline]
    pub fn millisecond(&self) -> i64 {
        self.value_of(Unit::Millisecond)
    }

    /// Shifts the given unit's wheel by `delta`, cascading carries
    /// outward.
    ///
    /// The named wheel wraps within its range; if it wrapped, the signed
    /// wrap count is added to the next larger wheel, and so on, innermost
    /// to outermost. The cascade completes before this call returns. A
    /// carry out of the year wheel is dropped.
    ///
    /// After the call, each touched wheel's
    /// [`cycle_count`](Wheel::cycle_count) reports how many times it
    /// wrapped.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::{Moment, Unit};
    ///
    /// let mut t = Moment::new(2024, 5, 6, 14, 50, 0, 0);
    /// t.shift(Unit::Minute, 90);
    /// assert_eq!(t, Moment::new(2024, 5, 6, 16, 20, 0, 0));
    /// ```
    pub fn shift(&mut self, unit: Unit, delta: i64) {
        let start = unit as usize;
        let mut carry = self.wheels[start].shift(delta);
        for wheel in self.wheels.iter_mut().skip(start + 1) {
            if carry == 0 {
                return;
            }
            trace!("carrying {} into the {} wheel", carry, wheel.unit());
            carry = wheel.shift(carry);
        }
        if carry != 0 {
            trace!("dropping carry {} off the year wheel", carry);
        }
    }

    /// Shifts the given unit's wheel forward one step, cascading carries
    /// outward.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::{Moment, Unit};
    ///
    /// let mut t = Moment::from_year(1881);
    /// t.increment(Unit::Year);
    /// assert_eq!(t.year(), 1882);
    /// ```
    pub fn increment(&mut self, unit: Unit) {
        self.shift(unit, 1);
    }

    /// Shifts the given unit's wheel backward one step, cascading
    /// borrows outward.
    pub fn decrement(&mut self, unit: Unit) {
        self.shift(unit, -1);
    }

    /// Returns a new moment with every field of `other` added to this
    /// one.
    ///
    /// The fields are added innermost to outermost, so that a carry out
    /// of a small wheel lands on the larger wheels before their own
    /// explicit additions. Neither operand is modified.
    ///
    /// Note that *every* field of `other` is added, including its month
    /// and day, whose smallest value is `1`. A moment produced by
    /// [`Moment::between`] already accounts for that baseline.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Moment;
    ///
    /// let once = Moment::from_year(1881);
    /// let later = once.plus(&Moment::from_year(1));
    /// assert_eq!(later.year(), 1882);
    /// // The original is untouched.
    /// assert_eq!(once.year(), 1881);
    /// ```
    pub fn plus(&self, other: &Moment) -> Moment {
        let mut sum = self.rebuilt();
        for unit in Unit::ALL {
            sum.shift(unit, other.value_of(unit));
        }
        sum
    }

    /// Returns a new moment with the given duration added to exactly one
    /// wheel.
    ///
    /// The wheel named by the duration's unit receives the whole delta;
    /// its carries cascade outward normally. Neither operand is
    /// modified.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::{Moment, ToDuration};
    ///
    /// let t = Moment::new(2024, 5, 6, 14, 50, 0, 0);
    /// let t = t.plus_duration(90.minutes());
    /// assert_eq!(t, Moment::new(2024, 5, 6, 16, 20, 0, 0));
    /// ```
    pub fn plus_duration(&self, duration: Duration) -> Moment {
        let mut sum = self.rebuilt();
        sum.shift(duration.unit(), duration.value());
        sum
    }

    /// Returns the span between this moment and another, as a moment.
    ///
    /// The operands are ordered chronologically first, so the result is
    /// the same whichever operand the method is called on. The earlier
    /// moment's fields are subtracted from a copy of the later one,
    /// innermost to outermost, with borrows cascading outward.
    ///
    /// Adding the result back to the earlier moment with [`Moment::plus`]
    /// reproduces the later one, as the example below shows.
    ///
    /// Two equal moments produce the zero point: year `0`, month `1`,
    /// day `1`, midnight. (Month and day cannot be `0`; the zero point
    /// is the bottom of every wheel's range.)
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Moment;
    ///
    /// let now = Moment::new(2024, 5, 6, 14, 50, 0, 0);
    /// let birth = Moment::new(1981, 12, 4, 23, 45, 0, 0);
    ///
    /// let span = now.between(&birth);
    /// assert_eq!(span.year(), 42);
    /// assert_eq!(span.month(), 5);
    /// assert_eq!(span.day(), 1);
    /// assert_eq!(span.hour(), 15);
    /// assert_eq!(span.minute(), 5);
    ///
    /// assert_eq!(birth.plus(&span), now);
    /// ```
    pub fn between(&self, other: &Moment) -> Moment {
        let (mut later, earlier) = match self.cmp(other) {
            Ordering::Greater => (self.rebuilt(), other),
            Ordering::Less => (other.rebuilt(), self),
            Ordering::Equal => return Moment::from_year(0),
        };
        trace!(
            "between: later is {}, earlier is {}",
            later,
            earlier,
        );
        for unit in Unit::ALL {
            later.shift(unit, -earlier.value_of(unit));
        }
        later
    }

    /// Returns a new moment with the given unit's wheel replaced by the
    /// given value.
    ///
    /// The replacement wraps within its own wheel, without carrying, just
    /// as in [`Moment::new`]. The original moment is untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::{Moment, Unit};
    ///
    /// let t = Moment::new(2024, 5, 6, 14, 50, 0, 0);
    /// let t2 = t.with(Unit::Day, 29);
    /// assert_eq!(t2.day(), 29);
    /// assert_eq!(t2.month(), 5);
    /// assert_eq!(t.day(), 6);
    /// ```
    pub fn with(&self, unit: Unit, value: i64) -> Moment {
        let mut values = self.values();
        values[unit as usize] = value;
        Moment::from_values(values)
    }
}

impl Ord for Moment {
    fn cmp(&self, other: &Moment) -> Ordering {
        // Outermost wheel first: a year difference trumps everything.
        for (ours, theirs) in self.wheels.iter().zip(&other.wheels).rev() {
            match ours.value().cmp(&theirs.value()) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Moment {
    fn partial_cmp(&self, other: &Moment) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::fmt::Display for Moment {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond(),
        )
    }
}

impl Add<Duration> for Moment {
    type Output = Moment;

    fn add(self, rhs: Duration) -> Moment {
        self.plus_duration(rhs)
    }
}

impl AddAssign<Duration> for Moment {
    fn add_assign(&mut self, rhs: Duration) {
        self.shift(rhs.unit(), rhs.value());
    }
}

impl Sub<Duration> for Moment {
    type Output = Moment;

    fn sub(self, rhs: Duration) -> Moment {
        self.plus_duration(rhs.negated())
    }
}

impl SubAssign<Duration> for Moment {
    fn sub_assign(&mut self, rhs: Duration) {
        let rhs = rhs.negated();
        self.shift(rhs.unit(), rhs.value());
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Moment {
    fn arbitrary(g: &mut quickcheck::Gen) -> Moment {
        let year = i64::arbitrary(g).rem_euclid(20_000) - 10_000;
        let month = i64::arbitrary(g).rem_euclid(12) + 1;
        let day = i64::arbitrary(g).rem_euclid(30) + 1;
        let hour = i64::arbitrary(g).rem_euclid(24);
        let minute = i64::arbitrary(g).rem_euclid(60);
        let second = i64::arbitrary(g).rem_euclid(60);
        let millisecond = i64::arbitrary(g).rem_euclid(1000);
        Moment::new(year, month, day, hour, minute, second, millisecond)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn creation() {
        let t = Moment::new(2024, 5, 6, 14, 50, 3, 250);
        assert_eq!(t.year(), 2024);
        assert_eq!(t.month(), 5);
        assert_eq!(t.day(), 6);
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 50);
        assert_eq!(t.second(), 3);
        assert_eq!(t.millisecond(), 250);

        let t = Moment::from_ymd(2024, 5, 6);
        assert_eq!((t.hour(), t.minute(), t.second(), t.millisecond()), (0, 0, 0, 0));

        let t = Moment::from_year(1881);
        assert_eq!((t.year(), t.month(), t.day()), (1881, 1, 1));
    }

    #[test]
    fn construction_does_not_cascade() {
        // Each field wraps within its own wheel; the carry is dropped
        // rather than fed to the neighbor.
        let t = Moment::new(2024, 50, 1, 0, 0, 0, 0);
        assert_eq!(t.month(), 2);
        assert_eq!(t.year(), 2024);

        let t = Moment::new(2024, 1, 1, 0, 0, 0, 1000);
        assert_eq!(t.millisecond(), 0);
        assert_eq!(t.second(), 0);
    }

    #[test]
    fn shift_rolls_over() {
        let mut t = Moment::new(2024, 12, 30, 23, 59, 59, 999);
        t.increment(Unit::Millisecond);
        assert_eq!(t, Moment::new(2025, 1, 1, 0, 0, 0, 0));

        let mut t = Moment::new(2024, 1, 1, 0, 0, 0, 0);
        t.decrement(Unit::Millisecond);
        assert_eq!(t, Moment::new(2023, 12, 30, 23, 59, 59, 999));
    }

    #[test]
    fn shift_large_delta() {
        let mut t = Moment::new(0, 1, 1, 0, 0, 0, 0);
        t.shift(Unit::Millisecond, 1000 * 101);
        // The millisecond wheel reports its own 101 wraps, and the
        // second wheel absorbs them net of its own wrap into the minute.
        assert_eq!(t.wheel(Unit::Millisecond).cycle_count(), 101);
        assert_eq!(t.millisecond(), 0);
        assert_eq!(t.second(), 41);
        assert_eq!(t.minute(), 1);
    }

    #[test]
    fn shift_mutates_in_place() {
        let once = Moment::from_year(1881);
        // `plus` leaves the original alone...
        let later = once.plus(&Moment::from_year(1));
        assert_eq!(later.year(), 1882);
        assert_eq!(once.year(), 1881);

        // ...but turning a wheel directly changes the moment itself.
        let mut once = once;
        once.increment(Unit::Year);
        assert_eq!(once.year(), 1882);
    }

    #[test]
    fn between_round_trip() {
        let now = Moment::new(2024, 5, 6, 14, 50, 0, 0);
        let birth = Moment::new(1981, 12, 4, 23, 45, 0, 0);
        let span = now.between(&birth);
        assert_eq!(
            (span.year(), span.month(), span.day()),
            (42, 5, 1),
        );
        assert_eq!((span.hour(), span.minute()), (15, 5));
        assert_eq!(birth.plus(&span), now);

        // `between` orders its operands itself.
        assert_eq!(birth.between(&now), span);
    }

    #[test]
    fn between_round_trip_one_millisecond() {
        let now = Moment::new(2000, 1, 2, 0, 0, 0, 0);
        let birth = Moment::new(2000, 1, 1, 23, 59, 59, 999);
        let span = now.between(&birth);
        // One millisecond, expressed against the zero point: the day
        // borrow cascades all the way into the year.
        assert_eq!(span.year(), -1);
        assert_eq!((span.month(), span.day()), (11, 30));
        assert_eq!((span.hour(), span.minute(), span.second()), (0, 0, 0));
        assert_eq!(span.millisecond(), 1);
        assert_eq!(birth.plus(&span), now);
    }

    #[test]
    fn between_round_trip_whole_years() {
        let earlier = Moment::from_ymd(1999, 5, 6);
        let later = Moment::from_ymd(2001, 5, 6);
        let span = later.between(&earlier);
        assert_eq!((span.year(), span.month(), span.day()), (1, 11, 30));
        assert_eq!(earlier.plus(&span), later);
    }

    #[test]
    fn between_equal_is_zero_point() {
        let t = Moment::new(2024, 5, 6, 14, 50, 0, 0);
        assert_eq!(t.between(&t), Moment::from_year(0));
        assert_eq!(t.between(&t.clone()), Moment::from_year(0));
    }

    #[test]
    fn comparisons() {
        let t1 = Moment::new(2024, 5, 6, 14, 50, 0, 0);
        let t2 = Moment::new(2024, 5, 6, 14, 50, 0, 1);
        assert!(t1 < t2);
        assert!(t2 > t1);
        assert_eq!(t1.cmp(&t2), Ordering::Less);
        assert_ne!(t1, t2);

        // A year difference trumps every smaller field.
        let t3 = Moment::new(2023, 12, 30, 23, 59, 59, 999);
        assert!(t3 < t1);

        let clone = t1.clone();
        assert_eq!(t1, clone);
        assert_eq!(t1.cmp(&clone), Ordering::Equal);
    }

    #[test]
    fn with_replaces_one_wheel() {
        let t = Moment::new(2024, 5, 6, 14, 50, 0, 0);
        let t2 = t.with(Unit::Day, 29);
        assert_eq!(t2.day(), 29);
        assert_eq!(t2.month(), 5);
        assert_eq!(t.day(), 6);

        // Replacement wraps locally, without carrying.
        let t3 = t.with(Unit::Day, 31);
        assert_eq!(t3.day(), 1);
        assert_eq!(t3.month(), 5);
    }

    #[test]
    fn display() {
        let t = Moment::new(2024, 5, 6, 14, 50, 3, 7);
        assert_eq!(t.to_string(), "2024-05-06 14:50:03.007");
    }

    quickcheck::quickcheck! {
        fn prop_cmp_antisymmetric(a: Moment, b: Moment) -> bool {
            a.cmp(&b) == b.cmp(&a).reverse()
        }

        fn prop_eq_consistent_with_cmp(a: Moment, b: Moment) -> bool {
            (a == b) == (a.cmp(&b) == Ordering::Equal)
        }

        fn prop_zero_shift_is_noop(m: Moment) -> bool {
            let mut t = m.clone();
            t.shift(Unit::Day, 0);
            t == m
        }

        fn prop_shift_keeps_fields_in_range(m: Moment, delta: i64) -> bool {
            let mut t = m.clone();
            t.shift(Unit::Millisecond, delta);
            Unit::ALL.iter().all(|&unit| {
                let w = t.wheel(unit);
                w.min() <= w.value() && w.value() <= w.max()
            })
        }
    }
}
