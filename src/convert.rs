/*!
Conversions between [`Moment`] and `chrono::NaiveDateTime`.

This is the boundary between the odometer calendar and the real one. A
`NaiveDateTime` always converts *into* a [`Moment`]; the reverse can fail,
because the fixed 30-day months admit moments (February 30, say) that
name no real date.
*/

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::{error::Error, moment::Moment};

impl Moment {
    /// Creates a new moment from a wall-clock datetime.
    ///
    /// Sub-millisecond precision is truncated.
    ///
    /// Note that the odometer calendar has no day `31`: the 31st of a
    /// real month wraps within the day wheel, same as any other
    /// out-of-range field in [`Moment::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use odo::Moment;
    ///
    /// let dt = NaiveDate::from_ymd_opt(2024, 5, 6)
    ///     .unwrap()
    ///     .and_hms_milli_opt(14, 50, 3, 250)
    ///     .unwrap();
    /// assert_eq!(Moment::from_datetime(dt), Moment::new(2024, 5, 6, 14, 50, 3, 250));
    /// ```
    pub fn from_datetime(datetime: NaiveDateTime) -> Moment {
        Moment::new(
            i64::from(datetime.year()),
            i64::from(datetime.month()),
            i64::from(datetime.day()),
            i64::from(datetime.hour()),
            i64::from(datetime.minute()),
            i64::from(datetime.second()),
            i64::from(datetime.nanosecond() / 1_000_000),
        )
    }

    /// Converts this moment to a wall-clock datetime.
    ///
    /// # Errors
    ///
    /// This returns an error when the moment's fields name no real
    /// calendar date. Every month of the odometer calendar has 30 days,
    /// so a moment can sit on a date like February 30 that does not
    /// exist; the year can also lie outside the range `chrono` supports.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Moment;
    ///
    /// let t = Moment::new(2024, 5, 6, 14, 50, 0, 0);
    /// assert!(t.to_datetime().is_ok());
    ///
    /// let t = Moment::new(2024, 2, 30, 0, 0, 0, 0);
    /// assert!(t.to_datetime().is_err());
    /// ```
    pub fn to_datetime(&self) -> Result<NaiveDateTime, Error> {
        let year = i32::try_from(self.year()).map_err(|_| {
            debug!("year {} out of wall-clock range", self.year());
            Error::convert("year")
        })?;
        let date = NaiveDate::from_ymd_opt(
            year,
            self.month() as u32,
            self.day() as u32,
        )
        .ok_or_else(|| {
            debug!("no wall-clock equivalent for {}", self);
            Error::convert("calendar date")
        })?;
        date.and_hms_milli_opt(
            self.hour() as u32,
            self.minute() as u32,
            self.second() as u32,
            self.millisecond() as u32,
        )
        .ok_or_else(|| Error::convert("clock time"))
    }

    /// Returns the Unix epoch, `1970-01-01 00:00:00.000`.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Moment;
    ///
    /// assert_eq!(Moment::epoch(), Moment::new(1970, 1, 1, 0, 0, 0, 0));
    /// ```
    pub fn epoch() -> Moment {
        Moment::from_datetime(NaiveDateTime::UNIX_EPOCH)
    }

    /// Returns the current time, read from the system clock in the local
    /// timezone.
    #[cfg(feature = "std")]
    pub fn now() -> Moment {
        Moment::from_datetime(chrono::Local::now().naive_local())
    }
}

impl From<NaiveDateTime> for Moment {
    fn from(datetime: NaiveDateTime) -> Moment {
        Moment::from_datetime(datetime)
    }
}

impl TryFrom<Moment> for NaiveDateTime {
    type Error = Error;

    fn try_from(moment: Moment) -> Result<NaiveDateTime, Error> {
        moment.to_datetime()
    }
}

impl<'a> TryFrom<&'a Moment> for NaiveDateTime {
    type Error = Error;

    fn try_from(moment: &'a Moment) -> Result<NaiveDateTime, Error> {
        moment.to_datetime()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_milli_opt(hour, minute, second, millisecond)
            .unwrap()
    }

    #[test]
    fn round_trip() {
        let dt = datetime(2024, 5, 6, 14, 50, 3, 250);
        let t = Moment::from_datetime(dt);
        assert_eq!(t, Moment::new(2024, 5, 6, 14, 50, 3, 250));
        assert_eq!(t.to_datetime().unwrap(), dt);
    }

    #[test]
    fn negative_years() {
        let dt = datetime(-44, 3, 15, 12, 0, 0, 0);
        let t = Moment::from_datetime(dt);
        assert_eq!(t.year(), -44);
        assert_eq!(t.to_datetime().unwrap(), dt);
    }

    #[test]
    fn impossible_dates_do_not_convert() {
        // Day 30 exists for every odometer month, but not every real
        // one.
        let t = Moment::new(2024, 2, 30, 0, 0, 0, 0);
        assert!(t.to_datetime().is_err());

        // Years beyond chrono's range don't convert either.
        let t = Moment::from_year(i64::from(i32::MAX) + 1);
        assert!(t.to_datetime().is_err());
    }

    #[test]
    fn day_31_wraps_on_the_way_in() {
        let dt = datetime(2024, 5, 31, 0, 0, 0, 0);
        let t = Moment::from_datetime(dt);
        // The odometer calendar has no day 31; the day wheel wraps
        // locally, without bumping the month.
        assert_eq!((t.month(), t.day()), (5, 1));
    }

    #[test]
    fn sub_millisecond_truncates() {
        let dt = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_nano_opt(1, 2, 3, 123_456_789)
            .unwrap();
        let t = Moment::from_datetime(dt);
        assert_eq!(t.millisecond(), 123);
    }

    #[cfg(feature = "std")]
    #[test]
    fn now_is_in_range() {
        let t = Moment::now();
        // Whatever the clock says, every wheel is within its range.
        assert!(t.year() > 1970);
        assert!((1..=12).contains(&t.month()));
        assert!((1..=30).contains(&t.day()));
    }
}
