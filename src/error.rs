use alloc::sync::Arc;

/// An error that can occur in this crate.
///
/// There are only a few ways for an operation in this crate to fail:
///
/// * Constructing a [`Digit`](crate::Digit) with an impossible range,
/// that is, `min > max` or bounds outside the global
/// [`Digit::MIN`](crate::Digit::MIN)/[`Digit::MAX`](crate::Digit::MAX)
/// limits.
/// * Comparing two digits (or wheels) whose ranges differ.
/// * Converting a [`Moment`](crate::Moment) to a wall-clock datetime when
/// its fields don't name a real calendar date. (Only with the `chrono`
/// crate feature enabled.)
///
/// Notably, *arithmetic* never fails. Adding or subtracting a delta of
/// any magnitude from a digit always succeeds and reports however many
/// wraps occurred. A huge cycle count is a valid result, not an error.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern": one error
/// type for everything, with a couple of coarse predicates
/// ([`Error::is_range`], [`Error::is_incompatible`]) instead of a public
/// kind enum. The internal representation lives behind an `Arc` so that
/// errors are cheap to clone and a `Result<T, Error>` stays one word
/// wide.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Range(RangeError),
    Incompatible(IncompatibleError),
    #[cfg(feature = "chrono")]
    Convert(ConvertError),
}

impl Error {
    /// Returns true when this error came from a value being out of an
    /// allowed range at construction time.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::Digit;
    ///
    /// // min > max
    /// assert!(Digit::spanning(19, 12).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::Range(_))
    }

    /// Returns true when this error came from comparing two digits whose
    /// ranges differ.
    ///
    /// # Example
    ///
    /// ```
    /// use odo::{Unit, Wheel};
    ///
    /// let hour = Wheel::new(Unit::Hour, 5);
    /// let day = Wheel::new(Unit::Day, 5);
    /// assert!(hour.compare(&day).unwrap_err().is_incompatible());
    /// ```
    pub fn is_incompatible(&self) -> bool {
        matches!(self.kind(), ErrorKind::Incompatible(_))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is
    /// out of range. (e.g., "minimum")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: i64,
        min: i64,
        max: i64,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError { what, given, min, max }))
    }

    /// Creates a new error indicating that two digits with distinct
    /// ranges were asked to compare themselves.
    #[inline(never)]
    #[cold]
    pub(crate) fn incompatible(
        min1: i64,
        max1: i64,
        min2: i64,
        max2: i64,
    ) -> Error {
        Error::from(ErrorKind::Incompatible(IncompatibleError {
            min1,
            max1,
            min2,
            max2,
        }))
    }

    /// Creates a new error indicating that a moment has no equivalent
    /// wall-clock datetime. The `what` label names the part that does not
    /// translate. (e.g., "calendar date")
    #[cfg(feature = "chrono")]
    #[inline(never)]
    #[cold]
    pub(crate) fn convert(what: &'static str) -> Error {
        Error::from(ErrorKind::Convert(ConvertError { what }))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind }) }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self.kind() {
            ErrorKind::Range(ref err) => err.fmt(f),
            ErrorKind::Incompatible(ref err) => err.fmt(f),
            #[cfg(feature = "chrono")]
            ErrorKind::Convert(ref err) => err.fmt(f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.inner.kind).finish()
        }
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The message includes a name describing which input was out of bounds,
/// the value given and its minimum and maximum allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i64,
    min: i64,
    max: i64,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// An error that occurs when two digits with distinct ranges are
/// compared.
///
/// Cross-unit comparison is never silently coerced, so the only remedy is
/// to compare raw values explicitly.
#[derive(Debug)]
struct IncompatibleError {
    min1: i64,
    max1: i64,
    min2: i64,
    max2: i64,
}

impl core::fmt::Display for IncompatibleError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let IncompatibleError { min1, max1, min2, max2 } = *self;
        write!(
            f,
            "cannot compare digit with range {min1}..={max1} \
             to digit with range {min2}..={max2}",
        )
    }
}

/// An error that occurs when a moment does not correspond to any
/// wall-clock datetime.
///
/// The classic example is a day past the end of a real month: day 30
/// always exists for a `Moment`, but `2024-02-30` is not a date.
#[cfg(feature = "chrono")]
#[derive(Debug)]
struct ConvertError {
    what: &'static str,
}

#[cfg(feature = "chrono")]
impl core::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let ConvertError { what } = *self;
        write!(f, "moment has no wall-clock equivalent ({what} does not exist)")
    }
}
