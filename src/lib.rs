/*!
An odometer model of time.

The central abstraction of this crate is the [`Digit`]: an integer that is
permanently confined to an inclusive range `min..=max`. When arithmetic
pushes a digit past either end of its range, the digit wraps around, just
like a wheel on a mechanical odometer, and reports how many full times it
wrapped as a signed [cycle count](Digit::cycle_count).

On top of that primitive sit two more types. A [`Wheel`] is a mutable
digit pinned to one of the seven canonical time units (millisecond through
year). A [`Moment`] chains seven wheels together into a calendar-like
value, where a carry out of one wheel is absorbed by the next larger one,
forming a hand-rolled mixed-radix counter.

# Example: a wrapping digit

A digit confined to `1..=12` behaves like the month ring on a dial. Any
size of jump is permitted in a single operation, and the cycle count says
how many times the dial went all the way around:

```
use odo::Digit;

let d = Digit::ranged(11, 1, 12)?;
let d = d.plus(10);
assert_eq!(d.value(), 9);
assert_eq!(d.cycle_count(), 1);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Example: rolling a calendar over

A [`Moment`] cascades carries from the millisecond wheel all the way up to
the year wheel:

```
use odo::{Moment, Unit};

let mut t = Moment::new(2024, 12, 30, 23, 59, 59, 999);
t.increment(Unit::Millisecond);
assert_eq!(t, Moment::new(2025, 1, 1, 0, 0, 0, 0));
```

And the span between two moments round-trips through addition:

```
use odo::Moment;

let now = Moment::new(2024, 5, 6, 14, 50, 0, 0);
let birth = Moment::new(1981, 12, 4, 23, 45, 0, 0);
let between = now.between(&birth);
assert_eq!(birth.plus(&between), now);
```

# This is not a real calendar

A `Moment` uses a deliberately simplified calendar: every month has
exactly 30 days and there are no leap years. That keeps every wheel's
radix fixed, at the cost of not agreeing with the proleptic Gregorian
calendar. Conversions to and from `chrono::NaiveDateTime` (via the
`chrono` feature) are provided for getting real wall-clock values in and
out at the boundary, but the arithmetic in between is odometer
arithmetic, nothing more.

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for this
  crate's error type and, together with **chrono**, enables
  [`Moment::now`].
* **chrono** (enabled by default) - Enables conversions between
  [`Moment`] and `chrono::NaiveDateTime`.
* **logging** - Emits `trace` level messages on the `log` crate as
  carries cascade between wheels.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{
    digit::Digit,
    duration::{Duration, ToDuration},
    error::Error,
    moment::Moment,
    unit::Unit,
    wheel::Wheel,
};

#[macro_use]
mod logging;

#[cfg(feature = "chrono")]
mod convert;
mod digit;
mod duration;
mod error;
mod moment;
mod unit;
mod wheel;
