//! Clock-hand geometry and an interpolatable clock reading.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{Result, ensure_positive};
use crate::geom::{Circle, Point, Segment, Size};

/// Hand lengths as fractions of the dial radius.
const HOUR_HAND: f64 = 0.5;
const MINUTE_HAND: f64 = 0.7;
const SECOND_HAND: f64 = 0.9;

/// A clock reading that an animation driver can interpolate.
///
/// Hours and minutes jump by whole units while seconds move smoothly, but
/// arithmetic treats the whole reading as a 1D vector over total elapsed
/// seconds, so tweening between two readings sweeps every hand through the
/// in-between positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTime {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl ClockTime {
    /// Midnight.
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0.0,
    };

    /// Create a reading from components.
    pub const fn new(hours: i32, minutes: i32, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Normalize a total-seconds value back into hours, minutes and seconds.
    pub fn from_seconds(total: f64) -> Self {
        let whole = total as i64;
        let hours = whole / 3600;
        let minutes = (whole - hours * 3600) / 60;
        let seconds = total - (hours * 3600 + minutes * 60) as f64;
        Self {
            hours: hours as i32,
            minutes: minutes as i32,
            seconds,
        }
    }

    /// The equivalent total-seconds representation.
    pub fn total_seconds(&self) -> f64 {
        f64::from(self.hours * 3600 + self.minutes * 60) + self.seconds
    }

    /// Scale the reading as a vector over total seconds.
    pub fn scaled(self, factor: f64) -> Self {
        Self::from_seconds(self.total_seconds() * factor)
    }
}

impl Add for ClockTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_seconds(self.total_seconds() + rhs.total_seconds())
    }
}

impl Sub for ClockTime {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_seconds(self.total_seconds() - rhs.total_seconds())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:2}:{:02}:{:02}",
            self.hours,
            self.minutes,
            self.seconds.round() as i64
        )
    }
}

/// The shapes making up one clock face: the dial outline plus three hands
/// anchored at the center.
///
/// Hands are bare segments; stroking them into filled outlines of a given
/// width is the renderer's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockFace {
    pub dial: Circle,
    pub hour: Segment,
    pub minute: Segment,
    pub second: Segment,
}

/// Compute the dial and hand geometry for a clock reading inscribed in `size`.
///
/// Zero turns points at 12 o'clock (a quarter turn back from the +x axis);
/// the hour hand divides the dial by 12, minutes and seconds by 60.
pub fn clock_face(time: ClockTime, size: Size) -> Result<ClockFace> {
    face_from_turns(
        f64::from(time.hours) / 12.0,
        f64::from(time.minutes) / 60.0,
        time.seconds / 60.0,
        size,
    )
}

/// Like [`clock_face`], but the hour hand creeps with the minutes the way a
/// real dial does. Meant for live readings; [`clock_face`] keeps whole-hour
/// steps so tweened readings land exactly on their preset positions.
pub fn clock_face_smooth(time: ClockTime, size: Size) -> Result<ClockFace> {
    let hours = f64::from(time.hours) + f64::from(time.minutes) / 60.0;
    face_from_turns(hours / 12.0, f64::from(time.minutes) / 60.0, time.seconds / 60.0, size)
}

fn face_from_turns(
    hour_turns: f64,
    minute_turns: f64,
    second_turns: f64,
    size: Size,
) -> Result<ClockFace> {
    ensure_positive("width", size.width)?;
    ensure_positive("height", size.height)?;

    let radius = size.min_side() / 2.0;
    let center = size.center();

    let hand = |turns: f64, length: f64| {
        let angle = turns * TAU - FRAC_PI_2;
        Segment {
            from: center,
            to: Point::new(
                center.x + angle.cos() * radius * length,
                center.y + angle.sin() * radius * length,
            ),
        }
    };

    Ok(ClockFace {
        dial: Circle { center, radius },
        hour: hand(hour_turns, HOUR_HAND),
        minute: hand(minute_turns, MINUTE_HAND),
        second: hand(second_turns, SECOND_HAND),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(200.0, 200.0);

    #[test]
    fn from_seconds_normalizes_components() {
        let t = ClockTime::from_seconds(2.0 * 3600.0 + 15.0 * 60.0 + 30.5);
        assert_eq!(t.hours, 2);
        assert_eq!(t.minutes, 15);
        assert!((t.seconds - 30.5).abs() < 1e-9);
    }

    #[test]
    fn total_seconds_round_trips() {
        let t = ClockTime::new(9, 51, 45.0);
        let back = ClockTime::from_seconds(t.total_seconds());
        assert_eq!(back, t);
    }

    #[test]
    fn addition_normalizes_over_total_seconds() {
        let sum = ClockTime::new(1, 30, 0.0) + ClockTime::new(0, 45, 0.0);
        assert_eq!(sum, ClockTime::new(2, 15, 0.0));
    }

    #[test]
    fn subtraction_is_the_inverse_of_addition() {
        let a = ClockTime::new(10, 1, 45.0);
        let b = ClockTime::new(0, 10, 30.0);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn scaling_acts_on_total_seconds() {
        let t = ClockTime::new(1, 0, 0.0).scaled(1.5);
        assert_eq!(t, ClockTime::new(1, 30, 0.0));
    }

    #[test]
    fn display_pads_minutes_and_seconds() {
        assert_eq!(ClockTime::new(9, 5, 7.0).to_string(), " 9:05:07");
    }

    #[test]
    fn hands_point_where_expected_at_9_50_05() {
        // hour: 9/12*360-90 = 180 deg, second: 5/60*360-90 = -60 deg
        let face = clock_face(ClockTime::new(9, 50, 5.0), SIZE).unwrap();
        let center = SIZE.center();
        let radius = SIZE.min_side() / 2.0;

        let hour = face.hour.to;
        assert!((hour.x - (center.x - radius * 0.5)).abs() < 1e-9);
        assert!((hour.y - center.y).abs() < 1e-9);

        let second = face.second.to;
        let expected_angle = -60.0_f64.to_radians();
        assert!((second.x - (center.x + expected_angle.cos() * radius * 0.9)).abs() < 1e-9);
        assert!((second.y - (center.y + expected_angle.sin() * radius * 0.9)).abs() < 1e-9);
    }

    #[test]
    fn smooth_face_creeps_the_hour_hand() {
        let time = ClockTime::new(6, 30, 0.0);
        let stepped = clock_face(time, SIZE).unwrap();
        let smooth = clock_face_smooth(time, SIZE).unwrap();
        let center = SIZE.center();
        let radius = SIZE.min_side() / 2.0;

        // 6:30 puts the hour hand 6.5/12 of a turn past 12 o'clock
        let angle = 6.5 / 12.0 * TAU - FRAC_PI_2;
        let to = smooth.hour.to;
        assert!((to.x - (center.x + angle.cos() * radius * 0.5)).abs() < 1e-9);
        assert!((to.y - (center.y + angle.sin() * radius * 0.5)).abs() < 1e-9);

        // only the hour hand differs from the stepped face
        assert_ne!(stepped.hour.to, smooth.hour.to);
        assert_eq!(stepped.minute, smooth.minute);
        assert_eq!(stepped.second, smooth.second);
    }

    #[test]
    fn hands_share_the_dial_center() {
        let face = clock_face(ClockTime::new(3, 20, 40.0), SIZE).unwrap();
        assert_eq!(face.hour.from, face.dial.center);
        assert_eq!(face.minute.from, face.dial.center);
        assert_eq!(face.second.from, face.dial.center);
        assert_eq!(face.dial.radius, 100.0);
    }

    #[test]
    fn degenerate_rects_are_rejected() {
        assert!(clock_face(ClockTime::ZERO, Size::new(0.0, 10.0)).is_err());
        assert!(clock_face(ClockTime::ZERO, Size::new(10.0, -5.0)).is_err());
    }
}
