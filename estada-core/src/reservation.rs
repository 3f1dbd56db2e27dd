use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{CoreError, CoreResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirmed" => Ok(ReservationStatus::Confirmed),
            "Cancelled" => Ok(ReservationStatus::Cancelled),
            other => Err(CoreError::InternalError(format!(
                "Unknown reservation status '{}'",
                other
            ))),
        }
    }
}

/// A half-open stay `[checkin, checkout)`. Always non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    checkin: NaiveDate,
    checkout: NaiveDate,
}

impl StayDates {
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> CoreResult<Self> {
        if checkin >= checkout {
            return Err(CoreError::ValidationError(
                "Check-out date must be after the check-in date.".to_string(),
            ));
        }
        Ok(Self { checkin, checkout })
    }

    /// Parses two `YYYY-MM-DD` strings. Format is checked before ordering.
    pub fn parse(checkin: &str, checkout: &str) -> CoreResult<Self> {
        let checkin = parse_date(checkin)?;
        let checkout = parse_date(checkout)?;
        Self::new(checkin, checkout)
    }

    pub fn checkin(&self) -> NaiveDate {
        self.checkin
    }

    pub fn checkout(&self) -> NaiveDate {
        self.checkout
    }

    pub fn nights(&self) -> i64 {
        (self.checkout - self.checkin).num_days()
    }

    /// Back-to-back stays do not overlap.
    pub fn overlaps(&self, other: &StayDates) -> bool {
        self.checkin < other.checkout && self.checkout > other.checkin
    }

    pub fn total_for_rate(&self, nightly_rate: f64) -> f64 {
        nightly_rate * self.nights() as f64
    }
}

pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| CoreError::FormatError("Invalid date format. Use YYYY-MM-DD.".to_string()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub room_number: String,
    pub guest_name: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub status: ReservationStatus,
    pub total: f64,
}

/// Row to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub room_number: String,
    pub guest_name: String,
    pub stay: StayDates,
    pub status: ReservationStatus,
    pub total: f64,
}

impl NewReservation {
    pub fn into_reservation(self, id: i64) -> Reservation {
        Reservation {
            id,
            room_number: self.room_number,
            guest_name: self.guest_name,
            checkin: self.stay.checkin(),
            checkout: self.stay.checkout(),
            status: self.status,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stay(checkin: &str, checkout: &str) -> StayDates {
        StayDates::parse(checkin, checkout).unwrap()
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        let err = StayDates::parse("01/01/2025", "2025-01-03").unwrap_err();
        assert!(matches!(err, CoreError::FormatError(_)));

        let err = StayDates::parse("2025-01-01", "2025-02-30").unwrap_err();
        assert!(matches!(err, CoreError::FormatError(_)));
    }

    #[test]
    fn test_parse_rejects_inverted_or_empty_stay() {
        let err = StayDates::parse("2025-01-03", "2025-01-01").unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));

        let err = StayDates::parse("2025-01-01", "2025-01-01").unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn test_nights_and_total() {
        let s = stay("2025-01-01", "2025-01-03");
        assert_eq!(s.nights(), 2);
        assert!((s.total_for_rate(150.0) - 300.0).abs() < f64::EPSILON);

        let across_month = stay("2025-01-30", "2025-02-02");
        assert_eq!(across_month.nights(), 3);
    }

    #[test]
    fn test_overlap_is_half_open() {
        let base = stay("2025-01-10", "2025-01-15");

        assert!(base.overlaps(&stay("2025-01-12", "2025-01-20")));
        assert!(base.overlaps(&stay("2025-01-05", "2025-01-11")));
        assert!(base.overlaps(&stay("2025-01-11", "2025-01-12")));
        assert!(base.overlaps(&stay("2025-01-01", "2025-01-31")));

        // checkout day of one stay is the checkin day of the next
        assert!(!base.overlaps(&stay("2025-01-15", "2025-01-18")));
        assert!(!base.overlaps(&stay("2025-01-05", "2025-01-10")));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = stay("2025-03-01", "2025-03-04");
        let b = stay("2025-03-03", "2025-03-08");
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}
