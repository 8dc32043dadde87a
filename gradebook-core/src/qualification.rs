//! Qualification tiers and the averaging rule they are derived from.
//!
//! | Average           | Tier         |
//! |-------------------|--------------|
//! | >= 18             | Excellent    |
//! | >= 16             | Very Good    |
//! | >= 14             | Good         |
//! | >= 10             | Average Good |
//! | < 10, or NaN      | Fail         |
//!
//! The evaluator classifies the average *after* rounding it to two decimals,
//! so the tier always agrees with the average that is reported.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Number of decimals kept in a reported average
pub const AVERAGE_DECIMALS: u32 = 2;

/// Grade label derived from an average score
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Qualification {
    Excellent,

    #[serde(rename = "Very Good")]
    #[strum(serialize = "Very Good")]
    VeryGood,

    Good,

    #[serde(rename = "Average Good")]
    #[strum(serialize = "Average Good")]
    AverageGood,

    Fail,
}

impl Qualification {
    /// Map an average onto its tier. First matching threshold wins.
    pub fn from_average(average: f64) -> Self {
        match average {
            a if a >= 18.0 => Qualification::Excellent,
            a if a >= 16.0 => Qualification::VeryGood,
            a if a >= 14.0 => Qualification::Good,
            a if a >= 10.0 => Qualification::AverageGood,
            _ => Qualification::Fail,
        }
    }
}

/// Round `value` to `decimals` places, resolving exact ties to the even digit.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Mean of the three scores, rounded to [`AVERAGE_DECIMALS`]
pub fn average_of(math: f64, physics: f64, informatics: f64) -> f64 {
    round_half_even((math + physics + informatics) / 3.0, AVERAGE_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Qualification::from_average(20.0), Qualification::Excellent);
        assert_eq!(Qualification::from_average(18.0), Qualification::Excellent);
        assert_eq!(Qualification::from_average(17.999), Qualification::VeryGood);
        assert_eq!(Qualification::from_average(16.0), Qualification::VeryGood);
        assert_eq!(Qualification::from_average(15.999), Qualification::Good);
        assert_eq!(Qualification::from_average(14.0), Qualification::Good);
        assert_eq!(Qualification::from_average(13.999), Qualification::AverageGood);
        assert_eq!(Qualification::from_average(10.0), Qualification::AverageGood);
        assert_eq!(Qualification::from_average(9.999), Qualification::Fail);
        assert_eq!(Qualification::from_average(0.0), Qualification::Fail);
    }

    #[test]
    fn test_total_over_reals() {
        assert_eq!(Qualification::from_average(-5.0), Qualification::Fail);
        assert_eq!(Qualification::from_average(f64::NAN), Qualification::Fail);
        assert_eq!(
            Qualification::from_average(f64::INFINITY),
            Qualification::Excellent
        );
        assert_eq!(
            Qualification::from_average(f64::NEG_INFINITY),
            Qualification::Fail
        );
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = Qualification::iter().map(|q| q.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Excellent", "Very Good", "Good", "Average Good", "Fail"]
        );

        assert_eq!(
            Qualification::from_str("Average Good").unwrap(),
            Qualification::AverageGood
        );
        assert!(Qualification::from_str("Outstanding").is_err());

        assert_eq!(
            serde_json::to_string(&Qualification::VeryGood).unwrap(),
            "\"Very Good\""
        );
        let parsed: Qualification = serde_json::from_str("\"Fail\"").unwrap();
        assert_eq!(parsed, Qualification::Fail);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(20.0, 2), 20.0);
        assert_eq!(round_half_even(13.333333333333334, 2), 13.33);
        assert_eq!(round_half_even(16.666666666666668, 2), 16.67);
        // exact ties in binary
        assert_eq!(round_half_even(0.125, 2), 0.12);
        assert_eq!(round_half_even(0.375, 2), 0.38);
        assert_eq!(round_half_even(10.125, 2), 10.12);
        assert_eq!(round_half_even(10.625, 2), 10.62);
    }

    #[test]
    fn test_average_of() {
        assert_eq!(average_of(20.0, 20.0, 20.0), 20.0);
        assert_eq!(average_of(10.0, 10.0, 10.0), 10.0);
        assert_eq!(average_of(0.0, 0.0, 0.0), 0.0);
        assert_eq!(average_of(17.0, 18.0, 18.0), 17.67);
        assert_eq!(average_of(14.0, 14.0, 13.99), 14.0);
    }
}
