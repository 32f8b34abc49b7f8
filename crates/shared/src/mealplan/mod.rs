use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::{MealType, Recipe};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All seven days in calendar order.
    pub fn week() -> Vec<Day> {
        Day::VARIANTS.to_vec()
    }
}

impl From<time::Weekday> for Day {
    fn from(value: time::Weekday) -> Self {
        match value {
            time::Weekday::Monday => Day::Monday,
            time::Weekday::Tuesday => Day::Tuesday,
            time::Weekday::Wednesday => Day::Wednesday,
            time::Weekday::Thursday => Day::Thursday,
            time::Weekday::Friday => Day::Friday,
            time::Weekday::Saturday => Day::Saturday,
            time::Weekday::Sunday => Day::Sunday,
        }
    }
}

/// One entry of a week plan: a recipe served on a day, optionally in a meal slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: Day,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    pub recipe: Recipe,
}

pub type WeekPlan = Vec<DayPlan>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_is_in_calendar_order() {
        let week = Day::week();
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], Day::Monday);
        assert_eq!(week[6], Day::Sunday);
        assert!(Day::Monday < Day::Sunday);
    }

    #[test]
    fn day_from_weekday() {
        assert_eq!(Day::from(time::Weekday::Thursday), Day::Thursday);
        assert_eq!("Saturday".parse::<Day>().unwrap(), Day::Saturday);
    }
}
