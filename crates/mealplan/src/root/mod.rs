mod assign;
mod create;
mod day;
mod delete;
mod update;

use std::ops::Deref;
use time::OffsetDateTime;
use validator::ValidationError;

pub use assign::{AssignInput, UpdateAssignmentInput};
pub use create::CreateInput;
pub use day::Slot;
pub use update::UpdateInput;

/// Meal plan store: plans and their (day, recipe, meal type) assignments.
#[derive(Clone)]
pub struct Command {
    state: mealprep_shared::State,
}

impl Deref for Command {
    type Target = mealprep_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: mealprep_shared::State) -> Self {
        Self { state }
    }
}

pub(crate) fn check_dates(
    start_date: OffsetDateTime,
    end_date: Option<OffsetDateTime>,
) -> Result<(), ValidationError> {
    match end_date {
        Some(end_date) if end_date < start_date => Err(ValidationError::new("date_range")
            .with_message("end date must not precede start date".into())),
        _ => Ok(()),
    }
}
