use std::collections::HashSet;

use mealprep_shared::{
    mealplan::{Day, DayPlan, WeekPlan},
    recipe::Recipe,
};

use crate::RandomSource;

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.pick(i + 1);
        items.swap(i, j);
    }
}

/// Swaps the recipe at `index` for a pool recipe that appears nowhere in the
/// plan yet. The plan comes back untouched when the pool is empty, `index` is
/// out of range, or every candidate is already used.
pub fn get_replacement_meal(
    index: usize,
    mut plan: WeekPlan,
    pool: &[Recipe],
    rng: &mut dyn RandomSource,
) -> WeekPlan {
    if pool.is_empty() || index >= plan.len() {
        return plan;
    }

    let used = plan.iter().map(|entry| entry.recipe.id).collect::<HashSet<_>>();

    let mut candidates = pool.iter().collect::<Vec<_>>();
    shuffle(&mut candidates, rng);

    if let Some(candidate) = candidates.into_iter().find(|r| !used.contains(&r.id)) {
        tracing::debug!(
            index,
            from = plan[index].recipe.id,
            to = candidate.id,
            "meal replaced"
        );
        plan[index].recipe = candidate.clone();
    }

    plan
}

/// Unsaved preview: one recipe per day of the week, cycling through a
/// shuffled copy of `recipes`.
pub fn shuffle_week(recipes: &[Recipe], rng: &mut dyn RandomSource) -> WeekPlan {
    if recipes.is_empty() {
        return vec![];
    }

    let mut shuffled = recipes.to_vec();
    shuffle(&mut shuffled, rng);

    Day::week()
        .into_iter()
        .enumerate()
        .map(|(i, day)| DayPlan {
            day,
            meal_type: None,
            recipe: shuffled[i % shuffled.len()].clone(),
        })
        .collect()
}
