use std::collections::HashMap;

use mealprep_shared::mealplan::{Day, WeekPlan};
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// Opaque, unique within a list.
    pub id: String,
    pub name: String,
    pub count: usize,
    pub recipes: Vec<String>,
    pub days: Vec<Day>,
}

impl ShoppingListItem {
    /// Recipe names without repeats, in first-seen order.
    pub fn distinct_recipes(&self) -> Vec<&str> {
        let mut recipes: Vec<&str> = vec![];
        for recipe in &self.recipes {
            if !recipes.contains(&recipe.as_str()) {
                recipes.push(recipe);
            }
        }

        recipes
    }

    pub fn distinct_days(&self) -> Vec<Day> {
        let mut days = vec![];
        for day in &self.days {
            if !days.contains(day) {
                days.push(*day);
            }
        }

        days
    }
}

/// Items keyed by normalized ingredient name, kept in first-insertion order.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ShoppingList {
    pub fn get(&self, name: &str) -> Option<&ShoppingListItem> {
        let position = self.index.get(&normalize_name(name))?;
        self.items.get(*position)
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ShoppingList {
    type Item = ShoppingListItem;
    type IntoIter = std::vec::IntoIter<ShoppingListItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Lowercased and trimmed; amount and unit never take part in the key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Counts every ingredient occurrence across the plan. Each occurrence also
/// records the recipe name and the day it comes from, duplicates included.
pub fn generate_shopping_list(plan: &WeekPlan) -> ShoppingList {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut items: Vec<ShoppingListItem> = vec![];

    for entry in plan {
        for name in entry.recipe.ingredient_names() {
            let key = normalize_name(name);
            if key.is_empty() {
                continue;
            }

            match index.get(&key) {
                Some(position) => {
                    let item = &mut items[*position];
                    item.count += 1;
                    item.recipes.push(entry.recipe.name.to_owned());
                    item.days.push(entry.day);
                }
                None => {
                    index.insert(key.to_owned(), items.len());
                    items.push(ShoppingListItem {
                        id: ulid::Ulid::new().to_string(),
                        name: key,
                        count: 1,
                        recipes: vec![entry.recipe.name.to_owned()],
                        days: vec![entry.day],
                    });
                }
            }
        }
    }

    ShoppingList { items, index }
}
