//! Type definitions for MealDB API responses.
//!
//! ## Key Types
//!
//! - [`Meal`] - A recipe record, kept as the raw JSON object the API returned
//! - [`Category`] - A meal category from `categories.php`, kept whole
//! - [`Ingredient`] - An ingredient facet from `list.php?i=list`, kept whole
//!
//! ## Meal Records
//!
//! The API returns meals as flat objects whose fields are strings or `null`,
//! with ingredients spread across `strIngredient1..20` and `strMeasure1..20`.
//! Filter endpoints only return `idMeal`, `strMeal` and `strMealThumb`. Rather
//! than forcing one schema over both shapes, [`Meal`] keeps the whole object and
//! exposes typed accessors for the well-known fields.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Highest `strIngredientN` / `strMeasureN` index the API uses.
pub const MAX_INGREDIENTS: usize = 20;

const DATE_MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recipe record.
///
/// Full records come from search, lookup and random endpoints; partial ones
/// (id, name, thumbnail) from the filter endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meal(Map<String, Value>);

impl Meal {
    /// String value of any field, `None` when absent, `null` or not a string.
    pub fn get(&self, key: &str) -> Option<&str> {
        string_field(&self.0, key)
    }

    pub fn id(&self) -> Option<&str> {
        self.get("idMeal")
    }

    pub fn name(&self) -> Option<&str> {
        self.get("strMeal")
    }

    pub fn drink_alternate(&self) -> Option<&str> {
        self.get("strDrinkAlternate")
    }

    pub fn category(&self) -> Option<&str> {
        self.get("strCategory")
    }

    pub fn area(&self) -> Option<&str> {
        self.get("strArea")
    }

    pub fn instructions(&self) -> Option<&str> {
        self.get("strInstructions")
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.get("strMealThumb")
    }

    pub fn youtube(&self) -> Option<&str> {
        self.get("strYoutube")
    }

    pub fn source(&self) -> Option<&str> {
        self.get("strSource")
    }

    /// Tags from the comma separated `strTags` field.
    pub fn tags(&self) -> Vec<String> {
        self.get("strTags")
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ingredient/measure pairs in index order, skipping blank ingredient slots.
    pub fn ingredients(&self) -> Vec<IngredientMeasure> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                let ingredient = self.get(&format!("strIngredient{}", i))?.trim();
                if ingredient.is_empty() {
                    return None;
                }
                let measure = self
                    .get(&format!("strMeasure{}", i))
                    .map(str::trim)
                    .unwrap_or_default();
                Some(IngredientMeasure {
                    ingredient: ingredient.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    /// Parsed `dateModified`; `None` when null or not in `YYYY-MM-DD HH:MM:SS` form.
    pub fn date_modified(&self) -> Option<NaiveDateTime> {
        self.get("dateModified")
            .and_then(|raw| NaiveDateTime::parse_from_str(raw, DATE_MODIFIED_FORMAT).ok())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Meal {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// One ingredient line of a meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientMeasure {
    pub ingredient: String,
    /// Free-form quantity, empty when the API gave none
    pub measure: String,
}

fn string_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// A meal category as returned by `categories.php`, kept whole like [`Meal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(Map<String, Value>);

impl Category {
    pub fn get(&self, key: &str) -> Option<&str> {
        string_field(&self.0, key)
    }

    pub fn id(&self) -> Option<&str> {
        self.get("idCategory")
    }

    pub fn name(&self) -> Option<&str> {
        self.get("strCategory")
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.get("strCategoryThumb")
    }

    pub fn description(&self) -> Option<&str> {
        self.get("strCategoryDescription")
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Category {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// An ingredient facet as returned by `list.php?i=list`, kept whole like [`Meal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ingredient(Map<String, Value>);

impl Ingredient {
    pub fn get(&self, key: &str) -> Option<&str> {
        string_field(&self.0, key)
    }

    pub fn id(&self) -> Option<&str> {
        self.get("idIngredient")
    }

    pub fn name(&self) -> Option<&str> {
        self.get("strIngredient")
    }

    pub fn description(&self) -> Option<&str> {
        self.get("strDescription")
    }

    /// Ingredient type, e.g. "Meat"; mostly null
    pub fn kind(&self) -> Option<&str> {
        self.get("strType")
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.get("strThumb")
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Ingredient {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Row of `list.php?c=list`, only the category name is kept.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoryName {
    #[serde(rename = "strCategory")]
    pub name: String,
}

/// Row of `list.php?a=list`, only the area name is kept.
#[derive(Debug, Deserialize)]
pub(crate) struct AreaName {
    #[serde(rename = "strArea")]
    pub name: String,
}
