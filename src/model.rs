use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Number of numbered ingredient/measure slots a catalog recipe carries
const INGREDIENT_SLOTS: usize = 20;

/// A meal as returned by the ingredient filter endpoint.
///
/// Reads both the catalog's field names and the ones it serializes with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename(deserialize = "idMeal"), alias = "id")]
    pub id: String,
    #[serde(rename(deserialize = "strMeal"), alias = "name")]
    pub name: String,
    /// Empty when the catalog has no image
    #[serde(
        rename(deserialize = "strMealThumb"),
        alias = "thumbnail",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub thumbnail: String,
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub ingredient: String,
    /// Quantity as written by the catalog ("2 tbsp", "pinch"); may be empty
    pub measure: String,
}

/// A full recipe as returned by the lookup endpoint.
///
/// Built from the catalog's wire shape only; serializing produces the
/// field names below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: String,
    /// Image URL for the finished dish
    pub thumbnail: Option<String>,
    pub youtube: Option<String>,
    pub source: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<IngredientLine>,
}

/// Wire shape of a catalog recipe. The catalog spreads ingredients over
/// `strIngredient1..20` / `strMeasure1..20`; those land in `rest`.
#[derive(Deserialize)]
pub(crate) struct RawRecipe {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strCategory", default, deserialize_with = "blank_as_none")]
    category: Option<String>,
    #[serde(rename = "strArea", default, deserialize_with = "blank_as_none")]
    area: Option<String>,
    #[serde(rename = "strInstructions", default, deserialize_with = "blank_as_none")]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb", default, deserialize_with = "blank_as_none")]
    thumbnail: Option<String>,
    #[serde(rename = "strYoutube", default, deserialize_with = "blank_as_none")]
    youtube: Option<String>,
    #[serde(rename = "strSource", default, deserialize_with = "blank_as_none")]
    source: Option<String>,
    #[serde(rename = "strTags", default, deserialize_with = "blank_as_none")]
    tags: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl From<RawRecipe> for RecipeDetail {
    fn from(raw: RawRecipe) -> Self {
        let slot = |prefix: &str, n: usize| -> Option<String> {
            raw.rest
                .get(&format!("{}{}", prefix, n))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let ingredients = (1..=INGREDIENT_SLOTS)
            .filter_map(|n| {
                slot("strIngredient", n).map(|ingredient| IngredientLine {
                    ingredient,
                    measure: slot("strMeasure", n).unwrap_or_default(),
                })
            })
            .collect();

        let tags = raw
            .tags
            .as_deref()
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        RecipeDetail {
            id: raw.id,
            name: raw.name,
            category: raw.category,
            area: raw.area,
            instructions: raw.instructions.unwrap_or_default(),
            thumbnail: raw.thumbnail,
            youtube: raw.youtube,
            source: raw.source,
            tags,
            ingredients,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Response envelope shared by every catalog endpoint.
///
/// The catalog answers `{"meals": null}` when nothing matches. That absence
/// is normalized to an empty list right here.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    #[serde(default = "Option::default")]
    meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub(crate) fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Ordered meals in which no two entries share an id.
///
/// The first occurrence of an id wins; later duplicates are dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MealSummarySet {
    meals: Vec<MealSummary>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl MealSummarySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a meal unless one with the same id is already present.
    /// Returns whether the meal was added.
    pub fn insert(&mut self, meal: MealSummary) -> bool {
        if !self.seen.insert(meal.id.clone()) {
            return false;
        }
        self.meals.push(meal);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MealSummary> {
        self.meals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MealSummary> {
        self.meals.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.meals.iter().map(|m| m.id.as_str())
    }

    pub fn into_vec(self) -> Vec<MealSummary> {
        self.meals
    }
}

impl Extend<MealSummary> for MealSummarySet {
    fn extend<I: IntoIterator<Item = MealSummary>>(&mut self, iter: I) {
        for meal in iter {
            self.insert(meal);
        }
    }
}

impl FromIterator<MealSummary> for MealSummarySet {
    fn from_iter<I: IntoIterator<Item = MealSummary>>(iter: I) -> Self {
        let mut set = MealSummarySet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a MealSummarySet {
    type Item = &'a MealSummary;
    type IntoIter = std::slice::Iter<'a, MealSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.iter()
    }
}
