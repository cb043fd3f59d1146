#![allow(dead_code)]

use async_trait::async_trait;
use mealfinder::{
    CatalogError, DetailOutcome, MealCatalog, MealSummary, Presenter, RecipeDetail,
    SearchOutcome,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn meal(id: &str) -> MealSummary {
    MealSummary {
        id: id.to_string(),
        name: format!("Meal {}", id),
        thumbnail: format!("https://img.example/{}.jpg", id),
    }
}

pub fn recipe(id: &str) -> RecipeDetail {
    RecipeDetail {
        id: id.to_string(),
        name: format!("Recipe {}", id),
        category: Some("Test".to_string()),
        area: None,
        instructions: "Cook it.".to_string(),
        thumbnail: None,
        youtube: None,
        source: None,
        tags: Vec::new(),
        ingredients: Vec::new(),
    }
}

/// In-memory catalog whose replies arrive after a per-key delay
#[derive(Default)]
pub struct ScriptedCatalog {
    filters: HashMap<String, (u64, Option<Vec<&'static str>>)>,
    lookups: HashMap<String, (u64, Option<bool>)>,
    pub filter_calls: AtomicUsize,
    pub lookup_calls: AtomicUsize,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingredient `token` answers with `ids` after `delay_ms`
    pub fn filter(mut self, token: &str, delay_ms: u64, ids: Vec<&'static str>) -> Self {
        self.filters.insert(token.to_string(), (delay_ms, Some(ids)));
        self
    }

    /// Ingredient `token` fails after `delay_ms`
    pub fn failing_filter(mut self, token: &str, delay_ms: u64) -> Self {
        self.filters.insert(token.to_string(), (delay_ms, None));
        self
    }

    /// Meal `id` exists (or not, if `found` is false) and answers after `delay_ms`
    pub fn lookup(mut self, id: &str, delay_ms: u64, found: bool) -> Self {
        self.lookups.insert(id.to_string(), (delay_ms, Some(found)));
        self
    }

    pub fn failing_lookup(mut self, id: &str, delay_ms: u64) -> Self {
        self.lookups.insert(id.to_string(), (delay_ms, None));
        self
    }

    pub fn filter_calls(&self) -> usize {
        self.filter_calls.load(Ordering::SeqCst)
    }
}

fn scripted_failure(key: &str) -> CatalogError {
    CatalogError::Status {
        status: 500,
        url: format!("scripted://{}", key),
    }
}

#[async_trait]
impl MealCatalog for ScriptedCatalog {
    fn catalog_name(&self) -> &str {
        "scripted"
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, CatalogError> {
        self.filter_calls.fetch_add(1, Ordering::SeqCst);
        let (delay, reply) = self.filters.get(ingredient).cloned().unwrap_or((0, Some(vec![])));
        tokio::time::sleep(Duration::from_millis(delay)).await;
        match reply {
            Some(ids) => Ok(ids.into_iter().map(meal).collect()),
            None => Err(scripted_failure(ingredient)),
        }
    }

    async fn lookup_meal(&self, id: &str) -> Result<Vec<RecipeDetail>, CatalogError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        let (delay, reply) = self.lookups.get(id).cloned().unwrap_or((0, Some(false)));
        tokio::time::sleep(Duration::from_millis(delay)).await;
        match reply {
            Some(true) => Ok(vec![recipe(id)]),
            Some(false) => Ok(vec![]),
            None => Err(scripted_failure(id)),
        }
    }
}

/// Everything a presenter was asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Loading,
    MealList(SearchOutcome),
    Recipe(DetailOutcome),
    DetailVisible(bool),
}

#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<Rendered>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<Rendered> {
        self.events.lock().unwrap().clone()
    }

    pub fn meal_lists(&self) -> Vec<SearchOutcome> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Rendered::MealList(outcome) => Some(outcome),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Rendered) {
        self.events.lock().unwrap().push(event);
    }
}

impl Presenter for RecordingPresenter {
    fn loading(&self) {
        self.push(Rendered::Loading);
    }

    fn render_meal_list(&self, outcome: &SearchOutcome) {
        self.push(Rendered::MealList(outcome.clone()));
    }

    fn render_recipe(&self, outcome: &DetailOutcome) {
        self.push(Rendered::Recipe(outcome.clone()));
    }

    fn set_detail_visible(&self, visible: bool) {
        self.push(Rendered::DetailVisible(visible));
    }
}
