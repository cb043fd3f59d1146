use crate::error::SearchError;
use crate::fetcher::RecipeFetcher;
use crate::model::MealSummarySet;
use crate::outcome::{DetailOutcome, SearchOutcome};
use crate::presentation::Presenter;
use crate::query::parse_ingredients;
use crate::resolver::IngredientResolver;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Input coming from the presentation surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Raw, untrimmed search text
    SearchRequested(String),
    /// Id of a meal that was shown in the list
    RecipeRequested(String),
    CloseDetail,
}

/// Whether a finished request made it to the screen
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery<T> {
    Rendered(T),
    /// A newer request of the same kind started before this one finished
    Superseded,
}

impl<T> Delivery<T> {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Delivery::Rendered(_))
    }
}

/// What is currently on screen
#[derive(Default)]
struct Screen {
    meals: MealSummarySet,
}

/// Connects user events, the resolver and fetcher, and a [`Presenter`].
///
/// Every search and recipe request is tagged with an epoch when it starts.
/// When it finishes it is rendered only if no newer request of the same
/// kind has started in the meantime, so a slow response can never replace
/// the result of a later request. Searches and recipe requests are tracked
/// separately.
pub struct Session {
    resolver: IngredientResolver,
    fetcher: RecipeFetcher,
    presenter: Arc<dyn Presenter>,
    search_epoch: AtomicU64,
    detail_epoch: AtomicU64,
    screen: Mutex<Screen>,
}

impl Session {
    pub fn new(
        resolver: IngredientResolver,
        fetcher: RecipeFetcher,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            presenter,
            search_epoch: AtomicU64::new(0),
            detail_epoch: AtomicU64::new(0),
            screen: Mutex::new(Screen::default()),
        }
    }

    /// Dispatch one event from the presentation surface
    pub async fn handle(&self, event: UiEvent) {
        match event {
            UiEvent::SearchRequested(query) => {
                self.search(&query).await;
            }
            UiEvent::RecipeRequested(id) => {
                self.recipe(&id).await;
            }
            UiEvent::CloseDetail => self.close_detail(),
        }
    }

    /// Run a search and render its outcome if it is still the latest one
    pub async fn search(&self, raw_query: &str) -> Delivery<SearchOutcome> {
        let epoch = self.search_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let tokens = parse_ingredients(raw_query);

        let result = if tokens.is_empty() {
            Err(SearchError::EmptyQuery)
        } else {
            {
                let _screen = self.lock_screen();
                if self.is_current_search(epoch) {
                    self.presenter.loading();
                }
            }
            self.resolver.resolve(&tokens).await
        };
        let outcome = SearchOutcome::from_result(result);

        let mut screen = self.lock_screen();
        if !self.is_current_search(epoch) {
            debug!("Dropping result of superseded search #{}", epoch);
            return Delivery::Superseded;
        }
        self.presenter.render_meal_list(&outcome);
        screen.meals = outcome.meals().cloned().unwrap_or_default();
        Delivery::Rendered(outcome)
    }

    /// Fetch a recipe and show it in the detail overlay if it is still the
    /// latest recipe request
    pub async fn recipe(&self, id: &str) -> Delivery<DetailOutcome> {
        let epoch = self.detail_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = DetailOutcome::from_result(self.fetcher.fetch_detail(id).await);

        let _screen = self.lock_screen();
        if self.detail_epoch.load(Ordering::SeqCst) != epoch {
            debug!("Dropping result of superseded recipe request #{}", epoch);
            return Delivery::Superseded;
        }
        self.presenter.render_recipe(&outcome);
        self.presenter.set_detail_visible(true);
        Delivery::Rendered(outcome)
    }

    /// Hide the overlay. A recipe still in flight will not reopen it.
    pub fn close_detail(&self) {
        let _screen = self.lock_screen();
        self.detail_epoch.fetch_add(1, Ordering::SeqCst);
        self.presenter.set_detail_visible(false);
    }

    /// Meals in the most recently rendered list
    pub fn displayed_meals(&self) -> MealSummarySet {
        self.lock_screen().meals.clone()
    }

    /// Map user input to a meal id.
    ///
    /// A number from 1 to the length of the displayed list picks that
    /// position; anything else is taken as an id.
    pub fn resolve_selection(&self, selector: &str) -> String {
        let selector = selector.trim();
        let screen = self.lock_screen();
        selector
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| screen.meals.get(index))
            .map(|meal| meal.id.clone())
            .unwrap_or_else(|| selector.to_string())
    }

    fn is_current_search(&self, epoch: u64) -> bool {
        self.search_epoch.load(Ordering::SeqCst) == epoch
    }

    fn lock_screen(&self) -> MutexGuard<'_, Screen> {
        // Rendering never leaves the screen half-updated, so a poisoned
        // lock is still usable
        self.screen.lock().unwrap_or_else(|e| e.into_inner())
    }
}
