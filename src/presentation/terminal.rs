use crate::outcome::{DetailOutcome, SearchOutcome};
use crate::presentation::Presenter;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, Ordering};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter at least one ingredient.";
pub const NO_RESULTS_MESSAGE: &str = "Sorry, we didn't find any meal!";
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const RECIPE_NOT_FOUND_MESSAGE: &str = "Sorry, we couldn't find that recipe.";
pub const RECIPE_FAILED_MESSAGE: &str = "Could not load the recipe. Please try again.";

/// Plain text presenter for an interactive terminal
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    detail_visible: AtomicBool,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_detail_visible(&self) -> bool {
        self.detail_visible.load(Ordering::SeqCst)
    }
}

impl Presenter for TerminalPresenter {
    fn loading(&self) {
        println!("Loading...");
    }

    fn render_meal_list(&self, outcome: &SearchOutcome) {
        print!("{}", format_meal_list(outcome));
    }

    fn render_recipe(&self, outcome: &DetailOutcome) {
        print!("{}", format_recipe(outcome));
    }

    fn set_detail_visible(&self, visible: bool) {
        let was_visible = self.detail_visible.swap(visible, Ordering::SeqCst);
        if was_visible && !visible {
            println!("(recipe closed)");
        }
    }
}

/// Text for the meal list area
pub fn format_meal_list(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Meals { meals } => {
            let mut out = String::new();
            for (index, meal) in meals.iter().enumerate() {
                let _ = writeln!(out, "{:>3}. {} [{}]", index + 1, meal.name, meal.id);
            }
            out
        }
        SearchOutcome::NoResults => format!("{}\n", NO_RESULTS_MESSAGE),
        SearchOutcome::EmptyQuery => format!("{}\n", EMPTY_QUERY_MESSAGE),
        SearchOutcome::Failed { .. } => format!("{}\n", SEARCH_FAILED_MESSAGE),
    }
}

/// Text for the recipe detail overlay
pub fn format_recipe(outcome: &DetailOutcome) -> String {
    let recipe = match outcome {
        DetailOutcome::Found { recipe } => recipe,
        DetailOutcome::NotFound { .. } => return format!("{}\n", RECIPE_NOT_FOUND_MESSAGE),
        DetailOutcome::FetchFailed { .. } => return format!("{}\n", RECIPE_FAILED_MESSAGE),
    };

    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", recipe.name);

    let labels: Vec<&str> = [recipe.category.as_deref(), recipe.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !labels.is_empty() {
        let _ = writeln!(out, "{}", labels.join(" / "));
    }

    if !recipe.ingredients.is_empty() {
        let _ = writeln!(out, "\nIngredients:");
        for line in &recipe.ingredients {
            if line.measure.is_empty() {
                let _ = writeln!(out, "  - {}", line.ingredient);
            } else {
                let _ = writeln!(out, "  - {} {}", line.measure, line.ingredient);
            }
        }
    }

    let _ = writeln!(out, "\nInstructions:\n{}", recipe.instructions.trim());

    if let Some(thumbnail) = &recipe.thumbnail {
        let _ = writeln!(out, "\nImage: {}", thumbnail);
    }
    if let Some(youtube) = &recipe.youtube {
        let _ = writeln!(out, "Watch Video: {}", youtube);
    }
    if let Some(source) = &recipe.source {
        let _ = writeln!(out, "Source: {}", source);
    }
    if !recipe.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", recipe.tags.join(", "));
    }
    out
}
