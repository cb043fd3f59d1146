mod json;
mod terminal;

pub use json::{event_json, JsonPresenter};
pub use terminal::{format_meal_list, format_recipe, TerminalPresenter};

use crate::outcome::{DetailOutcome, SearchOutcome};

/// Sink for everything the user gets to see.
///
/// The core never talks to a presenter directly; [`crate::Session`] decides
/// what reaches it and when.
pub trait Presenter: Send + Sync {
    /// A non-empty search has started
    fn loading(&self);

    fn render_meal_list(&self, outcome: &SearchOutcome);

    fn render_recipe(&self, outcome: &DetailOutcome);

    /// Show or hide the recipe detail overlay
    fn set_detail_visible(&self, visible: bool);
}
