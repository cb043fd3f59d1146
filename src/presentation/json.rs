use crate::outcome::{DetailOutcome, SearchOutcome};
use crate::presentation::Presenter;
use log::error;
use serde::Serialize;
use serde_json::{json, Value};

/// Emits one JSON object per line, for scripts and other front ends
#[derive(Debug, Default)]
pub struct JsonPresenter;

impl JsonPresenter {
    pub fn new() -> Self {
        JsonPresenter
    }

    fn emit(&self, line: Value) {
        println!("{}", line);
    }
}

/// Serialize a tagged outcome and add an `event` field to it
pub fn event_json<T: Serialize>(event: &str, outcome: &T) -> Value {
    match serde_json::to_value(outcome) {
        Ok(Value::Object(mut fields)) => {
            fields.insert("event".to_string(), Value::String(event.to_string()));
            Value::Object(fields)
        }
        Ok(other) => json!({ "event": event, "data": other }),
        Err(e) => {
            error!("Failed to serialize {} event: {}", event, e);
            json!({ "event": event, "status": "serialization_failed" })
        }
    }
}

impl Presenter for JsonPresenter {
    fn loading(&self) {
        self.emit(json!({ "event": "loading" }));
    }

    fn render_meal_list(&self, outcome: &SearchOutcome) {
        self.emit(event_json("meal_list", outcome));
    }

    fn render_recipe(&self, outcome: &DetailOutcome) {
        self.emit(event_json("recipe", outcome));
    }

    fn set_detail_visible(&self, visible: bool) {
        self.emit(json!({ "event": "detail_visibility", "visible": visible }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_merges_status() {
        let value = event_json("meal_list", &SearchOutcome::NoResults);
        assert_eq!(value, json!({ "event": "meal_list", "status": "no_results" }));
    }

    #[test]
    fn test_event_json_detail() {
        let value = event_json(
            "recipe",
            &DetailOutcome::FetchFailed {
                id: "42".to_string(),
                message: "timeout".to_string(),
            },
        );
        assert_eq!(value["event"], "recipe");
        assert_eq!(value["status"], "fetch_failed");
        assert_eq!(value["id"], "42");
    }
}
