//! Inbound request payload from the conversational platform.

use std::collections::HashMap;

use serde::Deserialize;

/// A fulfillment request as delivered by the platform.
///
/// `sessionState.intent.name` is required; a payload without it fails
/// deserialization and the invocation fails with it. Everything below the
/// intent name is optional, so an absent or partial slot path reads as
/// "no value" rather than an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexEvent {
    pub session_state: SessionState,
    /// Conversation-scoped attributes, passed through to the response
    /// unchanged and never interpreted here.
    #[serde(default)]
    pub session_attributes: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub intent: Intent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Option<Slot>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub value: Option<SlotValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotValue {
    #[serde(default)]
    pub interpreted_value: Option<String>,
}

impl LexEvent {
    /// Returns the recognized intent name.
    pub fn intent_name(&self) -> &str {
        &self.session_state.intent.name
    }

    /// Returns the interpreted value of a named slot.
    ///
    /// Walks intent -> slots -> [name] -> value -> interpretedValue and
    /// short-circuits to `None` at any missing link. An empty interpreted
    /// value also counts as absent.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.session_state
            .intent
            .slots
            .get(name)?
            .as_ref()?
            .value
            .as_ref()?
            .interpreted_value
            .as_deref()
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn event_from(value: serde_json::Value) -> LexEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn slot_reads_interpreted_value() {
        let event = event_from(json!({
            "sessionState": {
                "intent": {
                    "name": "GetStudentInfo",
                    "slots": {
                        "student_id": {"value": {"interpretedValue": "S2023001"}}
                    }
                }
            }
        }));
        assert_eq!(event.slot("student_id"), Some("S2023001"));
        assert_eq!(event.intent_name(), "GetStudentInfo");
    }

    #[test]
    fn slot_is_none_when_slots_are_missing() {
        let event = event_from(json!({
            "sessionState": {"intent": {"name": "FAQ"}}
        }));
        assert_eq!(event.slot("topic"), None);
    }

    #[test]
    fn slot_is_none_when_slot_is_null() {
        let event = event_from(json!({
            "sessionState": {
                "intent": {"name": "FAQ", "slots": {"topic": null}}
            }
        }));
        assert_eq!(event.slot("topic"), None);
    }

    #[test]
    fn slot_is_none_when_value_is_missing() {
        let event = event_from(json!({
            "sessionState": {
                "intent": {"name": "FAQ", "slots": {"topic": {}}}
            }
        }));
        assert_eq!(event.slot("topic"), None);
    }

    #[test]
    fn empty_interpreted_value_counts_as_absent() {
        let event = event_from(json!({
            "sessionState": {
                "intent": {
                    "name": "GetStudentInfo",
                    "slots": {"student_id": {"value": {"interpretedValue": ""}}}
                }
            }
        }));
        assert_eq!(event.slot("student_id"), None);
    }

    #[test]
    fn missing_intent_name_fails_deserialization() {
        let result: Result<LexEvent, _> = serde_json::from_value(json!({
            "sessionState": {"intent": {"slots": {}}}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn session_attributes_default_to_empty() {
        let event = event_from(json!({
            "sessionState": {"intent": {"name": "FAQ"}}
        }));
        assert!(event.session_attributes.is_empty());
    }

    proptest! {
        #[test]
        fn slot_lookup_never_panics_and_finds_only_named_slots(
            name in "[a-z_]{1,12}",
            value in "[A-Za-z0-9 ]{1,20}",
            other in "[a-z_]{1,12}",
        ) {
            let event = event_from(json!({
                "sessionState": {
                    "intent": {
                        "name": "GetStudentInfo",
                        "slots": {(name.as_str()): {"value": {"interpretedValue": value.as_str()}}}
                    }
                }
            }));

            prop_assert_eq!(event.slot(&name), Some(value.as_str()));
            if other != name {
                prop_assert_eq!(event.slot(&other), None);
            }
        }
    }
}
