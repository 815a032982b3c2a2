use serde::Deserialize;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

const MIN_SESSION_ID_LEN: usize = 10;
const RECENT_CAPACITY: usize = 256;

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Event {
    Visitor(VisitorEvent),
    ProjectView(ProjectViewEvent),
}

#[derive(Clone, Debug, Deserialize)]
pub struct VisitorEvent {
    pub session_id: String,
    #[serde(default)]
    pub page_section: Option<String>,
    #[serde(default)]
    pub time_spent: Option<f64>,
    #[serde(default)]
    pub interaction_type: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProjectViewEvent {
    pub session_id: String,
    pub project_name: String,
    #[serde(default)]
    pub view_duration: Option<f64>,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Event {
    pub fn validate(&self) -> Result<(), &'static str> {
        let (session_id, duration) = match self {
            Self::Visitor(event) => (&event.session_id, event.time_spent),
            Self::ProjectView(event) => (&event.session_id, event.view_duration),
        };

        if session_id.len() < MIN_SESSION_ID_LEN {
            return Err("session id too short");
        }
        if duration.is_some_and(|value| value < 0.0) {
            return Err("durations must be non-negative");
        }
        if let Self::ProjectView(event) = self {
            if event.project_name.is_empty() {
                return Err("project name is required");
            }
        }

        Ok(())
    }
}

/// Event sink
///
/// Events are anonymous by construction (session ids are generated
/// client-side); they are logged structurally and kept in a bounded ring
/// for inspection.
#[derive(Clone, Default)]
pub struct AnalyticsSink {
    recent: Arc<Mutex<VecDeque<Event>>>,
}

impl AnalyticsSink {
    pub fn record(&self, event: Event) {
        match &event {
            Event::Visitor(visitor) => info!(
                session_id = %visitor.session_id,
                page_section = ?visitor.page_section,
                interaction_type = ?visitor.interaction_type,
                "visitor event",
            ),
            Event::ProjectView(view) => info!(
                session_id = %view.session_id,
                project_name = %view.project_name,
                "project view",
            ),
        }

        let mut recent = self.recent.lock().unwrap();
        if recent.len() == RECENT_CAPACITY {
            recent.pop_front();
        }
        recent.push_back(event);
    }

    #[must_use]
    pub fn recent(&self) -> Vec<Event> {
        self.recent.lock().unwrap().iter().cloned().collect()
    }
}
