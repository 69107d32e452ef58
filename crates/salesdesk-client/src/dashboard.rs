//! Dashboard fan-out: one GET per widget, issued in parallel and joined.
//!
//! A failing widget never fails the page. It gets its empty default and a
//! notice; the rest render normally.

use std::collections::BTreeMap;
use std::time::Instant;

use rayon::prelude::*;
use serde_json::Value;
use tracing::{info, warn};

use salesdesk_core::errors::ApiError;

use crate::api::ApiClient;
use crate::notice::{Notice, Notices};
use crate::transport::HttpTransport;

/// Shape a widget falls back to when its fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetDefault {
    Object,
    List,
    Zero,
}

impl WidgetDefault {
    pub fn value(&self) -> Value {
        match self {
            Self::Object => Value::Object(serde_json::Map::new()),
            Self::List => Value::Array(Vec::new()),
            Self::Zero => Value::from(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub id: String,
    pub path: String,
    pub default: WidgetDefault,
}

impl Widget {
    pub fn new(id: impl Into<String>, path: impl Into<String>, default: WidgetDefault) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            default,
        }
    }
}

/// Widgets on the CEO dashboard.
pub fn ceo_widgets() -> Vec<Widget> {
    [
        ("metrics", WidgetDefault::Object),
        ("alerts", WidgetDefault::List),
        ("churn-risk", WidgetDefault::List),
        ("upsell", WidgetDefault::List),
        ("weekly-growth", WidgetDefault::List),
        ("scheduler-status", WidgetDefault::Object),
    ]
    .into_iter()
    .map(|(id, default)| Widget::new(id, format!("/admin/ceo/{id}"), default))
    .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    /// Widget id to payload (or its default).
    pub widgets: BTreeMap<String, Value>,
    /// Ids of widgets that fell back to their default.
    pub failed: Vec<String>,
    /// Set when any fetch hit a 401; the session is already cleared.
    pub unauthorized: Option<String>,
}

impl DashboardData {
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.widgets.get(id)
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct DashboardLoader<'a, T> {
    client: &'a ApiClient<T>,
    notices: &'a Notices,
}

impl<'a, T: HttpTransport> DashboardLoader<'a, T> {
    pub fn new(client: &'a ApiClient<T>, notices: &'a Notices) -> Self {
        Self { client, notices }
    }

    pub fn load(&self, widgets: &[Widget]) -> DashboardData {
        let start = Instant::now();
        let results: Vec<(&Widget, Result<Value, ApiError>)> = widgets
            .par_iter()
            .map(|widget| (widget, self.client.get::<Value>(&widget.path)))
            .collect();

        let mut data = DashboardData::default();
        for (widget, result) in results {
            let value = match result {
                Ok(Value::Null) => widget.default.value(),
                Ok(value) => value,
                Err(e) => {
                    warn!(widget = %widget.id, path = %widget.path, error = %e, "widget load failed");
                    if let ApiError::Unauthorized { redirect_to } = &e {
                        data.unauthorized.get_or_insert_with(|| redirect_to.clone());
                    } else {
                        self.notices.push(Notice::from_api_error(&e));
                    }
                    data.failed.push(widget.id.clone());
                    widget.default.value()
                }
            };
            data.widgets.insert(widget.id.clone(), value);
        }

        info!(
            widgets = widgets.len(),
            failed = data.failed.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "dashboard loaded"
        );
        data
    }
}
