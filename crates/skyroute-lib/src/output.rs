use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub code: String,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise or render as text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub start: String,
    pub goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, code)| RouteStep {
                index,
                code: code.clone(),
            })
            .collect();

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            via: plan.via.clone(),
            steps,
        })
    }

    /// Render the summary as plain text for terminal output.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = write!(
            buffer,
            "Route ({}): {} -> {}",
            self.algorithm, self.start, self.goal
        );
        if let Some(via) = &self.via {
            let _ = write!(buffer, " via {via}");
        }
        let _ = writeln!(buffer, " [{} hops]", self.hops);

        for step in &self.steps {
            let _ = writeln!(buffer, "  {}. {}", step.index, step.code);
        }
        buffer
    }
}
