//! Activity dependency validation
//!
//! ADF resolves `dependsOn` only among activities in the same container: the
//! root of a pipeline, the body of an `Until`, or one branch of an
//! `IfCondition`. Each of those scopes is checked on its own for dangling
//! references, self-references and cycles.

use crate::models::Activity;
use petgraph::algo::tarjan_scc;
use petgraph::{Directed, Graph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Problem found in one activity scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependencyIssue {
    /// `activity` depends on a name that is not in its scope
    Dangling { activity: String, missing: String },
    /// `activity` depends on itself
    SelfDependency { activity: String },
    /// The named activities depend on each other in a loop
    Cycle { activities: Vec<String> },
}

/// Checks `dependsOn` edges within activity scopes
#[derive(Debug, Default)]
pub struct DependencyValidator;

impl DependencyValidator {
    /// Create a new dependency validator
    pub fn new() -> Self {
        Self
    }

    /// Check one scope and every scope nested under it.
    pub fn validate(&self, activities: &[Activity]) -> Vec<DependencyIssue> {
        let mut issues = self.validate_scope(activities);
        for activity in activities {
            for nested in activity.kind.nested_activities() {
                issues.extend(self.validate(nested));
            }
        }
        issues
    }

    /// Check a single scope without descending into nested activities.
    pub fn validate_scope(&self, activities: &[Activity]) -> Vec<DependencyIssue> {
        let mut issues = Vec::new();
        let mut graph = Graph::<&str, (), Directed>::new();
        let mut node_map = HashMap::new();

        for activity in activities {
            node_map
                .entry(activity.name.as_str())
                .or_insert_with(|| graph.add_node(activity.name.as_str()));
        }

        for activity in activities {
            for dependency in activity.dependencies.iter().flatten() {
                if dependency.activity == activity.name {
                    issues.push(DependencyIssue::SelfDependency {
                        activity: activity.name.clone(),
                    });
                    continue;
                }
                match node_map.get(dependency.activity.as_str()) {
                    Some(&upstream) => {
                        graph.add_edge(upstream, node_map[activity.name.as_str()], ());
                    }
                    None => issues.push(DependencyIssue::Dangling {
                        activity: activity.name.clone(),
                        missing: dependency.activity.clone(),
                    }),
                }
            }
        }

        // Any strongly connected component with more than one node is a loop
        for component in tarjan_scc(&graph) {
            if component.len() > 1 {
                let mut names: Vec<String> =
                    component.iter().map(|&node| graph[node].to_string()).collect();
                names.sort();
                issues.push(DependencyIssue::Cycle { activities: names });
            }
        }

        issues
    }
}
