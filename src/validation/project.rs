//! Project validation functionality
//!
//! Checks a whole project before generation: resource and activity names,
//! duplicate names, activity dependencies and references to datasets,
//! linked services and pipelines that the project does not define.

use super::dependencies::{DependencyIssue, DependencyValidator};
use super::names::{ValidationError, validate_activity_name, validate_resource_name};
use crate::models::{Activity, ActivityKind, Project, ProjectSet};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Result of project validation.
#[derive(Debug, Default, Serialize)]
#[must_use = "validation results should be checked before generating documents"]
pub struct ProjectValidationResult {
    /// Project the issues belong to
    pub project: String,
    /// Every issue found, in discovery order
    pub issues: Vec<ValidationIssue>,
}

impl ProjectValidationResult {
    /// True when no issues were found
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// One problem found in a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationIssue {
    /// Two resources of the same category, or two activities in one
    /// pipeline, share a name
    DuplicateName {
        category: &'static str,
        name: String,
    },
    /// A name ADF would reject
    InvalidName {
        category: &'static str,
        name: String,
        error: ValidationError,
    },
    DanglingDependency {
        pipeline: String,
        activity: String,
        missing: String,
    },
    SelfDependency {
        pipeline: String,
        activity: String,
    },
    DependencyCycle {
        pipeline: String,
        activities: Vec<String>,
    },
    /// `owner` refers to a `category` resource that the project lacks
    UnknownReference {
        owner: String,
        category: &'static str,
        name: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateName { category, name } => {
                write!(f, "Duplicate {category} name '{name}'")
            }
            ValidationIssue::InvalidName {
                category,
                name,
                error,
            } => write!(f, "Invalid {category} name '{name}': {error}"),
            ValidationIssue::DanglingDependency {
                pipeline,
                activity,
                missing,
            } => write!(
                f,
                "Activity '{activity}' in pipeline '{pipeline}' depends on unknown activity '{missing}'"
            ),
            ValidationIssue::SelfDependency { pipeline, activity } => write!(
                f,
                "Activity '{activity}' in pipeline '{pipeline}' depends on itself"
            ),
            ValidationIssue::DependencyCycle {
                pipeline,
                activities,
            } => write!(
                f,
                "Circular dependency in pipeline '{pipeline}' between {}",
                activities.join(", ")
            ),
            ValidationIssue::UnknownReference {
                owner,
                category,
                name,
            } => write!(f, "'{owner}' references unknown {category} '{name}'"),
        }
    }
}

/// Project validator
#[derive(Debug, Default)]
pub struct ProjectValidator {
    dependencies: DependencyValidator,
}

impl ProjectValidator {
    /// Create a new project validator
    ///
    /// # Example
    ///
    /// ```rust
    /// use adf_codegen::models::Project;
    /// use adf_codegen::validation::ProjectValidator;
    ///
    /// let result = ProjectValidator::new().validate(&Project::new("Sales"));
    /// assert!(result.is_valid());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every project of a set.
    ///
    /// Projects are written to a directory named after them, so a second
    /// project reusing a name is reported as a duplicate on that project.
    pub fn validate_set(&self, set: &ProjectSet) -> Vec<ProjectValidationResult> {
        let mut seen = HashSet::new();
        set.projects
            .iter()
            .map(|project| {
                let mut result = self.validate(project);
                if !seen.insert(project.name.as_str()) {
                    result.issues.push(ValidationIssue::DuplicateName {
                        category: "project",
                        name: project.name.clone(),
                    });
                }
                result
            })
            .collect()
    }

    /// Validate every pipeline, dataset and linked service of a project.
    pub fn validate(&self, project: &Project) -> ProjectValidationResult {
        let mut issues = Vec::new();

        if let Err(error) = validate_resource_name("project", &project.name) {
            issues.push(ValidationIssue::InvalidName {
                category: "project",
                name: project.name.clone(),
                error,
            });
        }

        check_resource_names(
            "pipeline",
            project.pipelines.iter().map(|p| p.name.as_str()),
            &mut issues,
        );
        check_resource_names(
            "dataset",
            project.datasets.iter().map(|d| d.name.as_str()),
            &mut issues,
        );
        check_resource_names(
            "linked service",
            project.linked_services.iter().map(|l| l.name.as_str()),
            &mut issues,
        );

        let known = KnownNames::of(project);

        for dataset in &project.datasets {
            if let Some(linked_service) = &dataset.linked_service {
                known.check_linked_service(&dataset.name, linked_service, &mut issues);
            }
        }

        for pipeline in &project.pipelines {
            let mut seen = HashSet::new();
            visit_activities(&pipeline.properties.activities, &mut |activity| {
                if let Err(error) = validate_activity_name(&activity.name) {
                    issues.push(ValidationIssue::InvalidName {
                        category: "activity",
                        name: activity.name.clone(),
                        error,
                    });
                }
                if !seen.insert(activity.name.as_str()) {
                    issues.push(ValidationIssue::DuplicateName {
                        category: "activity",
                        name: activity.name.clone(),
                    });
                }
                known.check_activity(activity, &mut issues);
            });

            for issue in self.dependencies.validate(&pipeline.properties.activities) {
                issues.push(match issue {
                    DependencyIssue::Dangling { activity, missing } => {
                        ValidationIssue::DanglingDependency {
                            pipeline: pipeline.name.clone(),
                            activity,
                            missing,
                        }
                    }
                    DependencyIssue::SelfDependency { activity } => {
                        ValidationIssue::SelfDependency {
                            pipeline: pipeline.name.clone(),
                            activity,
                        }
                    }
                    DependencyIssue::Cycle { activities } => ValidationIssue::DependencyCycle {
                        pipeline: pipeline.name.clone(),
                        activities,
                    },
                });
            }
        }

        ProjectValidationResult {
            project: project.name.clone(),
            issues,
        }
    }
}

fn check_resource_names<'a>(
    category: &'static str,
    names: impl Iterator<Item = &'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in names {
        if let Err(error) = validate_resource_name(category, name) {
            issues.push(ValidationIssue::InvalidName {
                category,
                name: name.to_string(),
                error,
            });
        }
        let count = counts.entry(name).or_default();
        *count += 1;
        if *count == 2 {
            issues.push(ValidationIssue::DuplicateName {
                category,
                name: name.to_string(),
            });
        }
    }
}

/// Depth-first walk over every activity, nested ones included
fn visit_activities<'a>(activities: &'a [Activity], visit: &mut impl FnMut(&'a Activity)) {
    for activity in activities {
        visit(activity);
        for nested in activity.kind.nested_activities() {
            visit_activities(nested, visit);
        }
    }
}

struct KnownNames<'a> {
    pipelines: HashSet<&'a str>,
    datasets: HashSet<&'a str>,
    linked_services: HashSet<&'a str>,
}

impl<'a> KnownNames<'a> {
    fn of(project: &'a Project) -> Self {
        Self {
            pipelines: project.pipelines.iter().map(|p| p.name.as_str()).collect(),
            datasets: project.datasets.iter().map(|d| d.name.as_str()).collect(),
            linked_services: project
                .linked_services
                .iter()
                .map(|l| l.name.as_str())
                .collect(),
        }
    }

    fn check_linked_service(&self, owner: &str, name: &str, issues: &mut Vec<ValidationIssue>) {
        if !self.linked_services.contains(name) {
            issues.push(unknown(owner, "linked service", name));
        }
    }

    fn check_activity(&self, activity: &Activity, issues: &mut Vec<ValidationIssue>) {
        if let Some(linked_service) = &activity.linked_service {
            self.check_linked_service(&activity.name, linked_service, issues);
        }

        let lookup_dataset = match &activity.kind {
            ActivityKind::Lookup(lookup) => Some(&lookup.dataset),
            _ => None,
        };
        for reference in activity
            .inputs
            .iter()
            .chain(&activity.outputs)
            .chain(lookup_dataset)
        {
            if !self.datasets.contains(reference.name.as_str()) {
                issues.push(unknown(&activity.name, "dataset", &reference.name));
            }
        }

        if let ActivityKind::ExecutePipeline(execute) = &activity.kind
            && !self.pipelines.contains(execute.pipeline.as_str())
        {
            issues.push(unknown(&activity.name, "pipeline", &execute.pipeline));
        }
    }
}

fn unknown(owner: &str, category: &'static str, name: &str) -> ValidationIssue {
    ValidationIssue::UnknownReference {
        owner: owner.to_string(),
        category,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DataSet, DataSetType, DatasetReference, DependencyCondition, ExecutePipelineActivity,
        IfConditionActivity, LinkedService, LinkedServiceType, Pipeline, PipelineProperties,
        WaitActivity,
    };

    fn wait(name: &str) -> Activity {
        Activity::new(
            name,
            ActivityKind::Wait(WaitActivity {
                wait_time_in_seconds: 5,
            }),
        )
    }

    fn pipeline(name: &str, activities: Vec<Activity>) -> Pipeline {
        Pipeline {
            name: name.to_string(),
            properties: PipelineProperties {
                activities,
                ..Default::default()
            },
        }
    }

    fn valid_project() -> Project {
        let mut project = Project::new("Sales");
        project
            .linked_services
            .push(LinkedService::new("Blob", LinkedServiceType::AzureBlobStorage));
        let mut dataset = DataSet::new("Orders", DataSetType::Json);
        dataset.linked_service = Some("Blob".to_string());
        project.datasets.push(dataset);
        project.pipelines.push(pipeline(
            "Load",
            vec![
                wait("Start").with_output(DatasetReference::new("Orders")),
                wait("Finish").depends_on("Start", &[DependencyCondition::Succeeded]),
            ],
        ));
        project
    }

    #[test]
    fn valid_project_has_no_issues() {
        let result = ProjectValidator::new().validate(&valid_project());
        assert!(result.is_valid(), "{:?}", result.issues);
        assert_eq!(result.project, "Sales");
    }

    #[test]
    fn project_name_must_be_a_plain_name() {
        for name in ["../escaped", "/tmp/absolute", "a/b", ""] {
            let mut project = valid_project();
            project.name = name.to_string();
            let result = ProjectValidator::new().validate(&project);
            assert!(
                matches!(
                    result.issues.as_slice(),
                    [ValidationIssue::InvalidName { category: "project", .. }]
                ),
                "{name}: {:?}",
                result.issues
            );
        }
    }

    #[test]
    fn duplicate_project_names_in_a_set() {
        let set = ProjectSet {
            projects: vec![valid_project(), valid_project(), Project::new("Other")],
        };
        let results = ProjectValidator::new().validate_set(&set);
        let valid: Vec<bool> = results.iter().map(|r| r.is_valid()).collect();
        assert_eq!(valid, vec![true, false, true]);
        assert_eq!(
            results[1].issues,
            vec![ValidationIssue::DuplicateName {
                category: "project",
                name: "Sales".to_string(),
            }]
        );
    }

    #[test]
    fn reports_duplicate_resource_names() {
        let mut project = valid_project();
        project.datasets.push(DataSet::new("Orders", DataSetType::Json));
        let result = ProjectValidator::new().validate(&project);
        assert_eq!(
            result.issues,
            vec![ValidationIssue::DuplicateName {
                category: "dataset",
                name: "Orders".to_string(),
            }]
        );
    }

    #[test]
    fn activity_names_are_unique_across_nested_scopes() {
        let mut project = valid_project();
        let branch = Activity::new(
            "Branch",
            ActivityKind::IfCondition(IfConditionActivity {
                expression: "@bool(true)".to_string(),
                if_true_activities: vec![wait("Start")],
                if_false_activities: Vec::new(),
            }),
        );
        project.pipelines[0].properties.activities.push(branch);
        let result = ProjectValidator::new().validate(&project);
        assert_eq!(
            result.issues,
            vec![ValidationIssue::DuplicateName {
                category: "activity",
                name: "Start".to_string(),
            }]
        );
    }

    #[test]
    fn reports_unknown_references() {
        let mut project = valid_project();
        project.datasets[0].linked_service = Some("Sql".to_string());
        let execute = Activity::new(
            "Run",
            ActivityKind::ExecutePipeline(ExecutePipelineActivity {
                pipeline: "Missing".to_string(),
                wait_on_completion: true,
                parameters: Vec::new(),
            }),
        )
        .with_input(DatasetReference::new("Customers"));
        project.pipelines[0].properties.activities.push(execute);

        let messages: Vec<String> = ProjectValidator::new()
            .validate(&project)
            .issues
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec![
                "'Orders' references unknown linked service 'Sql'",
                "'Run' references unknown dataset 'Customers'",
                "'Run' references unknown pipeline 'Missing'",
            ]
        );
    }

    #[test]
    fn maps_dependency_issues_to_pipeline() {
        let mut project = valid_project();
        project.pipelines[0].properties.activities[0] =
            wait("Start").depends_on("Finish", &[DependencyCondition::Completed]);
        let result = ProjectValidator::new().validate(&project);
        assert_eq!(
            result.issues,
            vec![ValidationIssue::DependencyCycle {
                pipeline: "Load".to_string(),
                activities: vec!["Finish".to_string(), "Start".to_string()],
            }]
        );
    }

    #[test]
    fn reports_invalid_names() {
        let mut project = valid_project();
        project.pipelines.push(pipeline("Bad/Name", Vec::new()));
        let result = ProjectValidator::new().validate(&project);
        assert!(matches!(
            result.issues.as_slice(),
            [ValidationIssue::InvalidName {
                category: "pipeline",
                ..
            }]
        ));
    }
}
