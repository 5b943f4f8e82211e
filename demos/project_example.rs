//! Lists projects, their categories and statuses, and the workflow schemes
//! they use.
//!
//! cargo run --example project_example

use jira_sdk::{Jira, JiraConfig, ProjectSearchOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let jira = Jira::from_config(JiraConfig::from_env()?, "3")?;

    let options = ProjectSearchOptions::new()
        .order_by("key")
        .expand(vec!["description".to_string(), "lead".to_string()]);
    let (page, _) = jira.project.search(&options, 0, 10).await?;
    println!("Projects ({} total):", page.total);

    let mut ids = Vec::new();
    for project in &page.values {
        let lead = project
            .lead
            .as_ref()
            .and_then(|l| l.display_name.as_deref())
            .unwrap_or("-");
        let category = project
            .project_category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("-");
        println!(
            "  {} {} (lead: {}, category: {})",
            project.key, project.name, lead, category
        );
        if let Ok(id) = project.id.parse::<u64>() {
            ids.push(id);
        }
    }

    if let Some(project) = page.values.first() {
        let (statuses, _) = jira.project.statuses(&project.key).await?;
        println!("\nStatuses in {}:", project.key);
        for issue_type in statuses {
            let names: Vec<&str> = issue_type
                .statuses
                .iter()
                .map(|s| s.name.as_str())
                .collect();
            println!("  {}: {}", issue_type.name, names.join(" -> "));
        }
    }

    if !ids.is_empty() {
        let (associations, _) = jira.workflow_scheme.associations(&ids).await?;
        println!("\nWorkflow schemes:");
        for association in associations.values {
            let name = association
                .workflow_scheme
                .map(|s| s.name)
                .unwrap_or_default();
            println!("  {} <- {}", name, association.project_ids.join(", "));
        }
    }

    let (categories, _) = jira.project.category.gets().await?;
    println!("\nCategories: {}", categories.len());

    Ok(())
}
