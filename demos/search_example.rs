//! JQL search with both endpoints and simple paging.
//!
//! cargo run --example search_example -- "project = KP order by created DESC"

use jira_sdk::{Jira, JiraConfig, SearchParams};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let jql = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "order by created DESC".to_string());

    let jira = Jira::from_config(JiraConfig::from_env()?, "3")?;
    let fields = vec![
        "summary".to_string(),
        "status".to_string(),
        "assignee".to_string(),
        "priority".to_string(),
    ];

    println!("1. GET search: first 5 issues for `{}`", jql);
    let params = SearchParams::new().max_results(5).fields(fields.clone());
    match jira.search.get(&jql, &params).await {
        Ok((result, _)) => {
            println!("   total: {}", result.total);
            for issue in &result.issues {
                print_issue(issue);
            }
        }
        Err(e) => println!("   error: {}", e),
    }

    println!("\n2. POST search: walk up to 3 pages of 20");
    let mut start_at = 0;
    for page in 1..=3 {
        let params = SearchParams::new()
            .start_at(start_at)
            .max_results(20)
            .fields(fields.clone());
        let (result, _) = jira.search.post(&jql, &params).await?;
        println!("   page {}: {} issues", page, result.issues.len());

        match result.next_start_at() {
            Some(next) => start_at = next,
            None => break,
        }
    }

    println!("\n3. Invalid JQL is reported by the server");
    let strict = SearchParams::new().max_results(1).validate_query(true);
    if let Err(e) = jira.search.post("project = ", &strict).await {
        println!("   rejected: {}", e);
    }

    Ok(())
}

fn print_issue(issue: &jira_sdk::IssueScheme) {
    let Some(fields) = &issue.fields else {
        println!("   {}", issue.key);
        return;
    };
    let assignee = fields
        .assignee
        .as_ref()
        .and_then(|a| a.display_name.as_deref())
        .unwrap_or("unassigned");
    let status = fields
        .status
        .as_ref()
        .map(|s| s.name.as_str())
        .unwrap_or("?");
    println!(
        "   {} - {} [{}] ({})",
        issue.key,
        fields.summary.as_deref().unwrap_or(""),
        status,
        assignee
    );
}
