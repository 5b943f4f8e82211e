//! Connects to a site and prints who you are and what it runs.
//!
//! Set the environment (or a `.env` file) before running:
//! export JIRA_URL=https://your-instance.atlassian.net
//! export JIRA_USER=your-email@example.com
//! export JIRA_API_TOKEN=your-api-token
//!
//! cargo run --example basic_usage
//! RUST_LOG=jira_sdk=debug cargo run --example basic_usage

use jira_sdk::{Jira, JiraConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = JiraConfig::from_env()
        .map_err(|e| format!("{}. Set JIRA_URL, JIRA_USER and JIRA_API_TOKEN.", e))?;
    println!("Base URL: {}", config.base_url);

    let jira = Jira::from_config(config, "3")?;

    let (info, _) = jira.server_info.get().await?;
    println!(
        "Server: {} {} ({})",
        info.server_title.as_deref().unwrap_or("Jira"),
        info.version,
        info.deployment_type.as_deref().unwrap_or("unknown deployment")
    );

    let (me, response) = jira.myself.details(&["groups".to_string()]).await?;
    println!(
        "Signed in as {} ({}) [HTTP {}]",
        me.display_name.as_deref().unwrap_or("?"),
        me.account_id,
        response.code
    );
    if let Some(groups) = me.groups {
        for group in groups.items {
            println!("  group: {}", group.name.unwrap_or_default());
        }
    }

    let (priorities, _) = jira.priority.gets().await?;
    let names: Vec<&str> = priorities.iter().map(|p| p.name.as_str()).collect();
    println!("Priorities: {}", names.join(", "));

    Ok(())
}
