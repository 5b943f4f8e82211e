//! Logs time against an issue, reads it back and removes it again.
//!
//! cargo run --example worklog_example -- KP-1

use chrono::Utc;
use jira_sdk::{AdfNode, Jira, JiraConfig, WorklogOptions, WorklogPayloadScheme};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let issue_key = std::env::args()
        .nth(1)
        .ok_or("usage: worklog_example <ISSUE-KEY>")?;
    let jira = Jira::from_config(JiraConfig::from_env()?, "3")?;

    let payload = WorklogPayloadScheme::new()
        .comment(AdfNode::from_plain_text("Logged from the worklog example"))
        .started(Utc::now())
        .time_spent("15m");
    let options = WorklogOptions::new().notify(false).adjust_estimate("leave");

    let (created, _) = jira.issue.worklog.add(&issue_key, &payload, &options).await?;
    println!("Created worklog {} ({})", created.id, created.time_spent.as_deref().unwrap_or("?"));

    let (page, _) = jira.issue.worklog.issue(&issue_key, 0, 20, None, &[]).await?;
    println!("{} has {} worklogs:", issue_key, page.total);
    for worklog in &page.worklogs {
        let comment = worklog
            .comment
            .as_ref()
            .map(|c| c.plain_text())
            .unwrap_or_default();
        println!(
            "  {} {} {}",
            worklog.started.as_deref().unwrap_or("?"),
            worklog.time_spent.as_deref().unwrap_or("?"),
            comment
        );
    }

    let response = jira
        .issue
        .worklog
        .delete(&issue_key, &created.id, &options)
        .await?;
    println!("Deleted worklog {} (HTTP {})", created.id, response.code);

    Ok(())
}
