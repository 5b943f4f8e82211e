use std::sync::Arc;

use crate::client::{JiraClient, JiraConfig};
use crate::connector::Connector;
use crate::error::Result;
use crate::services::{
    ApplicationRoleService, AuditRecordService, DashboardService, FilterService, IssueService,
    MySelfService, PermissionSchemeService, PermissionService, PriorityService, ProjectService,
    ResolutionService, SearchService, ServerInfoService, WorkflowSchemeService,
};

/// Every resource service bound to one connector and API version.
///
/// ```no_run
/// # async fn run() -> jira_sdk::error::Result<()> {
/// use jira_sdk::{Jira, JiraConfig};
///
/// let jira = Jira::from_config(JiraConfig::from_env()?, "3")?;
/// let (me, _) = jira.myself.details(&[]).await?;
/// println!("{}", me.account_id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Jira {
    pub audit: AuditRecordService,
    pub application_role: ApplicationRoleService,
    pub dashboard: DashboardService,
    pub filter: FilterService,
    pub issue: IssueService,
    pub search: SearchService,
    pub permission: PermissionService,
    pub permission_scheme: PermissionSchemeService,
    pub project: ProjectService,
    pub workflow_scheme: WorkflowSchemeService,
    pub priority: PriorityService,
    pub resolution: ResolutionService,
    pub server_info: ServerInfoService,
    pub myself: MySelfService,
    version: String,
}

impl Jira {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            audit: AuditRecordService::new(connector.clone(), version)?,
            application_role: ApplicationRoleService::new(connector.clone(), version)?,
            dashboard: DashboardService::new(connector.clone(), version)?,
            filter: FilterService::new(connector.clone(), version)?,
            issue: IssueService::new(connector.clone(), version)?,
            search: SearchService::new(connector.clone(), version)?,
            permission: PermissionService::new(connector.clone(), version)?,
            permission_scheme: PermissionSchemeService::new(connector.clone(), version)?,
            project: ProjectService::new(connector.clone(), version)?,
            workflow_scheme: WorkflowSchemeService::new(connector.clone(), version)?,
            priority: PriorityService::new(connector.clone(), version)?,
            resolution: ResolutionService::new(connector.clone(), version)?,
            server_info: ServerInfoService::new(connector.clone(), version)?,
            myself: MySelfService::new(connector, version)?,
            version: version.to_string(),
        })
    }

    /// Builds a [`JiraClient`] from `config` and binds every service to it.
    pub fn from_config(config: JiraConfig, version: &str) -> Result<Self> {
        let client = JiraClient::new(config)?;
        Self::new(Arc::new(client), version)
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
