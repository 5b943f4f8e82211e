//! Request and response records exchanged with the REST API.

pub mod adf;
pub mod application_role;
pub mod audit;
pub mod comment;
pub mod dashboard;
pub mod filter;
pub mod issue;
pub mod issue_type;
pub mod permission;
pub mod permission_scheme;
pub mod priority;
pub mod project;
pub mod project_category;
pub mod property;
pub mod resolution;
pub mod search;
pub mod server_info;
pub mod status;
pub mod user;
pub mod workflow_scheme;
pub mod worklog;

pub use adf::*;
pub use application_role::*;
pub use audit::*;
pub use comment::*;
pub use dashboard::*;
pub use filter::*;
pub use issue::*;
pub use issue_type::*;
pub use permission::*;
pub use permission_scheme::*;
pub use priority::*;
pub use project::*;
pub use project_category::*;
pub use property::*;
pub use resolution::*;
pub use search::*;
pub use server_info::*;
pub use status::*;
pub use user::*;
pub use workflow_scheme::*;
pub use worklog::*;
