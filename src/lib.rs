//! Client for the Jira Cloud REST API, versions 2 and 3.
//!
//! A [`Connector`] builds and sends HTTP requests; the resource services in
//! [`services`] validate their inputs, build `rest/api/{version}/...`
//! endpoints and decode the responses. [`Jira`] bundles every service behind
//! one connector.

pub mod client;
pub mod connector;
pub mod datetime;
pub mod error;
pub mod jira;
pub mod models;
pub mod query;
pub mod services;

pub use client::{Auth, JiraClient, JiraConfig};
pub use connector::{Connector, ResponseScheme};
pub use error::Error;
pub use jira::Jira;
pub use query::QueryParams;
pub use models::*;
