//! Workspace-level tabs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::tab::CollectionUid;

/// The kind of view a workspace tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkspaceTabType {
    /// Workspace overview.
    Overview,
    /// Workspace environments.
    Environments,
    /// Workspace git status.
    Git,
    /// An HTTP request opened directly under the workspace.
    HttpRequest,
    /// A GraphQL request opened directly under the workspace.
    GraphqlRequest,
    /// A gRPC request opened directly under the workspace.
    GrpcRequest,
    /// A WebSocket request opened directly under the workspace.
    WsRequest,
}

impl WorkspaceTabType {
    /// All workspace tab types, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Overview,
        Self::Environments,
        Self::Git,
        Self::HttpRequest,
        Self::GraphqlRequest,
        Self::GrpcRequest,
        Self::WsRequest,
    ];

    /// Returns the wire name of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Environments => "environments",
            Self::Git => "git",
            Self::HttpRequest => "http-request",
            Self::GraphqlRequest => "graphql-request",
            Self::GrpcRequest => "grpc-request",
            Self::WsRequest => "ws-request",
        }
    }

    /// Returns the label used when a tab is created without one.
    #[must_use]
    pub const fn default_label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Environments => "Environments",
            Self::Git => "Git",
            Self::HttpRequest => "HTTP",
            Self::GraphqlRequest => "GraphQL",
            Self::GrpcRequest => "gRPC",
            Self::WsRequest => "WebSocket",
        }
    }
}

impl fmt::Display for WorkspaceTabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkspaceTabType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownWorkspaceTabType(s.to_string()))
    }
}

/// A tab in the workspace tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceTab {
    /// Unique identifier.
    pub uid: String,
    /// Owning workspace.
    pub workspace_uid: String,
    /// What the tab shows.
    #[serde(rename = "type")]
    pub tab_type: WorkspaceTabType,
    /// Text shown in the tab bar.
    pub label: String,
    /// Permanent tabs cannot be closed by the user.
    #[serde(default)]
    pub permanent: bool,
    /// Request item shown by a request tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_uid: Option<String>,
    /// Collection of the request item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_uid: Option<CollectionUid>,
}

impl WorkspaceTab {
    /// Creates a closable tab with no request association.
    #[must_use]
    pub fn new(
        uid: impl Into<String>,
        workspace_uid: impl Into<String>,
        tab_type: WorkspaceTabType,
        label: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            workspace_uid: workspace_uid.into(),
            tab_type,
            label: label.into(),
            permanent: false,
            item_uid: None,
            collection_uid: None,
        }
    }

    /// Returns the conventional uid of a workspace's tab of the given type.
    #[must_use]
    pub fn default_uid(workspace_uid: &str, tab_type: WorkspaceTabType) -> String {
        format!("{workspace_uid}-{tab_type}")
    }
}
