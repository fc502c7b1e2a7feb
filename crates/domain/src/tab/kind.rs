//! Editor tab types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Request pane shown by default for most request tabs.
pub const PANE_PARAMS: &str = "params";
/// Request pane shown by default for gRPC and WebSocket tabs.
pub const PANE_BODY: &str = "body";
/// Request pane shown by default for GraphQL tabs.
pub const PANE_QUERY: &str = "query";
/// Response pane shown by default for every tab.
pub const PANE_RESPONSE: &str = "response";

/// The kind of document an editor tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TabType {
    /// An HTTP request.
    HttpRequest,
    /// A GraphQL request.
    GraphqlRequest,
    /// A gRPC request.
    GrpcRequest,
    /// A WebSocket request.
    WsRequest,
    /// A request of unspecified protocol.
    #[default]
    Request,
    /// Folder settings.
    Folder,
    /// Collection variables.
    Variables,
    /// The collection runner.
    CollectionRunner,
    /// Collection settings.
    CollectionSettings,
    /// Environment settings of a collection.
    EnvironmentSettings,
    /// Global environment settings.
    GlobalEnvironmentSettings,
    /// Workspace overview.
    WorkspaceOverview,
    /// Workspace git status.
    WorkspaceGit,
    /// Workspace environments.
    WorkspaceEnvironments,
}

impl TabType {
    /// All tab types, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::HttpRequest,
        Self::GraphqlRequest,
        Self::GrpcRequest,
        Self::WsRequest,
        Self::Request,
        Self::Folder,
        Self::Variables,
        Self::CollectionRunner,
        Self::CollectionSettings,
        Self::EnvironmentSettings,
        Self::GlobalEnvironmentSettings,
        Self::WorkspaceOverview,
        Self::WorkspaceGit,
        Self::WorkspaceEnvironments,
    ];

    /// Returns the wire name of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HttpRequest => "http-request",
            Self::GraphqlRequest => "graphql-request",
            Self::GrpcRequest => "grpc-request",
            Self::WsRequest => "ws-request",
            Self::Request => "request",
            Self::Folder => "folder",
            Self::Variables => "variables",
            Self::CollectionRunner => "collection-runner",
            Self::CollectionSettings => "collection-settings",
            Self::EnvironmentSettings => "environment-settings",
            Self::GlobalEnvironmentSettings => "global-environment-settings",
            Self::WorkspaceOverview => "workspace-overview",
            Self::WorkspaceGit => "workspace-git",
            Self::WorkspaceEnvironments => "workspace-environments",
        }
    }

    /// Returns true if at most one tab of this type may exist per collection.
    ///
    /// Singleton tabs are focused instead of duplicated and never open as
    /// preview tabs.
    #[must_use]
    pub const fn is_singleton(&self) -> bool {
        matches!(
            self,
            Self::Variables
                | Self::CollectionRunner
                | Self::EnvironmentSettings
                | Self::GlobalEnvironmentSettings
                | Self::WorkspaceOverview
                | Self::WorkspaceGit
                | Self::WorkspaceEnvironments
        )
    }

    /// Returns the request pane a new tab of this type opens on.
    #[must_use]
    pub const fn default_request_pane_tab(&self) -> &'static str {
        match self {
            Self::GrpcRequest | Self::WsRequest => PANE_BODY,
            Self::GraphqlRequest => PANE_QUERY,
            _ => PANE_PARAMS,
        }
    }
}

impl fmt::Display for TabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTabType(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn singleton_types() {
        let singletons: Vec<_> = TabType::ALL
            .into_iter()
            .filter(TabType::is_singleton)
            .collect();
        assert_eq!(singletons.len(), 7);
        assert!(TabType::Variables.is_singleton());
        assert!(TabType::WorkspaceGit.is_singleton());
        assert!(!TabType::HttpRequest.is_singleton());
        assert!(!TabType::Folder.is_singleton());
        assert!(!TabType::CollectionSettings.is_singleton());
    }

    #[test]
    fn default_request_pane_by_protocol() {
        assert_eq!(TabType::GrpcRequest.default_request_pane_tab(), "body");
        assert_eq!(TabType::WsRequest.default_request_pane_tab(), "body");
        assert_eq!(TabType::GraphqlRequest.default_request_pane_tab(), "query");
        assert_eq!(TabType::HttpRequest.default_request_pane_tab(), "params");
        assert_eq!(TabType::Variables.default_request_pane_tab(), "params");
    }

    #[test]
    fn wire_names_match_serde() {
        for kind in TabType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(kind.as_str().parse::<TabType>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_type_is_an_error() {
        assert_eq!(
            "spreadsheet".parse::<TabType>(),
            Err(DomainError::UnknownTabType("spreadsheet".to_string()))
        );
    }
}
