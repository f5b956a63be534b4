//! Static table of the resource operations exposed under `okta api`.

use regex::Regex;
use std::sync::LazyLock;

static PATH_PARAM: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\{(\w+)\}").ok());

/// Whether an operation sends a JSON request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRequirement {
    None,
    Required,
}

/// One API operation: a subcommand under `api <group>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub group: &'static str,
    pub name: &'static str,
    pub method: &'static str,
    pub path: &'static str,
    pub query_params: &'static [&'static str],
    pub body: BodyRequirement,
    pub about: &'static str,
}

impl Operation {
    /// Names of the `{name}` segments in the path template, in order.
    #[must_use]
    pub fn path_params(&self) -> Vec<&'static str> {
        PATH_PARAM.as_ref().map_or_else(Vec::new, |re| {
            re.captures_iter(self.path)
                .filter_map(|c| c.get(1).map(|m| m.as_str()))
                .collect()
        })
    }

    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self.body, BodyRequirement::Required)
    }
}

const fn op(
    group: &'static str,
    name: &'static str,
    method: &'static str,
    path: &'static str,
    query_params: &'static [&'static str],
    body: BodyRequirement,
    about: &'static str,
) -> Operation {
    Operation {
        group,
        name,
        method,
        path,
        query_params,
        body,
        about,
    }
}

use BodyRequirement::{None as NoBody, Required as Body};

#[rustfmt::skip]
pub static OPERATIONS: &[Operation] = &[
    op("org", "get", "GET", "/api/v1/org", &[], NoBody, "Get the organization settings"),
    // users
    op("users", "list", "GET", "/api/v1/users", &["q", "filter", "search", "limit", "after"], NoBody, "List users"),
    op("users", "get", "GET", "/api/v1/users/{userId}", &[], NoBody, "Get a user"),
    op("users", "create", "POST", "/api/v1/users", &["activate"], Body, "Create a user"),
    op("users", "update", "POST", "/api/v1/users/{userId}", &[], Body, "Update a user's profile"),
    op("users", "delete", "DELETE", "/api/v1/users/{userId}", &[], NoBody, "Delete a deactivated user"),
    op("users", "activate", "POST", "/api/v1/users/{userId}/lifecycle/activate", &["sendEmail"], NoBody, "Activate a user"),
    op("users", "deactivate", "POST", "/api/v1/users/{userId}/lifecycle/deactivate", &[], NoBody, "Deactivate a user"),
    op("users", "list-groups", "GET", "/api/v1/users/{userId}/groups", &[], NoBody, "List the groups a user belongs to"),
    // groups
    op("groups", "list", "GET", "/api/v1/groups", &["q", "filter", "limit", "after"], NoBody, "List groups"),
    op("groups", "get", "GET", "/api/v1/groups/{groupId}", &[], NoBody, "Get a group"),
    op("groups", "create", "POST", "/api/v1/groups", &[], Body, "Create a group"),
    op("groups", "update", "PUT", "/api/v1/groups/{groupId}", &[], Body, "Replace a group's profile"),
    op("groups", "delete", "DELETE", "/api/v1/groups/{groupId}", &[], NoBody, "Delete a group"),
    op("groups", "list-users", "GET", "/api/v1/groups/{groupId}/users", &["limit", "after"], NoBody, "List the members of a group"),
    op("groups", "assign-user", "PUT", "/api/v1/groups/{groupId}/users/{userId}", &[], NoBody, "Add a user to a group"),
    op("groups", "unassign-user", "DELETE", "/api/v1/groups/{groupId}/users/{userId}", &[], NoBody, "Remove a user from a group"),
    // applications
    op("applications", "list", "GET", "/api/v1/apps", &["q", "filter", "limit", "after"], NoBody, "List applications"),
    op("applications", "get", "GET", "/api/v1/apps/{appId}", &[], NoBody, "Get an application"),
    op("applications", "create", "POST", "/api/v1/apps", &[], Body, "Create an application"),
    op("applications", "update", "PUT", "/api/v1/apps/{appId}", &[], Body, "Replace an application"),
    op("applications", "delete", "DELETE", "/api/v1/apps/{appId}", &[], NoBody, "Delete an inactive application"),
    op("applications", "activate", "POST", "/api/v1/apps/{appId}/lifecycle/activate", &[], NoBody, "Activate an application"),
    op("applications", "deactivate", "POST", "/api/v1/apps/{appId}/lifecycle/deactivate", &[], NoBody, "Deactivate an application"),
    // authorization servers
    op("authorization-servers", "list", "GET", "/api/v1/authorizationServers", &["q", "limit", "after"], NoBody, "List authorization servers"),
    op("authorization-servers", "get", "GET", "/api/v1/authorizationServers/{authServerId}", &[], NoBody, "Get an authorization server"),
    op("authorization-servers", "create", "POST", "/api/v1/authorizationServers", &[], Body, "Create an authorization server"),
    op("authorization-servers", "delete", "DELETE", "/api/v1/authorizationServers/{authServerId}", &[], NoBody, "Delete an authorization server"),
    op("authorization-servers", "activate", "POST", "/api/v1/authorizationServers/{authServerId}/lifecycle/activate", &[], NoBody, "Activate an authorization server"),
    op("authorization-servers", "deactivate", "POST", "/api/v1/authorizationServers/{authServerId}/lifecycle/deactivate", &[], NoBody, "Deactivate an authorization server"),
    // policies
    op("policies", "list", "GET", "/api/v1/policies", &["type", "status", "limit"], NoBody, "List policies of a type"),
    op("policies", "get", "GET", "/api/v1/policies/{policyId}", &[], NoBody, "Get a policy"),
    op("policies", "create", "POST", "/api/v1/policies", &[], Body, "Create a policy"),
    op("policies", "delete", "DELETE", "/api/v1/policies/{policyId}", &[], NoBody, "Delete a policy"),
    op("policies", "activate", "POST", "/api/v1/policies/{policyId}/lifecycle/activate", &[], NoBody, "Activate a policy"),
    op("policies", "deactivate", "POST", "/api/v1/policies/{policyId}/lifecycle/deactivate", &[], NoBody, "Deactivate a policy"),
    // brands
    op("brands", "list", "GET", "/api/v1/brands", &[], NoBody, "List brands"),
    op("brands", "get", "GET", "/api/v1/brands/{brandId}", &[], NoBody, "Get a brand"),
    op("brands", "list-themes", "GET", "/api/v1/brands/{brandId}/themes", &[], NoBody, "List the themes of a brand"),
];

/// Group names in catalog order, without duplicates.
#[must_use]
pub fn groups() -> Vec<&'static str> {
    let mut groups: Vec<&'static str> = Vec::new();
    for operation in OPERATIONS {
        if !groups.contains(&operation.group) {
            groups.push(operation.group);
        }
    }
    groups
}

/// Operations belonging to `group`, in catalog order.
pub fn operations_in(group: &str) -> impl Iterator<Item = &'static Operation> + '_ {
    OPERATIONS.iter().filter(move |op| op.group == group)
}

#[must_use]
pub fn find(group: &str, name: &str) -> Option<&'static Operation> {
    OPERATIONS
        .iter()
        .find(|op| op.group == group && op.name == name)
}
