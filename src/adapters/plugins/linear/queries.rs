//! GraphQL documents sent to the Linear API.

/// Field selection shared by every query returning issues.
macro_rules! issue_fields {
    () => {
        "id identifier title branchName url description priority estimate updatedAt \
         state { id name type } team { id key }"
    };
}

pub const VIEWER: &str = "query Viewer { viewer { id name displayName email } }";

pub const VIEWER_ASSIGNED_ISSUES: &str = concat!(
    "query ViewerAssignedIssues { viewer { assignedIssues { nodes { ",
    issue_fields!(),
    " } } } }"
);

/// Accepts either the opaque id or the human-readable identifier.
pub const ISSUE: &str = concat!(
    "query Issue($id: String!) { issue(id: $id) { ",
    issue_fields!(),
    " } }"
);

pub const WORKFLOW_STATES: &str = "query WorkflowStates { workflowStates { nodes { \
    id name type color position team { id key } } } }";

pub const VIEWER_TEAMS: &str = "query ViewerTeams { viewer { teams { nodes { id key name } } } }";

pub const TEAM_MEMBERS: &str = "query TeamMembers($id: String!) { team(id: $id) { \
    members { nodes { id name displayName email } } } }";

pub const PRIORITY_VALUES: &str = "query IssuePriorityValues { issuePriorityValues { priority label } }";

pub const COMMENT_CREATE: &str = "mutation CommentCreate($input: CommentCreateInput!) { \
    commentCreate(input: $input) { success comment { id } } }";

pub const ISSUE_UPDATE: &str = concat!(
    "mutation IssueUpdate($id: String!, $input: IssueUpdateInput!) { ",
    "issueUpdate(id: $id, input: $input) { success issue { ",
    issue_fields!(),
    " } } }"
);

pub const ISSUE_CREATE: &str = concat!(
    "mutation IssueCreate($input: IssueCreateInput!) { ",
    "issueCreate(input: $input) { success issue { ",
    issue_fields!(),
    " } } }"
);
