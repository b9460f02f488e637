use crate::types::{AccessDecision, PolicyDiagnostic};
use core_access::{Action, Module, PermissionChecker, PolicyTable, Role};

/// Evaluate a string-keyed request and explain the outcome
///
/// Same answer as [`PermissionChecker::has_permission_str`], with one reason
/// naming the step that decided it.
pub fn evaluate_request(
    checker: &PermissionChecker<'_>,
    role: &str,
    module: &str,
    action: &str,
) -> AccessDecision {
    let (allowed, reason) = explain(checker, role, module, action);
    AccessDecision {
        allowed,
        reasons: vec![reason],
        evaluation_time_us: 0,
    }
}

fn explain(
    checker: &PermissionChecker<'_>,
    role_name: &str,
    module_name: &str,
    action_name: &str,
) -> (bool, String) {
    let Some(role) = Role::parse(role_name) else {
        return (false, format!("DENIED: unknown role '{role_name}'"));
    };
    let Some(module) = Module::parse(module_name) else {
        return (false, format!("DENIED: unknown module '{module_name}'"));
    };
    let Some(action) = Action::parse(action_name) else {
        return (false, format!("DENIED: unknown action '{action_name}'"));
    };

    if checker.table().policy(role).entry(module).is_none() {
        return (
            false,
            format!("DENIED: role {role} has no permissions on {module}"),
        );
    }

    if checker.has_permission(role, module, action) {
        (true, format!("ALLOWED: {role} may {action} on {module}"))
    } else {
        (false, format!("DENIED: {role} may not {action} on {module}"))
    }
}

/// Validate a TOML policy table with precise error reporting
///
/// Syntax errors carry their line and column. Semantic errors (unknown
/// names, duplicate modules, grants without view) and an empty table carry
/// only a message.
pub fn validate_policy_table(policy_toml: &str) -> PolicyDiagnostic {
    // 1. Syntax
    if let Err(e) = policy_toml.parse::<toml::Table>() {
        let (line, column) = e
            .span()
            .map_or((None, None), |span| line_column(policy_toml, span.start));
        return PolicyDiagnostic {
            valid: false,
            message: Some(e.message().to_string()),
            line,
            column,
        };
    }

    // 2. Semantics
    let table = match PolicyTable::from_toml(policy_toml) {
        Ok(table) => table,
        Err(e) => return invalid(e.to_string()),
    };

    if table.entry_count() == 0 {
        return invalid("Policy table is empty: no role has any entry".to_string());
    }

    PolicyDiagnostic {
        valid: true,
        message: None,
        line: None,
        column: None,
    }
}

fn invalid(message: String) -> PolicyDiagnostic {
    PolicyDiagnostic {
        valid: false,
        message: Some(message),
        line: None,
        column: None,
    }
}

// 1-indexed line and column of a byte offset
fn line_column(source: &str, offset: usize) -> (Option<u32>, Option<u32>) {
    let Some(before) = source.get(..offset) else {
        return (None, None);
    };
    let line = before.matches('\n').count() + 1;
    let column = before
        .rsplit('\n')
        .next()
        .map_or(0, |tail| tail.chars().count())
        + 1;
    (u32::try_from(line).ok(), u32::try_from(column).ok())
}
