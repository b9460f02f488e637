use access_engine::{evaluate_request, AccessDecision, NavigationEntry};
use anyhow::Context;
use app_config::ClinicConfig;
use colored::*;
use std::path::Path;

/// Print the decision; a denial is an answer, not a failure
pub fn check(
    role: &str,
    module: &str,
    action: &str,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let config = ClinicConfig::resolve(config).context("Failed to load configuration")?;
    let decision = evaluate_request(&config.checker(), role, module, action);

    print!("{}", format_decision(&decision, role, module, action));
    Ok(())
}

pub fn menu(role: &str, config: Option<&Path>) -> anyhow::Result<()> {
    let config = ClinicConfig::resolve(config).context("Failed to load configuration")?;
    let items = config.navigation_filter().menu_items_for_role_str(role);

    print!("{}", format_menu(role, &items));
    Ok(())
}

fn format_decision(decision: &AccessDecision, role: &str, module: &str, action: &str) -> String {
    let verdict = if decision.allowed {
        "ALLOWED".green().bold()
    } else {
        "DENIED".red().bold()
    };

    let mut out = format!("{} {} {} {}\n", verdict, role, module, action);
    for reason in &decision.reasons {
        out.push_str(&format!("  {}\n", reason.dimmed()));
    }
    out
}

fn format_menu(role: &str, items: &[&NavigationEntry]) -> String {
    let mut out = format!("{} {}\n", "Navigation for role:".bold(), role);
    if items.is_empty() {
        out.push_str(&format!("  {}\n", "(no entries)".dimmed()));
    }
    for entry in items {
        out.push_str(&format!(
            "  {:<16} {:<20} {}\n",
            entry.icon, entry.label, entry.path
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn decision_text(role: &str, module: &str, action: &str) -> String {
        colored::control::set_override(false);
        let config = ClinicConfig::default();
        let decision = evaluate_request(&config.checker(), role, module, action);
        format_decision(&decision, role, module, action)
    }

    fn menu_paths(role: &str) -> Vec<String> {
        colored::control::set_override(false);
        let config = ClinicConfig::default();
        let items = config.navigation_filter().menu_items_for_role_str(role);
        format_menu(role, &items)
            .lines()
            .skip(1)
            .filter_map(|line| line.split_whitespace().last().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_allowed_decision_text() {
        let text = decision_text("admin", "users", "delete");
        assert!(text.starts_with("ALLOWED admin users delete\n"), "{text}");
        assert!(text.contains("ALLOWED: admin may delete on users"), "{text}");
    }

    #[test]
    fn test_denied_decision_text() {
        let text = decision_text("patient", "users", "delete");
        assert!(text.starts_with("DENIED patient users delete\n"), "{text}");
        assert!(text.contains("role patient has no permissions on users"), "{text}");

        let text = decision_text("ghost-role", "dashboard", "view");
        assert!(text.starts_with("DENIED"), "{text}");
        assert!(text.contains("unknown role 'ghost-role'"), "{text}");
    }

    #[test]
    fn test_staff_menu_text() {
        assert_eq!(
            menu_paths("staff"),
            vec![
                "/dashboard",
                "/patients",
                "/appointments",
                "/billing",
                "/inventory",
                "/notifications",
                "/settings",
            ]
        );
    }

    #[test]
    fn test_unknown_role_menu_text() {
        colored::control::set_override(false);
        let text = format_menu("ghost-role", &[]);
        assert_eq!(text, "Navigation for role: ghost-role\n  (no entries)\n");
    }

    #[test]
    fn test_denied_check_is_not_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(b"landing_path = \"/dashboard\"\n").unwrap();

        assert!(check("patient", "users", "delete", Some(file.path())).is_ok());
        assert!(menu("ghost-role", Some(file.path())).is_ok());
    }

    #[test]
    fn test_bad_config_is_an_error() {
        assert!(check("admin", "users", "delete", Some(Path::new("missing.toml"))).is_err());
    }
}
