use access_engine::NavigationMenu;
use anyhow::Context;
use app_config::ClinicConfig;
use colored::*;
use core_access::{PolicyTable, Role};
use std::path::Path;

pub fn check(file_path: &Path) -> anyhow::Result<()> {
    println!("{} {}", "Checking policy table:".bold(), file_path.display());

    let table = app_config::load_policy_table(file_path)
        .with_context(|| format!("Invalid policy table {}", file_path.display()))?;

    for (role, policy) in table.iter() {
        let grants: usize = policy.entries().iter().map(|e| e.action_count()).sum();
        println!(
            "  {} {}: {} module(s), {} permission(s)",
            "✓".green(),
            role,
            policy.len(),
            grants
        );
    }

    let warnings = warnings(&table);
    for warning in &warnings {
        println!("  {} {}", "⚠".yellow(), warning);
    }

    println!();
    if warnings.is_empty() {
        println!("{} Policy table is valid!", "✓".green().bold());
    } else {
        println!(
            "{} Policy table is valid with {} warning(s)",
            "⚠".yellow().bold(),
            warnings.len()
        );
    }

    Ok(())
}

pub fn show(role_name: &str, config: Option<&Path>) -> anyhow::Result<()> {
    let config = ClinicConfig::resolve(config).context("Failed to load configuration")?;

    let Some(role) = Role::parse(role_name) else {
        println!("{} Unknown role '{}': no permissions", "✗".red(), role_name);
        return Ok(());
    };

    let checker = config.checker();
    println!("{} {}", "Permissions for role:".bold(), role);

    let mut count = 0;
    for permission in checker.permissions_for(role) {
        println!("  {}", permission);
        count += 1;
    }
    if count == 0 {
        println!("  {}", "(none)".dimmed());
    }

    Ok(())
}

/// Non-fatal findings about a valid table
fn warnings(table: &PolicyTable) -> Vec<String> {
    let mut warnings: Vec<String> = table
        .iter()
        .filter(|(_, policy)| policy.is_empty())
        .map(|(role, _)| format!("Role {} has no permissions", role))
        .collect();

    // Reported on stdout only; not logged
    let menu = NavigationMenu::clinic_default();
    warnings.extend(
        menu.entries()
            .iter()
            .filter(|entry| {
                entry
                    .required_permission
                    .is_some_and(|permission| !table.is_granted_to_any(permission))
            })
            .map(|entry| {
                format!(
                    "Navigation entry '{}' ({}) is visible to no role",
                    entry.label, entry.path
                )
            }),
    );

    warnings
}
