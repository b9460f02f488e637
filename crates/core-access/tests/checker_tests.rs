//! Integration tests for PermissionChecker

use core_access::{
    clinic_policy_table, Action, Authorizer, Module, Permission, PermissionChecker,
    PolicyTableBuilder, Role,
};

#[test]
fn test_admin_and_patient_user_deletion() {
    let table = clinic_policy_table();
    let checker = PermissionChecker::new(&table);

    assert!(checker.has_permission(Role::Admin, Module::Users, Action::Delete));
    assert!(!checker.has_permission(Role::Patient, Module::Users, Action::Delete));

    assert!(checker.has_permission_str("admin", "users", "delete"));
    assert!(!checker.has_permission_str("patient", "users", "delete"));
}

#[test]
fn test_patient_appointments_view_but_not_edit() {
    let table = clinic_policy_table();
    let checker = table.checker();

    assert!(checker.has_permission(Role::Patient, Module::Appointments, Action::View));
    assert!(!checker.has_permission(Role::Patient, Module::Appointments, Action::Edit));
}

#[test]
fn test_inventory_manage_staff_but_not_dentist() {
    let table = clinic_policy_table();
    let checker = table.checker();

    assert!(checker.has_permission(Role::Staff, Module::Inventory, Action::Manage));
    assert!(!checker.has_permission(Role::Dentist, Module::Inventory, Action::Manage));
}

#[test]
fn test_patient_accessible_modules_in_policy_order() {
    let table = clinic_policy_table();
    let checker = table.checker();

    assert_eq!(
        checker.accessible_modules(Role::Patient),
        vec![
            Module::Dashboard,
            Module::Appointments,
            Module::Billing,
            Module::Notifications,
        ]
    );
    assert_eq!(
        checker.accessible_modules_str("patient"),
        checker.accessible_modules(Role::Patient)
    );
}

#[test]
fn test_unknown_role_is_denied() {
    let table = clinic_policy_table();
    let checker = table.checker();

    assert!(!checker.has_permission_str("ghost-role", "dashboard", "view"));
    assert!(!checker.can_access_module_str("ghost-role", "dashboard"));
    assert!(checker.accessible_modules_str("ghost-role").is_empty());
}

#[test]
fn test_unknown_module_and_action_are_denied() {
    let table = clinic_policy_table();
    let checker = table.checker();

    assert!(!checker.has_permission_str("admin", "payroll", "view"));
    assert!(!checker.has_permission_str("admin", "users", "impersonate"));
    assert!(!checker.has_permission_str("admin", "", "view"));
    assert!(!checker.has_permission_str("admin", "users", ""));
    assert!(!checker.has_permission_str("", "", ""));
    // Names are case-sensitive
    assert!(!checker.has_permission_str("Admin", "Users", "Delete"));
}

#[test]
fn test_can_access_module_is_view_permission() {
    let table = clinic_policy_table();
    let checker = table.checker();

    for role in Role::ALL {
        for module in Module::ALL {
            assert_eq!(
                checker.can_access_module(role, module),
                checker.has_permission(role, module, Action::View),
                "{role}/{module}"
            );
        }
    }
    assert!(!checker.can_access_module(Role::Staff, Module::Charting));
    assert!(checker.can_access_module(Role::Dentist, Module::Charting));
}

#[test]
fn test_accessible_modules_counts_entries_without_view() {
    // An entry with no actions still makes the module "accessible" in the
    // any-entry sense, while view stays denied.
    let table = PolicyTableBuilder::new()
        .role(Role::Staff, |p| p.grant(Module::Reports, [] as [Action; 0]))
        .build()
        .unwrap();
    let checker = table.checker();

    assert_eq!(checker.accessible_modules(Role::Staff), vec![Module::Reports]);
    assert!(!checker.can_access_module(Role::Staff, Module::Reports));
}

#[test]
fn test_permissions_for_follows_policy_order() {
    let table = clinic_policy_table();
    let checker = table.checker();

    let permissions: Vec<String> = checker
        .permissions_for(Role::Patient)
        .map(|p| p.to_string())
        .collect();

    assert_eq!(
        permissions,
        vec![
            "dashboard:view",
            "appointments:view",
            "appointments:request",
            "billing:view",
            "notifications:view",
        ]
    );
}

#[test]
fn test_repeated_queries_are_stable() {
    let table = clinic_policy_table();
    let checker = table.checker();

    let first = checker.accessible_modules(Role::Dentist);
    for _ in 0..10 {
        assert_eq!(checker.accessible_modules(Role::Dentist), first);
        assert!(checker.has_permission(Role::Dentist, Module::Charting, Action::Edit));
    }
}

#[test]
fn test_authorizer_trait_implementation() {
    let table = clinic_policy_table();

    fn check<A: Authorizer>(authorizer: &A, role: Role) -> bool {
        authorizer.is_permitted(role, Permission::new(Module::Billing, Action::Process))
    }

    assert!(check(&table.checker(), Role::Staff));
    assert!(check(&table, Role::Admin));
    assert!(!check(&table, Role::Patient));

    let shared = std::sync::Arc::new(table);
    assert!(check(&shared, Role::Staff));
}

#[test]
fn test_injected_table_replaces_default() {
    let table = PolicyTableBuilder::new()
        .role(Role::Patient, |p| p.grant(Module::Users, [Action::View, Action::Delete]))
        .build()
        .unwrap();
    let checker = table.checker();

    assert!(checker.has_permission(Role::Patient, Module::Users, Action::Delete));
    assert!(!checker.has_permission(Role::Admin, Module::Users, Action::Delete));
}
