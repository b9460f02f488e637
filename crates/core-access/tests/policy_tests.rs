//! Integration tests for policy domain types

use core_access::{
    clinic_policy_table, Action, Module, Permission, Policy, PolicyEntry, PolicyError,
    PolicyTable, Role,
};

#[test]
fn test_duplicate_actions_are_idempotent() {
    let once = PolicyEntry::new(Module::Billing, [Action::View, Action::Process]);
    let twice = PolicyEntry::new(
        Module::Billing,
        [Action::View, Action::Process, Action::Process, Action::View],
    );

    assert_eq!(once, twice);
    assert_eq!(twice.action_count(), 2);
    for action in Action::ALL {
        assert_eq!(once.allows(action), twice.allows(action));
    }
}

#[test]
fn test_missing_module_grants_nothing() {
    let table = clinic_policy_table();
    let policy = table.policy(Role::Patient);

    assert!(policy.entry(Module::Users).is_none());
    assert!(!table.checker().has_permission(Role::Patient, Module::Users, Action::View));
}

#[test]
fn test_table_is_total_over_roles() {
    let table = PolicyTable::empty();
    for role in Role::ALL {
        assert!(table.policy(role).is_empty());
    }
    assert_eq!(table.iter().count(), Role::ALL.len());
    assert_eq!(table.entry_count(), 0);
}

#[test]
fn test_table_new_fills_missing_roles() {
    let table = PolicyTable::new([(
        Role::Dentist,
        Policy::new(vec![PolicyEntry::new(Module::Charting, [Action::View])]),
    )])
    .unwrap();

    assert_eq!(table.policy(Role::Dentist).len(), 1);
    assert!(table.policy(Role::Admin).is_empty());
    assert!(table.policy(Role::Staff).is_empty());
    assert!(table.policy(Role::Patient).is_empty());
}

#[test]
fn test_duplicate_module_is_rejected() {
    let result = PolicyTable::new([(
        Role::Staff,
        Policy::new(vec![
            PolicyEntry::new(Module::Inventory, [Action::View]),
            PolicyEntry::new(Module::Billing, [Action::View]),
            PolicyEntry::new(Module::Inventory, [Action::View, Action::Manage]),
        ]),
    )]);

    assert!(matches!(
        result,
        Err(PolicyError::DuplicateModule {
            role: Role::Staff,
            module: Module::Inventory,
        })
    ));
}

#[test]
fn test_action_without_view_is_rejected() {
    let result = PolicyTable::new([(
        Role::Dentist,
        Policy::new(vec![PolicyEntry::new(
            Module::Inventory,
            [Action::Request, Action::Manage],
        )]),
    )]);

    match result {
        Err(PolicyError::MissingViewGrant {
            role,
            module,
            action,
        }) => {
            assert_eq!(role, Role::Dentist);
            assert_eq!(module, Module::Inventory);
            assert_eq!(action, Action::Manage);
        }
        other => panic!("Expected MissingViewGrant, got: {:?}", other),
    }
}

#[test]
fn test_entry_without_actions_is_valid() {
    let table = PolicyTable::new([(
        Role::Patient,
        Policy::new(vec![PolicyEntry::new(Module::Reports, [] as [Action; 0])]),
    )])
    .unwrap();

    assert_eq!(table.policy(Role::Patient).len(), 1);
}

#[test]
fn test_every_grant_implies_view_in_clinic_table() {
    let table = clinic_policy_table();
    let checker = table.checker();

    for (role, policy) in table.iter() {
        for entry in policy.entries() {
            for action in entry.actions() {
                if action != Action::View {
                    assert!(
                        checker.has_permission(role, entry.module(), Action::View),
                        "{role} may {action} {} but cannot view it",
                        entry.module()
                    );
                }
            }
        }
    }
}

#[test]
fn test_policy_modules_keep_declaration_order() {
    let policy = Policy::new(vec![
        PolicyEntry::new(Module::Settings, [Action::View]),
        PolicyEntry::new(Module::Dashboard, [Action::View]),
        PolicyEntry::new(Module::Billing, [Action::View]),
    ]);

    let modules: Vec<_> = policy.modules().collect();
    assert_eq!(
        modules,
        vec![Module::Settings, Module::Dashboard, Module::Billing]
    );
}

#[test]
fn test_is_granted_to_any() {
    let table = clinic_policy_table();

    assert!(table.is_granted_to_any(Permission::new(Module::Users, Action::Delete)));
    assert!(table.is_granted_to_any(Permission::view(Module::Charting)));
    assert!(!table.is_granted_to_any(Permission::new(Module::Dashboard, Action::Export)));
}

#[test]
fn test_staff_has_no_charting_reports_or_users() {
    let table = clinic_policy_table();
    let staff = table.policy(Role::Staff);

    assert!(staff.entry(Module::Charting).is_none());
    assert!(staff.entry(Module::Reports).is_none());
    assert!(staff.entry(Module::Users).is_none());
}
