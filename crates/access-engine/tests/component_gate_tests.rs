//! Integration tests for the component-level gate

use access_engine::{ComponentGate, Rendered};
use core_access::{clinic_policy_table, Action, Module, Permission, Role};
use proptest::prelude::*;
use std::cell::Cell;

#[test]
fn test_permitted_role_gets_primary() {
    let table = clinic_policy_table();
    let gate = ComponentGate::new(
        table.checker(),
        Permission::new(Module::Billing, Action::Process),
    );

    assert_eq!(
        gate.render(Some(Role::Staff), || "process payment"),
        Rendered::Primary("process payment")
    );
}

#[test]
fn test_denied_role_without_fallback_gets_nothing() {
    let table = clinic_policy_table();
    let gate = ComponentGate::new(
        table.checker(),
        Permission::new(Module::Billing, Action::Process),
    );

    assert_eq!(gate.render(Some(Role::Patient), || "process payment"), Rendered::Nothing);
}

#[test]
fn test_denied_role_gets_fallback() {
    let table = clinic_policy_table();
    let gate = ComponentGate::new(&table, Permission::new(Module::Users, Action::Delete));

    assert_eq!(
        gate.render_with_fallback(Some(Role::Dentist), || "delete", || "read-only"),
        Rendered::Fallback("read-only")
    );
}

#[test]
fn test_no_role_is_not_permitted() {
    let table = clinic_policy_table();
    let gate = ComponentGate::new(table.checker(), Permission::view(Module::Dashboard));

    assert!(!gate.is_permitted(None));
    assert_eq!(gate.render(None, || "dashboard"), Rendered::Nothing);
}

#[test]
fn test_only_one_branch_is_built() {
    let table = clinic_policy_table();
    let gate = ComponentGate::new(table.checker(), Permission::view(Module::Charting));
    let primary_built = Cell::new(0);
    let fallback_built = Cell::new(0);

    let _ = gate.render_with_fallback(
        Some(Role::Dentist),
        || primary_built.set(primary_built.get() + 1),
        || fallback_built.set(fallback_built.get() + 1),
    );
    assert_eq!((primary_built.get(), fallback_built.get()), (1, 0));

    let _ = gate.render_with_fallback(
        Some(Role::Staff),
        || primary_built.set(primary_built.get() + 1),
        || fallback_built.set(fallback_built.get() + 1),
    );
    assert_eq!((primary_built.get(), fallback_built.get()), (1, 1));
}

#[test]
fn test_rendered_into_inner() {
    assert_eq!(Rendered::Primary(1).into_inner(), Some(1));
    assert_eq!(Rendered::Fallback(2).into_inner(), Some(2));
    assert_eq!(Rendered::<i32>::Nothing.into_inner(), None);
}

proptest! {
    /// Property: outcome is primary exactly when permitted, never both branches
    #[test]
    fn prop_gate_all_or_nothing(
        role in prop::option::of(prop::sample::select(Role::ALL.to_vec())),
        module in prop::sample::select(Module::ALL.to_vec()),
        action in prop::sample::select(Action::ALL.to_vec()),
        with_fallback in any::<bool>(),
    ) {
        let table = clinic_policy_table();
        let checker = table.checker();
        let gate = ComponentGate::new(checker, Permission::new(module, action));
        let permitted = role.is_some_and(|role| checker.has_permission(role, module, action));

        let rendered = if with_fallback {
            gate.render_with_fallback(role, || "primary", || "fallback")
        } else {
            gate.render(role, || "primary")
        };

        match rendered {
            Rendered::Primary(value) => {
                prop_assert!(permitted);
                prop_assert_eq!(value, "primary");
            }
            Rendered::Fallback(value) => {
                prop_assert!(!permitted && with_fallback);
                prop_assert_eq!(value, "fallback");
            }
            Rendered::Nothing => prop_assert!(!permitted && !with_fallback),
        }
    }
}
