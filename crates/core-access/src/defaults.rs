//! The clinic's built-in policy table

// `Send` stays qualified so it does not shadow the marker trait.
use crate::permission::Action::{
    self, Configure, Create, Delete, Edit, Export, Generate, Manage, Process, Request, Schedule,
    View,
};
use crate::permission::Module;
use crate::policy::{Policy, PolicyEntry, PolicyTable};
use crate::role::Role;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static DEFAULT_TABLE: LazyLock<PolicyTable> = LazyLock::new(clinic_policy_table);

/// Process-wide default table, built on first use
///
/// Prefer passing a table explicitly; this exists for call sites with no
/// configuration of their own.
#[must_use]
pub fn default_table() -> &'static PolicyTable {
    &DEFAULT_TABLE
}

fn entry(module: Module, actions: &[Action]) -> PolicyEntry {
    PolicyEntry::new(module, actions.iter().copied())
}

/// Build the clinic's policy table
#[must_use]
pub fn clinic_policy_table() -> PolicyTable {
    let admin = Policy::new(vec![
        entry(Module::Dashboard, &[View]),
        entry(Module::Patients, &[View, Create, Edit, Delete]),
        entry(Module::Appointments, &[View, Create, Edit, Delete, Schedule]),
        entry(Module::Charting, &[View, Create, Edit, Delete]),
        entry(Module::Billing, &[View, Create, Edit, Delete, Process]),
        entry(Module::Inventory, &[View, Create, Edit, Delete, Manage]),
        entry(Module::Reports, &[View, Generate, Export]),
        entry(Module::Users, &[View, Create, Edit, Delete]),
        entry(Module::Notifications, &[View, Action::Send, Manage]),
        entry(Module::Settings, &[View, Edit, Configure]),
    ]);

    let dentist = Policy::new(vec![
        entry(Module::Dashboard, &[View]),
        entry(Module::Patients, &[View, Create, Edit]),
        entry(Module::Appointments, &[View, Create, Edit, Schedule]),
        entry(Module::Charting, &[View, Create, Edit]),
        entry(Module::Billing, &[View]),
        entry(Module::Inventory, &[View, Request]),
        entry(Module::Reports, &[View, Generate]),
        entry(Module::Notifications, &[View, Action::Send]),
        entry(Module::Settings, &[View, Edit]),
    ]);

    let staff = Policy::new(vec![
        entry(Module::Dashboard, &[View]),
        entry(Module::Patients, &[View, Create, Edit]),
        entry(Module::Appointments, &[View, Create, Edit, Delete, Schedule]),
        entry(Module::Billing, &[View, Create, Edit, Process]),
        entry(Module::Inventory, &[View, Create, Edit, Manage]),
        entry(Module::Notifications, &[View, Action::Send]),
        entry(Module::Settings, &[View]),
    ]);

    let patient = Policy::new(vec![
        entry(Module::Dashboard, &[View]),
        entry(Module::Appointments, &[View, Request]),
        entry(Module::Billing, &[View]),
        entry(Module::Notifications, &[View]),
    ]);

    PolicyTable::from_validated(BTreeMap::from([
        (Role::Admin, admin),
        (Role::Dentist, dentist),
        (Role::Staff, staff),
        (Role::Patient, patient),
    ]))
}
