use core_access::{clinic_policy_table, Action, Module, PolicyTable, Role};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_permission_checks(c: &mut Criterion) {
    let table = clinic_policy_table();
    let checker = table.checker();

    c.bench_function("has_permission_granted", |b| {
        b.iter(|| {
            checker.has_permission(
                black_box(Role::Admin),
                black_box(Module::Settings),
                black_box(Action::Configure),
            )
        });
    });

    c.bench_function("has_permission_missing_module", |b| {
        b.iter(|| {
            checker.has_permission(
                black_box(Role::Patient),
                black_box(Module::Users),
                black_box(Action::Delete),
            )
        });
    });

    c.bench_function("has_permission_str_known", |b| {
        b.iter(|| {
            checker.has_permission_str(
                black_box("staff"),
                black_box("inventory"),
                black_box("manage"),
            )
        });
    });

    c.bench_function("has_permission_str_unknown_role", |b| {
        b.iter(|| {
            checker.has_permission_str(
                black_box("ghost-role"),
                black_box("dashboard"),
                black_box("view"),
            )
        });
    });

    c.bench_function("accessible_modules_admin", |b| {
        b.iter(|| checker.accessible_modules(black_box(Role::Admin)));
    });
}

fn benchmark_table_loading(c: &mut Criterion) {
    let exported = clinic_policy_table().to_toml().unwrap_or_default();

    c.bench_function("clinic_table_build", |b| {
        b.iter(clinic_policy_table);
    });

    c.bench_function("clinic_table_from_toml", |b| {
        b.iter(|| PolicyTable::from_toml(black_box(&exported)));
    });
}

criterion_group!(benches, benchmark_permission_checks, benchmark_table_loading);
criterion_main!(benches);
