use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlbuf::{SqlBuf, TableName, TableNames, UserStatement};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("statements/build");
    let tables = TableNames::default();

    for stmt in UserStatement::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(stmt.name()), &stmt, |b, &stmt| {
            b.iter(|| black_box(stmt.build(&tables)));
        });
    }

    group.finish();
}

/// Append `n` column assignments to a buffer, with and without pre-sizing.
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("statements/append");
    let users = TableName::parse("USERS").unwrap();

    for n in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("grow", n), &n, |b, &n| {
            b.iter(|| {
                let mut buf = SqlBuf::new();
                buf.append("UPDATE ").append_table(&users).append(" SET ");
                for _ in 0..n {
                    buf.append("COL = ?, ");
                }
                black_box(buf.into_string());
            });
        });
        group.bench_with_input(BenchmarkId::new("presized", n), &n, |b, &n| {
            b.iter(|| {
                let mut buf = SqlBuf::with_capacity(20 + n * 9);
                buf.append("UPDATE ").append_table(&users).append(" SET ");
                for _ in 0..n {
                    buf.append("COL = ?, ");
                }
                black_box(buf.into_string());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_append);
criterion_main!(benches);
