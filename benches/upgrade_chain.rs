use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use netabase_migrate::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Migratable, Clone, Debug, Serialize, Deserialize)]
#[migratable(family = "Profile", version = 1, upgrade = ProfileV2)]
pub struct ProfileV1 {
    pub name: String,
    pub age: u32,
}

#[derive(Migratable, Clone, Debug, Serialize, Deserialize)]
#[migratable(family = "Profile", version = 2, upgrade = ProfileV3)]
pub struct ProfileV2 {
    pub name: String,
    pub age: u32,
    pub tags: Vec<String>,
}

#[derive(Migratable, Clone, Debug, Default, Serialize, Deserialize)]
#[migratable(family = "Profile", version = 3)]
pub struct ProfileV3 {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub tags: Vec<String>,
}

impl MigrateFrom<ProfileV1> for ProfileV2 {
    fn migrate_from(old: ProfileV1) -> Self {
        ProfileV2 {
            name: old.name,
            age: old.age,
            tags: Vec::new(),
        }
    }
}

impl MigrateFrom<ProfileV2> for ProfileV3 {
    fn migrate_from(old: ProfileV2) -> Self {
        let (first, last) = old.name.split_once(' ').unwrap_or((old.name.as_str(), ""));
        ProfileV3 {
            first_name: first.to_string(),
            last_name: last.to_string(),
            age: old.age,
            tags: old.tags,
        }
    }
}

fn records() -> [(u32, String); 3] {
    [
        (
            1,
            r#"{"__migratable_type":"Profile","__migratable_version":1,"name":"Ada Lovelace","age":36}"#
                .to_string(),
        ),
        (
            2,
            r#"{"__migratable_type":"Profile","__migratable_version":2,"name":"Ada Lovelace","age":36,"tags":["math"]}"#
                .to_string(),
        ),
        (
            3,
            r#"{"__migratable_type":"Profile","__migratable_version":3,"first_name":"Ada","last_name":"Lovelace","age":36,"tags":["math"]}"#
                .to_string(),
        ),
    ]
}

fn bench_read(c: &mut Criterion) {
    let registry = Registry::declared().expect("declared profiles");
    let reader = registry.reader::<ProfileV3>();

    let mut group = c.benchmark_group("read_to_latest");
    for (version, record) in records() {
        group.bench_with_input(BenchmarkId::new("from_version", version), &record, |b, record| {
            b.iter(|| reader.read(black_box(record.as_str())).expect("read"))
        });
    }
    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let registry = Registry::declared().expect("declared profiles");
    let writer = registry.serialize::<ProfileV3>().expect("writer");
    let profile = ProfileV3 {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        age: 36,
        tags: vec!["math".into()],
    };

    c.bench_function("write_latest", |b| {
        b.iter(|| writer.write(black_box(&profile)).expect("write"))
    });
}

criterion_group!(benches, bench_read, bench_write);
criterion_main!(benches);
