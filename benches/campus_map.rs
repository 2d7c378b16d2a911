use campus_map::{
    catalog::{Catalog, Category, Location, Query},
    prelude::{CAMPUS_CENTER, Config, GeolocationProbe, PositionError},
    shared::Coordinate,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::{hint::black_box, time::Duration};

/// The campus seed data repeated until it holds `count` locations.
fn large_catalog(count: usize) -> Catalog {
    let seed = Catalog::campus().expect("Failed to load campus data");
    let locations: Vec<Location> = seed
        .locations()
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, location)| {
            Location::new(
                &format!("{}-{i}", location.id),
                &format!("{} {i}", location.name),
                location.category,
                location.coordinate,
            )
            .with_description(&location.description)
        })
        .collect();
    Catalog::with_locations(locations).expect("Failed to build catalog")
}

fn suggest(catalog: &Catalog) {
    let _ = black_box(catalog.suggest("enginering workshop"));
}

fn filtered_search(catalog: &Catalog) {
    let query = Query::new().term("hall").category(Some(Category::Hostel));
    let _ = black_box(catalog.search(&query));
}

fn probe(probe: &GeolocationProbe) {
    let mut near = || Ok::<_, PositionError>(Coordinate::new(6.6727, 3.1593));
    let _ = black_box(probe.probe(&mut near));
}

fn criterion_benchmark(c: &mut Criterion) {
    let catalog = large_catalog(10_000);
    let geolocation = GeolocationProbe::new(&Config::default());
    assert_eq!(geolocation.center(), CAMPUS_CENTER);

    let mut group = c.benchmark_group("Catalog");

    group.warm_up_time(Duration::from_secs(3));

    group.measurement_time(Duration::from_secs(10));

    group.bench_function("Fuzzy suggest", |b| b.iter(|| suggest(&catalog)));

    group.bench_function("Filtered search", |b| {
        b.iter(|| filtered_search(&catalog))
    });

    group.bench_function("Geolocation probe", |b| b.iter(|| probe(&geolocation)));

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
