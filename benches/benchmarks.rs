//! Performance benchmarks for route-finder

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use route_finder::test_utils::RouteTree;
use route_finder::{SearchType, default_mask, map_route};

/// Build a tree `depth` levels deep with `width` directories per level and a
/// few route files (plus non-matching noise) in each directory.
fn build_tree(depth: usize, width: usize) -> RouteTree {
    let tree = RouteTree::new();
    let mut level = vec![String::new()];
    for _ in 0..depth {
        let mut next = Vec::new();
        for parent in &level {
            for w in 0..width {
                let dir = if parent.is_empty() {
                    format!("dir{}", w)
                } else {
                    format!("{}/dir{}", parent, w)
                };
                tree.add_file(&format!("{}/users-{}.route.js", dir, w));
                tree.add_file(&format!("{}/x.api.orders.routes.js", dir));
                tree.add_file(&format!("{}/helpers.js", dir));
                next.push(dir);
            }
        }
        level = next;
    }
    tree
}

fn bench_map_route(c: &mut Criterion) {
    let mask = default_mask();
    let names = [
        "bf01.route.js",
        "index.routes.js",
        "x.api.slashes.routes.js",
        "x.api.user-accounts.routes.js",
    ];

    c.bench_function("map_route", |b| {
        b.iter(|| {
            for name in &names {
                black_box(map_route(black_box(name), &mask));
            }
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let tree = build_tree(3, 4);
    let mask = default_mask();

    let mut group = c.benchmark_group("search");
    for search_type in [SearchType::BreadthFirst, SearchType::DepthFirst] {
        group.bench_function(search_type.as_str(), |b| {
            b.iter(|| {
                let found = search_type.search(black_box(tree.path()), &mask).unwrap();
                black_box(found)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_map_route, bench_search);
criterion_main!(benches);
