//! End-to-end run over the 2024 jacket-season dataset.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use godown_allocation::{
    AllocationConfig, AllocationPlanner, AllocationSnapshot, ArticleCode, PriorShipments,
    StoreName, sample,
};

fn store(name: &str) -> StoreName {
    StoreName::new(name).unwrap()
}

fn snapshot() -> AllocationSnapshot {
    godown_observability::init();
    sample::jacket_season_2024().unwrap()
}

#[test]
fn godown_totals_match_dataset() {
    let snap = snapshot();
    let stats = AllocationPlanner::new(&snap)
        .generate_allocation_statistics()
        .unwrap();

    assert_eq!(stats.total_unique_articles_in_godown, 97);
    assert_eq!(stats.total_stock_in_godown, 301);
    assert_eq!(stats.total_allocated, 37 + 14 + 18 + 49 + 20);
    assert_eq!(stats.total_capacity, 132 + 257 + 240 + 70 + 158);
}

#[test]
fn every_store_receives_all_eligible_articles() {
    let snap = snapshot();
    let report = AllocationPlanner::new(&snap).generate_allocation_report().unwrap();

    let expected = [
        ("BOMBAY", 132, 37, "28.0"),
        ("DUKE NIT", 70, 49, "70.0"),
        ("DUKE RO", 240, 18, "7.5"),
        ("MOGA", 257, 14, "5.4"),
        ("MORADABAD", 158, 20, "12.7"),
    ];
    assert_eq!(report.len(), expected.len());

    for (name, capacity, eligible, pct) in expected {
        let r = report.get(&store(name)).unwrap();
        assert_eq!(r.max_capacity, capacity, "{name}");
        assert_eq!(r.available_articles_count, eligible, "{name}");
        assert_eq!(r.total_allocated as usize, eligible, "{name}");
        assert_eq!(r.capacity_percentage.to_string(), pct, "{name}");
        assert!(r.history_recorded, "{name}");
    }
}

#[test]
fn allocations_never_repeat_prior_shipments() {
    let snap = snapshot();
    let report = AllocationPlanner::new(&snap).generate_allocation_report().unwrap();

    for (name, r) in report.iter() {
        let PriorShipments::Recorded(sent) = snap.prior_shipments(name) else {
            panic!("Expected recorded history for {name}");
        };
        let mut seen = HashSet::new();
        for article in r.articles() {
            assert!(!sent.contains(article), "{name} received {article} again");
            assert!(seen.insert(article.clone()), "{name} received {article} twice");
        }
    }
}

#[test]
fn highest_stock_articles_lead_each_allocation() {
    let snap = snapshot();
    let planner = AllocationPlanner::new(&snap);

    let bombay = planner.create_allocation(&store("BOMBAY")).unwrap();
    let top: Vec<&str> = bombay
        .top_articles(5)
        .iter()
        .map(|line| line.article.as_str())
        .collect();
    assert_eq!(top, vec!["Z2329", "Z2303", "Z2258", "Z2281", "Z2292"]);
    assert_eq!(bombay.allocation[0].available_in_godown, 7);
    assert_eq!(bombay.remaining_capacity(), 132 - 37);

    let moradabad = planner.create_allocation(&store("MORADABAD")).unwrap();
    let top: Vec<&str> = moradabad
        .top_articles(5)
        .iter()
        .map(|line| line.article.as_str())
        .collect();
    assert_eq!(top, vec!["Z2292", "Z2279", "Z2280", "Z2315", "Z2341"]);
}

#[test]
fn available_articles_match_report_counts() {
    let snap = snapshot();
    let planner = AllocationPlanner::new(&snap);
    let available = planner.calculate_available_articles().unwrap();
    let report = planner.generate_allocation_report().unwrap();

    for (name, r) in report.iter() {
        let listed: Vec<&ArticleCode> = r.articles().collect();
        let ranked: Vec<&ArticleCode> = available[name].iter().collect();
        assert_eq!(listed, ranked, "{name}");
    }
}

#[test]
fn threaded_planner_matches_sequential() {
    let snap = snapshot();
    let sequential = AllocationPlanner::new(&snap).generate_allocation_report().unwrap();
    let threaded = AllocationPlanner::with_config(
        &snap,
        AllocationConfig::with_workers(NonZeroUsize::new(3).unwrap()),
    )
    .generate_allocation_report()
    .unwrap();
    assert_eq!(threaded, sequential);
}
