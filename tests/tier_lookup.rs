use harvest_tiers::format::{ResolutionView, HIGHEST_TIER_REACHED};
use harvest_tiers::session::parse_cooldown_input;
use harvest_tiers::{parse_tier_table, resolve};

const SHIPPED_TIERS: &str = include_str!("../harvest_tiers.txt");

#[test]
fn shipped_table_parses_in_descending_order() {
    let table = parse_tier_table(SHIPPED_TIERS);
    let ids: Vec<i64> = table.records().iter().filter_map(|r| r.tier).collect();
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);

    let thresholds: Vec<f64> = table.records().iter().map(|r| r.threshold()).collect();
    assert!(thresholds.windows(2).all(|w| w[0] >= w[1]));
    assert!(table.records().iter().all(|r| r.interval.is_some()));
}

#[test]
fn typed_values_resolve_against_shipped_table() {
    let table = parse_tier_table(SHIPPED_TIERS);

    let value = parse_cooldown_input("75");
    let res = resolve(&table, value).expect("table is not empty");
    assert_eq!(res.current.tier, Some(3));
    assert_eq!(res.next.as_ref().and_then(|n| n.tier), Some(4));
    assert_eq!(res.gap_to_next(value), Some(26.0));

    let res = resolve(&table, parse_cooldown_input("101")).unwrap();
    assert_eq!(res.current.tier, Some(4));

    let res = resolve(&table, parse_cooldown_input("not a number")).unwrap();
    assert_eq!(res.current.tier, Some(1));
    assert!(res.reached);
}

#[test]
fn top_tier_view_reports_highest_reached() {
    let table = parse_tier_table(SHIPPED_TIERS);
    let res = resolve(&table, 200.0).unwrap();
    let view = ResolutionView::new(&res, 200.0);
    assert_eq!(view.current.tier, "Tier 5");
    assert_eq!(view.current.interval, "1.50s");
    assert_eq!(view.next_label, HIGHEST_TIER_REACHED);
}
