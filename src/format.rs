//! Display projection of a resolved tier pair.

use crate::{Resolution, TierRecord};

pub const PERCENT_DECIMALS: usize = 1;
pub const SECONDS_DECIMALS: usize = 2;

pub const MISSING: &str = "-";
pub const HIGHEST_TIER_REACHED: &str = "highest tier reached";
pub const NO_LOWER_TIER: &str = "no lower tier";

pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.*}%", PERCENT_DECIMALS, v),
        None => MISSING.to_string(),
    }
}

pub fn format_seconds(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.*}s", SECONDS_DECIMALS, v),
        None => MISSING.to_string(),
    }
}

pub fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.0}", v),
        None => MISSING.to_string(),
    }
}

pub fn format_tier(record: &TierRecord) -> String {
    match record.tier {
        Some(id) => format!("Tier {}", id),
        None => MISSING.to_string(),
    }
}

/// Display strings for one row of the tier table.
#[derive(Debug, Clone, PartialEq)]
pub struct TierRow {
    pub tier: String,
    pub harvests: String,
    pub interval: String,
    pub no_pet: String,
    pub pet1: String,
    pub pet6: String,
}

impl From<&TierRecord> for TierRow {
    fn from(record: &TierRecord) -> Self {
        Self {
            tier: format_tier(record),
            harvests: format_count(record.harvests_count),
            interval: format_seconds(record.interval),
            no_pet: format_percent(record.cooldown_no_pet),
            pet1: format_percent(record.cooldown_pet1),
            pet6: format_percent(record.cooldown_pet6),
        }
    }
}

/// Everything the result panel shows for a resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionView {
    pub input: String,
    pub current: TierRow,
    /// Set when the value sits below every threshold.
    pub current_note: Option<&'static str>,
    pub next: Option<TierRow>,
    pub next_label: String,
    pub gap: Option<String>,
}

impl ResolutionView {
    pub fn new(resolution: &Resolution, value: f64) -> Self {
        let next = resolution.next.as_ref().map(TierRow::from);
        let next_label = match &next {
            Some(row) => format!("{} at {}", row.tier, row.no_pet),
            None => HIGHEST_TIER_REACHED.to_string(),
        };

        Self {
            input: format_percent(Some(value)),
            current: TierRow::from(&resolution.current),
            current_note: (!resolution.reached).then_some(NO_LOWER_TIER),
            next,
            next_label,
            gap: resolution
                .gap_to_next(value)
                .map(|gap| format_percent(Some(gap))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, TierTable};

    fn table() -> TierTable {
        let rec = |id, no_pet, interval| TierRecord {
            tier: Some(id),
            interval: Some(interval),
            cooldown_no_pet: Some(no_pet),
            ..TierRecord::default()
        };
        TierTable::from_records(vec![rec(3, 80.0, 1.0), rec(2, 50.0, 2.0), rec(1, 20.0, 3.25)])
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_percent(Some(62.345)), "62.3%");
        assert_eq!(format_percent(None), "-");
        assert_eq!(format_seconds(Some(1.5)), "1.50s");
        assert_eq!(format_count(Some(4.0)), "4");
        assert_eq!(format_count(None), "-");
    }

    #[test]
    fn test_view_middle_tier() {
        let res = resolve(&table(), 60.0).unwrap();
        let view = ResolutionView::new(&res, 60.0);
        assert_eq!(view.input, "60.0%");
        assert_eq!(view.current.tier, "Tier 2");
        assert_eq!(view.current.interval, "2.00s");
        assert_eq!(view.current_note, None);
        assert_eq!(view.next_label, "Tier 3 at 80.0%");
        assert_eq!(view.gap.as_deref(), Some("20.0%"));
    }

    #[test]
    fn test_view_highest_tier() {
        let res = resolve(&table(), 95.0).unwrap();
        let view = ResolutionView::new(&res, 95.0);
        assert_eq!(view.current.tier, "Tier 3");
        assert!(view.next.is_none());
        assert_eq!(view.next_label, HIGHEST_TIER_REACHED);
        assert_eq!(view.gap, None);
    }

    #[test]
    fn test_view_below_lowest_tier() {
        let res = resolve(&table(), 0.0).unwrap();
        let view = ResolutionView::new(&res, 0.0);
        assert_eq!(view.current.tier, "Tier 1");
        assert_eq!(view.current_note, Some(NO_LOWER_TIER));
        assert_eq!(view.next_label, "Tier 2 at 50.0%");
    }
}
