use log::{debug, info};
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod format;
pub mod numeric;
pub mod session;

/// Fixed keyword labels recognized in the tier text.
pub mod labels {
    /// Starts a new tier block; followed by the integer tier id.
    pub const TIER_MARKER: &str = "档位";
    pub const HARVEST_COUNT: &str = "收获次数";
    pub const TRIGGER_INTERVAL: &str = "触发间隔";
    pub const COOLDOWN_NO_PET: &str = "无宠物冷却回复";
    pub const COOLDOWN_PET_1: &str = "1阶宠物冷却回复";
    pub const COOLDOWN_PET_6: &str = "6阶宠物冷却回复";
}

/// One harvest cooldown tier as read from the tier text.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRecord {
    pub tier: Option<i64>,
    pub harvests_count: Option<f64>,
    /// Trigger interval in seconds.
    pub interval: Option<f64>,
    pub cooldown_no_pet: Option<f64>,
    pub cooldown_pet1: Option<f64>,
    pub cooldown_pet6: Option<f64>,
}

impl TierRecord {
    fn new(tier: Option<i64>) -> Self {
        Self {
            tier,
            ..Self::default()
        }
    }

    /// The no-pet threshold. Always present on records held by a `TierTable`.
    pub fn threshold(&self) -> f64 {
        self.cooldown_no_pet.unwrap_or(0.0)
    }

    fn is_complete(&self) -> bool {
        self.tier.is_some() && self.cooldown_no_pet.is_some()
    }

    /// Apply one non-marker line to this record.
    fn apply_line(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix(labels::HARVEST_COUNT) {
            self.harvests_count = numeric::leading_float(rest);
        } else if let Some(rest) = line.strip_prefix(labels::TRIGGER_INTERVAL) {
            self.interval = numeric::leading_float(rest);
        }

        if line.contains(labels::COOLDOWN_NO_PET) {
            self.cooldown_no_pet = numeric::number_after(line, labels::COOLDOWN_NO_PET);
        }
        if line.contains(labels::COOLDOWN_PET_1) {
            self.cooldown_pet1 = numeric::number_after(line, labels::COOLDOWN_PET_1);
        }
        if line.contains(labels::COOLDOWN_PET_6) {
            self.cooldown_pet6 = numeric::number_after(line, labels::COOLDOWN_PET_6);
        }
    }
}

/// Tier records sorted by `cooldown_no_pet`, highest threshold first.
///
/// Every record holds a `tier` and a `cooldown_no_pet`. A table is never
/// mutated after parsing; reloading produces a new table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TierTable {
    records: Vec<TierRecord>,
}

impl TierTable {
    /// Build a table from arbitrary records, dropping incomplete ones and
    /// sorting the rest by descending no-pet threshold. Ties keep input order.
    pub fn from_records(records: Vec<TierRecord>) -> Self {
        let mut records: Vec<TierRecord> = records
            .into_iter()
            .filter(|r| {
                if !r.is_complete() {
                    debug!("Dropping incomplete tier record: {:?}", r);
                }
                r.is_complete()
            })
            .collect();
        records.sort_by(|a, b| b.threshold().total_cmp(&a.threshold()));
        Self { records }
    }

    pub fn records(&self) -> &[TierRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parser state: the record under construction, if any.
#[derive(Default)]
struct Accumulator {
    done: Vec<TierRecord>,
    building: Option<TierRecord>,
}

impl Accumulator {
    fn feed(mut self, line: &str) -> Self {
        if let Some(rest) = line.strip_prefix(labels::TIER_MARKER) {
            let tier = numeric::leading_int(rest);
            if tier.is_none() {
                debug!("Tier marker without a valid id: '{}'", line);
            }
            self.done.extend(self.building.replace(TierRecord::new(tier)));
        } else if let Some(record) = self.building.as_mut() {
            record.apply_line(line);
        } else {
            debug!("Ignoring line outside any tier block: '{}'", line);
        }
        self
    }

    fn finish(mut self) -> Vec<TierRecord> {
        self.done.extend(self.building.take());
        self.done
    }
}

/// Parse the tier text into a sorted `TierTable`.
///
/// Malformed numbers become `None`; records without a tier id or a no-pet
/// cooldown are dropped. Empty or unrecognizable input yields an empty table.
pub fn parse_tier_table(text: &str) -> TierTable {
    let records = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(Accumulator::default(), Accumulator::feed)
        .finish();

    let table = TierTable::from_records(records);
    info!("Loaded {} harvest tiers", table.len());
    table
}

/// The tier a cooldown value currently satisfies and the one above it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub current: TierRecord,
    pub next: Option<TierRecord>,
    /// False when the value is below every threshold and `current` is only
    /// the lowest tier by default.
    pub reached: bool,
}

impl Resolution {
    /// Additional cooldown needed to reach `next`, if there is a next tier.
    pub fn gap_to_next(&self, value: f64) -> Option<f64> {
        self.next
            .as_ref()
            .map(|next| (next.threshold() - sanitize(value)).max(0.0))
    }

    pub fn is_highest(&self) -> bool {
        self.next.is_none()
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Find the tier satisfied by `value` in a descending table.
///
/// The first record whose threshold is `<= value` is current and the record
/// before it is next. Below every threshold, the lowest tier is current and
/// its upper neighbour is next. Returns `None` for an empty table.
pub fn resolve(table: &TierTable, value: f64) -> Option<Resolution> {
    let records = table.records();
    let value = sanitize(value);

    match records.iter().position(|r| value >= r.threshold()) {
        Some(idx) => Some(Resolution {
            current: records[idx].clone(),
            next: idx.checked_sub(1).map(|prev| records[prev].clone()),
            reached: true,
        }),
        None => {
            let (last, rest) = records.split_last()?;
            Some(Resolution {
                current: last.clone(),
                next: rest.last().cloned(),
                reached: false,
            })
        }
    }
}

/// Parse `text` and resolve `cooldown` against it in one call for plain
/// JavaScript callers.
///
/// # Returns
/// The serialized `Resolution`, or `null` when the text holds no tiers
#[wasm_bindgen]
pub fn resolve_from_text(text: &str, cooldown: f64) -> JsValue {
    let table = parse_tier_table(text);
    match resolve(&table, cooldown) {
        Some(resolution) => serde_wasm_bindgen::to_value(&resolution).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}
