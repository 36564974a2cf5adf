//! Main module for the harvest tier lookup using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use gloo_timers::callback::Interval;
use harvest_tiers::{resolve, TierTable};
use log::{debug, info, warn};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod loader;
mod persistence;
mod theme;

use components::{render_resolution, CooldownField, TierTableView};
use config::*;
use hooks::use_cooldown_input;
use loader::load_tier_table;
use theme::{apply_theme, load_theme};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Fetch the tier table and hand the new value to `table`.
fn spawn_table_load(table: UseStateHandle<Rc<TierTable>>, loading: UseStateHandle<bool>) {
    loading.set(true);
    wasm_bindgen_futures::spawn_local(async move {
        let loaded = load_tier_table(TIER_TABLE_URL).await;
        table.set(Rc::new(loaded));
        loading.set(false);
    });
}

/// One persistence pass: store the value and replay resolution against it.
fn autosave(table: &TierTable, cooldown: f64) {
    if let Err(e) = persistence::save_session(SESSION_STORAGE_KEY, cooldown) {
        warn!("Auto-save failed: {}", e);
        return;
    }
    match resolve(table, cooldown) {
        Some(res) => debug!(
            "Auto-saved cooldown {} (tier {:?}, next {:?})",
            cooldown,
            res.current.tier,
            res.next.as_ref().and_then(|n| n.tier)
        ),
        None => debug!("Auto-saved cooldown {} (no tier data)", cooldown),
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let table = use_state(|| Rc::new(TierTable::default()));
    let loading = use_state(|| false);
    let theme = use_state(load_theme);
    let cooldown = use_cooldown_input(DEFAULT_COOLDOWN_PCT);
    // Latest committed value, read by the auto-save timer
    let latest = use_mut_ref(|| (Rc::new(TierTable::default()), DEFAULT_COOLDOWN_PCT));

    // Load tier data and restore the previous session on mount
    {
        let table = table.clone();
        let loading = loading.clone();
        let set_value = cooldown.set_value.clone();
        use_effect_with((), move |_| {
            spawn_table_load(table, loading);
            let restored = persistence::restore_cooldown(SESSION_STORAGE_KEY, DEFAULT_COOLDOWN_PCT);
            set_value.emit(restored);
            || ()
        });
    }

    // Apply theme whenever it changes
    use_effect_with(*theme, |&theme| {
        apply_theme(theme);
        || ()
    });

    // Keep the auto-save snapshot current
    {
        let latest = latest.clone();
        use_effect_with(((*table).clone(), cooldown.value.to_bits()), move |(table, bits): &(Rc<TierTable>, u64)| {
            *latest.borrow_mut() = (table.clone(), f64::from_bits(*bits));
            || ()
        });
    }

    // Periodic persistence pass; the interval is dropped on unmount
    {
        let latest = latest.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(AUTOSAVE_INTERVAL_MS, move || {
                let (table, value) = latest.borrow().clone();
                autosave(&table, value);
            });
            move || drop(interval)
        });
    }

    let current_tier = resolve(&table, cooldown.value).and_then(|res| res.current.tier);

    let on_reload = {
        let table = table.clone();
        let loading = loading.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Reloading tier data");
            spawn_table_load(table.clone(), loading.clone());
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    html! {
        <div class="container">
            <div class="header">
                <h1>{ "Harvest Cooldown Tiers" }</h1>
                <button class="btn-secondary small" onclick={on_toggle_theme}>
                    { format!("Theme: {}", theme.as_str()) }
                </button>
            </div>

            <div class="controls">
                <CooldownField
                    text={cooldown.text.clone()}
                    oninput={cooldown.on_text_input.clone()}
                    oncommit={cooldown.on_commit.clone()}
                />
                <button class="btn-secondary small" onclick={on_reload} disabled={*loading}>
                    { if *loading { "Loading..." } else { "Reload Tier Data" } }
                </button>
            </div>

            <div class="results-area">
                if *loading && table.is_empty() {
                    <div class="no-results-message">
                        <p>{ "Loading tier data..." }</p>
                    </div>
                } else {
                    { render_resolution(&table, cooldown.value) }
                }
                <TierTableView table={(*table).clone()} current_tier={current_tier} />
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and renders the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
