//! Pure Yew view components for the harvest tier UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use harvest_tiers::format::{ResolutionView, TierRow};
use harvest_tiers::{resolve, TierTable};
use std::rc::Rc;
use yew::prelude::*;

/// Renders the current/next tier panel for `value`.
pub fn render_resolution(table: &TierTable, value: f64) -> Html {
    let Some(resolution) = resolve(table, value) else {
        return html! {
            <div class="resolution">
                <p class="no-results-message">{ "Tier data is not available." }</p>
            </div>
        };
    };
    let view = ResolutionView::new(&resolution, value);

    html! {
        <div class="resolution">
            <div class="resolution-input">
                { format!("Cooldown recovery: {}", view.input) }
            </div>
            <div class="resolution-current">
                <h3>{ "Current tier" }</h3>
                { render_tier_summary(&view.current) }
                if let Some(note) = view.current_note {
                    <div class="tier-note">{ note }</div>
                }
            </div>
            <div class="resolution-next">
                <h3>{ "Next tier" }</h3>
                <div class="tier-next-label">{ &view.next_label }</div>
                if let Some(gap) = &view.gap {
                    <div class="tier-gap">{ format!("Needs {} more", gap) }</div>
                }
            </div>
        </div>
    }
}

fn render_tier_summary(row: &TierRow) -> Html {
    html! {
        <dl class="tier-summary">
            <dt>{ "Tier" }</dt><dd>{ &row.tier }</dd>
            <dt>{ "Harvests" }</dt><dd>{ &row.harvests }</dd>
            <dt>{ "Trigger interval" }</dt><dd>{ &row.interval }</dd>
            <dt>{ "No pet" }</dt><dd>{ &row.no_pet }</dd>
        </dl>
    }
}

/// Full tier table with the row for `current_tier` highlighted.
#[derive(Properties, PartialEq)]
pub struct TierTableViewProps {
    pub table: Rc<TierTable>,
    pub current_tier: Option<i64>,
}

#[function_component(TierTableView)]
pub fn tier_table_view(props: &TierTableViewProps) -> Html {
    if props.table.is_empty() {
        return html! {};
    }

    html! {
        <table class="tier-table">
            <thead>
                <tr>
                    <th>{ "Tier" }</th>
                    <th>{ "Harvests" }</th>
                    <th>{ "Trigger Interval" }</th>
                    <th>{ "No Pet" }</th>
                    <th>{ "Tier 1 Pet" }</th>
                    <th>{ "Tier 6 Pet" }</th>
                </tr>
            </thead>
            <tbody>
                { props.table.records().iter().map(|record| {
                    let row = TierRow::from(record);
                    let class = if record.tier.is_some() && record.tier == props.current_tier {
                        "current"
                    } else {
                        ""
                    };
                    html! {
                        <tr class={class}>
                            <td>{ row.tier }</td>
                            <td>{ row.harvests }</td>
                            <td>{ row.interval }</td>
                            <td>{ row.no_pet }</td>
                            <td>{ row.pet1 }</td>
                            <td>{ row.pet6 }</td>
                        </tr>
                    }
                }).collect::<Html>() }
            </tbody>
        </table>
    }
}

/// Text input for the cooldown value.
#[derive(Properties, PartialEq)]
pub struct CooldownFieldProps {
    pub text: String,
    pub oninput: Callback<InputEvent>,
    pub oncommit: Callback<()>,
}

#[function_component(CooldownField)]
pub fn cooldown_field(props: &CooldownFieldProps) -> Html {
    let onkeydown = {
        let commit = props.oncommit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };

    html! {
        <div class="form-group">
            <label for="cooldown_input">{ "Cooldown Recovery (%):" }</label>
            <input
                type="text"
                id="cooldown_input"
                inputmode="decimal"
                value={props.text.clone()}
                oninput={props.oninput.clone()}
                onchange={props.oncommit.reform(|_| ())}
                onkeydown={onkeydown}
            />
        </div>
    }
}
