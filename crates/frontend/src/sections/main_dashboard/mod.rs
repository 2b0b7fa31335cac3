use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::global_context::DashboardContext;
use crate::shared::format::group_thousands;
use crate::shared::icons::icon;

const COUNT_UP_STEPS: u32 = 30;
const COUNT_UP_TICK_MS: u32 = 50;

#[component]
#[allow(non_snake_case)]
pub fn MainDashboard() -> impl IntoView {
    view! {
        <div class="content main-dashboard">
            <div class="stat-grid">
                <AnimatedStatCard label="Total Bookings" value=1284 icon_name="calendar" />
                <AnimatedStatCard label="Active Packages" value=36 icon_name="package" />
                <AnimatedStatCard label="Registered Users" value=892 icon_name="users" />
                <AnimatedStatCard label="Monthly Revenue" value=48250 prefix="$" icon_name="file-text" />
            </div>
        </div>
    }
}

/// Stat card whose value counts up from zero after the section mounts.
///
/// Each tick re-checks the activation epoch: a pending tick left over from
/// a replaced section drops itself instead of mutating stale state.
#[component]
fn AnimatedStatCard(
    label: &'static str,
    value: u32,
    #[prop(optional)] prefix: Option<&'static str>,
    icon_name: &'static str,
) -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found in context");
    let (display, set_display) = signal(0u32);
    let epoch = ctx.current_epoch();

    spawn_local(async move {
        let step = value.div_ceil(COUNT_UP_STEPS).max(1);
        let mut current = 0u32;
        while current < value {
            TimeoutFuture::new(COUNT_UP_TICK_MS).await;
            if ctx.current_epoch() != epoch {
                return;
            }
            current = (current + step).min(value);
            set_display.set(current);
        }
    });

    view! {
        <div class="stat-card glass-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-value">
                    {move || format!("{}{}", prefix.unwrap_or(""), group_thousands(display.get() as u64))}
                </span>
                <span class="stat-label">{label}</span>
            </div>
        </div>
    }
}
