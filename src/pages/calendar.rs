//! Capture Calendar Page
//!
//! Month grid of the viewer's unlock history.

use chrono::{Datelike, NaiveDate};
use leptos::*;
use leptos_router::*;

use crate::api::models::StickerHistoryItem;
use crate::api::stickers;
use crate::components::{use_toasts, Loading};
use crate::state::remote::{load_into, Remote};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Cells of a month view: leading blanks so day 1 falls on its weekday
/// (weeks start on Sunday), then one cell per day.
fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return Vec::new(),
    };
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);
    let mut cells = vec![None; leading];
    cells.extend((1..=days).map(Some));
    cells
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (next, NaiveDate::from_ymd_opt(year, month, 1)) {
        (Some(next), Some(first)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

/// Calendar day of a history entry, from its ISO timestamp.
fn item_date(item: &StickerHistoryItem) -> Option<NaiveDate> {
    let raw = item.unlocked_at.as_deref().or(item.created_at.as_deref())?;
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

/// Capture calendar page
#[component]
pub fn CalendarPage() -> impl IntoView {
    let toasts = use_toasts();
    let history = create_rw_signal(Remote::<Vec<StickerHistoryItem>>::default());

    create_effect(move |_| {
        load_into(history, stickers::history());
    });

    create_effect(move |_| {
        if history.get().error().is_some() {
            toasts.error("Couldn't load the capture history.");
        }
    });

    let today = chrono::Utc::now().date_naive();
    let (year, set_year) = create_signal(today.year());
    let (month, set_month) = create_signal(today.month());

    let previous = move |_| {
        if month.get() == 1 {
            set_month.set(12);
            set_year.update(|y| *y -= 1);
        } else {
            set_month.update(|m| *m -= 1);
        }
    };
    let next = move |_| {
        if month.get() == 12 {
            set_month.set(1);
            set_year.update(|y| *y += 1);
        } else {
            set_month.update(|m| *m += 1);
        }
    };

    view! {
        <div class="flex-1 p-10 max-w-5xl mx-auto w-full">
            <h1 class="text-3xl font-semibold text-gray-800 mb-8">"Capture calendar"</h1>

            <div class="bg-white rounded-2xl shadow-md p-6">
                <div class="flex items-center justify-between mb-6">
                    <button
                        on:click=previous
                        class="px-4 py-2 bg-gray-100 hover:bg-gray-200 rounded-lg"
                    >
                        "←"
                    </button>
                    <h2 class="text-xl font-semibold text-gray-800">
                        {move || format!(
                            "{} {}",
                            MONTH_NAMES[(month.get() - 1) as usize],
                            year.get()
                        )}
                    </h2>
                    <button
                        on:click=next
                        class="px-4 py-2 bg-gray-100 hover:bg-gray-200 rounded-lg"
                    >
                        "→"
                    </button>
                </div>

                {move || match history.get() {
                    Remote::Idle | Remote::Loading => view! { <Loading /> }.into_view(),
                    Remote::Failed(message) => view! {
                        <p class="text-red-600">{message}</p>
                    }.into_view(),
                    Remote::Ready(items) => {
                        let y = year.get();
                        let m = month.get();
                        view! { <MonthView year=y month=m items=items /> }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn MonthView(year: i32, month: u32, items: Vec<StickerHistoryItem>) -> impl IntoView {
    let cells = month_grid(year, month);

    view! {
        <div class="grid grid-cols-7 gap-2 text-center text-xs text-gray-500 mb-2">
            {["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].into_iter().map(|day| view! {
                <div class="font-medium">{day}</div>
            }).collect_view()}
        </div>
        <div class="grid grid-cols-7 gap-2">
            {cells.into_iter().map(|cell| match cell {
                None => view! { <div class="h-24" /> }.into_view(),
                Some(day) => {
                    let day_items: Vec<StickerHistoryItem> = items
                        .iter()
                        .filter(|item| {
                            item_date(item)
                                .map(|d| d.year() == year && d.month() == month && d.day() == day)
                                .unwrap_or(false)
                        })
                        .cloned()
                        .collect();
                    view! { <DayCell day=day items=day_items /> }.into_view()
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn DayCell(day: u32, items: Vec<StickerHistoryItem>) -> impl IntoView {
    let has_items = !items.is_empty();
    view! {
        <div class=move || format!(
            "h-24 rounded-lg border p-2 text-left overflow-hidden {}",
            if has_items { "border-blue-300 bg-blue-50" } else { "border-gray-200" }
        )>
            <span class="text-xs text-gray-500">{day}</span>
            {items.into_iter().take(2).map(|item| {
                let href = format!("/app/stickers/{}", item.sticker);
                let label = item.sticker_name.clone().unwrap_or_else(|| format!("#{}", item.sticker));
                view! {
                    <A href=href class="block text-xs text-blue-700 truncate hover:underline">
                        "🏷️ "{label}
                    </A>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_grid_alignment() {
        // June 2026 starts on a Monday: one leading blank
        let cells = month_grid(2026, 6);
        assert_eq!(cells[0], None);
        assert_eq!(cells[1], Some(1));
        assert_eq!(cells.len(), 1 + 30);
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn test_item_date_from_timestamp() {
        let item = StickerHistoryItem {
            id: 1,
            sticker: 2,
            sticker_name: None,
            album: None,
            album_title: None,
            photo_url: None,
            unlocked_at: Some("2026-03-15T09:30:00Z".into()),
            created_at: None,
        };
        assert_eq!(item_date(&item), NaiveDate::from_ymd_opt(2026, 3, 15));
    }
}
