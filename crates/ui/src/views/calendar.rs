use chrono::Datelike;
use dioxus::prelude::*;
use medico_core::model::{NotifyBefore, ReminderDraft, ReminderFilter, ReminderKind};
use services::{Action, AppState};

use crate::context::{AppContext, use_app_state, use_dispatch};
use crate::vm::{
    ReminderRowVm, WEEKDAY_LABELS, format_date, map_day_reminders, map_reminder_rows,
    month_grid, shift_month,
};

fn edit_draft(
    state: Signal<AppState>,
    dispatch: Callback<Action>,
    apply: impl FnOnce(&mut ReminderDraft),
) {
    let mut next = state.read().reminder_draft().clone();
    apply(&mut next);
    dispatch.call(Action::EditReminderDraft(next));
}

#[component]
pub fn CalendarView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_app_state();
    let dispatch = use_dispatch();
    let today = ctx.services().clock().today();

    let mut shown = use_signal(|| {
        let anchor = state.read().selected_date().unwrap_or(today);
        (anchor.year(), anchor.month())
    });

    let (grid, day_detail, rows, filter, draft, error) = {
        let state = state.read();
        let (year, month) = shown();
        let selected = state.selected_date();
        (
            month_grid(year, month, state.reminders(), selected, today),
            selected.map(|date| (format_date(date), map_day_reminders(state.reminders(), date))),
            map_reminder_rows(state.reminders(), state.reminder_filter()),
            state.reminder_filter(),
            state.reminder_draft().clone(),
            state.errors().reminder.clone(),
        )
    };

    rsx! {
        section { class: "page", id: "calendar",
            h2 { "Calendar" }

            if let Some(grid) = grid {
                div { class: "month",
                    div { class: "month-header",
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                let (year, month) = shown();
                                shown.set(shift_month(year, month, -1));
                            },
                            "‹"
                        }
                        h3 { "{grid.title}" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                let (year, month) = shown();
                                shown.set(shift_month(year, month, 1));
                            },
                            "›"
                        }
                    }
                    table { class: "month-grid",
                        thead {
                            tr {
                                for label in WEEKDAY_LABELS {
                                    th { "{label}" }
                                }
                            }
                        }
                        tbody {
                            for week in grid.weeks {
                                tr {
                                    for cell in week {
                                        td {
                                            key: "{cell.date}",
                                            class: cell.class(),
                                            onclick: move |_| dispatch.call(Action::SelectDate(Some(cell.date))),
                                            "{cell.day}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some((date_label, day_rows)) = day_detail {
                div { class: "day-detail",
                    h3 { "Reminders for {date_label}" }
                    if day_rows.is_empty() {
                        p { "No reminders on this day." }
                    } else {
                        ReminderList { rows: day_rows }
                    }
                    button {
                        class: "link-button",
                        onclick: move |_| dispatch.call(Action::SelectDate(None)),
                        "Clear selection"
                    }
                }
            }

            form { class: "reminder-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(Action::AddReminder);
                },
                h3 { "Add Reminder" }
                label { "Date" }
                input {
                    r#type: "date",
                    value: "{draft.date}",
                    oninput: move |evt| edit_draft(state, dispatch, |d| d.date = evt.value()),
                }
                label { "Time" }
                input {
                    r#type: "time",
                    value: "{draft.time}",
                    oninput: move |evt| edit_draft(state, dispatch, |d| d.time = evt.value()),
                }
                label { "Reminder" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Test Deadline: Anatomy",
                    value: "{draft.text}",
                    oninput: move |evt| edit_draft(state, dispatch, |d| d.text = evt.value()),
                }
                label { "Type" }
                select {
                    value: "{draft.kind}",
                    onchange: move |evt| {
                        if let Ok(kind) = evt.value().parse::<ReminderKind>() {
                            edit_draft(state, dispatch, |d| d.kind = kind);
                        }
                    },
                    for kind in ReminderKind::ALL {
                        option { value: "{kind}", selected: kind == draft.kind, "{kind}" }
                    }
                }
                label { "Details" }
                textarea {
                    value: "{draft.details}",
                    oninput: move |evt| edit_draft(state, dispatch, |d| d.details = evt.value()),
                }
                label { "Notify" }
                select {
                    value: "{draft.notify_before.as_str()}",
                    onchange: move |evt| {
                        if let Ok(lead) = evt.value().parse::<NotifyBefore>() {
                            edit_draft(state, dispatch, |d| d.notify_before = lead);
                        }
                    },
                    for lead in NotifyBefore::ALL {
                        option {
                            value: "{lead.as_str()}",
                            selected: lead == draft.notify_before,
                            "{lead.as_str()} before"
                        }
                    }
                }
                if let Some(message) = error {
                    p { class: "form-error", "{message}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Add Reminder" }
            }

            div { class: "reminder-list",
                div { class: "list-header",
                    h3 { "All Reminders" }
                    select {
                        value: "{filter.as_str()}",
                        onchange: move |evt| {
                            if let Ok(filter) = evt.value().parse::<ReminderFilter>() {
                                dispatch.call(Action::SetReminderFilter(filter));
                            }
                        },
                        option { value: "All", "All" }
                        for kind in ReminderKind::ALL {
                            option { value: "{kind}", "{kind}" }
                        }
                    }
                }
                if rows.is_empty() {
                    p { "No reminders yet." }
                } else {
                    ReminderList { rows }
                }
            }
        }
    }
}

#[component]
fn ReminderList(rows: Vec<ReminderRowVm>) -> Element {
    let dispatch = use_dispatch();
    rsx! {
        ul { class: "reminders",
            for row in rows {
                li { key: "{row.index}", class: "reminder",
                    div { class: "reminder-main",
                        span { class: "reminder-kind", "{row.kind_label}" }
                        strong { "{row.text}" }
                    }
                    div { class: "reminder-meta",
                        "{row.date_label} · {row.time_label} · {row.notify_label}"
                    }
                    if let Some(details) = &row.details {
                        p { class: "reminder-details", "{details}" }
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| dispatch.call(Action::DeleteReminder(row.index)),
                        "Delete"
                    }
                }
            }
        }
    }
}
