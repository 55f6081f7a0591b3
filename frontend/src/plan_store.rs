//! Hand-off of the plan chosen on the landing page to the intake form.
//!
//! One key in session storage. The landing page plan cards call [`store`];
//! the intake form calls [`take`] once on mount, which also clears the key.

use crate::models::PlanMonths;
use web_sys::{window, Storage};

const SELECTED_PLAN_KEY: &str = "plannerrun.selected_plan_months";

fn session_storage() -> Option<Storage> {
    match window().map(|w| w.session_storage()) {
        Some(Ok(Some(storage))) => Some(storage),
        _ => {
            log::warn!("Session storage unavailable, plan selection won't carry over");
            None
        }
    }
}

pub fn store(months: PlanMonths) {
    if let Some(storage) = session_storage() {
        if storage.set_item(SELECTED_PLAN_KEY, &months.get().to_string()).is_err() {
            log::warn!("Failed to remember selected plan of {} months", months);
        }
    }
}

pub fn take() -> Option<PlanMonths> {
    let storage = session_storage()?;
    let raw = storage.get_item(SELECTED_PLAN_KEY).ok().flatten()?;
    let _ = storage.remove_item(SELECTED_PLAN_KEY);
    let months = parse_stored(&raw);
    if months.is_none() {
        log::warn!("Ignoring stored plan value {:?}", raw);
    }
    months
}

fn parse_stored(raw: &str) -> Option<PlanMonths> {
    raw.trim().parse::<u32>().ok().and_then(|m| PlanMonths::try_from(m).ok())
}

#[cfg(test)]
mod tests {
    use super::parse_stored;

    #[test]
    fn parses_only_sold_durations() {
        assert_eq!(parse_stored("4").map(|m| m.get()), Some(4));
        assert_eq!(parse_stored(" 6 ").map(|m| m.get()), Some(6));
        assert_eq!(parse_stored("12"), None);
        assert_eq!(parse_stored("quatro"), None);
        assert_eq!(parse_stored(""), None);
    }
}
