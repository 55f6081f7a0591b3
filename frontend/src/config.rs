use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::America::Sao_Paulo;

pub const MAX_BUYERS: u32 = 100;
pub const TICK_MS: u32 = 1_000;
pub const HERO_FADE_DELAY_MS: u32 = 1_000;
pub const CONTACT_EMAIL: &str = "plannerrun@gmail.com";

/// Base URL of the backend API. Set `PLANNERRUN_API_URL` at build time to
/// point somewhere other than the same-origin `/api` prefix.
pub fn get_api_url() -> &'static str {
    match option_env!("PLANNERRUN_API_URL") {
        Some(url) if !url.trim().is_empty() => url.trim(),
        _ => "/api",
    }
}

/// End of the launch offer shown by the countdown. `None` only if the
/// configured value can't be resolved, which the widget treats as expired.
pub fn offer_deadline() -> Option<DateTime<Utc>> {
    if let Some(raw) = option_env!("PLANNERRUN_OFFER_DEADLINE") {
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(dt) => return Some(dt.with_timezone(&Utc)),
            Err(e) => log::warn!("Ignoring invalid PLANNERRUN_OFFER_DEADLINE {:?}: {}", raw, e),
        }
    }
    NaiveDate::from_ymd_opt(2025, 5, 23)?
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(Sao_Paulo)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deadline_is_midnight_in_sao_paulo() {
        if option_env!("PLANNERRUN_OFFER_DEADLINE").is_some() {
            return;
        }
        let deadline = offer_deadline().expect("deadline resolves");
        assert_eq!(deadline.to_rfc3339(), "2025-05-23T03:00:00+00:00");
    }
}
