//! 터미널 출력 문구
//!
//! 검색 결과를 화면에 보일 줄 목록으로 바꾼다. 출력 자체는 호출 측이 한다.

use crate::i18n::UiText;
use crate::map::naver_map_link;
use crate::schedule::{d_day, DDay};
use crate::weather::WeatherReport;
use chrono::NaiveDateTime;
use olymate_common::{Concert, FacilitySearch, PlaceRecord};

pub fn facility_lines(text: &UiText, search: &FacilitySearch<'_>) -> Vec<String> {
    if search.is_empty() {
        return vec![format!("⚠ {}", text.facility_not_found)];
    }

    let mut lines = vec![format!("✔ {}", text.facility_found(&search.keyword, search.matches.len()))];
    for (i, facility) in search.matches.iter().enumerate() {
        lines.push(format!(
            "  {}) 📍 {} ({}: {})",
            i + 1,
            facility.label(),
            text.location,
            facility.display_location
        ));
    }
    lines
}

pub fn place_lines(text: &UiText, places: &[&PlaceRecord]) -> Vec<String> {
    if places.is_empty() {
        return vec![format!("⚠ {}", text.place_not_found)];
    }

    let mut lines = vec![format!("✔ {}", text.place_found(places.len()))];
    for (i, place) in places.iter().enumerate() {
        lines.push(format!("  {}) {} ({})", i + 1, place.name, place.category));
        lines.push(format!("     📝 {}", place.description));
        lines.push(format!("     ↗ {}", naver_map_link(&place.name)));
    }
    lines
}

pub fn weather_lines(text: &UiText, report: Option<&WeatherReport>) -> Vec<String> {
    match report {
        Some(report) => vec![format!(
            "🌤️ {}: {}°C {} ({} {}%)",
            text.weather, report.temperature, report.sky, text.precipitation, report.precipitation_chance
        )],
        None => vec![
            format!("⚠ {}", text.weather_api_failed),
            format!("  {}", text.weather_unavailable),
        ],
    }
}

pub fn concert_lines(concerts: &[Concert], now: NaiveDateTime) -> Vec<String> {
    concerts
        .iter()
        .enumerate()
        .map(|(i, concert)| {
            let status = d_day(concert, now)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "  {:>2}) [{}] {} | 📅 {} | 📍 {}",
                i + 1,
                status,
                concert.title,
                concert.date,
                concert.place
            )
        })
        .collect()
}

pub fn concert_detail_lines(text: &UiText, concert: &Concert, now: NaiveDateTime) -> Vec<String> {
    let mut lines = vec![
        format!("🎵 '{}' {}", concert.title, text.welcome),
        format!(
            "  📅 {}: {} | 📍 {}: {}",
            text.schedule, concert.date, text.venue, concert.place
        ),
    ];
    if let Some(DDay::Upcoming(days)) = d_day(concert, now) {
        lines.push(format!("  🗓️ {} D-{}", text.until_show, days));
    }
    if let Some(link) = &concert.link {
        lines.push(format!("  🎟️ {}: {}", text.tickets, link));
    }
    lines
}
