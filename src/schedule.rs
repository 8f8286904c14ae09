//! 공연 일정
//!
//! 공식 일정을 먼저 두고, 문화정보원 API 결과 중 새 공연만 뒤에 붙인다.
//! API가 실패하면 공식 일정만 쓴다.

use crate::config::Config;
use crate::error::{OlyMateError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use olymate_common::{seed, Concert};
use serde_json::Value;

pub use olymate_common::seed::venue_center;

const CONCERT_URL: &str = "https://api.kcisa.kr/openapi/service/rest/meta/KSCperf";

/// API 결과 중 이 연도가 기간에 들어간 공연만 받는다
const SEASON_YEAR: &str = "2025";

/// 공연까지 남은 날
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DDay {
    Upcoming(i64),
    InProgress,
}

impl std::fmt::Display for DDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DDay::Upcoming(days) => write!(f, "D-{}", days),
            DDay::InProgress => write!(f, "진행중 🎤"),
        }
    }
}

/// 시작일 기준 D-Day (날짜를 읽을 수 없으면 None)
pub fn d_day(concert: &Concert, now: NaiveDateTime) -> Option<DDay> {
    let start = NaiveDate::parse_from_str(concert.start_date(), "%Y-%m-%d").ok()?;
    let days = (start.and_hms_opt(0, 0, 0)? - now).num_days();

    if days > 0 {
        Some(DDay::Upcoming(days))
    } else {
        Some(DDay::InProgress)
    }
}

/// API 응답의 공연을 목록에 합친다
///
/// item은 객체 하나일 수도, 배열일 수도 있다.
pub fn merge_api_items(concerts: &mut Vec<Concert>, payload: &Value) {
    let items = match payload.pointer("/response/body/items/item") {
        Some(Value::Array(items)) => items.clone(),
        Some(item @ Value::Object(_)) => vec![item.clone()],
        _ => return,
    };

    for item in &items {
        let title = item.get("title").and_then(Value::as_str).unwrap_or_default();
        let coverage = item
            .get("temporalCoverage")
            .and_then(Value::as_str)
            .unwrap_or_default();

        if concerts.iter().any(|c| c.title == title) || !coverage.contains(SEASON_YEAR) {
            continue;
        }

        concerts.push(Concert {
            title: title.to_string(),
            date: coverage.to_string(),
            place: item
                .get("spatial")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            link: None,
        });
    }
}

async fn request_concerts(config: &Config) -> Result<Value> {
    let key = config.concert_api_key()?;

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.concert_timeout_seconds))
        .build()?;

    let response = client
        .get(CONCERT_URL)
        .query(&[
            ("serviceKey", key.as_str()),
            ("numOfRows", "50"),
            ("pageNo", "1"),
            ("keyword", SEASON_YEAR),
        ])
        .header("accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(OlyMateError::ApiCall(format!("HTTP {}", response.status())));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| OlyMateError::ApiParse(e.to_string()))
}

/// 공식 일정 + API 보조 일정
pub async fn fetch_concerts(config: &Config) -> Vec<Concert> {
    let mut concerts = seed::concerts();

    match request_concerts(config).await {
        Ok(payload) => {
            let before = concerts.len();
            merge_api_items(&mut concerts, &payload);
            tracing::debug!(added = concerts.len() - before, "API 공연 병합");
        }
        Err(e) => tracing::warn!(error = %e, "공연 API 호출 실패, 공식 일정만 사용합니다"),
    }

    concerts
}

/// 제목으로 공연을 찾는다 (부분 일치, 없으면 첫 공연)
pub fn select_concert<'a>(concerts: &'a [Concert], title: Option<&str>) -> Option<&'a Concert> {
    match title {
        Some(title) => concerts
            .iter()
            .find(|c| c.title == title)
            .or_else(|| concerts.iter().find(|c| c.title.contains(title))),
        None => concerts.first(),
    }
}
