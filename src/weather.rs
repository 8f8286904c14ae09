//! 기상청 단기예보 연동
//!
//! 실패하면 None (표시 불가)을 돌려준다. 가짜 날씨는 만들지 않는다.

use crate::config::Config;
use crate::error::{OlyMateError, Result};
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use olymate_common::seed::FORECAST_GRID;
use serde::Serialize;
use serde_json::Value;

const FORECAST_URL: &str = "http://apis.data.go.kr/1360000/VilageFcstInfoService_2.0/getVilageFcst";

/// 단기예보 발표 시각 (시)
const BASE_HOURS: [u32; 8] = [2, 5, 8, 11, 14, 17, 20, 23];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    /// 기온 (TMP, °C)
    pub temperature: String,
    /// 하늘상태 (SKY)
    pub sky: String,
    /// 강수확률 (POP, %)
    pub precipitation_chance: String,
}

impl Default for WeatherReport {
    fn default() -> Self {
        Self {
            temperature: "-".into(),
            sky: "-".into(),
            precipitation_chance: "-".into(),
        }
    }
}

/// 요청에 쓸 발표 일자・시각 (base_date, base_time)
///
/// 발표 후 45분이 지나야 조회되므로 그 전이면 한 시간 앞으로 본다.
pub fn forecast_base(now: NaiveDateTime) -> (String, String) {
    let now = if now.minute() < 45 {
        now - Duration::hours(1)
    } else {
        now
    };

    if now.hour() < 2 {
        let yesterday = now - Duration::days(1);
        return (yesterday.format("%Y%m%d").to_string(), "2300".to_string());
    }

    let base_hour = BASE_HOURS
        .iter()
        .copied()
        .filter(|&h| h <= now.hour())
        .max()
        .unwrap_or(23);

    (now.format("%Y%m%d").to_string(), format!("{:02}00", base_hour))
}

fn sky_label(code: i64) -> &'static str {
    match code {
        1 => "맑음 ☀️",
        3 => "구름많음 ⛅",
        _ => "흐림 ☁️",
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 응답 JSON에서 첫 예보 시각의 TMP/SKY/POP을 꺼낸다
pub fn parse_forecast(payload: &Value) -> Option<WeatherReport> {
    let items = payload
        .pointer("/response/body/items/item")?
        .as_array()?;

    let target_time = items.first()?.get("fcstTime")?;
    let mut report = WeatherReport::default();

    for item in items.iter().filter(|item| item.get("fcstTime") == Some(target_time)) {
        let value = match item.get("fcstValue") {
            Some(value) => value_text(value),
            None => continue,
        };

        match item.get("category").and_then(Value::as_str) {
            Some("TMP") => report.temperature = value,
            Some("SKY") => {
                let code: i64 = value.trim().parse().ok()?;
                report.sky = sky_label(code).to_string();
            }
            Some("POP") => report.precipitation_chance = value,
            _ => {}
        }
    }

    Some(report)
}

async fn request_forecast(config: &Config) -> Result<Value> {
    let key = config.weather_api_key()?;
    let (base_date, base_time) = forecast_base(Local::now().naive_local());
    let (nx, ny) = (FORECAST_GRID.0.to_string(), FORECAST_GRID.1.to_string());

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.weather_timeout_seconds))
        .build()?;

    let response = client
        .get(FORECAST_URL)
        .query(&[
            ("serviceKey", key.as_str()),
            ("pageNo", "1"),
            ("numOfRows", "100"),
            ("dataType", "JSON"),
            ("base_date", base_date.as_str()),
            ("base_time", base_time.as_str()),
            ("nx", nx.as_str()),
            ("ny", ny.as_str()),
        ])
        .send()
        .await?;

    response
        .json::<Value>()
        .await
        .map_err(|e| OlyMateError::ApiParse(e.to_string()))
}

/// 현재 날씨를 가져온다 (실패 시 None)
pub async fn fetch_weather(config: &Config) -> Option<WeatherReport> {
    match request_forecast(config).await {
        Ok(payload) => {
            let report = parse_forecast(&payload);
            if report.is_none() {
                tracing::warn!("기상청 응답에서 예보를 찾지 못했습니다");
            }
            report
        }
        Err(e) => {
            tracing::warn!(error = %e, "기상청 API 연결 실패");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 5)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_forecast_base_after_45_minutes() {
        assert_eq!(forecast_base(at(14, 50)), ("20251205".into(), "1400".into()));
        assert_eq!(forecast_base(at(16, 45)), ("20251205".into(), "1400".into()));
    }

    #[test]
    fn test_forecast_base_before_45_minutes() {
        // 14:10 → 13:10 기준 → 11시 발표
        assert_eq!(forecast_base(at(14, 10)), ("20251205".into(), "1100".into()));
    }

    #[test]
    fn test_forecast_base_early_morning_uses_yesterday() {
        assert_eq!(forecast_base(at(1, 50)), ("20251204".into(), "2300".into()));
        // 02:30 → 01:30 기준
        assert_eq!(forecast_base(at(2, 30)), ("20251204".into(), "2300".into()));
        assert_eq!(forecast_base(at(2, 50)), ("20251205".into(), "0200".into()));
    }

    #[test]
    fn test_parse_forecast() {
        let payload = json!({
            "response": {"body": {"items": {"item": [
                {"category": "TMP", "fcstTime": "1500", "fcstValue": "3"},
                {"category": "SKY", "fcstTime": "1500", "fcstValue": "3"},
                {"category": "POP", "fcstTime": "1500", "fcstValue": "20"},
                {"category": "TMP", "fcstTime": "1600", "fcstValue": "2"}
            ]}}}
        });

        let report = parse_forecast(&payload).unwrap();
        assert_eq!(report.temperature, "3");
        assert_eq!(report.sky, "구름많음 ⛅");
        assert_eq!(report.precipitation_chance, "20");
    }

    #[test]
    fn test_parse_forecast_missing_categories_use_dash() {
        let payload = json!({
            "response": {"body": {"items": {"item": [
                {"category": "TMP", "fcstTime": "0900", "fcstValue": "-1"}
            ]}}}
        });

        let report = parse_forecast(&payload).unwrap();
        assert_eq!(report.temperature, "-1");
        assert_eq!(report.sky, "-");
    }

    #[test]
    fn test_parse_forecast_error_payload() {
        let payload = json!({"response": {"header": {"resultCode": "30"}}});
        assert!(parse_forecast(&payload).is_none());

        let empty = json!({"response": {"body": {"items": {"item": []}}}});
        assert!(parse_forecast(&empty).is_none());
    }

    #[test]
    fn test_parse_forecast_bad_sky_code() {
        let payload = json!({
            "response": {"body": {"items": {"item": [
                {"category": "SKY", "fcstTime": "0900", "fcstValue": "맑음"}
            ]}}}
        });
        assert!(parse_forecast(&payload).is_none());
    }
}
