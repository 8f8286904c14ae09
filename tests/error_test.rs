//! 에러 케이스 테스트
//!
//! 외부 연동 실패 시 "없음"으로 처리되는지 확인

use olymate::config::Config;
use olymate::error::OlyMateError;
use olymate::view;
use olymate::i18n::Language;

/// 키가 없으면 날씨는 None (가짜 데이터로 채우지 않음)
#[tokio::test]
async fn test_weather_without_key_is_unavailable() {
    std::env::remove_var("WEATHER_API_KEY");
    let config = Config::default();

    let report = olymate::weather::fetch_weather(&config).await;
    assert!(report.is_none());

    let lines = view::weather_lines(Language::English.text(), report.as_ref());
    assert!(lines.iter().any(|l| l.contains("unavailable")));
}

/// 키가 없으면 공식 일정만
#[tokio::test]
async fn test_concerts_without_key_use_official_schedule() {
    std::env::remove_var("CONCERT_API_KEY");
    let concerts = olymate::schedule::fetch_concerts(&Config::default()).await;
    assert_eq!(concerts.len(), 10);
}

/// OlyMateError 표시 문구
#[test]
fn test_error_display() {
    let errors = vec![
        OlyMateError::Config("테스트 설정 오류".to_string()),
        OlyMateError::MissingApiKey("기상청", "weather"),
        OlyMateError::FileNotFound("places.json".to_string()),
        OlyMateError::DataFormat("'위도' 열이 없습니다".to_string()),
        OlyMateError::ApiCall("timeout".to_string()),
    ];

    for err in errors {
        assert!(!err.to_string().is_empty());
    }

    let err = OlyMateError::MissingApiKey("기상청", "weather");
    assert!(err.to_string().contains("--set-weather-key"));
}

/// 공통 크레이트 에러 변환
#[test]
fn test_common_error_conversion() {
    let common = olymate_common::SynonymTable::from_json("[1, 2]").unwrap_err();
    let err: OlyMateError = common.into();
    assert!(matches!(err, OlyMateError::Common(_)));
}
