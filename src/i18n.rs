//! 화면 문구 (한국어/영어)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Language {
    #[default]
    Korean,
    English,
}

/// 언어별 화면 문구
#[derive(Debug, Clone, Copy)]
pub struct UiText {
    pub title: &'static str,
    pub weather: &'static str,
    pub select: &'static str,
    pub welcome: &'static str,
    pub chat_help: &'static str,
    pub chat_prompt: &'static str,
    pub location: &'static str,
    pub precipitation: &'static str,
    pub weather_api_failed: &'static str,
    pub schedule: &'static str,
    pub venue: &'static str,
    pub until_show: &'static str,
    pub tickets: &'static str,
    pub facility_found: &'static str,
    pub facility_not_found: &'static str,
    pub place_found: &'static str,
    pub place_not_found: &'static str,
    pub weather_unavailable: &'static str,
}

const KOREAN: UiText = UiText {
    title: "🏟️ OlyMate",
    weather: "실시간 날씨",
    select: "🎫 공연 선택",
    welcome: "관람을 환영합니다!",
    chat_help: "명령: /f 시설  /r 맛집  /go 번호  /map 필터  /msg 응원  /fans  /lang  /q",
    chat_prompt: "질문",
    location: "위치",
    precipitation: "강수확률",
    weather_api_failed: "기상청 API 연결 실패 (키 확인 필요)",
    schedule: "일시",
    venue: "장소",
    until_show: "공연까지",
    tickets: "예매처",
    facility_found: "'{keyword}' 관련 시설 {count}개 발견",
    facility_not_found: "관련 시설을 찾지 못했습니다.",
    place_found: "추천 장소 {count}곳을 찾았습니다!",
    place_not_found: "조건에 맞는 추천 장소가 없습니다.",
    weather_unavailable: "현재 기온 정보를 가져올 수 없습니다.",
};

const ENGLISH: UiText = UiText {
    title: "🏟️ OlyMate",
    weather: "Weather",
    select: "Select Concert",
    welcome: "Welcome to the show!",
    chat_help: "Commands: /f facility  /r food  /go number  /map filters  /msg cheer  /fans  /lang  /q",
    chat_prompt: "Ask",
    location: "Location",
    precipitation: "chance of rain",
    weather_api_failed: "Weather API connection failed (check the key)",
    schedule: "Date",
    venue: "Venue",
    until_show: "Days until show:",
    tickets: "Tickets",
    facility_found: "Found {count} facilities for '{keyword}'",
    facility_not_found: "No matching facilities found.",
    place_found: "Found {count} recommended places!",
    place_not_found: "No places match your request.",
    weather_unavailable: "Current weather is unavailable.",
};

/// 주차・교통 안내
pub const PARKING_INFO: &[&str] = &[
    "가까운 주차장: P5 (KSPO DOME 맞은편), P6 (SK핸드볼경기장 뒤)",
    "주차 요금: 소형 10분당 600원 / 대형 10분당 1,200원 (공연 관람객 할인 없음)",
    "지하철: 5호선/9호선 올림픽공원역 3번, 4번 출구",
];

impl Language {
    pub fn text(&self) -> &'static UiText {
        match self {
            Language::Korean => &KOREAN,
            Language::English => &ENGLISH,
        }
    }
}

impl UiText {
    pub fn facility_found(&self, keyword: &str, count: usize) -> String {
        self.facility_found
            .replace("{keyword}", keyword)
            .replace("{count}", &count.to_string())
    }

    pub fn place_found(&self, count: usize) -> String {
        self.place_found.replace("{count}", &count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_found_message() {
        assert_eq!(
            Language::Korean.text().facility_found("화장실", 3),
            "'화장실' 관련 시설 3개 발견"
        );
        assert_eq!(
            Language::English.text().facility_found("화장실", 1),
            "Found 1 facilities for '화장실'"
        );
    }

    #[test]
    fn test_chat_help_lists_commands() {
        for language in [Language::Korean, Language::English] {
            let help = language.text().chat_help;
            for command in ["/f", "/r", "/go", "/map", "/msg", "/fans", "/lang", "/q"] {
                assert!(help.contains(command), "{:?}: {}", language, command);
            }
        }
    }

    #[test]
    fn test_language_serde() {
        let lang: Language = serde_json::from_str("\"English\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
