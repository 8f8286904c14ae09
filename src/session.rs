//! 세션 상태
//!
//! 지도 중심・확대, 강조 마커, 언어, 방명록을 한 구조체로 들고 다닌다.
//! 화면 계층만 이 상태를 바꾸며, 검색 로직은 이 상태를 모른다.

use crate::i18n::Language;
use crate::map::{Marker, MarkerColor, MarkerIcon};
use olymate_common::seed::{self, INITIAL_FAN_MESSAGES, PARK_CENTER};
use olymate_common::{Concert, FacilityRecord, LatLon, PlaceRecord};

pub const DEFAULT_ZOOM: u8 = 16;
pub const FACILITY_ZOOM: u8 = 18;
pub const PLACE_ZOOM: u8 = 17;

#[derive(Debug, Clone)]
pub struct AppState {
    pub map_center: LatLon,
    pub map_zoom: u8,
    /// 검색 결과에서 고른 위치
    pub highlight: Option<Marker>,
    pub language: Language,
    /// 방명록 (최신 글이 앞)
    pub fan_messages: Vec<String>,
    /// 마지막으로 고른 공연 제목
    pub last_concert: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            map_center: PARK_CENTER,
            map_zoom: DEFAULT_ZOOM,
            highlight: None,
            language: Language::Korean,
            fan_messages: INITIAL_FAN_MESSAGES.iter().map(|m| m.to_string()).collect(),
            last_concert: None,
        }
    }
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// 공연 선택
    ///
    /// 다른 공연으로 바뀐 경우에만 지도를 공연장으로 옮기고 강조를 지운다.
    /// 바뀌었으면 true.
    pub fn select_concert(&mut self, concert: &Concert) -> bool {
        if self.last_concert.as_deref() == Some(concert.title.as_str()) {
            return false;
        }

        self.map_center = seed::venue_center(&concert.place);
        self.last_concert = Some(concert.title.clone());
        self.highlight = None;
        true
    }

    /// 시설 위치 보기
    pub fn focus_facility(&mut self, facility: &FacilityRecord) {
        self.map_center = facility.position();
        self.map_zoom = FACILITY_ZOOM;
        self.highlight = Some(Marker {
            position: facility.position(),
            popup: facility.label(),
            color: MarkerColor::Blue,
            icon: MarkerIcon::Info,
        });
    }

    /// 맛집 위치 보기
    pub fn focus_place(&mut self, place: &PlaceRecord) {
        self.map_center = place.position();
        self.map_zoom = PLACE_ZOOM;
        self.highlight = Some(Marker {
            position: place.position(),
            popup: place.name.clone(),
            color: MarkerColor::Green,
            icon: MarkerIcon::Info,
        });
    }

    /// 응원 메시지 등록 (빈 메시지는 무시). 등록되면 true.
    pub fn post_message(&mut self, message: &str) -> bool {
        let message = message.trim();
        if message.is_empty() {
            return false;
        }
        self.fan_messages.insert(0, message.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concert(title: &str, place: &str) -> Concert {
        Concert {
            title: title.into(),
            date: "2025-12-05 ~ 2025-12-07".into(),
            place: place.into(),
            link: None,
        }
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.map_center, PARK_CENTER);
        assert_eq!(state.map_zoom, 16);
        assert_eq!(state.fan_messages.len(), 2);
        assert!(state.highlight.is_none());
    }

    #[test]
    fn test_select_concert_moves_center_once() {
        let mut state = AppState::default();
        let dome = concert("god", "KSPO DOME");

        assert!(state.select_concert(&dome));
        assert_eq!(state.map_center, (37.5192018, 127.126537));

        // 같은 공연이면 강조 마커를 유지
        state.focus_place(&PlaceRecord {
            name: "온온커피".into(),
            latitude: 37.522,
            longitude: 127.133,
            ..Default::default()
        });
        assert!(!state.select_concert(&dome));
        assert!(state.highlight.is_some());
        assert_eq!(state.map_center, (37.522, 127.133));

        // 다른 공연이면 초기화
        assert!(state.select_concert(&concert("정승환", "올림픽핸드볼경기장")));
        assert!(state.highlight.is_none());
        assert_eq!(state.map_center, (37.5177339, 127.1257116));
    }

    #[test]
    fn test_focus_facility() {
        let mut state = AppState::default();
        state.focus_facility(&FacilityRecord {
            category: "음수대".into(),
            detail_location: "2번 게이트".into(),
            latitude: 37.519,
            longitude: 127.123,
            ..Default::default()
        });

        assert_eq!(state.map_zoom, FACILITY_ZOOM);
        let marker = state.highlight.unwrap();
        assert_eq!(marker.popup, "음수대 (2번 게이트)");
        assert_eq!(marker.color, MarkerColor::Blue);
    }

    #[test]
    fn test_post_message_newest_first() {
        let mut state = AppState::default();
        assert!(state.post_message("DAY6 최고!"));
        assert!(!state.post_message("   "));
        assert_eq!(state.fan_messages[0], "DAY6 최고!");
        assert_eq!(state.fan_messages.len(), 3);
    }
}
