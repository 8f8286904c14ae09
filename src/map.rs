//! 스마트 맵 마커 구성
//!
//! 지도 그리기는 화면 계층이 맡고, 여기서는 어떤 마커를 어디에 둘지만 정한다.
//! 1. 공연장 마커 (항상)
//! 2. 강조 마커 (검색 결과에서 고른 위치)
//! 3. 체크한 필터의 시설・맛집 마커

use crate::session::AppState;
use clap::ValueEnum;
use olymate_common::{seed, Concert, LatLon, VenueGuide};
use serde::Serialize;

const NAVER_MAP_SEARCH: &str = "https://map.naver.com/v5/search/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Blue,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerIcon {
    Star,
    Info,
    Cutlery,
    Cloud,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLon,
    pub popup: String,
    pub color: MarkerColor,
    pub icon: MarkerIcon,
}

/// 지도 필터 체크박스
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MapLayer {
    Toilet,
    Convenience,
    Food,
    Smoking,
    Vending,
    Water,
}

impl MapLayer {
    /// 시설 구분에서 찾을 문자열 (Food는 맛집 목록 전체)
    pub fn facility_keyword(&self) -> Option<&'static str> {
        match self {
            MapLayer::Toilet => Some("화장실"),
            MapLayer::Convenience => Some("편의점"),
            MapLayer::Food => None,
            MapLayer::Smoking => Some("흡연"),
            MapLayer::Vending => Some("자판기"),
            MapLayer::Water => Some("음수대"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MapLayer::Toilet => "화장실",
            MapLayer::Convenience => "편의점",
            MapLayer::Food => "맛집",
            MapLayer::Smoking => "흡연장",
            MapLayer::Vending => "자판기",
            MapLayer::Water => "음수대",
        }
    }
}

/// 네이버 지도 검색 링크
pub fn naver_map_link(name: &str) -> String {
    format!("{}{}", NAVER_MAP_SEARCH, name)
}

/// 현재 상태와 필터로 마커 목록을 만든다
pub fn compose_markers(
    state: &AppState,
    guide: &VenueGuide,
    concert: Option<&Concert>,
    layers: &[MapLayer],
) -> Vec<Marker> {
    let mut markers = Vec::new();

    let (venue_position, venue_name) = match concert {
        Some(concert) => (seed::venue_center(&concert.place), concert.place.as_str()),
        None => (seed::PARK_CENTER, "올림픽공원"),
    };
    markers.push(Marker {
        position: venue_position,
        popup: format!("{} 공연장", venue_name),
        color: MarkerColor::Red,
        icon: MarkerIcon::Star,
    });

    if let Some(highlight) = &state.highlight {
        markers.push(highlight.clone());
    }

    for layer in layers {
        match layer.facility_keyword() {
            Some(keyword) => {
                markers.extend(
                    guide
                        .facilities()
                        .iter()
                        .filter(|f| f.category.contains(keyword))
                        .map(|f| Marker {
                            position: f.position(),
                            popup: f.label(),
                            color: MarkerColor::Blue,
                            icon: MarkerIcon::Cloud,
                        }),
                );
            }
            None => {
                markers.extend(guide.places().iter().map(|p| Marker {
                    position: p.position(),
                    popup: format!("{} - {}", p.name, p.description),
                    color: MarkerColor::Green,
                    icon: MarkerIcon::Cutlery,
                }));
            }
        }
    }

    tracing::debug!(markers = markers.len(), ?layers, "지도 마커 구성");
    markers
}
