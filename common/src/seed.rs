//! 기본 데이터
//!
//! 맛집 목록과 12월 공연 일정은 코드 안의 고정 데이터로 두고,
//! 로더가 시설 데이터와 같은 방식으로 읽어 간다.

use crate::types::{Concert, LatLon, PlaceRecord};

/// 공연장 좌표 (순서 유지: 뒤에 오는 항목이 우선)
pub const VENUE_LOCATIONS: &[(&str, LatLon)] = &[
    ("KSPO DOME", (37.5192018, 127.126537)),
    ("올림픽체조경기장", (37.5192018, 127.126537)),
    ("핸드볼경기장", (37.5177339, 127.1257116)),
    ("올림픽홀", (37.5150613, 127.1271355)),
    ("우리금융아트홀", (37.5174938, 127.1250809)),
    ("올림픽공원", (37.5185463, 127.1270634)),
];

/// 지도 기본 중심 (올림픽공원)
pub const PARK_CENTER: LatLon = (37.5185463, 127.1270634);

/// 기상청 격자 좌표 (송파구 방이동)
pub const FORECAST_GRID: (u32, u32) = (62, 126);

/// 방명록 첫 메시지
pub const INITIAL_FAN_MESSAGES: &[&str] = &["god 오빠들 화이팅!", "성시경 목소리 녹는다.."];

const PLACES: &[(&str, &str, &str, f64, f64)] = &[
    ("빈체로 올림픽공원점", "음식점", "가성비 좋은 파스타", 37.515, 127.122),
    ("제일제면소 올림픽공원점", "음식점", "넓고 쾌적한 국수집", 37.517, 127.129),
    ("몽중헌 방이점", "중식", "고급스러운 딤섬 맛집", 37.513, 127.119),
    ("청와옥 본점", "한식", "줄서서 먹는 순대국", 37.514, 127.120),
    ("할머니포장마차멸치국수", "국수", "꼬막과 국수가 맛있는 노포", 37.512, 127.118),
    ("안동국시 소담", "한식", "건강한 한식", 37.513, 127.125),
    ("송도불고기", "BBQ", "된장찌개 서비스 고기집", 37.515, 127.128),
    ("산들해 송파점", "한정식", "푸짐한 이천쌀밥 한상", 37.514, 127.119),
    ("봉피양 방이점", "BBQ", "평양냉면과 돼지갈비", 37.511, 127.123),
    ("프로퍼커피바", "카페", "분위기 좋은 베이커리 카페", 37.510, 127.124),
    ("투썸플레이스 올림픽공원역점", "카페", "넓은 좌석", 37.516, 127.130),
    ("스타벅스 올림픽공원남문점", "카페", "공원 뷰가 좋은 곳", 37.513, 127.121),
    ("파리크라상 올림픽공원키친점", "제과점", "브런치 하기 좋은 곳", 37.517, 127.129),
    ("온온커피", "카페", "수다 떨기 좋은 아늑한 곳", 37.522, 127.133),
    ("애크로매틱 커피", "카페", "콘센트 많아 작업하기 좋음", 37.524, 127.131),
    ("담금 올림픽점", "카페", "데이트하기 좋은 브런치 카페", 37.523, 127.132),
];

const CONCERTS: &[(&str, &str, &str, &str)] = &[
    ("2025 god CONCERT <ICONIC BOX>", "2025-12-05 ~ 2025-12-07", "KSPO DOME", "https://www.ticketlink.co.kr/product/58697"),
    ("2025 정승환의 안녕, 겨울", "2025-12-05 ~ 2025-12-07", "올림픽핸드볼경기장", "https://tickets.interpark.com/goods/25013763"),
    ("가족뮤지컬 〈호두까기인형〉", "2025-12-06 ~ 2026-01-25", "우리금융아트홀", "https://tickets.interpark.com/goods/25010991"),
    ("2025 손태진 전국투어 콘서트", "2025-12-06 ~ 2025-12-07", "올림픽홀", "https://tickets.interpark.com/goods/25015666"),
    ("2025 이문세 ‘The Best’", "2025-12-13 ~ 2025-12-14", "KSPO DOME", "https://tickets.interpark.com/goods/25012678"),
    ("2025 N.Flying LIVE 'Let’s Roll'", "2025-12-19 ~ 2025-12-21", "올림픽핸드볼경기장", "https://ticket.melon.com/performance/index.htm?prodId=212207"),
    ("2025 DAY6 Special Concert", "2025-12-19 ~ 2025-12-21", "KSPO DOME", "https://ticket.yes24.com/Special/55971"),
    ("2025 규현(KYUHYUN) Concert", "2025-12-19 ~ 2025-12-21", "올림픽홀", "https://tickets.interpark.com/goods/25014743"),
    ("2025 성시경 연말 콘서트", "2025-12-25 ~ 2025-12-28", "KSPO DOME", "https://tickets.interpark.com/goods/25016342"),
    ("2025 에픽하이 콘서트", "2025-12-25 ~ 2025-12-28", "올림픽핸드볼경기장", "https://tickets.interpark.com/goods/25014649"),
];

/// 주변 맛집・카페
pub fn places() -> Vec<PlaceRecord> {
    PLACES
        .iter()
        .map(|&(name, category, description, latitude, longitude)| PlaceRecord {
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            latitude,
            longitude,
        })
        .collect()
}

/// 공식 공연 일정 (API 결과보다 우선)
pub fn concerts() -> Vec<Concert> {
    CONCERTS
        .iter()
        .map(|&(title, date, place, link)| Concert {
            title: title.to_string(),
            date: date.to_string(),
            place: place.to_string(),
            link: Some(link.to_string()),
        })
        .collect()
}

/// 공연장 이름에 맞는 좌표 (없으면 공원 중심)
pub fn venue_center(place: &str) -> LatLon {
    VENUE_LOCATIONS
        .iter()
        .filter(|(key, _)| place.contains(key))
        .last()
        .map(|&(_, location)| location)
        .unwrap_or(PARK_CENTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(places().len(), 16);
        assert_eq!(concerts().len(), 10);
        assert!(concerts().iter().all(|c| c.link.is_some()));
    }

    #[test]
    fn test_venue_center() {
        assert_eq!(venue_center("KSPO DOME"), (37.5192018, 127.126537));
        assert_eq!(venue_center("올림픽핸드볼경기장"), (37.5177339, 127.1257116));
        assert_eq!(venue_center("어딘가"), PARK_CENTER);
    }

    #[test]
    fn test_later_venue_key_wins() {
        // "올림픽공원" 이 마지막이므로 함께 포함되면 공원 중심
        assert_eq!(venue_center("올림픽공원 올림픽홀"), PARK_CENTER);
    }
}
