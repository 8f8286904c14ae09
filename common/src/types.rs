//! 레코드 타입 정의
//!
//! 로더가 한 번 읽어 들인 뒤에는 변경되지 않는다.
//! - FacilityRecord: 공원 편의시설 (CSV/XLSX)
//! - PlaceRecord: 주변 맛집・카페
//! - Concert: 공연 일정

use serde::{Deserialize, Serialize};

/// (위도, 경도)
pub type LatLon = (f64, f64);

/// 공원 편의시설
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// 구분 (예: 화장실, 음수대)
    #[serde(alias = "구분")]
    pub category: String,

    /// 상세위치
    #[serde(default, alias = "상세위치")]
    pub detail_location: String,

    /// 위치 (표시용)
    #[serde(default, alias = "위치")]
    pub display_location: String,

    #[serde(alias = "위도")]
    pub latitude: f64,

    #[serde(alias = "경도")]
    pub longitude: f64,
}

impl FacilityRecord {
    /// 목록・팝업에 쓰는 이름
    pub fn label(&self) -> String {
        if self.detail_location.is_empty() {
            self.category.clone()
        } else {
            format!("{} ({})", self.category, self.detail_location)
        }
    }

    pub fn position(&self) -> LatLon {
        (self.latitude, self.longitude)
    }
}

/// 맛집・카페
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,

    /// 음식점, 한식, 중식, 국수, BBQ, 한정식, 카페, 제과점 ...
    pub category: String,

    #[serde(default, alias = "desc")]
    pub description: String,

    #[serde(alias = "lat")]
    pub latitude: f64,

    #[serde(alias = "lon")]
    pub longitude: f64,
}

impl PlaceRecord {
    pub fn position(&self) -> LatLon {
        (self.latitude, self.longitude)
    }
}

/// 공연 일정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concert {
    pub title: String,

    /// "2025-12-05 ~ 2025-12-07" 형식
    pub date: String,

    /// 공연장
    pub place: String,

    /// 예매처 링크 (API에서 가져온 공연은 없음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Concert {
    /// 시작일 문자열 ("~" 앞부분)
    pub fn start_date(&self) -> &str {
        self.date.split('~').next().unwrap_or("").trim()
    }
}
