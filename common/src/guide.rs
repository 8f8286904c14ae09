//! 안내 에이전트
//!
//! 시작 시 한 번 읽은 시설・장소 데이터와 동의어 테이블을 들고,
//! 두 검색기를 묶어서 제공한다. 내부 상태를 바꾸지 않으므로
//! 여러 세션이 잠금 없이 공유할 수 있다.

use crate::facility::{self, FacilitySearch};
use crate::place;
use crate::synonym::SynonymTable;
use crate::types::{FacilityRecord, PlaceRecord};

#[derive(Debug, Clone, Default)]
pub struct VenueGuide {
    facilities: Vec<FacilityRecord>,
    places: Vec<PlaceRecord>,
    synonyms: SynonymTable,
}

impl VenueGuide {
    pub fn new(
        facilities: Vec<FacilityRecord>,
        places: Vec<PlaceRecord>,
        synonyms: SynonymTable,
    ) -> Self {
        Self {
            facilities,
            places,
            synonyms,
        }
    }

    pub fn search_facility(&self, query: &str) -> FacilitySearch<'_> {
        facility::search_facility(&self.facilities, &self.synonyms, query)
    }

    pub fn recommend(&self, query: &str) -> Vec<&PlaceRecord> {
        place::recommend(&self.places, query)
    }

    pub fn facilities(&self) -> &[FacilityRecord] {
        &self.facilities
    }

    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_guide_is_shareable() {
        assert_send_sync::<VenueGuide>();
    }

    #[test]
    fn test_idempotent() {
        let guide = VenueGuide::new(
            vec![FacilityRecord {
                category: "화장실".into(),
                ..Default::default()
            }],
            seed::places(),
            SynonymTable::default(),
        );

        assert_eq!(guide.search_facility("변소"), guide.search_facility("변소"));
        assert_eq!(guide.recommend("커피 맛집"), guide.recommend("커피 맛집"));
    }

    #[test]
    fn test_default_guide_is_empty() {
        let guide = VenueGuide::default();
        assert!(guide.search_facility("화장실").is_empty());
        assert!(guide.recommend("배고파").is_empty());
    }
}
