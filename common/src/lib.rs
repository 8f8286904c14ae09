//! OlyMate Common Library
//!
//! 시설 검색・장소 추천 로직과 공유 타입.
//! 화면 계층과 데이터 로더는 이 크레이트 밖에 있다.

pub mod types;
pub mod error;
pub mod synonym;
pub mod facility;
pub mod place;
pub mod guide;
pub mod seed;

pub use types::{Concert, FacilityRecord, LatLon, PlaceRecord};
pub use error::{Error, Result};
pub use synonym::SynonymTable;
pub use facility::{clean_query, search_facility, FacilitySearch};
pub use place::{recommend, Intent};
pub use guide::VenueGuide;
