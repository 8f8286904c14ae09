//! OlyMate
//!
//! 올림픽공원 공연 관람객을 위한 시설 안내・맛집 추천・공연 일정 도구.
//! 검색 로직은 `olymate_common` 에 있고, 이 크레이트는 데이터 로드,
//! 외부 API, 세션 상태, 터미널 화면을 맡는다.

pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod loader;
pub mod map;
pub mod schedule;
pub mod session;
pub mod view;
pub mod weather;
