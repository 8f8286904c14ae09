//! 동의어 정규화 모듈
//!
//! 질의 토큰(한국어・영어)을 시설 데이터의 구분 키워드로 바꾼다.
//! 시설 데이터는 한국어뿐이므로 값은 번역이 아니라 구분 문자열의 일부다.
//!
//! ## 변경 이력
//! - 2025-12-02: 영어 항목 추가, 단독 "area" 항목 제거 ("smoking area" 구절로 대체)

use crate::error::{Error, Result};
use crate::facility::clean_query;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 검색 시 한 위치에서 보는 최대 단어 수
pub const MAX_PHRASE_WORDS: usize = 2;

/// 기본 동의어 (토큰 → 구분 키워드)
const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    // 음수대
    ("물", "음수대"),
    ("물마시는곳", "음수대"),
    ("식수", "음수대"),
    ("음수대", "음수대"),
    ("water", "음수대"),
    ("fountain", "음수대"),
    ("drinking water", "음수대"),
    // 화장실
    ("화장실", "화장실"),
    ("변소", "화장실"),
    ("toilet", "화장실"),
    ("restroom", "화장실"),
    ("bathroom", "화장실"),
    ("wc", "화장실"),
    // 흡연구역
    ("담배", "흡연구역"),
    ("흡연", "흡연구역"),
    ("흡연장", "흡연구역"),
    ("smoking", "흡연구역"),
    ("cigarette", "흡연구역"),
    ("smoking area", "흡연구역"),
    // 쓰레기통
    ("쓰레기", "쓰레기통"),
    ("휴지통", "쓰레기통"),
    ("trash", "쓰레기통"),
    ("garbage", "쓰레기통"),
    // 자판기
    ("음료수", "자판기"),
    ("과자", "자판기"),
    ("vending", "자판기"),
    ("vending machine", "자판기"),
    ("snack", "자판기"),
    // 편의점
    ("convenience store", "편의점"),
];

/// 동의어 테이블
///
/// 키는 소문자 토큰 또는 공백 하나로 이어진 두 단어 구절.
/// 로드 후에는 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: HashMap<String, String>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(token, keyword)| (token.to_string(), keyword.to_string()))
                .collect(),
        }
    }
}

impl SynonymTable {
    /// 빈 테이블
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// JSON 객체 (`{"토큰": "키워드"}`) 에서 읽기
    ///
    /// 키는 질의와 같은 방식으로 정리한다 (구두점 제거・소문자화).
    /// 검색은 두 단어 구절까지만 보므로 세 단어 이상인 키는 거부한다.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut entries = HashMap::with_capacity(raw.len());

        for (token, keyword) in raw {
            let words: Vec<String> = clean_query(&token)
                .split_whitespace()
                .map(str::to_string)
                .collect();
            if words.is_empty() || keyword.trim().is_empty() {
                return Err(Error::Config(format!(
                    "빈 동의어 항목이 있습니다: '{}' → '{}'",
                    token, keyword
                )));
            }
            if words.len() > MAX_PHRASE_WORDS {
                return Err(Error::Config(format!(
                    "동의어 키는 {}단어까지입니다: '{}'",
                    MAX_PHRASE_WORDS, token
                )));
            }
            entries.insert(words.join(" "), keyword.trim().to_string());
        }

        Ok(Self { entries })
    }

    /// JSON 파일에서 읽기
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 다른 테이블을 합친다 (나중에 합친 쪽이 우선)
    pub fn merge(&mut self, other: &SynonymTable) {
        self.entries.extend(other.entries.clone());
    }

    /// 토큰을 구분 키워드로 변환 (완전 일치만)
    ///
    /// 토큰은 호출 측에서 소문자화・구두점 제거를 마친 상태여야 한다.
    pub fn normalize(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(|keyword| keyword.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 키 순으로 정렬된 항목 목록
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(token, keyword)| (token.as_str(), keyword.as_str()))
            .collect();
        entries.sort();
        entries
    }
}
