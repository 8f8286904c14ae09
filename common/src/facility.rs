//! 편의시설 검색 모듈
//!
//! ## 처리 흐름
//! 1. 질의 정리 (구두점 제거・소문자화・공백 분리)
//! 2. 앞쪽 토큰부터 동의어 변환 (처음 변환된 토큰을 채택)
//! 3. 변환되지 않으면 구분에 포함된 첫 토큰을 채택
//! 4. 그래도 없으면 정리된 질의 전체를 키워드로 사용
//! 5. 구분 또는 상세위치에 키워드가 포함된 시설을 반환

use crate::synonym::SynonymTable;
use crate::types::FacilityRecord;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").expect("valid punctuation pattern");
}

/// 시설 검색 결과
#[derive(Debug, Clone, PartialEq)]
pub struct FacilitySearch<'a> {
    /// 일치한 시설 (원래 행 순서)
    pub matches: Vec<&'a FacilityRecord>,
    /// 검색에 사용한 키워드 ("'키워드' 관련 시설" 표시용)
    pub keyword: String,
}

impl FacilitySearch<'_> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// 구두점 제거 후 앞뒤 공백을 자르고 소문자화
pub fn clean_query(query: &str) -> String {
    NON_WORD.replace_all(query, "").trim().to_lowercase()
}

/// 동의어 테이블로 키워드를 찾는다
///
/// 같은 위치에서는 두 단어 구절을 한 단어보다 먼저 본다.
/// 여러 토큰이 변환되더라도 가장 앞의 토큰이 이긴다.
fn resolve_synonym<'t>(tokens: &[&str], synonyms: &'t SynonymTable) -> Option<&'t str> {
    for (i, token) in tokens.iter().enumerate() {
        if let Some(next) = tokens.get(i + 1) {
            let phrase = format!("{} {}", token, next);
            if let Some(keyword) = synonyms.normalize(&phrase) {
                return Some(keyword);
            }
        }
        if let Some(keyword) = synonyms.normalize(token) {
            return Some(keyword);
        }
    }
    None
}

/// 시설 구분에 그대로 포함된 첫 토큰
fn resolve_raw_token<'q>(tokens: &[&'q str], records: &[FacilityRecord]) -> Option<&'q str> {
    tokens
        .iter()
        .copied()
        .find(|token| records.iter().any(|r| r.category.contains(token)))
}

/// 자유 입력으로 편의시설을 검색한다
///
/// 일치하는 시설이 없으면 빈 결과를 돌려준다 (에러 아님).
/// 키워드는 항상 채워지며, 빈 질의라면 빈 문자열이 된다.
pub fn search_facility<'a>(
    records: &'a [FacilityRecord],
    synonyms: &SynonymTable,
    query: &str,
) -> FacilitySearch<'a> {
    let cleaned = clean_query(query);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let keyword = resolve_synonym(&tokens, synonyms)
        .map(str::to_string)
        .or_else(|| resolve_raw_token(&tokens, records).map(str::to_string))
        .unwrap_or_else(|| cleaned.clone());

    // 빈 키워드는 모든 행에 포함되므로 따로 처리
    let matches: Vec<&FacilityRecord> = if keyword.is_empty() {
        Vec::new()
    } else {
        records
            .iter()
            .filter(|r| r.category.contains(&keyword) || r.detail_location.contains(&keyword))
            .collect()
    };

    tracing::debug!(
        query,
        keyword = keyword.as_str(),
        matches = matches.len(),
        "시설 검색"
    );

    FacilitySearch { matches, keyword }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(category: &str, detail: &str) -> FacilityRecord {
        FacilityRecord {
            category: category.to_string(),
            detail_location: detail.to_string(),
            display_location: "올림픽공원".to_string(),
            latitude: 37.52,
            longitude: 127.12,
        }
    }

    fn sample() -> Vec<FacilityRecord> {
        vec![
            facility("화장실", "평화의문 옆"),
            facility("음수대", "2번 게이트"),
            facility("흡연구역", ""),
            facility("편의점", "KSPO DOME 앞"),
            facility("자판기", "핸드볼경기장 1층"),
            facility("화장실", "핸드볼경기장 1층"),
        ]
    }

    #[test]
    fn test_clean_query() {
        assert_eq!(clean_query("  화장실 어디?! "), "화장실 어디");
        assert_eq!(clean_query("Where's the TOILET"), "wheres the toilet");
        assert_eq!(clean_query("!!!"), "");
    }

    #[test]
    fn test_synonym_resolution() {
        let records = sample();
        let result = search_facility(&records, &SynonymTable::default(), "물마시는곳 어디");
        assert_eq!(result.keyword, "음수대");
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].detail_location, "2번 게이트");
    }

    #[test]
    fn test_first_synonym_token_wins() {
        let records = sample();
        let result = search_facility(&records, &SynonymTable::default(), "화장실 음수대");
        assert_eq!(result.keyword, "화장실");

        let reversed = search_facility(&records, &SynonymTable::default(), "음수대 화장실");
        assert_eq!(reversed.keyword, "음수대");
    }

    #[test]
    fn test_synonym_beats_earlier_raw_token() {
        // 동의어 검사는 원문 토큰 검사보다 먼저 모든 토큰을 훑는다
        let records = sample();
        let result = search_facility(&records, &SynonymTable::default(), "편의점 담배");
        assert_eq!(result.keyword, "흡연구역");
    }

    #[test]
    fn test_raw_token_fallback() {
        let records = sample();
        let result = search_facility(&records, &SynonymTable::default(), "근처 편의점 있나요");
        assert_eq!(result.keyword, "편의점");
        assert_eq!(result.matches.len(), 1);
    }

    #[test]
    fn test_whole_query_fallback_matches_detail_location() {
        let records = sample();
        let result = search_facility(&records, &SynonymTable::default(), "핸드볼경기장 1층");
        // "핸드볼경기장" 은 구분에 없으므로 정리된 질의 전체가 키워드
        assert_eq!(result.keyword, "핸드볼경기장 1층");
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].category, "자판기");
        assert_eq!(result.matches[1].category, "화장실");
    }

    #[test]
    fn test_english_query() {
        let records = sample();
        let result = search_facility(&records, &SynonymTable::default(), "Where is the restroom?");
        assert_eq!(result.keyword, "화장실");
        assert_eq!(result.matches.len(), 2);
    }

    #[test]
    fn test_phrase_entry() {
        let records = sample();
        let result = search_facility(&records, &SynonymTable::default(), "smoking area please");
        assert_eq!(result.keyword, "흡연구역");

        // 단독 "area" 는 흡연구역으로 가지 않는다
        let bare = search_facility(&records, &SynonymTable::default(), "parking area");
        assert_eq!(bare.keyword, "parking area");
        assert!(bare.is_empty());
    }

    #[test]
    fn test_custom_punctuated_key_matches_query() {
        let records = vec![facility("와이파이존", "평화의광장")];
        let synonyms = SynonymTable::from_json(r#"{"wi-fi": "와이파이"}"#).unwrap();

        let result = search_facility(&records, &synonyms, "Wi-Fi 어디?");
        assert_eq!(result.keyword, "와이파이");
        assert_eq!(result.matches.len(), 1);
    }

    #[test]
    fn test_empty_query() {
        let records = sample();
        for query in ["", "   ", "?!"] {
            let result = search_facility(&records, &SynonymTable::default(), query);
            assert_eq!(result.keyword, "");
            assert!(result.is_empty());
        }
    }

    #[test]
    fn test_empty_dataset() {
        let result = search_facility(&[], &SynonymTable::default(), "화장실");
        assert_eq!(result.keyword, "화장실");
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_match() {
        let records = sample();
        let result = search_facility(&records, &SynonymTable::default(), "주차장");
        assert_eq!(result.keyword, "주차장");
        assert!(result.is_empty());
    }
}
