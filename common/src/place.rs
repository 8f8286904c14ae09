//! 맛집・카페 추천 모듈
//!
//! 점수 없는 필터. 토큰 일치와 의도(배고픔/목마름) 일치를 합집합으로 묶고,
//! 결과는 원래 순서를 유지한다.

use crate::types::PlaceRecord;

/// 질의 전체에서 감지하는 의도
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// 식사
    Hungry,
    /// 음료・카페
    Thirsty,
}

impl Intent {
    pub const ALL: [Intent; 2] = [Intent::Hungry, Intent::Thirsty];

    /// 질의에 포함되면 의도가 성립하는 어휘
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            Intent::Hungry => &[
                "배고파", "밥", "맛집", "hungry", "rice", "meal", "restaurant", "food", "lunch",
                "dinner",
            ],
            Intent::Thirsty => &[
                "목말라", "커피", "카페", "cafe", "coffee", "tea", "thirsty", "quiet",
            ],
        }
    }

    /// 의도가 성립할 때 통째로 포함되는 카테고리
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Intent::Hungry => &["음식점", "한식", "중식", "국수", "BBQ", "한정식"],
            Intent::Thirsty => &["카페", "제과점"],
        }
    }

    /// 소문자화된 질의 전체에서 의도를 찾는다
    pub fn detect(lowered_query: &str) -> Vec<Intent> {
        Self::ALL
            .into_iter()
            .filter(|intent| {
                intent
                    .vocabulary()
                    .iter()
                    .any(|word| lowered_query.contains(word))
            })
            .collect()
    }

    pub fn covers(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }
}

/// 이름・카테고리・설명 중 하나에 토큰이 포함되는지 (대소문자 무시)
fn mentions(place: &PlaceRecord, lowered_token: &str) -> bool {
    [&place.name, &place.category, &place.description]
        .iter()
        .any(|field| field.to_lowercase().contains(lowered_token))
}

/// 자유 입력으로 장소를 추천한다
///
/// 아무것도 맞지 않으면 빈 목록을 돌려준다.
pub fn recommend<'a>(places: &'a [PlaceRecord], query: &str) -> Vec<&'a PlaceRecord> {
    let lowered = query.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let intents = Intent::detect(&lowered);

    let matches: Vec<&PlaceRecord> = places
        .iter()
        .filter(|place| {
            tokens.iter().any(|token| mentions(place, token))
                || intents.iter().any(|intent| intent.covers(&place.category))
        })
        .collect();

    tracing::debug!(query, ?intents, matches = matches.len(), "장소 추천");

    matches
}
