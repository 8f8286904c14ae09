//! 대화형 안내 모드
//!
//! 한 줄씩 입력을 받아 검색하고, 고른 결과를 지도 강조로 남긴다.
//! 상태(AppState)는 세션 동안만 유지된다.
//!
//! 명령:
//! - `/f 질문` 시설 검색, `/r 질문` 맛집 추천
//! - `/go 번호` 직전 결과를 지도에 강조
//! - `/map [필터,...]` 마커 목록
//! - `/msg 내용` 응원 메시지, `/fans` 방명록 보기
//! - `/lang ko|en`, `/q` 종료
//! - 그 외 입력은 시설 검색 후 결과가 없으면 맛집 추천

use crate::error::{OlyMateError, Result};
use crate::i18n::Language;
use crate::loader::Dataset;
use crate::map::{compose_markers, MapLayer};
use crate::session::AppState;
use crate::view;
use clap::ValueEnum;
use dialoguer::Input;
use olymate_common::{Concert, FacilityRecord, PlaceRecord};

/// 직전 검색 결과 (`/go` 대상)
#[derive(Debug, Clone, Default)]
enum LastResults {
    #[default]
    Empty,
    Facilities(Vec<FacilityRecord>),
    Places(Vec<PlaceRecord>),
}

/// 한 줄 처리 결과
#[derive(Debug, Clone, Default)]
pub struct ChatReply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl ChatReply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

pub struct ChatSession<'a> {
    dataset: &'a Dataset,
    concert: Option<&'a Concert>,
    pub state: AppState,
    last: LastResults,
}

impl<'a> ChatSession<'a> {
    pub fn new(dataset: &'a Dataset, concert: Option<&'a Concert>, language: Language) -> Self {
        let mut state = AppState::new(language);
        if let Some(concert) = concert {
            state.select_concert(concert);
        }

        Self {
            dataset,
            concert,
            state,
            last: LastResults::Empty,
        }
    }

    pub fn handle(&mut self, line: &str) -> ChatReply {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => ChatReply::default(),
            "/q" | "/quit" => ChatReply {
                lines: vec!["안녕히 가세요! 👋".to_string()],
                quit: true,
            },
            "/f" => ChatReply::lines(self.search_facility(rest)),
            "/r" => ChatReply::lines(self.recommend(rest)),
            "/go" => ChatReply::lines(self.focus(rest)),
            "/map" => ChatReply::lines(self.markers(rest)),
            "/msg" => {
                if self.state.post_message(rest) {
                    ChatReply::lines(vec!["✔ 메시지가 등록되었습니다!".to_string()])
                } else {
                    ChatReply::lines(vec!["⚠ 메시지를 입력하세요".to_string()])
                }
            }
            "/fans" => ChatReply::lines(
                self.state
                    .fan_messages
                    .iter()
                    .map(|m| format!("💬 {}", m))
                    .collect(),
            ),
            "/lang" => ChatReply::lines(self.switch_language(rest)),
            _ => {
                let lines = self.search_facility(line);
                if matches!(&self.last, LastResults::Facilities(found) if !found.is_empty()) {
                    ChatReply::lines(lines)
                } else {
                    ChatReply::lines(self.recommend(line))
                }
            }
        }
    }

    fn search_facility(&mut self, query: &str) -> Vec<String> {
        let search = self.dataset.guide.search_facility(query);
        let lines = view::facility_lines(self.state.language.text(), &search);
        self.last = LastResults::Facilities(search.matches.into_iter().cloned().collect());
        lines
    }

    fn recommend(&mut self, query: &str) -> Vec<String> {
        let places = self.dataset.guide.recommend(query);
        let lines = view::place_lines(self.state.language.text(), &places);
        self.last = LastResults::Places(places.into_iter().cloned().collect());
        lines
    }

    fn focus(&mut self, index: &str) -> Vec<String> {
        let index = match index.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => return vec!["⚠ 번호를 입력하세요 (예: /go 1)".to_string()],
        };

        match &self.last {
            LastResults::Facilities(found) if index < found.len() => {
                self.state.focus_facility(&found[index]);
            }
            LastResults::Places(found) if index < found.len() => {
                self.state.focus_place(&found[index]);
            }
            _ => return vec!["⚠ 해당 번호의 결과가 없습니다".to_string()],
        }

        let (lat, lon) = self.state.map_center;
        vec![format!(
            "✅ 지도 중심 이동: ({:.6}, {:.6}) 확대 {}",
            lat, lon, self.state.map_zoom
        )]
    }

    fn markers(&self, layers: &str) -> Vec<String> {
        let mut parsed = Vec::new();
        for name in layers.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match MapLayer::from_str(name, true) {
                Ok(layer) => parsed.push(layer),
                Err(_) => return vec![format!("⚠ 알 수 없는 필터: {}", name)],
            }
        }

        compose_markers(&self.state, &self.dataset.guide, self.concert, &parsed)
            .iter()
            .map(|m| {
                format!(
                    "  [{:?}] {} ({:.6}, {:.6})",
                    m.color, m.popup, m.position.0, m.position.1
                )
            })
            .collect()
    }

    fn switch_language(&mut self, code: &str) -> Vec<String> {
        self.state.language = match code {
            "ko" | "korean" => Language::Korean,
            "en" | "english" => Language::English,
            _ => return vec!["⚠ ko 또는 en 을 입력하세요".to_string()],
        };
        vec![format!("✔ {}", self.state.language.text().title)]
    }
}

/// 대화형 루프
pub fn run_chat(dataset: &Dataset, concert: Option<&Concert>, language: Language) -> Result<()> {
    let mut session = ChatSession::new(dataset, concert, language);
    let text = language.text();

    println!("{}", text.title);
    if let Some(concert) = concert {
        println!("🎵 '{}' {}", concert.title, text.welcome);
    }
    println!("{}\n", text.chat_help);

    loop {
        let input: String = Input::new()
            .with_prompt(session.state.language.text().chat_prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| OlyMateError::Prompt(e.to_string()))?;

        let reply = session.handle(&input);
        for line in &reply.lines {
            println!("{}", line);
        }
        if reply.quit {
            break;
        }
    }

    Ok(())
}
