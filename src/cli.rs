use crate::i18n::Language;
use crate::map::MapLayer;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "olymate")]
#[command(about = "올림픽공원 공연 관람객 도우미", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 화면 언어 (설정 파일보다 우선)
    #[arg(long, global = true)]
    pub lang: Option<Language>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 공원 편의시설 검색 (예: 화장실 어디, 물마시는곳)
    Facility {
        /// 질문
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// 맛집・카페 추천 (예: 조용한 카페, 배고파)
    Recommend {
        /// 질문
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// 공연 일정 (공식 일정 + API)
    Concerts {
        /// 공연 제목 (일부만 입력해도 됨)
        #[arg(short, long)]
        select: Option<String>,
    },

    /// 실시간 날씨
    Weather,

    /// 지도 마커 목록
    Map {
        /// 표시할 시설 (쉼표 구분)
        #[arg(short, long, value_delimiter = ',')]
        layer: Vec<MapLayer>,

        /// 공연 제목 (공연장 마커 위치)
        #[arg(short, long)]
        concert: Option<String>,

        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 대화형 안내 (검색・지도 강조・방명록)
    Chat {
        /// 공연 제목
        #[arg(short, long)]
        concert: Option<String>,
    },

    /// 동의어 목록
    Synonyms,

    /// 설정 표시/편집
    Config {
        /// 기상청 API 키 설정
        #[arg(long)]
        set_weather_key: Option<String>,

        /// 공연정보 API 키 설정
        #[arg(long)]
        set_concert_key: Option<String>,

        /// 설정 표시
        #[arg(long)]
        show: bool,
    },
}

/// 나눠 받은 질문 단어를 다시 한 문장으로
pub fn join_query(words: &[String]) -> String {
    words.join(" ")
}
