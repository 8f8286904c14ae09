use thiserror::Error;

#[derive(Error, Debug)]
pub enum OlyMateError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("{0} API 키가 설정되지 않았습니다. `olymate config --set-{1}-key YOUR_KEY` 로 설정하세요")]
    MissingApiKey(&'static str, &'static str),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("데이터 형식 오류: {0}")]
    DataFormat(String),

    #[error("CSV 읽기 오류: {0}")]
    Csv(#[from] csv::Error),

    #[error("엑셀 읽기 오류: {0}")]
    Excel(String),

    #[error("API 호출 오류: {0}")]
    ApiCall(String),

    #[error("API 응답 파싱 실패: {0}")]
    ApiParse(String),

    #[error("JSON 파싱 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("입력 오류: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] olymate_common::Error),
}

impl From<reqwest::Error> for OlyMateError {
    fn from(e: reqwest::Error) -> Self {
        OlyMateError::ApiCall(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OlyMateError>;
