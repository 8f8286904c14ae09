use crate::error::{OlyMateError, Result};
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const WEATHER_KEY_ENV: &str = "WEATHER_API_KEY";
const CONCERT_KEY_ENV: &str = "CONCERT_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 기상청 단기예보 서비스 키
    pub weather_api_key: Option<String>,
    /// 문화정보원 공연 메타데이터 서비스 키
    pub concert_api_key: Option<String>,
    /// 편의시설 데이터 (CSV/XLSX)
    pub facilities_path: PathBuf,
    /// 맛집 데이터 (JSON, 없으면 기본 목록)
    pub places_path: Option<PathBuf>,
    /// 추가 동의어 (JSON)
    pub synonyms_path: Option<PathBuf>,
    pub weather_timeout_seconds: u64,
    pub concert_timeout_seconds: u64,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather_api_key: None,
            concert_api_key: None,
            facilities_path: PathBuf::from("facilities.csv"),
            places_path: None,
            synonyms_path: None,
            weather_timeout_seconds: 3,
            concert_timeout_seconds: 2,
            language: Language::Korean,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "설정 파일 로드");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OlyMateError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("olymate").join("config.json"))
    }

    pub fn weather_api_key(&self) -> Result<String> {
        // 환경 변수 우선
        key_from(WEATHER_KEY_ENV, &self.weather_api_key)
            .ok_or(OlyMateError::MissingApiKey("기상청", "weather"))
    }

    pub fn concert_api_key(&self) -> Result<String> {
        key_from(CONCERT_KEY_ENV, &self.concert_api_key)
            .ok_or(OlyMateError::MissingApiKey("공연정보", "concert"))
    }

    pub fn set_weather_api_key(&mut self, key: String) -> Result<()> {
        self.weather_api_key = Some(key);
        self.save()
    }

    pub fn set_concert_api_key(&mut self, key: String) -> Result<()> {
        self.concert_api_key = Some(key);
        self.save()
    }
}

fn key_from(env_name: &str, stored: &Option<String>) -> Option<String> {
    let usable = |key: &String| !key.trim().is_empty();
    std::env::var(env_name)
        .ok()
        .filter(usable)
        .or_else(|| stored.clone().filter(usable))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.facilities_path, PathBuf::from("facilities.csv"));
        assert_eq!(config.weather_timeout_seconds, 3);
        assert_eq!(config.concert_timeout_seconds, 2);
        assert_eq!(config.language, Language::Korean);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"facilities_path": "data/fac.xlsx"}"#).unwrap();
        assert_eq!(config.facilities_path, PathBuf::from("data/fac.xlsx"));
        assert_eq!(config.weather_timeout_seconds, 3);
        assert!(config.weather_api_key.is_none());
    }

    #[test]
    fn test_key_from_ignores_blank() {
        let stored = Some("   ".to_string());
        assert_eq!(key_from("OLYMATE_TEST_UNSET_ENV", &stored), None);

        let stored = Some("abc".to_string());
        assert_eq!(key_from("OLYMATE_TEST_UNSET_ENV", &stored), Some("abc".to_string()));
    }
}
