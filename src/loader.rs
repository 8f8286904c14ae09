//! 데이터 로더
//!
//! 시작 시 한 번만 읽는다. 읽은 데이터는 이후 변경하지 않는다.
//! - 편의시설: CSV 또는 XLSX (헤더: 구분, 상세위치, 위치, 위도, 경도)
//! - 맛집: JSON 파일 (없으면 기본 목록)
//! - 공연 일정: 기본 일정
//!
//! 시설 파일이 없으면 경고만 남기고 빈 목록으로 시작한다.

use crate::config::Config;
use crate::error::{OlyMateError, Result};
use calamine::{open_workbook_auto, Reader};
use olymate_common::{seed, Concert, FacilityRecord, PlaceRecord, SynonymTable, VenueGuide};
use std::io::Read;
use std::path::Path;

const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// 열 이름 후보 (한국어 원본 헤더, 영어 헤더)
const CATEGORY_COLUMNS: &[&str] = &["구분", "category"];
const DETAIL_COLUMNS: &[&str] = &["상세위치", "detail_location"];
const DISPLAY_COLUMNS: &[&str] = &["위치", "display_location"];
const LATITUDE_COLUMNS: &[&str] = &["위도", "latitude", "lat"];
const LONGITUDE_COLUMNS: &[&str] = &["경도", "longitude", "lon"];

/// 시작 시 읽어 둔 데이터
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub guide: VenueGuide,
    pub concerts: Vec<Concert>,
}

impl Dataset {
    pub fn load(config: &Config) -> Result<Self> {
        let facilities = load_facilities(&config.facilities_path)?;
        let places = load_places(config.places_path.as_deref())?;
        let synonyms = load_synonyms(config.synonyms_path.as_deref())?;

        tracing::info!(
            facilities = facilities.len(),
            places = places.len(),
            synonyms = synonyms.len(),
            "데이터 로드 완료"
        );

        Ok(Self {
            guide: VenueGuide::new(facilities, places, synonyms),
            concerts: seed::concerts(),
        })
    }
}

/// 편의시설 파일을 읽는다 (확장자로 형식 판별)
pub fn load_facilities(path: &Path) -> Result<Vec<FacilityRecord>> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "시설 파일이 없어 빈 목록으로 시작합니다");
        return Ok(Vec::new());
    }

    let is_excel = path
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            EXCEL_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false);

    if is_excel {
        read_facilities_excel(path)
    } else {
        let file = std::fs::File::open(path)?;
        read_facilities_csv(file)
    }
}

/// CSV에서 편의시설을 읽는다
pub fn read_facilities_csv<R: Read>(reader: R) -> Result<Vec<FacilityRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    rows_to_facilities(&headers, rows)
}

/// 엑셀 첫 시트에서 편의시설을 읽는다
pub fn read_facilities_excel(path: &Path) -> Result<Vec<FacilityRecord>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| OlyMateError::Excel(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| OlyMateError::Excel(format!("시트가 없습니다: {}", path.display())))?
        .map_err(|e| OlyMateError::Excel(e.to_string()))?;

    let mut sheet_rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string().trim().to_string()).collect::<Vec<_>>());

    let headers = match sheet_rows.next() {
        Some(headers) => headers,
        None => return Ok(Vec::new()),
    };

    rows_to_facilities(&headers, sheet_rows.collect())
}

fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim_start_matches('\u{feff}').trim();
        candidates.iter().any(|c| header.eq_ignore_ascii_case(c))
    })
}

/// 헤더와 행을 FacilityRecord로 변환
///
/// 빈 칸은 빈 문자열로 둔다. 좌표가 숫자가 아닌 행은 건너뛴다.
fn rows_to_facilities(headers: &[String], rows: Vec<Vec<String>>) -> Result<Vec<FacilityRecord>> {
    let category = find_column(headers, CATEGORY_COLUMNS)
        .ok_or_else(|| OlyMateError::DataFormat("'구분' 열이 없습니다".into()))?;
    let latitude = find_column(headers, LATITUDE_COLUMNS)
        .ok_or_else(|| OlyMateError::DataFormat("'위도' 열이 없습니다".into()))?;
    let longitude = find_column(headers, LONGITUDE_COLUMNS)
        .ok_or_else(|| OlyMateError::DataFormat("'경도' 열이 없습니다".into()))?;
    let detail = find_column(headers, DETAIL_COLUMNS);
    let display = find_column(headers, DISPLAY_COLUMNS);

    let mut facilities = Vec::with_capacity(rows.len());
    for (line, row) in rows.iter().enumerate() {
        let lat = cell(row, Some(latitude)).parse::<f64>();
        let lon = cell(row, Some(longitude)).parse::<f64>();

        let (lat, lon) = match (lat, lon) {
            (Ok(lat), Ok(lon)) => (lat, lon),
            _ => {
                tracing::warn!(row = line + 2, "좌표가 없는 시설 행을 건너뜁니다");
                continue;
            }
        };

        facilities.push(FacilityRecord {
            category: cell(row, Some(category)),
            detail_location: cell(row, detail),
            display_location: cell(row, display),
            latitude: lat,
            longitude: lon,
        });
    }

    Ok(facilities)
}

fn cell(row: &[String], index: Option<usize>) -> String {
    index.and_then(|i| row.get(i)).cloned().unwrap_or_default()
}

/// 맛집 목록 (파일이 없으면 기본 목록)
pub fn load_places(path: Option<&Path>) -> Result<Vec<PlaceRecord>> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(OlyMateError::FileNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(path)?;
            let places: Vec<PlaceRecord> = serde_json::from_str(&content)?;
            Ok(places)
        }
        None => Ok(seed::places()),
    }
}

/// 기본 동의어에 사용자 동의어를 덮어쓴다
pub fn load_synonyms(path: Option<&Path>) -> Result<SynonymTable> {
    let mut table = SynonymTable::default();

    if let Some(path) = path {
        if !path.exists() {
            return Err(OlyMateError::FileNotFound(path.display().to_string()));
        }
        let custom = SynonymTable::from_file(path)?;
        tracing::debug!(entries = custom.len(), "사용자 동의어 적용");
        table.merge(&custom);
    }

    Ok(table)
}
