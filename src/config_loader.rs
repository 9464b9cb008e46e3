use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 설정 로드 오류
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 오류
    FileError(String),
    /// 파싱 오류
    ParseError(String),
    /// 유효성 검사 오류
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileError(msg) => write!(f, "설정 파일 오류: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "설정 파싱 오류: {}", msg),
            ConfigError::ValidationError(msg) => write!(f, "설정 유효성 검사 오류: {}", msg),
        }
    }
}

/// String으로 ConfigError 변환
impl From<ConfigError> for String {
    fn from(err: ConfigError) -> Self {
        err.to_string()
    }
}

/// 설정 로드 결과
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 설정 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON 형식
    Json,
    /// TOML 형식
    Toml,
    /// 자동 감지 (파일 확장자로부터)
    Auto,
}

/// 설정 유효성 검사 트레이트
pub trait ConfigValidation {
    /// 설정 유효성 검사
    fn validate(&self) -> ConfigResult<()>;
}

/// 설정 파일 로더
#[derive(Debug)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// 파일에서 설정 로드
    ///
    /// # Arguments
    /// * `path` - 설정 파일 경로
    /// * `format` - 설정 파일 형식 (기본값: Auto)
    ///
    /// # Returns
    /// * `ConfigResult<T>` - 설정 객체 또는 오류
    pub fn load_from_file<T>(path: &Path, format: ConfigFormat) -> ConfigResult<T>
    where
        T: DeserializeOwned + ConfigValidation,
    {
        debug!("설정 파일 로드 시작: {}", path.display());

        let format = if format == ConfigFormat::Auto {
            match Self::detect_format(path) {
                Ok(fmt) => {
                    debug!("설정 파일 형식 감지됨: {:?}", fmt);
                    fmt
                }
                Err(e) => {
                    error!("설정 파일 형식 감지 실패: {}", path.display());
                    return Err(e);
                }
            }
        } else {
            format
        };

        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                error!("설정 파일 열기 실패: {} - {}", path.display(), e);
                return Err(ConfigError::FileError(format!("파일 열기 실패: {}", e)));
            }
        };

        let mut content = String::new();
        if let Err(e) = file.read_to_string(&mut content) {
            error!("설정 파일 읽기 실패: {} - {}", path.display(), e);
            return Err(ConfigError::FileError(format!("파일 읽기 실패: {}", e)));
        }

        let config: T = match format {
            ConfigFormat::Json => Self::parse_json(&content)?,
            ConfigFormat::Toml => Self::parse_toml(&content)?,
            ConfigFormat::Auto => unreachable!(),
        };

        // 유효성 검사
        if let Err(e) = config.validate() {
            error!("설정 유효성 검사 실패: {}", e);
            return Err(e);
        }

        info!("설정 파일 로드 완료: {}", path.display());
        Ok(config)
    }

    /// 문자열에서 설정 로드
    ///
    /// # Arguments
    /// * `content` - 설정 문자열
    /// * `format` - 설정 형식
    ///
    /// # Returns
    /// * `ConfigResult<T>` - 설정 객체 또는 오류
    pub fn load_from_string<T>(content: &str, format: ConfigFormat) -> ConfigResult<T>
    where
        T: DeserializeOwned + ConfigValidation,
    {
        let config: T = match format {
            ConfigFormat::Json => Self::parse_json(content)?,
            ConfigFormat::Toml => Self::parse_toml(content)?,
            ConfigFormat::Auto => {
                // JSON으로 먼저 시도 후 실패하면 TOML 시도
                match Self::parse_json::<T>(content) {
                    Ok(config) => config,
                    Err(_) => Self::parse_toml(content)?,
                }
            }
        };

        // 유효성 검사
        config.validate()?;

        Ok(config)
    }

    // 내부 헬퍼 메서드

    /// JSON 파싱
    fn parse_json<T: DeserializeOwned>(content: &str) -> ConfigResult<T> {
        match serde_json::from_str(content) {
            Ok(obj) => Ok(obj),
            Err(e) => {
                warn!("JSON 파싱 실패: {}", e);
                Err(ConfigError::ParseError(format!("JSON 파싱 실패: {}", e)))
            }
        }
    }

    /// TOML 파싱
    fn parse_toml<T: DeserializeOwned>(content: &str) -> ConfigResult<T> {
        match toml::from_str(content) {
            Ok(obj) => Ok(obj),
            Err(e) => {
                warn!("TOML 파싱 실패: {}", e);
                Err(ConfigError::ParseError(format!("TOML 파싱 실패: {}", e)))
            }
        }
    }

    /// 파일 형식 감지
    fn detect_format(path: &Path) -> ConfigResult<ConfigFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                debug!("JSON 파일 형식 감지됨: {}", path.display());
                Ok(ConfigFormat::Json)
            }
            Some("toml") => {
                debug!("TOML 파일 형식 감지됨: {}", path.display());
                Ok(ConfigFormat::Toml)
            }
            _ => {
                warn!("지원되지 않는 파일 형식: {}", path.display());
                Err(ConfigError::FileError(format!(
                    "파일 형식을 감지할 수 없음: {}",
                    path.display()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::market_analyzer::AnalysisConfig;
    use crate::analyzer::trend_analyzer::TrendConfig;
    use crate::indicator::ma::MAType;

    #[test]
    fn test_load_analysis_config_from_toml_string() {
        let toml_str = r#"
            [trend]
            ma = "SMA"
            short_period = 5
            long_period = 20

            [volume]
            period = 20
            spike_ratio = 2.0
            drought_ratio = 0.5
        "#;
        let config =
            ConfigLoader::load_from_string::<AnalysisConfig>(toml_str, ConfigFormat::Toml).unwrap();
        assert_eq!(config.trend.short_period, 5);
        assert_eq!(config.trend.long_period, 20);
        assert_eq!(config.volume.spike_ratio, 2.0);
    }

    #[test]
    fn test_load_analysis_config_from_json_string() {
        let json = r#"{
            "trend": { "ma": "EMA", "short_period": 7, "long_period": 21 },
            "volume": { "period": 10, "spike_ratio": 3.0, "drought_ratio": 0.3 }
        }"#;
        let config =
            ConfigLoader::load_from_string::<AnalysisConfig>(json, ConfigFormat::Json).unwrap();
        assert_eq!(config.trend.ma, MAType::EMA);
        assert_eq!(config.volume.period, 10);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config =
            ConfigLoader::load_from_string::<AnalysisConfig>("{}", ConfigFormat::Json).unwrap();
        assert_eq!(config.trend.short_period, 5);
        assert_eq!(config.trend.long_period, 20);
        assert_eq!(config.volume.period, 20);
    }

    #[test]
    fn test_validation_error() {
        // 장기 기간이 단기 기간보다 짧으면 유효성 검사 실패
        let json = r#"{
            "trend": { "ma": "SMA", "short_period": 20, "long_period": 5 }
        }"#;
        let result = ConfigLoader::load_from_string::<AnalysisConfig>(json, ConfigFormat::Json);
        match result {
            Err(ConfigError::ValidationError(_)) => (),
            _ => panic!("유효성 검사 오류가 발생해야 함"),
        }
    }

    #[test]
    fn test_trend_config_validation() {
        let config = TrendConfig {
            ma: MAType::SMA,
            short_period: 0,
            long_period: 20,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_auto_format() {
        let config = AnalysisConfig::default();
        let content = toml::to_string_pretty(&config).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.toml");
        std::fs::write(&path, content).unwrap();

        let loaded =
            ConfigLoader::load_from_file::<AnalysisConfig>(&path, ConfigFormat::Auto).unwrap();
        assert_eq!(loaded.trend.long_period, config.trend.long_period);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.yaml");
        std::fs::write(&path, "trend: {}").unwrap();

        let result = ConfigLoader::load_from_file::<AnalysisConfig>(&path, ConfigFormat::Auto);
        match result {
            Err(ConfigError::FileError(_)) => (),
            _ => panic!("파일 형식 감지 오류가 발생해야 함"),
        }
    }
}
