use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// 캔들 데이터 접근 인터페이스
///
/// 분석기는 이 트레이트를 통해서만 캔들 데이터를 읽습니다.
pub trait Candle: Clone + Debug + Display + Send + PartialEq {
    /// 캔들 시각 (UTC)
    fn datetime(&self) -> DateTime<Utc>;

    /// 시가
    fn open_price(&self) -> f64;

    /// 고가
    fn high_price(&self) -> f64;

    /// 저가
    fn low_price(&self) -> f64;

    /// 종가
    fn close_price(&self) -> f64;

    /// 거래량
    fn volume(&self) -> f64;
}

/// 기본 OHLCV 캔들
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvCandle {
    pub datetime: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl OhlcvCandle {
    /// 새 캔들 생성
    pub fn new(
        datetime: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        OhlcvCandle {
            datetime,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

impl Display for OhlcvCandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "캔들(t={}, o={}, h={}, l={}, c={}, v={})",
            self.datetime, self.open, self.high, self.low, self.close, self.volume
        )
    }
}

impl Candle for OhlcvCandle {
    fn datetime(&self) -> DateTime<Utc> {
        self.datetime
    }

    fn open_price(&self) -> f64 {
        self.open
    }

    fn high_price(&self) -> f64 {
        self.high
    }

    fn low_price(&self) -> f64 {
        self.low
    }

    fn close_price(&self) -> f64 {
        self.close
    }

    fn volume(&self) -> f64 {
        self.volume
    }
}
