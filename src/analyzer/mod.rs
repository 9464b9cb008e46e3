// 시장 데이터 분석기 모듈
// 캔들 시리즈로부터 추세/거래량/매매 신호를 도출하는 도구를 제공합니다.

pub mod market_analyzer;
pub mod trend_analyzer;
pub mod volume_analyzer;

pub use market_analyzer::{AnalysisConfig, MarketAnalyzer};
pub use trend_analyzer::{TrendAnalyzer, TrendConfig};
pub use volume_analyzer::{VolumeAnalyzer, VolumeConfig};
