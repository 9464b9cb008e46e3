use crate::analyzer::trend_analyzer::{TrendAnalyzer, TrendConfig};
use crate::analyzer::volume_analyzer::{VolumeAnalyzer, VolumeConfig};
use crate::candle::Candle;
use crate::config_loader::{ConfigResult, ConfigValidation};
use crate::market_series::MarketSeries;
use crate::model::{TradeAction, TradeSignal, TrendSignal, VolumeSignal};
use crate::strategy::SignalCombiner;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 전체 분석 파이프라인 설정
///
/// 추세/거래량 분석기 설정을 하나의 파일에서 로드하기 위한 묶음입니다.
/// 생략된 섹션은 기본값을 사용합니다.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// 추세 분석 설정
    #[serde(default)]
    pub trend: TrendConfig,
    /// 거래량 분석 설정
    #[serde(default)]
    pub volume: VolumeConfig,
}

impl ConfigValidation for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trend.validate()?;
        self.volume.validate()?;
        Ok(())
    }
}

/// 시장 분석 오케스트레이터
///
/// 시리즈 전체에 대해 추세 분석기와 거래량 분석기를 독립적으로 실행하고,
/// 인덱스별 신호 쌍을 결합기에 넘겨 최종 매매 신호 시퀀스를 만듭니다.
/// 시리즈 구성 오류 외의 추가 검증은 수행하지 않으며, 호출 간 상태를
/// 유지하지 않습니다 (같은 입력이면 항상 같은 출력).
#[derive(Debug)]
pub struct MarketAnalyzer {
    trend_analyzer: TrendAnalyzer,
    volume_analyzer: VolumeAnalyzer,
    combiner: SignalCombiner,
}

impl Display for MarketAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.trend_analyzer, self.volume_analyzer)
    }
}

impl Default for MarketAnalyzer {
    fn default() -> Self {
        MarketAnalyzer::new(TrendConfig::default(), VolumeConfig::default())
    }
}

impl MarketAnalyzer {
    /// 새 분석 오케스트레이터 생성
    ///
    /// # Arguments
    /// * `trend_config` - 추세 분석 설정
    /// * `volume_config` - 거래량 분석 설정
    pub fn new(trend_config: TrendConfig, volume_config: VolumeConfig) -> MarketAnalyzer {
        MarketAnalyzer {
            trend_analyzer: TrendAnalyzer::new(trend_config),
            volume_analyzer: VolumeAnalyzer::new(volume_config),
            combiner: SignalCombiner::new(),
        }
    }

    /// 분석 설정 묶음으로부터 생성
    pub fn from_config(config: &AnalysisConfig) -> MarketAnalyzer {
        MarketAnalyzer::new(config.trend, config.volume)
    }

    /// 시리즈 전체를 분석하여 매매 신호 시퀀스를 반환합니다.
    ///
    /// 반환 시퀀스의 길이는 시리즈 길이와 같고, 인덱스는 0부터 순서대로
    /// 대응합니다.
    ///
    /// # Arguments
    /// * `series` - 분석할 캔들 시리즈
    ///
    /// # Returns
    /// * `Vec<TradeSignal>` - 최종 매매 신호 시퀀스
    pub fn analyze<C: Candle + 'static>(&self, series: &MarketSeries<C>) -> Vec<TradeSignal> {
        let trends = self.trend_analyzer.analyze(series);
        let volumes = self.volume_analyzer.analyze(series);
        let signals = self.combiner.combine_all(&trends, &volumes);

        let buys = signals
            .iter()
            .filter(|s| s.action == TradeAction::Buy)
            .count();
        let sells = signals
            .iter()
            .filter(|s| s.action == TradeAction::Sell)
            .count();
        debug!(
            "분석 완료: 캔들 {}개, 매수 {}개, 매도 {}개, 관망 {}개",
            series.len(),
            buys,
            sells,
            signals.len() - buys - sells
        );

        signals
    }

    /// 중간 결과인 추세 신호 시퀀스를 반환합니다.
    pub fn trend_signals<C: Candle + 'static>(&self, series: &MarketSeries<C>) -> Vec<TrendSignal> {
        self.trend_analyzer.analyze(series)
    }

    /// 중간 결과인 거래량 신호 시퀀스를 반환합니다.
    pub fn volume_signals<C: Candle>(&self, series: &MarketSeries<C>) -> Vec<VolumeSignal> {
        self.volume_analyzer.analyze(series)
    }
}
