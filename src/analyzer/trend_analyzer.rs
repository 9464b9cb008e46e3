use crate::candle::Candle;
use crate::config_loader::{ConfigError, ConfigResult, ConfigValidation};
use crate::indicator::IndicatorBuilder;
use crate::indicator::ma::{MA, MABuilderFactory, MAType};
use crate::market_series::MarketSeries;
use crate::model::{TrendDirection, TrendSignal};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 추세 분석 설정
///
/// 단기/장기 이동평균 교차로 추세를 판정하기 위한 설정입니다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrendConfig {
    /// 이동평균 계산 방식 (SMA, EMA)
    pub ma: MAType,
    /// 단기 이동평균 기간
    pub short_period: usize,
    /// 장기 이동평균 기간
    pub long_period: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        TrendConfig {
            ma: MAType::SMA,
            short_period: 5,
            long_period: 20,
        }
    }
}

impl ConfigValidation for TrendConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.short_period == 0 {
            return Err(ConfigError::ValidationError(
                "단기 이동평균 기간은 0보다 커야 합니다".to_string(),
            ));
        }

        if self.long_period <= self.short_period {
            return Err(ConfigError::ValidationError(format!(
                "장기 기간({})은 단기 기간({})보다 커야 합니다",
                self.long_period, self.short_period
            )));
        }

        Ok(())
    }
}

/// 추세 분석기
///
/// 단기/장기 이동평균 교차로 인덱스별 추세 방향과 강도를 계산합니다.
/// 검증된 시리즈에 대한 순수 함수이며 오류를 발생시키지 않습니다.
#[derive(Debug)]
pub struct TrendAnalyzer {
    config: TrendConfig,
}

impl Display for TrendAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "추세분석기({} {}/{})",
            self.config.ma, self.config.short_period, self.config.long_period
        )
    }
}

impl TrendAnalyzer {
    /// 새 추세 분석기 생성
    pub fn new(config: TrendConfig) -> TrendAnalyzer {
        TrendAnalyzer { config }
    }

    /// 설정 참조 반환
    pub fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// 시리즈 전체에 대한 추세 신호 시퀀스를 계산합니다.
    ///
    /// # Arguments
    /// * `series` - 분석할 캔들 시리즈
    ///
    /// # Returns
    /// * `Vec<TrendSignal>` - 시리즈 길이와 같은 길이의 신호 시퀀스
    pub fn analyze<C: Candle + 'static>(&self, series: &MarketSeries<C>) -> Vec<TrendSignal> {
        let mut fast = MABuilderFactory::build::<C>(&self.config.ma, self.config.short_period);
        let mut slow = MABuilderFactory::build::<C>(&self.config.ma, self.config.long_period);

        (0..series.len())
            .map(|index| self.window_signal(series, index, fast.as_mut(), slow.as_mut()))
            .collect()
    }

    /// 특정 인덱스의 추세 신호를 계산합니다.
    ///
    /// # Arguments
    /// * `series` - 분석할 캔들 시리즈
    /// * `index` - 신호를 계산할 인덱스
    ///
    /// # Returns
    /// * `TrendSignal` - 해당 인덱스의 추세 신호
    pub fn signal_at<C: Candle + 'static>(
        &self,
        series: &MarketSeries<C>,
        index: usize,
    ) -> TrendSignal {
        let mut fast = MABuilderFactory::build::<C>(&self.config.ma, self.config.short_period);
        let mut slow = MABuilderFactory::build::<C>(&self.config.ma, self.config.long_period);
        self.window_signal(series, index, fast.as_mut(), slow.as_mut())
    }

    /// 윈도우 기반 추세 판정
    ///
    /// 장기 기간만큼의 이력이 없는 인덱스는 중립/0으로 처리합니다.
    /// 단기/장기 평균이 정확히 같으면 중립입니다.
    fn window_signal<C: Candle>(
        &self,
        series: &MarketSeries<C>,
        index: usize,
        fast: &mut dyn IndicatorBuilder<Box<dyn MA>, C>,
        slow: &mut dyn IndicatorBuilder<Box<dyn MA>, C>,
    ) -> TrendSignal {
        if index + 1 < self.config.long_period {
            return TrendSignal::neutral(index);
        }

        let window = series.window(index, self.config.long_period);
        let fast_ma = fast.build(window).get();
        let slow_ma = slow.build(window).get();

        let direction = if fast_ma < slow_ma {
            TrendDirection::Bearish
        } else if fast_ma > slow_ma {
            TrendDirection::Bullish
        } else {
            TrendDirection::Neutral
        };

        let strength = if slow_ma > 0.0 {
            ((fast_ma - slow_ma).abs() / slow_ma).clamp(0.0, 1.0)
        } else {
            0.0
        };

        TrendSignal::new(index, direction, strength)
    }
}
