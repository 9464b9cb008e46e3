use crate::candle::Candle;
use crate::config_loader::{ConfigError, ConfigResult, ConfigValidation};
use crate::indicator::volume::{Volume, VolumeBuilder};
use crate::market_series::MarketSeries;
use crate::model::{VolumeClass, VolumeSignal};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 거래량 분석 설정
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// 이동평균 거래량 계산 기간
    pub period: usize,
    /// 급증 판정 비율 (현재/평균이 이 값 이상이면 Spike)
    pub spike_ratio: f64,
    /// 고갈 판정 비율 (현재/평균이 이 값 이하이면 Drought)
    pub drought_ratio: f64,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        VolumeConfig {
            period: 20,
            spike_ratio: 2.0,
            drought_ratio: 0.5,
        }
    }
}

impl ConfigValidation for VolumeConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.period == 0 {
            return Err(ConfigError::ValidationError(
                "거래량 계산 기간은 0보다 커야 합니다".to_string(),
            ));
        }

        if self.drought_ratio < 0.0 {
            return Err(ConfigError::ValidationError(
                "고갈 판정 비율은 음수일 수 없습니다".to_string(),
            ));
        }

        if self.spike_ratio <= self.drought_ratio {
            return Err(ConfigError::ValidationError(format!(
                "급증 비율({})은 고갈 비율({})보다 커야 합니다",
                self.spike_ratio, self.drought_ratio
            )));
        }

        Ok(())
    }
}

/// 거래량 분석기
///
/// 이동평균 거래량 대비 현재 거래량의 비율로 급증/고갈/정상을
/// 분류합니다. 이력이 기간보다 짧아도 가용 구간의 평균으로 판정하며
/// (짧은 이력에서도 거래량 평균은 의미가 있음), 검증된 시리즈에 대해
/// 오류를 발생시키지 않습니다.
#[derive(Debug)]
pub struct VolumeAnalyzer {
    config: VolumeConfig,
}

impl Display for VolumeAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "거래량분석기(기간 {}, 급증 {}, 고갈 {})",
            self.config.period, self.config.spike_ratio, self.config.drought_ratio
        )
    }
}

impl VolumeAnalyzer {
    /// 새 거래량 분석기 생성
    pub fn new(config: VolumeConfig) -> VolumeAnalyzer {
        VolumeAnalyzer { config }
    }

    /// 설정 참조 반환
    pub fn config(&self) -> &VolumeConfig {
        &self.config
    }

    /// 시리즈 전체에 대한 거래량 신호 시퀀스를 계산합니다.
    ///
    /// # Arguments
    /// * `series` - 분석할 캔들 시리즈
    ///
    /// # Returns
    /// * `Vec<VolumeSignal>` - 시리즈 길이와 같은 길이의 신호 시퀀스
    pub fn analyze<C: Candle>(&self, series: &MarketSeries<C>) -> Vec<VolumeSignal> {
        let mut builder = VolumeBuilder::new(self.config.period);

        (0..series.len())
            .map(|index| self.window_signal(series, index, &mut builder))
            .collect()
    }

    /// 특정 인덱스의 거래량 신호를 계산합니다.
    ///
    /// # Arguments
    /// * `series` - 분석할 캔들 시리즈
    /// * `index` - 신호를 계산할 인덱스
    ///
    /// # Returns
    /// * `VolumeSignal` - 해당 인덱스의 거래량 신호
    pub fn signal_at<C: Candle>(&self, series: &MarketSeries<C>, index: usize) -> VolumeSignal {
        let mut builder = VolumeBuilder::new(self.config.period);
        self.window_signal(series, index, &mut builder)
    }

    fn window_signal<C: Candle>(
        &self,
        series: &MarketSeries<C>,
        index: usize,
        builder: &mut VolumeBuilder<C>,
    ) -> VolumeSignal {
        let window = series.window(index, self.config.period);
        let volume = builder.build(window);
        let classification = self.classify(&volume);
        VolumeSignal::new(index, classification, volume.volume_ratio)
    }

    /// 거래량 지표를 급증/고갈/정상으로 분류합니다.
    ///
    /// 평균 거래량이 정확히 0이면 비율이 0이어도 고갈이 아니라 정상으로
    /// 분류합니다 (0 나눗셈 회피 규칙).
    fn classify(&self, volume: &Volume) -> VolumeClass {
        if volume.average_volume <= 0.0 {
            return VolumeClass::Normal;
        }

        if volume.volume_ratio >= self.config.spike_ratio {
            VolumeClass::Spike
        } else if volume.volume_ratio <= self.config.drought_ratio {
            VolumeClass::Drought
        } else {
            VolumeClass::Normal
        }
    }
}
