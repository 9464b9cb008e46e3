use crate::candle::Candle;
use crate::indicator::IndicatorBuilder;
use std::fmt::Display;
use std::marker::PhantomData;

/// 거래량 지표 빌더
///
/// 특정 기간의 거래량 데이터를 기반으로 이동평균 거래량과
/// 현재/평균 비율을 계산합니다.
#[derive(Debug)]
pub struct VolumeBuilder<C: Candle> {
    /// 계산 기간
    period: usize,
    /// 데이터 저장 버퍼
    data_buffer: Vec<f64>,
    _phantom: PhantomData<C>,
}

/// 거래량 분석 결과
#[derive(Clone, Debug)]
pub struct Volume {
    /// 거래량 계산 기간
    period: usize,
    /// 평균 거래량
    pub average_volume: f64,
    /// 현재 거래량
    pub current_volume: f64,
    /// 거래량 비율 (현재/평균, 평균이 0이면 0)
    pub volume_ratio: f64,
}

impl Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Volume({}: avg={:.2}, current={:.2}, ratio={:.2})",
            self.period, self.average_volume, self.current_volume, self.volume_ratio
        )
    }
}

impl<C> VolumeBuilder<C>
where
    C: Candle,
{
    /// 새 거래량 빌더 생성
    ///
    /// # Arguments
    /// * `period` - 거래량 계산 기간
    ///
    /// # Returns
    /// * `VolumeBuilder` - 새 빌더 인스턴스
    ///
    /// # Panics
    /// * 기간이 0이면 패닉 발생
    pub fn new(period: usize) -> Self {
        if period == 0 {
            panic!("거래량 계산 기간은 0보다 커야 합니다");
        }

        VolumeBuilder {
            period,
            data_buffer: Vec::with_capacity(period),
            _phantom: PhantomData,
        }
    }

    /// 데이터 벡터에서 거래량 지표 생성
    ///
    /// 슬라이스의 마지막 캔들을 현재 캔들로 보고, 현재 캔들을 포함한
    /// 최근 `period`개 구간의 평균 거래량과 비율을 계산합니다.
    /// 평균 거래량이 정확히 0이면 비율은 0으로 정의합니다.
    ///
    /// # Arguments
    /// * `data` - 캔들 데이터 벡터
    ///
    /// # Returns
    /// * `Volume` - 계산된 거래량 지표
    pub fn build(&mut self, data: &[C]) -> Volume {
        self.data_buffer.clear();

        if data.is_empty() {
            return Volume {
                period: self.period,
                average_volume: 0.0,
                current_volume: 0.0,
                volume_ratio: 0.0,
            };
        }

        // 최대 period 개수만큼만 처리
        let slice_start = data.len().saturating_sub(self.period);
        for candle in &data[slice_start..] {
            self.data_buffer.push(candle.volume());
        }

        let current_volume = data.last().map(|candle| candle.volume()).unwrap_or(0.0);

        let average_volume = self.data_buffer.iter().sum::<f64>() / self.data_buffer.len() as f64;

        let volume_ratio = if average_volume > 0.0 {
            current_volume / average_volume
        } else {
            0.0
        };

        Volume {
            period: self.period,
            average_volume,
            current_volume,
            volume_ratio,
        }
    }
}

impl<C> IndicatorBuilder<Volume, C> for VolumeBuilder<C>
where
    C: Candle,
{
    fn build(&mut self, data: &[C]) -> Volume {
        self.build(data)
    }
}
