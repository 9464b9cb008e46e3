use crate::candle::Candle;
use crate::indicator::IndicatorBuilder;
use crate::indicator::ma::MA;
use std::fmt::Display;
use std::marker::PhantomData;
use ta_lib::exponential_moving_average;

/// 지수이동평균(EMA) 계산 빌더
///
/// 지수이동평균은 최근 데이터에 더 높은 가중치를 부여하는 이동평균입니다.
#[derive(Debug)]
pub struct EMABuilder<C: Candle> {
    /// EMA 계산 기간
    pub period: usize,
    /// 가격 데이터 저장용 배열
    values: Vec<f64>,
    _phantom: PhantomData<C>,
}

/// 지수이동평균(EMA) 기술적 지표
///
/// 계산된 EMA 값을 저장하고 제공합니다.
#[derive(Clone, Debug)]
pub struct EMA {
    /// EMA 계산 기간
    period: usize,
    /// 계산된 EMA 값
    ema: f64,
}

impl Display for EMA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EMA({}: {:.2})", self.period, self.ema)
    }
}

impl MA for EMA {
    fn get(&self) -> f64 {
        self.ema
    }

    fn period(&self) -> usize {
        self.period
    }
}

impl<C> EMABuilder<C>
where
    C: Candle,
{
    /// 새 EMA 빌더 생성
    ///
    /// # Arguments
    /// * `period` - EMA 계산 기간
    ///
    /// # Returns
    /// * `EMABuilder` - 새 빌더 인스턴스
    ///
    /// # Panics
    /// * 유효하지 않은 기간이 제공되면 패닉 발생
    pub fn new(period: usize) -> Self {
        if period == 0 {
            panic!("EMA 기간은 0보다 커야 합니다");
        }

        EMABuilder {
            period,
            values: Vec::with_capacity(period * 2),
            _phantom: PhantomData,
        }
    }

    /// 데이터 벡터에서 EMA 지표 생성
    ///
    /// # Arguments
    /// * `data` - 캔들 데이터 벡터
    ///
    /// # Returns
    /// * `EMA` - 계산된 EMA 지표
    pub fn build(&mut self, data: &[C]) -> EMA {
        if data.is_empty() {
            return EMA {
                period: self.period,
                ema: 0.0, // 데이터가 없으면 기본값 0 반환
            };
        }

        // 종가를 values 배열에 저장
        self.values.clear();
        for item in data {
            self.values.push(item.close_price());
        }

        // 데이터가 기간보다 짧으면 가용 구간 전체의 평균 사용
        if self.values.len() < self.period {
            let ema = self.values.iter().sum::<f64>() / self.values.len() as f64;
            return EMA {
                period: self.period,
                ema,
            };
        }

        // ta-lib으로 EMA 계산
        let (result, _) = exponential_moving_average(&self.values, Some(self.period)).unwrap();
        let ema = *result.last().unwrap_or(&0.0);

        EMA {
            period: self.period,
            ema,
        }
    }
}

impl<C> IndicatorBuilder<Box<dyn MA>, C> for EMABuilder<C>
where
    C: Candle,
{
    fn build(&mut self, data: &[C]) -> Box<dyn MA> {
        Box::new(self.build(data))
    }
}
