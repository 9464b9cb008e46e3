use crate::candle::Candle;
use crate::indicator::IndicatorBuilder;
use crate::indicator::ma::MA;
use std::fmt::Display;
use std::marker::PhantomData;
use ta_lib::simple_moving_average;

#[derive(Debug)]
pub struct SMABuilder<C: Candle> {
    period: usize,
    values: Vec<f64>,
    _phantom: PhantomData<C>,
}

#[derive(Clone, Debug)]
pub struct SMA {
    period: usize,
    sma: f64,
}

impl Display for SMA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMA({}: {})", self.period, self.sma)
    }
}

impl MA for SMA {
    fn get(&self) -> f64 {
        self.sma
    }

    fn period(&self) -> usize {
        self.period
    }
}

impl<C> SMABuilder<C>
where
    C: Candle,
{
    pub fn new(period: usize) -> Self {
        if period == 0 {
            panic!("SMA 기간은 0보다 커야 합니다");
        }

        SMABuilder {
            period,
            values: Vec::with_capacity(period * 2),
            _phantom: PhantomData,
        }
    }

    pub fn build(&mut self, data: &[C]) -> SMA {
        if data.is_empty() {
            return SMA {
                period: self.period,
                sma: 0.0,
            };
        }

        // 종가를 values 배열에 저장
        self.values.clear();
        for item in data {
            self.values.push(item.close_price());
        }

        // 데이터가 기간보다 짧으면 가용 구간 전체의 평균 사용
        if self.values.len() < self.period {
            let sma = self.values.iter().sum::<f64>() / self.values.len() as f64;
            return SMA {
                period: self.period,
                sma,
            };
        }

        // ta-lib으로 SMA 계산
        let (result, _) = simple_moving_average(&self.values, Some(self.period)).unwrap();
        let sma = *result.last().unwrap_or(&0.0);

        SMA {
            period: self.period,
            sma,
        }
    }
}

impl<C> IndicatorBuilder<Box<dyn MA>, C> for SMABuilder<C>
where
    C: Candle,
{
    fn build(&mut self, data: &[C]) -> Box<dyn MA> {
        Box::new(self.build(data))
    }
}
