use common_test_utils::*;

use market_analysis::analyzer::market_analyzer::MarketAnalyzer;
use market_analysis::analyzer::trend_analyzer::TrendConfig;
use market_analysis::analyzer::volume_analyzer::VolumeConfig;
use market_analysis::market_series::MarketSeries;
use market_analysis::model::{TradeAction, TrendDirection, VolumeClass};

#[test]
fn test_output_length_and_index_order() {
    let series = MarketSeries::new(create_uptrend_candles(40, 100.0, 1.0)).unwrap();
    let analyzer = MarketAnalyzer::default();

    let signals = analyzer.analyze(&series);
    assert_eq!(signals.len(), series.len());
    for (i, signal) in signals.iter().enumerate() {
        assert_eq!(signal.index, i);
    }
}

#[test]
fn test_downtrend_with_volume_spike_sells_at_full_strength() {
    // 종가가 계속 하락하고 마지막 캔들에서 거래량이 3배로 뛰는 시나리오
    let mut candles = create_downtrend_candles(25, 200.0, 1.0);
    for candle in candles.iter_mut() {
        candle.volume = 100.0;
    }
    candles[24].volume = 300.0;
    let series = MarketSeries::new(candles).unwrap();
    let analyzer = MarketAnalyzer::default();

    let trends = analyzer.trend_signals(&series);
    let volumes = analyzer.volume_signals(&series);
    let signals = analyzer.analyze(&series);

    let trend = trends[24];
    assert_eq!(trend.direction, TrendDirection::Bearish);
    assert!(trend.strength > 0.0);

    let volume = volumes[24];
    assert_eq!(volume.classification, VolumeClass::Spike);
    assert!(volume.ratio >= 2.0);

    let trade = signals[24];
    assert_eq!(trade.action, TradeAction::Sell);
    // min(비율/2, 1) = 1 이므로 신뢰도는 추세 강도 그대로
    assert!((trade.confidence - trend.strength).abs() < 1e-12);
    assert!(trade.confidence > 0.0);
}

#[test]
fn test_short_series_always_holds() {
    // 장기 기간보다 짧은 시리즈는 거래량과 무관하게 전부 관망/0
    let mut candles = create_downtrend_candles(10, 200.0, 1.0);
    candles[9].volume = 50000.0;
    let series = MarketSeries::new(candles).unwrap();
    let analyzer = MarketAnalyzer::default();

    let signals = analyzer.analyze(&series);
    assert_eq!(signals.len(), 10);
    for signal in signals {
        assert_eq!(signal.action, TradeAction::Hold);
        assert_eq!(signal.confidence, 0.0);
    }
}

#[test]
fn test_drought_blocks_directional_signal() {
    // 하락 추세가 확실해도 거래량이 고갈되면 관망
    let mut candles = create_downtrend_candles(25, 200.0, 1.0);
    for candle in candles.iter_mut() {
        candle.volume = 100.0;
    }
    candles[24].volume = 10.0;
    let series = MarketSeries::new(candles).unwrap();
    let analyzer = MarketAnalyzer::default();

    let trade = analyzer.analyze(&series)[24];
    assert_eq!(trade.action, TradeAction::Hold);
    assert_eq!(trade.confidence, 0.0);
}

#[test]
fn test_uptrend_with_normal_volume_buys_at_half_strength() {
    let series = MarketSeries::new(create_uptrend_candles(25, 100.0, 1.0)).unwrap();
    let analyzer = MarketAnalyzer::default();

    let trends = analyzer.trend_signals(&series);
    let trade = analyzer.analyze(&series)[24];

    assert_eq!(trade.action, TradeAction::Buy);
    assert!((trade.confidence - trends[24].strength * 0.5).abs() < 1e-12);
}

#[test]
fn test_analyze_is_idempotent() {
    let mut candles = create_downtrend_candles(30, 200.0, 1.0);
    candles[29].volume = 5000.0;
    let series = MarketSeries::new(candles).unwrap();
    let analyzer = MarketAnalyzer::default();

    let first = analyzer.analyze(&series);
    let second = analyzer.analyze(&series);
    assert_eq!(first, second);
}

#[test]
fn test_custom_configs_are_respected() {
    let trend_config = TrendConfig {
        short_period: 2,
        long_period: 4,
        ..TrendConfig::default()
    };
    let volume_config = VolumeConfig {
        period: 4,
        ..VolumeConfig::default()
    };
    let series = MarketSeries::new(create_uptrend_candles(8, 100.0, 1.0)).unwrap();
    let analyzer = MarketAnalyzer::new(trend_config, volume_config);

    let signals = analyzer.analyze(&series);
    // 장기 기간 4를 채우기 전에는 관망, 이후 매수
    assert_eq!(signals[2].action, TradeAction::Hold);
    assert_eq!(signals[7].action, TradeAction::Buy);
}

#[test]
fn test_empty_series_yields_empty_signals() {
    let series =
        MarketSeries::<market_analysis::candle::OhlcvCandle>::new(Vec::new()).unwrap();
    let analyzer = MarketAnalyzer::default();

    assert!(analyzer.analyze(&series).is_empty());
    assert!(analyzer.trend_signals(&series).is_empty());
    assert!(analyzer.volume_signals(&series).is_empty());
}
