use log::{debug, error, info, warn};
use market_analysis::analyzer::market_analyzer::{AnalysisConfig, MarketAnalyzer};
use market_analysis::config_loader::{ConfigFormat, ConfigLoader};
use std::env;
use std::path::PathBuf;

fn main() {
    // 로그 초기화
    env_logger::init();

    info!("분석 설정 로더 시작");
    debug!("커맨드 라인 인수 파싱 시작");

    // 커맨드 라인 인수 파싱
    let args: Vec<String> = env::args().collect();
    debug!("커맨드 라인 인수: {:?}", args);

    if args.len() < 2 {
        warn!("설정 파일 경로가 지정되지 않았습니다. 기본 설정을 사용합니다.");
        println!("사용법: {} <설정_파일_경로(.toml|.json)>", args[0]);
        println!("설정 파일 없이 기본 설정으로 분석기를 구성합니다.");

        let analyzer = MarketAnalyzer::from_config(&AnalysisConfig::default());
        println!("분석기 구성 완료: {}", analyzer);
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    debug!("설정 파일 경로: {}", config_path.display());

    if !config_path.exists() {
        error!("설정 파일이 존재하지 않습니다: {}", config_path.display());
        println!(
            "오류: 설정 파일이 존재하지 않습니다: {}",
            config_path.display()
        );
        return;
    }

    // 설정 파일에서 분석 설정 로드
    info!("설정 로드 시작: {}", config_path.display());
    match ConfigLoader::load_from_file::<AnalysisConfig>(&config_path, ConfigFormat::Auto) {
        Ok(config) => {
            info!("설정 로드 성공");
            println!("설정 로드 성공:");
            println!(
                "추세: {} {}/{}",
                config.trend.ma, config.trend.short_period, config.trend.long_period
            );
            println!(
                "거래량: 기간 {}, 급증 {}, 고갈 {}",
                config.volume.period, config.volume.spike_ratio, config.volume.drought_ratio
            );

            let analyzer = MarketAnalyzer::from_config(&config);
            println!("분석기 구성 완료: {}", analyzer);
        }
        Err(err) => {
            let error_msg = format!("설정 로드 실패: {}", err);
            error!("{}", error_msg);
            println!("{}", error_msg);

            // 에러 종류에 따라 추가 정보 제공
            if err.to_string().contains("파일") {
                println!("해결 방법: 설정 파일 경로와 확장자(.toml/.json)를 확인하세요.");
            } else if err.to_string().contains("파싱") {
                println!("해결 방법: 설정 파일 형식이 올바른지 확인하세요.");
            } else if err.to_string().contains("유효성") {
                println!("해결 방법: 설정 값이 유효 범위 내에 있는지 확인하세요.");
            }
        }
    }

    info!("분석 설정 로더 종료");
}
