//! 시드 실행 바이너리
//!
//! 데이터 스토어에 연결하고 모든 시더를 순서대로 실행합니다.
//! 개별 시더의 실패는 실행을 멈추지 않으며, 마지막에 성공/실패 집계를
//! 출력합니다. 모든 시더가 실패한 경우에만 비정상 종료합니다.
//!
//! ```bash
//! cargo run --bin seed
//! ```

use std::sync::Arc;
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use druk_travel_backend::caching::redis::RedisClient;
use druk_travel_backend::core::registry::ServiceLocator;
use druk_travel_backend::db::Database;
use druk_travel_backend::seed;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    info!("🌱 시드 실행 시작");

    // 데이터 스토어 초기화
    let database = Arc::new(
        Database::new()
            .await
            .expect("데이터베이스 연결 실패")
    );
    let redis_client = Arc::new(
        RedisClient::new()
            .await
            .expect("Redis 연결 실패")
    );

    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all()
        .await
        .expect("서비스 초기화 실패");

    // 시더 실행 (실패해도 계속 진행, 집계 보고)
    let summary = seed::run_all().await;

    println!(
        "\n시드 결과: 성공 {} / 실패 {}",
        summary.succeeded, summary.failed
    );

    if summary.succeeded == 0 && summary.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
