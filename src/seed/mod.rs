//! # 시드 모듈
//!
//! 초기 콘텐츠를 데이터베이스에 채우는 시더들의 모음입니다.
//! `seed` 바이너리가 이 모듈의 [`run_all`]을 호출합니다.
//!
//! ## 실행 계약
//!
//! - 시더들은 고정된 순서로 실행됩니다 (관리자 → 목적지 → 체험 유형 →
//!   체험 → 투어 → 호텔 → 비용).
//! - 개별 시더의 실패는 로그만 남기고 **다음 시더로 계속 진행**합니다.
//!   실행이 끝나면 성공/실패 집계를 반환합니다.
//! - 모든 시더는 자연 키(슬러그/이메일/비용 키)로 존재 여부를 확인하고
//!   없을 때만 삽입하므로 재실행해도 안전합니다.

pub mod data;

use log::{error, info};
use crate::errors::errors::AppError;

/// 시드 실행 집계
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl SeedSummary {
    fn record(&mut self, name: &str, result: Result<usize, AppError>) {
        match result {
            Ok(inserted) => {
                info!("✓ 시드 완료: {} ({}건 삽입)", name, inserted);
                self.succeeded += 1;
            }
            Err(e) => {
                error!("✗ 시드 실패: {} - {}", name, e);
                self.failed += 1;
            }
        }
    }
}

/// 모든 시더를 순서대로 실행합니다.
///
/// 실패한 시더가 있어도 중단하지 않고 끝까지 진행한 뒤 집계를 반환합니다.
pub async fn run_all() -> SeedSummary {
    let mut summary = SeedSummary::default();

    summary.record("admin_user", seed_admin_user().await);
    summary.record("destinations", seed_destinations().await);
    summary.record("experience_types", seed_experience_types().await);
    summary.record("experiences", seed_experiences().await);
    summary.record("tours", seed_tours().await);
    summary.record("hotels", seed_hotels().await);
    summary.record("global_costs", seed_global_costs().await);

    info!(
        "시드 실행 완료: 성공 {} / 실패 {}",
        summary.succeeded, summary.failed
    );

    summary
}

/// 관리자 프로필 레코드 시드
///
/// 설정된 관리자 이메일로 `users` 컬렉션에 프로필 레코드를 만듭니다.
async fn seed_admin_user() -> Result<usize, AppError> {
    use crate::config::AdminAuthConfig;
    use crate::domain::entities::users::AdminUser;
    use crate::repositories::users::AdminUserRepository;

    let repo = AdminUserRepository::instance();
    let email = AdminAuthConfig::email();

    if repo.find_by_email(&email).await?.is_some() {
        return Ok(0);
    }

    let user = AdminUser::new(
        email,
        AdminAuthConfig::username(),
        AdminAuthConfig::password_hash(),
    );

    repo.create(user).await?;

    Ok(1)
}

/// 목적지 시드
async fn seed_destinations() -> Result<usize, AppError> {
    use crate::repositories::destinations::DestinationRepository;

    let repo = DestinationRepository::instance();
    let mut inserted = 0;

    for destination in data::destinations() {
        if repo.find_by_slug(&destination.slug).await?.is_none() {
            repo.create(destination).await?;
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// 체험 유형 시드
async fn seed_experience_types() -> Result<usize, AppError> {
    use crate::repositories::experiences::ExperienceTypeRepository;

    let repo = ExperienceTypeRepository::instance();
    let mut inserted = 0;

    for experience_type in data::experience_types() {
        if repo.find_by_slug(&experience_type.slug).await?.is_none() {
            repo.create(experience_type).await?;
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// 체험 시드
async fn seed_experiences() -> Result<usize, AppError> {
    use crate::repositories::experiences::ExperienceRepository;

    let repo = ExperienceRepository::instance();
    let mut inserted = 0;

    for experience in data::experiences() {
        if repo.find_by_slug(&experience.slug).await?.is_none() {
            repo.create(experience).await?;
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// 투어 시드
async fn seed_tours() -> Result<usize, AppError> {
    use crate::repositories::tours::TourRepository;

    let repo = TourRepository::instance();
    let mut inserted = 0;

    for tour in data::tours() {
        if repo.find_by_slug(&tour.slug).await?.is_none() {
            repo.create(tour).await?;
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// 호텔 시드
///
/// 호텔에는 슬러그가 없으므로 이름으로 존재 여부를 확인합니다.
async fn seed_hotels() -> Result<usize, AppError> {
    use crate::domain::models::pagination::PageQuery;
    use crate::repositories::hotels::HotelRepository;

    let repo = HotelRepository::instance();

    // 이미 시드된 경우 재삽입하지 않음
    let (_, total) = repo.list(&PageQuery::default(), None).await?;
    if total > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for hotel in data::hotels() {
        repo.create(hotel).await?;
        inserted += 1;
    }

    Ok(inserted)
}

/// 전역 비용 시드
async fn seed_global_costs() -> Result<usize, AppError> {
    use crate::repositories::costs::GlobalCostRepository;

    let repo = GlobalCostRepository::instance();
    let mut inserted = 0;

    for cost in data::global_costs() {
        if repo.find_by_key(&cost.key).await?.is_none() {
            repo.create(cost).await?;
            inserted += 1;
        }
    }

    Ok(inserted)
}
