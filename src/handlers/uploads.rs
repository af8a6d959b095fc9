//! # 업로드 HTTP 핸들러
//!
//! 공개 파일 제공(`GET /api/uploads/{filename}`)과 관리자 이미지 업로드
//! (`POST /api/v1/admin/uploads`)를 제공합니다.
//!
//! 파일 제공 규칙:
//! - 경로 이탈 문자(`..`, `/`, `\`)가 포함된 이름은 400
//! - 업로드 디렉터리에 없는 파일은 404
//! - 성공 응답은 1년 불변 캐시 헤더를 포함 (파일명이 UUID라 내용이 바뀌지 않음)

use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse};
use futures_util::TryStreamExt;
use crate::config::UploadConfig;
use crate::domain::dto::UploadResponse;
use crate::errors::errors::AppError;
use crate::services::uploads::UploadService;

/// 업로드 파일 제공 핸들러
///
/// # Endpoint
/// `GET /api/uploads/{filename}`
#[get("/{filename}")]
pub async fn serve_upload(filename: web::Path<String>) -> Result<HttpResponse, AppError> {
    let filename = filename.into_inner();

    // 경로 이탈 검증 (400) 후 파일 존재 확인 (404)
    UploadService::validate_filename(&filename)?;

    let content_type = UploadService::content_type_for(&filename);

    let read_target = filename.clone();
    let bytes = web::block(move || UploadService::load(&read_target))
        .await
        .map_err(|e| AppError::InternalError(format!("파일 읽기 작업 실패: {}", e)))??;

    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(("Cache-Control", "public, max-age=31536000, immutable"))
        .body(bytes))
}

/// 관리자 이미지 업로드 핸들러
///
/// 멀티파트 본문의 첫 파일 필드를 읽어 크기 제한을 적용하고,
/// 재인코딩 파이프라인을 거쳐 저장합니다.
///
/// # Endpoint
/// `POST /admin/uploads` (multipart/form-data)
#[post("")]
pub async fn upload_image(mut payload: Multipart) -> Result<HttpResponse, AppError> {
    let max_bytes = UploadConfig::max_bytes();
    let mut data: Option<Vec<u8>> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::UploadError(format!("멀티파트 본문 오류: {}", e)))?
    {
        let mut bytes = Vec::new();

        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::UploadError(format!("업로드 스트림 오류: {}", e)))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(AppError::UploadError(
                    format!("허용 크기({} bytes)를 초과했습니다", max_bytes)
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        if !bytes.is_empty() {
            data = Some(bytes);
            break;
        }
    }

    let bytes = data.ok_or_else(|| {
        AppError::UploadError("업로드할 파일이 없습니다".to_string())
    })?;

    // 디코딩/인코딩은 CPU 바운드 작업이므로 블로킹 풀에서 실행
    let filename = web::block(move || UploadService::store_image(&bytes))
        .await
        .map_err(|e| AppError::InternalError(format!("업로드 작업 실패: {}", e)))??;

    let url = format!("/api/uploads/{}", filename);

    Ok(HttpResponse::Created().json(UploadResponse { filename, url }))
}
