//! # 이미지 업로드 서비스 구현
//!
//! 업로드 파이프라인: 멀티파트 본문 읽기 → 이미지 디코딩 → 한 번의
//! 재인코딩(크기 제한 + JPEG 압축) → 생성된 파일명으로 디스크 저장.
//! 제공 경로: 파일명 검증 → 확장자 기반 Content-Type 매핑 → 파일 읽기.
//!
//! 디코딩/인코딩과 파일 IO는 동기 작업이므로 핸들러에서
//! `actix_web::web::block`으로 감싸 실행합니다. 주입받을 의존성이 없어
//! 싱글톤 레지스트리를 거치지 않는 정적 서비스입니다.

use std::path::{Path, PathBuf};
use image::imageops::FilterType;
use uuid::Uuid;
use crate::config::UploadConfig;
use crate::errors::errors::AppError;

/// 이미지 업로드/제공 서비스
pub struct UploadService;

impl UploadService {
    /// 업로드 파일명 검증
    ///
    /// 경로 이탈을 막기 위해 `..`, `/`, `\`가 포함된 이름을 거부합니다.
    /// 저장소의 파일명은 서버가 생성하므로 유효한 이름은 항상 단일 세그먼트입니다.
    pub fn validate_filename(filename: &str) -> Result<(), AppError> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(AppError::ValidationError(
                "잘못된 파일명입니다".to_string()
            ));
        }

        Ok(())
    }

    /// 확장자를 Content-Type으로 매핑
    ///
    /// 알 수 없는 확장자는 `application/octet-stream`으로 제공됩니다.
    pub fn content_type_for(filename: &str) -> &'static str {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "svg" => "image/svg+xml",
            "avif" => "image/avif",
            _ => "application/octet-stream",
        }
    }

    /// 업로드된 이미지 저장
    ///
    /// 바이트를 디코딩하고, 설정된 최대 가로 픽셀을 넘으면 비율을 유지하며
    /// 축소한 뒤, JPEG(품질 80)로 재인코딩하여 `{uuid}.jpg` 이름으로
    /// 업로드 디렉터리에 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 저장된 파일명
    /// * `Err(AppError::UploadError)` - 디코딩 불가능한 입력
    /// * `Err(AppError::InternalError)` - 디스크 쓰기 실패
    pub fn store_image(bytes: &[u8]) -> Result<String, AppError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AppError::UploadError(format!("이미지를 디코딩할 수 없습니다: {}", e)))?;

        let max_width = UploadConfig::max_width();
        let img = if img.width() > max_width {
            img.resize(max_width, u32::MAX, FilterType::Lanczos3)
        } else {
            img
        };

        let filename = format!("{}.jpg", Uuid::new_v4());
        let dir = UploadConfig::dir();

        std::fs::create_dir_all(&dir)
            .map_err(|e| AppError::InternalError(format!("업로드 디렉터리 생성 실패: {}", e)))?;

        let path = Path::new(&dir).join(&filename);

        let mut encoded = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut encoded, 80);
        img.write_with_encoder(encoder)
            .map_err(|e| AppError::InternalError(format!("이미지 인코딩 실패: {}", e)))?;

        std::fs::write(&path, &encoded)
            .map_err(|e| AppError::InternalError(format!("업로드 파일 쓰기 실패: {}", e)))?;

        log::info!(
            "이미지 업로드됨: {} ({} bytes → {} bytes)",
            filename,
            bytes.len(),
            encoded.len()
        );

        Ok(filename)
    }

    /// 제공할 파일의 경로 해석
    ///
    /// 파일명 검증 후 업로드 디렉터리 내 경로를 반환합니다.
    /// 파일이 없으면 NotFound입니다.
    pub fn resolve(filename: &str) -> Result<PathBuf, AppError> {
        Self::validate_filename(filename)?;

        let path = Path::new(&UploadConfig::dir()).join(filename);

        if !path.is_file() {
            return Err(AppError::NotFound(
                format!("파일을 찾을 수 없습니다: {}", filename)
            ));
        }

        Ok(path)
    }

    /// 제공할 파일 읽기
    pub fn load(filename: &str) -> Result<Vec<u8>, AppError> {
        let path = Self::resolve(filename)?;

        std::fs::read(&path)
            .map_err(|e| AppError::InternalError(format!("파일 읽기 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_validation_rejects_traversal() {
        assert!(UploadService::validate_filename("../etc/passwd").is_err());
        assert!(UploadService::validate_filename("a/../b.jpg").is_err());
        assert!(UploadService::validate_filename("dir/file.jpg").is_err());
        assert!(UploadService::validate_filename("dir\\file.jpg").is_err());
        assert!(UploadService::validate_filename("..").is_err());
        assert!(UploadService::validate_filename("").is_err());
    }

    #[test]
    fn test_filename_validation_accepts_plain_names() {
        assert!(UploadService::validate_filename("photo.jpg").is_ok());
        assert!(UploadService::validate_filename("3f1f0c0a-1b2c-4d5e-8f90-aabbccddeeff.jpg").is_ok());
        // 점 하나는 확장자 구분자로 허용
        assert!(UploadService::validate_filename("tiger.nest.webp").is_ok());
    }

    #[test]
    fn test_content_type_mapping() {
        assert_eq!(UploadService::content_type_for("a.jpg"), "image/jpeg");
        assert_eq!(UploadService::content_type_for("a.JPEG"), "image/jpeg");
        assert_eq!(UploadService::content_type_for("a.png"), "image/png");
        assert_eq!(UploadService::content_type_for("a.webp"), "image/webp");
        assert_eq!(UploadService::content_type_for("a.svg"), "image/svg+xml");
        assert_eq!(UploadService::content_type_for("a.avif"), "image/avif");
        assert_eq!(UploadService::content_type_for("a.bin"), "application/octet-stream");
        assert_eq!(UploadService::content_type_for("noext"), "application/octet-stream");
    }
}
