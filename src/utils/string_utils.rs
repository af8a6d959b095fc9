//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 콘텐츠 슬러그 생성, 필수/선택 필드 정리, serde 역직렬화 헬퍼를 포함합니다.

use serde::Deserialize;
use crate::errors::errors::AppError;

/// 제목 문자열을 URL 슬러그로 변환
///
/// 공개 사이트의 모든 콘텐츠(투어, 목적지, 체험)는 슬러그로 조회되므로,
/// 관리자가 제목만 입력하면 이 함수로 슬러그를 생성합니다.
///
/// 변환 규칙:
/// 1. 영숫자와 공백을 제외한 모든 문자 제거
/// 2. 연속된 공백은 하이픈 하나로 축약
/// 3. 결과는 소문자
///
/// # 인자
/// * `title` - 변환할 제목 문자열
///
/// # 반환값
/// * 소문자 하이픈 구분 슬러그
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::slugify;
///
/// assert_eq!(slugify("Wellness & Rejuvenation!"), "wellness-rejuvenation");
/// assert_eq!(slugify("Jomolhari Trek"), "jomolhari-trek");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 반환값
/// * `Ok(String)` - 정리된 유효한 문자열
/// * `Err(AppError)` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  Paro  ", "location").unwrap(), "Paro");
/// assert!(validate_required_string("   ", "location").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// 문의 폼의 전화번호, 국가처럼 비워서 제출되는 필드에 사용됩니다.
///
/// # 예제
/// ```rust,ignore
/// use serde::Deserialize;
/// use crate::utils::string_utils::deserialize_optional_string;
///
/// #[derive(Deserialize)]
/// struct InquiryForm {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     phone: Option<String>,
/// }
///
/// // JSON: {"phone": "  +975 17 11 22 33  "} → Some("+975 17 11 22 33")
/// // JSON: {"phone": ""} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Wellness & Rejuvenation!"), "wellness-rejuvenation");
        assert_eq!(slugify("Tiger's Nest Hike"), "tigers-nest-hike");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("  Druk   Path    Trek "), "druk-path-trek");
        assert_eq!(slugify("Paro\tto\nThimphu"), "paro-to-thimphu");
    }

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("BUMTHANG Valley"), "bumthang-valley");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("7-Day Cultural Tour"), "7day-cultural-tour");
        assert_eq!(slugify("Festival 2025"), "festival-2025");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!@#$%"), "");
    }

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("Thimphu", "name").unwrap(), "Thimphu");
        assert_eq!(validate_required_string("  Punakha  ", "name").unwrap(), "Punakha");

        // 실패 케이스
        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Haa".to_string())), Some("Haa".to_string()));
        assert_eq!(clean_optional_string(Some("  Trongsa  ".to_string())), Some("Trongsa".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Gangtey"));
        assert!(is_valid_string("  Mongar  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
    }

    #[test]
    fn test_deserialize_optional_string() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let json = r#"{"optional_field": "  +975 17 60 41 88  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("+975 17 60 41 88".to_string()));

        // 빈 문자열 - None 반환
        let json = r#"{"optional_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 공백만 있는 문자열 - None 반환
        let json = r#"{"optional_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // null 값 - None 반환
        let json = r#"{"optional_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);
    }
}
