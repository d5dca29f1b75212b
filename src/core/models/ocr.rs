use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct AnnotateRequestBody {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<DetectionFeature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageContent {
    /// Base64 encoded image bytes.
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetectionFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
}

impl AnnotateRequestBody {
    pub fn single_image(base64_content: String, feature_type: &str) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: base64_content,
                },
                features: vec![DetectionFeature {
                    feature_type: feature_type.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnotateResponseBody {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub text_annotations: Vec<TextAnnotation>,
    #[serde(default)]
    pub error: Option<VisionStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextAnnotation {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisionStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct OcrResult {
    pub text_annotations: Vec<TextAnnotation>,
}

impl OcrResult {
    /// The first annotation holds the whole detected text block; the rest are
    /// individual words.
    pub fn full_text(&self) -> Option<&str> {
        self.text_annotations
            .first()
            .map(|annotation| annotation.description.as_str())
            .filter(|text| !text.is_empty())
    }

    pub fn locale(&self) -> Option<&str> {
        self.text_annotations
            .first()
            .and_then(|annotation| annotation.locale.as_deref())
    }
}

impl AnnotateResponseBody {
    pub fn into_ocr_result(self) -> Result<OcrResult, VisionStatus> {
        let Some(first_response) = self.responses.into_iter().next() else {
            return Ok(OcrResult::default());
        };

        if let Some(status) = first_response.error {
            return Err(status);
        }

        Ok(OcrResult {
            text_annotations: first_response.text_annotations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_serializes_to_vision_shape() {
        let body = AnnotateRequestBody::single_image("AAAA".to_string(), "TEXT_DETECTION");

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["requests"][0]["image"]["content"], "AAAA");
        assert_eq!(json["requests"][0]["features"][0]["type"], "TEXT_DETECTION");
    }

    #[test]
    fn test_response_with_annotations_yields_first_description() {
        let json = r#"{
            "responses": [{
                "textAnnotations": [
                    {"locale": "en", "description": "Hello\nWorld"},
                    {"description": "Hello"},
                    {"description": "World"}
                ]
            }]
        }"#;

        let body: AnnotateResponseBody = serde_json::from_str(json).unwrap();
        let result = body.into_ocr_result().unwrap();

        assert_eq!(result.full_text(), Some("Hello\nWorld"));
        assert_eq!(result.text_annotations.len(), 3);
        assert_eq!(result.locale(), Some("en"));
    }

    #[test]
    fn test_response_without_annotations_yields_no_text() {
        let body: AnnotateResponseBody = serde_json::from_str(r#"{"responses": [{}]}"#).unwrap();

        let result = body.into_ocr_result().unwrap();

        assert_eq!(result.full_text(), None);
    }

    #[test]
    fn test_empty_response_list_yields_no_text() {
        let body: AnnotateResponseBody = serde_json::from_str("{}").unwrap();

        let result = body.into_ocr_result().unwrap();

        assert!(result.text_annotations.is_empty());
        assert_eq!(result.full_text(), None);
    }

    #[test]
    fn test_response_error_is_returned_as_status() {
        let json = r#"{"responses": [{"error": {"code": 7, "message": "quota exceeded"}}]}"#;

        let body: AnnotateResponseBody = serde_json::from_str(json).unwrap();
        let status = body.into_ocr_result().unwrap_err();

        assert_eq!(status.code, 7);
        assert_eq!(status.message, "quota exceeded");
    }
}
