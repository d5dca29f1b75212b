use thiserror::Error;

use crate::global_constants::USER_MESSAGE_CONFIGURE_CREDENTIALS;

/// Failures of the capture-and-recognize action. Every variant is shown in
/// the output area; none of them is retried.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CaptureOcrError {
    #[error("Could not find the screen showing the overlay at ({x}, {y}).")]
    NoTargetDisplay { x: i32, y: i32 },

    #[error("Screen capture failed: {0}")]
    CapturePrimitiveFailure(String),

    #[error("{}", USER_MESSAGE_CONFIGURE_CREDENTIALS)]
    OcrClientUnavailable,

    #[error("Text recognition failed: {0}")]
    OcrCallFailure(String),

    #[error("Could not encode the captured image: {0}")]
    ImageEncodingFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_target_display_message_names_position() {
        let error = CaptureOcrError::NoTargetDisplay { x: -5000, y: 20 };

        assert!(error.to_string().contains("(-5000, 20)"));
    }

    #[test]
    fn test_ocr_client_unavailable_asks_for_credentials() {
        assert_eq!(
            CaptureOcrError::OcrClientUnavailable.to_string(),
            USER_MESSAGE_CONFIGURE_CREDENTIALS
        );
    }

    #[test]
    fn test_ocr_call_failure_keeps_cause() {
        let error = CaptureOcrError::OcrCallFailure("HTTP 403".to_string());

        assert_eq!(error.to_string(), "Text recognition failed: HTTP 403");
    }
}
