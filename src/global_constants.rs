pub const APPLICATION_NAME: &str = "Capture OCR - Desktop";
pub const APPLICATION_TITLE: &str = "Capture OCR";
pub const CONFIG_DIRECTORY_NAME: &str = "capture-ocr-desktop";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_KEYBOARD: &str = "[KEYBOARD]";
pub const LOG_TAG_OVERLAY: &str = "[OVERLAY]";
pub const LOG_TAG_OCR: &str = "[OCR]";
pub const LOG_TAG_PRESENTER: &str = "[PRESENTER]";

pub const DEFAULT_CAPTURE_HOTKEY: &str = "Ctrl+C";

pub const DEFAULT_OVERLAY_X: i32 = 100;
pub const DEFAULT_OVERLAY_Y: i32 = 100;
pub const DEFAULT_OVERLAY_WIDTH: i32 = 300;
pub const DEFAULT_OVERLAY_HEIGHT: i32 = 300;
pub const DEFAULT_BORDER_THICKNESS: i32 = 10;
pub const OVERLAY_HEADER_HEIGHT: i32 = 10;
pub const OVERLAY_MINIMUM_SIZE: i32 = 50;

pub const OVERLAY_BORDER_RGB: (f32, f32, f32) = (1.0, 0.0, 0.0);
pub const OVERLAY_HEADER_RGBA: (f32, f32, f32, f32) = (1.0, 0.0, 0.0, 0.5);

pub const MAIN_WINDOW_WIDTH: f32 = 800.0;
pub const MAIN_WINDOW_HEIGHT: f32 = 600.0;
pub const PREVIEW_BOX_SIZE: f32 = 400.0;

pub const GOOGLE_VISION_ANNOTATE_URL: &str = "https://vision.googleapis.com/v1/images:annotate";
pub const GOOGLE_VISION_FEATURE_TEXT_DETECTION: &str = "TEXT_DETECTION";

pub const USER_MESSAGE_READY: &str = "Ready. Position the red frame and press Capture.";
pub const USER_MESSAGE_NO_TEXT_DETECTED: &str = "No text detected.";
pub const USER_MESSAGE_CONFIGURE_CREDENTIALS: &str =
    "Please configure the credentials file path first.";
pub const USER_MESSAGE_CREDENTIALS_LOADED: &str = "Credentials loaded successfully.";
pub const USER_MESSAGE_LOADING_CREDENTIALS: &str = "Loading credentials...";
pub const USER_MESSAGE_RECOGNIZING: &str = "Recognizing text...";

pub const CREDENTIALS_INSTRUCTIONS: &str = r#"How to get an API key for Cloud Vision:
1. Open the Google Cloud Console
2. Create a new project (or pick an existing one)
3. Search for "Cloud Vision API" and enable it
4. Open "APIs & Services" > "Credentials"
5. Create credentials > API key
6. Save a JSON file like {"api_key": "<your key>"}
7. Enter the path of that file above and press Apply"#;
