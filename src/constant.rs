// Window size constants
pub const SLOTS_WINDOW_WIDTH: f32 = 300.0;
pub const SLOTS_WINDOW_HEIGHT: f32 = 800.0;
pub const QUEUE_WINDOW_WIDTH: f32 = 300.0;
pub const QUEUE_WINDOW_HEIGHT: f32 = 190.0;
pub const SLOTS_WINDOW_TITLE: &str = "URL Collector";
pub const QUEUE_WINDOW_TITLE: &str = "URL FIFO Stack";

/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "UrlPiler";
pub const APP_NAME: &str = "URL Piler";

/// Capacities offered by the combo box and the four slider stops
pub const CAPACITY_OPTIONS: [usize; 4] = [2, 5, 10, 20];
pub const DEFAULT_SLOT_CAPACITY: usize = 10;
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;

/// App related Magic Numbers
pub const MAX_RECENT_FILES: usize = 10;
pub const SLOT_LABEL_MAX_CHARS: usize = 40;
pub const SESSION_FILE_NAME: &str = "session.txt";
pub const URL_FILE_EXTENSION: &str = "txt";
