// Single source of truth for all default values.

// --- Engine ---
pub const DEFAULT_CLASSIFIER: &str = "keyword";
pub const DEFAULT_BASE_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_SCALE_FACTOR: f64 = 0.3;
pub const DEFAULT_LINEAR_USES_CATEGORY_BASE: bool = true;

// --- Encoder ---
pub const DEFAULT_ENCODER_PROVIDER: &str = "ollama";
pub const DEFAULT_ENCODER_DIMENSIONS: usize = 384;
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_EMBED_MODEL: &str = "all-minilm";
pub const DEFAULT_ENCODER_TIMEOUT_SECS: u64 = 30;

// --- Backend ---
pub const DEFAULT_BACKEND_KIND: &str = "ollama";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama2";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GENERATE_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_METADATA_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_MAX_RETRIES: u32 = 0;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 8_000;

// --- Fallback generator ---
pub const DEFAULT_SIMULATE_LATENCY: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
