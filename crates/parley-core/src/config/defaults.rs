// Single source of truth for all default values.
// Where deployments disagree, the most permissive observed value wins.

// --- Store ---
pub const DEFAULT_QA_PARTITION: &str = "perguntas_respostas.json";

// --- Fuzzy QA matching ---
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

// --- Intents ---
pub const DEFAULT_INTENT_SOURCE: &str = "intents.json";
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

// --- Responses ---
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Desculpe, não entendi. Pode perguntar de outro jeito?";

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "parley=info";
pub const LOG_ENV_VAR: &str = "PARLEY_LOG";
