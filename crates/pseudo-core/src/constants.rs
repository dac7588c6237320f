// Single source of truth for all default values.

// --- Pseudonymization ---
pub const DEFAULT_TARGET_LABEL: &str = "PER";
pub const DEFAULT_CATEGORY_WORD: &str = "PERSONNE";
pub const DEFAULT_STRICT_SURFACE: bool = false;

/// Built-in placeholder words for the labels the preparation tooling produces.
pub const BUILTIN_CATEGORY_WORDS: &[(&str, &str)] = &[
    ("PER", "PERSONNE"),
    ("LOC", "LIEU"),
    ("ORG", "ORGANISATION"),
    ("MISC", "DIVERS"),
];

// --- Output ---
pub const DEFAULT_TEXT_SUFFIX: &str = "_pseudonymise";
pub const DEFAULT_MAPPING_SUFFIX: &str = "_mapping";
pub const TEXT_EXTENSION: &str = "txt";
pub const JSON_EXTENSION: &str = "json";
pub const JSON_INDENT: &[u8] = b"    ";

// --- Config resolution ---
pub const PROJECT_CONFIG_FILENAME: &str = "pseudo.toml";
pub const ENV_TARGET_LABEL: &str = "PSEUDO_TARGET_LABEL";
pub const ENV_CATEGORY_WORD: &str = "PSEUDO_CATEGORY_WORD";
pub const ENV_STRICT_SURFACE: &str = "PSEUDO_STRICT_SURFACE";
pub const ENV_OUTPUT_DIR: &str = "PSEUDO_OUTPUT_DIR";

// --- Observability ---
pub const LOG_ENV_VAR: &str = "PSEUDO_LOG";
pub const DEFAULT_LOG_FILTER: &str = "pseudo=info";
