use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_SEARCH_URL: &str = "https://yandex.ru/search/";
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 30;

/// Which upstream produces the answer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerStrategyKind {
    #[default]
    Completion,
    Search,
    SearchTerse,
}

impl FromStr for AnswerStrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completion" => Ok(Self::Completion),
            "search" => Ok(Self::Search),
            "search-terse" | "search_terse" => Ok(Self::SearchTerse),
            other => Err(format!("unknown answer strategy '{other}'")),
        }
    }
}

/// How a body that is not valid JSON is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonPolicy {
    /// 400 `{"error": "Invalid JSON"}`.
    #[default]
    Strict,
    /// 500 carrying the parser's error text.
    Lenient,
}

impl FromStr for JsonPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown JSON policy '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: String,
    pub openai_timeout: Duration,
    pub strategy: AnswerStrategyKind,
    pub json_policy: JsonPolicy,
    pub search_url: String,
    pub search_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_timeout: Duration::from_secs(DEFAULT_OPENAI_TIMEOUT_SECS),
            strategy: AnswerStrategyKind::default(),
            json_policy: JsonPolicy::default(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            search_timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Reads the process environment.
    ///
    /// A missing `OPENAI_API_KEY` is not an error here; the completion
    /// strategy reports it per request.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        Ok(Self {
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_model: non_empty_var("OPENAI_MODEL"),
            openai_base_url: non_empty_var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_timeout: secs_var("OPENAI_TIMEOUT_SECS")?.unwrap_or(defaults.openai_timeout),
            strategy: parsed_var("ANSWER_STRATEGY")?.unwrap_or(defaults.strategy),
            json_policy: parsed_var("JSON_POLICY")?.unwrap_or(defaults.json_policy),
            search_url: non_empty_var("SEARCH_URL").unwrap_or(defaults.search_url),
            search_timeout: secs_var("SEARCH_TIMEOUT_SECS")?.unwrap_or(defaults.search_timeout),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T>(name: &str) -> Result<Option<T>, String>
where
    T: FromStr<Err = String>,
{
    non_empty_var(name)
        .map(|v| v.parse::<T>().map_err(|e| format!("{name}: {e}")))
        .transpose()
}

fn secs_var(name: &str) -> Result<Option<Duration>, String> {
    non_empty_var(name)
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| format!("{name}: {e}"))
        })
        .transpose()
}
