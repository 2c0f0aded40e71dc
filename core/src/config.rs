//! Client configuration: backend base URL and page locations.

/// Backend the pages talk to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Env var overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "MEDICO_API_URL";
pub const LIST_PAGE_ENV: &str = "MEDICO_LIST_PAGE";
pub const UPDATE_PAGE_ENV: &str = "MEDICO_UPDATE_PAGE";

pub const DEFAULT_LIST_PAGE: &str = "lista-medicos.html";
pub const DEFAULT_UPDATE_PAGE: &str = "atualizar-medico.html";

/// Redirect targets used by the page flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pages {
    pub list: String,
    pub update: String,
}

impl Default for Pages {
    fn default() -> Self {
        Self {
            list: DEFAULT_LIST_PAGE.to_string(),
            update: DEFAULT_UPDATE_PAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub pages: Pages,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pages: Pages::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `MEDICO_API_URL`, `MEDICO_LIST_PAGE` and
    /// `MEDICO_UPDATE_PAGE` when set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            base_url: get(BASE_URL_ENV, DEFAULT_BASE_URL),
            pages: Pages {
                list: get(LIST_PAGE_ENV, DEFAULT_LIST_PAGE),
                update: get(UPDATE_PAGE_ENV, DEFAULT_UPDATE_PAGE),
            },
        }
    }
}
