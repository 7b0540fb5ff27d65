//! Client configuration and the backend's endpoint table.

/// Default backend origin used when no override is compiled in
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Local storage key holding the persisted session
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Runtime knobs for the client. All durations are milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
    pub session_ttl_ms: u32,
    pub plan_check_interval_ms: u32,
    pub keep_alive_interval_ms: u32,
    /// Day of month on which the plan reminder may fire
    pub reminder_day: u32,
    /// Local hour during which the plan reminder may fire
    pub reminder_hour: u32,
    pub warning_threshold_pct: f64,
    pub exceeded_threshold_pct: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            session_ttl_ms: 24 * 60 * 60 * 1000, // 24 hours
            plan_check_interval_ms: 60 * 60 * 1000, // hourly
            keep_alive_interval_ms: 10 * 60 * 1000, // 10 minutes
            reminder_day: 1,
            reminder_hour: 9,
            warning_threshold_pct: 80.0,
            exceeded_threshold_pct: 100.0,
        }
    }
}

impl ClientConfig {
    /// Replace the backend origin, ignoring blank overrides and trailing slashes
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.api_base_url, endpoint.path())
    }
}

/// Every backend route the client calls
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Login,
    Register,
    Categories,
    Expenses,
    Expense(String),
    ExpenseSummary,
    ExpenseAnalytics,
    MonthlyPlan,
    MonthlyPlanFor(String),
    BudgetStatus(String),
    Health,
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/api/login".to_string(),
            Endpoint::Register => "/api/register".to_string(),
            Endpoint::Categories => "/api/categories".to_string(),
            Endpoint::Expenses => "/api/expenses".to_string(),
            Endpoint::Expense(id) => format!("/api/expenses/{}", id),
            Endpoint::ExpenseSummary => "/api/expenses/summary".to_string(),
            Endpoint::ExpenseAnalytics => "/api/expenses/analytics".to_string(),
            Endpoint::MonthlyPlan => "/api/budget/monthly-plan".to_string(),
            Endpoint::MonthlyPlanFor(month) => format!("/api/budget/monthly-plan/{}", month),
            Endpoint::BudgetStatus(month) => format!("/api/budget/budget-status/{}", month),
            Endpoint::Health => "/health".to_string(),
        }
    }

    /// Whether the request must carry the bearer token
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Login | Endpoint::Register | Endpoint::Health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.token_storage_key, "token");
        assert_eq!(config.session_ttl_ms, 86_400_000);
        assert_eq!(config.plan_check_interval_ms, 3_600_000);
        assert_eq!(config.keep_alive_interval_ms, 600_000);
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::default().with_base_url(Some("https://api.example.com/"));
        assert_eq!(config.api_base_url, "https://api.example.com");

        let untouched = ClientConfig::default().with_base_url(Some("   "));
        assert_eq!(untouched.api_base_url, DEFAULT_API_BASE_URL);

        let none = ClientConfig::default().with_base_url(None);
        assert_eq!(none.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_endpoint_urls() {
        let config = ClientConfig::default();
        assert_eq!(
            config.url(&Endpoint::Expense("abc123".to_string())),
            "http://localhost:8000/api/expenses/abc123"
        );
        assert_eq!(
            config.url(&Endpoint::MonthlyPlanFor("2024-06".to_string())),
            "http://localhost:8000/api/budget/monthly-plan/2024-06"
        );
        assert_eq!(
            config.url(&Endpoint::BudgetStatus("2024-06".to_string())),
            "http://localhost:8000/api/budget/budget-status/2024-06"
        );
        assert_eq!(config.url(&Endpoint::Health), "http://localhost:8000/health");
    }

    #[test]
    fn test_auth_requirements() {
        assert!(!Endpoint::Login.requires_auth());
        assert!(!Endpoint::Register.requires_auth());
        assert!(!Endpoint::Health.requires_auth());
        assert!(Endpoint::Categories.requires_auth());
        assert!(Endpoint::Expense("1".to_string()).requires_auth());
        assert!(Endpoint::MonthlyPlan.requires_auth());
    }
}
