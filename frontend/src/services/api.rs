use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Analytics, ApiError, AuthRequest, BudgetStatus, CategoryRequest, ClientConfig, Endpoint,
    Expense, ExpenseRequest, ExpenseSummary, MessageResponse, MonthlyPlan, MonthlyPlanRequest,
    TokenResponse,
};
use yew::Callback;

use super::logging::Logger;

/// API client for communicating with the expense backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create an unauthenticated client for the configured origin
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            token: None,
        }
    }

    /// Same origin, requests carry `Authorization: Bearer <token>`
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn bearer_header(&self, endpoint: &Endpoint) -> Option<String> {
        if !endpoint.requires_auth() {
            return None;
        }
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    fn prepare(&self, builder: RequestBuilder, endpoint: &Endpoint) -> RequestBuilder {
        match self.bearer_header(endpoint) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let response = self
            .prepare(Request::get(&self.url(&endpoint)), &endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let response = self
            .prepare(Request::delete(&self.url(&endpoint)), &endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn send_json<B, T>(
        &self,
        builder: RequestBuilder,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .prepare(builder, endpoint)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = Request::post(&self.url(&endpoint));
        self.send_json(builder, &endpoint, body).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = Request::put(&self.url(&endpoint));
        self.send_json(builder, &endpoint, body).await
    }

    pub async fn login(&self, credentials: &AuthRequest) -> Result<TokenResponse, ApiError> {
        self.post(Endpoint::Login, credentials).await
    }

    pub async fn register(&self, credentials: &AuthRequest) -> Result<MessageResponse, ApiError> {
        self.post(Endpoint::Register, credentials).await
    }

    pub async fn get_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get(Endpoint::Categories).await
    }

    pub async fn create_category(&self, request: &CategoryRequest) -> Result<MessageResponse, ApiError> {
        self.post(Endpoint::Categories, request).await
    }

    pub async fn get_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        self.get(Endpoint::Expenses).await
    }

    pub async fn create_expense(&self, request: &ExpenseRequest) -> Result<MessageResponse, ApiError> {
        self.post(Endpoint::Expenses, request).await
    }

    pub async fn update_expense(
        &self,
        id: &str,
        request: &ExpenseRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.put(Endpoint::Expense(id.to_string()), request).await
    }

    pub async fn delete_expense(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.delete(Endpoint::Expense(id.to_string())).await
    }

    pub async fn get_summary(&self) -> Result<ExpenseSummary, ApiError> {
        self.get(Endpoint::ExpenseSummary).await
    }

    pub async fn get_analytics(&self) -> Result<Analytics, ApiError> {
        self.get(Endpoint::ExpenseAnalytics).await
    }

    pub async fn get_monthly_plan(&self, month: &str) -> Result<MonthlyPlan, ApiError> {
        self.get(Endpoint::MonthlyPlanFor(month.to_string())).await
    }

    pub async fn set_monthly_plan(&self, request: &MonthlyPlanRequest) -> Result<MessageResponse, ApiError> {
        self.post(Endpoint::MonthlyPlan, request).await
    }

    pub async fn get_budget_status(&self, month: &str) -> Result<BudgetStatus, ApiError> {
        self.get(Endpoint::BudgetStatus(month.to_string())).await
    }

    /// Keep-alive ping; only the status matters
    pub async fn health_check(&self) -> Result<(), ApiError> {
        let endpoint = Endpoint::Health;
        let response = Request::get(&self.url(&endpoint))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_response(response.status(), ""))
        }
    }
}

/// Log a failed request and force a logout when the session was rejected.
/// Cached state is left untouched either way.
pub fn report_failure(component: &str, action: &str, error: &ApiError, on_unauthorized: &Callback<()>) {
    if error.is_unauthorized() {
        Logger::warn_with_component(component, &format!("{} rejected with 401, logging out", action));
        on_unauthorized.emit(());
    } else {
        Logger::error_with_component(component, &format!("Failed to {}: {}", action, error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_urls_use_configured_origin() {
        let config = ClientConfig::default().with_base_url(Some("https://expenses.example.in/"));
        let client = ApiClient::new(&config);
        assert_eq!(client.url(&Endpoint::Expenses), "https://expenses.example.in/api/expenses");
        assert_eq!(client.url(&Endpoint::Health), "https://expenses.example.in/health");
    }

    #[test]
    fn test_bearer_header_only_for_protected_endpoints() {
        let client = ApiClient::new(&ClientConfig::default()).with_token(Some("abc.def".to_string()));
        assert_eq!(client.bearer_header(&Endpoint::Categories).as_deref(), Some("Bearer abc.def"));
        assert_eq!(
            client.bearer_header(&Endpoint::Expense("42".to_string())).as_deref(),
            Some("Bearer abc.def")
        );
        assert_eq!(client.bearer_header(&Endpoint::Login), None);
        assert_eq!(client.bearer_header(&Endpoint::Health), None);
    }

    #[test]
    fn test_no_header_without_token() {
        let client = ApiClient::new(&ClientConfig::default());
        assert_eq!(client.bearer_header(&Endpoint::Expenses), None);
    }

    #[test]
    fn test_report_failure_logs_out_only_on_401() {
        let logouts = Rc::new(Cell::new(0u32));
        let on_unauthorized = {
            let logouts = logouts.clone();
            Callback::from(move |_| logouts.set(logouts.get() + 1))
        };

        report_failure("expenses", "fetch expenses", &ApiError::Unauthorized, &on_unauthorized);
        assert_eq!(logouts.get(), 1);

        let server = ApiError::from_response(500, r#"{"detail": "Database unavailable"}"#);
        report_failure("expenses", "fetch expenses", &server, &on_unauthorized);
        report_failure(
            "budget",
            "fetch budget status",
            &ApiError::Network("connection refused".to_string()),
            &on_unauthorized,
        );
        assert_eq!(logouts.get(), 1);

        report_failure("budget", "save monthly plan", &ApiError::from_response(401, ""), &on_unauthorized);
        assert_eq!(logouts.get(), 2);
    }
}
