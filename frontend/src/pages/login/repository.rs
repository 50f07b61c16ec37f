use crate::api::{ApiClient, ApiError, AuthResponse, LoginRequest, RegisterRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl AuthRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client.login(request).await
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client.register(request).await
    }
}
