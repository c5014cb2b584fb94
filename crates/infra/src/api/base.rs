use super::{APIResponse, ApiError};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address: address.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn get_client(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        self.client.request(method, &url)
    }

    async fn send(&self, builder: RequestBuilder) -> APIResponse<Response> {
        builder.send().await.map_err(|_| ApiError::Network)
    }

    fn check_status_code(res: &Response, expected_status_code: StatusCode) -> APIResponse<()> {
        let status = res.status();
        if status != expected_status_code {
            return Err(ApiError::UnexpectedStatusCode(status));
        }
        Ok(())
    }

    async fn handle_api_response<T: DeserializeOwned>(
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        Self::check_status_code(&res, expected_status_code)?;
        res.json::<T>()
            .await
            .map_err(|_| ApiError::MalformedResponse)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.send(self.get_client(Method::GET, path)).await?;
        Self::handle_api_response(res, expected_status_code).await
    }

    /// Deletes are answered without a body
    pub async fn delete(&self, path: &str, expected_status_code: StatusCode) -> APIResponse<()> {
        let res = self.send(self.get_client(Method::DELETE, path)).await?;
        Self::check_status_code(&res, expected_status_code)
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: &S,
        path: &str,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .send(self.get_client(Method::PUT, path).json(body))
            .await?;
        Self::handle_api_response(res, expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: &S,
        path: &str,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .send(self.get_client(Method::POST, path).json(body))
            .await?;
        Self::handle_api_response(res, expected_status_code).await
    }
}
