use async_trait::async_trait;

/// Anything that can perform an HTTP GET for a url, e.g. `reqwest::Client`
/// or a sandboxed platform fetch.
#[async_trait]
pub trait Fetcher: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get(&self, url: &str) -> Result<reqwest::Response, Self::Error>;
}

#[async_trait]
impl Fetcher for reqwest::Client {
    type Error = reqwest::Error;

    async fn get(&self, url: &str) -> Result<reqwest::Response, Self::Error> {
        reqwest::Client::get(self, url).send().await
    }
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for &F {
    type Error = F::Error;

    async fn get(&self, url: &str) -> Result<reqwest::Response, Self::Error> {
        F::get(*self, url).await
    }
}
