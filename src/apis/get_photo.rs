use crate::*;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

#[derive(Deserialize)]
struct PhotoResponse {
    picture: Picture,
}

#[derive(Deserialize)]
struct Picture {
    data: PictureData,
}

#[derive(Deserialize)]
struct PictureData {
    url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub data: Vec<u8>,
    pub content_type: String,
}

impl<F: Fetcher> Fbauth<F> {
    /// Downloads the profile picture closest to `width` pixels wide.
    pub async fn get_photo(
        &self,
        access_token: &str,
        width: u32,
        log: impl Fn(LogParams),
    ) -> Result<Photo, FbauthError> {
        let field = format!("picture.width({})", width);
        let res: Fetched<PhotoResponse> = self.fetch(access_token, &[field.as_str()], &log).await?;
        let url = res.value.picture.data.url;

        let response = Fetcher::get(&self.fetcher, &url)
            .await
            .map_err(|e| FbauthError::ImageFetch(Box::new(e)))?
            .error_for_status()
            .map_err(|e| FbauthError::ImageFetch(Box::new(e)))?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let data = response
            .bytes()
            .await
            .map_err(|e| FbauthError::ImageFetch(Box::new(e)))?;

        Ok(Photo {
            data: data.to_vec(),
            content_type,
        })
    }
}

pub async fn get_photo<F: Fetcher>(
    access_token: &str,
    width: u32,
    fetcher: &F,
) -> Result<Photo, FbauthError> {
    Fbauth::new(fetcher)
        .get_photo(access_token, width, |_| {})
        .await
}
