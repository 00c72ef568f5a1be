use crate::*;
use serde::Deserialize;

#[derive(Deserialize)]
struct IdentityResponse {
    #[serde(default)]
    id: serde_json::Value,
}

impl<F: Fetcher> Fbauth<F> {
    /// Checks that `access_token` belongs to the facebook user `fbid`.
    pub async fn authenticate(
        &self,
        access_token: &str,
        fbid: &str,
        log: impl Fn(LogParams),
    ) -> Result<(), FbauthError> {
        if access_token.is_empty() {
            return Err(FbauthError::MissingToken);
        }
        if fbid.is_empty() {
            return Err(FbauthError::MissingId);
        }

        let res: Fetched<IdentityResponse> = self.fetch(access_token, &["id"], &log).await?;
        match res.value.id {
            serde_json::Value::String(ref id) if id == fbid => Ok(()),
            received => Err(FbauthError::IdentityMismatch {
                received,
                expected: fbid.to_owned(),
            }),
        }
    }
}

pub async fn authenticate<F: Fetcher>(
    access_token: &str,
    fbid: &str,
    fetcher: &F,
) -> Result<(), FbauthError> {
    Fbauth::new(fetcher)
        .authenticate(access_token, fbid, |_| {})
        .await
}
