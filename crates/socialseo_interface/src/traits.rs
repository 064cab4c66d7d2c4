//! Backend trait.

use async_trait::async_trait;
use socialseo_core::{ContentRequest, ContentResponse};
use socialseo_error::SocialSeoResult;
use std::sync::Arc;

/// Core trait every content-analysis backend implements.
///
/// One call sends one request and waits for the whole reply. There is no
/// streaming or retry at this layer.
#[async_trait]
pub trait GenerativeDriver: Send + Sync {
    /// Send a fully built request and return the reply.
    async fn generate(&self, req: &ContentRequest) -> SocialSeoResult<ContentResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;

    /// Whether a credential is configured.
    ///
    /// Checked by the form controller before any remote call.
    fn has_credential(&self) -> bool {
        true
    }
}

#[async_trait]
impl<T> GenerativeDriver for Arc<T>
where
    T: GenerativeDriver + ?Sized,
{
    async fn generate(&self, req: &ContentRequest) -> SocialSeoResult<ContentResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn has_credential(&self) -> bool {
        (**self).has_credential()
    }
}
