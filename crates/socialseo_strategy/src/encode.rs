//! Attachment to inline-part conversion.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::future::try_join_all;
use socialseo_core::{Attachment, AttachmentSource, RequestPart};
use socialseo_error::{AttachmentError, AttachmentErrorKind, SocialSeoResult};
use tracing::{debug, error, instrument};

/// Read one attachment to completion and base64-encode it.
///
/// # Errors
///
/// Returns an attachment-read error if a file-backed attachment cannot be
/// read.
#[instrument(skip(attachment), fields(name = %attachment.name(), mime = %attachment.mime_type()))]
pub async fn encode_attachment(attachment: &Attachment) -> SocialSeoResult<RequestPart> {
    let data = match attachment.source() {
        AttachmentSource::Bytes(bytes) => STANDARD.encode(bytes),
        AttachmentSource::Path(path) => {
            let bytes = tokio::fs::read(path).await.map_err(|e| {
                error!(path = %path.display(), error = %e, "Failed to read attachment");
                AttachmentError::new(AttachmentErrorKind::Read {
                    name: attachment.name().to_string(),
                    message: e.to_string(),
                })
            })?;
            STANDARD.encode(bytes)
        }
    };

    debug!(encoded_len = data.len(), "Encoded attachment");
    Ok(RequestPart::InlineData {
        mime_type: attachment.mime_type().to_string(),
        data,
    })
}

/// Encode every attachment concurrently, preserving order.
///
/// Resolves only after all encodings finish; the first failure aborts the
/// whole batch.
pub async fn encode_attachments<'a, I>(attachments: I) -> SocialSeoResult<Vec<RequestPart>>
where
    I: IntoIterator<Item = &'a Attachment>,
{
    try_join_all(attachments.into_iter().map(encode_attachment)).await
}
