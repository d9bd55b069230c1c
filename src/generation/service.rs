use std::future::Future;

use super::error::ServiceError;
use super::types::{GenerationRequest, GenerationResult};

/// An external text-generation backend.
///
/// `Ok` means the service answered and the answer was decoded (which may
/// still be a domain error). `Err` means the call itself failed.
pub trait GenerationService: Send + Sync + 'static {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResult, ServiceError>> + Send;
}
