pub mod plan;
pub mod providers;

pub use plan::PlanService;
pub use providers::gemini::GeminiClient;
pub use providers::{ContentGenerator, UpstreamError};
