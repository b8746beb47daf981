pub mod orchestrator;
pub mod placeholder;
pub mod state;

pub use orchestrator::{SessionOrchestrator, StudyGateway};
pub use state::{AudioPhase, QuizPhase, SessionEvent, SessionState, TranslationPhase};
