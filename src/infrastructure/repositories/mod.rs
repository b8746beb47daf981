pub mod huggingface_repository;
pub mod inference_repository;


pub use huggingface_repository::HuggingFaceRepository;
pub use inference_repository::{InferenceError, InferenceRepository};
