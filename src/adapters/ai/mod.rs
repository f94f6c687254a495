//! AI adapters - implementations of the reply generator port.

mod mock_generator;
mod offline_generator;
mod openai_generator;

pub use mock_generator::MockGenerator;
pub use offline_generator::OfflineGenerator;
pub use openai_generator::{OpenAiGenerator, OpenAiGeneratorConfig};
