pub mod allele_pair;
pub mod combination_engine;
pub mod genome;
pub mod offspring;
pub mod operators;
pub mod registry;

pub use allele_pair::AllelePair;
pub use combination_engine::CombinationEngine;
pub use genome::Genome;
pub use offspring::Offspring;
pub use registry::{MutationRegistry, MutationRule};
