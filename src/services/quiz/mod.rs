//! Quiz answers → user score vector.
pub mod accumulator;
pub mod score_vector;
pub mod session;

pub use accumulator::accumulate;
pub use score_vector::UserScoreVector;
pub use session::QuizSession;
