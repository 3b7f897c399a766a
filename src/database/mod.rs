pub mod candidate_repo;
pub mod settings_repo;
