pub mod allergy_repository;
