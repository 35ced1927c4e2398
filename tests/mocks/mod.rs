pub mod mock_post_repository;

pub use mock_post_repository::MockPostRepository;
