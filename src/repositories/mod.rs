mod store_post_repository;
mod traits;

pub use store_post_repository::StorePostRepository;
pub use traits::PostRepository;
