pub mod memory_repository;
pub mod post_repository;
pub mod supabase_repository;

pub use memory_repository::InMemoryPostRepository;
pub use post_repository::{PostRepository, PostgresPostRepository};
pub use supabase_repository::SupabasePostRepository;
