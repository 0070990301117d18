use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::utils::memory::MemoryClient;

pub fn create_book_repository(client: &MemoryClient) -> Box<dyn BookRepository> {
    Box::new(MemoryBookRepository::new(client.clone()))
}
