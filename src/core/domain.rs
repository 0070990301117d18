use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts circulation policy options for a library branch
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    // a patron holding more than this many open borrow records is refused
    pub max_borrowed_books: usize,
    pub book_loan_days: i64,
    pub events_via: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_borrowed_books: 5,
            book_loan_days: 14,
            events_via: GatewayPublisherVia::Logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(5, config.max_borrowed_books);
        assert_eq!(14, config.book_loan_days);
        assert_eq!(GatewayPublisherVia::Logs, config.events_via);
    }
}
