use async_trait::async_trait;
use chrono::Utc;
use crate::catalog::domain::CatalogService;
use crate::checkout::repository::CheckoutRepository;
use crate::core::library::LibraryResult;
use crate::fees::domain::LateFeeService;
use crate::fees::dto::LateFeeQuote;
use crate::patrons::domain::model::PatronId;

pub(crate) struct LateFeeServiceImpl {
    checkout_repository: Box<dyn CheckoutRepository>,
    catalog_service: Box<dyn CatalogService>,
}

impl LateFeeServiceImpl {
    pub(crate) fn new(checkout_repository: Box<dyn CheckoutRepository>, catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            checkout_repository,
            catalog_service,
        }
    }
}

#[async_trait]
impl LateFeeService for LateFeeServiceImpl {
    async fn calculate_late_fee(&self, patron_id: &str, book_id: &str) -> LibraryResult<LateFeeQuote> {
        let patron = PatronId::parse(patron_id)?;
        let book = self.catalog_service.find_book_by_id(book_id).await?;
        let borrowed = self.checkout_repository.find_borrowed(patron.as_str()).await?;
        let quote = match borrowed.iter().find(|b| b.book_id == book.book_id) {
            Some(record) => LateFeeQuote::for_due_date(&record.due_at, &Utc::now().naive_utc()),
            None => LateFeeQuote::not_borrowed(),
        };
        tracing::debug!(patron_id, book_id, fee = %quote.fee_amount, days = quote.days_overdue, "late fee quoted");
        Ok(quote)
    }
}
