use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::checkout::dto::BorrowedBookDto;
use crate::checkout::repository::CheckoutRepository;
use crate::core::library::LibraryResult;
use crate::fees::domain::LateFeeService;
use crate::patrons::domain::PatronStatusService;
use crate::patrons::dto::PatronStatusDto;

pub(crate) struct PatronStatusServiceImpl {
    checkout_repository: Box<dyn CheckoutRepository>,
    late_fee_service: Box<dyn LateFeeService>,
}

impl PatronStatusServiceImpl {
    pub(crate) fn new(checkout_repository: Box<dyn CheckoutRepository>, late_fee_service: Box<dyn LateFeeService>) -> Self {
        Self {
            checkout_repository,
            late_fee_service,
        }
    }
}

#[async_trait]
impl PatronStatusService for PatronStatusServiceImpl {
    async fn status_report(&self, patron_id: &str) -> LibraryResult<PatronStatusDto> {
        let borrowed = self.checkout_repository.find_borrowed(patron_id).await?;
        let mut total_late_fees = Decimal::ZERO;
        for record in borrowed.iter() {
            match self.late_fee_service.calculate_late_fee(patron_id, record.book_id.as_str()).await {
                Ok(quote) if quote.is_due() => total_late_fees += quote.fee_amount,
                Ok(_) => {}
                Err(err) => tracing::debug!(patron_id, book_id = record.book_id.as_str(), "fee left out of total: {}", err),
            }
        }
        total_late_fees.rescale(2);
        let count = self.checkout_repository.count_borrowed(patron_id).await?;
        let currently_borrowed = borrowed.iter().map(BorrowedBookDto::from).collect();
        Ok(PatronStatusDto::new(patron_id, currently_borrowed, total_late_fees, count))
    }
}
