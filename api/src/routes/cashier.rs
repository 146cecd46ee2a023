//! Cashier endpoints

use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::RecordTransactionRequest;
use crate::handlers::{handle_domain_error, RequestIdExt};
use crate::middleware::AuthContext;
use crate::state::AppState;

/// POST /api/cashier/transactions/
///
/// Records a purchase at the cashier's restaurant with its current discount.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "...",
///     "sum_before_discount": "150000.00"
/// }
/// ```
pub async fn record_transaction(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState>,
    request: web::Json<RecordTransactionRequest>,
) -> HttpResponse {
    let request_id = req.request_id();
    let RecordTransactionRequest {
        user_id,
        sum_before_discount,
    } = request.into_inner();

    match state
        .cashier_service
        .record_transaction(&auth.claims, user_id, sum_before_discount)
        .await
    {
        Ok(transaction) => {
            log::info!(
                "[{}] Cashier {} recorded transaction {}",
                request_id,
                auth.subject_id,
                transaction.id
            );
            HttpResponse::Created().json(transaction)
        }
        Err(error) => {
            log::warn!("[{}] Transaction rejected: {}", request_id, error);
            handle_domain_error(error)
        }
    }
}
