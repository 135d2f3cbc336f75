//! Backend handle: the five invoice RPCs behind a trait.

use async_trait::async_trait;
use tonic::transport::Channel;
use tracing::debug;

use super::error::{InvoiceError, InvoiceResult};
use super::model::InvoiceRecord;
use super::proto::{
    CreateInvoiceRequest, DeleteInvoiceRequest, GetAllInvoicesRequest, GetInvoiceRequest,
    Invoice, InvoiceServiceClient, UpdateInvoiceRequest,
};

/// A connection to the invoice backend, owned by a single invocation.
///
/// Implementations return the backend record unchanged; failures carry the
/// backend status verbatim.
#[async_trait]
pub trait InvoiceBackend: Send {
    /// `GetAllInvoices`.
    async fn list_all(&mut self, request: GetAllInvoicesRequest)
    -> InvoiceResult<Vec<InvoiceRecord>>;

    /// `GetInvoiceByID`.
    async fn get_by_id(&mut self, request: GetInvoiceRequest) -> InvoiceResult<InvoiceRecord>;

    /// `CreateInvoice`.
    async fn create(&mut self, request: CreateInvoiceRequest) -> InvoiceResult<InvoiceRecord>;

    /// `UpdateInvoice`.
    async fn update(&mut self, request: UpdateInvoiceRequest) -> InvoiceResult<InvoiceRecord>;

    /// `DeleteInvoice`.
    async fn delete(&mut self, request: DeleteInvoiceRequest) -> InvoiceResult<InvoiceRecord>;
}

/// [`InvoiceBackend`] over a tonic channel.
#[derive(Debug, Clone)]
pub struct GrpcInvoiceBackend {
    client: InvoiceServiceClient<Channel>,
}

impl GrpcInvoiceBackend {
    /// Wrap an already connected channel.
    pub fn new(channel: Channel) -> Self {
        Self {
            client: InvoiceServiceClient::new(channel),
        }
    }
}

/// Single-invoice responses must carry the invoice; anything else is a
/// malformed reply.
fn require_invoice(invoice: Option<Invoice>, rpc: &str) -> InvoiceResult<InvoiceRecord> {
    invoice
        .map(InvoiceRecord::from)
        .ok_or_else(|| InvoiceError::malformed_response(format!("{} returned no invoice", rpc)))
}

#[async_trait]
impl InvoiceBackend for GrpcInvoiceBackend {
    async fn list_all(
        &mut self,
        request: GetAllInvoicesRequest,
    ) -> InvoiceResult<Vec<InvoiceRecord>> {
        let response = self.client.get_all_invoices(request).await?.into_inner();
        debug!(count = response.invoices.len(), "GetAllInvoices returned");
        Ok(response.invoices.into_iter().map(InvoiceRecord::from).collect())
    }

    async fn get_by_id(&mut self, request: GetInvoiceRequest) -> InvoiceResult<InvoiceRecord> {
        let response = self.client.get_invoice_by_id(request).await?.into_inner();
        require_invoice(response.invoice, "GetInvoiceByID")
    }

    async fn create(&mut self, request: CreateInvoiceRequest) -> InvoiceResult<InvoiceRecord> {
        let response = self.client.create_invoice(request).await?.into_inner();
        require_invoice(response.invoice, "CreateInvoice")
    }

    async fn update(&mut self, request: UpdateInvoiceRequest) -> InvoiceResult<InvoiceRecord> {
        let response = self.client.update_invoice(request).await?.into_inner();
        require_invoice(response.invoice, "UpdateInvoice")
    }

    async fn delete(&mut self, request: DeleteInvoiceRequest) -> InvoiceResult<InvoiceRecord> {
        let response = self.client.delete_invoice(request).await?.into_inner();
        require_invoice(response.invoice, "DeleteInvoice")
    }
}
