//! In-memory backend used by tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tonic::Status;

use super::proto::{
    CreateInvoiceRequest, DeleteInvoiceRequest, GetAllInvoicesRequest, GetInvoiceRequest,
    UpdateInvoiceRequest,
};
use super::{ConnectionProvider, InvoiceBackend, InvoiceError, InvoiceRecord, InvoiceResult};

#[derive(Debug, Default)]
struct Store {
    invoices: Vec<InvoiceRecord>,
    next_id: u64,
    updates: Vec<UpdateInvoiceRequest>,
    acquired: usize,
}

/// Provider handing out handles onto one shared in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    store: Arc<Mutex<Store>>,
    unreachable: bool,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose `acquire` always fails like a dead backend.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    /// Seed the store with records; ids are assigned `inv-1`, `inv-2`, ...
    pub fn with_invoices(self, invoices: &[(&str, &str, &str, f64)]) -> Self {
        {
            let mut store = self.store.lock().unwrap();
            for (name, status, method, amount) in invoices {
                store.next_id += 1;
                let id = format!("inv-{}", store.next_id);
                store.invoices.push(InvoiceRecord {
                    id,
                    name: name.to_string(),
                    status: status.to_string(),
                    method: method.to_string(),
                    amount: *amount,
                });
            }
        }
        self
    }

    /// Update requests seen by the backend, in order.
    pub fn updates(&self) -> Vec<UpdateInvoiceRequest> {
        self.store.lock().unwrap().updates.clone()
    }

    /// Number of handles handed out.
    pub fn acquired(&self) -> usize {
        self.store.lock().unwrap().acquired
    }
}

#[async_trait]
impl ConnectionProvider for MemoryProvider {
    async fn acquire(&self) -> InvoiceResult<Box<dyn InvoiceBackend>> {
        if self.unreachable {
            return Err(InvoiceError::connection("connection refused"));
        }
        self.store.lock().unwrap().acquired += 1;
        Ok(Box::new(MemoryBackend {
            store: self.store.clone(),
        }))
    }

    fn target(&self) -> String {
        "memory://invoices".to_string()
    }
}

struct MemoryBackend {
    store: Arc<Mutex<Store>>,
}

fn not_found(id: &str) -> InvoiceError {
    Status::not_found(format!("Fail to find invoice: record {} not found", id)).into()
}

#[async_trait]
impl InvoiceBackend for MemoryBackend {
    async fn list_all(
        &mut self,
        _request: GetAllInvoicesRequest,
    ) -> InvoiceResult<Vec<InvoiceRecord>> {
        Ok(self.store.lock().unwrap().invoices.clone())
    }

    async fn get_by_id(&mut self, request: GetInvoiceRequest) -> InvoiceResult<InvoiceRecord> {
        let store = self.store.lock().unwrap();
        store
            .invoices
            .iter()
            .find(|i| i.id == request.id)
            .cloned()
            .ok_or_else(|| not_found(&request.id))
    }

    async fn create(&mut self, request: CreateInvoiceRequest) -> InvoiceResult<InvoiceRecord> {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let record = InvoiceRecord {
            id: format!("inv-{}", store.next_id),
            name: request.name,
            status: request.status,
            method: request.method,
            amount: request.amount,
        };
        store.invoices.push(record.clone());
        Ok(record)
    }

    async fn update(&mut self, request: UpdateInvoiceRequest) -> InvoiceResult<InvoiceRecord> {
        let mut store = self.store.lock().unwrap();
        store.updates.push(request.clone());
        let record = store
            .invoices
            .iter_mut()
            .find(|i| i.id == request.id)
            .ok_or_else(|| not_found(&request.id))?;
        // Same rule as the reference backend: a present field overwrites.
        if let Some(name) = request.name {
            record.name = name;
        }
        if let Some(status) = request.status {
            record.status = status;
        }
        if let Some(method) = request.method {
            record.method = method;
        }
        if let Some(amount) = request.amount {
            record.amount = amount;
        }
        Ok(record.clone())
    }

    async fn delete(&mut self, request: DeleteInvoiceRequest) -> InvoiceResult<InvoiceRecord> {
        let mut store = self.store.lock().unwrap();
        let index = store
            .invoices
            .iter()
            .position(|i| i.id == request.id)
            .ok_or_else(|| not_found(&request.id))?;
        Ok(store.invoices.remove(index))
    }
}
