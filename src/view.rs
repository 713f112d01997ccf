/// Lookup view orchestration.
///
/// Owns the transient view state (loading flag, current result, input
/// buffer, history snapshot) and keeps it consistent across the one
/// user-facing workflow:
/// 1. Submit a postal code
/// 2. Query ViaCEP
/// 3. Reconcile the result with the persisted history
/// 4. Notify the user of the outcome
use crate::errors::AppError;
use crate::history::{HistoryList, HistoryRepository};
use crate::models::AddressRecord;
use crate::notify::{Notification, Notifier};
use crate::services::ViaCepService;

pub struct LookupView<R, N> {
    service: ViaCepService,
    repository: R,
    notifier: N,
    is_loading: bool,
    current_result: Option<AddressRecord>,
    history: HistoryList,
    input_buffer: String,
}

impl<R: HistoryRepository, N: Notifier> LookupView<R, N> {
    /// Builds the view and loads the persisted history once.
    pub fn new(service: ViaCepService, repository: R, notifier: N) -> Self {
        let history = repository.load();
        Self {
            service,
            repository,
            notifier,
            is_loading: false,
            current_result: None,
            history,
            input_buffer: String::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn current_result(&self) -> Option<&AddressRecord> {
        self.current_result.as_ref()
    }

    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mirrors typing into the input widget.
    pub fn set_input(&mut self, text: &str) {
        self.input_buffer = text.to_string();
    }

    /// Handles a form submission: issues the lookup and reconciles the
    /// result with the persisted history.
    ///
    /// The loading flag returns to false on every path, exactly once.
    /// Submissions are serialized by the `&mut self` borrow, so a second
    /// lookup cannot start while one is outstanding.
    pub async fn submit_lookup(&mut self, raw_input: &str) {
        self.is_loading = true;
        self.current_result = None;
        self.input_buffer.clear();

        let outcome = self.run_lookup(raw_input).await;
        self.is_loading = false;

        match outcome {
            Ok(()) => {
                self.notifier.notify(Notification::success("Cep encontrado"));
            }
            Err(e) => {
                tracing::warn!("Lookup failed for input {:?}: {}", raw_input, e);
                self.notifier.notify(Notification::error(e.user_message()));
            }
        }
    }

    async fn run_lookup(&mut self, raw_input: &str) -> Result<(), AppError> {
        let record = self.service.lookup(raw_input).await?;

        // The result is displayed even if the history write below fails.
        self.current_result = Some(record.clone());

        if self.history.insert(record) {
            self.repository.save(&self.history)?;
        }

        Ok(())
    }

    /// Displays a previously looked-up record without a network call.
    ///
    /// Returns false when the index is out of range. Never mutates the
    /// history.
    pub fn select_from_history(&mut self, index: usize) -> bool {
        let Some(record) = self.history.get(index).cloned() else {
            return false;
        };

        self.input_buffer.clear();
        self.notifier
            .notify(Notification::info(format!("Cep {} selecionado", record.code)));
        self.current_result = Some(record);
        true
    }

    /// Clears the result panel. History and input are untouched.
    pub fn clear_result(&mut self) {
        self.current_result = None;
    }
}
