//! Application controller owning the ledger and every render-cycle collaborator.

pub mod form;

use thiserror::Error;
use tracing::debug;

use crate::{
    chart::{ChartAdapter, ChartBackend},
    config::{Config, TotalsScope},
    core::{
        clock::{Clock, IdGenerator},
        services::{LedgerView, SummaryService, TransactionService},
    },
    currency::CurrencyFormatter,
    domain::{Transaction, TransactionType, TypeFilter},
    errors::LedgerError,
    ledger::{filter_transactions, FilterCriteria, Ledger},
    storage::KeyValueStore,
};

pub use form::{validate_entry, FormError, FormVisibility, TransactionForm, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub type AppResult<T> = Result<T, AppError>;

/// Presentation backend fed with every projected view.
pub trait LedgerRenderer {
    fn render(&mut self, view: &LedgerView) -> Result<(), LedgerError>;
}

/// Renderer that keeps nothing; useful when only the returned view matters.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl LedgerRenderer for NullRenderer {
    fn render(&mut self, _view: &LedgerView) -> Result<(), LedgerError> {
        Ok(())
    }
}

/// Settings the controller reads from [`Config`].
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub storage_key: String,
    pub totals_scope: TotalsScope,
    pub formatter: CurrencyFormatter,
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            storage_key: config.storage_key.clone(),
            totals_scope: config.totals_scope,
            formatter: CurrencyFormatter::new(config.currency_symbol.clone()),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Injected collaborators.
pub struct Backends {
    pub storage: Box<dyn KeyValueStore>,
    pub renderer: Box<dyn LedgerRenderer>,
    pub chart: ChartAdapter,
    pub clock: Box<dyn Clock>,
}

pub struct AppController {
    ledger: Ledger,
    settings: AppSettings,
    storage: Box<dyn KeyValueStore>,
    renderer: Box<dyn LedgerRenderer>,
    chart: ChartAdapter,
    ids: IdGenerator,
    criteria: FilterCriteria,
    form: TransactionForm,
}

impl AppController {
    /// Loads the ledger from storage (falling back to the seed list).
    /// Nothing is rendered until [`render`](Self::render) is called.
    pub fn new(settings: AppSettings, backends: Backends) -> Self {
        let ledger = Ledger::load(backends.storage.as_ref(), &settings.storage_key);
        let ids = IdGenerator::new(backends.clock, ledger.max_id());
        Self {
            ledger,
            settings,
            storage: backends.storage,
            renderer: backends.renderer,
            chart: backends.chart,
            ids,
            criteria: FilterCriteria::default(),
            form: TransactionForm::default(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn form(&self) -> &TransactionForm {
        &self.form
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Renders the full, unfiltered ledger.
    pub fn render(&mut self) -> AppResult<LedgerView> {
        let totals = SummaryService::totals(self.ledger.transactions());
        let view = LedgerView::project(
            self.ledger.transactions(),
            totals,
            &self.settings.formatter,
        );
        self.present(view)
    }

    /// Renders the ledger through the active search text and type selector.
    pub fn apply_filters(&mut self) -> AppResult<LedgerView> {
        let visible = filter_transactions(self.ledger.transactions(), &self.criteria);
        let view = match self.settings.totals_scope {
            TotalsScope::Visible => LedgerView::from_records(&visible, &self.settings.formatter),
            TotalsScope::Ledger => {
                let totals = SummaryService::totals(self.ledger.transactions());
                LedgerView::project(visible, totals, &self.settings.formatter)
            }
        };
        self.present(view)
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> AppResult<LedgerView> {
        self.criteria.search = search.into();
        self.apply_filters()
    }

    pub fn set_type_filter(&mut self, kind: TypeFilter) -> AppResult<LedgerView> {
        self.criteria.kind = kind;
        self.apply_filters()
    }

    pub fn clear_filters(&mut self) -> AppResult<LedgerView> {
        self.criteria = FilterCriteria::default();
        self.apply_filters()
    }

    /// Takes over the filter and form of a controller being replaced. Nothing
    /// is rendered; follow with [`apply_filters`](Self::apply_filters).
    pub fn resume(&mut self, criteria: FilterCriteria, form: TransactionForm) {
        self.criteria = criteria;
        self.form = form;
    }

    pub fn open_form(&mut self) {
        self.form.open();
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    pub fn fill_form(&mut self, name: &str, amount: &str, kind: TransactionType) {
        self.form.fill(name, amount, kind);
    }

    /// Submits the open form. A valid entry is appended with a fresh id and a
    /// filter + render pass follows; an invalid one leaves everything as is.
    pub fn submit_form(&mut self) -> AppResult<(Transaction, LedgerView)> {
        let draft = self.form.submit()?;
        let transaction = TransactionService::record(&mut self.ledger, &mut self.ids, draft);
        let view = self.apply_filters()?;
        Ok((transaction, view))
    }

    fn present(&mut self, view: LedgerView) -> AppResult<LedgerView> {
        debug!(rows = view.rows.len(), "rendering ledger view");
        self.renderer.render(&view)?;
        self.chart.update(view.totals)?;
        self.ledger
            .persist(self.storage.as_mut(), &self.settings.storage_key)?;
        Ok(view)
    }
}

/// Builds a controller whose chart draws through `chart_backend`.
pub fn controller_with(
    config: &Config,
    storage: Box<dyn KeyValueStore>,
    renderer: Box<dyn LedgerRenderer>,
    chart_backend: Box<dyn ChartBackend>,
    clock: Box<dyn Clock>,
) -> AppController {
    let chart = ChartAdapter::new(chart_backend, config.chart.clone());
    AppController::new(
        AppSettings::from(config),
        Backends {
            storage,
            renderer,
            chart,
            clock,
        },
    )
}
