//! # Dashboard App State
//!
//! Form buffers, focus and the status line. Key events arrive from
//! `tui::ui` as calls on [`App`].

use std::path::PathBuf;
use std::str::FromStr;

use camel_core::{
    validation::parse_quantity, EntryForm, Item, Money, PaymentMethod, MIN_QUANTITY, MONEY_STEP,
};
use chrono::{Duration, NaiveDate};
use tracing::warn;

use crate::commands::{entry, report};
use crate::error::{AppError, AppResult};
use crate::state::{ConfigState, LedgerState};

// =============================================================================
// Form Fields
// =============================================================================

/// Entry form fields, in focus order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Date,
    Item,
    Quantity,
    BuyingPrice,
    SellingPrice,
    PaymentMethod,
    Debt,
    Transport,
    Workers,
    Slaughter,
    Other,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Date,
        Field::Item,
        Field::Quantity,
        Field::BuyingPrice,
        Field::SellingPrice,
        Field::PaymentMethod,
        Field::Debt,
        Field::Transport,
        Field::Workers,
        Field::Slaughter,
        Field::Other,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Item => "Item",
            Field::Quantity => "Quantity (kg)",
            Field::BuyingPrice => "Buying Price per kg",
            Field::SellingPrice => "Selling Price per kg",
            Field::PaymentMethod => "Payment Method",
            Field::Debt => "Debt Amount",
            Field::Transport => "Transport Cost",
            Field::Workers => "Workers Cost",
            Field::Slaughter => "Slaughter Fee",
            Field::Other => "Other Expenses",
        }
    }

    /// Fields picked from a fixed set rather than typed.
    pub const fn is_choice(&self) -> bool {
        matches!(self, Field::Item | Field::PaymentMethod)
    }

    pub const fn is_money(&self) -> bool {
        matches!(
            self,
            Field::BuyingPrice
                | Field::SellingPrice
                | Field::Debt
                | Field::Transport
                | Field::Workers
                | Field::Slaughter
                | Field::Other
        )
    }
}

// =============================================================================
// Form Input
// =============================================================================

/// Raw text of each typed field plus the two choices.
///
/// The debt buffer is kept while the payment method is not Debt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormInput {
    pub date: String,
    pub item: Item,
    pub quantity: String,
    pub buying_price: String,
    pub selling_price: String,
    pub payment_method: PaymentMethod,
    pub debt: String,
    pub transport: String,
    pub workers: String,
    pub slaughter: String,
    pub other: String,
}

impl FormInput {
    /// A blank form dated `today`, every widget at its minimum.
    pub fn new(today: NaiveDate) -> Self {
        let zero = Money::zero().to_string();
        FormInput {
            date: today.format("%Y-%m-%d").to_string(),
            item: Item::default(),
            quantity: MIN_QUANTITY.to_string(),
            buying_price: zero.clone(),
            selling_price: zero.clone(),
            payment_method: PaymentMethod::default(),
            debt: zero.clone(),
            transport: zero.clone(),
            workers: zero.clone(),
            slaughter: zero.clone(),
            other: zero,
        }
    }

    /// Text shown for `field`.
    pub fn display(&self, field: Field) -> String {
        match field {
            Field::Item => self.item.label().to_string(),
            Field::PaymentMethod => self.payment_method.label().to_string(),
            other => self.buffer(other).cloned().unwrap_or_default(),
        }
    }

    fn buffer(&self, field: Field) -> Option<&String> {
        match field {
            Field::Date => Some(&self.date),
            Field::Quantity => Some(&self.quantity),
            Field::BuyingPrice => Some(&self.buying_price),
            Field::SellingPrice => Some(&self.selling_price),
            Field::Debt => Some(&self.debt),
            Field::Transport => Some(&self.transport),
            Field::Workers => Some(&self.workers),
            Field::Slaughter => Some(&self.slaughter),
            Field::Other => Some(&self.other),
            Field::Item | Field::PaymentMethod => None,
        }
    }

    fn buffer_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Date => Some(&mut self.date),
            Field::Quantity => Some(&mut self.quantity),
            Field::BuyingPrice => Some(&mut self.buying_price),
            Field::SellingPrice => Some(&mut self.selling_price),
            Field::Debt => Some(&mut self.debt),
            Field::Transport => Some(&mut self.transport),
            Field::Workers => Some(&mut self.workers),
            Field::Slaughter => Some(&mut self.slaughter),
            Field::Other => Some(&mut self.other),
            Field::Item | Field::PaymentMethod => None,
        }
    }

    /// Parses every buffer into an [`EntryForm`].
    ///
    /// Blank money fields count as zero. The debt buffer is only parsed when
    /// the payment method is Debt.
    pub fn to_form(&self) -> AppResult<EntryForm> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::validation("Date must be YYYY-MM-DD"))?;

        let quantity = parse_quantity(&self.quantity).map_err(|e| AppError::validation(e.to_string()))?;

        let debt = if self.payment_method.is_debt() {
            parse_money(Field::Debt, &self.debt)?
        } else {
            Money::zero()
        };

        Ok(EntryForm {
            date,
            item: self.item,
            quantity,
            buying_price: parse_money(Field::BuyingPrice, &self.buying_price)?,
            selling_price: parse_money(Field::SellingPrice, &self.selling_price)?,
            payment_method: self.payment_method,
            debt,
            transport: parse_money(Field::Transport, &self.transport)?,
            workers: parse_money(Field::Workers, &self.workers)?,
            slaughter: parse_money(Field::Slaughter, &self.slaughter)?,
            other: parse_money(Field::Other, &self.other)?,
        })
    }
}

fn parse_money(field: Field, text: &str) -> AppResult<Money> {
    if text.trim().is_empty() {
        return Ok(Money::zero());
    }
    Money::from_str(text).map_err(|e| AppError::validation(format!("{}: {}", field.label(), e)))
}

// =============================================================================
// Status Line
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Error(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Success(text) | Status::Error(text) => text,
        }
    }
}

// =============================================================================
// App
// =============================================================================

pub struct App {
    pub ledger: LedgerState,
    pub config: ConfigState,
    pub today: NaiveDate,
    pub input: FormInput,
    pub focus: Field,
    pub status: Option<Status>,
    /// Rows scrolled back from the newest record. 0 keeps the newest rows
    /// in view.
    pub records_scroll: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(ledger: LedgerState, config: ConfigState, today: NaiveDate) -> Self {
        App {
            ledger,
            config,
            today,
            input: FormInput::new(today),
            focus: Field::Date,
            status: None,
            records_scroll: 0,
            should_quit: false,
        }
    }

    /// Whether `field` currently accepts input. Debt is only editable for a
    /// debt sale.
    pub fn is_enabled(&self, field: Field) -> bool {
        field != Field::Debt || self.input.payment_method.is_debt()
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(Field::ALL.len() - 1);
    }

    fn move_focus(&mut self, step: usize) {
        let len = Field::ALL.len();
        let mut idx = Field::ALL.iter().position(|f| *f == self.focus).unwrap_or(0);
        loop {
            idx = (idx + step) % len;
            if self.is_enabled(Field::ALL[idx]) {
                break;
            }
        }
        self.focus = Field::ALL[idx];
    }

    /// Types a character into the focused text field.
    pub fn type_char(&mut self, c: char) {
        let accepted = match self.focus {
            Field::Date => c.is_ascii_digit() || c == '-',
            Field::Quantity => c.is_ascii_digit(),
            f if f.is_money() => c.is_ascii_digit() || c == '.' || c == ',',
            _ => false,
        };
        if !accepted || !self.is_enabled(self.focus) {
            return;
        }
        if let Some(buffer) = self.input.buffer_mut(self.focus) {
            buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_enabled(self.focus) {
            return;
        }
        if let Some(buffer) = self.input.buffer_mut(self.focus) {
            buffer.pop();
        }
    }

    /// Up/Down: steps numbers (and the date), cycles choices.
    ///
    /// Quantity moves by 1 and money by 50, never below the minimum. A
    /// buffer that does not parse is left alone.
    pub fn nudge(&mut self, up: bool) {
        if !self.is_enabled(self.focus) {
            return;
        }
        match self.focus {
            Field::Item | Field::PaymentMethod => self.cycle(up),
            Field::Date => {
                if let Ok(date) = NaiveDate::parse_from_str(self.input.date.trim(), "%Y-%m-%d") {
                    let days = if up { 1 } else { -1 };
                    self.input.date = (date + Duration::days(days)).format("%Y-%m-%d").to_string();
                }
            }
            Field::Quantity => {
                let current = self.input.quantity.trim().parse::<i64>().unwrap_or(MIN_QUANTITY);
                let next = if up { current.saturating_add(1) } else { current - 1 };
                self.input.quantity = next.max(MIN_QUANTITY).to_string();
            }
            field => {
                let Some(buffer) = self.input.buffer_mut(field) else {
                    return;
                };
                let current = if buffer.trim().is_empty() {
                    Money::zero()
                } else {
                    match Money::from_str(buffer) {
                        Ok(m) => m,
                        Err(_) => return,
                    }
                };
                let next = if up {
                    current.checked_add(MONEY_STEP).unwrap_or(current)
                } else {
                    current - MONEY_STEP
                };
                *buffer = next.max(Money::zero()).to_string();
            }
        }
    }

    /// Left/Right: cycles the item or payment method.
    pub fn cycle(&mut self, forward: bool) {
        match self.focus {
            Field::Item => {
                self.input.item = if forward {
                    self.input.item.next()
                } else {
                    self.input.item.prev()
                };
            }
            Field::PaymentMethod => {
                self.input.payment_method = if forward {
                    self.input.payment_method.next()
                } else {
                    self.input.payment_method.prev()
                };
            }
            _ => {}
        }
    }

    /// PageUp: moves the records table towards the oldest rows.
    pub fn scroll_records_up(&mut self, rows: usize) {
        let len = self.ledger.records().len();
        self.records_scroll = self.records_scroll.saturating_add(rows).min(len);
    }

    /// PageDown: moves the records table towards the newest rows.
    pub fn scroll_records_down(&mut self, rows: usize) {
        self.records_scroll = self.records_scroll.saturating_sub(rows);
    }

    /// Home: the first record.
    pub fn scroll_records_to_top(&mut self) {
        self.records_scroll = self.ledger.records().len();
    }

    /// End: back to following the newest record.
    pub fn scroll_records_to_bottom(&mut self) {
        self.records_scroll = 0;
    }

    /// Index of the first table row to draw when `visible` rows fit.
    pub fn records_offset(&self, visible: usize) -> usize {
        let newest_page = self.ledger.records().len().saturating_sub(visible);
        newest_page.saturating_sub(self.records_scroll)
    }

    /// Enter: validates, appends and saves.
    pub fn submit(&mut self) {
        let result = self
            .input
            .to_form()
            .and_then(|form| entry::submit_entry(&mut self.ledger, &form));

        self.status = Some(match result {
            Ok(confirmation) => {
                self.records_scroll = 0;
                Status::Success(confirmation.message(&self.config.currency_label))
            }
            Err(e) => {
                warn!(code = e.code.as_str(), "Entry rejected: {}", e.message);
                Status::Error(e.to_string())
            }
        });
    }

    /// Ctrl-E: writes today's report.
    pub fn export(&mut self) -> Option<PathBuf> {
        match report::export_report(&self.ledger, &self.config, self.today) {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.status = Some(Status::Success(format!("Report exported as {}", name)));
                Some(path)
            }
            Err(e) => {
                self.status = Some(Status::Error(e.to_string()));
                None
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::{sale, MemoryStore};
    use camel_core::RecordSet;

    pub(crate) fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    pub(crate) fn app_with(store: MemoryStore) -> App {
        let ledger = LedgerState::load(Box::new(store)).unwrap();
        App::new(ledger, ConfigState::default(), day())
    }

    fn fill_example(app: &mut App) {
        app.input.quantity = "10".into();
        app.input.buying_price = "300".into();
        app.input.selling_price = "500".into();
        app.input.transport = "200".into();
        app.input.workers = "100".into();
        app.input.slaughter = "50".into();
    }

    #[test]
    fn test_new_form_defaults() {
        let app = app_with(MemoryStore::default());
        assert_eq!(app.input.date, "2025-03-14");
        assert_eq!(app.input.quantity, "1");
        assert_eq!(app.input.buying_price, "0");
        assert_eq!(app.focus, Field::Date);
    }

    #[test]
    fn test_focus_skips_debt_unless_debt_sale() {
        let mut app = app_with(MemoryStore::default());
        app.focus = Field::PaymentMethod;
        app.focus_next();
        assert_eq!(app.focus, Field::Transport);

        app.focus = Field::PaymentMethod;
        app.cycle(false); // Cash -> Debt
        assert_eq!(app.input.payment_method, PaymentMethod::Debt);
        app.focus_next();
        assert_eq!(app.focus, Field::Debt);

        app.focus_prev();
        assert_eq!(app.focus, Field::PaymentMethod);
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = app_with(MemoryStore::default());
        app.focus_prev();
        assert_eq!(app.focus, Field::Other);
        app.focus_next();
        assert_eq!(app.focus, Field::Date);
    }

    #[test]
    fn test_nudge_steps_and_clamps() {
        let mut app = app_with(MemoryStore::default());

        app.focus = Field::Quantity;
        app.nudge(false);
        assert_eq!(app.input.quantity, "1");
        app.nudge(true);
        app.nudge(true);
        assert_eq!(app.input.quantity, "3");

        app.focus = Field::SellingPrice;
        app.nudge(true);
        app.nudge(true);
        assert_eq!(app.input.selling_price, "100");
        app.nudge(false);
        app.nudge(false);
        app.nudge(false);
        assert_eq!(app.input.selling_price, "0");

        app.focus = Field::Date;
        app.nudge(true);
        assert_eq!(app.input.date, "2025-03-15");
    }

    #[test]
    fn test_typing_filters_characters() {
        let mut app = app_with(MemoryStore::default());
        app.focus = Field::Quantity;
        app.input.quantity.clear();
        for c in "1x2.".chars() {
            app.type_char(c);
        }
        assert_eq!(app.input.quantity, "12");

        app.focus = Field::BuyingPrice;
        app.backspace();
        for c in "312.5".chars() {
            app.type_char(c);
        }
        assert_eq!(app.input.buying_price, "312.5");
    }

    #[test]
    fn test_debt_buffer_kept_but_ignored_for_cash() {
        let mut app = app_with(MemoryStore::default());
        fill_example(&mut app);
        app.input.payment_method = PaymentMethod::Debt;
        app.input.debt = "500".into();

        app.input.payment_method = PaymentMethod::Cash;
        app.focus = Field::Debt;
        app.type_char('9');
        assert_eq!(app.input.debt, "500");

        let form = app.input.to_form().unwrap();
        assert!(form.debt.is_zero());

        app.input.payment_method = PaymentMethod::Debt;
        assert_eq!(app.input.to_form().unwrap().debt, Money::from_major(500));
    }

    #[test]
    fn test_submit_sets_success_status() {
        let mut app = app_with(MemoryStore::default());
        fill_example(&mut app);

        app.submit();

        assert_eq!(
            app.status,
            Some(Status::Success(
                "Record added successfully! Profit: 1,650 KES".to_string()
            ))
        );
        assert_eq!(app.ledger.records().len(), 1);
    }

    #[test]
    fn test_submit_bad_date_shows_error() {
        let mut app = app_with(MemoryStore::default());
        fill_example(&mut app);
        app.input.date = "14/03/2025".into();

        app.submit();

        match &app.status {
            Some(Status::Error(text)) => assert!(text.starts_with("[VALIDATION_ERROR]")),
            other => panic!("expected error status, got {other:?}"),
        }
        assert!(app.ledger.records().is_empty());
    }

    #[test]
    fn test_save_failure_shows_error_not_success() {
        let mut app = app_with(MemoryStore {
            fail_save: true,
            ..Default::default()
        });
        fill_example(&mut app);

        app.submit();

        match &app.status {
            Some(Status::Error(text)) => assert!(text.starts_with("[STORAGE_ERROR]")),
            other => panic!("expected error status, got {other:?}"),
        }
    }

    #[test]
    fn test_records_scroll_clamps() {
        let store = MemoryStore::default();
        store
            .saved
            .borrow_mut()
            .push(RecordSet::from_records(vec![sale(1); 30]));
        let mut app = app_with(store);

        assert_eq!(app.records_offset(10), 20);

        app.scroll_records_up(15);
        assert_eq!(app.records_offset(10), 5);
        app.scroll_records_up(15);
        assert_eq!(app.records_offset(10), 0);
        assert_eq!(app.records_scroll, 30);

        app.scroll_records_down(100);
        assert_eq!(app.records_offset(10), 20);

        app.scroll_records_to_top();
        assert_eq!(app.records_offset(10), 0);
        app.scroll_records_to_bottom();
        assert_eq!(app.records_offset(10), 20);
    }

    #[test]
    fn test_submit_returns_to_newest_rows() {
        let mut app = app_with(MemoryStore::default());
        fill_example(&mut app);
        app.submit();
        app.scroll_records_to_top();

        app.submit();

        assert_eq!(app.records_scroll, 0);
    }

    #[test]
    fn test_export_reports_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with(MemoryStore::default());
        app.config.report_dir = dir.path().to_path_buf();

        let path = app.export().unwrap();

        assert!(path.exists());
        assert_eq!(
            app.status,
            Some(Status::Success(
                "Report exported as Camel_Report_20250314.pdf".to_string()
            ))
        );
    }
}
