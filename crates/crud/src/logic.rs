use std::sync::Arc;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ProductId};
use storefront_products::{Category, Product, ProductCatalog};

use crate::form::ProductForm;
use crate::grid::ProductRow;
use crate::notification::Notification;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 1024;

/// UI events the CRUD screen can raise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum CrudCommand {
    NewProduct,
    RowSelected(ProductId),
    Deselect,
    Cancel,
    Save(ProductForm),
    Delete(ProductId),
    FilterChanged(String),
    /// View entered with URL parameters (`""`, `"new"` or a product id).
    Enter(String),
}

/// Everything the renderer needs to draw the CRUD screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrudSnapshot {
    pub filter_text: String,
    pub rows: Vec<ProductRow>,
    pub selected_id: Option<ProductId>,
    /// Present while the editor is open.
    pub form: Option<ProductForm>,
    pub new_product_enabled: bool,
    pub notifications: Vec<Notification>,
}

/// Selection and editor state of one session's CRUD screen.
#[derive(Debug)]
pub struct CrudViewLogic {
    catalog: Arc<ProductCatalog>,
    categories: Vec<Category>,
    selected_id: Option<ProductId>,
    form_open: bool,
    editing: Option<Product>,
    filter_text: String,
    new_product_enabled: bool,
    pending: Vec<Notification>,
}

impl CrudViewLogic {
    pub fn new(catalog: Arc<ProductCatalog>, categories: Vec<Category>) -> Self {
        Self {
            catalog,
            categories,
            selected_id: None,
            form_open: false,
            editing: None,
            filter_text: String::new(),
            new_product_enabled: true,
            pending: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<ProductCatalog> {
        &self.catalog
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected_id(&self) -> Option<ProductId> {
        self.selected_id
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Product currently presented in the editor.
    pub fn presented(&self) -> Option<&Product> {
        self.editing.as_ref().filter(|_| self.form_open)
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn set_new_product_enabled(&mut self, enabled: bool) {
        self.new_product_enabled = enabled;
    }

    pub fn new_product(&mut self) {
        if !self.new_product_enabled {
            tracing::warn!("new product requested while creation is disabled");
            return;
        }
        self.selected_id = None;
        self.open_editor(Product::unsaved());
    }

    pub fn row_selected(&mut self, product: &Product) {
        self.selected_id = Some(product.id);
        self.open_editor(product.clone());
    }

    /// Grid selection cleared.
    pub fn deselect(&mut self) {
        self.selected_id = None;
        self.close_editor();
    }

    pub fn cancel_product(&mut self) {
        self.close_editor();
    }

    /// Validate and store `product`.
    ///
    /// A `Validation` error leaves the editor open and the catalog untouched;
    /// `NotFound` from the catalog is returned to the caller.
    pub fn save_product(&mut self, product: Product) -> DomainResult<Product> {
        let chars = product.product_name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
            self.editing = Some(product);
            return Err(DomainError::validation(format!(
                "Product name must have {NAME_MIN_CHARS} to {NAME_MAX_CHARS} characters"
            )));
        }

        let saved = self.catalog.save(product)?;
        self.selected_id = Some(saved.id);
        self.close_editor();
        self.pending.push(Notification::tray(format!(
            "{} ({}) updated",
            saved.product_name, saved.id
        )));
        Ok(saved)
    }

    pub fn delete_product(&mut self, product: &Product) -> DomainResult<()> {
        self.catalog.delete(product.id)?;
        if self.selected_id == Some(product.id) {
            self.selected_id = None;
        }
        self.close_editor();
        self.pending.push(Notification::tray(format!(
            "{} ({}) removed",
            product.product_name, product.id
        )));
        Ok(())
    }

    pub fn filter_changed(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    /// Apply the view parameters of a deep link.
    pub fn enter(&mut self, parameters: &str) {
        let parameters = parameters.trim();
        if parameters.is_empty() {
            return;
        }
        if parameters == "new" {
            self.new_product();
            return;
        }

        let found = parameters
            .parse::<ProductId>()
            .and_then(|id| self.catalog.get(id));
        match found {
            Ok(product) => self.row_selected(&product),
            Err(_) => {
                tracing::warn!(parameters, "deep link to unknown product");
                self.deselect();
                self.pending
                    .push(Notification::error(format!("Could not find product {parameters}")));
            }
        }
    }

    /// Run one UI command.
    ///
    /// Validation failures become error notifications; any other error is
    /// returned.
    pub fn dispatch(&mut self, command: CrudCommand) -> DomainResult<CrudSnapshot> {
        let result = match command {
            CrudCommand::NewProduct => {
                self.new_product();
                Ok(())
            }
            CrudCommand::RowSelected(id) => {
                let product = self.catalog.get(id)?;
                self.row_selected(&product);
                Ok(())
            }
            CrudCommand::Deselect => {
                self.deselect();
                Ok(())
            }
            CrudCommand::Cancel => {
                self.cancel_product();
                Ok(())
            }
            CrudCommand::Save(form) => form
                .commit(&self.categories)
                .and_then(|product| self.save_product(product))
                .map(|_| ()),
            CrudCommand::Delete(id) => {
                let product = self.catalog.get(id)?;
                self.delete_product(&product)
            }
            CrudCommand::FilterChanged(text) => {
                self.filter_changed(text);
                Ok(())
            }
            CrudCommand::Enter(parameters) => {
                self.enter(&parameters);
                Ok(())
            }
        };

        match result {
            Ok(()) => {}
            Err(DomainError::Validation(msg)) => {
                tracing::debug!(%msg, "form validation failed");
                self.pending.push(Notification::error(msg));
            }
            Err(err) => return Err(err),
        }

        Ok(self.snapshot())
    }

    /// Current screen state; pending notifications are handed over once.
    pub fn snapshot(&mut self) -> CrudSnapshot {
        CrudSnapshot {
            filter_text: self.filter_text.clone(),
            rows: self
                .catalog
                .filter(&self.filter_text)
                .iter()
                .map(ProductRow::from)
                .collect(),
            selected_id: self.selected_id,
            form: self.presented().map(ProductForm::edit),
            new_product_enabled: self.new_product_enabled,
            notifications: std::mem::take(&mut self.pending),
        }
    }

    fn open_editor(&mut self, product: Product) {
        self.editing = Some(product);
        self.form_open = true;
    }

    fn close_editor(&mut self) {
        self.editing = None;
        self.form_open = false;
    }
}
