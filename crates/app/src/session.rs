//! One user's session: gate, navigation, menu and CRUD screen.

use std::sync::Arc;

use serde::Serialize;

use storefront_auth::{AccessControl, AccessGate, BasicAccessControl, Role};
use storefront_core::DomainResult;
use storefront_crud::{CrudSnapshot, CrudViewLogic, Notification};
use storefront_navigation::{
    MenuItem, NavCommand, NavigationController, NavigationMenu, NavigationOutcome,
    NavigationToolbar,
};
use storefront_products::{Category, ProductCatalog};

use crate::command::UiCommand;
use crate::config::AppConfig;
use crate::views::{ABOUT_VIEW, INVENTORY_VIEW, ViewKind, build_registry};

/// Rendered state after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// What is drawn: the error view after a failed navigation, the login
    /// screen while sign-in is required.
    pub view: ViewKind,
    pub title: &'static str,
    /// Name of the navigator's current view (unchanged by failed navigation).
    pub current_view: String,
    pub signed_in: bool,
    pub principal: Option<String>,
    pub menu: Vec<MenuItem>,
    pub active_menu: Option<String>,
    /// Control id showing an error indicator, if any.
    pub error_indicator: Option<&'static str>,
    pub navigation: Option<NavigationOutcome>,
    pub notifications: Vec<Notification>,
    pub crud: Option<CrudSnapshot>,
}

/// Per-session wiring of the demo's collaborators.
pub struct Session {
    access: BasicAccessControl,
    navigation: NavigationController<ViewKind>,
    menu: Arc<NavigationMenu>,
    toolbar: NavigationToolbar,
    crud: CrudViewLogic,
    require_login: bool,
    admin_only_create: bool,
    rendered: ViewKind,
    error_indicator: Option<&'static str>,
    last_navigation: Option<NavigationOutcome>,
    pending: Vec<Notification>,
}

impl Session {
    /// Build a session over its own freshly seeded catalog.
    pub fn new(config: &AppConfig) -> DomainResult<Self> {
        let catalog = Arc::new(config.seed.build_catalog()?);
        Self::with_catalog(config, catalog, config.seed.categories.clone())
    }

    /// Build a session that shares `catalog` with other sessions.
    pub fn with_catalog(
        config: &AppConfig,
        catalog: Arc<ProductCatalog>,
        categories: Vec<Category>,
    ) -> DomainResult<Self> {
        let gate = Arc::new(AccessGate::new());
        let access = BasicAccessControl::new(Arc::clone(&gate));

        let mut menu = NavigationMenu::new();
        menu.add_view_button(INVENTORY_VIEW, INVENTORY_VIEW);
        menu.add_view_button(ABOUT_VIEW, ABOUT_VIEW);
        let menu = Arc::new(menu);

        let mut navigation = NavigationController::new(build_registry()?, gate)?;
        navigation.add_listener(menu.clone());

        let mut session = Self {
            access,
            navigation,
            menu,
            toolbar: NavigationToolbar,
            crud: CrudViewLogic::new(catalog, categories),
            require_login: config.require_login,
            admin_only_create: config.admin_only_create,
            rendered: ViewKind::Default,
            error_indicator: None,
            last_navigation: None,
            pending: Vec::new(),
        };
        session.apply_role_restrictions();

        if !config.start_view.is_empty() {
            session.navigate(&config.start_view)?;
        }
        session.last_navigation = None;

        tracing::info!(
            start_view = %session.navigation.current_view().name,
            require_login = session.require_login,
            "session started"
        );
        Ok(session)
    }

    pub fn gate(&self) -> &Arc<AccessGate> {
        self.navigation.gate()
    }

    pub fn crud(&self) -> &CrudViewLogic {
        &self.crud
    }

    fn login_required(&self) -> bool {
        self.require_login && !self.access.is_user_signed_in()
    }

    fn apply_role_restrictions(&mut self) {
        if self.admin_only_create {
            let is_admin = self.access.is_user_in_role(&Role::ADMIN);
            self.crud.set_new_product_enabled(is_admin);
        }
    }

    fn navigate(&mut self, state: &str) -> DomainResult<NavigationOutcome> {
        let outcome = self.navigation.navigate(state);
        self.rendered = self.navigation.render(&outcome)?;

        if let NavigationOutcome::Navigate { view, parameters } = &outcome {
            if view.name == INVENTORY_VIEW {
                self.crud.enter(parameters);
            }
        }

        self.last_navigation = Some(outcome.clone());
        Ok(outcome)
    }

    /// Handle one UI event and return the recomputed screen.
    ///
    /// `NotFound` from the catalog is returned as an error; everything the
    /// user can cause by typing becomes a notification.
    pub fn dispatch(&mut self, command: UiCommand) -> DomainResult<Screen> {
        self.error_indicator = None;
        self.last_navigation = None;

        match command {
            UiCommand::SignIn { username, password } => {
                if self.access.sign_in(&username, &password) {
                    self.apply_role_restrictions();
                    let current = self.navigation.current_view().name.clone();
                    self.rendered = self.navigation.registry().create(&current)?;
                } else {
                    self.pending.push(Notification::error(
                        "Login failed. Please check your username and password and try again.",
                    ));
                }
            }
            UiCommand::SignOut => {
                self.access.sign_out();
                self.apply_role_restrictions();
            }
            _ if self.login_required() => {
                self.pending.push(Notification::error("Please sign in first."));
            }
            UiCommand::Toolbar { control } => {
                let response = self.toolbar.apply(control, &mut self.navigation);
                if matches!(control, NavCommand::LogIn | NavCommand::LogOut) {
                    // The toolbar only flips the gate; logging out must drop the principal too.
                    if control == NavCommand::LogOut {
                        self.access.sign_out();
                    }
                    self.apply_role_restrictions();
                }
                if let Some(text) = response.notification {
                    self.pending.push(Notification::tray(text));
                }
                if let Some(outcome) = &response.navigation {
                    self.rendered = self.navigation.render(outcome)?;
                }
                if response.error_indicator {
                    self.error_indicator = Some(response.control_id);
                }
                self.last_navigation = response.navigation;
            }
            UiCommand::Navigate { state } => {
                self.navigate(&state)?;
            }
            UiCommand::Crud { command } => {
                if self.rendered != ViewKind::Inventory {
                    self.navigate(INVENTORY_VIEW)?;
                }
                let snapshot = self.crud.dispatch(command)?;
                self.pending.extend(snapshot.notifications);
            }
        }

        Ok(self.screen())
    }

    /// Current screen without handling a command.
    pub fn screen(&mut self) -> Screen {
        let view = if self.login_required() {
            ViewKind::Login
        } else {
            self.rendered
        };

        let mut notifications = std::mem::take(&mut self.pending);
        let crud = (view == ViewKind::Inventory).then(|| {
            let mut snapshot = self.crud.snapshot();
            notifications.append(&mut snapshot.notifications);
            snapshot
        });

        Screen {
            view,
            title: view.title(),
            current_view: self.navigation.current_view().name.clone(),
            signed_in: self.access.is_user_signed_in(),
            principal: self.access.principal_name(),
            menu: self.menu.items().to_vec(),
            active_menu: self.menu.active_view(),
            error_indicator: self.error_indicator,
            navigation: self.last_navigation.clone(),
            notifications,
            crud,
        }
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("navigation", &self.navigation)
            .field("rendered", &self.rendered)
            .field("signed_in", &self.access.is_user_signed_in())
            .finish()
    }
}
