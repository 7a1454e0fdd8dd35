use std::sync::Arc;

use storefront_app::{AppConfig, Screen, Session, UiCommand, ViewKind};
use storefront_core::{DomainError, ProductId};
use storefront_crud::{CrudCommand, NotificationKind};
use storefront_navigation::{NavCommand, NavigationError, NavigationOutcome};
use storefront_products::ProductCatalog;

fn session() -> Session {
    Session::new(&AppConfig::default()).expect("default config starts")
}

fn run(session: &mut Session, line: &str) -> Screen {
    let command: UiCommand = line.parse().expect("valid command");
    session.dispatch(command).expect("command succeeds")
}

fn click(session: &mut Session, control: NavCommand) -> Screen {
    session
        .dispatch(UiCommand::Toolbar { control })
        .expect("toolbar never fails")
}

#[test]
fn tutorial_navigation_scenario() {
    let mut s = session();
    let initial = s.screen();
    assert_eq!(initial.view, ViewKind::Default);
    assert_eq!(initial.title, "Default");

    // Gate closed: private is denied and the current view stays.
    let screen = click(&mut s, NavCommand::OpenPrivate);
    assert_eq!(screen.view, ViewKind::Error);
    assert_eq!(screen.error_indicator, Some("toPrivate"));
    assert_eq!(screen.current_view, "");
    assert!(matches!(
        screen.navigation,
        Some(NavigationOutcome::Error {
            reason: NavigationError::AccessDenied,
            ..
        })
    ));

    // Open the gate: private now succeeds.
    let screen = click(&mut s, NavCommand::LogIn);
    assert_eq!(screen.notifications[0].message, "Access Granted");
    let screen = click(&mut s, NavCommand::OpenPrivate);
    assert_eq!(screen.view, ViewKind::Private);
    assert_eq!(screen.error_indicator, None);

    // Close the gate: public views are unaffected.
    let screen = click(&mut s, NavCommand::LogOut);
    assert_eq!(screen.notifications[0].message, "Access Revoked");
    let screen = click(&mut s, NavCommand::OpenPublic);
    assert_eq!(screen.view, ViewKind::Public);
    assert_eq!(screen.current_view, "public");

    // Unknown view.
    let screen = click(&mut s, NavCommand::OpenWrong);
    assert_eq!(screen.view, ViewKind::Error);
    assert_eq!(screen.error_indicator, Some("toWrong"));
    assert_eq!(screen.current_view, "public");

    // The indicator is cleared by the next successful action.
    let screen = click(&mut s, NavCommand::OpenDefault);
    assert_eq!(screen.view, ViewKind::Default);
    assert_eq!(screen.error_indicator, None);
}

#[test]
fn menu_follows_current_view() {
    let mut s = session();
    let screen = run(&mut s, "go About");
    assert_eq!(screen.active_menu.as_deref(), Some("About"));

    let screen = run(&mut s, "go Inventory");
    assert_eq!(screen.active_menu.as_deref(), Some("Inventory"));
    assert!(screen.crud.is_some());

    let screen = run(&mut s, "go nowhere");
    assert_eq!(screen.view, ViewKind::Error);
    assert_eq!(screen.active_menu.as_deref(), Some("Inventory"));
    assert_eq!(screen.error_indicator, None);
}

#[test]
fn crud_create_update_delete_flow() {
    let mut s = session();
    let screen = run(&mut s, "go Inventory");
    let rows_before = screen.crud.as_ref().map(|c| c.rows.len()).unwrap_or_default();

    let screen = run(&mut s, "new");
    let mut form = screen.crud.and_then(|c| c.form).expect("editor open");
    assert!(!form.delete_enabled());

    form.product_name = "Ab".to_string();
    form.price = "3.5".to_string();
    let screen = s
        .dispatch(UiCommand::Crud {
            command: CrudCommand::Save(form),
        })
        .unwrap();
    let crud = screen.crud.expect("inventory shown");
    assert_eq!(crud.rows.len(), rows_before + 1);
    let new_id = crud.selected_id.expect("saved product selected");
    assert!(crud.form.is_none());
    assert_eq!(screen.notifications[0].kind, NotificationKind::Tray);

    let screen = run(&mut s, &format!("select {new_id}"));
    let mut form = screen.crud.and_then(|c| c.form).expect("editor open");
    assert!(form.delete_enabled());
    form.product_name = "Abacus".to_string();
    s.dispatch(UiCommand::Crud {
        command: CrudCommand::Save(form),
    })
    .unwrap();
    assert_eq!(s.crud().catalog().get(new_id).unwrap().product_name, "Abacus");

    let screen = run(&mut s, &format!("delete {new_id}"));
    let crud = screen.crud.unwrap();
    assert_eq!(crud.rows.len(), rows_before);
    assert_eq!(crud.selected_id, None);

    let err = s
        .dispatch(UiCommand::Crud {
            command: CrudCommand::Delete(new_id),
        })
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn invalid_name_is_reported_not_saved() {
    let mut s = session();
    let screen = run(&mut s, "new");
    assert_eq!(screen.view, ViewKind::Inventory);
    let rows_before = screen.crud.as_ref().unwrap().rows.len();
    let mut form = screen.crud.and_then(|c| c.form).unwrap();
    form.product_name = "A".to_string();

    let screen = s
        .dispatch(UiCommand::Crud {
            command: CrudCommand::Save(form),
        })
        .unwrap();
    assert_eq!(screen.notifications[0].kind, NotificationKind::Error);
    let crud = screen.crud.unwrap();
    assert!(crud.form.is_some());
    assert_eq!(crud.rows.len(), rows_before);
}

#[test]
fn filter_matches_categories() {
    let mut s = session();
    let screen = run(&mut s, "filter mystery");
    let names: Vec<_> = screen
        .crud
        .unwrap()
        .rows
        .into_iter()
        .map(|r| r.product_name)
        .collect();
    assert_eq!(
        names,
        vec!["The Secret of the Old Mill", "Murder at the Lighthouse"]
    );
}

#[test]
fn deep_link_selects_product() {
    let mut s = session();
    let screen = run(&mut s, "go Inventory/2");
    let crud = screen.crud.unwrap();
    assert_eq!(crud.selected_id, Some(ProductId::new(2)));
    assert_eq!(
        crud.form.map(|f| f.product_name),
        Some("The Secret of the Old Mill".to_string())
    );
}

#[test]
fn login_screen_blocks_until_signed_in() {
    let config = AppConfig {
        require_login: true,
        start_view: "Inventory".to_string(),
        ..AppConfig::default()
    };
    let mut s = Session::new(&config).unwrap();
    assert_eq!(s.screen().view, ViewKind::Login);

    let screen = run(&mut s, "go About");
    assert_eq!(screen.view, ViewKind::Login);
    assert_eq!(screen.notifications[0].kind, NotificationKind::Error);

    let screen = s
        .dispatch(UiCommand::SignIn {
            username: "   ".to_string(),
            password: String::new(),
        })
        .unwrap();
    assert_eq!(screen.view, ViewKind::Login);
    assert!(!screen.signed_in);

    let screen = run(&mut s, "login alice");
    assert_eq!(screen.view, ViewKind::Inventory);
    assert_eq!(screen.principal.as_deref(), Some("alice"));
    assert!(s.gate().is_open());

    let screen = run(&mut s, "logout");
    assert_eq!(screen.view, ViewKind::Login);
    assert!(!s.gate().is_open());
}

#[test]
fn toolbar_logout_ends_a_signed_in_session() {
    let config = AppConfig {
        require_login: true,
        ..AppConfig::default()
    };
    let mut s = Session::new(&config).unwrap();
    run(&mut s, "login alice");

    let screen = click(&mut s, NavCommand::LogOut);
    assert!(!screen.signed_in);
    assert_eq!(screen.principal, None);
    assert!(!s.gate().is_open());
    assert_eq!(screen.view, ViewKind::Login);

    run(&mut s, "login bob");
    let screen = click(&mut s, NavCommand::OpenPrivate);
    assert_eq!(screen.view, ViewKind::Private);
    assert_eq!(screen.principal.as_deref(), Some("bob"));
}

#[test]
fn toolbar_login_signs_in_anonymously() {
    let mut s = session();
    run(&mut s, "login alice");
    click(&mut s, NavCommand::LogOut);

    let screen = click(&mut s, NavCommand::LogIn);
    assert!(screen.signed_in);
    assert_eq!(screen.principal, None);
    assert_eq!(screen.signed_in, s.gate().is_open());

    let screen = click(&mut s, NavCommand::OpenPrivate);
    assert_eq!(screen.view, ViewKind::Private);
}

#[test]
fn admin_only_create_disables_new_product() {
    let config = AppConfig {
        admin_only_create: true,
        ..AppConfig::default()
    };
    let mut s = Session::new(&config).unwrap();

    let screen = run(&mut s, "new");
    let crud = screen.crud.unwrap();
    assert!(!crud.new_product_enabled);
    assert!(crud.form.is_none());

    run(&mut s, "login admin");
    let screen = run(&mut s, "new");
    assert!(screen.crud.unwrap().form.is_some());
}

#[test]
fn sessions_share_one_catalog() {
    let config = AppConfig::default();
    let catalog = Arc::new(config.seed.build_catalog().unwrap());
    let categories = config.seed.categories.clone();

    let mut a = Session::with_catalog(&config, Arc::clone(&catalog), categories.clone()).unwrap();
    let mut b = Session::with_catalog(&config, Arc::clone(&catalog), categories).unwrap();

    run(&mut a, "delete 1");
    let err = b
        .dispatch(UiCommand::Crud {
            command: CrudCommand::RowSelected(ProductId::new(1)),
        })
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    assert_eq!(catalog.len(), 5);

    // Gates are per session.
    click(&mut a, NavCommand::LogIn);
    assert!(a.gate().is_open());
    assert!(!b.gate().is_open());
}

#[test]
fn empty_catalog_starts_ids_at_one() {
    let config = AppConfig::default();
    let mut s = Session::with_catalog(&config, Arc::new(ProductCatalog::new()), Vec::new()).unwrap();
    let screen = run(&mut s, "new");
    let mut form = screen.crud.and_then(|c| c.form).unwrap();
    form.product_name = "First".to_string();
    let screen = s
        .dispatch(UiCommand::Crud {
            command: CrudCommand::Save(form),
        })
        .unwrap();
    assert_eq!(screen.crud.unwrap().selected_id, Some(ProductId::new(1)));
}
