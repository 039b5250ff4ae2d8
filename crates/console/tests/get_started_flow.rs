use std::cell::RefCell;

use idconsole_console::{
    ActionContext, Application, ApplicationClient, ConsoleConfig, DemoAppLoader, GetStartedInputs,
    GetStartedItemId, GetStartedMemo, InMemorySettingsService, LinkOpener, LinkTarget, Navigator,
    RequestError, SettingsService, Theme,
};
use idconsole_core::Language;
use serde_json::json;

#[derive(Default)]
struct Browser {
    routes: RefCell<Vec<String>>,
    tabs: RefCell<Vec<(String, LinkTarget)>>,
}

impl Navigator for Browser {
    fn navigate(&self, path: &str) {
        self.routes.borrow_mut().push(path.to_string());
    }
}

impl LinkOpener for Browser {
    fn open(&self, url: &str, target: LinkTarget) {
        self.tabs.borrow_mut().push((url.to_string(), target));
    }
}

struct Applications(Result<Application, RequestError>);

impl ApplicationClient for Applications {
    fn fetch_application(&self, _id: &str) -> Result<Application, RequestError> {
        self.0.clone()
    }
}

fn seeded_settings() -> InMemorySettingsService {
    InMemorySettingsService::seeded(&json!({
        "id": "default",
        "adminConsole": {
            "language": "de",
            "appearanceMode": "dark",
            "applicationCreated": true,
        },
    }))
    .unwrap()
}

fn demo_client() -> Applications {
    Applications(
        serde_json::from_value(json!({ "id": "demo-app", "name": "Live Preview", "type": "SPA" }))
            .map_err(|e| RequestError::network(e.to_string())),
    )
}

#[test]
fn clicking_cards_updates_the_checklist() {
    idconsole_observability::init();

    let config = ConsoleConfig::default();
    let settings = seeded_settings();
    let browser = Browser::default();
    let loader = config.demo_app_loader();
    let mut memo = GetStartedMemo::new(config.clone());

    let snapshot = settings.settings().unwrap();
    let inputs = GetStartedInputs {
        theme: snapshot.appearance_mode.resolve(false),
        language: snapshot.language.clone(),
        settings: Some(snapshot),
        demo_app: loader.load(&demo_client(), &config.demo_app_id),
    };

    let before = memo.get(&inputs).clone();
    assert_eq!(before.total_count, 6);
    assert_eq!(before.completed_count, 1);
    assert!(!before.is_loading);
    assert_eq!(before.items[0].icon.file_name(), "check-demo-dark.svg");

    let ctx = ActionContext {
        navigator: &browser,
        links: &browser,
        settings: &settings,
    };
    for item in &before.items {
        item.click(&ctx);
    }

    assert_eq!(
        *browser.routes.borrow(),
        [
            "/applications/create",
            "/sign-in-experience",
            "/connectors",
            "/connectors/social",
        ]
    );
    assert_eq!(
        *browser.tabs.borrow(),
        [
            ("/demo-app".to_string(), LinkTarget::NewContext),
            (
                "https://docs.logto.io/de/docs/tutorials/get-started/further-readings".to_string(),
                LinkTarget::NewContext
            ),
        ]
    );

    let refreshed = GetStartedInputs {
        settings: settings.settings(),
        ..inputs
    };
    let after = memo.get(&refreshed);
    assert_eq!(after.completed_count, 3);
    let done: Vec<_> = after
        .items
        .iter()
        .filter(|item| item.is_complete)
        .map(|item| item.id)
        .collect();
    assert_eq!(
        done,
        [
            GetStartedItemId::CheckDemo,
            GetStartedItemId::CreateApplication,
            GetStartedItemId::CheckFurtherReadings,
        ]
    );
    assert_eq!(memo.derivations(), 2);
}

#[test]
fn missing_demo_app_shrinks_the_checklist() {
    let config = ConsoleConfig::default();
    let lookup = DemoAppLoader::new(3).load(
        &Applications(Err(RequestError::with_status(404, "application not found"))),
        &config.demo_app_id,
    );

    let mut memo = GetStartedMemo::new(config);
    let meta = memo.get(&GetStartedInputs {
        settings: None,
        theme: Theme::Light,
        language: Language::english(),
        demo_app: lookup,
    });

    assert_eq!(meta.total_count, 5);
    assert_eq!(meta.completed_count, 0);
    assert!(!meta.is_loading);
    assert!(meta.items.iter().all(|item| item.id != GetStartedItemId::CheckDemo));
}

#[test]
fn flaky_api_keeps_the_demo_card() {
    let config = ConsoleConfig::default();
    let lookup = DemoAppLoader::new(2).load(
        &Applications(Err(RequestError::with_status(503, "unavailable"))),
        &config.demo_app_id,
    );

    let mut memo = GetStartedMemo::new(config);
    let meta = memo.get(&GetStartedInputs {
        demo_app: lookup,
        ..GetStartedInputs::default()
    });

    assert_eq!(meta.total_count, 6);
    assert!(meta.is_loading);
    assert_eq!(meta.items[0].id, GetStartedItemId::CheckDemo);
}
