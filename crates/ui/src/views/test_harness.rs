use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{CompletionListener, ProgressTracker, RegistrationService};
use storage::repository::Storage;
use tracker_core::model::{Catalog, Problem, ProblemId};

use crate::context::{UiApp, build_app_context};
use crate::toast::ToastHub;
use crate::views::{RegisterView, TrackerView};

#[derive(Clone)]
struct TestApp {
    tracker: Arc<ProgressTracker>,
    registration: Arc<RegistrationService>,
    toasts: Arc<ToastHub>,
}

impl UiApp for TestApp {
    fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }

    fn registration(&self) -> Arc<RegistrationService> {
        Arc::clone(&self.registration)
    }

    fn toasts(&self) -> Arc<ToastHub> {
        Arc::clone(&self.toasts)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Tracker,
    Register,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Tracker => rsx! { TrackerView {} },
        ViewKind::Register => rsx! { RegisterView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub tracker: Arc<ProgressTracker>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn catalog_of(ids: &[u64]) -> Arc<Catalog> {
    let problems = ids
        .iter()
        .map(|&id| {
            Problem::new(
                ProblemId::new(id),
                format!("Problem {id}"),
                format!("https://leetcode.com/problems/{id}/"),
                None,
                None,
            )
        })
        .collect();
    Arc::new(Catalog::new(problems).unwrap())
}

pub async fn setup_view_harness(view: ViewKind, catalog_ids: &[u64]) -> ViewHarness {
    setup_view_harness_with_storage(view, catalog_ids, Storage::in_memory()).await
}

pub async fn setup_view_harness_with_storage(
    view: ViewKind,
    catalog_ids: &[u64],
    storage: Storage,
) -> ViewHarness {
    let toasts = Arc::new(ToastHub::new());
    let tracker = Arc::new(
        ProgressTracker::load_with_listeners(
            catalog_of(catalog_ids),
            Arc::clone(&storage.progress),
            vec![Arc::clone(&toasts) as Arc<dyn CompletionListener>],
        )
        .await,
    );
    // never reached by the smoke tests; an unroutable port keeps it that way
    let registration = Arc::new(RegistrationService::new("http://127.0.0.1:9/intake"));

    let app = Arc::new(TestApp {
        tracker: Arc::clone(&tracker),
        registration,
        toasts,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        tracker,
    }
}
