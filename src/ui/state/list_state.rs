use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::entities::page::{FetchMode, Pagination};
use crate::domain::entities::query::{QueryState, Selector};
use crate::domain::entities::record::Record;
use crate::usecase::ports::source::RecordSource;
use crate::usecase::services::fetcher::{run_fetch, FetchRequest};
use crate::usecase::services::list_query::{Completion, ListQueryController, Phase};

/// Handle a list screen uses to read and drive its [`ListQueryController`].
pub struct ListQuery<R: Record> {
    controller: Signal<ListQueryController<R>>,
    source: Signal<Rc<dyn RecordSource<R>>>,
}

impl<R: Record> Clone for ListQuery<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record> Copy for ListQuery<R> {}

impl<R: Record> PartialEq for ListQuery<R> {
    fn eq(&self, other: &Self) -> bool {
        self.controller == other.controller && self.source == other.source
    }
}

impl<R: Record> ListQuery<R> {
    pub fn displayed(&self) -> Vec<R> {
        self.controller.read().displayed()
    }

    pub fn pagination(&self) -> Pagination {
        *self.controller.read().pagination()
    }

    pub fn query(&self) -> QueryState {
        self.controller.read().query().clone()
    }

    pub fn phase(&self) -> Phase {
        self.controller.read().phase()
    }

    pub fn mode(&self) -> FetchMode {
        self.controller.read().mode()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.read().is_loading()
    }

    pub fn error_message(&self) -> Option<String> {
        self.controller.read().error().map(|err| err.to_string())
    }

    pub fn mount(mut self, deep_link_page: Option<usize>) {
        let request = self.controller.write().mount(deep_link_page);
        self.run(request);
    }

    pub fn set_search_term(mut self, term: String) {
        let request = self.controller.write().set_search_term(term);
        self.dispatch(request);
    }

    pub fn set_filter(mut self, name: &str, value: Option<f64>) {
        let request = self.controller.write().set_filter(name, value);
        self.dispatch(request);
    }

    pub fn set_status(mut self, status: Selector) {
        let request = self.controller.write().set_status(status);
        self.dispatch(request);
    }

    pub fn clear_filters(mut self) {
        let request = self.controller.write().clear_filters();
        self.dispatch(request);
    }

    pub fn set_page(mut self, page: usize) {
        let request = self.controller.write().set_page(page);
        self.dispatch(request);
    }

    pub fn set_page_size(mut self, page_size: usize) {
        let request = self.controller.write().set_page_size(page_size);
        self.dispatch(request);
    }

    pub fn load_more(mut self) {
        let request = self.controller.write().load_more();
        self.dispatch(request);
    }

    pub fn retry(mut self) {
        let request = self.controller.write().retry();
        self.dispatch(request);
    }

    pub fn refresh(mut self) {
        let request = self.controller.write().refresh();
        self.run(request);
    }

    fn dispatch(self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            self.run(request);
        }
    }

    fn run(self, request: FetchRequest) {
        let source = self.source.peek().clone();
        let mut controller = self.controller;
        spawn(async move {
            let response = run_fetch(source.as_ref(), &request).await;
            let completion = controller.write().complete(response);
            if let Completion::Refetch(request) = completion {
                self.run(request);
            }
        });
    }
}

/// Creates the controller for a list screen and issues its first fetch after mount.
pub fn use_list_query<R: Record>(
    source: Rc<dyn RecordSource<R>>,
    mode: FetchMode,
    page_size: usize,
    scope: Vec<(String, String)>,
    deep_link_page: Option<usize>,
) -> ListQuery<R> {
    let controller = use_signal(move || {
        scope
            .into_iter()
            .fold(ListQueryController::new(mode, page_size), |controller, (key, value)| {
                controller.with_scope(&key, value)
            })
    });
    let source = use_signal(move || source);
    let list = ListQuery { controller, source };

    use_effect(move || list.mount(deep_link_page));

    list
}
