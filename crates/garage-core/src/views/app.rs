use garage_protocol::{CarFilter, CarId, ListQuery};
use tracing::info;

use super::form::{FieldEdit, FormMode, FormView, SubmitOutcome};
use super::list::ListView;
use super::route::Route;
use crate::config::GarageConfig;
use crate::gateway::{CarGateway, GatewayError, HttpGateway, TrackedGateway};
use crate::shell::Shell;
use crate::state::CarStore;

#[derive(Debug)]
pub enum ActiveView {
    List(ListView),
    Form(FormView),
}

/// Root of the client: owns the shell, the store and the current view.
///
/// Every backend call made through the app raises the shell's busy flag.
pub struct App<G> {
    shell: Shell,
    store: CarStore<TrackedGateway<G>>,
    route: Route,
    view: ActiveView,
}

impl App<HttpGateway> {
    /// Build an app talking HTTP to the backend named in `config`.
    pub fn from_config(config: &GarageConfig) -> Result<Self, GatewayError> {
        let gateway = HttpGateway::new(&config.api)?;
        Ok(Self::new(gateway, Shell::from_config(&config.ui)))
    }
}

impl<G: CarGateway> App<G> {
    /// The app starts on an unloaded list view; call [`navigate`](Self::navigate)
    /// to fetch.
    pub fn new(gateway: G, shell: Shell) -> Self {
        let tracked = TrackedGateway::new(gateway, shell.busy().clone());
        Self {
            view: ActiveView::List(ListView::new(shell.clone())),
            store: CarStore::new(tracked),
            route: Route::List,
            shell,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn list_view(&self) -> Option<&ListView> {
        match &self.view {
            ActiveView::List(list) => Some(list),
            ActiveView::Form(_) => None,
        }
    }

    pub fn form_view(&self) -> Option<&FormView> {
        match &self.view {
            ActiveView::Form(form) => Some(form),
            ActiveView::List(_) => None,
        }
    }

    pub fn form_view_mut(&mut self) -> Option<&mut FormView> {
        match &mut self.view {
            ActiveView::Form(form) => Some(form),
            ActiveView::List(_) => None,
        }
    }

    /// Replace the current view with a fresh one for `route` and load it.
    ///
    /// The list view always starts from the default filter.
    pub async fn navigate(&mut self, route: Route) {
        info!(event = "ui.app.navigate_started", from = %self.route, to = %route);

        self.route = route;
        self.view = match route {
            Route::List => ActiveView::List(ListView::new(self.shell.clone())),
            Route::Add => ActiveView::Form(FormView::new(self.shell.clone(), FormMode::Create)),
            Route::Edit(id) => {
                ActiveView::Form(FormView::new(self.shell.clone(), FormMode::Edit(id)))
            }
        };

        match &mut self.view {
            ActiveView::List(list) => list.load(&mut self.store).await,
            ActiveView::Form(form) => form.load(&mut self.store).await,
        }

        info!(event = "ui.app.navigate_completed", route = %route);
    }

    /// Submit the active form, moving to the list on success.
    ///
    /// Returns `None` when no form is shown.
    pub async fn submit_form(&mut self) -> Option<SubmitOutcome> {
        let ActiveView::Form(form) = &mut self.view else {
            return None;
        };
        let outcome = form.submit(&mut self.store).await;
        if let SubmitOutcome::Saved { navigate_to, .. } = &outcome {
            self.navigate(*navigate_to).await;
        }
        Some(outcome)
    }

    /// Apply a field edit to the active form. Returns false when no form is shown.
    pub fn edit_field(&mut self, edit: FieldEdit) -> bool {
        match &mut self.view {
            ActiveView::Form(form) => {
                form.apply(edit);
                true
            }
            ActiveView::List(_) => false,
        }
    }

    /// Change the list filter. Returns true if a reload was issued.
    pub async fn set_filter(&mut self, filter: CarFilter) -> bool {
        match &mut self.view {
            ActiveView::List(list) => list.set_filter(&mut self.store, filter).await,
            ActiveView::Form(_) => false,
        }
    }

    pub fn request_delete(&mut self, id: CarId) -> bool {
        match &mut self.view {
            ActiveView::List(list) => {
                list.request_delete(id);
                true
            }
            ActiveView::Form(_) => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        if let ActiveView::List(list) = &mut self.view {
            list.cancel_delete();
        }
    }

    /// Returns true if the pending record was deleted.
    pub async fn confirm_delete(&mut self) -> bool {
        match &mut self.view {
            ActiveView::List(list) => list.confirm_delete(&mut self.store).await,
            ActiveView::Form(_) => false,
        }
    }

    /// Show the list with explicit paging parameters.
    pub async fn show_list(&mut self, query: ListQuery) {
        self.route = Route::List;
        let mut list = ListView::with_query(self.shell.clone(), query);
        list.load(&mut self.store).await;
        self.view = ActiveView::List(list);
    }
}
