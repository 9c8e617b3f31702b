//! The per-entity view-model.
//!
//! Binds one gateway and the shared caches to UI-facing operations:
//! the table reads `visible_records`, the toolbar drives search and
//! filters, the drawer drives `submit`/`cancel_form`, row actions drive
//! selection and deletion.

use crate::notice::Notice;
use crate::panel::{transition, FormPanel, PanelEvent, PanelTransitionError};
use crate::view::{self, SortSpec};
use acadia_cache::{QueryCache, QueryKey, RecordCache, Snapshot};
use acadia_gateway::{Gateway, GatewayError};
use acadia_model::{FilterValue, ParentSpec, Record, Resource};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// What the table binds on each render.
#[derive(Debug, Clone)]
pub struct ViewState<E> {
    /// Filtered, sorted rows.
    pub rows: Vec<E>,
    /// Whether a load for the backing query is in flight.
    pub is_loading: bool,
    /// Most recent load failure, if the backing query is erroring.
    pub error: Option<Arc<GatewayError>>,
}

/// View-model for one entity collection.
pub struct EntityManager<E: Resource> {
    cache: QueryCache,
    records: RecordCache,
    gateway: Arc<dyn Gateway<E>>,
    search_text: String,
    active_filters: IndexMap<&'static str, FilterValue>,
    sort: Option<SortSpec>,
    selected: Option<E>,
    form_panel: FormPanel,
    detail_open: bool,
    notices: Vec<Notice>,
}

impl<E: Resource> EntityManager<E> {
    /// Bind a manager to the shared caches and a gateway.
    #[must_use]
    pub fn new(cache: QueryCache, records: RecordCache, gateway: Arc<dyn Gateway<E>>) -> Self {
        Self {
            cache,
            records,
            gateway,
            search_text: String::new(),
            active_filters: IndexMap::new(),
            sort: None,
            selected: None,
            form_panel: FormPanel::Closed,
            detail_open: false,
            notices: Vec::new(),
        }
    }

    // ---- list view -------------------------------------------------

    /// The filtered, sorted table rows plus load state.
    pub async fn visible_records(&self) -> ViewState<E> {
        let snapshot = self.collection().await;
        let rows = snapshot
            .data
            .as_deref()
            .map(|rows| {
                view::visible(
                    rows,
                    &self.search_text,
                    &self.active_filters,
                    self.sort.as_ref(),
                )
            })
            .unwrap_or_default();
        ViewState {
            rows,
            is_loading: snapshot.is_loading,
            error: snapshot.error,
        }
    }

    /// The backing collection, parent-scoped when the parent-implying
    /// filter is active, resolved through the shared cache.
    pub async fn collection(&self) -> Snapshot<Vec<E>> {
        match self.parent_scope() {
            Some((parent, parent_id)) => {
                let key = QueryKey::parent_scoped(E::KIND, parent.kind, parent_id.clone());
                let gateway = Arc::clone(&self.gateway);
                self.cache
                    .fetch(&key, move || async move {
                        gateway.list_by_parent(&parent_id).await
                    })
                    .await
            }
            None => self.all_records().await,
        }
    }

    /// The whole collection under the unfiltered key, ignoring any
    /// active parent filter. The dashboard aggregates through this.
    pub async fn all_records(&self) -> Snapshot<Vec<E>> {
        let key = QueryKey::collection(E::KIND);
        let gateway = Arc::clone(&self.gateway);
        self.cache
            .fetch(&key, move || async move { gateway.list_all().await })
            .await
    }

    fn parent_scope(&self) -> Option<(ParentSpec, String)> {
        let parent = E::PARENT?;
        let value = self.active_filters.get(parent.filter)?;
        Some((parent, value.as_text()?.to_string()))
    }

    /// One record for the detail panel, served through the record cache.
    pub async fn detail_record(&self, id: &str) -> Result<E, GatewayError> {
        let gateway = Arc::clone(&self.gateway);
        let id_owned = id.to_string();
        self.records
            .get_or_load(id, || async move { gateway.get_by_id(&id_owned).await })
            .await
    }

    // ---- search / filters / sort ----------------------------------

    /// Set the search box text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Current search text.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Set or clear one named filter.
    pub fn set_filter(&mut self, name: &'static str, value: Option<FilterValue>) {
        match value {
            Some(value) => {
                self.active_filters.insert(name, value);
            }
            None => {
                self.active_filters.shift_remove(name);
            }
        }
    }

    /// Set or clear a hierarchical filter and reset every filter after
    /// it in the entity's chain, since the prior selections may no
    /// longer be valid under the new parent.
    pub fn change_parent_filter(&mut self, name: &'static str, value: Option<FilterValue>) {
        self.set_filter(name, value);
        if let Some(position) = E::FILTER_CHAIN.iter().position(|f| *f == name) {
            for dependent in &E::FILTER_CHAIN[position + 1..] {
                self.active_filters.shift_remove(dependent);
            }
        }
    }

    /// Active filters, in the order they were applied.
    #[must_use]
    pub fn active_filters(&self) -> &IndexMap<&'static str, FilterValue> {
        &self.active_filters
    }

    /// Set or clear the column sort.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    // ---- selection / panels ---------------------------------------

    /// Open the form panel for a new record.
    pub fn open_create(&mut self) -> Result<(), PanelTransitionError> {
        self.form_panel = transition(self.form_panel, PanelEvent::OpenCreate)?;
        self.selected = None;
        Ok(())
    }

    /// Select a record and open the form panel on it.
    pub fn select_for_edit(&mut self, record: E) -> Result<(), PanelTransitionError> {
        self.form_panel = transition(self.form_panel, PanelEvent::OpenEdit)?;
        self.selected = Some(record);
        Ok(())
    }

    /// Select a record and open the detail panel on it.
    pub fn select_for_view(&mut self, record: E) {
        self.selected = Some(record);
        self.detail_open = true;
    }

    /// Close the form panel without submitting.
    pub fn cancel_form(&mut self) -> Result<(), PanelTransitionError> {
        self.form_panel = transition(self.form_panel, PanelEvent::Cancel)?;
        self.selected = None;
        Ok(())
    }

    /// Close the detail panel. The selection is kept so "edit" can be
    /// offered from the closing view.
    pub fn close_detail(&mut self) {
        self.detail_open = false;
    }

    /// Currently selected record, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&E> {
        self.selected.as_ref()
    }

    /// Form panel state.
    #[must_use]
    pub fn form_panel(&self) -> FormPanel {
        self.form_panel
    }

    /// Whether the detail panel is open.
    #[must_use]
    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    // ---- mutations -------------------------------------------------

    /// Submit the form: update when a record is selected, create
    /// otherwise. Absent payload fields are never serialized.
    ///
    /// On success the entity's whole cache namespace is invalidated,
    /// the panel closes, and the selection clears. On failure the panel
    /// stays open and the selection is kept so the user can correct and
    /// resubmit.
    pub async fn submit(&mut self, values: E::Payload) -> Result<E, GatewayError> {
        let editing = self.selected.as_ref().map(|record| record.id().to_string());
        let result = match &editing {
            Some(id) => self.gateway.update(id, &values).await,
            None => self.gateway.create(&values).await,
        };
        match result {
            Ok(saved) => {
                tracing::info!(kind = %E::KIND, id = saved.id(), editing = editing.is_some(), "record saved");
                self.cache.invalidate_kind(E::KIND);
                self.records.evict(E::KIND, saved.id()).await;
                self.form_panel = FormPanel::Closed;
                self.selected = None;
                let verb = if editing.is_some() { "updated" } else { "created" };
                self.notices
                    .push(Notice::success(format!("{} {} successfully", E::KIND, verb)));
                Ok(saved)
            }
            Err(err) => {
                tracing::warn!(kind = %E::KIND, error = %err, "submit failed");
                if err.is_not_found() {
                    // The selected record vanished under us; purge the
                    // stale reference from the listing.
                    self.cache.invalidate(&QueryKey::collection(E::KIND));
                }
                self.notices.push(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Delete a record by id.
    ///
    /// On success the entity's cache namespace is invalidated and, if
    /// the deleted record was selected, the selection clears and any
    /// panel showing it closes. On failure nothing else changes.
    pub async fn request_delete(&mut self, id: &str) -> Result<(), GatewayError> {
        match self.gateway.delete(id).await {
            Ok(()) => {
                tracing::info!(kind = %E::KIND, id, "record deleted");
                self.cache.invalidate_kind(E::KIND);
                self.records.evict(E::KIND, id).await;
                if self.selected.as_ref().is_some_and(|record| record.id() == id) {
                    self.selected = None;
                    self.form_panel = FormPanel::Closed;
                    self.detail_open = false;
                }
                self.notices
                    .push(Notice::success(format!("{} deleted successfully", E::KIND)));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(kind = %E::KIND, id, error = %err, "delete failed");
                if err.is_not_found() {
                    self.cache.invalidate(&QueryKey::collection(E::KIND));
                }
                self.notices.push(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    // ---- notices ---------------------------------------------------

    /// Take the queued notices for display.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl<E: Resource> fmt::Debug for EntityManager<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityManager")
            .field("kind", &E::KIND)
            .field("search_text", &self.search_text)
            .field("active_filters", &self.active_filters)
            .field("form_panel", &self.form_panel)
            .field("detail_open", &self.detail_open)
            .finish_non_exhaustive()
    }
}
