//! The binding engine

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Map;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ConfigError;
use crate::error::LoadError;
use crate::events::Event;
use crate::events::EventBus;
use crate::events::EventKind;
use crate::events::ListenerId;
use crate::field::Field;
use crate::http::HttpClient;
use crate::options::BindingOptions;
use crate::options::InitOptions;
use crate::payload::RawPayload;
use crate::projection::filter_fields;
use crate::projection::project;
use crate::source::HttpMethod;
use crate::table::ColumnSpec;
use crate::table::Document;
use crate::table::Row;
use crate::table::TableSink;
use crate::validator::can_be_stringified;
use crate::validator::display_value;
use crate::validator::exists;

/// Where an instance is in its one-shot load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Built, `load()` not called yet.
    Constructed,
    /// Waiting on the network.
    Loading,
    /// Rows were rendered. Terminal.
    Rendered,
    /// A failure notification was emitted. Terminal.
    Failed,
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rendered | Self::Failed)
    }
}

/// Binds a remote data source to a table surface.
///
/// Construction only validates; nothing is fetched until [`load`](Self::load)
/// is awaited. Each instance loads at most once and reports the outcome
/// through exactly one notification.
///
/// # Example
///
/// ```ignore
/// use editables_lib::{BindingOptions, DataSrcSpec, Editables, EventKind, Field};
/// use editables_lib::table::{Document, MemoryTable};
///
/// let table = MemoryTable::new();
/// let mut document = Document::new();
/// document.add_table("my-table", table.clone());
///
/// let source = DataSrcSpec::get("https://dummyjson.com/products").prop("products");
/// let options = BindingOptions::new(source)
///     .field(Field::named("title")?)
///     .row_id("id");
///
/// let mut editables = Editables::new(&document, "my-table", options)?;
/// editables.on(EventKind::DataLoaded, |event| println!("{:?}", event));
/// editables.load().await;
///
/// println!("{}", table.to_text());
/// ```
pub struct Editables {
    id: Uuid,
    target: String,
    options: BindingOptions,
    fields: Vec<Field>,
    field_index: HashMap<String, usize>,
    table: Arc<dyn TableSink>,
    client: HttpClient,
    events: EventBus,
    data: Option<RawPayload>,
    state: LoadState,
}

impl Editables {
    /// Creates a binding for the table registered as `target` in `document`.
    ///
    /// Fails with [`ConfigError::InvalidTarget`] when `target` is not a table
    /// and with [`ConfigError::InvalidOptions`] when `options` do not respect
    /// the schema.
    pub fn new(
        document: &Document,
        target: &str,
        options: BindingOptions,
    ) -> Result<Self, ConfigError> {
        let table = document.resolve_table(target)?;
        options.validate()?;

        let client = HttpClient::new(options.data_src.source())?;
        let (fields, field_index) = index_fields(&options.fields);

        let id = Uuid::new_v4();
        log::debug!(
            "editables {}: bound '{}' to {} {} with {} field(s)",
            id,
            target,
            options.data_src.method().as_str(),
            options.data_src.source(),
            fields.len()
        );

        Ok(Self {
            id,
            target: target.to_string(),
            options,
            fields,
            field_index,
            table,
            client,
            events: EventBus::new(),
            data: None,
            state: LoadState::Constructed,
        })
    }

    /// Creates a binding from unvalidated options, e.g. read from a file.
    pub fn from_init(
        document: &Document,
        target: &str,
        options: InitOptions,
    ) -> Result<Self, ConfigError> {
        Self::new(document, target, BindingOptions::try_from(options)?)
    }

    /// Replaces the HTTP stack used for the fetch.
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.client = HttpClient::builder()
            .url(self.client.base_url().clone())
            .http_client(http_client)
            .build();
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Unique identifier of this instance, used in log output.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Identity of the table this instance renders into.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn options(&self) -> &BindingOptions {
        &self.options
    }

    /// Declared fields, unique by name, in column order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.field_index.get(name).map(|&i| &self.fields[i])
    }

    /// The payload fetched by the last load, before extraction.
    pub fn data(&self) -> Option<&RawPayload> {
        self.data.as_ref()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn table(&self) -> &Arc<dyn TableSink> {
        &self.table
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Registers a listener for one notification channel.
    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.events.on(kind, listener)
    }

    /// Unregisters a listener.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    // =========================================================================
    // Load sequence
    // =========================================================================

    /// Fetches, projects and renders the data, then reports the outcome.
    ///
    /// Failures never escape: they are emitted as `http-error` or `error`
    /// and the instance ends in [`LoadState::Failed`]. Calling this again
    /// after a terminal state returns that state without fetching.
    ///
    /// The table is asked to [`check`](TableSink::check) the update before
    /// `data-loaded` is emitted, and the update itself is applied in one
    /// [`render`](TableSink::render) call. A sink that passes the check and
    /// then refuses the render is the only case where `error` follows
    /// `data-loaded`; the sink's contract leaves the table unchanged then.
    pub async fn load(&mut self) -> LoadState {
        if self.state != LoadState::Constructed {
            log::warn!(
                "editables {}: load() called in state {:?}, ignoring",
                self.id,
                self.state
            );
            return self.state;
        }

        self.state = LoadState::Loading;
        self.state = match self.run().await {
            Ok(rows) => {
                log::debug!("editables {}: rendered {} row(s)", self.id, rows);
                LoadState::Rendered
            }
            Err(err) => {
                log::debug!("editables {}: load failed: {}", self.id, err);
                self.events.emit(&Event::from(err));
                LoadState::Failed
            }
        };
        self.state
    }

    async fn run(&mut self) -> Result<usize, LoadError> {
        let value = self.fetch().await?;

        let raw = RawPayload::from_value(value)?.ensure_not_empty()?;
        log::debug!("editables {}: fetched {} record(s)", self.id, raw.len());
        self.data = Some(raw.clone());

        let extracted = project(raw, self.options.data_src.prop())?.ensure_not_empty()?;
        let rows = self.build_rows(&extracted)?;
        let columns = self.columns();
        let count = rows.len();
        self.table.check(columns.as_deref(), &rows)?;

        self.events.emit(&Event::DataLoaded { data: extracted });
        self.table.render(columns, rows)?;
        Ok(count)
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        let src = &self.options.data_src;
        log::debug!(
            "editables {}: {} {}",
            self.id,
            src.method().as_str(),
            self.client.base_url()
        );

        let value: Value = match src.method() {
            HttpMethod::Get => self.client.get().await?,
            HttpMethod::Post => {
                let empty = Map::new();
                let body = src.body().unwrap_or(&empty);
                self.client.post(body, src.format()).await?
            }
        };
        Ok(value)
    }

    /// Turns the extracted payload into display rows.
    ///
    /// Every record is checked before anything is rendered, so an invalid row
    /// identity leaves the table untouched.
    fn build_rows(&self, payload: &RawPayload) -> Result<Vec<Row>, LoadError> {
        let row_id = self.options.row_id.as_deref();
        let keys: Vec<&str> = self
            .fields
            .iter()
            .map(Field::name)
            .chain(row_id)
            .collect();

        match payload {
            RawPayload::Single(record) => {
                let filtered = filter_fields(record, keys.iter().copied());
                Ok(vec![Row::new(self.cells(&filtered))])
            }
            RawPayload::Many(records) => records
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    let filtered = filter_fields(record, keys.iter().copied());
                    let cells = self.cells(&filtered);
                    match row_id {
                        Some(row_id) => {
                            let value = filtered.get(row_id);
                            match value {
                                Some(v) if exists(value) && can_be_stringified(v) => {
                                    Ok(Row::with_id(display_value(v), cells))
                                }
                                _ => Err(LoadError::invalid_row_id(row_id, index)),
                            }
                        }
                        None => Ok(Row::new(cells)),
                    }
                })
                .collect(),
        }
    }

    fn cells(&self, record: &Map<String, Value>) -> Vec<String> {
        self.fields
            .iter()
            .map(|field| record.get(field.name()).map(display_value).unwrap_or_default())
            .collect()
    }

    /// Column headers for the declared fields, or `None` to leave the
    /// surface's columns alone.
    fn columns(&self) -> Option<Vec<ColumnSpec>> {
        if self.fields.is_empty() {
            return None;
        }
        Some(self.fields.iter().map(ColumnSpec::from).collect())
    }
}

impl std::fmt::Debug for Editables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editables")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// Deduplicates fields by name. A later field replaces an earlier one with
/// the same name and takes its position.
fn index_fields(declared: &[Field]) -> (Vec<Field>, HashMap<String, usize>) {
    let mut fields: Vec<Field> = Vec::with_capacity(declared.len());
    let mut index = HashMap::with_capacity(declared.len());
    for field in declared {
        match index.get(field.name()) {
            Some(&i) => fields[i] = field.clone(),
            None => {
                index.insert(field.name().to_string(), fields.len());
                fields.push(field.clone());
            }
        }
    }
    (fields, index)
}
