//! Binding configuration: file loading and command-line overrides.

use std::path::Path;
use std::path::PathBuf;

use editables_lib::error::ConfigError;
use editables_lib::DataSrcInput;
use editables_lib::InitOptions;
use editables_lib::validator::type_name;
use serde_json::Value;
use thiserror::Error;

use crate::cli::Args;
use crate::paths;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("--body must be a JSON object: {0}")]
    Body(String),

    #[error("No binding configured: pass a config file or --source")]
    NoConfig,

    #[error("Failed to initialize logging: {0}")]
    Logger(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Resolves the binding options for this run.
///
/// An explicit config path must exist. Without one, `binding.json` in the
/// config directory is read if present, unless `--source` is given.
pub fn resolve(args: &Args) -> Result<InitOptions, CliError> {
    let base = match &args.config {
        Some(path) => read(path)?,
        None if args.source.is_some() => InitOptions {
            fields: Some(Vec::new()),
            ..InitOptions::default()
        },
        None => match paths::binding_config().filter(|path| path.exists()) {
            Some(path) => read(&path)?,
            None => return Err(CliError::NoConfig),
        },
    };
    apply_overrides(base, args)
}

fn read(path: &Path) -> Result<InitOptions, CliError> {
    log::info!("reading binding from {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Layers command-line flags over file options. Flags win.
fn apply_overrides(mut options: InitOptions, args: &Args) -> Result<InitOptions, CliError> {
    let body = match &args.body {
        Some(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Some(map),
            Ok(other) => return Err(CliError::Body(format!("got {}", type_name(&other)))),
            Err(e) => return Err(CliError::Body(e.to_string())),
        },
        None => None,
    };

    let touches_src = args.source.is_some()
        || args.prop.is_some()
        || args.method.is_some()
        || args.format.is_some()
        || body.is_some();

    if touches_src {
        let (mut source, mut method, mut prop, mut current_body, mut format) =
            match options.data_src.take() {
                Some(DataSrcInput::Endpoint(source)) => (Some(source), None, None, None, None),
                Some(DataSrcInput::Structured {
                    source,
                    method,
                    prop,
                    body,
                    format,
                }) => (source, method, prop, body, format),
                None => (None, None, None, None, None),
            };

        source = args.source.clone().or(source);
        method = args.method.or(method);
        prop = args.prop.clone().or(prop);
        current_body = body.or(current_body);
        format = args.format.or(format);

        options.data_src = Some(DataSrcInput::Structured {
            source,
            method,
            prop,
            body: current_body,
            format,
        });
    }

    if !args.fields.is_empty() {
        options.fields = Some(args.fields.clone());
    }

    if let Some(row_id) = &args.row_id {
        options.row_id = Some(row_id.clone());
    }

    Ok(options)
}
