//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use editables_lib::ContentFormat;
use editables_lib::FieldOptions;
use editables_lib::FieldType;
use editables_lib::HttpMethod;
use simplelog::LevelFilter;

/// Fetch JSON from an endpoint and print it as a table.
#[derive(Debug, Parser)]
#[command(name = "editables", version)]
pub struct Args {
    /// Binding configuration file (JSON). Defaults to `binding.json` in the
    /// config directory when no `--source` is given.
    pub config: Option<PathBuf>,

    /// Endpoint URL.
    #[arg(long)]
    pub source: Option<String>,

    /// Property holding the records in the response.
    #[arg(long)]
    pub prop: Option<String>,

    /// Field to display, as `name` or `name:type` (repeatable).
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<FieldOptions>,

    /// Property used as the row identity.
    #[arg(long)]
    pub row_id: Option<String>,

    /// Request method.
    #[arg(long, value_parser = parse_method)]
    pub method: Option<HttpMethod>,

    /// POST body as a JSON object.
    #[arg(long)]
    pub body: Option<String>,

    /// POST body encoding.
    #[arg(long, value_parser = parse_format)]
    pub format: Option<ContentFormat>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_field(s: &str) -> Result<FieldOptions, String> {
    let (name, field_type) = match s.split_once(':') {
        Some((name, "string")) => (name, FieldType::String),
        Some((name, "number")) => (name, FieldType::Number),
        Some((_, other)) => return Err(format!("unknown field type '{}'", other)),
        None => (s, FieldType::String),
    };
    Ok(FieldOptions::named(name).field_type(field_type))
}

fn parse_method(s: &str) -> Result<HttpMethod, String> {
    match s.to_ascii_uppercase().as_str() {
        "GET" => Ok(HttpMethod::Get),
        "POST" => Ok(HttpMethod::Post),
        other => Err(format!("unsupported method '{}'", other)),
    }
}

fn parse_format(s: &str) -> Result<ContentFormat, String> {
    match s {
        "json" => Ok(ContentFormat::Json),
        "form-data" => Ok(ContentFormat::FormData),
        other => Err(format!("unknown format '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("title").unwrap(),
            FieldOptions::named("title").field_type(FieldType::String)
        );
        assert_eq!(
            parse_field("price:number").unwrap().field_type,
            Some(FieldType::Number)
        );
        assert!(parse_field("when:date").is_err());
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("post").unwrap(), HttpMethod::Post);
        assert!(parse_method("PUT").is_err());
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "editables",
            "--source",
            "https://dummyjson.com/products",
            "--prop",
            "products",
            "--field",
            "title",
            "--field",
            "price:number",
            "--row-id",
            "id",
        ])
        .unwrap();

        assert!(args.config.is_none());
        assert_eq!(args.fields.len(), 2);
        assert_eq!(args.row_id.as_deref(), Some("id"));
        assert_eq!(args.log_level, LevelFilter::Warn);
    }
}
