//! docql - run SQL over Coda tables
//!
//! # Usage
//!
//! ```bash
//! export CODA_API_TOKEN=...
//!
//! docql --doc AbCdEf --load Tasks --query 'SELECT COUNT(*) FROM Tasks' --output scalar
//! docql --doc AbCdEf --load 'Tasks=>T' --load 'People@XyZ=>P' \
//!     --query 'SELECT T.Name FROM T JOIN P ON T.Owner = P.Name WHERE P.Team = ?' \
//!     --value Platform --output json
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use docql::{
    source::{Coda, CodaConfig},
    Docql, OutputShape, QueryRequest, RequestContext, Value, DEFAULT_MAX_ROWS,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Run SQL over tables loaded from Coda docs
#[derive(Parser, Debug)]
#[command(name = "docql")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Doc that tables load from when a specifier has no `@doc`
    #[arg(long, env = "CODA_DOC_ID")]
    doc: String,

    /// Table specifier: `<table>[@<doc>][=><destination>]` (repeatable)
    #[arg(short = 'L', long = "load", value_name = "SPEC")]
    load: Vec<String>,

    /// SQL query to run
    #[arg(short, long)]
    query: String,

    /// Value bound to the next query placeholder (repeatable)
    #[arg(short = 'v', long = "value", value_name = "VALUE")]
    values: Vec<String>,

    /// Load lookup columns as referenced row IDs
    #[arg(long)]
    use_row_ids: bool,

    /// Output shape
    #[arg(short, long, value_enum, default_value_t = Format::Grid)]
    output: Format,

    /// Maximum number of rows loaded across all tables
    #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
    max_rows: u64,

    /// Caller timezone, forwarded to the source
    #[arg(long)]
    timezone: Option<String>,

    /// Coda API token
    #[arg(long, env = "CODA_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Coda API base URL
    #[arg(long, env = "CODA_API_URL")]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// First column of the first row
    Scalar,
    /// Tab separated rows
    Grid,
    /// JSON array of records
    Json,
    /// Synced table page
    Sync,
    /// Synced table schema, without loading rows
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let mut config = CodaConfig::default();
    if let Some(token) = cli.token {
        config = config.token(token);
    }
    if let Some(api_url) = cli.api_url {
        config = config.api_url(api_url);
    }

    let db = Docql::builder()
        .source(Coda::new(config)?)
        .max_rows(cli.max_rows)
        .build()?;

    let mut cx = RequestContext::new(cli.doc);
    if let Some(timezone) = cli.timezone {
        cx = cx.timezone(timezone);
    }

    let request = QueryRequest {
        load: cli.load,
        query: cli.query,
        values: cli.values,
        use_row_ids: cli.use_row_ids,
    };

    let res = run(&db, &cx, &request, cli.output).await;
    if let Err(err) = &res {
        if err.is_retryable() {
            tracing::warn!("request failed talking to Coda; retrying may succeed");
        }
    }

    println!("{}", res?);
    Ok(())
}

async fn run(
    db: &Docql,
    cx: &RequestContext,
    request: &QueryRequest,
    format: Format,
) -> docql::Result<String> {
    let shape = match format {
        Format::Schema => {
            let schema = db.sync_schema(cx, request).await?;
            return Ok(serde_json::to_string_pretty(&schema)?);
        }
        Format::Scalar => OutputShape::Scalar,
        Format::Grid => OutputShape::Grid,
        Format::Json => OutputShape::Json,
        Format::Sync => OutputShape::Sync,
    };

    Ok(match db.run(cx, request, shape).await? {
        docql::Output::Scalar(value) => match value {
            Value::Null => "NULL".to_string(),
            value => value.to_string(),
        },
        docql::Output::Grid(rows) => rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n"),
        docql::Output::Json(json) => json,
        docql::Output::Sync(page) => serde_json::to_string_pretty(&page)?,
    })
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}
