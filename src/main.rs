use anyhow::Result;
use clap::{Parser, ValueEnum};

use staffgraph::api;
use staffgraph::query::{department_query, employee_query, parse_params, DEPARTMENT_FIELDS, EMPLOYEE_FIELDS};
use staffgraph::query::builder::SEARCH_PARAM;

#[derive(Parser)]
#[clap(version, about = "Employee / department graph service")]
enum Cli {
    /// Start the HTTP service
    Serve {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
    /// Create the full-text index and constraints, then exit
    InitSchema {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
    /// Print the statement a listing request would run, without touching the store
    Explain {
        #[clap(value_enum)]
        target: Target,
        /// Query string, e.g. "lastName=Smith,asc&firstName=,desc"
        #[clap(default_value = "")]
        query: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Employees,
    Departments,
}

#[tokio::main]
async fn main() -> Result<()> {
    match Cli::parse() {
        Cli::Serve { config } => api::start_service(config).await?,
        Cli::InitSchema { config } => api::init_schema(config).await?,
        Cli::Explain { target, query } => explain(target, &query)?,
    }
    Ok(())
}

/// Decodes like the HTTP `Query` extractor: percent-escapes and `+` as space.
fn parse_query_string(query: &str) -> Result<Vec<(String, String)>> {
    Ok(serde_urlencoded::from_str(query.trim_start_matches('?'))?)
}

fn explain(target: Target, query: &str) -> Result<()> {
    let params = parse_query_string(query)?;

    let statement = match target {
        Target::Employees => {
            let spec = parse_params(&params, &EMPLOYEE_FIELDS)?;
            let search = params
                .iter()
                .find(|(name, _)| name == SEARCH_PARAM)
                .map(|(_, value)| value.as_str());
            employee_query(&spec, search)
        }
        Target::Departments => {
            let spec = parse_params(&params, &DEPARTMENT_FIELDS)?;
            department_query(&spec)
        }
    };

    println!("{}", statement);
    Ok(())
}
