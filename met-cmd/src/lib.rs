//! Command implementations for the portal CLI.
//!
//! Provides subcommands for fetching forecast series from the portal REST
//! API and inspecting the field catalog.

use clap::Subcommand;

pub mod query;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a forecast series from the portal and write it as CSV
    FetchSeries {
        /// Field code (see `list-fields`)
        #[arg(short, long)]
        field: String,

        /// Area code
        #[arg(short, long, default_value = "iberia")]
        area: String,

        /// Grid resolution
        #[arg(long, default_value = "0.05deg")]
        resolution: String,

        /// Model run reference time (RFC 3339); defaults to the latest synoptic run
        #[arg(long)]
        run: Option<String>,

        /// Output CSV path
        #[arg(short, long)]
        output: String,

        /// Portal API root
        #[arg(long, default_value = met_client::endpoints::DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// List the portal's field catalog
    ListFields,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::FetchSeries {
            field,
            area,
            resolution,
            run,
            output,
            base_url,
        } => {
            query::run_fetch_series(&field, &area, &resolution, run.as_deref(), &output, &base_url)
                .await
        }
        Command::ListFields => query::run_list_fields(),
    }
}
