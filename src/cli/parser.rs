use clap::{Parser, Subcommand};

/// Command-line interface definition for biotimeline
/// CLI application to render biographical timelines from Wikidata as SVG
#[derive(Parser)]
#[command(
    name = "biotimeline",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render biographical timelines (life events and notable works) from Wikidata as SVG",
    long_about = None
)]
pub struct Cli {
    /// Override the SPARQL endpoint URL (useful for tests or a private mirror)
    #[arg(global = true, long = "endpoint")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Fetch the timeline data for a subject and print it
    Query {
        /// Wikidata subject identifier (e.g. Q241897)
        subject: String,

        #[arg(
            long = "input",
            value_name = "FILE",
            help = "Read a saved SPARQL JSON response instead of querying the endpoint"
        )]
        input: Option<String>,

        #[arg(long = "json", help = "Print the normalized result as JSON")]
        json: bool,
    },

    /// Render the timeline chart for a subject to an SVG file
    Render {
        /// Wikidata subject identifier (e.g. Q241897)
        subject: String,

        #[arg(long, value_name = "FILE", help = "Output SVG file")]
        file: String,

        #[arg(
            long = "input",
            value_name = "FILE",
            help = "Read a saved SPARQL JSON response instead of querying the endpoint"
        )]
        input: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
